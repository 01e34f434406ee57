mod app;
mod cli;
mod config;
mod consts;
mod content;
mod core;
mod error;
mod output;
mod storage;
mod store;
mod utils;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use app::{CommandContext, run};
use cli::Cli;
use config::Config;
use error::AppError;
use output::NumberFormat;
use utils::Timezone;

fn init_logging(debug: bool) {
    let default_level = if debug { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("ecopledge={default_level}")));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn try_main(cli: &Cli, config: &Config) -> Result<(), AppError> {
    let timezone = Timezone::parse(cli.timezone.as_deref())?;
    let number_format = NumberFormat::from_locale(cli.locale.as_deref())?;
    run(&CommandContext {
        cli,
        config,
        timezone,
        number_format,
    })
}

fn main() {
    let config = Config::load();
    let cli = Cli::parse().with_config(&config);

    init_logging(cli.debug);
    if let Some(path) = &config.source {
        tracing::debug!("Loaded config from {}", path.display());
    }

    let result = try_main(&cli, &config);

    if let Err(e) = result {
        eprintln!("{e}");
        std::process::exit(1);
    }
}
