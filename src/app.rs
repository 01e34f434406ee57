use std::path::PathBuf;

use chrono::Utc;

use crate::cli::{Cli, Commands};
use crate::config::{Config, default_data_dir};
use crate::content::{TOPIC_SLUGS, quote_or_default, rotation_index, tip_at, topic_detail};
use crate::core::build_leaderboard;
use crate::error::{AppError, StorageError};
use crate::output::{
    HistoryOptions, LeaderboardOptions, NumberFormat, output_history_json,
    output_leaderboard_json, pledge_confirmation, render_counter, render_history_table,
    render_leaderboard_lines, render_leaderboard_table, render_tip_list, render_topic,
};
use crate::storage::{self, Storage};
use crate::store::PledgeStore;
use crate::utils::Timezone;

pub(crate) struct CommandContext<'a> {
    pub(crate) cli: &'a Cli,
    pub(crate) config: &'a Config,
    pub(crate) timezone: Timezone,
    pub(crate) number_format: NumberFormat,
}

impl CommandContext<'_> {
    fn data_dir(&self) -> Result<PathBuf, AppError> {
        self.cli
            .data_dir
            .clone()
            .or_else(default_data_dir)
            .ok_or(AppError::NoDataDir)
    }

    fn open_store(&self) -> Result<PledgeStore<Box<dyn Storage>>, AppError> {
        let dir = self.data_dir()?;
        tracing::debug!(dir = %dir.display(), backend = ?self.cli.backend(), "opening ledger");
        let storage = storage::open(self.cli.backend(), &dir)?;
        Ok(PledgeStore::new(storage))
    }

    fn leaderboard_options(&self, limit: Option<usize>) -> LeaderboardOptions {
        LeaderboardOptions {
            use_color: self.cli.use_color(),
            limit: limit.or(self.config.limit),
            number_format: self.number_format,
        }
    }
}

fn to_json_error(e: serde_json::Error) -> AppError {
    StorageError::Json(e).into()
}

fn handle_pledge(
    ctx: &CommandContext<'_>,
    name: &str,
    action: &str,
    why: Option<&str>,
) -> Result<(), AppError> {
    let store = ctx.open_store()?;
    let pledge = store.append(name, action, why)?;
    let entries = build_leaderboard(&store.load());

    if ctx.cli.json {
        let json = serde_json::json!({
            "pledge": pledge,
            "leaderboard": entries,
        });
        let text = serde_json::to_string_pretty(&json).map_err(to_json_error)?;
        println!("{text}");
    } else {
        println!("{}", pledge_confirmation(&pledge));
        println!("{}", render_leaderboard_table(&entries, ctx.leaderboard_options(None)));
    }
    Ok(())
}

fn handle_leaderboard(
    ctx: &CommandContext<'_>,
    limit: Option<usize>,
    plain: bool,
) -> Result<(), AppError> {
    let store = ctx.open_store()?;
    let entries = build_leaderboard(&store.load());
    let options = ctx.leaderboard_options(limit);

    if ctx.cli.json {
        let json = output_leaderboard_json(&entries, options.limit).map_err(to_json_error)?;
        println!("{json}");
    } else if plain {
        println!("{}", render_leaderboard_lines(&entries, options.limit));
    } else {
        println!("{}", render_leaderboard_table(&entries, options));
    }
    Ok(())
}

fn handle_history(ctx: &CommandContext<'_>) -> Result<(), AppError> {
    let store = ctx.open_store()?;
    let ledger = store.load();

    if ctx.cli.json {
        let json = output_history_json(&ledger).map_err(to_json_error)?;
        println!("{json}");
    } else {
        println!(
            "{}",
            render_history_table(
                &ledger,
                HistoryOptions {
                    use_color: ctx.cli.use_color(),
                    timezone: ctx.timezone,
                },
            )
        );
    }
    Ok(())
}

fn handle_tip(ctx: &CommandContext<'_>, index: Option<usize>, quote: Option<&str>) {
    let text = match (quote, index) {
        (Some(q), _) => quote_or_default(Some(q)).to_string(),
        (None, Some(i)) => tip_at(i).to_string(),
        (None, None) => tip_at(rotation_index(Utc::now())).to_string(),
    };
    if ctx.cli.json {
        println!("{}", serde_json::json!({ "tip": text }));
    } else {
        println!("{text}");
    }
}

fn handle_topic(topic: &str) {
    let detail = topic_detail(topic);
    print!("{}", render_topic(detail));
    if !TOPIC_SLUGS.contains(&topic.trim()) {
        eprintln!("Known topics: {}", TOPIC_SLUGS.join(", "));
    }
}

/// Dispatch the parsed command
pub(crate) fn run(ctx: &CommandContext<'_>) -> Result<(), AppError> {
    let command = ctx
        .cli
        .command
        .clone()
        .unwrap_or_else(Commands::default_command);

    match command {
        Commands::Pledge { name, action, why } => {
            handle_pledge(ctx, &name, &action, why.as_deref())
        }
        Commands::Leaderboard { limit, plain } => handle_leaderboard(ctx, limit, plain),
        Commands::History => handle_history(ctx),
        Commands::Tip { index, quote } => {
            handle_tip(ctx, index, quote.as_deref());
            Ok(())
        }
        Commands::Tips => {
            println!("{}", render_tip_list());
            Ok(())
        }
        Commands::Topic { topic } => {
            handle_topic(&topic);
            Ok(())
        }
        Commands::Counter { target } => {
            println!("{}", render_counter(target, ctx.number_format));
            Ok(())
        }
    }
}
