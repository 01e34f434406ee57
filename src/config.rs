use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::consts::APP_DIR;
use crate::storage::Backend;

#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(rename_all = "lowercase")]
pub(crate) enum ConfigColorMode {
    Auto,
    Always,
    Never,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct Config {
    #[serde(default)]
    pub(crate) data_dir: Option<PathBuf>,
    #[serde(default)]
    pub(crate) backend: Option<Backend>,
    #[serde(default)]
    pub(crate) no_color: bool,
    #[serde(default)]
    pub(crate) debug: bool,
    #[serde(default)]
    pub(crate) color: Option<ConfigColorMode>,
    #[serde(default)]
    pub(crate) timezone: Option<String>,
    #[serde(default)]
    pub(crate) locale: Option<String>,
    #[serde(default)]
    pub(crate) limit: Option<usize>,
    /// File this config was read from
    #[serde(skip)]
    pub(crate) source: Option<PathBuf>,
}

impl Config {
    pub(crate) fn load() -> Self {
        for path in Self::get_config_paths() {
            if path.exists()
                && let Some(config) = Self::load_from(&path)
            {
                return config;
            }
        }

        Self::default()
    }

    fn load_from(path: &Path) -> Option<Self> {
        let content = fs::read_to_string(path).ok()?;
        match toml::from_str::<Config>(&content) {
            Ok(mut config) => {
                config.source = Some(path.to_path_buf());
                Some(config)
            }
            Err(e) => {
                eprintln!("Warning: Failed to parse {}: {}", path.display(), e);
                None
            }
        }
    }

    fn get_config_paths() -> Vec<PathBuf> {
        let mut paths = Vec::new();

        // 1. XDG config: ~/.config/ecopledge/config.toml
        if let Some(home) = dirs::home_dir() {
            paths.push(home.join(".config").join(APP_DIR).join("config.toml"));
        }

        // 2. Platform config dir (e.g. ~/Library/Application Support on macOS)
        if let Some(config_dir) = dirs::config_dir() {
            let platform_path = config_dir.join(APP_DIR).join("config.toml");
            if !paths.contains(&platform_path) {
                paths.push(platform_path);
            }
        }

        // 3. Home directory: ~/.ecopledge.toml
        if let Some(home) = dirs::home_dir() {
            paths.push(home.join(".ecopledge.toml"));
        }

        paths
    }
}

/// Default location of the ledger when neither CLI nor config names one
pub(crate) fn default_data_dir() -> Option<PathBuf> {
    dirs::data_dir().map(|d| d.join(APP_DIR))
}
