use std::path::PathBuf;

use log::warn;
use serde::Deserialize;

const CATALOG_ENV: &str = "STOREFORM_CATALOG";

#[derive(Debug, Deserialize, Default)]
pub struct Config {
    pub catalog_path: Option<PathBuf>,
}

fn config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|p| p.join("storeform").join("config.toml"))
}

fn default_catalog_path() -> PathBuf {
    dirs::data_dir()
        .map(|p| p.join("storeform").join("catalog.json"))
        .unwrap_or_else(|| PathBuf::from("storeform-catalog.json"))
}

pub fn load_config() -> Config {
    let Some(path) = config_path() else {
        return Config::default();
    };

    let Ok(content) = std::fs::read_to_string(&path) else {
        return Config::default();
    };

    match toml::from_str(&content) {
        Ok(config) => config,
        Err(err) => {
            warn!("ignoring {}: {}", path.display(), err);
            Config::default()
        }
    }
}

/// Flag first, then the environment, then the config file.
pub fn resolve_catalog_path(cli_path: Option<PathBuf>) -> PathBuf {
    if let Some(path) = cli_path {
        return path;
    }

    if let Ok(path) = std::env::var(CATALOG_ENV) {
        if !path.is_empty() {
            return PathBuf::from(path);
        }
    }

    load_config()
        .catalog_path
        .unwrap_or_else(default_catalog_path)
}
