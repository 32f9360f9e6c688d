use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::fetch::{FetchConfig, DEFAULT_ENDPOINT_PATH};

#[derive(Debug, Deserialize, Default)]
pub struct AppConfig {
    pub api: Option<ApiConfig>,
}

#[derive(Debug, Deserialize)]
pub struct ApiConfig {
    pub base_url: String,
    #[serde(default = "default_endpoint_path")]
    pub endpoint_path: String,
}

fn default_endpoint_path() -> String {
    DEFAULT_ENDPOINT_PATH.to_string()
}

impl AppConfig {
    /// A missing `[api]` section yields an empty base URL, which the fetcher
    /// reports as its configuration error instead of crashing at startup.
    pub fn fetch_config(&self) -> FetchConfig {
        match &self.api {
            Some(api) => FetchConfig {
                base_url: api.base_url.clone(),
                endpoint_path: api.endpoint_path.clone(),
            },
            None => FetchConfig::default(),
        }
    }
}

fn config_path() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".roadmap")
        .join("config.toml")
}

pub fn load_config() -> Result<AppConfig> {
    load_config_from(&config_path())
}

fn load_config_from(path: &Path) -> Result<AppConfig> {
    if !path.exists() {
        return Ok(AppConfig::default());
    }
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config from {}", path.display()))?;
    let config: AppConfig =
        toml::from_str(&contents).with_context(|| "Failed to parse config.toml")?;
    Ok(config)
}
