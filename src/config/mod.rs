mod types;

pub use types::*;

use crate::{Error, Result};
use std::{env, path::Path};
use tracing::debug;

/// Environment variable holding the model service API key.
pub const API_KEY_ENV: &str = "GEMINI_API_KEY";

/// Loads `.env`, then the YAML file at `$CONFIG_PATH` (default `config.yaml`)
/// if it exists, then applies the API key from the environment.
pub async fn load() -> Result<Config> {
    dotenvy::dotenv().ok();

    let config_path = env::var("CONFIG_PATH").unwrap_or_else(|_| "config.yaml".to_string());
    let config = load_from(Path::new(&config_path), env::var(API_KEY_ENV).ok()).await?;

    Ok(config)
}

pub async fn load_from(path: &Path, api_key: Option<String>) -> Result<Config> {
    let mut config = if tokio::fs::try_exists(path).await? {
        debug!("Loading configuration from: {}", path.display());
        let config_str = tokio::fs::read_to_string(path).await?;
        serde_yaml::from_str(&config_str)?
    } else {
        debug!(
            "No configuration file at {}, using defaults",
            path.display()
        );
        Config::default()
    };

    if let Some(key) = api_key.filter(|k| !k.trim().is_empty()) {
        config.llm.api_key = key;
    }

    config.validate()?;
    Ok(config)
}

impl Config {
    pub fn validate(&self) -> Result<()> {
        if self.llm.api_key.trim().is_empty() {
            return Err(Error::config(format!(
                "No API key found. Set {} or llm.api_key",
                API_KEY_ENV
            )));
        }
        if self.server.max_upload_mb == 0 {
            return Err(Error::config("server.max_upload_mb must be at least 1"));
        }
        if self.llm.model.trim().is_empty() {
            return Err(Error::config("llm.model must not be empty"));
        }
        Ok(())
    }
}
