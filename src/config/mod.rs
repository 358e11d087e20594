mod types;

pub use types::*;

use crate::{Error, Result};
use std::env;
use tracing::debug;

pub async fn load() -> Result<Config> {
    let config_path = env::var("CONFIG_PATH").unwrap_or_else(|_| "config.yaml".to_string());
    let base_url_override = env::var("UPSTREAM_BASE_URL").ok();

    load_from(&config_path, base_url_override).await
}

/// Reads the YAML file at `config_path`, applies the base URL override and validates.
pub async fn load_from(config_path: &str, base_url_override: Option<String>) -> Result<Config> {
    debug!("Loading configuration from: {}", config_path);

    let config_str = tokio::fs::read_to_string(config_path).await?;
    let mut config = parse(&config_str)?;

    if let Some(base_url) = base_url_override {
        debug!("Upstream base URL overridden from environment");
        config.upstream.base_url = base_url;
    }

    config.validate()?;

    Ok(config)
}

pub fn parse(config_str: &str) -> Result<Config> {
    let config: Config = serde_yaml::from_str(config_str)?;
    Ok(config)
}

impl Config {
    pub fn validate(&self) -> Result<()> {
        let base_url = self.upstream.base_url.trim();
        if base_url.is_empty() {
            return Err(Error::config("upstream.base_url must not be empty"));
        }
        if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
            return Err(Error::config(format!(
                "upstream.base_url must be an http(s) URL, got '{}'",
                base_url
            )));
        }
        if self.server.max_body_bytes == 0 {
            return Err(Error::config("server.max_body_bytes must be greater than zero"));
        }
        if self.upstream.timeout_secs == Some(0) {
            return Err(Error::config("upstream.timeout_secs must be greater than zero"));
        }
        Ok(())
    }
}
