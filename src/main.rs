use anyhow::{Context, Result, bail};
use jobboard_gateway::{config, server};
use tracing::info;
use tracing_subscriber::{EnvFilter, filter::LevelFilter};

fn init_tracing(level: &str) -> Result<()> {
    if level.parse::<LevelFilter>().is_err() {
        bail!(
            "Invalid log level: '{}'. Valid levels: error, warn, info, debug, trace",
            level
        );
    }

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt().with_env_filter(filter).json().init();

    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    // Logging is not up yet, so config failures go to stderr via anyhow
    let config = config::load().await.context("Failed to load configuration")?;

    let log_level = std::env::var("RUST_LOG").unwrap_or_else(|_| config.server.logs.level.clone());
    init_tracing(&log_level)?;

    info!(
        "Starting gateway on {}:{} with log level {}",
        config.server.host, config.server.port, log_level
    );

    server::run(config).await?;

    Ok(())
}
