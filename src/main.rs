use anyhow::Result;
use farmshield_brain::{config, server};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Parses a log level or a full filter directive such as
/// `farmshield_brain=debug,tower_http=info`
fn parse_log_filter(directives: &str) -> Result<EnvFilter> {
    EnvFilter::try_new(directives).map_err(|e| {
        anyhow::anyhow!(
            "Invalid log filter '{}': {}. Use a level (error, warn, info, debug, trace) or target=level directives",
            directives,
            e
        )
    })
}

#[tokio::main]
async fn main() -> Result<()> {
    // Configuration (and the API key) must be present before anything else starts
    let config = match config::load().await {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    let log_level = std::env::var("RUST_LOG").unwrap_or_else(|_| config.server.logs.level.clone());

    let filter = match parse_log_filter(&log_level) {
        Ok(filter) => filter,
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(1);
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .json()
        .init();

    info!("Starting FarmShield Brain with log level: {}", log_level);

    server::run(config).await?;

    Ok(())
}
