//! AppFinder bot entry point.

use appfinder::cli::Cli;
use appfinder::{AppFinderBot, AppFinderConfig, connect_finder, init_logging};
use clap::Parser;
use tracing::{error, info};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load .env if present
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();
    init_logging(&cli.logging())?;

    info!(version = env!("CARGO_PKG_VERSION"), "Starting AppFinder");
    info!(?cli, "Startup configuration");

    if let Err(e) = run(cli).await {
        error!("AppFinder stopped: {}", e);
        return Err(e);
    }
    Ok(())
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let settings = AppFinderConfig::load(cli.config.as_deref())?;
    info!(
        search_url = %settings.catalog.search_url(),
        lookup_url = %settings.catalog.lookup_url(),
        timeout_secs = settings.catalog.timeout_secs(),
        key_prefix = %settings.cache.key_prefix(),
        ttl_secs = settings.cache.ttl_secs(),
        "Settings loaded"
    );

    let redis = cli.redis_config()?;
    let finder = connect_finder(&settings, &redis).await?;

    let bot = AppFinderBot::new(cli.bot_token, finder).await?;
    bot.start().await;

    info!("AppFinder shut down");
    Ok(())
}
