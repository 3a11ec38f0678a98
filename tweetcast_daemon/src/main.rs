mod config;
mod error;

use anyhow::Context;
use dotenvy::dotenv;
use tracing_subscriber::filter::{EnvFilter, LevelFilter};

use tweetcast_core::fetcher::Source;
use tweetcast_core::relay::{DisabledRelay, Relay};
use tweetcast_core::scheduler::{Scheduler, SchedulerConfig};
use tweetcast_farcaster::FarcasterRelay;
use tweetcast_twitter::TwitterSource;

use crate::config::Config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    // 1. Initialize logger
    init_logger()?;

    // 2. Check and load configuration
    let missing = config::missing_keys(|key| std::env::var(key).ok());
    if missing.is_empty() {
        tracing::info!("All required environment variables are set.");
    } else {
        tracing::warn!("Missing required environment variables: {}", missing.join(", "));
    }
    let config = Config::from_env().context("cannot load configuration")?;
    tracing::debug!("Loaded configuration: {:?}", config);

    // 3. Initialize source and relay
    let source = TwitterSource::new(&config.source_api_key).context("cannot create twitter client")?;
    match config.relay_mnemonic.as_deref() {
        Some(secret) => {
            let relay = FarcasterRelay::new(secret).context("cannot create farcaster client")?;
            run(config.scheduler, source, relay).await
        }
        None => {
            tracing::warn!("{} not set. Casts will be skipped.", config::RELAY_MNEMONIC);
            run(config.scheduler, source, DisabledRelay).await
        }
    }
}

fn init_logger() -> anyhow::Result<()> {
    let filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::DEBUG.into())
        .from_env()?
        .add_directive("hyper::proto=info".parse()?)
        .add_directive("hyper::client=info".parse()?)
        .add_directive("reqwest=info".parse()?);
    tracing_subscriber::fmt().with_env_filter(filter).compact().init();
    Ok(())
}

/// Run the scheduler until it fails or the process is interrupted.
async fn run<S: Source, R: Relay>(config: SchedulerConfig, source: S, relay: R) -> anyhow::Result<()> {
    let accounts = config.accounts.list_accounts();
    tracing::info!(
        "Watching {} accounts every {} seconds, cache at {}",
        accounts.len(),
        config.cooldown.as_secs(),
        config.cache_path.display()
    );
    if accounts.is_empty() {
        tracing::warn!("No accounts configured. Every cycle will be a no-op.");
    }

    let scheduler = Scheduler::new(config, source, relay);
    tokio::select! {
        result = scheduler.run() => result.context("scheduler stopped"),
        signal = tokio::signal::ctrl_c() => {
            signal.context("cannot listen for shutdown signal")?;
            tracing::info!("Received shutdown signal, exiting");
            Ok(())
        }
    }
}
