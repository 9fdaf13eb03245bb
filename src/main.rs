//! ARICON Admin Panel
//!
//! Desktop dashboard for managing the faculty, logistics and payment
//! records of the ARICON event.
//!
//! This is the main entry point for the Dioxus Desktop application.

use aricon_core::AppConfig;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

fn main() -> anyhow::Result<()> {
    let config = AppConfig::load()?;

    // RUST_LOG wins over the configured level
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log_level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_target(false)
        .pretty()
        .init();

    tracing::info!(
        api = %config.base_url(),
        timeout_secs = config.request_timeout().as_secs(),
        "Configuration loaded"
    );

    aricon_ui::launch(config)?;

    Ok(())
}
