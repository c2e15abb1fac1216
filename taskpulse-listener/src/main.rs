use anyhow::Result;
use tokio_util::sync::CancellationToken;
use tracing::{error, info};

use taskpulse_listener::config::ListenerConfig;
use taskpulse_listener::poller;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let Some(config) = ListenerConfig::from_env() else {
        // Stay alive without polling so a supervisor sees a running process.
        error!("TARGET_URL environment variable is not set; polling disabled");
        tokio::signal::ctrl_c().await?;
        return Ok(());
    };
    info!(url = %config.target_url, "loaded config");

    let cancel = CancellationToken::new();
    let poller_handle = poller::spawn_poller(&config, cancel.clone())?;

    tokio::signal::ctrl_c().await?;
    info!("received ctrl-c, shutting down");
    cancel.cancel();

    poller_handle.await?;
    info!("listener stopped");
    Ok(())
}
