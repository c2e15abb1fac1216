use std::net::{Ipv4Addr, SocketAddr};

use anyhow::Result;
use tracing::info;

use taskpulse_server::config::ServerConfig;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    // Missing FLASK_PORT is fatal: no socket gets bound.
    let config = ServerConfig::from_env()?;

    let app = taskpulse_server::build_router();
    let addr = SocketAddr::from((Ipv4Addr::UNSPECIFIED, config.port));

    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(port = config.port, "taskpulse-server listening on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            tokio::signal::ctrl_c().await.ok();
            info!("received ctrl-c, shutting down");
        })
        .await?;

    Ok(())
}
