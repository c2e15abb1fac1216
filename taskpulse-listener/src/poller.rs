use std::time::Duration;

use anyhow::Result;
use tokio_util::sync::CancellationToken;
use tracing::{error, info};

use taskpulse_types::{StatusReport, TaskStatusRecord};

use crate::config::ListenerConfig;

/// Timeout on each outbound request, so a hung server is just another
/// logged failure rather than a stalled cycle.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Issues one `GET <base>/status` per polling cycle and logs the results.
pub struct Poller {
    client: reqwest::Client,
    status_url: String,
    poll_interval: Duration,
}

impl Poller {
    pub fn new(config: &ListenerConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()?;
        let status_url = format!("{}/status", config.target_url.trim_end_matches('/'));
        Ok(Self {
            client,
            status_url,
            poll_interval: config.poll_interval,
        })
    }

    /// One polling cycle's request: GET, check the HTTP status, parse the
    /// body. Transport errors, non-2xx responses, and malformed bodies all
    /// surface here; the caller logs and moves on to the next cycle.
    pub async fn poll_once(&self) -> Result<Vec<TaskStatusRecord>, reqwest::Error> {
        let report: StatusReport = self
            .client
            .get(&self.status_url)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;
        Ok(report.tasks)
    }

    /// Run polling cycles until the cancellation token fires.
    ///
    /// The first cycle runs immediately; later cycle starts are spaced by
    /// the configured interval. A failed cycle is logged and never stops
    /// the loop.
    pub async fn run(&self, cancel: CancellationToken) {
        let mut interval = tokio::time::interval(self.poll_interval);
        interval.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Delay);

        loop {
            tokio::select! {
                _ = cancel.cancelled() => {
                    info!("poller stopping");
                    break;
                }
                _ = interval.tick() => {
                    info!(url = %self.status_url, "fetching task statuses");
                    match self.poll_once().await {
                        Ok(tasks) => {
                            for task in &tasks {
                                info!(id = task.id, status = %task.random_status, "task status");
                            }
                        }
                        Err(e) => {
                            error!(url = %self.status_url, error = %e, "failed to fetch task statuses");
                        }
                    }
                }
            }
        }
    }
}

/// Spawn the polling loop as a background task.
///
/// Returns the JoinHandle for the poller task. The task runs until the
/// cancellation token is cancelled.
pub fn spawn_poller(
    config: &ListenerConfig,
    cancel: CancellationToken,
) -> Result<tokio::task::JoinHandle<()>> {
    let poller = Poller::new(config)?;
    Ok(tokio::spawn(async move {
        poller.run(cancel).await;
    }))
}
