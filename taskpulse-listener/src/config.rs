use std::time::Duration;

/// Seconds between polling cycle starts.
const POLL_INTERVAL: Duration = Duration::from_secs(5);

/// Listener configuration read once at startup.
#[derive(Debug, Clone)]
pub struct ListenerConfig {
    /// Base URL of the status server; `/status` is appended per request.
    pub target_url: String,
    /// Time between cycle starts. Fixed in production, shortened in tests.
    pub poll_interval: Duration,
}

impl ListenerConfig {
    /// Load configuration from the process environment.
    ///
    /// Returns `None` when `TARGET_URL` is unset or empty; the caller logs
    /// and idles without polling.
    pub fn from_env() -> Option<Self> {
        Self::from_target_url(std::env::var("TARGET_URL").ok())
    }

    /// Build config from the would-be `TARGET_URL` value.
    fn from_target_url(target_url: Option<String>) -> Option<Self> {
        let target_url = target_url.filter(|u| !u.is_empty())?;
        Some(Self {
            target_url,
            poll_interval: POLL_INTERVAL,
        })
    }
}
