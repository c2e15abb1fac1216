use anyhow::{bail, Result};

/// Server configuration read once at startup.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// TCP port the server binds on (all interfaces).
    pub port: u16,
}

impl ServerConfig {
    /// Load configuration from the process environment.
    ///
    /// `FLASK_PORT` is required; a missing or unparsable value is fatal.
    pub fn from_env() -> Result<Self> {
        Self::build(std::env::var("FLASK_PORT").ok())
    }

    /// Build config from the would-be `FLASK_PORT` value.
    fn build(port: Option<String>) -> Result<Self> {
        let raw = match port {
            Some(p) if !p.is_empty() => p,
            _ => bail!("FLASK_PORT environment variable is required"),
        };
        let port = match raw.parse::<u16>() {
            Ok(p) => p,
            Err(e) => bail!("invalid FLASK_PORT '{}': {}", raw, e),
        };
        Ok(Self { port })
    }
}
