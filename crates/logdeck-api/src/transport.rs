// Shared transport configuration for building reqwest::Client instances.
//
// The backend is a plain-HTTP local service, so there is no TLS or auth
// knob here -- just timeout and identification.

use std::time::Duration;

/// Transport settings for the HTTP client.
#[derive(Debug, Clone)]
pub struct TransportConfig {
    /// Per-request timeout applied by reqwest.
    pub timeout: Duration,
    /// User-Agent header sent with every request.
    pub user_agent: String,
}

impl Default for TransportConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(30),
            user_agent: format!("logdeck/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

impl TransportConfig {
    /// Build a `reqwest::Client` from this config.
    pub fn build_client(&self) -> Result<reqwest::Client, crate::error::Error> {
        reqwest::Client::builder()
            .timeout(self.timeout)
            .user_agent(self.user_agent.clone())
            .build()
            .map_err(crate::error::Error::Transport)
    }
}
