// ── Runtime dashboard configuration ──
//
// Describes *what* to poll and how often. Built by the TUI (from CLI
// flags or logdeck-config); core never reads config files itself.

use std::time::Duration;

use url::Url;

/// Configuration for a [`Dashboard`](crate::Dashboard) instance.
#[derive(Debug, Clone)]
pub struct DashboardConfig {
    /// Backend base URL (e.g., `http://127.0.0.1:5000`).
    pub backend: Url,
    /// Interval between scheduled feed refreshes.
    pub refresh_interval: Duration,
    /// How many summaries to request per fetch.
    pub summaries_limit: u32,
    /// How many alerts to request per fetch.
    pub alerts_limit: u32,
    /// How many chat exchanges to request on the initial history load.
    pub chat_history_limit: u32,
    /// Request timeout for the HTTP transport.
    pub timeout: Duration,
    /// Whether scheduled refreshes are enabled at startup.
    pub auto_refresh: bool,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            backend: "http://127.0.0.1:5000"
                .parse()
                .expect("default backend URL is valid"),
            refresh_interval: Duration::from_secs(30),
            summaries_limit: 10,
            alerts_limit: 20,
            chat_history_limit: 20,
            timeout: Duration::from_secs(30),
            auto_refresh: true,
        }
    }
}
