// ── Core error types ──
//
// User-facing errors from logdeck-core. Per-feed fetch failures never
// surface here -- those become `PanelState::Failed` values. This type
// covers construction and configuration problems only.

use thiserror::Error;

/// Unified error type for the core crate.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("API error: {message}")]
    Api {
        message: String,
        status: Option<u16>,
    },
}

impl From<logdeck_api::Error> for CoreError {
    fn from(err: logdeck_api::Error) -> Self {
        match err {
            logdeck_api::Error::InvalidUrl(e) => CoreError::Config {
                message: format!("Invalid URL: {e}"),
            },
            other => CoreError::Api {
                status: other.status(),
                message: other.to_string(),
            },
        }
    }
}
