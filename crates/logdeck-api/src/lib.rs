// logdeck-api: typed HTTP client for the log-analysis backend.

pub mod client;
pub mod error;
pub mod model;
pub mod transport;

pub use client::ApiClient;
pub use error::Error;
pub use model::{
    Alert, AlertPage, AlertSeverity, AlertStatus, ChatExchange, ChatHistory, ChatReply,
    CommandInfo, LogSummary,
};
pub use transport::TransportConfig;
