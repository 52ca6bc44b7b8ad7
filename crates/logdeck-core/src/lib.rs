// logdeck-core: the dashboard client between logdeck-api and the TUI.
//
// Owns the polling scheduler and all feed state. Consumers observe
// state through watch channels and render it however they like -- no
// presentation logic leaks in here beyond the pure view-model mapping.

pub mod chat;
pub mod config;
pub mod dashboard;
pub mod error;
pub mod feed;
pub mod format;
pub mod view;

// ── Primary re-exports ──────────────────────────────────────────────
pub use chat::{ChatEntry, ChatRole, Transcript};
pub use config::DashboardConfig;
pub use dashboard::Dashboard;
pub use error::CoreError;
pub use feed::{FeedError, FeedErrorKind, FeedUpdate, PanelState};

// Re-export wire types consumers render.
pub use logdeck_api::{Alert, AlertSeverity, AlertStatus, ChatExchange, LogSummary};
