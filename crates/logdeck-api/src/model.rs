//! Wire types for the backend REST API.
//!
//! Shapes follow the backend's JSON exactly. Timestamps arrive as naive
//! ISO-8601 strings (the backend serializes UTC without an offset), so
//! they decode as [`NaiveDateTime`]. Unknown enum values are carried
//! through rather than rejected -- the dashboard renders whatever the
//! backend reports.

use std::fmt;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

// ── Log summaries ───────────────────────────────────────────────────

/// One summarized log window, immutable once generated.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct LogSummary {
    #[serde(default)]
    pub id: i64,
    pub start_time: NaiveDateTime,
    pub end_time: NaiveDateTime,
    #[serde(default)]
    pub total_logs: u64,
    #[serde(default)]
    pub error_count: u64,
    #[serde(default)]
    pub warning_count: u64,
    #[serde(default)]
    pub summary_text: Option<String>,
    /// Important events the summarizer extracted from the window.
    #[serde(default)]
    pub key_events: Vec<String>,
    /// Detected anomalies; non-empty triggers the highlighted notice.
    #[serde(default)]
    pub anomalies: Vec<String>,
    #[serde(default)]
    pub created_at: Option<NaiveDateTime>,
}

// ── Alerts ──────────────────────────────────────────────────────────

/// Alert severity as classified by the backend.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(from = "String", into = "String")]
pub enum AlertSeverity {
    Critical,
    High,
    Medium,
    Low,
    Warning,
    Info,
    /// Passthrough for values this client does not know about.
    Unknown(String),
}

impl AlertSeverity {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Critical => "critical",
            Self::High => "high",
            Self::Medium => "medium",
            Self::Low => "low",
            Self::Warning => "warning",
            Self::Info => "info",
            Self::Unknown(s) => s,
        }
    }
}

impl From<String> for AlertSeverity {
    fn from(s: String) -> Self {
        match s.as_str() {
            "critical" => Self::Critical,
            "high" => Self::High,
            "medium" => Self::Medium,
            "low" => Self::Low,
            "warning" => Self::Warning,
            "info" => Self::Info,
            _ => Self::Unknown(s),
        }
    }
}

impl From<AlertSeverity> for String {
    fn from(s: AlertSeverity) -> Self {
        s.as_str().to_owned()
    }
}

impl fmt::Display for AlertSeverity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Alert lifecycle status.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(from = "String", into = "String")]
pub enum AlertStatus {
    Open,
    Acknowledged,
    Resolved,
    Unknown(String),
}

impl AlertStatus {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Open => "open",
            Self::Acknowledged => "acknowledged",
            Self::Resolved => "resolved",
            Self::Unknown(s) => s,
        }
    }
}

impl From<String> for AlertStatus {
    fn from(s: String) -> Self {
        match s.as_str() {
            "open" => Self::Open,
            "acknowledged" => Self::Acknowledged,
            "resolved" => Self::Resolved,
            _ => Self::Unknown(s),
        }
    }
}

impl From<AlertStatus> for String {
    fn from(s: AlertStatus) -> Self {
        s.as_str().to_owned()
    }
}

impl fmt::Display for AlertStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A classified alert.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Alert {
    #[serde(default)]
    pub id: i64,
    pub timestamp: NaiveDateTime,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    pub severity: AlertSeverity,
    pub category: String,
    pub status: AlertStatus,
    #[serde(default = "default_priority")]
    pub priority_score: f64,
    #[serde(default)]
    pub source: Option<String>,
}

fn default_priority() -> f64 {
    0.5
}

impl Alert {
    /// A critical alert that nobody has acted on yet.
    pub fn is_critical_open(&self) -> bool {
        self.severity == AlertSeverity::Critical && self.status == AlertStatus::Open
    }
}

/// Envelope for `GET /api/alerts`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AlertPage {
    #[serde(default)]
    pub count: u64,
    #[serde(default)]
    pub alerts: Vec<Alert>,
}

// ── Chat ────────────────────────────────────────────────────────────

/// One stored user/bot exchange from the chat history.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ChatExchange {
    pub user_message: String,
    /// Nullable in the backend schema.
    #[serde(default)]
    pub bot_response: Option<String>,
    #[serde(default)]
    pub timestamp: Option<NaiveDateTime>,
    #[serde(default)]
    pub command_type: Option<String>,
    #[serde(default)]
    pub success: Option<bool>,
}

/// Envelope for `GET /api/chat/history`. Messages arrive newest-first.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ChatHistory {
    #[serde(default)]
    pub count: u64,
    #[serde(default)]
    pub messages: Vec<ChatExchange>,
}

/// Response to `POST /api/chat/message`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ChatReply {
    pub user_message: String,
    pub bot_response: String,
}

/// One entry from `GET /api/chat/commands`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CommandInfo {
    pub description: String,
    pub usage: String,
    pub category: String,
}
