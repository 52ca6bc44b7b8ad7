//! All possible UI actions. Actions are the sole mechanism for state mutation.

use logdeck_core::{Alert, LogSummary, PanelState, Transcript};

/// Every state transition in the TUI is expressed as an Action.
#[derive(Debug, Clone)]
pub enum Action {
    // ── Lifecycle ──────────────────────────────────────────────────
    Quit,
    Tick,
    Render,

    // ── Navigation ────────────────────────────────────────────────
    FocusNext,
    FocusPrev,
    ToggleHelp,
    ScrollUp,
    ScrollDown,

    // ── Dashboard commands ────────────────────────────────────────
    /// Manual refresh of summaries and alerts.
    Refresh,
    /// Request a fresh summary of the last hour.
    GenerateSummary,
    ToggleAutoRefresh,
    /// Advance the alerts severity filter and refetch.
    CycleSeverityFilter,
    /// Refetch alerts with the given severity filter.
    FetchAlerts(Option<&'static str>),
    /// Send a chat message to the backend.
    SendMessage(String),

    // ── Data events (from the dashboard bridge) ───────────────────
    SummariesUpdated(PanelState<LogSummary>),
    AlertsUpdated(PanelState<Alert>),
    TranscriptUpdated(Transcript),
    BadgeUpdated(Option<usize>),
}
