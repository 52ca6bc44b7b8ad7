//! Palette and semantic styling for the TUI.

use logdeck_core::{AlertSeverity, AlertStatus};
use ratatui::style::{Color, Modifier, Style};

// ── Core Palette ──────────────────────────────────────────────────────

pub const CYAN: Color = Color::Rgb(128, 255, 234); // #80ffea
pub const MAGENTA: Color = Color::Rgb(225, 53, 255); // #e135ff
pub const AMBER: Color = Color::Rgb(241, 250, 140); // #f1fa8c
pub const GREEN: Color = Color::Rgb(80, 250, 123); // #50fa7b
pub const RED: Color = Color::Rgb(255, 99, 99); // #ff6363
pub const DIM_WHITE: Color = Color::Rgb(189, 193, 207); // #bdc1cf
pub const BORDER_GRAY: Color = Color::Rgb(98, 114, 164); // #6272a4
pub const BG_DARK: Color = Color::Rgb(30, 31, 41); // #1e1f29

// ── Semantic Styles ───────────────────────────────────────────────────

/// Title text for blocks/panels.
pub fn title_style() -> Style {
    Style::default().fg(CYAN).add_modifier(Modifier::BOLD)
}

/// Border for a focused panel.
pub fn border_focused() -> Style {
    Style::default().fg(MAGENTA)
}

/// Border for an unfocused panel.
pub fn border_default() -> Style {
    Style::default().fg(BORDER_GRAY)
}

/// Normal body text.
pub fn body() -> Style {
    Style::default().fg(DIM_WHITE)
}

/// Placeholder text for empty or loading panels.
pub fn placeholder() -> Style {
    Style::default().fg(BORDER_GRAY)
}

/// Feed failure placeholder text.
pub fn error_text() -> Style {
    Style::default().fg(RED)
}

/// Anomaly notice inside a summary block.
pub fn anomaly() -> Style {
    Style::default().fg(AMBER).add_modifier(Modifier::BOLD)
}

/// The critical-alert badge in the status bar.
pub fn badge() -> Style {
    Style::default().fg(RED).add_modifier(Modifier::BOLD)
}

/// Severity tag coloring for alert rows.
pub fn severity(severity: &AlertSeverity) -> Style {
    match severity {
        AlertSeverity::Critical => Style::default().fg(RED).add_modifier(Modifier::BOLD),
        AlertSeverity::High => Style::default().fg(RED),
        AlertSeverity::Medium | AlertSeverity::Warning => Style::default().fg(AMBER),
        AlertSeverity::Low | AlertSeverity::Info => Style::default().fg(CYAN),
        AlertSeverity::Unknown(_) => Style::default().fg(DIM_WHITE),
    }
}

/// Status coloring for alert rows.
pub fn status(status: &AlertStatus) -> Style {
    match status {
        AlertStatus::Open => Style::default().fg(AMBER),
        AlertStatus::Acknowledged => Style::default().fg(CYAN),
        AlertStatus::Resolved => Style::default().fg(GREEN),
        AlertStatus::Unknown(_) => Style::default().fg(DIM_WHITE),
    }
}

/// Chat transcript: user-authored entry.
pub fn chat_user() -> Style {
    Style::default().fg(MAGENTA).add_modifier(Modifier::BOLD)
}

/// Chat transcript: bot entry.
pub fn chat_bot() -> Style {
    Style::default().fg(CYAN)
}

/// Key hint text (e.g., "q quit  ? help").
pub fn key_hint() -> Style {
    Style::default().fg(BORDER_GRAY)
}

/// Key hint key character.
pub fn key_hint_key() -> Style {
    Style::default().fg(CYAN).add_modifier(Modifier::BOLD)
}
