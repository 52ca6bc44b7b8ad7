//! Pure data → view-model mapping.
//!
//! Everything the panels display is computed here from wire types, so
//! the mapping is testable without a terminal. The presentation layer
//! only styles and positions these strings.

use chrono::NaiveDate;

use logdeck_api::{Alert, AlertSeverity, AlertStatus, LogSummary};

use crate::format::{format_date_time, format_time, priority_percent};

// ── Placeholder texts (the panel "empty state" contract) ────────────

pub const SUMMARIES_EMPTY: &str = "No log summaries available";
pub const SUMMARIES_LOAD_FAILED: &str = "Failed to load log summaries";
pub const ALERTS_EMPTY: &str = "No alerts";
pub const ALERTS_LOAD_FAILED: &str = "Failed to load alerts";

// ── Summaries ───────────────────────────────────────────────────────

/// One rendered summary block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryBlock {
    /// "01:00 PM - 02:00 PM"
    pub window: String,
    pub total_logs: u64,
    pub error_count: u64,
    pub warning_count: u64,
    pub summary_text: String,
    /// Present iff the summary carries at least one anomaly.
    pub anomaly_notice: Option<String>,
}

/// Map fetched summaries to blocks, preserving input order.
pub fn summary_blocks(summaries: &[LogSummary]) -> Vec<SummaryBlock> {
    summaries
        .iter()
        .map(|s| SummaryBlock {
            window: format!(
                "{} - {}",
                format_time(s.start_time),
                format_time(s.end_time)
            ),
            total_logs: s.total_logs,
            error_count: s.error_count,
            warning_count: s.warning_count,
            summary_text: s.summary_text.clone().unwrap_or_default(),
            anomaly_notice: if s.anomalies.is_empty() {
                None
            } else {
                Some(format!("⚠️ {} anomalies detected", s.anomalies.len()))
            },
        })
        .collect()
}

// ── Alerts ──────────────────────────────────────────────────────────

/// One rendered alert row.
#[derive(Debug, Clone, PartialEq)]
pub struct AlertRow {
    pub title: String,
    pub severity: AlertSeverity,
    /// Date-aware timestamp relative to `today`.
    pub timestamp: String,
    pub category: String,
    /// "93%"
    pub priority: String,
    pub status: AlertStatus,
    pub description: Option<String>,
}

/// Map fetched alerts to rows, preserving input order.
pub fn alert_rows(alerts: &[Alert], today: NaiveDate) -> Vec<AlertRow> {
    alerts
        .iter()
        .map(|a| AlertRow {
            title: a.title.clone(),
            severity: a.severity.clone(),
            timestamp: format_date_time(a.timestamp, today),
            category: a.category.clone(),
            priority: priority_percent(a.priority_score),
            status: a.status.clone(),
            description: a.description.clone(),
        })
        .collect()
}

/// Count of alerts that are critical AND still open -- the status badge.
pub fn critical_open_count(alerts: &[Alert]) -> usize {
    alerts.iter().filter(|a| a.is_critical_open()).count()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, NaiveDateTime};
    use logdeck_api::{Alert, AlertSeverity, AlertStatus, LogSummary};

    fn ts(h: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2026, 8, 25)
            .unwrap()
            .and_hms_opt(h, 0, 0)
            .unwrap()
    }

    fn summary(id: i64, anomalies: Vec<String>) -> LogSummary {
        LogSummary {
            id,
            start_time: ts(13),
            end_time: ts(14),
            total_logs: 100,
            error_count: 5,
            warning_count: 9,
            summary_text: Some(format!("summary {id}")),
            key_events: vec![],
            anomalies,
            created_at: None,
        }
    }

    fn alert(severity: AlertSeverity, status: AlertStatus) -> Alert {
        Alert {
            id: 0,
            timestamp: ts(14),
            title: "t".into(),
            description: None,
            severity,
            category: "net".into(),
            status,
            priority_score: 0.5,
            source: None,
        }
    }

    #[test]
    fn one_block_per_summary_in_input_order() {
        let input = vec![summary(3, vec![]), summary(1, vec![]), summary(2, vec![])];
        let blocks = summary_blocks(&input);
        assert_eq!(blocks.len(), 3);
        let texts: Vec<&str> = blocks.iter().map(|b| b.summary_text.as_str()).collect();
        assert_eq!(texts, ["summary 3", "summary 1", "summary 2"]);
    }

    #[test]
    fn anomaly_notice_iff_nonempty() {
        let input = vec![
            summary(1, vec!["spike".into(), "drop".into()]),
            summary(2, vec![]),
        ];
        let blocks = summary_blocks(&input);
        assert_eq!(
            blocks[0].anomaly_notice.as_deref(),
            Some("⚠️ 2 anomalies detected")
        );
        assert!(blocks[1].anomaly_notice.is_none());
    }

    #[test]
    fn summary_window_uses_time_only() {
        let blocks = summary_blocks(&[summary(1, vec![])]);
        assert_eq!(blocks[0].window, "01:00 PM - 02:00 PM");
    }

    #[test]
    fn badge_counts_only_critical_and_open() {
        let alerts = vec![
            alert(AlertSeverity::Critical, AlertStatus::Open),
            alert(AlertSeverity::Critical, AlertStatus::Resolved),
            alert(AlertSeverity::High, AlertStatus::Open),
            alert(AlertSeverity::Critical, AlertStatus::Open),
        ];
        assert_eq!(critical_open_count(&alerts), 2);
    }

    #[test]
    fn alert_row_priority_is_percentage() {
        let mut a = alert(AlertSeverity::Medium, AlertStatus::Open);
        a.priority_score = 0.41;
        let today = NaiveDate::from_ymd_opt(2026, 8, 25).unwrap();
        let rows = alert_rows(&[a], today);
        assert_eq!(rows[0].priority, "41%");
        // Same-day timestamp stays time-only.
        assert_eq!(rows[0].timestamp, "02:00 PM");
    }
}
