//! Presentation formatters.
//!
//! These reproduce the dashboard's display policy exactly, so keep the
//! format strings stable: summary windows show hour:minute only, alert
//! timestamps show the abbreviated date unless the alert is from the
//! current calendar day. The reference date is a parameter -- callers
//! pass "today" so the policy stays testable.

use chrono::{NaiveDate, NaiveDateTime};

/// Hour:minute in 12-hour clock, e.g. "08:45 PM".
pub fn format_time(ts: NaiveDateTime) -> String {
    ts.format("%I:%M %p").to_string()
}

/// Date-aware timestamp: time-only when `ts` falls on `today`,
/// otherwise "Aug 3, 08:45 PM".
pub fn format_date_time(ts: NaiveDateTime, today: NaiveDate) -> String {
    if ts.date() == today {
        format_time(ts)
    } else {
        ts.format("%b %-d, %I:%M %p").to_string()
    }
}

/// Priority score (0.0-1.0) as a rounded percentage, e.g. "93%".
pub fn priority_percent(score: f64) -> String {
    format!("{}%", (score * 100.0).round())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn dt(y: i32, m: u32, d: u32, h: u32, min: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, min, 0)
            .unwrap()
    }

    #[test]
    fn time_only_is_twelve_hour_padded() {
        assert_eq!(format_time(dt(2026, 8, 25, 20, 45)), "08:45 PM");
        assert_eq!(format_time(dt(2026, 8, 25, 0, 5)), "12:05 AM");
    }

    #[test]
    fn same_day_omits_month_and_day() {
        let today = NaiveDate::from_ymd_opt(2026, 8, 25).unwrap();
        assert_eq!(format_date_time(dt(2026, 8, 25, 14, 30), today), "02:30 PM");
    }

    #[test]
    fn prior_day_includes_abbreviated_date() {
        let today = NaiveDate::from_ymd_opt(2026, 8, 25).unwrap();
        assert_eq!(
            format_date_time(dt(2026, 8, 3, 14, 30), today),
            "Aug 3, 02:30 PM"
        );
    }

    #[test]
    fn future_date_also_includes_date() {
        // The policy is calendar-date equality, not "in the past".
        let today = NaiveDate::from_ymd_opt(2026, 8, 25).unwrap();
        assert_eq!(
            format_date_time(dt(2026, 9, 1, 9, 0), today),
            "Sep 1, 09:00 AM"
        );
    }

    #[test]
    fn priority_rounds_to_whole_percent() {
        assert_eq!(priority_percent(0.934), "93%");
        assert_eq!(priority_percent(0.935), "94%");
        assert_eq!(priority_percent(0.0), "0%");
        assert_eq!(priority_percent(1.0), "100%");
    }
}
