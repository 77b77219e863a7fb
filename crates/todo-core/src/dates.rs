//! Date helpers over epoch-millisecond timestamps.
//!
//! Due dates carry date-only semantics: overdue/today checks compare
//! against the local calendar day and ignore time-of-day.

use chrono::{Local, NaiveTime, TimeZone};

/// Milliseconds in one day.
const DAY_MS: i64 = 86_400_000;

/// Epoch milliseconds of local midnight today.
///
/// Falls back to the current instant if local midnight does not exist
/// (DST gap), which only shifts the boundary within the skipped hour.
pub fn start_of_today_ms() -> i64 {
    let now = Local::now();
    let midnight = now.date_naive().and_time(NaiveTime::MIN);
    Local
        .from_local_datetime(&midnight)
        .earliest()
        .map_or_else(|| now.timestamp_millis(), |dt| dt.timestamp_millis())
}

/// Format a timestamp as a short human-readable date, e.g. "Jun 15, 2024".
///
/// Returns an empty string for timestamps outside the representable range.
pub fn format_date(timestamp_ms: i64) -> String {
    Local
        .timestamp_millis_opt(timestamp_ms)
        .single()
        .map(|dt| dt.format("%b %d, %Y").to_string())
        .unwrap_or_default()
}

/// Whether a due date falls strictly before the start of today.
pub fn is_overdue(due_ms: i64) -> bool {
    due_ms < start_of_today_ms()
}

/// Whether a timestamp falls within today's local calendar day.
pub fn is_today(timestamp_ms: i64) -> bool {
    let start = start_of_today_ms();
    timestamp_ms >= start && timestamp_ms < start + DAY_MS
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn now_ms() -> i64 {
        chrono::Utc::now().timestamp_millis()
    }

    #[test]
    fn yesterday_is_overdue() {
        assert!(is_overdue(now_ms() - 2 * DAY_MS));
    }

    #[test]
    fn tomorrow_is_not_overdue() {
        assert!(!is_overdue(now_ms() + 2 * DAY_MS));
    }

    #[test]
    fn now_is_today_and_not_overdue() {
        let now = now_ms();
        assert!(is_today(now));
        assert!(!is_overdue(now));
    }

    #[test]
    fn distant_timestamps_are_not_today() {
        assert!(!is_today(now_ms() - 2 * DAY_MS));
        assert!(!is_today(now_ms() + 2 * DAY_MS));
    }

    #[test]
    fn format_date_includes_year() {
        // 2024-06-15T12:00:00Z — the local rendering may shift the day,
        // but the year is stable across timezones for a midday instant.
        let formatted = format_date(1_718_452_800_000);
        assert!(formatted.contains("2024"), "got: {formatted}");
    }

    #[test]
    fn start_of_today_is_in_the_past_day() {
        let start = start_of_today_ms();
        let now = now_ms();
        assert!(start <= now);
        assert!(now - start < 2 * DAY_MS);
    }
}
