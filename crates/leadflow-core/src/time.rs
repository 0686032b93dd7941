use chrono::{DateTime, NaiveDateTime, Utc};

/// Parse a timestamp leniently, returning `None` on anything malformed.
///
/// Accepts RFC 3339 (with offset or `Z`) and the naive `YYYY-MM-DDTHH:MM[:SS]`
/// strings the dashboard's datetime-local inputs produce, interpreted as UTC.
/// Malformed timestamps are treated as absent throughout the engines, so this
/// never returns an error.
pub fn parse_timestamp(s: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Utc));
    }
    for fmt in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(s, fmt) {
            return Some(naive.and_utc());
        }
    }
    None
}

/// Whole days elapsed from `then` to `now`. Negative when `then` is in the
/// future; truncates toward zero, so day 7 exactly reports 7.
pub fn days_since(now: DateTime<Utc>, then: DateTime<Utc>) -> i64 {
    (now - then).num_days()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn parses_rfc3339_with_zulu() {
        let dt = parse_timestamp("2026-02-11T14:22:00Z").unwrap();
        assert_eq!(dt, Utc.with_ymd_and_hms(2026, 2, 11, 14, 22, 0).unwrap());
    }

    #[test]
    fn parses_rfc3339_with_offset() {
        let dt = parse_timestamp("2026-02-11T14:22:00+02:00").unwrap();
        assert_eq!(dt, Utc.with_ymd_and_hms(2026, 2, 11, 12, 22, 0).unwrap());
    }

    #[test]
    fn parses_naive_datetime_local_input() {
        // What the dashboard's <input type="datetime-local"> writes.
        let dt = parse_timestamp("2026-03-01T09:30").unwrap();
        assert_eq!(dt, Utc.with_ymd_and_hms(2026, 3, 1, 9, 30, 0).unwrap());
    }

    #[test]
    fn parses_naive_with_seconds() {
        assert!(parse_timestamp("2026-03-01T09:30:15").is_some());
    }

    #[test]
    fn malformed_is_none() {
        for s in ["", "not-a-date", "2026-13-40T99:99", "tomorrow"] {
            assert!(parse_timestamp(s).is_none(), "expected None for {s:?}");
        }
    }

    #[test]
    fn days_since_truncates() {
        let now = Utc.with_ymd_and_hms(2026, 2, 10, 12, 0, 0).unwrap();
        let then = Utc.with_ymd_and_hms(2026, 2, 3, 13, 0, 0).unwrap();
        // 6 days and 23 hours truncates to 6.
        assert_eq!(days_since(now, then), 6);
        let exactly = Utc.with_ymd_and_hms(2026, 2, 3, 12, 0, 0).unwrap();
        assert_eq!(days_since(now, exactly), 7);
    }

    #[test]
    fn days_since_future_is_negative() {
        let now = Utc.with_ymd_and_hms(2026, 2, 10, 0, 0, 0).unwrap();
        let future = Utc.with_ymd_and_hms(2026, 2, 12, 0, 0, 0).unwrap();
        assert!(days_since(now, future) < 0);
    }
}
