//! Epoch-millisecond time helpers.
//!
//! All persisted dates are epoch milliseconds (UTC). Parsing accepts the
//! operator-facing `YYYY-MM-DD` and `YYYY-MM-DD HH:MM` forms.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use thiserror::Error;

/// One day in milliseconds.
pub const DAY_MS: i64 = 24 * 60 * 60 * 1000;

#[derive(Debug, Error)]
pub enum TimeError {
    #[error("invalid date '{0}' (expected YYYY-MM-DD)")]
    BadDate(String),
    #[error("invalid date-time '{0}' (expected YYYY-MM-DD HH:MM)")]
    BadDateTime(String),
}

/// Current time as epoch milliseconds.
pub fn now_ms() -> i64 {
    Utc::now().timestamp_millis()
}

/// Parse `YYYY-MM-DD` to epoch ms at midnight UTC.
pub fn parse_date_ms(s: &str) -> Result<i64, TimeError> {
    let date = NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
        .map_err(|_| TimeError::BadDate(s.to_string()))?;
    let dt = date
        .and_hms_opt(0, 0, 0)
        .ok_or_else(|| TimeError::BadDate(s.to_string()))?;
    Ok(dt.and_utc().timestamp_millis())
}

/// Parse `YYYY-MM-DD HH:MM` to epoch ms (UTC).
pub fn parse_datetime_ms(s: &str) -> Result<i64, TimeError> {
    let dt = NaiveDateTime::parse_from_str(s.trim(), "%Y-%m-%d %H:%M")
        .map_err(|_| TimeError::BadDateTime(s.to_string()))?;
    Ok(dt.and_utc().timestamp_millis())
}

/// Format epoch ms as `YYYY-MM-DD`.
pub fn format_date(ms: i64) -> String {
    match DateTime::<Utc>::from_timestamp_millis(ms) {
        Some(dt) => dt.format("%Y-%m-%d").to_string(),
        None => "-".to_string(),
    }
}

/// Format epoch ms as `YYYY-MM-DD HH:MM`.
pub fn format_datetime(ms: i64) -> String {
    match DateTime::<Utc>::from_timestamp_millis(ms) {
        Some(dt) => dt.format("%Y-%m-%d %H:%M").to_string(),
        None => "-".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn date_round_trip() {
        let ms = parse_date_ms("2024-03-15").unwrap();
        assert_eq!(format_date(ms), "2024-03-15");
    }

    #[test]
    fn datetime_round_trip() {
        let ms = parse_datetime_ms("2024-03-15 19:30").unwrap();
        assert_eq!(format_datetime(ms), "2024-03-15 19:30");
    }

    #[test]
    fn rejects_malformed_input() {
        assert!(parse_date_ms("15/03/2024").is_err());
        assert!(parse_datetime_ms("2024-03-15").is_err());
    }

    #[test]
    fn day_arithmetic() {
        let ms = parse_date_ms("2024-03-15").unwrap();
        assert_eq!(format_date(ms + 30 * DAY_MS), "2024-04-14");
    }
}
