//! Calendar date parsing shared by form rules and wire decoding.

use chrono::{DateTime, NaiveDate};

/// Parses a calendar date from user or wire input.
///
/// Accepts `YYYY-MM-DD` and RFC 3339 timestamps; for timestamps the date in
/// the timestamp's own offset is used. Returns `None` for anything else.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use taskboard::task::domain::parse_calendar_date;
///
/// let expected = NaiveDate::from_ymd_opt(2030, 4, 1);
/// assert_eq!(parse_calendar_date("2030-04-01"), expected);
/// assert_eq!(parse_calendar_date("2030-04-01T08:30:00Z"), expected);
/// assert_eq!(parse_calendar_date("next tuesday"), None);
/// ```
#[must_use]
pub fn parse_calendar_date(raw: &str) -> Option<NaiveDate> {
    let trimmed = raw.trim();
    NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
        .ok()
        .or_else(|| {
            DateTime::parse_from_rfc3339(trimmed)
                .ok()
                .map(|timestamp| timestamp.date_naive())
        })
}
