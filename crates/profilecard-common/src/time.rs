//! Timestamp formatting for response envelopes.

use chrono::{DateTime, SecondsFormat, Utc};

use crate::error::{Error, Result};

/// Format an instant as ISO-8601 with microseconds and a `Z` zone designator.
///
/// ```
/// use chrono::{TimeZone, Utc};
/// use profilecard_common::time::format_timestamp;
///
/// let at = Utc.with_ymd_and_hms(2024, 1, 1, 12, 0, 0).unwrap();
/// assert_eq!(format_timestamp(at), "2024-01-01T12:00:00.000000Z");
/// ```
pub fn format_timestamp(at: DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Micros, true)
}

/// Current instant, formatted with [`format_timestamp`].
pub fn now_timestamp() -> String {
    format_timestamp(Utc::now())
}

/// Parse a timestamp produced by [`format_timestamp`].
///
/// Accepts `YYYY-MM-DDTHH:MM:SS[.ffffff]Z` only; offsets such as `+00:00`
/// and fractions of other lengths are rejected.
pub fn parse_timestamp(value: &str) -> Result<DateTime<Utc>> {
    let body = value
        .strip_suffix('Z')
        .ok_or_else(|| Error::invalid_timestamp(value))?;

    let (seconds, fraction) = match body.split_once('.') {
        Some((seconds, fraction)) => (seconds, Some(fraction)),
        None => (body, None),
    };

    if seconds.len() != 19 || seconds.as_bytes()[10] != b'T' {
        return Err(Error::invalid_timestamp(value));
    }
    if let Some(fraction) = fraction {
        if fraction.len() != 6 || !fraction.bytes().all(|b| b.is_ascii_digit()) {
            return Err(Error::invalid_timestamp(value));
        }
    }

    DateTime::parse_from_rfc3339(value)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|_| Error::invalid_timestamp(value))
}
