//! Decoding of raw event timestamps into local instants.
//!
//! Servers hand out times in several shapes. Numbers are ambiguous and are
//! classified by magnitude:
//!
//! - below [`MINUTES_PER_DAY`]: minutes after 09:00 on a reference day
//! - below [`MAX_UNIX_SECONDS`]: Unix seconds
//! - otherwise: Unix milliseconds
//!
//! Strings are RFC 3339 or local wall-clock `YYYY-MM-DD HH:MM[:SS]` (a `T`
//! separator is also accepted).

use chrono::{DateTime, Duration, FixedOffset, Local, NaiveDate, NaiveDateTime, NaiveTime, TimeZone};

use crate::error::{LayoutError, Result};

/// Upper bound (exclusive) for values read as minutes after 09:00.
pub const MINUTES_PER_DAY: i64 = 24 * 60;

/// Upper bound (exclusive) for values read as Unix seconds. Anything larger is
/// read as milliseconds; the cut-off sits in the year 5138 for seconds and
/// 1973 for milliseconds.
pub const MAX_UNIX_SECONDS: i64 = 100_000_000_000;

/// Minute offsets count from 09:00.
const DAY_OFFSET_ORIGIN_MINUTES: i64 = 9 * 60;

const LOCAL_FORMATS: [&str; 4] = [
    "%Y-%m-%d %H:%M",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%dT%H:%M:%S",
];

/// Decode a numeric timestamp. `reference_day` anchors minute offsets.
///
/// # Errors
/// Returns `LayoutError::InvalidTimestamp` for negative or unrepresentable values.
pub fn decode_numeric(value: i64, reference_day: NaiveDate) -> Result<DateTime<Local>> {
    let invalid = || LayoutError::InvalidTimestamp(value.to_string());

    if value < 0 {
        return Err(invalid());
    }
    if value < MINUTES_PER_DAY {
        let naive = reference_day.and_time(NaiveTime::MIN)
            + Duration::minutes(DAY_OFFSET_ORIGIN_MINUTES + value);
        return local_from_naive(naive);
    }
    if value < MAX_UNIX_SECONDS {
        return Local.timestamp_opt(value, 0).single().ok_or_else(invalid);
    }
    Local.timestamp_millis_opt(value).single().ok_or_else(invalid)
}

/// Parse an RFC 3339 or local wall-clock datetime string.
///
/// # Errors
/// Returns `LayoutError::InvalidTimestamp` if no accepted format matches.
pub fn parse_datetime(s: &str) -> Result<DateTime<Local>> {
    let trimmed = s.trim();
    if let Ok(dt) = DateTime::<FixedOffset>::parse_from_rfc3339(trimmed) {
        return Ok(dt.with_timezone(&Local));
    }
    LOCAL_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(trimmed, fmt).ok())
        .ok_or_else(|| LayoutError::InvalidTimestamp(s.to_string()))
        .and_then(local_from_naive)
}

/// Resolve a local wall-clock time, taking the earlier instant when it is
/// ambiguous.
///
/// # Errors
/// Returns `LayoutError::InvalidTimestamp` for times skipped by a DST gap.
pub fn local_from_naive(naive: NaiveDateTime) -> Result<DateTime<Local>> {
    naive
        .and_local_timezone(Local)
        .earliest()
        .ok_or_else(|| LayoutError::InvalidTimestamp(naive.to_string()))
}
