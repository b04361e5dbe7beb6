//! The visible time window of a day view.
//!
//! A window is a pair of offsets in minutes since local midnight. Vertical
//! placement is normalized against its length, so a window whose end does not
//! come after its start is rejected with [`LayoutError::InvalidWindow`].

use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::error::{LayoutError, Result};

const MINUTES_PER_DAY: i64 = 24 * 60;

/// Visible window as minutes since local midnight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct VisibleWindow {
    pub start_minutes: i64,
    pub end_minutes: i64,
}

impl Default for VisibleWindow {
    /// 9:00 to 21:00.
    fn default() -> Self {
        Self {
            start_minutes: 9 * 60,
            end_minutes: 21 * 60,
        }
    }
}

impl VisibleWindow {
    /// Build a window from raw minute offsets. No validation happens here; see
    /// [`VisibleWindow::total_minutes`].
    pub fn from_minutes(start_minutes: i64, end_minutes: i64) -> Self {
        Self {
            start_minutes,
            end_minutes,
        }
    }

    /// Parse a window from two `"HH:MM"` wall-clock strings (e.g. `"9:00"`, `"21:00"`).
    ///
    /// # Errors
    /// Returns `LayoutError::InvalidTime` if either string is malformed and
    /// `LayoutError::InvalidWindow` if the end is not after the start.
    pub fn parse(start_time: &str, end_time: &str) -> Result<Self> {
        let window = Self {
            start_minutes: parse_clock_minutes(start_time)?,
            end_minutes: parse_clock_minutes(end_time)?,
        };
        window.total_minutes()?;
        Ok(window)
    }

    /// Length of the window in minutes.
    ///
    /// # Errors
    /// Returns `LayoutError::InvalidWindow` when the length is not positive.
    pub fn total_minutes(&self) -> Result<i64> {
        let total = self.end_minutes - self.start_minutes;
        if total <= 0 {
            return Err(LayoutError::InvalidWindow {
                start_minutes: self.start_minutes,
                end_minutes: self.end_minutes,
            });
        }
        Ok(total)
    }

    /// Absolute wall-clock bounds of the window on `day`.
    pub fn bounds_on(&self, day: NaiveDate) -> (NaiveDateTime, NaiveDateTime) {
        let midnight = day.and_time(NaiveTime::MIN);
        (
            midnight + Duration::minutes(self.start_minutes),
            midnight + Duration::minutes(self.end_minutes),
        )
    }
}

/// Parse `"H:MM"` or `"HH:MM"` into minutes since midnight. `"24:00"` is the
/// latest accepted value.
pub fn parse_clock_minutes(s: &str) -> Result<i64> {
    let invalid = || LayoutError::InvalidTime(s.to_string());

    let (hours, minutes) = s.trim().split_once(':').ok_or_else(invalid)?;
    let digits = |part: &str| part.bytes().all(|b| b.is_ascii_digit());
    if hours.is_empty() || hours.len() > 2 || minutes.len() != 2 {
        return Err(invalid());
    }
    if !digits(hours) || !digits(minutes) {
        return Err(invalid());
    }
    let hours: i64 = hours.parse().map_err(|_| invalid())?;
    let minutes: i64 = minutes.parse().map_err(|_| invalid())?;

    if !(0..60).contains(&minutes) {
        return Err(invalid());
    }
    let total = hours * 60 + minutes;
    if !(0..=MINUTES_PER_DAY).contains(&total) {
        return Err(invalid());
    }
    Ok(total)
}
