//! Vertical and horizontal extent of an event inside the visible window.
//!
//! Vertical values are floored percentages of the window length after
//! clipping the event to the window. Horizontal values depend only on the
//! column assignment.

use chrono::NaiveDateTime;

use crate::error::Result;
use crate::event::Event;
use crate::sweep::Slot;
use crate::window::VisibleWindow;

/// Floored `top` and `height` percentages of a time range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct VerticalExtent {
    pub top: i64,
    pub height: i64,
}

/// Floored `left` and `width` percentages of a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct HorizontalExtent {
    pub left: i64,
    pub width: i64,
}

/// Compute `top`/`height` for `event` against `window` on the event's own day.
///
/// Events partly outside the window are clipped to it. Events entirely outside
/// produce a height of 0; their `top` is never below 0.
///
/// # Errors
/// Returns `LayoutError::InvalidWindow` if the window has no positive length.
pub fn vertical_extent(event: &Event, window: &VisibleWindow) -> Result<VerticalExtent> {
    let total = window.total_minutes()?;
    let (window_start, window_end) = window.bounds_on(event.day());

    let start = event.start.naive_local();
    let end = event.end.naive_local();

    let display_start = start.max(window_start);
    let display_end = end.min(window_end);

    Ok(VerticalExtent {
        top: percent_of(minutes_between(window_start, display_start), total).max(0),
        height: percent_of(minutes_between(display_start, display_end), total).max(0),
    })
}

/// Compute `left`/`width` for a column assignment.
pub fn horizontal_extent(slot: Slot) -> HorizontalExtent {
    let columns = i64::from(slot.overlap) + 1;
    HorizontalExtent {
        left: i64::from(slot.position) * 100 / columns,
        width: 100 / columns,
    }
}

fn minutes_between(from: NaiveDateTime, to: NaiveDateTime) -> i64 {
    (to - from).num_minutes()
}

fn percent_of(minutes: i64, total: i64) -> i64 {
    (100 * minutes).div_euclid(total)
}
