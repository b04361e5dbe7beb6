//! Day layout: column assignment plus vertical extent, written back in place.
//!
//! Layout is a full recomputation of each day bucket. Running it twice on
//! unchanged input yields identical attributes.

use std::collections::HashSet;

use tracing::debug;

use crate::error::{LayoutError, Result};
use crate::event::Event;
use crate::extent::vertical_extent;
use crate::grouping::day_indices;
use crate::sweep::assign_columns;
use crate::window::VisibleWindow;

/// Lay out a single day's events in place.
///
/// `events` is treated as one bucket regardless of the dates it contains;
/// use [`layout_all`] to split a mixed collection by day first.
///
/// # Errors
/// Returns `LayoutError::InvalidWindow` if the window has no positive length
/// and `LayoutError::DuplicateEvent` if two events share an id. Either way no
/// event is touched.
pub fn layout_day(events: &mut [Event], window: &VisibleWindow) -> Result<()> {
    let indices: Vec<usize> = (0..events.len()).collect();
    layout_bucket(events, &indices, window)
}

/// Group `events` by local day and lay out every day independently.
///
/// # Errors
/// Returns `LayoutError::InvalidWindow` if the window has no positive length
/// and `LayoutError::DuplicateEvent` if two events of one day share an id.
/// Days laid out before the failing one keep their new attributes.
pub fn layout_all(events: &mut [Event], window: &VisibleWindow) -> Result<()> {
    window.total_minutes()?;
    for indices in day_indices(events).values() {
        layout_bucket(events, indices, window)?;
    }
    Ok(())
}

/// Lay out the events at `indices` as one bucket.
pub(crate) fn layout_bucket(
    events: &mut [Event],
    indices: &[usize],
    window: &VisibleWindow,
) -> Result<()> {
    window.total_minutes()?;
    if indices.is_empty() {
        return Ok(());
    }

    // Slots are keyed by id.
    let mut seen = HashSet::with_capacity(indices.len());
    for &i in indices {
        if !seen.insert(events[i].id) {
            return Err(LayoutError::DuplicateEvent(events[i].id));
        }
    }

    let slots = {
        let bucket: Vec<&Event> = indices.iter().map(|&i| &events[i]).collect();
        assign_columns(&bucket)
    };

    let mut columns = 0;
    for &i in indices {
        let event = &mut events[i];
        let slot = slots.get(&event.id).copied().unwrap_or_default();
        let extent = vertical_extent(event, window)?;

        event.position = slot.position;
        event.overlap = slot.overlap;
        event.top = extent.top;
        event.height = extent.height;
        columns = columns.max(slot.overlap + 1);
    }

    debug!(
        day = %events[indices[0]].day(),
        events = indices.len(),
        columns,
        "laid out day"
    );
    Ok(())
}
