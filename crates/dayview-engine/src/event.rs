//! Calendar event records and the layout attributes written onto them.
//!
//! An [`Event`] carries its identity, time range and display strings, plus four
//! layout fields (`position`, `overlap`, `top`, `height`) that start at zero and
//! are overwritten in place by every layout pass.

use std::fmt;

use chrono::{DateTime, Local, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::extent::horizontal_extent;
use crate::sweep::Slot;

/// Stable identifier of an event, unique within a store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EventId(pub u64);

impl fmt::Display for EventId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for EventId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

/// One calendar entry.
///
/// Callers must keep `start <= end`. Layout does not reject inverted events.
#[derive(Debug, Clone, PartialEq)]
pub struct Event {
    pub id: EventId,
    pub start: DateTime<Local>,
    pub end: DateTime<Local>,
    pub title: String,
    pub location: String,
    /// Sub-column index, 0 = left-most.
    pub position: u32,
    /// Maximum concurrent sub-columns seen while this event was active, minus one.
    pub overlap: u32,
    /// Percentage offset from the top of the visible window.
    pub top: i64,
    /// Percentage of the visible window covered.
    pub height: i64,
}

impl Event {
    /// Create an event with empty display strings and zeroed layout attributes.
    pub fn new(id: impl Into<EventId>, start: DateTime<Local>, end: DateTime<Local>) -> Self {
        Self {
            id: id.into(),
            start,
            end,
            title: String::new(),
            location: String::new(),
            position: 0,
            overlap: 0,
            top: 0,
            height: 0,
        }
    }

    /// Create a zero-duration event at the current instant.
    pub fn now(id: impl Into<EventId>) -> Self {
        let now = Local::now();
        Self::new(id, now, now)
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = location.into();
        self
    }

    /// The local calendar day this event is bucketed under.
    pub fn day(&self) -> NaiveDate {
        self.start.date_naive()
    }

    /// The column assignment currently stored on this event.
    pub fn slot(&self) -> Slot {
        Slot {
            position: self.position,
            overlap: self.overlap,
        }
    }

    /// The four rendering attributes derived from the current layout fields.
    pub fn placement(&self) -> Placement {
        let horizontal = horizontal_extent(self.slot());
        Placement {
            top: self.top,
            left: horizontal.left,
            width: horizontal.width,
            height: self.height,
        }
    }
}

/// Percentage box consumed by a rendering collaborator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Placement {
    pub top: i64,
    pub left: i64,
    pub width: i64,
    pub height: i64,
}
