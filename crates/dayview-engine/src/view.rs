//! Display-ready projection of laid-out events.
//!
//! [`PlacedEvent`] is what a rendering layer needs to draw one block: display
//! strings, formatted times and the percentage box. The view filters by day;
//! it does not lay anything out itself.

use std::collections::BTreeMap;

use chrono::{DateTime, Local, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::event::{Event, EventId, Placement};
use crate::store::EventStore;

/// Clock format shown on event blocks, e.g. `10:00 am`.
pub const DISPLAY_TIME_FORMAT: &str = "%-I:%M %P";

/// Machine-readable datetime format, e.g. `2012-12-25 10:00`.
pub const DATETIME_ATTR_FORMAT: &str = "%Y-%m-%d %H:%M";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlacedEvent {
    pub id: EventId,
    pub title: String,
    pub location: String,
    pub start: String,
    pub end: String,
    pub start_datetime: String,
    pub end_datetime: String,
    pub position: u32,
    pub overlap: u32,
    #[serde(flatten)]
    pub placement: Placement,
}

impl From<&Event> for PlacedEvent {
    fn from(e: &Event) -> Self {
        Self {
            id: e.id,
            title: e.title.clone(),
            location: e.location.clone(),
            start: display_time(&e.start),
            end: display_time(&e.end),
            start_datetime: e.start.format(DATETIME_ATTR_FORMAT).to_string(),
            end_datetime: e.end.format(DATETIME_ATTR_FORMAT).to_string(),
            position: e.position,
            overlap: e.overlap,
            placement: e.placement(),
        }
    }
}

/// Placed events starting on `day`, in store order.
pub fn day_view(store: &EventStore, day: NaiveDate) -> Vec<PlacedEvent> {
    store
        .on_day(day)
        .into_iter()
        .map(PlacedEvent::from)
        .collect()
}

/// Placed events for every day in the store.
pub fn all_days(store: &EventStore) -> BTreeMap<NaiveDate, Vec<PlacedEvent>> {
    store
        .groups()
        .into_iter()
        .map(|(day, events)| (day, events.into_iter().map(PlacedEvent::from).collect()))
        .collect()
}

/// Placed events for the current local day.
pub fn today(store: &EventStore) -> Vec<PlacedEvent> {
    day_view(store, Local::now().date_naive())
}

fn display_time(t: &DateTime<Local>) -> String {
    t.format(DISPLAY_TIME_FORMAT).to_string()
}
