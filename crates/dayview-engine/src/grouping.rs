//! Partition events into local calendar-day buckets.
//!
//! Each event belongs to exactly one bucket, keyed by the local date of its
//! start. Grouping never mutates events.

use std::collections::BTreeMap;

use chrono::NaiveDate;

use crate::event::Event;

/// Group events by the local date of their start, preserving input order
/// within each day.
pub fn group_by_day(events: &[Event]) -> BTreeMap<NaiveDate, Vec<&Event>> {
    let mut days: BTreeMap<NaiveDate, Vec<&Event>> = BTreeMap::new();
    for event in events {
        days.entry(event.day()).or_default().push(event);
    }
    days
}

/// Same partition as [`group_by_day`], but yields indices into `events` so the
/// caller can write layout results back in place.
pub fn day_indices(events: &[Event]) -> BTreeMap<NaiveDate, Vec<usize>> {
    let mut days: BTreeMap<NaiveDate, Vec<usize>> = BTreeMap::new();
    for (idx, event) in events.iter().enumerate() {
        days.entry(event.day()).or_default().push(idx);
    }
    days
}
