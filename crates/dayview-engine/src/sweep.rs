//! Sweep-line column assignment for one day's events.
//!
//! Every event contributes a start marker and an end marker. Markers are sorted
//! by time with ends before starts at equal times, so back-to-back events never
//! share the active set. While sweeping, each starting event takes the lowest
//! column not held by an active event, and every active event's `overlap` is
//! raised to the current active-set size minus one.
//!
//! Runs in O(n log n) for the sort plus O(n·k) for the sweep, where `k` is the
//! peak concurrency of the day.

use std::collections::{HashMap, HashSet};

use chrono::{DateTime, Local};
use tracing::{trace, warn};

use crate::event::{Event, EventId};

/// Which end of an event a marker stands for.
///
/// Declaration order matters: `End` sorts before `Start`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum MarkerKind {
    End,
    Start,
}

/// A point in time derived from an event's start or end.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Marker {
    pub event_id: EventId,
    pub time: DateTime<Local>,
    pub kind: MarkerKind,
    /// The event has no positive duration (`end <= start`).
    pub momentary: bool,
}

/// Column assignment produced by the sweep.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Slot {
    pub position: u32,
    pub overlap: u32,
}

/// Build the sorted marker sequence for `events`.
///
/// Markers are ordered by time, then `End` before `Start`, then momentary
/// events before the rest, so a zero-length event enters and leaves before
/// anything else starts at its instant. Remaining ties keep input order.
pub fn markers(events: &[&Event]) -> Vec<Marker> {
    let mut markers: Vec<Marker> = events
        .iter()
        .flat_map(|e| {
            let momentary = e.end <= e.start;
            [
                Marker {
                    event_id: e.id,
                    time: e.start,
                    kind: MarkerKind::Start,
                    momentary,
                },
                Marker {
                    event_id: e.id,
                    time: e.end,
                    kind: MarkerKind::End,
                    momentary,
                },
            ]
        })
        .collect();

    // Stable sort.
    markers.sort_by_key(|m| (m.time, m.kind, !m.momentary));
    markers
}

/// Smallest non-negative integer not present in `used`.
pub fn first_free_slot(used: impl IntoIterator<Item = u32>) -> u32 {
    let taken: HashSet<u32> = used.into_iter().collect();
    (0..).find(|p| !taken.contains(p)).unwrap_or(0)
}

/// Assign a column and an overlap count to every event of one day.
///
/// Events whose end marker is processed before their start marker (zero
/// duration, or `end < start`) occupy their column only for the instant of
/// their start: they are counted against the events active at that moment and
/// then leave the active set.
pub fn assign_columns(events: &[&Event]) -> HashMap<EventId, Slot> {
    let mut slots: HashMap<EventId, Slot> = HashMap::with_capacity(events.len());
    let mut active: Vec<EventId> = Vec::new();
    let mut closed_early: HashSet<EventId> = HashSet::new();

    for event in events {
        if event.end < event.start {
            warn!(event = %event.id, "event ends before it starts");
        }
    }

    for marker in markers(events) {
        trace!(event = %marker.event_id, kind = ?marker.kind, time = %marker.time, "sweep marker");
        match marker.kind {
            MarkerKind::Start => {
                let position = first_free_slot(
                    active
                        .iter()
                        .filter_map(|id| slots.get(id))
                        .map(|slot| slot.position),
                );
                active.push(marker.event_id);
                slots.insert(
                    marker.event_id,
                    Slot {
                        position,
                        overlap: 0,
                    },
                );

                let overlap = (active.len() - 1) as u32;
                for id in &active {
                    if let Some(slot) = slots.get_mut(id) {
                        slot.overlap = slot.overlap.max(overlap);
                    }
                }

                if closed_early.remove(&marker.event_id) {
                    active.pop();
                }
            }
            MarkerKind::End => {
                match active.iter().position(|id| *id == marker.event_id) {
                    Some(idx) => {
                        active.remove(idx);
                    }
                    None => {
                        closed_early.insert(marker.event_id);
                    }
                }
            }
        }
    }

    slots
}
