//! Serde shape of incoming event documents.
//!
//! ```json
//! [{"id": 1, "start": "2012-12-25 09:30", "end": 1356431400, "title": "Standup"}]
//! ```
//!
//! `start`/`end` may be numbers or strings (see [`crate::timestamp`]). Records
//! without an `id` are numbered after the largest explicit id in the document.

use chrono::{DateTime, Local, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::{LayoutError, Result};
use crate::event::{Event, EventId};
use crate::timestamp::{decode_numeric, parse_datetime};

/// A raw timestamp as it appears in JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawTime {
    Number(i64),
    Text(String),
}

impl RawTime {
    pub fn resolve(&self, reference_day: NaiveDate) -> Result<DateTime<Local>> {
        match self {
            RawTime::Number(n) => decode_numeric(*n, reference_day),
            RawTime::Text(s) => parse_datetime(s),
        }
    }
}

/// One event as decoded from an input document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventRecord {
    #[serde(default)]
    pub id: Option<u64>,
    pub start: RawTime,
    pub end: RawTime,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub location: String,
}

/// Convert decoded records into events. Minute-offset timestamps are anchored
/// to `reference_day`.
///
/// # Errors
/// Returns `LayoutError::InvalidTimestamp` for the first record whose `start`
/// or `end` cannot be resolved, and `LayoutError::InvalidId` when a record
/// without an id follows an explicit id of `u64::MAX`.
pub fn into_events(records: Vec<EventRecord>, reference_day: NaiveDate) -> Result<Vec<Event>> {
    // `None` once the id space is used up.
    let mut next_id = match records.iter().filter_map(|r| r.id).max() {
        Some(max) => max.checked_add(1),
        None => Some(1),
    };

    records
        .into_iter()
        .map(|record| -> Result<Event> {
            let id = match record.id {
                Some(id) => id,
                None => {
                    let id = next_id.ok_or_else(|| {
                        LayoutError::InvalidId(format!("no id left after {}", u64::MAX))
                    })?;
                    next_id = id.checked_add(1);
                    id
                }
            };
            let start = record.start.resolve(reference_day)?;
            let end = record.end.resolve(reference_day)?;
            Ok(Event::new(EventId(id), start, end)
                .with_title(record.title)
                .with_location(record.location))
        })
        .collect()
}

/// Decode a JSON array of event records.
///
/// # Errors
/// Returns `LayoutError::Json` for malformed JSON, otherwise the errors of
/// [`into_events`].
pub fn decode_events(json: &str, reference_day: NaiveDate) -> Result<Vec<Event>> {
    let records: Vec<EventRecord> = serde_json::from_str(json)?;
    into_events(records, reference_day)
}
