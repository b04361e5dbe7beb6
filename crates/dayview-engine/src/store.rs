//! Ordered event collection with day-bucketed layout.
//!
//! The store owns its events and the visible window they are laid out against.
//! Populating the store lays out every day; adding one event re-lays out the
//! whole day bucket it lands in, since column reuse depends on the full day.

use std::collections::{BTreeMap, HashSet};

use chrono::NaiveDate;
use tracing::debug;

use crate::error::{LayoutError, Result};
use crate::event::{Event, EventId};
use crate::grouping::{day_indices, group_by_day};
use crate::layout::{layout_all, layout_bucket};
use crate::window::VisibleWindow;

#[derive(Debug, Clone, Default)]
pub struct EventStore {
    events: Vec<Event>,
    window: VisibleWindow,
}

impl EventStore {
    /// An empty store laid out against `window`.
    ///
    /// # Errors
    /// Returns `LayoutError::InvalidWindow` if the window has no positive length.
    pub fn new(window: VisibleWindow) -> Result<Self> {
        window.total_minutes()?;
        Ok(Self {
            events: Vec::new(),
            window,
        })
    }

    /// Populate a store from `events` and lay out every day.
    ///
    /// # Errors
    /// Returns `LayoutError::DuplicateEvent` if two events share an id, or
    /// `LayoutError::InvalidWindow` for a window with no positive length.
    pub fn with_events(events: Vec<Event>, window: VisibleWindow) -> Result<Self> {
        window.total_minutes()?;
        let mut seen = HashSet::with_capacity(events.len());
        for event in &events {
            if !seen.insert(event.id) {
                return Err(LayoutError::DuplicateEvent(event.id));
            }
        }

        let mut store = Self { events, window };
        store.layout()?;
        Ok(store)
    }

    /// Append an event and re-lay out the day it starts on.
    ///
    /// # Errors
    /// Returns `LayoutError::DuplicateEvent` if the id is already present.
    pub fn add(&mut self, event: Event) -> Result<()> {
        if self.get(event.id).is_some() {
            return Err(LayoutError::DuplicateEvent(event.id));
        }
        let day = event.day();
        debug!(event = %event.id, %day, "adding event");
        self.events.push(event);
        self.layout_day(day)
    }

    /// Recompute layout for every day.
    pub fn layout(&mut self) -> Result<()> {
        layout_all(&mut self.events, &self.window)
    }

    /// Recompute layout for a single day. A day with no events is a no-op.
    pub fn layout_day(&mut self, day: NaiveDate) -> Result<()> {
        let indices: Vec<usize> = self
            .events
            .iter()
            .enumerate()
            .filter(|(_, e)| e.day() == day)
            .map(|(i, _)| i)
            .collect();
        layout_bucket(&mut self.events, &indices, &self.window)
    }

    /// Replace the visible window and re-lay out everything.
    ///
    /// # Errors
    /// Returns `LayoutError::InvalidWindow` and leaves the store untouched if the
    /// new window has no positive length.
    pub fn set_window(&mut self, window: VisibleWindow) -> Result<()> {
        window.total_minutes()?;
        self.window = window;
        self.layout()
    }

    pub fn window(&self) -> &VisibleWindow {
        &self.window
    }

    pub fn events(&self) -> &[Event] {
        &self.events
    }

    pub fn get(&self, id: EventId) -> Option<&Event> {
        self.events.iter().find(|e| e.id == id)
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Events grouped by local start date.
    pub fn groups(&self) -> BTreeMap<NaiveDate, Vec<&Event>> {
        group_by_day(&self.events)
    }

    /// Distinct days present, ascending.
    pub fn days(&self) -> Vec<NaiveDate> {
        day_indices(&self.events).into_keys().collect()
    }

    /// Events starting on `day`, in store order.
    pub fn on_day(&self, day: NaiveDate) -> Vec<&Event> {
        self.events.iter().filter(|e| e.day() == day).collect()
    }
}
