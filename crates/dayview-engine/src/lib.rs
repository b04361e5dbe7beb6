//! # dayview-engine
//!
//! Overlap-aware layout of a day's calendar events.
//!
//! Events are bucketed by local start date. Within a day, a sweep line packs
//! overlapping events into side-by-side columns (reusing the lowest free
//! column), and each event's vertical extent is normalized against a visible
//! time window. The result is a `{top, left, width, height}` percentage box per
//! event for a rendering layer to draw.
//!
//! ## Quick start
//!
//! ```rust
//! use chrono::{Local, TimeZone};
//! use dayview_engine::{Event, EventId, EventStore, VisibleWindow};
//!
//! let at = |h, m| Local.with_ymd_and_hms(2012, 12, 25, h, m, 0).unwrap();
//! let store = EventStore::with_events(
//!     vec![
//!         Event::new(EventId(1), at(18, 0), at(19, 0)),
//!         Event::new(EventId(2), at(18, 20), at(19, 20)),
//!     ],
//!     VisibleWindow::default(),
//! )
//! .unwrap();
//!
//! let placed: Vec<_> = store.events().iter().map(|e| e.placement()).collect();
//! assert_eq!(placed[0].width, 50);
//! assert_eq!(placed[1].left, 50);
//! ```
//!
//! ## Modules
//!
//! - [`event`] — `Event` records and their `Placement`
//! - [`window`] — Visible window configuration (`"HH:MM"` parsing)
//! - [`grouping`] — Partition events by local calendar day
//! - [`sweep`] — Sweep-line column and overlap assignment
//! - [`extent`] — Vertical/horizontal percentage extent
//! - [`layout`] — Per-day layout written back onto events
//! - [`store`] — `EventStore` with day-bucketed re-layout
//! - [`timestamp`] — Raw timestamp decoding
//! - [`record`] — JSON input records
//! - [`view`] — Display-ready `PlacedEvent` output
//! - [`error`] — Error types

pub mod error;
pub mod event;
pub mod extent;
pub mod grouping;
pub mod layout;
pub mod record;
pub mod store;
pub mod sweep;
pub mod timestamp;
pub mod view;
pub mod window;

pub use error::LayoutError;
pub use event::{Event, EventId, Placement};
pub use grouping::group_by_day;
pub use layout::{layout_all, layout_day};
pub use record::{decode_events, EventRecord};
pub use store::EventStore;
pub use sweep::{assign_columns, Slot};
pub use view::{day_view, PlacedEvent};
pub use window::VisibleWindow;
