//! Error types for dayview-engine operations.

use thiserror::Error;

use crate::event::EventId;

#[derive(Error, Debug)]
pub enum LayoutError {
    /// The visible window has no positive duration, so percentages are undefined.
    #[error("Invalid window: end ({end_minutes} min) must be after start ({start_minutes} min)")]
    InvalidWindow {
        start_minutes: i64,
        end_minutes: i64,
    },

    #[error("Invalid time of day: {0}")]
    InvalidTime(String),

    #[error("Invalid timestamp: {0}")]
    InvalidTimestamp(String),

    /// No unused id is left to number a record that has none.
    #[error("Invalid event id: {0}")]
    InvalidId(String),

    #[error("Duplicate event id: {0}")]
    DuplicateEvent(EventId),

    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, LayoutError>;
