//! WASM bindings for dayview-engine.
//!
//! Exposes day layout to JavaScript via `wasm-bindgen` so a browser view can
//! position event blocks without reimplementing the sweep. Events cross the
//! boundary as JSON strings in the same `{id?, start, end, title?, location?}`
//! shape the CLI reads.
//!
//! ## Build process
//!
//! ```sh
//! cargo build -p dayview-wasm --target wasm32-unknown-unknown --release
//! wasm-bindgen --target web --out-dir pkg/ \
//!   target/wasm32-unknown-unknown/release/dayview_wasm.wasm
//! ```

use chrono::{Local, NaiveDate};
use dayview_engine::view::all_days;
use dayview_engine::window::parse_clock_minutes;
use dayview_engine::{day_view, decode_events, EventStore, LayoutError, VisibleWindow};
use serde::Serialize;
use wasm_bindgen::prelude::*;

#[derive(Serialize)]
struct WindowDto {
    start_minutes: i64,
    end_minutes: i64,
    total_minutes: i64,
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn js_err(e: LayoutError) -> JsValue {
    JsValue::from_str(&e.to_string())
}

fn to_json<T: Serialize>(value: &T) -> Result<String, JsValue> {
    serde_json::to_string(value)
        .map_err(|e| JsValue::from_str(&format!("Serialization error: {}", e)))
}

/// Parse an optional `YYYY-MM-DD` day, defaulting to the current local day.
fn parse_day(day: Option<String>) -> Result<NaiveDate, JsValue> {
    match day {
        Some(raw) => NaiveDate::parse_from_str(&raw, "%Y-%m-%d")
            .map_err(|e| JsValue::from_str(&format!("Invalid day '{}': {}", raw, e))),
        None => Ok(Local::now().date_naive()),
    }
}

fn build_store(
    events_json: &str,
    day: NaiveDate,
    start_time: Option<String>,
    end_time: Option<String>,
) -> Result<EventStore, JsValue> {
    let window = VisibleWindow::parse(
        start_time.as_deref().unwrap_or("9:00"),
        end_time.as_deref().unwrap_or("21:00"),
    )
    .map_err(js_err)?;
    let events = decode_events(events_json, day).map_err(js_err)?;
    EventStore::with_events(events, window).map_err(js_err)
}

// ---------------------------------------------------------------------------
// WASM exports
// ---------------------------------------------------------------------------

/// Lay out one day's events.
///
/// Returns a JSON array of placed events (display strings, `position`,
/// `overlap`, `top`, `left`, `width`, `height`) for `day` only.
///
/// # Arguments
/// - `events_json` -- JSON array of event records
/// - `day` -- `YYYY-MM-DD`; defaults to today
/// - `start_time` / `end_time` -- visible window as `HH:MM`; default 9:00-21:00
#[wasm_bindgen(js_name = "layoutDay")]
pub fn layout_day(
    events_json: &str,
    day: Option<String>,
    start_time: Option<String>,
    end_time: Option<String>,
) -> Result<String, JsValue> {
    let day = parse_day(day)?;
    let store = build_store(events_json, day, start_time, end_time)?;
    to_json(&day_view(&store, day))
}

/// Lay out every day present in `events_json`.
///
/// Returns a JSON object keyed by `YYYY-MM-DD`, each holding that day's placed
/// events. Minute-offset timestamps are anchored to today.
#[wasm_bindgen(js_name = "layoutAllDays")]
pub fn layout_all_days(
    events_json: &str,
    start_time: Option<String>,
    end_time: Option<String>,
) -> Result<String, JsValue> {
    let today = Local::now().date_naive();
    let store = build_store(events_json, today, start_time, end_time)?;
    to_json(&all_days(&store))
}

/// Validate a visible window and report it in minutes since midnight.
#[wasm_bindgen(js_name = "parseWindow")]
pub fn parse_window(start_time: &str, end_time: &str) -> Result<String, JsValue> {
    let window = VisibleWindow::parse(start_time, end_time).map_err(js_err)?;
    to_json(&WindowDto {
        start_minutes: window.start_minutes,
        end_minutes: window.end_minutes,
        total_minutes: window.total_minutes().map_err(js_err)?,
    })
}

/// Minutes since midnight for an `HH:MM` string, for axis labelling.
#[wasm_bindgen(js_name = "clockMinutes")]
pub fn clock_minutes(time: &str) -> Result<i32, JsValue> {
    parse_clock_minutes(time)
        .map(|m| m as i32)
        .map_err(js_err)
}
