//! Tests for sweep-line column and overlap assignment.

use chrono::{Local, TimeZone};
use dayview_engine::sweep::{first_free_slot, markers, MarkerKind};
use dayview_engine::{layout_all, Event, EventId, VisibleWindow};

/// Helper to create an event from hour ranges on a given December 2012 day.
fn event(id: u64, day: u32, start_hour: u32, start_min: u32, end_hour: u32, end_min: u32) -> Event {
    Event::new(
        id,
        Local
            .with_ymd_and_hms(2012, 12, day, start_hour, start_min, 0)
            .unwrap(),
        Local
            .with_ymd_and_hms(2012, 12, day, end_hour, end_min, 0)
            .unwrap(),
    )
}

fn laid_out(mut events: Vec<Event>) -> Vec<Event> {
    layout_all(&mut events, &VisibleWindow::default()).unwrap();
    events
}

fn overlaps(events: &[Event]) -> Vec<u32> {
    events.iter().map(|e| e.overlap).collect()
}

fn positions(events: &[Event]) -> Vec<u32> {
    events.iter().map(|e| e.position).collect()
}

// ─────────────────────────────────────────────────────────────────────────────
// Overlap
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn identifies_overlapping_event_times() {
    let events = laid_out(vec![
        event(1, 25, 9, 30, 11, 30),
        event(2, 25, 18, 0, 19, 0),
        event(3, 25, 18, 20, 19, 20),
        event(4, 25, 19, 0, 20, 20),
    ]);

    assert_eq!(overlaps(&events), vec![0, 1, 1, 1]);
}

#[test]
fn chain_with_later_third_start_still_two_columns() {
    // 19:10 start: 18:00-19:00 has already ended, 18:20-19:20 is still open.
    let events = laid_out(vec![
        event(1, 25, 9, 30, 11, 30),
        event(2, 25, 18, 0, 19, 0),
        event(3, 25, 18, 20, 19, 20),
        event(4, 25, 19, 10, 20, 20),
    ]);

    assert_eq!(overlaps(&events), vec![0, 1, 1, 1]);
}

#[test]
fn back_to_back_events_do_not_overlap() {
    let events = laid_out(vec![event(1, 25, 18, 0, 19, 0), event(2, 25, 19, 0, 20, 20)]);

    assert_eq!(overlaps(&events), vec![0, 0]);
    assert_eq!(positions(&events), vec![0, 0]);
}

#[test]
fn back_to_back_inside_a_cluster() {
    let events = laid_out(vec![
        event(1, 25, 18, 0, 19, 0),
        event(2, 25, 18, 20, 19, 20),
        event(3, 25, 19, 0, 20, 20),
    ]);

    assert_eq!(overlaps(&events), vec![1, 1, 1]);
    assert_eq!(positions(&events), vec![0, 1, 0]);
}

#[test]
fn different_days_do_not_overlap() {
    let mut next_day = event(4, 26, 10, 0, 11, 0);
    // End lands on the previous day; the event is still bucketed by its start.
    next_day.end = Local.with_ymd_and_hms(2012, 12, 25, 20, 20, 0).unwrap();

    let events = laid_out(vec![
        event(1, 25, 18, 0, 19, 0),
        event(2, 25, 18, 20, 19, 20),
        event(3, 25, 19, 0, 20, 20),
        next_day,
    ]);

    assert_eq!(overlaps(&events), vec![1, 1, 1, 0]);
    assert_eq!(events[3].position, 0);
}

#[test]
fn overlap_grows_for_events_already_active() {
    // The long event starts alone, then two more join it.
    let events = laid_out(vec![
        event(1, 25, 9, 0, 17, 0),
        event(2, 25, 10, 0, 11, 0),
        event(3, 25, 10, 30, 11, 30),
    ]);

    assert_eq!(overlaps(&events), vec![2, 2, 2]);
    assert_eq!(positions(&events), vec![0, 1, 2]);
}

#[test]
fn overlap_keeps_peak_concurrency() {
    // Peak of three at 10:30, later only two are open together.
    let events = laid_out(vec![
        event(1, 25, 9, 0, 17, 0),
        event(2, 25, 10, 0, 11, 0),
        event(3, 25, 10, 30, 11, 30),
        event(4, 25, 12, 0, 13, 0),
    ]);

    assert_eq!(events[0].overlap, 2, "long event keeps its peak");
    assert_eq!(events[3].overlap, 1);
    assert_eq!(events[3].position, 1);
}

#[test]
fn isolated_event_is_full_width() {
    let events = laid_out(vec![event(1, 25, 12, 0, 13, 0)]);

    assert_eq!(events[0].position, 0);
    assert_eq!(events[0].overlap, 0);
    assert_eq!(events[0].placement().width, 100);
    assert_eq!(events[0].placement().left, 0);
}

#[test]
fn empty_group_is_a_no_op() {
    let events = laid_out(Vec::new());
    assert!(events.is_empty());
}

// ─────────────────────────────────────────────────────────────────────────────
// Positions
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn calculates_positions() {
    let events = laid_out(vec![event(1, 25, 18, 0, 19, 0), event(2, 25, 18, 20, 19, 20)]);

    assert_eq!(positions(&events), vec![0, 1]);
}

#[test]
fn earliest_starting_event_takes_first_position() {
    let events = laid_out(vec![event(1, 25, 18, 20, 19, 20), event(2, 25, 18, 0, 19, 0)]);

    assert_eq!(positions(&events), vec![1, 0]);
}

#[test]
fn fills_position_gaps() {
    // Positions {0, 1, 2} open; the middle one ends, the next event takes 1.
    let events = laid_out(vec![
        event(1, 25, 9, 0, 12, 0),
        event(2, 25, 9, 30, 10, 30),
        event(3, 25, 10, 0, 12, 0),
        event(4, 25, 10, 30, 11, 30),
    ]);

    assert_eq!(positions(&events), vec![0, 1, 2, 1]);
    assert_eq!(overlaps(&events), vec![2, 2, 2, 2]);
}

#[test]
fn simultaneous_starts_follow_input_order() {
    let events = laid_out(vec![
        event(7, 25, 14, 0, 15, 0),
        event(3, 25, 14, 0, 15, 0),
        event(5, 25, 14, 0, 15, 0),
    ]);

    assert_eq!(positions(&events), vec![0, 1, 2]);
    assert_eq!(overlaps(&events), vec![2, 2, 2]);
}

// ─────────────────────────────────────────────────────────────────────────────
// Degenerate events
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn zero_duration_event_does_not_overlap_itself() {
    let events = laid_out(vec![event(1, 25, 12, 0, 12, 0)]);

    assert_eq!(events[0].overlap, 0);
    assert_eq!(events[0].position, 0);
}

#[test]
fn zero_duration_event_does_not_linger_in_active_set() {
    let events = laid_out(vec![
        event(1, 25, 12, 0, 12, 0),
        event(2, 25, 13, 0, 14, 0),
    ]);

    assert_eq!(overlaps(&events), vec![0, 0]);
    assert_eq!(positions(&events), vec![0, 0]);
}

#[test]
fn zero_duration_event_inside_another_shares_the_instant() {
    let events = laid_out(vec![
        event(1, 25, 12, 0, 14, 0),
        event(2, 25, 13, 0, 13, 0),
        event(3, 25, 13, 30, 14, 30),
    ]);

    assert_eq!(events[1].position, 1);
    assert_eq!(events[1].overlap, 1);
    // The zero-length event is gone by 13:30, so column 1 is free again.
    assert_eq!(events[2].position, 1);
}

#[test]
fn zero_duration_event_at_a_start_is_independent_of_input_order() {
    let forward = laid_out(vec![event(1, 25, 13, 0, 13, 0), event(2, 25, 13, 0, 14, 0)]);
    let reversed = laid_out(vec![event(2, 25, 13, 0, 14, 0), event(1, 25, 13, 0, 13, 0)]);

    for events in [&forward, &reversed] {
        let long = events.iter().find(|e| e.id == EventId(2)).unwrap();
        let instant = events.iter().find(|e| e.id == EventId(1)).unwrap();
        assert_eq!((long.position, long.overlap), (0, 0));
        assert_eq!((instant.position, instant.overlap), (0, 0));
    }
}

#[test]
fn inverted_event_at_a_start_is_independent_of_input_order() {
    let forward = laid_out(vec![event(1, 25, 13, 0, 12, 0), event(2, 25, 13, 0, 14, 0)]);
    let reversed = laid_out(vec![event(2, 25, 13, 0, 14, 0), event(1, 25, 13, 0, 12, 0)]);

    let overlap_of_long = |events: &[Event]| {
        events.iter().find(|e| e.id == EventId(2)).unwrap().overlap
    };
    assert_eq!(overlap_of_long(&forward[..]), 0);
    assert_eq!(overlap_of_long(&reversed[..]), 0);
}

// ─────────────────────────────────────────────────────────────────────────────
// Markers and slots
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn end_marker_sorts_before_start_at_same_time() {
    let a = event(1, 25, 18, 0, 19, 0);
    let b = event(2, 25, 19, 0, 20, 0);
    let sorted = markers(&[&b, &a]);

    let kinds: Vec<(EventId, MarkerKind)> =
        sorted.iter().map(|m| (m.event_id, m.kind)).collect();
    assert_eq!(
        kinds,
        vec![
            (EventId(1), MarkerKind::Start),
            (EventId(1), MarkerKind::End),
            (EventId(2), MarkerKind::Start),
            (EventId(2), MarkerKind::End),
        ]
    );
}

#[test]
fn zero_duration_start_sorts_before_other_starts_at_same_time() {
    let long = event(1, 25, 13, 0, 14, 0);
    let instant = event(2, 25, 13, 0, 13, 0);
    let sorted = markers(&[&long, &instant]);

    let kinds: Vec<(EventId, MarkerKind)> =
        sorted.iter().map(|m| (m.event_id, m.kind)).collect();
    assert_eq!(
        kinds,
        vec![
            (EventId(2), MarkerKind::End),
            (EventId(2), MarkerKind::Start),
            (EventId(1), MarkerKind::Start),
            (EventId(1), MarkerKind::End),
        ]
    );
    assert!(sorted[0].momentary);
    assert!(!sorted[2].momentary);
}

#[test]
fn first_free_slot_fills_gaps() {
    assert_eq!(first_free_slot(Vec::<u32>::new()), 0);
    assert_eq!(first_free_slot([0u32, 1]), 2);
    assert_eq!(first_free_slot([0u32, 2]), 1);
    assert_eq!(first_free_slot([1u32, 2]), 0);
}
