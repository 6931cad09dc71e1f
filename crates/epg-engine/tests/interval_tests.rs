//! Tests for the accepted-interval index.

use chrono::{TimeZone, Utc};
use epg_engine::{IntervalIndex, Span};

/// Helper to build a span from hour/minute pairs on 2017-07-01 (UTC).
fn span(start_hour: u32, start_min: u32, end_hour: u32, end_min: u32) -> Span {
    Span {
        start: Utc
            .with_ymd_and_hms(2017, 7, 1, start_hour, start_min, 0)
            .unwrap(),
        end: Utc
            .with_ymd_and_hms(2017, 7, 1, end_hour, end_min, 0)
            .unwrap(),
    }
}

#[test]
fn empty_index_intersects_nothing() {
    let index: IntervalIndex = IntervalIndex::new();
    assert!(index.is_empty());
    assert!(!index.intersects(&span(8, 0, 10, 0)));
}

#[test]
fn overlapping_candidate_detected() {
    let mut index = IntervalIndex::new();
    index.accept(span(8, 0, 10, 0), ());
    assert!(index.intersects(&span(9, 30, 11, 0)));
    assert!(index.intersects(&span(7, 0, 8, 30)));
}

#[test]
fn touching_candidates_do_not_intersect() {
    let mut index = IntervalIndex::new();
    index.accept(span(8, 0, 10, 0), ());
    assert!(!index.intersects(&span(10, 0, 11, 0)), "end == start is not overlap");
    assert!(!index.intersects(&span(7, 0, 8, 0)), "start == end is not overlap");
}

#[test]
fn contained_and_containing_candidates_intersect() {
    let mut index = IntervalIndex::new();
    index.accept(span(8, 0, 10, 0), ());
    assert!(index.intersects(&span(8, 30, 9, 0)));
    assert!(index.intersects(&span(6, 0, 12, 0)));
}

#[test]
fn candidate_in_gap_between_accepted_spans() {
    let mut index = IntervalIndex::new();
    index.accept(span(8, 0, 9, 0), ());
    index.accept(span(11, 0, 12, 0), ());
    assert!(!index.intersects(&span(9, 0, 11, 0)));
    assert!(index.intersects(&span(8, 59, 11, 0)));
    assert!(index.intersects(&span(9, 0, 11, 1)));
}

#[test]
fn overlapping_returns_existing_span_and_payload() {
    let mut index = IntervalIndex::new();
    index.accept(span(8, 0, 10, 0), "morning");
    index.accept(span(12, 0, 13, 0), "noon");

    let (existing, payload) = index.overlapping(&span(12, 30, 14, 0)).unwrap();
    assert_eq!(existing, span(12, 0, 13, 0));
    assert_eq!(*payload, "noon");

    assert!(index.overlapping(&span(10, 0, 12, 0)).is_none());
}

#[test]
fn spans_iterate_chronologically_regardless_of_accept_order() {
    let mut index = IntervalIndex::new();
    index.accept(span(14, 0, 15, 0), ());
    index.accept(span(8, 0, 9, 0), ());
    index.accept(span(11, 0, 12, 0), ());

    let starts: Vec<_> = index.spans().map(|s| s.start).collect();
    let mut sorted = starts.clone();
    sorted.sort();
    assert_eq!(starts, sorted);
    assert_eq!(index.len(), 3);
}

#[test]
#[should_panic(expected = "overlapping span")]
fn accepting_an_overlap_panics() {
    let mut index = IntervalIndex::new();
    index.accept(span(8, 0, 10, 0), ());
    index.accept(span(9, 0, 11, 0), ());
}

#[test]
#[should_panic(expected = "empty span")]
fn accepting_an_empty_span_panics() {
    let mut index = IntervalIndex::new();
    index.accept(span(8, 0, 10, 0), ());
    index.accept(span(8, 0, 8, 0), ());
}

#[test]
#[should_panic(expected = "empty span")]
fn accepting_an_inverted_span_panics() {
    let mut index: IntervalIndex = IntervalIndex::new();
    index.accept(span(11, 0, 10, 0), ());
}
