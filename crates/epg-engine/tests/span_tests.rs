//! Tests for feed timestamp parsing and span construction.

use chrono::{TimeZone, Utc};
use epg_engine::span::parse_feed_timestamp;
use epg_engine::{EngineError, Span};

fn span(start: &str, end: &str) -> Span {
    Span::parse("Alfa", start, end).unwrap()
}

#[test]
fn offset_is_normalized_to_utc() {
    let t = parse_feed_timestamp("Alfa", "20170701080000 +0300").unwrap();
    assert_eq!(t, Utc.with_ymd_and_hms(2017, 7, 1, 5, 0, 0).unwrap());
}

#[test]
fn negative_offset_is_normalized_to_utc() {
    let t = parse_feed_timestamp("Alfa", "20170630230000 -0130").unwrap();
    assert_eq!(t, Utc.with_ymd_and_hms(2017, 7, 1, 0, 30, 0).unwrap());
}

#[test]
fn surrounding_whitespace_is_tolerated() {
    let t = parse_feed_timestamp("Alfa", " 20170701080000 +0000\n").unwrap();
    assert_eq!(t, Utc.with_ymd_and_hms(2017, 7, 1, 8, 0, 0).unwrap());
}

#[test]
fn missing_offset_is_rejected() {
    let err = parse_feed_timestamp("Alfa", "20170701080000").unwrap_err();
    assert!(matches!(err, EngineError::InvalidTimestamp { .. }));
}

#[test]
fn garbage_is_rejected_with_channel_in_message() {
    let err = parse_feed_timestamp("Alfa", "tomorrow morning").unwrap_err();
    let msg = err.to_string();
    assert!(msg.contains("Alfa"), "message should name the channel: {msg}");
    assert!(msg.contains("tomorrow morning"), "message should quote the value: {msg}");
}

#[test]
fn inverted_span_is_rejected() {
    let err = Span::parse("Alfa", "20170701100000 +0300", "20170701080000 +0300").unwrap_err();
    assert!(matches!(err, EngineError::InvalidSpan { .. }));
}

#[test]
fn empty_span_is_rejected() {
    let err = Span::parse("Alfa", "20170701100000 +0000", "20170701100000 +0000").unwrap_err();
    assert!(matches!(err, EngineError::InvalidSpan { .. }));
}

#[test]
fn same_instant_in_different_offsets_is_equal() {
    let a = span("20170701080000 +0000", "20170701100000 +0000");
    let b = span("20170701110000 +0300", "20170701130000 +0300");
    assert_eq!(a, b);
}

#[test]
fn overlap_is_half_open() {
    let a = span("20170701080000 +0000", "20170701100000 +0000");
    let touching = span("20170701100000 +0000", "20170701110000 +0000");
    let inside = span("20170701083000 +0000", "20170701090000 +0000");
    assert!(!a.overlaps(&touching));
    assert!(!touching.overlaps(&a));
    assert!(a.overlaps(&inside));
    assert!(inside.overlaps(&a));
    assert!(a.overlaps(&a));
}

#[test]
fn duration_in_minutes() {
    let a = span("20170701080000 +0000", "20170701093000 +0000");
    assert_eq!(a.duration_minutes(), 90);
}

#[test]
fn display_uses_output_layout() {
    let a = span("20170701080000 +0000", "20170701100000 +0000");
    assert_eq!(a.to_string(), "[2017-07-01T08:00:00Z, 2017-07-01T10:00:00Z)");
}
