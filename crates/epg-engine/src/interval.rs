//! Accepted-interval index for one channel's timeline.
//!
//! Spans are keyed by start instant. Because accepted spans never overlap,
//! ordering by start also orders them by end, so the only stored span that can
//! intersect a candidate `[s, e)` is the one with the greatest start `< e`.
//! It intersects iff its end is `> s`.

use chrono::{DateTime, Utc};
use std::collections::BTreeMap;
use std::ops::Bound::{Excluded, Unbounded};

use crate::span::Span;

/// Append-only set of non-overlapping spans, each tagged with a payload.
#[derive(Debug, Clone)]
pub struct IntervalIndex<T = ()> {
    spans: BTreeMap<DateTime<Utc>, (DateTime<Utc>, T)>,
}

impl<T> Default for IntervalIndex<T> {
    fn default() -> Self {
        Self {
            spans: BTreeMap::new(),
        }
    }
}

impl<T> IntervalIndex<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// True if `candidate` overlaps any accepted span. Touching spans do not
    /// count.
    pub fn intersects(&self, candidate: &Span) -> bool {
        self.overlapping(candidate).is_some()
    }

    /// The accepted span that `candidate` overlaps, with its payload.
    pub fn overlapping(&self, candidate: &Span) -> Option<(Span, &T)> {
        let (&start, (end, payload)) = self
            .spans
            .range((Unbounded, Excluded(candidate.end)))
            .next_back()?;
        let existing = Span { start, end: *end };
        existing
            .overlaps(candidate)
            .then_some((existing, payload))
    }

    /// Record `span` as accepted.
    ///
    /// # Panics
    /// Panics if `span` is empty or inverted, or if it intersects an already
    /// accepted span. Callers must check [`intersects`](Self::intersects) first.
    pub fn accept(&mut self, span: Span, payload: T) {
        assert!(
            span.start < span.end,
            "IntervalIndex::accept called with empty span {span}"
        );
        assert!(
            !self.intersects(&span),
            "IntervalIndex::accept called with overlapping span {span}"
        );
        self.spans.insert(span.start, (span.end, payload));
    }

    pub fn len(&self) -> usize {
        self.spans.len()
    }

    pub fn is_empty(&self) -> bool {
        self.spans.is_empty()
    }

    /// Accepted spans in chronological order.
    pub fn spans(&self) -> impl Iterator<Item = Span> + '_ {
        self.spans
            .iter()
            .map(|(&start, &(end, _))| Span { start, end })
    }
}
