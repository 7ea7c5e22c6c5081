//! Half-open datetime span arithmetic.
//!
//! Supplement windows and shifts are treated as half-open spans
//! `[start, end)`. Merging removes double counting within a rule; the
//! intersection of two merged span lists is what ultimately gets priced.

use chrono::NaiveDateTime;
use serde::Serialize;

/// A half-open span of time `[start, end)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TimeSpan {
    /// Span start (inclusive).
    pub start: NaiveDateTime,
    /// Span end (exclusive).
    pub end: NaiveDateTime,
}

impl TimeSpan {
    /// Creates a span. Callers are expected to pass `start <= end`; empty
    /// spans are filtered out by [`merge_spans`].
    pub fn new(start: NaiveDateTime, end: NaiveDateTime) -> Self {
        Self { start, end }
    }

    /// The span's length in minutes.
    pub fn minutes(&self) -> i64 {
        (self.end - self.start).num_minutes()
    }

    /// The intersection with another span, if non-empty.
    pub fn intersect(&self, other: &TimeSpan) -> Option<TimeSpan> {
        let start = self.start.max(other.start);
        let end = self.end.min(other.end);
        (start < end).then_some(TimeSpan { start, end })
    }
}

/// Merges a list of spans into a sorted list of disjoint spans.
///
/// Empty spans are dropped; overlapping or touching spans are coalesced so
/// that no minute is counted twice when the result is intersected with a
/// shift.
pub fn merge_spans(mut spans: Vec<TimeSpan>) -> Vec<TimeSpan> {
    spans.retain(|s| s.start < s.end);
    spans.sort_by_key(|s| s.start);

    let mut merged: Vec<TimeSpan> = Vec::with_capacity(spans.len());
    for span in spans {
        match merged.last_mut() {
            Some(last) if span.start <= last.end => {
                if span.end > last.end {
                    last.end = span.end;
                }
            }
            _ => merged.push(span),
        }
    }
    merged
}

/// Intersects two sorted, disjoint span lists.
///
/// Both inputs must come from [`merge_spans`]; the output is again sorted and
/// disjoint.
pub fn intersect_spans(a: &[TimeSpan], b: &[TimeSpan]) -> Vec<TimeSpan> {
    let mut out = Vec::new();
    let (mut i, mut j) = (0, 0);

    while i < a.len() && j < b.len() {
        if let Some(overlap) = a[i].intersect(&b[j]) {
            out.push(overlap);
        }
        if a[i].end <= b[j].end {
            i += 1;
        } else {
            j += 1;
        }
    }
    out
}

/// Sums the lengths of a list of spans, in minutes.
pub fn total_minutes(spans: &[TimeSpan]) -> i64 {
    spans.iter().map(TimeSpan::minutes).sum()
}
