//! MatchRange: Half-Open Match Intervals
//!
//! A match range covers one occurrence of a search word (or a merged group
//! of occurrences) as byte offsets into the source text. Merging is a
//! single immutable pass over a sorted list; overlapping ranges collapse,
//! touching ranges stay separate.

use serde::{Deserialize, Serialize};

// =============================================================================
// Types
// =============================================================================

/// Half-open byte range `[start, end)` into a source string
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchRange {
    pub start: usize,
    pub end: usize,
}

impl MatchRange {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Number of bytes covered
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.end <= self.start
    }

    /// Strict overlap check; touching ranges (`other.start == self.end`)
    /// do not overlap
    pub fn overlaps(&self, other: &MatchRange) -> bool {
        self.start < other.end && other.start < self.end
    }
}

// =============================================================================
// Merging
// =============================================================================

/// Merge strictly overlapping ranges into maximal ranges.
///
/// Input order is irrelevant; output is sorted by start. Only strict
/// overlap (`next.start < current.end`) merges - adjacent ranges such as
/// `[0,1)` and `[1,2)` remain two entries. Zero-width ranges are dropped.
pub fn merge_overlapping(mut ranges: Vec<MatchRange>) -> Vec<MatchRange> {
    ranges.retain(|r| !r.is_empty());
    if ranges.len() <= 1 {
        return ranges;
    }

    ranges.sort_by(|a, b| a.start.cmp(&b.start).then_with(|| a.end.cmp(&b.end)));

    let mut merged: Vec<MatchRange> = Vec::with_capacity(ranges.len());
    for range in ranges {
        match merged.last_mut() {
            Some(current) if range.start < current.end => {
                current.end = current.end.max(range.end);
            }
            _ => merged.push(range),
        }
    }

    merged
}

// =============================================================================
// Tests
// =============================================================================
