//! Time ranges reported to media element consumers.
//!
//! A [`TimeRanges`] value is either empty or holds ordered `(start, end)`
//! pairs in seconds, like the `TimeRanges` object exposed by HTML media
//! elements.

use serde::{Deserialize, Serialize};

/// A single `[start, end]` interval in seconds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TimeRange {
    /// Start of the interval in seconds.
    pub start: f64,
    /// End of the interval in seconds.
    pub end: f64,
}

/// An ordered collection of time ranges, possibly empty.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TimeRanges {
    ranges: Vec<TimeRange>,
}

impl TimeRanges {
    /// A collection holding no ranges.
    pub fn empty() -> Self {
        Self::default()
    }

    /// A collection holding exactly one `[start, end]` range.
    pub fn single(start: f64, end: f64) -> Self {
        Self {
            ranges: vec![TimeRange { start, end }],
        }
    }

    /// Number of ranges.
    pub fn len(&self) -> usize {
        self.ranges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ranges.is_empty()
    }

    /// Start of the range at `index`, if there is one.
    pub fn start(&self, index: usize) -> Option<f64> {
        self.ranges.get(index).map(|r| r.start)
    }

    /// End of the range at `index`, if there is one.
    pub fn end(&self, index: usize) -> Option<f64> {
        self.ranges.get(index).map(|r| r.end)
    }

    pub fn iter(&self) -> impl Iterator<Item = &TimeRange> {
        self.ranges.iter()
    }

    /// Whether `time` falls inside any range, bounds included.
    pub fn contains(&self, time: f64) -> bool {
        self.ranges.iter().any(|r| time >= r.start && time <= r.end)
    }
}
