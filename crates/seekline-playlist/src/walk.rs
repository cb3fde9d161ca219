//! Duration walkers.
//!
//! Both walkers measure the span from the start of the playlist window up to
//! a target sequence number. They prefer any segment whose timeline position
//! is known over summing declared durations, because declared durations
//! drift. The backward walker searches toward the start of the window, the
//! forward walker toward the live edge.

use crate::playlist::{Playlist, SegmentTiming};

/// Value reported by the forward walker when no segment past the target
/// has a known position.
pub const NO_FORWARD_ANCHOR: f64 = -1.0;

/// A duration estimate and how it was obtained.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Estimate {
    /// Anchored to a known segment timestamp.
    Precise(f64),
    /// Derived only from declared segment durations.
    Approximate(f64),
}

impl Estimate {
    pub fn value(self) -> f64 {
        match self {
            Self::Precise(value) | Self::Approximate(value) => value,
        }
    }

    pub fn is_precise(self) -> bool {
        matches!(self, Self::Precise(_))
    }
}

/// Index of `end_sequence` within the window. Sequences before the window
/// clamp to its first segment.
fn window_index(playlist: &Playlist, end_sequence: u64) -> usize {
    let offset = end_sequence.saturating_sub(playlist.media_sequence);
    usize::try_from(offset).unwrap_or(usize::MAX)
}

/// Walk from `end_sequence` toward the start of the window.
///
/// The segment at `end_sequence` is checked first: its start, or its end
/// minus its duration, is the answer. Otherwise earlier segments are visited
/// nearest first, accumulating declared durations until one with a known
/// end or start is reached. Running out of segments yields the plain sum as
/// an [`Estimate::Approximate`].
pub fn backward_duration(playlist: &Playlist, end_sequence: u64) -> Estimate {
    let index = window_index(playlist, end_sequence);
    let segments = &playlist.segments;

    if let Some(segment) = segments.get(index) {
        match segment.timing {
            SegmentTiming::Start(start) | SegmentTiming::Bounded { start, .. } => {
                return Estimate::Precise(start);
            }
            SegmentTiming::End(end) => return Estimate::Precise(end - segment.duration),
            SegmentTiming::Unknown => {}
        }
    }

    let mut result = 0.0;
    for segment in segments[..index.min(segments.len())].iter().rev() {
        match segment.timing {
            // End is checked before this segment's duration is added.
            SegmentTiming::End(end) | SegmentTiming::Bounded { end, .. } => {
                return Estimate::Precise(result + end);
            }
            SegmentTiming::Start(start) => {
                return Estimate::Precise(result + segment.duration + start);
            }
            SegmentTiming::Unknown => result += segment.duration,
        }
    }

    Estimate::Approximate(result)
}

/// Walk from `end_sequence` toward the live edge.
///
/// The first segment with a known position pins the answer: a known start is
/// reduced by the durations passed so far, a known end additionally by the
/// anchoring segment's own duration. With no such segment the result is
/// `Approximate(NO_FORWARD_ANCHOR)`, which carries no duration information.
pub fn forward_duration(playlist: &Playlist, end_sequence: u64) -> Estimate {
    let index = window_index(playlist, end_sequence);

    let mut result = 0.0;
    for segment in playlist.segments.iter().skip(index) {
        match segment.timing {
            SegmentTiming::Start(start) | SegmentTiming::Bounded { start, .. } => {
                return Estimate::Precise(start - result);
            }
            SegmentTiming::End(end) => {
                return Estimate::Precise(end - (result + segment.duration));
            }
            SegmentTiming::Unknown => result += segment.duration,
        }
    }

    Estimate::Approximate(NO_FORWARD_ANCHOR)
}
