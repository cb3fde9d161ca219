//! Playback time to segment index lookup.

use crate::duration::normalize_expired;
use crate::playlist::Playlist;
use crate::precision::ceil_least_significant_digit;

/// Slack allowed over the target duration when stepping across a segment.
const TARGET_DURATION_SLACK: f64 = 0.1;

/// Find the index of the segment containing `time`.
///
/// `time` is measured from the first segment ever published; `expired` is
/// subtracted to make it relative to the current window. Each segment is
/// stepped over using its declared duration rounded up in the last decimal
/// place, capped at `target_duration + 0.1`.
///
/// Returns `None` when `time` falls before the window. A `time` beyond the
/// last segment returns `Some(0)`, not the last index.
pub fn media_index_for_time(
    playlist: &Playlist,
    time: f64,
    expired: Option<f64>,
) -> Option<usize> {
    let mut remaining = time - normalize_expired(expired);
    if remaining < 0.0 {
        return None;
    }

    let max_step = playlist.target_duration + TARGET_DURATION_SLACK;
    for (index, segment) in playlist.segments.iter().enumerate() {
        remaining -= ceil_least_significant_digit(segment.duration).min(max_step);
        if remaining < 0.0 {
            return Some(index);
        }
    }

    Some(0)
}
