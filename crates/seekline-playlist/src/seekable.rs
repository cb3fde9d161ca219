//! Seekable window calculation.
//!
//! Complete playlists are seekable end to end. On live playlists the last
//! few segments are held back from the window: a player joining that close to
//! the live edge cannot buffer enough before the edge moves on (RFC 8216,
//! section 6.3.3).

use seekline_common::TimeRanges;

use crate::duration::{duration, interval_duration, normalize_expired};
use crate::playlist::Playlist;

/// Number of trailing live segments excluded from the seekable window.
pub const UNSAFE_LIVE_SEGMENTS: usize = 3;

/// Live-edge policy for [`seekable`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serialize", derive(serde::Serialize, serde::Deserialize))]
pub struct SeekPolicy {
    /// Trailing segments of a live playlist that may not be seeked into.
    pub unsafe_live_segments: usize,
}

impl SeekPolicy {
    pub fn new(unsafe_live_segments: usize) -> Self {
        Self {
            unsafe_live_segments,
        }
    }
}

impl Default for SeekPolicy {
    fn default() -> Self {
        Self::new(UNSAFE_LIVE_SEGMENTS)
    }
}

/// The range of times a player may currently seek to.
///
/// Empty when there is no playlist or it has no segments. Complete playlists
/// give `[0, duration]`. Live playlists give the span from the window start
/// to the start of the first unsafe segment, both offset by `expired` when
/// only declared durations are available.
pub fn seekable(
    playlist: Option<&Playlist>,
    expired: Option<f64>,
    policy: &SeekPolicy,
) -> TimeRanges {
    let Some(playlist) = playlist.filter(|p| !p.segments.is_empty()) else {
        return TimeRanges::empty();
    };

    if playlist.end_list {
        return TimeRanges::single(0.0, duration(Some(playlist), None, None));
    }

    let expired = normalize_expired(expired);
    let start = interval_duration(playlist, Some(playlist.media_sequence), expired);
    let safe_count = playlist
        .segments
        .len()
        .saturating_sub(policy.unsafe_live_segments);
    let end = interval_duration(playlist, Some(playlist.sequence_at(safe_count)), expired);

    tracing::debug!(
        media_sequence = playlist.media_sequence,
        safe_count,
        start,
        end,
        "live seekable window"
    );

    TimeRanges::single(start, end)
}
