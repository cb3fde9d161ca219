//! Playlist duration estimation.

use crate::playlist::Playlist;
use crate::walk::{backward_duration, forward_duration, Estimate};

/// Expired time as the estimators use it: missing or NaN counts as zero.
pub fn normalize_expired(expired: Option<f64>) -> f64 {
    match expired {
        Some(value) if !value.is_nan() => value,
        _ => 0.0,
    }
}

/// Estimate the span from the start of the window to `end_sequence`.
///
/// `end_sequence` is exclusive and defaults to the end of the window.
/// `expired` is the time already dropped off the front of a live playlist;
/// it only contributes when no segment in the window has a known position.
///
/// Resolution order:
/// 1. the nearest known timestamp at or before `end_sequence`
/// 2. the nearest known timestamp after it
/// 3. the sum of declared durations plus `expired`
pub fn interval_duration(playlist: &Playlist, end_sequence: Option<u64>, expired: f64) -> f64 {
    let end_sequence = end_sequence.unwrap_or_else(|| playlist.end_sequence());
    if end_sequence < playlist.media_sequence {
        return 0.0;
    }

    let backward = backward_duration(playlist, end_sequence);
    if backward.is_precise() {
        let value = backward.value();
        tracing::trace!(end_sequence, value, "interval anchored before target");
        return value;
    }

    match forward_duration(playlist, end_sequence) {
        Estimate::Precise(value) => {
            tracing::trace!(end_sequence, value, "interval anchored after target");
            value
        }
        Estimate::Approximate(_) => {
            let value = backward.value() + expired;
            tracing::trace!(end_sequence, value, expired, "interval summed from durations");
            value
        }
    }
}

/// Duration of a playlist, or of its prefix up to `end_sequence`.
///
/// Without `end_sequence`, a declared total duration wins outright and a
/// live playlist is unbounded (`f64::INFINITY`). An explicit `end_sequence`
/// always goes through [`interval_duration`]. A missing playlist has zero
/// duration.
pub fn duration(
    playlist: Option<&Playlist>,
    end_sequence: Option<u64>,
    expired: Option<f64>,
) -> f64 {
    let Some(playlist) = playlist else {
        return 0.0;
    };
    let expired = normalize_expired(expired);

    if end_sequence.is_none() {
        if let Some(total) = playlist.total_duration {
            return total;
        }
        if playlist.is_live() {
            return f64::INFINITY;
        }
    }

    interval_duration(playlist, end_sequence, expired)
}

/// Estimated start time of `segments[index]`.
pub fn segment_start(playlist: &Playlist, index: usize, expired: f64) -> f64 {
    interval_duration(playlist, Some(playlist.sequence_at(index)), expired)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::playlist::Segment;

    fn three_tens() -> Vec<Segment> {
        vec![Segment::new(10.0), Segment::new(10.0), Segment::new(10.0)]
    }

    #[test]
    fn test_missing_playlist_is_zero() {
        assert_eq!(duration(None, None, None), 0.0);
        assert_eq!(duration(None, Some(4), Some(12.0)), 0.0);
    }

    #[test]
    fn test_vod_sums_segments() {
        let playlist = Playlist::vod(10.0).with_segments(three_tens());
        assert_eq!(duration(Some(&playlist), None, None), 30.0);
    }

    #[test]
    fn test_total_duration_is_authoritative() {
        let playlist = Playlist::vod(10.0)
            .with_segments(three_tens())
            .with_total_duration(29.97);
        assert_eq!(duration(Some(&playlist), None, None), 29.97);

        let live = Playlist::live(0, 10.0)
            .with_segments(three_tens())
            .with_total_duration(12.0);
        assert_eq!(duration(Some(&live), None, None), 12.0);
    }

    #[test]
    fn test_live_is_infinite() {
        let playlist = Playlist::live(0, 10.0).with_segments(three_tens());
        assert_eq!(duration(Some(&playlist), None, None), f64::INFINITY);
    }

    #[test]
    fn test_sub_range_bypasses_short_circuits() {
        let playlist = Playlist::live(0, 10.0)
            .with_segments(three_tens())
            .with_total_duration(99.0);
        assert_eq!(duration(Some(&playlist), Some(2), None), 20.0);
    }

    #[test]
    fn test_range_before_window_is_zero() {
        let playlist = Playlist::live(10, 10.0).with_segments(three_tens());
        assert_eq!(duration(Some(&playlist), Some(9), Some(50.0)), 0.0);
        assert_eq!(interval_duration(&playlist, Some(3), 50.0), 0.0);
    }

    #[test]
    fn test_expired_added_only_when_summing() {
        let playlist = Playlist::live(10, 10.0).with_segments(three_tens());
        assert_eq!(duration(Some(&playlist), Some(12), Some(50.0)), 70.0);

        let mut segments = three_tens();
        segments[0] = Segment::new(10.0).with_start(48.0);
        let anchored = Playlist::live(10, 10.0).with_segments(segments);
        assert_eq!(duration(Some(&anchored), Some(12), Some(50.0)), 68.0);
    }

    #[test]
    fn test_nan_expired_counts_as_zero() {
        let playlist = Playlist::live(0, 10.0).with_segments(three_tens());
        assert_eq!(duration(Some(&playlist), Some(1), Some(f64::NAN)), 10.0);
    }

    #[test]
    fn test_falls_back_to_forward_anchor() {
        let mut segments = three_tens();
        segments[2] = Segment::new(10.0).with_start(25.0);
        let playlist = Playlist::vod(10.0).with_segments(segments);

        // Nothing known before sequence 1, so segment 2's start pins it.
        assert_eq!(interval_duration(&playlist, Some(1), 0.0), 15.0);
    }

    #[test]
    fn test_window_ending_at_u64_max() {
        let mut playlist = Playlist::vod(10.0).with_segments(three_tens());
        playlist.media_sequence = u64::MAX - 3;
        assert!(playlist.validate().is_ok());

        assert_eq!(duration(Some(&playlist), None, None), 30.0);
        assert_eq!(duration(Some(&playlist), Some(u64::MAX - 1), None), 20.0);
        assert_eq!(segment_start(&playlist, 2, 0.0), 20.0);
    }

    #[test]
    fn test_overflowing_window_does_not_panic() {
        let mut playlist = Playlist::vod(10.0).with_segments(three_tens());
        playlist.media_sequence = u64::MAX;
        assert!(playlist.validate().is_err());

        assert!(duration(Some(&playlist), None, None).is_finite());
        assert!(segment_start(&playlist, 2, 0.0).is_finite());
    }

    #[test]
    fn test_normalize_expired() {
        assert_eq!(normalize_expired(None), 0.0);
        assert_eq!(normalize_expired(Some(f64::NAN)), 0.0);
        assert_eq!(normalize_expired(Some(12.5)), 12.5);
    }

    #[test]
    fn test_segment_start() {
        let mut segments = three_tens();
        segments[1] = Segment::new(10.0).with_start(10.5);
        let playlist = Playlist::live(3, 10.0).with_segments(segments);

        assert_eq!(segment_start(&playlist, 0, 0.0), 0.5);
        assert_eq!(segment_start(&playlist, 1, 0.0), 10.5);
        assert_eq!(segment_start(&playlist, 2, 0.0), 20.5);
    }
}
