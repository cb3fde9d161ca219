//! Timeline estimation properties over whole playlists.

use seekline_playlist::{
    duration, interval_duration, media_index_for_time, seekable, Playlist, SeekPolicy, Segment,
    TimeRanges, UNSAFE_LIVE_SEGMENTS,
};

/// Durations typical of 29.97fps content cut on keyframes.
const DURATIONS: [f64; 8] = [10.01, 9.009, 10.01, 6.006, 10.01, 9.976, 4.004, 10.01];

fn vod(durations: &[f64]) -> Playlist {
    Playlist::vod(11.0).with_segments(durations.iter().map(|&d| Segment::new(d)))
}

fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {expected}, got {actual}"
    );
}

// ---------------------------------------------------------------------------
// Duration
// ---------------------------------------------------------------------------

#[test]
fn complete_playlist_duration_is_sum_of_segments() {
    for len in 0..=DURATIONS.len() {
        let playlist = vod(&DURATIONS[..len]);
        let expected: f64 = DURATIONS[..len].iter().sum();
        assert_close(duration(Some(&playlist), None, None), expected);
    }
}

#[test]
fn total_duration_ignores_segment_data() {
    let playlist = vod(&DURATIONS).with_total_duration(12.5);
    assert_eq!(duration(Some(&playlist), None, None), 12.5);

    let mut anchored = vod(&DURATIONS).with_total_duration(12.5);
    anchored.segments[3] = Segment::new(6.006).with_start(1_000.0);
    assert_eq!(duration(Some(&anchored), None, None), 12.5);
}

#[test]
fn live_playlist_is_unbounded() {
    let playlist = Playlist::live(1234, 10.0).with_segments(DURATIONS.map(Segment::new));
    assert_eq!(duration(Some(&playlist), None, Some(500.0)), f64::INFINITY);
}

#[test]
fn interval_duration_is_monotonic() {
    let mut playlist = Playlist::live(50, 11.0).with_segments(DURATIONS.map(Segment::new));
    playlist.segments[5] = Segment::new(9.976).with_start(400.0);

    let values: Vec<f64> = (40..=60)
        .map(|sequence| interval_duration(&playlist, Some(sequence), 350.0))
        .collect();
    for pair in values.windows(2) {
        assert!(pair[0] <= pair[1], "{} > {}", pair[0], pair[1]);
    }
}

#[test]
fn known_start_beats_summed_durations() {
    let playlist = Playlist::vod(10.0).with_segments([
        Segment::new(10.0),
        Segment::new(10.0).with_start(12.0),
        Segment::new(10.0),
    ]);

    // Segment 0 alone would sum to 10, but segment 1 is known to start at 12.
    assert_eq!(interval_duration(&playlist, Some(2), 0.0), 22.0);
    assert_eq!(duration(Some(&playlist), Some(2), None), 22.0);
}

#[test]
fn repeated_calls_are_identical() {
    let mut playlist = Playlist::live(7, 10.0).with_segments(DURATIONS.map(Segment::new));
    playlist.segments[2] = Segment::new(10.01).with_end(131.0);
    let policy = SeekPolicy::default();

    let first = (
        duration(Some(&playlist), Some(10), Some(90.0)),
        seekable(Some(&playlist), Some(90.0), &policy),
        media_index_for_time(&playlist, 130.0, Some(90.0)),
    );
    for _ in 0..10 {
        let again = (
            duration(Some(&playlist), Some(10), Some(90.0)),
            seekable(Some(&playlist), Some(90.0), &policy),
            media_index_for_time(&playlist, 130.0, Some(90.0)),
        );
        assert_eq!(again, first);
    }
}

// ---------------------------------------------------------------------------
// Seekable
// ---------------------------------------------------------------------------

#[test]
fn complete_playlist_seekable_matches_duration() {
    let playlist = vod(&DURATIONS);
    let ranges = seekable(Some(&playlist), None, &SeekPolicy::default());
    assert_eq!(
        ranges,
        TimeRanges::single(0.0, duration(Some(&playlist), None, None))
    );
}

#[test]
fn short_live_playlist_clamps_safe_count() {
    for len in 1..=UNSAFE_LIVE_SEGMENTS {
        let playlist = Playlist::live(0, 10.0)
            .with_segments(DURATIONS[..len].iter().map(|&d| Segment::new(d)));
        let ranges = seekable(Some(&playlist), None, &SeekPolicy::default());
        assert_eq!(ranges, TimeRanges::single(0.0, 0.0), "len {len}");
    }
}

#[test]
fn three_ten_second_segments() {
    let segments = [Segment::new(10.0), Segment::new(10.0), Segment::new(10.0)];

    let complete = Playlist::vod(10.0).with_segments(segments.clone());
    assert_eq!(duration(Some(&complete), None, None), 30.0);
    assert_eq!(
        seekable(Some(&complete), None, &SeekPolicy::default()),
        TimeRanges::single(0.0, 30.0)
    );

    let live = Playlist::live(0, 10.0).with_segments(segments);
    assert_eq!(duration(Some(&live), None, None), f64::INFINITY);
    assert_eq!(
        seekable(Some(&live), None, &SeekPolicy::default()),
        TimeRanges::single(0.0, 0.0)
    );

    assert_eq!(media_index_for_time(&complete, 5.0, Some(0.0)), Some(0));
    assert_eq!(media_index_for_time(&complete, 25.0, Some(0.0)), Some(2));
    assert_eq!(media_index_for_time(&complete, -5.0, Some(0.0)), None);
}

#[test]
fn sliding_live_window_keeps_seekable_end_stable() {
    // The same stream observed twice, one segment apart, after the first
    // refresh dropped a 10s segment off the front.
    let before = Playlist::live(100, 10.0).with_segments((0..6).map(|_| Segment::new(10.0)));
    let after = Playlist::live(101, 10.0).with_segments((0..6).map(|_| Segment::new(10.0)));
    let policy = SeekPolicy::default();

    let before_range = seekable(Some(&before), Some(1000.0), &policy);
    let after_range = seekable(Some(&after), Some(1010.0), &policy);

    assert_eq!(before_range, TimeRanges::single(1000.0, 1030.0));
    assert_eq!(after_range, TimeRanges::single(1010.0, 1040.0));
}

// ---------------------------------------------------------------------------
// Media index
// ---------------------------------------------------------------------------

#[test]
fn every_segment_midpoint_maps_to_its_index() {
    let playlist = vod(&DURATIONS);
    let mut start = 0.0;
    for (index, d) in DURATIONS.iter().enumerate() {
        let midpoint = start + d / 2.0;
        assert_eq!(
            media_index_for_time(&playlist, midpoint, None),
            Some(index),
            "midpoint {midpoint}"
        );
        start += d;
    }
}

#[test]
fn time_past_the_end_falls_back_to_first_segment() {
    let playlist = vod(&DURATIONS);
    let total: f64 = DURATIONS.iter().sum();
    assert_eq!(media_index_for_time(&playlist, total + 5.0, None), Some(0));
}
