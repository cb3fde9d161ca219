//! Timeline reports for the command line.
//!
//! Each report is built by a pure function from a playlist snapshot and
//! rendered either as JSON or as short human-readable text. Unbounded
//! durations serialize as `null` in JSON and print as `inf` in text.

use seekline_playlist::{
    duration, media_index_for_time, normalize_expired, seekable, segment_start, Playlist,
    SeekPolicy, SegmentTiming, TimeRanges,
};
use serde::Serialize;

/// A report that can be printed as text or JSON.
pub trait Report: Serialize {
    /// Render as text, printing seconds with `precision` decimals.
    fn render_text(&self, precision: usize) -> String;
}

/// Render `report` in the requested format.
pub fn render<R: Report>(report: &R, json: bool, precision: usize) -> serde_json::Result<String> {
    if json {
        serde_json::to_string_pretty(report)
    } else {
        Ok(report.render_text(precision))
    }
}

/// Format seconds for text output.
pub fn format_seconds(seconds: f64, precision: usize) -> String {
    match seconds {
        s if s == f64::INFINITY => "inf".to_string(),
        s if s == f64::NEG_INFINITY => "-inf".to_string(),
        s => format!("{:.*}", precision, s),
    }
}

fn format_ranges(ranges: &TimeRanges, precision: usize) -> String {
    if ranges.is_empty() {
        return "(empty)".to_string();
    }
    ranges
        .iter()
        .map(|r| {
            format!(
                "[{}, {}]",
                format_seconds(r.start, precision),
                format_seconds(r.end, precision)
            )
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DurationReport {
    pub media_sequence: u64,
    pub end_sequence: Option<u64>,
    pub expired: f64,
    pub duration: f64,
}

pub fn duration_report(
    playlist: &Playlist,
    end_sequence: Option<u64>,
    expired: Option<f64>,
) -> DurationReport {
    DurationReport {
        media_sequence: playlist.media_sequence,
        end_sequence,
        expired: normalize_expired(expired),
        duration: duration(Some(playlist), end_sequence, expired),
    }
}

impl Report for DurationReport {
    fn render_text(&self, precision: usize) -> String {
        format!("duration: {}\n", format_seconds(self.duration, precision))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SeekableReport {
    pub live: bool,
    pub unsafe_segments: usize,
    pub expired: f64,
    pub ranges: TimeRanges,
}

pub fn seekable_report(
    playlist: &Playlist,
    expired: Option<f64>,
    policy: &SeekPolicy,
) -> SeekableReport {
    SeekableReport {
        live: playlist.is_live(),
        unsafe_segments: policy.unsafe_live_segments,
        expired: normalize_expired(expired),
        ranges: seekable(Some(playlist), expired, policy),
    }
}

impl Report for SeekableReport {
    fn render_text(&self, precision: usize) -> String {
        format!("seekable: {}\n", format_ranges(&self.ranges, precision))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IndexReport {
    pub time: f64,
    pub expired: f64,
    /// Segment index, or -1 when `time` precedes the playlist window.
    pub index: i64,
    /// Media sequence number of the segment at `index`.
    pub sequence: Option<u64>,
    /// Whether `time` lies inside the current seekable window.
    pub seekable: bool,
}

pub fn index_report(
    playlist: &Playlist,
    time: f64,
    expired: Option<f64>,
    policy: &SeekPolicy,
) -> IndexReport {
    let index = media_index_for_time(playlist, time, expired);
    IndexReport {
        time,
        expired: normalize_expired(expired),
        index: index.map_or(-1, |i| i as i64),
        sequence: index
            .filter(|&i| i < playlist.segment_count())
            .map(|i| playlist.sequence_at(i)),
        seekable: seekable(Some(playlist), expired, policy).contains(time),
    }
}

impl Report for IndexReport {
    fn render_text(&self, _precision: usize) -> String {
        match self.sequence {
            Some(sequence) => format!("index: {} (sequence {})\n", self.index, sequence),
            None => format!("index: {}\n", self.index),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SegmentRow {
    pub index: usize,
    pub sequence: u64,
    pub duration: f64,
    pub estimated_start: f64,
    pub timing: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InspectReport {
    pub media_sequence: u64,
    pub live: bool,
    pub target_duration: f64,
    pub duration: f64,
    pub seekable: TimeRanges,
    pub segments: Vec<SegmentRow>,
}

fn timing_label(timing: &SegmentTiming) -> &'static str {
    match timing {
        SegmentTiming::Unknown => "declared",
        SegmentTiming::Start(_) => "start",
        SegmentTiming::End(_) => "end",
        SegmentTiming::Bounded { .. } => "start+end",
    }
}

pub fn inspect_report(
    playlist: &Playlist,
    expired: Option<f64>,
    policy: &SeekPolicy,
) -> InspectReport {
    let offset = normalize_expired(expired);
    let segments = playlist
        .segments
        .iter()
        .enumerate()
        .map(|(index, segment)| SegmentRow {
            index,
            sequence: playlist.sequence_at(index),
            duration: segment.duration,
            estimated_start: segment_start(playlist, index, offset),
            timing: timing_label(&segment.timing),
        })
        .collect();

    InspectReport {
        media_sequence: playlist.media_sequence,
        live: playlist.is_live(),
        target_duration: playlist.target_duration,
        duration: duration(Some(playlist), None, expired),
        seekable: seekable(Some(playlist), expired, policy),
        segments,
    }
}

impl Report for InspectReport {
    fn render_text(&self, precision: usize) -> String {
        let mut out = format!(
            "playlist: {} from sequence {}, target duration {}\n\
             duration: {}\n\
             seekable: {}\n\
             segments: {}\n",
            if self.live { "live" } else { "complete" },
            self.media_sequence,
            format_seconds(self.target_duration, precision),
            format_seconds(self.duration, precision),
            format_ranges(&self.seekable, precision),
            self.segments.len()
        );

        for row in &self.segments {
            out.push_str(&format!(
                "  #{:<4} seq {:<8} start {:>12}  dur {:>10}  {}\n",
                row.index,
                row.sequence,
                format_seconds(row.estimated_start, precision),
                format_seconds(row.duration, precision),
                row.timing
            ));
        }

        out
    }
}
