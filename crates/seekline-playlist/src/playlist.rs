//! Read-only media playlist snapshots.
//!
//! A [`Playlist`] is the already-parsed view of one HLS media playlist at a
//! point in time. Segments only learn their exact position on the overall
//! timeline once a buffering pipeline has seen them, so each [`Segment`]
//! carries a [`SegmentTiming`] describing how much of that position is known.

use seekline_common::{Error, Result};

/// What is known about a segment's position on the overall timeline.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum SegmentTiming {
    /// Nothing beyond the declared duration.
    #[default]
    Unknown,
    /// The exact start time is known.
    Start(f64),
    /// The exact end time is known.
    End(f64),
    /// Both ends are known. `end - start` is close to, but not necessarily
    /// equal to, the declared duration.
    Bounded { start: f64, end: f64 },
}

impl SegmentTiming {
    /// Build a timing from independently optional timestamps.
    pub fn from_parts(start: Option<f64>, end: Option<f64>) -> Self {
        match (start, end) {
            (None, None) => Self::Unknown,
            (Some(start), None) => Self::Start(start),
            (None, Some(end)) => Self::End(end),
            (Some(start), Some(end)) => Self::Bounded { start, end },
        }
    }

    /// Exact start time, if known.
    pub fn start(&self) -> Option<f64> {
        match *self {
            Self::Start(start) | Self::Bounded { start, .. } => Some(start),
            Self::Unknown | Self::End(_) => None,
        }
    }

    /// Exact end time, if known.
    pub fn end(&self) -> Option<f64> {
        match *self {
            Self::End(end) | Self::Bounded { end, .. } => Some(end),
            Self::Unknown | Self::Start(_) => None,
        }
    }

    pub fn is_known(&self) -> bool {
        !matches!(self, Self::Unknown)
    }
}

/// A single media segment.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serialize",
    derive(serde::Serialize, serde::Deserialize),
    serde(from = "SegmentRecord", into = "SegmentRecord")
)]
pub struct Segment {
    /// Declared duration in seconds (`#EXTINF`).
    pub duration: f64,
    /// Timeline position, once established by the buffering pipeline.
    pub timing: SegmentTiming,
}

impl Segment {
    /// A segment with a declared duration and no known position.
    pub fn new(duration: f64) -> Self {
        Self {
            duration,
            timing: SegmentTiming::Unknown,
        }
    }

    /// Record a known start time, keeping any known end time.
    pub fn with_start(mut self, start: f64) -> Self {
        self.timing = SegmentTiming::from_parts(Some(start), self.timing.end());
        self
    }

    /// Record a known end time, keeping any known start time.
    pub fn with_end(mut self, end: f64) -> Self {
        self.timing = SegmentTiming::from_parts(self.timing.start(), Some(end));
        self
    }

    pub fn start(&self) -> Option<f64> {
        self.timing.start()
    }

    pub fn end(&self) -> Option<f64> {
        self.timing.end()
    }
}

/// Wire shape of a segment: flat optional timestamps, as players dump them.
#[cfg(feature = "serialize")]
#[derive(serde::Serialize, serde::Deserialize)]
struct SegmentRecord {
    duration: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    start: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    end: Option<f64>,
}

#[cfg(feature = "serialize")]
impl From<SegmentRecord> for Segment {
    fn from(record: SegmentRecord) -> Self {
        Self {
            duration: record.duration,
            timing: SegmentTiming::from_parts(record.start, record.end),
        }
    }
}

#[cfg(feature = "serialize")]
impl From<Segment> for SegmentRecord {
    fn from(segment: Segment) -> Self {
        Self {
            duration: segment.duration,
            start: segment.start(),
            end: segment.end(),
        }
    }
}

/// Snapshot of a media playlist.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serialize", derive(serde::Serialize, serde::Deserialize))]
pub struct Playlist {
    /// Sequence number of `segments[0]`.
    #[cfg_attr(feature = "serialize", serde(default, alias = "mediaSequence"))]
    pub media_sequence: u64,
    /// Segments in playback order.
    #[cfg_attr(feature = "serialize", serde(default))]
    pub segments: Vec<Segment>,
    /// Nominal segment length in seconds (`#EXT-X-TARGETDURATION`).
    #[cfg_attr(feature = "serialize", serde(alias = "targetDuration"))]
    pub target_duration: f64,
    /// Whether `#EXT-X-ENDLIST` was seen, i.e. the playlist will not grow.
    #[cfg_attr(feature = "serialize", serde(default, alias = "endList"))]
    pub end_list: bool,
    /// Authoritative total duration, when the surrounding system knows it.
    #[cfg_attr(
        feature = "serialize",
        serde(
            default,
            alias = "totalDuration",
            skip_serializing_if = "Option::is_none"
        )
    )]
    pub total_duration: Option<f64>,
}

impl Playlist {
    /// Create an empty, complete (VOD) playlist starting at sequence 0.
    pub fn vod(target_duration: f64) -> Self {
        Self {
            media_sequence: 0,
            segments: Vec::new(),
            target_duration,
            end_list: true,
            total_duration: None,
        }
    }

    /// Create an empty live playlist whose window starts at `media_sequence`.
    pub fn live(media_sequence: u64, target_duration: f64) -> Self {
        Self {
            media_sequence,
            end_list: false,
            ..Self::vod(target_duration)
        }
    }

    pub fn with_segment(mut self, segment: Segment) -> Self {
        self.segments.push(segment);
        self
    }

    pub fn with_segments(mut self, segments: impl IntoIterator<Item = Segment>) -> Self {
        self.segments.extend(segments);
        self
    }

    pub fn with_total_duration(mut self, total_duration: f64) -> Self {
        self.total_duration = Some(total_duration);
        self
    }

    /// Get segment count.
    pub fn segment_count(&self) -> usize {
        self.segments.len()
    }

    /// Sequence number one past the last retained segment.
    ///
    /// Saturates at `u64::MAX`; [`Playlist::validate`] rejects windows that
    /// would need to go past it.
    pub fn end_sequence(&self) -> u64 {
        self.sequence_at(self.segments.len())
    }

    /// Media sequence number of `segments[index]`, saturating at `u64::MAX`.
    pub fn sequence_at(&self, index: usize) -> u64 {
        self.media_sequence.saturating_add(index as u64)
    }

    pub fn is_live(&self) -> bool {
        !self.end_list
    }

    /// Check that the snapshot is safe to estimate over.
    ///
    /// Durations must be positive and finite, timestamps finite, and the
    /// target duration positive. The estimators assume this holds.
    pub fn validate(&self) -> Result<()> {
        if !(self.target_duration.is_finite() && self.target_duration > 0.0) {
            return Err(Error::invalid_playlist(format!(
                "target duration must be positive, got {}",
                self.target_duration
            )));
        }

        if self
            .media_sequence
            .checked_add(self.segments.len() as u64)
            .is_none()
        {
            return Err(Error::invalid_playlist(format!(
                "media sequence {} overflows with {} segments",
                self.media_sequence,
                self.segments.len()
            )));
        }

        if let Some(total) = self.total_duration {
            if !(total.is_finite() && total >= 0.0) {
                return Err(Error::invalid_playlist(format!(
                    "total duration must be finite and non-negative, got {}",
                    total
                )));
            }
        }

        for (index, segment) in self.segments.iter().enumerate() {
            if !(segment.duration.is_finite() && segment.duration > 0.0) {
                return Err(Error::invalid_segment(
                    index,
                    format!("duration must be positive, got {}", segment.duration),
                ));
            }
            let timestamps = [segment.start(), segment.end()];
            if timestamps.iter().flatten().any(|t| !t.is_finite()) {
                return Err(Error::invalid_segment(index, "timestamps must be finite"));
            }
        }

        Ok(())
    }

    /// Decode a JSON snapshot and check it with [`Playlist::validate`].
    #[cfg(feature = "serialize")]
    pub fn from_json(content: &str) -> Result<Self> {
        let playlist: Self = serde_json::from_str(content)?;
        playlist.validate()?;
        Ok(playlist)
    }

    /// Read a JSON snapshot from `path`. See [`Playlist::from_json`].
    #[cfg(feature = "serialize")]
    pub fn from_path(path: &std::path::Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }
}
