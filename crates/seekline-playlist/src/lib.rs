//! Seekline-Playlist: timeline estimation over HLS media playlist snapshots.
//!
//! Playlists are only partially observed: a segment's exact position on the
//! timeline is known once a buffering pipeline has handled it, and otherwise
//! only its declared duration is. This crate turns such snapshots into the
//! best available answers about the timeline.
//!
//! # Modules
//!
//! - `playlist` - Snapshot model (playlist, segments, known timing)
//! - `precision` - Decimal rounding margin for summed durations
//! - `walk` - Backward and forward duration walkers
//! - `duration` - Interval resolver and playlist duration
//! - `seekable` - Seekable window with a live-edge safety margin
//! - `media_index` - Playback time to segment index lookup
//!
//! # Estimation
//!
//! Every duration question is reduced to "how long is the window up to
//! sequence N". Known timestamps are ground truth, so the resolver looks for
//! the nearest one before N, then after N, and only then falls back to
//! summing declared durations plus the time already expired from a live
//! window.
//!
//! All operations are pure functions of the snapshot and never fail;
//! [`Playlist::validate`] checks a snapshot up front.
//!
//! ```
//! use seekline_playlist::{duration, seekable, Playlist, SeekPolicy, Segment};
//!
//! let playlist = Playlist::vod(10.0)
//!     .with_segments([Segment::new(10.0), Segment::new(10.0), Segment::new(10.0)]);
//!
//! assert_eq!(duration(Some(&playlist), None, None), 30.0);
//! assert_eq!(seekable(Some(&playlist), None, &SeekPolicy::default()).end(0), Some(30.0));
//! ```

pub mod duration;
pub mod media_index;
pub mod playlist;
pub mod precision;
pub mod seekable;
pub mod walk;

pub use duration::{duration, interval_duration, normalize_expired, segment_start};
pub use media_index::media_index_for_time;
pub use playlist::{Playlist, Segment, SegmentTiming};
pub use precision::ceil_least_significant_digit;
pub use seekable::{seekable, SeekPolicy, UNSAFE_LIVE_SEGMENTS};
pub use seekline_common::{Error, Result, TimeRange, TimeRanges};
pub use walk::{backward_duration, forward_duration, Estimate};
