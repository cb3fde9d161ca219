//! Common error types used throughout seekline.
//!
//! Timeline estimation itself never fails; these errors come from checking
//! and loading playlist snapshots before they reach the estimator.

/// Common error type for seekline.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The playlist as a whole is unusable.
    #[error("Invalid playlist: {0}")]
    InvalidPlaylist(String),

    /// A single segment carries unusable timing data.
    #[error("Invalid segment {index}: {reason}")]
    InvalidSegment {
        /// Position of the segment within the playlist window.
        index: usize,
        /// What is wrong with it.
        reason: String,
    },

    /// An I/O operation failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A snapshot could not be decoded.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Create a new InvalidPlaylist error.
    pub fn invalid_playlist<S: Into<String>>(msg: S) -> Self {
        Self::InvalidPlaylist(msg.into())
    }

    /// Create a new InvalidSegment error.
    pub fn invalid_segment<S: Into<String>>(index: usize, reason: S) -> Self {
        Self::InvalidSegment {
            index,
            reason: reason.into(),
        }
    }
}

/// Result type alias using the common Error type.
pub type Result<T> = std::result::Result<T, Error>;
