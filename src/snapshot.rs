//! Playlist snapshot files.
//!
//! A snapshot is a JSON dump of one media playlist as a player sees it:
//! the parsed window plus whatever segment timestamps the buffer has
//! confirmed so far.

use anyhow::{Context, Result};
use seekline_playlist::Playlist;
use std::path::Path;

/// Read, parse and check a snapshot file.
pub fn load_snapshot(path: &Path) -> Result<Playlist> {
    let playlist = Playlist::from_path(path)
        .with_context(|| format!("Failed to load snapshot file: {:?}", path))?;

    tracing::debug!(
        "Loaded snapshot {:?}: {} segments from sequence {}",
        path,
        playlist.segment_count(),
        playlist.media_sequence
    );
    Ok(playlist)
}
