use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "seekline")]
#[command(author, version, about = "Timeline estimation for HLS media playlist snapshots")]
pub struct Cli {
    /// Path to config file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Estimate the duration of a playlist or of its prefix
    Duration {
        /// Playlist snapshot (JSON)
        #[arg(required = true)]
        snapshot: PathBuf,

        /// Measure up to this media sequence number (exclusive)
        #[arg(long)]
        end_sequence: Option<u64>,

        /// Seconds already expired from the front of a live playlist
        #[arg(long, allow_negative_numbers = true)]
        expired: Option<f64>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show the range of times that may currently be seeked to
    Seekable {
        /// Playlist snapshot (JSON)
        #[arg(required = true)]
        snapshot: PathBuf,

        /// Seconds already expired from the front of a live playlist
        #[arg(long, allow_negative_numbers = true)]
        expired: Option<f64>,

        /// Trailing live segments to exclude (overrides config)
        #[arg(long)]
        unsafe_segments: Option<usize>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Find the segment index containing a playback time
    Index {
        /// Playlist snapshot (JSON)
        #[arg(required = true)]
        snapshot: PathBuf,

        /// Playback time in seconds
        #[arg(required = true, allow_negative_numbers = true)]
        time: f64,

        /// Seconds already expired from the front of a live playlist
        #[arg(long, allow_negative_numbers = true)]
        expired: Option<f64>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show estimated segment start times, duration and seekable window
    Inspect {
        /// Playlist snapshot (JSON)
        #[arg(required = true)]
        snapshot: PathBuf,

        /// Seconds already expired from the front of a live playlist
        #[arg(long, allow_negative_numbers = true)]
        expired: Option<f64>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Check a playlist snapshot without estimating anything
    Validate {
        /// Playlist snapshot (JSON)
        #[arg(required = true)]
        snapshot: PathBuf,
    },

    /// Display version information
    Version,
}
