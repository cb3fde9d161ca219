use seekline_playlist::{SeekPolicy, UNSAFE_LIVE_SEGMENTS};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub live: LiveConfig,

    #[serde(default)]
    pub output: OutputConfig,
}

impl Config {
    /// Live-edge policy for seekable window calculations.
    pub fn seek_policy(&self) -> SeekPolicy {
        SeekPolicy::new(self.live.unsafe_segments)
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LiveConfig {
    /// Trailing segments of a live playlist excluded from seeking (default: 3)
    #[serde(default = "default_unsafe_segments")]
    pub unsafe_segments: usize,
}

fn default_unsafe_segments() -> usize {
    UNSAFE_LIVE_SEGMENTS
}

impl Default for LiveConfig {
    fn default() -> Self {
        Self {
            unsafe_segments: default_unsafe_segments(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct OutputConfig {
    /// Print reports as JSON instead of text
    #[serde(default)]
    pub json: bool,

    /// Decimal places for seconds in text output (default: 3)
    #[serde(default = "default_precision")]
    pub precision: usize,
}

fn default_precision() -> usize {
    3
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            json: false,
            precision: default_precision(),
        }
    }
}
