mod types;

pub use types::*;

use anyhow::{Context, Result};
use std::path::Path;

/// Largest accepted `output.precision`.
pub const MAX_PRECISION: usize = 9;

/// Load configuration from a TOML file
pub fn load_config(path: &Path) -> Result<Config> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {:?}", path))?;

    let config: Config = toml::from_str(&content)
        .with_context(|| format!("Failed to parse config file: {:?}", path))?;

    validate_config(&config)?;

    tracing::debug!("Loaded config from {:?}", path);
    Ok(config)
}

/// Load config from default locations or return default config
pub fn load_config_or_default(custom_path: Option<&Path>) -> Result<Config> {
    if let Some(path) = custom_path {
        return load_config(path);
    }

    // Try default locations
    let default_paths = [
        "./seekline.toml",
        "~/.config/seekline/config.toml",
        "/etc/seekline/config.toml",
    ];

    for path_str in default_paths {
        let path = shellexpand::tilde(path_str);
        let path = Path::new(path.as_ref());
        if path.exists() {
            return load_config(path);
        }
    }

    Ok(Config::default())
}

/// Validate configuration
fn validate_config(config: &Config) -> Result<()> {
    if config.output.precision > MAX_PRECISION {
        anyhow::bail!(
            "Output precision {} exceeds the maximum of {}",
            config.output.precision,
            MAX_PRECISION
        );
    }

    if config.live.unsafe_segments == 0 {
        tracing::warn!(
            "live.unsafe_segments is 0: live playlists will be seekable up to the live edge"
        );
    }

    Ok(())
}
