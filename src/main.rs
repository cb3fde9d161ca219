mod cli;

use seekline::config::{self, Config};
use seekline::report::{self, Report};
use seekline::snapshot::load_snapshot;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Commands};
use std::path::Path;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    // Respect RUST_LOG env var if set, otherwise use defaults based on verbose flag
    let env_filter = std::env::var("RUST_LOG").unwrap_or_else(|_| {
        if cli.verbose {
            "seekline=debug,seekline_playlist=trace".to_string()
        } else {
            "seekline=info".to_string()
        }
    });

    // Reports go to stdout, logs to stderr
    tracing_subscriber::fmt()
        .with_env_filter(&env_filter)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Duration {
            snapshot,
            end_sequence,
            expired,
            json,
        } => {
            let config = config::load_config_or_default(cli.config.as_deref())?;
            let playlist = load_snapshot(&snapshot)?;
            let report = report::duration_report(&playlist, end_sequence, expired);
            print_report(&report, json, &config)
        }
        Commands::Seekable {
            snapshot,
            expired,
            unsafe_segments,
            json,
        } => {
            let mut config = config::load_config_or_default(cli.config.as_deref())?;
            if let Some(count) = unsafe_segments {
                config.live.unsafe_segments = count;
            }
            let playlist = load_snapshot(&snapshot)?;
            let report = report::seekable_report(&playlist, expired, &config.seek_policy());
            print_report(&report, json, &config)
        }
        Commands::Index {
            snapshot,
            time,
            expired,
            json,
        } => {
            let config = config::load_config_or_default(cli.config.as_deref())?;
            let playlist = load_snapshot(&snapshot)?;
            let report = report::index_report(&playlist, time, expired, &config.seek_policy());
            print_report(&report, json, &config)
        }
        Commands::Inspect {
            snapshot,
            expired,
            json,
        } => {
            let config = config::load_config_or_default(cli.config.as_deref())?;
            let playlist = load_snapshot(&snapshot)?;
            let report = report::inspect_report(&playlist, expired, &config.seek_policy());
            print_report(&report, json, &config)
        }
        Commands::Validate { snapshot } => validate_snapshot(&snapshot),
        Commands::Version => {
            println!("seekline {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
    }
}

fn print_report<R: Report>(report: &R, json: bool, config: &Config) -> Result<()> {
    let rendered = report::render(report, json || config.output.json, config.output.precision)?;
    print!("{}", rendered);
    if !rendered.ends_with('\n') {
        println!();
    }
    Ok(())
}

fn validate_snapshot(path: &Path) -> Result<()> {
    let playlist = load_snapshot(path)?;

    println!("Snapshot is valid: {:?}", path);
    println!(
        "  {} segments from sequence {} ({})",
        playlist.segment_count(),
        playlist.media_sequence,
        if playlist.is_live() { "live" } else { "complete" }
    );

    let known = playlist
        .segments
        .iter()
        .filter(|s| s.timing.is_known())
        .count();
    if known == 0 {
        tracing::info!("No segment timestamps known; estimates will be summed from durations");
    } else {
        println!("  {} segments with known timestamps", known);
    }

    Ok(())
}
