//! Seekline - timeline estimation for HLS media playlist snapshots
//!
//! This library crate exposes configuration, snapshot loading and report
//! building for the `seekline` binary and its integration tests.

pub mod config;
pub mod report;
pub mod snapshot;
