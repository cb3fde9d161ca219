//! Seekline-Common: shared types used across the seekline crates.
//!
//! - **Error Handling**: a common error type and result alias for snapshot
//!   validation and loading
//! - **Time Ranges**: the ordered `(start, end)` pairs reported for seekable
//!   windows
//!
//! # Examples
//!
//! ```
//! use seekline_common::{Error, Result, TimeRanges};
//!
//! let ranges = TimeRanges::single(0.0, 30.0);
//! assert_eq!(ranges.end(0), Some(30.0));
//! assert!(TimeRanges::empty().is_empty());
//!
//! fn example() -> Result<()> {
//!     Err(Error::invalid_playlist("target duration must be positive"))
//! }
//! assert!(example().is_err());
//! ```

pub mod error;
pub mod time_range;

pub use error::{Error, Result};
pub use time_range::{TimeRange, TimeRanges};
