//! Shared utility functions.
//!
//! # Examples
//!
//! ```rust
//! use std::time::Duration;
//! use tagline::utils::format_elapsed;
//!
//! assert_eq!(format_elapsed(Duration::from_secs(75)), "1:15");
//! ```

pub mod duration;

pub use duration::format_elapsed;
