//! Progress module containing the progress bar, its state and configuration.
//!
//! # Overview
//!
//! The progress module is organized into the following components:
//!
//! - `state` - Value, total and timing bookkeeping
//! - `config` - Configuration structure and defaults
//! - `builder` - ProgressBarBuilder for flexible configuration
//! - `bar` - The ProgressBar: update state machine, rendering and redraws
//! - `iter` - Iterating a bar to completion
//!
//! # Lifecycle
//!
//! A bar is idle until its first value is set. The first frame hides the
//! cursor and fires a start event; each later value change redraws the line
//! in place and fires a progress event. Reaching the total draws a frame at
//! the total, then the finished frame, and fires the complete event once.
//! From then on every mutating call is a silent no-op.
//!
//! # Examples
//!
//! ## Counting Up
//!
//! ```rust
//! use tagline::ProgressBarBuilder;
//!
//! # fn main() -> Result<(), tagline::Error> {
//! let mut bar = ProgressBarBuilder::new().total(3).build_with(Vec::new());
//! bar.increment(1)?;
//! assert_eq!(bar.percent(), 33);
//! bar.set_value(10)?;
//! assert!(bar.is_finished());
//! assert_eq!(bar.value(), Some(3));
//! # Ok(())
//! # }
//! ```
//!
//! ## Hot-Swapping Labels
//!
//! ```rust
//! use tagline::ProgressBarBuilder;
//!
//! # fn main() -> Result<(), tagline::Error> {
//! let mut bar = ProgressBarBuilder::new()
//!     .template("<progress:label:start>")
//!     .build_with(Vec::new());
//! bar.set_value(1)?;
//! bar.set_start_label("step 2", true)?;
//! assert_eq!(bar.render()?, "step 2");
//! # Ok(())
//! # }
//! ```

mod bar;
mod builder;
mod config;
mod iter;
mod state;

pub use bar::ProgressBar;
pub use builder::ProgressBarBuilder;
pub use config::{
    default_template, normalize_length, ProgressConfig, DEFAULT_FINISH_DELAY, DEFAULT_LENGTH,
    MIN_LENGTH,
};
pub use iter::ProgressIter;
pub use state::ProgressState;
