//! Tagline renders a single-line, template-driven progress bar on a
//! terminal and notifies observers as it starts, advances and completes.
//!
//! # Quick Start
//!
//! ```rust
//! use tagline::{Error, ProgressBarBuilder};
//!
//! # fn main() -> Result<(), Error> {
//! let mut bar = ProgressBarBuilder::new()
//!     .total(50)
//!     .start_label("Copying")
//!     .build();
//! bar.on_complete(|event| {
//!     eprintln!("done in {:?}", event.snapshot.elapsed);
//!     Ok(())
//! });
//! for _ in 0..50 {
//!     bar.increment(1)?;
//! }
//! # Ok(())
//! # }
//! ```
//!
//! # Module Organization
//!
//! - [`progress`] - The `ProgressBar`, its builder, configuration and state
//! - [`tags`] - Template tags, tag handlers and the tag registry
//! - [`events`] - Lifecycle events, snapshots and the event dispatcher
//! - [`theme`] - Bar glyphs, colors and segment styles
//! - [`style`] - The style formatter turning styles into terminal markup
//! - [`terminal`] - Control sequences written around redraws
//! - [`error`] - Centralized error handling with the `Error` enum
//! - [`utils`] - Shared utility functions
//!
//! # Limitations
//!
//! A bar assumes it owns the current terminal line: nothing else may write
//! to its output while it is live, and several bars cannot share a terminal.

pub mod error;
pub mod events;
pub mod progress;
pub mod style;
pub mod tags;
pub mod terminal;
pub mod theme;
pub mod utils;

pub use error::{Error, Result};
pub use events::{EventDispatcher, EventKind, ProgressEvent, ProgressSnapshot};
pub use progress::{ProgressBar, ProgressBarBuilder, ProgressConfig};
pub use style::{AnsiFormatter, PlainFormatter, StyleFormatter};
pub use tags::{DefaultTagHandler, TagHandler, TagRegistry};
pub use theme::{BarGlyphs, Color, StyleSpec, Theme};
pub use utils::format_elapsed;
