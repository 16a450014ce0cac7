//! Error handling for the Tagline library.
//!
//! This module provides centralized error handling for rendering, output and
//! event dispatch. Mutating calls on a finished bar are not errors; they are
//! silent no-ops and never reach this type.

use std::io;
use thiserror::Error;

use crate::events::EventKind;

/// Boxed error returned by event listeners.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Errors that can happen when using Tagline.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O Error.
    ///
    /// Writing a frame or a control sequence to the output sink failed.
    #[error("I/O error")]
    IOError {
        #[from]
        source: io::Error,
    },

    /// The template kept producing tags after the maximum number of passes.
    ///
    /// This happens when a handler re-emits the tag it was asked to resolve,
    /// directly or through another handler.
    #[error("template still contains `{unresolved}` after {passes} resolution passes")]
    TemplateOverflow { passes: usize, unresolved: String },

    /// A handler was asked to resolve a tag it does not own.
    #[error("no handler output for tag `{0}`")]
    UnknownTag(String),

    /// A listener failed while an event was being dispatched.
    ///
    /// Listeners registered after the failing one did not run.
    #[error("listener for `{event}` failed")]
    Listener {
        event: EventKind,
        #[source]
        source: BoxError,
    },

    /// A color descriptor could not be parsed.
    #[error("Invalid color: {0}")]
    InvalidColor(String),

    /// A bar glyph was set to the empty string.
    #[error("bar glyph `{0}` must not be empty")]
    EmptyGlyph(&'static str),

    /// The tag alternation pattern could not be compiled.
    #[error("Pattern error")]
    Pattern {
        #[from]
        source: regex::Error,
    },
}

/// Result type alias for operations that can fail with a Tagline error.
pub type Result<T> = std::result::Result<T, Error>;
