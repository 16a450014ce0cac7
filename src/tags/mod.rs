//! Template tags and their handlers.
//!
//! A template is plain text with bracketed tags such as `<progress:bar>`.
//! The [`TagRegistry`] maps each tag name to a [`TagHandler`] and replaces
//! tags until the text contains none; a handler's output may itself contain
//! tags (the default indicator expands to percent and time tags).
//!
//! # Examples
//!
//! ## Custom Tag
//!
//! ```rust
//! use tagline::tags::from_fn;
//! use tagline::ProgressBarBuilder;
//!
//! # fn main() -> Result<(), tagline::Error> {
//! let mut bar = ProgressBarBuilder::new()
//!     .total(4)
//!     .template("<custom:left> to go")
//!     .build_with(Vec::new());
//! bar.add_handler(from_fn(["<custom:left>"], |_, bar| {
//!     Ok((bar.total() - bar.value().unwrap_or(0)).to_string())
//! }));
//! bar.set_value(1)?;
//! assert_eq!(bar.render()?, "3 to go");
//! # Ok(())
//! # }
//! ```

mod default;
mod handler;
mod registry;

pub use default::{
    default_indicator, draw_bar, DefaultTagHandler, TAG_BAR, TAG_INDICATOR, TAG_LABEL_END,
    TAG_LABEL_START, TAG_PERCENT, TAG_TIME, TAG_TOTAL, TAG_VALUE,
};
pub use handler::{from_fn, FnHandler, TagHandler};
pub use registry::{TagRegistry, MAX_PASSES};
