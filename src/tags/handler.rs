use std::fmt;

use crate::error::Result;
use crate::progress::ProgressBar;

/// Resolves one or more template tags into text.
///
/// Implementations must not emit the tag they are resolving, directly or
/// through another handler; the registry gives up after
/// [`MAX_PASSES`](super::MAX_PASSES) resolution passes.
pub trait TagHandler {
    /// The tags this handler owns, with or without the angle brackets.
    fn handles(&self) -> Vec<String>;

    /// Render `tag` (brackets included, e.g. `<progress:bar>`) for `bar`.
    fn resolve(&self, tag: &str, bar: &ProgressBar) -> Result<String>;
}

/// A [`TagHandler`] built from a closure.
///
/// ```rust
/// use tagline::tags::from_fn;
///
/// let handler = from_fn(["<custom:tag>"], |_tag, bar| Ok(format!("{} left", bar.total())));
/// ```
pub struct FnHandler<F> {
    tags: Vec<String>,
    resolve: F,
}

/// Wrap a closure as a handler owning `tags`.
pub fn from_fn<I, S, F>(tags: I, resolve: F) -> FnHandler<F>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
    F: Fn(&str, &ProgressBar) -> Result<String>,
{
    FnHandler {
        tags: tags.into_iter().map(Into::into).collect(),
        resolve,
    }
}

impl<F> TagHandler for FnHandler<F>
where
    F: Fn(&str, &ProgressBar) -> Result<String>,
{
    fn handles(&self) -> Vec<String> {
        self.tags.clone()
    }

    fn resolve(&self, tag: &str, bar: &ProgressBar) -> Result<String> {
        (self.resolve)(tag, bar)
    }
}

impl<F> fmt::Debug for FnHandler<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnHandler").field("tags", &self.tags).finish()
    }
}
