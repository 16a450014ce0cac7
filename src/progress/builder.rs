//! Builder pattern implementation for creating ProgressBar instances.
//!
//! # Examples
//!
//! ## Basic Builder Usage
//!
//! ```rust
//! use tagline::ProgressBarBuilder;
//!
//! let bar = ProgressBarBuilder::new()
//!     .total(250)
//!     .length(30)
//!     .start_label("Indexing")
//!     .build();
//! assert_eq!(bar.length(), 30);
//! ```
//!
//! ## Writing to a Custom Sink
//!
//! ```rust
//! use tagline::style::PlainFormatter;
//! use tagline::ProgressBarBuilder;
//!
//! # fn main() -> Result<(), tagline::Error> {
//! let mut bar = ProgressBarBuilder::new()
//!     .total(10)
//!     .length(4)
//!     .template("<progress:bar> <progress:percent>%")
//!     .formatter(PlainFormatter)
//!     .build_with(Vec::new());
//! bar.set_value(5)?;
//! assert_eq!(bar.render()?, "━━╺━  50%");
//! # Ok(())
//! # }
//! ```

use std::io::Write;
use std::rc::Rc;
use std::time::Duration;

use console::Term;

use super::bar::ProgressBar;
use super::config::ProgressConfig;
use crate::style::{AnsiFormatter, StyleFormatter};
use crate::tags::TagHandler;
use crate::theme::Theme;

/// A builder used to create a [`ProgressBar`].
///
/// ```rust
/// # fn main()  {
/// use tagline::ProgressBarBuilder;
///
/// let bar = ProgressBarBuilder::new().total(5).hide_on_finish(true).build();
/// # }
/// ```
#[derive(Default)]
pub struct ProgressBarBuilder {
    config: ProgressConfig,
    theme: Theme,
    formatter: Option<Box<dyn StyleFormatter>>,
    handlers: Vec<Rc<dyn TagHandler>>,
}

impl ProgressBarBuilder {
    /// Creates a builder with the default options.
    pub fn new() -> Self {
        ProgressBarBuilder::default()
    }

    /// Creates a builder from an existing configuration.
    pub fn with_config(config: ProgressConfig) -> Self {
        Self {
            config,
            ..ProgressBarBuilder::default()
        }
    }

    /// Set the target value.
    pub fn total(mut self, total: u64) -> Self {
        self.config.total = total;
        self
    }

    /// Set the bar length; odd lengths are rounded up, the minimum is 4.
    pub fn length(mut self, length: usize) -> Self {
        self.config.length = length;
        self
    }

    /// Set the line template.
    pub fn template(mut self, template: impl Into<String>) -> Self {
        self.config.template = template.into();
        self
    }

    /// Set the label before the bar.
    pub fn start_label(mut self, label: impl Into<String>) -> Self {
        self.config.start_label = label.into();
        self
    }

    /// Set the label after the indicator.
    pub fn end_label(mut self, label: impl Into<String>) -> Self {
        self.config.end_label = label.into();
        self
    }

    /// Set the indicator sub-template.
    pub fn indicator(mut self, indicator: impl Into<String>) -> Self {
        self.config.indicator = Some(indicator.into());
        self
    }

    /// Erase the bar once it finishes.
    pub fn hide_on_finish(mut self, hide: bool) -> Self {
        self.config.hide_on_finish = hide;
        self
    }

    /// Set how long a finished bar stays visible before being erased.
    ///
    /// Only used with [`hide_on_finish`](Self::hide_on_finish). The wait is
    /// a blocking sleep on the caller's thread.
    pub fn finish_delay(mut self, delay: Duration) -> Self {
        self.config.finish_delay = delay;
        self
    }

    /// Set the theme.
    pub fn theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    /// Set the style formatter.
    pub fn formatter<F>(mut self, formatter: F) -> Self
    where
        F: StyleFormatter + 'static,
    {
        self.formatter = Some(Box::new(formatter));
        self
    }

    /// Register an extra tag handler, after the default one.
    pub fn handler<H>(mut self, handler: H) -> Self
    where
        H: TagHandler + 'static,
    {
        self.handlers.push(Rc::new(handler));
        self
    }

    /// Create the [`ProgressBar`], drawing on stderr.
    pub fn build(self) -> ProgressBar {
        self.build_with(Term::stderr())
    }

    /// Create the [`ProgressBar`], drawing on `output`.
    pub fn build_with<W>(self, output: W) -> ProgressBar
    where
        W: Write + 'static,
    {
        let formatter = self
            .formatter
            .unwrap_or_else(|| Box::new(AnsiFormatter::for_stderr()));
        ProgressBar::new(
            self.config,
            self.theme,
            formatter,
            Box::new(output),
            self.handlers,
        )
    }
}
