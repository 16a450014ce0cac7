//! Configuration structures and defaults for progress bars.
//!
//! # Examples
//!
//! ```rust
//! use std::time::Duration;
//! use tagline::progress::ProgressConfig;
//!
//! let config = ProgressConfig {
//!     total: 40,
//!     hide_on_finish: true,
//!     finish_delay: Duration::from_millis(100),
//!     ..ProgressConfig::default()
//! };
//! assert_eq!(config.length, 20);
//! ```

use std::time::Duration;

use crate::tags::{TAG_BAR, TAG_INDICATOR, TAG_LABEL_END, TAG_LABEL_START};

/// Default bar length, in glyphs.
pub const DEFAULT_LENGTH: usize = 20;
/// Shortest bar that can be drawn.
pub const MIN_LENGTH: usize = 4;
/// Wait before erasing a finished bar that hides on completion.
pub const DEFAULT_FINISH_DELAY: Duration = Duration::from_millis(500);

/// Template used when none is configured.
pub fn default_template() -> String {
    format!("{TAG_LABEL_START} {TAG_BAR} {TAG_INDICATOR} {TAG_LABEL_END}")
}

/// Force a bar length even and at least [`MIN_LENGTH`].
pub fn normalize_length(length: usize) -> usize {
    let even = length.saturating_add(length % 2);
    even.max(MIN_LENGTH)
}

/// Configuration of a progress bar.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProgressConfig {
    /// Target value; zero is coerced to one.
    pub total: u64,
    /// Bar length in glyphs, normalized with [`normalize_length`].
    pub length: usize,
    /// Line template.
    pub template: String,
    /// Text substituted for `<progress:label:start>`.
    pub start_label: String,
    /// Text substituted for `<progress:label:end>`.
    pub end_label: String,
    /// Sub-template for `<progress:indicator>`; `None` uses the theme's default.
    pub indicator: Option<String>,
    /// Erase the line once finished instead of leaving it on screen.
    pub hide_on_finish: bool,
    /// Synchronous wait before erasing a hidden bar.
    pub finish_delay: Duration,
}

impl Default for ProgressConfig {
    fn default() -> Self {
        Self {
            total: 100,
            length: DEFAULT_LENGTH,
            template: default_template(),
            start_label: String::new(),
            end_label: String::new(),
            indicator: None,
            hide_on_finish: false,
            finish_delay: DEFAULT_FINISH_DELAY,
        }
    }
}
