//! Visual style of a progress bar.
//!
//! A [`Theme`] is pure data: the glyph set the bar is drawn with and the
//! styles applied to its segments and to the default indicator.
//!
//! # Examples
//!
//! ## Default Theme
//!
//! ```rust
//! use tagline::theme::Theme;
//!
//! let theme = Theme::default();
//! assert_eq!(theme.glyphs().complete_full(), "━");
//! ```
//!
//! ## Custom Theme
//!
//! ```rust
//! use tagline::theme::{BarGlyphs, Color, Theme};
//!
//! # fn main() -> Result<(), tagline::Error> {
//! let theme = Theme::default()
//!     .with_glyphs(BarGlyphs::new("#", ">", "-", ".")?)
//!     .with_progress_style(Color::from_hex("#ff8800")?.into())
//!     .with_complete_style("green".parse()?);
//! assert_eq!(theme.glyphs().remaining_full(), ".");
//! # Ok(())
//! # }
//! ```

mod color;
mod glyphs;

pub use color::{Color, NamedColor, StyleSpec};
pub use glyphs::BarGlyphs;

/// Glyphs and segment styles of a progress bar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    glyphs: BarGlyphs,
    /// Style of the filled part while progressing.
    progress_style: StyleSpec,
    /// Style of the part still to do.
    remaining_style: StyleSpec,
    /// Style of the whole bar once finished.
    complete_style: StyleSpec,
    /// Style of the percentage in the default indicator.
    percent_style: StyleSpec,
    /// Style of the elapsed time in the default indicator.
    time_style: StyleSpec,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            glyphs: BarGlyphs::default(),
            progress_style: StyleSpec::new(Color::Rgb(0xec, 0x48, 0x99)),
            remaining_style: StyleSpec::new(Color::Rgb(0x3a, 0x3a, 0x3a)),
            complete_style: StyleSpec::new(Color::Rgb(0x10, 0xb9, 0x81)),
            percent_style: StyleSpec::new(Color::Rgb(0xa8, 0x55, 0xf7)),
            time_style: StyleSpec::new(Color::Rgb(0x0e, 0xa5, 0xe9)),
        }
    }
}

impl Theme {
    pub fn glyphs(&self) -> &BarGlyphs {
        &self.glyphs
    }

    /// Mutable access to the glyph set.
    pub fn glyphs_mut(&mut self) -> &mut BarGlyphs {
        &mut self.glyphs
    }

    pub fn progress_style(&self) -> &StyleSpec {
        &self.progress_style
    }

    pub fn remaining_style(&self) -> &StyleSpec {
        &self.remaining_style
    }

    pub fn complete_style(&self) -> &StyleSpec {
        &self.complete_style
    }

    pub fn percent_style(&self) -> &StyleSpec {
        &self.percent_style
    }

    pub fn time_style(&self) -> &StyleSpec {
        &self.time_style
    }

    /// Replace the glyph set.
    pub fn with_glyphs(mut self, glyphs: BarGlyphs) -> Self {
        self.glyphs = glyphs;
        self
    }

    pub fn with_progress_style(mut self, style: StyleSpec) -> Self {
        self.progress_style = style;
        self
    }

    pub fn with_remaining_style(mut self, style: StyleSpec) -> Self {
        self.remaining_style = style;
        self
    }

    pub fn with_complete_style(mut self, style: StyleSpec) -> Self {
        self.complete_style = style;
        self
    }

    pub fn with_percent_style(mut self, style: StyleSpec) -> Self {
        self.percent_style = style;
        self
    }

    pub fn with_time_style(mut self, style: StyleSpec) -> Self {
        self.time_style = style;
        self
    }

    pub fn set_progress_style(&mut self, style: StyleSpec) {
        self.progress_style = style;
    }

    pub fn set_remaining_style(&mut self, style: StyleSpec) {
        self.remaining_style = style;
    }

    pub fn set_complete_style(&mut self, style: StyleSpec) {
        self.complete_style = style;
    }

    pub fn set_percent_style(&mut self, style: StyleSpec) {
        self.percent_style = style;
    }

    pub fn set_time_style(&mut self, style: StyleSpec) {
        self.time_style = style;
    }

    pub fn set_glyphs(&mut self, glyphs: BarGlyphs) {
        self.glyphs = glyphs;
    }
}
