//! Style formatting collaborator.
//!
//! The renderer never writes color escapes itself. Every styled span goes
//! through a [`StyleFormatter`], which decides how (and whether) to decorate
//! it.
//!
//! # Examples
//!
//! ```rust
//! use tagline::style::{AnsiFormatter, PlainFormatter, StyleFormatter};
//! use tagline::theme::{Color, NamedColor, StyleSpec};
//!
//! let style = StyleSpec::new(Color::Named(NamedColor::Red));
//!
//! assert_eq!(PlainFormatter.apply(&style, "done"), "done");
//! assert_ne!(AnsiFormatter::forced().apply(&style, "done"), "done");
//! ```

use console::Style;

use crate::theme::{Color, NamedColor, StyleSpec};

/// Wraps a text span in the markup of a style.
pub trait StyleFormatter {
    /// Return `text` decorated with `style`.
    fn apply(&self, style: &StyleSpec, text: &str) -> String;
}

/// Formatter emitting ANSI escapes through [`console::Style`].
///
/// RGB colors are emitted as 24-bit escapes.
#[derive(Debug, Clone, Copy)]
pub struct AnsiFormatter {
    enabled: bool,
}

impl Default for AnsiFormatter {
    fn default() -> Self {
        Self::for_stderr()
    }
}

impl AnsiFormatter {
    /// Style only when stderr supports colors.
    pub fn for_stderr() -> Self {
        Self {
            enabled: console::colors_enabled_stderr(),
        }
    }

    /// Style only when stdout supports colors.
    pub fn for_stdout() -> Self {
        Self {
            enabled: console::colors_enabled(),
        }
    }

    /// Always style, regardless of the terminal.
    pub fn forced() -> Self {
        Self { enabled: true }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }
}

impl StyleFormatter for AnsiFormatter {
    fn apply(&self, style: &StyleSpec, text: &str) -> String {
        let mut console_style = Style::new()
            .fg(to_console(style.fg()))
            .force_styling(self.enabled);
        if let Some(bg) = style.bg() {
            console_style = console_style.bg(to_console(bg));
        }
        if style.is_bold() {
            console_style = console_style.bold();
        }
        console_style.apply_to(text).to_string()
    }
}

/// Formatter that leaves spans untouched.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainFormatter;

impl StyleFormatter for PlainFormatter {
    fn apply(&self, _style: &StyleSpec, text: &str) -> String {
        text.to_string()
    }
}

fn to_console(color: Color) -> console::Color {
    match color {
        Color::Named(named) => match named {
            NamedColor::Black => console::Color::Black,
            NamedColor::Red => console::Color::Red,
            NamedColor::Green => console::Color::Green,
            NamedColor::Yellow => console::Color::Yellow,
            NamedColor::Blue => console::Color::Blue,
            NamedColor::Magenta => console::Color::Magenta,
            NamedColor::Cyan => console::Color::Cyan,
            NamedColor::White => console::Color::White,
        },
        Color::Fixed(index) => console::Color::Color256(index),
        Color::Rgb(r, g, b) => console::Color::TrueColor(r, g, b),
    }
}
