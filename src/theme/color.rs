//! Color and style descriptors.
//!
//! These are abstract references; turning them into escape sequences is the
//! job of a [`StyleFormatter`](crate::style::StyleFormatter).
//!
//! # Examples
//!
//! ```rust
//! use tagline::theme::{Color, StyleSpec};
//!
//! let pink: Color = "#ec4899".parse().unwrap();
//! assert_eq!(pink, Color::Rgb(0xec, 0x48, 0x99));
//!
//! let style = StyleSpec::new(pink).on("black".parse().unwrap()).bold();
//! assert!(style.is_bold());
//! ```

use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// One of the eight basic terminal colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NamedColor {
    Black,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    White,
}

impl NamedColor {
    const ALL: [(&'static str, NamedColor); 8] = [
        ("black", NamedColor::Black),
        ("red", NamedColor::Red),
        ("green", NamedColor::Green),
        ("yellow", NamedColor::Yellow),
        ("blue", NamedColor::Blue),
        ("magenta", NamedColor::Magenta),
        ("cyan", NamedColor::Cyan),
        ("white", NamedColor::White),
    ];

    /// Lowercase name of the color.
    pub fn as_str(&self) -> &'static str {
        match self {
            NamedColor::Black => "black",
            NamedColor::Red => "red",
            NamedColor::Green => "green",
            NamedColor::Yellow => "yellow",
            NamedColor::Blue => "blue",
            NamedColor::Magenta => "magenta",
            NamedColor::Cyan => "cyan",
            NamedColor::White => "white",
        }
    }
}

/// A color reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    /// A basic terminal color.
    Named(NamedColor),
    /// An index into the 256-color palette.
    Fixed(u8),
    /// A 24-bit color.
    Rgb(u8, u8, u8),
}

impl Color {
    /// Parse a `#rrggbb` (or `rrggbb`) hex string.
    pub fn from_hex(hex: &str) -> Result<Self, Error> {
        let digits = hex.strip_prefix('#').unwrap_or(hex);
        if digits.len() != 6 || !digits.is_ascii() {
            return Err(Error::InvalidColor(hex.to_string()));
        }
        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&digits[range], 16).map_err(|_| Error::InvalidColor(hex.to_string()))
        };
        Ok(Color::Rgb(channel(0..2)?, channel(2..4)?, channel(4..6)?))
    }
}

impl FromStr for Color {
    type Err = Error;

    /// Accepts `#rrggbb`, a palette index (`0`..`255`) or a basic color name.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.starts_with('#') {
            return Color::from_hex(s);
        }
        if let Ok(index) = s.parse::<u8>() {
            return Ok(Color::Fixed(index));
        }
        let lower = s.to_ascii_lowercase();
        NamedColor::ALL
            .iter()
            .find(|(name, _)| *name == lower)
            .map(|(_, color)| Color::Named(*color))
            .ok_or_else(|| Error::InvalidColor(s.to_string()))
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::Named(named) => f.write_str(named.as_str()),
            Color::Fixed(index) => write!(f, "{index}"),
            Color::Rgb(r, g, b) => write!(f, "#{r:02x}{g:02x}{b:02x}"),
        }
    }
}

/// Foreground, optional background and weight of a text span.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct StyleSpec {
    fg: Color,
    bg: Option<Color>,
    bold: bool,
}

impl StyleSpec {
    /// Create a style with the given foreground color.
    pub fn new(fg: Color) -> Self {
        Self {
            fg,
            bg: None,
            bold: false,
        }
    }

    /// Set the background color.
    pub fn on(mut self, bg: Color) -> Self {
        self.bg = Some(bg);
        self
    }

    /// Render the span in bold.
    pub fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    pub fn fg(&self) -> Color {
        self.fg
    }

    pub fn bg(&self) -> Option<Color> {
        self.bg
    }

    pub fn is_bold(&self) -> bool {
        self.bold
    }
}

impl From<Color> for StyleSpec {
    fn from(color: Color) -> Self {
        StyleSpec::new(color)
    }
}

impl FromStr for StyleSpec {
    type Err = Error;

    /// Accepts `fg` or `fg/bg`, e.g. `#ec4899/black`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.split_once('/') {
            Some((fg, bg)) => Ok(StyleSpec::new(fg.parse()?).on(bg.parse()?)),
            None => Ok(StyleSpec::new(s.parse()?)),
        }
    }
}
