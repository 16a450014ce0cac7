//! Tests for theme data, color parsing and style formatting.

use tagline::style::{AnsiFormatter, PlainFormatter, StyleFormatter};
use tagline::theme::{BarGlyphs, Color, NamedColor, StyleSpec, Theme};
use tagline::Error;

#[test]
fn test_theme_defaults() {
    let theme = Theme::default();
    let glyphs = theme.glyphs();

    assert_eq!(glyphs.complete_full(), "━");
    assert_eq!(glyphs.complete_half(), "╸");
    assert_eq!(glyphs.remaining_half(), "╺");
    assert_eq!(glyphs.remaining_full(), "━");
    assert_eq!(theme.progress_style().fg(), Color::Rgb(0xec, 0x48, 0x99));
    assert_eq!(theme.remaining_style().fg(), Color::Rgb(0x3a, 0x3a, 0x3a));
    assert_eq!(theme.complete_style().fg(), Color::Rgb(0x10, 0xb9, 0x81));
}

#[test]
fn test_theme_builders_and_setters() {
    let mut theme = Theme::default()
        .with_progress_style(StyleSpec::new(Color::Fixed(208)))
        .with_percent_style("cyan".parse().unwrap());
    theme.set_complete_style(StyleSpec::new(Color::Named(NamedColor::Green)).bold());

    assert_eq!(theme.progress_style().fg(), Color::Fixed(208));
    assert_eq!(theme.percent_style().fg(), Color::Named(NamedColor::Cyan));
    assert!(theme.complete_style().is_bold());
}

#[test]
fn test_theme_setters_cover_every_segment() {
    let mut theme = Theme::default();
    theme.set_percent_style("yellow".parse().unwrap());
    theme.set_time_style(StyleSpec::new(Color::Fixed(42)));
    theme.set_glyphs(BarGlyphs::new("=", "-", " ", " ").unwrap());

    assert_eq!(theme.percent_style().fg(), Color::Named(NamedColor::Yellow));
    assert_eq!(theme.time_style().fg(), Color::Fixed(42));
    assert_eq!(theme.glyphs().complete_half(), "-");
}

#[test]
fn test_color_parsing() {
    assert_eq!("#ec4899".parse::<Color>().unwrap(), Color::Rgb(0xec, 0x48, 0x99));
    assert_eq!(Color::from_hex("10B981").unwrap(), Color::Rgb(0x10, 0xb9, 0x81));
    assert_eq!("Magenta".parse::<Color>().unwrap(), Color::Named(NamedColor::Magenta));
    assert_eq!("42".parse::<Color>().unwrap(), Color::Fixed(42));

    for invalid in ["#12345", "#gg0000", "purple-500", "256", ""] {
        assert!(
            matches!(invalid.parse::<Color>(), Err(Error::InvalidColor(_))),
            "{invalid:?} should be rejected"
        );
    }
}

#[test]
fn test_color_display_round_trips() {
    for text in ["#0ea5e9", "red", "7"] {
        let color: Color = text.parse().unwrap();
        assert_eq!(color.to_string(), text);
    }
}

#[test]
fn test_style_spec_parsing() {
    let style: StyleSpec = "#ffffff/blue".parse().unwrap();
    assert_eq!(style.fg(), Color::Rgb(255, 255, 255));
    assert_eq!(style.bg(), Some(Color::Named(NamedColor::Blue)));
    assert!(!style.is_bold());

    let style: StyleSpec = "yellow".parse().unwrap();
    assert_eq!(style.bg(), None);
}

#[test]
fn test_empty_glyphs_are_rejected() {
    assert!(matches!(
        BarGlyphs::new("", "b", "c", "d"),
        Err(Error::EmptyGlyph("complete_full"))
    ));

    let mut glyphs = BarGlyphs::default();
    assert!(matches!(
        glyphs.set_remaining_half(""),
        Err(Error::EmptyGlyph("remaining_half"))
    ));
    assert_eq!(glyphs.remaining_half(), "╺");

    glyphs.set_complete_full("=").unwrap();
    assert_eq!(glyphs.complete_full(), "=");
}

#[test]
fn test_rgb_colors_keep_their_exact_value() {
    let pink = StyleSpec::new(Color::Rgb(0xec, 0x48, 0x99));
    let styled = AnsiFormatter::forced().apply(&pink, "x");
    assert!(styled.contains("38;2;236;72;153"), "got {styled:?}");

    let fixed = StyleSpec::new(Color::Fixed(205));
    assert!(AnsiFormatter::forced().apply(&fixed, "x").contains("38;5;205"));
}

#[test]
fn test_formatters() {
    let style = StyleSpec::new(Color::Rgb(0xec, 0x48, 0x99)).on(Color::Named(NamedColor::Black));

    assert_eq!(PlainFormatter.apply(&style, "50%"), "50%");

    let forced = AnsiFormatter::forced();
    assert!(forced.is_enabled());
    let styled = forced.apply(&style, "50%");
    assert!(styled.starts_with("\x1b["));
    assert!(styled.contains("50%"));
}
