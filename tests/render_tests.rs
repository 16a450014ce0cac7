//! Tests for template resolution, tag handlers and bar drawing.

use std::cell::Cell;
use std::rc::Rc;

use tagline::style::{AnsiFormatter, PlainFormatter};
use tagline::tags::{
    default_indicator, draw_bar, from_fn, DefaultTagHandler, TagRegistry, MAX_PASSES, TAG_BAR,
};
use tagline::theme::Theme;
use tagline::Error;

mod common;
use common::helpers::*;

#[test]
fn test_draw_bar_half_glyph_steps() {
    let theme = create_ascii_theme();
    let cases = [
        (0, "-..."),
        (1, "-..."),
        (2, "-..."),
        (3, "#>.."),
        (4, "#>.."),
        (5, "##-."),
        (7, "##-."),
        (8, "###>"),
        (9, "###>"),
        (10, "####-"),
    ];
    for (value, expected) in cases {
        assert_eq!(
            draw_bar(&theme, &PlainFormatter, 4, value, 10, false),
            expected,
            "value {value}"
        );
    }
}

#[test]
fn test_draw_bar_finished_uses_complete_glyphs() {
    let theme = create_ascii_theme();
    assert_eq!(draw_bar(&theme, &PlainFormatter, 4, 3, 10, true), "####");
    assert_eq!(draw_bar(&theme, &PlainFormatter, 8, 0, 10, true), "########");
}

#[test]
fn test_draw_bar_default_length() {
    let theme = create_ascii_theme();
    let bar = draw_bar(&theme, &PlainFormatter, 20, 50, 100, false);
    assert_eq!(bar, format!("{}-{}", "#".repeat(10), ".".repeat(9)));
}

#[test]
fn test_draw_bar_is_styled_through_formatter() {
    let theme = Theme::default();
    let styled = draw_bar(&theme, &AnsiFormatter::forced(), 4, 5, 10, false);
    let plain = draw_bar(&theme, &PlainFormatter, 4, 5, 10, false);

    assert_eq!(plain, "━━╺━");
    assert_ne!(styled, plain);
    assert!(styled.contains("\x1b["));
    assert!(styled.contains("━━"));
}

#[test]
fn test_default_indicator_with_plain_formatter() {
    let indicator = default_indicator(&Theme::default(), &PlainFormatter);
    assert_eq!(indicator, "<progress:percent>% • <progress:time>");
}

#[test]
fn test_registry_lists_default_tags() {
    let mut registry = TagRegistry::new();
    assert!(registry.tags().is_empty());

    registry.register(DefaultTagHandler);

    assert_eq!(
        registry.tags(),
        vec![
            "progress:bar",
            "progress:indicator",
            "progress:label:end",
            "progress:label:start",
            "progress:percent",
            "progress:time",
            "progress:total",
            "progress:value",
        ]
    );
    assert!(registry.contains(TAG_BAR));
    assert!(registry.contains("progress:bar"));
    assert!(registry.handler("<progress:time>").is_some());
    assert!(!registry.contains("<custom:tag>"));
}

#[test]
fn test_custom_handler_registered_after_construction() {
    let (mut bar, _) = create_templated_bar(10, "<custom:tag> <progress:percent>");
    let calls = Rc::new(Cell::new(0));

    let counter = calls.clone();
    bar.add_handler(from_fn(["<custom:tag>"], move |tag, _| {
        counter.set(counter.get() + 1);
        assert_eq!(tag, "<custom:tag>");
        Ok("first".to_string())
    }));
    bar.set_value(5).unwrap();

    assert_eq!(bar.render().unwrap(), "first  50");
    assert_eq!(calls.get(), 1);

    // last registration wins
    bar.add_handler(from_fn(["custom:tag"], |_, _| Ok("second".to_string())));
    assert_eq!(bar.render().unwrap(), "second  50");
    assert_eq!(calls.get(), 1);
}

#[test]
fn test_builder_registers_extra_handlers() {
    let buffer = SharedBuffer::new();
    let mut bar = create_test_builder(10, 4)
        .template("<custom:left>")
        .handler(from_fn(["<custom:left>"], |_, bar| {
            Ok((bar.total() - bar.value().unwrap_or(0)).to_string())
        }))
        .build_with(buffer.clone());

    bar.set_value(4).unwrap();

    assert_eq!(bar.render().unwrap(), "6");
}

#[test]
fn test_handler_output_is_resolved_again() {
    let (mut bar, _) = create_templated_bar(10, "<custom:outer>");
    bar.add_handler(from_fn(["<custom:outer>"], |_, _| {
        Ok("[<progress:percent>|<custom:inner>]".to_string())
    }));
    bar.add_handler(from_fn(["<custom:inner>"], |_, _| Ok("<progress:total>".to_string())));

    bar.set_value(5).unwrap();

    assert_eq!(bar.render().unwrap(), "[ 50|10]");
}

#[test]
fn test_self_emitting_handler_overflows() {
    let (mut bar, _) = create_templated_bar(10, "x <custom:loop>");
    bar.add_handler(from_fn(["<custom:loop>"], |tag, _| Ok(format!("{tag}."))));

    let result = bar.set_value(1);

    match result {
        Err(Error::TemplateOverflow { passes, unresolved }) => {
            assert_eq!(passes, MAX_PASSES);
            assert_eq!(unresolved, "<custom:loop>");
        }
        other => panic!("expected overflow, got {other:?}"),
    }
}

#[test]
fn test_mutually_recursive_handlers_overflow() {
    let (mut bar, _) = create_templated_bar(10, "<custom:a>");
    bar.add_handler(from_fn(["<custom:a>"], |_, _| Ok("<custom:b>".to_string())));
    bar.add_handler(from_fn(["<custom:b>"], |_, _| Ok("<custom:a>".to_string())));

    assert!(matches!(
        bar.set_value(1),
        Err(Error::TemplateOverflow { .. })
    ));
}

#[test]
fn test_unregistered_tags_are_left_verbatim() {
    let (mut bar, _) = create_templated_bar(10, "<nope> <progress:total>");
    bar.set_value(1).unwrap();
    assert_eq!(bar.render().unwrap(), "<nope> 10");
}

#[test]
fn test_handler_errors_propagate() {
    let (mut bar, _) = create_templated_bar(10, "<custom:strict>");
    bar.add_handler(from_fn(["<custom:strict>"], |tag, _| {
        Err(Error::UnknownTag(tag.to_string()))
    }));

    match bar.set_value(1) {
        Err(Error::UnknownTag(tag)) => assert_eq!(tag, "<custom:strict>"),
        other => panic!("expected unknown tag, got {other:?}"),
    }
}

#[test]
fn test_theme_swap_applies_on_next_frame() {
    let (mut bar, _) = create_bar_only(10, 4);
    bar.set_value(5).unwrap();
    assert_eq!(bar.render().unwrap(), "##-.");

    bar.set_theme(Theme::default());
    assert_eq!(bar.render().unwrap(), "━━╺━");
}
