//! Integration tests for CSS value parsing.

use domsnap_style::{ColorValue, FontSpec, css_px};

#[test]
fn test_css_px_dimension() {
    assert_eq!(css_px("12px"), 12.0);
}

#[test]
fn test_css_px_unparseable_is_zero() {
    assert_eq!(css_px("auto"), 0.0);
    assert_eq!(css_px("medium"), 0.0);
    assert_eq!(css_px(""), 0.0);
}

#[test]
fn test_color_from_hex_6() {
    let color = ColorValue::from_hex("#ff0000").unwrap();
    assert_eq!(color, ColorValue::rgb(255, 0, 0));
}

#[test]
fn test_color_from_hex_3() {
    let color = ColorValue::from_hex("#f00").unwrap();
    assert_eq!(color, ColorValue::rgb(255, 0, 0));
}

#[test]
fn test_color_parse_dispatches_by_notation() {
    assert_eq!(
        ColorValue::parse("rgb(84, 215, 255)"),
        Some(ColorValue::rgb(84, 215, 255))
    );
    assert_eq!(ColorValue::parse("navy"), Some(ColorValue::rgb(0, 0, 128)));
    assert_eq!(ColorValue::parse("#0004ff"), Some(ColorValue::rgb(0, 4, 255)));
    assert_eq!(ColorValue::parse("inherit"), None);
}

#[test]
fn test_color_to_hex_is_lowercase_padded() {
    assert_eq!(ColorValue::rgb(255, 0, 128).to_hex(), "#ff0080");
    assert_eq!(ColorValue::rgb(0, 4, 255).to_hex(), "#0004ff");
}

#[test]
fn test_font_resolution() {
    let font = FontSpec::resolve("bold", "14px", "Helvetica, sans-serif");
    assert_eq!(font.weight, 700);
    assert_eq!(font.size, 14.0);
    assert_eq!(font.family, "Helvetica");
    assert!(font.is_bold());
    assert_eq!(font.shorthand(), "700 14px Helvetica");
}

#[test]
fn test_font_defaults() {
    let font = FontSpec::resolve("", "", "");
    assert_eq!(font.weight, 400);
    assert_eq!(font.size, 16.0);
    assert_eq!(font.family, "sans-serif");
}
