//! Integration tests for per-element style resolution.

use domsnap_style::{
    ColorValue, FillSpec, GradientDescriptor, Origin, StyledElement, TextAlign, resolve_style,
};

fn element() -> StyledElement {
    StyledElement {
        left: 110.0,
        top: 230.0,
        width: 100.0,
        height: 50.0,
        ..StyledElement::default()
    }
}

#[test]
fn test_bounds_normalize_against_origin_with_stroke_inset() {
    let root = StyledElement {
        left: 100.0,
        top: 200.0,
        ..StyledElement::default()
    };
    let child = StyledElement {
        border_top_width: "4px".to_string(),
        ..element()
    };

    let style = resolve_style(&child, Origin::of(&root));
    // x = doc_left - origin.x + border_width / 2
    assert_eq!(style.bounds.x, 12.0);
    assert_eq!(style.bounds.y, 32.0);
    assert_eq!(style.bounds.width, 100.0);
    assert_eq!(style.bounds.height, 50.0);
}

#[test]
fn test_unparseable_border_width_disables_stroke() {
    let el = StyledElement {
        border_top_width: "auto".to_string(),
        border_top_color: "rgb(255, 0, 0)".to_string(),
        ..element()
    };

    let style = resolve_style(&el, Origin::default());
    assert_eq!(style.border.line_width, 0.0);
}

#[test]
fn test_unmatched_background_is_solid_color() {
    let el = StyledElement {
        background_image: "none".to_string(),
        background_color: "rgb(84, 215, 255)".to_string(),
        ..element()
    };

    let style = resolve_style(&el, Origin::default());
    assert_eq!(style.fill, FillSpec::Solid(ColorValue::rgb(84, 215, 255)));
}

#[test]
fn test_url_background_falls_back_to_solid() {
    let el = StyledElement {
        background_image: "url(paper.png)".to_string(),
        background_color: "#ffffff".to_string(),
        ..element()
    };

    let style = resolve_style(&el, Origin::default());
    assert_eq!(style.fill, FillSpec::Solid(ColorValue::WHITE));
}

#[test]
fn test_unsupported_gradient_falls_back_to_solid() {
    let el = StyledElement {
        background_image: "-webkit-radial-gradient(center, rgb(0, 0, 0) 0%)".to_string(),
        background_color: "black".to_string(),
        ..element()
    };

    let style = resolve_style(&el, Origin::default());
    assert_eq!(style.fill, FillSpec::Solid(ColorValue::BLACK));
}

#[test]
fn test_malformed_gradient_falls_back_to_solid() {
    let el = StyledElement {
        background_image: "linear-gradient(45deg, rgb(255, 0) 50%)".to_string(),
        background_color: "gray".to_string(),
        ..element()
    };

    let style = resolve_style(&el, Origin::default());
    assert_eq!(style.fill, FillSpec::Solid(ColorValue::rgb(128, 128, 128)));
}

#[test]
fn test_gradient_background_resolves_to_descriptor() {
    let el = StyledElement {
        left: 20.0,
        top: 10.0,
        width: 60.0,
        height: 80.0,
        background_image: "linear-gradient(0deg, rgb(255, 0, 0) 0%, rgb(0, 0, 255) 100%)"
            .to_string(),
        ..StyledElement::default()
    };

    // The element is its own snapshot root: bounds start at the canvas
    // origin, center (30, 40), half diagonal 50.
    let style = resolve_style(&el, Origin::of(&el));
    let FillSpec::Gradient(GradientDescriptor::Linear { start, end, .. }) = style.fill else {
        panic!("expected a linear gradient fill");
    };
    assert!((end.x - 30.0).abs() < 1e-3);
    assert!((end.y - -10.0).abs() < 1e-3);
    assert!((start.x - 30.0).abs() < 1e-3);
    assert!((start.y - 90.0).abs() < 1e-3);
}

#[test]
fn test_unset_background_is_transparent_solid() {
    let style = resolve_style(&element(), Origin::default());
    assert_eq!(style.fill, FillSpec::Solid(ColorValue::TRANSPARENT));
}

#[test]
fn test_text_properties() {
    let el = StyledElement {
        color: "#0004ff".to_string(),
        text_align: "center".to_string(),
        font_weight: "bold".to_string(),
        font_size: "14px".to_string(),
        font_family: "Arial".to_string(),
        ..element()
    };

    let style = resolve_style(&el, Origin::default());
    assert_eq!(style.text_color, ColorValue::rgb(0, 4, 255));
    assert_eq!(style.text_align, TextAlign::Center);
    assert_eq!(style.font.shorthand(), "700 14px Arial");
}

#[test]
fn test_deserializes_with_defaults() {
    let root: StyledElement = serde_json::from_str(
        r#"{
            "width": 100.0,
            "height": 50.0,
            "background_color": "silver",
            "children": [{ "text": "Hello", "width": 40.0, "height": 20.0 }]
        }"#,
    )
    .unwrap();

    assert_eq!(root.children.len(), 1);
    assert!(!root.children[0].has_markup());
    assert_eq!(root.border_top_width, "");
}
