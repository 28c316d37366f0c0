//! Integration tests for the snapshot tree walk and paint pipeline.

use domsnap_render::{Canvas, SnapshotError, render, snapshot};
use domsnap_style::StyledElement;

fn root(width: f32, height: f32, background_color: &str) -> StyledElement {
    StyledElement {
        width,
        height,
        background_color: background_color.to_string(),
        ..StyledElement::default()
    }
}

#[test]
fn test_snapshot_is_deterministic() {
    let mut tree = root(60.0, 40.0, "rgb(84, 215, 255)");
    tree.children.push(StyledElement {
        left: 10.0,
        top: 10.0,
        width: 20.0,
        height: 20.0,
        background_color: "red".to_string(),
        border_top_left_radius: "6px".to_string(),
        border_top_width: "2px".to_string(),
        border_top_color: "black".to_string(),
        ..StyledElement::default()
    });

    let first = snapshot(&tree).unwrap();
    let second = snapshot(&tree).unwrap();
    assert_eq!(first.png_bytes(), second.png_bytes());
}

#[test]
fn test_solid_background_fills_the_root() {
    let tree = root(40.0, 30.0, "rgb(255, 0, 0)");
    let mut canvas = Canvas::new(40, 30).unwrap();
    render(&tree, &mut canvas);

    let pixel = canvas.pixmap().pixel(20, 15).unwrap();
    assert_eq!((pixel.red(), pixel.green(), pixel.blue()), (255, 0, 0));
}

#[test]
fn test_children_paint_over_parents_in_list_order() {
    let mut tree = root(40.0, 40.0, "rgb(255, 255, 255)");
    // Two overlapping children: the later sibling wins.
    tree.children.push(StyledElement {
        width: 40.0,
        height: 40.0,
        background_color: "rgb(255, 0, 0)".to_string(),
        ..StyledElement::default()
    });
    tree.children.push(StyledElement {
        width: 40.0,
        height: 40.0,
        background_color: "rgb(0, 0, 255)".to_string(),
        ..StyledElement::default()
    });

    let mut canvas = Canvas::new(40, 40).unwrap();
    render(&tree, &mut canvas);

    let pixel = canvas.pixmap().pixel(20, 20).unwrap();
    assert_eq!((pixel.red(), pixel.green(), pixel.blue()), (0, 0, 255));
}

#[test]
fn test_child_offsets_are_normalized_to_the_root() {
    // The root sits deep in the document; the child must land relative
    // to it, not to the document origin.
    let mut tree = root(40.0, 40.0, "white");
    tree.left = 500.0;
    tree.top = 300.0;
    tree.children.push(StyledElement {
        left: 510.0,
        top: 310.0,
        width: 10.0,
        height: 10.0,
        background_color: "rgb(0, 128, 0)".to_string(),
        ..StyledElement::default()
    });

    let mut canvas = Canvas::new(40, 40).unwrap();
    render(&tree, &mut canvas);

    let inside = canvas.pixmap().pixel(15, 15).unwrap();
    assert_eq!((inside.red(), inside.green(), inside.blue()), (0, 128, 0));
    let outside = canvas.pixmap().pixel(30, 30).unwrap();
    assert_eq!(
        (outside.red(), outside.green(), outside.blue()),
        (255, 255, 255)
    );
}

#[test]
fn test_zero_width_border_is_never_stroked() {
    let plain = root(40.0, 30.0, "white");
    let mut with_colored_zero_border = root(40.0, 30.0, "white");
    with_colored_zero_border.border_top_width = "0px".to_string();
    with_colored_zero_border.border_top_color = "rgb(255, 0, 0)".to_string();

    let a = snapshot(&plain).unwrap();
    let b = snapshot(&with_colored_zero_border).unwrap();
    assert_eq!(a.png_bytes(), b.png_bytes());
}

#[test]
fn test_linear_gradient_paints_along_the_gradient_line() {
    let mut tree = root(100.0, 100.0, "white");
    // 0deg: red at the bottom (start), blue at the top (end).
    tree.background_image =
        "linear-gradient(0deg, rgb(255, 0, 0) 0%, rgb(0, 0, 255) 100%)".to_string();

    let mut canvas = Canvas::new(100, 100).unwrap();
    render(&tree, &mut canvas);

    let near_top = canvas.pixmap().pixel(50, 5).unwrap();
    assert!(near_top.blue() > near_top.red());
    let near_bottom = canvas.pixmap().pixel(50, 95).unwrap();
    assert!(near_bottom.red() > near_bottom.blue());
}

#[test]
fn test_radial_gradient_paints_from_the_center_out() {
    let mut tree = root(100.0, 100.0, "white");
    tree.background_image =
        "radial-gradient(rgb(255, 0, 0) 0%, rgb(0, 0, 255) 100%)".to_string();

    let mut canvas = Canvas::new(100, 100).unwrap();
    render(&tree, &mut canvas);

    let center = canvas.pixmap().pixel(50, 50).unwrap();
    assert!(center.red() > center.blue());
    let corner = canvas.pixmap().pixel(2, 2).unwrap();
    assert!(corner.blue() > corner.red());
}

#[test]
fn test_malformed_gradient_node_does_not_abort_the_snapshot() {
    let mut tree = root(40.0, 30.0, "white");
    tree.children.push(StyledElement {
        width: 20.0,
        height: 20.0,
        background_image: "linear-gradient(45deg, rgb(255, 0) 50%)".to_string(),
        background_color: "rgb(0, 128, 0)".to_string(),
        ..StyledElement::default()
    });

    let mut canvas = Canvas::new(40, 30).unwrap();
    render(&tree, &mut canvas);

    // The malformed gradient fell back to the solid background color.
    let pixel = canvas.pixmap().pixel(10, 10).unwrap();
    assert_eq!((pixel.red(), pixel.green(), pixel.blue()), (0, 128, 0));
}

#[test]
fn test_markup_content_delegates_text_to_descendants() {
    let empty = root(60.0, 30.0, "white");
    let mut with_markup = root(60.0, 30.0, "white");
    with_markup.text = "<span>Hello</span>".to_string();

    // An element whose content contains markup paints no text itself,
    // so it renders identically to an element with no text at all.
    let a = snapshot(&empty).unwrap();
    let b = snapshot(&with_markup).unwrap();
    assert_eq!(a.png_bytes(), b.png_bytes());
}

#[test]
fn test_leaf_text_paints_when_a_font_is_available() {
    let probe = Canvas::new(1, 1).unwrap();
    if !probe.has_text_support() {
        // No system font on this machine; text is skipped by design.
        return;
    }

    let empty = root(60.0, 30.0, "white");
    let mut with_text = root(60.0, 30.0, "white");
    with_text.text = "Hello".to_string();
    with_text.color = "black".to_string();
    with_text.font_size = "14px".to_string();

    let a = snapshot(&empty).unwrap();
    let b = snapshot(&with_text).unwrap();
    assert_ne!(a.png_bytes(), b.png_bytes());
}

#[test]
fn test_zero_sized_root_is_a_typed_error() {
    let err = snapshot(&StyledElement::default()).unwrap_err();
    assert!(matches!(err, SnapshotError::InvalidCanvasSize { .. }));
}

#[test]
fn test_data_uri_payload() {
    let shot = snapshot(&root(8.0, 8.0, "white")).unwrap();
    let uri = shot.data_uri();
    assert!(uri.starts_with("data:image/png;base64,"));
    assert!(uri.len() > "data:image/png;base64,".len());
}
