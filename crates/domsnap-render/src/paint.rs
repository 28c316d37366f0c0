//! The per-element paint pipeline.
//!
//! Given an element's resolved geometry and style, this module is the
//! only place that touches the raster surface: it fills the rounded-rect
//! path with the resolved fill, strokes it when the border has a
//! positive width, and draws leaf text centered in the element.
//!
//! [CSS 2.1 Appendix E.2 Painting order](https://www.w3.org/TR/CSS2/zindex.html#painting-order):
//! background, then border, then content — the tree walker calls in
//! that order and handles descendants.

use domsnap_style::{ColorValue, FillSpec, GradientDescriptor, ResolvedStyle};
use tiny_skia::{
    GradientStop, LinearGradient, Paint, Path, Point, RadialGradient, Shader, SpreadMode, Stroke,
    Transform,
};

use crate::canvas::Canvas;

/// Fill and (when the line width is positive) stroke an element's path.
///
/// Zero-width borders are never stroked — a stroke of width 0 would
/// still rasterize as a hairline.
pub fn paint_box(canvas: &mut Canvas, path: &Path, style: &ResolvedStyle) {
    if let Some(paint) = fill_paint(&style.fill) {
        canvas.fill_path(path, &paint);
    }

    if style.border.line_width > 0.0 {
        let mut paint = Paint::default();
        paint.anti_alias = true;
        paint.set_color(to_skia_color(style.border.line_color));

        let stroke = Stroke {
            width: style.border.line_width,
            ..Stroke::default()
        };
        canvas.stroke_path(path, &paint, &stroke);
    }
}

/// Draw an element's text centered at its geometric center.
///
/// The walker's leaf heuristic decides *whether* text is painted; this
/// only decides *how*: horizontal anchor from `text-align`, vertical
/// always middle.
pub fn paint_text(canvas: &mut Canvas, text: &str, style: &ResolvedStyle) {
    canvas.draw_text(
        text,
        style.bounds.center(),
        &style.font,
        style.text_color,
        style.text_align,
    );
}

/// Build the fill paint for a resolved fill.
///
/// Returns `None` when a gradient definition cannot back a shader (a
/// degenerate zero-radius radial on a zero-sized element); nothing is
/// filled in that case.
fn fill_paint(fill: &FillSpec) -> Option<Paint<'static>> {
    let mut paint = Paint::default();
    paint.anti_alias = true;

    match fill {
        FillSpec::Solid(color) => paint.set_color(to_skia_color(*color)),
        FillSpec::Gradient(descriptor) => paint.shader = gradient_shader(descriptor)?,
    }
    Some(paint)
}

/// Translate a gradient descriptor into a tiny-skia shader.
fn gradient_shader(descriptor: &GradientDescriptor) -> Option<Shader<'static>> {
    match descriptor {
        GradientDescriptor::Linear { start, end, stops } => LinearGradient::new(
            to_skia_point(*start),
            to_skia_point(*end),
            to_skia_stops(stops),
            SpreadMode::Pad,
            Transform::identity(),
        ),
        // tiny-skia's two-point radial takes a single radius; the 1px
        // start circle of the descriptor is visually a point, so only the
        // end radius carries over.
        GradientDescriptor::Radial {
            center, end_radius, stops, ..
        } => RadialGradient::new(
            to_skia_point(*center),
            to_skia_point(*center),
            *end_radius,
            to_skia_stops(stops),
            SpreadMode::Pad,
            Transform::identity(),
        ),
    }
}

/// Convert descriptor stops, clamping offsets into `[0, 1]` as raster
/// gradient primitives require.
fn to_skia_stops(stops: &[domsnap_style::GradientStop]) -> Vec<GradientStop> {
    stops
        .iter()
        .map(|stop| GradientStop::new(stop.offset.clamp(0.0, 1.0), to_skia_color(stop.color)))
        .collect()
}

fn to_skia_color(color: ColorValue) -> tiny_skia::Color {
    tiny_skia::Color::from_rgba8(color.r, color.g, color.b, color.a)
}

fn to_skia_point(point: domsnap_style::Point) -> Point {
    Point::from_xy(point.x, point.y)
}
