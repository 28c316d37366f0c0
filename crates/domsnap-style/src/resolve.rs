//! Per-element style resolution.
//!
//! Turns one [`StyledElement`]'s raw style strings into the structured
//! paint data the render pipeline consumes: normalized [`Bounds`], a
//! [`BorderSpec`], a [`FillSpec`], and font/text properties.
//!
//! Resolution never fails. Every malformed value has a safe local
//! fallback — zero length, solid color, skipped gradient — so one bad
//! node cannot abort the snapshot (gradient translation errors are
//! reported through the warning system and absorbed here).

use serde::{Deserialize, Serialize};

use crate::gradient::{self, GradientDescriptor, GradientSyntax, Point};
use crate::model::StyledElement;
use crate::values::{ColorValue, FontSpec, css_px};
use crate::warning::warn_once;

/// The normalization origin of one snapshot pass.
///
/// Set once from the root element's document offset and threaded
/// explicitly through the walk; all descendant bounds are computed
/// relative to it. Never shared across invocations.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Origin {
    /// Document-space x of the snapshot root.
    pub x: f32,
    /// Document-space y of the snapshot root.
    pub y: f32,
}

impl Origin {
    /// The origin for a snapshot rooted at `root`.
    #[must_use]
    pub fn of(root: &StyledElement) -> Self {
        Self {
            x: root.left,
            y: root.top,
        }
    }
}

/// Resolved paint rectangle in canvas coordinates.
///
/// The top-left corner is offset by half the border width so the stroke
/// is centered on the rectangle edge, matching border-box semantics.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    /// Left edge in canvas coordinates.
    pub x: f32,
    /// Top edge in canvas coordinates.
    pub y: f32,
    /// Content-box width.
    pub width: f32,
    /// Content-box height.
    pub height: f32,
}

impl Bounds {
    /// Geometric center of the rectangle.
    #[must_use]
    pub fn center(&self) -> Point {
        Point::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    /// Half the diagonal: the radius of the circumscribing circle, used
    /// as the gradient reach.
    #[must_use]
    pub fn half_diagonal(&self) -> f32 {
        self.width.hypot(self.height) / 2.0
    }
}

/// Resolved border properties.
///
/// [CSS Backgrounds and Borders Level 3 § 4/§ 5](https://www.w3.org/TR/css-backgrounds-3/)
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct BorderSpec {
    /// Top-left corner radius in pixels.
    pub top_left_radius: f32,
    /// Top-right corner radius in pixels.
    pub top_right_radius: f32,
    /// Bottom-left corner radius in pixels.
    pub bottom_left_radius: f32,
    /// Bottom-right corner radius in pixels.
    pub bottom_right_radius: f32,
    /// Stroke width in pixels; 0 means the border is never stroked.
    pub line_width: f32,
    /// Stroke color.
    pub line_color: ColorValue,
}

/// Resolved fill for an element: exactly one of a solid color or a
/// gradient definition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum FillSpec {
    /// Solid background color (also the fallback for every unsupported
    /// or malformed background value).
    Solid(ColorValue),
    /// Translated gradient definition.
    Gradient(GradientDescriptor),
}

/// Horizontal text anchor, canvas-style: the anchor point is the element
/// center and the alignment decides which part of the text sits on it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TextAlign {
    /// Text starts at the anchor.
    #[default]
    Left,
    /// Text is centered on the anchor.
    Center,
    /// Text ends at the anchor.
    Right,
}

impl TextAlign {
    /// Map a raw `text-align` value; unknown keywords anchor left.
    #[must_use]
    pub fn from_css(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "center" => Self::Center,
            "right" | "end" => Self::Right,
            _ => Self::Left,
        }
    }
}

/// Everything the paint pipeline needs for one element.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedStyle {
    /// Normalized paint rectangle.
    pub bounds: Bounds,
    /// Border radii, stroke width, and stroke color.
    pub border: BorderSpec,
    /// Background fill.
    pub fill: FillSpec,
    /// Font components for text painting.
    pub font: FontSpec,
    /// Text color.
    pub text_color: ColorValue,
    /// Horizontal text anchor.
    pub text_align: TextAlign,
}

/// Resolve one element's raw style values against the snapshot origin.
#[must_use]
pub fn resolve_style(element: &StyledElement, origin: Origin) -> ResolvedStyle {
    let border = resolve_border(element);
    let bounds = resolve_bounds(element, origin, border.line_width);
    let fill = resolve_fill(element, &bounds);

    ResolvedStyle {
        bounds,
        border,
        fill,
        font: FontSpec::resolve(&element.font_weight, &element.font_size, &element.font_family),
        text_color: ColorValue::parse(&element.color).unwrap_or(ColorValue::BLACK),
        text_align: TextAlign::from_css(&element.text_align),
    }
}

/// Normalize the element's document offset into canvas coordinates.
///
/// `x = doc_left - origin.x + border_width / 2` centers the stroke on the
/// rectangle edge; width and height come verbatim from the content box.
fn resolve_bounds(element: &StyledElement, origin: Origin, border_width: f32) -> Bounds {
    Bounds {
        x: element.left - origin.x + border_width / 2.0,
        y: element.top - origin.y + border_width / 2.0,
        width: element.width,
        height: element.height,
    }
}

/// Resolve corner radii and the stroke from the raw border values.
///
/// Negative radii are meaningless and clamp to 0 here; clamping against
/// the box dimensions happens during path construction, where the final
/// rectangle is known.
fn resolve_border(element: &StyledElement) -> BorderSpec {
    BorderSpec {
        top_left_radius: css_px(&element.border_top_left_radius).max(0.0),
        top_right_radius: css_px(&element.border_top_right_radius).max(0.0),
        bottom_left_radius: css_px(&element.border_bottom_left_radius).max(0.0),
        bottom_right_radius: css_px(&element.border_bottom_right_radius).max(0.0),
        line_width: css_px(&element.border_top_width).max(0.0),
        line_color: ColorValue::parse(&element.border_top_color).unwrap_or(ColorValue::BLACK),
    }
}

/// Classify the raw background and translate it into a fill.
///
/// The ordered gradient pattern table decides the branch; on no match a
/// `url(...)` reference is explicitly unsupported and anything else is
/// treated as a solid color. All gradient translation failures fall back
/// to the solid background color.
fn resolve_fill(element: &StyledElement, bounds: &Bounds) -> FillSpec {
    let raw = element.background_image.trim();
    let center = bounds.center();
    let radius = bounds.half_diagonal();

    match gradient::classify(raw) {
        Some(GradientSyntax::Linear) => match gradient::translate_linear(raw, center, radius) {
            Ok(descriptor) => return FillSpec::Gradient(descriptor),
            Err(err) => warn_once("style", &format!("dropping linear gradient: {err}")),
        },
        Some(GradientSyntax::Radial) => match gradient::translate_radial(raw, center, radius) {
            Ok(descriptor) => return FillSpec::Gradient(descriptor),
            Err(err) => warn_once("style", &format!("dropping radial gradient: {err}")),
        },
        Some(GradientSyntax::Unsupported) => {
            warn_once("style", &format!("unsupported gradient syntax: {raw:?}"));
        }
        None => {
            if raw.starts_with("url(") {
                warn_once("style", &format!("background images are not supported: {raw:?}"));
            }
        }
    }

    FillSpec::Solid(solid_background(element))
}

/// The solid background color, transparent when unset or unparseable.
fn solid_background(element: &StyledElement) -> ColorValue {
    ColorValue::parse(&element.background_color).unwrap_or(ColorValue::TRANSPARENT)
}
