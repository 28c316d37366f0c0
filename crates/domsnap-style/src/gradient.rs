//! CSS gradient translation.
//!
//! [CSS Images Module Level 3](https://www.w3.org/TR/css-images-3/#gradients)
//!
//! Computed styles report gradients as text (`linear-gradient(45deg,
//! rgb(0, 4, 255) 0%, …)`), and the original gradient object of the
//! rendering engine is not available to a snapshot pass. This module
//! re-derives a geometric gradient definition from that mini-language:
//!
//! 1. **Classify** — match the value against an ordered prefix table and
//!    produce a tagged [`GradientSyntax`], never a pattern index.
//! 2. **Extract** — pull the angle (linear only) and the ordered
//!    `rgb(r, g, b) <stop>` tokens out of the text with bounds-checked
//!    parsing; irregular tokens are a typed [`GradientError`], never an
//!    out-of-range read.
//! 3. **Translate** — convert the angle into a gradient line across the
//!    element's circumscribing circle, or build the degenerate
//!    point-to-diagonal circles of a radial gradient.
//!
//! Stops keep their source order; they are never re-sorted.

use serde::{Deserialize, Serialize};

use crate::values::ColorValue;

/// A 2D point in canvas coordinates (y grows downward).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    /// Horizontal coordinate in pixels.
    pub x: f32,
    /// Vertical coordinate in pixels.
    pub y: f32,
}

impl Point {
    /// Construct a point.
    #[must_use]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Which gradient branch a background value selects.
///
/// [§ 3.1 Linear gradients](https://www.w3.org/TR/css-images-3/#linear-gradients) /
/// [§ 3.2 Radial gradients](https://www.w3.org/TR/css-images-3/#radial-gradients)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum GradientSyntax {
    /// A translatable linear gradient (vendor-prefixed or unprefixed).
    Linear,
    /// A translatable radial gradient (unprefixed form only).
    Radial,
    /// Recognized gradient syntax with no translation branch: the
    /// vendor-prefixed radial forms and the legacy `webkit-gradient()`
    /// notation. These fall back to the element's solid background color.
    Unsupported,
}

/// Ordered pattern table for background classification.
///
/// Radial variants come before linear variants and the first matching
/// prefix wins, mirroring the precedence of the gradient syntaxes the
/// snapshot understands. Only the unprefixed radial form has a translation
/// branch; the prefixed radial forms use parameter grammars that differ per
/// vendor and are not translated.
const GRADIENT_PATTERNS: &[(&str, GradientSyntax)] = &[
    ("-moz-radial-gradient", GradientSyntax::Unsupported),
    ("-webkit-radial-gradient", GradientSyntax::Unsupported),
    ("-o-radial-gradient", GradientSyntax::Unsupported),
    ("-ms-radial-gradient", GradientSyntax::Unsupported),
    ("-radial-gradient", GradientSyntax::Unsupported),
    ("radial-gradient", GradientSyntax::Radial),
    ("-moz-linear-gradient", GradientSyntax::Linear),
    ("-webkit-linear-gradient", GradientSyntax::Linear),
    ("-o-linear-gradient", GradientSyntax::Linear),
    ("-ms-linear-gradient", GradientSyntax::Linear),
    ("-linear-gradient", GradientSyntax::Linear),
    ("linear-gradient", GradientSyntax::Linear),
    ("webkit-gradient", GradientSyntax::Unsupported),
];

/// Classify a raw `background-image` value against the gradient pattern
/// table. Returns `None` when the value is not gradient syntax at all
/// (a solid color, `url(...)`, or `none`).
#[must_use]
pub fn classify(value: &str) -> Option<GradientSyntax> {
    let value = value.trim_start();
    GRADIENT_PATTERNS
        .iter()
        .find(|(prefix, _)| value.starts_with(prefix))
        .map(|(_, syntax)| *syntax)
}

/// Failures while translating a recognized gradient value.
///
/// These are absorbed by style resolution into the solid-color fallback —
/// one malformed gradient never aborts a snapshot — but they carry enough
/// detail to be reported.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GradientError {
    /// A linear gradient without a `<angle>deg` component.
    #[error("missing angle in linear gradient: {0:?}")]
    MissingAngle(String),
    /// A color-stop token that is not `rgb(r, g, b) <position>`.
    #[error("malformed gradient stop token: {0:?}")]
    MalformedStop(String),
    /// Gradient syntax with no color stops at all.
    #[error("no color stops found in gradient: {0:?}")]
    NoStops(String),
}

/// One point along a gradient.
///
/// [§ 3.4.1 Color stops](https://www.w3.org/TR/css-images-3/#color-stop-syntax)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GradientStop {
    /// Fractional offset along the gradient line, in `[0, 1]`.
    pub offset: f32,
    /// Stop color.
    pub color: ColorValue,
}

/// Geometric definition of a gradient, ready for a raster gradient
/// primitive.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum GradientDescriptor {
    /// A gradient along the line from `start` to `end`.
    Linear {
        /// Start point of the gradient line.
        start: Point,
        /// End point of the gradient line.
        end: Point,
        /// Color stops in source order.
        stops: Vec<GradientStop>,
    },
    /// A gradient between two concentric circles.
    Radial {
        /// Shared center of the start and end circles (the element center).
        center: Point,
        /// Radius of the degenerate, point-like start circle.
        start_radius: f32,
        /// Radius of the end circle: half the element's bounding-box
        /// diagonal, so the gradient reaches the corners.
        end_radius: f32,
        /// Color stops in source order.
        stops: Vec<GradientStop>,
    },
}

/// Translate a linear gradient value into a gradient line across the
/// element's circumscribing circle.
///
/// `center` is the element's geometric center and `radius` half its
/// bounding-box diagonal. [§ 3.1.1](https://www.w3.org/TR/css-images-3/#linear-gradient-syntax):
/// "0deg points toward the top" — in y-down canvas coordinates the end
/// point therefore sits at `angle + 270°` on the circle and the start point
/// at the antipodal `angle + 90°`.
///
/// # Errors
///
/// [`GradientError::MissingAngle`] when no `<angle>deg` component is
/// present (keyword directions like `to right` are not translated), plus
/// any stop extraction failure.
pub fn translate_linear(
    value: &str,
    center: Point,
    radius: f32,
) -> Result<GradientDescriptor, GradientError> {
    let angle =
        extract_angle(value).ok_or_else(|| GradientError::MissingAngle(value.to_string()))?;
    let stops = extract_stops(value)?;

    let (start, end) = gradient_line(center, radius, angle);
    Ok(GradientDescriptor::Linear { start, end, stops })
}

/// Translate a radial gradient value into concentric start/end circles at
/// the element center.
///
/// The start circle radius is fixed at 1 (a point-like origin) and the end
/// circle radius is `radius`, half the bounding-box diagonal.
///
/// # Errors
///
/// Stop extraction failures only; the radial form carries no angle.
pub fn translate_radial(
    value: &str,
    center: Point,
    radius: f32,
) -> Result<GradientDescriptor, GradientError> {
    let stops = extract_stops(value)?;
    Ok(GradientDescriptor::Radial {
        center,
        start_radius: 1.0,
        end_radius: radius,
        stops,
    })
}

/// Gradient line endpoints for an angle on the circumscribing circle.
fn gradient_line(center: Point, radius: f32, angle_deg: f32) -> (Point, Point) {
    let point_at = |theta_deg: f32| {
        let theta = theta_deg.to_radians();
        Point::new(
            radius.mul_add(theta.cos(), center.x),
            radius.mul_add(theta.sin(), center.y),
        )
    };
    // 0deg points up: end at the top of the circle, start antipodal.
    (point_at(angle_deg + 90.0), point_at(angle_deg + 270.0))
}

/// Extract the `<angle>deg` component: the integer (optionally negative)
/// immediately preceding the first `deg` in the value.
fn extract_angle(value: &str) -> Option<f32> {
    let deg_at = value.find("deg")?;
    let before = &value[..deg_at];

    let digits_start = before
        .char_indices()
        .rev()
        .take_while(|(_, c)| c.is_ascii_digit())
        .last()
        .map(|(i, _)| i)?;
    let signed_start = before[..digits_start]
        .ends_with('-')
        .then(|| digits_start - 1)
        .unwrap_or(digits_start);

    before[signed_start..].parse().ok()
}

/// Extract every `rgb(r, g, b) <stop>` token in source order.
fn extract_stops(value: &str) -> Result<Vec<GradientStop>, GradientError> {
    let mut stops = Vec::new();
    let mut rest = value;
    while let Some(at) = rest.find("rgb(") {
        let token = &rest[at..];
        let (stop, consumed) = parse_stop_token(token)?;
        stops.push(stop);
        rest = &token[consumed..];
    }

    if stops.is_empty() {
        return Err(GradientError::NoStops(value.to_string()));
    }
    Ok(stops)
}

/// Parse one `rgb(r, g, b) <stop>` color-stop token.
///
/// The stop position is a percentage (`50` or `50%`); it converts to a
/// fractional offset by dividing by 100.
///
/// # Errors
///
/// [`GradientError::MalformedStop`] when the token has missing or
/// out-of-range channels or no stop position.
pub fn parse_rgb_stop(token: &str) -> Result<GradientStop, GradientError> {
    parse_stop_token(token).map(|(stop, _)| stop)
}

/// Parse a token starting with `rgb(`, returning the stop and the number
/// of bytes consumed (for the extraction scan).
fn parse_stop_token(token: &str) -> Result<(GradientStop, usize), GradientError> {
    let malformed = || GradientError::MalformedStop(token.to_string());

    let inner_start = token.strip_prefix("rgb(").ok_or_else(malformed)?;
    let close = inner_start.find(')').ok_or_else(malformed)?;
    let channels = &inner_start[..close];

    let mut parts = channels.split(',').map(str::trim);
    let r: u8 = parts
        .next()
        .and_then(|c| c.parse().ok())
        .ok_or_else(malformed)?;
    let g: u8 = parts
        .next()
        .and_then(|c| c.parse().ok())
        .ok_or_else(malformed)?;
    let b: u8 = parts
        .next()
        .and_then(|c| c.parse().ok())
        .ok_or_else(malformed)?;
    if parts.next().is_some() {
        return Err(malformed());
    }

    // Position follows the closing paren, separated by whitespace.
    let after_close = &inner_start[close + 1..];
    let position_str = after_close.trim_start();
    let skipped = after_close.len() - position_str.len();
    let digits_len = position_str
        .char_indices()
        .find(|(_, c)| !c.is_ascii_digit())
        .map_or(position_str.len(), |(i, _)| i);
    if digits_len == 0 {
        return Err(malformed());
    }
    let position: f32 = position_str[..digits_len].parse().map_err(|_| malformed())?;

    let stop = GradientStop {
        offset: position / 100.0,
        color: ColorValue::rgb(r, g, b),
    };
    // "rgb(" + channels + ")" + whitespace + digits
    let consumed = 4 + close + 1 + skipped + digits_len;
    Ok((stop, consumed))
}
