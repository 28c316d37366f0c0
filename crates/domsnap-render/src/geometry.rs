//! Rounded-rectangle path construction.
//!
//! [CSS Backgrounds and Borders Level 3 § 5 'border-radius'](https://www.w3.org/TR/css-backgrounds-3/#border-radius)
//!
//! Builds one closed path per element, visiting the top edge, then each
//! corner in clockwise order (top-right, bottom-right, bottom-left,
//! top-left). Every corner with a positive radius becomes a quarter-turn
//! arc tangent to both adjoining edges; a zero radius degenerates that
//! corner to a sharp right angle with no curve segment, so an all-zero
//! path is a plain axis-aligned rectangle. The same path is reused for
//! fill and stroke.

use domsnap_style::{BorderSpec, Bounds};
use tiny_skia::{Path, PathBuilder};

/// Cubic Bézier control distance for a quarter circle, `4/3 · (√2 − 1)`.
const KAPPA: f32 = 0.552_284_8;

/// Build the closed rounded-rectangle path for an element.
///
/// Radii are clamped to half the shorter side, the standard engine
/// behavior ([§ 5.5 overlapping curves](https://www.w3.org/TR/css-backgrounds-3/#corner-overlap)),
/// which keeps the path free of self-intersections for any input radii.
///
/// Returns `None` only for degenerate bounds tiny-skia cannot represent
/// (non-finite coordinates).
#[must_use]
pub fn rounded_rect_path(bounds: &Bounds, border: &BorderSpec) -> Option<Path> {
    let Bounds {
        x,
        y,
        width: w,
        height: h,
    } = *bounds;

    let radius_limit = (w.min(h) / 2.0).max(0.0);
    let tlr = border.top_left_radius.clamp(0.0, radius_limit);
    let trr = border.top_right_radius.clamp(0.0, radius_limit);
    let blr = border.bottom_left_radius.clamp(0.0, radius_limit);
    let brr = border.bottom_right_radius.clamp(0.0, radius_limit);

    let mut pb = PathBuilder::new();

    pb.move_to(x + tlr, y);
    pb.line_to(x + w - trr, y);
    if trr > 0.0 {
        pb.cubic_to(
            KAPPA.mul_add(trr, x + w - trr),
            y,
            x + w,
            y + trr - KAPPA * trr,
            x + w,
            y + trr,
        );
    }
    pb.line_to(x + w, y + h - brr);
    if brr > 0.0 {
        pb.cubic_to(
            x + w,
            KAPPA.mul_add(brr, y + h - brr),
            KAPPA.mul_add(brr, x + w - brr),
            y + h,
            x + w - brr,
            y + h,
        );
    }
    pb.line_to(x + blr, y + h);
    if blr > 0.0 {
        pb.cubic_to(
            x + blr - KAPPA * blr,
            y + h,
            x,
            KAPPA.mul_add(blr, y + h - blr),
            x,
            y + h - blr,
        );
    }
    pb.line_to(x, y + tlr);
    if tlr > 0.0 {
        pb.cubic_to(x, y + tlr - KAPPA * tlr, x + tlr - KAPPA * tlr, y, x + tlr, y);
    }
    pb.close();

    pb.finish()
}

#[cfg(test)]
mod tests {
    use super::rounded_rect_path;
    use domsnap_style::{BorderSpec, Bounds};

    #[test]
    fn oversized_radius_is_clamped_to_half_the_shorter_side() {
        let bounds = Bounds {
            x: 0.0,
            y: 0.0,
            width: 100.0,
            height: 50.0,
        };
        let border = BorderSpec {
            top_left_radius: 1000.0,
            ..BorderSpec::default()
        };

        let path = rounded_rect_path(&bounds, &border).unwrap();
        let rect = path.bounds();
        // A clamped arc stays inside the rectangle.
        assert_eq!(rect.left(), 0.0);
        assert_eq!(rect.top(), 0.0);
        assert_eq!(rect.right(), 100.0);
        assert_eq!(rect.bottom(), 50.0);
    }
}
