//! CSS numeric value extraction
//!
//! [CSS Values and Units Level 4](https://www.w3.org/TR/css-values-4/)
//!
//! Computed styles report lengths as strings like `"12px"` or keywords like
//! `"auto"`. Snapshot rendering only needs the integer pixel count, so this
//! module extracts a leading integer and treats everything unparseable as 0,
//! never as an error — a malformed value on one element must not abort the
//! whole snapshot.

/// Extract the leading integer from a CSS value string, in pixels.
///
/// Follows the lenient `parseInt` reading of a dimension token: optional
/// sign, then decimal digits, stopping at the first non-digit (`"12px"` →
/// 12, `"12.9px"` → 12). Anything without a leading integer — `"auto"`,
/// `"thin"`, the empty string — resolves to 0.
#[must_use]
pub fn css_px(value: &str) -> f32 {
    let trimmed = value.trim_start();
    let (negative, rest) = match trimmed.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, trimmed.strip_prefix('+').unwrap_or(trimmed)),
    };

    let digits: &str = {
        let end = rest
            .char_indices()
            .find(|(_, c)| !c.is_ascii_digit())
            .map_or(rest.len(), |(i, _)| i);
        &rest[..end]
    };

    let magnitude: f32 = digits.parse().unwrap_or(0.0);
    if negative { -magnitude } else { magnitude }
}

#[cfg(test)]
mod tests {
    use super::css_px;

    #[test]
    fn dimension_token() {
        assert_eq!(css_px("12px"), 12.0);
    }

    #[test]
    fn keyword_resolves_to_zero() {
        assert_eq!(css_px("auto"), 0.0);
    }

    #[test]
    fn fraction_truncates_at_the_dot() {
        assert_eq!(css_px("12.9px"), 12.0);
    }

    #[test]
    fn negative_offset() {
        assert_eq!(css_px("-4px"), -4.0);
    }

    #[test]
    fn empty_and_whitespace() {
        assert_eq!(css_px(""), 0.0);
        assert_eq!(css_px("   "), 0.0);
    }
}
