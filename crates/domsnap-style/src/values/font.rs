//! CSS Font value resolution
//!
//! [CSS Fonts Module Level 4](https://www.w3.org/TR/css-fonts-4/)

use serde::{Deserialize, Serialize};

use super::number::css_px;

/// User agent default font size.
/// [§ 3.5 font-size](https://www.w3.org/TR/css-fonts-4/#font-size-prop)
pub const DEFAULT_FONT_SIZE_PX: f32 = 16.0;

/// Resolved font components for one element.
///
/// [§ 4.4 font shorthand](https://www.w3.org/TR/css-fonts-4/#font-prop)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FontSpec {
    /// [§ 3.2 font-weight](https://www.w3.org/TR/css-fonts-4/#font-weight-prop)
    pub weight: u16,
    /// Font size in pixels.
    pub size: f32,
    /// First family name from the computed `font-family`.
    pub family: String,
}

impl FontSpec {
    /// Resolve raw computed-style strings into font components.
    ///
    /// `"normal"` maps to 400 and `"bold"` to 700 per
    /// [§ 3.2](https://www.w3.org/TR/css-fonts-4/#font-weight-prop); numeric
    /// weights are taken as-is. An unparseable size falls back to the UA
    /// default of 16px.
    #[must_use]
    pub fn resolve(weight: &str, size: &str, family: &str) -> Self {
        let weight = match weight.trim().to_ascii_lowercase().as_str() {
            "bold" | "bolder" => 700,
            "normal" | "" => 400,
            numeric => {
                let parsed = css_px(numeric) as u16;
                if (100..=900).contains(&parsed) { parsed } else { 400 }
            }
        };

        let size = match css_px(size) {
            parsed if parsed > 0.0 => parsed,
            _ => DEFAULT_FONT_SIZE_PX,
        };

        let family = family
            .split(',')
            .next()
            .map(|name| name.trim().trim_matches(['"', '\'']).to_string())
            .filter(|name| !name.is_empty())
            .unwrap_or_else(|| "sans-serif".to_string());

        Self {
            weight,
            size,
            family,
        }
    }

    /// The `"<weight> <size> <family>"` shorthand form.
    #[must_use]
    pub fn shorthand(&self) -> String {
        format!("{} {}px {}", self.weight, self.size, self.family)
    }

    /// Whether this weight selects a bold face (CSS bold threshold).
    #[must_use]
    pub fn is_bold(&self) -> bool {
        self.weight >= 700
    }
}

impl Default for FontSpec {
    fn default() -> Self {
        Self {
            weight: 400,
            size: DEFAULT_FONT_SIZE_PX,
            family: "sans-serif".to_string(),
        }
    }
}
