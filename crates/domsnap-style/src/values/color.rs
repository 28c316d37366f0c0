//! CSS Color values and parsing
//!
//! [CSS Color Level 4](https://www.w3.org/TR/css-color-4/)

use serde::{Deserialize, Serialize};

/// [§ 4 Color syntax](https://www.w3.org/TR/css-color-4/#color-syntax)
/// sRGB color represented as RGBA components.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorValue {
    /// "the red color channel" (0-255)
    pub r: u8,
    /// "the green color channel" (0-255)
    pub g: u8,
    /// "the blue color channel" (0-255)
    pub b: u8,
    /// "the alpha channel" (0-255, 255 = fully opaque)
    pub a: u8,
}

impl ColorValue {
    /// Black (#000000)
    pub const BLACK: Self = Self { r: 0, g: 0, b: 0, a: 255 };

    /// White (#ffffff)
    pub const WHITE: Self = Self {
        r: 255,
        g: 255,
        b: 255,
        a: 255,
    };

    /// Fully transparent black, the color of an unset background.
    pub const TRANSPARENT: Self = Self { r: 0, g: 0, b: 0, a: 0 };

    /// Opaque color from three channels.
    #[must_use]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// [§ 4.2 The RGB hexadecimal notations](https://www.w3.org/TR/css-color-4/#hex-notation)
    /// "The syntax of a `<hex-color>` is a `<hash-token>` token whose value
    /// consists of 3, 4, 6, or 8 hexadecimal digits."
    #[must_use]
    pub fn from_hex(hex: &str) -> Option<Self> {
        let hex = hex.strip_prefix('#').unwrap_or(hex);
        match hex.len() {
            // [§ 4.2.1]
            // "The three-digit RGB notation (#RGB) is converted into six-digit
            // form (#RRGGBB) by replicating digits, not by adding zeros."
            3 | 4 => {
                let mut channels = [0u8; 4];
                for (i, slot) in channels.iter_mut().take(hex.len()).enumerate() {
                    *slot = u8::from_str_radix(&hex[i..=i].repeat(2), 16).ok()?;
                }
                let [r, g, b, a] = channels;
                let a = if hex.len() == 4 { a } else { 255 };
                Some(Self { r, g, b, a })
            }
            // Six-digit RGB (#RRGGBB) and eight-digit RGBA (#RRGGBBAA)
            6 | 8 => {
                let mut channels = [0u8; 4];
                for (i, slot) in channels.iter_mut().take(hex.len() / 2).enumerate() {
                    *slot = u8::from_str_radix(&hex[i * 2..i * 2 + 2], 16).ok()?;
                }
                let [r, g, b, a] = channels;
                let a = if hex.len() == 8 { a } else { 255 };
                Some(Self { r, g, b, a })
            }
            _ => None,
        }
    }

    /// [§ 6.1 Named Colors](https://www.w3.org/TR/css-color-4/#named-colors)
    ///
    /// The basic 16 HTML colors plus `transparent` and the `grey` spelling.
    #[must_use]
    pub fn from_named(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "white" => Some(Self::WHITE),
            "black" => Some(Self::BLACK),
            "transparent" => Some(Self::TRANSPARENT),
            "silver" => Some(Self::rgb(192, 192, 192)),
            "gray" | "grey" => Some(Self::rgb(128, 128, 128)),
            "red" => Some(Self::rgb(255, 0, 0)),
            "maroon" => Some(Self::rgb(128, 0, 0)),
            "yellow" => Some(Self::rgb(255, 255, 0)),
            "olive" => Some(Self::rgb(128, 128, 0)),
            "lime" => Some(Self::rgb(0, 255, 0)),
            "green" => Some(Self::rgb(0, 128, 0)),
            "aqua" | "cyan" => Some(Self::rgb(0, 255, 255)),
            "teal" => Some(Self::rgb(0, 128, 128)),
            "blue" => Some(Self::rgb(0, 0, 255)),
            "navy" => Some(Self::rgb(0, 0, 128)),
            "fuchsia" | "magenta" => Some(Self::rgb(255, 0, 255)),
            "purple" => Some(Self::rgb(128, 0, 128)),
            "orange" => Some(Self::rgb(255, 165, 0)),
            _ => None,
        }
    }

    /// [§ 4.1 The RGB functions](https://www.w3.org/TR/css-color-4/#rgb-functions)
    ///
    /// Parse the legacy comma-separated `rgb(r, g, b)` / `rgba(r, g, b, a)`
    /// forms with integer channels, the notation computed styles report.
    #[must_use]
    pub fn from_rgb_function(value: &str) -> Option<Self> {
        let value = value.trim();
        let inner = value
            .strip_prefix("rgba(")
            .or_else(|| value.strip_prefix("rgb("))?
            .strip_suffix(')')?;

        let mut parts = inner.split(',').map(str::trim);
        let r = parts.next()?.parse().ok()?;
        let g = parts.next()?.parse().ok()?;
        let b = parts.next()?.parse().ok()?;
        // Alpha is a float in [0, 1]; absent means opaque.
        let a = match parts.next() {
            Some(alpha) => {
                let alpha: f32 = alpha.parse().ok()?;
                (alpha.clamp(0.0, 1.0) * 255.0).round() as u8
            }
            None => 255,
        };
        if parts.next().is_some() {
            return None;
        }
        Some(Self { r, g, b, a })
    }

    /// Parse any color notation a computed style may report: hex, named, or
    /// the `rgb()`/`rgba()` functions.
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        let value = value.trim();
        if value.starts_with('#') {
            Self::from_hex(value)
        } else if value.starts_with("rgb") {
            Self::from_rgb_function(value)
        } else {
            Self::from_named(value)
        }
    }

    /// Render as a 6-digit lowercase hex string, `#rrggbb`.
    ///
    /// The 24-bit pack (`r << 16 | g << 8 | b`) drops alpha; gradient stops
    /// in the source syntax are always opaque `rgb()` tokens.
    #[must_use]
    pub fn to_hex(&self) -> String {
        let packed = (u32::from(self.r) << 16) | (u32::from(self.g) << 8) | u32::from(self.b);
        format!("#{packed:06x}")
    }
}
