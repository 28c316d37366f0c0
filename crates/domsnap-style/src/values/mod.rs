//! CSS value types and parsing
//!
//! - [CSS Values and Units Level 4](https://www.w3.org/TR/css-values-4/)
//! - [CSS Color Level 4](https://www.w3.org/TR/css-color-4/)
//! - [CSS Fonts Module Level 4](https://www.w3.org/TR/css-fonts-4/)

mod color;
mod font;
mod number;

pub use color::ColorValue;
pub use font::{DEFAULT_FONT_SIZE_PX, FontSpec};
pub use number::css_px;
