//! Styled-element model and style resolution for the domsnap renderer.
//!
//! # Scope
//!
//! This crate implements the data side of the snapshot pipeline:
//! - **Input Model** — the [`StyledElement`] tree, a read-only view over a
//!   rendered document's resolved layout and style values
//! - **Value Parsing** — lenient CSS numeric extraction, color notations
//!   (hex, named, `rgb()`/`rgba()`), and font component resolution
//! - **Gradient Translation** — the textual linear/radial gradient
//!   mini-language into geometric gradient definitions
//!   ([CSS Images Level 3](https://www.w3.org/TR/css-images-3/#gradients))
//! - **Style Resolution** — per-element bounds normalization, border and
//!   fill specs
//!
//! Everything here is pure data; no raster surface is touched. The
//! companion `domsnap-render` crate consumes [`ResolvedStyle`] to paint.
//!
//! # Not Implemented
//!
//! - Image backgrounds (`url(...)` values warn once and fall back to the
//!   solid background color)
//! - Keyword gradient directions (`to right`) and the vendor-prefixed
//!   radial / legacy `webkit-gradient()` syntaxes
//! - Inherited styles: every raw value is read from the element itself

/// Gradient classification and translation per [CSS Images Level 3](https://www.w3.org/TR/css-images-3/#gradients).
pub mod gradient;
/// The styled-element input tree.
pub mod model;
/// Per-element style resolution into paint data.
pub mod resolve;
/// CSS value types and parsing.
pub mod values;
/// Deduplicated warnings for unsupported features.
pub mod warning;

pub use gradient::{GradientDescriptor, GradientError, GradientStop, GradientSyntax, Point};
pub use model::StyledElement;
pub use resolve::{Bounds, BorderSpec, FillSpec, Origin, ResolvedStyle, TextAlign, resolve_style};
pub use values::{ColorValue, FontSpec, css_px};
