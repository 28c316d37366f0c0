//! Software snapshot renderer for styled-element trees.
//!
//! # Architecture
//!
//! The renderer is the raster half of the domsnap pipeline:
//!
//! ```text
//! StyledElement tree → resolve (domsnap-style) → path → paint → Pixmap → PNG
//!                                 per element ↑________________↑
//! ```
//!
//! - [`geometry`] builds one closed rounded-rectangle path per element
//! - [`canvas`] owns the pixel buffer and the text/vector primitives
//! - [`paint`] drives fill, stroke, and text for a single element
//! - [`walker`] recurses over the tree in paint order and exports the
//!   finished image
//!
//! The walk is synchronous and deterministic: the same tree on a fresh
//! canvas yields byte-identical PNG output.

/// The shared raster drawing surface.
pub mod canvas;
/// Snapshot error type.
pub mod error;
/// Rounded-rectangle path construction.
pub mod geometry;
/// Per-element fill/stroke/text painting.
pub mod paint;
/// Recursive tree walk and snapshot capture.
pub mod walker;

pub use canvas::Canvas;
pub use error::SnapshotError;
pub use geometry::rounded_rect_path;
pub use walker::{Snapshot, render, snapshot};
