//! The recursive snapshot tree walk.
//!
//! Establishes the normalization origin from the root element, then
//! visits every element in pre-order: parents paint before children, and
//! children paint in list order, so later siblings overlap earlier ones.
//! The walk is one synchronous call stack with no shared state beyond
//! the canvas and the per-invocation origin — repeated runs over an
//! unchanged tree produce byte-identical output.

use base64::Engine;
use domsnap_style::{Origin, StyledElement, css_px, resolve_style};

use crate::canvas::Canvas;
use crate::error::SnapshotError;
use crate::geometry::rounded_rect_path;
use crate::paint;

/// Render a styled tree onto an existing canvas.
///
/// The normalization origin is computed from `root`'s document offset,
/// so the root paints at the canvas origin regardless of where the
/// subtree sat in the document.
pub fn render(root: &StyledElement, canvas: &mut Canvas) {
    let origin = Origin::of(root);
    render_element(root, origin, canvas);
}

/// Paint one element, then recurse into its children in paint order.
fn render_element(element: &StyledElement, origin: Origin, canvas: &mut Canvas) {
    let style = resolve_style(element, origin);

    if let Some(path) = rounded_rect_path(&style.bounds, &style.border) {
        paint::paint_box(canvas, &path, &style);
    }

    // Leaf-content heuristic: an element with nested markup delegates its
    // text to descendant leaves.
    if !element.has_markup() && !element.text.trim().is_empty() {
        paint::paint_text(canvas, &element.text, &style);
    }

    for child in &element.children {
        render_element(child, origin, canvas);
    }
}

/// A finished, encoded snapshot.
#[derive(Debug, Clone)]
pub struct Snapshot {
    width: u32,
    height: u32,
    png: Vec<u8>,
}

impl Snapshot {
    /// Canvas width in pixels.
    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Canvas height in pixels.
    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// The encoded PNG bytes.
    #[must_use]
    pub fn png_bytes(&self) -> &[u8] {
        &self.png
    }

    /// The snapshot as a `data:image/png;base64,...` payload, the form a
    /// delivery collaborator (upload, download link) consumes.
    #[must_use]
    pub fn data_uri(&self) -> String {
        let encoded = base64::engine::general_purpose::STANDARD.encode(&self.png);
        format!("data:image/png;base64,{encoded}")
    }

    /// Write the PNG to a file.
    ///
    /// # Errors
    ///
    /// [`SnapshotError::Io`] when the file cannot be written.
    pub fn write_to(&self, path: &std::path::Path) -> Result<(), SnapshotError> {
        std::fs::write(path, &self.png).map_err(|source| SnapshotError::Io {
            path: path.display().to_string(),
            source,
        })
    }
}

/// Capture a complete snapshot of a styled tree.
///
/// The canvas is sized from the root's content box plus half its border
/// width (the stroke-centering inset), rendered, and encoded as PNG.
///
/// # Errors
///
/// [`SnapshotError::InvalidCanvasSize`] for a root whose computed canvas
/// dimensions are zero, and [`SnapshotError::PngEncoding`] when the
/// finished pixels cannot be encoded.
pub fn snapshot(root: &StyledElement) -> Result<Snapshot, SnapshotError> {
    let border_inset = css_px(&root.border_top_width) / 2.0;
    let width = (root.width + border_inset).ceil().max(0.0) as u32;
    let height = (root.height + border_inset).ceil().max(0.0) as u32;

    let mut canvas = Canvas::new(width, height)?;
    render(root, &mut canvas);

    Ok(Snapshot {
        width,
        height,
        png: canvas.encode_png()?,
    })
}
