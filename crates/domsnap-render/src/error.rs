//! Error type for snapshot rendering.
//!
//! Per-node style failures never surface here — they are absorbed during
//! resolution with safe fallbacks. The fatal error surface is small:
//! the canvas itself cannot be created, the finished pixels cannot be
//! encoded, or the encoded image cannot be written out.

/// Error type for snapshot operations.
#[derive(Debug, thiserror::Error)]
pub enum SnapshotError {
    /// The computed canvas dimensions cannot back a pixel buffer
    /// (zero-sized root element, or dimensions beyond the raster limits).
    #[error("cannot create {width}x{height} snapshot canvas")]
    InvalidCanvasSize {
        /// Requested width in pixels.
        width: u32,
        /// Requested height in pixels.
        height: u32,
    },

    /// PNG encoding of the finished pixmap failed.
    #[error("PNG encoding failed: {0}")]
    PngEncoding(String),

    /// Writing the encoded image to disk failed.
    #[error("failed to write snapshot to '{path}': {source}")]
    Io {
        /// Destination path.
        path: String,
        /// Underlying IO error.
        #[source]
        source: std::io::Error,
    },
}
