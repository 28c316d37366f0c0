//! The shared raster drawing surface.
//!
//! A [`Canvas`] owns the pixel buffer for one snapshot plus the system
//! fonts used for text painting. It exposes only primitive operations —
//! fill a path, stroke a path, draw a centered text run, encode the
//! pixels — and knows nothing about elements or styles; the paint
//! pipeline drives it.
//!
//! Vector work (paths, gradients) goes through tiny-skia. Text uses
//! fontdue glyph rasterization alpha-blended directly into the pixel
//! buffer.

use domsnap_style::warning::warn_once;
use domsnap_style::{ColorValue, FontSpec, Point, TextAlign};
use fontdue::{Font, FontSettings};
use tiny_skia::{Color, FillRule, Paint, Path, Pixmap, Stroke, Transform};

use crate::error::SnapshotError;

/// Common system font paths to search for a default (regular) font.
const FONT_SEARCH_PATHS: &[&str] = &[
    // macOS
    "/System/Library/Fonts/Helvetica.ttc",
    "/System/Library/Fonts/SFNS.ttf",
    "/Library/Fonts/Arial.ttf",
    "/System/Library/Fonts/Supplemental/Arial.ttf",
    // Linux
    "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/TTF/DejaVuSans.ttf",
    "/usr/share/fonts/truetype/liberation/LiberationSans-Regular.ttf",
    "/usr/share/fonts/truetype/freefont/FreeSans.ttf",
    // Windows
    "C:\\Windows\\Fonts\\arial.ttf",
    "C:\\Windows\\Fonts\\segoeui.ttf",
];

/// System font paths for bold variants.
const FONT_BOLD_SEARCH_PATHS: &[&str] = &[
    // macOS
    "/System/Library/Fonts/Supplemental/Arial Bold.ttf",
    "/Library/Fonts/Arial Bold.ttf",
    // Linux
    "/usr/share/fonts/truetype/dejavu/DejaVuSans-Bold.ttf",
    "/usr/share/fonts/TTF/DejaVuSans-Bold.ttf",
    "/usr/share/fonts/truetype/liberation/LiberationSans-Bold.ttf",
    "/usr/share/fonts/truetype/freefont/FreeSansBold.ttf",
    // Windows
    "C:\\Windows\\Fonts\\arialbd.ttf",
];

/// Shared raster surface for one snapshot pass.
pub struct Canvas {
    /// RGBA pixel buffer (premultiplied, as tiny-skia stores it).
    pixmap: Pixmap,
    /// Regular font for text rendering (None if no system font found).
    font: Option<Font>,
    /// Bold font variant (None falls back to regular).
    font_bold: Option<Font>,
}

impl Canvas {
    /// Create a white canvas of the given pixel dimensions.
    ///
    /// # Errors
    ///
    /// [`SnapshotError::InvalidCanvasSize`] when the dimensions cannot
    /// back a pixel buffer (zero width or height).
    pub fn new(width: u32, height: u32) -> Result<Self, SnapshotError> {
        let mut pixmap =
            Pixmap::new(width, height).ok_or(SnapshotError::InvalidCanvasSize { width, height })?;
        pixmap.fill(Color::WHITE);

        Ok(Self {
            pixmap,
            font: load_font_from_paths(FONT_SEARCH_PATHS),
            font_bold: load_font_from_paths(FONT_BOLD_SEARCH_PATHS),
        })
    }

    /// Canvas width in pixels.
    #[must_use]
    pub fn width(&self) -> u32 {
        self.pixmap.width()
    }

    /// Canvas height in pixels.
    #[must_use]
    pub fn height(&self) -> u32 {
        self.pixmap.height()
    }

    /// Read access to the pixel buffer, mainly for tests.
    #[must_use]
    pub fn pixmap(&self) -> &Pixmap {
        &self.pixmap
    }

    /// Whether a system font was found; without one, text runs are
    /// skipped (with a warning) rather than failing the snapshot.
    #[must_use]
    pub fn has_text_support(&self) -> bool {
        self.font.is_some()
    }

    /// Fill a path with the given paint.
    pub fn fill_path(&mut self, path: &Path, paint: &Paint<'_>) {
        self.pixmap
            .fill_path(path, paint, FillRule::Winding, Transform::identity(), None);
    }

    /// Stroke a path with the given paint and stroke parameters.
    pub fn stroke_path(&mut self, path: &Path, paint: &Paint<'_>, stroke: &Stroke) {
        self.pixmap
            .stroke_path(path, paint, stroke, Transform::identity(), None);
    }

    /// Draw a single text run anchored at `anchor` with middle vertical
    /// alignment.
    ///
    /// The horizontal anchor follows canvas semantics: `Left` starts the
    /// run at the anchor, `Center` centers it, `Right` ends it there.
    /// Glyphs are rasterized with fontdue and alpha-blended onto the
    /// buffer; control characters are skipped. Weights of 700 and above
    /// select the bold face when one is available.
    pub fn draw_text(
        &mut self,
        text: &str,
        anchor: Point,
        font_spec: &FontSpec,
        color: ColorValue,
        align: TextAlign,
    ) {
        // Split borrow: glyph metrics come from the fonts, pixels go to
        // the pixmap.
        let pixmap = &mut self.pixmap;
        let font = if font_spec.is_bold() {
            self.font_bold.as_ref().or(self.font.as_ref())
        } else {
            self.font.as_ref()
        };
        let Some(font) = font else {
            warn_once("render", "no system font found; text will not be painted");
            return;
        };

        let size = font_spec.size;
        let run_width: f32 = text
            .chars()
            .filter(|ch| !ch.is_control())
            .map(|ch| font.metrics(ch, size).advance_width)
            .sum();

        let mut cursor_x = match align {
            TextAlign::Left => anchor.x,
            TextAlign::Center => anchor.x - run_width / 2.0,
            TextAlign::Right => anchor.x - run_width,
        };

        // Middle baseline: center the ascent..descent extent on the anchor.
        let baseline = font.horizontal_line_metrics(size).map_or_else(
            || anchor.y + size * 0.35,
            |metrics| anchor.y + (metrics.ascent + metrics.descent) / 2.0,
        );

        for ch in text.chars() {
            if ch.is_control() {
                continue;
            }

            let (metrics, bitmap) = font.rasterize(ch, size);

            // fontdue's ymin is the bottom edge offset from the baseline.
            let glyph_x = (cursor_x + metrics.xmin as f32).round() as i32;
            let glyph_y = (baseline - metrics.ymin as f32 - metrics.height as f32).round() as i32;

            for gy in 0..metrics.height {
                for gx in 0..metrics.width {
                    let coverage = bitmap[gy * metrics.width + gx];
                    if coverage > 0 {
                        blend_pixel(
                            pixmap,
                            glyph_x + gx as i32,
                            glyph_y + gy as i32,
                            color,
                            coverage,
                        );
                    }
                }
            }

            cursor_x += metrics.advance_width;
        }
    }

    /// Encode the finished pixels as PNG bytes.
    ///
    /// # Errors
    ///
    /// [`SnapshotError::PngEncoding`] when the encoder fails.
    pub fn encode_png(&self) -> Result<Vec<u8>, SnapshotError> {
        self.pixmap
            .encode_png()
            .map_err(|err| SnapshotError::PngEncoding(err.to_string()))
    }
}

/// Alpha-blend one pixel of `color` at the given coverage onto the
/// buffer. Out-of-bounds positions are ignored.
fn blend_pixel(pixmap: &mut Pixmap, x: i32, y: i32, color: ColorValue, coverage: u8) {
    let (width, height) = (pixmap.width() as i32, pixmap.height() as i32);
    if x < 0 || y < 0 || x >= width || y >= height {
        return;
    }

    let alpha = f32::from(coverage) / 255.0 * f32::from(color.a) / 255.0;
    if alpha <= 0.0 {
        return;
    }
    let inv = 1.0 - alpha;

    // The buffer is premultiplied, so source channels are scaled by
    // alpha and the destination keeps its own premultiplication.
    let idx = (y * width + x) as usize * 4;
    let data = pixmap.data_mut();
    data[idx] = f32::from(color.r).mul_add(alpha, f32::from(data[idx]) * inv) as u8;
    data[idx + 1] = f32::from(color.g).mul_add(alpha, f32::from(data[idx + 1]) * inv) as u8;
    data[idx + 2] = f32::from(color.b).mul_add(alpha, f32::from(data[idx + 2]) * inv) as u8;
    data[idx + 3] = alpha.mul_add(255.0, f32::from(data[idx + 3]) * inv) as u8;
}

/// Try to load a font from a list of filesystem paths.
fn load_font_from_paths(paths: &[&str]) -> Option<Font> {
    for path in paths {
        if let Ok(data) = std::fs::read(path)
            && let Ok(font) = Font::from_bytes(data, FontSettings::default())
        {
            return Some(font);
        }
    }
    None
}
