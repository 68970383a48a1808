//! # Font Faces
//!
//! Text on a [`RasterSurface`](crate::surface::RasterSurface) goes through a
//! [`FontFace`], which measures strings and renders them to a coverage mask.
//!
//! | Face | Source | Output |
//! |------|--------|--------|
//! | [`BitmapFace`] | Spleen PSF2 fonts built into the binary | Hard-edged, monospaced |
//! | [`TtfFace`] | TTF/OTF file supplied at runtime (ab_glyph) | Anti-aliased, proportional |
//!
//! Both faces use the same box model: a string of `size` pixels renders into
//! a mask `measure(text)` wide (rounded up) and about `size` tall, with the
//! text's top edge at row 0.

mod bitmap;
mod ttf;

pub use bitmap::BitmapFace;
pub use ttf::TtfFace;

use crate::surface::FontFamily;

/// Rendered text as a coverage mask.
pub struct GlyphRun {
    pub width: usize,
    pub height: usize,
    /// Coverage values: 0.0 = untouched, 1.0 = full ink.
    pub data: Vec<f32>,
}

impl GlyphRun {
    pub fn empty() -> Self {
        Self {
            width: 0,
            height: 0,
            data: Vec::new(),
        }
    }

    pub fn coverage(&self, x: usize, y: usize) -> f32 {
        if x >= self.width || y >= self.height {
            return 0.0;
        }
        self.data[y * self.width + x]
    }
}

/// A typeface that can measure and rasterize single-line strings.
pub trait FontFace: Send + Sync {
    /// Advance width of `text` in pixels at the given size.
    fn measure(&self, text: &str, size: f32, bold: bool) -> f32;

    /// Rasterize `text` into a coverage mask.
    fn render(&self, text: &str, size: f32, bold: bool) -> GlyphRun;
}

/// The faces a surface draws with, one per [`FontFamily`].
pub struct FontSet {
    sans: Box<dyn FontFace>,
    mono: Box<dyn FontFace>,
}

impl FontSet {
    /// Built-in bitmap faces only. Needs no font files.
    pub fn bitmap() -> Self {
        Self {
            sans: Box::new(BitmapFace),
            mono: Box::new(BitmapFace),
        }
    }

    /// Use `face` for proportional text; monospace text stays on the
    /// built-in bitmap face.
    pub fn with_sans(face: impl FontFace + 'static) -> Self {
        Self {
            sans: Box::new(face),
            mono: Box::new(BitmapFace),
        }
    }

    pub fn face(&self, family: FontFamily) -> &dyn FontFace {
        match family {
            FontFamily::Sans => self.sans.as_ref(),
            FontFamily::Mono => self.mono.as_ref(),
        }
    }
}

impl Default for FontSet {
    fn default() -> Self {
        Self::bitmap()
    }
}
