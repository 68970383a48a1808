//! TTF/OTF font rendering with ab_glyph.
//!
//! Renders text to an anti-aliased f32 coverage buffer. The face is loaded
//! at runtime from a user-supplied file, so a label can use the same
//! proportional typeface as the on-screen preview.

use ab_glyph::{Font, FontArc, ScaleFont};
use std::path::Path;

use super::{FontFace, GlyphRun};
use crate::error::PricetagError;

/// A scalable outline face, with an optional separate bold file.
#[derive(Clone)]
pub struct TtfFace {
    regular: FontArc,
    bold: Option<FontArc>,
}

impl TtfFace {
    /// Parse font file contents.
    pub fn from_bytes(regular: Vec<u8>, bold: Option<Vec<u8>>) -> Result<Self, PricetagError> {
        let regular = FontArc::try_from_vec(regular)
            .map_err(|e| PricetagError::Font(format!("regular face: {}", e)))?;
        let bold = bold
            .map(|bytes| {
                FontArc::try_from_vec(bytes)
                    .map_err(|e| PricetagError::Font(format!("bold face: {}", e)))
            })
            .transpose()?;
        Ok(Self { regular, bold })
    }

    /// Load a face from disk.
    pub fn load(regular: &Path, bold: Option<&Path>) -> Result<Self, PricetagError> {
        let regular_bytes = std::fs::read(regular)?;
        let bold_bytes = bold.map(std::fs::read).transpose()?;
        let face = Self::from_bytes(regular_bytes, bold_bytes)?;
        tracing::debug!(path = %regular.display(), has_bold = face.bold.is_some(), "loaded TTF face");
        Ok(face)
    }

    /// Bold requests fall back to the regular face when no bold file was given.
    fn font(&self, bold: bool) -> &FontArc {
        match (&self.bold, bold) {
            (Some(bold_face), true) => bold_face,
            _ => &self.regular,
        }
    }
}

impl FontFace for TtfFace {
    fn measure(&self, text: &str, size: f32, bold: bool) -> f32 {
        let font = self.font(bold);
        let scaled = font.as_scaled(size);
        text.chars()
            .map(|ch| scaled.h_advance(font.glyph_id(ch)))
            .sum()
    }

    fn render(&self, text: &str, size: f32, bold: bool) -> GlyphRun {
        let font = self.font(bold);
        let scaled = font.as_scaled(size);

        // Layout: compute glyph positions
        let mut glyphs = Vec::new();
        let mut caret_x = 0.0f32;
        for ch in text.chars() {
            let glyph_id = font.glyph_id(ch);
            glyphs.push((glyph_id, caret_x));
            caret_x += scaled.h_advance(glyph_id);
        }

        let width = caret_x.ceil() as usize;
        let ascent = scaled.ascent();
        let height = (ascent - scaled.descent()).ceil() as usize;
        if width == 0 || height == 0 {
            return GlyphRun::empty();
        }

        let mut data = vec![0.0f32; width * height];
        for &(glyph_id, glyph_x) in &glyphs {
            let glyph = glyph_id.with_scale_and_position(size, ab_glyph::point(glyph_x, ascent));

            if let Some(outlined) = font.outline_glyph(glyph) {
                let bounds = outlined.px_bounds();
                outlined.draw(|px, py, coverage| {
                    let x = px as i32 + bounds.min.x as i32;
                    let y = py as i32 + bounds.min.y as i32;

                    if x >= 0 && x < width as i32 && y >= 0 && y < height as i32 {
                        let idx = y as usize * width + x as usize;
                        data[idx] = (data[idx] + coverage).min(1.0);
                    }
                });
            }
        }

        GlyphRun {
            width,
            height,
            data,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_invalid_font_bytes() {
        let result = TtfFace::from_bytes(b"definitely not a font".to_vec(), None);
        assert!(matches!(result, Err(PricetagError::Font(_))));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let result = TtfFace::load(Path::new("/nonexistent/face.ttf"), None);
        assert!(matches!(result, Err(PricetagError::Io(_))));
    }
}
