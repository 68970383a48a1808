//! Bitmap text using the Spleen font family.
//!
//! The requested pixel size picks the closest Spleen cell (6×12, 8×16 or
//! 12×24), which is then scaled with nearest-neighbour sampling. All Spleen
//! cells are twice as tall as they are wide, so a glyph of size `h` advances
//! `h / 2` pixels.

use spleen_font::{FONT_6X12, FONT_8X16, FONT_12X24, PSF2Font};

use super::{FontFace, GlyphRun};

/// Built-in monospaced bitmap face.
#[derive(Debug, Clone, Copy, Default)]
pub struct BitmapFace;

/// Spleen source cell sizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SpleenCell {
    S6x12,
    S8x16,
    S12x24,
}

impl SpleenCell {
    fn for_pixel_height(height: usize) -> Self {
        match height {
            0..=13 => SpleenCell::S6x12,
            14..=19 => SpleenCell::S8x16,
            _ => SpleenCell::S12x24,
        }
    }

    fn dims(self) -> (usize, usize) {
        match self {
            SpleenCell::S6x12 => (6, 12),
            SpleenCell::S8x16 => (8, 16),
            SpleenCell::S12x24 => (12, 24),
        }
    }

    fn data(self) -> &'static [u8] {
        match self {
            SpleenCell::S6x12 => FONT_6X12,
            SpleenCell::S8x16 => FONT_8X16,
            SpleenCell::S12x24 => FONT_12X24,
        }
    }
}

/// Scaled glyph cell for one size/weight.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct CellMetrics {
    source: SpleenCell,
    width: usize,
    height: usize,
    /// Extra columns smeared to the right for bold text
    embolden: usize,
}

impl CellMetrics {
    fn new(size: f32, bold: bool) -> Self {
        let height = size.round().max(1.0) as usize;
        let source = SpleenCell::for_pixel_height(height);
        let (src_w, src_h) = source.dims();
        let width = (src_w * height / src_h).max(1);
        let embolden = if bold { (height / 16).max(1) } else { 0 };
        Self {
            source,
            width,
            height,
            embolden,
        }
    }

    fn advance(&self) -> usize {
        self.width + self.embolden
    }
}

impl FontFace for BitmapFace {
    fn measure(&self, text: &str, size: f32, bold: bool) -> f32 {
        let metrics = CellMetrics::new(size, bold);
        (text.chars().count() * metrics.advance()) as f32
    }

    fn render(&self, text: &str, size: f32, bold: bool) -> GlyphRun {
        let metrics = CellMetrics::new(size, bold);
        let count = text.chars().count();
        if count == 0 {
            return GlyphRun::empty();
        }

        let width = count * metrics.advance();
        let height = metrics.height;
        let mut data = vec![0.0f32; width * height];

        let (src_w, src_h) = metrics.source.dims();
        let mut spleen = PSF2Font::new(metrics.source.data()).ok();
        let mut utf8 = [0u8; 4];

        for (i, ch) in text.chars().enumerate() {
            let mut src_bitmap = vec![0u8; src_w * src_h];
            let found = match spleen.as_mut() {
                Some(font) => match font.glyph_for_utf8(ch.encode_utf8(&mut utf8).as_bytes()) {
                    Some(glyph) => {
                        for (row_y, row) in glyph.enumerate() {
                            for (col_x, on) in row.enumerate() {
                                if row_y < src_h && col_x < src_w && on {
                                    src_bitmap[row_y * src_w + col_x] = 1;
                                }
                            }
                        }
                        true
                    }
                    None => false,
                },
                None => false,
            };

            let mut cell = vec![0u8; metrics.width * height];
            if found {
                scale_bitmap(&src_bitmap, src_w, src_h, &mut cell, metrics.width, height);
            } else {
                draw_box(&mut cell, metrics.width, height);
            }

            let origin_x = i * metrics.advance();
            for y in 0..height {
                for x in 0..metrics.width {
                    if cell[y * metrics.width + x] == 0 {
                        continue;
                    }
                    for dx in 0..=metrics.embolden {
                        let px = origin_x + x + dx;
                        if px < width {
                            data[y * width + px] = 1.0;
                        }
                    }
                }
            }
        }

        GlyphRun {
            width,
            height,
            data,
        }
    }
}

/// Scale a bitmap from src dimensions to dst dimensions using nearest neighbor.
fn scale_bitmap(
    src: &[u8],
    src_w: usize,
    src_h: usize,
    dst: &mut [u8],
    dst_w: usize,
    dst_h: usize,
) {
    for dy in 0..dst_h {
        for dx in 0..dst_w {
            let sx = dx * src_w / dst_w;
            let sy = dy * src_h / dst_h;
            let src_idx = sy * src_w + sx;
            let dst_idx = dy * dst_w + dx;
            if src_idx < src.len() && dst_idx < dst.len() {
                dst[dst_idx] = src[src_idx];
            }
        }
    }
}

/// Outline box for characters the font has no glyph for.
fn draw_box(cell: &mut [u8], width: usize, height: usize) {
    if width < 2 || height < 2 {
        cell.fill(1);
        return;
    }
    for x in 0..width {
        cell[x] = 1;
        cell[(height - 1) * width + x] = 1;
    }
    for y in 0..height {
        cell[y * width] = 1;
        cell[y * width + width - 1] = 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cell_selection() {
        assert_eq!(CellMetrics::new(10.0, false).source, SpleenCell::S6x12);
        assert_eq!(CellMetrics::new(14.0, false).source, SpleenCell::S8x16);
        assert_eq!(CellMetrics::new(24.0, false).source, SpleenCell::S12x24);
    }

    #[test]
    fn test_measure_is_monospaced() {
        let face = BitmapFace;
        assert_eq!(face.measure("", 24.0, false), 0.0);
        assert_eq!(face.measure("MRP:", 24.0, false), 48.0);
        assert_eq!(face.measure("iiii", 14.0, false), face.measure("WWWW", 14.0, false));
    }

    #[test]
    fn test_bold_is_wider() {
        let face = BitmapFace;
        assert!(face.measure("FSP:", 24.0, true) > face.measure("FSP:", 24.0, false));
    }

    #[test]
    fn test_render_matches_measure() {
        let face = BitmapFace;
        for (size, bold) in [(10.0, false), (14.0, false), (18.0, true), (28.0, true)] {
            let run = face.render("Label 123", size, bold);
            assert_eq!(run.width as f32, face.measure("Label 123", size, bold));
            assert_eq!(run.height, size as usize);
            assert_eq!(run.data.len(), run.width * run.height);
            assert!(run.data.iter().any(|&v| v > 0.0));
        }
    }

    #[test]
    fn test_space_has_no_ink() {
        let run = BitmapFace.render("   ", 16.0, false);
        assert!(run.data.iter().all(|&v| v == 0.0));
    }

    #[test]
    fn test_draw_box() {
        let mut cell = vec![0u8; 4 * 4];
        draw_box(&mut cell, 4, 4);
        assert_eq!(cell[0], 1);
        assert_eq!(cell[5], 0);
        assert_eq!(cell[15], 1);
    }
}
