//! RGB pixel surface backed by an [`image::RgbImage`].

use image::{Rgb, RgbImage};
use std::sync::Arc;

use super::{Color, DrawSurface, Rect, TextAlign, TextStyle};
use crate::fonts::FontSet;

/// A raster canvas that paints into an owned RGB image.
///
/// Rectangles cover every pixel whose centre lies inside them, so edges at
/// half-pixel positions round the same way every time.
pub struct RasterSurface {
    image: RgbImage,
    fonts: Arc<FontSet>,
}

impl RasterSurface {
    /// Create a white surface of the given size.
    pub fn new(width: u32, height: u32, fonts: Arc<FontSet>) -> Self {
        Self {
            image: RgbImage::from_pixel(width, height, Rgb([0xff, 0xff, 0xff])),
            fonts,
        }
    }

    pub fn image(&self) -> &RgbImage {
        &self.image
    }

    pub fn into_image(self) -> RgbImage {
        self.image
    }

    pub fn fonts(&self) -> &Arc<FontSet> {
        &self.fonts
    }

    /// Colour at (x, y), or `None` outside the surface.
    pub fn pixel(&self, x: u32, y: u32) -> Option<Color> {
        self.image
            .get_pixel_checked(x, y)
            .map(|p| Color::rgb(p[0], p[1], p[2]))
    }

    fn put(&mut self, x: i64, y: i64, color: Color) {
        if x < 0 || y < 0 || x >= self.image.width() as i64 || y >= self.image.height() as i64 {
            return;
        }
        self.image
            .put_pixel(x as u32, y as u32, Rgb([color.r, color.g, color.b]));
    }

    fn blend(&mut self, x: i64, y: i64, color: Color, coverage: f32) {
        if coverage <= 0.0 {
            return;
        }
        if x < 0 || y < 0 || x >= self.image.width() as i64 || y >= self.image.height() as i64 {
            return;
        }
        let base = self.image.get_pixel(x as u32, y as u32);
        let mixed = color.over(Color::rgb(base[0], base[1], base[2]), coverage);
        self.put(x, y, mixed);
    }

    /// Pixel span `[start, end)` covered by the interval `[from, to)`.
    fn span(from: f32, to: f32, limit: u32) -> (i64, i64) {
        let (lo, hi) = if from <= to { (from, to) } else { (to, from) };
        let start = (lo.round() as i64).max(0);
        let end = (hi.round() as i64).min(limit as i64);
        (start, end)
    }
}

impl DrawSurface for RasterSurface {
    fn size(&self) -> (u32, u32) {
        self.image.dimensions()
    }

    fn fill_rect(&mut self, rect: Rect, color: Color) {
        let (x0, x1) = Self::span(rect.x, rect.right(), self.image.width());
        let (y0, y1) = Self::span(rect.y, rect.bottom(), self.image.height());
        for y in y0..y1 {
            for x in x0..x1 {
                self.put(x, y, color);
            }
        }
    }

    fn stroke_rect(&mut self, rect: Rect, line_width: f32, color: Color) {
        let half = line_width / 2.0;
        let outer = Rect::new(
            rect.x - half,
            rect.y - half,
            rect.width + line_width,
            rect.height + line_width,
        );

        self.fill_rect(Rect::new(outer.x, outer.y, outer.width, line_width), color);
        self.fill_rect(
            Rect::new(outer.x, rect.bottom() - half, outer.width, line_width),
            color,
        );
        self.fill_rect(Rect::new(outer.x, outer.y, line_width, outer.height), color);
        self.fill_rect(
            Rect::new(rect.right() - half, outer.y, line_width, outer.height),
            color,
        );
    }

    fn draw_text(&mut self, text: &str, x: f32, y: f32, style: &TextStyle) {
        let fonts = Arc::clone(&self.fonts);
        let face = fonts.face(style.family);
        let run = face.render(text, style.size, style.bold);

        let left = match style.align {
            TextAlign::Left => x,
            TextAlign::Center => x - face.measure(text, style.size, style.bold) / 2.0,
        };
        let origin_x = left.round() as i64;
        let origin_y = y.round() as i64;

        for row in 0..run.height {
            for col in 0..run.width {
                let coverage = run.coverage(col, row);
                self.blend(origin_x + col as i64, origin_y + row as i64, style.color, coverage);
            }
        }
    }

    fn measure_text(&self, text: &str, style: &TextStyle) -> f32 {
        self.fonts
            .face(style.family)
            .measure(text, style.size, style.bold)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn surface(width: u32, height: u32) -> RasterSurface {
        RasterSurface::new(width, height, Arc::new(FontSet::bitmap()))
    }

    fn count(surface: &RasterSurface, color: Color) -> usize {
        surface
            .image()
            .pixels()
            .filter(|p| p[0] == color.r && p[1] == color.g && p[2] == color.b)
            .count()
    }

    #[test]
    fn test_new_surface_is_white() {
        let s = surface(20, 10);
        assert_eq!(s.size(), (20, 10));
        assert_eq!(count(&s, Color::WHITE), 200);
    }

    #[test]
    fn test_fill_rect_pixel_centres() {
        let mut s = surface(20, 20);
        s.fill_rect(Rect::new(2.0, 3.0, 4.0, 5.0), Color::BLACK);
        assert_eq!(count(&s, Color::BLACK), 20);
        assert_eq!(s.pixel(2, 3), Some(Color::BLACK));
        assert_eq!(s.pixel(5, 7), Some(Color::BLACK));
        assert_eq!(s.pixel(6, 7), Some(Color::WHITE));
        assert_eq!(s.pixel(5, 8), Some(Color::WHITE));
    }

    #[test]
    fn test_fill_rect_clips_to_surface() {
        let mut s = surface(10, 10);
        s.fill_rect(Rect::new(-5.0, -5.0, 100.0, 100.0), Color::BLACK);
        assert_eq!(count(&s, Color::BLACK), 100);
    }

    #[test]
    fn test_stroke_rect_is_centred_on_edges() {
        let mut s = surface(40, 30);
        s.stroke_rect(Rect::new(5.0, 5.0, 30.0, 20.0), 3.0, Color::BLACK);

        // 3px band around the edge at x = 5: columns 4, 5, 6
        assert_eq!(s.pixel(3, 15), Some(Color::WHITE));
        assert_eq!(s.pixel(4, 15), Some(Color::BLACK));
        assert_eq!(s.pixel(6, 15), Some(Color::BLACK));
        assert_eq!(s.pixel(7, 15), Some(Color::WHITE));
        // Interior untouched
        assert_eq!(s.pixel(20, 15), Some(Color::WHITE));
        // Bottom edge at y = 25: rows 24, 25, 26
        assert_eq!(s.pixel(20, 24), Some(Color::BLACK));
        assert_eq!(s.pixel(20, 26), Some(Color::BLACK));
        assert_eq!(s.pixel(20, 27), Some(Color::WHITE));
    }

    #[test]
    fn test_draw_text_stays_in_measured_box() {
        let mut s = surface(200, 60);
        let style = TextStyle::new(16.0);
        let width = s.measure_text("Hello", &style);
        s.draw_text("Hello", 10.0, 20.0, &style);

        let mut inked = 0;
        for (x, y, p) in s.image().enumerate_pixels() {
            if p[0] != 0xff {
                inked += 1;
                assert!(x >= 10 && (x as f32) < 10.0 + width, "x={} outside text box", x);
                assert!((20..36).contains(&y), "y={} outside text box", y);
            }
        }
        assert!(inked > 0);
    }

    #[test]
    fn test_centered_text_straddles_anchor() {
        let mut s = surface(200, 40);
        let style = TextStyle::new(12.0).center();
        s.draw_text("FSN", 100.0, 10.0, &style);

        let xs: Vec<u32> = s
            .image()
            .enumerate_pixels()
            .filter(|(_, _, p)| p[0] != 0xff)
            .map(|(x, _, _)| x)
            .collect();
        assert!(xs.iter().any(|&x| x < 100));
        assert!(xs.iter().any(|&x| x >= 100));
    }

    #[test]
    fn test_text_color() {
        let red = Color::rgb(0xc0, 0x15, 0x2f);
        let mut s = surface(100, 40);
        s.draw_text("199", 0.0, 0.0, &TextStyle::new(24.0).bold().color(red));
        assert!(count(&s, red) > 0);
        assert_eq!(count(&s, Color::BLACK), 0);
    }
}
