//! # Drawing Surfaces
//!
//! The label renderer never talks to a concrete canvas. It draws through the
//! [`DrawSurface`] capability, which any presentation host can implement.
//!
//! ## Implementations
//!
//! | Surface | Use |
//! |---------|-----|
//! | [`RasterSurface`] | RGB pixel buffer, exported as PNG or sent to a printer |
//! | [`RecordingSurface`] | Keeps a list of draw calls without painting pixels |
//!
//! ## Coordinates
//!
//! ```text
//! (0,0) ──────────► x
//!   │   ┌──────────┐
//!   │   │ text box │   draw_text(x, y) places the TOP-LEFT corner at (x, y)
//!   ▼   └──────────┘   (or the top-centre with TextAlign::Center)
//!   y
//! ```

pub mod raster;
pub mod recording;

pub use raster::RasterSurface;
pub use recording::{DrawCall, RecordingSurface};

/// An opaque RGB colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const WHITE: Color = Color::rgb(0xff, 0xff, 0xff);
    pub const BLACK: Color = Color::rgb(0x00, 0x00, 0x00);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Blend `self` over `base` with the given coverage (0.0 = base, 1.0 = self).
    pub fn over(self, base: Color, coverage: f32) -> Color {
        let a = coverage.clamp(0.0, 1.0);
        let mix = |top: u8, bottom: u8| -> u8 {
            (top as f32 * a + bottom as f32 * (1.0 - a)).round() as u8
        };
        Color::rgb(mix(self.r, base.r), mix(self.g, base.g), mix(self.b, base.b))
    }
}

/// Axis-aligned rectangle in surface pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }
}

/// Horizontal text anchoring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextAlign {
    #[default]
    Left,
    Center,
}

/// Typeface family requested by the layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FontFamily {
    #[default]
    Sans,
    Mono,
}

/// Text attributes for a single `draw_text` / `measure_text` call.
///
/// ## Example
///
/// ```
/// use pricetag::surface::{Color, TextStyle};
///
/// let style = TextStyle::new(28.0).bold().color(Color::rgb(0xc0, 0x15, 0x2f));
/// assert!(style.bold);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextStyle {
    /// Pixel size (em height)
    pub size: f32,
    pub bold: bool,
    pub family: FontFamily,
    pub color: Color,
    pub align: TextAlign,
}

impl TextStyle {
    pub fn new(size: f32) -> Self {
        Self {
            size,
            bold: false,
            family: FontFamily::Sans,
            color: Color::BLACK,
            align: TextAlign::Left,
        }
    }

    pub fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    pub fn mono(mut self) -> Self {
        self.family = FontFamily::Mono;
        self
    }

    pub fn color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    pub fn center(mut self) -> Self {
        self.align = TextAlign::Center;
        self
    }
}

/// Drawing capability supplied by the presentation host.
pub trait DrawSurface {
    /// Pixel dimensions `(width, height)`. A zero size means the surface is
    /// not available for drawing.
    fn size(&self) -> (u32, u32);

    fn fill_rect(&mut self, rect: Rect, color: Color);

    /// Stroke the outline of `rect`, centred on its edges.
    fn stroke_rect(&mut self, rect: Rect, line_width: f32, color: Color);

    fn draw_text(&mut self, text: &str, x: f32, y: f32, style: &TextStyle);

    /// Rendered advance width of `text` in pixels.
    fn measure_text(&self, text: &str, style: &TextStyle) -> f32;
}
