//! # Label Template
//!
//! Geometry and palette for the product label, plus the renderer that paints
//! it.
//!
//! ## Reference Label
//!
//! | Property | Value |
//! |----------|-------|
//! | Physical size | 50mm × 30mm |
//! | Raster size | 600 × 360 px |
//! | Resolution | 12 dots/mm (~305 DPI) |
//!
//! ```text
//! ┌───────────────────────────────────────────────┐
//! │ BARCODE LABEL                                 │
//! │ MRP: Rs.199   FSP: Rs.119        ║│║║ ║│║║│  │
//! │                                  ║│║║ ║│║║│  │
//! │ Vertical: BULB                   ║│║║ ║│║║│  │
//! │                                      FSN:     │
//! │ Product:                      BLBF5JCWCST3FVGY│
//! │ EVEREADY 10 W Round B22 LED Bulb              │
//! │                                               │
//! │ Brand: EVEREADY                               │
//! │ WSN: WSN001 | WID: XIFKJOQ                    │
//! └───────────────────────────────────────────────┘
//! ```
//!
//! Every coordinate in the template is written against the 600×360
//! reference and scaled for other sizes.

pub mod bars;
pub mod layout;
pub mod wrap;

pub use layout::LabelRenderer;

use crate::surface::Color;

/// Paper colour.
pub const PAPER: Color = Color::WHITE;
/// Default ink for text, border and bars.
pub const INK: Color = Color::BLACK;
/// List price emphasis (red family).
pub const MRP_RED: Color = Color::rgb(0xc0, 0x15, 0x2f);
/// Sale price emphasis (green family).
pub const FSP_GREEN: Color = Color::rgb(0x22, 0x8b, 0x22);

/// # Label Configuration
///
/// Describes the raster the label is painted on and the fixed strings it
/// carries.
///
/// ## Calculations
///
/// ```text
/// dots_per_mm = width / width_mm
/// dpi         = dots_per_mm × 25.4
///
/// For the reference label:
///   dots_per_mm = 600 / 50 = 12
///   dpi         = 12 × 25.4 ≈ 305
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct LabelConfig {
    /// Raster width in pixels
    pub width: u32,
    /// Raster height in pixels
    pub height: u32,
    /// Physical label width in millimetres
    pub width_mm: f32,
    /// Physical label height in millimetres
    pub height_mm: f32,
    /// Prefix for both prices
    pub currency: String,
    /// Text in the top-left corner
    pub header: String,
}

impl LabelConfig {
    pub const REFERENCE_WIDTH: u32 = 600;
    pub const REFERENCE_HEIGHT: u32 = 360;

    /// The 5cm × 3cm reference label at 600×360 px.
    pub fn reference() -> Self {
        Self {
            width: Self::REFERENCE_WIDTH,
            height: Self::REFERENCE_HEIGHT,
            width_mm: 50.0,
            height_mm: 30.0,
            currency: "Rs.".to_string(),
            header: "BARCODE LABEL".to_string(),
        }
    }

    /// Same physical label rendered at a different pixel size.
    pub fn with_size(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    pub fn with_currency(mut self, currency: impl Into<String>) -> Self {
        self.currency = currency.into();
        self
    }

    /// Horizontal resolution in dots per millimetre.
    ///
    /// ```
    /// use pricetag::label::LabelConfig;
    ///
    /// let config = LabelConfig::reference();
    /// assert!((config.dots_per_mm() - 12.0).abs() < 0.01);
    /// ```
    #[inline]
    pub fn dots_per_mm(&self) -> f32 {
        self.width as f32 / self.width_mm
    }

    #[inline]
    pub fn dpi(&self) -> f32 {
        self.dots_per_mm() * 25.4
    }

    /// Horizontal scale relative to the reference raster.
    #[inline]
    pub fn scale_x(&self) -> f32 {
        self.width as f32 / Self::REFERENCE_WIDTH as f32
    }

    /// Vertical scale relative to the reference raster. Font sizes follow it.
    #[inline]
    pub fn scale_y(&self) -> f32 {
        self.height as f32 / Self::REFERENCE_HEIGHT as f32
    }

    /// Space subtracted from the width to get the title wrap width
    /// (1/15 of the width; 40px on the reference label).
    pub fn text_margin(&self) -> f32 {
        self.width as f32 / 15.0
    }

    /// Distance between wrapped title lines (1/20 of the height; 18px).
    pub fn line_height(&self) -> f32 {
        self.height as f32 / 20.0
    }

    /// Lowest y a wrapped title line may start at (2/3 of the height; 240px).
    pub fn overflow_limit(&self) -> f32 {
        self.height as f32 * 2.0 / 3.0
    }
}

impl Default for LabelConfig {
    fn default() -> Self {
        Self::reference()
    }
}
