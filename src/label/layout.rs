//! The fixed label template.
//!
//! [`LabelRenderer::render`] repaints the whole surface on every call. It
//! checks that the surface can hold the label before touching any pixel, so
//! a failed render never leaves a half-painted label behind.

use super::bars::draw_bar_pattern;
use super::wrap::{WrapBox, WrappedLine, wrap_words};
use super::{FSP_GREEN, INK, LabelConfig, MRP_RED, PAPER};
use crate::catalog::ResolvedProduct;
use crate::error::PricetagError;
use crate::surface::{DrawSurface, Rect, TextStyle};

/// Minimum space between a field label and its value (reference pixels).
const VALUE_GAP: f32 = 8.0;

/// Paints a [`ResolvedProduct`] onto a [`DrawSurface`].
///
/// ## Example
///
/// ```
/// use pricetag::catalog::Catalog;
/// use pricetag::label::{LabelConfig, LabelRenderer};
/// use pricetag::surface::RecordingSurface;
///
/// let product = Catalog::sample().resolve("WSN001").unwrap();
/// let renderer = LabelRenderer::new(LabelConfig::reference());
/// let mut surface = RecordingSurface::new(600, 360);
///
/// renderer.render(&mut surface, &product).unwrap();
/// assert!(surface.texts().contains(&"BLBF5JCWCST3FVGY"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct LabelRenderer {
    config: LabelConfig,
}

impl LabelRenderer {
    pub fn new(config: LabelConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &LabelConfig {
        &self.config
    }

    /// Region the decorative bars occupy (upper-right quadrant).
    pub fn bar_area(&self) -> Rect {
        let (sx, sy) = (self.config.scale_x(), self.config.scale_y());
        Rect::new(
            self.config.width as f32 - 200.0 * sx,
            80.0 * sy,
            180.0 * sx,
            60.0 * sy,
        )
    }

    /// Style used for the wrapped title lines.
    pub fn title_style(&self) -> TextStyle {
        TextStyle::new(14.0 * self.config.scale_y())
    }

    /// Wrap `title` the way `render` would, measuring with `surface`.
    pub fn title_lines(&self, surface: &dyn DrawSurface, title: &str) -> Vec<WrappedLine> {
        let style = self.title_style();
        let bounds = WrapBox {
            max_width: self.config.width as f32 - self.config.text_margin(),
            top: 175.0 * self.config.scale_y(),
            line_height: self.config.line_height(),
            limit: self.config.overflow_limit(),
        };
        wrap_words(title, &bounds, |line| surface.measure_text(line, &style))
    }

    /// Paint the complete label for `product`.
    pub fn render(
        &self,
        surface: &mut dyn DrawSurface,
        product: &ResolvedProduct,
    ) -> Result<(), PricetagError> {
        let config = &self.config;
        let (surface_w, surface_h) = surface.size();
        if surface_w == 0 || surface_h == 0 {
            return Err(PricetagError::Render(
                "drawing surface unavailable".to_string(),
            ));
        }
        if surface_w < config.width || surface_h < config.height {
            return Err(PricetagError::Render(format!(
                "surface is {}x{}, label needs {}x{}",
                surface_w, surface_h, config.width, config.height
            )));
        }

        let (sx, sy) = (config.scale_x(), config.scale_y());
        let width = config.width as f32;
        let height = config.height as f32;
        let left = 20.0 * sx;
        let gap = VALUE_GAP * sx;
        let record = &product.record;

        // Paper over the whole surface, border around the label
        surface.fill_rect(
            Rect::new(0.0, 0.0, surface_w as f32, surface_h as f32),
            PAPER,
        );
        surface.stroke_rect(
            Rect::new(5.0 * sx, 5.0 * sy, width - 10.0 * sx, height - 10.0 * sy),
            3.0 * sx.min(sy),
            INK,
        );

        // Header
        surface.draw_text(
            &config.header,
            left,
            20.0 * sy,
            &TextStyle::new(18.0 * sy).bold(),
        );

        // Price row: labels in ink, values in their emphasis colours
        let price_y = 60.0 * sy;
        let price_label = TextStyle::new(24.0 * sy).bold();
        let price_value = TextStyle::new(28.0 * sy).bold();

        let end = text_at(surface, "MRP:", left, price_y, &price_label);
        let end = text_at(
            surface,
            &format!("{}{}", config.currency, record.mrp),
            (80.0 * sx).max(end + gap),
            price_y,
            &price_value.color(MRP_RED),
        );
        let end = text_at(surface, "FSP:", (200.0 * sx).max(end + gap), price_y, &price_label);
        text_at(
            surface,
            &format!("{}{}", config.currency, record.fsp),
            (260.0 * sx).max(end + gap),
            price_y,
            &price_value.color(FSP_GREEN),
        );

        // Category
        let vertical_y = 110.0 * sy;
        let end = text_at(
            surface,
            "Vertical:",
            left,
            vertical_y,
            &TextStyle::new(20.0 * sy).bold(),
        );
        surface.draw_text(
            &record.vertical.to_uppercase(),
            (110.0 * sx).max(end + gap),
            vertical_y,
            &TextStyle::new(18.0 * sy),
        );

        // Title block
        surface.draw_text(
            "Product:",
            left,
            150.0 * sy,
            &TextStyle::new(16.0 * sy).bold(),
        );
        let title_style = self.title_style();
        for line in self.title_lines(surface, &record.title) {
            surface.draw_text(&line.text, left, line.y, &title_style);
        }

        // Decorative bars with the identifier centred underneath
        draw_bar_pattern(surface, &record.fsn, self.bar_area(), INK);
        let id_x = width - 110.0 * sx;
        surface.draw_text(
            "FSN:",
            id_x,
            150.0 * sy,
            &TextStyle::new(12.0 * sy).bold().center(),
        );
        surface.draw_text(
            &record.fsn,
            id_x,
            165.0 * sy,
            &TextStyle::new(10.0 * sy).mono().center(),
        );

        // Footer
        let footer = TextStyle::new(12.0 * sy);
        surface.draw_text(
            &format!("Brand: {}", record.brand),
            left,
            height - 60.0 * sy,
            &footer,
        );
        surface.draw_text(
            &format!("WSN: {} | WID: {}", product.wsn, record.wid),
            left,
            height - 40.0 * sy,
            &footer,
        );

        tracing::debug!(wsn = %product.wsn, width = config.width, height = config.height, "label rendered");
        Ok(())
    }
}

/// Draw `text` and return the x where it ends.
fn text_at(surface: &mut dyn DrawSurface, text: &str, x: f32, y: f32, style: &TextStyle) -> f32 {
    surface.draw_text(text, x, y, style);
    x + surface.measure_text(text, style)
}
