//! A surface that records draw calls instead of painting.
//!
//! Useful for hosts that replay the label onto their own canvas, and for
//! checking layout decisions without comparing pixels.

use super::{Color, DrawSurface, Rect, TextStyle};

/// One recorded drawing operation.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCall {
    Fill { rect: Rect, color: Color },
    Stroke { rect: Rect, line_width: f32, color: Color },
    Text { text: String, x: f32, y: f32, style: TextStyle },
}

/// Records every call made against it.
///
/// Text is measured as `chars × size × char_width`, a fixed-pitch
/// approximation.
#[derive(Debug, Clone)]
pub struct RecordingSurface {
    width: u32,
    height: u32,
    char_width: f32,
    calls: Vec<DrawCall>,
}

impl RecordingSurface {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            char_width: 0.5,
            calls: Vec::new(),
        }
    }

    /// Character advance as a fraction of the font size.
    pub fn with_char_width(mut self, ratio: f32) -> Self {
        self.char_width = ratio;
        self
    }

    pub fn calls(&self) -> &[DrawCall] {
        &self.calls
    }

    /// Text of every `Text` call, in drawing order.
    pub fn texts(&self) -> Vec<&str> {
        self.calls
            .iter()
            .filter_map(|call| match call {
                DrawCall::Text { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    /// The first `Text` call with exactly this content.
    pub fn find_text(&self, needle: &str) -> Option<&DrawCall> {
        self.calls
            .iter()
            .find(|call| matches!(call, DrawCall::Text { text, .. } if text == needle))
    }

    pub fn clear(&mut self) {
        self.calls.clear();
    }
}

impl DrawSurface for RecordingSurface {
    fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    fn fill_rect(&mut self, rect: Rect, color: Color) {
        self.calls.push(DrawCall::Fill { rect, color });
    }

    fn stroke_rect(&mut self, rect: Rect, line_width: f32, color: Color) {
        self.calls.push(DrawCall::Stroke {
            rect,
            line_width,
            color,
        });
    }

    fn draw_text(&mut self, text: &str, x: f32, y: f32, style: &TextStyle) {
        self.calls.push(DrawCall::Text {
            text: text.to_string(),
            x,
            y,
            style: *style,
        });
    }

    fn measure_text(&self, text: &str, style: &TextStyle) -> f32 {
        text.chars().count() as f32 * style.size * self.char_width
    }
}
