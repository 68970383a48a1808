//! Decorative bar pattern.
//!
//! **This is not a barcode.** The bars are derived from the character codes
//! of the source string so that each product gets a recognisable stripe
//! pattern, but no scanner can decode it and no symbology (Code 128, EAN,
//! ...) is implemented. The only guarantee is determinism: the same string in
//! the same rectangle always produces the same bars.
//!
//! ## Rule
//!
//! ```text
//! count = min(len(s) × 3, 60)          len and codes are UTF-16 units
//! pitch = area.width / count
//! for i in 0..count:
//!     code = s[i mod len]
//!     draw iff code even, or (code divisible by 3 and i even)
//!     height = area.height if i mod 3 == 0 else 0.8 × area.height (centred)
//!     width  = max(1, pitch × 0.8)
//! ```

use crate::surface::{Color, DrawSurface, Rect};

/// Upper bound on the number of bar slots.
pub const MAX_BARS: usize = 60;

/// Bar slots generated per source character.
const BARS_PER_CHAR: usize = 3;

/// Compute the filled bars for `source` inside `area`.
pub fn bar_pattern(source: &str, area: Rect) -> Vec<Rect> {
    let codes: Vec<u16> = source.encode_utf16().collect();
    if codes.is_empty() {
        return Vec::new();
    }

    let count = (codes.len() * BARS_PER_CHAR).min(MAX_BARS);
    let pitch = area.width / count as f32;
    let bar_width = (pitch * 0.8).max(1.0);

    (0..count)
        .filter_map(|i| {
            let code = codes[i % codes.len()];
            let filled = code % 2 == 0 || (code % 3 == 0 && i % 2 == 0);
            if !filled {
                return None;
            }
            let height = if i % 3 == 0 {
                area.height
            } else {
                area.height * 0.8
            };
            Some(Rect::new(
                area.x + i as f32 * pitch,
                area.y + (area.height - height) / 2.0,
                bar_width,
                height,
            ))
        })
        .collect()
}

/// Paint the pattern for `source` onto `surface`.
pub fn draw_bar_pattern(surface: &mut dyn DrawSurface, source: &str, area: Rect, color: Color) {
    for bar in bar_pattern(source, area) {
        surface.fill_rect(bar, color);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::{DrawCall, RecordingSurface};
    use pretty_assertions::assert_eq;

    const AREA: Rect = Rect::new(400.0, 80.0, 180.0, 60.0);

    #[test]
    fn test_empty_source_draws_nothing() {
        assert!(bar_pattern("", AREA).is_empty());
    }

    #[test]
    fn test_deterministic() {
        let a = bar_pattern("BLBF5JCWCST3FVGY", AREA);
        let b = bar_pattern("BLBF5JCWCST3FVGY", AREA);
        assert_eq!(a, b);
        assert!(!a.is_empty());
    }

    #[test]
    fn test_different_sources_differ() {
        assert_ne!(
            bar_pattern("BLBF5JCWCST3FVGY", AREA),
            bar_pattern("ACCGH4GACGHGZ3FX", AREA)
        );
    }

    #[test]
    fn test_single_even_char() {
        // 'B' = 66: even, so all three slots are filled.
        let bars = bar_pattern("B", Rect::new(0.0, 0.0, 30.0, 10.0));
        assert_eq!(
            bars,
            vec![
                Rect::new(0.0, 0.0, 8.0, 10.0),
                Rect::new(10.0, 1.0, 8.0, 8.0),
                Rect::new(20.0, 1.0, 8.0, 8.0),
            ]
        );
    }

    #[test]
    fn test_odd_multiple_of_three_fills_even_slots() {
        // 'K' = 75: odd and divisible by 3, so only slots 0 and 2 are filled.
        let bars = bar_pattern("K", Rect::new(0.0, 0.0, 30.0, 10.0));
        let xs: Vec<f32> = bars.iter().map(|b| b.x).collect();
        assert_eq!(xs, vec![0.0, 20.0]);
    }

    #[test]
    fn test_odd_char_draws_nothing() {
        // 'A' = 65: odd, not divisible by 3.
        assert!(bar_pattern("AAAA", AREA).is_empty());
    }

    #[test]
    fn test_bar_count_capped() {
        // 30 characters would give 90 slots; capped to 60, pitch = 180 / 60 = 3.
        let source = "B".repeat(30);
        let bars = bar_pattern(&source, AREA);
        assert_eq!(bars.len(), MAX_BARS);
        assert_eq!(bars[1].x - bars[0].x, 3.0);
        assert!(bars.iter().all(|b| b.right() <= AREA.right() + 0.001));
    }

    #[test]
    fn test_minimum_bar_width() {
        // Pitch 0.5px → drawn width clamps to 1px.
        let bars = bar_pattern(&"B".repeat(20), Rect::new(0.0, 0.0, 30.0, 10.0));
        assert!(bars.iter().all(|b| b.width == 1.0));
    }

    #[test]
    fn test_draw_fills_each_bar() {
        let mut surface = RecordingSurface::new(600, 360);
        draw_bar_pattern(&mut surface, "BLBF5JCWCST3FVGY", AREA, Color::BLACK);
        let fills = surface
            .calls()
            .iter()
            .filter(|c| matches!(c, DrawCall::Fill { color, .. } if *color == Color::BLACK))
            .count();
        assert_eq!(fills, bar_pattern("BLBF5JCWCST3FVGY", AREA).len());
    }
}
