//! Greedy word wrap for the title block.
//!
//! Words are packed onto a line while the candidate line still fits. The
//! vertical cursor advances one line height per flushed line; once it passes
//! the overflow limit the remaining words are dropped without an ellipsis.

/// Geometry for one wrapped block.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WrapBox {
    /// Widest a line may measure
    pub max_width: f32,
    /// y of the first line
    pub top: f32,
    pub line_height: f32,
    /// Lines may start at or above this y
    pub limit: f32,
}

/// A positioned output line.
#[derive(Debug, Clone, PartialEq)]
pub struct WrappedLine {
    pub text: String,
    pub y: f32,
}

/// Break `text` into lines that fit `bounds`, measuring with `measure`.
///
/// A single word wider than `max_width` still gets a line of its own.
pub fn wrap_words<F>(text: &str, bounds: &WrapBox, measure: F) -> Vec<WrappedLine>
where
    F: Fn(&str) -> f32,
{
    let mut lines = Vec::new();
    let mut line = String::new();
    let mut y = bounds.top;

    for word in text.split_whitespace() {
        let candidate = if line.is_empty() {
            word.to_string()
        } else {
            format!("{} {}", line, word)
        };

        if measure(&candidate) > bounds.max_width && !line.is_empty() {
            lines.push(WrappedLine {
                text: std::mem::replace(&mut line, word.to_string()),
                y,
            });
            y += bounds.line_height;
            if y > bounds.limit {
                line.clear();
                break;
            }
        } else {
            line = candidate;
        }
    }

    if !line.is_empty() && y <= bounds.limit {
        lines.push(WrappedLine { text: line, y });
    }

    let kept: usize = lines.iter().map(|l| l.text.split_whitespace().count()).sum();
    let total = text.split_whitespace().count();
    if kept < total {
        tracing::debug!(dropped = total - kept, "title truncated at overflow limit");
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    /// 10px per character.
    fn fixed(s: &str) -> f32 {
        s.chars().count() as f32 * 10.0
    }

    fn bounds(max_width: f32) -> WrapBox {
        WrapBox {
            max_width,
            top: 175.0,
            line_height: 18.0,
            limit: 240.0,
        }
    }

    fn texts(lines: &[WrappedLine]) -> Vec<&str> {
        lines.iter().map(|l| l.text.as_str()).collect()
    }

    #[test]
    fn test_short_title_is_one_line() {
        let title = "EVEREADY 10 W Round B22 LED Bulb";
        let lines = wrap_words(title, &bounds(560.0), fixed);
        assert_eq!(lines, vec![WrappedLine { text: title.to_string(), y: 175.0 }]);
    }

    #[test]
    fn test_exact_fit_stays_on_line() {
        // "aaaa bbbb" is exactly 90px
        let lines = wrap_words("aaaa bbbb", &bounds(90.0), fixed);
        assert_eq!(texts(&lines), vec!["aaaa bbbb"]);
    }

    #[test]
    fn test_multi_line_respects_width_and_order() {
        let title = "one two three four five six seven eight nine ten";
        let lines = wrap_words(title, &bounds(120.0), fixed);

        assert!(lines.len() >= 3);
        for line in &lines {
            assert!(fixed(&line.text) <= 120.0, "{:?} too wide", line.text);
        }
        let rejoined = texts(&lines).join(" ");
        assert!(title.starts_with(&rejoined));
        let ys: Vec<f32> = lines.iter().map(|l| l.y).collect();
        assert_eq!(&ys[..3], &[175.0, 193.0, 211.0]);
    }

    #[test]
    fn test_overflow_drops_remaining_words() {
        // One word per line: lines at 175, 193, 211, 229; the next would be 247.
        let title = "aaaa bbbb cccc dddd eeee ffff";
        let lines = wrap_words(title, &bounds(45.0), fixed);
        assert_eq!(texts(&lines), vec!["aaaa", "bbbb", "cccc", "dddd"]);
        assert_eq!(lines.last().map(|l| l.y), Some(229.0));
    }

    #[test]
    fn test_pending_line_flushed_when_within_limit() {
        let lines = wrap_words("aaaa bbbb cccc", &bounds(45.0), fixed);
        assert_eq!(texts(&lines), vec!["aaaa", "bbbb", "cccc"]);
    }

    #[test]
    fn test_long_word_gets_own_line() {
        let lines = wrap_words("a supercalifragilistic b", &bounds(50.0), fixed);
        assert_eq!(texts(&lines), vec!["a", "supercalifragilistic", "b"]);
    }

    #[test]
    fn test_whitespace_runs_collapse() {
        let lines = wrap_words("  LED   Bulb  ", &bounds(560.0), fixed);
        assert_eq!(texts(&lines), vec!["LED Bulb"]);
        assert!(wrap_words("   ", &bounds(560.0), fixed).is_empty());
    }
}
