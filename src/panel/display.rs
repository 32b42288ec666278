//! Two-line display text layout.

/// Characters per display line.
pub const LINE_WIDTH: usize = 16;

/// Number of display lines.
pub const LINE_COUNT: usize = 2;

/// Wrap text across the two display lines.
///
/// Characters 0..16 land on line one, 16..32 on line two, anything beyond
/// that is silently dropped.
pub fn wrap_lines(text: &str) -> [String; LINE_COUNT] {
    let mut chars = text.chars();
    let top: String = chars.by_ref().take(LINE_WIDTH).collect();
    let bottom: String = chars.take(LINE_WIDTH).collect();
    [top, bottom]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_text_stays_on_line_one() {
        let [top, bottom] = wrap_lines("4, obviously");
        assert_eq!(top, "4, obviously");
        assert_eq!(bottom, "");
    }

    #[test]
    fn test_exact_width_fills_line_one() {
        let [top, bottom] = wrap_lines("sixteen chars!!!");
        assert_eq!(top.chars().count(), 16);
        assert_eq!(bottom, "");
    }

    #[test]
    fn test_twenty_chars_wrap_at_sixteen() {
        let [top, bottom] = wrap_lines("abcdefghijklmnopqrst");
        assert_eq!(top, "abcdefghijklmnop");
        assert_eq!(bottom, "qrst");
    }

    #[test]
    fn test_overflow_beyond_both_lines_is_dropped() {
        let text: String = "x".repeat(40);
        let [top, bottom] = wrap_lines(&text);
        assert_eq!(top.chars().count(), 16);
        assert_eq!(bottom.chars().count(), 16);
    }

    #[test]
    fn test_empty_text_clears_both_lines() {
        let [top, bottom] = wrap_lines("");
        assert_eq!(top, "");
        assert_eq!(bottom, "");
    }

    #[test]
    fn test_wraps_on_characters_not_bytes() {
        let text = "привет волшебник ок";
        let [top, bottom] = wrap_lines(text);
        assert_eq!(top, "привет волшебник");
        assert_eq!(bottom, " ок");
    }
}
