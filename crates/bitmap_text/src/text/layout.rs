//! Text layout engine
//!
//! Breaks a message into display lines for a fixed-cell font. Wrapping is
//! greedy with a one-word lookahead:
//!
//! - an explicit `'\n'` always ends the current line, even an empty one
//! - a line that grows past `chars_per_line` wraps before the next character
//! - on a space past the middle of the line, the next word is measured and
//!   the line wraps at the space if that word would not fit
//! - a space or newline directly after an automatic wrap is swallowed by it,
//!   and a space the line wraps on is the break itself and is dropped
//! - trailing empty lines are dropped
//!
//! Words that start in the first half of a line are never pushed whole onto
//! the next line, which is what lets over-long words break mid-word instead
//! of leaving a mostly empty line behind.

use super::GlyphMetrics;

/// Laid-out message, recomputed from scratch whenever its inputs change
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextLayout {
    lines: Vec<String>,
    chars_per_line: usize,
    window_lines: usize,
    char_count: usize,
}

impl TextLayout {
    /// Lay `message` out for a viewport of the given pixel size
    pub fn compute(
        message: &str,
        viewport_width: i32,
        viewport_height: i32,
        metrics: GlyphMetrics,
    ) -> Self {
        let chars_per_line = chars_per_line(viewport_width, metrics.cell_width);
        let lines = wrap_lines(message, chars_per_line);
        let char_count = lines.iter().map(|line| line.chars().count()).sum();

        Self {
            lines,
            chars_per_line,
            window_lines: window_lines(viewport_height, metrics),
            char_count,
        }
    }

    /// Display lines in reading order
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// A single display line
    pub fn line(&self, index: usize) -> Option<&str> {
        self.lines.get(index).map(String::as_str)
    }

    /// Number of display lines
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Lines that fit in the viewport at once
    pub fn window_lines(&self) -> usize {
        self.window_lines
    }

    /// Wrap threshold used for this layout
    pub fn chars_per_line(&self) -> usize {
        self.chars_per_line
    }

    /// Characters across all lines (suppressed characters excluded)
    pub fn char_count(&self) -> usize {
        self.char_count
    }

    /// Largest valid scroll position
    pub fn max_scroll(&self) -> usize {
        self.lines.len().saturating_sub(1)
    }

    /// Lines joined back together with explicit newlines
    pub fn to_text(&self) -> String {
        self.lines.join("\n")
    }
}

/// Characters per line before a wrap is forced
///
/// One cell of the viewport is held back as margin; a viewport narrower
/// than two cells yields zero, which wraps after every character.
pub fn chars_per_line(viewport_width: i32, cell_width: u32) -> usize {
    if cell_width == 0 || viewport_width <= 0 {
        return 0;
    }
    (viewport_width / cell_width as i32 - 1).max(0) as usize
}

/// Whole lines that fit in `viewport_height`
pub fn window_lines(viewport_height: i32, metrics: GlyphMetrics) -> usize {
    let line_height = metrics.line_height();
    if line_height == 0 || viewport_height <= 0 {
        return 0;
    }
    (viewport_height as u32 / line_height) as usize
}

/// Wrap `message` into display lines
///
/// Pure function of its inputs; wrapping the joined output again at the
/// same width returns the same lines.
pub fn wrap_lines(message: &str, chars_per_line: usize) -> Vec<String> {
    let chars: Vec<char> = message.chars().collect();
    let mut lines = Vec::new();
    let mut line = String::new();
    let mut line_len = 0usize;
    let mut wrap_pending = false;

    for (index, &ch) in chars.iter().enumerate() {
        if wrap_pending {
            wrap_pending = false;
            if line_len > 0 {
                lines.push(std::mem::take(&mut line));
                line_len = 0;
            }
            if ch == '\n' || ch == ' ' {
                continue;
            }
        }

        if ch == '\n' {
            lines.push(std::mem::take(&mut line));
            line_len = 0;
            continue;
        }

        line.push(ch);
        line_len += 1;

        if line_len > chars_per_line {
            wrap_pending = true;
        } else if ch == ' ' && line_len > chars_per_line / 2 {
            let word_len = word_length_after(&chars, index + 1);
            wrap_pending = word_len + line_len > chars_per_line;
        }

        if wrap_pending && ch == ' ' {
            line.pop();
            line_len -= 1;
        }
    }

    if line_len > 0 {
        lines.push(line);
    }
    // Trailing newlines leave nothing to draw
    while lines.last().is_some_and(String::is_empty) {
        lines.pop();
    }
    lines
}

/// Distance from `start` to the next space, newline or end of message
fn word_length_after(chars: &[char], start: usize) -> usize {
    chars
        .get(start..)
        .and_then(|rest| rest.iter().position(|&c| c == ' ' || c == '\n'))
        .unwrap_or_else(|| chars.len().saturating_sub(start))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn wrap(message: &str, cells: i32) -> Vec<String> {
        wrap_lines(message, chars_per_line(cells * 6, 6))
    }

    #[test]
    fn test_wraps_on_word_boundaries() {
        assert_eq!(
            wrap("THE QUICK BROWN FOX", 7),
            vec!["THE", "QUICK", "BROWN", "FOX"]
        );
    }

    #[test]
    fn test_explicit_newline_breaks() {
        assert_eq!(wrap("A\nB", 20), vec!["A", "B"]);
        assert_eq!(wrap("A\n\nB", 20), vec!["A", "", "B"]);
        assert_eq!(wrap("\nA", 20), vec!["", "A"]);
    }

    #[test]
    fn test_trailing_newlines_add_no_lines() {
        assert_eq!(wrap("A\n", 20), vec!["A"]);
        assert_eq!(wrap("A\n\n\n", 20), vec!["A"]);
        assert!(wrap("\n", 20).is_empty());
    }

    #[test]
    fn test_empty_message_has_no_lines() {
        assert!(wrap("", 20).is_empty());
        assert!(TextLayout::compute("", 120, 70, GlyphMetrics::DEFAULT).lines().is_empty());
    }

    #[test]
    fn test_long_word_breaks_mid_word() {
        // 6 chars per line, line holds up to 7 before the wrap lands
        assert_eq!(wrap("ABCDEFGHIJ", 7), vec!["ABCDEFG", "HIJ"]);
    }

    #[test]
    fn test_word_in_first_half_may_break_mid_word() {
        assert_eq!(wrap("AB EFGHIJKL", 7), vec!["AB EFGH", "IJKL"]);
    }

    #[test]
    fn test_word_past_half_moves_whole() {
        assert_eq!(wrap("ABCD EFGHIJKLMN", 7), vec!["ABCD", "EFGHIJK", "LMN"]);
    }

    #[test]
    fn test_newline_right_after_wrap_is_swallowed() {
        assert_eq!(wrap("ABCDEFG\nX", 7), vec!["ABCDEFG", "X"]);
        assert_eq!(wrap("ABCDEFG\n\nX", 7), vec!["ABCDEFG", "", "X"]);
    }

    #[test]
    fn test_space_right_after_wrap_is_swallowed() {
        assert_eq!(wrap("ABCDEFG HI", 7), vec!["ABCDEFG", "HI"]);
    }

    #[test]
    fn test_space_that_overflows_is_dropped() {
        assert_eq!(wrap("ABCDEF GH", 7), vec!["ABCDEF", "GH"]);
    }

    #[test]
    fn test_zero_width_wraps_every_character() {
        assert_eq!(chars_per_line(5, 6), 0);
        assert_eq!(chars_per_line(-10, 6), 0);
        assert_eq!(wrap_lines("AB C", 0), vec!["A", "B", "C"]);
        assert_eq!(wrap_lines(" A", 0), vec!["A"]);
    }

    #[test]
    fn test_rewrap_is_fixed_point() {
        let messages = [
            "THE QUICK BROWN FOX JUMPS OVER THE LAZY DOG",
            "ABCD EFGHIJKLMN OP",
            "AB EFGHIJKL\n\nMNO PQ RST",
            "ABCD  EF GHI",
        ];
        for message in messages {
            for cpl in 0..12 {
                let once = wrap_lines(message, cpl);
                let twice = wrap_lines(&once.join("\n"), cpl);
                assert_eq!(once, twice, "message {message:?} at {cpl} chars per line");
            }
        }
    }

    #[test]
    fn test_window_lines_uses_leading() {
        assert_eq!(window_lines(70, GlyphMetrics::DEFAULT), 10);
        assert_eq!(window_lines(70, GlyphMetrics::new(6, 7, 3)), 7);
        assert_eq!(window_lines(6, GlyphMetrics::DEFAULT), 0);
        assert_eq!(window_lines(-1, GlyphMetrics::DEFAULT), 0);
        assert_eq!(window_lines(10, GlyphMetrics::new(6, 0, 0)), 0);
    }

    #[test]
    fn test_compute_counts_characters() {
        let layout = TextLayout::compute("THE QUICK BROWN FOX", 42, 21, GlyphMetrics::DEFAULT);
        assert_eq!(layout.chars_per_line(), 6);
        assert_eq!(layout.window_lines(), 3);
        assert_eq!(layout.line_count(), 4);
        assert_eq!(layout.char_count(), 16);
        assert_eq!(layout.max_scroll(), 3);
        assert_eq!(layout.line(1), Some("QUICK"));
        assert_eq!(layout.to_text(), "THE\nQUICK\nBROWN\nFOX");
    }
}
