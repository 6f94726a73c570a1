//! Text buffer for the editing surface.
//!
//! The buffer owns the authoritative content string and its line
//! decomposition. All offsets and columns are counted in characters
//! (Unicode scalar values), never bytes.

use std::ops::Range;

/// Content plus derived lines. `lines.join("\n") == content` always holds.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextBuffer {
    content: String,
    lines: Vec<String>,
}

impl TextBuffer {
    pub fn new() -> Self {
        Self::from_text("")
    }

    /// Create a buffer from a string slice
    pub fn from_text(s: &str) -> Self {
        Self {
            content: s.to_string(),
            lines: split_lines(s),
        }
    }

    /// Full content
    pub fn content(&self) -> &str {
        &self.content
    }

    /// All lines, without their trailing newline
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Number of lines (always >= 1)
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Line content (without trailing newline)
    pub fn line(&self, line: usize) -> Option<&str> {
        self.lines.get(line).map(String::as_str)
    }

    /// Length of a line in characters, 0 for lines past the end
    pub fn line_length(&self, line: usize) -> usize {
        self.lines.get(line).map_or(0, |l| l.chars().count())
    }

    /// Index of the last line
    pub fn last_line(&self) -> usize {
        self.lines.len() - 1
    }

    /// Total length in characters
    pub fn len_chars(&self) -> usize {
        self.content.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    /// Text in a character range. Out-of-range bounds are clamped.
    pub fn slice(&self, range: Range<usize>) -> String {
        let len = self.len_chars();
        let start = range.start.min(len);
        let end = range.end.min(len);
        if start >= end {
            return String::new();
        }
        self.content.chars().skip(start).take(end - start).collect()
    }

    /// Replace a character range with new text. Bounds are clamped and
    /// reversed ranges are treated as empty at `range.start`.
    pub fn replace(&mut self, range: Range<usize>, text: &str) {
        let len = self.len_chars();
        let start = range.start.min(len);
        let end = range.end.clamp(start, len);
        let start_byte = self.char_to_byte(start);
        let end_byte = self.char_to_byte(end);
        self.content.replace_range(start_byte..end_byte, text);
        self.lines = split_lines(&self.content);
    }

    /// Insert text at a character offset
    pub fn insert(&mut self, offset: usize, text: &str) {
        self.replace(offset..offset, text);
    }

    /// Remove a character range
    pub fn remove(&mut self, range: Range<usize>) {
        self.replace(range, "");
    }

    /// Replace everything
    pub fn set_content(&mut self, text: &str) {
        self.content.clear();
        self.content.push_str(text);
        self.lines = split_lines(text);
    }

    fn char_to_byte(&self, char_offset: usize) -> usize {
        self.content
            .char_indices()
            .nth(char_offset)
            .map(|(i, _)| i)
            .unwrap_or(self.content.len())
    }
}

fn split_lines(s: &str) -> Vec<String> {
    s.split('\n').map(str::to_string).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_join_invariant(buf: &TextBuffer) {
        assert_eq!(buf.lines().join("\n"), buf.content());
    }

    #[test]
    fn test_empty_buffer_has_one_line() {
        let buf = TextBuffer::new();
        assert_eq!(buf.line_count(), 1);
        assert_eq!(buf.line(0), Some(""));
        assert!(buf.is_empty());
        assert_join_invariant(&buf);
    }

    #[test]
    fn test_multiline() {
        let buf = TextBuffer::from_text("line1\nline2\nline3");
        assert_eq!(buf.line_count(), 3);
        assert_eq!(buf.line(0), Some("line1"));
        assert_eq!(buf.line(2), Some("line3"));
        assert_eq!(buf.line(3), None);
        assert_join_invariant(&buf);
    }

    #[test]
    fn test_trailing_newline_yields_empty_last_line() {
        let buf = TextBuffer::from_text("abc\n");
        assert_eq!(buf.line_count(), 2);
        assert_eq!(buf.line_length(1), 0);
        assert_join_invariant(&buf);
    }

    #[test]
    fn test_utf8_lengths_are_in_chars() {
        let buf = TextBuffer::from_text("héllo\nwörld");
        assert_eq!(buf.line_length(0), 5);
        assert_eq!(buf.len_chars(), 11);
        assert_eq!(buf.slice(1..2), "é");
    }

    #[test]
    fn test_insert_across_lines() {
        let mut buf = TextBuffer::from_text("hello\nworld");
        buf.insert(6, "beautiful ");
        assert_eq!(buf.content(), "hello\nbeautiful world");
        buf.insert(5, "\n");
        assert_eq!(buf.line_count(), 3);
        assert_join_invariant(&buf);
    }

    #[test]
    fn test_remove_newline_joins_lines() {
        let mut buf = TextBuffer::from_text("hello\nworld");
        buf.remove(5..6);
        assert_eq!(buf.content(), "helloworld");
        assert_eq!(buf.line_count(), 1);
    }

    #[test]
    fn test_replace_clamps_out_of_range() {
        let mut buf = TextBuffer::from_text("abc");
        buf.replace(2..99, "Z");
        assert_eq!(buf.content(), "abZ");
        buf.replace(50..60, "!");
        assert_eq!(buf.content(), "abZ!");
        buf.replace(3..1, "?");
        assert_eq!(buf.content(), "abZ?!");
    }

    #[test]
    fn test_set_content() {
        let mut buf = TextBuffer::from_text("old");
        buf.set_content("new\ntext");
        assert_eq!(buf.line_count(), 2);
        assert_join_invariant(&buf);
    }
}
