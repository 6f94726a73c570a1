//! Selection model: raw anchor/focus offsets, normalized ranges, and the
//! per-row decomposition used to draw selection rectangles.

use serde::{Deserialize, Serialize};

use super::buffer::TextBuffer;
use super::coords::{clamp_position, offset_to_position, position_to_offset};
use super::cursor::Position;

/// Raw selection as reported by the input surface, in character offsets.
/// The anchor stays fixed while the focus (the caret) moves.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Selection {
    /// Where the selection started (fixed point)
    pub anchor: usize,
    /// Where the caret is (moving point)
    pub focus: usize,
}

impl Selection {
    pub fn new(anchor: usize, focus: usize) -> Self {
        Self { anchor, focus }
    }

    /// Create a collapsed selection (caret with no selection)
    pub fn collapsed(offset: usize) -> Self {
        Self::new(offset, offset)
    }

    pub fn is_collapsed(&self) -> bool {
        self.anchor == self.focus
    }

    /// True when the user dragged backwards (focus before anchor)
    pub fn is_reversed(&self) -> bool {
        self.focus < self.anchor
    }

    /// Smaller of the two offsets
    pub fn start(&self) -> usize {
        self.anchor.min(self.focus)
    }

    /// Larger of the two offsets
    pub fn end(&self) -> usize {
        self.anchor.max(self.focus)
    }

    /// Both offsets clamped to the buffer length
    pub fn clamped(&self, buffer: &TextBuffer) -> Self {
        let len = buffer.len_chars();
        Self::new(self.anchor.min(len), self.focus.min(len))
    }

    /// Caret position (the focus)
    pub fn caret(&self, buffer: &TextBuffer) -> Position {
        offset_to_position(buffer, self.focus)
    }

    /// Normalized range, or `None` for a bare caret
    pub fn range(&self, buffer: &TextBuffer) -> Option<SelectionRange> {
        resolve_selection(buffer, self.anchor, self.focus)
    }
}

/// Normalize raw anchor/focus offsets into a forward range.
///
/// Returns `None` when both offsets land on the same position, which
/// means "caret only".
pub fn resolve_selection(
    buffer: &TextBuffer,
    anchor: usize,
    focus: usize,
) -> Option<SelectionRange> {
    let a = offset_to_position(buffer, anchor);
    let b = offset_to_position(buffer, focus);
    if a == b {
        return None;
    }
    Some(SelectionRange::new(a, b))
}

/// A selection in document order: `(start_line, start_column) <= (end_line, end_column)`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectionRange {
    pub start_line: usize,
    pub start_column: usize,
    pub end_line: usize,
    pub end_column: usize,
}

impl SelectionRange {
    /// Build a range from two positions in either order
    pub fn new(a: Position, b: Position) -> Self {
        let (start, end) = if a <= b { (a, b) } else { (b, a) };
        Self {
            start_line: start.line,
            start_column: start.column,
            end_line: end.line,
            end_column: end.column,
        }
    }

    pub fn start(&self) -> Position {
        Position::new(self.start_line, self.start_column)
    }

    pub fn end(&self) -> Position {
        Position::new(self.end_line, self.end_column)
    }

    /// Degenerate range (start == end)
    pub fn is_empty(&self) -> bool {
        self.start() == self.end()
    }

    /// Check if a position is within this range (end exclusive)
    pub fn contains(&self, pos: Position) -> bool {
        pos >= self.start() && pos < self.end()
    }

    /// Re-normalize and clamp both ends into the buffer. Ranges supplied by a
    /// host (initial selection) may be reversed or out of bounds.
    pub fn clamped(&self, buffer: &TextBuffer) -> Self {
        Self::new(
            clamp_position(buffer, self.start()),
            clamp_position(buffer, self.end()),
        )
    }

    /// Start and end as character offsets
    pub fn to_offsets(&self, buffer: &TextBuffer) -> (usize, usize) {
        (
            position_to_offset(buffer, self.start()),
            position_to_offset(buffer, self.end()),
        )
    }

    /// Break the range into one row per covered line.
    ///
    /// Single line: `[start_column, end_column)`. Multiple lines: the first
    /// row runs from `start_column` to the end of its line, middle rows
    /// cover their whole line, and the last row runs from column 0 to
    /// `end_column`.
    pub fn rows(&self, buffer: &TextBuffer) -> Vec<HighlightRow> {
        let range = self.clamped(buffer);
        if range.is_empty() {
            return Vec::new();
        }

        if range.start_line == range.end_line {
            return vec![HighlightRow {
                line: range.start_line,
                start_column: range.start_column,
                width: range.end_column - range.start_column,
            }];
        }

        (range.start_line..=range.end_line)
            .map(|line| {
                let line_len = buffer.line_length(line);
                if line == range.start_line {
                    HighlightRow {
                        line,
                        start_column: range.start_column,
                        width: line_len.saturating_sub(range.start_column),
                    }
                } else if line == range.end_line {
                    HighlightRow {
                        line,
                        start_column: 0,
                        width: range.end_column,
                    }
                } else {
                    HighlightRow {
                        line,
                        start_column: 0,
                        width: line_len,
                    }
                }
            })
            .collect()
    }
}

/// One visual row of a selection, in columns
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HighlightRow {
    pub line: usize,
    pub start_column: usize,
    pub width: usize,
}

impl HighlightRow {
    /// Exclusive end column
    pub fn end_column(&self) -> usize {
        self.start_column + self.width
    }
}
