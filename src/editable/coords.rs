//! Conversion between flat character offsets and line/column positions.
//!
//! The input surface only reports flat offsets; everything downstream works
//! in positions. Both directions saturate instead of failing: offsets past
//! the end map to the end of the buffer, columns past a line's end map to
//! that line's end, and lines past the last line map to the last line.

use super::buffer::TextBuffer;
use super::cursor::Position;

/// Convert a character offset to a position.
///
/// Walks the lines accumulating `length + 1` per line (the `+ 1` is the
/// newline) until the remainder fits inside the current line.
pub fn offset_to_position(buffer: &TextBuffer, offset: usize) -> Position {
    let mut remaining = offset.min(buffer.len_chars());

    for (line, text) in buffer.lines().iter().enumerate() {
        let len = text.chars().count();
        if remaining <= len {
            return Position::new(line, remaining);
        }
        remaining -= len + 1;
    }

    // Unreachable after clamping, but keep the end-of-buffer answer.
    end_position(buffer)
}

/// Convert a position to a character offset.
pub fn position_to_offset(buffer: &TextBuffer, position: Position) -> usize {
    let line = position.line.min(buffer.last_line());
    let preceding: usize = buffer.lines()[..line]
        .iter()
        .map(|l| l.chars().count() + 1)
        .sum();
    preceding + position.column.min(buffer.line_length(line))
}

/// Clamp a position into the buffer
pub fn clamp_position(buffer: &TextBuffer, position: Position) -> Position {
    let line = position.line.min(buffer.last_line());
    Position::new(line, position.column.min(buffer.line_length(line)))
}

/// Position just past the last character
pub fn end_position(buffer: &TextBuffer) -> Position {
    let line = buffer.last_line();
    Position::new(line, buffer.line_length(line))
}
