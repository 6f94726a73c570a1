//! Offset/position mapping tests

use lesson_editor::editable::{
    clamp_position, end_position, offset_to_position, position_to_offset, Position, TextBuffer,
};

#[test]
fn test_offset_round_trips_every_boundary() {
    let buffer = TextBuffer::from_text("ab\n\ncde\n");
    for offset in 0..=buffer.len_chars() {
        let pos = offset_to_position(&buffer, offset);
        assert_eq!(
            position_to_offset(&buffer, pos),
            offset,
            "offset {} -> {:?}",
            offset,
            pos
        );
    }
}

#[test]
fn test_position_round_trips_every_valid_position() {
    for text in ["", "abc\ndef\nghi", "\n\n", "ab\n\ncde\n", "é日\nü"] {
        let buffer = TextBuffer::from_text(text);
        for line in 0..buffer.line_count() {
            for column in 0..=buffer.line_length(line) {
                let pos = Position::new(line, column);
                let offset = position_to_offset(&buffer, pos);
                assert_eq!(
                    offset_to_position(&buffer, offset),
                    pos,
                    "{:?}: {:?} -> {}",
                    text,
                    pos,
                    offset
                );
            }
        }
    }
}

#[test]
fn test_newline_offset_is_end_of_line() {
    let buffer = TextBuffer::from_text("ab\ncd");
    assert_eq!(offset_to_position(&buffer, 2), Position::new(0, 2));
    assert_eq!(offset_to_position(&buffer, 3), Position::new(1, 0));
}

#[test]
fn test_trailing_newline_has_empty_last_line() {
    let buffer = TextBuffer::from_text("ab\n");
    assert_eq!(buffer.line_count(), 2);
    assert_eq!(offset_to_position(&buffer, 3), Position::new(1, 0));
    assert_eq!(end_position(&buffer), Position::new(1, 0));
}

#[test]
fn test_empty_buffer() {
    let buffer = TextBuffer::from_text("");
    assert_eq!(buffer.line_count(), 1);
    assert_eq!(offset_to_position(&buffer, 0), Position::zero());
    assert_eq!(offset_to_position(&buffer, 10), Position::zero());
    assert_eq!(position_to_offset(&buffer, Position::new(3, 3)), 0);
}

#[test]
fn test_out_of_range_positions_clamp() {
    let buffer = TextBuffer::from_text("abc\nde");
    assert_eq!(position_to_offset(&buffer, Position::new(0, 99)), 3);
    assert_eq!(position_to_offset(&buffer, Position::new(9, 1)), 5);
    assert_eq!(
        clamp_position(&buffer, Position::new(9, 9)),
        Position::new(1, 2)
    );
}

#[test]
fn test_columns_count_characters_not_bytes() {
    let buffer = TextBuffer::from_text("ñandú\n日本");
    assert_eq!(buffer.line_length(0), 5);
    assert_eq!(offset_to_position(&buffer, 7), Position::new(1, 1));
    assert_eq!(position_to_offset(&buffer, Position::new(1, 2)), 8);
}

#[test]
fn test_reference_examples() {
    let buffer = TextBuffer::from_text("abc\ndef\nghi");
    assert_eq!(offset_to_position(&buffer, 5), Position::new(1, 1));
    assert_eq!(position_to_offset(&buffer, Position::new(2, 0)), 8);
    assert_eq!(position_to_offset(&buffer, Position::new(0, 999)), 3);
}
