//! Caret movement, selection and pointer handling

use crate::commands::Cmd;
use crate::editable::{offset_to_position, position_to_offset, Position, Selection};
use crate::messages::{Direction, EditorMsg};
use crate::model::{InteractionState, SurfaceModel};

/// Handle caret and selection messages. Callbacks are derived by the
/// dispatcher from the before/after state, so nothing is returned here.
pub fn update_editor(model: &mut SurfaceModel, msg: EditorMsg) -> Option<Cmd> {
    match msg {
        EditorMsg::MoveCursor { direction, extend } => match direction {
            Direction::Left | Direction::Right => move_horizontal(model, direction, extend),
            Direction::Up | Direction::Down => move_vertical(model, direction, extend),
        },

        EditorMsg::MoveCursorLineStart { extend } => {
            let line = model.cursor().line;
            let target = position_to_offset(&model.buffer, Position::new(line, 0));
            move_to(model, target, extend);
        }

        EditorMsg::MoveCursorLineEnd { extend } => {
            let line = model.cursor().line;
            let end = Position::new(line, model.buffer.line_length(line));
            let target = position_to_offset(&model.buffer, end);
            move_to(model, target, extend);
        }

        EditorMsg::MoveCursorDocumentStart { extend } => move_to(model, 0, extend),

        EditorMsg::MoveCursorDocumentEnd { extend } => {
            let end = model.buffer.len_chars();
            move_to(model, end, extend);
        }

        EditorMsg::SelectAll => {
            let end = model.buffer.len_chars();
            model.selection = Selection::new(0, end);
            model.desired_column = None;
        }

        EditorMsg::SetSelection { anchor, focus } => {
            model.set_selection(Selection::new(anchor, focus));
            model.desired_column = None;
        }

        EditorMsg::PointerDown(offset) => {
            model.set_selection(Selection::collapsed(offset));
            model.desired_column = None;
            model.interaction = InteractionState::Selecting;
        }

        EditorMsg::PointerDrag(offset) => {
            let anchor = model.selection.anchor;
            model.set_selection(Selection::new(anchor, offset));
            model.desired_column = None;
            model.interaction = InteractionState::Selecting;
        }

        EditorMsg::PointerUp => {
            model.interaction = InteractionState::Idle;
        }
    }
    None
}

/// Move the focus to `target`. Without `extend` the selection collapses
/// there.
fn move_to(model: &mut SurfaceModel, target: usize, extend: bool) {
    if extend {
        let anchor = model.selection.anchor;
        model.set_selection(Selection::new(anchor, target));
        model.interaction = InteractionState::Selecting;
    } else {
        model.set_selection(Selection::collapsed(target));
        model.interaction = InteractionState::Idle;
    }
    model.desired_column = None;
}

fn move_horizontal(model: &mut SurfaceModel, direction: Direction, extend: bool) {
    let selection = model.selection;

    // Without shift, an active selection collapses to its edge instead of
    // moving.
    if !extend && !selection.is_collapsed() {
        let edge = if direction == Direction::Left {
            selection.start()
        } else {
            selection.end()
        };
        move_to(model, edge, false);
        return;
    }

    let target = match direction {
        Direction::Left => selection.focus.saturating_sub(1),
        _ => (selection.focus + 1).min(model.buffer.len_chars()),
    };
    move_to(model, target, extend);
}

fn move_vertical(model: &mut SurfaceModel, direction: Direction, extend: bool) {
    let selection = model.selection;
    let from = if !extend && !selection.is_collapsed() {
        if direction == Direction::Up {
            selection.start()
        } else {
            selection.end()
        }
    } else {
        selection.focus
    };

    let pos = offset_to_position(&model.buffer, from);
    let column = model.desired_column.unwrap_or(pos.column);

    // Moving past the first or last line goes to the buffer edge, the way a
    // textarea does.
    let target = match direction {
        Direction::Up if pos.line == 0 => 0,
        Direction::Up => position_to_offset(&model.buffer, Position::new(pos.line - 1, column)),
        _ if pos.line >= model.buffer.last_line() => model.buffer.len_chars(),
        _ => position_to_offset(&model.buffer, Position::new(pos.line + 1, column)),
    };

    move_to(model, target, extend);
    model.desired_column = Some(column);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SurfaceConfig;
    use crate::syntax::LanguageId;

    fn model_at(content: &str, selection: Selection) -> SurfaceModel {
        let mut model = SurfaceModel::new(SurfaceConfig::with_content(content, LanguageId::PlainText));
        model.set_selection(selection);
        model
    }

    fn mv(model: &mut SurfaceModel, direction: Direction, extend: bool) {
        update_editor(model, EditorMsg::MoveCursor { direction, extend });
    }

    #[test]
    fn test_left_right_clamp_at_edges() {
        let mut m = model_at("ab", Selection::collapsed(0));
        mv(&mut m, Direction::Left, false);
        assert_eq!(m.selection, Selection::collapsed(0));
        mv(&mut m, Direction::Right, false);
        mv(&mut m, Direction::Right, false);
        mv(&mut m, Direction::Right, false);
        assert_eq!(m.selection, Selection::collapsed(2));
    }

    #[test]
    fn test_shift_extends_and_plain_collapses_to_edge() {
        let mut m = model_at("abcdef", Selection::collapsed(2));
        mv(&mut m, Direction::Right, true);
        mv(&mut m, Direction::Right, true);
        assert_eq!(m.selection, Selection::new(2, 4));
        assert_eq!(m.interaction, InteractionState::Selecting);

        let mut left = m.clone();
        mv(&mut left, Direction::Left, false);
        assert_eq!(left.selection, Selection::collapsed(2));
        assert_eq!(left.interaction, InteractionState::Idle);

        mv(&mut m, Direction::Right, false);
        assert_eq!(m.selection, Selection::collapsed(4));
    }

    #[test]
    fn test_vertical_keeps_desired_column() {
        // "abcdef" / "x" / "ghijkl": caret at column 5 on line 0
        let mut m = model_at("abcdef\nx\nghijkl", Selection::collapsed(5));
        mv(&mut m, Direction::Down, false);
        assert_eq!(m.cursor(), Position::new(1, 1));
        mv(&mut m, Direction::Down, false);
        assert_eq!(m.cursor(), Position::new(2, 5));
        mv(&mut m, Direction::Up, false);
        mv(&mut m, Direction::Up, false);
        assert_eq!(m.cursor(), Position::new(0, 5));
    }

    #[test]
    fn test_vertical_past_edges_goes_to_buffer_edges() {
        let mut m = model_at("abc\ndef", Selection::collapsed(1));
        mv(&mut m, Direction::Up, false);
        assert_eq!(m.selection, Selection::collapsed(0));

        let mut m = model_at("abc\ndef", Selection::collapsed(5));
        mv(&mut m, Direction::Down, false);
        assert_eq!(m.selection, Selection::collapsed(7));
    }

    #[test]
    fn test_home_end_and_document_edges() {
        let mut m = model_at("abc\ndef", Selection::collapsed(5));
        update_editor(&mut m, EditorMsg::MoveCursorLineStart { extend: true });
        assert_eq!(m.selection, Selection::new(5, 4));
        update_editor(&mut m, EditorMsg::MoveCursorLineEnd { extend: false });
        assert_eq!(m.selection, Selection::collapsed(7));
        update_editor(&mut m, EditorMsg::MoveCursorDocumentStart { extend: true });
        assert_eq!(m.selection, Selection::new(7, 0));
        update_editor(&mut m, EditorMsg::SelectAll);
        assert_eq!(m.selection, Selection::new(0, 7));
    }

    #[test]
    fn test_pointer_drag_selects_backwards() {
        let mut m = model_at("abc\ndef\nghi", Selection::collapsed(0));
        update_editor(&mut m, EditorMsg::PointerDown(8));
        update_editor(&mut m, EditorMsg::PointerDrag(2));
        assert_eq!(m.interaction, InteractionState::Selecting);
        let range = m.selection_range().unwrap();
        assert_eq!(range.start(), Position::new(0, 2));
        assert_eq!(range.end(), Position::new(2, 0));
        update_editor(&mut m, EditorMsg::PointerUp);
        assert_eq!(m.interaction, InteractionState::Idle);
    }

    #[test]
    fn test_set_selection_is_clamped() {
        let mut m = model_at("abc", Selection::collapsed(0));
        update_editor(&mut m, EditorMsg::SetSelection { anchor: 1, focus: 999 });
        assert_eq!(m.selection, Selection::new(1, 3));
    }
}
