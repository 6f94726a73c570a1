//! Content mutations: typing, deletion, wholesale replacement and reset

use crate::commands::Cmd;
use crate::editable::Selection;
use crate::messages::DocumentMsg;
use crate::model::{InteractionState, SurfaceModel};

/// What Tab inserts. Spaces keep every cell exactly one column wide.
pub const TAB_TEXT: &str = "  ";

/// Handle content messages. Everything except `Reset` is a no-op on a
/// read-only surface.
pub fn update_document(model: &mut SurfaceModel, msg: DocumentMsg) -> Option<Cmd> {
    if model.is_read_only() && msg != DocumentMsg::Reset {
        tracing::debug!(?msg, "ignored on read-only surface");
        return None;
    }

    let edited = match msg {
        DocumentMsg::InsertText(text) => insert_text(model, &text),
        DocumentMsg::InsertNewline => insert_text(model, "\n"),
        DocumentMsg::InsertTab => insert_text(model, TAB_TEXT),
        DocumentMsg::DeleteBackward => delete_backward(model),
        DocumentMsg::DeleteForward => delete_forward(model),
        DocumentMsg::ReplaceContent {
            content,
            anchor,
            focus,
        } => model.replace_content(&content, Selection::new(anchor, focus)),
        DocumentMsg::Reset => {
            model.reset();
            return None;
        }
    };

    if edited {
        model.interaction = InteractionState::Editing;
    }
    None
}

/// Insert at the caret, replacing the selection
fn insert_text(model: &mut SurfaceModel, text: &str) -> bool {
    let selection = model.selection;
    model.replace_range(selection.start()..selection.end(), text)
}

/// Delete the selection, or the character before the caret. At the start
/// of a line this joins it with the previous one.
fn delete_backward(model: &mut SurfaceModel) -> bool {
    let selection = model.selection;
    if !selection.is_collapsed() {
        return model.replace_range(selection.start()..selection.end(), "");
    }
    if selection.focus == 0 {
        return false;
    }
    model.replace_range(selection.focus - 1..selection.focus, "")
}

/// Delete the selection, or the character after the caret. At the end of
/// a line this joins the next one onto it.
fn delete_forward(model: &mut SurfaceModel) -> bool {
    let selection = model.selection;
    if !selection.is_collapsed() {
        return model.replace_range(selection.start()..selection.end(), "");
    }
    if selection.focus >= model.buffer.len_chars() {
        return false;
    }
    model.replace_range(selection.focus..selection.focus + 1, "")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SurfaceConfig;
    use crate::editable::Position;
    use crate::syntax::LanguageId;

    fn model_at(content: &str, selection: Selection) -> SurfaceModel {
        let mut model = SurfaceModel::new(SurfaceConfig::with_content(content, LanguageId::PlainText));
        model.set_selection(selection);
        model
    }

    #[test]
    fn test_insert_replaces_selection() {
        let mut m = model_at("hello world", Selection::new(11, 6));
        update_document(&mut m, DocumentMsg::InsertText("there".into()));
        assert_eq!(m.content(), "hello there");
        assert_eq!(m.selection, Selection::collapsed(11));
        assert_eq!(m.interaction, InteractionState::Editing);
    }

    #[test]
    fn test_newline_and_tab() {
        let mut m = model_at("ab", Selection::collapsed(1));
        update_document(&mut m, DocumentMsg::InsertNewline);
        update_document(&mut m, DocumentMsg::InsertTab);
        assert_eq!(m.content(), "a\n  b");
        assert_eq!(m.cursor(), Position::new(1, 2));
        assert_eq!(m.highlights.len(), 2);
    }

    #[test]
    fn test_backspace_joins_lines() {
        let mut m = model_at("abc\ndef", Selection::collapsed(4));
        update_document(&mut m, DocumentMsg::DeleteBackward);
        assert_eq!(m.content(), "abcdef");
        assert_eq!(m.cursor(), Position::new(0, 3));
    }

    #[test]
    fn test_delete_joins_next_line() {
        let mut m = model_at("abc\ndef", Selection::collapsed(3));
        update_document(&mut m, DocumentMsg::DeleteForward);
        assert_eq!(m.content(), "abcdef");
        assert_eq!(m.cursor(), Position::new(0, 3));
    }

    #[test]
    fn test_deletes_at_buffer_edges_are_noops() {
        let mut m = model_at("ab", Selection::collapsed(0));
        update_document(&mut m, DocumentMsg::DeleteBackward);
        m.set_selection(Selection::collapsed(2));
        update_document(&mut m, DocumentMsg::DeleteForward);
        assert_eq!(m.content(), "ab");
        assert_eq!(m.revision(), 0);
        assert_eq!(m.interaction, InteractionState::Idle);
    }

    #[test]
    fn test_delete_selection() {
        let mut m = model_at("abc\ndef", Selection::new(1, 6));
        update_document(&mut m, DocumentMsg::DeleteForward);
        assert_eq!(m.content(), "af");
        assert_eq!(m.selection, Selection::collapsed(1));
    }

    #[test]
    fn test_read_only_ignores_edits() {
        let mut config = SurfaceConfig::with_content("fixed", LanguageId::PlainText);
        config.read_only = true;
        let mut m = SurfaceModel::new(config);
        update_document(&mut m, DocumentMsg::InsertText("x".into()));
        update_document(&mut m, DocumentMsg::DeleteForward);
        update_document(
            &mut m,
            DocumentMsg::ReplaceContent {
                content: "changed".into(),
                anchor: 0,
                focus: 0,
            },
        );
        assert_eq!(m.content(), "fixed");
    }

    #[test]
    fn test_replace_content_sets_selection() {
        let mut m = model_at("abc", Selection::collapsed(0));
        update_document(
            &mut m,
            DocumentMsg::ReplaceContent {
                content: "abcd\nef".into(),
                anchor: 7,
                focus: 2,
            },
        );
        assert_eq!(m.content(), "abcd\nef");
        assert_eq!(m.selection, Selection::new(7, 2));
        assert_eq!(m.buffer.line_count(), 2);
    }
}
