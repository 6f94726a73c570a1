//! Default actions for key presses
//!
//! Maps a reported key press to the message the simulated input element
//! would act on. Keys without a default action map to `None`; they are
//! still reported to the host.

use crate::keymap::{KeyCode, KeyPress};
use crate::messages::{Direction, DocumentMsg, EditorMsg, Msg, UiMsg};

pub fn default_action(press: &KeyPress) -> Option<Msg> {
    let mods = press.mods;
    let extend = mods.shift();
    let command = mods.command();

    let msg = match press.code() {
        KeyCode::Left => Msg::Editor(EditorMsg::MoveCursor {
            direction: Direction::Left,
            extend,
        }),
        KeyCode::Right => Msg::Editor(EditorMsg::MoveCursor {
            direction: Direction::Right,
            extend,
        }),
        KeyCode::Up => Msg::Editor(EditorMsg::MoveCursor {
            direction: Direction::Up,
            extend,
        }),
        KeyCode::Down => Msg::Editor(EditorMsg::MoveCursor {
            direction: Direction::Down,
            extend,
        }),
        KeyCode::Home if command => Msg::Editor(EditorMsg::MoveCursorDocumentStart { extend }),
        KeyCode::End if command => Msg::Editor(EditorMsg::MoveCursorDocumentEnd { extend }),
        KeyCode::Home => Msg::Editor(EditorMsg::MoveCursorLineStart { extend }),
        KeyCode::End => Msg::Editor(EditorMsg::MoveCursorLineEnd { extend }),

        KeyCode::Char(c) if command => match c.to_ascii_lowercase() {
            'a' => Msg::Editor(EditorMsg::SelectAll),
            'c' => Msg::Ui(UiMsg::Copy),
            _ => return None,
        },
        KeyCode::Char(_) => Msg::Document(DocumentMsg::InsertText(press.key.clone())),

        KeyCode::Enter if !command => Msg::Document(DocumentMsg::InsertNewline),
        KeyCode::Tab if !command && !extend => Msg::Document(DocumentMsg::InsertTab),
        KeyCode::Backspace => Msg::Document(DocumentMsg::DeleteBackward),
        KeyCode::Delete => Msg::Document(DocumentMsg::DeleteForward),

        _ => return None,
    };
    Some(msg)
}
