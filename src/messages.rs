//! Message types for the Elm-style architecture
//!
//! All state changes of a surface flow through these message types.

use crate::keymap::KeyPress;

/// Direction for caret movement
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

/// Caret and selection messages
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditorMsg {
    /// Move the caret one step. With `extend` the anchor stays put.
    MoveCursor { direction: Direction, extend: bool },
    /// Home
    MoveCursorLineStart { extend: bool },
    /// End
    MoveCursorLineEnd { extend: bool },
    /// Ctrl+Home
    MoveCursorDocumentStart { extend: bool },
    /// Ctrl+End
    MoveCursorDocumentEnd { extend: bool },
    SelectAll,
    /// Raw anchor/focus offsets reported by the input element
    SetSelection { anchor: usize, focus: usize },
    /// Pointer pressed at an offset: anchor and focus both land there
    PointerDown(usize),
    /// Pointer dragged to an offset: focus follows, anchor stays
    PointerDrag(usize),
    PointerUp,
}

/// Content mutations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DocumentMsg {
    /// Insert text at the caret, replacing any selection
    InsertText(String),
    InsertNewline,
    /// Two spaces
    InsertTab,
    DeleteBackward,
    DeleteForward,
    /// Wholesale value replacement as reported by a real input element
    ReplaceContent {
        content: String,
        anchor: usize,
        focus: usize,
    },
    /// Restore the initial content, caret and selection
    Reset,
}

/// Toolbar and cosmetic messages
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiMsg {
    /// Copy the selection (or the whole buffer) to the clipboard
    Copy,
    /// Outcome of a clipboard write
    CopyFinished { ok: bool },
    ToggleFullscreen,
    /// Hide the hint bubble if it is still the one with this generation
    DismissHint(u64),
}

/// Top-level message type
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// A key went down. Reported to the host first, then its default
    /// action (if any) runs.
    KeyDown(KeyPress),
    /// All keys released
    KeyUp,
    Editor(EditorMsg),
    Document(DocumentMsg),
    Ui(UiMsg),
}

impl Msg {
    pub fn move_cursor(direction: Direction) -> Self {
        Msg::Editor(EditorMsg::MoveCursor {
            direction,
            extend: false,
        })
    }

    pub fn extend_selection(direction: Direction) -> Self {
        Msg::Editor(EditorMsg::MoveCursor {
            direction,
            extend: true,
        })
    }

    pub fn insert_text(text: impl Into<String>) -> Self {
        Msg::Document(DocumentMsg::InsertText(text.into()))
    }

    pub fn set_selection(anchor: usize, focus: usize) -> Self {
        Msg::Editor(EditorMsg::SetSelection { anchor, focus })
    }

    pub fn key(press: KeyPress) -> Self {
        Msg::KeyDown(press)
    }
}
