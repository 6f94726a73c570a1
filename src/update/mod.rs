//! Update functions for the Elm-style architecture
//!
//! All state transformations of a surface flow through [`update`]. Host
//! callbacks are not emitted by the handlers themselves: the dispatcher
//! compares what the host last observed with the new state and emits
//! `NotifyChange`, `NotifyCursor` and `NotifySelection` only for what
//! actually changed.

mod editor;
mod text_edit;
mod ui;

use crate::commands::Cmd;
use crate::keymap::KeyPressEvent;
use crate::messages::{DocumentMsg, Msg};
use crate::model::{InteractionState, Observed, SurfaceModel};

#[cfg(debug_assertions)]
use crate::tracing::SelectionSnapshot;
#[cfg(debug_assertions)]
use tracing::{debug, span, Level};

pub use editor::update_editor;
pub use text_edit::{update_document, TAB_TEXT};
pub use ui::update_ui;

/// Main update function - dispatches to sub-handlers
///
/// In debug builds, this wraps with tracing instrumentation.
#[inline]
pub fn update(model: &mut SurfaceModel, msg: Msg) -> Option<Cmd> {
    #[cfg(debug_assertions)]
    {
        update_traced(model, msg)
    }
    #[cfg(not(debug_assertions))]
    {
        update_inner(model, msg)
    }
}

fn update_inner(model: &mut SurfaceModel, msg: Msg) -> Option<Cmd> {
    let before = model.observe();

    let (key_cmd, action) = match msg {
        Msg::KeyDown(press) => {
            let report = Cmd::NotifyKeyPress(KeyPressEvent::from(&press));
            (Some(report), crate::input::default_action(&press))
        }
        Msg::KeyUp => {
            model.interaction = InteractionState::Idle;
            (None, None)
        }
        other => (None, Some(other)),
    };

    let force_notify = matches!(action, Some(Msg::Document(DocumentMsg::Reset)));

    let effect = match action {
        Some(Msg::Editor(m)) => editor::update_editor(model, m),
        Some(Msg::Document(m)) => text_edit::update_document(model, m),
        Some(Msg::Ui(m)) => ui::update_ui(model, m),
        // default_action never yields key messages
        Some(Msg::KeyDown(_)) | Some(Msg::KeyUp) | None => None,
    };

    let notify = if force_notify {
        Some(notify_all(model))
    } else {
        notify_changes(model, &before)
    };

    Cmd::batch([key_cmd, notify, effect])
}

/// Callbacks for whatever differs from `before`, in the order
/// change → cursor → selection
pub fn notify_changes(model: &SurfaceModel, before: &Observed) -> Option<Cmd> {
    let after = model.observe();
    Cmd::batch([
        (after.revision != before.revision)
            .then(|| Cmd::NotifyChange(model.content().to_string())),
        (after.cursor != before.cursor).then_some(Cmd::NotifyCursor(after.cursor)),
        (after.range != before.range).then_some(Cmd::NotifySelection(after.range)),
    ])
}

/// Every callback, unconditionally (reset)
pub fn notify_all(model: &SurfaceModel) -> Cmd {
    Cmd::Batch(vec![
        Cmd::NotifyChange(model.content().to_string()),
        Cmd::NotifyCursor(model.cursor()),
        Cmd::NotifySelection(model.selection_range()),
    ])
}

/// Traced update wrapper (debug builds only)
///
/// Captures before/after caret state and logs diffs.
#[cfg(debug_assertions)]
fn update_traced(model: &mut SurfaceModel, msg: Msg) -> Option<Cmd> {
    let msg_name = msg_type_name(&msg);
    let _span = span!(Level::DEBUG, "update", msg = %msg_name).entered();

    let before = SelectionSnapshot::from_model(model);
    debug!(target: "message", msg = %msg_name, "processing");

    let result = update_inner(model, msg);

    let after = SelectionSnapshot::from_model(model);
    if let Some(diff) = before.diff(&after) {
        debug!(target: "selection", %diff, "state changed");
    }

    assert_invariants(model, &msg_name);
    result
}

/// Buffer and selection invariants that must hold after every update
#[cfg(debug_assertions)]
fn assert_invariants(model: &SurfaceModel, context: &str) {
    let buffer = &model.buffer;
    debug_assert_eq!(
        buffer.lines().join("\n"),
        buffer.content(),
        "lines out of sync after {}",
        context
    );
    debug_assert!(
        model.selection.end() <= buffer.len_chars(),
        "selection {:?} past end after {}",
        model.selection,
        context
    );
    debug_assert_eq!(
        model.highlights.len(),
        buffer.line_count(),
        "highlight cache stale after {}",
        context
    );
}

/// Get a display name for a message
///
/// Example outputs:
/// - `KeyDown(Ctrl+A)`
/// - `Editor::MoveCursor { direction: Up, extend: false }`
#[cfg(debug_assertions)]
fn msg_type_name(msg: &Msg) -> String {
    match msg {
        Msg::KeyDown(press) => format!("KeyDown({})", press),
        Msg::KeyUp => "KeyUp".to_string(),
        Msg::Editor(m) => format!("Editor::{:?}", m),
        Msg::Document(DocumentMsg::ReplaceContent { anchor, focus, .. }) => {
            format!("Document::ReplaceContent({}..{})", anchor, focus)
        }
        Msg::Document(m) => format!("Document::{:?}", m),
        Msg::Ui(m) => format!("Ui::{:?}", m),
    }
}
