//! Command types for the Elm-style architecture
//!
//! Commands represent side effects the runtime performs after an update:
//! host callbacks, clipboard writes and timers.

use std::time::Duration;

use crate::editable::{Position, SelectionRange};
use crate::keymap::KeyPressEvent;
use crate::messages::Msg;

/// How long a hint bubble stays up
pub const HINT_DISMISS_MS: u64 = 1500;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Cmd {
    /// No command - do nothing
    #[default]
    None,
    /// `onChange(content)`
    NotifyChange(String),
    /// `onCursorChange(position)`
    NotifyCursor(Position),
    /// `onSelectionChange(range | null)`
    NotifySelection(Option<SelectionRange>),
    /// `onKeyPress(key, ctrlKey, shiftKey, altKey)`
    NotifyKeyPress(KeyPressEvent),
    /// Write text to the clipboard; the runtime answers with
    /// `UiMsg::CopyFinished`
    CopyToClipboard(String),
    /// Dispatch `msg` once `delay` has elapsed, unless the surface is torn
    /// down first
    ScheduleTimer { delay: Duration, msg: Box<Msg> },
    /// Execute multiple commands in order
    Batch(Vec<Cmd>),
}

impl Cmd {
    /// Combine optional commands, dropping empty ones. A single survivor is
    /// returned unwrapped.
    pub fn batch(cmds: impl IntoIterator<Item = Option<Cmd>>) -> Option<Cmd> {
        let mut cmds: Vec<Cmd> = cmds
            .into_iter()
            .flatten()
            .filter(|c| !c.is_none())
            .collect();
        match cmds.len() {
            0 => None,
            1 => cmds.pop(),
            _ => Some(Cmd::Batch(cmds)),
        }
    }

    pub fn is_none(&self) -> bool {
        match self {
            Cmd::None => true,
            Cmd::Batch(cmds) => cmds.iter().all(Cmd::is_none),
            _ => false,
        }
    }

    pub fn schedule(delay: Duration, msg: Msg) -> Self {
        Cmd::ScheduleTimer {
            delay,
            msg: Box::new(msg),
        }
    }

    /// Flatten nested batches into execution order
    pub fn flatten(self) -> Vec<Cmd> {
        match self {
            Cmd::None => Vec::new(),
            Cmd::Batch(cmds) => cmds.into_iter().flat_map(Cmd::flatten).collect(),
            other => vec![other],
        }
    }
}
