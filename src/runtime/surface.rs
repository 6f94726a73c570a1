//! The surface runtime: feeds messages through `update` and performs the
//! resulting commands against the host and the clipboard.

use std::collections::VecDeque;
use std::time::Instant;

use crate::commands::Cmd;
use crate::config::SurfaceConfig;
use crate::editable::{Position, SelectionRange};
use crate::keymap::KeyPressEvent;
use crate::messages::{Msg, UiMsg};
use crate::model::SurfaceModel;
use crate::overlay::{compose, CellMetrics, OverlayFrame};
use crate::theme::{theme_for_mode, Theme};
use crate::timers::{Scheduler, TimerId};
use crate::update::update;

use super::clipboard::{Clipboard, SystemClipboard};

/// Callbacks the lesson host receives. All default to no-ops.
pub trait SurfaceHost {
    fn on_change(&mut self, _content: &str) {}
    fn on_cursor_change(&mut self, _position: Position) {}
    fn on_selection_change(&mut self, _range: Option<SelectionRange>) {}
    fn on_key_press(&mut self, _event: &KeyPressEvent) {}

    /// Color scheme preference used for the `system` theme
    fn prefers_dark_scheme(&self) -> bool {
        false
    }
}

/// A host that ignores every callback
impl SurfaceHost for () {}

/// One mounted editing surface
///
/// Owns the model, the theme, and the cosmetic timers. Dropping the surface
/// cancels every pending timer.
pub struct Surface<H: SurfaceHost, C: Clipboard = SystemClipboard> {
    model: SurfaceModel,
    host: H,
    clipboard: C,
    timers: Scheduler<Msg>,
    /// Dismiss timer of the hint on screen; replaced when a new hint shows
    hint_timer: Option<TimerId>,
    theme: Theme,
    metrics: CellMetrics,
}

impl<H: SurfaceHost> Surface<H, SystemClipboard> {
    /// Mount with the system clipboard
    pub fn mount(config: SurfaceConfig, host: H) -> Self {
        Self::new(config, host, SystemClipboard)
    }
}

impl<H: SurfaceHost, C: Clipboard> Surface<H, C> {
    pub fn new(config: SurfaceConfig, host: H, clipboard: C) -> Self {
        let theme = theme_for_mode(config.theme, host.prefers_dark_scheme());
        tracing::debug!(
            language = config.language.tag(),
            theme = %theme.name,
            read_only = config.read_only,
            "surface mounted"
        );
        Self {
            model: SurfaceModel::new(config),
            host,
            clipboard,
            timers: Scheduler::new(),
            hint_timer: None,
            theme,
            metrics: CellMetrics::default(),
        }
    }

    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    pub fn with_metrics(mut self, metrics: CellMetrics) -> Self {
        self.metrics = metrics;
        self
    }

    pub fn model(&self) -> &SurfaceModel {
        &self.model
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    pub fn clipboard(&self) -> &C {
        &self.clipboard
    }

    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    pub fn content(&self) -> &str {
        self.model.content()
    }

    /// Handle one input event to completion
    pub fn dispatch(&mut self, msg: Msg) {
        self.dispatch_at(msg, Instant::now());
    }

    /// Handle one input event to completion, with `now` as the time base
    /// for any timers it schedules
    pub fn dispatch_at(&mut self, msg: Msg, now: Instant) {
        let mut queue = VecDeque::from([msg]);
        while let Some(msg) = queue.pop_front() {
            if let Some(cmd) = update(&mut self.model, msg) {
                for cmd in cmd.flatten() {
                    if let Some(follow_up) = self.execute(cmd, now) {
                        queue.push_back(follow_up);
                    }
                }
            }
        }
    }

    /// Fire every timer due at `now`. Returns how many fired.
    pub fn tick(&mut self, now: Instant) -> usize {
        let due = self.timers.take_due(now);
        let fired = due.len();
        for msg in due {
            self.dispatch_at(msg, now);
        }
        fired
    }

    /// When the next timer is due, if any
    pub fn next_deadline(&self) -> Option<Instant> {
        self.timers.next_deadline()
    }

    pub fn pending_timers(&self) -> usize {
        self.timers.len()
    }

    /// Compose the current frame
    pub fn frame(&self) -> OverlayFrame {
        compose(&self.model, &self.metrics, &self.theme)
    }

    fn execute(&mut self, cmd: Cmd, now: Instant) -> Option<Msg> {
        match cmd {
            Cmd::None | Cmd::Batch(_) => None,
            Cmd::NotifyChange(content) => {
                self.host.on_change(&content);
                None
            }
            Cmd::NotifyCursor(position) => {
                self.host.on_cursor_change(position);
                None
            }
            Cmd::NotifySelection(range) => {
                self.host.on_selection_change(range);
                None
            }
            Cmd::NotifyKeyPress(event) => {
                self.host.on_key_press(&event);
                None
            }
            Cmd::CopyToClipboard(text) => {
                let ok = match self.clipboard.set_text(&text) {
                    Ok(()) => {
                        tracing::debug!(chars = text.chars().count(), "copied to clipboard");
                        true
                    }
                    Err(e) => {
                        tracing::warn!("Clipboard copy failed: {}", e);
                        false
                    }
                };
                Some(Msg::Ui(UiMsg::CopyFinished { ok }))
            }
            Cmd::ScheduleTimer { delay, msg } => {
                let dismisses_hint = matches!(*msg, Msg::Ui(UiMsg::DismissHint(_)));
                if dismisses_hint {
                    if let Some(stale) = self.hint_timer.take() {
                        if self.timers.cancel(stale) {
                            tracing::trace!(?stale, "previous hint timer cancelled");
                        }
                    }
                }
                let id = self.timers.schedule(now, delay, *msg);
                if dismisses_hint {
                    self.hint_timer = Some(id);
                }
                None
            }
        }
    }
}

impl<H: SurfaceHost, C: Clipboard> Drop for Surface<H, C> {
    fn drop(&mut self) {
        let cancelled = self.timers.cancel_all();
        if cancelled > 0 {
            tracing::debug!(cancelled, "surface unmounted, timers cancelled");
        }
    }
}
