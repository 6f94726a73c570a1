//! Shared test helpers for integration tests
//!
//! Note: Functions may appear unused because each test file compiles separately.

#![allow(dead_code)]

use lesson_editor::config::SurfaceConfig;
use lesson_editor::editable::{Position, Selection, SelectionRange};
use lesson_editor::keymap::{parse_key_string, KeyPressEvent};
use lesson_editor::messages::Msg;
use lesson_editor::model::SurfaceModel;
use lesson_editor::runtime::{Clipboard, MemoryClipboard, Surface, SurfaceHost};
use lesson_editor::syntax::LanguageId;
use lesson_editor::theme::{EditorThemeMode, Theme};

/// Plain-text model with a collapsed caret at `offset`
pub fn test_model(text: &str, offset: usize) -> SurfaceModel {
    test_model_with_selection(text, offset, offset)
}

/// Plain-text model with an anchor/focus selection
pub fn test_model_with_selection(text: &str, anchor: usize, focus: usize) -> SurfaceModel {
    let mut model = SurfaceModel::new(SurfaceConfig::with_content(text, LanguageId::PlainText));
    model.set_selection(Selection::new(anchor, focus));
    model
}

/// Key message from a key string, panicking on a bad string
pub fn key(s: &str) -> Msg {
    Msg::key(parse_key_string(s).expect("valid key string"))
}

/// Every host callback, in order
#[derive(Debug, Clone, PartialEq)]
pub enum HostEvent {
    Change(String),
    Cursor(Position),
    Selection(Option<SelectionRange>),
    Key(KeyPressEvent),
}

/// Host that records callbacks
#[derive(Debug, Default)]
pub struct RecordingHost {
    pub events: Vec<HostEvent>,
    pub dark: bool,
}

impl RecordingHost {
    pub fn changes(&self) -> Vec<&str> {
        self.events
            .iter()
            .filter_map(|e| match e {
                HostEvent::Change(s) => Some(s.as_str()),
                _ => None,
            })
            .collect()
    }

    pub fn cursors(&self) -> Vec<Position> {
        self.events
            .iter()
            .filter_map(|e| match e {
                HostEvent::Cursor(p) => Some(*p),
                _ => None,
            })
            .collect()
    }

    pub fn selections(&self) -> Vec<Option<SelectionRange>> {
        self.events
            .iter()
            .filter_map(|e| match e {
                HostEvent::Selection(r) => Some(*r),
                _ => None,
            })
            .collect()
    }

    pub fn keys(&self) -> Vec<&str> {
        self.events
            .iter()
            .filter_map(|e| match e {
                HostEvent::Key(k) => Some(k.key.as_str()),
                _ => None,
            })
            .collect()
    }
}

impl SurfaceHost for RecordingHost {
    fn on_change(&mut self, content: &str) {
        self.events.push(HostEvent::Change(content.to_string()));
    }

    fn on_cursor_change(&mut self, position: Position) {
        self.events.push(HostEvent::Cursor(position));
    }

    fn on_selection_change(&mut self, range: Option<SelectionRange>) {
        self.events.push(HostEvent::Selection(range));
    }

    fn on_key_press(&mut self, event: &KeyPressEvent) {
        self.events.push(HostEvent::Key(event.clone()));
    }

    fn prefers_dark_scheme(&self) -> bool {
        self.dark
    }
}

/// Clipboard that always fails
#[derive(Debug, Default)]
pub struct FailingClipboard;

impl Clipboard for FailingClipboard {
    fn set_text(&mut self, _text: &str) -> Result<(), String> {
        Err("clipboard unavailable".to_string())
    }
}

/// Config with an explicit light theme, so user theme files do not matter
pub fn light_config(text: &str, language: LanguageId) -> SurfaceConfig {
    SurfaceConfig {
        theme: EditorThemeMode::Light,
        ..SurfaceConfig::with_content(text, language)
    }
}

/// Surface over a recording host and an in-memory clipboard
pub fn test_surface(config: SurfaceConfig) -> Surface<RecordingHost, MemoryClipboard> {
    Surface::new(config, RecordingHost::default(), MemoryClipboard::default())
        .with_theme(Theme::default_light())
}
