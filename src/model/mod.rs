//! Surface model - the complete state of one editing surface
//!
//! Owned exclusively by a single surface and only changed through
//! `update`. The overlay frame is a pure projection of this state.

pub mod ui;

pub use ui::{Hint, HintKind, InteractionState, UiState};

use std::ops::Range;

use crate::config::SurfaceConfig;
use crate::editable::{position_to_offset, Position, Selection, SelectionRange, TextBuffer};
use crate::syntax::HighlightCache;

/// What the host has been told about. Compared before and after an update
/// to decide which callbacks fire.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Observed {
    pub revision: u64,
    pub cursor: Position,
    pub range: Option<SelectionRange>,
}

#[derive(Debug, Clone)]
pub struct SurfaceModel {
    pub config: SurfaceConfig,
    pub buffer: TextBuffer,
    /// Raw anchor/focus offsets, always within the buffer
    pub selection: Selection,
    /// Column vertical moves try to return to
    pub desired_column: Option<usize>,
    pub interaction: InteractionState,
    pub ui: UiState,
    pub highlights: HighlightCache,
    /// Bumped on every content mutation
    revision: u64,
}

impl SurfaceModel {
    pub fn new(config: SurfaceConfig) -> Self {
        let buffer = TextBuffer::from_text(&config.initial_content);
        let selection = initial_selection(&config, &buffer);
        let mut highlights = HighlightCache::new(config.language);
        highlights.refresh(&buffer);

        Self {
            config,
            buffer,
            selection,
            desired_column: None,
            interaction: InteractionState::Idle,
            ui: UiState::default(),
            highlights,
            revision: 0,
        }
    }

    pub fn is_read_only(&self) -> bool {
        self.config.read_only
    }

    pub fn content(&self) -> &str {
        self.buffer.content()
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Caret position (the selection focus)
    pub fn cursor(&self) -> Position {
        self.selection.caret(&self.buffer)
    }

    /// Normalized selection, `None` for a bare caret
    pub fn selection_range(&self) -> Option<SelectionRange> {
        self.selection.range(&self.buffer)
    }

    pub fn selected_text(&self) -> String {
        self.buffer
            .slice(self.selection.start()..self.selection.end())
    }

    /// What the copy button copies: the selection, or everything when
    /// nothing is selected
    pub fn copy_text(&self) -> String {
        if self.selection.is_collapsed() {
            self.buffer.content().to_string()
        } else {
            self.selected_text()
        }
    }

    pub fn observe(&self) -> Observed {
        Observed {
            revision: self.revision,
            cursor: self.cursor(),
            range: self.selection_range(),
        }
    }

    /// Set anchor/focus, clamped into the buffer
    pub fn set_selection(&mut self, selection: Selection) {
        self.selection = selection.clamped(&self.buffer);
    }

    /// Replace a character range and put a collapsed caret after the
    /// inserted text. Returns false when nothing changed.
    pub fn replace_range(&mut self, range: Range<usize>, text: &str) -> bool {
        let len = self.buffer.len_chars();
        let start = range.start.min(len);
        let end = range.end.clamp(start, len);
        if start == end && text.is_empty() {
            return false;
        }

        self.buffer.replace(start..end, text);
        self.selection = Selection::collapsed(start + text.chars().count());
        self.content_changed();
        true
    }

    /// Replace the whole content and selection at once. Returns whether the
    /// content itself changed.
    pub fn replace_content(&mut self, content: &str, selection: Selection) -> bool {
        let changed = self.buffer.content() != content;
        if changed {
            self.buffer.set_content(content);
            self.content_changed();
        }
        self.set_selection(selection);
        changed
    }

    /// Restore initial content, caret and selection
    pub fn reset(&mut self) {
        let initial = self.config.initial_content.clone();
        if self.buffer.content() != initial {
            self.buffer.set_content(&initial);
            self.content_changed();
        }
        self.selection = initial_selection(&self.config, &self.buffer);
        self.desired_column = None;
        self.interaction = InteractionState::Idle;
    }

    fn content_changed(&mut self) {
        self.revision += 1;
        self.desired_column = None;
        self.highlights.refresh(&self.buffer);
    }
}

/// Initial selection wins over initial cursor position; both are clamped
fn initial_selection(config: &SurfaceConfig, buffer: &TextBuffer) -> Selection {
    if let Some(range) = &config.initial_selection {
        let (start, end) = range.clamped(buffer).to_offsets(buffer);
        return Selection::new(start, end);
    }
    let caret = config
        .initial_cursor_position
        .map_or(0, |pos| position_to_offset(buffer, pos));
    Selection::collapsed(caret)
}
