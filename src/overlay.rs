//! Render overlay: caret and selection geometry plus colored line strips
//!
//! Everything here is a pure projection of the surface model. A frame can
//! be recomputed from scratch after every update; nothing is cached.
//!
//! Geometry uses fixed monospace cell metrics. Selection widths are
//! character counts times the cell width, which is exact only for
//! monospace fonts.

use serde::Serialize;

use crate::editable::{HighlightRow, Position};
use crate::model::SurfaceModel;
use crate::syntax::{HighlightClass, Token};
use crate::theme::{Color, Theme};

/// Width of the line-number gutter when line numbers are on
pub const GUTTER_WIDTH_PX: f32 = 50.0;
/// Caret bar width
pub const CARET_WIDTH_PX: f32 = 2.0;

/// Monospace cell size and the padding around the code area
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CellMetrics {
    pub char_width: f32,
    pub line_height: f32,
    pub padding: f32,
}

impl Default for CellMetrics {
    /// 14px monospace at line-height 1.5 with 8px padding
    fn default() -> Self {
        Self {
            char_width: 8.4,
            line_height: 21.0,
            padding: 8.0,
        }
    }
}

impl CellMetrics {
    pub fn new(char_width: f32, line_height: f32, padding: f32) -> Self {
        Self {
            char_width,
            line_height,
            padding,
        }
    }

    /// Top edge of a line, padding included
    pub fn line_top(&self, line: usize) -> f32 {
        self.padding + line as f32 * self.line_height
    }

    /// Left edge of a column, padding included
    pub fn column_left(&self, column: usize) -> f32 {
        self.padding + column as f32 * self.char_width
    }
}

/// Axis-aligned rectangle in code-area pixels
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }
}

/// Caret bar at a position
pub fn caret_rect(metrics: &CellMetrics, position: Position) -> Rect {
    Rect::new(
        metrics.column_left(position.column),
        metrics.line_top(position.line),
        CARET_WIDTH_PX,
        metrics.line_height,
    )
}

/// One rectangle per selection row
pub fn selection_rects(metrics: &CellMetrics, rows: &[HighlightRow]) -> Vec<Rect> {
    rows.iter()
        .map(|row| {
            Rect::new(
                metrics.column_left(row.start_column),
                metrics.line_top(row.line),
                row.width as f32 * metrics.char_width,
                metrics.line_height,
            )
        })
        .collect()
}

/// A colored token in a line strip
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Span {
    /// Column of the first character
    pub column: usize,
    pub text: String,
    pub class: Option<HighlightClass>,
    pub color: Color,
}

/// One rendered line
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LineStrip {
    pub line: usize,
    /// One-based number shown in the gutter
    pub number: usize,
    pub top: f32,
    pub highlighted: bool,
    pub spans: Vec<Span>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Toolbar {
    /// Uppercase language name
    pub label: String,
    pub fullscreen: bool,
    pub background: Color,
    pub foreground: Color,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Gutter {
    pub width: f32,
    pub background: Color,
    pub foreground: Color,
    pub border: Color,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HintBubble {
    pub text: String,
    pub background: Color,
    pub foreground: Color,
}

/// Everything needed to paint one surface
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OverlayFrame {
    pub theme: String,
    pub width: String,
    pub height: String,
    pub fullscreen: bool,
    pub read_only: bool,
    pub metrics: CellMetrics,
    pub background: Color,
    pub foreground: Color,
    pub highlighted_line_background: Color,
    pub toolbar: Option<Toolbar>,
    pub gutter: Option<Gutter>,
    pub lines: Vec<LineStrip>,
    /// Caret position and bar; `None` with a selection or when read-only
    pub caret_position: Option<Position>,
    pub caret: Option<Rect>,
    pub caret_color: Color,
    /// Selection rows and rectangles; empty when read-only
    pub selection_rows: Vec<HighlightRow>,
    pub selection: Vec<Rect>,
    pub selection_color: Color,
    pub hint: Option<HintBubble>,
}

impl OverlayFrame {
    /// Left edge of the code area relative to the surface
    pub fn code_origin_x(&self) -> f32 {
        self.gutter.as_ref().map_or(0.0, |g| g.width)
    }
}

fn line_spans(tokens: &[Token], theme: &Theme) -> Vec<Span> {
    let mut column = 0;
    tokens
        .iter()
        .map(|token| {
            let span = Span {
                column,
                text: token.text.clone(),
                class: token.class,
                color: theme.token_color(token.class),
            };
            column += token.width();
            span
        })
        .collect()
}

/// Compose a frame from the model
pub fn compose(model: &SurfaceModel, metrics: &CellMetrics, theme: &Theme) -> OverlayFrame {
    let config = &model.config;
    let buffer = &model.buffer;

    let lines = (0..buffer.line_count())
        .map(|line| {
            let spans = match model.highlights.line(line) {
                Some(tokens) => line_spans(tokens, theme),
                None => {
                    // Cache is refreshed on every edit; keep coverage if not.
                    let text = buffer.line(line).unwrap_or_default();
                    line_spans(&[Token::plain(text)], theme)
                }
            };
            LineStrip {
                line,
                number: line + 1,
                top: metrics.line_top(line),
                highlighted: config.is_line_highlighted(line),
                spans,
            }
        })
        .collect();

    let range = model.selection_range();
    let (caret_position, selection_rows) = if config.read_only {
        (None, Vec::new())
    } else {
        match range {
            Some(range) => (None, range.rows(buffer)),
            None => (Some(model.cursor()), Vec::new()),
        }
    };

    let fullscreen = model.ui.fullscreen;
    let (width, height) = if fullscreen {
        ("100vw".to_string(), "100vh".to_string())
    } else {
        (config.width.to_string(), config.height.to_string())
    };

    OverlayFrame {
        theme: theme.name.clone(),
        width,
        height,
        fullscreen,
        read_only: config.read_only,
        metrics: *metrics,
        background: theme.editor.background,
        foreground: theme.editor.foreground,
        highlighted_line_background: theme.editor.highlighted_line_background,
        toolbar: config.show_toolbar.then(|| Toolbar {
            label: config.language.display_name().to_uppercase(),
            fullscreen,
            background: theme.toolbar.background,
            foreground: theme.toolbar.foreground,
        }),
        gutter: config.line_numbers.then(|| Gutter {
            width: GUTTER_WIDTH_PX,
            background: theme.gutter.background,
            foreground: theme.gutter.foreground,
            border: theme.gutter.border_color,
        }),
        lines,
        caret: caret_position.map(|pos| caret_rect(metrics, pos)),
        caret_position,
        caret_color: theme.editor.cursor_color,
        selection: selection_rects(metrics, &selection_rows),
        selection_rows,
        selection_color: theme.editor.selection_background,
        hint: model.ui.hint.map(|hint| HintBubble {
            text: hint.kind.label().to_string(),
            background: theme.hint.background,
            foreground: theme.hint.foreground,
        }),
    }
}
