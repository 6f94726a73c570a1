//! Terminal and JSON presentation of a composed frame
//!
//! The ANSI renderer paints one terminal cell per character using 24-bit
//! colors. It reads only the frame, never the model.

use std::fmt::Write as _;

use anyhow::{Context, Result};

use crate::editable::HighlightRow;
use crate::overlay::{LineStrip, OverlayFrame};
use crate::theme::Color;

const RESET: &str = "\x1b[0m";

fn fg(color: Color) -> String {
    format!("\x1b[38;2;{};{};{}m", color.r, color.g, color.b)
}

fn bg(color: Color) -> String {
    format!("\x1b[48;2;{};{};{}m", color.r, color.g, color.b)
}

/// Frame as pretty-printed JSON
pub fn render_json(frame: &OverlayFrame) -> Result<String> {
    serde_json::to_string_pretty(frame).context("Failed to serialize frame")
}

/// Frame as ANSI-colored terminal text, one row per line
pub fn render_ansi(frame: &OverlayFrame) -> String {
    let mut out = String::new();

    if let Some(toolbar) = &frame.toolbar {
        let mut label = format!(" {} ", toolbar.label);
        if toolbar.fullscreen {
            label.push_str("[fullscreen] ");
        }
        let _ = write!(
            out,
            "{}{}{}{}",
            bg(toolbar.background),
            fg(toolbar.foreground),
            label,
            RESET
        );
        if let Some(hint) = &frame.hint {
            let _ = write!(
                out,
                " {}{} {} {}",
                bg(hint.background),
                fg(hint.foreground),
                hint.text,
                RESET
            );
        }
        out.push('\n');
    } else if let Some(hint) = &frame.hint {
        let _ = writeln!(
            out,
            "{}{} {} {}",
            bg(hint.background),
            fg(hint.foreground),
            hint.text,
            RESET
        );
    }

    for strip in &frame.lines {
        render_line(&mut out, frame, strip);
        out.push('\n');
    }

    out
}

fn render_line(out: &mut String, frame: &OverlayFrame, strip: &LineStrip) {
    if let Some(gutter) = &frame.gutter {
        let _ = write!(
            out,
            "{}{}{:>4} {}",
            bg(gutter.background),
            fg(gutter.foreground),
            strip.number,
            RESET
        );
    }

    let line_bg = if strip.highlighted {
        frame.highlighted_line_background.over(frame.background)
    } else {
        frame.background
    };
    let selected_bg = frame.selection_color.over(line_bg);
    let row: Option<&HighlightRow> = frame
        .selection_rows
        .iter()
        .find(|row| row.line == strip.line);
    let caret_column = frame
        .caret_position
        .filter(|pos| pos.line == strip.line)
        .map(|pos| pos.column);

    let mut current_style = String::new();
    let mut column = 0;
    for span in &strip.spans {
        for ch in span.text.chars() {
            let selected =
                row.is_some_and(|r| column >= r.start_column && column < r.end_column());
            let style = if caret_column == Some(column) {
                format!("{}{}", bg(frame.caret_color), fg(frame.background))
            } else {
                let cell_bg = if selected { selected_bg } else { line_bg };
                format!("{}{}", bg(cell_bg), fg(span.color))
            };
            if style != current_style {
                out.push_str(&style);
                current_style = style;
            }
            out.push(ch);
            column += 1;
        }
    }

    if caret_column == Some(column) {
        let _ = write!(out, "{} ", bg(frame.caret_color));
    }
    out.push_str(RESET);
}

/// Remove ANSI escape sequences, leaving the visible text
pub fn strip_ansi(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut chars = s.chars().peekable();
    while let Some(c) = chars.next() {
        if c == '\x1b' && chars.peek() == Some(&'[') {
            for c in chars.by_ref() {
                if c.is_ascii_alphabetic() {
                    break;
                }
            }
        } else {
            out.push(c);
        }
    }
    out
}
