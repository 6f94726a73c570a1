//! Tracing setup and state-diff helpers for development diagnostics
//!
//! # Usage
//!
//! Configure via RUST_LOG environment variable:
//! - `RUST_LOG=debug` - all debug logs
//! - `RUST_LOG=selection=debug,message=debug` - scoped filtering
//! - `RUST_LOG=lesson_editor::syntax=trace` - module-level filtering
//!
//! # Log Files
//!
//! Logs are written to `~/.config/lesson-editor/logs/lesson-editor.log` with
//! daily rotation, at debug level.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

use crate::editable::Selection;
use crate::model::{InteractionState, SurfaceModel};

/// Initialize tracing subscriber with console and file logging
///
/// Console output respects RUST_LOG (default `warn`). Console output goes
/// to stderr so it never mixes with a rendered frame on stdout.
pub fn init() {
    let console_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    let console_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_line_number(true)
        .with_filter(console_filter);

    let file_layer = match crate::config_paths::ensure_logs_dir() {
        Ok(logs_dir) => {
            let file_appender = tracing_appender::rolling::daily(logs_dir, "lesson-editor.log");
            Some(
                fmt::layer()
                    .with_writer(file_appender)
                    .with_ansi(false)
                    .with_target(true)
                    .with_line_number(true)
                    .with_filter(EnvFilter::new("debug")),
            )
        }
        Err(e) => {
            eprintln!("Warning: Could not initialize file logging: {}", e);
            None
        }
    };

    // A second init (tests, embedding hosts) keeps the first subscriber.
    let _ = tracing_subscriber::registry()
        .with(console_layer)
        .with(file_layer)
        .try_init();
}

/// Lightweight snapshot of caret/selection state for diffing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionSnapshot {
    pub selection: Selection,
    pub caret: (usize, usize),
    pub interaction: InteractionState,
    pub revision: u64,
}

impl SelectionSnapshot {
    pub fn from_model(model: &SurfaceModel) -> Self {
        let caret = model.cursor();
        Self {
            selection: model.selection,
            caret: (caret.line, caret.column),
            interaction: model.interaction,
            revision: model.revision(),
        }
    }

    /// Generate a diff description between two snapshots
    pub fn diff(&self, other: &SelectionSnapshot) -> Option<String> {
        let mut changes = Vec::new();

        if self.revision != other.revision {
            changes.push(format!("content r{} → r{}", self.revision, other.revision));
        }
        if self.caret != other.caret {
            changes.push(format!(
                "caret ({},{}) → ({},{})",
                self.caret.0, self.caret.1, other.caret.0, other.caret.1
            ));
        }
        if self.selection.is_collapsed() != other.selection.is_collapsed() {
            let status = if other.selection.is_collapsed() {
                "cleared"
            } else {
                "active"
            };
            changes.push(format!("selection {}", status));
        } else if !other.selection.is_collapsed() && self.selection != other.selection {
            changes.push(format!(
                "selection {}..{} → {}..{}",
                self.selection.anchor,
                self.selection.focus,
                other.selection.anchor,
                other.selection.focus
            ));
        }
        if self.interaction != other.interaction {
            changes.push(format!("{:?} → {:?}", self.interaction, other.interaction));
        }

        if changes.is_empty() {
            None
        } else {
            Some(changes.join("; "))
        }
    }
}
