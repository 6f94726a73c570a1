//! Lesson Editor - Elm-style simulated code-editing surface
//!
//! This crate provides the core types and logic for the editing surface a
//! keyboard-shortcut lesson embeds: a text buffer with offset/position
//! mapping, anchor/focus selection, rule-based syntax highlighting, and a
//! render overlay for the caret and selection.

pub mod cli;
pub mod commands;
pub mod config;
pub mod config_paths;
pub mod editable;
pub mod input;
pub mod keymap;
pub mod messages;
pub mod model;
pub mod overlay;
pub mod runtime;
pub mod syntax;
pub mod theme;
pub mod timers;
pub mod tracing;
pub mod update;
pub mod view;

// Re-export commonly used types
pub use commands::Cmd;
pub use config::SurfaceConfig;
pub use messages::Msg;
pub use model::SurfaceModel;
pub use overlay::OverlayFrame;
pub use runtime::{Surface, SurfaceHost};
pub use theme::Theme;
