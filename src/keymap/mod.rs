//! Key presses reported by the input surface
//!
//! Key presses carry the DOM-style key name plus modifier state. The
//! surface forwards every key press to the lesson host unchanged, then
//! applies its own default action for editing and navigation keys.
//!
//! Key strings such as `"Ctrl+Shift+ArrowLeft"` can be parsed with
//! [`parse_key_string`] for scripted input.

mod parse;
mod types;

pub use parse::{parse_key_sequence, parse_key_string, KeyParseError};
pub use types::{KeyCode, KeyPress, KeyPressEvent, Modifiers};
