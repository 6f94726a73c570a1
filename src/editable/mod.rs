//! Text model for the simulated editing surface.
//!
//! The input surface only exposes flat character offsets, while everything
//! the lesson host sees is expressed in line/column coordinates. This
//! module holds the pieces that bridge the two:
//!
//! - [`TextBuffer`]: content string plus its line decomposition
//! - [`offset_to_position`] / [`position_to_offset`]: the coordinate mapper
//! - [`Selection`]: raw anchor/focus offsets from the input surface
//! - [`SelectionRange`]: the normalized, forward range handed downstream
//! - [`HighlightRow`]: per-line pieces of a range for rectangle rendering
//!
//! # Example
//!
//! ```
//! use lesson_editor::editable::{Selection, TextBuffer, HighlightRow};
//!
//! let buffer = TextBuffer::from_text("abc\ndef\nghi");
//! // User dragged from offset 10 back to offset 1
//! let range = Selection::new(10, 1).range(&buffer).unwrap();
//! let rows = range.rows(&buffer);
//! assert_eq!(rows[0], HighlightRow { line: 0, start_column: 1, width: 2 });
//! assert_eq!(rows.len(), 3);
//! ```

mod buffer;
mod coords;
mod cursor;
mod selection;

pub use buffer::TextBuffer;
pub use coords::{clamp_position, end_position, offset_to_position, position_to_offset};
pub use cursor::Position;
pub use selection::{resolve_selection, HighlightRow, Selection, SelectionRange};
