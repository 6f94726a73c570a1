//! Runtime module - drives a surface for an embedding host
//!
//! - `surface` - the `Surface` driver and the `SurfaceHost` callback trait
//! - `clipboard` - clipboard abstraction with an arboard-backed default

pub mod clipboard;
pub mod surface;

pub use clipboard::{Clipboard, MemoryClipboard, SystemClipboard};
pub use surface::{Surface, SurfaceHost};
