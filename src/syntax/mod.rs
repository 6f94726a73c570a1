//! Syntax highlighting module
//!
//! Provides rule-based, per-line syntax highlighting with:
//! - Language detection from tags passed in by the lesson host
//! - Declarative `(pattern, classification)` rule tables per language
//! - A left-to-right tokenizer whose tokens always cover the line exactly
//! - A per-line cache so only changed lines are re-tokenized
//!
//! ## Supported Languages
//!
//! - JavaScript, TypeScript
//! - HTML, CSS
//! - JSON
//! - Markdown
//! - Plain text (no rules, one token per line)

mod highlights;
mod languages;
pub mod rules;
mod tokenizer;

pub use highlights::{HighlightCache, HighlightClass, LineTokens, Token};
pub use languages::LanguageId;
pub use tokenizer::{tokenize, tokenize_tag};
