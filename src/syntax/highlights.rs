//! Highlight data structures
//!
//! Defines tokens, their classifications, and the per-line token cache.

use std::collections::HashMap;
use std::rc::Rc;

use serde::Serialize;

use super::languages::LanguageId;
use super::tokenizer::tokenize;
use crate::editable::TextBuffer;

/// Classification attached to a matched span.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum HighlightClass {
    Comment,
    Keyword,
    Builtin,
    String,
    Number,
    Tag,
    Attribute,
    Selector,
    Property,
    Value,
    Heading,
    Emphasis,
    Link,
    Code,
    Codeblock,
}

impl HighlightClass {
    pub const ALL: &'static [HighlightClass] = &[
        HighlightClass::Comment,
        HighlightClass::Keyword,
        HighlightClass::Builtin,
        HighlightClass::String,
        HighlightClass::Number,
        HighlightClass::Tag,
        HighlightClass::Attribute,
        HighlightClass::Selector,
        HighlightClass::Property,
        HighlightClass::Value,
        HighlightClass::Heading,
        HighlightClass::Emphasis,
        HighlightClass::Link,
        HighlightClass::Code,
        HighlightClass::Codeblock,
    ];

    /// Name used in themes and serialized frames
    pub fn name(self) -> &'static str {
        match self {
            HighlightClass::Comment => "comment",
            HighlightClass::Keyword => "keyword",
            HighlightClass::Builtin => "builtin",
            HighlightClass::String => "string",
            HighlightClass::Number => "number",
            HighlightClass::Tag => "tag",
            HighlightClass::Attribute => "attribute",
            HighlightClass::Selector => "selector",
            HighlightClass::Property => "property",
            HighlightClass::Value => "value",
            HighlightClass::Heading => "heading",
            HighlightClass::Emphasis => "emphasis",
            HighlightClass::Link => "link",
            HighlightClass::Code => "code",
            HighlightClass::Codeblock => "codeblock",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|c| c.name() == name)
    }
}

/// A contiguous span of one line. `None` classification means plain text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Token {
    pub text: String,
    pub class: Option<HighlightClass>,
}

impl Token {
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            class: None,
        }
    }

    pub fn classified(text: impl Into<String>, class: HighlightClass) -> Self {
        Self {
            text: text.into(),
            class: Some(class),
        }
    }

    /// Width in columns (characters)
    pub fn width(&self) -> usize {
        self.text.chars().count()
    }
}

/// Shared, immutable token list for one line
pub type LineTokens = Rc<[Token]>;

/// Per-line token memoization.
///
/// Tokenization is a pure function of `(line text, language)`, so entries
/// are keyed by the line text itself. Inserting or removing lines above a
/// line does not force it to be re-tokenized; only lines whose text changed
/// are.
#[derive(Debug, Clone, Default)]
pub struct HighlightCache {
    language: LanguageId,
    entries: HashMap<String, LineTokens>,
    lines: Vec<LineTokens>,
}

impl HighlightCache {
    pub fn new(language: LanguageId) -> Self {
        Self {
            language,
            entries: HashMap::new(),
            lines: Vec::new(),
        }
    }

    pub fn language(&self) -> LanguageId {
        self.language
    }

    /// Switch language, dropping every cached entry
    pub fn set_language(&mut self, language: LanguageId) {
        if self.language != language {
            self.language = language;
            self.entries.clear();
            self.lines.clear();
        }
    }

    /// Bring the cache in line with the buffer.
    ///
    /// Returns the number of lines that had to be tokenized. Entries for text
    /// no longer present in the buffer are evicted.
    pub fn refresh(&mut self, buffer: &TextBuffer) -> usize {
        let mut previous = std::mem::take(&mut self.entries);
        let mut tokenized = 0;
        let mut lines = Vec::with_capacity(buffer.line_count());

        for text in buffer.lines() {
            let tokens = if let Some(tokens) = self.entries.get(text) {
                tokens.clone()
            } else if let Some(tokens) = previous.remove(text) {
                self.entries.insert(text.clone(), tokens.clone());
                tokens
            } else {
                tokenized += 1;
                let tokens: LineTokens = tokenize(text, self.language).into();
                self.entries.insert(text.clone(), tokens.clone());
                tokens
            };
            lines.push(tokens);
        }

        self.lines = lines;
        if tokenized > 0 {
            tracing::trace!(
                tokenized,
                cached = self.entries.len(),
                "highlight cache refreshed"
            );
        }
        tokenized
    }

    /// Tokens for a line as of the last refresh
    pub fn line(&self, line: usize) -> Option<&LineTokens> {
        self.lines.get(line)
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_width_counts_chars() {
        assert_eq!(Token::plain("").width(), 0);
        assert_eq!(Token::classified("\"日本\"", HighlightClass::String).width(), 4);
    }

    #[test]
    fn test_class_names_round_trip() {
        for class in HighlightClass::ALL {
            assert_eq!(HighlightClass::from_name(class.name()), Some(*class));
        }
        assert_eq!(HighlightClass::from_name("nope"), None);
    }

    #[test]
    fn test_cache_only_tokenizes_changed_lines() {
        let mut cache = HighlightCache::new(LanguageId::JavaScript);
        let mut buf = TextBuffer::from_text("const a = 1;\nlet b = 2;\nreturn a;");
        assert_eq!(cache.refresh(&buf), 3);
        assert_eq!(cache.refresh(&buf), 0);

        // Edit the middle line only
        buf.replace(13..23, "let b = 3;");
        assert_eq!(cache.refresh(&buf), 1);
        assert_eq!(cache.len(), 3);
    }

    #[test]
    fn test_cache_survives_line_insertion_above() {
        let mut cache = HighlightCache::new(LanguageId::JavaScript);
        let mut buf = TextBuffer::from_text("const a = 1;\nlet b = 2;");
        cache.refresh(&buf);

        buf.insert(0, "\n");
        // Only the new empty line is tokenized
        assert_eq!(cache.refresh(&buf), 1);
        assert_eq!(cache.line(1).unwrap()[0].text, "const");
    }

    #[test]
    fn test_language_switch_clears_cache() {
        let mut cache = HighlightCache::new(LanguageId::JavaScript);
        let buf = TextBuffer::from_text("const a = 1;");
        cache.refresh(&buf);
        cache.set_language(LanguageId::PlainText);
        assert!(cache.is_empty());
        assert_eq!(cache.refresh(&buf), 1);
        assert_eq!(cache.line(0).unwrap().len(), 1);
    }
}
