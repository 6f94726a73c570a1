//! Language identification
//!
//! Maps the language tags a lesson host passes in to language IDs.

use serde::{Deserialize, Deserializer, Serialize};

/// Supported language identifiers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LanguageId {
    #[default]
    PlainText,
    JavaScript,
    TypeScript,
    Html,
    Css,
    Json,
    Markdown,
}

impl LanguageId {
    pub const ALL: &'static [LanguageId] = &[
        LanguageId::PlainText,
        LanguageId::JavaScript,
        LanguageId::TypeScript,
        LanguageId::Html,
        LanguageId::Css,
        LanguageId::Json,
        LanguageId::Markdown,
    ];

    /// Resolve a language tag (case-insensitive, common aliases accepted)
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag.trim().to_lowercase().as_str() {
            "plaintext" | "text" | "txt" | "plain" => Some(LanguageId::PlainText),
            "javascript" | "js" | "jsx" | "mjs" => Some(LanguageId::JavaScript),
            "typescript" | "ts" | "tsx" => Some(LanguageId::TypeScript),
            "html" | "htm" => Some(LanguageId::Html),
            "css" => Some(LanguageId::Css),
            "json" => Some(LanguageId::Json),
            "markdown" | "md" => Some(LanguageId::Markdown),
            _ => None,
        }
    }

    /// Resolve a tag, falling back to plain text for unknown tags
    pub fn from_tag_or_plain(tag: &str) -> Self {
        Self::from_tag(tag).unwrap_or_else(|| {
            tracing::warn!("Unknown language tag {:?}, highlighting as plain text", tag);
            LanguageId::PlainText
        })
    }

    /// Canonical tag
    pub fn tag(&self) -> &'static str {
        match self {
            LanguageId::PlainText => "plaintext",
            LanguageId::JavaScript => "javascript",
            LanguageId::TypeScript => "typescript",
            LanguageId::Html => "html",
            LanguageId::Css => "css",
            LanguageId::Json => "json",
            LanguageId::Markdown => "markdown",
        }
    }

    /// Get display name for the language
    pub fn display_name(&self) -> &'static str {
        match self {
            LanguageId::PlainText => "Plain Text",
            LanguageId::JavaScript => "JavaScript",
            LanguageId::TypeScript => "TypeScript",
            LanguageId::Html => "HTML",
            LanguageId::Css => "CSS",
            LanguageId::Json => "JSON",
            LanguageId::Markdown => "Markdown",
        }
    }

    /// Check if this language has syntax highlighting support
    pub fn has_highlighting(&self) -> bool {
        !matches!(self, LanguageId::PlainText)
    }
}

/// Unknown tags deserialize to plain text rather than failing the whole config
impl<'de> Deserialize<'de> for LanguageId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let tag = String::deserialize(deserializer)?;
        Ok(LanguageId::from_tag_or_plain(&tag))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_tag() {
        assert_eq!(LanguageId::from_tag("javascript"), Some(LanguageId::JavaScript));
        assert_eq!(LanguageId::from_tag("JS"), Some(LanguageId::JavaScript));
        assert_eq!(LanguageId::from_tag("ts"), Some(LanguageId::TypeScript));
        assert_eq!(LanguageId::from_tag("md"), Some(LanguageId::Markdown));
        assert_eq!(LanguageId::from_tag("plaintext"), Some(LanguageId::PlainText));
        assert_eq!(LanguageId::from_tag("cobol"), None);
    }

    #[test]
    fn test_unknown_tag_falls_back_to_plain() {
        assert_eq!(LanguageId::from_tag_or_plain("cobol"), LanguageId::PlainText);
    }

    #[test]
    fn test_tags_round_trip() {
        for lang in LanguageId::ALL {
            assert_eq!(LanguageId::from_tag(lang.tag()), Some(*lang));
        }
    }

    #[test]
    fn test_display_names_and_highlighting() {
        assert_eq!(LanguageId::Html.display_name(), "HTML");
        assert_eq!(LanguageId::PlainText.display_name(), "Plain Text");
        assert!(!LanguageId::PlainText.has_highlighting());
        for lang in &LanguageId::ALL[1..] {
            assert!(lang.has_highlighting(), "{:?}", lang);
        }
    }

    #[test]
    fn test_deserializes_from_lowercase_tag() {
        let lang: LanguageId = serde_json::from_str("\"typescript\"").unwrap();
        assert_eq!(lang, LanguageId::TypeScript);

        let alias: LanguageId = serde_json::from_str("\"js\"").unwrap();
        assert_eq!(alias, LanguageId::JavaScript);

        let unknown: LanguageId = serde_json::from_str("\"brainfuck\"").unwrap();
        assert_eq!(unknown, LanguageId::PlainText);
    }
}
