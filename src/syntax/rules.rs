//! Declarative rule tables, one per language.
//!
//! A rule is a regex plus the classification of the span it marks. When
//! `group` is non-zero only that capture group is classified; the rest of
//! the match is context (this stands in for look-around, which the regex
//! engine does not support). Adding a language is a data change here.

use std::collections::HashMap;
use std::sync::OnceLock;

use regex::Regex;

use super::highlights::HighlightClass;
use super::languages::LanguageId;

/// One `(pattern, classification)` entry
#[derive(Debug, Clone, Copy)]
pub struct Rule {
    pub pattern: &'static str,
    /// Capture group holding the classified span (0 = whole match)
    pub group: usize,
    pub class: HighlightClass,
}

const fn rule(pattern: &'static str, class: HighlightClass) -> Rule {
    Rule {
        pattern,
        group: 0,
        class,
    }
}

const fn capture(pattern: &'static str, group: usize, class: HighlightClass) -> Rule {
    Rule {
        pattern,
        group,
        class,
    }
}

use HighlightClass as C;

const JS_STRING: &str = r#""(?:[^"\\]|\\.)*"|'(?:[^'\\]|\\.)*'|`(?:[^`\\]|\\.)*`"#;
const JS_BUILTINS: &str = r"\b(?:true|false|null|undefined|NaN|Infinity)\b";
const NUMBER: &str = r"\b\d+(?:\.\d+)?\b";

pub const JAVASCRIPT_RULES: &[Rule] = &[
    rule(r"//.*", C::Comment),
    rule(r"/\*.*?\*/", C::Comment),
    rule(JS_STRING, C::String),
    rule(
        r"\b(?:const|let|var|function|return|if|else|for|while|class|import|export|from|default|async|await|new|this|typeof)\b",
        C::Keyword,
    ),
    rule(JS_BUILTINS, C::Builtin),
    rule(NUMBER, C::Number),
];

pub const TYPESCRIPT_RULES: &[Rule] = &[
    rule(r"//.*", C::Comment),
    rule(r"/\*.*?\*/", C::Comment),
    rule(JS_STRING, C::String),
    rule(
        r"\b(?:const|let|var|function|return|if|else|for|while|class|import|export|from|default|async|await|new|this|typeof|interface|type|extends|implements|enum|public|private|protected|readonly)\b",
        C::Keyword,
    ),
    rule(JS_BUILTINS, C::Builtin),
    rule(NUMBER, C::Number),
];

pub const HTML_RULES: &[Rule] = &[
    rule(r"<!--.*?-->", C::Comment),
    rule(r"</?[A-Za-z][\w-]*", C::Tag),
    rule(r"/?>", C::Tag),
    capture(r"([A-Za-z_:][\w:.-]*)\s*=", 1, C::Attribute),
    rule(r#""[^"]*"|'[^']*'"#, C::String),
];

pub const CSS_RULES: &[Rule] = &[
    rule(r"/\*.*?\*/", C::Comment),
    rule(r"@[\w-]+", C::Keyword),
    capture(r"^\s*([\w-]+)\s*:[^{]*$", 1, C::Property),
    capture(r"^\s*[\w-]+\s*:\s*([^;{}]*[^;{}\s])[^{]*$", 1, C::Value),
    rule(r"[.#][A-Za-z_][\w-]*", C::Selector),
    rule(r"\b\d+(?:\.\d+)?(?:px|em|rem|vh|vw|%|ms|s)?", C::Number),
];

pub const JSON_RULES: &[Rule] = &[
    capture(r#"("(?:[^"\\]|\\.)*")\s*:"#, 1, C::Property),
    rule(r#""(?:[^"\\]|\\.)*""#, C::String),
    rule(r"-?\b\d+(?:\.\d+)?(?:[eE][+-]?\d+)?\b", C::Number),
    rule(r"\b(?:true|false|null)\b", C::Builtin),
];

pub const MARKDOWN_RULES: &[Rule] = &[
    rule(r"^\s*```.*$", C::Codeblock),
    rule(r"^#{1,6}\s+.*$", C::Heading),
    rule(r"`[^`]+`", C::Code),
    rule(r"\[[^\]]*\]\([^)]*\)", C::Link),
    rule(
        r"\*\*[^*]+\*\*|\*[^*\s][^*]*\*|__[^_]+__|\b_[^_\s][^_]*_\b",
        C::Emphasis,
    ),
];

/// Rule table for a language (empty for plain text)
pub fn rules_for(language: LanguageId) -> &'static [Rule] {
    match language {
        LanguageId::PlainText => &[],
        LanguageId::JavaScript => JAVASCRIPT_RULES,
        LanguageId::TypeScript => TYPESCRIPT_RULES,
        LanguageId::Html => HTML_RULES,
        LanguageId::Css => CSS_RULES,
        LanguageId::Json => JSON_RULES,
        LanguageId::Markdown => MARKDOWN_RULES,
    }
}

/// A rule with its regex compiled
#[derive(Debug)]
pub struct CompiledRule {
    pub regex: Regex,
    pub group: usize,
    pub class: HighlightClass,
}

static COMPILED: OnceLock<HashMap<LanguageId, Vec<CompiledRule>>> = OnceLock::new();

/// Compiled rules for a language, built once per process.
///
/// A pattern that fails to compile is dropped with a warning; the remaining
/// rules still apply.
pub fn compiled_rules(language: LanguageId) -> &'static [CompiledRule] {
    let table = COMPILED.get_or_init(|| {
        LanguageId::ALL
            .iter()
            .map(|&lang| (lang, compile(rules_for(lang))))
            .collect()
    });
    table.get(&language).map(Vec::as_slice).unwrap_or(&[])
}

fn compile(rules: &[Rule]) -> Vec<CompiledRule> {
    rules
        .iter()
        .filter_map(|rule| match Regex::new(rule.pattern) {
            Ok(regex) if rule.group < regex.captures_len() => Some(CompiledRule {
                regex,
                group: rule.group,
                class: rule.class,
            }),
            Ok(_) => {
                tracing::warn!(
                    "Rule {:?} has no capture group {}, skipping",
                    rule.pattern,
                    rule.group
                );
                None
            }
            Err(e) => {
                tracing::warn!("Failed to compile rule {:?}: {}", rule.pattern, e);
                None
            }
        })
        .collect()
}
