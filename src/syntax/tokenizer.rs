//! Rule-based line tokenizer.
//!
//! Scans a line left to right. At each step every rule proposes its next
//! match at or after the scan position; the leftmost proposal wins, ties go
//! to the rule declared first. Unmatched gaps become plain tokens, so the
//! token texts always concatenate back to the input line.

use std::ops::Range;

use super::highlights::Token;
use super::languages::LanguageId;
use super::rules::{compiled_rules, CompiledRule};

/// Tokenize one line.
///
/// Always returns at least one token. Languages without rules yield the
/// whole line as a single plain token.
pub fn tokenize(line: &str, language: LanguageId) -> Vec<Token> {
    if !language.has_highlighting() || line.is_empty() {
        return vec![Token::plain(line)];
    }
    let rules = compiled_rules(language);

    let mut scanners: Vec<RuleScanner<'_>> = rules
        .iter()
        .map(|rule| RuleScanner::new(rule, line))
        .collect();

    let mut tokens = Vec::new();
    let mut pos = 0;

    loop {
        let best = scanners
            .iter_mut()
            .enumerate()
            .filter_map(|(idx, scanner)| scanner.next_at_or_after(pos).map(|span| (span, idx)))
            .min_by_key(|(span, idx)| (span.start, *idx));

        let Some((span, idx)) = best else {
            break;
        };

        if span.start > pos {
            tokens.push(Token::plain(&line[pos..span.start]));
        }
        tokens.push(Token::classified(&line[span.clone()], rules[idx].class));
        pos = span.end;
    }

    if pos < line.len() {
        tokens.push(Token::plain(&line[pos..]));
    }

    tokens
}

/// Tokenize with a raw language tag. Unknown tags fall back to plain text.
pub fn tokenize_tag(line: &str, tag: &str) -> Vec<Token> {
    tokenize(line, LanguageId::from_tag_or_plain(tag))
}

/// Yields one rule's candidate spans in position order.
///
/// Candidates come from two sources: matches found scanning the whole line
/// (so patterns anchored at `^` or needing context before the scan
/// position still fire) and a fresh search from the scan position (so a
/// match swallowed by an earlier token does not hide later ones).
struct RuleScanner<'a> {
    rule: &'a CompiledRule,
    line: &'a str,
    whole_line: Vec<Range<usize>>,
    cached: Option<Range<usize>>,
    cached_from: usize,
}

impl<'a> RuleScanner<'a> {
    fn new(rule: &'a CompiledRule, line: &'a str) -> Self {
        let whole_line = rule
            .regex
            .captures_iter(line)
            .filter_map(|caps| caps.get(rule.group))
            .filter(|m| !m.is_empty())
            .map(|m| m.range())
            .collect();
        Self {
            rule,
            line,
            whole_line,
            cached: None,
            cached_from: usize::MAX,
        }
    }

    fn next_at_or_after(&mut self, pos: usize) -> Option<Range<usize>> {
        // A cached candidate stays valid while the scan has not passed it.
        if self.cached_from <= pos {
            match &self.cached {
                Some(span) if span.start >= pos => return Some(span.clone()),
                None => return None,
                _ => {}
            }
        }

        let from_line = self.whole_line.iter().find(|s| s.start >= pos).cloned();
        let from_pos = self.search_from(pos);
        let next = match (from_line, from_pos) {
            (Some(a), Some(b)) => Some(if b.start < a.start { b } else { a }),
            (a, b) => a.or(b),
        };

        self.cached = next.clone();
        self.cached_from = pos;
        next
    }

    fn search_from(&self, pos: usize) -> Option<Range<usize>> {
        let mut at = pos;
        while at <= self.line.len() {
            let caps = self.rule.regex.captures_at(self.line, at)?;
            let whole = caps.get(0)?;
            if let Some(m) = caps.get(self.rule.group) {
                if !m.is_empty() && m.start() >= pos {
                    return Some(m.range());
                }
            }
            at = if whole.end() > at {
                whole.end()
            } else {
                next_char_boundary(self.line, at)
            };
        }
        None
    }
}

fn next_char_boundary(s: &str, at: usize) -> usize {
    s[at..]
        .chars()
        .next()
        .map_or(s.len() + 1, |c| at + c.len_utf8())
}
