//! Pattern table for the code highlighter.
//!
//! A [`PatternTable`] is an ordered list of [`Pattern`]s, each pairing a
//! matching rule with a [`TokenKind`]. Order only matters for ties: when two
//! patterns match at the same offset, the one registered first wins.
//!
//! The regex engine has no look-ahead, so a rule that must be *followed* by
//! something (a function name before `(`, an object key before `:`) matches
//! the trailing context too and names the capture group to emit.
//!
//! Word boundaries in the built-in table are ASCII-only (`(?-u:\b)`), so a
//! keyword or number directly after a non-ASCII letter still highlights.

use std::ops::Range;

use regex::Regex;

use crate::error::PatternError;

/// Lexical category assigned to a highlighted fragment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    Comment,
    DoubleQuoted,
    SingleQuoted,
    Keyword,
    Literal,
    Number,
    FunctionName,
    Namespace,
    ObjectKey,
}

impl TokenKind {
    /// Stable lowercase name, used in errors and logs.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Comment => "comment",
            Self::DoubleQuoted => "double-quoted",
            Self::SingleQuoted => "single-quoted",
            Self::Keyword => "keyword",
            Self::Literal => "literal",
            Self::Number => "number",
            Self::FunctionName => "function",
            Self::Namespace => "namespace",
            Self::ObjectKey => "object-key",
        }
    }

    /// CSS class the page stylesheet colours this kind with.
    ///
    /// Both string kinds share one class.
    #[must_use]
    pub fn css_class(self) -> &'static str {
        match self {
            Self::Comment => "tok-comment",
            Self::DoubleQuoted | Self::SingleQuoted => "tok-string",
            Self::Keyword => "tok-keyword",
            Self::Literal => "tok-literal",
            Self::Number => "tok-number",
            Self::FunctionName => "tok-function",
            Self::Namespace => "tok-namespace",
            Self::ObjectKey => "tok-key",
        }
    }
}

/// One matching rule of the table.
#[derive(Debug, Clone)]
pub struct Pattern {
    kind: TokenKind,
    rule: Regex,
    group: usize,
}

impl Pattern {
    /// Compile a rule whose whole match is the emitted fragment.
    ///
    /// # Errors
    ///
    /// Returns [`PatternError::InvalidRule`] if `rule` does not compile.
    pub fn new(kind: TokenKind, rule: &str) -> Result<Self, PatternError> {
        Self::with_group(kind, rule, 0)
    }

    /// Compile a rule whose emitted fragment is capture group `group`.
    ///
    /// Text matched outside the group is context only and is left for the
    /// next tokenizer step.
    ///
    /// # Errors
    ///
    /// Returns [`PatternError::InvalidRule`] if `rule` does not compile, or
    /// [`PatternError::MissingGroup`] if it has no such group.
    pub fn with_group(kind: TokenKind, rule: &str, group: usize) -> Result<Self, PatternError> {
        let rule = Regex::new(rule).map_err(|source| PatternError::InvalidRule {
            kind: kind.name(),
            source,
        })?;
        if group >= rule.captures_len() {
            return Err(PatternError::MissingGroup {
                kind: kind.name(),
                group,
            });
        }
        Ok(Self { kind, rule, group })
    }

    #[must_use]
    pub fn kind(&self) -> TokenKind {
        self.kind
    }

    /// Byte range of the first non-empty match in `haystack`, if any.
    #[must_use]
    pub fn find(&self, haystack: &str) -> Option<Range<usize>> {
        if self.group == 0 {
            return self
                .rule
                .find_iter(haystack)
                .find(|m| !m.is_empty())
                .map(|m| m.range());
        }
        self.rule
            .captures_iter(haystack)
            .filter_map(|caps| caps.get(self.group))
            .find(|m| !m.is_empty())
            .map(|m| m.range())
    }
}

/// Ordered set of patterns searched by the tokenizer.
#[derive(Debug, Clone, Default)]
pub struct PatternTable {
    patterns: Vec<Pattern>,
}

impl PatternTable {
    #[must_use]
    pub fn new(patterns: Vec<Pattern>) -> Self {
        Self { patterns }
    }

    /// The table used for the JavaScript/JSON snippets on the landing page.
    ///
    /// # Errors
    ///
    /// Only fails if one of the built-in rules is malformed.
    pub fn javascript() -> Result<Self, PatternError> {
        Ok(Self::new(vec![
            Pattern::new(TokenKind::Comment, r"//[^\r\n\u{2028}\u{2029}]*")?,
            Pattern::new(TokenKind::DoubleQuoted, r#""[^"]*""#)?,
            Pattern::new(TokenKind::SingleQuoted, r"'[^']*'")?,
            Pattern::new(
                TokenKind::Keyword,
                r"(?-u:\b)(import|export|from|const|let|var|function|return|try|catch|throw|new|await|async|if|else|require)(?-u:\b)",
            )?,
            Pattern::new(TokenKind::Literal, r"(?-u:\b)(true|false|null|undefined)(?-u:\b)")?,
            Pattern::new(TokenKind::Number, r"(?-u:\b)[0-9]+(?-u:\b)")?,
            Pattern::with_group(
                TokenKind::FunctionName,
                r"(?-u:\b)(sign|verify|getStore|log|error)(?-u:\b)\s*\(",
                1,
            )?,
            Pattern::new(TokenKind::Namespace, r"(?-u:\b)(console)(?-u:\b)")?,
            Pattern::with_group(TokenKind::ObjectKey, r"([a-zA-Z_][a-zA-Z0-9_]*)\s*:", 1)?,
        ]))
    }

    /// Append a pattern with the lowest tie-break priority.
    pub fn push(&mut self, pattern: Pattern) {
        self.patterns.push(pattern);
    }

    pub fn iter(&self) -> impl Iterator<Item = &Pattern> {
        self.patterns.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn javascript_table_compiles_in_order() {
        let table = PatternTable::javascript().unwrap();
        let kinds: Vec<TokenKind> = table.iter().map(Pattern::kind).collect();
        assert_eq!(
            kinds,
            vec![
                TokenKind::Comment,
                TokenKind::DoubleQuoted,
                TokenKind::SingleQuoted,
                TokenKind::Keyword,
                TokenKind::Literal,
                TokenKind::Number,
                TokenKind::FunctionName,
                TokenKind::Namespace,
                TokenKind::ObjectKey,
            ]
        );
    }

    #[test]
    fn invalid_rule_is_reported_with_kind() {
        let err = Pattern::new(TokenKind::Number, r"[0-9").unwrap_err();
        assert!(matches!(err, PatternError::InvalidRule { kind: "number", .. }));
    }

    #[test]
    fn missing_group_is_rejected() {
        let err = Pattern::with_group(TokenKind::Keyword, r"const", 1).unwrap_err();
        assert!(matches!(err, PatternError::MissingGroup { group: 1, .. }));
    }

    #[test]
    fn group_rule_emits_only_the_group() {
        let p = Pattern::with_group(TokenKind::FunctionName, r"\b(sign)\b\s*\(", 1).unwrap();
        assert_eq!(p.find("x = sign ({})"), Some(4..8));
        assert_eq!(p.find("design()"), None);
        assert_eq!(p.find("sign is not called"), None);
    }

    #[test]
    fn object_key_requires_colon() {
        let table = PatternTable::javascript().unwrap();
        let key = table.iter().find(|p| p.kind() == TokenKind::ObjectKey).unwrap();
        assert_eq!(key.find("  userId: 1,"), Some(2..8));
        assert_eq!(key.find("store.get(id)"), None);
    }

    #[test]
    fn empty_matches_are_skipped() {
        let p = Pattern::new(TokenKind::Number, r"[0-9]*").unwrap();
        assert_eq!(p.find("ab12"), Some(2..4));
        assert_eq!(p.find("abc"), None);
    }

    #[test]
    fn word_boundaries_are_ascii_only() {
        let table = PatternTable::javascript().unwrap();
        let find = |kind: TokenKind, text: &str| {
            table.iter().find(|p| p.kind() == kind).unwrap().find(text)
        };
        assert_eq!(find(TokenKind::Number, "é42"), Some(2..4));
        assert_eq!(find(TokenKind::Keyword, "éconst x"), Some(2..7));
        assert_eq!(find(TokenKind::Keyword, "constant"), None);
    }

    #[test]
    fn comment_stops_at_carriage_return() {
        let table = PatternTable::javascript().unwrap();
        let comment = table.iter().find(|p| p.kind() == TokenKind::Comment).unwrap();
        assert_eq!(comment.find("x // a\rb"), Some(2..6));
        assert_eq!(comment.find("// to the end"), Some(0..13));
    }

    #[test]
    fn strings_share_a_css_class() {
        assert_eq!(
            TokenKind::DoubleQuoted.css_class(),
            TokenKind::SingleQuoted.css_class()
        );
    }
}
