//! Line tokenizer.
//!
//! Splits a single line into classified [`Fragment`]s. At each step every
//! pattern is searched in the unconsumed suffix and the match starting
//! earliest wins; ties go to the pattern registered first. Text before the
//! winning match becomes a [`FragmentClass::Plain`] fragment. When nothing
//! matches, the rest of the line is emitted as plain text.
//!
//! Fragments borrow from the input line and concatenate back to it exactly.

use crate::pattern::{PatternTable, TokenKind};

/// How a fragment is displayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FragmentClass {
    /// Text no pattern claimed.
    Plain,
    /// Stand-in for an empty line; rendered as a non-breaking space.
    Blank,
    /// Text claimed by a pattern.
    Token(TokenKind),
}

impl FragmentClass {
    #[must_use]
    pub fn css_class(self) -> &'static str {
        match self {
            Self::Plain | Self::Blank => "tok-plain",
            Self::Token(kind) => kind.css_class(),
        }
    }
}

/// A classified slice of one line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Fragment<'a> {
    pub text: &'a str,
    pub class: FragmentClass,
}

impl<'a> Fragment<'a> {
    #[must_use]
    pub fn plain(text: &'a str) -> Self {
        Self {
            text,
            class: FragmentClass::Plain,
        }
    }

    #[must_use]
    pub fn token(text: &'a str, kind: TokenKind) -> Self {
        Self {
            text,
            class: FragmentClass::Token(kind),
        }
    }

    #[must_use]
    pub fn blank() -> Self {
        Self {
            text: "",
            class: FragmentClass::Blank,
        }
    }
}

/// Tokenize one line against `table`.
///
/// Never returns an empty vector: an empty line yields a single
/// [`Fragment::blank`].
#[must_use]
pub fn tokenize_line<'a>(line: &'a str, table: &PatternTable) -> Vec<Fragment<'a>> {
    if line.is_empty() {
        return vec![Fragment::blank()];
    }

    let mut fragments = Vec::new();
    let mut rest = line;

    while !rest.is_empty() {
        let mut best: Option<(usize, usize, TokenKind)> = None;
        for pattern in table.iter() {
            if let Some(range) = pattern.find(rest) {
                // Strict `<` keeps the earlier pattern on ties.
                if best.is_none_or(|(start, _, _)| range.start < start) {
                    best = Some((range.start, range.end, pattern.kind()));
                }
            }
        }

        let Some((start, end, kind)) = best else {
            fragments.push(Fragment::plain(rest));
            break;
        };

        if start > 0 {
            fragments.push(Fragment::plain(&rest[..start]));
        }
        fragments.push(Fragment::token(&rest[start..end], kind));
        rest = &rest[end..];
    }

    fragments
}
