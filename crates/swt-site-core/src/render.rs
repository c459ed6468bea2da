//! Code renderer.
//!
//! Runs a multi-line sample through the tokenizer line by line and turns the
//! result into numbered rows for display.

use std::fmt::Write as _;

use crate::pattern::PatternTable;
use crate::tokenizer::{Fragment, FragmentClass, tokenize_line};

/// One tokenized line of a code sample.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line<'a> {
    /// 0-based position in the sample.
    pub index: usize,
    pub fragments: Vec<Fragment<'a>>,
}

impl Line<'_> {
    /// 1-based number shown in the gutter.
    #[must_use]
    pub fn number(&self) -> usize {
        self.index.saturating_add(1)
    }
}

/// Tokenize every line of `code`.
///
/// Lines are split on `\n`; a `\r` left at the end of a line is dropped.
/// Deterministic and side-effect free.
#[must_use]
pub fn render_code<'a>(code: &'a str, table: &PatternTable) -> Vec<Line<'a>> {
    code.split('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line))
        .enumerate()
        .map(|(index, line)| Line {
            index,
            fragments: tokenize_line(line, table),
        })
        .collect()
}

/// Render tokenized lines as HTML rows.
///
/// Each row is a `div.code-row` holding a `span.code-ln` gutter and a
/// `span.code-text` with one `span` per fragment. Text is escaped.
#[must_use]
pub fn render_html(lines: &[Line<'_>]) -> String {
    let mut html = String::with_capacity(lines.len().saturating_mul(96));
    for line in lines {
        let _ = write!(
            html,
            r#"<div class="code-row"><span class="code-ln">{}</span><span class="code-text">"#,
            line.number()
        );
        for fragment in &line.fragments {
            html.push_str(r#"<span class=""#);
            html.push_str(fragment.class.css_class());
            html.push_str(r#"">"#);
            if fragment.class == FragmentClass::Blank {
                html.push_str("&nbsp;");
            } else {
                html.push_str(&escape_html(fragment.text));
            }
            html.push_str("</span>");
        }
        html.push_str("</span></div>\n");
    }
    html
}

/// Escape text for use in HTML element content and quoted attributes.
#[must_use]
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
