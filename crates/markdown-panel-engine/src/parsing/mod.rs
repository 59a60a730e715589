//! # Parsing
//!
//! Raw Markdown lines in, classified lines with inline spans out.
//!
//! ```text
//! Rope -> lines_of -> RawLine -> DocumentClassifier -> ClassifiedLine
//!                                                        |
//!                                    (prose kinds only)  v
//!                                                    tokenize -> Vec<Span>
//! ```
//!
//! Everything here is pure and synchronous; each call owns its input and
//! output, so independent lines or documents can be parsed from any thread.

pub mod blocks;
pub mod inline;
pub mod lines;
pub mod range;
pub mod snapshot;

#[cfg(test)]
mod tests;

use serde::Serialize;
use xi_rope::Rope;

use blocks::{ClassifiedLine, DocumentClassifier};
use inline::Span;
use lines::lines_of;

/// A classified line together with its inline spans.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParsedLine {
    pub line: ClassifiedLine,
    /// Empty unless the line's kind carries prose.
    pub spans: Vec<Span>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ParsedDoc {
    pub lines: Vec<ParsedLine>,
}

impl ParsedDoc {
    pub fn from_markdown(md: &str) -> Self {
        parse_document(&Rope::from(md))
    }
}

pub fn parse_document(rope: &Rope) -> ParsedDoc {
    let mut classifier = DocumentClassifier::new();
    let lines = lines_of(rope)
        .map(|raw| {
            let line = classifier.push(&raw);
            let spans = parse_inline_for_line(&line);
            ParsedLine { line, spans }
        })
        .collect();
    classifier.finish();

    ParsedDoc { lines }
}

/// Inline spans for a classified line; empty for kinds without prose.
pub fn parse_inline_for_line(line: &ClassifiedLine) -> Vec<Span> {
    if !line.kind.carries_prose() {
        return vec![];
    }
    inline::tokenize(&line.content)
}
