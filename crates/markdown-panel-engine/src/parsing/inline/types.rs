use std::fmt;

use serde::Serialize;

use crate::parsing::range::TextRange;

/// What an inline span is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum SpanKind {
    Text,
    Link,
    Image,
    Bold,
    Italics,
    BoldItalics,
    Highlight,
}

impl fmt::Display for SpanKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            SpanKind::Text => "TEXT",
            SpanKind::Link => "LINK",
            SpanKind::Image => "IMAGE",
            SpanKind::Bold => "BOLD",
            SpanKind::Italics => "ITALICS",
            SpanKind::BoldItalics => "BOLD_ITALICS",
            SpanKind::Highlight => "HIGHLIGHT",
        })
    }
}

/// A typed, range-tagged piece of a line's content.
///
/// `range` covers the whole construct including delimiters; `text` is what a
/// renderer displays (the literal for [`SpanKind::Text`], the inner text for
/// tagged kinds).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Span {
    pub range: TextRange,
    pub text: Option<String>,
    pub url: Option<String>,
    /// Image title from `![alt](url "title")`.
    pub title: Option<String>,
    pub kind: SpanKind,
}

impl Span {
    pub fn text(range: TextRange, literal: &str) -> Self {
        Self::tagged(SpanKind::Text, range, Some(literal.to_string()), None)
    }

    pub fn tagged(kind: SpanKind, range: TextRange, text: Option<String>, url: Option<String>) -> Self {
        Self {
            range,
            text,
            url,
            title: None,
            kind,
        }
    }

    #[must_use]
    pub fn with_title(mut self, title: Option<String>) -> Self {
        self.title = title;
        self
    }

    #[must_use]
    pub fn shifted(mut self, offset: usize) -> Self {
        self.range = self.range.shifted(offset);
        self
    }
}

/// Working element of the tokenizer: either still-literal text awaiting later
/// passes, or a span some pass already claimed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Fragment<'a> {
    Literal {
        /// Byte offset of `text` within the tokenized content.
        offset: usize,
        text: &'a str,
    },
    Tagged(Span),
}

impl Fragment<'_> {
    /// Terminal conversion: leftover literals become [`SpanKind::Text`] spans.
    pub fn into_span(self) -> Span {
        match self {
            Fragment::Literal { offset, text } => {
                Span::text(TextRange::new(offset, offset + text.len()), text)
            }
            Fragment::Tagged(span) => span,
        }
    }
}
