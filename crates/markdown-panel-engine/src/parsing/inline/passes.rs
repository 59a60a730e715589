use std::sync::OnceLock;

use regex::{Captures, Regex};

use crate::parsing::range::TextRange;

use super::{
    kinds::{Emphasis, Highlight, Image, Link},
    types::{Span, SpanKind},
};

/// One inline pattern, applied across every still-literal fragment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InlinePass {
    Image,
    BracketLink,
    AngleLink,
    BoldItalics,
    Bold,
    Italics,
    Highlight,
}

impl InlinePass {
    /// Pass order. Image before link (an image starts with link brackets),
    /// links before emphasis (urls contain `_` and `*`), and emphasis from
    /// the longest delimiter down.
    pub const ORDER: [InlinePass; 7] = [
        InlinePass::Image,
        InlinePass::BracketLink,
        InlinePass::AngleLink,
        InlinePass::BoldItalics,
        InlinePass::Bold,
        InlinePass::Italics,
        InlinePass::Highlight,
    ];

    pub fn regex(self) -> &'static Regex {
        static IMAGE: OnceLock<Regex> = OnceLock::new();
        static BRACKET_LINK: OnceLock<Regex> = OnceLock::new();
        static ANGLE_LINK: OnceLock<Regex> = OnceLock::new();
        static BOLD_ITALICS: OnceLock<Regex> = OnceLock::new();
        static BOLD: OnceLock<Regex> = OnceLock::new();
        static ITALICS: OnceLock<Regex> = OnceLock::new();
        static HIGHLIGHT: OnceLock<Regex> = OnceLock::new();

        let (cell, pattern) = match self {
            InlinePass::Image => (&IMAGE, Image::PATTERN),
            InlinePass::BracketLink => (&BRACKET_LINK, Link::BRACKET_PATTERN),
            InlinePass::AngleLink => (&ANGLE_LINK, Link::ANGLE_PATTERN),
            InlinePass::BoldItalics => (&BOLD_ITALICS, Emphasis::BOLD_ITALICS_PATTERN),
            InlinePass::Bold => (&BOLD, Emphasis::BOLD_PATTERN),
            InlinePass::Italics => (&ITALICS, Emphasis::ITALICS_PATTERN),
            InlinePass::Highlight => (&HIGHLIGHT, Highlight::PATTERN),
        };
        cell.get_or_init(|| Regex::new(pattern).expect("Invalid inline regex"))
    }

    pub fn kind(self) -> SpanKind {
        match self {
            InlinePass::Image => SpanKind::Image,
            InlinePass::BracketLink | InlinePass::AngleLink => SpanKind::Link,
            InlinePass::BoldItalics => SpanKind::BoldItalics,
            InlinePass::Bold => SpanKind::Bold,
            InlinePass::Italics => SpanKind::Italics,
            InlinePass::Highlight => SpanKind::Highlight,
        }
    }

    /// Cheap check whether the pass can match anywhere in `text`.
    pub fn may_match(self, text: &str) -> bool {
        self.regex().is_match(text)
    }

    /// All non-overlapping matches in `text`, left to right, with ranges
    /// relative to `text`.
    ///
    /// A match the pass rejects (an `alt…` bracket name) does not consume
    /// input; scanning resumes one char after where it started.
    pub fn find_spans(self, text: &str) -> Vec<Span> {
        let re = self.regex();
        let mut spans = vec![];
        let mut at = 0;

        while at <= text.len() {
            let Some(caps) = re.captures_at(text, at) else {
                break;
            };
            let Some(whole) = caps.get(0) else {
                break;
            };
            match self.build(&caps, whole.range().into()) {
                Some(span) => {
                    spans.push(span);
                    at = whole.end();
                }
                None => {
                    at = whole.start() + text[whole.start()..].chars().next().map_or(1, char::len_utf8);
                }
            }
        }
        spans
    }

    fn build(self, caps: &Captures<'_>, range: TextRange) -> Option<Span> {
        let group = |i: usize| caps.get(i).map(|m| m.as_str().to_string());
        let span = match self {
            InlinePass::Image => Span::tagged(self.kind(), range, group(1), group(2)).with_title(group(3)),
            InlinePass::BracketLink => {
                let name = group(1)?;
                if !Link::is_link_name(&name) {
                    return None;
                }
                Span::tagged(self.kind(), range, Some(name), group(2))
            }
            InlinePass::AngleLink => Span::tagged(self.kind(), range, None, group(1)),
            InlinePass::BoldItalics | InlinePass::Bold | InlinePass::Italics => {
                Span::tagged(self.kind(), range, Some(first_non_empty(caps)), None)
            }
            InlinePass::Highlight => Span::tagged(self.kind(), range, group(1), None),
        };
        Some(span)
    }
}

/// For `A|B` emphasis patterns: the first alternative group with text, or "".
fn first_non_empty(caps: &Captures<'_>) -> String {
    caps.iter()
        .skip(1)
        .flatten()
        .map(|m| m.as_str())
        .find(|s| !s.is_empty())
        .unwrap_or_default()
        .to_string()
}
