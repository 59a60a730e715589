use log::debug;

use crate::parsing::lines::RawLine;

use super::{
    kinds::{HighlightedWord, Heading, ImageLine, IndentedCode, LinkLine, ListItem, Separator},
    types::{ClassifiedLine, Extracted, LineKind},
};

/// A pure block matcher: the extracted fields if the line is this construct.
pub type Matcher = fn(&str) -> Option<Extracted>;

/// Block matchers in priority order. First hit wins; no hit means paragraph.
///
/// Indented list forms sit above their top-level forms, and both list forms
/// sit above indented code, so `    - item` is a nested bullet rather than
/// code or a top-level bullet.
pub const MATCHERS: &[(&str, Matcher)] = &[
    ("blank", blank),
    ("heading", Heading::matches),
    ("separator", Separator::matches),
    ("nested ordered list", ListItem::nested_ordered),
    ("nested unordered list", ListItem::nested_unordered),
    ("ordered list", ListItem::ordered),
    ("unordered list", ListItem::unordered),
    ("indented code", IndentedCode::matches),
    ("highlighted word", HighlightedWord::matches),
    ("image line", ImageLine::matches),
    ("link line", LinkLine::matches),
];

fn blank(text: &str) -> Option<Extracted> {
    text.trim()
        .is_empty()
        .then(|| Extracted::new(LineKind::Blank, ""))
}

/// Classifies single lines with no knowledge of their neighbours.
#[derive(Debug, Clone, Copy, Default)]
pub struct LineClassifier;

impl LineClassifier {
    /// Classifies a line into a [`ClassifiedLine`]. Total: unmatched lines
    /// become paragraphs with their text unchanged.
    pub fn classify(&self, raw: &RawLine) -> ClassifiedLine {
        let (matcher, extracted) = MATCHERS
            .iter()
            .find_map(|(name, matcher)| matcher(&raw.text).map(|e| (*name, e)))
            .unwrap_or_else(|| {
                (
                    "paragraph",
                    Extracted::new(LineKind::Paragraph, raw.text.as_str()),
                )
            });

        debug!("line {}: {} ({matcher})", raw.number, extracted.kind);
        ClassifiedLine::from_extracted(raw.number, extracted)
    }
}

/// Shorthand for [`LineClassifier::classify`].
pub fn classify(raw: &RawLine) -> ClassifiedLine {
    LineClassifier.classify(raw)
}
