use std::fmt;

use serde::Serialize;

use super::{indent::depth_of, kinds::FenceKind};

/// How a code line was introduced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum CodeStyle {
    /// Four leading spaces or a tab.
    Indented,
    /// Inside a ```` ``` ```` / `~~~` fence.
    Fenced,
}

/// The block-level construct a single line represents.
///
/// Closed set: renderers map each variant to exactly one rendering strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum LineKind {
    /// Empty or whitespace-only.
    Blank,
    /// ATX heading, `level` in `1..=6`.
    Heading { level: u8 },
    /// Thematic break (`---`, `***`, `___`).
    Separator,
    /// Indented numbered item. `prefix` holds the indent, `postfix` the numerals.
    NestedOrderedList,
    /// Indented bullet item. `prefix` holds the indent.
    NestedUnorderedList,
    /// Top-level numbered item. `prefix` holds the numerals.
    OrderedList,
    /// Top-level bullet item.
    UnorderedList,
    CodeLine { style: CodeStyle },
    /// Opening or closing fence delimiter line.
    CodeFence { kind: FenceKind },
    /// A line that is exactly one backtick-wrapped word or phrase.
    HighlightedWord,
    /// A line that is exactly one image construct.
    ImageLine,
    /// A line that is exactly one link construct.
    LinkLine,
    /// Fallback when nothing else matches.
    Paragraph,
}

impl LineKind {
    /// Whether the line's content is free prose that goes through the
    /// inline tokenizer.
    pub fn carries_prose(self) -> bool {
        matches!(
            self,
            LineKind::Paragraph
                | LineKind::Heading { .. }
                | LineKind::UnorderedList
                | LineKind::OrderedList
                | LineKind::NestedOrderedList
                | LineKind::NestedUnorderedList
                | LineKind::HighlightedWord
        )
    }

    pub fn is_list(self) -> bool {
        matches!(
            self,
            LineKind::UnorderedList
                | LineKind::OrderedList
                | LineKind::NestedOrderedList
                | LineKind::NestedUnorderedList
        )
    }

    pub fn is_nested_list(self) -> bool {
        matches!(
            self,
            LineKind::NestedOrderedList | LineKind::NestedUnorderedList
        )
    }
}

impl fmt::Display for LineKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LineKind::Blank => f.write_str("BLANK"),
            LineKind::Heading { level } => write!(f, "HEADING({level})"),
            LineKind::Separator => f.write_str("SEPARATOR"),
            LineKind::NestedOrderedList => f.write_str("NESTED_ORDERED_LIST"),
            LineKind::NestedUnorderedList => f.write_str("NESTED_UNORDERED_LIST"),
            LineKind::OrderedList => f.write_str("ORDERED_LIST"),
            LineKind::UnorderedList => f.write_str("UNORDERED_LIST"),
            LineKind::CodeLine {
                style: CodeStyle::Indented,
            } => f.write_str("CODE_LINE(indented)"),
            LineKind::CodeLine {
                style: CodeStyle::Fenced,
            } => f.write_str("CODE_LINE(fenced)"),
            LineKind::CodeFence {
                kind: FenceKind::Backticks,
            } => f.write_str("CODE_FENCE(backticks)"),
            LineKind::CodeFence {
                kind: FenceKind::Tildes,
            } => f.write_str("CODE_FENCE(tildes)"),
            LineKind::HighlightedWord => f.write_str("HIGHLIGHTED_WORD"),
            LineKind::ImageLine => f.write_str("IMAGE_LINE"),
            LineKind::LinkLine => f.write_str("LINK_LINE"),
            LineKind::Paragraph => f.write_str("PARAGRAPH"),
        }
    }
}

/// Link/image metadata for standalone image and link lines.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct InlineMeta {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_alt: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_title: Option<String>,
}

/// The fields a block matcher pulls out of a line.
///
/// Matchers are pure `fn(&str) -> Option<Extracted>`; the classifier turns
/// the first hit into a [`ClassifiedLine`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Extracted {
    pub kind: LineKind,
    pub content: String,
    pub prefix: Option<String>,
    pub postfix: Option<String>,
    pub inline_meta: Option<InlineMeta>,
}

impl Extracted {
    pub fn new(kind: LineKind, content: impl Into<String>) -> Self {
        Self {
            kind,
            content: content.into(),
            prefix: None,
            postfix: None,
            inline_meta: None,
        }
    }

    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = Some(prefix.into());
        self
    }

    pub fn with_postfix(mut self, postfix: impl Into<String>) -> Self {
        self.postfix = Some(postfix.into());
        self
    }

    pub fn with_meta(mut self, meta: InlineMeta) -> Self {
        self.inline_meta = Some(meta);
        self
    }
}

/// A raw line after block classification. Built once, read-only afterwards.
///
/// `content` never contains the structural markers that decided `kind`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClassifiedLine {
    pub number: usize,
    pub kind: LineKind,
    pub content: String,
    pub prefix: Option<String>,
    pub postfix: Option<String>,
    pub inline_meta: Option<InlineMeta>,
}

impl ClassifiedLine {
    pub(crate) fn from_extracted(number: usize, e: Extracted) -> Self {
        Self {
            number,
            kind: e.kind,
            content: e.content,
            prefix: e.prefix,
            postfix: e.postfix,
            inline_meta: e.inline_meta,
        }
    }

    /// Nesting depth for list items: `0` at top level, [`depth_of`] of the
    /// indent prefix for nested items, `None` for non-list lines.
    pub fn depth(&self) -> Option<usize> {
        if self.kind.is_nested_list() {
            Some(depth_of(self.prefix.as_deref().unwrap_or(""), 1))
        } else if self.kind.is_list() {
            Some(0)
        } else {
            None
        }
    }
}
