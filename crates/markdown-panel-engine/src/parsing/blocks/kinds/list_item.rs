use std::sync::OnceLock;

use regex::Regex;

use crate::parsing::blocks::types::{Extracted, LineKind};

/// Bulleted and numbered list items, top-level and indented.
///
/// Indented forms must be tried before top-level forms; the classifier's
/// matcher table encodes that order.
pub struct ListItem;

impl ListItem {
    pub const BULLETS: [char; 3] = ['-', '+', '*'];

    fn nested_ordered_regex() -> &'static Regex {
        static RE: OnceLock<Regex> = OnceLock::new();
        RE.get_or_init(|| {
            Regex::new(r"^((?:\s{4}|\t)+)((?:\d+\.)+)\s(.*)$")
                .expect("Invalid nested ordered list regex")
        })
    }

    fn nested_unordered_regex() -> &'static Regex {
        static RE: OnceLock<Regex> = OnceLock::new();
        RE.get_or_init(|| {
            Regex::new(r"^((?:\s{4}|\t)+)[-+*]\s(.*)$")
                .expect("Invalid nested unordered list regex")
        })
    }

    fn ordered_regex() -> &'static Regex {
        static RE: OnceLock<Regex> = OnceLock::new();
        RE.get_or_init(|| Regex::new(r"^((?:\d+\.)+) (.*)$").expect("Invalid ordered list regex"))
    }

    fn unordered_regex() -> &'static Regex {
        static RE: OnceLock<Regex> = OnceLock::new();
        RE.get_or_init(|| Regex::new(r"^[-+*] (.*)$").expect("Invalid unordered list regex"))
    }

    /// `    1.2. item`: prefix = indent, postfix = numerals.
    pub fn nested_ordered(text: &str) -> Option<Extracted> {
        let caps = Self::nested_ordered_regex().captures(text)?;
        Some(
            Extracted::new(LineKind::NestedOrderedList, caps[3].trim_start())
                .with_prefix(&caps[1])
                .with_postfix(&caps[2]),
        )
    }

    /// `    - item`: prefix = indent.
    pub fn nested_unordered(text: &str) -> Option<Extracted> {
        let caps = Self::nested_unordered_regex().captures(text)?;
        Some(
            Extracted::new(LineKind::NestedUnorderedList, caps[2].trim_start())
                .with_prefix(&caps[1]),
        )
    }

    /// `1. item`: prefix = numerals.
    pub fn ordered(text: &str) -> Option<Extracted> {
        let caps = Self::ordered_regex().captures(text)?;
        Some(Extracted::new(LineKind::OrderedList, caps[2].trim_start()).with_prefix(&caps[1]))
    }

    pub fn unordered(text: &str) -> Option<Extracted> {
        let caps = Self::unordered_regex().captures(text)?;
        Some(Extracted::new(LineKind::UnorderedList, caps[1].trim_start()))
    }
}
