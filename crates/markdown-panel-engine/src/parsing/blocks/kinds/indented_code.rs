use std::sync::OnceLock;

use regex::Regex;

use crate::parsing::blocks::types::{CodeStyle, Extracted, LineKind};

/// Code introduced by four spaces or a tab.
pub struct IndentedCode;

impl IndentedCode {
    fn regex() -> &'static Regex {
        static RE: OnceLock<Regex> = OnceLock::new();
        RE.get_or_init(|| Regex::new(r"^(?: {4}|\t)(.*)$").expect("Invalid indented code regex"))
    }

    pub fn matches(text: &str) -> Option<Extracted> {
        let caps = Self::regex().captures(text)?;
        Some(Extracted::new(
            LineKind::CodeLine {
                style: CodeStyle::Indented,
            },
            &caps[1],
        ))
    }
}
