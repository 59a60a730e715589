use std::sync::OnceLock;

use regex::Regex;

use crate::parsing::blocks::types::{Extracted, LineKind};

/// Thematic break: three or more of the same `-`, `*` or `_`, optionally spaced.
pub struct Separator;

impl Separator {
    fn regex() -> &'static Regex {
        static RE: OnceLock<Regex> = OnceLock::new();
        RE.get_or_init(|| {
            Regex::new(r"^ {0,3}(?:(?:-[ \t]*){3,}|(?:\*[ \t]*){3,}|(?:_[ \t]*){3,})$")
                .expect("Invalid separator regex")
        })
    }

    pub fn matches(text: &str) -> Option<Extracted> {
        Self::regex()
            .is_match(text)
            .then(|| Extracted::new(LineKind::Separator, ""))
    }
}
