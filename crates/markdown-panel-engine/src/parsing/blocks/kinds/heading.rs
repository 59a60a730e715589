use std::sync::OnceLock;

use regex::Regex;

use crate::parsing::blocks::types::{Extracted, LineKind};

/// ATX headings, `#` through `######`.
pub struct Heading;

impl Heading {
    pub const MARKER: char = '#';
    pub const MAX_LEVEL: u8 = 6;

    fn regex() -> &'static Regex {
        static RE: OnceLock<Regex> = OnceLock::new();
        // Greedy `#{1,6}` gives the longest run first; a seventh `#` fails every run.
        RE.get_or_init(|| Regex::new(r"^ {0,3}(#{1,6})([^#].*)?$").expect("Invalid heading regex"))
    }

    pub fn matches(text: &str) -> Option<Extracted> {
        let caps = Self::regex().captures(text)?;
        let level = caps[1].len() as u8;
        let content = caps.get(2).map_or("", |m| m.as_str()).trim_start();
        Some(Extracted::new(LineKind::Heading { level }, content))
    }
}
