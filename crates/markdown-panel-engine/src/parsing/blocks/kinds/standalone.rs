use std::sync::OnceLock;

use regex::Regex;

use crate::parsing::{
    blocks::types::{Extracted, InlineMeta, LineKind},
    inline::kinds::{Highlight, Image, Link},
};

/// Anchors an inline pattern so it must span the whole line, surrounding
/// whitespace aside.
fn whole_line(pattern: &str) -> Regex {
    Regex::new(&format!(r"^\s*(?:{pattern})\s*$")).expect("Invalid standalone line regex")
}

/// A line that is exactly one backtick-wrapped phrase.
pub struct HighlightedWord;

impl HighlightedWord {
    pub fn matches(text: &str) -> Option<Extracted> {
        static RE: OnceLock<Regex> = OnceLock::new();
        let caps = RE.get_or_init(|| whole_line(Highlight::PATTERN)).captures(text)?;
        Some(Extracted::new(LineKind::HighlightedWord, &caps[1]))
    }
}

/// A line that is exactly one image. Content is the full bracket text.
pub struct ImageLine;

impl ImageLine {
    pub fn matches(text: &str) -> Option<Extracted> {
        static RE: OnceLock<Regex> = OnceLock::new();
        let caps = RE.get_or_init(|| whole_line(Image::PATTERN)).captures(text)?;
        let alt = caps[1].to_string();
        let meta = InlineMeta {
            image_alt: Some(alt.clone()),
            image_url: Some(caps[2].to_string()),
            image_title: caps.get(3).map(|m| m.as_str().to_string()),
            ..InlineMeta::default()
        };
        Some(Extracted::new(LineKind::ImageLine, alt).with_meta(meta))
    }
}

/// A line that is exactly one `[name](url)` or `<url>` link.
///
/// Content is the link name, or the url for the angle form.
pub struct LinkLine;

impl LinkLine {
    pub fn matches(text: &str) -> Option<Extracted> {
        Self::bracket(text).or_else(|| Self::angle(text))
    }

    fn bracket(text: &str) -> Option<Extracted> {
        static RE: OnceLock<Regex> = OnceLock::new();
        let caps = RE.get_or_init(|| whole_line(Link::BRACKET_PATTERN)).captures(text)?;
        let name = &caps[1];
        if !Link::is_link_name(name) {
            return None;
        }
        let meta = InlineMeta {
            link_name: Some(name.to_string()),
            link_url: Some(caps[2].to_string()),
            ..InlineMeta::default()
        };
        Some(Extracted::new(LineKind::LinkLine, name).with_meta(meta))
    }

    fn angle(text: &str) -> Option<Extracted> {
        static RE: OnceLock<Regex> = OnceLock::new();
        let caps = RE.get_or_init(|| whole_line(Link::ANGLE_PATTERN)).captures(text)?;
        let url = &caps[1];
        let meta = InlineMeta {
            link_url: Some(url.to_string()),
            ..InlineMeta::default()
        };
        Some(Extracted::new(LineKind::LinkLine, url).with_meta(meta))
    }
}
