use std::fmt::Write as _;

use serde::Serialize;

use crate::parsing::{
    ParsedDoc,
    blocks::InlineMeta,
    inline::Span,
};

#[derive(Debug, Serialize)]
pub struct Snap {
    pub lines: Vec<LineSnap>,
}

#[derive(Debug, Serialize)]
pub struct LineSnap {
    pub number: usize,
    pub kind: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub depth: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prefix: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub postfix: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta: Option<InlineMeta>,
    pub content: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub spans: Vec<SpanSnap>,
}

#[derive(Debug, Serialize)]
pub struct SpanSnap {
    pub kind: String,
    pub range: (usize, usize),
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

impl From<&Span> for SpanSnap {
    fn from(s: &Span) -> Self {
        Self {
            kind: s.kind.to_string(),
            range: (s.range.start, s.range.end),
            text: s.text.clone(),
            url: s.url.clone(),
            title: s.title.clone(),
        }
    }
}

pub fn normalize(doc: &ParsedDoc) -> Snap {
    let lines = doc
        .lines
        .iter()
        .map(|pl| {
            let l = &pl.line;
            LineSnap {
                number: l.number,
                kind: l.kind.to_string(),
                depth: l.depth(),
                prefix: l.prefix.clone(),
                postfix: l.postfix.clone(),
                meta: l.inline_meta.clone(),
                content: l.content.clone(),
                spans: pl.spans.iter().map(SpanSnap::from).collect(),
            }
        })
        .collect();

    Snap { lines }
}

impl Snap {
    /// Drops every line's spans, keeping only block classification.
    #[must_use]
    pub fn without_spans(mut self) -> Self {
        for line in &mut self.lines {
            line.spans.clear();
        }
        self
    }

    /// One header line per source line, then one indented line per span:
    ///
    /// ```text
    ///    3 ORDERED_LIST depth=0 prefix="1." | See [docs](http://x)
    ///        TEXT 0..4 text="See "
    ///        LINK 4..20 text="docs" url="http://x"
    /// ```
    pub fn to_text(&self) -> String {
        let mut out = String::new();
        for line in &self.lines {
            let _ = write!(out, "{:>4} {}", line.number, line.kind);
            if let Some(depth) = line.depth {
                let _ = write!(out, " depth={depth}");
            }
            push_field(&mut out, "prefix", line.prefix.as_deref());
            push_field(&mut out, "postfix", line.postfix.as_deref());
            if let Some(meta) = &line.meta {
                push_field(&mut out, "name", meta.link_name.as_deref());
                push_field(&mut out, "url", meta.link_url.as_deref());
                push_field(&mut out, "alt", meta.image_alt.as_deref());
                push_field(&mut out, "src", meta.image_url.as_deref());
                push_field(&mut out, "title", meta.image_title.as_deref());
            }
            if !line.content.is_empty() {
                out.push_str(" | ");
                out.push_str(&line.content);
            }
            out.push('\n');

            for span in &line.spans {
                let _ = write!(out, "       {} {}..{}", span.kind, span.range.0, span.range.1);
                push_field(&mut out, "text", span.text.as_deref());
                push_field(&mut out, "url", span.url.as_deref());
                push_field(&mut out, "title", span.title.as_deref());
                out.push('\n');
            }
        }
        out
    }
}

fn push_field(out: &mut String, key: &str, value: Option<&str>) {
    if let Some(v) = value {
        let _ = write!(out, " {key}={v:?}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn text_rendering_of_list_with_spans() {
        let doc = ParsedDoc::from_markdown("1. See [docs](http://x)\n");
        assert_eq!(
            normalize(&doc).to_text(),
            concat!(
                "   1 ORDERED_LIST depth=0 prefix=\"1.\" | See [docs](http://x)\n",
                "       TEXT 0..4 text=\"See \"\n",
                "       LINK 4..20 text=\"docs\" url=\"http://x\"\n",
            )
        );
    }

    #[test]
    fn without_spans_keeps_headers_only() {
        let doc = ParsedDoc::from_markdown("# Title\n\n---");
        assert_eq!(
            normalize(&doc).without_spans().to_text(),
            "   1 HEADING(1) | Title\n   2 BLANK\n   3 SEPARATOR\n"
        );
    }

    #[test]
    fn escapes_whitespace_in_fields() {
        let doc = ParsedDoc::from_markdown("\t- tabbed");
        let text = normalize(&doc).without_spans().to_text();
        assert_eq!(
            text,
            "   1 NESTED_UNORDERED_LIST depth=1 prefix=\"\\t\" | tabbed\n"
        );
    }

    #[test]
    fn serializes_to_json_shape() {
        let doc = ParsedDoc::from_markdown("[a](b)");
        let snap = normalize(&doc);
        assert_eq!(snap.lines[0].kind, "LINK_LINE");
        let meta = snap.lines[0].meta.as_ref().unwrap();
        assert_eq!(meta.link_url.as_deref(), Some("b"));
        assert!(snap.lines[0].spans.is_empty());
    }
}
