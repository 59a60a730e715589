//! End-to-end tests for the parsing module: raw document in, classified
//! lines and spans out.

use pretty_assertions::assert_eq;
use rstest::rstest;

use crate::parsing::{
    ParsedDoc,
    blocks::{CodeStyle, FenceKind, LineKind},
    inline::{SpanKind, tokenize},
    parse_inline_for_line,
    range::TextRange,
    snapshot,
};

#[test]
fn ordered_item_with_link_and_bold() {
    let doc = ParsedDoc::from_markdown("1. See [docs](http://x) for **details**");
    assert_eq!(doc.lines.len(), 1);

    let pl = &doc.lines[0];
    assert_eq!(pl.line.kind, LineKind::OrderedList);
    assert_eq!(pl.line.prefix.as_deref(), Some("1."));
    assert_eq!(pl.line.content, "See [docs](http://x) for **details**");

    let summary: Vec<_> = pl
        .spans
        .iter()
        .map(|s| (s.kind, s.text.as_deref(), s.url.as_deref()))
        .collect();
    assert_eq!(
        summary,
        vec![
            (SpanKind::Text, Some("See "), None),
            (SpanKind::Link, Some("docs"), Some("http://x")),
            (SpanKind::Text, Some(" for "), None),
            (SpanKind::Bold, Some("details"), None),
        ]
    );
    assert_eq!(pl.spans[3].range, TextRange::new(25, 36));
}

#[test]
fn every_line_is_classified_once() {
    let md = "# Title\n\nIntro with *style*.\n\n- one\n    - one.a\n2. two\n\n---\n    code\n`word`\n![pic](p.png)\n<http://x>\n";
    let doc = ParsedDoc::from_markdown(md);
    snapshot::invariants(&doc);

    let kinds: Vec<_> = doc.lines.iter().map(|l| l.line.kind).collect();
    assert_eq!(
        kinds,
        vec![
            LineKind::Heading { level: 1 },
            LineKind::Blank,
            LineKind::Paragraph,
            LineKind::Blank,
            LineKind::UnorderedList,
            LineKind::NestedUnorderedList,
            LineKind::OrderedList,
            LineKind::Blank,
            LineKind::Separator,
            LineKind::CodeLine {
                style: CodeStyle::Indented
            },
            LineKind::HighlightedWord,
            LineKind::ImageLine,
            LineKind::LinkLine,
        ]
    );
    let numbers: Vec<_> = doc.lines.iter().map(|l| l.line.number).collect();
    assert_eq!(numbers, (1..=13).collect::<Vec<_>>());
}

#[test]
fn non_prose_lines_have_no_spans() {
    let doc = ParsedDoc::from_markdown("    **not bold**\n![a](b.png)\n```\n*x*\n```");
    assert!(doc.lines.iter().all(|l| l.spans.is_empty()));
}

#[test]
fn fenced_block_lines_keep_raw_text() {
    let doc = ParsedDoc::from_markdown("~~~ sh\n  echo *hi*\n~~~\n");
    let kinds: Vec<_> = doc.lines.iter().map(|l| l.line.kind).collect();
    assert_eq!(
        kinds,
        vec![
            LineKind::CodeFence {
                kind: FenceKind::Tildes
            },
            LineKind::CodeLine {
                style: CodeStyle::Fenced
            },
            LineKind::CodeFence {
                kind: FenceKind::Tildes
            },
        ]
    );
    assert_eq!(doc.lines[0].line.content, "sh");
    assert_eq!(doc.lines[1].line.content, "  echo *hi*");
}

#[test]
fn highlighted_word_line_is_tokenized() {
    let doc = ParsedDoc::from_markdown("`**bold** inside`");
    let pl = &doc.lines[0];
    assert_eq!(pl.line.kind, LineKind::HighlightedWord);
    assert_eq!(pl.line.content, "**bold** inside");
    assert_eq!(
        pl.spans.iter().map(|s| s.kind).collect::<Vec<_>>(),
        vec![SpanKind::Bold, SpanKind::Text]
    );
}

#[test]
fn heading_spans_are_relative_to_content() {
    let doc = ParsedDoc::from_markdown("## Go *now*");
    let spans = parse_inline_for_line(&doc.lines[0].line);
    assert_eq!(spans, doc.lines[0].spans);
    assert_eq!(spans[1].range, TextRange::new(3, 8));
}

#[test]
fn empty_document() {
    assert!(ParsedDoc::from_markdown("").lines.is_empty());
}

#[test]
fn blank_lines_only() {
    let doc = ParsedDoc::from_markdown("\n\n\n");
    assert_eq!(doc.lines.len(), 3);
    assert!(doc.lines.iter().all(|l| l.line.kind == LineKind::Blank));
}

#[rstest]
#[case("***a*** **b** *c*", vec![SpanKind::BoldItalics, SpanKind::Text, SpanKind::Bold, SpanKind::Text, SpanKind::Italics])]
#[case("___a___", vec![SpanKind::BoldItalics])]
#[case("![i](u.png) [l](u)", vec![SpanKind::Image, SpanKind::Text, SpanKind::Link])]
#[case("x <y> z", vec![SpanKind::Text, SpanKind::Link, SpanKind::Text])]
fn pass_precedence(#[case] content: &str, #[case] expected: Vec<SpanKind>) {
    let spans = tokenize(content);
    snapshot::invariants::check_spans(content, &spans);
    assert_eq!(spans.iter().map(|s| s.kind).collect::<Vec<_>>(), expected);
}

#[test]
fn independent_lines_tokenize_on_threads() {
    let lines = ["**a**", "*b*", "[c](d)", "`e`"];
    let handles: Vec<_> = lines
        .iter()
        .map(|l| {
            let l = l.to_string();
            std::thread::spawn(move || tokenize(&l))
        })
        .collect();
    let kinds: Vec<_> = handles
        .into_iter()
        .map(|h| h.join().unwrap()[0].kind)
        .collect();
    assert_eq!(
        kinds,
        vec![
            SpanKind::Bold,
            SpanKind::Italics,
            SpanKind::Link,
            SpanKind::Highlight
        ]
    );
}
