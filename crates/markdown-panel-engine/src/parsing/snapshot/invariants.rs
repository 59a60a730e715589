use crate::parsing::{ParsedDoc, inline::Span};

/// Validates tokenizer output for one content string.
///
/// Asserts that:
/// - Blank content has no spans
/// - Spans start at 0, are ordered, non-overlapping and gap-free
/// - The last span ends at the end of the content
/// - Every `Text` span's text is exactly its slice of the content
///
/// # Panics
/// Panics with a descriptive message if any invariant is violated.
pub fn check_spans(content: &str, spans: &[Span]) {
    if content.trim().is_empty() {
        assert!(spans.is_empty(), "blank content produced spans: {spans:?}");
        return;
    }

    let mut cursor = 0;
    for span in spans {
        assert_eq!(
            span.range.start, cursor,
            "span {span:?} does not start where the previous one ended in {content:?}"
        );
        assert!(
            span.range.end > span.range.start,
            "empty span range {span:?} in {content:?}"
        );
        let slice = span.range.slice(content).unwrap_or_else(|| {
            panic!("span {span:?} out of bounds for {content:?}")
        });
        if span.kind == crate::parsing::inline::SpanKind::Text {
            assert_eq!(span.text.as_deref(), Some(slice), "text span mismatch");
        }
        cursor = span.range.end;
    }
    assert_eq!(
        cursor,
        content.len(),
        "spans stop short of the end of {content:?}"
    );
}

/// Runs [`check_spans`] over every line of a parsed document, and checks
/// non-prose lines carry no spans.
pub fn check(doc: &ParsedDoc) {
    for pl in &doc.lines {
        if pl.line.kind.carries_prose() {
            check_spans(&pl.line.content, &pl.spans);
        } else {
            assert!(
                pl.spans.is_empty(),
                "line {} ({}) is not prose but has spans",
                pl.line.number,
                pl.line.kind
            );
        }
    }
}
