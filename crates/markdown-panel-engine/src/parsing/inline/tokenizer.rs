use log::trace;

use super::{
    passes::InlinePass,
    types::{Fragment, Span},
};

/// Tokenizes a line's content into an ordered, gap-free span sequence.
///
/// Runs every [`InlinePass`] in [`InlinePass::ORDER`]. Each pass only looks
/// at fragments still literal after the previous passes, so a span claimed
/// early is never re-split. Leftover literals come out as `Text` spans.
///
/// Blank content yields no spans at all.
pub fn tokenize(content: &str) -> Vec<Span> {
    if content.trim().is_empty() {
        return vec![];
    }

    let mut fragments = vec![Fragment::Literal {
        offset: 0,
        text: content,
    }];
    for pass in InlinePass::ORDER {
        if !pass.may_match(content) {
            continue;
        }
        fragments = apply_pass(fragments, pass);
    }

    fragments.into_iter().map(Fragment::into_span).collect()
}

/// Splits every literal fragment around the pass's matches and flattens the
/// result one level, preserving order. Tagged fragments pass through as-is.
pub fn apply_pass(fragments: Vec<Fragment<'_>>, pass: InlinePass) -> Vec<Fragment<'_>> {
    let before = fragments.len();
    let out: Vec<_> = fragments
        .into_iter()
        .flat_map(|fragment| match fragment {
            Fragment::Literal { offset, text } => split_literal(offset, text, pass),
            tagged => vec![tagged],
        })
        .collect();
    if out.len() != before {
        trace!("{pass:?} pass: {before} -> {} fragments", out.len());
    }
    out
}

fn split_literal(offset: usize, text: &str, pass: InlinePass) -> Vec<Fragment<'_>> {
    let spans = pass.find_spans(text);
    if spans.is_empty() {
        return vec![Fragment::Literal { offset, text }];
    }

    let mut out = Vec::with_capacity(spans.len() * 2 + 1);
    let mut cursor = 0;
    for span in spans {
        if span.range.start > cursor {
            out.push(Fragment::Literal {
                offset: offset + cursor,
                text: &text[cursor..span.range.start],
            });
        }
        cursor = span.range.end;
        out.push(Fragment::Tagged(span.shifted(offset)));
    }
    if cursor < text.len() {
        out.push(Fragment::Literal {
            offset: offset + cursor,
            text: &text[cursor..],
        });
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parsing::{inline::SpanKind, range::TextRange};
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn kinds(spans: &[Span]) -> Vec<SpanKind> {
        spans.iter().map(|s| s.kind).collect()
    }

    fn texts(spans: &[Span]) -> Vec<Option<&str>> {
        spans.iter().map(|s| s.text.as_deref()).collect()
    }

    #[rstest]
    #[case("")]
    #[case("   ")]
    #[case("\t \t")]
    fn blank_content_has_no_spans(#[case] content: &str) {
        assert!(tokenize(content).is_empty());
    }

    #[test]
    fn plain_text_is_one_text_span() {
        let spans = tokenize("hello world");
        assert_eq!(
            spans,
            vec![Span::text(TextRange::new(0, 11), "hello world")]
        );
    }

    #[test]
    fn bold_italics_wins_over_bold_and_italics() {
        let spans = tokenize("***bold-italic***");
        assert_eq!(kinds(&spans), vec![SpanKind::BoldItalics]);
        assert_eq!(texts(&spans), vec![Some("bold-italic")]);
        assert_eq!(spans[0].range, TextRange::new(0, 17));
    }

    #[test]
    fn image_wins_over_link() {
        let spans = tokenize("![alt](http://x/y.png)");
        assert_eq!(kinds(&spans), vec![SpanKind::Image]);
        assert_eq!(spans[0].url.as_deref(), Some("http://x/y.png"));
        assert_eq!(spans[0].text.as_deref(), Some("alt"));
    }

    #[test]
    fn url_underscores_are_not_emphasis() {
        let spans = tokenize("see [it](http://x/a_b_c) _now_");
        assert_eq!(
            kinds(&spans),
            vec![SpanKind::Text, SpanKind::Link, SpanKind::Text, SpanKind::Italics]
        );
        assert_eq!(spans[1].url.as_deref(), Some("http://x/a_b_c"));
        assert_eq!(spans[3].text.as_deref(), Some("now"));
    }

    #[test]
    fn link_then_bold_in_order() {
        let spans = tokenize("See [docs](http://x) for **details**");
        assert_eq!(
            kinds(&spans),
            vec![SpanKind::Text, SpanKind::Link, SpanKind::Text, SpanKind::Bold]
        );
        assert_eq!(
            texts(&spans),
            vec![Some("See "), Some("docs"), Some(" for "), Some("details")]
        );
        assert_eq!(spans[1].url.as_deref(), Some("http://x"));
        assert_eq!(spans[3].url, None);
    }

    #[test]
    fn bold_and_italics_side_by_side() {
        let spans = tokenize("**a** and *b*");
        assert_eq!(
            kinds(&spans),
            vec![SpanKind::Bold, SpanKind::Text, SpanKind::Italics]
        );
        assert_eq!(texts(&spans), vec![Some("a"), Some(" and "), Some("b")]);
    }

    #[test]
    fn repeated_bold_is_one_greedy_span() {
        let spans = tokenize("**a** and **b**");
        assert_eq!(kinds(&spans), vec![SpanKind::Bold]);
        assert_eq!(texts(&spans), vec![Some("a** and **b")]);
    }

    #[test]
    fn highlight_runs_last() {
        let spans = tokenize("run `cargo test` now");
        assert_eq!(
            kinds(&spans),
            vec![SpanKind::Text, SpanKind::Highlight, SpanKind::Text]
        );
        assert_eq!(spans[1].text.as_deref(), Some("cargo test"));
    }

    #[test]
    fn emphasis_inside_backticks_is_claimed_first() {
        let spans = tokenize("`**x**`");
        assert_eq!(
            kinds(&spans),
            vec![SpanKind::Text, SpanKind::Bold, SpanKind::Text]
        );
    }

    #[test]
    fn unclosed_constructs_stay_literal() {
        let spans = tokenize("[docs](http://x and `open");
        assert_eq!(kinds(&spans), vec![SpanKind::Text]);
    }

    #[test]
    fn angle_link_inside_prose() {
        let spans = tokenize("mail <http://x> today");
        assert_eq!(
            kinds(&spans),
            vec![SpanKind::Text, SpanKind::Link, SpanKind::Text]
        );
        assert_eq!(spans[1].text, None);
        assert_eq!(spans[1].url.as_deref(), Some("http://x"));
    }

    #[test]
    fn ranges_are_absolute_and_contiguous() {
        let content = "a **b** c [d](e) f `g`";
        let spans = tokenize(content);
        let mut expected_start = 0;
        for span in &spans {
            assert_eq!(span.range.start, expected_start);
            expected_start = span.range.end;
        }
        assert_eq!(expected_start, content.len());
        let rebuilt: String = spans
            .iter()
            .map(|s| s.range.slice(content).unwrap())
            .collect();
        assert_eq!(rebuilt, content);
    }

    #[test]
    fn pass_without_matches_leaves_fragments_alone() {
        let fragments = vec![Fragment::Literal {
            offset: 0,
            text: "nothing here",
        }];
        assert_eq!(
            apply_pass(fragments.clone(), InlinePass::Bold),
            fragments
        );
    }
}
