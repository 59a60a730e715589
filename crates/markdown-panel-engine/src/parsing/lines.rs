use serde::Serialize;
use xi_rope::Rope;

/// A single source line, newline stripped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RawLine {
    /// 1-based position in the document. Only used for diagnostics.
    pub number: usize,
    pub text: String,
}

impl RawLine {
    pub fn new(number: usize, text: impl Into<String>) -> Self {
        Self {
            number,
            text: text.into(),
        }
    }
}

/// Returns an iterator over the document's lines, numbered from 1.
///
/// Uses `lines_raw` and strips `\n` / `\r\n` itself so that a trailing
/// newline never produces an extra empty line.
pub fn lines_of(rope: &Rope) -> impl Iterator<Item = RawLine> + '_ {
    rope.lines_raw(..).enumerate().map(|(i, line)| {
        let text = line.trim_end_matches(['\r', '\n']);
        RawLine::new(i + 1, text)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn collect(md: &str) -> Vec<RawLine> {
        lines_of(&Rope::from(md)).collect()
    }

    #[test]
    fn empty_document_has_no_lines() {
        assert!(collect("").is_empty());
    }

    #[test]
    fn numbers_lines_from_one_and_strips_newlines() {
        assert_eq!(
            collect("# a\r\n\nb\n"),
            vec![
                RawLine::new(1, "# a"),
                RawLine::new(2, ""),
                RawLine::new(3, "b"),
            ]
        );
    }

    #[test]
    fn last_line_without_newline_is_kept() {
        assert_eq!(collect("a\nb"), vec![RawLine::new(1, "a"), RawLine::new(2, "b")]);
    }
}
