use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum FenceKind {
    Backticks,
    Tildes,
}

impl FenceKind {
    fn delimiter(self) -> char {
        match self {
            FenceKind::Backticks => '`',
            FenceKind::Tildes => '~',
        }
    }
}

/// A recognised fence delimiter line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FenceMark<'a> {
    pub kind: FenceKind,
    /// Number of delimiter characters, at least 3.
    pub len: usize,
    /// Trimmed text after the delimiter run.
    pub info: &'a str,
}

/// Fence delimiter lines. Whether a line opens or closes a fence depends on
/// document state, so this kind is not part of the per-line matcher table.
pub struct CodeFence;

impl CodeFence {
    pub const MIN_LEN: usize = 3;
    /// Indentation beyond this makes the line an indented code line instead.
    pub const MAX_INDENT: usize = 3;

    /// Detects a fence delimiter line.
    ///
    /// A backtick info string may not contain backticks, so a line like
    /// ```` ```x``` ```` is inline code, not a fence.
    pub fn sig(text: &str) -> Option<FenceMark<'_>> {
        let body = text.trim_start_matches(' ');
        if text.len() - body.len() > Self::MAX_INDENT {
            return None;
        }
        let kind = match body.chars().next()? {
            '`' => FenceKind::Backticks,
            '~' => FenceKind::Tildes,
            _ => return None,
        };
        let rest = body.trim_start_matches(kind.delimiter());
        let len = body.len() - rest.len();
        if len < Self::MIN_LEN {
            return None;
        }
        let info = rest.trim();
        if kind == FenceKind::Backticks && info.contains('`') {
            return None;
        }
        Some(FenceMark { kind, len, info })
    }

    /// Whether `text` closes a fence opened with `open_len` delimiters of
    /// `open`: same family, no info string, and at least as long.
    pub fn closes(open: FenceKind, open_len: usize, text: &str) -> bool {
        matches!(
            Self::sig(text),
            Some(mark) if mark.kind == open && mark.info.is_empty() && mark.len >= open_len
        )
    }
}
