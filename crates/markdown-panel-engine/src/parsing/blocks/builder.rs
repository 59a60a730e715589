use log::warn;

use crate::parsing::lines::RawLine;

use super::{
    classify::LineClassifier,
    kinds::{CodeFence, FenceKind},
    types::{ClassifiedLine, CodeStyle, Extracted, LineKind},
};

#[derive(Debug, Clone, Copy)]
enum FenceState {
    Closed,
    Open {
        kind: FenceKind,
        len: usize,
        opened_at: usize,
    },
}

/// Classifies a document line by line, tracking the one piece of state the
/// per-line classifier cannot see: whether we are inside a fenced code block.
///
/// Inside a fence every line is a fenced code line with its text untouched;
/// the per-line matchers are skipped entirely.
pub struct DocumentClassifier {
    classifier: LineClassifier,
    fence: FenceState,
}

impl DocumentClassifier {
    pub fn new() -> Self {
        Self {
            classifier: LineClassifier,
            fence: FenceState::Closed,
        }
    }

    pub fn push(&mut self, raw: &RawLine) -> ClassifiedLine {
        match self.fence {
            FenceState::Open { kind, len, .. } => self.consume_fence_line(kind, len, raw),
            FenceState::Closed => match CodeFence::sig(&raw.text) {
                Some(mark) => {
                    self.fence = FenceState::Open {
                        kind: mark.kind,
                        len: mark.len,
                        opened_at: raw.number,
                    };
                    fence_line(raw.number, mark.kind, mark.info)
                }
                None => self.classifier.classify(raw),
            },
        }
    }

    /// Ends the document. An unterminated fence simply runs to the end.
    pub fn finish(self) {
        if let FenceState::Open { opened_at, .. } = self.fence {
            warn!("code fence opened on line {opened_at} is never closed");
        }
    }

    fn consume_fence_line(&mut self, kind: FenceKind, len: usize, raw: &RawLine) -> ClassifiedLine {
        if CodeFence::closes(kind, len, &raw.text) {
            self.fence = FenceState::Closed;
            return fence_line(raw.number, kind, "");
        }
        ClassifiedLine::from_extracted(
            raw.number,
            Extracted::new(
                LineKind::CodeLine {
                    style: CodeStyle::Fenced,
                },
                raw.text.as_str(),
            ),
        )
    }
}

impl Default for DocumentClassifier {
    fn default() -> Self {
        Self::new()
    }
}

fn fence_line(number: usize, kind: FenceKind, info: &str) -> ClassifiedLine {
    ClassifiedLine::from_extracted(number, Extracted::new(LineKind::CodeFence { kind }, info))
}
