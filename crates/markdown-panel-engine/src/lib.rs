pub mod io;
pub mod parsing;

#[cfg(test)]
pub mod tests;

// Re-export key types for easier usage
pub use io::*;
pub use parsing::{
    ParsedDoc, ParsedLine,
    blocks::{ClassifiedLine, CodeStyle, FenceKind, InlineMeta, LineKind, classify, depth_of},
    inline::{Span, SpanKind, tokenize},
    lines::RawLine,
    parse_document,
    range::TextRange,
};
