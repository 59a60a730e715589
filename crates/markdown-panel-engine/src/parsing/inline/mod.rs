//! # Inline Tokenization
//!
//! Ordered regex passes over a line's content, producing a flat sequence of
//! text and tagged spans.
//!
//! ## Architecture
//!
//! The tokenizer keeps a list of fragments, initially the whole content as
//! one literal. Each pass splits every remaining literal around its matches
//! and flattens the list again. Tagged fragments are never revisited, which
//! is what makes pass order matter.
//!
//! ## Modules
//!
//! - **`types`**: `Span`, `SpanKind`, and the `Fragment` working type
//! - **`kinds`**: inline constructs owning their patterns (image, link, emphasis, highlight)
//! - **`passes`**: `InlinePass`, the ordered pass table and per-pass span building
//! - **`tokenizer`**: `tokenize()` entry point
//!
//! ## Pass Precedence
//!
//! `***x***` is one bold-italic span, never bold wrapping stray stars:
//! longer emphasis delimiters run first. Images run before links and links
//! before emphasis, so `![a](b_c.png)` stays one image.

pub mod kinds;
pub mod passes;
pub mod tokenizer;
pub mod types;

pub use passes::InlinePass;
pub use tokenizer::tokenize;
pub use types::{Fragment, Span, SpanKind};
