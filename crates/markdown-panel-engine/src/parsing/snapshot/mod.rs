//! # Snapshot Support
//!
//! Stable views of parser output for snapshot tests and the CLI dump.
//!
//! ## Modules
//!
//! - **`normalize`**: Converts a `ParsedDoc` into a serializable `Snap` and
//!   its line-per-line text rendering
//! - **`invariants`**: Runtime checks for parser correctness (span coverage,
//!   ordering, spans only on prose lines)
//!
//! Fixture tests assert the text rendering with `insta`; property tests run
//! the invariant checks over arbitrary input.

pub mod invariants;
pub mod normalize;

pub use invariants::check as invariants;
pub use normalize::{LineSnap, Snap, SpanSnap, normalize};
