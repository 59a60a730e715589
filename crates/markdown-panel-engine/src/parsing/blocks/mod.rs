//! # Block Classification
//!
//! Every raw line gets exactly one [`LineKind`] plus its cleaned content and
//! structural markers.
//!
//! ## Modules
//!
//! - **`types`**: `LineKind`, `ClassifiedLine`, `InlineMeta`, `Extracted`
//! - **`kinds`**: block kinds owning their syntax (headings, lists, rules, code, standalone lines)
//! - **`classify`**: `LineClassifier` and the ordered matcher table
//! - **`builder`**: `DocumentClassifier`, which adds fenced code tracking across lines
//! - **`indent`**: `depth_of`, turning indent prefixes into nesting levels
//!
//! ## Key Invariants
//!
//! - Classification is total: anything unmatched is a paragraph
//! - `content` never contains the markers that decided the kind
//! - Matcher order is load-bearing (nested lists before top-level lists, longest heading run first)

pub mod builder;
pub mod classify;
pub mod indent;
pub mod kinds;
pub mod types;

pub use builder::DocumentClassifier;
pub use classify::{LineClassifier, classify};
pub use indent::depth_of;
pub use kinds::FenceKind;
pub use types::{ClassifiedLine, CodeStyle, InlineMeta, LineKind};
