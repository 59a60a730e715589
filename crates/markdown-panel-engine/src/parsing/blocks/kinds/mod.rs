//! Block kinds that own their syntax.
//!
//! Each kind exposes pure matchers `fn(&str) -> Option<Extracted>`; the
//! classifier decides the order they are tried in. [`CodeFence`] is the odd
//! one out: fence state spans lines, so the document classifier drives it.

pub mod code_fence;
pub mod heading;
pub mod indented_code;
pub mod list_item;
pub mod separator;
pub mod standalone;

pub use code_fence::{CodeFence, FenceKind, FenceMark};
pub use heading::Heading;
pub use indented_code::IndentedCode;
pub use list_item::ListItem;
pub use separator::Separator;
pub use standalone::{HighlightedWord, ImageLine, LinkLine};
