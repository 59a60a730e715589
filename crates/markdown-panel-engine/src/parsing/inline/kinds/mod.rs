//! # Inline Kinds
//!
//! Inline constructs that own their syntax. Each kind holds the unanchored
//! regex source for its construct; the inline passes compile these as-is and
//! the block classifier anchors them to whole lines for standalone
//! image/link/highlight lines.
//!
//! ## Types
//!
//! - **`Image`**: `![alt](url "title")`
//! - **`Link`**: `[name](url)` and `<url>`
//! - **`Emphasis`**: `***x***`, `**x**`, `*x*` and their `_` twins
//! - **`Highlight`**: `` `x` ``

pub mod emphasis;
pub mod highlight;
pub mod image;
pub mod link;

pub use emphasis::Emphasis;
pub use highlight::Highlight;
pub use image::Image;
pub use link::Link;
