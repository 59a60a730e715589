/// Backtick-highlighted word or phrase. Group 1 = inner text.
pub struct Highlight;

impl Highlight {
    pub const PATTERN: &'static str = r"`([^`]+)`";
}
