/// Link constructs `[name](url)` and `<url>`.
pub struct Link;

impl Link {
    /// Groups: 1 = name, 2 = url.
    pub const BRACKET_PATTERN: &'static str = r"\[([^\]]*)\]\(([^)]+)\)";
    /// Group 1 = url.
    pub const ANGLE_PATTERN: &'static str = r"<(.+)>";
    /// Bracket text starting with this is reserved for image alt text.
    pub const RESERVED_NAME_PREFIX: &'static str = "alt";

    pub fn is_link_name(name: &str) -> bool {
        !name.starts_with(Self::RESERVED_NAME_PREFIX)
    }
}
