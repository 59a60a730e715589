/// Image construct `![alt](url "title")`.
///
/// Groups: 1 = alt text, 2 = url, 3 = optional title. The alt text is the
/// whole bracket content; nothing is stripped from its front.
pub struct Image;

impl Image {
    pub const PATTERN: &'static str = r#"!\[([^\]]*)\]\(([^")]+?)(?:\s+"([^"]*)")?\s*\)"#;
}
