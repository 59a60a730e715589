// Shared by every bench target; each one only uses a subset.
#[allow(dead_code)]
pub fn generate_markdown_content(size: usize) -> String {
    let base = "# Title\n\n## Section\n\nParagraph with **bold**, *italics* and a [link](http://x).\n\n- Bullet point\n    - Nested item with `code`\n1. Ordered\n    1.1. Nested ordered\n\n---\n![pic](img/p.png)\n<https://example.com>\n\n```rust\nfn example() {\n    println!(\"Hello\");\n}\n```\n\n";
    base.repeat(size)
}

#[allow(dead_code)]
pub fn generate_inline_heavy_line(repeats: usize) -> String {
    "see ![i](u.png \"t\") then [l](http://x) with ***bi***, **b**, _i_ and `h`; "
        .repeat(repeats)
}
