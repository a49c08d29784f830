// Benchmark helper functions - Rust's dead code analysis doesn't understand
// that these are used by benchmark files in the same directory
// See: https://users.rust-lang.org/t/cargo-rustc-benches-awarnings/110111/2
#[allow(dead_code)]
pub fn generate_markdown_content(size: usize) -> String {
    let base = concat!(
        "# Title\n\n## Section\n\n",
        "Paragraph with **bold**, *italic*, `code` and a [link](https://example.com).\n\n",
        "- Bullet point\n  - Nested item\n- Another item\n\n",
        "> A quote\n> over two lines\n\n",
        "| a | b |\n|---|--:|\n| 1 | 2 |\n\n",
        "```rust\nfn example() {\n    println!(\"Hello\");\n}\n```\n\n",
    );
    base.repeat(size)
}

#[allow(dead_code)]
pub fn generate_nested_lists(depth: usize) -> String {
    (0..depth)
        .map(|i| format!("{}- level {i} with *emphasis*\n", "  ".repeat(i)))
        .collect()
}

#[allow(dead_code)]
pub fn generate_emphasis_soup(repeats: usize) -> String {
    "**a *b* c** _d_ ~~e~~ *f **g ".repeat(repeats)
}

/// Openers that never close, about 100 KB each.
#[allow(dead_code)]
pub fn generate_unclosed_openers() -> Vec<(&'static str, String)> {
    vec![
        ("bold", "**a ".repeat(25_000)),
        ("brackets", "[".repeat(100_000)),
        ("italic_over_brackets", format!("*{}", "[a".repeat(50_000))),
    ]
}
