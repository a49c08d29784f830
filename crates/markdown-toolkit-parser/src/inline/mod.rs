//! # Inline Tokenizer
//!
//! Cursor-based inline parsing over one block's raw text.
//!
//! ## Architecture
//!
//! Inline parsing runs after block parsing, over the raw text of every
//! text-bearing block (paragraphs, headers, table cells). The scanner walks
//! left to right and at each position tries the recognizers in priority
//! order: escape, code span, `<…>` forms, image, link, emphasis,
//! strikethrough, superscript, bare URL.
//!
//! A recognized span's interior is tokenized again recursively. An opener
//! without a closer is emitted as literal text and scanning resumes one
//! character later, so the tokenizer never fails.
//!
//! ## Modules
//!
//! - **`types`**: `Inline`, `InlineKind`, `LinkTarget`
//! - **`kinds`**: Delimiter ownership per construct
//! - **`cursor`**: `Cursor` for position-tracked scanning
//! - **`parser`**: `parse_inline()` entry point
//!
//! ## Raw Zone Precedence
//!
//! Code spans win: `` `**not bold**` `` is a single `Code` node, and closers
//! inside a code span never terminate an enclosing emphasis.

pub mod cursor;
pub mod kinds;
pub mod parser;
pub mod types;

pub use parser::parse_inline;
pub use types::{HyperlinkStyle, Inline, InlineKind, LinkTarget};

/// Decodes backslash escapes of ASCII punctuation.
pub(crate) fn unescape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut chars = s.chars().peekable();
    while let Some(c) = chars.next() {
        if c == '\\'
            && let Some(&next) = chars.peek()
            && next.is_ascii_punctuation()
        {
            out.push(next);
            chars.next();
            continue;
        }
        out.push(c);
    }
    out
}
