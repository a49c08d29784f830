//! # markdown-toolkit-parser
//!
//! A total Markdown parser: any text produces a [`MarkdownDocument`], and
//! malformed markup degrades to literal text instead of an error.
//!
//! ## Pipeline
//!
//! 1. **Source lines** (`source`): the text is held in an `xi_rope::Rope` and
//!    split into lines with absolute byte spans.
//! 2. **Block parser** (`blocks`): recognizers run in priority order at each
//!    block start and build the block tree. Containers (quotes, list items)
//!    strip their prefixes and recurse.
//! 3. **Document builder** (`document`): every text payload in the tree is
//!    handed to the inline tokenizer (`inline`) and link reference
//!    definitions are indexed for lookup.
//!
//! ## Example
//!
//! ```
//! use markdown_toolkit_parser::{BlockKind, parse};
//!
//! let doc = parse("# Title\n\nHello **world**!");
//! assert_eq!(doc.blocks.len(), 2);
//! assert!(matches!(doc.blocks[0].kind, BlockKind::Header { level: 1, .. }));
//! ```

use std::sync::atomic::AtomicBool;

use xi_rope::Rope;

pub mod blocks;
pub mod document;
pub mod inline;
pub mod options;
pub mod render;
pub mod snapshot;
pub mod source;
pub mod visit;

pub use blocks::{
    Block, BlockKind, BlockParser, ColumnAlignment, HeaderStyle, InlineContent, ListItem,
    ListStyle, TableRow,
};
pub use document::{MarkdownDocument, Reference};
pub use inline::{HyperlinkStyle, Inline, InlineKind, LinkTarget};
pub use options::ParseOptions;
pub use visit::Visitor;

use source::Line;

/// Parses `text` with default options.
pub fn parse(text: &str) -> MarkdownDocument {
    parse_with_options(text, &ParseOptions::default())
}

pub fn parse_with_options(text: &str, options: &ParseOptions) -> MarkdownDocument {
    let rope = Rope::from(text);
    let lines = Line::from_rope(&rope);
    let blocks = BlockParser::new(options).parse_document(&lines);
    finish(rope, blocks, options)
}

/// Parses `text`, giving up with `None` once `cancel` is set.
///
/// The flag is checked between top-level blocks. When it is never set the
/// result is the same as [`parse_with_options`].
pub fn parse_cancellable(
    text: &str,
    options: &ParseOptions,
    cancel: &AtomicBool,
) -> Option<MarkdownDocument> {
    let rope = Rope::from(text);
    let lines = Line::from_rope(&rope);
    let blocks = BlockParser::new(options).parse_document_cancellable(&lines, cancel)?;
    Some(finish(rope, blocks, options))
}

fn finish(rope: Rope, blocks: Vec<Block>, options: &ParseOptions) -> MarkdownDocument {
    log::debug!(
        "parsed {} bytes into {} top-level blocks",
        rope.len(),
        blocks.len()
    );
    MarkdownDocument::build(rope, blocks, options)
}
