//! # Block Parsing
//!
//! Recognizer-based block parsing over source lines.
//!
//! ## Parsing Phases
//!
//! 1. **Line Classification** (`classify`): each line gets a `LineClass` of
//!    local facts (indentation, blank status, fence, header, rule, quote and
//!    list marker detection).
//!
//! 2. **Block Construction** (`builder`): at every block start the
//!    `BlockParser` tries its recognizers in a fixed priority order; the first
//!    that matches consumes its lines and returns the block.
//!
//! ## Modules
//!
//! - **`types`**: `Block`, `BlockKind` and their payloads
//! - **`kinds`**: Block-specific types with owned delimiters
//! - **`classify`**: `MarkdownLineClassifier` produces `LineClass` for each line
//! - **`builder`**: `BlockParser` and the leaf/quote/table recognizers
//! - **`list`**: List recognition with the nested list stack
//!
//! ## Key Invariants
//!
//! - Parsing is total: lines no recognizer claims become a paragraph
//! - Container nesting stops at `max_nesting_depth`; deeper syntax stays text
//! - Code blocks are raw zones: no block or inline parsing inside
//! - Block spans are byte ranges into the source, ordered and non-overlapping

pub mod builder;
pub mod classify;
pub mod kinds;
mod list;
pub mod types;

pub use builder::BlockParser;
pub use classify::{LineClass, MarkdownLineClassifier};
pub use types::{
    Block, BlockKind, ColumnAlignment, HeaderStyle, InlineContent, ListItem, ListStyle, TableRow,
};
