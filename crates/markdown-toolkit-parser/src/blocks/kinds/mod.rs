//! Block-specific types with owned delimiters.
//!
//! Each construct's syntax knowledge lives in its own module; the builder
//! only asks these types questions.

pub mod block_quote;
pub mod code_fence;
pub mod header;
pub mod indented_code;
pub mod link_reference;
pub mod list_marker;
pub mod paragraph;
pub mod rule;
pub mod table;
pub mod yaml_header;

pub use block_quote::BlockQuote;
pub use code_fence::{CodeFence, FenceKind, FenceSig};
pub use header::{AtxHeader, SetextHeader};
pub use indented_code::IndentedCode;
pub use link_reference::{LinkDefinition, LinkReference};
pub use list_marker::{ListMarker, MarkerKind};
pub use paragraph::Paragraph;
pub use rule::HorizontalRule;
pub use table::Table;
pub use yaml_header::YamlHeader;
