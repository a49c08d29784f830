//! # Inline Kinds
//!
//! Inline-specific types that own their syntax delimiters. The parser calls
//! these constants and helpers; it never hardcodes `**` or `` ` ``.
//!
//! - **`CodeSpan`**: backtick runs, content normalization
//! - **`Emphasis`**: `*`, `_`, `~~` delimiters and flanking rules
//! - **`Link`**: destinations, tooltips, image sizes, reference ids
//! - **`Autolink`**: `<scheme:…>`, `<mail@host>` and bare URLs
//! - **`Script`**: `^` superscript and `<sup>`/`<sub>` tags
//! - **`Comment`**: `<!-- … -->`

pub mod autolink;
pub mod code_span;
pub mod comment;
pub mod emphasis;
pub mod link;
pub mod script;

pub use autolink::Autolink;
pub use code_span::CodeSpan;
pub use comment::Comment;
pub use emphasis::Emphasis;
pub use link::{Destination, Link};
pub use script::Script;
