//! Renderers over a parsed [`MarkdownDocument`](crate::MarkdownDocument).
//!
//! - **`html`**: HTML fragment, reference links resolved through the document
//! - **`outline`**: indented one-node-per-line dump for tests and debugging
//!
//! JSON needs no renderer here: every tree type derives `serde::Serialize`.

pub mod html;
pub mod outline;

pub use html::to_html;
pub use outline::outline;
