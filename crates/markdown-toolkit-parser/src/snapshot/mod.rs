//! # Snapshot Testing Support
//!
//! Runtime checks used by the test suite alongside `insta` snapshots of the
//! outline dump.
//!
//! ## Modules
//!
//! - **`invariants`**: structural checks on a parsed document (spans in
//!   bounds, children inside parents, inline spans tiling their text)

pub mod invariants;

pub use invariants::check as invariants;
