pub mod lines;
pub mod map;
pub mod slice;
pub mod span;

pub use lines::{Line, LineRef, indentation, lines_with_spans, strip_columns};
pub use map::SourceMap;
pub use slice::{preview, slice_to_string};
pub use span::Span;
