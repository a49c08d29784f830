use crate::{
    blocks::types::InlineContent,
    source::{Line, SourceMap},
};

/// Paragraph block type: the fallback for lines no other block claims.
pub struct Paragraph;

impl Paragraph {
    /// Joins paragraph lines into inline content.
    ///
    /// Leading whitespace of each line is dropped, lines are joined with
    /// `\n` and trailing whitespace of the block is trimmed.
    pub fn content(lines: &[Line]) -> InlineContent {
        let mut raw = String::new();
        let mut map = SourceMap::default();
        for (n, line) in lines.iter().enumerate() {
            if n > 0 {
                raw.push('\n');
            }
            let text = line.text.trim_start();
            map.push(raw.len(), line.offset_of_suffix(text), text.len());
            raw.push_str(text);
        }
        raw.truncate(raw.trim_end().len());
        map.truncate(raw.len());
        InlineContent::mapped(raw, map)
    }
}
