use crate::blocks::types::ColumnAlignment;

/// Pipe tables.
pub struct Table;

impl Table {
    pub const PIPE: char = '|';
    pub const ALIGN: char = ':';
    pub const DASH: char = '-';

    /// Whether `rest` could be a table row.
    pub fn is_row(rest: &str) -> bool {
        rest.contains(Self::PIPE)
    }

    /// Column alignments of a delimiter row such as `| :-- | :-: | --: |`.
    pub fn delimiter_row(rest: &str) -> Option<Vec<ColumnAlignment>> {
        if !Self::is_row(rest) {
            return None;
        }
        let cells = Self::split_row(rest);
        if cells.is_empty() {
            return None;
        }
        cells
            .into_iter()
            .map(|(from, to)| Self::alignment(&rest[from..to]))
            .collect()
    }

    fn alignment(cell: &str) -> Option<ColumnAlignment> {
        let left = cell.starts_with(Self::ALIGN);
        let right = cell.len() > 1 && cell.ends_with(Self::ALIGN);
        let dashes = cell.trim_start_matches(Self::ALIGN).trim_end_matches(Self::ALIGN);
        if dashes.is_empty() || !dashes.chars().all(|c| c == Self::DASH) {
            return None;
        }
        Some(match (left, right) {
            (true, true) => ColumnAlignment::Center,
            (true, false) => ColumnAlignment::Left,
            (false, true) => ColumnAlignment::Right,
            (false, false) => ColumnAlignment::Unspecified,
        })
    }

    /// Byte ranges of the trimmed cells of a row.
    ///
    /// Leading and trailing pipes are optional and `\|` does not split.
    pub fn split_row(rest: &str) -> Vec<(usize, usize)> {
        let b = rest.as_bytes();
        let mut bounds = vec![];
        let mut i = 0;
        while i < b.len() {
            match b[i] {
                b'\\' => i += 1,
                b'|' => bounds.push(i),
                _ => {}
            }
            i += 1;
        }

        let trimmed_start = rest.len() - rest.trim_start().len();
        let trimmed_end = rest.trim_end().len();
        let mut segments = vec![];
        let mut start = 0;
        for &p in &bounds {
            segments.push((start, p));
            start = p + 1;
        }
        segments.push((start, rest.len()));
        if bounds.first() == Some(&trimmed_start) {
            segments.remove(0);
        }
        if bounds.last().is_some_and(|&last| last + 1 == trimmed_end) {
            segments.pop();
        }

        segments
            .into_iter()
            .map(|(from, to)| Self::trim_cell(rest, from, to))
            .collect()
    }

    fn trim_cell(rest: &str, from: usize, to: usize) -> (usize, usize) {
        let cell = &rest[from..to];
        let lead = cell.len() - cell.trim_start().len();
        let body = cell.trim();
        (from + lead, from + lead + body.len())
    }
}
