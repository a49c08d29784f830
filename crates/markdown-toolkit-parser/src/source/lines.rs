use xi_rope::Rope;

use super::span::Span;

/// A reference to a single physical line in the rope with its byte span.
#[derive(Debug, Clone)]
pub struct LineRef {
    /// Byte span of this line in the rope (includes newline if present).
    pub span: Span,
    /// The line text, including its line ending.
    pub text: String,
}

/// Returns an iterator over lines with their byte spans.
///
/// Uses `lines_raw` to preserve newline characters, which keeps span
/// tracking exact for CRLF input too.
pub fn lines_with_spans(rope: &Rope) -> impl Iterator<Item = LineRef> + '_ {
    let mut offset = 0usize;
    rope.lines_raw(..).map(move |line| {
        let start = offset;
        let len = line.len();
        offset += len;
        LineRef {
            span: Span { start, end: offset },
            text: line.into_owned(),
        }
    })
}

/// A line as seen by a block recognizer.
///
/// At the top level this is a physical line minus its line ending. Inside a
/// container (quote, list item) the container's prefix has been stripped and
/// `content_start` points past it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    /// Full physical line span in the source, including the line ending.
    pub raw_line: Span,
    /// Absolute source offset where `text` begins.
    pub content_start: usize,
    /// Line content after container prefixes, without the line ending.
    pub text: String,
    /// Absolute source offset where `text` ends, before the line ending.
    pub text_end: usize,
}

impl Line {
    /// Splits a rope into top-level lines.
    pub fn from_rope(rope: &Rope) -> Vec<Line> {
        lines_with_spans(rope)
            .map(|lr| {
                let text = lr.text.trim_end_matches(['\r', '\n']);
                Line {
                    raw_line: lr.span,
                    content_start: lr.span.start,
                    text_end: lr.span.start + text.len(),
                    text: text.to_string(),
                }
            })
            .collect()
    }

    /// Whether the line holds nothing but whitespace.
    pub fn is_blank(&self) -> bool {
        self.text.trim().is_empty()
    }

    /// Source offset of `suffix`, a trailing slice of this line's text.
    ///
    /// Only leading text can be synthesized (split tabs), so a suffix always
    /// ends at `text_end` in the source.
    pub fn offset_of_suffix(&self, suffix: &str) -> usize {
        self.text_end - suffix.len().min(self.text_end - self.raw_line.start)
    }

    /// Returns this line with `cols` columns of leading indentation removed.
    ///
    /// Stops early at the first non-whitespace character.
    pub fn strip_columns(&self, cols: usize, tab_width: usize) -> Line {
        let (text, consumed) = strip_columns(&self.text, cols, tab_width);
        Line {
            raw_line: self.raw_line,
            content_start: self.content_start + consumed,
            text,
            text_end: self.text_end,
        }
    }

    /// Returns this line with all leading whitespace removed.
    pub fn strip_indent(&self) -> Line {
        let trimmed = self.text.trim_start_matches([' ', '\t']);
        let consumed = self.text.len() - trimmed.len();
        Line {
            raw_line: self.raw_line,
            content_start: self.content_start + consumed,
            text: trimmed.to_string(),
            text_end: self.text_end,
        }
    }

    /// Returns the line with the first `bytes` bytes of text removed.
    pub fn skip_bytes(&self, bytes: usize) -> Line {
        let bytes = bytes.min(self.text.len());
        Line {
            raw_line: self.raw_line,
            content_start: self.content_start + bytes,
            text: self.text[bytes..].to_string(),
            text_end: self.text_end,
        }
    }
}

/// Measures leading indentation, expanding tabs to `tab_width` stops.
///
/// Returns `(columns, bytes)` of the leading whitespace run.
pub fn indentation(text: &str, tab_width: usize) -> (usize, usize) {
    let tab_width = tab_width.max(1);
    let mut cols = 0usize;
    let mut bytes = 0usize;
    for b in text.bytes() {
        match b {
            b' ' => cols += 1,
            b'\t' => cols += tab_width - cols % tab_width,
            _ => break,
        }
        bytes += 1;
    }
    (cols, bytes)
}

/// Removes up to `cols` columns of leading whitespace.
///
/// A tab straddling the boundary is split: the columns left over past `cols`
/// are kept as spaces. Returns the remaining text and the number of source
/// bytes consumed.
pub fn strip_columns(text: &str, cols: usize, tab_width: usize) -> (String, usize) {
    let tab_width = tab_width.max(1);
    let mut col = 0usize;
    let mut consumed = 0usize;
    for b in text.bytes() {
        if col >= cols {
            break;
        }
        match b {
            b' ' => {
                col += 1;
                consumed += 1;
            }
            b'\t' => {
                let width = tab_width - col % tab_width;
                consumed += 1;
                if col + width > cols {
                    let leftover = col + width - cols;
                    let mut out = " ".repeat(leftover);
                    out.push_str(&text[consumed..]);
                    return (out, consumed);
                }
                col += width;
            }
            _ => break,
        }
    }
    (text[consumed..].to_string(), consumed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lines_keep_exact_spans() {
        let rope = Rope::from("a\r\nbc\n\nd");
        let lines = Line::from_rope(&rope);
        let spans: Vec<_> = lines.iter().map(|l| (l.raw_line.start, l.raw_line.end)).collect();
        assert_eq!(spans, vec![(0, 3), (3, 6), (6, 7), (7, 8)]);
        assert_eq!(lines[0].text, "a");
        assert!(lines[2].is_blank());
        assert_eq!(lines[3].text, "d");
    }

    #[test]
    fn indentation_expands_tabs() {
        assert_eq!(indentation("  x", 4), (2, 2));
        assert_eq!(indentation("\tx", 4), (4, 1));
        assert_eq!(indentation(" \tx", 4), (4, 2));
        assert_eq!(indentation("x", 4), (0, 0));
    }

    #[test]
    fn strip_columns_splits_tab() {
        assert_eq!(strip_columns("\tcode", 2, 4), ("  code".to_string(), 1));
        assert_eq!(strip_columns("    code", 4, 4), ("code".to_string(), 4));
        assert_eq!(strip_columns("  x", 4, 4), ("x".to_string(), 2));
    }

    #[test]
    fn strip_line_moves_content_start() {
        let line = Line {
            raw_line: Span::new(10, 20),
            content_start: 10,
            text: "   item".to_string(),
            text_end: 17,
        };
        let stripped = line.strip_columns(2, 4);
        assert_eq!(stripped.content_start, 12);
        assert_eq!(stripped.text, " item");
        assert_eq!(line.strip_indent().text, "item");
        assert_eq!(line.strip_indent().content_start, 13);
    }

    #[test]
    fn suffix_offsets_survive_split_tabs() {
        let rope = Rope::from("x\n\tcode\n");
        let line = &Line::from_rope(&rope)[1];
        let stripped = line.strip_columns(2, 4);
        assert_eq!(stripped.text, "  code");
        assert_eq!(stripped.text_end, 7);
        assert_eq!(stripped.offset_of_suffix("code"), 3);
        assert_eq!(stripped.offset_of_suffix("de"), 5);
    }
}
