use crate::source::Line;

/// Blockquote block type with owned delimiter constant.
pub struct BlockQuote;

impl BlockQuote {
    /// The blockquote prefix character.
    pub const PREFIX: char = '>';

    /// Strips one level of quote prefix from a line.
    ///
    /// `indent_bytes` is the leading whitespace before the `>`. One space (or
    /// one column of a tab) after the `>` belongs to the prefix. Returns `None`
    /// if the line has no prefix.
    pub fn strip_prefix(line: &Line, indent_bytes: usize, tab_width: usize) -> Option<Line> {
        if !line.text[indent_bytes..].starts_with(Self::PREFIX) {
            return None;
        }
        let after = line.skip_bytes(indent_bytes + Self::PREFIX.len_utf8());
        Some(match after.text.as_bytes().first() {
            Some(b' ') => after.skip_bytes(1),
            Some(b'\t') => after.strip_columns(1, tab_width),
            _ => after,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::Span;

    fn line(text: &str) -> Line {
        Line {
            raw_line: Span::new(10, 10 + text.len() + 1),
            content_start: 10,
            text: text.to_string(),
            text_end: 10 + text.len(),
        }
    }

    #[test]
    fn strip_no_quote() {
        assert_eq!(BlockQuote::strip_prefix(&line("hello"), 0, 4), None);
    }

    #[test]
    fn strip_single_quote() {
        let out = BlockQuote::strip_prefix(&line("> hello"), 0, 4).unwrap();
        assert_eq!(out.text, "hello");
        assert_eq!(out.content_start, 12);
    }

    #[test]
    fn strip_keeps_nested_prefix() {
        let out = BlockQuote::strip_prefix(&line(" >> hello"), 1, 4).unwrap();
        assert_eq!(out.text, "> hello");
        assert_eq!(out.content_start, 12);
    }

    #[test]
    fn strip_bare_prefix() {
        let out = BlockQuote::strip_prefix(&line(">"), 0, 4).unwrap();
        assert!(out.is_blank());
    }
}
