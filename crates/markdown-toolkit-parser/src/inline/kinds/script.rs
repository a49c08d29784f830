/// Superscript and subscript syntax.
pub struct Script;

impl Script {
    pub const CARET: u8 = b'^';
    pub const SUP_OPEN: &'static str = "<sup>";
    pub const SUP_CLOSE: &'static str = "</sup>";
    pub const SUB_OPEN: &'static str = "<sub>";
    pub const SUB_CLOSE: &'static str = "</sub>";

    /// For `s` starting right after a `^(`, returns the offset of the
    /// matching `)`, honoring nested parentheses.
    pub fn paren_close(s: &str) -> Option<usize> {
        let mut level = 0usize;
        for (i, b) in s.bytes().enumerate() {
            match b {
                b'(' => level += 1,
                b')' if level == 0 => return Some(i),
                b')' => level -= 1,
                _ => {}
            }
        }
        None
    }

    /// Length of the `^word` operand: everything up to the next whitespace.
    pub fn word_len(s: &str) -> usize {
        s.find(char::is_whitespace).unwrap_or(s.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paren_close_nests() {
        assert_eq!(Script::paren_close("a (b) c) d"), Some(7));
        assert_eq!(Script::paren_close("open"), None);
    }

    #[test]
    fn word_len_stops_at_space() {
        assert_eq!(Script::word_len("2 apples"), 1);
        assert_eq!(Script::word_len("end"), 3);
    }
}
