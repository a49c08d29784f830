/// `#` style headers.
pub struct AtxHeader;

impl AtxHeader {
    pub const MARKER: u8 = b'#';
    pub const MAX_LEVEL: usize = 6;

    /// Header level if `rest` opens an ATX header: one to six `#` followed by
    /// whitespace or the end of the line.
    pub fn level(rest: &str) -> Option<u8> {
        let n = rest.bytes().take_while(|&b| b == Self::MARKER).count();
        if n == 0 || n > Self::MAX_LEVEL {
            return None;
        }
        match rest.as_bytes().get(n) {
            None | Some(b' ') | Some(b'\t') => Some(n as u8),
            _ => None,
        }
    }

    /// Byte offset in `rest` where [`content`](Self::content) begins.
    pub fn content_offset(rest: &str, level: u8) -> usize {
        rest.len() - rest[level as usize..].trim_start().len()
    }

    /// Header text without the opening run and an optional closing run.
    pub fn content(rest: &str, level: u8) -> &str {
        let body = rest[level as usize..].trim();
        let without_hashes = body.trim_end_matches(Self::MARKER as char);
        if without_hashes.is_empty() {
            return "";
        }
        // A closing run only counts when separated by whitespace
        if without_hashes.len() < body.len() && without_hashes.ends_with([' ', '\t']) {
            without_hashes.trim_end()
        } else {
            body
        }
    }
}

/// Underlined headers.
pub struct SetextHeader;

impl SetextHeader {
    pub const LEVEL_ONE: char = '=';
    pub const LEVEL_TWO: char = '-';

    /// Level of a setext underline: a run of `=` (1) or `-` (2), trailing
    /// whitespace allowed.
    pub fn underline(rest: &str) -> Option<u8> {
        let t = rest.trim_end();
        if t.is_empty() {
            None
        } else if t.chars().all(|c| c == Self::LEVEL_ONE) {
            Some(1)
        } else if t.chars().all(|c| c == Self::LEVEL_TWO) {
            Some(2)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("# Title", Some(1))]
    #[case("###### Six", Some(6))]
    #[case("####### Seven", None)]
    #[case("#hashtag", None)]
    #[case("#", Some(1))]
    #[case("## ", Some(2))]
    #[case("Title", None)]
    fn atx_levels(#[case] input: &str, #[case] expected: Option<u8>) {
        assert_eq!(AtxHeader::level(input), expected);
    }

    #[rstest]
    #[case("# Title", 1, "Title")]
    #[case("## Title ##", 2, "Title")]
    #[case("# C#", 1, "C#")]
    #[case("# ###", 1, "")]
    #[case("#", 1, "")]
    fn atx_content(#[case] input: &str, #[case] level: u8, #[case] expected: &str) {
        assert_eq!(AtxHeader::content(input, level), expected);
    }

    #[test]
    fn content_offset_skips_marker_and_spaces() {
        let rest = "##   Title ##";
        let at = AtxHeader::content_offset(rest, 2);
        assert_eq!(at, 5);
        assert!(rest[at..].starts_with(AtxHeader::content(rest, 2)));
    }

    #[rstest]
    #[case("===", Some(1))]
    #[case("-  ", Some(2))]
    #[case("=-=", None)]
    #[case("", None)]
    fn setext_underlines(#[case] input: &str, #[case] expected: Option<u8>) {
        assert_eq!(SetextHeader::underline(input), expected);
    }
}
