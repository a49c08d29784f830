/// Emphasis delimiters and the flanking rules that decide whether a run of
/// them may open or close a span.
pub struct Emphasis;

impl Emphasis {
    pub const STAR: u8 = b'*';
    pub const UNDERSCORE: u8 = b'_';
    pub const TILDE: u8 = b'~';
    /// Length of the `~~` strikethrough delimiter.
    pub const STRIKE_LEN: usize = 2;

    /// A run opens when followed by non-whitespace. `_` additionally must not
    /// sit inside a word.
    pub fn can_open(delim: u8, prev: Option<char>, next: Option<char>) -> bool {
        let Some(next) = next else {
            return false;
        };
        if next.is_whitespace() {
            return false;
        }
        if delim == Self::UNDERSCORE && prev.is_some_and(char::is_alphanumeric) {
            return false;
        }
        true
    }

    /// A run closes when preceded by non-whitespace. `_` additionally must not
    /// be followed by a word character.
    pub fn can_close(delim: u8, prev: Option<char>, next: Option<char>) -> bool {
        let Some(prev) = prev else {
            return false;
        };
        if prev.is_whitespace() {
            return false;
        }
        if delim == Self::UNDERSCORE && next.is_some_and(char::is_alphanumeric) {
            return false;
        }
        true
    }

    /// Delimiter lengths a nested opener of `delim` may use, longest first.
    pub fn nested_lengths(delim: u8) -> &'static [usize] {
        if delim == Self::TILDE { &[2] } else { &[2, 1] }
    }
}
