/// Code span inline type with owned delimiter constant.
///
/// Code spans are raw zones: no other inline parsing occurs inside them.
pub struct CodeSpan;

impl CodeSpan {
    /// The backtick character that delimits code spans.
    pub const TICK: u8 = b'`';

    /// Normalizes the text between the backtick runs.
    ///
    /// Line endings become spaces, and one leading plus one trailing space are
    /// dropped when both are present and the content is not all spaces.
    pub fn content(inner: &str) -> String {
        let s = inner.replace('\n', " ");
        if s.len() >= 2 && s.starts_with(' ') && s.ends_with(' ') && !s.trim().is_empty() {
            s[1..s.len() - 1].to_string()
        } else {
            s
        }
    }
}
