pub struct Comment;

impl Comment {
    pub const OPEN: &'static str = "<!--";
    pub const CLOSE: &'static str = "-->";

    /// Matches a comment at the start of `s`, returning `(len, inner text)`.
    pub fn parse(s: &str) -> Option<(usize, &str)> {
        let body = s.strip_prefix(Self::OPEN)?;
        let close = body.find(Self::CLOSE)?;
        Some((Self::OPEN.len() + close + Self::CLOSE.len(), &body[..close]))
    }
}
