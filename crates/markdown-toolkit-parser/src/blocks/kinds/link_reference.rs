use crate::inline::{kinds::Link, unescape};

/// A parsed `[id]: url "tooltip"` line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkDefinition {
    pub id: String,
    pub url: String,
    pub tooltip: Option<String>,
}

/// Link reference definitions.
pub struct LinkReference;

impl LinkReference {
    pub const ID_SEPARATOR: &'static str = "]:";

    /// Parses a definition occupying the whole of `rest`.
    pub fn parse(rest: &str) -> Option<LinkDefinition> {
        let label = rest.strip_prefix(Link::OPEN as char)?;
        let close = label.find([']', '['])?;
        if !label[close..].starts_with(Self::ID_SEPARATOR) {
            return None;
        }
        let id = label[..close].trim();
        if id.is_empty() {
            return None;
        }

        let after = label[close + Self::ID_SEPARATOR.len()..].trim_start();
        let (url, after) = if let Some(body) = after.strip_prefix('<') {
            let end = body.find('>')?;
            (&body[..end], &body[end + 1..])
        } else {
            let end = after.find(char::is_whitespace).unwrap_or(after.len());
            (&after[..end], &after[end..])
        };
        if url.is_empty() {
            return None;
        }

        let tooltip = match after.trim() {
            "" => None,
            t if after.starts_with(char::is_whitespace) => Some(Self::tooltip(t)?),
            _ => return None,
        };

        Some(LinkDefinition {
            id: id.to_string(),
            url: unescape(url),
            tooltip,
        })
    }

    /// A tooltip wrapped in `"…"`, `'…'` or `(…)` with nothing after it.
    fn tooltip(t: &str) -> Option<String> {
        let mut chars = t.chars();
        let open = chars.next()?;
        let close = match open {
            '"' | '\'' => open,
            '(' => ')',
            _ => return None,
        };
        if t.len() < 2 || !t.ends_with(close) {
            return None;
        }
        Some(unescape(&t[1..t.len() - 1]))
    }
}
