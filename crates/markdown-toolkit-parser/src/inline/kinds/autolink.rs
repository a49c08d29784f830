use std::sync::LazyLock;

use regex::Regex;

use crate::inline::types::HyperlinkStyle;

static ANGLE_URI: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^<([A-Za-z][A-Za-z0-9+.\-]{1,31}:[^\s<>]*)>").expect("valid autolink pattern")
});

static ANGLE_EMAIL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        r"^<([A-Za-z0-9.!#$%&'*+/=?^_`{|}~\-]+@",
        r"[A-Za-z0-9](?:[A-Za-z0-9\-]{0,61}[A-Za-z0-9])?",
        r"(?:\.[A-Za-z0-9](?:[A-Za-z0-9\-]{0,61}[A-Za-z0-9])?)*)>",
    ))
    .expect("valid email pattern")
});

static BARE_URL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?i:https?://|ftp://|www\.)[^\s<]+").expect("valid bare url pattern")
});

/// Trailing characters that end a sentence rather than a bare URL.
const TRAILING_PUNCTUATION: &[char] = &['?', '!', '.', ',', ':', '*', '_', '~', '\'', '"', ';'];

/// A recognized autolink.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Autolink {
    /// Bytes consumed from the input.
    pub len: usize,
    /// Text as written.
    pub text: String,
    /// Navigable URL.
    pub url: String,
    pub style: HyperlinkStyle,
}

impl Autolink {
    /// Matches `<scheme:…>` or `<user@host>` at the start of `s`.
    pub fn angle(s: &str) -> Option<Autolink> {
        if let Some(caps) = ANGLE_URI.captures(s) {
            let inner = caps.get(1)?.as_str();
            return Some(Autolink {
                len: caps.get(0)?.end(),
                text: inner.to_string(),
                url: inner.to_string(),
                style: HyperlinkStyle::Angle,
            });
        }
        let caps = ANGLE_EMAIL.captures(s)?;
        let inner = caps.get(1)?.as_str();
        Some(Autolink {
            len: caps.get(0)?.end(),
            text: inner.to_string(),
            url: format!("mailto:{inner}"),
            style: HyperlinkStyle::Email,
        })
    }

    /// Matches a bare `http(s)://`, `ftp://` or `www.` URL at the start of `s`.
    ///
    /// Sentence punctuation and unbalanced closing parentheses at the end are
    /// left out of the link.
    pub fn bare(s: &str) -> Option<Autolink> {
        let m = BARE_URL.find(s)?;
        let text = m.as_str();
        let lower = text.to_ascii_lowercase();
        let prefix_len = if lower.starts_with("www.") {
            4
        } else {
            lower.find("://")? + 3
        };

        let mut end = text.len();
        loop {
            let Some(last) = text[..end].chars().next_back() else {
                break;
            };
            if TRAILING_PUNCTUATION.contains(&last) {
                end -= last.len_utf8();
            } else if last == ')'
                && text[..end].matches('(').count() < text[..end].matches(')').count()
            {
                end -= 1;
            } else {
                break;
            }
        }
        if end <= prefix_len {
            return None;
        }

        let text = &text[..end];
        let url = if lower.starts_with("www.") {
            format!("http://{text}")
        } else {
            text.to_string()
        };
        Some(Autolink {
            len: end,
            text: text.to_string(),
            url,
            style: HyperlinkStyle::Bare,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn angle_uri() {
        let a = Autolink::angle("<https://example.com/a?b=c> rest").unwrap();
        assert_eq!(a.len, 27);
        assert_eq!(a.url, "https://example.com/a?b=c");
        assert_eq!(a.style, HyperlinkStyle::Angle);
    }

    #[test]
    fn angle_email() {
        let a = Autolink::angle("<someone@example.com>").unwrap();
        assert_eq!(a.text, "someone@example.com");
        assert_eq!(a.url, "mailto:someone@example.com");
        assert_eq!(a.style, HyperlinkStyle::Email);
    }

    #[test]
    fn angle_rejects_plain_html() {
        assert_eq!(Autolink::angle("<b>bold</b>"), None);
        assert_eq!(Autolink::angle("<not a link>"), None);
    }

    #[rstest]
    #[case("https://example.com.", "https://example.com")]
    #[case("https://example.com/a_(b))", "https://example.com/a_(b)")]
    #[case("http://x.org/path?q=1, then", "http://x.org/path?q=1")]
    #[case("HTTPS://EXAMPLE.COM", "HTTPS://EXAMPLE.COM")]
    fn bare_url_trimming(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(Autolink::bare(input).unwrap().text, expected);
    }

    #[test]
    fn www_gets_a_scheme() {
        let a = Autolink::bare("www.example.com").unwrap();
        assert_eq!(a.url, "http://www.example.com");
    }

    #[test]
    fn bare_scheme_alone_is_not_a_link() {
        assert_eq!(Autolink::bare("https://"), None);
        assert_eq!(Autolink::bare("https://..."), None);
        assert_eq!(Autolink::bare("plain text"), None);
    }
}
