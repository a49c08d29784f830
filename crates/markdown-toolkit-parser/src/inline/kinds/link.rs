use crate::inline::unescape;

/// Link and image syntax.
pub struct Link;

/// The `(url "tooltip" =WxH)` tail of an inline link or image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Destination {
    pub url: String,
    pub tooltip: Option<String>,
    pub width: Option<u32>,
    pub height: Option<u32>,
    /// Bytes consumed, including both parentheses.
    pub len: usize,
}

impl Link {
    pub const OPEN: u8 = b'[';
    pub const CLOSE: u8 = b']';
    pub const IMAGE_BANG: u8 = b'!';
    pub const DEST_OPEN: u8 = b'(';
    pub const DEST_CLOSE: u8 = b')';
    pub const SIZE: u8 = b'=';

    /// Parses a destination starting at the `(` that opens `s`.
    ///
    /// `allow_size` enables the `=WxH` image size suffix.
    pub fn parse_destination(s: &str, allow_size: bool) -> Option<Destination> {
        let b = s.as_bytes();
        if b.first() != Some(&Self::DEST_OPEN) {
            return None;
        }
        let mut i = skip_ws(b, 1);

        let url = if b.get(i) == Some(&b'<') {
            let rel = s[i + 1..].find(['>', '\n'])?;
            if b[i + 1 + rel] != b'>' {
                return None;
            }
            let url = unescape(&s[i + 1..i + 1 + rel]);
            i += rel + 2;
            url
        } else {
            let start = i;
            let mut parens = 0usize;
            while i < b.len() {
                match b[i] {
                    b'\\' if b.get(i + 1).is_some_and(u8::is_ascii_punctuation) => i += 1,
                    Self::DEST_OPEN => parens += 1,
                    Self::DEST_CLOSE if parens == 0 => break,
                    Self::DEST_CLOSE => parens -= 1,
                    c if c.is_ascii_whitespace() => break,
                    _ => {}
                }
                i += 1;
            }
            unescape(&s[start..i.min(b.len())])
        };

        let after_url = i;
        i = skip_ws(b, i);

        let mut tooltip = None;
        if i > after_url
            && let Some(&quote) = b.get(i)
            && matches!(quote, b'"' | b'\'' | b'(')
        {
            let close = if quote == b'(' { b')' } else { quote };
            let mut j = i + 1;
            while j < b.len() && b[j] != close {
                if b[j] == b'\\' {
                    j += 1;
                }
                j += 1;
            }
            if j >= b.len() {
                return None;
            }
            tooltip = Some(unescape(&s[i + 1..j]));
            i = skip_ws(b, j + 1);
        }

        let (mut width, mut height) = (None, None);
        if allow_size && b.get(i) == Some(&Self::SIZE) {
            let (w, h, len) = parse_size(&s[i + 1..])?;
            width = w;
            height = h;
            i = skip_ws(b, i + 1 + len);
        }

        if b.get(i) != Some(&Self::DEST_CLOSE) {
            return None;
        }
        Some(Destination {
            url,
            tooltip,
            width,
            height,
            len: i + 1,
        })
    }

    /// Normalizes a reference id for matching: case-folded, whitespace collapsed.
    pub fn normalize_id(id: &str) -> String {
        id.split_whitespace()
            .collect::<Vec<_>>()
            .join(" ")
            .to_lowercase()
    }
}

fn skip_ws(b: &[u8], mut i: usize) -> usize {
    while i < b.len() && b[i].is_ascii_whitespace() {
        i += 1;
    }
    i
}

/// Parses `W`, `WxH`, `xH` after the `=`. Returns `(width, height, len)`.
fn parse_size(s: &str) -> Option<(Option<u32>, Option<u32>, usize)> {
    let digits = |from: usize| {
        s[from..]
            .bytes()
            .take_while(u8::is_ascii_digit)
            .count()
    };
    let w_len = digits(0);
    let width = s[..w_len].parse().ok();
    let mut len = w_len;
    let mut height = None;
    if s.as_bytes().get(len) == Some(&b'x') {
        let h_len = digits(len + 1);
        height = s[len + 1..len + 1 + h_len].parse().ok();
        len += 1 + h_len;
    }
    if width.is_none() && height.is_none() {
        return None;
    }
    Some((width, height, len))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn dest(url: &str, tooltip: Option<&str>, len: usize) -> Destination {
        Destination {
            url: url.to_string(),
            tooltip: tooltip.map(str::to_string),
            width: None,
            height: None,
            len,
        }
    }

    #[test]
    fn plain_destination() {
        assert_eq!(
            Link::parse_destination("(https://a.b) tail", false),
            Some(dest("https://a.b", None, 13))
        );
    }

    #[test]
    fn destination_with_tooltip() {
        assert_eq!(
            Link::parse_destination("(/x \"Title here\")", false),
            Some(dest("/x", Some("Title here"), 17))
        );
        assert_eq!(
            Link::parse_destination("(/x 'T')", false),
            Some(dest("/x", Some("T"), 8))
        );
    }

    #[test]
    fn balanced_parens_in_url() {
        assert_eq!(
            Link::parse_destination("(wiki/Foo_(bar))", false),
            Some(dest("wiki/Foo_(bar)", None, 16))
        );
    }

    #[test]
    fn angle_destination_allows_spaces() {
        assert_eq!(
            Link::parse_destination("(<a b.png>)", false),
            Some(dest("a b.png", None, 11))
        );
    }

    #[test]
    fn space_in_bare_url_is_rejected() {
        assert_eq!(Link::parse_destination("(a b)", false), None);
        assert_eq!(Link::parse_destination("(unclosed", false), None);
    }

    #[test]
    fn image_size_suffix() {
        let d = Link::parse_destination("(cat.png =32x16)", true).unwrap();
        assert_eq!((d.width, d.height), (Some(32), Some(16)));
        let d = Link::parse_destination("(cat.png \"c\" =x8)", true).unwrap();
        assert_eq!((d.width, d.height), (None, Some(8)));
        assert_eq!(d.tooltip.as_deref(), Some("c"));
        assert_eq!(Link::parse_destination("(cat.png =32)", false), None);
    }

    #[test]
    fn empty_destination() {
        assert_eq!(Link::parse_destination("()", false), Some(dest("", None, 2)));
    }

    #[test]
    fn reference_ids_normalize() {
        assert_eq!(Link::normalize_id("  Foo \n Bar "), "foo bar");
    }
}
