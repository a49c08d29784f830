use std::collections::{HashMap, HashSet};

use crate::{options::ParseOptions, source::Span};

use super::{
    cursor::Cursor,
    kinds::{Autolink, CodeSpan, Comment, Emphasis, Link, Script},
    types::{Inline, InlineKind, LinkTarget},
    unescape,
};

/// Parses a block's raw text into a sequence of [`Inline`]s.
///
/// Spans are offsets into `raw`. The result covers `raw` with no gaps:
/// concatenating `raw[span]` over the returned nodes reproduces `raw`.
/// Unmatched delimiters become text; this function never fails.
///
/// Failed searches are remembered, so unmatched delimiters and brackets cost
/// linear time overall instead of one scan to the end per opener.
pub fn parse_inline(raw: &str, options: &ParseOptions) -> Vec<Inline> {
    InlineParser::new(raw, options).parse_range(0, raw.len(), 0, false)
}

/// Outcome of trying a recognizer at one position.
enum Scan {
    /// A construct spanning up to the given end offset.
    Node(InlineKind, usize),
    /// Literal text up to the given end offset.
    Literal(usize),
}

/// What follows the `]` of a link or image.
struct LinkTail {
    target: LinkTarget,
    tooltip: Option<String>,
    width: Option<u32>,
    height: Option<u32>,
    end: usize,
}

struct InlineParser<'a> {
    raw: &'a str,
    options: &'a ParseOptions,
    /// `(from, hi, delimiter, length)` closer searches known to fail.
    failed_closers: HashSet<(usize, usize, u8, usize)>,
    /// Positions a failed closer search stepped on, per `(hi, delimiter,
    /// length)`. A later search reaching one of them fails the same way.
    dead_ends: HashMap<(usize, u8, usize), HashSet<usize>>,
    /// Matching `]` per `(open, hi)`. One scan settles every `[` it passes.
    brackets: HashMap<(usize, usize), Option<usize>>,
    /// Per `(needle, hi)`, the smallest offset from which `needle` is absent.
    absent_from: HashMap<(&'static str, usize), usize>,
}

impl<'a> InlineParser<'a> {
    fn new(raw: &'a str, options: &'a ParseOptions) -> Self {
        Self {
            raw,
            options,
            failed_closers: HashSet::new(),
            dead_ends: HashMap::new(),
            brackets: HashMap::new(),
            absent_from: HashMap::new(),
        }
    }

    /// Tokenizes `raw[lo..hi]`. Positions in the result are offsets into `raw`.
    fn parse_range(&mut self, lo: usize, hi: usize, depth: usize, in_link: bool) -> Vec<Inline> {
        let raw = self.raw;
        if lo >= hi {
            return vec![];
        }
        if depth >= self.options.max_nesting_depth {
            log::debug!(
                "inline nesting depth {depth} reached; keeping {} bytes as text",
                hi - lo
            );
            return vec![Inline {
                kind: InlineKind::Text(raw[lo..hi].to_string()),
                span: Span::new(lo, hi),
            }];
        }

        let mut cur = Cursor::new(&raw[lo..hi], lo);
        let mut out = vec![];
        let mut text = String::new();
        let mut text_start = lo;

        // Adjacent literal text accumulates into a single Text node
        fn flush_text(out: &mut Vec<Inline>, text: &mut String, start: usize, end: usize) {
            if end > start {
                out.push(Inline {
                    kind: InlineKind::Text(std::mem::take(text)),
                    span: Span::new(start, end),
                });
            }
        }

        while !cur.eof() {
            if cur.peek() == Some(b'\\')
                && let Some(next) = cur.peek_at(1)
                && next.is_ascii_punctuation()
            {
                text.push(next as char);
                cur.bump_n(2);
                continue;
            }

            let at = cur.pos();
            match self.scan(at, hi, depth, in_link) {
                Some(Scan::Node(kind, end)) => {
                    flush_text(&mut out, &mut text, text_start, at);
                    out.push(Inline {
                        kind,
                        span: Span::new(at, end),
                    });
                    cur.bump_n(end - at);
                    text_start = end;
                }
                Some(Scan::Literal(end)) => {
                    text.push_str(&raw[at..end]);
                    cur.bump_n(end - at);
                }
                None => {
                    if let Some(c) = cur.bump_char() {
                        text.push(c);
                    }
                }
            }
        }

        flush_text(&mut out, &mut text, text_start, hi);
        out
    }

    /// Dispatches on the byte at `at` to the recognizer that owns it.
    fn scan(&mut self, at: usize, hi: usize, depth: usize, in_link: bool) -> Option<Scan> {
        let b = self.raw.as_bytes()[at];
        match b {
            CodeSpan::TICK => Some(self.code_span(at, hi)),
            b'<' => self.angle(at, hi, depth, in_link),
            Link::IMAGE_BANG if self.byte(at + 1, hi) == Some(Link::OPEN) => self.image(at, hi),
            Link::OPEN if !in_link => self.link(at, hi, depth),
            Emphasis::STAR | Emphasis::UNDERSCORE => self.emphasis(at, hi, depth, in_link),
            Emphasis::TILDE => self.strikethrough(at, hi, depth, in_link),
            Script::CARET if self.options.superscript => self.superscript(at, hi, depth, in_link),
            b'h' | b'H' | b'w' | b'W' | b'f' | b'F' if self.options.autolinks && !in_link => {
                self.bare_url(at, hi)
            }
            _ => None,
        }
    }

    fn code_span(&self, at: usize, hi: usize) -> Scan {
        let n = self.run_len(at, hi, CodeSpan::TICK);
        match self.find_code_close(at + n, hi, n) {
            Some(close) => Scan::Node(
                InlineKind::Code(CodeSpan::content(&self.raw[at + n..close])),
                close + n,
            ),
            // An unclosed backtick run is literal as a whole
            None => Scan::Literal(at + n),
        }
    }

    fn angle(&mut self, at: usize, hi: usize, depth: usize, in_link: bool) -> Option<Scan> {
        let raw = self.raw;
        let rest = &raw[at..hi];

        if rest.starts_with(Comment::OPEN) {
            self.find_from(Comment::CLOSE, at + Comment::OPEN.len(), hi)?;
            let (len, inner) = Comment::parse(rest)?;
            return Some(Scan::Node(InlineKind::Comment(inner.to_string()), at + len));
        }

        for (open, close, superscript) in [
            (Script::SUP_OPEN, Script::SUP_CLOSE, true),
            (Script::SUB_OPEN, Script::SUB_CLOSE, false),
        ] {
            if rest.starts_with(open) {
                let lo = at + open.len();
                let rel = self.find_from(close, lo, hi)? - lo;
                if rel == 0 {
                    return None;
                }
                let children = self.parse_range(lo, lo + rel, depth + 1, in_link);
                let kind = if superscript {
                    InlineKind::Superscript(children)
                } else {
                    InlineKind::Subscript(children)
                };
                return Some(Scan::Node(kind, lo + rel + close.len()));
            }
        }

        if in_link {
            return None;
        }
        let link = Autolink::angle(rest)?;
        Some(Scan::Node(
            InlineKind::Hyperlink {
                text: link.text,
                url: link.url,
                style: link.style,
            },
            at + link.len,
        ))
    }

    fn image(&mut self, at: usize, hi: usize) -> Option<Scan> {
        let open = at + 1;
        let close = self.find_bracket_close(open, hi)?;
        let tail = self.link_tail(close + 1, hi, open + 1, close, true)?;
        Some(Scan::Node(
            InlineKind::Image {
                alt: unescape(&self.raw[open + 1..close]),
                target: tail.target,
                tooltip: tail.tooltip,
                width: tail.width,
                height: tail.height,
            },
            tail.end,
        ))
    }

    fn link(&mut self, at: usize, hi: usize, depth: usize) -> Option<Scan> {
        let close = self.find_bracket_close(at, hi)?;
        let tail = self.link_tail(close + 1, hi, at + 1, close, false)?;
        let inlines = self.parse_range(at + 1, close, depth + 1, true);
        Some(Scan::Node(
            InlineKind::Link {
                inlines,
                target: tail.target,
                tooltip: tail.tooltip,
            },
            tail.end,
        ))
    }

    /// Bold first, then italic. `***x***` matches bold on the outside and
    /// leaves `*x*` for the recursive pass.
    fn emphasis(&mut self, at: usize, hi: usize, depth: usize, in_link: bool) -> Option<Scan> {
        let delim = self.raw.as_bytes()[at];
        let run = self.run_len(at, hi, delim);
        if !Emphasis::can_open(delim, self.char_before(at), self.char_at(at + run, hi)) {
            return None;
        }

        if run >= 2
            && let Some(close) = self.find_closer(at + 2, hi, delim, 2, depth)
        {
            let children = self.parse_range(at + 2, close, depth + 1, in_link);
            return Some(Scan::Node(InlineKind::Bold(children), close + 2));
        }

        let close = self.find_closer(at + 1, hi, delim, 1, depth)?;
        let children = self.parse_range(at + 1, close, depth + 1, in_link);
        Some(Scan::Node(InlineKind::Italic(children), close + 1))
    }

    fn strikethrough(
        &mut self,
        at: usize,
        hi: usize,
        depth: usize,
        in_link: bool,
    ) -> Option<Scan> {
        let run = self.run_len(at, hi, Emphasis::TILDE);
        let (prev, next) = (self.char_before(at), self.char_at(at + run, hi));
        if run < Emphasis::STRIKE_LEN || !Emphasis::can_open(Emphasis::TILDE, prev, next) {
            return None;
        }
        let len = Emphasis::STRIKE_LEN;
        let close = self.find_closer(at + len, hi, Emphasis::TILDE, len, depth)?;
        let children = self.parse_range(at + len, close, depth + 1, in_link);
        Some(Scan::Node(InlineKind::Strikethrough(children), close + len))
    }

    fn superscript(&mut self, at: usize, hi: usize, depth: usize, in_link: bool) -> Option<Scan> {
        if self.byte(at + 1, hi) == Some(b'(') {
            let rel = Script::paren_close(&self.raw[at + 2..hi])?;
            if rel == 0 {
                return None;
            }
            let children = self.parse_range(at + 2, at + 2 + rel, depth + 1, in_link);
            return Some(Scan::Node(InlineKind::Superscript(children), at + 3 + rel));
        }

        let len = Script::word_len(&self.raw[at + 1..hi]);
        if len == 0 {
            return None;
        }
        let children = self.parse_range(at + 1, at + 1 + len, depth + 1, in_link);
        Some(Scan::Node(InlineKind::Superscript(children), at + 1 + len))
    }

    fn bare_url(&self, at: usize, hi: usize) -> Option<Scan> {
        if self.char_before(at).is_some_and(char::is_alphanumeric) {
            return None;
        }
        let link = Autolink::bare(&self.raw[at..hi])?;
        Some(Scan::Node(
            InlineKind::Hyperlink {
                text: link.text,
                url: link.url,
                style: link.style,
            },
            at + link.len,
        ))
    }

    /// Searches `[from, hi)` for a closing run of at least `len` delimiters.
    ///
    /// Code spans and links are skipped whole, and nested openers of the same
    /// delimiter are matched first, so an inner span's closer is never taken
    /// for the outer one. Returns the offset of the closing run.
    fn find_closer(
        &mut self,
        from: usize,
        hi: usize,
        delim: u8,
        len: usize,
        depth: usize,
    ) -> Option<usize> {
        let key = (from, hi, delim, len);
        if self.failed_closers.contains(&key) {
            return None;
        }

        let lane = (hi, delim, len);
        let bytes = self.raw.as_bytes();
        let mut trail = vec![];
        let mut j = from;
        while j < hi {
            if self
                .dead_ends
                .get(&lane)
                .is_some_and(|dead| dead.contains(&j))
            {
                break;
            }
            // The start itself may not close, so only later steps are shared
            if j > from {
                trail.push(j);
            }
            match bytes[j] {
                b'\\' => j += 2,
                CodeSpan::TICK => {
                    j = self
                        .code_span_end(j, hi)
                        .unwrap_or(j + self.run_len(j, hi, CodeSpan::TICK));
                }
                Link::OPEN => j = self.link_end(j, hi).unwrap_or(j + 1),
                b if b == delim => {
                    let k = j + self.run_len(j, hi, delim);
                    let prev = self.char_before(j);
                    let next = self.char_at(k, hi);
                    if j > from && k - j >= len && Emphasis::can_close(delim, prev, next) {
                        return Some(j);
                    }
                    if depth + 1 < self.options.max_nesting_depth
                        && Emphasis::can_open(delim, prev, next)
                        && let Some(end) = self.nested_end(j, k, hi, delim, depth + 1)
                    {
                        j = end;
                        continue;
                    }
                    j = k;
                }
                _ => j += 1,
            }
        }

        self.failed_closers.insert(key);
        self.dead_ends.entry(lane).or_default().extend(trail);
        None
    }

    /// End of a nested emphasis span opening at `[j, k)`, if it closes.
    fn nested_end(
        &mut self,
        j: usize,
        k: usize,
        hi: usize,
        delim: u8,
        depth: usize,
    ) -> Option<usize> {
        for &n in Emphasis::nested_lengths(delim) {
            if k - j >= n
                && let Some(close) = self.find_closer(j + n, hi, delim, n, depth)
            {
                return Some(close + n);
            }
        }
        None
    }

    /// Finds the `]` matching the `[` at `open`, skipping escapes and code spans.
    ///
    /// Every `[` the scan passes is settled along the way: matched ones are
    /// recorded with their `]` and jumped over by later scans, and the ones
    /// still open when the range ends are recorded as unmatched.
    fn find_bracket_close(&mut self, open: usize, hi: usize) -> Option<usize> {
        if let Some(&known) = self.brackets.get(&(open, hi)) {
            return known;
        }
        let bytes = self.raw.as_bytes();
        let mut stack = vec![];
        let mut j = open;
        while j < hi {
            match bytes[j] {
                b'\\' => {
                    j += 2;
                    continue;
                }
                CodeSpan::TICK => {
                    j = self
                        .code_span_end(j, hi)
                        .unwrap_or(j + self.run_len(j, hi, CodeSpan::TICK));
                    continue;
                }
                Link::OPEN if j > open => match self.brackets.get(&(j, hi)) {
                    Some(Some(close)) => {
                        j = close + 1;
                        continue;
                    }
                    // Nothing after `j` closes it, so nothing closes the outer ones
                    Some(None) => break,
                    None => stack.push(j),
                },
                Link::OPEN => stack.push(j),
                Link::CLOSE => {
                    if let Some(o) = stack.pop() {
                        self.brackets.insert((o, hi), Some(j));
                    }
                    if stack.is_empty() {
                        return Some(j);
                    }
                }
                _ => {}
            }
            j += 1;
        }
        for o in stack {
            self.brackets.insert((o, hi), None);
        }
        None
    }

    /// Offset of the first `needle` in `[from, hi)`.
    fn find_from(&mut self, needle: &'static str, from: usize, hi: usize) -> Option<usize> {
        let key = (needle, hi);
        if self
            .absent_from
            .get(&key)
            .is_some_and(|&absent| from >= absent)
        {
            return None;
        }
        let found = self.raw.get(from..hi).and_then(|s| s.find(needle));
        if found.is_none() {
            let absent = self.absent_from.entry(key).or_insert(from);
            *absent = (*absent).min(from);
        }
        found.map(|rel| from + rel)
    }

    /// Parses the destination or reference that follows a link label
    /// spanning `raw[label_lo..label_hi]`.
    fn link_tail(
        &self,
        after: usize,
        hi: usize,
        label_lo: usize,
        label_hi: usize,
        allow_size: bool,
    ) -> Option<LinkTail> {
        let raw = self.raw;
        match self.byte(after, hi)? {
            Link::DEST_OPEN => {
                let d = Link::parse_destination(&raw[after..hi], allow_size)?;
                Some(LinkTail {
                    target: LinkTarget::Url(d.url),
                    tooltip: d.tooltip,
                    width: d.width,
                    height: d.height,
                    end: after + d.len,
                })
            }
            Link::OPEN => {
                let rel = raw[after + 1..hi].find([']', '['])?;
                if raw.as_bytes()[after + 1 + rel] != Link::CLOSE {
                    return None;
                }
                let id = raw[after + 1..after + 1 + rel].trim();
                // `[text][]` uses the label itself as the id
                let id = if id.is_empty() {
                    raw[label_lo..label_hi].trim()
                } else {
                    id
                };
                if id.is_empty() {
                    return None;
                }
                Some(LinkTail {
                    target: LinkTarget::Reference(id.to_string()),
                    tooltip: None,
                    width: None,
                    height: None,
                    end: after + rel + 2,
                })
            }
            _ => None,
        }
    }

    /// End offset of a complete link or image label+tail starting at `open`.
    fn link_end(&mut self, open: usize, hi: usize) -> Option<usize> {
        let close = self.find_bracket_close(open, hi)?;
        self.link_tail(close + 1, hi, open + 1, close, true)
            .map(|t| t.end)
    }

    fn code_span_end(&self, at: usize, hi: usize) -> Option<usize> {
        let n = self.run_len(at, hi, CodeSpan::TICK);
        self.find_code_close(at + n, hi, n).map(|close| close + n)
    }

    /// Finds a backtick run of exactly `n` in `[from, hi)`.
    fn find_code_close(&self, from: usize, hi: usize, n: usize) -> Option<usize> {
        let bytes = self.raw.as_bytes();
        let mut j = from;
        while j < hi {
            if bytes[j] == CodeSpan::TICK {
                let run = self.run_len(j, hi, CodeSpan::TICK);
                if run == n {
                    return Some(j);
                }
                j += run;
            } else {
                j += 1;
            }
        }
        None
    }

    fn run_len(&self, at: usize, hi: usize, b: u8) -> usize {
        self.raw.as_bytes()[at..hi]
            .iter()
            .take_while(|&&c| c == b)
            .count()
    }

    fn byte(&self, i: usize, hi: usize) -> Option<u8> {
        if i < hi {
            self.raw.as_bytes().get(i).copied()
        } else {
            None
        }
    }

    fn char_before(&self, i: usize) -> Option<char> {
        self.raw.get(..i)?.chars().next_back()
    }

    fn char_at(&self, i: usize, hi: usize) -> Option<char> {
        self.raw.get(i..hi)?.chars().next()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inline::types::HyperlinkStyle;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    /// Compact rendering of an inline tree for assertions.
    fn show(nodes: &[Inline]) -> String {
        nodes.iter().map(show_one).collect::<Vec<_>>().join(", ")
    }

    fn show_one(n: &Inline) -> String {
        match &n.kind {
            InlineKind::Text(t) => format!("{t:?}"),
            InlineKind::Bold(c) => format!("Bold[{}]", show(c)),
            InlineKind::Italic(c) => format!("Italic[{}]", show(c)),
            InlineKind::Strikethrough(c) => format!("Strike[{}]", show(c)),
            InlineKind::Superscript(c) => format!("Sup[{}]", show(c)),
            InlineKind::Subscript(c) => format!("Sub[{}]", show(c)),
            InlineKind::Code(c) => format!("Code({c:?})"),
            InlineKind::Link {
                inlines, target, ..
            } => match target {
                LinkTarget::Url(u) => format!("Link[{}]({u})", show(inlines)),
                LinkTarget::Reference(r) => format!("Link[{}][{r}]", show(inlines)),
            },
            InlineKind::Image { alt, target, .. } => match target {
                LinkTarget::Url(u) => format!("Image({alt:?}, {u})"),
                LinkTarget::Reference(r) => format!("Image({alt:?}, [{r}])"),
            },
            InlineKind::Hyperlink { url, .. } => format!("Hyperlink({url})"),
            InlineKind::Comment(c) => format!("Comment({c:?})"),
        }
    }

    fn parse(s: &str) -> String {
        show(&parse_inline(s, &ParseOptions::default()))
    }

    #[rstest]
    #[case("hello world", r#""hello world""#)]
    #[case("Hello **world**!", r#""Hello ", Bold["world"], "!""#)]
    #[case("**unterminated", r#""**unterminated""#)]
    #[case("***text***", r#"Bold[Italic["text"]]"#)]
    #[case("*a **b** c*", r#"Italic["a ", Bold["b"], " c"]"#)]
    #[case("__init__", r#"Bold["init"]"#)]
    #[case("snake_case_name", r#""snake_case_name""#)]
    #[case("a * b * c", r#""a * b * c""#)]
    #[case("**bold*", r#""*", Italic["bold"]"#)]
    #[case("~~gone~~ now", r#"Strike["gone"], " now""#)]
    fn emphasis_cases(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(parse(input), expected);
    }

    #[rstest]
    #[case("`**not bold**`", r#"Code("**not bold**")"#)]
    #[case("**a `b**` c**", r#"Bold["a ", Code("b**"), " c"]"#)]
    #[case("`a", r#""`a""#)]
    #[case("``a`", r#""``a`""#)]
    #[case("`` a`b ``", r#"Code("a`b")"#)]
    fn code_span_cases(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(parse(input), expected);
    }

    #[rstest]
    #[case(r#"[link](http://x.com "tip")"#, r#"Link["link"](http://x.com)"#)]
    #[case("[text][Ref]", r#"Link["text"][Ref]"#)]
    #[case("[text][]", r#"Link["text"][text]"#)]
    #[case("[text] alone", r#""[text] alone""#)]
    #[case("[outer [inner](u)](v)", r#"Link["outer [inner](u)"](v)"#)]
    #[case("[**b**](u)", r#"Link[Bold["b"]](u)"#)]
    #[case("![alt](a.png =10x20)", r#"Image("alt", a.png)"#)]
    #[case("![logo][brand]", r#"Image("logo", [brand])"#)]
    #[case("[broken](no close", r#""[broken](no close""#)]
    fn link_cases(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(parse(input), expected);
    }

    #[rstest]
    #[case(
        "see <https://a.b> and www.c.d.",
        r#""see ", Hyperlink(https://a.b), " and ", Hyperlink(http://www.c.d), ".""#
    )]
    #[case("mail <me@x.org>", r#""mail ", Hyperlink(mailto:me@x.org)"#)]
    #[case("nohttp://x.y", r#""nohttp://x.y""#)]
    #[case("x^2 and ^(a b)", r#""x", Sup["2"], " and ", Sup["a b"]"#)]
    #[case("H<sub>2</sub>O", r#""H", Sub["2"], "O""#)]
    #[case("E=mc<sup>2</sup>", r#""E=mc", Sup["2"]"#)]
    #[case("a <!-- note --> b", r#""a ", Comment(" note "), " b""#)]
    #[case(r"\*escaped\*", r#""*escaped*""#)]
    fn other_cases(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(parse(input), expected);
    }

    #[test]
    fn spans_tile_the_input() {
        let nodes = parse_inline("Hello **world**!", &ParseOptions::default());
        let spans: Vec<_> = nodes.iter().map(|n| (n.span.start, n.span.end)).collect();
        assert_eq!(spans, vec![(0, 6), (6, 15), (15, 16)]);
        assert_eq!(nodes[1].children()[0].span, Span::new(8, 13));
    }

    #[test]
    fn link_tooltip_and_image_size() {
        let nodes = parse_inline(r#"![c](c.png "Cat" =32x16)"#, &ParseOptions::default());
        match &nodes[0].kind {
            InlineKind::Image {
                tooltip,
                width,
                height,
                ..
            } => {
                assert_eq!(tooltip.as_deref(), Some("Cat"));
                assert_eq!((*width, *height), (Some(32), Some(16)));
            }
            other => panic!("expected Image, got {other:?}"),
        }
    }

    #[test]
    fn bare_url_style() {
        let nodes = parse_inline("go https://x.org now", &ParseOptions::default());
        assert!(matches!(
            nodes[1].kind,
            InlineKind::Hyperlink {
                style: HyperlinkStyle::Bare,
                ..
            }
        ));
    }

    #[test]
    fn disabled_extensions_stay_literal() {
        let opts = ParseOptions {
            autolinks: false,
            superscript: false,
            ..Default::default()
        };
        let nodes = parse_inline("x^2 https://x.org", &opts);
        assert_eq!(show(&nodes), r#""x^2 https://x.org""#);
    }

    #[test]
    fn depth_cap_keeps_interior_literal() {
        let opts = ParseOptions {
            max_nesting_depth: 1,
            ..Default::default()
        };
        let nodes = parse_inline("**a *b* c**", &opts);
        assert_eq!(show(&nodes), r#"Bold["a *b* c"]"#);
    }

    #[test]
    fn pathological_openers_finish_as_text() {
        let input = "*a ".repeat(2000);
        let nodes = parse_inline(&input, &ParseOptions::default());
        assert_eq!(nodes.len(), 1);
        assert!(matches!(&nodes[0].kind, InlineKind::Text(t) if *t == input));
    }

    #[test]
    fn empty_input() {
        assert!(parse_inline("", &ParseOptions::default()).is_empty());
    }
}
