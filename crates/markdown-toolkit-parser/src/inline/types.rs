use serde::Serialize;

use crate::source::Span;

/// A parsed inline node.
///
/// `span` is a document byte range. Children of a container inline tile
/// its interior with no gaps.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Inline {
    pub kind: InlineKind,
    pub span: Span,
}

/// The closed set of inline constructs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum InlineKind {
    /// Plain text with escape sequences decoded.
    Text(String),
    /// `**bold**` or `__bold__`.
    Bold(Vec<Inline>),
    /// `*italic*` or `_italic_`.
    Italic(Vec<Inline>),
    /// `~~struck~~`.
    Strikethrough(Vec<Inline>),
    /// `^word`, `^(some text)` or `<sup>text</sup>`.
    Superscript(Vec<Inline>),
    /// `<sub>text</sub>`.
    Subscript(Vec<Inline>),
    /// A code span. Raw zone: nothing is parsed inside it.
    Code(String),
    /// `[text](url "tooltip")` or `[text][id]`.
    Link {
        inlines: Vec<Inline>,
        target: LinkTarget,
        tooltip: Option<String>,
    },
    /// `![alt](url "tooltip" =WxH)` or `![alt][id]`.
    Image {
        alt: String,
        target: LinkTarget,
        tooltip: Option<String>,
        width: Option<u32>,
        height: Option<u32>,
    },
    /// An autolink whose text is the address itself.
    Hyperlink {
        text: String,
        url: String,
        style: HyperlinkStyle,
    },
    /// `<!-- comment -->`.
    Comment(String),
}

/// Where a link or image points.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum LinkTarget {
    /// An inline destination.
    Url(String),
    /// A reference id, resolved against the document's link definitions.
    Reference(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum HyperlinkStyle {
    /// `<https://example.com>`
    Angle,
    /// `<someone@example.com>`
    Email,
    /// A bare `https://…` or `www.…` run.
    Bare,
}

impl Inline {
    /// Child inlines of container variants; empty for leaves.
    pub fn children(&self) -> &[Inline] {
        match &self.kind {
            InlineKind::Bold(c)
            | InlineKind::Italic(c)
            | InlineKind::Strikethrough(c)
            | InlineKind::Superscript(c)
            | InlineKind::Subscript(c) => c,
            InlineKind::Link { inlines, .. } => inlines,
            InlineKind::Text(_)
            | InlineKind::Code(_)
            | InlineKind::Image { .. }
            | InlineKind::Hyperlink { .. }
            | InlineKind::Comment(_) => &[],
        }
    }

    fn children_mut(&mut self) -> &mut [Inline] {
        match &mut self.kind {
            InlineKind::Bold(c)
            | InlineKind::Italic(c)
            | InlineKind::Strikethrough(c)
            | InlineKind::Superscript(c)
            | InlineKind::Subscript(c) => c,
            InlineKind::Link { inlines, .. } => inlines,
            _ => &mut [],
        }
    }

    /// Rewrites this node's span and every descendant's through `f`.
    pub(crate) fn map_spans(&mut self, f: &impl Fn(Span) -> Span) {
        self.span = f(self.span);
        for child in self.children_mut() {
            child.map_spans(f);
        }
    }

    /// Short variant name, used by the outline dump.
    pub fn name(&self) -> &'static str {
        match &self.kind {
            InlineKind::Text(_) => "Text",
            InlineKind::Bold(_) => "Bold",
            InlineKind::Italic(_) => "Italic",
            InlineKind::Strikethrough(_) => "Strikethrough",
            InlineKind::Superscript(_) => "Superscript",
            InlineKind::Subscript(_) => "Subscript",
            InlineKind::Code(_) => "Code",
            InlineKind::Link { .. } => "Link",
            InlineKind::Image { .. } => "Image",
            InlineKind::Hyperlink { .. } => "Hyperlink",
            InlineKind::Comment(_) => "Comment",
        }
    }
}
