use crate::source::{Line, indentation};

use super::kinds::{
    AtxHeader, BlockQuote, CodeFence, FenceSig, HorizontalRule, IndentedCode, ListMarker,
};

/// Classification of a single line containing only local facts.
///
/// Every recognizer and the paragraph interrupt check work from these facts
/// rather than re-scanning the text.
#[derive(Debug, Clone)]
pub struct LineClass {
    /// Leading indentation in columns, tabs expanded.
    pub indent: usize,
    /// Bytes of leading whitespace.
    pub indent_bytes: usize,
    pub is_blank: bool,
    pub fence: Option<FenceSig>,
    pub atx_level: Option<u8>,
    pub is_rule: bool,
    pub is_quote: bool,
    /// A list marker after the indentation, at any indentation.
    pub list_marker: Option<ListMarker>,
}

impl LineClass {
    /// At most three columns of indentation: the line may open a block.
    pub fn can_open(&self) -> bool {
        !self.is_blank && self.indent < IndentedCode::INDENT
    }

    /// Whether this line ends an open paragraph instead of continuing it.
    pub fn interrupts_paragraph(&self) -> bool {
        self.can_open()
            && (self.atx_level.is_some()
                || self.fence.is_some()
                || self.is_quote
                || self.is_rule
                || self
                    .list_marker
                    .is_some_and(|m| m.may_interrupt_paragraph()))
    }

    /// The line text after its indentation.
    pub fn rest<'l>(&self, line: &'l Line) -> &'l str {
        &line.text[self.indent_bytes..]
    }
}

/// Classifies individual lines for the block parser.
pub struct MarkdownLineClassifier {
    tab_width: usize,
}

impl MarkdownLineClassifier {
    pub fn new(tab_width: usize) -> Self {
        Self { tab_width }
    }

    pub fn classify(&self, line: &Line) -> LineClass {
        let (indent, indent_bytes) = indentation(&line.text, self.tab_width);
        let rest = &line.text[indent_bytes..];
        LineClass {
            indent,
            indent_bytes,
            is_blank: rest.trim().is_empty(),
            fence: CodeFence::sig(rest),
            atx_level: AtxHeader::level(rest),
            is_rule: HorizontalRule::matches(rest),
            is_quote: rest.starts_with(BlockQuote::PREFIX),
            list_marker: ListMarker::parse(rest, self.tab_width),
        }
    }

    /// Fence left open after `line`, given the fence open before it.
    pub fn fence_after(&self, open: Option<FenceSig>, line: &Line) -> Option<FenceSig> {
        let c = self.classify(line);
        match open {
            Some(sig) if c.can_open() && CodeFence::closes(sig, c.rest(line)) => None,
            Some(sig) => Some(sig),
            None if c.can_open() => c.fence,
            None => None,
        }
    }
}
