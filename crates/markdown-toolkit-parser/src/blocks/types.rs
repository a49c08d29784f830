use serde::Serialize;

use crate::{
    inline::{Inline, InlineKind, parse_inline},
    options::ParseOptions,
    source::{SourceMap, Span},
};

use super::kinds::FenceKind;

/// A parsed block with its byte span in the document source.
///
/// Spans are whole lines: from the start of the block's first physical line
/// (container prefixes included) through the end of its last. Sibling spans
/// tile their parent, so blank lines between blocks belong to the block
/// before them and the leaf blocks of a document cover all of its text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Block {
    pub kind: BlockKind,
    pub span: Span,
}

/// The closed set of block constructs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum BlockKind {
    /// Lines of text that no other block claimed.
    Paragraph(InlineContent),
    /// An ATX (`# Title`) or setext (underlined) header.
    Header {
        level: u8,
        style: HeaderStyle,
        content: InlineContent,
    },
    /// A bulleted or numbered list.
    List {
        style: ListStyle,
        /// No blank line separates two items, or two blocks of one item.
        tight: bool,
        items: Vec<ListItem>,
    },
    /// Fenced or indented code. Raw zone: nothing is parsed inside.
    Code {
        /// `None` for indented code.
        fence: Option<FenceKind>,
        info: Option<String>,
        text: String,
    },
    /// A `>` quote holding nested blocks.
    Quote { blocks: Vec<Block> },
    /// A pipe table. Every row has exactly `alignments.len()` cells.
    Table {
        alignments: Vec<ColumnAlignment>,
        header: TableRow,
        rows: Vec<TableRow>,
    },
    HorizontalRule,
    /// Front matter at the very top of the document.
    YamlHeader { entries: Vec<(String, String)> },
    /// `[id]: url "tooltip"`. Renders as nothing; resolves reference links.
    LinkReference {
        id: String,
        url: String,
        tooltip: Option<String>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum HeaderStyle {
    Atx,
    Setext,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ListStyle {
    Bulleted,
    Numbered { start: u64 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ColumnAlignment {
    Unspecified,
    Left,
    Center,
    Right,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ListItem {
    pub span: Span,
    pub blocks: Vec<Block>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TableRow {
    pub span: Span,
    pub cells: Vec<InlineContent>,
}

/// Text payload of a block: raw text with container prefixes stripped, and
/// its inline tokens.
///
/// The tokenizer works on `raw`; once tokenized, inline spans are document
/// offsets. A token crossing a line break covers the line ending and the
/// next line's container prefix.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct InlineContent {
    pub raw: String,
    pub inlines: Vec<Inline>,
    #[serde(skip)]
    map: SourceMap,
}

impl InlineContent {
    /// Content copied verbatim from `source_start` in the document.
    pub fn at(raw: impl Into<String>, source_start: usize) -> Self {
        let raw = raw.into();
        let map = SourceMap::contiguous(source_start, raw.len());
        Self::mapped(raw, map)
    }

    /// Content assembled from several source slices.
    pub fn mapped(raw: String, map: SourceMap) -> Self {
        Self {
            raw,
            inlines: vec![],
            map,
        }
    }

    /// Tokenizes `raw` and moves the resulting spans into the document.
    pub(crate) fn tokenize(&mut self, options: &ParseOptions) {
        let map = &self.map;
        let mut inlines = parse_inline(&self.raw, options);
        for inline in &mut inlines {
            inline.map_spans(&|span| map.span_to_source(span));
        }
        self.inlines = inlines;
    }

    /// Document range the payload was taken from, container prefixes of
    /// inner lines included.
    pub fn source_span(&self) -> Span {
        self.map.span_to_source(Span::new(0, self.raw.len()))
    }

    /// The visible text of the inlines, markup removed.
    pub fn plain_text(&self) -> String {
        let mut out = String::new();
        push_plain(&self.inlines, &mut out);
        out
    }
}

fn push_plain(inlines: &[Inline], out: &mut String) {
    for inline in inlines {
        match &inline.kind {
            InlineKind::Text(t) | InlineKind::Code(t) => out.push_str(t),
            InlineKind::Image { alt, .. } => out.push_str(alt),
            InlineKind::Hyperlink { text, .. } => out.push_str(text),
            InlineKind::Comment(_) => {}
            _ => push_plain(inline.children(), out),
        }
    }
}

impl Block {
    /// Direct child blocks: quote contents and list item contents.
    pub fn child_blocks(&self) -> Vec<&Block> {
        match &self.kind {
            BlockKind::Quote { blocks } => blocks.iter().collect(),
            BlockKind::List { items, .. } => items.iter().flat_map(|i| &i.blocks).collect(),
            _ => vec![],
        }
    }

    /// Every text payload owned directly by this block.
    pub fn inline_contents(&self) -> Vec<&InlineContent> {
        match &self.kind {
            BlockKind::Paragraph(c) | BlockKind::Header { content: c, .. } => vec![c],
            BlockKind::Table { header, rows, .. } => std::iter::once(header)
                .chain(rows)
                .flat_map(|r| &r.cells)
                .collect(),
            _ => vec![],
        }
    }

    pub(crate) fn inline_contents_mut(&mut self) -> Vec<&mut InlineContent> {
        match &mut self.kind {
            BlockKind::Paragraph(c) | BlockKind::Header { content: c, .. } => vec![c],
            BlockKind::Table { header, rows, .. } => std::iter::once(header)
                .chain(rows.iter_mut())
                .flat_map(|r| r.cells.iter_mut())
                .collect(),
            _ => vec![],
        }
    }

    pub(crate) fn child_blocks_mut(&mut self) -> Vec<&mut Block> {
        match &mut self.kind {
            BlockKind::Quote { blocks } => blocks.iter_mut().collect(),
            BlockKind::List { items, .. } => {
                items.iter_mut().flat_map(|i| i.blocks.iter_mut()).collect()
            }
            _ => vec![],
        }
    }

    /// Short name of the block kind, for logs and dumps.
    pub fn name(&self) -> &'static str {
        match self.kind {
            BlockKind::Paragraph(_) => "Paragraph",
            BlockKind::Header { .. } => "Header",
            BlockKind::List { .. } => "List",
            BlockKind::Code { .. } => "Code",
            BlockKind::Quote { .. } => "Quote",
            BlockKind::Table { .. } => "Table",
            BlockKind::HorizontalRule => "HorizontalRule",
            BlockKind::YamlHeader { .. } => "YamlHeader",
            BlockKind::LinkReference { .. } => "LinkReference",
        }
    }
}
