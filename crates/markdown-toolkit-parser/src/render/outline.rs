use std::fmt::Write;

use crate::{
    blocks::{Block, BlockKind, HeaderStyle, ListItem, ListStyle, TableRow},
    document::MarkdownDocument,
    inline::{Inline, InlineKind, LinkTarget},
    visit::{Visitor, walk_block, walk_document, walk_inline, walk_list_item},
};

/// Dumps the document tree, one node per line, children indented by two
/// spaces. Block lines end with their source span.
///
/// ```
/// let doc = markdown_toolkit_parser::parse("# Hi");
/// assert_eq!(
///     markdown_toolkit_parser::render::outline(&doc),
///     "Header(1) @0..4\n  Text \"Hi\"\n"
/// );
/// ```
pub fn outline(doc: &MarkdownDocument) -> String {
    let mut w = OutlineWriter::default();
    walk_document(&mut w, doc);
    w.out
}

#[derive(Default)]
struct OutlineWriter {
    out: String,
    depth: usize,
}

impl OutlineWriter {
    fn line(&mut self, text: impl AsRef<str>) {
        let _ = writeln!(self.out, "{}{}", "  ".repeat(self.depth), text.as_ref());
    }

    fn nested(&mut self, f: impl FnOnce(&mut Self)) {
        self.depth += 1;
        f(self);
        self.depth -= 1;
    }
}

fn target(t: &LinkTarget) -> String {
    match t {
        LinkTarget::Url(url) => url.clone(),
        LinkTarget::Reference(id) => format!("[{id}]"),
    }
}

impl Visitor for OutlineWriter {
    fn visit_block(&mut self, block: &Block) {
        let span = format!("@{}..{}", block.span.start, block.span.end);
        match &block.kind {
            BlockKind::Paragraph(_) => self.line(format!("Paragraph {span}")),
            BlockKind::Header { level, style, .. } => match style {
                HeaderStyle::Atx => self.line(format!("Header({level}) {span}")),
                HeaderStyle::Setext => self.line(format!("Header({level}, setext) {span}")),
            },
            BlockKind::List { style, .. } => match style {
                ListStyle::Bulleted => self.line(format!("List(bulleted) {span}")),
                ListStyle::Numbered { start } => {
                    self.line(format!("List(numbered from {start}) {span}"))
                }
            },
            BlockKind::Code { info, text, .. } => {
                match info {
                    Some(info) => self.line(format!("Code({info}) {span}")),
                    None => self.line(format!("Code {span}")),
                }
                self.nested(|w| w.line(format!("{text:?}")));
            }
            BlockKind::Quote { .. } => self.line(format!("Quote {span}")),
            BlockKind::Table { alignments, .. } => {
                self.line(format!("Table {alignments:?} {span}"))
            }
            BlockKind::HorizontalRule => self.line(format!("HorizontalRule {span}")),
            BlockKind::YamlHeader { entries } => {
                self.line(format!("YamlHeader {span}"));
                self.nested(|w| {
                    for (key, value) in entries {
                        w.line(format!("{key} = {value:?}"));
                    }
                });
            }
            BlockKind::LinkReference { id, url, .. } => {
                self.line(format!("LinkReference [{id}] -> {url} {span}"))
            }
        }
        self.nested(|w| walk_block(w, block));
    }

    fn visit_list_item(&mut self, item: &ListItem) {
        self.line(format!("Item @{}..{}", item.span.start, item.span.end));
        self.nested(|w| walk_list_item(w, item));
    }

    fn visit_table_row(&mut self, row: &TableRow) {
        self.line("Row");
        self.nested(|w| {
            for cell in &row.cells {
                w.line("Cell");
                w.nested(|w| w.visit_inline_content(cell));
            }
        });
    }

    fn visit_inline(&mut self, inline: &Inline) {
        match &inline.kind {
            InlineKind::Text(t) => self.line(format!("Text {t:?}")),
            InlineKind::Code(c) => self.line(format!("Code {c:?}")),
            InlineKind::Comment(c) => self.line(format!("Comment {c:?}")),
            InlineKind::Link { target: t, .. } => self.line(format!("Link -> {}", target(t))),
            InlineKind::Image { alt, target: t, .. } => {
                self.line(format!("Image {alt:?} -> {}", target(t)))
            }
            InlineKind::Hyperlink { url, .. } => self.line(format!("Hyperlink {url}")),
            _ => self.line(inline.name()),
        }
        self.nested(|w| walk_inline(w, inline));
    }
}
