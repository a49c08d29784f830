use std::fmt::Write;

use html_escape::{encode_double_quoted_attribute, encode_text};

use crate::{
    blocks::{Block, BlockKind, ColumnAlignment, ListItem, ListStyle, TableRow},
    document::MarkdownDocument,
    inline::{Inline, InlineKind, LinkTarget},
    visit::{Visitor, walk_block, walk_document, walk_inline},
};

/// Renders the document as an HTML fragment.
///
/// Reference links and images resolve through the document's definitions;
/// an unresolved reference renders its text without a link. YAML headers and
/// link definitions produce no output.
pub fn to_html(doc: &MarkdownDocument) -> String {
    let mut w = HtmlWriter {
        doc,
        out: String::new(),
        cell_tag: "td",
        alignments: vec![],
        tight: false,
    };
    walk_document(&mut w, doc);
    w.out
}

struct HtmlWriter<'d> {
    doc: &'d MarkdownDocument,
    out: String,
    /// `th` while writing the header row.
    cell_tag: &'static str,
    alignments: Vec<ColumnAlignment>,
    /// Paragraphs of the innermost list's items drop their `<p>`.
    tight: bool,
}

impl HtmlWriter<'_> {
    /// Destination and title of a link target, if it resolves.
    fn resolve(
        &self,
        target: &LinkTarget,
        tooltip: &Option<String>,
    ) -> Option<(String, Option<String>)> {
        match target {
            LinkTarget::Url(url) => Some((url.clone(), tooltip.clone())),
            LinkTarget::Reference(id) => self
                .doc
                .resolve_reference(id)
                .map(|r| (r.url.clone(), r.tooltip.clone())),
        }
    }

    fn attr(&mut self, name: &str, value: &str) {
        let _ = write!(self.out, " {name}=\"{}\"", encode_double_quoted_attribute(value));
    }

    fn table(&mut self, alignments: &[ColumnAlignment], header: &TableRow, rows: &[TableRow]) {
        self.alignments = alignments.to_vec();
        self.out.push_str("<table>\n<thead>\n");
        self.cell_tag = "th";
        self.visit_table_row(header);
        self.cell_tag = "td";
        self.out.push_str("</thead>\n");
        if !rows.is_empty() {
            self.out.push_str("<tbody>\n");
            for row in rows {
                self.visit_table_row(row);
            }
            self.out.push_str("</tbody>\n");
        }
        self.out.push_str("</table>\n");
    }
}

impl Visitor for HtmlWriter<'_> {
    fn visit_block(&mut self, block: &Block) {
        match &block.kind {
            BlockKind::Paragraph(content) => {
                self.out.push_str("<p>");
                self.visit_inline_content(content);
                self.out.push_str("</p>\n");
            }
            BlockKind::Header { level, content, .. } => {
                let _ = write!(self.out, "<h{level}>");
                self.visit_inline_content(content);
                let _ = writeln!(self.out, "</h{level}>");
            }
            BlockKind::List { style, tight, .. } => {
                let tag = match style {
                    ListStyle::Bulleted => {
                        self.out.push_str("<ul>\n");
                        "ul"
                    }
                    ListStyle::Numbered { start: 1 } => {
                        self.out.push_str("<ol>\n");
                        "ol"
                    }
                    ListStyle::Numbered { start } => {
                        let _ = writeln!(self.out, "<ol start=\"{start}\">");
                        "ol"
                    }
                };
                let outer = std::mem::replace(&mut self.tight, *tight);
                walk_block(self, block);
                self.tight = outer;
                let _ = writeln!(self.out, "</{tag}>");
            }
            BlockKind::Code { info, text, .. } => {
                self.out.push_str("<pre><code");
                if let Some(lang) = info.as_deref().and_then(|i| i.split_whitespace().next()) {
                    self.attr("class", &format!("language-{lang}"));
                }
                self.out.push('>');
                self.out.push_str(&encode_text(text));
                if !text.is_empty() {
                    self.out.push('\n');
                }
                self.out.push_str("</code></pre>\n");
            }
            BlockKind::Quote { .. } => {
                self.out.push_str("<blockquote>\n");
                let outer = std::mem::replace(&mut self.tight, false);
                walk_block(self, block);
                self.tight = outer;
                self.out.push_str("</blockquote>\n");
            }
            BlockKind::Table {
                alignments,
                header,
                rows,
            } => self.table(alignments, header, rows),
            BlockKind::HorizontalRule => self.out.push_str("<hr />\n"),
            BlockKind::YamlHeader { .. } | BlockKind::LinkReference { .. } => {}
        }
    }

    fn visit_list_item(&mut self, item: &ListItem) {
        self.out.push_str("<li>");
        for (i, block) in item.blocks.iter().enumerate() {
            match &block.kind {
                BlockKind::Paragraph(content) if self.tight => {
                    self.visit_inline_content(content);
                    if i + 1 < item.blocks.len() {
                        self.out.push('\n');
                    }
                }
                _ => {
                    if !self.out.ends_with('\n') {
                        self.out.push('\n');
                    }
                    self.visit_block(block);
                }
            }
        }
        self.out.push_str("</li>\n");
    }

    fn visit_table_row(&mut self, row: &TableRow) {
        self.out.push_str("<tr>\n");
        for (i, cell) in row.cells.iter().enumerate() {
            let tag = self.cell_tag;
            let _ = write!(self.out, "<{tag}");
            let align = match self.alignments.get(i) {
                Some(ColumnAlignment::Left) => Some("left"),
                Some(ColumnAlignment::Center) => Some("center"),
                Some(ColumnAlignment::Right) => Some("right"),
                _ => None,
            };
            if let Some(align) = align {
                self.attr("align", align);
            }
            self.out.push('>');
            self.visit_inline_content(cell);
            let _ = writeln!(self.out, "</{tag}>");
        }
        self.out.push_str("</tr>\n");
    }

    fn visit_inline(&mut self, inline: &Inline) {
        let wrap = |w: &mut Self, tag: &str| {
            let _ = write!(w.out, "<{tag}>");
            walk_inline(w, inline);
            let _ = write!(w.out, "</{tag}>");
        };
        match &inline.kind {
            InlineKind::Text(t) => self.out.push_str(&encode_text(t)),
            InlineKind::Bold(_) => wrap(self, "strong"),
            InlineKind::Italic(_) => wrap(self, "em"),
            InlineKind::Strikethrough(_) => wrap(self, "del"),
            InlineKind::Superscript(_) => wrap(self, "sup"),
            InlineKind::Subscript(_) => wrap(self, "sub"),
            InlineKind::Code(c) => {
                let _ = write!(self.out, "<code>{}</code>", encode_text(c));
            }
            InlineKind::Link {
                target, tooltip, ..
            } => match self.resolve(target, tooltip) {
                Some((url, title)) => {
                    self.out.push_str("<a");
                    self.attr("href", &url);
                    if let Some(title) = title {
                        self.attr("title", &title);
                    }
                    self.out.push('>');
                    walk_inline(self, inline);
                    self.out.push_str("</a>");
                }
                None => walk_inline(self, inline),
            },
            InlineKind::Image {
                alt,
                target,
                tooltip,
                width,
                height,
            } => match self.resolve(target, tooltip) {
                Some((url, title)) => {
                    self.out.push_str("<img");
                    self.attr("src", &url);
                    self.attr("alt", alt);
                    if let Some(title) = title {
                        self.attr("title", &title);
                    }
                    if let Some(width) = width {
                        self.attr("width", &width.to_string());
                    }
                    if let Some(height) = height {
                        self.attr("height", &height.to_string());
                    }
                    self.out.push_str(" />");
                }
                None => self.out.push_str(&encode_text(alt)),
            },
            InlineKind::Hyperlink { text, url, .. } => {
                self.out.push_str("<a");
                self.attr("href", url);
                self.out.push('>');
                self.out.push_str(&encode_text(text));
                self.out.push_str("</a>");
            }
            InlineKind::Comment(c) => {
                let _ = write!(self.out, "<!--{c}-->");
            }
        }
    }
}
