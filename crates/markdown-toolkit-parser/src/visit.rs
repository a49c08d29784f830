//! Read-only traversal of a parsed document.
//!
//! Implement the `visit_*` methods you care about; the defaults walk into
//! children through the matching `walk_*` function, so an override can call
//! `walk_*` itself to keep descending.

use crate::{
    blocks::{Block, BlockKind, InlineContent, ListItem, TableRow},
    document::MarkdownDocument,
    inline::Inline,
};

pub trait Visitor {
    fn visit_block(&mut self, block: &Block) {
        walk_block(self, block);
    }

    fn visit_list_item(&mut self, item: &ListItem) {
        walk_list_item(self, item);
    }

    fn visit_table_row(&mut self, row: &TableRow) {
        walk_table_row(self, row);
    }

    fn visit_inline_content(&mut self, content: &InlineContent) {
        walk_inline_content(self, content);
    }

    fn visit_inline(&mut self, inline: &Inline) {
        walk_inline(self, inline);
    }
}

pub fn walk_document<V: Visitor + ?Sized>(v: &mut V, doc: &MarkdownDocument) {
    for block in &doc.blocks {
        v.visit_block(block);
    }
}

pub fn walk_block<V: Visitor + ?Sized>(v: &mut V, block: &Block) {
    match &block.kind {
        BlockKind::Paragraph(content) | BlockKind::Header { content, .. } => {
            v.visit_inline_content(content)
        }
        BlockKind::List { items, .. } => {
            for item in items {
                v.visit_list_item(item);
            }
        }
        BlockKind::Quote { blocks } => {
            for child in blocks {
                v.visit_block(child);
            }
        }
        BlockKind::Table { header, rows, .. } => {
            v.visit_table_row(header);
            for row in rows {
                v.visit_table_row(row);
            }
        }
        BlockKind::Code { .. }
        | BlockKind::HorizontalRule
        | BlockKind::YamlHeader { .. }
        | BlockKind::LinkReference { .. } => {}
    }
}

pub fn walk_list_item<V: Visitor + ?Sized>(v: &mut V, item: &ListItem) {
    for block in &item.blocks {
        v.visit_block(block);
    }
}

pub fn walk_table_row<V: Visitor + ?Sized>(v: &mut V, row: &TableRow) {
    for cell in &row.cells {
        v.visit_inline_content(cell);
    }
}

pub fn walk_inline_content<V: Visitor + ?Sized>(v: &mut V, content: &InlineContent) {
    for inline in &content.inlines {
        v.visit_inline(inline);
    }
}

pub fn walk_inline<V: Visitor + ?Sized>(v: &mut V, inline: &Inline) {
    for child in inline.children() {
        v.visit_inline(child);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{inline::InlineKind, parse};

    #[derive(Default)]
    struct Counter {
        blocks: usize,
        texts: Vec<String>,
    }

    impl Visitor for Counter {
        fn visit_block(&mut self, block: &Block) {
            self.blocks += 1;
            walk_block(self, block);
        }

        fn visit_inline(&mut self, inline: &Inline) {
            if let InlineKind::Text(t) = &inline.kind {
                self.texts.push(t.clone());
            }
            walk_inline(self, inline);
        }
    }

    #[test]
    fn walks_nested_blocks_and_inlines() {
        let doc = parse("> - *a*\n> - b\n\n| x |\n|---|\n| **y** |\n");
        let mut counter = Counter::default();
        walk_document(&mut counter, &doc);
        // quote, list, two paragraphs, table
        assert_eq!(counter.blocks, 5);
        assert_eq!(counter.texts, vec!["a", "b", "x", "y"]);
    }
}
