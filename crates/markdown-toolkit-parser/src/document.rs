use std::{collections::HashMap, fmt};

use serde::Serialize;
use xi_rope::Rope;

use crate::{
    blocks::{Block, BlockKind},
    inline::kinds::Link,
    options::ParseOptions,
    source::{Span, slice_to_string},
};

/// A resolved link reference definition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Reference {
    pub url: String,
    pub tooltip: Option<String>,
}

/// The parsed tree of a Markdown text.
///
/// Built once per parse and never mutated; parse again to get a new tree.
/// Keeps the source so any block span can be sliced back to text.
#[derive(Clone, Serialize)]
pub struct MarkdownDocument {
    pub blocks: Vec<Block>,
    #[serde(skip)]
    source: Rope,
    #[serde(skip)]
    references: HashMap<String, Reference>,
}

impl MarkdownDocument {
    /// Tokenizes every text payload in `blocks` and indexes link definitions.
    pub(crate) fn build(source: Rope, mut blocks: Vec<Block>, options: &ParseOptions) -> Self {
        for block in &mut blocks {
            tokenize(block, options);
        }
        let mut references = HashMap::new();
        for block in &blocks {
            collect_references(block, &mut references);
        }
        Self {
            blocks,
            source,
            references,
        }
    }

    pub fn source(&self) -> &Rope {
        &self.source
    }

    /// Source text under `span`.
    pub fn slice(&self, span: Span) -> String {
        slice_to_string(&self.source, span)
    }

    /// Looks up a link reference definition anywhere in the document.
    ///
    /// Ids match case-insensitively with whitespace runs collapsed. The first
    /// definition of an id wins.
    pub fn resolve_reference(&self, id: &str) -> Option<&Reference> {
        self.references.get(&Link::normalize_id(id))
    }

    /// The visible text of the document, one line per text-bearing block.
    pub fn plain_text(&self) -> String {
        let mut out = vec![];
        for block in &self.blocks {
            push_block_text(block, &mut out);
        }
        out.join("\n")
    }
}

impl fmt::Debug for MarkdownDocument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MarkdownDocument")
            .field("blocks", &self.blocks)
            .field("source_len", &self.source.len())
            .field("references", &self.references.len())
            .finish()
    }
}

fn tokenize(block: &mut Block, options: &ParseOptions) {
    for content in block.inline_contents_mut() {
        content.tokenize(options);
    }
    for child in block.child_blocks_mut() {
        tokenize(child, options);
    }
}

fn collect_references(block: &Block, out: &mut HashMap<String, Reference>) {
    if let BlockKind::LinkReference { id, url, tooltip } = &block.kind {
        out.entry(Link::normalize_id(id)).or_insert_with(|| Reference {
            url: url.clone(),
            tooltip: tooltip.clone(),
        });
    }
    for child in block.child_blocks() {
        collect_references(child, out);
    }
}

fn push_block_text(block: &Block, out: &mut Vec<String>) {
    match &block.kind {
        BlockKind::Paragraph(content) | BlockKind::Header { content, .. } => {
            out.push(content.plain_text())
        }
        BlockKind::Code { text, .. } => out.push(text.clone()),
        BlockKind::Table { header, rows, .. } => {
            for row in std::iter::once(header).chain(rows) {
                let cells: Vec<String> = row.cells.iter().map(|c| c.plain_text()).collect();
                out.push(cells.join("\t"));
            }
        }
        BlockKind::List { .. } | BlockKind::Quote { .. } => {
            for child in block.child_blocks() {
                push_block_text(child, out);
            }
        }
        BlockKind::HorizontalRule
        | BlockKind::YamlHeader { .. }
        | BlockKind::LinkReference { .. } => {}
    }
}
