use crate::{
    blocks::{Block, BlockKind, InlineContent},
    document::MarkdownDocument,
    inline::Inline,
    source::Span,
};

/// Validates parser output invariants.
///
/// Asserts that:
/// - Top-level blocks tile the source from the first byte to the last
/// - Quote contents, list items and item contents tile their parent
/// - Table rows lie inside their table, ordered and non-overlapping
/// - Concatenating the spans of every leaf block in document order
///   reproduces the source exactly
/// - Top-level inline spans tile the source range of their payload, which
///   lies inside the owning block; nested inlines are contiguous inside
///   their parent
///
/// A document with no blocks must be blank.
///
/// # Panics
/// Panics with a descriptive message if any invariant is violated.
pub fn check(doc: &MarkdownDocument) {
    let n = doc.source().len();
    let whole = Span::new(0, n);
    if doc.blocks.is_empty() {
        let text = doc.slice(whole);
        assert!(text.trim().is_empty(), "text {text:?} produced no blocks");
        return;
    }

    let spans: Vec<Span> = doc.blocks.iter().map(|b| b.span).collect();
    check_tiles(whole, &spans, "document");
    for b in &doc.blocks {
        check_block(doc, b);
    }

    let mut leaves = vec![];
    for b in &doc.blocks {
        leaf_spans(b, &mut leaves);
    }
    let rebuilt: String = leaves.iter().map(|s| doc.slice(*s)).collect();
    assert_eq!(rebuilt, doc.slice(whole), "leaf block spans do not reproduce the source");
}

fn check_block(doc: &MarkdownDocument, b: &Block) {
    match &b.kind {
        BlockKind::List { items, .. } => {
            let spans: Vec<Span> = items.iter().map(|i| i.span).collect();
            check_tiles(b.span, &spans, "list");
            for item in items {
                let spans: Vec<Span> = item.blocks.iter().map(|c| c.span).collect();
                check_tiles(item.span, &spans, "list item");
            }
        }
        BlockKind::Quote { blocks } => {
            let spans: Vec<Span> = blocks.iter().map(|c| c.span).collect();
            check_tiles(b.span, &spans, "quote");
        }
        BlockKind::Table { header, rows, .. } => {
            let spans: Vec<Span> = std::iter::once(header)
                .chain(rows)
                .map(|r| r.span)
                .collect();
            check_contained(b.span, &spans, "table");
        }
        _ => {}
    }
    for child in b.child_blocks() {
        check_block(doc, child);
    }
    for content in b.inline_contents() {
        check_inline_content(doc, b, content);
    }
}

/// Leaf blocks in document order. Empty quotes and empty list items have
/// no children and count as leaves themselves.
fn leaf_spans(b: &Block, out: &mut Vec<Span>) {
    match &b.kind {
        BlockKind::List { items, .. } => {
            for item in items {
                if item.blocks.is_empty() {
                    out.push(item.span);
                }
                for child in &item.blocks {
                    leaf_spans(child, out);
                }
            }
        }
        BlockKind::Quote { blocks } if !blocks.is_empty() => {
            for child in blocks {
                leaf_spans(child, out);
            }
        }
        _ => out.push(b.span),
    }
}

/// Non-empty `children` must cover `parent` end to end.
fn check_tiles(parent: Span, children: &[Span], what: &str) {
    let (Some(first), Some(last)) = (children.first(), children.last()) else {
        return;
    };
    assert!(
        first.start == parent.start && last.end == parent.end,
        "{what} children {first:?}..{last:?} do not cover {parent:?}"
    );
    for pair in children.windows(2) {
        assert!(
            pair[0].start <= pair[0].end && pair[0].end == pair[1].start,
            "{what} children {:?} and {:?} leave a gap or overlap",
            pair[0],
            pair[1]
        );
    }
}

fn check_contained(parent: Span, children: &[Span], what: &str) {
    let mut prev_end = parent.start;
    for c in children {
        assert!(
            parent.contains(*c),
            "{what} child {c:?} escapes parent span {parent:?}"
        );
        assert!(
            c.start >= prev_end,
            "{what} child {c:?} overlaps its previous sibling ending at {prev_end}"
        );
        prev_end = c.end;
    }
}

fn check_inline_content(doc: &MarkdownDocument, block: &Block, content: &InlineContent) {
    let source = content.source_span();
    assert!(
        block.span.contains(source),
        "payload {source:?} of {} escapes its block {:?}",
        block.name(),
        block.span
    );
    if content.raw.is_empty() {
        return;
    }
    let spans: Vec<Span> = content.inlines.iter().map(|i| i.span).collect();
    check_tiles(source, &spans, "inline payload");
    assert!(
        !spans.is_empty(),
        "payload {:?} produced no inlines",
        content.raw
    );
    check_nested(&content.inlines, source);

    let rebuilt: String = spans.iter().map(|s| doc.slice(*s)).collect();
    assert_eq!(rebuilt, doc.slice(source), "inline spans do not reproduce their source");
}

/// Siblings must be contiguous and stay within `bounds`.
fn check_nested(inlines: &[Inline], bounds: Span) {
    let mut prev_end: Option<usize> = None;
    for inline in inlines {
        assert!(
            bounds.contains(inline.span),
            "inline {} {:?} escapes {bounds:?}",
            inline.name(),
            inline.span
        );
        if let Some(end) = prev_end {
            assert_eq!(
                inline.span.start,
                end,
                "gap or overlap before inline {} {:?}",
                inline.name(),
                inline.span
            );
        }
        prev_end = Some(inline.span.end);
        check_nested(inline.children(), inline.span);
    }
}
