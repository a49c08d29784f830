use std::sync::atomic::{AtomicBool, Ordering};

use crate::{
    options::ParseOptions,
    source::{Line, Span, preview},
};

use super::{
    classify::{LineClass, MarkdownLineClassifier},
    kinds::{
        AtxHeader, BlockQuote, CodeFence, IndentedCode, LinkReference, Paragraph, SetextHeader,
        Table, YamlHeader,
    },
    types::{Block, BlockKind, HeaderStyle, InlineContent, TableRow},
};

/// Turns lines into blocks by trying each recognizer in priority order at
/// every block start.
///
/// Container recognizers (quotes, list items) strip their prefix from their
/// lines and recurse with `depth + 1`. Past `max_nesting_depth` they decline,
/// and the lines fall through to a paragraph.
pub struct BlockParser<'a> {
    pub(super) options: &'a ParseOptions,
    pub(super) classifier: MarkdownLineClassifier,
}

/// Span of the physical lines from `first` through `last`.
pub(super) fn block_span(first: &Line, last: &Line) -> Span {
    Span::new(first.raw_line.start, last.raw_line.end)
}

/// Stretches sibling spans so they cover `parent` end to end, then does the
/// same inside every container.
///
/// Recognizers leave blank lines between blocks unclaimed; each gap goes to
/// the block before it, and the first block takes any leading gap.
fn tile(blocks: &mut [Block], parent: Span) {
    let ends: Vec<usize> = blocks
        .iter()
        .skip(1)
        .map(|b| b.span.start)
        .chain([parent.end])
        .collect();
    let mut start = parent.start;
    for (block, end) in blocks.iter_mut().zip(ends) {
        block.span = Span::new(start, end);
        start = end;
        let span = block.span;
        match &mut block.kind {
            BlockKind::Quote { blocks } => tile(blocks, span),
            BlockKind::List { items, .. } => {
                let ends: Vec<usize> = items
                    .iter()
                    .skip(1)
                    .map(|i| i.span.start)
                    .chain([span.end])
                    .collect();
                let mut start = span.start;
                for (item, end) in items.iter_mut().zip(ends) {
                    item.span = Span::new(start, end);
                    start = end;
                    tile(&mut item.blocks, item.span);
                }
            }
            _ => {}
        }
    }
}

impl<'a> BlockParser<'a> {
    pub fn new(options: &'a ParseOptions) -> Self {
        Self {
            options,
            classifier: MarkdownLineClassifier::new(options.tab_width()),
        }
    }

    /// Parses the top-level lines of a document.
    ///
    /// The returned blocks cover every line: leaf block spans concatenate
    /// back to the whole text unless it is entirely blank.
    pub fn parse_document(&self, lines: &[Line]) -> Vec<Block> {
        self.document(lines, None).unwrap_or_default()
    }

    /// Like [`parse_document`](Self::parse_document), checking `cancel` before
    /// every top-level block. Returns `None` once it is set.
    pub fn parse_document_cancellable(
        &self,
        lines: &[Line],
        cancel: &AtomicBool,
    ) -> Option<Vec<Block>> {
        self.document(lines, Some(cancel))
    }

    fn document(&self, lines: &[Line], cancel: Option<&AtomicBool>) -> Option<Vec<Block>> {
        let mut blocks = self.blocks(lines, 0, cancel)?;
        let end = lines.last().map_or(0, |l| l.raw_line.end);
        tile(&mut blocks, Span::new(0, end));
        Some(blocks)
    }

    /// Parses the lines of a container at `depth`.
    pub(crate) fn parse_blocks(&self, lines: &[Line], depth: usize) -> Vec<Block> {
        self.blocks(lines, depth, None).unwrap_or_default()
    }

    fn blocks(
        &self,
        lines: &[Line],
        depth: usize,
        cancel: Option<&AtomicBool>,
    ) -> Option<Vec<Block>> {
        let mut out = vec![];
        let mut i = 0;
        while i < lines.len() {
            if cancel.is_some_and(|c| c.load(Ordering::Relaxed)) {
                log::debug!("parse cancelled after {} blocks", out.len());
                return None;
            }
            if lines[i].is_blank() {
                i += 1;
                continue;
            }
            let (block, next) = self.block_at(lines, i, depth);
            log::trace!(
                "{} at {:?} depth={depth}: {:?}",
                block.name(),
                block.span,
                preview(&lines[i].text, 40)
            );
            out.push(block);
            i = next.max(i + 1);
        }
        Some(out)
    }

    fn block_at(&self, lines: &[Line], i: usize, depth: usize) -> (Block, usize) {
        let class = self.classifier.classify(&lines[i]);
        self.yaml_header(lines, i, depth)
            .or_else(|| self.fenced_code(lines, i, &class))
            .or_else(|| self.indented_code(lines, i, &class))
            .or_else(|| self.atx_header(lines, i, &class))
            .or_else(|| self.horizontal_rule(lines, i, &class))
            .or_else(|| self.quote(lines, i, &class, depth))
            .or_else(|| self.list(lines, i, &class, depth))
            .or_else(|| self.table(lines, i, &class))
            .or_else(|| self.link_reference(lines, i, &class))
            .unwrap_or_else(|| self.paragraph(lines, i))
    }

    fn yaml_header(&self, lines: &[Line], i: usize, depth: usize) -> Option<(Block, usize)> {
        if depth > 0 || i > 0 || !self.options.yaml_header || !YamlHeader::opens(&lines[i].text) {
            return None;
        }
        let close = lines[1..].iter().position(|l| YamlHeader::closes(&l.text))? + 1;
        let entries = lines[1..close]
            .iter()
            .map(|l| YamlHeader::entry(&l.text))
            .collect::<Option<Vec<_>>>()?;
        if entries.is_empty() {
            return None;
        }
        Some((
            Block {
                kind: BlockKind::YamlHeader { entries },
                span: block_span(&lines[0], &lines[close]),
            },
            close + 1,
        ))
    }

    fn fenced_code(&self, lines: &[Line], i: usize, class: &LineClass) -> Option<(Block, usize)> {
        if !class.can_open() {
            return None;
        }
        let open = class.fence?;
        let info = CodeFence::info(class.rest(&lines[i]), open);
        let tab = self.options.tab_width();

        let mut body = vec![];
        let mut closed = false;
        let mut j = i + 1;
        while let Some(line) = lines.get(j) {
            j += 1;
            let c = self.classifier.classify(line);
            if c.can_open() && CodeFence::closes(open, c.rest(line)) {
                closed = true;
                break;
            }
            // Content loses as much indentation as the opening fence had
            body.push(line.strip_columns(class.indent, tab).text);
        }
        if !closed {
            log::trace!("unterminated fence at {} runs to the end", lines[i].content_start);
        }

        Some((
            Block {
                kind: BlockKind::Code {
                    fence: Some(open.kind),
                    info,
                    text: body.join("\n"),
                },
                span: block_span(&lines[i], &lines[j - 1]),
            },
            j,
        ))
    }

    fn indented_code(
        &self,
        lines: &[Line],
        i: usize,
        class: &LineClass,
    ) -> Option<(Block, usize)> {
        if class.is_blank || class.indent < IndentedCode::INDENT {
            return None;
        }
        // Trailing blank lines are not part of the block
        let mut end = i + 1;
        for (j, line) in lines.iter().enumerate().skip(i + 1) {
            if line.is_blank() {
                continue;
            }
            if self.classifier.classify(line).indent < IndentedCode::INDENT {
                break;
            }
            end = j + 1;
        }

        let tab = self.options.tab_width();
        let text = lines[i..end]
            .iter()
            .map(|l| l.strip_columns(IndentedCode::INDENT, tab).text)
            .collect::<Vec<_>>()
            .join("\n");
        Some((
            Block {
                kind: BlockKind::Code {
                    fence: None,
                    info: None,
                    text,
                },
                span: block_span(&lines[i], &lines[end - 1]),
            },
            end,
        ))
    }

    fn atx_header(&self, lines: &[Line], i: usize, class: &LineClass) -> Option<(Block, usize)> {
        if !class.can_open() {
            return None;
        }
        let level = class.atx_level?;
        let line = &lines[i];
        let rest = class.rest(line);
        let at = line.offset_of_suffix(&rest[AtxHeader::content_offset(rest, level)..]);
        Some((
            Block {
                kind: BlockKind::Header {
                    level,
                    style: HeaderStyle::Atx,
                    content: InlineContent::at(AtxHeader::content(rest, level), at),
                },
                span: block_span(line, line),
            },
            i + 1,
        ))
    }

    fn horizontal_rule(
        &self,
        lines: &[Line],
        i: usize,
        class: &LineClass,
    ) -> Option<(Block, usize)> {
        if !class.can_open() || !class.is_rule {
            return None;
        }
        Some((
            Block {
                kind: BlockKind::HorizontalRule,
                span: block_span(&lines[i], &lines[i]),
            },
            i + 1,
        ))
    }

    fn quote(
        &self,
        lines: &[Line],
        i: usize,
        class: &LineClass,
        depth: usize,
    ) -> Option<(Block, usize)> {
        if !class.can_open() || !class.is_quote {
            return None;
        }
        if depth >= self.options.max_nesting_depth {
            log::debug!("quote nesting depth {depth} reached; keeping as paragraph");
            return None;
        }

        let tab = self.options.tab_width();
        let mut inner: Vec<Line> = vec![];
        let mut fence = None;
        let mut j = i;
        while let Some(line) = lines.get(j) {
            let c = self.classifier.classify(line);
            if c.can_open()
                && c.is_quote
                && let Some(stripped) = BlockQuote::strip_prefix(line, c.indent_bytes, tab)
            {
                fence = self.classifier.fence_after(fence, &stripped);
                inner.push(stripped);
            } else if fence.is_none()
                && !c.is_blank
                && !c.interrupts_paragraph()
                && self.paragraph_open(inner.last())
            {
                // Lazy continuation of the quoted paragraph
                inner.push(line.clone());
            } else {
                break;
            }
            j += 1;
        }

        let blocks = self.parse_blocks(&inner, depth + 1);
        Some((
            Block {
                kind: BlockKind::Quote { blocks },
                span: block_span(&lines[i], &lines[j - 1]),
            },
            j,
        ))
    }

    /// Whether `last` leaves a paragraph open for a lazy continuation line.
    pub(super) fn paragraph_open(&self, last: Option<&Line>) -> bool {
        let Some(last) = last else {
            return false;
        };
        let c = self.classifier.classify(last);
        !c.is_blank
            && !(c.can_open() && (c.fence.is_some() || c.atx_level.is_some() || c.is_rule))
    }

    fn table(&self, lines: &[Line], i: usize, class: &LineClass) -> Option<(Block, usize)> {
        if !self.options.tables || !class.can_open() {
            return None;
        }
        let head = &lines[i];
        if !Table::is_row(class.rest(head)) {
            return None;
        }
        let delimiter = lines.get(i + 1)?;
        let dc = self.classifier.classify(delimiter);
        if !dc.can_open() {
            return None;
        }
        let alignments = Table::delimiter_row(dc.rest(delimiter))?;
        let columns = alignments.len();

        let header = self.table_row(head, class, columns);
        let mut rows = vec![];
        let mut j = i + 2;
        while let Some(line) = lines.get(j) {
            let c = self.classifier.classify(line);
            if c.is_blank
                || !Table::is_row(c.rest(line))
                || (c.can_open() && (c.is_quote || c.fence.is_some() || c.atx_level.is_some()))
            {
                break;
            }
            rows.push(self.table_row(line, &c, columns));
            j += 1;
        }

        Some((
            Block {
                kind: BlockKind::Table {
                    alignments,
                    header,
                    rows,
                },
                span: block_span(head, &lines[j - 1]),
            },
            j,
        ))
    }

    /// Splits a row into exactly `columns` cells, padding or truncating.
    fn table_row(&self, line: &Line, class: &LineClass, columns: usize) -> TableRow {
        let rest = class.rest(line);
        let mut cells: Vec<InlineContent> = Table::split_row(rest)
            .into_iter()
            .map(|(from, to)| {
                InlineContent::at(&rest[from..to], line.offset_of_suffix(&rest[from..]))
            })
            .collect();
        if cells.len() != columns {
            log::trace!(
                "table row at {} has {} cells, expected {columns}",
                line.content_start,
                cells.len()
            );
        }
        cells.resize_with(columns, InlineContent::default);
        TableRow {
            span: block_span(line, line),
            cells,
        }
    }

    fn link_reference(
        &self,
        lines: &[Line],
        i: usize,
        class: &LineClass,
    ) -> Option<(Block, usize)> {
        if !class.can_open() {
            return None;
        }
        let line = &lines[i];
        let def = LinkReference::parse(class.rest(line).trim_end())?;
        Some((
            Block {
                kind: BlockKind::LinkReference {
                    id: def.id,
                    url: def.url,
                    tooltip: def.tooltip,
                },
                span: block_span(line, line),
            },
            i + 1,
        ))
    }

    /// Fallback: lines up to a blank line or an interrupting block. An
    /// underline turns the paragraph into a setext header.
    fn paragraph(&self, lines: &[Line], i: usize) -> (Block, usize) {
        let mut j = i + 1;
        while let Some(line) = lines.get(j) {
            let c = self.classifier.classify(line);
            if c.is_blank {
                break;
            }
            if c.can_open()
                && let Some(level) = SetextHeader::underline(c.rest(line))
            {
                return (
                    Block {
                        kind: BlockKind::Header {
                            level,
                            style: HeaderStyle::Setext,
                            content: Paragraph::content(&lines[i..j]),
                        },
                        span: block_span(&lines[i], line),
                    },
                    j + 1,
                );
            }
            if c.interrupts_paragraph() {
                break;
            }
            j += 1;
        }

        (
            Block {
                kind: BlockKind::Paragraph(Paragraph::content(&lines[i..j])),
                span: block_span(&lines[i], &lines[j - 1]),
            },
            j,
        )
    }
}
