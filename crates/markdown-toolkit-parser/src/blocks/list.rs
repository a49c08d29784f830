//! List recognition with an explicit stack of open list levels.
//!
//! Each line is resolved against the stack: a marker at or past the top
//! item's content column opens a nested list, a marker between a level's
//! marker and content columns starts a sibling item, and anything shallower
//! closes levels until it fits. Item bodies are parsed as blocks once their
//! level closes.

use crate::source::{Line, Span};

use super::{
    builder::BlockParser,
    classify::{LineClass, MarkdownLineClassifier},
    kinds::{FenceSig, ListMarker},
    types::{Block, BlockKind, ListItem},
};

/// One open list level.
struct NestedListInfo {
    /// Marker of the first item; decides the list style.
    marker: ListMarker,
    /// Column of the current item's marker.
    marker_col: usize,
    /// Column where the current item's content starts.
    content_col: usize,
    items: Vec<ItemDraft>,
    /// A blank line fell between two items or inside one item's blocks.
    loose: bool,
}

/// An item whose body lines are still being collected.
struct ItemDraft {
    span: Span,
    parts: Vec<ItemPart>,
    /// A code fence opened in the item's text and not yet closed.
    fence: Option<FenceSig>,
}

enum ItemPart {
    Line(Line),
    /// A nested list, already closed.
    List(Block),
}

impl NestedListInfo {
    fn open(
        line: &Line,
        class: &LineClass,
        marker: ListMarker,
        classifier: &MarkdownLineClassifier,
        tab_width: usize,
    ) -> Self {
        let mut level = Self {
            marker,
            marker_col: class.indent,
            content_col: class.indent + marker.width(),
            items: vec![],
            loose: false,
        };
        level.start_item(line, class, marker, classifier, tab_width);
        level
    }

    fn start_item(
        &mut self,
        line: &Line,
        class: &LineClass,
        marker: ListMarker,
        classifier: &MarkdownLineClassifier,
        tab_width: usize,
    ) {
        self.marker_col = class.indent;
        self.content_col = class.indent + marker.width();
        let first = line
            .skip_bytes(class.indent_bytes + marker.len)
            .strip_columns(marker.spacing, tab_width);
        self.items.push(ItemDraft {
            span: Span::new(line.raw_line.start, line.raw_line.end),
            fence: classifier.fence_after(None, &first),
            parts: vec![ItemPart::Line(first)],
        });
    }

    fn push_line(&mut self, line: Line, classifier: &MarkdownLineClassifier) {
        if let Some(item) = self.items.last_mut() {
            if !line.is_blank() {
                item.span.end = line.raw_line.end;
            }
            item.fence = classifier.fence_after(item.fence, &line);
            item.parts.push(ItemPart::Line(line));
        }
    }

    /// Whether the current item is inside an unclosed code fence.
    fn in_fence(&self) -> bool {
        self.items.last().is_some_and(|i| i.fence.is_some())
    }

    fn push_list(&mut self, list: Block) {
        if let Some(item) = self.items.last_mut() {
            item.span.end = item.span.end.max(list.span.end);
            item.parts.push(ItemPart::List(list));
        }
    }

    /// The current item ends in a text line a lazy line could continue.
    fn paragraph_open(&self) -> bool {
        !self.in_fence()
            && matches!(
                self.items.last().and_then(|i| i.parts.last()),
                Some(ItemPart::Line(l)) if !l.is_blank()
            )
    }
}

impl BlockParser<'_> {
    pub(super) fn list(
        &self,
        lines: &[Line],
        i: usize,
        class: &LineClass,
        depth: usize,
    ) -> Option<(Block, usize)> {
        if !class.can_open() || class.is_rule {
            return None;
        }
        let marker = class.list_marker?;
        if depth >= self.options.max_nesting_depth {
            log::debug!("list nesting depth {depth} reached; keeping as paragraph");
            return None;
        }

        let tab = self.options.tab_width();
        let classifier = &self.classifier;
        let mut stack = vec![NestedListInfo::open(&lines[i], class, marker, classifier, tab)];
        let mut j = i + 1;
        let mut prev_blank = false;

        while let Some(line) = lines.get(j) {
            if line.is_blank() {
                let next = lines[j..]
                    .iter()
                    .position(|l| !l.is_blank())
                    .map(|k| j + k);
                let Some(next) = next.filter(|&n| self.continues_after_blank(&lines[n], &stack))
                else {
                    break;
                };
                if let Some(top) = stack.last_mut() {
                    let col = top.content_col;
                    for blank in &lines[j..next] {
                        top.push_line(blank.strip_columns(col, tab), classifier);
                    }
                }
                prev_blank = true;
                j = next;
                continue;
            }

            let c = self.classifier.classify(line);
            if c.is_rule && c.indent < stack[0].content_col {
                break;
            }

            let fenced = stack
                .last()
                .is_some_and(|top| top.in_fence() && c.indent >= top.content_col);
            if fenced {
                // Fenced text inside the item, markers included
                if let Some(top) = stack.last_mut() {
                    let col = top.content_col;
                    top.push_line(line.strip_columns(col, tab), classifier);
                }
            } else if let Some(m) = c.list_marker
                && !c.is_rule
            {
                if !self.place_marker(&mut stack, line, &c, m, prev_blank, depth) {
                    break;
                }
            } else if let Some(level) = stack.iter().rposition(|l| c.indent >= l.content_col) {
                self.collapse_to(&mut stack, level + 1, depth);
                let top = &mut stack[level];
                top.loose |= prev_blank;
                let col = top.content_col;
                top.push_line(line.strip_columns(col, tab), classifier);
            } else if !prev_blank
                && !c.interrupts_paragraph()
                && stack.last().is_some_and(NestedListInfo::paragraph_open)
            {
                if let Some(top) = stack.last_mut() {
                    top.push_line(line.strip_indent(), classifier);
                }
            } else {
                break;
            }
            prev_blank = false;
            j += 1;
        }

        self.collapse_to(&mut stack, 1, depth);
        let base = stack.pop()?;
        Some((self.finish_level(base, depth), j))
    }

    /// Resolves a marker line against the open levels. Returns `false` when
    /// the line ends the whole list. `after_blank` loosens the level the
    /// marker lands in.
    fn place_marker(
        &self,
        stack: &mut Vec<NestedListInfo>,
        line: &Line,
        class: &LineClass,
        marker: ListMarker,
        after_blank: bool,
        depth: usize,
    ) -> bool {
        let tab = self.options.tab_width();
        let classifier = &self.classifier;
        loop {
            let len = stack.len();
            let Some(top) = stack.last_mut() else {
                return false;
            };

            if class.indent >= top.content_col {
                top.loose |= after_blank;
                if depth + len < self.options.max_nesting_depth {
                    stack.push(NestedListInfo::open(line, class, marker, classifier, tab));
                } else {
                    log::debug!(
                        "list nesting depth {} reached; keeping marker as text",
                        depth + len
                    );
                    let col = top.content_col;
                    top.push_line(line.strip_columns(col, tab), classifier);
                }
                return true;
            }

            if len == 1 || class.indent >= top.marker_col {
                if top.marker.continues(&marker) {
                    top.loose |= after_blank;
                    top.start_item(line, class, marker, classifier, tab);
                    return true;
                }
                if len == 1 {
                    return false;
                }
            }
            self.collapse_to(stack, len - 1, depth);
        }
    }

    /// A blank line stays in the list only if the next non-blank line does.
    fn continues_after_blank(&self, next: &Line, stack: &[NestedListInfo]) -> bool {
        let Some(base) = stack.first() else {
            return false;
        };
        let c = self.classifier.classify(next);
        if c.indent >= base.content_col {
            return true;
        }
        !c.is_rule && c.list_marker.is_some_and(|m| base.marker.continues(&m))
    }

    /// Closes levels until `len` remain, attaching each to its parent item.
    fn collapse_to(&self, stack: &mut Vec<NestedListInfo>, len: usize, depth: usize) {
        while stack.len() > len.max(1) {
            let Some(done) = stack.pop() else {
                break;
            };
            let block = self.finish_level(done, depth + stack.len());
            if let Some(parent) = stack.last_mut() {
                parent.push_list(block);
            }
        }
    }

    fn finish_level(&self, level: NestedListInfo, depth: usize) -> Block {
        let style = level.marker.style();
        let items: Vec<ListItem> = level
            .items
            .into_iter()
            .map(|item| self.finish_item(item, depth + 1))
            .collect();
        let start = items.first().map_or(0, |i| i.span.start);
        let end = items.last().map_or(start, |i| i.span.end);
        Block {
            kind: BlockKind::List {
                style,
                tight: !level.loose,
                items,
            },
            span: Span::new(start, end),
        }
    }

    /// Parses an item's collected lines, keeping nested lists in place.
    fn finish_item(&self, item: ItemDraft, depth: usize) -> ListItem {
        fn trailing_blanks_trimmed(run: &[Line]) -> &[Line] {
            let end = run.iter().rposition(|l| !l.is_blank()).map_or(0, |p| p + 1);
            &run[..end]
        }

        let mut blocks = vec![];
        let mut run: Vec<Line> = vec![];
        for part in item.parts {
            match part {
                ItemPart::Line(line) => run.push(line),
                ItemPart::List(list) => {
                    blocks.extend(self.parse_blocks(trailing_blanks_trimmed(&run), depth));
                    run.clear();
                    blocks.push(list);
                }
            }
        }
        blocks.extend(self.parse_blocks(trailing_blanks_trimmed(&run), depth));
        ListItem {
            span: item.span,
            blocks,
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        blocks::{
            BlockParser,
            types::{Block, BlockKind, ListStyle},
        },
        options::ParseOptions,
        source::Line,
    };
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use xi_rope::Rope;

    fn parse_with(src: &str, options: &ParseOptions) -> Vec<Block> {
        let lines = Line::from_rope(&Rope::from(src));
        BlockParser::new(options).parse_document(&lines)
    }

    /// Outline of lists and paragraph text, one node per line.
    fn shape(blocks: &[Block]) -> String {
        let mut out = String::new();
        walk(blocks, 0, &mut out);
        out
    }

    fn walk(blocks: &[Block], indent: usize, out: &mut String) {
        let pad = "  ".repeat(indent);
        for b in blocks {
            match &b.kind {
                BlockKind::List { style, items, .. } => {
                    out.push_str(&format!("{pad}List {style:?}\n"));
                    for item in items {
                        out.push_str(&format!("{pad}  Item\n"));
                        walk(&item.blocks, indent + 2, out);
                    }
                }
                BlockKind::Paragraph(c) => out.push_str(&format!("{pad}P {:?}\n", c.raw)),
                _ => out.push_str(&format!("{pad}{}\n", b.name())),
            }
        }
    }

    fn shape_of(src: &str) -> String {
        shape(&parse_with(src, &ParseOptions::default()))
    }

    #[test]
    fn nested_sublist_belongs_to_its_item() {
        assert_eq!(
            shape_of("- a\n  - b\n- c"),
            concat!(
                "List Bulleted\n",
                "  Item\n",
                "    P \"a\"\n",
                "    List Bulleted\n",
                "      Item\n",
                "        P \"b\"\n",
                "  Item\n",
                "    P \"c\"\n",
            )
        );
    }

    #[test]
    fn item_spans() {
        let src = "- a\n  - b\n- c";
        let blocks = parse_with(src, &ParseOptions::default());
        assert_eq!(blocks.len(), 1);
        let BlockKind::List { items, .. } = &blocks[0].kind else {
            panic!("expected list");
        };
        assert_eq!((items[0].span.start, items[0].span.end), (0, 10));
        assert_eq!((items[1].span.start, items[1].span.end), (10, 13));
        assert_eq!((blocks[0].span.start, blocks[0].span.end), (0, 13));
    }

    #[test]
    fn text_after_sublist_returns_to_parent_item() {
        assert_eq!(
            shape_of("- a\n  - b\n\n  c"),
            concat!(
                "List Bulleted\n",
                "  Item\n",
                "    P \"a\"\n",
                "    List Bulleted\n",
                "      Item\n",
                "        P \"b\"\n",
                "    P \"c\"\n",
            )
        );
    }

    #[test]
    fn deep_nesting_pops_back_correctly() {
        assert_eq!(
            shape_of("1. a\n   - b\n     - c\n   - d\n2. e"),
            concat!(
                "List Numbered { start: 1 }\n",
                "  Item\n",
                "    P \"a\"\n",
                "    List Bulleted\n",
                "      Item\n",
                "        P \"b\"\n",
                "        List Bulleted\n",
                "          Item\n",
                "            P \"c\"\n",
                "      Item\n",
                "        P \"d\"\n",
                "  Item\n",
                "    P \"e\"\n",
            )
        );
    }

    #[test]
    fn lazy_continuation_joins_item_paragraph() {
        assert_eq!(
            shape_of("- one\ncontinued\n- two"),
            "List Bulleted\n  Item\n    P \"one\\ncontinued\"\n  Item\n    P \"two\"\n"
        );
    }

    #[test]
    fn blank_line_then_unindented_text_ends_list() {
        assert_eq!(
            shape_of("- a\n\nafter"),
            "List Bulleted\n  Item\n    P \"a\"\nP \"after\"\n"
        );
    }

    #[test]
    fn blank_lines_between_items_keep_one_list() {
        assert_eq!(
            shape_of("- a\n\n\n- b"),
            "List Bulleted\n  Item\n    P \"a\"\n  Item\n    P \"b\"\n"
        );
    }

    #[test]
    fn different_marker_category_starts_new_list() {
        assert_eq!(
            shape_of("- a\n1. b"),
            "List Bulleted\n  Item\n    P \"a\"\nList Numbered { start: 1 }\n  Item\n    P \"b\"\n"
        );
    }

    #[test]
    fn rule_ends_list() {
        assert_eq!(shape_of("- a\n---"), "List Bulleted\n  Item\n    P \"a\"\nHorizontalRule\n");
    }

    #[test]
    fn item_holds_code_and_quote() {
        assert_eq!(
            shape_of("- text\n\n      code\n  > quoted"),
            "List Bulleted\n  Item\n    P \"text\"\n    Code\n    Quote\n"
        );
    }

    #[test]
    fn lazy_line_does_not_enter_item_fence() {
        assert_eq!(
            shape_of("- ```\n  code\nlazy"),
            "List Bulleted\n  Item\n    Code\nP \"lazy\"\n"
        );
    }

    #[test]
    fn markers_inside_item_fence_stay_code() {
        let blocks = parse_with("- ```\n  - not an item\n  ```\n- b", &ParseOptions::default());
        assert_eq!(
            shape(&blocks),
            "List Bulleted\n  Item\n    Code\n  Item\n    P \"b\"\n"
        );
        let BlockKind::List { items, .. } = &blocks[0].kind else {
            panic!("expected list");
        };
        assert!(matches!(
            &items[0].blocks[0].kind,
            BlockKind::Code { text, .. } if text == "- not an item"
        ));
    }

    /// Tightness of the outer list and, when present, its first sublist.
    fn tightness(src: &str) -> (bool, Option<bool>) {
        let blocks = parse_with(src, &ParseOptions::default());
        let BlockKind::List { tight, items, .. } = &blocks[0].kind else {
            panic!("expected list");
        };
        let inner = items.iter().flat_map(|i| &i.blocks).find_map(|b| match &b.kind {
            BlockKind::List { tight, .. } => Some(*tight),
            _ => None,
        });
        (*tight, inner)
    }

    #[rstest]
    #[case::no_blanks("- a\n- b", (true, None))]
    #[case::blank_between_items("- a\n\n- b", (false, None))]
    #[case::blank_between_item_blocks("- a\n\n  b", (false, None))]
    #[case::blank_before_sublist("- a\n\n  - b", (false, Some(true)))]
    #[case::blank_between_subitems("- a\n  - b\n\n  - c", (true, Some(false)))]
    #[case::blank_ending_sublist("- a\n  - b\n\n- c", (false, Some(true)))]
    #[case::trailing_blank("- a\n- b\n\n", (true, None))]
    #[case::blank_inside_fence("- ```\n\n  ```\n- b", (true, None))]
    fn blank_lines_loosen_lists(#[case] src: &str, #[case] expected: (bool, Option<bool>)) {
        assert_eq!(tightness(src), expected);
    }

    #[test]
    fn numbered_start() {
        let blocks = parse_with("7) x\n8) y", &ParseOptions::default());
        assert!(matches!(
            &blocks[0].kind,
            BlockKind::List { style: ListStyle::Numbered { start: 7 }, items, .. }
                if items.len() == 2
        ));
    }

    #[test]
    fn nesting_cap_keeps_markers_as_text() {
        let opts = ParseOptions {
            max_nesting_depth: 2,
            ..Default::default()
        };
        assert_eq!(
            shape(&parse_with("- a\n  - b\n    - c", &opts)),
            concat!(
                "List Bulleted\n",
                "  Item\n",
                "    P \"a\"\n",
                "    List Bulleted\n",
                "      Item\n",
                "        P \"b\"\n",
                "        P \"- c\"\n",
            )
        );
    }

    #[test]
    fn thousands_of_nested_levels_finish() {
        let src: String = (0..2000).map(|i| format!("{}- x\n", "  ".repeat(i))).collect();
        let blocks = parse_with(&src, &ParseOptions::default());
        assert_eq!(blocks.len(), 1);
        assert_eq!(blocks[0].span.end, src.len());
    }
}
