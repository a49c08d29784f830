use markdown_toolkit_parser::{parse, render::outline, snapshot};

#[test]
fn fixture_readme() {
    assert_fixture("readme");
}

#[test]
fn fixture_quote_code_table() {
    assert_fixture("quote_code_table");
}

#[test]
fn fixture_front_matter() {
    assert_fixture("front_matter");
}

fn assert_fixture(name: &str) {
    let md = std::fs::read_to_string(format!(
        "{}/tests/fixtures/{name}.md",
        env!("CARGO_MANIFEST_DIR")
    ))
    .unwrap();

    let doc = parse(&md);
    snapshot::invariants(&doc);

    insta::assert_snapshot!(name, outline(&doc));
}

/// Top-level block spans slice back to their source, blank lines included
#[test]
fn block_spans_slice_back_to_source() {
    let md = "# Title\n\n> quoted\n\n    code\n";
    let doc = parse(md);

    let texts: Vec<String> = doc.blocks.iter().map(|b| doc.slice(b.span)).collect();
    assert_eq!(texts, ["# Title\n\n", "> quoted\n\n", "    code\n"]);
    assert_eq!(texts.concat(), md);
}

/// Code spans are raw zones: nothing inside them is parsed
#[test]
fn raw_zones_suppress_inline_parsing() {
    use markdown_toolkit_parser::{BlockKind, InlineKind};

    let doc = parse("`[not a link](x) **nor bold**`");
    assert_eq!(doc.blocks.len(), 1);
    let BlockKind::Paragraph(content) = &doc.blocks[0].kind else {
        panic!("expected paragraph, got {:?}", doc.blocks[0].kind);
    };

    assert_eq!(content.inlines.len(), 1);
    assert!(matches!(
        &content.inlines[0].kind,
        InlineKind::Code(c) if c == "[not a link](x) **nor bold**"
    ));
}
