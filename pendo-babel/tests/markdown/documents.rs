//! Whole documents through the Pendo dialect

use insta::assert_snapshot;
use pendo_babel::ast::Node;
use pendo_babel::format::MarkdownEngine;
use pendo_babel::formats::PendoMarkdown;

fn round_trip(source: &str) -> String {
    let engine = PendoMarkdown::default();
    let tree = engine.parse(source).unwrap();
    engine.serialize(&tree).unwrap()
}

const KITCHENSINK: &str = "\
Intro with **bold**, *italic*, ++underline++, ~~strike~~ and a [link](https://example.com).

- first
- second with <b>html</b>
  1. nested
  2. items

<br/>

Closing line
continues here";

#[test]
fn test_canonical_document_round_trips() {
    let engine = PendoMarkdown::default();
    let tree = engine.parse(KITCHENSINK).unwrap();
    assert_eq!(engine.parse(&round_trip(KITCHENSINK)).unwrap(), tree);
}

#[test]
fn test_kitchensink_tree() {
    let tree = PendoMarkdown::default().parse(KITCHENSINK).unwrap();
    let Node::Root(blocks) = tree else {
        panic!("expected a root node");
    };
    let kinds: Vec<_> = blocks.iter().map(Node::kind_name).collect();
    assert_eq!(kinds, vec!["paragraph", "list", "html", "paragraph"]);
}

#[test]
fn test_alternative_spellings_are_normalized() {
    let source = "__strong__ _em_\n\n* star\n* list\n\n3) three\n4) four";
    let normalized = round_trip(source);

    assert!(normalized.starts_with("**strong** *em*\n\n"));
    assert!(normalized.contains("1. three\n2. four"));
    let engine = PendoMarkdown::default();
    assert_eq!(
        engine.parse(&normalized).unwrap(),
        engine.parse(source).unwrap()
    );
}

#[test]
fn test_unsupported_syntax_survives_as_text() {
    let engine = PendoMarkdown::default();
    let source = "# Heading\n\n> quote with `code`\n\n---\n\nhttps://example.com <https://example.com>";
    let tree = engine.parse(source).unwrap();

    assert_eq!(
        tree,
        Node::Root(vec![
            Node::Paragraph(vec![Node::text("# Heading")]),
            Node::Paragraph(vec![Node::text("> quote with `code`")]),
            Node::Paragraph(vec![Node::text("---")]),
            Node::Paragraph(vec![Node::text(
                "https://example.com <https://example.com>"
            )]),
        ])
    );
    assert_eq!(engine.parse(&engine.serialize(&tree).unwrap()).unwrap(), tree);
}

#[test]
fn test_image_syntax_is_a_bang_and_a_link() {
    let tree = PendoMarkdown::default().parse("![alt](pic.png)").unwrap();
    assert_eq!(
        tree,
        Node::Root(vec![Node::Paragraph(vec![
            Node::text("!"),
            Node::link("pic.png", vec![Node::text("alt")]),
        ])])
    );
}

#[test]
fn test_escaped_text_reads_back_identically() {
    let engine = PendoMarkdown::default();
    let tree = Node::Root(vec![Node::Paragraph(vec![Node::text(
        "- no list\n1. nor this\na*b [c] _d_ ~~e~~ C++ <b> 1 < 2 back\\",
    )])]);

    let serialized = engine.serialize(&tree).unwrap();
    assert_eq!(engine.parse(&serialized).unwrap(), tree);
}

#[test]
fn test_loose_list_items_keep_their_paragraphs() {
    let source = "- first para\n\n  second para\n- next";
    let tree = PendoMarkdown::default().parse(source).unwrap();
    assert_eq!(
        tree,
        Node::Root(vec![Node::list(
            false,
            vec![
                Node::ListItem(vec![
                    Node::Paragraph(vec![Node::text("first para")]),
                    Node::Paragraph(vec![Node::text("second para")]),
                ]),
                Node::ListItem(vec![Node::Paragraph(vec![Node::text("next")])]),
            ]
        )])
    );
    assert_eq!(PendoMarkdown::default().parse(&round_trip(source)).unwrap(), tree);
}

#[test]
fn test_hard_breaks_and_entities() {
    let engine = PendoMarkdown::default();
    let tree = engine.parse("one\\\ntwo &amp; three  \nfour").unwrap();
    assert_eq!(
        tree,
        Node::Root(vec![Node::Paragraph(vec![
            Node::text("one"),
            Node::Break,
            Node::text("two & three"),
            Node::Break,
            Node::text("four"),
        ])])
    );
    assert_eq!(engine.parse(&engine.serialize(&tree).unwrap()).unwrap(), tree);
}

#[test]
fn test_edge_whitespace_moves_outside_delimiters() {
    let engine = PendoMarkdown::default();
    let tree = Node::Root(vec![Node::Paragraph(vec![
        Node::text("a"),
        Node::Strong(vec![Node::text(" fett ")]),
        Node::text("b"),
        Node::Underline(vec![Node::text("u ")]),
        Node::Delete(vec![Node::text(" d")]),
        Node::Emphasis(vec![Node::text("e\n")]),
        Node::text("f"),
    ])]);

    let serialized = engine.serialize(&tree).unwrap();
    assert_snapshot!(serialized, @r"
    a **fett** b++u++  ~~d~~*e*
    f
    ");
    assert_eq!(
        engine.parse(&serialized).unwrap(),
        Node::Root(vec![Node::Paragraph(vec![
            Node::text("a "),
            Node::Strong(vec![Node::text("fett")]),
            Node::text(" b"),
            Node::Underline(vec![Node::text("u")]),
            Node::text("  "),
            Node::Delete(vec![Node::text("d")]),
            Node::Emphasis(vec![Node::text("e")]),
            Node::text("\nf"),
        ])])
    );
}

#[test]
fn test_windows_line_endings() {
    assert_eq!(round_trip("a\r\nb\r\n\r\nc"), "a\nb\n\nc");
}
