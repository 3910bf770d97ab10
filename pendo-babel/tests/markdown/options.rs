//! Dialect options switch syntax off

use insta::assert_snapshot;
use pendo_babel::ast::Node;
use pendo_babel::format::MarkdownEngine;
use pendo_babel::formats::{PendoMarkdown, SyntaxOptions};

fn engine(options: SyntaxOptions) -> PendoMarkdown {
    PendoMarkdown::new(options)
}

#[test]
fn test_defaults_enable_everything() {
    let options = SyntaxOptions::default();
    assert!(options.underline && options.strikethrough && options.links);
    assert!(options.lists && options.html);
    assert_eq!(PendoMarkdown::default().name(), "pendo");
}

#[test]
fn test_without_underline_plus_is_plain() {
    let engine = engine(SyntaxOptions {
        underline: false,
        ..SyntaxOptions::default()
    });
    let tree = engine.parse("++not underlined++").unwrap();
    assert_eq!(
        tree,
        Node::Root(vec![Node::Paragraph(vec![Node::text("++not underlined++")])])
    );
    assert_snapshot!(engine.serialize(&tree).unwrap(), @"++not underlined++");

    let escaped = PendoMarkdown::default().parse("\\++x++").unwrap();
    assert_eq!(
        escaped,
        Node::Root(vec![Node::Paragraph(vec![Node::text("++x++")])])
    );
}

#[test]
fn test_without_lists_markers_are_text() {
    let engine = engine(SyntaxOptions {
        lists: false,
        ..SyntaxOptions::default()
    });
    let tree = engine.parse("- one\n- two").unwrap();
    assert_eq!(
        tree,
        Node::Root(vec![Node::Paragraph(vec![Node::text("- one\n- two")])])
    );
    let serialized = engine.serialize(&tree).unwrap();
    assert_eq!(engine.parse(&serialized).unwrap(), tree);
    assert_eq!(
        PendoMarkdown::default().parse(&serialized).unwrap(),
        tree,
        "list markers are escaped for engines with lists enabled"
    );
}

#[test]
fn test_without_html_only_placeholders_and_colors_are_tags() {
    let engine = engine(SyntaxOptions {
        html: false,
        ..SyntaxOptions::default()
    });
    let tree = engine
        .parse(r##"<b>x</b> <c0>y</c0> <color value="#00FF00">z</color>"##)
        .unwrap();
    assert_eq!(
        tree,
        Node::Root(vec![Node::Paragraph(vec![
            Node::text("<b>x</b> "),
            Node::html("<c0>"),
            Node::text("y"),
            Node::html("</c0>"),
            Node::text(" "),
            Node::html(r##"<color value="#00FF00">"##),
            Node::text("z"),
            Node::html("</color>"),
        ])])
    );
}

#[test]
fn test_without_html_blocks_become_paragraphs() {
    let engine = engine(SyntaxOptions {
        html: false,
        ..SyntaxOptions::default()
    });
    let tree = engine.parse("<div>\n\n<c0>\n\ntext\n\n</c0>").unwrap();
    assert_eq!(
        tree,
        Node::Root(vec![
            Node::Paragraph(vec![Node::text("<div>")]),
            Node::html("<c0>"),
            Node::Paragraph(vec![Node::text("text")]),
            Node::html("</c0>"),
        ])
    );
    assert_eq!(engine.parse(&engine.serialize(&tree).unwrap()).unwrap(), tree);
}

#[test]
fn test_without_strikethrough_tildes_are_text() {
    let engine = engine(SyntaxOptions {
        strikethrough: false,
        ..SyntaxOptions::default()
    });
    let tree = engine.parse("~~kept~~ **bold**").unwrap();
    assert_eq!(
        tree,
        Node::Root(vec![Node::Paragraph(vec![
            Node::text("~~kept~~ "),
            Node::Strong(vec![Node::text("bold")]),
        ])])
    );
}

#[test]
fn test_without_links_brackets_are_text() {
    let engine = engine(SyntaxOptions {
        links: false,
        ..SyntaxOptions::default()
    });
    let tree = engine.parse("[a](https://example.com)").unwrap();
    assert_eq!(
        tree,
        Node::Root(vec![Node::Paragraph(vec![Node::text("[a](https://example.com)")])])
    );
}

#[test]
fn test_options_deserialize_with_defaults() {
    let options: SyntaxOptions = serde_json::from_str(r#"{"strikethrough": false}"#).unwrap();
    assert_eq!(
        options,
        SyntaxOptions {
            strikethrough: false,
            ..SyntaxOptions::default()
        }
    );
}
