//! Serialized paragraphs parse back into the tree they came from
//!
//! Generated content is first shaped into what markdown can say without
//! ambiguity: no whitespace just inside a delimiter, no span inside a span of
//! its own kind, and no two runs of the same delimiter touching each other.

use pendo_babel::ast::{merge_adjacent_text, Node};
use pendo_babel::format::MarkdownEngine;
use pendo_babel::formats::PendoMarkdown;
use proptest::prelude::*;

/// Attention nodes sharing a delimiter character
fn family(node: &Node) -> Option<char> {
    match node {
        Node::Strong(_) | Node::Emphasis(_) => Some('*'),
        Node::Underline(_) => Some('+'),
        Node::Delete(_) => Some('~'),
        _ => None,
    }
}

fn trim_edges(nodes: &mut Vec<Node>) {
    merge_adjacent_text(nodes);
    if let Some(Node::Text(text)) = nodes.first_mut() {
        *text = text.trim_start().to_string();
    }
    if let Some(Node::Text(text)) = nodes.last_mut() {
        *text = text.trim_end().to_string();
    }
    nodes.retain(|node| !matches!(node, Node::Text(text) if text.is_empty()));
}

fn canonical(nodes: Vec<Node>, ancestors: &[&'static str]) -> Vec<Node> {
    let mut out: Vec<Node> = Vec::new();
    for mut node in nodes {
        let kind = node.kind_name();
        if ancestors.contains(&kind) {
            for child in canonical(node.into_children(), ancestors) {
                push_apart(&mut out, child);
            }
            continue;
        }

        let delimiter = family(&node);
        if let Some(children) = node.children_mut() {
            let scope = [ancestors, &[kind]].concat();
            let mut inner = canonical(std::mem::take(children), &scope);
            if delimiter.is_some() {
                trim_edges(&mut inner);
                if inner.is_empty() {
                    continue;
                }
                if inner.first().and_then(family) == delimiter {
                    inner.insert(0, Node::text("x"));
                }
                if inner.last().and_then(family) == delimiter {
                    inner.push(Node::text("x"));
                }
            }
            *children = inner;
        }

        push_apart(&mut out, node);
    }
    merge_adjacent_text(&mut out);
    out
}

/// Push a node, keeping it off a preceding run of the same delimiter.
fn push_apart(out: &mut Vec<Node>, node: Node) {
    let delimiter = family(&node);
    if delimiter.is_some() && out.last().and_then(family) == delimiter {
        out.push(Node::text(" "));
    }
    out.push(node);
}

fn inline_strategy() -> impl Strategy<Value = Node> {
    let leaf = prop_oneof![
        3 => "[a-zA-Z][a-zA-Z0-9.,!?'()*_-]{0,5}".prop_map(Node::Text),
        1 => Just(Node::text(" ")),
    ];
    leaf.prop_recursive(3, 24, 4, |inner| {
        let children = prop::collection::vec(inner, 1..4);
        prop_oneof![
            children.clone().prop_map(Node::Strong),
            children.clone().prop_map(Node::Emphasis),
            children.clone().prop_map(Node::Underline),
            children.clone().prop_map(Node::Delete),
            ("https://[a-z]{1,8}\\.com", children)
                .prop_map(|(url, children)| Node::link(url, children)),
        ]
    })
}

fn paragraph_strategy() -> impl Strategy<Value = Node> {
    prop::collection::vec(inline_strategy(), 1..6).prop_map(|children| {
        let mut children = canonical(children, &[]);
        trim_edges(&mut children);
        if children.is_empty() {
            children.push(Node::text("x"));
        }
        Node::Root(vec![Node::Paragraph(children)])
    })
}

fn reparse(tree: &Node) -> Node {
    let engine = PendoMarkdown::default();
    engine.parse(&engine.serialize(tree).unwrap()).unwrap()
}

#[test]
fn test_word_before_nested_strikethrough() {
    let tree = Node::Root(vec![Node::Paragraph(vec![
        Node::text("aa"),
        Node::Strong(vec![Node::Delete(vec![Node::text("aa")])]),
    ])]);
    assert_eq!(reparse(&tree), tree);
}

#[test]
fn test_word_after_punctuated_emphasis() {
    let tree = Node::Root(vec![Node::Paragraph(vec![
        Node::Emphasis(vec![Node::text("done.")]),
        Node::text("next"),
        Node::Underline(vec![Node::link("https://example.com", vec![Node::text("go")])]),
        Node::text("on"),
    ])]);
    assert_eq!(reparse(&tree), tree);
}

#[cfg(test)]
mod proptest_tests {
    use super::*;

    proptest! {
        #[test]
        fn serialize_then_parse_is_identity(tree in paragraph_strategy()) {
            prop_assert_eq!(reparse(&tree), tree);
        }

        #[test]
        fn serialization_is_stable(tree in paragraph_strategy()) {
            let engine = PendoMarkdown::default();
            let once = engine.serialize(&tree).unwrap();
            let twice = engine.serialize(&engine.parse(&once).unwrap()).unwrap();
            prop_assert_eq!(once, twice);
        }
    }
}
