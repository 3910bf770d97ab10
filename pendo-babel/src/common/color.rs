//! Color spans: `<color value="#RRGGBB">` tag pairs ⇄ `Color` nodes.
//!
//! The markdown engine sees a color span as two unrelated HTML nodes with
//! the colored content between them. Folding them into one `Color` node lets
//! the escaping core treat the span like any other component.
//!
//! Folding works within one sibling list. An opening tag without a balanced
//! `</color>` sibling takes every remaining sibling as its content.

use crate::ast::Node;
use once_cell::sync::Lazy;
use regex::Regex;

static OPEN_TAG: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"^<color value="(#[a-fA-F0-9]{6})">$"#).expect("valid color tag regex")
});

pub const CLOSE_TAG: &str = "</color>";

/// The opening tag for a color value.
pub fn open_tag(value: &str) -> String {
    format!("<color value=\"{value}\">")
}

fn color_value(node: &Node) -> Option<String> {
    match node {
        Node::Html(raw) => OPEN_TAG
            .captures(raw)
            .and_then(|captures| captures.get(1))
            .map(|value| value.as_str().to_string()),
        _ => None,
    }
}

/// Whether raw HTML is one of the two color tags.
pub fn is_color_tag(raw: &str) -> bool {
    raw == CLOSE_TAG || OPEN_TAG.is_match(raw)
}

fn is_close_tag(node: &Node) -> bool {
    matches!(node, Node::Html(raw) if raw == CLOSE_TAG)
}

/// Fold every color tag pair of the tree into a `Color` node.
pub fn to_color_nodes(mut tree: Node) -> Node {
    if let Some(children) = tree.children_mut() {
        fold_children(children);
    }
    tree
}

fn fold_children(nodes: &mut Vec<Node>) {
    let mut cursor = 0;
    while cursor < nodes.len() {
        let Some(value) = color_value(&nodes[cursor]) else {
            if let Some(children) = nodes[cursor].children_mut() {
                fold_children(children);
            }
            cursor += 1;
            continue;
        };

        let (end, closed) = match find_close(nodes, cursor) {
            Some(close) => (close, true),
            None => {
                tracing::warn!(color = %value, "unbalanced color tag, coloring the rest");
                (nodes.len(), false)
            }
        };

        let content: Vec<Node> = nodes.drain(cursor + 1..end).collect();
        let tail = if closed { cursor + 2 } else { cursor + 1 };
        nodes.splice(cursor..tail, std::iter::once(Node::color(value, content)));
    }
}

fn find_close(nodes: &[Node], open: usize) -> Option<usize> {
    let mut level = 0usize;
    for (position, node) in nodes.iter().enumerate().skip(open + 1) {
        if color_value(node).is_some() {
            level += 1;
        } else if is_close_tag(node) {
            if level == 0 {
                return Some(position);
            }
            level -= 1;
        }
    }
    None
}

/// Unfold every `Color` node back into its tag pair.
pub fn from_color_nodes(mut tree: Node) -> Node {
    if let Some(children) = tree.children_mut() {
        unfold_children(children);
    }
    tree
}

fn unfold_children(nodes: &mut Vec<Node>) {
    let mut unfolded = Vec::with_capacity(nodes.len());
    for mut node in nodes.drain(..) {
        if let Some(children) = node.children_mut() {
            unfold_children(children);
        }
        match node {
            Node::Color { value, children } => {
                unfolded.push(Node::html(open_tag(&value)));
                unfolded.extend(children);
                unfolded.push(Node::html(CLOSE_TAG));
            }
            other => unfolded.push(other),
        }
    }
    *nodes = unfolded;
}
