//! Core data structures for the document tree.

use super::marker::Marker;
use serde::Serialize;

/// A node of a parsed Pendo markdown document.
///
/// Container variants own their children; `Text`, `Break`, `Html` and
/// `Marker` are leaves. The tree carries no source positions, so two trees compare equal
/// exactly when their structure and content match.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Node {
    Root(Vec<Node>),
    Paragraph(Vec<Node>),
    Text(String),
    /// Hard line break
    Break,
    Strong(Vec<Node>),
    Emphasis(Vec<Node>),
    Underline(Vec<Node>),
    Delete(Vec<Node>),
    Link { url: String, children: Vec<Node> },
    List { ordered: bool, children: Vec<Node> },
    ListItem(Vec<Node>),
    Color { value: String, children: Vec<Node> },
    /// Raw inline or block HTML, kept verbatim
    Html(String),
    Marker(Marker),
}

impl Node {
    pub fn text(value: impl Into<String>) -> Self {
        Node::Text(value.into())
    }

    pub fn html(value: impl Into<String>) -> Self {
        Node::Html(value.into())
    }

    pub fn link(url: impl Into<String>, children: Vec<Node>) -> Self {
        Node::Link {
            url: url.into(),
            children,
        }
    }

    pub fn list(ordered: bool, children: Vec<Node>) -> Self {
        Node::List { ordered, children }
    }

    pub fn color(value: impl Into<String>, children: Vec<Node>) -> Self {
        Node::Color {
            value: value.into(),
            children,
        }
    }

    /// Children of a container node; `None` for leaves.
    pub fn children(&self) -> Option<&[Node]> {
        match self {
            Node::Root(children)
            | Node::Paragraph(children)
            | Node::Strong(children)
            | Node::Emphasis(children)
            | Node::Underline(children)
            | Node::Delete(children)
            | Node::Link { children, .. }
            | Node::List { children, .. }
            | Node::ListItem(children)
            | Node::Color { children, .. } => Some(children),
            Node::Text(_) | Node::Break | Node::Html(_) | Node::Marker(_) => None,
        }
    }

    pub fn children_mut(&mut self) -> Option<&mut Vec<Node>> {
        match self {
            Node::Root(children)
            | Node::Paragraph(children)
            | Node::Strong(children)
            | Node::Emphasis(children)
            | Node::Underline(children)
            | Node::Delete(children)
            | Node::Link { children, .. }
            | Node::List { children, .. }
            | Node::ListItem(children)
            | Node::Color { children, .. } => Some(children),
            Node::Text(_) | Node::Break | Node::Html(_) | Node::Marker(_) => None,
        }
    }

    /// Consume the node and hand back its children (empty for leaves).
    pub fn into_children(self) -> Vec<Node> {
        match self {
            Node::Root(children)
            | Node::Paragraph(children)
            | Node::Strong(children)
            | Node::Emphasis(children)
            | Node::Underline(children)
            | Node::Delete(children)
            | Node::Link { children, .. }
            | Node::List { children, .. }
            | Node::ListItem(children)
            | Node::Color { children, .. } => children,
            Node::Text(_) | Node::Break | Node::Html(_) | Node::Marker(_) => Vec::new(),
        }
    }

    /// Whether the node belongs in running text rather than at block level.
    pub fn is_inline(&self) -> bool {
        !matches!(
            self,
            Node::Root(_) | Node::Paragraph(_) | Node::List { .. } | Node::ListItem(_)
        )
    }

    /// Short type tag, used for tree dumps and log messages.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Node::Root(_) => "root",
            Node::Paragraph(_) => "paragraph",
            Node::Text(_) => "text",
            Node::Break => "break",
            Node::Strong(_) => "strong",
            Node::Emphasis(_) => "emphasis",
            Node::Underline(_) => "underline",
            Node::Delete(_) => "delete",
            Node::Link { .. } => "link",
            Node::List { .. } => "list",
            Node::ListItem(_) => "listItem",
            Node::Color { .. } => "color",
            Node::Html(_) => "html",
            Node::Marker(_) => "marker",
        }
    }

    /// Concatenated text content of the subtree.
    pub fn plain_text(&self) -> String {
        let mut out = String::new();
        self.collect_text(&mut out);
        out
    }

    fn collect_text(&self, out: &mut String) {
        match self {
            Node::Text(text) => out.push_str(text),
            Node::Break => out.push('\n'),
            _ => {
                for child in self.children().unwrap_or_default() {
                    child.collect_text(out);
                }
            }
        }
    }
}

/// Merge adjacent text siblings, recursively.
///
/// Parsing emits text in fragments (delimiter runs that did not pair up,
/// escaped characters), so trees are normalized before being handed out.
pub fn merge_adjacent_text(nodes: &mut Vec<Node>) {
    let mut merged: Vec<Node> = Vec::with_capacity(nodes.len());
    for mut node in nodes.drain(..) {
        if let Some(children) = node.children_mut() {
            merge_adjacent_text(children);
        }
        if let Node::Text(text) = &node {
            if text.is_empty() {
                continue;
            }
            if let Some(Node::Text(previous)) = merged.last_mut() {
                previous.push_str(text);
                continue;
            }
        }
        merged.push(node);
    }
    *nodes = merged;
}
