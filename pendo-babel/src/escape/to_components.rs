//! Replaces syntax-bearing nodes with placeholder markers.
//!
//! # The High-Level Concept
//!
//! Translators only ever see text and `<cN>` placeholders. Every node the
//! registry knows how to record is taken out of the tree and its children are
//! lifted into the parent, bracketed by an opening and a closing marker. The
//! node's own data goes into the component list under index `N`.
//!
//! # The Algorithm
//!
//! 1. **Demotion:**
//!    - Any `Marker` already present in the input becomes raw HTML, so every
//!      marker in the output was produced by this pass
//!
//! 2. **Walking a child list** (explicit cursor, pre-order):
//!    - Markers are skipped
//!    - Unmapped nodes are descended into, then the cursor advances
//!    - A mapped node is recorded as component `i` and spliced out as
//!      `[Open(i), children.., Close(i)]`, or `[SelfClosing(i)]` when it has
//!      no children
//!    - The cursor does not advance after a splice, so the lifted children are
//!      visited next and nested components get the following indices
//!
//! Numbering is therefore first-encounter pre-order, starting at 0.

use crate::ast::{Marker, Node};
use crate::component::ComponentList;
use crate::registry::map_node_to_component;
use std::iter;

/// Escape `tree`, returning the placeholder tree and the removed components.
pub fn to_components(tree: Node) -> (Node, ComponentList) {
    let mut nodes = vec![tree];
    demote_markers(&mut nodes);

    let mut components = ComponentList::new();
    escape_children(&mut nodes, &mut components);
    tracing::debug!(components = components.len(), "escaped tree");

    (into_single(nodes), components)
}

/// Collapse a top-level node list back into one node.
///
/// Only a mapped top-level node expands into several; those are wrapped in a
/// `Root`.
pub(crate) fn into_single(mut nodes: Vec<Node>) -> Node {
    if nodes.len() == 1 {
        if let Some(node) = nodes.pop() {
            return node;
        }
    }
    Node::Root(nodes)
}

fn demote_markers(nodes: &mut [Node]) {
    for node in nodes.iter_mut() {
        if let Node::Marker(marker) = node {
            *node = Node::Html(marker.to_string());
        } else if let Some(children) = node.children_mut() {
            demote_markers(children);
        }
    }
}

fn escape_children(nodes: &mut Vec<Node>, components: &mut ComponentList) {
    let mut cursor = 0;
    while cursor < nodes.len() {
        if matches!(nodes[cursor], Node::Marker(_)) {
            cursor += 1;
            continue;
        }

        let Some(component) = map_node_to_component(&nodes[cursor]) else {
            if let Some(children) = nodes[cursor].children_mut() {
                escape_children(children, components);
            }
            cursor += 1;
            continue;
        };

        let index = components.push(component);
        let children = nodes[cursor]
            .children_mut()
            .map(std::mem::take)
            .unwrap_or_default();

        let replacement: Vec<Node> = if children.is_empty() {
            vec![Node::Marker(Marker::self_closing(index))]
        } else {
            iter::once(Node::Marker(Marker::open(index)))
                .chain(children)
                .chain(iter::once(Node::Marker(Marker::close(index))))
                .collect()
        };
        nodes.splice(cursor..=cursor, replacement);
    }
}
