//! Rebuilds escaped nodes from placeholder markers.
//!
//! # The High-Level Concept
//!
//! A translated tree contains the same kind of `<cN>` markers that
//! [`to_components`](super::to_components) emitted, but in any order, any
//! number of times, or not at all. Each marker is resolved on its own by its
//! index into the component list, so reordering is harmless. Malformed
//! placeholder structure never aborts: the marker is left in place as literal
//! text and an [`Anomaly`] is reported.
//!
//! # The Algorithm
//!
//! 1. **Promotion:**
//!    - Raw HTML whose whole value is `<cN>`, `</cN>` or `<cN/>` becomes a
//!      `Marker` (the markdown parser knows nothing about placeholders)
//!
//! 2. **Walking a child list** (explicit cursor, pre-order):
//!    - `SelfClosing(i)` is replaced by the decoded node for component `i`
//!    - `Open(i)` looks for its closing marker among the *following siblings
//!      only*, counting nested same-index pairs. The siblings strictly between
//!      become the children of the decoded node, which replaces the whole run
//!    - The cursor does not advance after a replacement, so the new node is
//!      descended into and markers inside it are resolved
//!    - Stray `Close` markers and anything unresolvable are skipped over
//!
//! Components that no marker refers to produce nothing.

use super::to_components::into_single;
use super::Anomaly;
use crate::ast::{Marker, MarkerRole, Node};
use crate::component::Component;
use crate::registry::map_component_to_node;
use std::iter;

/// Result of backconversion: the rebuilt tree and what had to be worked around.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Backconverted {
    pub tree: Node,
    pub anomalies: Vec<Anomaly>,
}

/// Restore the nodes behind the placeholders of `tree`.
pub fn from_components(tree: Node, components: &[Component]) -> Backconverted {
    let mut nodes = vec![tree];
    promote_markers(&mut nodes);

    let mut anomalies = Vec::new();
    rebuild_children(&mut nodes, components, &mut anomalies);

    for anomaly in &anomalies {
        tracing::warn!(%anomaly, "placeholder left as text");
    }

    Backconverted {
        tree: into_single(nodes),
        anomalies,
    }
}

fn promote_markers(nodes: &mut [Node]) {
    for node in nodes.iter_mut() {
        if let Node::Html(value) = node {
            if let Some(marker) = Marker::parse(value) {
                *node = Node::Marker(marker);
            }
        } else if let Some(children) = node.children_mut() {
            promote_markers(children);
        }
    }
}

fn rebuild_children(nodes: &mut Vec<Node>, components: &[Component], anomalies: &mut Vec<Anomaly>) {
    let mut cursor = 0;
    while cursor < nodes.len() {
        let marker = match nodes[cursor] {
            Node::Marker(marker) if marker.role != MarkerRole::Close => marker,
            _ => {
                if let Some(children) = nodes[cursor].children_mut() {
                    rebuild_children(children, components, anomalies);
                }
                cursor += 1;
                continue;
            }
        };

        let Some(component) = components.get(marker.index) else {
            anomalies.push(Anomaly::unknown_component(marker));
            cursor += 1;
            continue;
        };
        let mut node = map_component_to_node(component);

        if marker.role == MarkerRole::SelfClosing {
            nodes[cursor] = node;
            continue;
        }

        let Some(close) = find_close(nodes, cursor, marker.index) else {
            anomalies.push(Anomaly::missing_close(marker));
            cursor += 1;
            continue;
        };
        let Some(slot) = node.children_mut() else {
            anomalies.push(Anomaly::childless_component(marker, component.describe()));
            cursor += 1;
            continue;
        };

        *slot = nodes.drain(cursor + 1..close).collect();
        nodes.splice(cursor..cursor + 2, iter::once(node));
    }
}

/// Position of the `Close` marker balancing the `Open` marker at `open`.
fn find_close(nodes: &[Node], open: usize, index: usize) -> Option<usize> {
    let mut level = 0usize;
    for (position, node) in nodes.iter().enumerate().skip(open + 1) {
        let Node::Marker(marker) = node else {
            continue;
        };
        if marker.index != index {
            continue;
        }
        match marker.role {
            MarkerRole::Open => level += 1,
            MarkerRole::Close if level == 0 => return Some(position),
            MarkerRole::Close => level -= 1,
            MarkerRole::SelfClosing => {}
        }
    }
    None
}
