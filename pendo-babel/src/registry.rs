//! Component registry: node shapes ⇄ component records
//!
//! Both directions are exhaustive matches over closed enums, so a syntax
//! extension added to [`Node`] or [`Component`] does not compile until both
//! sides agree on it.
//!
//! | Node                   | Component              | Escaped as      |
//! |------------------------|------------------------|-----------------|
//! | `Strong`               | `Bold`                 | `<cN>..</cN>`   |
//! | `Emphasis`             | `Italic`               | `<cN>..</cN>`   |
//! | `Underline`            | `Underline`            | `<cN>..</cN>`   |
//! | `Delete`               | `Strikethrough`        | `<cN>..</cN>`   |
//! | `Link { url }`         | `Link { url }`         | `<cN>..</cN>`   |
//! | `List { ordered }`     | `List { ordered }`     | `<cN>..</cN>`   |
//! | `ListItem`             | `ListItem`             | `<cN>..</cN>`   |
//! | `Color { value }`      | `Color { value }`      | `<cN>..</cN>`   |
//! | `Html(value)`          | `RawHtml { value }`    | `<cN/>`         |
//! | `Root`, `Paragraph`, `Text`, `Break`, `Marker` | (none) | left as is |
//!
//! Any container escapes as `<cN/>` when it has no children.

use crate::ast::Node;
use crate::component::Component;

/// Record what must be kept from `node` to recreate it later.
///
/// Returns `None` for nodes that are not escaped; they are left in the tree
/// untouched.
pub fn map_node_to_component(node: &Node) -> Option<Component> {
    match node {
        Node::Strong(_) => Some(Component::Bold),
        Node::Emphasis(_) => Some(Component::Italic),
        Node::Underline(_) => Some(Component::Underline),
        Node::Delete(_) => Some(Component::Strikethrough),
        Node::Link { url, .. } => Some(Component::Link { url: url.clone() }),
        Node::List { ordered, .. } => Some(Component::List { ordered: *ordered }),
        Node::ListItem(_) => Some(Component::ListItem),
        Node::Color { value, .. } => Some(Component::Color {
            value: value.clone(),
        }),
        Node::Html(value) => Some(Component::RawHtml {
            value: value.clone(),
        }),
        Node::Root(_)
        | Node::Paragraph(_)
        | Node::Text(_)
        | Node::Break
        | Node::Marker(_) => None,
    }
}

/// Recreate an empty node from its component; the caller splices children in.
pub fn map_component_to_node(component: &Component) -> Node {
    match component {
        Component::Bold => Node::Strong(Vec::new()),
        Component::Italic => Node::Emphasis(Vec::new()),
        Component::Underline => Node::Underline(Vec::new()),
        Component::Strikethrough => Node::Delete(Vec::new()),
        Component::Link { url } => Node::link(url.clone(), Vec::new()),
        Component::List { ordered } => Node::list(*ordered, Vec::new()),
        Component::ListItem => Node::ListItem(Vec::new()),
        Component::Color { value } => Node::color(value.clone(), Vec::new()),
        Component::RawHtml { value } => Node::html(value.clone()),
    }
}
