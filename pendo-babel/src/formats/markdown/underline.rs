//! `++underline++`
//!
//! CommonMark has no underline. Before parsing, each `++x++` span of a line
//! is rewritten into a custom inline tag pair, which the parser reports as two
//! raw HTML nodes. [`fold`] then turns sibling tag pairs into `Underline`
//! nodes, the same way color spans are folded.
//!
//! A tag that found no partner among its siblings (a span crossing a strong
//! or link boundary) goes back to being the literal `++` it was written as.

use crate::ast::Node;
use once_cell::sync::Lazy;
use regex::Regex;
use std::borrow::Cow;

pub(super) const OPEN_TAG: &str = "<pendo-underline>";
pub(super) const CLOSE_TAG: &str = "</pendo-underline>";

const DELIMITER: &str = "++";

static SPAN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?m)(^|[^\\])\+\+([^\s+](?:[^\n]*?[^\s\\])?)\+\+").expect("valid underline regex")
});

/// Rewrite `++x++` spans into the tag form the parser understands.
pub(super) fn to_tag_form(source: &str) -> Cow<'_, str> {
    SPAN.replace_all(source, format!("${{1}}{OPEN_TAG}${{2}}{CLOSE_TAG}").as_str())
}

pub(super) fn is_tag(raw: &str) -> bool {
    raw == OPEN_TAG || raw == CLOSE_TAG
}

/// Fold sibling tag pairs into `Underline` nodes, recursively.
pub(super) fn fold(nodes: &mut Vec<Node>) {
    let mut cursor = 0;
    while cursor < nodes.len() {
        if !is_html(&nodes[cursor], OPEN_TAG) {
            if is_html(&nodes[cursor], CLOSE_TAG) {
                nodes[cursor] = Node::text(DELIMITER);
            } else if let Some(children) = nodes[cursor].children_mut() {
                fold(children);
            }
            cursor += 1;
            continue;
        }

        match find_close(nodes, cursor) {
            Some(close) => {
                let mut content: Vec<Node> = nodes.drain(cursor + 1..close).collect();
                fold(&mut content);
                nodes.splice(cursor..cursor + 2, std::iter::once(Node::Underline(content)));
            }
            None => nodes[cursor] = Node::text(DELIMITER),
        }
        cursor += 1;
    }
}

fn is_html(node: &Node, tag: &str) -> bool {
    matches!(node, Node::Html(raw) if raw == tag)
}

fn find_close(nodes: &[Node], open: usize) -> Option<usize> {
    let mut level = 0usize;
    for (position, node) in nodes.iter().enumerate().skip(open + 1) {
        if is_html(node, OPEN_TAG) {
            level += 1;
        } else if is_html(node, CLOSE_TAG) {
            if level == 0 {
                return Some(position);
            }
            level -= 1;
        }
    }
    None
}
