//! Pendo markdown serializer
//!
//! The tree is mapped onto mdast and written by `mdast_util_to_markdown`:
//! `**` for strong, `*` for emphasis, `- ` and `1. ` for list items, tight
//! lists, one blank line between blocks. Pieces the mdast model has no node
//! for (underline, color spans, placeholders) go out as raw HTML nodes, which
//! are written verbatim.
//!
//! Raw HTML and placeholder markers found directly at block level get a block
//! of their own, which is what keeps escaped lists parseable: the opening and
//! closing markers of a list end up as sibling blocks.
//!
//! Before mapping, the inline content of every paragraph is normalized so
//! that each delimiter run reads back as the node it was written for:
//!
//! - whitespace at the inner edges of strong, emphasis, underline and
//!   strikethrough moves outside the delimiters
//! - a word character glued to a delimiter run that could not open or close
//!   there is written as a character reference

use super::SyntaxOptions;
use crate::ast::{merge_adjacent_text, Node};
use crate::common::color;
use crate::error::{BabelError, Result};
use markdown::mdast;
use mdast_util_to_markdown::{to_markdown_with_options, Options};

pub(super) struct Serializer<'a> {
    options: &'a SyntaxOptions,
}

impl<'a> Serializer<'a> {
    pub(super) fn new(options: &'a SyntaxOptions) -> Self {
        Serializer { options }
    }

    pub(super) fn serialize(&self, tree: &Node) -> Result<String> {
        let nodes = match tree {
            Node::Root(children) => children.as_slice(),
            other => std::slice::from_ref(other),
        };
        let root = mdast::Node::Root(mdast::Root {
            children: self.blocks(nodes),
            position: None,
        });

        let options = Options {
            bullet: '-',
            bullet_other: '*',
            resource_link: true,
            ..Options::default()
        };
        let markdown = to_markdown_with_options(&root, &options)
            .map_err(|message| BabelError::Serialization(message.to_string()))?;
        Ok(markdown.trim_end_matches('\n').to_string())
    }

    fn blocks(&self, nodes: &[Node]) -> Vec<mdast::Node> {
        let mut blocks = Vec::new();
        let mut phrasing: Vec<Node> = Vec::new();

        for node in nodes {
            match node {
                Node::Root(children) => {
                    self.flush(&mut phrasing, &mut blocks);
                    blocks.extend(self.blocks(children));
                }
                Node::Paragraph(children) => {
                    self.flush(&mut phrasing, &mut blocks);
                    blocks.push(self.paragraph(children));
                }
                Node::List { ordered, children } => {
                    self.flush(&mut phrasing, &mut blocks);
                    blocks.push(self.list(*ordered, children));
                }
                Node::ListItem(_) => {
                    self.flush(&mut phrasing, &mut blocks);
                    blocks.push(self.list(false, std::slice::from_ref(node)));
                }
                Node::Html(raw) => {
                    self.flush(&mut phrasing, &mut blocks);
                    blocks.push(html(raw.clone()));
                }
                Node::Marker(marker) => {
                    self.flush(&mut phrasing, &mut blocks);
                    blocks.push(html(marker.to_string()));
                }
                Node::Color { value, children } if children.iter().any(|child| !child.is_inline()) => {
                    self.flush(&mut phrasing, &mut blocks);
                    blocks.push(html(color::open_tag(value)));
                    blocks.extend(self.blocks(children));
                    blocks.push(html(color::CLOSE_TAG.to_string()));
                }
                inline => phrasing.push(inline.clone()),
            }
        }
        self.flush(&mut phrasing, &mut blocks);
        blocks
    }

    fn flush(&self, phrasing: &mut Vec<Node>, blocks: &mut Vec<mdast::Node>) {
        if !phrasing.is_empty() {
            blocks.push(self.paragraph(phrasing));
            phrasing.clear();
        }
    }

    fn paragraph(&self, children: &[Node]) -> mdast::Node {
        mdast::Node::Paragraph(mdast::Paragraph {
            children: self.phrasing(&normalize(children)),
            position: None,
        })
    }

    fn list(&self, ordered: bool, items: &[Node]) -> mdast::Node {
        let children = items
            .iter()
            .map(|item| {
                let content = match item {
                    Node::ListItem(children) => children.as_slice(),
                    other => std::slice::from_ref(other),
                };
                mdast::Node::ListItem(mdast::ListItem {
                    children: self.blocks(content),
                    position: None,
                    spread: false,
                    checked: None,
                })
            })
            .collect();

        mdast::Node::List(mdast::List {
            children,
            position: None,
            ordered,
            start: ordered.then_some(1),
            spread: false,
        })
    }

    /// Map normalized inline content; block nodes contribute their inlines.
    fn phrasing(&self, nodes: &[Node]) -> Vec<mdast::Node> {
        let mut out = Vec::with_capacity(nodes.len());
        for node in nodes {
            match node {
                Node::Text(value) => out.extend(self.text(value)),
                Node::Break => out.push(mdast::Node::Break(mdast::Break { position: None })),
                Node::Strong(children) => out.push(mdast::Node::Strong(mdast::Strong {
                    children: self.phrasing(children),
                    position: None,
                })),
                Node::Emphasis(children) => out.push(mdast::Node::Emphasis(mdast::Emphasis {
                    children: self.phrasing(children),
                    position: None,
                })),
                Node::Delete(children) => out.push(mdast::Node::Delete(mdast::Delete {
                    children: self.phrasing(children),
                    position: None,
                })),
                Node::Underline(children) => {
                    out.push(html(UNDERLINE.to_string()));
                    out.extend(self.phrasing(children));
                    out.push(html(UNDERLINE.to_string()));
                }
                Node::Link { url, children } => out.push(mdast::Node::Link(mdast::Link {
                    children: self.phrasing(children),
                    position: None,
                    url: url.clone(),
                    title: None,
                })),
                Node::Color { value, children } => {
                    out.push(html(color::open_tag(value)));
                    out.extend(self.phrasing(children));
                    out.push(html(color::CLOSE_TAG.to_string()));
                }
                Node::Html(raw) => out.push(html(raw.clone())),
                Node::Marker(marker) => out.push(html(marker.to_string())),
                Node::Root(children)
                | Node::Paragraph(children)
                | Node::List { children, .. }
                | Node::ListItem(children) => out.extend(self.phrasing(children)),
            }
        }
        out
    }

    /// Text, with every `+` that could touch another one escaped.
    fn text(&self, value: &str) -> Vec<mdast::Node> {
        if !self.options.underline || !value.contains('+') {
            return vec![text(value.to_string())];
        }

        let chars: Vec<char> = value.chars().collect();
        let mut out = Vec::new();
        let mut buffer = String::new();
        for (index, &c) in chars.iter().enumerate() {
            let exposed = index == 0
                || index + 1 == chars.len()
                || chars[index - 1] == '+'
                || chars[index + 1] == '+';
            if c == '+' && exposed {
                if !buffer.is_empty() {
                    out.push(text(std::mem::take(&mut buffer)));
                }
                out.push(html("\\+".to_string()));
            } else {
                buffer.push(c);
            }
        }
        if !buffer.is_empty() {
            out.push(text(buffer));
        }
        out
    }
}

const UNDERLINE: &str = "++";

fn text(value: String) -> mdast::Node {
    mdast::Node::Text(mdast::Text {
        value,
        position: None,
    })
}

fn html(value: String) -> mdast::Node {
    mdast::Node::Html(mdast::Html {
        value,
        position: None,
    })
}

fn is_attention(node: &Node) -> bool {
    matches!(
        node,
        Node::Strong(_) | Node::Emphasis(_) | Node::Underline(_) | Node::Delete(_)
    )
}

/// Flatten block nodes, hoist edge whitespace and guard delimiter runs.
fn normalize(nodes: &[Node]) -> Vec<Node> {
    let mut out = Vec::with_capacity(nodes.len());
    for node in nodes {
        match node {
            Node::Root(children)
            | Node::Paragraph(children)
            | Node::List { children, .. }
            | Node::ListItem(children) => out.extend(normalize(children)),
            _ => {
                let mut node = node.clone();
                if let Some(children) = node.children_mut() {
                    *children = normalize(children);
                }
                if is_attention(&node) {
                    out.extend(hoist_whitespace(node));
                } else {
                    out.push(node);
                }
            }
        }
    }
    merge_adjacent_text(&mut out);
    guard_flanking(&mut out);
    out
}

fn is_blank(node: &Node) -> bool {
    match node {
        Node::Break => true,
        Node::Text(text) => text.trim().is_empty(),
        _ => false,
    }
}

/// `**␣bold␣**` cannot be read back as strong; `␣**bold**␣` can.
///
/// An attention node left with no content is dropped.
fn hoist_whitespace(mut node: Node) -> Vec<Node> {
    let mut leading = Vec::new();
    let mut trailing = Vec::new();
    let mut empty = false;

    if let Some(children) = node.children_mut() {
        while children.first().is_some_and(is_blank) {
            leading.push(children.remove(0));
        }
        if let Some(Node::Text(text)) = children.first_mut() {
            let split = text.len() - text.trim_start().len();
            if split > 0 {
                leading.push(Node::text(&text[..split]));
                text.replace_range(..split, "");
            }
        }

        while children.last().is_some_and(is_blank) {
            trailing.extend(children.pop());
        }
        trailing.reverse();
        if let Some(Node::Text(text)) = children.last_mut() {
            let trimmed = text.trim_end().len();
            if trimmed < text.len() {
                trailing.insert(0, Node::text(&text[trimmed..]));
                text.truncate(trimmed);
            }
        }
        empty = children.is_empty();
    }

    let mut out = leading;
    if !empty {
        out.push(node);
    }
    out.extend(trailing);
    out
}

fn first_char(node: &Node) -> Option<char> {
    match node {
        Node::Text(text) | Node::Html(text) => text.chars().next(),
        Node::Break => Some('\\'),
        Node::Strong(_) | Node::Emphasis(_) => Some('*'),
        Node::Delete(_) => Some('~'),
        Node::Underline(_) => Some('+'),
        Node::Link { .. } => Some('['),
        Node::Color { .. } | Node::Marker(_) => Some('<'),
        other => other.children()?.first().and_then(first_char),
    }
}

fn last_char(node: &Node) -> Option<char> {
    match node {
        Node::Text(text) | Node::Html(text) => text.chars().next_back(),
        Node::Break => Some('\n'),
        Node::Strong(_) | Node::Emphasis(_) => Some('*'),
        Node::Delete(_) => Some('~'),
        Node::Underline(_) => Some('+'),
        Node::Link { .. } => Some(')'),
        Node::Color { .. } | Node::Marker(_) => Some('>'),
        other => other.children()?.last().and_then(last_char),
    }
}

/// Anything that is neither whitespace nor a letter or digit.
fn is_punctuation(c: char) -> bool {
    !c.is_whitespace() && !c.is_alphanumeric()
}

/// Characters that keep a delimiter run from opening or closing when the
/// content on the other side starts with punctuation.
fn is_word(c: char) -> bool {
    !c.is_whitespace() && !c.is_ascii_punctuation()
}

fn reference(c: char) -> Node {
    Node::html(format!("&#x{:X};", u32::from(c)))
}

/// Make every attention node's delimiter runs able to open and close.
///
/// A run is stuck when the content inside starts (or ends) with punctuation
/// while a word character sits right outside it. The outside character is
/// then written as a character reference, which ends in `;`.
fn guard_flanking(nodes: &mut Vec<Node>) {
    let mut index = 0;
    while index < nodes.len() {
        if !is_attention(&nodes[index]) {
            index += 1;
            continue;
        }
        let inner = nodes[index].children().unwrap_or_default();
        let opens_with_punctuation = inner.first().and_then(first_char).is_some_and(is_punctuation);
        let closes_with_punctuation = inner.last().and_then(last_char).is_some_and(is_punctuation);

        if opens_with_punctuation && index > 0 {
            if let Node::Text(before) = &mut nodes[index - 1] {
                if let Some(c) = before.chars().next_back().filter(|&c| is_word(c)) {
                    before.pop();
                    let empty = before.is_empty();
                    if empty {
                        nodes[index - 1] = reference(c);
                    } else {
                        nodes.insert(index, reference(c));
                        index += 1;
                    }
                }
            }
        }

        if closes_with_punctuation && index + 1 < nodes.len() {
            if let Node::Text(after) = &mut nodes[index + 1] {
                if let Some(c) = after.chars().next().filter(|&c| is_word(c)) {
                    after.remove(0);
                    if after.is_empty() {
                        nodes[index + 1] = reference(c);
                    } else {
                        nodes.insert(index + 1, reference(c));
                    }
                }
            }
        }
        index += 1;
    }
}
