//! Pendo markdown parser
//!
//! Tokenizing is done by the `markdown` crate with every construct outside
//! the dialect switched off, so headings, quotes, code and the like stay in
//! their paragraph as plain text. This module maps the resulting mdast onto
//! [`Node`] and layers the dialect's own pieces on top: underline spans and
//! the raw HTML switch.

use super::{underline, SyntaxOptions};
use crate::ast::{merge_adjacent_text, Marker, Node};
use crate::common::color;
use crate::error::{BabelError, Result};
use markdown::mdast;
use markdown::{Constructs, ParseOptions};

pub(super) struct Parser<'a> {
    options: &'a SyntaxOptions,
}

impl<'a> Parser<'a> {
    pub(super) fn new(options: &'a SyntaxOptions) -> Self {
        Parser { options }
    }

    pub(super) fn parse_document(&self, source: &str) -> Result<Node> {
        let source = source.replace("\r\n", "\n").replace('\r', "\n");
        let source = if self.options.underline {
            underline::to_tag_form(&source).into_owned()
        } else {
            source
        };

        let tree = markdown::to_mdast(&source, &self.parse_options())
            .map_err(|message| BabelError::Parse(message.to_string()))?;

        let mut blocks = match tree {
            mdast::Node::Root(root) => self.convert_blocks(root.children),
            other => self.convert_blocks(vec![other]),
        };
        if self.options.underline {
            underline::fold(&mut blocks);
        }
        merge_adjacent_text(&mut blocks);
        Ok(Node::Root(blocks))
    }

    fn parse_options(&self) -> ParseOptions {
        ParseOptions {
            constructs: Constructs {
                autolink: false,
                block_quote: false,
                code_fenced: false,
                code_indented: false,
                code_text: false,
                definition: false,
                heading_atx: false,
                heading_setext: false,
                label_start_image: false,
                thematic_break: false,
                gfm_strikethrough: self.options.strikethrough,
                label_start_link: self.options.links,
                list_item: self.options.lists,
                ..Constructs::default()
            },
            gfm_strikethrough_single_tilde: false,
            ..ParseOptions::default()
        }
    }

    /// Flow content: raw HTML that is switched off becomes its own paragraph.
    fn convert_blocks(&self, nodes: Vec<mdast::Node>) -> Vec<Node> {
        nodes
            .into_iter()
            .map(|node| match node {
                mdast::Node::Html(html) if !self.accepts_html(&html.value) => {
                    Node::Paragraph(vec![Node::Text(html.value)])
                }
                other => self.convert(other),
            })
            .collect()
    }

    fn convert_inlines(&self, nodes: Vec<mdast::Node>) -> Vec<Node> {
        nodes.into_iter().map(|node| self.convert(node)).collect()
    }

    fn convert(&self, node: mdast::Node) -> Node {
        match node {
            mdast::Node::Root(root) => Node::Root(self.convert_blocks(root.children)),
            mdast::Node::Paragraph(paragraph) => {
                Node::Paragraph(self.convert_inlines(paragraph.children))
            }
            mdast::Node::Text(text) => Node::Text(text.value),
            mdast::Node::Break(_) => Node::Break,
            mdast::Node::Strong(strong) => Node::Strong(self.convert_inlines(strong.children)),
            mdast::Node::Emphasis(emphasis) => {
                Node::Emphasis(self.convert_inlines(emphasis.children))
            }
            mdast::Node::Delete(delete) => Node::Delete(self.convert_inlines(delete.children)),
            mdast::Node::Link(link) => Node::link(link.url, self.convert_inlines(link.children)),
            mdast::Node::List(list) => Node::list(list.ordered, self.convert_blocks(list.children)),
            mdast::Node::ListItem(item) => Node::ListItem(self.convert_blocks(item.children)),
            mdast::Node::Html(html) if self.accepts_html(&html.value) => Node::Html(html.value),
            mdast::Node::Html(html) => Node::Text(html.value),
            other => {
                tracing::debug!(node = ?other, "construct outside the dialect kept as text");
                Node::Text(other.to_string())
            }
        }
    }

    /// Placeholders and the dialect's own tags are HTML even with raw HTML off.
    fn accepts_html(&self, raw: &str) -> bool {
        self.options.html
            || Marker::parse(raw).is_some()
            || color::is_color_tag(raw)
            || underline::is_tag(raw)
    }
}
