//! Pendo markdown dialect
//!
//! Pendo guides are written in a deliberately small markdown subset. Parsing
//! runs on the `markdown` crate (micromark's Rust port) with the constructs
//! outside the subset switched off; serialization goes through
//! `mdast_util_to_markdown`. Everything else the dialect needs sits on top.
//!
//! # Element Mapping Table
//!
//! | Node          | Markdown                 | Export Notes               | Import Notes                       |
//! |---------------|--------------------------|----------------------------|------------------------------------|
//! | Paragraph     | lines between blanks     | One blank line between     | Lines joined with `\n`             |
//! | List          | `- a` / `1. a`           | Tight, renumbered from 1   | `-` `*` `+`, `1.` `1)`             |
//! | ListItem      | item content             | Indented by marker width   | Lazy continuation lines accepted   |
//! | Strong        | `**x**` or `__x__`       | Use `**`                   | Parse both                         |
//! | Emphasis      | `*x*` or `_x_`           | Use `*`                    | Parse both                         |
//! | Underline     | `++x++`                  | Raw `++` around content    | Spans within one line              |
//! | Delete        | `~~x~~`                  | Direct                     | Runs of exactly two                |
//! | Link          | `[label](url)`           | Always the resource form   | Titles dropped, no references      |
//! | Break         | `\` at line end          | Direct                     | Trailing spaces too                |
//! | Html          | `<tag>`, `</tag>`, `<!-- -->` | Verbatim              | Inline, or a block of HTML         |
//! | Color         | `<color value="#RRGGBB">` | Tag pair                  | Folded later by the color reducer  |
//!
//! Character references and backslash escapes are decoded on import; the
//! serializer escapes what would otherwise read back as syntax.
//!
//! # Not Supported
//!
//! Headings, code spans and blocks, block quotes, images, autolinks,
//! definitions and thematic breaks are not recognized. Their source text
//! stays in the paragraph as written.
//!
//! # Syntax Options
//!
//! [`SyntaxOptions`] switches off parts of the dialect for content that must
//! not use them. Placeholder markers and color tags are recognized even with
//! raw HTML disabled, since the conversion pipeline depends on them.

mod parser;
mod serializer;
mod underline;

use crate::ast::Node;
use crate::error::Result;
use crate::format::MarkdownEngine;
use parser::Parser;
use serde::{Deserialize, Serialize};
use serializer::Serializer;

/// Which optional constructs the dialect recognizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SyntaxOptions {
    /// `++underline++`
    pub underline: bool,
    /// `~~strikethrough~~`
    pub strikethrough: bool,
    /// `[label](url)`
    pub links: bool,
    /// Ordered and unordered lists
    pub lists: bool,
    /// Raw HTML other than placeholders and color tags
    pub html: bool,
}

impl Default for SyntaxOptions {
    fn default() -> Self {
        SyntaxOptions {
            underline: true,
            strikethrough: true,
            links: true,
            lists: true,
            html: true,
        }
    }
}

/// Markdown engine for the Pendo dialect
#[derive(Debug, Clone, Default)]
pub struct PendoMarkdown {
    options: SyntaxOptions,
}

impl PendoMarkdown {
    pub fn new(options: SyntaxOptions) -> Self {
        PendoMarkdown { options }
    }

    pub fn options(&self) -> &SyntaxOptions {
        &self.options
    }
}

impl MarkdownEngine for PendoMarkdown {
    fn name(&self) -> &str {
        "pendo"
    }

    fn description(&self) -> &str {
        "Pendo guide markdown (emphasis, underline, strikethrough, links, lists, raw HTML)"
    }

    fn parse(&self, source: &str) -> Result<Node> {
        Parser::new(&self.options).parse_document(source)
    }

    fn serialize(&self, tree: &Node) -> Result<String> {
        Serializer::new(&self.options).serialize(tree)
    }
}
