//! Markdown engine trait definition
//!
//! The escaping core never reads or writes markdown itself. It relies on an
//! engine that turns source text into a [`Node`] tree and back. The pipeline
//! in [`crate::convert`] is generic over this trait, so a host can plug in a
//! different dialect without touching the core.
//!
//! An engine must parse a placeholder it serialized (`<c0>`, `</c0>`,
//! `<c0/>`) back into an [`Node::Html`] node with the same text, otherwise
//! backconversion cannot find the markers.
//!
//! # Examples
//!
//! ```ignore
//! struct PlainText;
//!
//! impl MarkdownEngine for PlainText {
//!     fn name(&self) -> &str {
//!         "plain"
//!     }
//!
//!     fn parse(&self, source: &str) -> Result<Node> {
//!         Ok(Node::Root(vec![Node::Paragraph(vec![Node::text(source)])]))
//!     }
//!
//!     fn serialize(&self, tree: &Node) -> Result<String> {
//!         Ok(tree.plain_text())
//!     }
//! }
//! ```

use crate::ast::Node;
use crate::error::Result;

/// Bidirectional conversion between markdown text and a document tree.
pub trait MarkdownEngine: Send + Sync {
    /// The name of this dialect (e.g., "pendo")
    fn name(&self) -> &str;

    /// Optional description of this dialect
    fn description(&self) -> &str {
        ""
    }

    /// Parse source text into a tree rooted at [`Node::Root`]
    fn parse(&self, source: &str) -> Result<Node>;

    /// Serialize a tree into source text
    fn serialize(&self, tree: &Node) -> Result<String>;
}
