//! Markdown engine implementations

pub mod markdown;

pub use markdown::{PendoMarkdown, SyntaxOptions};
