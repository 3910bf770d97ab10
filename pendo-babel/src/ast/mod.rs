//! Document tree shared by the markdown engine and the escaping core.
//!
//! The markdown engine produces and consumes these trees; the escaping core
//! only rewrites them. Placeholder markers are a node variant of their own so
//! that a marker can never be confused with raw HTML that merely looks like
//! one.

pub mod marker;
pub mod nodes;

pub use marker::{Marker, MarkerRole};
pub use nodes::{merge_adjacent_text, Node};
