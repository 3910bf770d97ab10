//! Tree reducers shared by the conversion pipeline.

pub mod color;

pub use color::{from_color_nodes, to_color_nodes};
