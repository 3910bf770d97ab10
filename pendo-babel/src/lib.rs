//! Reversible placeholder escaping of Pendo markdown for localization
//!
//!     Pendo guide strings are written in a small markdown dialect. Translators must never see
//!     (and break) that syntax, so before translation every syntax-bearing element is replaced by
//!     a numbered placeholder span such as `<c0>bold</c0>`, and the data needed to recreate it is
//!     kept out of band. After translation the placeholders are turned back into markdown,
//!     wherever the translator moved them.
//!
//!     TLDR:
//!         - convert("text **bold**") gives ("text <c0>bold</c0>", [strong])
//!         - backconvert("<c0>fett</c0> Text", [strong]) gives "**fett** Text"
//!         - placeholders are matched by index, never by position
//!         - broken placeholder structure is left as literal text and reported, never fatal
//!
//!     This is a pure lib: it powers the pendo CLI but is shell agnostic, no code here should
//!     print, read env vars or touch files.
//!
//! Architecture
//!
//!     The file structure :
//!     .
//!     ├── error.rs
//!     ├── ast                     # Document tree and placeholder markers
//!     ├── component.rs            # Component records and component lists
//!     ├── registry.rs             # Node ⇄ component mapping
//!     ├── escape                  # The escaping core
//!     │   ├── to_components.rs    # Nodes → placeholders
//!     │   └── from_components.rs  # Placeholders → nodes
//!     ├── common                  # Tree reducers (color spans)
//!     ├── transforms.rs           # String-level color bracket rewriting
//!     ├── format.rs               # MarkdownEngine trait
//!     ├── formats
//!     │   └── markdown            # The Pendo dialect
//!     │       ├── parser.rs       # markdown crate mdast → Node
//!     │       ├── serializer.rs   # Node → mdast → markdown text
//!     │       ├── underline.rs    # ++underline++ tag pre-pass and folding
//!     │       └── mod.rs
//!     ├── convert.rs              # The conversion pipeline
//!     └── xliff.rs                # XLIFF 1.2 extraction and localization
//!
//! Core Algorithms
//!
//!     The escaping core only rewrites trees; it never reads or writes markdown. Escaping walks the
//!     tree in pre-order and splices every mapped node out of its parent, leaving its children
//!     between an opening and a closing marker. Backconversion walks the translated tree and, for
//!     every opening marker, looks for the balanced closing marker among its siblings. Markers in
//!     different parents never pair up, which is what keeps the result a valid tree.
//!     See ./escape/to_components.rs and ./escape/from_components.rs.
//!
//! Testing
//!     tests
//!     ├── escape       # Tree level round trips and recovery
//!     ├── markdown     # Dialect parse/serialize
//!     ├── convert      # Text level scenarios
//!     └── xliff
//!
//!     Note that rust does not by default discover tests in subdirectories, so we need to include these
//!     in the mod.
//!
pub mod ast;
pub mod common;
pub mod component;
pub mod convert;
pub mod error;
pub mod escape;
pub mod format;
pub mod formats;
pub mod registry;
pub mod transforms;
pub mod xliff;

pub use ast::{Marker, MarkerRole, Node};
pub use component::{Component, ComponentList};
pub use convert::{backconvert, convert, Converted, Converter, Localized};
pub use error::{BabelError, Result};
pub use escape::{from_components, to_components, Anomaly, Backconverted};
pub use format::MarkdownEngine;
pub use formats::{PendoMarkdown, SyntaxOptions};
