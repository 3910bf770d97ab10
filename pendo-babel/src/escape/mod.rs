//! Placeholder escaping of document trees.
//!
//! [`to_components`] replaces every syntax-bearing node with numbered
//! placeholder markers and records the removed data in a
//! [`ComponentList`](crate::component::ComponentList). [`from_components`]
//! reverses this on a tree whose markers may have been moved around by a
//! translator.

pub mod from_components;
pub mod to_components;

pub use from_components::{from_components, Backconverted};
pub use to_components::to_components;

use crate::ast::Marker;
use serde::Serialize;
use thiserror::Error;

/// A structural problem in translated text that backconversion worked around.
///
/// The offending marker stays in the output as literal text.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
#[serde(tag = "anomaly", rename_all = "kebab-case")]
pub enum Anomaly {
    #[error("placeholder {marker} has no matching closing placeholder")]
    MissingClose { marker: String },

    #[error("placeholder {marker} refers to no recorded component")]
    UnknownComponent { marker: String },

    #[error("placeholder {marker} wraps content but component '{kind}' cannot hold any")]
    ChildlessComponent { marker: String, kind: &'static str },
}

impl Anomaly {
    pub(crate) fn missing_close(marker: Marker) -> Self {
        Anomaly::MissingClose {
            marker: marker.to_string(),
        }
    }

    pub(crate) fn unknown_component(marker: Marker) -> Self {
        Anomaly::UnknownComponent {
            marker: marker.to_string(),
        }
    }

    pub(crate) fn childless_component(marker: Marker, kind: &'static str) -> Self {
        Anomaly::ChildlessComponent {
            marker: marker.to_string(),
            kind,
        }
    }
}
