//! Component records: what an escaped node looked like
//!
//! A [`Component`] keeps the part of a node that must not reach translators
//! (its kind and attributes such as a link URL). A [`ComponentList`] is the
//! out-of-band side channel produced by one escape call and consumed by the
//! matching backconvert call; placeholder `<cN>` refers to entry `N`.

use crate::error::{BabelError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Deref;

/// Data needed to recreate one escaped node, minus its children.
///
/// The serialized `type` tags follow the node names of the original markdown
/// tooling so that lists stored by earlier pipelines stay readable.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Component {
    #[serde(rename = "strong")]
    Bold,
    #[serde(rename = "emphasis")]
    Italic,
    #[serde(rename = "underline")]
    Underline,
    #[serde(rename = "delete")]
    Strikethrough,
    #[serde(rename = "link")]
    Link { url: String },
    #[serde(rename = "list")]
    List { ordered: bool },
    #[serde(rename = "listItem")]
    ListItem,
    #[serde(rename = "color")]
    Color { value: String },
    #[serde(rename = "html")]
    RawHtml { value: String },
}

impl Component {
    /// Every `type` tag a serialized component may carry.
    pub const KINDS: &'static [&'static str] = &[
        "strong",
        "emphasis",
        "underline",
        "delete",
        "link",
        "list",
        "listItem",
        "color",
        "html",
    ];

    /// The serialized `type` tag of this component.
    pub fn describe(&self) -> &'static str {
        match self {
            Component::Bold => "strong",
            Component::Italic => "emphasis",
            Component::Underline => "underline",
            Component::Strikethrough => "delete",
            Component::Link { .. } => "link",
            Component::List { .. } => "list",
            Component::ListItem => "listItem",
            Component::Color { .. } => "color",
            Component::RawHtml { .. } => "html",
        }
    }

    /// Decode one component, telling an unknown kind apart from a malformed record.
    pub fn from_value(value: serde_json::Value) -> Result<Component> {
        if let Some(kind) = value.get("type").and_then(serde_json::Value::as_str) {
            if !Self::KINDS.contains(&kind) {
                return Err(BabelError::UnknownComponent(kind.to_string()));
            }
        }
        serde_json::from_value(value).map_err(BabelError::ComponentList)
    }
}

/// Components substituted in one escape call, in tree traversal order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ComponentList(Vec<Component>);

impl ComponentList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a component and return the placeholder index it was given.
    pub fn push(&mut self, component: Component) -> usize {
        self.0.push(component);
        self.0.len() - 1
    }

    pub fn into_inner(self) -> Vec<Component> {
        self.0
    }

    /// Translator-facing summary such as `c0: strong, c1: link`.
    pub fn describe(&self) -> String {
        self.0
            .iter()
            .enumerate()
            .map(|(index, component)| format!("c{index}: {}", component.describe()))
            .collect::<Vec<_>>()
            .join(", ")
    }

    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(BabelError::ComponentList)
    }

    pub fn from_json(json: &str) -> Result<Self> {
        let raw: Vec<serde_json::Value> =
            serde_json::from_str(json).map_err(BabelError::ComponentList)?;
        raw.into_iter()
            .map(Component::from_value)
            .collect::<Result<Vec<_>>>()
            .map(ComponentList)
    }
}

impl Deref for ComponentList {
    type Target = [Component];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl From<Vec<Component>> for ComponentList {
    fn from(components: Vec<Component>) -> Self {
        ComponentList(components)
    }
}

impl FromIterator<Component> for ComponentList {
    fn from_iter<I: IntoIterator<Item = Component>>(iter: I) -> Self {
        ComponentList(iter.into_iter().collect())
    }
}

impl fmt::Display for Component {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Component::Link { url } => write!(f, "link {url}"),
            Component::List { ordered: true } => write!(f, "ordered list"),
            Component::List { ordered: false } => write!(f, "list"),
            Component::Color { value } => write!(f, "color {value}"),
            Component::RawHtml { value } => write!(f, "html {value}"),
            other => f.write_str(other.describe()),
        }
    }
}
