//! Conversion pipeline: source text ⇄ placeholder text
//!
//!     convert:      text → to_tag_form → parse → to_color_nodes → to_components → serialize
//!     backconvert:  text → parse → from_components → from_color_nodes → serialize → from_tag_form
//!
//! Both directions right-trim their output.

use crate::common::{from_color_nodes, to_color_nodes};
use crate::component::{Component, ComponentList};
use crate::error::Result;
use crate::escape::{from_components, to_components, Anomaly, Backconverted};
use crate::format::MarkdownEngine;
use crate::formats::PendoMarkdown;
use crate::transforms::{from_tag_form, to_tag_form};

/// Placeholder text ready for translation, and what it stands for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Converted {
    pub escaped: String,
    pub components: ComponentList,
}

/// Source text rebuilt from a translation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Localized {
    pub text: String,
    pub anomalies: Vec<Anomaly>,
}

/// Runs the conversion pipeline over a markdown engine.
pub struct Converter {
    engine: Box<dyn MarkdownEngine>,
}

impl Converter {
    pub fn new(engine: impl MarkdownEngine + 'static) -> Self {
        Converter {
            engine: Box::new(engine),
        }
    }

    pub fn engine(&self) -> &dyn MarkdownEngine {
        self.engine.as_ref()
    }

    /// Escape `text` into placeholder form.
    pub fn convert(&self, text: &str) -> Result<Converted> {
        let tree = self.engine.parse(&to_tag_form(text))?;
        let (escaped, components) = to_components(to_color_nodes(tree));
        let escaped = self.engine.serialize(&escaped)?;
        tracing::debug!(
            engine = self.engine.name(),
            components = components.len(),
            "converted text"
        );

        Ok(Converted {
            escaped: escaped.trim_end().to_string(),
            components,
        })
    }

    /// Restore markdown syntax around translated placeholder text.
    pub fn backconvert(&self, text: &str, components: &[Component]) -> Result<Localized> {
        let tree = self.engine.parse(text)?;
        let Backconverted { tree, anomalies } = from_components(tree, components);
        let restored = self.engine.serialize(&from_color_nodes(tree))?;

        Ok(Localized {
            text: from_tag_form(&restored).trim_end().to_string(),
            anomalies,
        })
    }
}

impl Default for Converter {
    fn default() -> Self {
        Converter::new(PendoMarkdown::default())
    }
}

/// [`Converter::convert`] with the default dialect.
pub fn convert(text: &str) -> Result<(String, ComponentList)> {
    let converted = Converter::default().convert(text)?;
    Ok((converted.escaped, converted.components))
}

/// [`Converter::backconvert`] with the default dialect, dropping anomalies.
pub fn backconvert(text: &str, components: &ComponentList) -> Result<String> {
    Converter::default()
        .backconvert(text, components)
        .map(|localized| localized.text)
}
