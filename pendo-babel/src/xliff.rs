//! XLIFF 1.2 adapter
//!
//! Pendo exports guide strings as XLIFF files whose `<source>` elements hold
//! markdown. [`extract`] turns each translation unit into placeholder text
//! plus a translator note listing the placeholders; [`localize`] writes
//! backconverted translations into `<target>` elements of a copy of the file.
//!
//! Localization edits the source document textually: only the `<target>`
//! elements change, everything else (declaration, comments, whitespace,
//! attribute order) stays byte for byte as it was.

use crate::component::ComponentList;
use crate::convert::Converter;
use crate::error::{BabelError, Result};
use serde::Serialize;
use std::collections::HashMap;
use std::ops::Range;
use std::path::{Path, PathBuf};

/// One `<trans-unit>` as read from the file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TransUnit {
    pub id: String,
    pub source: String,
    pub target: Option<String>,
    pub note: Option<String>,
}

/// A unit prepared for translation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExtractedUnit {
    pub key: String,
    /// Source text in placeholder form
    pub source: String,
    /// The unit note followed by the placeholder legend
    pub comment: String,
    pub components: ComponentList,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UnitFailure {
    pub key: String,
    pub error: String,
}

/// A localized copy of an XLIFF document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LocalizedXliff {
    pub content: String,
    /// Keys whose target was written
    pub localized: Vec<String>,
    /// Keys without a translation
    pub missing: Vec<String>,
    pub failures: Vec<UnitFailure>,
}

/// Read every translation unit of an XLIFF document.
pub fn read_units(xml: &str) -> Result<Vec<TransUnit>> {
    let document = roxmltree::Document::parse(xml)?;
    document
        .descendants()
        .filter(|node| is_element(node, "trans-unit"))
        .map(|unit| {
            let id = unit
                .attribute("id")
                .ok_or_else(|| BabelError::Xliff("trans-unit without an id".to_string()))?;
            let source = child(&unit, "source").map(text_of).ok_or_else(|| {
                BabelError::Xliff(format!("trans-unit '{id}' has no source"))
            })?;
            Ok(TransUnit {
                id: id.to_string(),
                source,
                target: child(&unit, "target").map(text_of),
                note: child(&unit, "note").map(text_of),
            })
        })
        .collect()
}

/// Escape the source of every unit for translation.
pub fn extract(xml: &str, converter: &Converter) -> Result<Vec<ExtractedUnit>> {
    read_units(xml)?
        .into_iter()
        .map(|unit| {
            let converted = converter.convert(&unit.source)?;
            let legend = format!("[{}]", converted.components.describe());
            let comment = match unit.note.as_deref().map(str::trim) {
                Some(note) if !note.is_empty() => format!("{note} {legend}"),
                _ => legend,
            };
            Ok(ExtractedUnit {
                key: unit.id,
                source: converted.escaped,
                comment,
                components: converted.components,
            })
        })
        .collect()
}

/// Write translations into a copy of `xml`.
///
/// `translations` maps unit ids to translated placeholder text. Components
/// are recomputed from each unit's source, so nothing but the translation
/// needs to travel. A unit whose translation cannot be backconverted is
/// reported in [`LocalizedXliff::failures`] and left untouched.
pub fn localize(
    xml: &str,
    translations: &HashMap<String, String>,
    converter: &Converter,
    target_state: Option<&str>,
) -> Result<LocalizedXliff> {
    let document = roxmltree::Document::parse(xml)?;
    let mut edits: Vec<(Range<usize>, String)> = Vec::new();
    let mut localized = Vec::new();
    let mut missing = Vec::new();
    let mut failures = Vec::new();

    for unit in document
        .descendants()
        .filter(|node| is_element(node, "trans-unit"))
    {
        let Some(id) = unit.attribute("id") else {
            continue;
        };
        let Some(source) = child(&unit, "source") else {
            continue;
        };
        let Some(translation) = translations.get(id) else {
            tracing::warn!(unit = id, "no translation");
            missing.push(id.to_string());
            continue;
        };

        let text = match backconvert_unit(converter, &text_of(source), translation) {
            Ok(text) => text,
            Err(err) => {
                tracing::warn!(unit = id, error = %err, "could not backconvert translation");
                failures.push(UnitFailure {
                    key: id.to_string(),
                    error: err.to_string(),
                });
                continue;
            }
        };

        let element = target_element(&text, target_state);
        match child(&unit, "target") {
            Some(target) => edits.push((target.range(), element)),
            None => {
                let end = source.range().end;
                let indent = line_indent(xml, source.range().start);
                edits.push((end..end, format!("\n{indent}{element}")));
            }
        }
        localized.push(id.to_string());
    }

    let mut content = xml.to_string();
    edits.sort_by_key(|(range, _)| std::cmp::Reverse(range.start));
    for (range, replacement) in edits {
        content.replace_range(range, &replacement);
    }

    tracing::debug!(
        localized = localized.len(),
        missing = missing.len(),
        failed = failures.len(),
        "localized xliff"
    );

    Ok(LocalizedXliff {
        content,
        localized,
        missing,
        failures,
    })
}

/// Output path for a locale: `strings_en-US.xliff` → `strings_de-DE.xliff`.
///
/// A trailing `_<source_locale>` is dropped from the file stem before the
/// target locale is appended; the file stays in the same directory.
pub fn localized_path(path: &Path, source_locale: &str, locale: &str) -> PathBuf {
    let stem = path
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_default();
    let base = stem
        .strip_suffix(&format!("_{source_locale}"))
        .unwrap_or(&stem);
    let name = if base.is_empty() {
        locale.to_string()
    } else {
        format!("{base}_{locale}")
    };
    let file_name = match path.extension() {
        Some(extension) => format!("{name}.{}", extension.to_string_lossy()),
        None => name,
    };
    path.with_file_name(file_name)
}

fn backconvert_unit(converter: &Converter, source: &str, translation: &str) -> Result<String> {
    let reference = converter.convert(source)?;
    let localized = converter.backconvert(translation, &reference.components)?;
    Ok(localized.text)
}

fn target_element(text: &str, state: Option<&str>) -> String {
    match state.filter(|state| !state.is_empty()) {
        Some(state) => format!(
            "<target state=\"{}\">{}</target>",
            escape_xml(state),
            escape_xml(text)
        ),
        None => format!("<target>{}</target>", escape_xml(text)),
    }
}

fn is_element(node: &roxmltree::Node, name: &str) -> bool {
    node.is_element() && node.tag_name().name() == name
}

fn child<'a, 'input>(
    node: &roxmltree::Node<'a, 'input>,
    name: &str,
) -> Option<roxmltree::Node<'a, 'input>> {
    node.children().find(|child| is_element(child, name))
}

fn text_of(node: roxmltree::Node) -> String {
    node.descendants()
        .filter(|node| node.is_text())
        .filter_map(|node| node.text())
        .collect()
}

/// Whitespace between the start of the line and `position`, if that is all
/// the line holds before it.
fn line_indent(xml: &str, position: usize) -> &str {
    let line_start = xml[..position].rfind('\n').map_or(0, |index| index + 1);
    let prefix = &xml[line_start..position];
    if prefix.chars().all(char::is_whitespace) {
        prefix
    } else {
        ""
    }
}

/// Escape text for an element body or a double-quoted attribute.
///
/// roxmltree only reads, so the few elements written back are formatted by hand.
fn escape_xml(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}
