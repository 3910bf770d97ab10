//! Error types for conversion operations

use thiserror::Error;

/// Errors that abort a conversion.
///
/// Structural problems in translated text (dropped or garbled placeholders)
/// are not errors; they are reported as [`crate::escape::Anomaly`] values
/// alongside a best-effort result.
#[derive(Debug, Error)]
pub enum BabelError {
    /// A component list refers to a component kind this crate does not know.
    ///
    /// This means the producer and the consumer of the list disagree on the
    /// supported kind set, which is a defect rather than a translation issue.
    #[error("Unknown component kind '{0}'")]
    UnknownComponent(String),

    /// A component list could not be decoded
    #[error("Invalid component list: {0}")]
    ComponentList(#[source] serde_json::Error),

    /// Error while parsing markdown source
    #[error("Parse error: {0}")]
    Parse(String),

    /// Error while serializing a tree back to markdown
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// The XLIFF document could not be read
    #[error("XLIFF error: {0}")]
    Xliff(String),
}

pub type Result<T> = std::result::Result<T, BabelError>;

impl From<roxmltree::Error> for BabelError {
    fn from(err: roxmltree::Error) -> Self {
        BabelError::Xliff(err.to_string())
    }
}
