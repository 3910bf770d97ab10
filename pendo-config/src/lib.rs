//! Shared configuration loader for the pendo localization tools.
//!
//! `defaults/pendo.default.toml` is embedded into every binary so that docs and
//! runtime behavior stay in sync. Applications layer user-specific files on top
//! of those defaults via [`Loader`] before deserializing into [`PendoConfig`].

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, File, FileFormat, ValueKind};
use pendo_babel::formats::SyntaxOptions;
use serde::Deserialize;
use std::path::Path;

const DEFAULT_TOML: &str = include_str!("../defaults/pendo.default.toml");

/// Top-level configuration consumed by pendo applications.
#[derive(Debug, Clone, Deserialize)]
pub struct PendoConfig {
    pub markdown: MarkdownConfig,
    pub xliff: XliffConfig,
    pub logging: LoggingConfig,
}

/// Mirrors the syntax switches of the pendo markdown engine.
#[derive(Debug, Clone, Deserialize)]
pub struct MarkdownConfig {
    pub underline: bool,
    pub strikethrough: bool,
    pub links: bool,
    pub lists: bool,
    pub html: bool,
}

impl From<MarkdownConfig> for SyntaxOptions {
    fn from(config: MarkdownConfig) -> Self {
        SyntaxOptions::from(&config)
    }
}

impl From<&MarkdownConfig> for SyntaxOptions {
    fn from(config: &MarkdownConfig) -> Self {
        SyntaxOptions {
            underline: config.underline,
            strikethrough: config.strikethrough,
            links: config.links,
            lists: config.lists,
            html: config.html,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct XliffConfig {
    pub source_locale: String,
    pub target_state: String,
}

impl XliffConfig {
    /// The `state` attribute for written targets, if any.
    pub fn target_state(&self) -> Option<&str> {
        Some(self.target_state.as_str()).filter(|state| !state.is_empty())
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
}

/// Helper for layering user overrides over the built-in defaults.
#[derive(Debug, Clone)]
pub struct Loader {
    builder: ConfigBuilder<DefaultState>,
}

impl Loader {
    /// Start a loader seeded with the embedded defaults.
    pub fn new() -> Self {
        let builder = Config::builder().add_source(File::from_str(DEFAULT_TOML, FileFormat::Toml));
        Self { builder }
    }

    /// Layer a configuration file. Missing files trigger an error.
    pub fn with_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(true);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Layer an optional configuration file (ignored if the file is absent).
    pub fn with_optional_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(false);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Apply a single key/value override (useful for CLI settings).
    pub fn set_override<I>(mut self, key: &str, value: I) -> Result<Self, ConfigError>
    where
        I: Into<ValueKind>,
    {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    /// Finalize the builder and deserialize the resulting configuration.
    pub fn build(self) -> Result<PendoConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience helper for callers that only need the defaults.
pub fn load_defaults() -> Result<PendoConfig, ConfigError> {
    Loader::new().build()
}
