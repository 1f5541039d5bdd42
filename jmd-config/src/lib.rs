//! Shared configuration loader for the jmd toolchain.
//!
//! `defaults/jmd.default.toml` is embedded into every binary so that docs and
//! runtime behavior stay in sync. Applications layer user-specific files on top
//! of those defaults via [`Loader`] before deserializing into [`JmdConfig`].

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, File, FileFormat, ValueKind};
use jmd_babel::{FormatRegistry, PandocConverter};
use serde::Deserialize;
use std::path::Path;

const DEFAULT_TOML: &str = include_str!("../defaults/jmd.default.toml");

/// Top-level configuration consumed by jmd applications.
#[derive(Debug, Clone, Deserialize)]
pub struct JmdConfig {
    pub convert: ConvertConfig,
    pub output: OutputConfig,
}

/// Conversion knobs.
#[derive(Debug, Clone, Deserialize)]
pub struct ConvertConfig {
    pub pandoc: PandocConfig,
    pub jira: JiraConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PandocConfig {
    #[serde(default)]
    pub binary: Option<String>,
    pub extra_args: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct JiraConfig {
    pub mermaid: bool,
}

/// Placement of converted documents.
#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    pub file_stem: String,
}

impl ConvertConfig {
    /// Builds the pandoc converter described by this configuration.
    pub fn converter(&self) -> PandocConverter {
        let converter = PandocConverter::new().with_extra_args(self.pandoc.extra_args.clone());
        match &self.pandoc.binary {
            Some(binary) if !binary.is_empty() => converter.with_binary(binary),
            _ => converter,
        }
    }

    /// Builds the format registry described by this configuration.
    pub fn registry(&self) -> FormatRegistry {
        FormatRegistry::with_mermaid(self.jira.mermaid)
    }
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
    pub fn build(self) -> Result<JmdConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience helper for callers that only need the defaults.
pub fn load_defaults() -> Result<JmdConfig, ConfigError> {
    Loader::new().build()
}
