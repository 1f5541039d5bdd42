//! Format registry for format discovery and selection
//!
//! This module provides a centralized registry for all available formats.
//! Formats can be registered and retrieved by name.

use crate::converter::MarkupConverter;
use crate::error::FormatError;
use crate::format::{Format, FormatInfo};
use std::collections::HashMap;

/// Registry of markup formats
///
/// # Examples
///
/// ```ignore
/// let registry = FormatRegistry::default();
/// let converter = PandocConverter::new();
///
/// let jira = registry.convert("# Title\n", "markdown", "jira", &converter)?;
/// ```
pub struct FormatRegistry {
    formats: HashMap<String, Box<dyn Format>>,
}

impl FormatRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        FormatRegistry {
            formats: HashMap::new(),
        }
    }

    /// Register a format
    ///
    /// If a format with the same name already exists, it will be replaced.
    pub fn register<F: Format + 'static>(&mut self, format: F) {
        self.formats
            .insert(format.name().to_string(), Box::new(format));
    }

    /// Get a format by name
    pub fn get(&self, name: &str) -> Result<&dyn Format, FormatError> {
        self.formats
            .get(name)
            .map(|f| f.as_ref())
            .ok_or_else(|| FormatError::FormatNotFound(name.to_string()))
    }

    /// Check if a format exists
    pub fn has(&self, name: &str) -> bool {
        self.formats.contains_key(name)
    }

    /// List all available format names (sorted)
    pub fn list_formats(&self) -> Vec<String> {
        let mut names: Vec<_> = self.formats.keys().cloned().collect();
        names.sort();
        names
    }

    /// Summaries of all registered formats, sorted by name
    pub fn formats(&self) -> Vec<FormatInfo> {
        let mut infos: Vec<_> = self
            .formats
            .values()
            .map(|f| FormatInfo::of(f.as_ref()))
            .collect();
        infos.sort_by(|a, b| a.name.cmp(&b.name));
        infos
    }

    /// Detect format from filename based on file extension
    ///
    /// Returns the format name if a matching extension is found, or None otherwise.
    pub fn detect_format_from_filename(&self, filename: &str) -> Option<String> {
        let extension = std::path::Path::new(filename)
            .extension()
            .and_then(|ext| ext.to_str())?;

        for format in self.formats.values() {
            if format.file_extensions().contains(&extension) {
                return Some(format.name().to_string());
            }
        }

        None
    }

    /// Convert source text between two registered formats.
    ///
    /// The converter does the grammar work; the target format's post-processing
    /// pass then runs once over the fresh output.
    pub fn convert(
        &self,
        source: &str,
        from: &str,
        to: &str,
        converter: &dyn MarkupConverter,
    ) -> Result<String, FormatError> {
        let source_format = self.get(from)?;
        let target_format = self.get(to)?;
        let converted = converter.convert(source, source_format, target_format)?;
        Ok(target_format.post_process(converted))
    }

    /// Create a registry with default formats
    pub fn with_defaults() -> Self {
        Self::with_mermaid(true)
    }

    /// Create a registry with default formats, choosing whether JIRA output
    /// gets Mermaid diagrams embedded.
    pub fn with_mermaid(enabled: bool) -> Self {
        let mut registry = Self::new();

        registry.register(crate::formats::jira::JiraFormat::new().with_mermaid(enabled));
        registry.register(crate::formats::markdown::MarkdownFormat);

        registry
    }
}

impl Default for FormatRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}
