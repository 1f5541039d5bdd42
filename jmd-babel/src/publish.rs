//! Document publishing pipeline.
//!
//! Provides a high-level API for converting a source document into another
//! markup dialect. This module bridges the gap between the format registry,
//! the external converter, and file I/O.
//!
//! Use this for commands like "Convert to JIRA" where a single call should
//! check the source, convert it, run the target's post-processing pass and
//! place the result.
//!
//! For more control over the conversion process, use [`FormatRegistry`] directly.

use crate::converter::MarkupConverter;
use crate::document::{ConvertedDocument, SourceDocument, DEFAULT_FILE_STEM};
use crate::error::FormatError;
use crate::format::Format;
use crate::registry::FormatRegistry;
use std::fs;
use std::path::{Path, PathBuf};

/// Where the converted document goes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Placement {
    /// Keep the text in memory and hand it back.
    InMemory,
    /// Write the text to this path.
    Path(PathBuf),
    /// Write `<stem><target extension>` next to the source document.
    Beside,
}

/// Specifies how to publish a document.
///
/// ```ignore
/// let spec = PublishSpec::new(&source, "markdown", "jira").beside();
/// ```
#[derive(Debug)]
pub struct PublishSpec<'a> {
    /// The document to convert.
    pub document: &'a SourceDocument,
    /// Source format name.
    pub from: &'a str,
    /// Target format name.
    pub to: &'a str,
    /// Where the converted text is placed.
    pub placement: Placement,
    /// File stem used for [`Placement::Beside`].
    pub file_stem: String,
}

impl<'a> PublishSpec<'a> {
    pub fn new(document: &'a SourceDocument, from: &'a str, to: &'a str) -> Self {
        Self {
            document,
            from,
            to,
            placement: Placement::InMemory,
            file_stem: DEFAULT_FILE_STEM.to_string(),
        }
    }

    /// Sets the output file path.
    pub fn with_output_path(mut self, path: impl AsRef<Path>) -> Self {
        self.placement = Placement::Path(path.as_ref().to_path_buf());
        self
    }

    /// Places the output next to the source document.
    pub fn beside(mut self) -> Self {
        self.placement = Placement::Beside;
        self
    }

    pub fn with_file_stem(mut self, stem: impl Into<String>) -> Self {
        self.file_stem = stem.into();
        self
    }
}

/// The output from a successful publish operation.
#[derive(Debug, Clone, PartialEq)]
pub enum PublishArtifact {
    /// Content held in memory.
    InMemory(String),
    /// Path to the written file.
    File(PathBuf),
}

/// Result of a publish operation.
#[derive(Debug, Clone, PartialEq)]
pub struct PublishResult {
    pub artifact: PublishArtifact,
    /// False when the source file name did not carry an extension of the source format.
    pub extension_matched: bool,
}

/// Publishes a document according to the specification.
///
/// A source whose extension does not match the source format is still
/// converted; the mismatch is logged and reported in the result.
///
/// # Errors
///
/// Returns [`FormatError`] if:
/// - Either format is not registered
/// - The converter is unavailable or fails
/// - Writing the output fails
pub fn publish(
    spec: PublishSpec<'_>,
    registry: &FormatRegistry,
    converter: &dyn MarkupConverter,
) -> Result<PublishResult, FormatError> {
    let source_format = registry.get(spec.from)?;
    let target_format = registry.get(spec.to)?;
    let extension_matched = check_source_extension(spec.document, source_format);

    let text = registry.convert(spec.document.text(), spec.from, spec.to, converter)?;

    let artifact = match spec.placement {
        Placement::InMemory => PublishArtifact::InMemory(text),
        Placement::Path(path) => PublishArtifact::File(write_to_path(path, text)?),
        Placement::Beside => {
            let converted = ConvertedDocument::beside(
                spec.document,
                text,
                &spec.file_stem,
                target_format.output_extension(),
            );
            let path = converted
                .path
                .unwrap_or_else(|| PathBuf::from(&converted.file_name));
            PublishArtifact::File(write_to_path(path, converted.text)?)
        }
    };

    Ok(PublishResult {
        artifact,
        extension_matched,
    })
}

/// Logs a warning when `document` does not look like a `format` file.
pub fn check_source_extension(document: &SourceDocument, format: &dyn Format) -> bool {
    let matched = format
        .file_extensions()
        .iter()
        .any(|ext| document.has_extension(ext));
    if !matched {
        let expected = format
            .file_extensions()
            .iter()
            .map(|ext| format!(".{ext}"))
            .collect::<Vec<_>>()
            .join(", ");
        log::warn!(
            "Sorry, '{}' isn't a {} ({expected}) file. Converting anyway.",
            document.file_name(),
            format.description()
        );
    }
    matched
}

fn write_to_path(path: PathBuf, text: String) -> Result<PathBuf, FormatError> {
    fs::write(&path, text).map_err(|err| {
        FormatError::IoError(format!("Error writing file '{}': {err}", path.display()))
    })?;
    log::info!("wrote {}", path.display());
    Ok(path)
}
