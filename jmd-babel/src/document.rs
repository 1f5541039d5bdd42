//! Source and converted documents.

use crate::error::FormatError;
use std::fs;
use std::path::{Path, PathBuf};

/// Name given to a converted document, before the target extension.
pub const DEFAULT_FILE_STEM: &str = "formatted_file";

/// The full text of one document, with the file name it was read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceDocument {
    text: String,
    file_name: String,
    path: Option<PathBuf>,
}

impl SourceDocument {
    /// Builds a document from in-memory text. `file_name` is only used for
    /// extension checks and format detection.
    pub fn new(text: impl Into<String>, file_name: impl Into<String>) -> Self {
        SourceDocument {
            text: text.into(),
            file_name: file_name.into(),
            path: None,
        }
    }

    /// Reads a document from disk.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, FormatError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|e| {
            FormatError::IoError(format!("Error reading file '{}': {e}", path.display()))
        })?;
        Ok(SourceDocument {
            text,
            file_name: path.to_string_lossy().into_owned(),
            path: Some(path.to_path_buf()),
        })
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Whether the file name ends with `extension` (case-sensitive, dot optional).
    pub fn has_extension(&self, extension: &str) -> bool {
        self.file_name.ends_with(extension)
    }

    /// Directory holding the document, if it was read from disk.
    pub fn directory(&self) -> Option<&Path> {
        self.path.as_deref().and_then(Path::parent)
    }
}

/// Text produced by a conversion, with the name it should be opened under.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConvertedDocument {
    pub text: String,
    pub file_name: String,
    pub path: Option<PathBuf>,
}

impl ConvertedDocument {
    /// Names the converted text `<stem><extension>`, placed in the source
    /// document's directory when that is known.
    pub fn beside(
        source: &SourceDocument,
        text: String,
        stem: &str,
        extension: &str,
    ) -> ConvertedDocument {
        let file_name = format!("{stem}{extension}");
        let path = source.directory().map(|dir| dir.join(&file_name));
        ConvertedDocument {
            text,
            file_name,
            path,
        }
    }
}
