//! Format trait definition
//!
//! This module defines the Format trait that every markup dialect implements.
//! Formats never parse or serialize markup themselves: the grammar work is done
//! by the external converter (see [`crate::converter`]). A format only describes
//! how the dialect is named, which files it owns, and which pass runs over text
//! freshly converted into it.

use serde::Serialize;

/// Trait for markup dialects
///
/// # Examples
///
/// ```ignore
/// struct MyFormat;
///
/// impl Format for MyFormat {
///     fn name(&self) -> &str {
///         "my-format"
///     }
///
///     fn converter_name(&self) -> &str {
///         "my-format"
///     }
///
///     fn output_extension(&self) -> &str {
///         ".my"
///     }
/// }
/// ```
pub trait Format: Send + Sync {
    /// The name of this format (e.g., "jira", "markdown")
    fn name(&self) -> &str;

    /// Optional description of this format
    fn description(&self) -> &str {
        ""
    }

    /// File extensions associated with this format (e.g., ["jira"], ["md", "markdown"])
    ///
    /// Returns a slice of file extensions without the leading dot.
    /// Used for automatic format detection from filenames.
    fn file_extensions(&self) -> &[&str] {
        &[]
    }

    /// Identifier the external converter uses for this dialect
    fn converter_name(&self) -> &str;

    /// Extension given to documents converted into this format, leading dot included
    fn output_extension(&self) -> &str;

    /// Pass applied to text that was just converted into this format.
    ///
    /// Runs exactly once per conversion. The default leaves the text untouched.
    fn post_process(&self, text: String) -> String {
        text
    }
}

/// Serializable summary of a registered format, used for listings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FormatInfo {
    pub name: String,
    pub description: String,
    pub extensions: Vec<String>,
}

impl FormatInfo {
    pub fn of(format: &dyn Format) -> Self {
        FormatInfo {
            name: format.name().to_string(),
            description: format.description().to_string(),
            extensions: format
                .file_extensions()
                .iter()
                .map(|ext| ext.to_string())
                .collect(),
        }
    }
}
