//! Markdown format implementation
//!
//! Converted Markdown is handed to the external converter as GitHub-flavoured
//! Markdown (`gfm`), which keeps fenced code blocks and their info strings intact.
//! Fenced ```` ```mermaid ```` blocks therefore come out of a JIRA conversion as
//! `{code:mermaid}` blocks, which the JIRA format then embeds.
//!
//! Nothing runs over text converted into Markdown.

use crate::format::Format;

/// Format implementation for Markdown
pub struct MarkdownFormat;

impl Format for MarkdownFormat {
    fn name(&self) -> &str {
        "markdown"
    }

    fn description(&self) -> &str {
        "GitHub-flavoured Markdown"
    }

    fn file_extensions(&self) -> &[&str] {
        &["md", "markdown"]
    }

    fn converter_name(&self) -> &str {
        "gfm"
    }

    fn output_extension(&self) -> &str {
        ".md"
    }
}
