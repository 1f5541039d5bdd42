//! JIRA markup format
//!
//! Text converted into JIRA markup goes through the Mermaid pass (see [`mermaid`])
//! so diagrams written as fenced `mermaid` code in Markdown render on a JIRA page
//! through the `{html}` macro.

pub mod mermaid;

use crate::format::Format;

/// Format implementation for JIRA wiki markup
#[derive(Debug, Clone)]
pub struct JiraFormat {
    mermaid: bool,
}

impl JiraFormat {
    pub fn new() -> Self {
        Self { mermaid: true }
    }

    /// Enables or disables the Mermaid embedding pass.
    pub fn with_mermaid(mut self, enabled: bool) -> Self {
        self.mermaid = enabled;
        self
    }

    pub fn mermaid_enabled(&self) -> bool {
        self.mermaid
    }
}

impl Default for JiraFormat {
    fn default() -> Self {
        Self::new()
    }
}

impl Format for JiraFormat {
    fn name(&self) -> &str {
        "jira"
    }

    fn description(&self) -> &str {
        "JIRA wiki markup"
    }

    fn file_extensions(&self) -> &[&str] {
        &["jira"]
    }

    fn converter_name(&self) -> &str {
        "jira"
    }

    fn output_extension(&self) -> &str {
        ".jira"
    }

    fn post_process(&self, text: String) -> String {
        if !self.mermaid {
            return text;
        }
        let outcome = mermaid::rewrite_blocks(&text);
        log::debug!("embedded {} mermaid diagram(s)", outcome.blocks);
        outcome.text
    }
}
