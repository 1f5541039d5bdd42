//! Named conversion commands.
//!
//! Each command fixes a conversion direction so front ends can expose one action
//! per direction ("Convert to JIRA") instead of asking for formats.

/// A conversion with a fixed source and target format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConversionCommand {
    /// Short name used on the command line.
    pub name: &'static str,
    /// Stable identifier, for hosts that register commands by id.
    pub id: &'static str,
    pub title: &'static str,
    pub from: &'static str,
    pub to: &'static str,
}

pub const TO_JIRA: ConversionCommand = ConversionCommand {
    name: "to-jira",
    id: "extension.convertMarkdownWithMermaid",
    title: "Convert Markdown to JIRA (with Mermaid diagrams)",
    from: "markdown",
    to: "jira",
};

pub const TO_MARKDOWN: ConversionCommand = ConversionCommand {
    name: "to-markdown",
    id: "extension.convertJiraToMarkdown",
    title: "Convert JIRA to Markdown",
    from: "jira",
    to: "markdown",
};

/// All built-in commands.
pub const COMMANDS: &[ConversionCommand] = &[TO_JIRA, TO_MARKDOWN];

/// Looks a command up by its short name or its id.
pub fn find(name: &str) -> Option<&'static ConversionCommand> {
    COMMANDS
        .iter()
        .find(|command| command.name == name || command.id == name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::FormatRegistry;

    #[test]
    fn finds_by_name_and_id() {
        assert_eq!(find("to-jira"), Some(&TO_JIRA));
        assert_eq!(find("extension.convertMarkdownWithMermaid"), Some(&TO_JIRA));
        assert_eq!(find("to-markdown"), Some(&TO_MARKDOWN));
        assert_eq!(find("to-html"), None);
    }

    #[test]
    fn commands_refer_to_registered_formats() {
        let registry = FormatRegistry::default();
        for command in COMMANDS {
            assert!(registry.has(command.from), "{}", command.from);
            assert!(registry.has(command.to), "{}", command.to);
        }
    }
}
