//! Format implementations
//!
//! One module per markup dialect. Each implements [`crate::format::Format`].

pub mod jira;
pub mod markdown;

pub use jira::JiraFormat;
pub use markdown::MarkdownFormat;
