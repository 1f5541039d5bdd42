//! JIRA format tests
//!
//! Tests for the Mermaid embedding pass run over JIRA output.

mod mermaid;
mod properties;
