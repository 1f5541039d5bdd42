//! Conversion between JIRA wiki markup and Markdown
//!
//!     This crate converts documents between JIRA markup and Markdown and makes Mermaid
//!     diagrams survive the trip into JIRA.
//!
//!     TLDR:
//!         - The crate never parses or serializes either dialect. The grammar work is done by an
//!           external converter (pandoc, see ./converter.rs).
//!         - What we own is the pass that runs after conversion: Mermaid code blocks in JIRA
//!           output become `{html}` macros that load the Mermaid script once per document
//!           (see ./formats/jira/mermaid.rs).
//!
//!     This is a pure lib, that is, it powers jmd-cli but is shell agnostic: no code here should
//!     print to std streams or read the process arguments. Diagnostics go through the `log`
//!     facade and the front end decides where they end up.
//!
//!     The file structure :
//!     .
//!     ├── error.rs
//!     ├── format.rs               # Format trait definition
//!     ├── registry.rs             # FormatRegistry for discovery, selection and conversion
//!     ├── converter.rs            # MarkupConverter trait and the pandoc converter
//!     ├── document.rs             # Source and converted documents
//!     ├── commands.rs             # Named conversion commands
//!     ├── publish.rs              # One-call conversion pipeline
//!     ├── formats
//!     │   ├── jira
//!     │   │   ├── mermaid.rs      # Mermaid block rewrite pass
//!     │   │   └── mod.rs
//!     │   └── markdown
//!     │       └── mod.rs
//!     └── lib.rs
//!
//! Testing
//!     tests
//!     └── <format>
//!         └── <testname>.rs
//!
//!     Note that rust does not by default discover tests in subdirectories, so we need to include these
//!     in the mod.
//!
//! Formats
//!
//!     A format names a dialect, lists its file extensions, tells the converter how to refer to
//!     it, and may run a pass over text freshly converted into it. See the trait def [./format.rs]
//!
//!     Passes run exactly once per conversion and are not required to be idempotent: the Mermaid
//!     pass consumes the code block markers it rewrites.
pub mod commands;
pub mod converter;
pub mod document;
pub mod error;
pub mod format;
pub mod formats;
pub mod publish;
pub mod registry;

pub use converter::{MarkupConverter, PandocConverter};
pub use document::{ConvertedDocument, SourceDocument};
pub use error::FormatError;
pub use format::{Format, FormatInfo};
pub use registry::FormatRegistry;

/// Embeds the Mermaid diagrams of a freshly converted JIRA document.
///
/// Shorthand for [`formats::jira::mermaid::rewrite`].
pub fn embed_mermaid(jira: &str) -> String {
    formats::jira::mermaid::rewrite(jira)
}
