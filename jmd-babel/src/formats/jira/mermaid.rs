//! Mermaid diagram embedding for JIRA markup
//!
//! JIRA has no native Mermaid support, but it will render raw HTML placed inside
//! an `{html}` macro. This pass finds every `{code:mermaid}` ... `{code}` block and
//! turns it into such a macro holding a `<div class="mermaid">` container. The
//! Mermaid script tags are emitted once per document, in front of the first
//! diagram; every later diagram only carries its container.
//!
//! Matching rules:
//!
//! - The opening marker is case-sensitive and only counts at the start of a line.
//! - The body runs up to the first closing marker. Blocks do not nest.
//! - An opening marker whose block is not closed before the next opening marker
//!   (or before the end of the text) is left in place as ordinary text.
//!
//! The pass keeps its "script already emitted" flag in a `RewritePass` built
//! fresh for every call, so consecutive documents never share state.

/// Opening marker of a Mermaid code block.
pub const OPENING_MARKER: &str = "{code:mermaid}";
/// Closing marker of any code block.
pub const CLOSING_MARKER: &str = "{code}";
/// Raw HTML passthrough marker, used on both sides of the fragment.
pub const HTML_MARKER: &str = "{html}";
/// CDN location of the Mermaid bundle. Not pinned to a version, so a breaking
/// Mermaid release reaches already converted pages.
pub const MERMAID_SCRIPT_URL: &str = "https://cdn.jsdelivr.net/npm/mermaid/dist/mermaid.min.js";

const SCRIPT_DECLARATION: &str = concat!(
    "<script src=\"https://cdn.jsdelivr.net/npm/mermaid/dist/mermaid.min.js\"></script>",
    "<script>mermaid.initialize({ startOnLoad: true });</script>"
);
const CONTAINER_OPEN: &str = "<div class=\"mermaid\">";
const CONTAINER_CLOSE: &str = "</div>";

/// Result of one rewrite pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RewriteOutcome {
    /// The rewritten text.
    pub text: String,
    /// Number of diagram blocks that were turned into HTML macros.
    pub blocks: usize,
}

/// Rewrites every Mermaid code block in `text` into an `{html}` macro.
pub fn rewrite(text: &str) -> String {
    rewrite_blocks(text).text
}

/// Same as [`rewrite`], also reporting how many blocks were rewritten.
pub fn rewrite_blocks(text: &str) -> RewriteOutcome {
    let mut pass = RewritePass::with_capacity(text.len());
    let mut cursor = 0;

    while let Some(mut open) = find_opening(text, cursor) {
        // No closing marker left means no later opener can be closed either.
        let Some(close) = find_closing(text, open + OPENING_MARKER.len()) else {
            break;
        };

        // Openers left unclosed before the next one stay in the text verbatim.
        while let Some(next) =
            find_opening(text, open + OPENING_MARKER.len()).filter(|&next| next < close)
        {
            open = next;
        }

        pass.push_text(&text[cursor..open]);
        pass.push_block(&text[open + OPENING_MARKER.len()..close]);
        cursor = close + CLOSING_MARKER.len();
    }

    pass.push_text(&text[cursor..]);
    pass.finish()
}

/// State of a single rewrite over one document.
struct RewritePass {
    output: String,
    script_emitted: bool,
    blocks: usize,
}

impl RewritePass {
    fn with_capacity(capacity: usize) -> Self {
        RewritePass {
            output: String::with_capacity(capacity),
            script_emitted: false,
            blocks: 0,
        }
    }

    fn push_text(&mut self, text: &str) {
        self.output.push_str(text);
    }

    fn push_block(&mut self, body: &str) {
        self.output.push_str(HTML_MARKER);
        if !self.script_emitted {
            self.output.push_str(SCRIPT_DECLARATION);
            self.script_emitted = true;
        }
        self.output.push_str(CONTAINER_OPEN);
        self.output.push_str(body);
        self.output.push_str(CONTAINER_CLOSE);
        self.output.push_str(HTML_MARKER);
        self.blocks += 1;
    }

    fn finish(self) -> RewriteOutcome {
        RewriteOutcome {
            text: self.output,
            blocks: self.blocks,
        }
    }
}

/// Byte offset of the next opening marker at or after `from` that starts a line.
fn find_opening(text: &str, from: usize) -> Option<usize> {
    let mut from = from;
    while let Some(idx) = text[from..].find(OPENING_MARKER) {
        let pos = from + idx;
        if starts_line(text, pos) {
            return Some(pos);
        }
        // The marker starts with a one-byte '{', so pos + 1 is a char boundary.
        from = pos + 1;
    }
    None
}

fn find_closing(text: &str, from: usize) -> Option<usize> {
    text[from..].find(CLOSING_MARKER).map(|idx| from + idx)
}

fn starts_line(text: &str, pos: usize) -> bool {
    pos == 0 || matches!(text.as_bytes()[pos - 1], b'\n' | b'\r')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn script_declaration_points_at_cdn_url() {
        assert!(SCRIPT_DECLARATION.contains(MERMAID_SCRIPT_URL));
    }

    #[test]
    fn finds_opening_only_at_line_start() {
        let text = "see {code:mermaid} here\n{code:mermaid}";
        assert_eq!(find_opening(text, 0), Some(24));
    }

    #[test]
    fn finds_opening_at_text_start() {
        assert_eq!(find_opening("{code:mermaid}", 0), Some(0));
        assert_eq!(find_opening("{code:mermaid}", 1), None);
    }

    #[test]
    fn closing_marker_is_not_found_inside_opening_marker() {
        assert_eq!(find_closing("{code:mermaid}", 0), None);
    }

    #[test]
    fn counts_rewritten_blocks() {
        let text = "{code:mermaid}\na\n{code}\n{code:mermaid}\nb\n{code}\n";
        let outcome = rewrite_blocks(text);
        assert_eq!(outcome.blocks, 2);
        assert_eq!(outcome.text.matches(SCRIPT_DECLARATION).count(), 1);
    }

    #[test]
    fn pass_emits_script_only_for_first_block() {
        let mut pass = RewritePass::with_capacity(0);
        pass.push_block("a");
        pass.push_block("b");
        let outcome = pass.finish();
        assert_eq!(
            outcome.text,
            format!(
                "{{html}}{SCRIPT_DECLARATION}<div class=\"mermaid\">a</div>{{html}}\
                 {{html}}<div class=\"mermaid\">b</div>{{html}}"
            )
        );
    }

    #[test]
    fn empty_text_is_untouched() {
        let outcome = rewrite_blocks("");
        assert_eq!(outcome.text, "");
        assert_eq!(outcome.blocks, 0);
    }

    #[test]
    fn crlf_line_endings_anchor_the_opening_marker() {
        let text = "intro\r\n{code:mermaid}\r\ngraph LR\r\n{code}\r\n";
        let outcome = rewrite_blocks(text);
        assert_eq!(outcome.blocks, 1);
        assert!(outcome.text.starts_with("intro\r\n{html}"));
        assert!(outcome.text.ends_with("\r\ngraph LR\r\n</div>{html}\r\n"));
    }
}
