//! Property tests for Mermaid embedding

use jmd_babel::formats::jira::mermaid::{rewrite, rewrite_blocks};
use proptest::prelude::*;
use regex::Regex;

const SCRIPT_TAG: &str =
    "<script src=\"https://cdn.jsdelivr.net/npm/mermaid/dist/mermaid.min.js\"></script>";
const INIT_TAG: &str = "<script>mermaid.initialize({ startOnLoad: true });</script>";

// Text that can never form a marker: no braces at all.
fn plain_text() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9 ;:>\\-\\[\\]\n\t]{0,40}"
}

fn container_bodies(output: &str) -> Vec<String> {
    let re = Regex::new(r#"(?s)<div class="mermaid">(.*?)</div>"#).unwrap();
    re.captures_iter(output)
        .map(|caps| caps[1].to_string())
        .collect()
}

proptest! {
    #[test]
    fn text_without_blocks_is_unchanged(text in "[a-z{}:\n ]{0,80}") {
        prop_assume!(!text.contains("{code:mermaid}"));
        prop_assert_eq!(rewrite(&text), text);
    }

    #[test]
    fn every_block_is_rewritten_in_order(
        blocks in prop::collection::vec((plain_text(), plain_text()), 1..6),
        tail in plain_text(),
    ) {
        let mut input = String::new();
        let mut expected = String::new();
        for (index, (prefix, body)) in blocks.iter().enumerate() {
            input.push_str(prefix);
            input.push('\n');
            input.push_str("{code:mermaid}");
            input.push_str(body);
            input.push_str("{code}");

            expected.push_str(prefix);
            expected.push('\n');
            expected.push_str("{html}");
            if index == 0 {
                expected.push_str(SCRIPT_TAG);
                expected.push_str(INIT_TAG);
            }
            expected.push_str("<div class=\"mermaid\">");
            expected.push_str(body);
            expected.push_str("</div>{html}");
        }
        input.push_str(&tail);
        expected.push_str(&tail);

        let outcome = rewrite_blocks(&input);
        prop_assert_eq!(&outcome.text, &expected);
        prop_assert_eq!(outcome.blocks, blocks.len());
        prop_assert_eq!(outcome.text.matches(SCRIPT_TAG).count(), 1);
        prop_assert_eq!(outcome.text.matches(INIT_TAG).count(), 1);

        let bodies: Vec<String> = blocks.iter().map(|(_, body)| body.clone()).collect();
        prop_assert_eq!(container_bodies(&outcome.text), bodies);
    }

    #[test]
    fn unterminated_trailing_block_is_verbatim(prefix in plain_text(), body in plain_text()) {
        let input = format!("{prefix}\n{{code:mermaid}}{body}");
        prop_assert_eq!(rewrite(&input), input);
    }
}
