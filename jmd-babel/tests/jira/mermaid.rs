//! Scenario tests for Mermaid embedding (JIRA output → JIRA output with `{html}` macros)

use insta::assert_snapshot;
use jmd_babel::format::Format;
use jmd_babel::formats::jira::mermaid::{rewrite, rewrite_blocks};
use jmd_babel::formats::JiraFormat;

const SCRIPTS: &str = "<script src=\"https://cdn.jsdelivr.net/npm/mermaid/dist/mermaid.min.js\"></script><script>mermaid.initialize({ startOnLoad: true });</script>";

#[test]
fn test_single_block_becomes_html_macro() {
    let input = "{code:mermaid}\ngraph TD; A-->B;\n{code}";
    assert_eq!(
        rewrite(input),
        "{html}<script src=\"https://cdn.jsdelivr.net/npm/mermaid/dist/mermaid.min.js\"></script><script>mermaid.initialize({ startOnLoad: true });</script><div class=\"mermaid\">\ngraph TD; A-->B;\n</div>{html}"
    );
}

#[test]
fn test_single_block_snapshot() {
    let input = "{code:mermaid}\ngraph TD; A-->B;\n{code}";
    assert_snapshot!(rewrite(input), @r#"
    {html}<script src="https://cdn.jsdelivr.net/npm/mermaid/dist/mermaid.min.js"></script><script>mermaid.initialize({ startOnLoad: true });</script><div class="mermaid">
    graph TD; A-->B;
    </div>{html}
    "#);
}

#[test]
fn test_second_block_has_no_scripts() {
    let input = "{code:mermaid}\ngraph TD; A-->B;\n{code}\n\n{code:mermaid}\nsequenceDiagram\n{code}";
    let output = rewrite(input);

    let expected = format!(
        "{{html}}{SCRIPTS}<div class=\"mermaid\">\ngraph TD; A-->B;\n</div>{{html}}\n\n\
         {{html}}<div class=\"mermaid\">\nsequenceDiagram\n</div>{{html}}"
    );
    assert_eq!(output, expected);
    assert_eq!(output.matches("<script src=").count(), 1);
}

#[test]
fn test_surrounding_text_is_preserved() {
    let input = "h1. Design\n\nSome *bold* text.\n{code:mermaid}\nflowchart LR\n{code}\n  trailing  \n\n";
    let output = rewrite(input);

    assert!(output.starts_with("h1. Design\n\nSome *bold* text.\n{html}"));
    assert!(output.ends_with("</div>{html}\n  trailing  \n\n"));
}

#[test]
fn test_text_without_blocks_is_unchanged() {
    let input = "h2. Notes\n{code:java}\nint x = 1;\n{code}\n{noformat}\nraw\n{noformat}\n";
    assert_eq!(rewrite(input), input);
}

#[test]
fn test_opening_marker_is_case_sensitive() {
    let input = "{code:Mermaid}\ngraph TD;\n{code}\n{CODE:mermaid}\ngraph TD;\n{code}";
    assert_eq!(rewrite(input), input);
}

#[test]
fn test_opening_marker_must_start_a_line() {
    let input = "inline {code:mermaid}graph TD;{code}";
    assert_eq!(rewrite(input), input);
}

#[test]
fn test_unterminated_block_is_left_verbatim() {
    let input = "before\n{code:mermaid}\ngraph TD; A-->B;\n";
    assert_eq!(rewrite(input), input);
}

#[test]
fn test_unterminated_block_after_a_good_one() {
    let input = "{code:mermaid}\nA\n{code}\n{code:mermaid}\nB\n";
    let output = rewrite(input);

    assert_eq!(
        output,
        format!("{{html}}{SCRIPTS}<div class=\"mermaid\">\nA\n</div>{{html}}\n{{code:mermaid}}\nB\n")
    );
}

#[test]
fn test_opener_without_close_before_next_opener_is_skipped() {
    let input = "{code:mermaid}\nlost\n{code:mermaid}\nkept\n{code}";
    let output = rewrite(input);

    assert_eq!(
        output,
        format!("{{code:mermaid}}\nlost\n{{html}}{SCRIPTS}<div class=\"mermaid\">\nkept\n</div>{{html}}")
    );
}

#[test]
fn test_first_closing_marker_ends_the_block() {
    let input = "{code:mermaid}\nA\n{code}\nB\n{code}";
    let outcome = rewrite_blocks(input);

    assert_eq!(outcome.blocks, 1);
    assert!(outcome.text.ends_with("<div class=\"mermaid\">\nA\n</div>{html}\nB\n{code}"));
}

#[test]
fn test_body_is_kept_verbatim() {
    let body = "\ngraph TD\n  A[\"<b>bold</b> & {braces}\"] --> B\n  %% comment ü → ✓\n";
    let input = format!("{{code:mermaid}}{body}{{code}}");
    let output = rewrite(&input);

    assert!(output.contains(&format!("<div class=\"mermaid\">{body}</div>")));
}

#[test]
fn test_empty_body() {
    let output = rewrite("{code:mermaid}{code}");
    assert_eq!(output, format!("{{html}}{SCRIPTS}<div class=\"mermaid\"></div>{{html}}"));
}

#[test]
fn test_each_call_starts_fresh() {
    let input = "{code:mermaid}\ngraph TD;\n{code}";
    let first = rewrite(input);
    let second = rewrite(input);

    assert_eq!(first, second);
    assert!(second.contains(SCRIPTS));
}

#[test]
fn test_second_pass_finds_nothing() {
    let input = "{code:mermaid}\ngraph TD;\n{code}\n{code:mermaid}\npie\n{code}";
    let once = rewrite(input);
    assert_eq!(rewrite(&once), once);
}

#[test]
fn test_jira_format_post_process_matches_rewrite() {
    let input = "{code:mermaid}\ngraph TD;\n{code}";
    assert_eq!(
        JiraFormat::default().post_process(input.to_string()),
        jmd_babel::embed_mermaid(input)
    );
}
