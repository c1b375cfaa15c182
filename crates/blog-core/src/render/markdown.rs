//! Fallback rendering for lightly marked-up plain text.
//!
//! The passes below are irreversible, non-reentrant text rewrites applied in
//! a fixed order over the whole string. Order matters: headings before bold
//! (so `#` lines are consumed first), bold before italic (so `**` markers are
//! gone when single `*` is matched), lists and tables before the final
//! paragraph wrapping.

use std::sync::LazyLock;

use regex::{Captures, Regex};

static H3: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?m)^### (.*)$").expect("valid regex"));
static H2: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?m)^## (.*)$").expect("valid regex"));
static H1: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?m)^# (.*)$").expect("valid regex"));

static BOLD: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\*\*(.*?)\*\*").expect("valid regex"));
static ITALIC: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\*(.*?)\*").expect("valid regex"));

static LINK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[([^\]]+)\]\(([^)]+)\)").expect("valid regex"));

static CODE_FENCE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new("```([^`]+)```").expect("valid regex"));

static ULIST_ITEM: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^- (.*)$").expect("valid regex"));
static LIST_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?:<li>[^\n]*</li>\n?)+").expect("valid regex"));
static OLIST_ITEM: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^\d+\. (.*)$").expect("valid regex"));

static TABLE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\|(.+)\|\n\|[-:\s|]+\|\n((?:\|.+\|\n?)+)").expect("valid regex")
});

pub(super) fn render_markdown(text: &str) -> String {
    let mut html = text.to_string();

    // Headings, longest hash prefix first so ### is not mis-matched as #.
    html = H3.replace_all(&html, "<h3>$1</h3>").into_owned();
    html = H2.replace_all(&html, "<h2>$1</h2>").into_owned();
    html = H1.replace_all(&html, "<h1>$1</h1>").into_owned();

    // Bold before italic so the double markers are already consumed.
    html = BOLD.replace_all(&html, "<strong>$1</strong>").into_owned();
    html = ITALIC.replace_all(&html, "<em>$1</em>").into_owned();

    // External links open in a new browsing context.
    html = LINK
        .replace_all(
            &html,
            r#"<a href="$2" target="_blank" rel="noopener noreferrer">$1</a>"#,
        )
        .into_owned();

    // Fenced code regions.
    html = CODE_FENCE
        .replace_all(&html, "<pre><code>$1</code></pre>")
        .into_owned();

    // Unordered list items; consecutive items collapse into one list.
    html = ULIST_ITEM.replace_all(&html, "<li>$1</li>").into_owned();
    html = LIST_RUN
        .replace_all(&html, |caps: &Captures<'_>| {
            format!("<ul>{}</ul>", &caps[0])
        })
        .into_owned();

    // Ordered list items (the explicit number is dropped).
    html = OLIST_ITEM.replace_all(&html, "<li>$1</li>").into_owned();

    // Pipe tables: header row, separator row, one or more data rows.
    html = TABLE
        .replace_all(&html, |caps: &Captures<'_>| {
            render_table(&caps[1], &caps[2])
        })
        .into_owned();

    // Remaining double-newline runs become paragraph boundaries inside a
    // single root container.
    let html = html.replace("\n\n", "</p><p>");
    format!("<div><p>{html}</p></div>")
}

fn render_table(header: &str, body: &str) -> String {
    let headers: Vec<&str> = header
        .split('|')
        .map(str::trim)
        .filter(|cell| !cell.is_empty())
        .collect();

    let rows: Vec<Vec<&str>> = body
        .trim()
        .lines()
        .map(|row| {
            row.split('|')
                .map(str::trim)
                .filter(|cell| !cell.is_empty())
                .collect()
        })
        .collect();

    let mut out = String::from("<table><thead><tr>");
    for cell in headers {
        out.push_str("<th>");
        out.push_str(cell);
        out.push_str("</th>");
    }
    out.push_str("</tr></thead><tbody>");
    for row in rows {
        out.push_str("<tr>");
        for cell in row {
            out.push_str("<td>");
            out.push_str(cell);
            out.push_str("</td>");
        }
        out.push_str("</tr>");
    }
    out.push_str("</tbody></table>");
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_heading_levels() {
        let html = render_markdown("# One\n## Two\n### Three");
        assert!(html.contains("<h1>One</h1>"));
        assert!(html.contains("<h2>Two</h2>"));
        assert!(html.contains("<h3>Three</h3>"));
    }

    #[test]
    fn test_bold_is_not_eaten_by_italic() {
        let html = render_markdown("**strong** then *soft*");
        assert!(html.contains("<strong>strong</strong>"));
        assert!(html.contains("<em>soft</em>"));
        assert!(!html.contains("<em><em>"));
    }

    #[test]
    fn test_link_opens_new_context() {
        let html = render_markdown("see [SSC](https://ssc.gov.in)");
        assert!(html.contains(
            r#"<a href="https://ssc.gov.in" target="_blank" rel="noopener noreferrer">SSC</a>"#
        ));
    }

    #[test]
    fn test_code_fence() {
        let html = render_markdown("before\n```\nlet a = 1;\n```\nafter");
        assert!(html.contains("<pre><code>\nlet a = 1;\n</code></pre>"));
    }

    #[test]
    fn test_consecutive_unordered_items_share_one_list() {
        let html = render_markdown("- first\n- second\n- third");
        assert_eq!(
            html,
            "<div><p><ul><li>first</li>\n<li>second</li>\n<li>third</li></ul></p></div>"
        );
    }

    #[test]
    fn test_pipe_table() {
        let html = render_markdown("| Post | Date |\n|------|------|\n| SSC | 2024 |\n");
        assert!(html.contains("<th>Post</th><th>Date</th>"));
        assert!(html.contains("<td>SSC</td><td>2024</td>"));
    }

    #[test]
    fn test_paragraph_wrapping() {
        let html = render_markdown("first run\n\nsecond run");
        assert_eq!(html, "<div><p>first run</p><p>second run</p></div>");
    }
}
