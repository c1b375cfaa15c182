//! Content renderer - converts a stored post body into display markup.
//!
//! A post body is an opaque string in one of two formats: an Editor.js-style
//! JSON block document, or lightly marked-up plain text. Classification is a
//! single explicit step producing [`ContentDocument`]; the fallback path is
//! never reached through error-driven control flow inside rendering itself.
//!
//! Rendering is a pure transformation with no error path - the worst case is
//! degraded or empty output.
//!
//! # Security
//!
//! Inline content from both paths is emitted **without HTML escaping**. The
//! contract treats post bodies as trusted, author-controlled input; feeding
//! untrusted input through [`render`] is a script-injection risk. Sanitize
//! upstream if post authorship is ever opened beyond the admin account.

mod blocks;
mod markdown;

pub use blocks::StructuredDocument;

/// The two recognized body formats.
#[derive(Debug)]
pub enum ContentDocument {
    Structured(StructuredDocument),
    Plain(String),
}

/// Classify a raw post body. A string is structured iff it parses as a JSON
/// object with a `blocks` sequence; anything else is plain text.
pub fn classify(raw: &str) -> ContentDocument {
    match serde_json::from_str::<StructuredDocument>(raw) {
        Ok(doc) => ContentDocument::Structured(doc),
        Err(_) => ContentDocument::Plain(raw.to_string()),
    }
}

/// Render a raw post body to HTML markup.
pub fn render(raw: &str) -> String {
    match classify(raw) {
        ContentDocument::Structured(doc) => blocks::render_blocks(&doc),
        ContentDocument::Plain(text) => markdown::render_markdown(&text),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_structured_header_block() {
        let raw = r#"{"blocks":[{"type":"header","data":{"level":2,"text":"Hi"}}]}"#;
        assert_eq!(render(raw), "<h2>Hi</h2>");
    }

    #[test]
    fn test_structured_paragraph_and_list() {
        let raw = r#"{"blocks":[
            {"type":"paragraph","data":{"text":"Intro"}},
            {"type":"list","data":{"style":"ordered","items":["one","two"]}}
        ]}"#;
        assert_eq!(render(raw), "<p>Intro</p><ol><li>one</li><li>two</li></ol>");
    }

    #[test]
    fn test_structured_code_and_image() {
        let raw = r#"{"blocks":[
            {"type":"code","data":{"code":"let x = 1;"}},
            {"type":"image","data":{"file":{"url":"https://cdn.example/a.png"},"caption":"fig"}}
        ]}"#;
        let html = render(raw);
        assert!(html.contains("<pre><code>let x = 1;</code></pre>"));
        assert!(html.contains(r#"<img src="https://cdn.example/a.png""#));
        assert!(html.contains("<figcaption>fig</figcaption>"));
    }

    #[test]
    fn test_structured_header_level_clamped() {
        let raw = r#"{"blocks":[{"type":"header","data":{"level":9,"text":"Deep"}}]}"#;
        assert_eq!(render(raw), "<h6>Deep</h6>");
    }

    #[test]
    fn test_unknown_and_malformed_blocks_are_skipped() {
        let raw = r#"{"blocks":[
            {"type":"embed","data":{"service":"youtube"}},
            {"type":"header","data":{"text":"no level"}},
            {"type":"paragraph","data":{"text":"kept"}}
        ]}"#;
        assert_eq!(render(raw), "<p>kept</p>");
    }

    #[test]
    fn test_truncated_json_falls_back_to_plain_text() {
        // Not valid structured data - must not raise, must render as text.
        let html = render(r#"{"blocks":[{"type":"head"#);
        assert!(html.starts_with("<div>"));
    }

    #[test]
    fn test_plain_text_heading_and_emphasis() {
        let html = render("# Title\n\n**bold** and *italic*");
        assert!(html.contains("<h1>Title</h1>"));
        assert!(html.contains("<strong>bold</strong>"));
        assert!(html.contains("<em>italic</em>"));
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(render(""), "<div><p></p></div>");
    }
}
