//! Structured (block-document) rendering.
//!
//! Each block is decoded individually so that an unknown or malformed block
//! renders nothing instead of failing the whole document.

use std::fmt::Write;

use serde::Deserialize;
use serde_json::Value;

/// A parsed block document: an ordered sequence of typed block records.
/// Blocks stay as raw JSON values until render time; per-block decode
/// failures are the "skip" case.
#[derive(Debug, Deserialize)]
pub struct StructuredDocument {
    pub blocks: Vec<Value>,
}

#[derive(Debug, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
enum Block {
    Header { data: HeaderData },
    Paragraph { data: ParagraphData },
    List { data: ListData },
    Code { data: CodeData },
    Image { data: ImageData },
}

#[derive(Debug, Deserialize)]
struct HeaderData {
    level: u8,
    text: String,
}

#[derive(Debug, Deserialize)]
struct ParagraphData {
    text: String,
}

#[derive(Debug, Deserialize)]
struct ListData {
    #[serde(default)]
    style: ListStyle,
    items: Vec<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
enum ListStyle {
    Ordered,
    #[default]
    Unordered,
}

#[derive(Debug, Deserialize)]
struct CodeData {
    code: String,
}

#[derive(Debug, Deserialize)]
struct ImageData {
    file: ImageFile,
    #[serde(default)]
    caption: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ImageFile {
    url: String,
}

pub(super) fn render_blocks(doc: &StructuredDocument) -> String {
    let mut html = String::new();

    for value in &doc.blocks {
        let Ok(block) = serde_json::from_value::<Block>(value.clone()) else {
            continue;
        };

        match block {
            Block::Header { data } => {
                let level = data.level.clamp(1, 6);
                let _ = write!(html, "<h{level}>{}</h{level}>", data.text);
            }
            Block::Paragraph { data } => {
                let _ = write!(html, "<p>{}</p>", data.text);
            }
            Block::List { data } => {
                let tag = match data.style {
                    ListStyle::Ordered => "ol",
                    ListStyle::Unordered => "ul",
                };
                let _ = write!(html, "<{tag}>");
                for item in &data.items {
                    let _ = write!(html, "<li>{item}</li>");
                }
                let _ = write!(html, "</{tag}>");
            }
            Block::Code { data } => {
                let _ = write!(html, "<pre><code>{}</code></pre>", data.code);
            }
            Block::Image { data } => {
                let caption = data.caption.as_deref().unwrap_or("");
                let _ = write!(html, r#"<figure><img src="{}" alt="{caption}" />"#, data.file.url);
                if !caption.is_empty() {
                    let _ = write!(html, "<figcaption>{caption}</figcaption>");
                }
                let _ = write!(html, "</figure>");
            }
        }
    }

    html
}
