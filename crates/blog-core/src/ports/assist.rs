//! AI assistant port - excerpt and SEO text generation is delegated to an
//! external LLM completion API. Callers treat failures as "no suggestion";
//! the editor flow is never blocked by assistant unavailability.

use async_trait::async_trait;

/// Text-generation helper for the post editor.
#[async_trait]
pub trait ContentAssistant: Send + Sync {
    /// Produce a 2-3 sentence excerpt for the given post content.
    async fn generate_excerpt(&self, content: &str) -> Result<String, AssistError>;

    /// Produce a two-line SEO blob: meta description on the first line,
    /// comma-separated keywords on the second.
    async fn generate_seo(&self, title: &str, content: &str) -> Result<String, AssistError>;
}

/// Assistant errors.
#[derive(Debug, thiserror::Error)]
pub enum AssistError {
    #[error("Assistant is not configured")]
    NotConfigured,

    #[error("Assistant request failed: {0}")]
    Request(String),

    #[error("Assistant returned an unexpected response")]
    Malformed,
}
