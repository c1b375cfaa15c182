//! OpenAI-compatible chat-completions client for excerpt/SEO generation.

use std::env;
use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use blog_core::ports::{AssistError, ContentAssistant};

const DEFAULT_BASE_URL: &str = "https://api.emergentagi.com/v1";
const DEFAULT_MODEL: &str = "gpt-4o";

const EXCERPT_SYSTEM_PROMPT: &str =
    "You are a helpful assistant that creates concise excerpts for blog posts.";
const SEO_SYSTEM_PROMPT: &str =
    "You are an SEO expert that creates meta descriptions and keywords for blog posts.";

/// LLM endpoint configuration.
#[derive(Debug, Clone)]
pub struct AssistConfig {
    pub api_key: String,
    pub base_url: String,
    pub model: String,
}

impl AssistConfig {
    /// Read configuration from the environment. `None` when no API key is
    /// set; the assistant endpoints then degrade to empty suggestions.
    pub fn from_env() -> Option<Self> {
        let api_key = env::var("LLM_API_KEY").ok()?;
        let base_url = env::var("LLM_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        let model = env::var("LLM_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string());

        Some(Self {
            api_key,
            base_url,
            model,
        })
    }
}

/// Assistant backed by an OpenAI-compatible `/chat/completions` endpoint.
pub struct ChatCompletionsAssistant {
    client: reqwest::Client,
    config: AssistConfig,
}

impl ChatCompletionsAssistant {
    pub fn new(config: AssistConfig) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(60))
            .build()
            .unwrap_or_default();

        Self { client, config }
    }

    async fn complete(
        &self,
        system: &str,
        user: String,
        max_tokens: u32,
    ) -> Result<String, AssistError> {
        let request = ChatRequest {
            model: &self.config.model,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: system.to_string(),
                },
                ChatMessage {
                    role: "user",
                    content: user,
                },
            ],
            max_tokens,
        };

        let endpoint = format!(
            "{}/chat/completions",
            self.config.base_url.trim_end_matches('/')
        );

        let response = self
            .client
            .post(endpoint)
            .bearer_auth(&self.config.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| AssistError::Request(e.to_string()))?
            .error_for_status()
            .map_err(|e| AssistError::Request(e.to_string()))?;

        let body: ChatResponse = response.json().await.map_err(|_| AssistError::Malformed)?;

        body.choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content.trim().to_string())
            .ok_or(AssistError::Malformed)
    }
}

#[async_trait]
impl ContentAssistant for ChatCompletionsAssistant {
    async fn generate_excerpt(&self, content: &str) -> Result<String, AssistError> {
        let prompt = format!(
            "Create a compelling 2-3 sentence excerpt for this blog post:\n\n{}",
            truncate_chars(content, 1000)
        );

        self.complete(EXCERPT_SYSTEM_PROMPT, prompt, 150).await
    }

    async fn generate_seo(&self, title: &str, content: &str) -> Result<String, AssistError> {
        let prompt = format!(
            "For a blog post titled \"{title}\" with content: {}\n\n\
             Provide:\n1. Meta description (150-160 characters)\n\
             2. 5 relevant keywords (comma-separated)",
            truncate_chars(content, 500)
        );

        self.complete(SEO_SYSTEM_PROMPT, prompt, 200).await
    }
}

/// Stand-in used when no LLM key is configured.
pub struct UnconfiguredAssistant;

#[async_trait]
impl ContentAssistant for UnconfiguredAssistant {
    async fn generate_excerpt(&self, _content: &str) -> Result<String, AssistError> {
        Err(AssistError::NotConfigured)
    }

    async fn generate_seo(&self, _title: &str, _content: &str) -> Result<String, AssistError> {
        Err(AssistError::NotConfigured)
    }
}

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    max_tokens: u32,
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: String,
}

#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ChatChoiceMessage,
}

#[derive(Deserialize)]
struct ChatChoiceMessage {
    content: String,
}

/// Prompt budget is in characters; cut on a char boundary.
fn truncate_chars(s: &str, max: usize) -> &str {
    match s.char_indices().nth(max) {
        Some((idx, _)) => &s[..idx],
        None => s,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_respects_char_boundaries() {
        assert_eq!(truncate_chars("abcdef", 3), "abc");
        assert_eq!(truncate_chars("ab", 10), "ab");
        assert_eq!(truncate_chars("निकाल जाहीर", 6), "निकाल ");
    }
}
