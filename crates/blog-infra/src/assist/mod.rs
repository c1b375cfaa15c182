//! AI assistant implementations.

mod openai;

pub use openai::{AssistConfig, ChatCompletionsAssistant, UnconfiguredAssistant};
