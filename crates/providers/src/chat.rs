//! Chat-completion client.

use serde::{Deserialize, Serialize};
use tracing::debug;

use meridian_common::config::AppConfig;
use meridian_common::types::ChatMessage;

use crate::error::ProviderError;
use crate::read_json;

const PROVIDER: &str = "OpenAI";

/// Model every completion is requested from.
pub const CHAT_MODEL: &str = "gpt-3.5-turbo";

/// Cap on generated tokens per completion.
pub const CHAT_MAX_TOKENS: u32 = 500;

/// Sampling temperature for every completion.
pub const CHAT_TEMPERATURE: f32 = 0.7;

/// Returned when the provider answers without any content.
pub const EMPTY_COMPLETION_PLACEHOLDER: &str = "No response generated";

#[derive(Debug, Serialize)]
struct CompletionRequest<'a> {
    model: &'a str,
    messages: &'a [ChatMessage],
    max_tokens: u32,
    temperature: f32,
}

#[derive(Debug, Deserialize)]
struct CompletionResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: Option<ChoiceMessage>,
}

#[derive(Debug, Deserialize)]
struct ChoiceMessage {
    content: Option<String>,
}

/// Client for the hosted chat-completion endpoint.
#[derive(Debug, Clone)]
pub struct ChatClient {
    http: reqwest::Client,
    base_url: String,
    api_key: Option<String>,
}

impl ChatClient {
    pub fn new(http: reqwest::Client, config: &AppConfig) -> Self {
        Self {
            http,
            base_url: config.openai_base_url.trim_end_matches('/').to_string(),
            api_key: config.openai_api_key.clone(),
        }
    }

    /// Request a completion and return the text of the first choice.
    pub async fn complete(&self, messages: &[ChatMessage]) -> Result<String, ProviderError> {
        let api_key = self
            .api_key
            .as_deref()
            .ok_or(ProviderError::MissingApiKey(PROVIDER))?;

        let request = CompletionRequest {
            model: CHAT_MODEL,
            messages,
            max_tokens: CHAT_MAX_TOKENS,
            temperature: CHAT_TEMPERATURE,
        };

        debug!(messages = messages.len(), model = CHAT_MODEL, "Requesting chat completion");

        let response = self
            .http
            .post(format!("{}/chat/completions", self.base_url))
            .bearer_auth(api_key)
            .json(&request)
            .send()
            .await
            .map_err(|source| ProviderError::Http {
                provider: PROVIDER,
                source,
            })?;

        let value = read_json(PROVIDER, response).await?;
        let completion: CompletionResponse =
            serde_json::from_value(value).map_err(|e| ProviderError::Decode {
                provider: PROVIDER,
                message: e.to_string(),
            })?;

        Ok(first_choice_text(completion))
    }
}

fn first_choice_text(completion: CompletionResponse) -> String {
    completion
        .choices
        .into_iter()
        .next()
        .and_then(|choice| choice.message)
        .and_then(|message| message.content)
        .unwrap_or_else(|| EMPTY_COMPLETION_PLACEHOLDER.to_string())
}
