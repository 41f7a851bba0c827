//! LLM Client — the single point of entry for all chat-model calls.
//!
//! ARCHITECTURAL RULE: agents never talk to the provider directly. They hold an
//! `Arc<dyn ChatModel>`; `LlmClient` is the production implementation backed by
//! the Groq OpenAI-compatible chat-completions API.
//!
//! No retries are performed here. Every failure is returned to the caller as-is.

use std::pin::Pin;

use async_stream::try_stream;
use async_trait::async_trait;
use futures::{Stream, StreamExt};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

pub mod prompts;
pub mod streaming;

use streaming::{SseDecoder, SseEvent};

const REQUEST_TIMEOUT_SECS: u64 = 120;

#[derive(Debug, Error)]
pub enum LlmError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Stream error: {0}")]
    Stream(String),

    #[error("LLM returned empty content")]
    EmptyContent,

    #[error("Output error: {0}")]
    Io(#[from] std::io::Error),
}

/// Lazily produced text chunks of a streamed completion.
pub type TextStream = Pin<Box<dyn Stream<Item = Result<String, LlmError>> + Send>>;

/// The capability of submitting a prompt to a chat model.
///
/// Implement this to swap providers, or to stub the model in tests, without
/// touching any prompt-construction code.
#[async_trait]
pub trait ChatModel: Send + Sync {
    /// Identifier of the underlying model, e.g. `llama-3.3-70b-versatile`.
    fn model_id(&self) -> &str;

    /// Returns the full completion text for `prompt`.
    async fn complete(&self, prompt: &str) -> Result<String, LlmError>;

    /// Returns the completion as a lazy sequence of text chunks.
    async fn stream(&self, prompt: &str) -> Result<TextStream, LlmError>;
}

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    stream: bool,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
pub struct ChatResponse {
    pub choices: Vec<Choice>,
    pub usage: Option<Usage>,
}

#[derive(Debug, Deserialize)]
pub struct Choice {
    pub message: ChoiceMessage,
}

#[derive(Debug, Deserialize)]
pub struct ChoiceMessage {
    pub content: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct Usage {
    pub prompt_tokens: u32,
    pub completion_tokens: u32,
}

impl ChatResponse {
    /// Extracts the text content of the first choice.
    pub fn text(&self) -> Option<&str> {
        self.choices
            .first()
            .and_then(|c| c.message.content.as_deref())
            .filter(|t| !t.is_empty())
    }
}

#[derive(Debug, Deserialize)]
struct ProviderError {
    error: ProviderErrorBody,
}

#[derive(Debug, Deserialize)]
struct ProviderErrorBody {
    message: String,
}

/// Chat-completion client for the Groq API.
#[derive(Clone)]
pub struct LlmClient {
    client: Client,
    api_key: String,
    api_url: String,
    model: String,
    markdown: bool,
}

impl LlmClient {
    pub fn new(
        api_key: String,
        api_url: String,
        model: String,
        markdown: bool,
    ) -> Result<Self, LlmError> {
        Ok(Self {
            client: Client::builder()
                .timeout(std::time::Duration::from_secs(REQUEST_TIMEOUT_SECS))
                .build()?,
            api_key,
            api_url,
            model,
            markdown,
        })
    }

    fn messages<'a>(&self, prompt: &'a str) -> Vec<ChatMessage<'a>> {
        let mut messages = Vec::with_capacity(2);
        if self.markdown {
            messages.push(ChatMessage {
                role: "system",
                content: prompts::MARKDOWN_SYSTEM,
            });
        }
        messages.push(ChatMessage {
            role: "user",
            content: prompt,
        });
        messages
    }

    /// Sends the request and converts any non-2xx status into `LlmError::Api`.
    async fn send(&self, prompt: &str, stream: bool) -> Result<reqwest::Response, LlmError> {
        let request_body = ChatRequest {
            model: &self.model,
            messages: self.messages(prompt),
            stream,
        };

        let response = self
            .client
            .post(&self.api_url)
            .bearer_auth(&self.api_key)
            .json(&request_body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!("LLM API returned {}: {}", status, body);
            return Err(LlmError::Api {
                status: status.as_u16(),
                message: provider_error_message(body),
            });
        }

        Ok(response)
    }
}

#[async_trait]
impl ChatModel for LlmClient {
    fn model_id(&self) -> &str {
        &self.model
    }

    async fn complete(&self, prompt: &str) -> Result<String, LlmError> {
        let body = self.send(prompt, false).await?.text().await?;
        let response: ChatResponse = serde_json::from_str(&body)?;

        if let Some(usage) = &response.usage {
            debug!(
                "LLM call succeeded: prompt_tokens={}, completion_tokens={}",
                usage.prompt_tokens, usage.completion_tokens
            );
        }

        response
            .text()
            .map(str::to_owned)
            .ok_or(LlmError::EmptyContent)
    }

    async fn stream(&self, prompt: &str) -> Result<TextStream, LlmError> {
        let response = self.send(prompt, true).await?;
        debug!("LLM stream opened (model: {})", self.model);

        let stream = try_stream! {
            let mut body = response.bytes_stream();
            let mut decoder = SseDecoder::default();
            let mut done = false;

            while let Some(chunk) = body.next().await {
                let chunk = chunk.map_err(LlmError::Http)?;
                for event in decoder.push(&chunk)? {
                    match event {
                        SseEvent::Delta(delta) => {
                            yield delta;
                        }
                        SseEvent::Done => {
                            done = true;
                            break;
                        }
                    }
                }
                if done {
                    break;
                }
            }

            if !done {
                if let Some(SseEvent::Delta(delta)) = decoder.finish()? {
                    yield delta;
                }
            }
        };

        Ok(Box::pin(stream))
    }
}

/// Pulls `error.message` out of a provider error body, falling back to the raw body.
fn provider_error_message(body: String) -> String {
    serde_json::from_str::<ProviderError>(&body)
        .map(|e| e.error.message)
        .unwrap_or(body)
}
