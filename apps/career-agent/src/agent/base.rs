//! Base agent — an immutable identity paired with a chat-model handle.
//!
//! Both operations delegate verbatim to the model. Nothing is validated,
//! transformed or retried here; model errors reach the caller unchanged.

use std::fmt;
use std::io::Write;
use std::sync::Arc;

use futures::StreamExt;
use tracing::debug;

use crate::llm_client::{ChatModel, LlmError, TextStream};

pub const DEFAULT_AVATAR: &str = "default_avatar.png";

/// Result of `get_response`: the full text, or a lazy stream of chunks.
pub enum AgentResponse {
    Text(String),
    Stream(TextStream),
}

impl AgentResponse {
    /// Returns the full text, draining the stream if necessary.
    pub async fn into_text(self) -> Result<String, LlmError> {
        match self {
            AgentResponse::Text(text) => Ok(text),
            AgentResponse::Stream(mut stream) => {
                let mut text = String::new();
                while let Some(chunk) = stream.next().await {
                    text.push_str(&chunk?);
                }
                Ok(text)
            }
        }
    }
}

impl fmt::Debug for AgentResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AgentResponse::Text(text) => f.debug_tuple("Text").field(text).finish(),
            AgentResponse::Stream(_) => f.write_str("Stream(..)"),
        }
    }
}

/// An agent identity plus the model it queries.
#[derive(Clone)]
pub struct BaseAgent {
    name: String,
    description: String,
    avatar: String,
    model: Arc<dyn ChatModel>,
}

impl BaseAgent {
    /// `avatar` falls back to `DEFAULT_AVATAR` when `None`.
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        avatar: Option<String>,
        model: Arc<dyn ChatModel>,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            avatar: avatar.unwrap_or_else(|| DEFAULT_AVATAR.to_string()),
            model,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn avatar(&self) -> &str {
        &self.avatar
    }

    /// Sends `query` to the model as-is.
    pub async fn get_response(&self, query: &str, stream: bool) -> Result<AgentResponse, LlmError> {
        debug!(
            "{} querying {} (stream={}, prompt_chars={})",
            self.name,
            self.model.model_id(),
            stream,
            query.len()
        );

        if stream {
            self.model.stream(query).await.map(AgentResponse::Stream)
        } else {
            self.model.complete(query).await.map(AgentResponse::Text)
        }
    }

    /// Prints the model's answer to stdout.
    pub async fn print_response(&self, query: &str, stream: bool) -> Result<(), LlmError> {
        let mut stdout = std::io::stdout();
        self.print_response_to(&mut stdout, query, stream).await
    }

    /// Writes the model's answer to `out`. Streamed chunks are flushed as they arrive.
    pub async fn print_response_to<W>(
        &self,
        out: &mut W,
        query: &str,
        stream: bool,
    ) -> Result<(), LlmError>
    where
        W: Write + Send,
    {
        match self.get_response(query, stream).await? {
            AgentResponse::Text(text) => writeln!(out, "{text}")?,
            AgentResponse::Stream(mut chunks) => {
                while let Some(chunk) = chunks.next().await {
                    write!(out, "{}", chunk?)?;
                    out.flush()?;
                }
                writeln!(out)?;
            }
        }
        Ok(())
    }
}

impl fmt::Debug for BaseAgent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BaseAgent")
            .field("name", &self.name)
            .field("description", &self.description)
            .field("avatar", &self.avatar)
            .field("model", &self.model.model_id())
            .finish()
    }
}
