//! Stub chat models for agent tests.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use futures::stream;

use crate::llm_client::{ChatModel, LlmError, TextStream};

/// Records every prompt and answers with a fixed reply. Streams the reply
/// word by word.
pub struct RecordingModel {
    reply: String,
    prompts: Mutex<Vec<String>>,
}

impl RecordingModel {
    pub fn replying(reply: &str) -> Arc<Self> {
        Arc::new(Self {
            reply: reply.to_string(),
            prompts: Mutex::new(Vec::new()),
        })
    }

    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }

    pub fn last_prompt(&self) -> String {
        self.prompts().pop().expect("no prompt was recorded")
    }

    fn record(&self, prompt: &str) {
        self.prompts.lock().unwrap().push(prompt.to_string());
    }
}

#[async_trait]
impl ChatModel for RecordingModel {
    fn model_id(&self) -> &str {
        "recording-stub"
    }

    async fn complete(&self, prompt: &str) -> Result<String, LlmError> {
        self.record(prompt);
        Ok(self.reply.clone())
    }

    async fn stream(&self, prompt: &str) -> Result<TextStream, LlmError> {
        self.record(prompt);
        let chunks: Vec<Result<String, LlmError>> = self
            .reply
            .split_inclusive(' ')
            .map(|c| Ok(c.to_string()))
            .collect();
        Ok(Box::pin(stream::iter(chunks)))
    }
}

/// Always fails the way a rejected API key does.
pub struct FailingModel;

fn unauthorized() -> LlmError {
    LlmError::Api {
        status: 401,
        message: "Invalid API Key".to_string(),
    }
}

#[async_trait]
impl ChatModel for FailingModel {
    fn model_id(&self) -> &str {
        "failing-stub"
    }

    async fn complete(&self, _prompt: &str) -> Result<String, LlmError> {
        Err(unauthorized())
    }

    async fn stream(&self, _prompt: &str) -> Result<TextStream, LlmError> {
        Err(unauthorized())
    }
}
