//! Chat-completion client for OpenAI-compatible providers (Groq by default).

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;

use super::response::GenerationOutput;
use crate::config::LlmSettings;

/// Base delay for retry backoff; doubles with each attempt
const BACKOFF_BASE_MS: u64 = 200;

#[derive(Debug, Error)]
pub enum LlmError {
    #[error("request to chat-completion API failed: {0}")]
    Transport(String),

    #[error("chat-completion API returned {status}: {body}")]
    Status { status: u16, body: String },

    #[error("chat-completion API returned no content")]
    EmptyResponse,

    #[error("failed to decode chat-completion response: {0}")]
    Decode(String),
}

impl LlmError {
    /// Transport failures, rate limits and server errors are worth another try.
    pub fn is_retryable(&self) -> bool {
        match self {
            LlmError::Transport(_) => true,
            LlmError::Status { status, .. } => *status == 429 || *status >= 500,
            LlmError::EmptyResponse | LlmError::Decode(_) => false,
        }
    }
}

/// One generation call: a system instruction plus a user prompt.
#[derive(Debug, Clone, PartialEq)]
pub struct CompletionRequest {
    pub model: String,
    pub system: String,
    pub user: String,
}

impl CompletionRequest {
    pub fn new(model: &str, system: &str, user: String) -> Self {
        Self {
            model: model.to_string(),
            system: system.to_string(),
            user,
        }
    }
}

/// The seam between the service and whatever produces text.
#[async_trait]
pub trait ChatBackend: Send + Sync {
    async fn complete(&self, request: CompletionRequest) -> Result<GenerationOutput, LlmError>;
}

#[derive(Serialize)]
struct WireMessage<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Serialize)]
struct WireRequest<'a> {
    model: &'a str,
    messages: [WireMessage<'a>; 2],
    temperature: f32,
    max_completion_tokens: u32,
    top_p: f32,
    stream: bool,
}

#[derive(Deserialize)]
struct WireResponse {
    choices: Vec<WireChoice>,
}

#[derive(Deserialize)]
struct WireChoice {
    message: WireChoiceMessage,
}

#[derive(Deserialize)]
struct WireChoiceMessage {
    content: Option<String>,
}

/// Groq (or any OpenAI-compatible) chat-completion client.
pub struct GroqClient {
    http: reqwest::Client,
    endpoint: String,
    api_key: String,
    temperature: f32,
    max_completion_tokens: u32,
    top_p: f32,
    max_retries: u32,
}

impl GroqClient {
    pub fn new(settings: &LlmSettings) -> Result<Self, LlmError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(settings.request_timeout_secs))
            .build()
            .map_err(|e| LlmError::Transport(format!("failed to build HTTP client: {}", e)))?;

        Ok(Self {
            http,
            endpoint: format!("{}/chat/completions", settings.base_url),
            api_key: settings.api_key.clone(),
            temperature: settings.temperature,
            max_completion_tokens: settings.max_completion_tokens,
            top_p: settings.top_p,
            max_retries: settings.max_retries,
        })
    }

    async fn attempt(&self, request: &CompletionRequest) -> Result<GenerationOutput, LlmError> {
        let body = WireRequest {
            model: &request.model,
            messages: [
                WireMessage {
                    role: "system",
                    content: &request.system,
                },
                WireMessage {
                    role: "user",
                    content: &request.user,
                },
            ],
            temperature: self.temperature,
            max_completion_tokens: self.max_completion_tokens,
            top_p: self.top_p,
            stream: false,
        };

        let response = self
            .http
            .post(&self.endpoint)
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| LlmError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(LlmError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let parsed: WireResponse = response
            .json()
            .await
            .map_err(|e| LlmError::Decode(e.to_string()))?;

        let content = parsed
            .choices
            .into_iter()
            .next()
            .and_then(|c| c.message.content)
            .filter(|c| !c.trim().is_empty())
            .ok_or(LlmError::EmptyResponse)?;

        Ok(GenerationOutput::from_message(&content))
    }
}

#[async_trait]
impl ChatBackend for GroqClient {
    async fn complete(&self, request: CompletionRequest) -> Result<GenerationOutput, LlmError> {
        let mut attempt = 0;
        loop {
            tracing::debug!(
                "Chat completion (model={}, attempt={}, prompt_chars={})",
                request.model,
                attempt + 1,
                request.user.len()
            );

            match self.attempt(&request).await {
                Ok(output) => return Ok(output),
                Err(e) if e.is_retryable() && attempt < self.max_retries => {
                    let delay = backoff_delay(attempt);
                    tracing::warn!(
                        "Chat completion failed ({}), retrying in {}ms",
                        e,
                        delay.as_millis()
                    );
                    tokio::time::sleep(delay).await;
                    attempt += 1;
                }
                Err(e) => return Err(e),
            }
        }
    }
}

/// Exponential backoff: 200ms, 400ms, 800ms, ...
pub fn backoff_delay(attempt: u32) -> Duration {
    Duration::from_millis(BACKOFF_BASE_MS << attempt.min(10))
}
