use std::{sync::Arc, time::Duration};

use async_openai::{config::OpenAIConfig, error::OpenAIError, Client};
use async_trait::async_trait;
use secrecy::ExposeSecret;
use serde_json::{json, Value};
use thiserror::Error;

use crate::{
    config::Config,
    constants::prompts::{quiz_prompt, summary_prompt, QUIZ_MAX_TOKENS, SUMMARY_MAX_TOKENS},
};

const INITIAL_BACKOFF: Duration = Duration::from_millis(500);
const MAX_BACKOFF: Duration = Duration::from_secs(8);

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum InferenceError {
    #[error("inference request timed out after {0:?}")]
    Timeout(Duration),

    #[error("transport error: {0}")]
    Transport(String),

    #[error("inference API error: {0}")]
    Api(String),
}

impl InferenceError {
    /// Whether the same request may succeed if sent again.
    pub fn is_transient(&self) -> bool {
        matches!(self, InferenceError::Timeout(_) | InferenceError::Transport(_))
    }
}

impl From<OpenAIError> for InferenceError {
    fn from(err: OpenAIError) -> Self {
        match err {
            OpenAIError::Reqwest(e) => InferenceError::Transport(e.to_string()),
            other => InferenceError::Api(other.to_string()),
        }
    }
}

/// A remote text-generation endpoint. The reply is returned as raw JSON;
/// turning it into display text is the response unwrapper's job.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait InferenceClient: Send + Sync {
    async fn generate(&self, prompt: &str, max_tokens: u32) -> Result<Value, InferenceError>;
}

/// Calls a Hugging Face model through the OpenAI-compatible router.
pub struct HuggingFaceClient {
    client: Client<OpenAIConfig>,
    model: String,
}

impl HuggingFaceClient {
    pub fn new(config: &Config) -> Self {
        let openai_config = OpenAIConfig::new()
            .with_api_base(config.hf_api_base.clone())
            .with_api_key(config.hf_api_key.expose_secret().to_string());

        Self {
            client: Client::with_config(openai_config),
            model: config.hf_model.clone(),
        }
    }

    pub fn model(&self) -> &str {
        &self.model
    }
}

#[async_trait]
impl InferenceClient for HuggingFaceClient {
    async fn generate(&self, prompt: &str, max_tokens: u32) -> Result<Value, InferenceError> {
        let request = json!({
            "model": self.model,
            "messages": [{ "role": "user", "content": prompt }],
            "max_tokens": max_tokens,
        });

        let response: Value = self.client.chat().create_byot(request).await?;
        Ok(response)
    }
}

/// Builds the summary and quiz prompts and sends them through an
/// [`InferenceClient`], applying a per-call timeout and bounded retries.
pub struct ModelService {
    client: Arc<dyn InferenceClient>,
    timeout: Duration,
    max_retries: u32,
    initial_backoff: Duration,
}

impl ModelService {
    pub fn new(client: Arc<dyn InferenceClient>, timeout: Duration, max_retries: u32) -> Self {
        Self {
            client,
            timeout,
            max_retries,
            initial_backoff: INITIAL_BACKOFF,
        }
    }

    pub fn with_initial_backoff(mut self, backoff: Duration) -> Self {
        self.initial_backoff = backoff;
        self
    }

    pub async fn summarize(&self, text: &str) -> Result<Value, InferenceError> {
        self.generate(&summary_prompt(text), SUMMARY_MAX_TOKENS).await
    }

    pub async fn quiz(&self, text: &str) -> Result<Value, InferenceError> {
        self.generate(&quiz_prompt(text), QUIZ_MAX_TOKENS).await
    }

    async fn generate(&self, prompt: &str, max_tokens: u32) -> Result<Value, InferenceError> {
        let mut attempt: u32 = 0;
        let mut backoff = self.initial_backoff;

        loop {
            let result =
                match tokio::time::timeout(self.timeout, self.client.generate(prompt, max_tokens))
                    .await
                {
                    Ok(result) => result,
                    Err(_) => Err(InferenceError::Timeout(self.timeout)),
                };

            match result {
                Err(e) if e.is_transient() && attempt < self.max_retries => {
                    attempt += 1;
                    log::warn!(
                        "Inference attempt {} of {} failed: {}; retrying in {:?}",
                        attempt,
                        self.max_retries + 1,
                        e,
                        backoff
                    );
                    tokio::time::sleep(backoff).await;
                    backoff = next_backoff(backoff);
                }
                other => return other,
            }
        }
    }
}

fn next_backoff(current: Duration) -> Duration {
    current.saturating_mul(2).min(MAX_BACKOFF)
}
