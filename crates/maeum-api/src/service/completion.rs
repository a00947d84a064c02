//! Chat-completion client

use async_trait::async_trait;
use maeum::Message;
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use tracing::{debug, error, info};

use crate::config::CompletionConfig;
use crate::errors::{ApiError, CompletionError};

/// Seam between request handling and the external model
///
/// Production uses [`OpenRouterClient`]; tests inject stubs.
#[async_trait]
pub trait CompletionClient: Send + Sync {
  /// Sends `messages` and returns the trimmed text of the first choice
  ///
  /// # Errors
  /// See [`CompletionError`]. Implementations never retry.
  async fn complete(&self, messages: &[Message]) -> Result<String, CompletionError>;
}

/// OpenAI-compatible `/chat/completions` client (OpenRouter by default)
#[derive(Clone)]
pub struct OpenRouterClient {
  http: reqwest::Client,
  endpoint: String,
  config: CompletionConfig,
}

#[derive(Serialize)]
struct CompletionRequest<'a> {
  model: &'a str,
  messages: &'a [Message],
  max_tokens: u32,
  temperature: f32,
  stream: bool,
}

#[derive(Deserialize)]
struct CompletionResponse {
  #[serde(default)]
  choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
  message: Option<ChoiceMessage>,
}

#[derive(Deserialize)]
struct ChoiceMessage {
  content: Option<String>,
}

impl OpenRouterClient {
  /// Builds the client
  ///
  /// # Errors
  /// Returns a config error if the HTTP client cannot be constructed
  pub fn new(config: CompletionConfig) -> crate::errors::Result<Self> {
    let http = reqwest::Client::builder()
      .timeout(config.timeout)
      .build()
      .map_err(|e| ApiError::config(format!("failed to build HTTP client: {e}")))?;

    let endpoint = format!("{}/chat/completions", config.base_url);

    Ok(Self {
      http,
      endpoint,
      config,
    })
  }

  /// Full URL requests are sent to
  #[must_use]
  pub fn endpoint(&self) -> &str {
    &self.endpoint
  }

  fn extract_reply(body: &str) -> Result<String, CompletionError> {
    let parsed: CompletionResponse = serde_json::from_str(body)
      .map_err(|e| CompletionError::MalformedResponse(format!("invalid JSON: {e}")))?;

    let choice = parsed
      .choices
      .into_iter()
      .next()
      .ok_or_else(|| CompletionError::MalformedResponse("response has no choices".to_string()))?;

    choice
      .message
      .and_then(|m| m.content)
      .map(|content| content.trim().to_string())
      .ok_or_else(|| CompletionError::MalformedResponse("first choice has no content".to_string()))
  }
}

#[async_trait]
impl CompletionClient for OpenRouterClient {
  async fn complete(&self, messages: &[Message]) -> Result<String, CompletionError> {
    let request = CompletionRequest {
      model: &self.config.model,
      messages,
      max_tokens: self.config.max_tokens,
      temperature: self.config.temperature,
      stream: false,
    };

    debug!(
      model = %self.config.model,
      message_count = messages.len(),
      "sending completion request"
    );

    let response = self
      .http
      .post(&self.endpoint)
      .bearer_auth(&self.config.api_key)
      .header("HTTP-Referer", self.config.referer.as_str())
      .header("X-Title", self.config.title.as_str())
      .json(&request)
      .send()
      .await
      .map_err(|e| {
        error!(error = %e, "completion request failed");
        CompletionError::from_reqwest(&e)
      })?;

    let status = response.status();
    info!(status = status.as_u16(), "completion API responded");

    if status != StatusCode::OK {
      let body = response.text().await.unwrap_or_default();
      error!(status = status.as_u16(), body = %body, "completion API returned an error");
      return Err(CompletionError::Upstream {
        status: status.as_u16(),
        body,
      });
    }

    let body = response.text().await.map_err(|e| CompletionError::from_reqwest(&e))?;

    Self::extract_reply(&body).inspect_err(|e| error!(error = %e, "unusable completion response"))
  }
}
