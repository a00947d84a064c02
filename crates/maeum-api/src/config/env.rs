//! Config loading from environment variables

use std::time::Duration;

use axum::http::HeaderValue;

use super::constants::{
  APP_REFERER, APP_TITLE, COMPLETION_MAX_TOKENS, COMPLETION_TEMPERATURE, COMPLETION_TIMEOUT,
  DEFAULT_ALLOWED_ORIGINS, DEFAULT_BIND_ADDR, DEFAULT_COMPLETION_BASE_URL,
  DEFAULT_COMPLETION_MODEL,
};
use crate::errors::ApiError;

/// Chat-completion client settings
#[derive(Clone)]
pub struct CompletionConfig {
  /// Bearer credential
  pub api_key: String,
  /// API base URL without the `/chat/completions` suffix
  pub base_url: String,
  /// Model identifier
  pub model: String,
  /// `max_tokens` request parameter
  pub max_tokens: u32,
  /// `temperature` request parameter
  pub temperature: f32,
  /// Whole-request timeout
  pub timeout: Duration,
  /// `HTTP-Referer` header value
  pub referer: String,
  /// `X-Title` header value
  pub title: String,
}

impl CompletionConfig {
  /// Settings with every field but the key at its default
  #[must_use]
  pub fn new(api_key: impl Into<String>) -> Self {
    Self {
      api_key: api_key.into(),
      base_url: DEFAULT_COMPLETION_BASE_URL.to_string(),
      model: DEFAULT_COMPLETION_MODEL.to_string(),
      max_tokens: COMPLETION_MAX_TOKENS,
      temperature: COMPLETION_TEMPERATURE,
      timeout: COMPLETION_TIMEOUT,
      referer: APP_REFERER.to_string(),
      title: APP_TITLE.to_string(),
    }
  }

  /// Overrides the base URL (trailing `/` is dropped)
  #[must_use]
  pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
    self.base_url = base_url.into().trim_end_matches('/').to_string();
    self
  }

  /// Overrides the model
  #[must_use]
  pub fn with_model(mut self, model: impl Into<String>) -> Self {
    self.model = model.into();
    self
  }

  /// Overrides the timeout
  #[must_use]
  pub fn with_timeout(mut self, timeout: Duration) -> Self {
    self.timeout = timeout;
    self
  }
}

// The key must never reach the logs
impl std::fmt::Debug for CompletionConfig {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("CompletionConfig")
      .field("api_key", &"<redacted>")
      .field("base_url", &self.base_url)
      .field("model", &self.model)
      .field("max_tokens", &self.max_tokens)
      .field("temperature", &self.temperature)
      .field("timeout", &self.timeout)
      .finish_non_exhaustive()
  }
}

/// API Server Configuration
#[derive(Debug, Clone)]
pub struct Config {
  /// Bind address (e.g. "0.0.0.0:8000")
  pub bind_addr: String,
  /// Origins allowed by CORS
  pub allowed_origins: Vec<HeaderValue>,
  /// Completion client settings
  pub completion: CompletionConfig,
}

impl Config {
  /// Loads configuration from environment variables
  ///
  /// | Variable | Default |
  /// |---|---|
  /// | `OPENROUTER_API_KEY` | required |
  /// | `OPENROUTER_BASE_URL` | [`DEFAULT_COMPLETION_BASE_URL`] |
  /// | `OPENROUTER_MODEL` | [`DEFAULT_COMPLETION_MODEL`] |
  /// | `MAEUM_BIND_ADDR` | [`DEFAULT_BIND_ADDR`] |
  /// | `ALLOWED_ORIGINS` | none (comma-separated, appended) |
  ///
  /// # Errors
  /// Returns a config error if the API key is missing or an origin is not a
  /// valid header value
  pub fn from_env() -> crate::errors::Result<Self> {
    Self::from_lookup(|key| std::env::var(key).ok())
  }

  /// Loads configuration through an arbitrary variable lookup
  ///
  /// Lets tests supply variables without mutating the process environment.
  ///
  /// # Errors
  /// Same as [`Config::from_env`]
  pub fn from_lookup<F>(lookup: F) -> crate::errors::Result<Self>
  where
    F: Fn(&str) -> Option<String>,
  {
    let non_empty = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

    let api_key = non_empty("OPENROUTER_API_KEY")
      .ok_or_else(|| ApiError::config("OPENROUTER_API_KEY is not set"))?;

    let mut completion = CompletionConfig::new(api_key);
    if let Some(base_url) = non_empty("OPENROUTER_BASE_URL") {
      completion = completion.with_base_url(base_url);
    }
    if let Some(model) = non_empty("OPENROUTER_MODEL") {
      completion = completion.with_model(model);
    }

    let bind_addr = non_empty("MAEUM_BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());

    let extra_origins = non_empty("ALLOWED_ORIGINS").unwrap_or_default();
    let allowed_origins = parse_origins(&extra_origins)?;

    Ok(Self {
      bind_addr,
      allowed_origins,
      completion,
    })
  }
}

/// Default origins followed by the comma-separated `extra` list
///
/// Blank items are skipped and duplicates dropped.
fn parse_origins(extra: &str) -> crate::errors::Result<Vec<HeaderValue>> {
  let mut origins: Vec<HeaderValue> = Vec::new();

  let candidates = DEFAULT_ALLOWED_ORIGINS
    .iter()
    .copied()
    .chain(extra.split(',').map(str::trim).filter(|s| !s.is_empty()));

  for origin in candidates {
    let value = HeaderValue::from_str(origin)
      .map_err(|e| ApiError::config(format!("invalid origin {origin:?}: {e}")))?;
    if !origins.contains(&value) {
      origins.push(value);
    }
  }

  Ok(origins)
}
