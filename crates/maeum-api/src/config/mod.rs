//! Config module

mod constants;
mod env;

pub use constants::{
  APP_REFERER, APP_TITLE, COMPLETION_MAX_TOKENS, COMPLETION_TEMPERATURE, COMPLETION_TIMEOUT,
  DEFAULT_ALLOWED_ORIGINS, DEFAULT_BIND_ADDR, DEFAULT_COMPLETION_BASE_URL,
  DEFAULT_COMPLETION_MODEL, MAX_TEXT_LENGTH,
};
pub use env::{CompletionConfig, Config};
