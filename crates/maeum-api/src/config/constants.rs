//! API 설정 상수

use std::time::Duration;

/// Maximum length of `concern` in bytes (10MB)
pub const MAX_TEXT_LENGTH: usize = 10_000_000;

/// Default bind address
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8000";

/// Default chat-completion API base URL (OpenRouter)
pub const DEFAULT_COMPLETION_BASE_URL: &str = "https://openrouter.ai/api/v1";

/// Default completion model
pub const DEFAULT_COMPLETION_MODEL: &str = "openai/gpt-3.5-turbo";

/// `max_tokens` sent with every completion request
pub const COMPLETION_MAX_TOKENS: u32 = 200;

/// `temperature` sent with every completion request
pub const COMPLETION_TEMPERATURE: f32 = 0.7;

/// Upper bound for one completion call, including reading the body
pub const COMPLETION_TIMEOUT: Duration = Duration::from_secs(30);

/// `HTTP-Referer` header OpenRouter uses for app attribution
pub const APP_REFERER: &str = "http://localhost:3000";

/// `X-Title` header OpenRouter uses for app attribution
pub const APP_TITLE: &str = "AI Counseling App";

/// Origins always allowed by CORS
///
/// `ALLOWED_ORIGINS` appends to this list.
pub const DEFAULT_ALLOWED_ORIGINS: &[&str] =
  &["http://localhost:3000", "https://your-username.github.io"];
