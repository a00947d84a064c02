//! API 에러 정의

use axum::{
  Json,
  http::StatusCode,
  response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

/// Failure of a single chat-completion call
///
/// Never retried. The counseling endpoint propagates it, the realtime chat
/// endpoint replaces it with a fallback reply.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[non_exhaustive]
pub enum CompletionError {
  /// The API answered with a status other than 200
  #[error("completion API returned {status}: {body}")]
  Upstream {
    /// HTTP status code
    status: u16,
    /// Raw response body
    body: String,
  },

  /// The request did not finish within the configured timeout
  #[error("completion API timed out")]
  Timeout,

  /// A 200 response without a usable first choice
  #[error("malformed completion response: {0}")]
  MalformedResponse(String),

  /// The request never produced a response (DNS, connect, TLS, ...)
  #[error("completion API unreachable: {0}")]
  Transport(String),
}

impl CompletionError {
  /// Classifies a reqwest error
  #[must_use]
  pub fn from_reqwest(err: &reqwest::Error) -> Self {
    if err.is_timeout() {
      Self::Timeout
    } else if err.is_decode() {
      Self::MalformedResponse(err.to_string())
    } else {
      Self::Transport(err.to_string())
    }
  }
}

/// 에러 종류
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiErrorKind {
  /// 입력값이 유효하지 않음
  InvalidInput,
  /// 텍스트가 너무 김
  TextTooLong,
  /// Completion API answered with an error status
  Upstream,
  /// Completion API timed out
  UpstreamTimeout,
  /// Completion API answer could not be used
  MalformedResponse,
  /// Completion API could not be reached
  UpstreamUnavailable,
  /// 내부 에러
  Internal,
  /// 설정 에러
  Config,
}

impl ApiErrorKind {
  /// 에러 코드
  #[must_use]
  pub fn code(&self) -> &'static str {
    match self {
      Self::InvalidInput => "invalid_input",
      Self::TextTooLong => "text_too_long",
      Self::Upstream => "upstream_error",
      Self::UpstreamTimeout => "upstream_timeout",
      Self::MalformedResponse => "malformed_response",
      Self::UpstreamUnavailable => "upstream_unavailable",
      Self::Internal => "internal_error",
      Self::Config => "config_error",
    }
  }

  /// HTTP 상태 코드
  ///
  /// Every completion failure surfaces as a plain 500.
  #[must_use]
  pub fn status(&self) -> StatusCode {
    match self {
      Self::InvalidInput | Self::TextTooLong => StatusCode::BAD_REQUEST,
      Self::Upstream
      | Self::UpstreamTimeout
      | Self::MalformedResponse
      | Self::UpstreamUnavailable
      | Self::Internal
      | Self::Config => StatusCode::INTERNAL_SERVER_ERROR,
    }
  }
}

/// API 에러
#[derive(Debug, Error)]
pub enum ApiError {
  /// 입력값이 유효하지 않음
  #[error("입력값이 유효하지 않습니다: {0}")]
  InvalidInput(String),

  /// 텍스트가 너무 김
  #[error("텍스트가 너무 깁니다: {0} 바이트 (최대: {1} 바이트)")]
  TextTooLong(usize, usize),

  /// AI 응답 생성 실패
  #[error("AI 응답 생성 실패: {0}")]
  Completion(#[from] CompletionError),

  /// 내부 에러
  #[error("내부 에러: {0}")]
  Internal(String),

  /// 설정 에러
  #[error("설정 에러: {0}")]
  Config(String),
}

impl ApiError {
  /// 에러 종류
  #[must_use]
  pub fn kind(&self) -> ApiErrorKind {
    match self {
      Self::InvalidInput(_) => ApiErrorKind::InvalidInput,
      Self::TextTooLong(_, _) => ApiErrorKind::TextTooLong,
      Self::Completion(CompletionError::Upstream { .. }) => ApiErrorKind::Upstream,
      Self::Completion(CompletionError::Timeout) => ApiErrorKind::UpstreamTimeout,
      Self::Completion(CompletionError::MalformedResponse(_)) => ApiErrorKind::MalformedResponse,
      Self::Completion(CompletionError::Transport(_)) => ApiErrorKind::UpstreamUnavailable,
      Self::Internal(_) => ApiErrorKind::Internal,
      Self::Config(_) => ApiErrorKind::Config,
    }
  }

  /// 에러 코드
  #[must_use]
  pub fn code(&self) -> &'static str {
    self.kind().code()
  }

  /// HTTP 상태 코드
  #[must_use]
  pub fn status(&self) -> StatusCode {
    self.kind().status()
  }

  /// 입력 에러 생성
  #[must_use]
  pub fn invalid_input(message: impl Into<String>) -> Self {
    Self::InvalidInput(message.into())
  }

  /// 텍스트 길이 초과 에러 생성
  #[must_use]
  pub fn text_too_long(actual: usize, max: usize) -> Self {
    Self::TextTooLong(actual, max)
  }

  /// 내부 에러 생성
  #[must_use]
  pub fn internal(message: impl Into<String>) -> Self {
    Self::Internal(message.into())
  }

  /// 설정 에러 생성
  #[must_use]
  pub fn config(message: impl Into<String>) -> Self {
    Self::Config(message.into())
  }
}

/// 에러 응답 JSON 구조
///
/// `detail` mirrors `error.message` for clients that only read `detail`.
#[derive(Serialize)]
struct ErrorResponse {
  detail: String,
  error: ErrorBody,
}

#[derive(Serialize)]
struct ErrorBody {
  code: &'static str,
  message: String,
}

impl IntoResponse for ApiError {
  fn into_response(self) -> Response {
    let status = self.status();
    let message = self.to_string();
    let body = ErrorResponse {
      detail: message.clone(),
      error: ErrorBody {
        code: self.code(),
        message,
      },
    };

    (status, Json(body)).into_response()
  }
}

/// Result 타입 별칭
pub type Result<T> = std::result::Result<T, ApiError>;
