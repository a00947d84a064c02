//! 요청 모델 정의

use serde::Deserialize;

/// Structured counseling request (`POST /api/counseling/chat`)
#[derive(Debug, Clone, Deserialize)]
pub struct CounselingRequest {
  /// Free-text description of the problem
  pub concern: String,
  /// Emotion names the user selected
  pub emotions: Vec<String>,
  /// Self-reported intensity, 1-5
  pub intensity: i32,
}

/// Realtime chat request (`POST /api/chat`)
#[derive(Debug, Clone, Deserialize)]
pub struct ChatRequest {
  /// User message
  pub message: String,
  /// Earlier turns sent by the client
  ///
  /// Accepted for compatibility and never read.
  #[serde(default)]
  pub conversation_history: Option<Vec<serde_json::Value>>,
  /// Emotion code picked in the client (e.g. `"sad"`)
  #[serde(default)]
  pub emotion: Option<String>,
}
