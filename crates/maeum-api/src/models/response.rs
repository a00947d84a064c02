//! Response Model Definition

use maeum::{CrisisLevel, EmotionScores};
use serde::Serialize;

/// `GET /` body
#[derive(Debug, Clone, Serialize)]
pub struct RootResponse {
  /// Liveness message
  pub message: &'static str,
}

/// Structured counseling response
#[derive(Debug, Clone, Serialize)]
pub struct CounselingResponse {
  /// Model reply
  pub response: String,
  /// Keyword emotion distribution of the concern
  pub emotion_analysis: EmotionScores,
  /// Crisis language found in the concern
  pub crisis_detected: bool,
  /// Crisis tier of the concern
  pub crisis_level: CrisisLevel,
  /// Three follow-up suggestions
  pub recommendations: Vec<String>,
}

/// Realtime chat response
#[derive(Debug, Clone, Serialize)]
pub struct ChatResponse {
  /// Model reply, or a canned reply if the model was unavailable
  pub response: String,
  /// Crisis language found in the user message
  pub crisis_detected: bool,
  /// Suicide-risk language found in the user message
  pub suicide_risk: bool,
  /// Crisis tier of the user message
  pub crisis_level: CrisisLevel,
}
