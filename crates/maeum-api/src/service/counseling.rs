//! Counseling service
//!
//! Orchestrates one request: input validation, the completion call, keyword
//! analysis of the user's own text, and response assembly.

use std::sync::Arc;

use maeum::{
  analyze_emotion, counseling_prompt, detect_crisis, fallback_reply, recommendations,
  support_prompt,
};
use tracing::{debug, info, warn};

use super::completion::CompletionClient;
use crate::config::MAX_TEXT_LENGTH;
use crate::errors::{ApiError, Result};
use crate::models::{ChatRequest, ChatResponse, CounselingRequest, CounselingResponse};

/// Accepted range of `CounselingRequest::intensity`
pub const INTENSITY_RANGE: std::ops::RangeInclusive<i32> = 1..=5;

/// Request orchestration shared by the HTTP handlers
#[derive(Clone)]
pub struct CounselingService {
  client: Arc<dyn CompletionClient>,
}

impl CounselingService {
  /// Creates the service
  ///
  /// - Production: `Arc::new(OpenRouterClient::new(config.completion)?)`
  /// - Test: any stub implementing [`CompletionClient`]
  #[must_use]
  pub fn new(client: Arc<dyn CompletionClient>) -> Self {
    Self { client }
  }

  /// Structured counseling
  ///
  /// # Errors
  /// - `intensity` outside 1-5, or `concern` longer than [`MAX_TEXT_LENGTH`]
  /// - Any completion failure (no fallback on this path)
  pub async fn counsel(&self, request: CounselingRequest) -> Result<CounselingResponse> {
    check_text_length(&request.concern)?;
    if !INTENSITY_RANGE.contains(&request.intensity) {
      return Err(ApiError::invalid_input(format!(
        "intensity must be between 1 and 5: {}",
        request.intensity
      )));
    }

    let messages = counseling_prompt(&request.emotions, request.intensity, &request.concern);
    let response = self.client.complete(&messages).await?;

    let emotion_analysis = analyze_emotion(&request.concern);
    let crisis = detect_crisis(&request.concern);

    info!(
      crisis_level = %crisis.level,
      dominant_emotion = ?emotion_analysis.dominant(),
      "counseling response ready"
    );

    Ok(CounselingResponse {
      response,
      emotion_analysis,
      crisis_detected: crisis.detected,
      crisis_level: crisis.level,
      recommendations: recommendations(crisis.detected).iter().map(|r| (*r).to_string()).collect(),
    })
  }

  /// Realtime chat
  ///
  /// Never fails: completion errors are absorbed and the reply falls back to
  /// a canned message chosen by the declared emotion. Crisis detection always
  /// runs on the user's message.
  pub async fn chat(&self, request: ChatRequest) -> ChatResponse {
    let emotion = request.emotion.as_deref().filter(|e| !e.is_empty());
    debug!(emotion = ?emotion, "chat request received");

    let response = match self.client.complete(&support_prompt(emotion)).await {
      Ok(reply) => reply,
      Err(e) => {
        let reply = fallback_reply(emotion, &mut rand::thread_rng());
        warn!(error = %e, emotion = ?emotion, "completion failed, using fallback reply");
        reply.to_string()
      }
    };

    let crisis = detect_crisis(&request.message);
    info!(
      crisis_detected = crisis.detected,
      crisis_level = %crisis.level,
      suicide_risk = crisis.suicide_risk,
      "chat response ready"
    );

    ChatResponse {
      response,
      crisis_detected: crisis.detected,
      suicide_risk: crisis.suicide_risk,
      crisis_level: crisis.level,
    }
  }
}

fn check_text_length(text: &str) -> Result<()> {
  if text.len() > MAX_TEXT_LENGTH {
    return Err(ApiError::text_too_long(text.len(), MAX_TEXT_LENGTH));
  }
  Ok(())
}
