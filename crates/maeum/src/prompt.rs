//! Chat-completion prompt construction

use serde::{Deserialize, Serialize};

use crate::catalog::emotion_display_name;

/// Author of a chat-completion message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
  /// Instructions to the model
  System,
  /// End user
  User,
  /// Model output
  Assistant,
}

/// One chat-completion message
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
  /// Author
  pub role: Role,
  /// Text content
  pub content: String,
}

impl Message {
  /// Creates a user-role message
  pub fn user(content: impl Into<String>) -> Self {
    Self {
      role: Role::User,
      content: content.into(),
    }
  }
}

/// Builds the prompt for the structured counseling endpoint
///
/// # Arguments
/// * `emotions` - Emotion names the user selected, in order
/// * `intensity` - Self-reported intensity on a 1-5 scale
/// * `concern` - Free-text description of the problem
#[must_use]
pub fn counseling_prompt(emotions: &[String], intensity: i32, concern: &str) -> Vec<Message> {
  vec![Message::user(format!(
    "현재 감정: {} (강도: {}/5)\n고민: {}",
    emotions.join(", "),
    intensity,
    concern
  ))]
}

/// Builds the prompt for the realtime chat endpoint
///
/// The user's text is not forwarded; the model only learns the
/// declared emotion. Unknown emotion codes are passed through as-is.
#[must_use]
pub fn support_prompt(emotion: Option<&str>) -> Vec<Message> {
  let context = emotion
    .map(|code| {
      let name = emotion_display_name(code).unwrap_or(code);
      format!("User is currently feeling {name}. ")
    })
    .unwrap_or_default();

  vec![Message::user(format!(
    "{context}User is expressing concerns and needs emotional support. \
     Please respond warmly and empathetically in Korean."
  ))]
}
