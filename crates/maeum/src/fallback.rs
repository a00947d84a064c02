//! Pre-written replies used when the completion API is unavailable

use rand::Rng;
use rand::seq::SliceRandom;

/// Replies for users who declared `sad`
pub const SAD_REPLIES: &[&str] = &[
  "마음이 많이 아프시겠어요. 슬픈 마음을 혼자 견디기 어려우셨을 거예요.",
  "힘든 감정을 표현해주셔서 고맙습니다. 천천히 이야기해주세요.",
];

/// Replies for users who declared `angry`
pub const ANGRY_REPLIES: &[&str] = &[
  "화가 나는 상황이셨군요. 그런 기분이 충분히 이해됩니다.",
  "분노는 자연스러운 감정이에요. 무엇이 가장 속상하셨나요?",
];

/// Replies for users who declared `anxious`
pub const ANXIOUS_REPLIES: &[&str] = &[
  "불안한 마음이 많이 힘드시겠어요. 어떤 것이 가장 걱정되시나요?",
  "불안감을 느끼고 계시는군요. 함께 차근차근 이야기해봐요.",
];

/// Replies for users who declared `stressed`
pub const STRESSED_REPLIES: &[&str] = &[
  "스트레스가 많이 쌓이셨나봐요. 어떤 일들이 부담되시나요?",
  "힘든 시간을 보내고 계시는군요. 무엇이 가장 스트레스가 되시나요?",
];

/// Replies for users who declared `lonely`
pub const LONELY_REPLIES: &[&str] = &[
  "외로운 마음이 많이 힘드시겠어요. 혼자라는 느낌이 든다는 게 얼마나 어려운지 알아요.",
  "외로움을 느끼고 계시는군요. 지금 어떤 기분인지 더 들려주세요.",
];

/// Replies when no emotion-specific list applies
pub const GENERIC_REPLIES: &[&str] = &[
  "안녕하세요! 힘든 마음을 표현해주셔서 고맙습니다. 좀 더 자세히 들려주세요.",
  "그런 기분이 드시는군요. 언제부터 그런 느낌이 있으셨나요?",
  "충분히 이해할 수 있는 마음이에요. 혼자 견디기 어려우셨을 거예요.",
  "지금 마음이 많이 힘드시겠어요. 어떤 것이 가장 걱정되시나요?",
  "천천히 말씀해주세요. 제가 들어드리겠습니다.",
];

/// Emotion-specific reply list, if the code has one
#[must_use]
pub fn replies_for(emotion: &str) -> Option<&'static [&'static str]> {
  match emotion {
    "sad" => Some(SAD_REPLIES),
    "angry" => Some(ANGRY_REPLIES),
    "anxious" => Some(ANXIOUS_REPLIES),
    "stressed" => Some(STRESSED_REPLIES),
    "lonely" => Some(LONELY_REPLIES),
    _ => None,
  }
}

/// Picks a fallback reply uniformly at random
///
/// Draws from the declared emotion's list when one exists, otherwise from
/// [`GENERIC_REPLIES`].
pub fn fallback_reply<R: Rng + ?Sized>(emotion: Option<&str>, rng: &mut R) -> &'static str {
  let pool = emotion.and_then(replies_for).unwrap_or(GENERIC_REPLIES);
  pool.choose(rng).copied().unwrap_or(GENERIC_REPLIES[0])
}
