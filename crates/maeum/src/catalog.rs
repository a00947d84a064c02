//! Static reference catalogs served verbatim by the API

use serde::Serialize;

/// Selectable emotion shown in the client's emotion picker
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct EmotionLabel {
  /// Emoji shown on the button
  pub emoji: &'static str,
  /// Korean display name
  pub name: &'static str,
  /// Emotion code sent back in chat requests
  pub value: &'static str,
}

/// Crisis hotline
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CrisisResource {
  /// Organization name
  pub name: &'static str,
  /// Phone number
  pub phone: &'static str,
  /// Short description of the service
  pub description: &'static str,
}

const fn label(emoji: &'static str, name: &'static str, value: &'static str) -> EmotionLabel {
  EmotionLabel { emoji, name, value }
}

/// Emotions offered to users
pub static EMOTION_CATALOG: [EmotionLabel; 10] = [
  label("😢", "슬픔", "sad"),
  label("😡", "화남", "angry"),
  label("😰", "불안", "anxious"),
  label("😊", "기쁨", "happy"),
  label("😨", "두려움", "fearful"),
  label("😩", "스트레스", "stressed"),
  label("😴", "피곤함", "tired"),
  label("😕", "혼란", "confused"),
  label("🤗", "따뜻함", "warm"),
  label("😔", "우울함", "depressed"),
];

/// Korean hotlines shown on the crisis screen
pub static CRISIS_RESOURCES: [CrisisResource; 4] = [
  CrisisResource {
    name: "생명의전화",
    phone: "1393",
    description: "24시간 자살예방 상담",
  },
  CrisisResource {
    name: "정신건강위기상담전화",
    phone: "1577-0199",
    description: "24시간 정신건강 위기상담",
  },
  CrisisResource {
    name: "청소년전화",
    phone: "1388",
    description: "청소년 상담 전화",
  },
  CrisisResource {
    name: "한국자살예방협회",
    phone: "02-413-0892",
    description: "자살예방 상담 및 교육",
  },
];

/// Korean name of an emotion code as phrased in chat prompts
///
/// This is a separate vocabulary from [`EMOTION_CATALOG`]: it also knows
/// `lonely`, and uses 피곤 rather than 피곤함.
#[must_use]
pub fn emotion_display_name(code: &str) -> Option<&'static str> {
  let name = match code {
    "happy" => "기쁨",
    "sad" => "슬픔",
    "angry" => "화남",
    "anxious" => "불안",
    "stressed" => "스트레스",
    "tired" => "피곤",
    "confused" => "혼란",
    "lonely" => "외로움",
    _ => return None,
  };
  Some(name)
}
