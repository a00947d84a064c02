//! Keyword tables
//!
//! Substrings matched against raw user text. Korean is agglutinative, so most
//! entries are verb/adjective stems ("슬프" matches 슬프다, 슬퍼서 is not
//! matched) rather than full words.

/// Sadness stems
pub const SADNESS_KEYWORDS: &[&str] = &["슬프", "우울", "눈물", "마음아프", "쓸쓸", "외로"];

/// Anger stems
pub const ANGER_KEYWORDS: &[&str] = &["화나", "짜증", "분노", "억울", "약오르", "열받"];

/// Anxiety stems
pub const ANXIETY_KEYWORDS: &[&str] = &["불안", "걱정", "긴장", "두려", "떨림", "초조"];

/// Happiness stems
pub const HAPPINESS_KEYWORDS: &[&str] = &["행복", "기쁘", "즐거", "웃음", "사랑", "감사"];

/// Fear stems
///
/// "두려" is shared with [`ANXIETY_KEYWORDS`] and counts toward both.
pub const FEAR_KEYWORDS: &[&str] = &["무서", "두려", "공포", "겁", "놀라", "위험"];

/// Stress stems
pub const STRESS_KEYWORDS: &[&str] = &["스트레스", "압박", "부담", "피곤", "지침", "힘들"];

/// General crisis keywords (weak distress signals)
///
/// Overlaps with [`SUICIDE_KEYWORDS`] on the first six entries.
pub const CRISIS_KEYWORDS: &[&str] = &[
  "자살",
  "죽고싶다",
  "자해",
  "죽음",
  "끝내고싶다",
  "살기싫다",
  "괴롭다",
  "혼자",
  "절망",
  "포기",
  "상처",
  "아프다",
  "견딜수없다",
  "힘들다",
];

/// High-severity self-harm keywords
///
/// Any match overrides general crisis scoring.
pub const SUICIDE_KEYWORDS: &[&str] = &[
  "자살",
  "죽고싶다",
  "자해",
  "죽음",
  "끝내고싶다",
  "살기싫다",
  "목매달",
  "뛰어내리",
  "자살하고싶",
  "죽어버리고싶",
];
