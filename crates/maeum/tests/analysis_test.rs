//! crates/maeum/tests/analysis_test.rs
//!
//! Cross-module checks on the analyzer and detector using realistic user
//! messages: distribution invariants, crisis tiers and their interplay with
//! recommendations and fallback replies.

use rand::SeedableRng;
use rand::rngs::StdRng;

use maeum::fallback::{GENERIC_REPLIES, SAD_REPLIES};
use maeum::keywords::{CRISIS_KEYWORDS, SUICIDE_KEYWORDS};
use maeum::recommendation::{PROFESSIONAL_REFERRALS, SELF_CARE};
use maeum::{
  CRISIS_RESOURCES, CrisisLevel, EMOTION_CATALOG, EmotionCategory, analyze_emotion, detect_crisis,
  fallback_reply, recommendations,
};

const EPS: f64 = 1e-9;

/// Sample messages of varying emotional content
fn sample_messages() -> Vec<&'static str> {
  vec![
    "",
    "안녕하세요",
    "요즘 회사 때문에 스트레스가 심하고 피곤해요",
    "친구한테 화나고 억울해서 눈물이 났어요",
    "시험이 걱정되고 불안하고 무서워요",
    "가족과 함께해서 행복하고 감사한 하루였어요",
    "외로워서 슬프고 우울하고 마음아프다",
    "두려움과 공포, 압박감에 긴장돼서 떨림이 멈추지 않아요",
  ]
}

// ============================================================================
// Emotion distribution
// ============================================================================

#[test]
fn scores_are_zero_or_a_distribution() {
  for text in sample_messages() {
    let scores = analyze_emotion(text);
    let total = scores.total();

    assert!(
      total == 0.0 || (total - 1.0).abs() < EPS,
      "total={total} for {text:?}"
    );
    for category in EmotionCategory::ALL {
      let value = scores.get(category);
      assert!((0.0..=1.0).contains(&value), "{category}={value} for {text:?}");
    }
  }
}

#[test]
fn keyword_free_text_scores_zero() {
  for text in ["", "안녕하세요", "The weather is nice today", "12345"] {
    assert!(analyze_emotion(text).is_empty(), "{text:?}");
  }
}

#[test]
fn dominant_emotion_of_sample_messages() {
  assert_eq!(
    analyze_emotion("외로워서 슬프고 우울하고 마음아프다").dominant(),
    Some(EmotionCategory::Sadness)
  );
  assert_eq!(
    analyze_emotion("가족과 함께해서 행복하고 감사한 하루였어요").dominant(),
    Some(EmotionCategory::Happiness)
  );
}

// ============================================================================
// Crisis tiers
// ============================================================================

#[test]
fn every_suicide_keyword_is_critical() {
  for keyword in SUICIDE_KEYWORDS {
    let text = format!("저는 요즘 {keyword} 같은 생각을 해요. 그래도 행복하고 싶어요");
    let verdict = detect_crisis(&text);
    assert!(verdict.detected, "{keyword}");
    assert_eq!(verdict.level, CrisisLevel::Critical, "{keyword}");
    assert!(verdict.suicide_risk, "{keyword}");
  }
}

#[test]
fn every_non_suicide_crisis_keyword_alone_is_medium() {
  for keyword in CRISIS_KEYWORDS.iter().filter(|k| !SUICIDE_KEYWORDS.contains(*k)) {
    let verdict = detect_crisis(keyword);
    assert!(verdict.detected, "{keyword}");
    assert_eq!(verdict.level, CrisisLevel::Medium, "{keyword}");
    assert!(!verdict.suicide_risk, "{keyword}");
  }
}

#[test]
fn three_distinct_crisis_keywords_are_high() {
  let verdict = detect_crisis("모든 걸 포기하고 싶고 절망적이고 상처 받았어요");
  assert_eq!(verdict.level, CrisisLevel::High);
  assert!(verdict.detected);
  assert!(!verdict.suicide_risk);
}

#[test]
fn critical_and_suicide_risk_coincide() {
  let texts = sample_messages()
    .into_iter()
    .chain(["자해를 했어요", "혼자 절망 포기", "죽음이 두려워요"]);
  for text in texts {
    let verdict = detect_crisis(text);
    assert_eq!(verdict.suicide_risk, verdict.level == CrisisLevel::Critical, "{text:?}");
    assert_eq!(verdict.detected, verdict.level != CrisisLevel::Low, "{text:?}");
  }
}

#[test]
fn crisis_drives_recommendations() {
  let verdict = detect_crisis("오늘 너무 힘들다");
  assert_eq!(verdict.level, CrisisLevel::Medium);
  assert_eq!(recommendations(verdict.detected), &PROFESSIONAL_REFERRALS);

  let verdict = detect_crisis("오늘은 괜찮아요");
  assert_eq!(recommendations(verdict.detected), &SELF_CARE);
}

// ============================================================================
// Fallback replies and catalogs
// ============================================================================

#[test]
fn sad_fallback_for_hard_day() {
  let mut rng = StdRng::seed_from_u64(1);
  let reply = fallback_reply(Some("sad"), &mut rng);
  assert!(SAD_REPLIES.contains(&reply));

  let reply = fallback_reply(Some("no-such-emotion"), &mut rng);
  assert!(GENERIC_REPLIES.contains(&reply));
}

#[test]
fn catalog_sizes_are_stable() {
  assert_eq!(EMOTION_CATALOG.len(), 10);
  assert_eq!(CRISIS_RESOURCES.len(), 4);
  assert!(CRISIS_RESOURCES.iter().all(|r| !r.phone.is_empty()));
}
