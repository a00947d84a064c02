//! Keyword-frequency emotion analyzer
//!
//! Counts, per category, how many of the category's keywords appear in the
//! text, then normalizes the six counters into a distribution.

use serde::Serialize;

use crate::keywords::{
  ANGER_KEYWORDS, ANXIETY_KEYWORDS, FEAR_KEYWORDS, HAPPINESS_KEYWORDS, SADNESS_KEYWORDS,
  STRESS_KEYWORDS,
};

/// Emotion categories scored by [`analyze_emotion`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EmotionCategory {
  /// 슬픔
  Sadness,
  /// 분노
  Anger,
  /// 불안
  Anxiety,
  /// 기쁨
  Happiness,
  /// 두려움
  Fear,
  /// 스트레스
  Stress,
}

impl EmotionCategory {
  /// All categories in serialization order
  pub const ALL: [EmotionCategory; 6] = [
    EmotionCategory::Sadness,
    EmotionCategory::Anger,
    EmotionCategory::Anxiety,
    EmotionCategory::Happiness,
    EmotionCategory::Fear,
    EmotionCategory::Stress,
  ];

  /// Returns the JSON key of the category
  pub fn name(&self) -> &'static str {
    match self {
      EmotionCategory::Sadness => "sadness",
      EmotionCategory::Anger => "anger",
      EmotionCategory::Anxiety => "anxiety",
      EmotionCategory::Happiness => "happiness",
      EmotionCategory::Fear => "fear",
      EmotionCategory::Stress => "stress",
    }
  }

  /// Returns the keyword stems that vote for this category
  pub fn keywords(&self) -> &'static [&'static str] {
    match self {
      EmotionCategory::Sadness => SADNESS_KEYWORDS,
      EmotionCategory::Anger => ANGER_KEYWORDS,
      EmotionCategory::Anxiety => ANXIETY_KEYWORDS,
      EmotionCategory::Happiness => HAPPINESS_KEYWORDS,
      EmotionCategory::Fear => FEAR_KEYWORDS,
      EmotionCategory::Stress => STRESS_KEYWORDS,
    }
  }

  /// Number of this category's keywords present in `text`
  ///
  /// Each keyword counts at most once regardless of how often it occurs.
  fn hits(&self, text: &str) -> usize {
    self.keywords().iter().filter(|k| text.contains(**k)).count()
  }
}

impl std::fmt::Display for EmotionCategory {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    write!(f, "{}", self.name())
  }
}

/// Emotion distribution over the six categories
///
/// Either every field is `0.0` (nothing matched) or the fields sum to `1.0`.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct EmotionScores {
  /// Sadness share
  pub sadness: f64,
  /// Anger share
  pub anger: f64,
  /// Anxiety share
  pub anxiety: f64,
  /// Happiness share
  pub happiness: f64,
  /// Fear share
  pub fear: f64,
  /// Stress share
  pub stress: f64,
}

impl EmotionScores {
  /// Returns the score of one category
  #[must_use]
  pub fn get(&self, category: EmotionCategory) -> f64 {
    match category {
      EmotionCategory::Sadness => self.sadness,
      EmotionCategory::Anger => self.anger,
      EmotionCategory::Anxiety => self.anxiety,
      EmotionCategory::Happiness => self.happiness,
      EmotionCategory::Fear => self.fear,
      EmotionCategory::Stress => self.stress,
    }
  }

  /// Sum of all six scores (`0.0` or `1.0` up to rounding)
  #[must_use]
  pub fn total(&self) -> f64 {
    EmotionCategory::ALL.iter().map(|c| self.get(*c)).sum()
  }

  /// Whether no keyword matched
  #[must_use]
  pub fn is_empty(&self) -> bool {
    self.total() == 0.0
  }

  /// Highest-scoring category
  ///
  /// Returns `None` when nothing matched. Ties go to the category declared
  /// first in [`EmotionCategory::ALL`].
  #[must_use]
  pub fn dominant(&self) -> Option<EmotionCategory> {
    if self.is_empty() {
      return None;
    }

    let mut best = EmotionCategory::ALL[0];
    for category in EmotionCategory::ALL.into_iter().skip(1) {
      if self.get(category) > self.get(best) {
        best = category;
      }
    }
    Some(best)
  }

  fn set(&mut self, category: EmotionCategory, value: f64) {
    let slot = match category {
      EmotionCategory::Sadness => &mut self.sadness,
      EmotionCategory::Anger => &mut self.anger,
      EmotionCategory::Anxiety => &mut self.anxiety,
      EmotionCategory::Happiness => &mut self.happiness,
      EmotionCategory::Fear => &mut self.fear,
      EmotionCategory::Stress => &mut self.stress,
    };
    *slot = value;
  }
}

/// Scores `text` against the six emotion keyword lists
///
/// # Returns
/// A normalized distribution, or all zeros when no keyword is present
/// (including for empty input).
#[must_use]
pub fn analyze_emotion(text: &str) -> EmotionScores {
  let counts = EmotionCategory::ALL.map(|c| c.hits(text));
  let total: usize = counts.iter().sum();

  let mut scores = EmotionScores::default();
  if total == 0 {
    return scores;
  }

  for (category, count) in EmotionCategory::ALL.into_iter().zip(counts) {
    scores.set(category, count as f64 / total as f64);
  }
  scores
}
