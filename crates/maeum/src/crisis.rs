//! Crisis / self-harm language detection

use serde::Serialize;
use tracing::debug;

use crate::keywords::{CRISIS_KEYWORDS, SUICIDE_KEYWORDS};

/// Number of distinct crisis keywords from which the level becomes `High`
pub const HIGH_CRISIS_THRESHOLD: usize = 3;

/// Crisis severity tier
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CrisisLevel {
  /// No crisis keyword
  Low,
  /// One or two crisis keywords
  Medium,
  /// Three or more crisis keywords
  High,
  /// Suicide-risk keyword present
  Critical,
}

impl CrisisLevel {
  /// Wire name of the level
  pub fn as_str(&self) -> &'static str {
    match self {
      CrisisLevel::Low => "low",
      CrisisLevel::Medium => "medium",
      CrisisLevel::High => "high",
      CrisisLevel::Critical => "critical",
    }
  }
}

impl std::fmt::Display for CrisisLevel {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    write!(f, "{}", self.as_str())
  }
}

/// Result of [`detect_crisis`]
///
/// `suicide_risk` and `level == Critical` always occur together.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CrisisVerdict {
  /// Any crisis or suicide keyword matched
  pub detected: bool,
  /// Severity tier
  pub level: CrisisLevel,
  /// A suicide-risk keyword matched
  pub suicide_risk: bool,
  /// Keywords behind the verdict (for logging)
  ///
  /// The first matching suicide keyword for `Critical`, otherwise every
  /// matching crisis keyword in table order.
  pub matched_keywords: Vec<&'static str>,
}

impl CrisisVerdict {
  fn critical(keyword: &'static str) -> Self {
    Self {
      detected: true,
      level: CrisisLevel::Critical,
      suicide_risk: true,
      matched_keywords: vec![keyword],
    }
  }

  fn from_crisis_matches(matched_keywords: Vec<&'static str>) -> Self {
    let level = match matched_keywords.len() {
      0 => CrisisLevel::Low,
      n if n >= HIGH_CRISIS_THRESHOLD => CrisisLevel::High,
      _ => CrisisLevel::Medium,
    };

    Self {
      detected: level != CrisisLevel::Low,
      level,
      suicide_risk: false,
      matched_keywords,
    }
  }
}

/// Classifies `text` into a crisis tier
///
/// Suicide-risk keywords are checked first and short-circuit to `Critical`.
/// Otherwise the number of distinct general crisis keywords decides between
/// `Low`, `Medium` and `High`.
#[must_use]
pub fn detect_crisis(text: &str) -> CrisisVerdict {
  if let Some(keyword) = SUICIDE_KEYWORDS.iter().copied().find(|k| text.contains(*k)) {
    debug!(keyword, "suicide-risk keyword detected");
    return CrisisVerdict::critical(keyword);
  }

  let matched: Vec<&'static str> =
    CRISIS_KEYWORDS.iter().copied().filter(|k| text.contains(*k)).collect();

  let verdict = CrisisVerdict::from_crisis_matches(matched);
  debug!(
    level = %verdict.level,
    matched = ?verdict.matched_keywords,
    "crisis scan finished"
  );
  verdict
}
