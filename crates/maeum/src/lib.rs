//! maeum 심리상담 도메인 라이브러리
//!
//! Keyword-based emotion scoring and crisis detection for Korean text, plus
//! the static catalogs, prompts and fallback replies used by `maeum-api`.
//! Everything here is pure and allocation-light; no I/O.

/// 키워드 모듈 - emotion, crisis and suicide-risk keyword tables
pub mod keywords;

/// 감정 분석 모듈 - EmotionScores and the keyword-frequency analyzer
pub mod emotion;

/// 위기 감지 모듈 - CrisisLevel, CrisisVerdict and the detector
pub mod crisis;

/// 카탈로그 모듈 - emotion labels and crisis hotlines
pub mod catalog;

/// 프롬프트 모듈 - chat-completion messages and prompt builders
pub mod prompt;

/// 폴백 모듈 - canned replies for when the completion API fails
pub mod fallback;

/// 추천 모듈 - follow-up recommendations
pub mod recommendation;

/// 재export
pub use catalog::{CRISIS_RESOURCES, CrisisResource, EMOTION_CATALOG, EmotionLabel};
pub use crisis::{CrisisLevel, CrisisVerdict, detect_crisis};
pub use emotion::{EmotionCategory, EmotionScores, analyze_emotion};
pub use fallback::fallback_reply;
pub use prompt::{Message, Role, counseling_prompt, support_prompt};
pub use recommendation::recommendations;
