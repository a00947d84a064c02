//! Follow-up recommendations attached to counseling responses

/// Shown when crisis language was detected
pub static PROFESSIONAL_REFERRALS: [&str; 3] = [
  "전문 상담사와의 상담을 권합니다",
  "가까운 정신건강센터에 연락해보세요",
  "생명의전화 (1393)로 연락하세요",
];

/// Shown otherwise
pub static SELF_CARE: [&str; 3] = [
  "규칙적인 운동을 해보세요",
  "충분한 수면을 취하세요",
  "신뢰할 수 있는 사람과 대화해보세요",
];

/// Recommendations for a counseling response
#[must_use]
pub fn recommendations(crisis_detected: bool) -> &'static [&'static str; 3] {
  if crisis_detected { &PROFESSIONAL_REFERRALS } else { &SELF_CARE }
}
