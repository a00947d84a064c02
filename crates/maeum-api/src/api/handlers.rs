//! HTTP 핸들러 정의

use axum::{Json, extract::State};
use maeum::{CRISIS_RESOURCES, CrisisResource, EMOTION_CATALOG, EmotionLabel};
use tracing::{debug, error};

use crate::errors::ApiError;
use crate::models::{ChatRequest, ChatResponse, CounselingRequest, CounselingResponse, RootResponse};

use super::state::AppState;

/// GET / 엔드포인트
pub async fn root() -> Json<RootResponse> {
  Json(RootResponse {
    message: "AI Counseling API is running",
  })
}

/// 헬스 체크 엔드포인트
pub async fn health_check() -> &'static str {
  "OK"
}

/// POST /api/counseling/chat 엔드포인트
///
/// 감정, 강도, 고민을 받아 AI 상담 응답과 감정 분석 결과를 반환한다.
///
/// # Request Body
/// ```json
/// { "concern": "고민 내용", "emotions": ["불안"], "intensity": 3 }
/// ```
///
/// # Response
/// - 200 OK: 상담 응답
/// - 400 Bad Request: 입력 에러 (강도 범위 밖, 텍스트 길이 초과)
/// - 500 Internal Server Error: AI 응답 생성 실패
pub async fn post_counseling_chat(
  State(state): State<AppState>,
  Json(request): Json<CounselingRequest>,
) -> Result<Json<CounselingResponse>, ApiError> {
  debug!(
    concern_len = request.concern.len(),
    emotions = ?request.emotions,
    intensity = request.intensity,
    "상담 요청 수신"
  );

  let response = state.service.counsel(request).await.inspect_err(|e| {
    error!(code = e.code(), error = %e, "상담 요청 실패");
  })?;

  Ok(Json(response))
}

/// POST /api/chat 엔드포인트
///
/// 실시간 채팅. AI 호출이 실패해도 감정별 폴백 응답으로 200을 반환한다.
///
/// # Request Body
/// ```json
/// { "message": "메시지", "conversation_history": [], "emotion": "sad" }
/// ```
///
/// # Response
/// - 200 OK: 채팅 응답 (폴백 포함)
pub async fn post_chat(
  State(state): State<AppState>,
  Json(request): Json<ChatRequest>,
) -> Json<ChatResponse> {
  debug!(message_len = request.message.len(), "채팅 요청 수신");

  Json(state.service.chat(request).await)
}

/// GET /api/emotions 엔드포인트
pub async fn get_emotions() -> Json<&'static [EmotionLabel]> {
  Json(&EMOTION_CATALOG)
}

/// GET /api/crisis-resources 엔드포인트
pub async fn get_crisis_resources() -> Json<&'static [CrisisResource]> {
  Json(&CRISIS_RESOURCES)
}
