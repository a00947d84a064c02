//! maeum-api crate
//!
//! 감정 분석과 위기 감지를 곁들인 AI 상담 HTTP API 서버.
//!
//! ## Endpoints
//! - `GET /` - 기동 확인 메시지
//! - `GET /health` - Health Check
//! - `POST /api/counseling/chat` - 구조화된 상담 (AI 실패 시 500)
//! - `POST /api/chat` - 실시간 채팅 (AI 실패 시 폴백 응답)
//! - `GET /api/emotions` - 선택 가능한 감정 목록
//! - `GET /api/crisis-resources` - 위기 상담 전화 목록
//!
//! ## Usage Example
//! ```bash
//! curl -X POST http://127.0.0.1:8000/api/chat \
//!   -H "Content-Type: application/json" \
//!   -d '{"message": "오늘 너무 힘들다", "emotion": "sad"}'
//! ```

pub mod api;
pub mod config;
pub mod errors;
pub mod models;
pub mod service;

pub use api::AppState;
pub use config::Config;
pub use errors::{ApiError, ApiErrorKind, CompletionError};
pub use models::{ChatRequest, ChatResponse, CounselingRequest, CounselingResponse};
pub use service::{CompletionClient, CounselingService, OpenRouterClient};
