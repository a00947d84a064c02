//! 라우터 정의

use axum::{
  Router,
  http::HeaderValue,
  routing::{get, post},
};
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;

use super::handlers::{
  get_crisis_resources, get_emotions, health_check, post_chat, post_counseling_chat, root,
};
use super::state::AppState;
use crate::errors::ApiError;

/// CORS 레이어를 생성한다
///
/// Only the listed origins are allowed, with credentials. Methods and headers
/// are mirrored from the preflight request, since a wildcard cannot be
/// combined with credentials.
#[must_use]
pub fn cors_layer(origins: &[HeaderValue]) -> CorsLayer {
  CorsLayer::new()
    .allow_origin(AllowOrigin::list(origins.iter().cloned()))
    .allow_methods(AllowMethods::mirror_request())
    .allow_headers(AllowHeaders::mirror_request())
    .allow_credentials(true)
}

/// API 라우터를 생성한다
///
/// # Arguments
/// * `state` - 애플리케이션 상태
///
/// # Returns
/// 설정된 Router
pub fn create_router(state: AppState) -> Router {
  let cors = cors_layer(&state.config.allowed_origins);

  Router::new()
    .route("/", get(root))
    .route("/health", get(health_check))
    .route("/api/counseling/chat", post(post_counseling_chat))
    .route("/api/chat", post(post_chat))
    .route("/api/emotions", get(get_emotions))
    .route("/api/crisis-resources", get(get_crisis_resources))
    .layer(cors)
    .layer(TraceLayer::new_for_http())
    .with_state(state)
}

/// 서버를 기동한다
///
/// # Arguments
/// * `state` - 애플리케이션 상태
///
/// # Errors
/// 서버 기동에 실패한 경우 에러를 반환한다
pub async fn run_server(state: AppState) -> crate::errors::Result<()> {
  let addr = state.config.bind_addr.clone();
  let listener = tokio::net::TcpListener::bind(&addr)
    .await
    .map_err(|e| ApiError::config(format!("바인드 실패: {addr}: {e}")))?;

  tracing::info!("서버를 시작합니다: http://{}", addr);

  let router = create_router(state);

  axum::serve(listener, router)
    .await
    .map_err(|e| ApiError::internal(format!("서버 에러: {e}")))?;

  Ok(())
}
