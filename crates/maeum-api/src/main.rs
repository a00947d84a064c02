//! maeum-api 서버 진입점

use std::sync::Arc;

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use maeum_api::ApiError;
use maeum_api::api::{AppState, run_server};
use maeum_api::config::Config;
use maeum_api::service::{CounselingService, OpenRouterClient};

#[tokio::main]
async fn main() -> Result<(), ApiError> {
  // .env 파일이 있으면 읽는다
  dotenv::dotenv().ok();

  // 로깅 초기화
  tracing_subscriber::registry()
    .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
    .with(tracing_subscriber::fmt::layer())
    .init();

  // 설정 로드 (API 키가 없으면 기동 실패)
  let config = Config::from_env().inspect_err(|e| tracing::error!(error = %e, "설정 로드 실패"))?;
  tracing::info!(
    model = %config.completion.model,
    origins = config.allowed_origins.len(),
    "설정을 읽었습니다"
  );

  // 서비스 초기화
  let client = Arc::new(OpenRouterClient::new(config.completion.clone())?);
  let service = Arc::new(CounselingService::new(client));

  let state = AppState::new(config, service);

  run_server(state).await
}
