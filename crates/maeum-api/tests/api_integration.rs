//! API 통합 테스트
//!
//! Router 를 통해 HTTP 엔드포인트의 동작을 검증한다.
//! 스텁 클라이언트를 사용하므로 외부 AI API 없이 빠르게 실행된다.

use std::sync::Arc;

use async_trait::async_trait;
use axum::{
  Router,
  body::Body,
  http::{HeaderValue, Request, StatusCode, header},
};
use tower::ServiceExt;

use maeum::Message;
use maeum::fallback::SAD_REPLIES;
use maeum_api::{
  api::{AppState, create_router},
  config::{CompletionConfig, Config},
  errors::CompletionError,
  service::{CompletionClient, CounselingService},
};

/// 통합 테스트용 스텁 클라이언트
///
/// - `Reply`: 고정 응답을 반환
/// - `Fail`: 항상 업스트림 에러를 반환
enum StubClient {
  Reply(&'static str),
  Fail,
}

#[async_trait]
impl CompletionClient for StubClient {
  async fn complete(&self, _messages: &[Message]) -> Result<String, CompletionError> {
    match self {
      StubClient::Reply(text) => Ok((*text).to_string()),
      StubClient::Fail => Err(CompletionError::Upstream {
        status: 401,
        body: r#"{"error":"invalid key"}"#.to_string(),
      }),
    }
  }
}

/// 테스트용 Router 를 구성한다
fn test_app(client: StubClient) -> Router {
  let config = Config {
    bind_addr: "127.0.0.1:0".to_string(),
    allowed_origins: vec![HeaderValue::from_static("http://localhost:3000")],
    completion: CompletionConfig::new("sk-test"),
  };

  let service = Arc::new(CounselingService::new(Arc::new(client)));
  create_router(AppState::new(config, service))
}

fn get(uri: &str) -> Request<Body> {
  Request::builder().method("GET").uri(uri).body(Body::empty()).unwrap()
}

fn post_json(uri: &str, payload: &serde_json::Value) -> Request<Body> {
  Request::builder()
    .method("POST")
    .uri(uri)
    .header("content-type", "application/json")
    .body(Body::from(payload.to_string()))
    .unwrap()
}

async fn body_json(response: axum::response::Response) -> serde_json::Value {
  let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.expect("read body");
  serde_json::from_slice(&body_bytes).expect("body should be valid json")
}

// ============================================================================
// 정적 엔드포인트
// ============================================================================

#[tokio::test]
async fn root_reports_running() {
  let response = test_app(StubClient::Fail).oneshot(get("/")).await.expect("request should succeed");

  assert_eq!(response.status(), StatusCode::OK);
  let json = body_json(response).await;
  assert_eq!(json["message"], "AI Counseling API is running");
}

#[tokio::test]
async fn health_check_returns_ok() {
  let response =
    test_app(StubClient::Fail).oneshot(get("/health")).await.expect("request should succeed");

  assert_eq!(response.status(), StatusCode::OK);
  let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.expect("read body");
  assert_eq!(body_bytes.as_ref(), b"OK");
}

#[tokio::test]
async fn emotions_lists_ten_entries() {
  let response =
    test_app(StubClient::Fail).oneshot(get("/api/emotions")).await.expect("request should succeed");

  assert_eq!(response.status(), StatusCode::OK);
  let json = body_json(response).await;
  let emotions = json.as_array().expect("array");
  assert_eq!(emotions.len(), 10);
  assert_eq!(emotions[0], serde_json::json!({ "emoji": "😢", "name": "슬픔", "value": "sad" }));
  assert_eq!(emotions[9]["value"], "depressed");
}

#[tokio::test]
async fn crisis_resources_are_stable() {
  let app = test_app(StubClient::Fail);

  let first = body_json(app.clone().oneshot(get("/api/crisis-resources")).await.unwrap()).await;
  let second = body_json(app.oneshot(get("/api/crisis-resources")).await.unwrap()).await;

  let resources = first.as_array().expect("array");
  assert_eq!(resources.len(), 4);
  assert!(resources.iter().all(|r| r["phone"].as_str().is_some_and(|p| !p.is_empty())));
  assert_eq!(resources[0]["phone"], "1393");
  assert_eq!(first, second);
}

// ============================================================================
// POST /api/counseling/chat
// ============================================================================

#[tokio::test]
async fn counseling_success_returns_analysis() {
  let app = test_app(StubClient::Reply("천천히 이야기해 주세요"));
  let payload = serde_json::json!({
    "concern": "요즘 너무 불안하고 걱정돼요",
    "emotions": ["불안"],
    "intensity": 3
  });

  let response = app.oneshot(post_json("/api/counseling/chat", &payload)).await.unwrap();

  assert_eq!(response.status(), StatusCode::OK);
  let json = body_json(response).await;
  assert_eq!(json["response"], "천천히 이야기해 주세요");
  assert_eq!(json["emotion_analysis"]["anxiety"], 1.0);
  assert_eq!(json["emotion_analysis"]["sadness"], 0.0);
  assert_eq!(json["crisis_detected"], false);
  assert_eq!(json["crisis_level"], "low");
  assert_eq!(json["recommendations"].as_array().map(Vec::len), Some(3));
}

#[tokio::test]
async fn counseling_upstream_failure_returns_500() {
  let app = test_app(StubClient::Fail);
  let payload = serde_json::json!({ "concern": "힘들어요", "emotions": [], "intensity": 2 });

  let response = app.oneshot(post_json("/api/counseling/chat", &payload)).await.unwrap();

  assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
  let json = body_json(response).await;
  assert_eq!(json["error"]["code"], "upstream_error");
  assert!(json["detail"].as_str().is_some_and(|d| d.contains("401")));
}

#[tokio::test]
async fn counseling_out_of_range_intensity_returns_400() {
  let app = test_app(StubClient::Reply("ok"));
  let payload = serde_json::json!({ "concern": "고민", "emotions": [], "intensity": 9 });

  let response = app.oneshot(post_json("/api/counseling/chat", &payload)).await.unwrap();

  assert_eq!(response.status(), StatusCode::BAD_REQUEST);
  let json = body_json(response).await;
  assert_eq!(json["error"]["code"], "invalid_input");
}

#[tokio::test]
async fn counseling_missing_field_is_client_error() {
  let app = test_app(StubClient::Reply("ok"));
  let payload = serde_json::json!({ "concern": "고민" });

  let response = app.oneshot(post_json("/api/counseling/chat", &payload)).await.unwrap();

  assert!(response.status().is_client_error());
}

// ============================================================================
// POST /api/chat
// ============================================================================

#[tokio::test]
async fn chat_falls_back_when_upstream_fails() {
  let app = test_app(StubClient::Fail);
  let payload = serde_json::json!({ "message": "오늘 너무 힘들다", "emotion": "sad" });

  let response = app.oneshot(post_json("/api/chat", &payload)).await.unwrap();

  assert_eq!(response.status(), StatusCode::OK);
  let json = body_json(response).await;
  let reply = json["response"].as_str().expect("response string");
  assert!(SAD_REPLIES.contains(&reply));
  assert_eq!(json["crisis_detected"], true);
  assert_eq!(json["suicide_risk"], false);
  assert_eq!(json["crisis_level"], "medium");
}

#[tokio::test]
async fn chat_long_message_still_gets_fallback() {
  let app = test_app(StubClient::Fail);
  let message = "힘들다".repeat(1_500);
  let payload = serde_json::json!({ "message": message, "emotion": "sad" });

  let response = app.oneshot(post_json("/api/chat", &payload)).await.unwrap();

  assert_eq!(response.status(), StatusCode::OK);
  let json = body_json(response).await;
  let reply = json["response"].as_str().expect("response string");
  assert!(SAD_REPLIES.contains(&reply));
  assert_eq!(json["crisis_detected"], true);
}

#[tokio::test]
async fn chat_detects_suicide_risk() {
  let app = test_app(StubClient::Reply("당신의 이야기를 듣고 있어요"));
  let payload = serde_json::json!({
    "message": "살기싫다",
    "conversation_history": [{ "role": "user", "content": "안녕" }]
  });

  let response = app.oneshot(post_json("/api/chat", &payload)).await.unwrap();

  assert_eq!(response.status(), StatusCode::OK);
  let json = body_json(response).await;
  assert_eq!(json["response"], "당신의 이야기를 듣고 있어요");
  assert_eq!(json["suicide_risk"], true);
  assert_eq!(json["crisis_level"], "critical");
}

#[tokio::test]
async fn chat_invalid_json_is_client_error() {
  let app = test_app(StubClient::Reply("ok"));

  let response = app
    .oneshot(
      Request::builder()
        .method("POST")
        .uri("/api/chat")
        .header("content-type", "application/json")
        .body(Body::from("{not json"))
        .unwrap(),
    )
    .await
    .unwrap();

  assert!(response.status().is_client_error());
}

// ============================================================================
// CORS
// ============================================================================

#[tokio::test]
async fn preflight_from_allowed_origin() {
  let app = test_app(StubClient::Reply("ok"));

  let response = app
    .oneshot(
      Request::builder()
        .method("OPTIONS")
        .uri("/api/chat")
        .header(header::ORIGIN, "http://localhost:3000")
        .header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
        .header(header::ACCESS_CONTROL_REQUEST_HEADERS, "content-type")
        .body(Body::empty())
        .unwrap(),
    )
    .await
    .unwrap();

  assert!(response.status().is_success());
  let headers = response.headers();
  assert_eq!(headers[header::ACCESS_CONTROL_ALLOW_ORIGIN], "http://localhost:3000");
  assert_eq!(headers[header::ACCESS_CONTROL_ALLOW_CREDENTIALS], "true");
  assert_eq!(headers[header::ACCESS_CONTROL_ALLOW_METHODS], "POST");
}

#[tokio::test]
async fn unknown_origin_gets_no_cors_headers() {
  let app = test_app(StubClient::Reply("ok"));

  let response = app
    .oneshot(
      Request::builder()
        .method("GET")
        .uri("/api/emotions")
        .header(header::ORIGIN, "http://evil.example")
        .body(Body::empty())
        .unwrap(),
    )
    .await
    .unwrap();

  assert_eq!(response.status(), StatusCode::OK);
  assert!(response.headers().get(header::ACCESS_CONTROL_ALLOW_ORIGIN).is_none());
}
