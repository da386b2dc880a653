//! Integration tests for the palette relay HTTP API.

use std::sync::Arc;

use async_trait::async_trait;
use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tower::ServiceExt;

use chroma_tui::backend::PaletteSource;
use chroma_tui::config::Config;
use chroma_tui::web::{create_router, RelayState};
use chroma_tui::PaletteError;

/// Upstream stand-in that always answers with the same text or error.
struct Fixed(Result<String, PaletteError>);

#[async_trait]
impl PaletteSource for Fixed {
    fn name(&self) -> &str {
        "fixed"
    }

    async fn send(&self, _description: &str) -> Result<String, PaletteError> {
        self.0.clone()
    }
}

fn router(reply: Result<String, PaletteError>) -> axum::Router {
    create_router(RelayState::new(Arc::new(Fixed(reply))))
}

fn post_json(body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/api/generate-palette")
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn send(app: axum::Router, req: Request<Body>) -> (StatusCode, Value) {
    let response = app.oneshot(req).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, body)
}

const FENCED: &str = "```json\n{\"primary\":\"36454f\",\"secondary\":\"#2C3E50\",\"accent\":\"#463EBA\",\"background\":\"#F6F9FC\",\"surface\":\"#FFF\"}\n```";

#[tokio::test]
async fn test_generate_returns_normalized_palette() {
    let (status, body) = send(
        router(Ok(FENCED.to_string())),
        post_json(r#"{"description":"Corporate fintech dark mode"}"#),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({
            "primary": "#36454F",
            "secondary": "#2C3E50",
            "accent": "#463EBA",
            "background": "#F6F9FC",
            "surface": "#FFF"
        })
    );
}

#[tokio::test]
async fn test_missing_description_is_400() {
    let (status, body) = send(router(Ok(FENCED.to_string())), post_json("{}")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Description is required");
}

#[tokio::test]
async fn test_non_string_description_is_400() {
    let (status, _) = send(router(Ok(FENCED.to_string())), post_json(r#"{"description":42}"#)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_blank_description_is_400() {
    let (status, _) =
        send(router(Ok(FENCED.to_string())), post_json(r#"{"description":"   "}"#)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_non_json_body_is_400() {
    let (status, _) = send(router(Ok(FENCED.to_string())), post_json("description=neon")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_get_is_405() {
    let req = Request::builder()
        .method("GET")
        .uri("/api/generate-palette")
        .body(Body::empty())
        .unwrap();
    let (status, body) = send(router(Ok(FENCED.to_string())), req).await;
    assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
    assert_eq!(body["error"], "Method not allowed");
}

#[tokio::test]
async fn test_invalid_upstream_palette_is_500() {
    let upstream = r##"{"primary":"not-a-color","secondary":"#000","accent":"#111","background":"#222","surface":"#333"}"##;
    let (status, body) = send(
        router(Ok(upstream.to_string())),
        post_json(r#"{"description":"anything"}"#),
    )
    .await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    let error = body["error"].as_str().unwrap_or_default();
    assert!(error.contains("primary"));
    assert!(error.contains("not-a-color"));
}

#[tokio::test]
async fn test_missing_field_upstream_is_500() {
    let upstream = r##"{"primary":"#000","secondary":"#000","background":"#222","surface":"#333"}"##;
    let (status, body) = send(
        router(Ok(upstream.to_string())),
        post_json(r#"{"description":"anything"}"#),
    )
    .await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(body["error"].as_str().unwrap_or_default().contains("accent"));
}

#[tokio::test]
async fn test_upstream_failure_is_500() {
    let (status, body) = send(
        router(Err(PaletteError::Transport("HTTP 503".to_string()))),
        post_json(r#"{"description":"anything"}"#),
    )
    .await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(body["error"].as_str().unwrap_or_default().contains("HTTP 503"));
}

#[tokio::test]
async fn test_missing_api_key_is_500_with_hint() {
    let state = RelayState::from_config(&Config::default()).unwrap();
    let (status, body) = send(
        create_router(state),
        post_json(r#"{"description":"Kyoto morning"}"#),
    )
    .await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(body["error"].as_str().unwrap_or_default().contains("GEMINI_API_KEY"));
}

#[tokio::test]
async fn test_health_check() {
    let req = Request::builder().uri("/health").body(Body::empty()).unwrap();
    let (status, body) = send(router(Ok(FENCED.to_string())), req).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
}
