//! Palette relay: serves the generation pipeline over HTTP.
//!
//! # Endpoints
//!
//! - `GET /health` - Health check
//! - `POST /api/generate-palette` - `{ "description": string }` in, validated palette out

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::State,
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use serde::Serialize;
use serde_json::Value;
use tower_http::trace::TraceLayer;
use tracing::{error, info};

use crate::backend::{generate_palette, GeminiClient, PaletteSource, PromptStyle, GENERATE_PATH};
use crate::config::Config;
use crate::error::PaletteError;
use crate::palette::ValidatedPalette;

/// Shared state for the relay handlers.
#[derive(Clone)]
pub struct RelayState {
    source: Arc<dyn PaletteSource>,
}

impl RelayState {
    pub fn new(source: Arc<dyn PaletteSource>) -> Self {
        Self { source }
    }

    /// Upstream Gemini client with prompt-constrained output.
    pub fn from_config(config: &Config) -> anyhow::Result<Self> {
        let client = GeminiClient::new(config, PromptStyle::JsonOnly)?;
        Ok(Self::new(Arc::new(client)))
    }
}

/// Health check response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

/// API error response.
#[derive(Debug, Serialize)]
pub struct ApiError {
    pub error: String,
}

impl ApiError {
    fn new(error: impl Into<String>) -> Self {
        Self { error: error.into() }
    }
}

type ApiResult<T> = Result<Json<T>, (StatusCode, Json<ApiError>)>;

/// GET /health - Health check endpoint.
async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// POST /api/generate-palette - Generate and validate a palette.
async fn generate(State(state): State<RelayState>, body: Bytes) -> ApiResult<ValidatedPalette> {
    let description = serde_json::from_slice::<Value>(&body)
        .ok()
        .and_then(|v| v.get("description").and_then(Value::as_str).map(str::to_string))
        .filter(|d| !d.trim().is_empty())
        .ok_or_else(|| {
            (
                StatusCode::BAD_REQUEST,
                Json(ApiError::new("Description is required")),
            )
        })?;

    match generate_palette(state.source.as_ref(), &description).await {
        Ok(palette) => {
            info!(%description, "palette generated");
            Ok(Json(palette))
        }
        Err(err) => {
            error!(error = %err, %description, "palette generation failed");
            Err((status_for(&err), Json(ApiError::new(err.to_string()))))
        }
    }
}

/// Any other method on the generate route.
async fn method_not_allowed() -> (StatusCode, Json<ApiError>) {
    (
        StatusCode::METHOD_NOT_ALLOWED,
        Json(ApiError::new("Method not allowed")),
    )
}

fn status_for(err: &PaletteError) -> StatusCode {
    if err.is_client_error() {
        StatusCode::BAD_REQUEST
    } else {
        StatusCode::INTERNAL_SERVER_ERROR
    }
}

/// Creates the relay router.
pub fn create_router(state: RelayState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route(GENERATE_PATH, post(generate).fallback(method_not_allowed))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Runs the relay until the process is stopped.
pub async fn run_server(state: RelayState, addr: SocketAddr) -> anyhow::Result<()> {
    let app = create_router(state);

    info!("Starting palette relay on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
