//! HTTP client for a palette relay (POST /api/generate-palette).

use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;
use tracing::debug;

use super::PaletteSource;
use crate::error::PaletteError;

pub const GENERATE_PATH: &str = "/api/generate-palette";

#[derive(Debug, Deserialize)]
struct RelayError {
    error: String,
}

pub struct RelayClient {
    base_url: String,
    client: reqwest::Client,
}

impl RelayClient {
    pub fn new(base_url: String, timeout: Duration) -> Result<Self, PaletteError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| PaletteError::Configuration(format!("HTTP client: {e}")))?;
        Ok(Self { base_url, client })
    }

    fn url(&self) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), GENERATE_PATH)
    }
}

#[async_trait]
impl PaletteSource for RelayClient {
    fn name(&self) -> &str {
        "relay"
    }

    async fn send(&self, description: &str) -> Result<String, PaletteError> {
        let url = self.url();
        debug!(%url, "requesting palette from relay");
        let body = serde_json::json!({ "description": description });
        let resp = self
            .client
            .post(&url)
            .json(&body)
            .send()
            .await
            .map_err(PaletteError::transport)?;
        let status = resp.status();
        let text = resp.text().await.map_err(PaletteError::transport)?;
        if !status.is_success() {
            let message = serde_json::from_str::<RelayError>(&text)
                .map(|e| e.error)
                .unwrap_or(text);
            return Err(PaletteError::Transport(format!("HTTP {}: {}", status, message)));
        }
        if text.trim().is_empty() {
            return Err(PaletteError::EmptyResponse);
        }
        Ok(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn url_joins_without_double_slash() {
        let c = RelayClient::new("http://localhost:3002/".to_string(), Duration::from_secs(1))
            .unwrap();
        assert_eq!(c.url(), "http://localhost:3002/api/generate-palette");
    }

    #[tokio::test]
    async fn unreachable_relay_is_transport_error() {
        let c = RelayClient::new("http://127.0.0.1:9".to_string(), Duration::from_secs(2))
            .unwrap();
        assert!(matches!(
            c.request_palette("ocean").await,
            Err(PaletteError::Transport(_))
        ));
    }
}
