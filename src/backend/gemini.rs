//! Direct client for the Gemini `generateContent` endpoint.

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::{json, Value};
use tracing::{debug, info};

use super::{build_prompt, PaletteSource, PromptStyle};
use crate::config::Config;
use crate::error::PaletteError;
use crate::palette::ColorRole;

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<Content>,
}

#[derive(Debug, Deserialize)]
struct Content {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Debug, Deserialize)]
struct Part {
    text: Option<String>,
}

impl GenerateContentResponse {
    /// Text of the first candidate, parts concatenated.
    fn text(&self) -> String {
        self.candidates
            .first()
            .and_then(|c| c.content.as_ref())
            .map(|c| c.parts.iter().filter_map(|p| p.text.as_deref()).collect::<String>())
            .unwrap_or_default()
    }
}

pub struct GeminiClient {
    http: reqwest::Client,
    api_key: Option<String>,
    api_base: String,
    model: String,
    style: PromptStyle,
}

impl GeminiClient {
    pub fn new(config: &Config, style: PromptStyle) -> Result<Self, PaletteError> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| PaletteError::Configuration(format!("HTTP client: {e}")))?;
        Ok(Self {
            http,
            api_key: config.api_key.clone(),
            api_base: config.api_base.clone(),
            model: config.model.clone(),
            style,
        })
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.api_base.trim_end_matches('/'),
            self.model
        )
    }

    fn request_body(&self, description: &str) -> Value {
        let mut body = json!({
            "contents": [{ "parts": [{ "text": build_prompt(description, self.style) }] }],
        });
        if self.style == PromptStyle::Schema {
            let properties: serde_json::Map<String, Value> = ColorRole::ALL
                .iter()
                .map(|role| {
                    let description = format!("Hex code for {} color", role.key());
                    (role.key().to_string(), json!({ "type": "STRING", "description": description }))
                })
                .collect();
            let required: Vec<&str> = ColorRole::ALL.iter().map(|r| r.key()).collect();
            body["generationConfig"] = json!({
                "responseMimeType": "application/json",
                "responseSchema": {
                    "type": "OBJECT",
                    "properties": properties,
                    "required": required,
                },
            });
        }
        body
    }
}

const MAX_ERROR_DETAIL: usize = 160;

/// One-line summary of an upstream error body: `error.message` when the body
/// is a Google API error, otherwise its first line, capped in length.
fn error_detail(body: &str) -> String {
    let parsed: Option<Value> = serde_json::from_str(body).ok();
    let message = parsed.as_ref().and_then(|v| {
        v.pointer("/error/message")
            .or_else(|| v.get("error"))
            .and_then(Value::as_str)
            .map(str::to_string)
    });
    let text = message.unwrap_or_else(|| body.lines().next().unwrap_or("").trim().to_string());
    if text.chars().count() <= MAX_ERROR_DETAIL {
        return text;
    }
    let mut cut: String = text.chars().take(MAX_ERROR_DETAIL - 1).collect();
    cut.push('…');
    cut
}

#[async_trait]
impl PaletteSource for GeminiClient {
    fn name(&self) -> &str {
        &self.model
    }

    async fn send(&self, description: &str) -> Result<String, PaletteError> {
        let api_key = self.api_key.as_deref().ok_or_else(|| {
            PaletteError::Configuration(
                "API key not configured. Set GEMINI_API_KEY in the environment.".to_string(),
            )
        })?;

        debug!(model = %self.model, "requesting palette");
        let resp = self
            .http
            .post(self.endpoint())
            .header("x-goog-api-key", api_key)
            .json(&self.request_body(description))
            .send()
            .await
            .map_err(PaletteError::transport)?;
        if !resp.status().is_success() {
            let status = resp.status();
            let body = resp.text().await.unwrap_or_default();
            debug!(%status, %body, "upstream error body");
            return Err(PaletteError::Transport(format!("HTTP {status}: {}", error_detail(&body))));
        }
        let parsed: GenerateContentResponse = resp.json().await.map_err(PaletteError::transport)?;
        let text = parsed.text();
        if text.trim().is_empty() {
            return Err(PaletteError::EmptyResponse);
        }
        info!(model = %self.model, bytes = text.len(), "palette response received");
        Ok(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client(style: PromptStyle) -> GeminiClient {
        let config = Config { api_key: Some("k".to_string()), ..Config::default() };
        GeminiClient::new(&config, style).unwrap()
    }

    #[test]
    fn endpoint_uses_model_and_trims_slash() {
        let config = Config {
            api_base: "http://localhost:1234/".to_string(),
            model: "gemini-test".to_string(),
            ..Config::default()
        };
        let c = GeminiClient::new(&config, PromptStyle::Schema).unwrap();
        assert_eq!(c.endpoint(), "http://localhost:1234/v1beta/models/gemini-test:generateContent");
    }

    #[test]
    fn schema_body_requires_all_roles() {
        let body = client(PromptStyle::Schema).request_body("dusk");
        let gen = &body["generationConfig"];
        assert_eq!(gen["responseMimeType"], "application/json");
        assert_eq!(gen["responseSchema"]["required"].as_array().map(|a| a.len()), Some(5));
        assert_eq!(gen["responseSchema"]["properties"]["surface"]["type"], "STRING");
    }

    #[test]
    fn json_only_body_has_no_generation_config() {
        let body = client(PromptStyle::JsonOnly).request_body("dusk");
        assert!(body.get("generationConfig").is_none());
        let text = body["contents"][0]["parts"][0]["text"].as_str().unwrap_or("");
        assert!(text.contains("\"dusk\""));
    }

    #[test]
    fn response_text_joins_parts() {
        let parsed: GenerateContentResponse = serde_json::from_value(json!({
            "candidates": [{ "content": { "parts": [{ "text": "{\"a\":" }, { "text": "1}" }] } }]
        }))
        .unwrap();
        assert_eq!(parsed.text(), "{\"a\":1}");
        let empty: GenerateContentResponse = serde_json::from_value(json!({})).unwrap();
        assert_eq!(empty.text(), "");
    }

    #[test]
    fn error_detail_prefers_api_message() {
        let body = json!({
            "error": { "code": 400, "message": "API key not valid.", "status": "INVALID_ARGUMENT" }
        })
        .to_string();
        assert_eq!(error_detail(&body), "API key not valid.");
        assert_eq!(error_detail(r#"{"error":"quota"}"#), "quota");
    }

    #[test]
    fn error_detail_is_single_line_and_capped() {
        let html = format!("<html>{}\n<body>oops</body>", "x".repeat(500));
        let detail = error_detail(&html);
        assert!(!detail.contains('\n'));
        assert_eq!(detail.chars().count(), MAX_ERROR_DETAIL);
        assert!(detail.ends_with('…'));
        assert_eq!(error_detail(""), "");
    }

    #[tokio::test]
    async fn missing_key_fails_before_network() {
        let config = Config { api_base: "http://127.0.0.1:9".to_string(), ..Config::default() };
        let c = GeminiClient::new(&config, PromptStyle::Schema).unwrap();
        assert!(matches!(
            c.request_palette("sunset").await,
            Err(PaletteError::Configuration(_))
        ));
    }
}
