//! Generation clients: direct Gemini calls or a same-origin relay.

mod gemini;
mod relay;

use std::sync::Arc;

use async_trait::async_trait;
use tracing::error;

use crate::config::{Config, GenerationMode};
use crate::error::PaletteError;
use crate::palette::ValidatedPalette;
use crate::services::normalize;

pub use gemini::GeminiClient;
pub use relay::{RelayClient, GENERATE_PATH};

/// How the JSON-only constraint is expressed to the model.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PromptStyle {
    /// `responseMimeType` + `responseSchema` do the constraining.
    Schema,
    /// Plain instructions; the model may still wrap output in a code fence.
    JsonOnly,
}

/// Something that turns a description into raw model text.
#[async_trait]
pub trait PaletteSource: Send + Sync {
    /// Short label for the status bar and logs.
    fn name(&self) -> &str;

    /// One outbound call with an already-validated, trimmed description.
    async fn send(&self, description: &str) -> Result<String, PaletteError>;

    /// Rejects blank descriptions before any network activity.
    async fn request_palette(&self, description: &str) -> Result<String, PaletteError> {
        let description = description.trim();
        if description.is_empty() {
            return Err(PaletteError::EmptyInput);
        }
        self.send(description).await
    }
}

/// Request, then normalize. Malformed output is logged with the raw text.
pub async fn generate_palette(
    source: &dyn PaletteSource,
    description: &str,
) -> Result<ValidatedPalette, PaletteError> {
    let raw = source.request_palette(description).await?;
    normalize(&raw).inspect_err(|e| {
        if let PaletteError::MalformedResponse { text, reason } = e {
            error!(source = source.name(), %reason, raw = %text, "unparseable palette response");
        }
    })
}

/// Picks the client for the configured mode.
pub fn build_source(config: &Config) -> Result<Arc<dyn PaletteSource>, PaletteError> {
    match &config.mode {
        GenerationMode::Direct => Ok(Arc::new(GeminiClient::new(config, PromptStyle::Schema)?)),
        GenerationMode::Relay { base_url } => {
            Ok(Arc::new(RelayClient::new(base_url.clone(), config.timeout)?))
        }
    }
}

/// The instruction sent to the model.
pub fn build_prompt(description: &str, style: PromptStyle) -> String {
    let mut prompt = format!(
        "Generate a sophisticated UI color palette based on this description: \"{description}\".\n\
         The palette must be harmonious and suitable for modern web design.\n\
         - Primary: Main brand color (hex code).\n\
         - Secondary: Supporting color (hex code).\n\
         - Accent: For highlights/CTAs (hex code).\n\
         - Background: Main page background, usually very light or very dark (hex code).\n\
         - Surface: Card/Container background that contrasts with background (hex code).\n"
    );
    match style {
        PromptStyle::Schema => prompt.push_str("Return strictly JSON."),
        PromptStyle::JsonOnly => prompt.push_str(
            "\nReturn ONLY a valid JSON object with these exact keys: primary, secondary, accent, background, surface.\n\
             Each value must be a hex color code starting with # (e.g., \"#FF5733\").\n\
             Do not include any text before or after the JSON object.",
        ),
    }
    prompt
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct Canned {
        reply: Result<String, PaletteError>,
        calls: AtomicUsize,
    }

    impl Canned {
        fn new(reply: Result<String, PaletteError>) -> Self {
            Self { reply, calls: AtomicUsize::new(0) }
        }
    }

    #[async_trait]
    impl PaletteSource for Canned {
        fn name(&self) -> &str {
            "canned"
        }

        async fn send(&self, _description: &str) -> Result<String, PaletteError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.reply.clone()
        }
    }

    #[tokio::test]
    async fn blank_description_never_reaches_send() {
        let source = Canned::new(Ok("{}".to_string()));
        assert_eq!(source.request_palette("   \n").await, Err(PaletteError::EmptyInput));
        assert_eq!(source.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn generate_normalizes_fenced_reply() {
        let reply = "```json\n{\"primary\":\"36454F\",\"secondary\":\"#2c3e50\",\"accent\":\"#463EBA\",\"background\":\"#F6F9FC\",\"surface\":\"#FFF\"}\n```";
        let source = Canned::new(Ok(reply.to_string()));
        let palette = generate_palette(&source, "misty Kyoto morning").await.unwrap();
        assert_eq!(palette.as_palette().primary, "#36454F");
        assert_eq!(palette.as_palette().secondary, "#2C3E50");
        assert_eq!(source.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn transport_errors_propagate_untouched() {
        let source = Canned::new(Err(PaletteError::Transport("connection refused".into())));
        assert_eq!(
            generate_palette(&source, "neon").await,
            Err(PaletteError::Transport("connection refused".into()))
        );
    }

    #[test]
    fn prompt_mentions_description_and_roles() {
        let prompt = build_prompt("Cyberpunk neon", PromptStyle::Schema);
        assert!(prompt.contains("\"Cyberpunk neon\""));
        for key in ["Primary", "Secondary", "Accent", "Background", "Surface"] {
            assert!(prompt.contains(key));
        }
        assert!(prompt.contains("hex code"));
    }

    #[test]
    fn json_only_prompt_lists_exact_keys() {
        let prompt = build_prompt("forest", PromptStyle::JsonOnly);
        assert!(prompt.contains("primary, secondary, accent, background, surface"));
        assert!(prompt.contains("Return ONLY a valid JSON object"));
    }

    #[test]
    fn relay_mode_builds_without_key() {
        let config = Config {
            mode: GenerationMode::Relay { base_url: "http://127.0.0.1:9".to_string() },
            ..Config::default()
        };
        let source = build_source(&config).unwrap();
        assert_eq!(source.name(), "relay");
    }
}
