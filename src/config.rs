//! Environment-driven configuration for the terminal client and the relay.

use std::time::Duration;

use anyhow::{bail, Context, Result};

pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";
pub const DEFAULT_API_BASE: &str = "https://generativelanguage.googleapis.com";
pub const DEFAULT_TIMEOUT_SECS: u64 = 60;

/// What the UI does when a generation request fails.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FailurePolicy {
    /// Show the error and keep the current palette.
    #[default]
    Surface,
    /// Swap in the default palette and log a warning.
    FallbackToDefault,
}

impl FailurePolicy {
    fn parse(value: &str) -> Result<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "surface" | "error" => Ok(FailurePolicy::Surface),
            "default" | "fallback" => Ok(FailurePolicy::FallbackToDefault),
            other => bail!("CHROMA_ON_FAILURE must be `surface` or `default`, got `{other}`"),
        }
    }
}

/// Where generation requests go.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GenerationMode {
    /// Call the Gemini API from this process.
    Direct,
    /// POST to a relay's `/api/generate-palette`.
    Relay { base_url: String },
}

#[derive(Clone, Debug)]
pub struct Config {
    pub api_key: Option<String>,
    pub model: String,
    pub api_base: String,
    pub timeout: Duration,
    pub mode: GenerationMode,
    pub on_failure: FailurePolicy,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_key: None,
            model: DEFAULT_MODEL.to_string(),
            api_base: DEFAULT_API_BASE.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            mode: GenerationMode::Direct,
            on_failure: FailurePolicy::Surface,
        }
    }
}

impl Config {
    /// Reads the process environment (after loading `.env`, if present).
    pub fn from_env() -> Result<Self> {
        let _ = dotenvy::dotenv();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds a config from any key lookup; blank values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());
        let defaults = Config::default();

        let timeout = match get("CHROMA_TIMEOUT_SECS") {
            Some(raw) => {
                let secs: u64 = raw
                    .parse()
                    .with_context(|| format!("CHROMA_TIMEOUT_SECS is not a number: `{raw}`"))?;
                if secs == 0 {
                    bail!("CHROMA_TIMEOUT_SECS must be greater than zero");
                }
                Duration::from_secs(secs)
            }
            None => defaults.timeout,
        };

        let on_failure = match get("CHROMA_ON_FAILURE") {
            Some(raw) => FailurePolicy::parse(&raw)?,
            None => defaults.on_failure,
        };

        let mode = match get("CHROMA_RELAY_URL") {
            Some(base_url) => GenerationMode::Relay { base_url },
            None => GenerationMode::Direct,
        };

        Ok(Self {
            api_key: get("GEMINI_API_KEY").or_else(|| get("API_KEY")),
            model: get("CHROMA_MODEL").unwrap_or(defaults.model),
            api_base: get("CHROMA_API_BASE").unwrap_or(defaults.api_base),
            timeout,
            mode,
            on_failure,
        })
    }
}
