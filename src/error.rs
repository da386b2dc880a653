//! Error taxonomy for the generation pipeline.

use thiserror::Error;

/// Everything that can go wrong between a description and a validated palette.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PaletteError {
    #[error("Describe a palette first")]
    EmptyInput,

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Request failed: {0}")]
    Transport(String),

    #[error("No response from AI")]
    EmptyResponse,

    /// `text` is kept for logs; it is not part of the display message.
    #[error("AI response was not valid JSON: {reason}")]
    MalformedResponse { text: String, reason: String },

    #[error("Invalid or missing color for {0}")]
    MissingField(String),

    #[error("Invalid hex color format for {key}: {value}")]
    InvalidHexFormat { key: String, value: String },

    #[error("A palette is already being generated")]
    AlreadyGenerating,

    #[error("Palette generation stopped unexpectedly: {0}")]
    WorkerFailed(String),
}

impl PaletteError {
    pub(crate) fn transport(err: impl std::fmt::Display) -> Self {
        PaletteError::Transport(err.to_string())
    }

    /// True for failures caused by the caller's input rather than the service.
    pub fn is_client_error(&self) -> bool {
        matches!(self, PaletteError::EmptyInput)
    }
}
