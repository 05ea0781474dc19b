//! Error types for Notat.

use thiserror::Error;

/// Library-level error type for Notat operations.
#[derive(Error, Debug)]
pub enum NotatError {
    #[error("Invalid YouTube URL: {0}. Please check the link.")]
    InvalidUrl(String),

    #[error("No transcript available. The video might not have English captions enabled.")]
    NoTranscriptAvailable,

    #[error(
        "Transcript too short to generate meaningful notes ({0} characters after cleaning). \
         Try a video with more substantial content and enabled captions."
    )]
    TranscriptTooShort(usize),

    #[error("Missing credential: {0}")]
    MissingCredential(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Note storage error: {0}")]
    Storage(String),

    #[error("Invalid upload: {0}")]
    InvalidUpload(String),

    #[error("Generative backend error: {0}")]
    Generative(String),

    #[error("External tool not found: {0}. Please install it and ensure it's in your PATH.")]
    ToolNotFound(String),

    #[error("External tool failed: {0}")]
    ToolFailed(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
}

/// Result type alias for Notat operations.
pub type Result<T> = std::result::Result<T, NotatError>;
