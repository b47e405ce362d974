//! Error types for vocalize

use std::io;
use thiserror::Error;

/// Main error type for vocalize
#[derive(Error, Debug)]
pub enum VocalizeError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("INI parse error: {0}")]
    IniParse(String),

    #[error("Fetch error: {0}")]
    Fetch(String),

    #[error("Article extraction error: {0}")]
    Extraction(String),

    #[error("Speech synthesis error: {0}")]
    Speech(String),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid audio payload: {0}")]
    Base64(#[from] base64::DecodeError),

    #[error("{0}")]
    Other(String),
}

/// Result type alias for vocalize operations
pub type Result<T> = std::result::Result<T, VocalizeError>;

impl From<String> for VocalizeError {
    fn from(s: String) -> Self {
        VocalizeError::Other(s)
    }
}

impl From<&str> for VocalizeError {
    fn from(s: &str) -> Self {
        VocalizeError::Other(s.to_string())
    }
}

impl From<url::ParseError> for VocalizeError {
    fn from(e: url::ParseError) -> Self {
        VocalizeError::Fetch(format!("invalid URL: {}", e))
    }
}
