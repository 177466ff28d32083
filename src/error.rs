// Error types for newsdesk.
// Separates transport failures, provider-reported failures, and configuration errors.

use reqwest::StatusCode;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum NewsError {
    #[error("News API transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("HTTP {status}: {message}")]
    Status { status: StatusCode, message: String },

    #[error("Invalid response body: {0}")]
    Body(serde_json::Error),

    #[error("News API error: {message}")]
    Provider {
        code: Option<String>,
        message: String,
    },

    #[error("Missing NEWS_API_KEY (set it in the environment or the config file)")]
    MissingApiKey,

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl NewsError {
    /// Network failure, non-success HTTP status, or a body that is not JSON.
    pub fn is_transport(&self) -> bool {
        matches!(
            self,
            NewsError::Transport(_) | NewsError::Status { .. } | NewsError::Body(_)
        )
    }

    /// Well-formed response whose own status field signals failure.
    pub fn is_provider(&self) -> bool {
        matches!(self, NewsError::Provider { .. })
    }
}

pub type Result<T> = std::result::Result<T, NewsError>;
