//! Error types for drishti-llm

use thiserror::Error;

#[derive(Error, Debug)]
pub enum LlmError {
    #[error("API key not set for provider: {0}")]
    MissingApiKey(String),

    #[error("HTTP request failed: {0}")]
    HttpRequest(#[from] reqwest::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid response from provider: {0}")]
    InvalidResponse(String),

    #[error("Rate limit exceeded")]
    RateLimit,

    #[error("Authentication failed")]
    AuthenticationFailed,

    #[error("Configuration error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, LlmError>;

impl LlmError {
    /// Map the failure to the string the user hears.
    ///
    /// Every analysis-path failure is recovered into one of these instead
    /// of escaping the cycle. A missing credential deliberately does not
    /// contain the word "error": it is an onboarding problem, not an
    /// analysis failure, and must not trip the error surface.
    pub fn user_message(&self) -> String {
        match self {
            LlmError::MissingApiKey(_) => "Missing API key".to_string(),
            LlmError::RateLimit => "Error: rate limited. Please try again later.".to_string(),
            LlmError::HttpRequest(_) => "Error connecting to the vision service.".to_string(),
            other => format!("Error: {}", other),
        }
    }
}
