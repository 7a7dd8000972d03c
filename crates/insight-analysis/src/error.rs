//! Error Types

use thiserror::Error;

/// Result type alias for analysis operations
pub type Result<T> = std::result::Result<T, AnalysisError>;

/// Analysis client error types
#[derive(Error, Debug)]
pub enum AnalysisError {
    /// No API key in the environment or configuration
    #[error("Missing API key: set GEMINI_API_KEY")]
    MissingApiKey,

    /// Transport-level failure (connect, timeout, body read)
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// Service answered with a non-success status
    #[error("Service returned {0}")]
    Status(reqwest::StatusCode),

    /// Retry schedule exhausted; carries the final attempt's error
    #[error("Analysis failed after {attempts} attempts: {source}")]
    Exhausted {
        attempts: usize,
        #[source]
        source: Box<AnalysisError>,
    },
}

impl AnalysisError {
    /// Whether a single attempt with this error may be retried within the
    /// schedule. Exhaustion and configuration problems are terminal.
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::Transport(_) | Self::Status(_))
    }

    /// Plain-text message shown in place of the report.
    pub fn user_message(&self) -> String {
        match self {
            Self::MissingApiKey => {
                "Analysis unavailable: the AI service is not configured.".into()
            }
            _ => "Analysis failed: unable to reach the AI service. Please try again later.".into(),
        }
    }
}
