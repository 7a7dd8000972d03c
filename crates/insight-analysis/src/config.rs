//! Client Configuration

use std::time::Duration;

/// Gemini client configuration.
///
/// The retry schedule is an explicit parameter list rather than a baked-in
/// constant so tests can shorten it; one attempt is made per entry, with the
/// entry's delay slept between an attempt's failure and the next attempt.
#[derive(Clone, Debug)]
pub struct GeminiConfig {
    /// API key, supplied out-of-band via environment configuration
    pub api_key: String,

    /// Model identifier
    pub model: String,

    /// API base URL (no trailing slash)
    pub base_url: String,

    /// Fixed backoff schedule; one attempt is made per entry
    pub retry_delays: Vec<Duration>,
}

impl Default for GeminiConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            model: "gemini-2.5-flash-preview-09-2025".into(),
            base_url: "https://generativelanguage.googleapis.com/v1beta".into(),
            retry_delays: vec![
                Duration::from_secs(1),
                Duration::from_secs(2),
                Duration::from_secs(4),
            ],
        }
    }
}

impl GeminiConfig {
    /// Read configuration from the environment (`GEMINI_API_KEY`, optional
    /// `GEMINI_MODEL`).
    pub fn from_env() -> Self {
        let api_key = std::env::var("GEMINI_API_KEY").unwrap_or_default();
        let model = std::env::var("GEMINI_MODEL")
            .unwrap_or_else(|_| Self::default().model);

        Self {
            api_key,
            model,
            ..Default::default()
        }
    }

    /// Full `generateContent` endpoint for the configured model.
    pub fn endpoint(&self) -> String {
        format!("{}/models/{}:generateContent", self.base_url, self.model)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_defaults() {
        let config = GeminiConfig::default();
        assert_eq!(config.retry_delays.len(), 3);
        assert_eq!(config.retry_delays[0], Duration::from_secs(1));
        assert!(config.base_url.starts_with("https://generativelanguage"));
    }

    #[test]
    fn test_endpoint_includes_model() {
        let config = GeminiConfig {
            model: "test-model".into(),
            base_url: "http://localhost:9999/v1beta".into(),
            ..Default::default()
        };
        assert_eq!(
            config.endpoint(),
            "http://localhost:9999/v1beta/models/test-model:generateContent"
        );
    }
}
