//! Resilient Gemini Client
//!
//! One `generateContent` POST per attempt, walked through a fixed backoff
//! schedule. An attempt is never aborted mid-flight; the schedule only
//! decides what happens after it settles.

use std::sync::atomic::{AtomicBool, Ordering};

use insight_core::ChainRecord;

use crate::config::GeminiConfig;
use crate::error::{AnalysisError, Result};
use crate::prompt::build_prompt;
use crate::protocol::{extract_text, GenerateRequest, GenerateResponse, NO_ANALYSIS_FALLBACK};

/// Client for the external generative-text service.
pub struct GeminiClient {
    http: reqwest::Client,
    config: GeminiConfig,
    in_flight: AtomicBool,
}

impl GeminiClient {
    /// Create a client with the given configuration.
    pub fn new(config: GeminiConfig) -> Self {
        Self::with_client(reqwest::Client::new(), config)
    }

    /// Create with a caller-supplied HTTP client.
    pub fn with_client(http: reqwest::Client, config: GeminiConfig) -> Self {
        Self {
            http,
            config,
            in_flight: AtomicBool::new(false),
        }
    }

    /// Create from environment variables.
    pub fn from_env() -> Self {
        Self::new(GeminiConfig::from_env())
    }

    /// Whether an analysis request is currently in flight. The UI reflects
    /// this as its progress indicator.
    pub fn is_analyzing(&self) -> bool {
        self.in_flight.load(Ordering::Relaxed)
    }

    /// Generates a market report for the given canonical records.
    ///
    /// Makes one attempt per schedule entry (3 by default), sleeping the
    /// entry's delay between a failed attempt and the next one. The final
    /// attempt's error is surfaced as [`AnalysisError::Exhausted`]. A
    /// well-formed response with an unexpected envelope yields the
    /// [`NO_ANALYSIS_FALLBACK`] sentence, not an error.
    pub async fn analyze(&self, records: &[ChainRecord]) -> Result<String> {
        if self.config.api_key.is_empty() {
            return Err(AnalysisError::MissingApiKey);
        }

        let _guard = InFlightGuard::raise(&self.in_flight);

        let request = GenerateRequest::from_prompt(build_prompt(records));
        let attempts = self.config.retry_delays.len().max(1);

        let mut attempt = 0;
        loop {
            attempt += 1;
            match self.attempt(&request).await {
                Ok(report) => {
                    tracing::debug!("Analysis succeeded on attempt {}/{}", attempt, attempts);
                    return Ok(report);
                }
                Err(e) if attempt < attempts && e.is_retryable() => {
                    let delay = self.config.retry_delays[attempt - 1];
                    tracing::warn!(
                        "Analysis attempt {}/{} failed, retrying in {:?}: {}",
                        attempt,
                        attempts,
                        delay,
                        e
                    );
                    tokio::time::sleep(delay).await;
                }
                Err(e) => {
                    return Err(AnalysisError::Exhausted {
                        attempts: attempt,
                        source: Box::new(e),
                    });
                }
            }
        }
    }

    /// A single request/response cycle against the service.
    async fn attempt(&self, request: &GenerateRequest) -> Result<String> {
        let response = self
            .http
            .post(self.config.endpoint())
            .query(&[("key", self.config.api_key.as_str())])
            .json(request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(AnalysisError::Status(status));
        }

        let body: GenerateResponse = response.json().await?;
        Ok(extract_text(&body)
            .map_or_else(|| NO_ANALYSIS_FALLBACK.to_string(), ToString::to_string))
    }
}

/// Raises the in-flight flag for a scope; Drop lowers it on every exit path.
struct InFlightGuard<'a>(&'a AtomicBool);

impl<'a> InFlightGuard<'a> {
    fn raise(flag: &'a AtomicBool) -> Self {
        flag.store(true, Ordering::Relaxed);
        Self(flag)
    }
}

impl Drop for InFlightGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Relaxed);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_idle_client_is_not_analyzing() {
        let client = GeminiClient::new(GeminiConfig::default());
        assert!(!client.is_analyzing());
    }

    #[tokio::test]
    async fn test_missing_key_fails_before_any_request() {
        let client = GeminiClient::new(GeminiConfig {
            api_key: String::new(),
            ..Default::default()
        });
        let err = client.analyze(&[]).await.unwrap_err();
        assert!(matches!(err, AnalysisError::MissingApiKey));
        assert!(!client.is_analyzing());
    }
}
