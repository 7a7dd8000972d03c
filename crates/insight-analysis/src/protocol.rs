//! Gemini Wire Envelope
//!
//! Request/response shapes for `generateContent`. The response types default
//! every field: the envelope is third-party and may shift shape, so a
//! surprising body degrades to the fallback sentence instead of an error.

use serde::{Deserialize, Serialize};

/// Returned in place of a report when the response envelope is missing the
/// expected shape.
pub const NO_ANALYSIS_FALLBACK: &str = "No analysis available.";

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GenerateRequest {
    pub contents: Vec<Content>,
}

impl GenerateRequest {
    /// Wraps a prompt in the single-turn request envelope.
    pub fn from_prompt(prompt: impl Into<String>) -> Self {
        Self {
            contents: vec![Content {
                parts: vec![Part {
                    text: prompt.into(),
                }],
            }],
        }
    }
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Content {
    #[serde(default)]
    pub parts: Vec<Part>,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Part {
    #[serde(default)]
    pub text: String,
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct GenerateResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct Candidate {
    #[serde(default)]
    pub content: Content,
}

/// Tolerant extraction of the first candidate's first text part. `None`
/// signals "unknown shape", which callers map to [`NO_ANALYSIS_FALLBACK`].
pub fn extract_text(response: &GenerateResponse) -> Option<&str> {
    let text = response
        .candidates
        .first()?
        .content
        .parts
        .first()?
        .text
        .as_str();

    if text.is_empty() { None } else { Some(text) }
}
