//! # insight-analysis
//!
//! Fault-tolerant client for the external generative-text service. Builds a
//! compact prompt from the current canonical snapshot, POSTs the Gemini
//! `generateContent` envelope, and retries through a fixed, configurable
//! backoff schedule (`1s, 2s, 4s` by default).
//!
//! Failure policy, by layer:
//!
//! - a single failed attempt is **transient**: logged and retried within the
//!   schedule;
//! - an exhausted schedule is **terminal**: surfaced to the caller as
//!   [`AnalysisError::Exhausted`], whose `user_message` is the plain-text
//!   line the UI shows in place of the report;
//! - a response with an unrecognized envelope is **not an error**: it
//!   degrades to [`protocol::NO_ANALYSIS_FALLBACK`], since the third-party
//!   shape may drift.
//!
//! Each invocation re-sends the full current snapshot; nothing is cached.

pub mod client;
pub mod config;
pub mod error;
pub mod prompt;
pub mod protocol;

pub use client::GeminiClient;
pub use config::GeminiConfig;
pub use error::{AnalysisError, Result};
pub use prompt::build_prompt;
pub use protocol::{extract_text, GenerateRequest, GenerateResponse, NO_ANALYSIS_FALLBACK};
