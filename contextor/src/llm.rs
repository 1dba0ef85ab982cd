//! Fallback-aware wrapper around the Gemini client.
//!
//! A chat turn never fails because of the model: every outcome is classified
//! into a [`ModelReply`] and rendered as user-facing text.

use std::sync::Arc;

use ai_llm_service::GeminiService;
use tracing::error;

/// Returned when the model answers without any text.
pub const NO_TEXT_FALLBACK: &str =
    "I couldn't generate a proper response. Please contact the college directly for help.";

/// Returned when the request itself fails (transport, status, decoding).
pub const FAILURE_FALLBACK: &str = "I'm having trouble retrieving the information. Please try again later or contact the college directly.";

/// Classified result of one model call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModelReply {
    /// Trimmed model output.
    Text(String),
    /// The API succeeded but produced no text.
    NoText,
    /// The call failed; carries the error message for logs.
    Failed(String),
}

impl ModelReply {
    /// Whether the reply is one of the fixed apology strings.
    pub fn is_fallback(&self) -> bool {
        !matches!(self, ModelReply::Text(_))
    }

    /// Text shown to the user.
    pub fn into_text(self) -> String {
        match self {
            ModelReply::Text(text) => text,
            ModelReply::NoText => NO_TEXT_FALLBACK.to_string(),
            ModelReply::Failed(_) => FAILURE_FALLBACK.to_string(),
        }
    }
}

/// Single-attempt model client; no retries, no backoff.
#[derive(Debug, Clone)]
pub struct ModelClient {
    svc: Arc<GeminiService>,
}

impl ModelClient {
    pub fn new(svc: Arc<GeminiService>) -> Self {
        Self { svc }
    }

    /// Underlying service (used by the health probe).
    pub fn service(&self) -> &GeminiService {
        &self.svc
    }

    /// Sends `prompt` and classifies the outcome.
    pub async fn ask(&self, prompt: &str) -> ModelReply {
        match self.svc.generate(prompt).await {
            Ok(Some(text)) => ModelReply::Text(text.trim().to_string()),
            Ok(None) => ModelReply::NoText,
            Err(e) => {
                error!(error = %e, "Gemini API error");
                ModelReply::Failed(e.to_string())
            }
        }
    }
}
