//! Typed error for the contextor crate.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ContextorError {
    /// Errors from the LLM service (config or client construction).
    #[error("LLM error: {0}")]
    Llm(#[from] ai_llm_service::AiLlmError),
}
