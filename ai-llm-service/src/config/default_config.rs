//! Default Gemini config loaded from environment variables.
//!
//! # Environment variables
//!
//! - `GEMINI_API_KEY`   = API credential (mandatory)
//! - `GEMINI_MODEL`     = model identifier (default `gemini-1.5-flash`)
//! - `GEMINI_API_BASE`  = endpoint base (default Google's public endpoint)
//! - `LLM_MAX_TOKENS`   = optional max output tokens (u32)
//! - `LLM_TIMEOUT_SECS` = optional request timeout (u64)

use crate::{
    config::llm_model_config::LlmModelConfig,
    error_handler::{AiLlmError, env_opt_u32, env_opt_u64, must_env, validate_http_endpoint},
};

/// Model used when `GEMINI_MODEL` is not set.
pub const DEFAULT_GEMINI_MODEL: &str = "gemini-1.5-flash";

/// Public Generative Language API base.
pub const DEFAULT_GEMINI_ENDPOINT: &str = "https://generativelanguage.googleapis.com";

/// Constructs the Gemini config used for every chat turn and health probe.
///
/// # Errors
///
/// - [`crate::ConfigError::MissingVar`] if `GEMINI_API_KEY` is missing or blank
/// - [`crate::ConfigError::InvalidFormat`] if `GEMINI_API_BASE` is not http/https
/// - [`crate::ConfigError::InvalidNumber`] for malformed numeric knobs
pub fn config_gemini() -> Result<LlmModelConfig, AiLlmError> {
    let api_key = must_env("GEMINI_API_KEY")?;

    let model = non_blank_env("GEMINI_MODEL").unwrap_or_else(|| DEFAULT_GEMINI_MODEL.into());

    let endpoint =
        non_blank_env("GEMINI_API_BASE").unwrap_or_else(|| DEFAULT_GEMINI_ENDPOINT.into());
    validate_http_endpoint("GEMINI_API_BASE", &endpoint)?;

    let max_tokens = env_opt_u32("LLM_MAX_TOKENS")?;
    let timeout_secs = env_opt_u64("LLM_TIMEOUT_SECS")?;

    Ok(LlmModelConfig {
        model,
        endpoint,
        api_key,
        max_tokens,
        temperature: None,
        top_p: None,
        timeout_secs,
    })
}

fn non_blank_env(name: &str) -> Option<String> {
    std::env::var(name)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
