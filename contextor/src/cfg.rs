//! Runtime configuration loaded from environment variables.

use std::path::PathBuf;

use ai_llm_service::{LlmModelConfig, config_gemini};
use faq_store::DEFAULT_FAQ_PATH;

use crate::error::ContextorError;

/// Config bag for the chat pipeline.
#[derive(Clone, Debug)]
pub struct ContextorConfig {
    /// Gemini model settings (credential included).
    pub llm: LlmModelConfig,
    /// FAQ JSON resource.
    pub faq_path: PathBuf,
}

impl ContextorConfig {
    /// Build from environment variables.
    ///
    /// - `GEMINI_*` / `LLM_*` via [`config_gemini`]
    /// - `FAQ_DATA_PATH` (default `faq_data.json`)
    ///
    /// # Errors
    /// Fails when `GEMINI_API_KEY` is missing or a knob is malformed.
    pub fn from_env() -> Result<Self, ContextorError> {
        Ok(Self {
            llm: config_gemini()?,
            faq_path: PathBuf::from(env("FAQ_DATA_PATH", DEFAULT_FAQ_PATH)),
        })
    }
}

fn env(k: &str, dflt: &str) -> String {
    std::env::var(k)
        .ok()
        .filter(|v| !v.trim().is_empty())
        .unwrap_or_else(|| dflt.to_string())
}
