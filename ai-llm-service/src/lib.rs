//! Shared LLM service for the admission bot.
//!
//! - [`config`]: model configuration and env-driven defaults.
//! - [`services::gemini_service`]: thin non-streaming Gemini client.
//! - [`health_service`]: live probe used by `/health`.
//! - [`telemetry`]: tracing layer scoped to this crate.

pub mod config;
pub mod error_handler;
pub mod health_service;
pub mod services;
pub mod telemetry;

pub use config::{default_config::config_gemini, llm_model_config::LlmModelConfig};
pub use error_handler::{AiLlmError, ConfigError, ProviderError};
pub use health_service::{HealthStatus, probe_generate};
pub use services::gemini_service::GeminiService;
