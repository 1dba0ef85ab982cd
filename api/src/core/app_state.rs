use std::sync::Arc;

use contextor::{Contextor, cfg::ContextorConfig};

use crate::error_handler::AppResult;

/// Address used when `API_ADDRESS` is not set.
pub const DEFAULT_API_ADDRESS: &str = "0.0.0.0:5000";

/// Shared state for all HTTP handlers.
#[derive(Clone)]
pub struct AppState {
    /// FAQ store, Gemini client and conversation histories.
    pub contextor: Arc<Contextor>,
}

impl AppState {
    pub fn new(contextor: Arc<Contextor>) -> Self {
        Self { contextor }
    }

    /// Load shared state from environment variables.
    ///
    /// Fails fast when `GEMINI_API_KEY` is missing; FAQ problems are
    /// recovered inside the store.
    pub fn from_env() -> AppResult<Self> {
        let cfg = ContextorConfig::from_env()?;
        let contextor = Contextor::new(cfg)?;
        Ok(Self::new(Arc::new(contextor)))
    }
}

/// Bind address from `API_ADDRESS`, defaulting to [`DEFAULT_API_ADDRESS`].
pub fn bind_address() -> String {
    std::env::var("API_ADDRESS")
        .ok()
        .filter(|v| !v.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_API_ADDRESS.into())
}
