use serde::{Deserialize, Serialize};

/// Request payload for /chat.
#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    /// User message; required and non-blank after trimming.
    #[serde(default)]
    pub message: Option<String>,
    /// Optional conversation key; absent means the shared default session.
    #[serde(default)]
    pub session_id: Option<String>,
}

/// Response payload for /chat.
#[derive(Debug, Serialize)]
pub struct ChatResponse {
    /// FAQ answer, model output, or fallback apology.
    pub response: String,
}
