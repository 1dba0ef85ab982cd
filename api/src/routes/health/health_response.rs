use serde::Serialize;

/// Response payload for /health.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// `"healthy"` or `"error"`.
    pub status: &'static str,
    /// `"working"` or `"error"`.
    pub gemini_api: &'static str,
    /// Display string of the probe failure.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    /// Number of FAQ items held in memory.
    pub faq_items: usize,
}

impl HealthResponse {
    pub fn healthy(faq_items: usize) -> Self {
        Self {
            status: "healthy",
            gemini_api: "working",
            error: None,
            faq_items,
        }
    }

    pub fn failed(error: String, faq_items: usize) -> Self {
        Self {
            status: "error",
            gemini_api: "error",
            error: Some(error),
            faq_items,
        }
    }
}
