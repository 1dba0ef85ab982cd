/// Configuration for a Gemini model invocation.
///
/// # Fields
///
/// - `model`: The model identifier (e.g., `"gemini-1.5-flash"`).
/// - `endpoint`: API base URL, without the `/v1beta/...` path.
/// - `api_key`: Credential sent as `x-goog-api-key`.
/// - `max_tokens`: Optional `maxOutputTokens`.
/// - `temperature`: Optional sampling temperature.
/// - `top_p`: Optional nucleus sampling cutoff.
/// - `timeout_secs`: Optional request timeout; `None` leaves the call unbounded.
///
/// # Examples
///
/// ```
/// use ai_llm_service::LlmModelConfig;
///
/// let cfg = LlmModelConfig {
///     model: "gemini-1.5-flash".to_string(),
///     endpoint: "https://generativelanguage.googleapis.com".to_string(),
///     api_key: "AIza...".to_string(),
///     max_tokens: None,
///     temperature: None,
///     top_p: None,
///     timeout_secs: None,
/// };
/// assert!(!cfg.has_generation_overrides());
/// ```
#[derive(Debug, Clone)]
pub struct LlmModelConfig {
    /// Model identifier string.
    pub model: String,

    /// API base (scheme + host).
    pub endpoint: String,

    /// API key for authentication.
    pub api_key: String,

    /// Maximum number of tokens to generate.
    pub max_tokens: Option<u32>,

    /// Sampling temperature.
    pub temperature: Option<f32>,

    /// Nucleus sampling parameter.
    pub top_p: Option<f32>,

    /// Optional request timeout (in seconds).
    pub timeout_secs: Option<u64>,
}

impl LlmModelConfig {
    /// Whether any `generationConfig` field must be sent with a request.
    pub fn has_generation_overrides(&self) -> bool {
        self.max_tokens.is_some() || self.temperature.is_some() || self.top_p.is_some()
    }
}
