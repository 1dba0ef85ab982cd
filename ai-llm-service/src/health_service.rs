//! Live health probe for the Gemini backend.
//!
//! Unlike a metadata ping, the probe issues a real `generateContent` call with
//! a fixed greeting, so every `/health` hit costs one upstream request. Any
//! successful exchange counts as healthy, even when the model returns no text.

use std::time::Instant;

use serde::Serialize;
use tracing::{info, warn};

use crate::services::gemini_service::GeminiService;

/// Prompt sent by [`probe_generate`].
pub const HEALTH_PROBE_PROMPT: &str = "Hello, are you working?";

/// A serializable health snapshot for the configured model.
#[derive(Debug, Clone, Serialize)]
pub struct HealthStatus {
    /// Target endpoint base URL.
    pub endpoint: String,
    /// Model identifier used for the probe.
    pub model: String,
    /// Overall health flag.
    pub ok: bool,
    /// Measured latency of the probe in milliseconds.
    pub latency_ms: u128,
    /// `"ok"` on success, otherwise the error's display string.
    pub message: String,
}

/// Runs one synthetic generation against `svc`.
///
/// This function never fails: errors are folded into
/// `HealthStatus { ok: false, message }`.
pub async fn probe_generate(svc: &GeminiService) -> HealthStatus {
    let cfg = svc.config();
    let start = Instant::now();
    let result = svc.generate(HEALTH_PROBE_PROMPT).await;
    let latency_ms = start.elapsed().as_millis();

    match result {
        Ok(_) => {
            info!(
                endpoint = %cfg.endpoint,
                model = %cfg.model,
                latency_ms,
                "health probe completed"
            );
            HealthStatus {
                endpoint: cfg.endpoint.clone(),
                model: cfg.model.clone(),
                ok: true,
                latency_ms,
                message: "ok".into(),
            }
        }
        Err(err) => {
            warn!(
                endpoint = %cfg.endpoint,
                model = %cfg.model,
                latency_ms,
                error = %err,
                "health probe failed"
            );
            HealthStatus {
                endpoint: cfg.endpoint.clone(),
                model: cfg.model.clone(),
                ok: false,
                latency_ms,
                message: err.to_string(),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::LlmModelConfig;
    use serde_json::json;
    use wiremock::matchers::{body_partial_json, method};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn svc(endpoint: String) -> GeminiService {
        GeminiService::new(LlmModelConfig {
            model: "gemini-1.5-flash".into(),
            endpoint,
            api_key: "k".into(),
            max_tokens: None,
            temperature: None,
            top_p: None,
            timeout_secs: Some(5),
        })
        .unwrap()
    }

    #[tokio::test]
    async fn probe_sends_greeting_and_reports_ok() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(body_partial_json(json!({
                "contents": [{ "parts": [{ "text": HEALTH_PROBE_PROMPT }] }]
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "candidates": [] })))
            .expect(1)
            .mount(&server)
            .await;

        let status = probe_generate(&svc(server.uri())).await;
        assert!(status.ok);
        assert_eq!(status.model, "gemini-1.5-flash");
    }

    #[tokio::test]
    async fn probe_folds_errors_into_status() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
            .mount(&server)
            .await;

        let status = probe_generate(&svc(server.uri())).await;
        assert!(!status.ok);
        assert!(status.message.contains("500"));
        assert!(status.message.contains("boom"));
    }
}
