//! GET /health: live Gemini probe plus FAQ size.

use std::sync::Arc;

use ai_llm_service::probe_generate;
use axum::{Json, extract::State, http::StatusCode};

use crate::{core::app_state::AppState, routes::health::health_response::HealthResponse};

/// Handler: GET /health
///
/// Every call performs one real generation request upstream.
pub async fn health_check(
    State(state): State<Arc<AppState>>,
) -> (StatusCode, Json<HealthResponse>) {
    let faq_items = state.contextor.faq().len();
    let probe = probe_generate(state.contextor.model().service()).await;

    if probe.ok {
        (StatusCode::OK, Json(HealthResponse::healthy(faq_items)))
    } else {
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(HealthResponse::failed(probe.message, faq_items)),
        )
    }
}
