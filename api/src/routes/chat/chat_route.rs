//! POST /chat: FAQ lookup with Gemini fallback.

use std::sync::Arc;

use axum::{Json, extract::State, extract::rejection::JsonRejection};
use contextor::history::DEFAULT_SESSION;

use crate::{
    core::app_state::AppState,
    error_handler::{AppError, AppResult},
    routes::chat::chat_request::{ChatRequest, ChatResponse},
};

/// Longest accepted `session_id`.
const MAX_SESSION_ID_LEN: usize = 128;

/// Handler: POST /chat
///
/// # Example
/// ```bash
/// curl -X POST http://127.0.0.1:5000/chat \
///   -H 'content-type: application/json' \
///   -d '{"message":"What is PCCOER?"}'
/// ```
pub async fn chat(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<ChatRequest>, JsonRejection>,
) -> AppResult<Json<ChatResponse>> {
    let Json(body) = payload?;

    let message = body.message.as_deref().map(str::trim).unwrap_or_default();
    if message.is_empty() {
        return Err(AppError::BadRequest("No message provided".into()));
    }

    let session = match body.session_id.as_deref().map(str::trim) {
        Some(id) if id.len() > MAX_SESSION_ID_LEN => {
            return Err(AppError::BadRequest("session_id is too long".into()));
        }
        Some(id) if !id.is_empty() => id,
        _ => DEFAULT_SESSION,
    };

    let turn = state.contextor.answer(session, message).await;

    Ok(Json(ChatResponse {
        response: turn.response,
    }))
}
