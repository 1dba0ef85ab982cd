use std::{any::Any, sync::Arc};

mod core;
mod error_handler;
mod routes;

pub use crate::core::app_state::{AppState, DEFAULT_API_ADDRESS, bind_address};
pub use crate::error_handler::{AppError, AppResult};

use axum::{
    Router,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use tokio::signal;
use tower_http::{catch_panic::CatchPanicLayer, trace::TraceLayer};
use tracing::{error, info};

use crate::routes::{
    chat::chat_route::chat,
    health::health_route::health_check,
    index_route::{index, script},
};

pub async fn start() -> AppResult<()> {
    let state = AppState::from_env()?;
    info!(
        faq_items = state.contextor.faq().len(),
        "FAQ data loaded: {} items",
        state.contextor.faq().len()
    );

    let host_url = bind_address();
    let app = build_router(state);

    // Bind to address
    let listener = tokio::net::TcpListener::bind(&host_url)
        .await
        .map_err(AppError::Bind)?;
    info!(address = %host_url, "listening");

    // Start server with graceful shutdown on Ctrl+C
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(AppError::Server)?;

    Ok(())
}

/// Routes and middleware, without binding a socket.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/static/script.js", get(script))
        .route("/chat", post(chat))
        .route("/health", get(health_check))
        .layer(CatchPanicLayer::custom(panic_response))
        .layer(TraceLayer::new_for_http())
        .with_state(Arc::new(state))
}

/// Turns a handler panic into the generic 500 JSON body.
fn panic_response(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = err
        .downcast_ref::<String>()
        .map(String::as_str)
        .or_else(|| err.downcast_ref::<&str>().copied())
        .unwrap_or("unknown panic");
    error!(%detail, "Chat endpoint error");
    AppError::Internal.into_response()
}

/// Returns a future that resolves when Ctrl+C is pressed
async fn shutdown_signal() {
    if let Err(e) = signal::ctrl_c().await {
        error!(error = %e, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    info!("shutdown signal received");
}
