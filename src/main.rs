use std::error::Error;

use ai_llm_service::telemetry;
use tracing_subscriber::{
    EnvFilter, Layer, filter, fmt, layer::SubscriberExt, util::SubscriberInitExt,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // Load environment variables from .env file when present.
    // The credential may also come straight from the process environment.
    let dotenv = dotenvy::dotenv();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    // Library events are rendered by the scoped telemetry layer only.
    let app_only =
        filter::filter_fn(|meta| !meta.target().starts_with(telemetry::TARGET_PREFIX));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false).with_filter(app_only))
        .with(telemetry::layer())
        .init();

    if let Some(e) = unreadable_env(dotenv) {
        tracing::warn!(error = %e, "ignoring unreadable .env file");
    }

    tracing::info!("starting admission bot");

    api::start().await?;

    Ok(())
}

/// A missing `.env` is expected; anything else is worth a warning.
fn unreadable_env<T>(loaded: Result<T, dotenvy::Error>) -> Option<dotenvy::Error> {
    loaded.err().filter(|e| !e.not_found())
}
