//! FAQ-first chat pipeline with a model fallback.
//!
//! Public API: [`Contextor::answer`]. It looks the message up in the FAQ
//! store, and only on a miss builds a prompt from the session's recent
//! queries plus the whole FAQ dataset and asks Gemini. The message is then
//! recorded in the session history.

pub mod cfg;
mod error;
pub mod history;
pub mod llm;
pub mod prompt;

mod api_types;

pub use api_types::{AnswerSource, ChatTurn};

pub use error::ContextorError;

use std::sync::Arc;

use ai_llm_service::GeminiService;
use cfg::ContextorConfig;
use faq_store::FaqStore;
use history::SessionHistories;
use llm::ModelClient;
use tracing::{info, instrument};

/// Shared chat pipeline; construct once and wrap in `Arc`.
#[derive(Debug)]
pub struct Contextor {
    faq: Arc<FaqStore>,
    model: ModelClient,
    histories: SessionHistories,
}

impl Contextor {
    /// Loads the FAQ resource and builds the Gemini client from `cfg`.
    ///
    /// FAQ problems never fail construction (see [`FaqStore::load_or_init`]).
    ///
    /// # Errors
    /// Propagates client construction errors from `ai-llm-service`.
    pub fn new(cfg: ContextorConfig) -> Result<Self, ContextorError> {
        let faq = FaqStore::load_or_init(&cfg.faq_path);
        let svc = GeminiService::new(cfg.llm)?;
        Ok(Self::from_parts(Arc::new(faq), Arc::new(svc)))
    }

    /// Assembles a pipeline from already-built parts.
    pub fn from_parts(faq: Arc<FaqStore>, svc: Arc<GeminiService>) -> Self {
        Self {
            faq,
            model: ModelClient::new(svc),
            histories: SessionHistories::new(),
        }
    }

    pub fn faq(&self) -> &FaqStore {
        &self.faq
    }

    pub fn model(&self) -> &ModelClient {
        &self.model
    }

    pub fn histories(&self) -> &SessionHistories {
        &self.histories
    }

    /// Runs one chat turn for `session`.
    ///
    /// Callers are expected to reject blank messages first; a blank message
    /// never matches the FAQ and goes straight to the model.
    #[instrument(skip(self, message), fields(session = %session))]
    pub async fn answer(&self, session: &str, message: &str) -> ChatTurn {
        let message = message.trim();
        info!("User query: {message}");

        let (response, source) = match self.faq.find_best_answer(message) {
            Some(answer) => (answer.to_string(), AnswerSource::Faq),
            None => {
                let history = self.histories.recent(session);
                let prompt = prompt::build_prompt(message, &history, &self.faq);
                let reply = self.model.ask(&prompt).await;
                let source = if reply.is_fallback() {
                    AnswerSource::Fallback
                } else {
                    AnswerSource::Model
                };
                (reply.into_text(), source)
            }
        };

        info!(source = ?source, "Bot response: {response}");
        self.histories.record(session, message);

        ChatTurn {
            message: message.to_string(),
            response,
            source,
        }
    }
}
