//! Public API types re-used by external crates (e.g., the HTTP API layer).

use serde::Serialize;

/// Where the text of a [`ChatTurn`] came from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AnswerSource {
    /// Stored FAQ answer; the model was not called.
    Faq,
    /// Generated by the model.
    Model,
    /// Fixed apology after a failed or empty model call.
    Fallback,
}

/// One completed request/response cycle.
///
/// # Example
/// ```
/// use contextor::{AnswerSource, ChatTurn};
/// let turn = ChatTurn {
///     message: "What is PCCOER?".into(),
///     response: "An engineering college.".into(),
///     source: AnswerSource::Faq,
/// };
/// assert_eq!(turn.source, AnswerSource::Faq);
/// ```
#[derive(Clone, Debug)]
pub struct ChatTurn {
    pub message: String,
    pub response: String,
    pub source: AnswerSource,
}
