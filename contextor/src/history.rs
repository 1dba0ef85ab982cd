//! Rolling query history, one bounded queue per conversation.
//!
//! Every access goes through a single mutex; the lock is held only for the
//! queue operation and never across an `.await`.

use std::{
    collections::{HashMap, VecDeque},
    sync::{Mutex, MutexGuard},
};

use tracing::debug;

/// Number of past queries fed back to the model.
pub const MAX_HISTORY: usize = 2;

/// Session used when a client does not send a `session_id`.
pub const DEFAULT_SESSION: &str = "default";

/// Upper bound on tracked conversations; the oldest is forgotten first.
pub const MAX_SESSIONS: usize = 1024;

/// Bounded FIFO of raw user queries, oldest first.
#[derive(Debug, Clone)]
pub struct ConversationHistory {
    entries: VecDeque<String>,
    capacity: usize,
}

impl Default for ConversationHistory {
    fn default() -> Self {
        Self::with_capacity(MAX_HISTORY)
    }
}

impl ConversationHistory {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: VecDeque::with_capacity(capacity + 1),
            capacity,
        }
    }

    /// Appends `query` and evicts from the head while over capacity.
    pub fn record(&mut self, query: impl Into<String>) {
        self.entries.push_back(query.into());
        while self.entries.len() > self.capacity {
            self.entries.pop_front();
        }
    }

    /// Current contents, oldest first.
    pub fn recent(&self) -> Vec<String> {
        self.entries.iter().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[derive(Debug, Default)]
struct Sessions {
    by_id: HashMap<String, ConversationHistory>,
    created: VecDeque<String>,
}

/// Per-session histories shared by all request handlers.
#[derive(Debug, Default)]
pub struct SessionHistories {
    inner: Mutex<Sessions>,
}

impl SessionHistories {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records `query` as the newest entry of `session`.
    pub fn record(&self, session: &str, query: &str) {
        let mut guard = self.lock();
        let sessions = &mut *guard;

        if !sessions.by_id.contains_key(session) {
            if sessions.created.len() >= MAX_SESSIONS {
                if let Some(oldest) = sessions.created.pop_front() {
                    sessions.by_id.remove(&oldest);
                    debug!(session = %oldest, "evicted conversation history");
                }
            }
            sessions.created.push_back(session.to_string());
        }

        sessions
            .by_id
            .entry(session.to_string())
            .or_default()
            .record(query);
    }

    /// Up to [`MAX_HISTORY`] past queries of `session`, oldest first.
    pub fn recent(&self, session: &str) -> Vec<String> {
        self.lock()
            .by_id
            .get(session)
            .map(ConversationHistory::recent)
            .unwrap_or_default()
    }

    /// Number of conversations currently tracked.
    pub fn session_count(&self) -> usize {
        self.lock().by_id.len()
    }

    fn lock(&self) -> MutexGuard<'_, Sessions> {
        // A panic mid-update leaves the queues structurally valid.
        self.inner.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}
