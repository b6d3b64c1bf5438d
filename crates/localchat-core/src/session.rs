//! In-memory conversation session store.
//!
//! Sessions are keyed by conversation id in a [`DashMap`], so lookups and
//! appends on distinct ids never contend. Appends for the same id serialize
//! on the shard lock, which is what keeps a user/assistant exchange atomic.

use dashmap::DashMap;
use localchat_types::chat::Turn;
use uuid::Uuid;

/// Hard cap on retained turns per session. Once reached, the oldest turns
/// are evicted first.
pub const MAX_HISTORY_TURNS: usize = 10;

#[derive(Debug, Default)]
struct Session {
    turns: Vec<Turn>,
}

/// Concurrent store of chat sessions.
///
/// A session is created lazily on first access and only ever mutated through
/// [`SessionStore::append_turns`], which appends a full user/assistant
/// exchange and then enforces [`MAX_HISTORY_TURNS`].
#[derive(Debug, Default)]
pub struct SessionStore {
    sessions: DashMap<String, Session>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mint a fresh conversation id.
    ///
    /// v7 UUIDs embed a timestamp, so ids sort roughly by creation time and
    /// collisions are not a practical concern.
    pub fn generate_id() -> String {
        format!("session_{}", Uuid::now_v7())
    }

    /// Return a snapshot of the session's history, creating the session if
    /// it does not exist yet.
    pub fn get_or_create(&self, id: &str) -> Vec<Turn> {
        self.sessions
            .entry(id.to_string())
            .or_default()
            .turns
            .clone()
    }

    /// Append one user/assistant exchange to the session, then drop the
    /// oldest turns beyond [`MAX_HISTORY_TURNS`].
    ///
    /// Both turns land under a single shard lock, so readers never observe
    /// a user turn without its assistant reply.
    pub fn append_turns(&self, id: &str, user: Turn, assistant: Turn) {
        let mut session = self.sessions.entry(id.to_string()).or_default();
        session.turns.push(user);
        session.turns.push(assistant);
        let overflow = session.turns.len().saturating_sub(MAX_HISTORY_TURNS);
        if overflow > 0 {
            session.turns.drain(..overflow);
        }
    }

    /// Snapshot of the session's history, or `None` if the id is unknown.
    pub fn history(&self, id: &str) -> Option<Vec<Turn>> {
        self.sessions.get(id).map(|s| s.turns.clone())
    }

    /// Number of live sessions.
    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }
}
