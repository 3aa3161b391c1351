//! Per-session conversation state.
//!
//! Each open chat owns exactly one [`ChatSession`]; nothing here is shared
//! across sessions, so parallel tabs and tests stay isolated. State is
//! in-memory only and dies with the session.

use chrono::Local;
use uuid::Uuid;

use folio_core::types::Turn;

use crate::chooser::{Chooser, RandomChooser};
use crate::knowledge::KnowledgeBase;
use crate::responder::Responder;
use crate::topic::Topic;

/// The mutable state the engine reads and writes across turns.
///
/// `pending_topic` is the single outstanding suggestion, consumed at most
/// once. `history` is append-only and only ever read to build the trailing
/// window for a remote call; local classification never replays it.
#[derive(Debug, Clone, Default)]
pub struct ConversationState {
    pub pending_topic: Option<Topic>,
    pub history: Vec<Turn>,
}

impl ConversationState {
    pub fn new() -> Self {
        Self::default()
    }
}

/// One visitor's chat session: engine, variant chooser, and owned state.
pub struct ChatSession {
    pub id: Uuid,
    pub started_at: i64,
    responder: Responder,
    chooser: Box<dyn Chooser + Send>,
    state: ConversationState,
}

impl ChatSession {
    /// Open a session over the given knowledge base with random variant
    /// selection.
    pub fn new(kb: KnowledgeBase) -> Self {
        Self::with_chooser(kb, Box::new(RandomChooser))
    }

    /// Open a session with an injected chooser (deterministic in tests).
    pub fn with_chooser(kb: KnowledgeBase, chooser: Box<dyn Chooser + Send>) -> Self {
        Self {
            id: Uuid::new_v4(),
            started_at: Local::now().timestamp(),
            responder: Responder::new(kb),
            chooser,
            state: ConversationState::new(),
        }
    }

    /// Answer `text` locally, advance the pending topic, and append both
    /// turns to the history.
    pub fn send(&mut self, text: &str) -> String {
        let reply = self
            .responder
            .respond(&self.state, text, self.chooser.as_mut());
        self.state.pending_topic = reply.next_topic;
        self.record(text, &reply.text);
        reply.text
    }

    /// Append a turn pair answered elsewhere (the remote backend). The
    /// pending topic is left untouched: only local rule matches move it.
    pub fn record(&mut self, text: &str, reply: &str) {
        self.state.history.push(Turn::user(text));
        self.state.history.push(Turn::bot(reply));
    }

    pub fn pending_topic(&self) -> Option<Topic> {
        self.state.pending_topic
    }

    pub fn history(&self) -> &[Turn] {
        &self.state.history
    }

    /// The trailing `n` turns, for the remote request body.
    pub fn recent_history(&self, n: usize) -> &[Turn] {
        let len = self.state.history.len();
        &self.state.history[len.saturating_sub(n)..]
    }

    pub fn responder(&self) -> &Responder {
        &self.responder
    }
}

// =============================================================================
// Tests
// =============================================================================
