//! Remote-first responder with local fallback.
//!
//! Each submission makes at most one backend call. Any failure (timeout,
//! non-2xx, malformed body, disabled backend) immediately hands the
//! utterance to the local rule engine instead. No retries, and the error
//! is never shown to the visitor.

use tracing::debug;

use folio_chat::session::ChatSession;

use crate::backend::BackendClient;

/// Couples one chat session with the backend client that enhances it.
pub struct AssistedResponder {
    client: BackendClient,
    session: ChatSession,
}

impl AssistedResponder {
    pub fn new(client: BackendClient, session: ChatSession) -> Self {
        Self { client, session }
    }

    /// Answer `text`, preferring the backend.
    ///
    /// On a remote reply the local pending topic is left untouched; only
    /// local rule matches move it. On fallback the session responds and
    /// advances state exactly as a pure-local session would.
    pub async fn send(&mut self, text: &str) -> String {
        let window = self.client.config().history_turns;
        let remote = self
            .client
            .chat(text, self.session.recent_history(window))
            .await;

        match remote {
            Ok(reply) => {
                debug!("using remote chat reply");
                self.session.record(text, &reply);
                reply
            }
            Err(e) => {
                debug!(error = %e, "remote chat unavailable, using local engine");
                self.session.send(text)
            }
        }
    }

    pub fn session(&self) -> &ChatSession {
        &self.session
    }
}

// =============================================================================
// Tests
// =============================================================================
