//! Rule-based conversational engine for the portfolio assistant.
//!
//! Classifies visitor utterances into intents over a fixed keyword rule
//! order, renders canned multi-section responses from a static knowledge
//! base, and carries a one-slot pending topic between turns so a short
//! "yes" continues the conversation naturally.

pub mod chooser;
pub mod format;
pub mod intent;
pub mod knowledge;
pub mod responder;
pub mod session;
pub mod topic;

pub use chooser::{Chooser, FixedChooser, RandomChooser};
pub use format::render_html;
pub use intent::{Intent, IntentClassifier};
pub use knowledge::KnowledgeBase;
pub use responder::{Reply, Responder};
pub use session::{ChatSession, ConversationState};
pub use topic::{Topic, TopicCard};
