//! Client for the remote portfolio backend.
//!
//! Wraps the chat, contact, and health endpoints, and layers the local
//! response engine underneath the chat call so remote failures degrade
//! silently instead of surfacing to the visitor.

pub mod assist;
pub mod backend;
pub mod contact;
pub mod error;
pub mod types;

pub use assist::AssistedResponder;
pub use backend::BackendClient;
pub use contact::{mailto_fallback, validate};
pub use error::ClientError;
pub use types::{ApiResponse, ChatData, ChatRequest, ChatTurn, ContactRequest, HealthData};
