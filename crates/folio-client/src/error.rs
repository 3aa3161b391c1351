//! Error types for the backend client.
//!
//! None of these ever reach the visitor: every chat failure degrades to
//! the local engine and every contact failure degrades to a mailto link.

/// Errors from talking to the remote backend.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("backend is disabled")]
    Disabled,
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("backend returned status {0}")]
    Status(u16),
    #[error("malformed backend response: {0}")]
    Malformed(String),
    #[error("invalid contact submission: {0}")]
    InvalidContact(String),
}
