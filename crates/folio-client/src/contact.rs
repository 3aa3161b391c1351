//! Contact form validation and the degraded mailto path.

use crate::error::ClientError;
use crate::types::ContactRequest;

/// Client-side validation, mirroring what the backend enforces.
pub fn validate(req: &ContactRequest) -> Result<(), ClientError> {
    if req.name.trim().is_empty() || req.email.trim().is_empty() || req.message.trim().is_empty() {
        return Err(ClientError::InvalidContact(
            "name, email, and message are required".to_string(),
        ));
    }
    if !req.email.contains('@') {
        return Err(ClientError::InvalidContact(
            "invalid email address".to_string(),
        ));
    }
    Ok(())
}

/// Build a prefilled `mailto:` compose URL for when the backend is down.
///
/// The body carries the sender's name and address so the message stays
/// attributable once it arrives over plain email.
pub fn mailto_fallback(owner_email: &str, req: &ContactRequest) -> String {
    let body = format!(
        "Name: {}\nEmail: {}\n\n{}",
        req.name, req.email, req.message
    );
    format!(
        "mailto:{}?subject={}&body={}",
        owner_email,
        urlencoding::encode(&req.subject),
        urlencoding::encode(&body)
    )
}
