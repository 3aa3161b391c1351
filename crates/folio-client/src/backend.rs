//! HTTP client for the deployed portfolio backend.
//!
//! Thin wrapper over `reqwest` with a hard timeout. Every method returns
//! `ClientError` on anything other than a well-formed success envelope;
//! callers treat all failures the same way (degrade locally, no retry).

use std::time::Duration;

use tracing::debug;

use folio_core::config::BackendConfig;
use folio_core::types::Turn;

use crate::contact::validate;
use crate::error::ClientError;
use crate::types::{ApiResponse, ChatData, ChatRequest, ChatTurn, ContactRequest, HealthData};

/// Client for the chat, contact, and health endpoints.
#[derive(Clone)]
pub struct BackendClient {
    http: reqwest::Client,
    config: BackendConfig,
}

impl BackendClient {
    pub fn new(config: BackendConfig) -> Self {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .unwrap_or_default();
        Self { http, config }
    }

    pub fn config(&self) -> &BackendConfig {
        &self.config
    }

    /// Ask the backend for a chat reply, sending the trailing history.
    ///
    /// Only a 2xx response carrying `success == true` and a non-empty
    /// `data.response` counts; every other shape is an error.
    pub async fn chat(&self, message: &str, history: &[Turn]) -> Result<String, ClientError> {
        if !self.config.enabled {
            return Err(ClientError::Disabled);
        }

        let body = ChatRequest {
            message: message.to_string(),
            history: history.iter().map(ChatTurn::from).collect(),
        };

        debug!(url = %self.config.chat_url(), history_len = body.history.len(), "sending chat request");

        let response = self
            .http
            .post(self.config.chat_url())
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ClientError::Status(status.as_u16()));
        }

        let envelope: ApiResponse<ChatData> = response
            .json()
            .await
            .map_err(|e| ClientError::Malformed(e.to_string()))?;

        match envelope.data {
            Some(data) if envelope.success && !data.response.is_empty() => Ok(data.response),
            _ => Err(ClientError::Malformed(
                "missing response payload".to_string(),
            )),
        }
    }

    /// Submit the contact form. Returns the backend's acknowledgement
    /// message on success.
    pub async fn submit_contact(&self, req: &ContactRequest) -> Result<String, ClientError> {
        validate(req)?;

        if !self.config.enabled {
            return Err(ClientError::Disabled);
        }

        debug!(url = %self.config.contact_url(), "submitting contact form");

        let response = self
            .http
            .post(self.config.contact_url())
            .json(req)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ClientError::Status(status.as_u16()));
        }

        let envelope: ApiResponse<serde_json::Value> = response
            .json()
            .await
            .map_err(|e| ClientError::Malformed(e.to_string()))?;

        if envelope.success {
            Ok(envelope.message)
        } else {
            Err(ClientError::Malformed(envelope.message))
        }
    }

    /// Probe the health endpoint.
    pub async fn health(&self) -> Result<HealthData, ClientError> {
        if !self.config.enabled {
            return Err(ClientError::Disabled);
        }

        let response = self.http.get(self.config.health_url()).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ClientError::Status(status.as_u16()));
        }

        let envelope: ApiResponse<HealthData> = response
            .json()
            .await
            .map_err(|e| ClientError::Malformed(e.to_string()))?;

        envelope
            .data
            .ok_or_else(|| ClientError::Malformed("missing health payload".to_string()))
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn disabled_client() -> BackendClient {
        BackendClient::new(BackendConfig {
            enabled: false,
            ..BackendConfig::default()
        })
    }

    fn unreachable_client() -> BackendClient {
        // Reserved port on localhost: connection is refused immediately,
        // no external traffic.
        BackendClient::new(BackendConfig {
            base_url: "http://127.0.0.1:9".to_string(),
            timeout_secs: 1,
            ..BackendConfig::default()
        })
    }

    fn contact_req() -> ContactRequest {
        ContactRequest {
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            subject: "Hello".to_string(),
            message: "Hi!".to_string(),
        }
    }

    #[tokio::test]
    async fn test_chat_disabled() {
        let err = disabled_client().chat("hello", &[]).await.unwrap_err();
        assert!(matches!(err, ClientError::Disabled));
    }

    #[tokio::test]
    async fn test_contact_disabled() {
        let err = disabled_client()
            .submit_contact(&contact_req())
            .await
            .unwrap_err();
        assert!(matches!(err, ClientError::Disabled));
    }

    #[tokio::test]
    async fn test_health_disabled() {
        let err = disabled_client().health().await.unwrap_err();
        assert!(matches!(err, ClientError::Disabled));
    }

    #[tokio::test]
    async fn test_chat_unreachable_is_http_error() {
        let err = unreachable_client().chat("hello", &[]).await.unwrap_err();
        assert!(matches!(err, ClientError::Http(_)));
    }

    #[tokio::test]
    async fn test_contact_validation_runs_before_network() {
        // Invalid email fails locally even against an unreachable backend.
        let mut req = contact_req();
        req.email = "not-an-email".to_string();
        let err = unreachable_client()
            .submit_contact(&req)
            .await
            .unwrap_err();
        assert!(matches!(err, ClientError::InvalidContact(_)));
    }

    #[test]
    fn test_client_uses_configured_urls() {
        let client = BackendClient::new(BackendConfig {
            base_url: "http://example.test".to_string(),
            ..BackendConfig::default()
        });
        assert_eq!(client.config().chat_url(), "http://example.test/api/chat");
    }
}
