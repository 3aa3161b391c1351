//! Wire types for the portfolio backend protocol.

use serde::{Deserialize, Serialize};

use folio_core::types::Turn;

/// Generic response envelope used by every backend endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    #[serde(default)]
    pub message: String,
    pub data: Option<T>,
}

/// One history entry as the backend expects it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatTurn {
    pub role: String,
    pub content: String,
}

impl From<&Turn> for ChatTurn {
    fn from(turn: &Turn) -> Self {
        Self {
            role: turn.speaker.as_role().to_string(),
            content: turn.text.clone(),
        }
    }
}

/// Body of `POST /api/chat`.
#[derive(Debug, Clone, Serialize)]
pub struct ChatRequest {
    pub message: String,
    pub history: Vec<ChatTurn>,
}

/// Payload of a successful chat response.
#[derive(Debug, Clone, Deserialize)]
pub struct ChatData {
    pub response: String,
}

/// Payload of a successful health response.
#[derive(Debug, Clone, Deserialize)]
pub struct HealthData {
    pub status: String,
    #[serde(default)]
    pub timestamp: i64,
}

/// Body of `POST /api/contact`.
#[derive(Debug, Clone, Serialize)]
pub struct ContactRequest {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_core::types::Speaker;

    #[test]
    fn test_chat_turn_from_turn() {
        let user: ChatTurn = (&Turn::user("hi")).into();
        assert_eq!(user.role, "user");
        assert_eq!(user.content, "hi");

        let bot: ChatTurn = (&Turn {
            speaker: Speaker::Bot,
            text: "hello".to_string(),
        })
            .into();
        assert_eq!(bot.role, "assistant");
    }

    #[test]
    fn test_chat_request_serializes_expected_shape() {
        let req = ChatRequest {
            message: "what are his skills?".to_string(),
            history: vec![ChatTurn {
                role: "user".to_string(),
                content: "hello".to_string(),
            }],
        };
        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(json["message"], "what are his skills?");
        assert_eq!(json["history"][0]["role"], "user");
        assert_eq!(json["history"][0]["content"], "hello");
    }

    #[test]
    fn test_envelope_success_with_data() {
        let raw = r#"{"success":true,"message":"ok","data":{"response":"Hi there"}}"#;
        let env: ApiResponse<ChatData> = serde_json::from_str(raw).unwrap();
        assert!(env.success);
        assert_eq!(env.data.unwrap().response, "Hi there");
    }

    #[test]
    fn test_envelope_failure_without_data() {
        let raw = r#"{"success":false,"message":"Invalid request body"}"#;
        let env: ApiResponse<ChatData> = serde_json::from_str(raw).unwrap();
        assert!(!env.success);
        assert!(env.data.is_none());
        assert_eq!(env.message, "Invalid request body");
    }

    #[test]
    fn test_envelope_missing_message_defaults_empty() {
        let raw = r#"{"success":true,"data":{"response":"x"}}"#;
        let env: ApiResponse<ChatData> = serde_json::from_str(raw).unwrap();
        assert!(env.message.is_empty());
    }

    #[test]
    fn test_health_data_shape() {
        let raw = r#"{"success":true,"message":"Server is healthy","data":{"status":"ok","timestamp":1700000000}}"#;
        let env: ApiResponse<HealthData> = serde_json::from_str(raw).unwrap();
        let data = env.data.unwrap();
        assert_eq!(data.status, "ok");
        assert_eq!(data.timestamp, 1700000000);
    }

    #[test]
    fn test_contact_request_serializes_all_fields() {
        let req = ContactRequest {
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            subject: "Hello".to_string(),
            message: "Hi!".to_string(),
        };
        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(json["name"], "Ada");
        assert_eq!(json["email"], "ada@example.com");
        assert_eq!(json["subject"], "Hello");
        assert_eq!(json["message"], "Hi!");
    }
}
