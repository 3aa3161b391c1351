use serde::{Deserialize, Serialize};

/// Who produced a turn in a conversation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Speaker {
    User,
    Bot,
}

impl Speaker {
    /// Wire-protocol role string used by the backend chat API.
    pub fn as_role(&self) -> &'static str {
        match self {
            Speaker::User => "user",
            Speaker::Bot => "assistant",
        }
    }
}

/// One utterance in a conversation, in order of occurrence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Turn {
    pub speaker: Speaker,
    pub text: String,
}

impl Turn {
    /// A turn spoken by the visitor.
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            speaker: Speaker::User,
            text: text.into(),
        }
    }

    /// A turn spoken by the assistant.
    pub fn bot(text: impl Into<String>) -> Self {
        Self {
            speaker: Speaker::Bot,
            text: text.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_speaker_roles() {
        assert_eq!(Speaker::User.as_role(), "user");
        assert_eq!(Speaker::Bot.as_role(), "assistant");
    }

    #[test]
    fn test_turn_constructors() {
        let t = Turn::user("hello");
        assert_eq!(t.speaker, Speaker::User);
        assert_eq!(t.text, "hello");

        let t = Turn::bot("hi there");
        assert_eq!(t.speaker, Speaker::Bot);
        assert_eq!(t.text, "hi there");
    }

    #[test]
    fn test_speaker_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Speaker::User).unwrap(), "\"user\"");
        assert_eq!(serde_json::to_string(&Speaker::Bot).unwrap(), "\"bot\"");
    }

    #[test]
    fn test_turn_roundtrip() {
        let t = Turn::user("what are his skills?");
        let json = serde_json::to_string(&t).unwrap();
        let back: Turn = serde_json::from_str(&json).unwrap();
        assert_eq!(back, t);
    }
}
