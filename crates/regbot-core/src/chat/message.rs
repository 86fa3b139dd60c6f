//! Chat transcript message types.

use chrono::Utc;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Represents the sender of a chat message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageRole {
    /// Message typed by the user.
    User,
    /// Reply produced by the bot.
    Bot,
}

/// A single message in the chat transcript.
///
/// Messages are created only by the conversation controller, are never
/// mutated or deleted once created, and keep strict insertion order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    /// Unique message identifier (UUID v4)
    pub id: String,
    /// Who sent the message
    pub role: MessageRole,
    /// Message text
    pub content: String,
    /// Creation time as Unix milliseconds
    pub timestamp: i64,
}

impl ChatMessage {
    /// Creates a new message with a fresh id and the current time.
    pub fn new(role: MessageRole, content: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            role,
            content: content.into(),
            timestamp: Utc::now().timestamp_millis(),
        }
    }

    /// Creates a user message.
    pub fn user(content: impl Into<String>) -> Self {
        Self::new(MessageRole::User, content)
    }

    /// Creates a bot message.
    pub fn bot(content: impl Into<String>) -> Self {
        Self::new(MessageRole::Bot, content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constructors_set_role_and_content() {
        let user = ChatMessage::user("hello");
        let bot = ChatMessage::bot("world");

        assert_eq!(user.role, MessageRole::User);
        assert_eq!(user.content, "hello");
        assert_eq!(bot.role, MessageRole::Bot);
        assert_eq!(bot.content, "world");
    }

    #[test]
    fn test_message_ids_are_unique() {
        let a = ChatMessage::user("same");
        let b = ChatMessage::user("same");

        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_role_serializes_lowercase() {
        let message = ChatMessage::user("hi");
        let json = serde_json::to_string(&message).unwrap();

        assert!(json.contains("\"role\":\"user\""));

        let parsed: ChatMessage = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, message);
    }
}
