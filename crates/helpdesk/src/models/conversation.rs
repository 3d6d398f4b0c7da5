//! Conversation model representing one entry in a query's thread

use serde::{Deserialize, Serialize};

/// A single message within a query's conversation
///
/// Messages are immutable once created. A conversation only grows by
/// appending, and insertion order is display order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConversationMessage {
    /// Display name of the author
    pub sender: String,
    /// Email address identifying the author
    pub email: String,
    /// Text body
    pub message: String,
    /// Creation time as reported by the server (opaque ordering key)
    pub timestamp: String,
    /// Author's role at the time of posting
    pub role: String,
}

impl ConversationMessage {
    /// Create a new conversation message
    pub fn new(
        sender: impl Into<String>,
        email: impl Into<String>,
        message: impl Into<String>,
        timestamp: impl Into<String>,
        role: impl Into<String>,
    ) -> Self {
        Self {
            sender: sender.into(),
            email: email.into(),
            message: message.into(),
            timestamp: timestamp.into(),
            role: role.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_format_is_camel_case() {
        let msg = ConversationMessage::new("Alice", "a@x.com", "hi", "t1", "Student");
        let json = serde_json::to_value(&msg).unwrap();

        assert_eq!(json["sender"], "Alice");
        assert_eq!(json["email"], "a@x.com");
        assert_eq!(json["message"], "hi");
        assert_eq!(json["timestamp"], "t1");
        assert_eq!(json["role"], "Student");
    }
}
