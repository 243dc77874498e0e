use serde::{Deserialize, Serialize};

/// Role type for a conversation message.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageRole {
    /// User role.
    User,

    /// Assistant role.
    Assistant,

    /// System role.
    System,
}

/// A single turn in the conversation.
///
/// Messages are immutable once created; insertion order is chat order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MessageParam {
    /// The role of the message.
    pub role: MessageRole,

    /// The content of the message.
    pub content: String,
}

impl MessageParam {
    /// Create a new `MessageParam` with the given content and role.
    pub fn new(content: impl Into<String>, role: MessageRole) -> Self {
        Self {
            role,
            content: content.into(),
        }
    }

    /// Create a new user `MessageParam`.
    pub fn user(content: impl Into<String>) -> Self {
        Self::new(content, MessageRole::User)
    }

    /// Create a new assistant `MessageParam`.
    pub fn assistant(content: impl Into<String>) -> Self {
        Self::new(content, MessageRole::Assistant)
    }

    /// Create a new system `MessageParam`.
    pub fn system(content: impl Into<String>) -> Self {
        Self::new(content, MessageRole::System)
    }
}

impl From<&str> for MessageParam {
    fn from(content: &str) -> Self {
        Self::user(content)
    }
}

impl From<String> for MessageParam {
    fn from(content: String) -> Self {
        Self::user(content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, to_value};

    #[test]
    fn message_param_serializes_lowercase_role() {
        let message = MessageParam::user("I feel anxious");
        let json = to_value(&message).unwrap();

        assert_eq!(
            json,
            json!({
                "role": "user",
                "content": "I feel anxious"
            })
        );
    }

    #[test]
    fn message_param_system_role() {
        let message = MessageParam::system("You are a compassionate mental health ally.");
        let json = to_value(&message).unwrap();
        assert_eq!(json["role"], "system");
    }

    #[test]
    fn message_param_from_str() {
        let message: MessageParam = "Hello".into();
        assert_eq!(message.role, MessageRole::User);

        let message = MessageParam::from("Hello again".to_string());
        assert_eq!(message.role, MessageRole::User);
    }

    #[test]
    fn message_param_deserialization() {
        let json = json!({
            "role": "assistant",
            "content": "Welcome back"
        });

        let message: MessageParam = serde_json::from_value(json).unwrap();
        assert_eq!(message.role, MessageRole::Assistant);
        assert_eq!(message.content, "Welcome back");
    }
}
