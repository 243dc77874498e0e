use serde::{Deserialize, Serialize};

use crate::types::{MessageParam, Model};

/// Fixed sampling temperature for every completion request.
///
/// Kept as f64 so the serialized value is exactly 0.3.
pub const TEMPERATURE: f64 = 0.3;

/// The response format requested from the endpoint, always plain text.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ResponseFormat {
    /// The format type, always "text".
    pub r#type: String,
}

impl ResponseFormat {
    /// Create the fixed text response format.
    pub fn text() -> Self {
        Self {
            r#type: "text".to_string(),
        }
    }
}

impl Default for ResponseFormat {
    fn default() -> Self {
        Self::text()
    }
}

/// Parameters for one chat completion request.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CompletionRequest {
    /// The model that will complete the conversation.
    pub model: Model,

    /// Ordered input messages: the system instruction followed by the
    /// trailing window of session history.
    pub messages: Vec<MessageParam>,

    /// Amount of randomness injected into the response. Fixed.
    pub temperature: f64,

    /// The response format. Fixed to text.
    pub response_format: ResponseFormat,
}

impl CompletionRequest {
    /// Create a new `CompletionRequest` with the fixed temperature and
    /// response format.
    pub fn new(model: Model, messages: Vec<MessageParam>) -> Self {
        Self {
            model,
            messages,
            temperature: TEMPERATURE,
            response_format: ResponseFormat::text(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{KnownModel, MessageRole};
    use serde_json::{json, to_value};

    #[test]
    fn request_serializes_fixed_fields() {
        let request = CompletionRequest::new(
            Model::Known(KnownModel::Palm2ChatBison),
            vec![
                MessageParam::system("guidelines"),
                MessageParam::user("I feel anxious"),
            ],
        );
        let json = to_value(&request).unwrap();

        assert_eq!(
            json,
            json!({
                "model": "google/palm-2-chat-bison",
                "messages": [
                    {"role": "system", "content": "guidelines"},
                    {"role": "user", "content": "I feel anxious"}
                ],
                "temperature": 0.3,
                "response_format": {"type": "text"}
            })
        );
    }

    #[test]
    fn message_order_is_preserved() {
        let request = CompletionRequest::new(
            Model::default(),
            vec![
                MessageParam::system("s"),
                MessageParam::assistant("a"),
                MessageParam::user("u"),
            ],
        );
        let roles: Vec<MessageRole> = request.messages.iter().map(|m| m.role).collect();
        assert_eq!(
            roles,
            vec![
                MessageRole::System,
                MessageRole::Assistant,
                MessageRole::User
            ]
        );
    }
}
