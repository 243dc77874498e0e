use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// The message body of one completion choice.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChoiceMessage {
    /// The role reported by the endpoint, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,

    /// The reply text. A response without this field is malformed.
    pub content: String,
}

/// One completion choice.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Choice {
    /// The message for this choice.
    pub message: ChoiceMessage,
}

/// A chat completion response from the endpoint.
///
/// Only the fields the core consumes are modeled; everything else in the
/// payload is ignored.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChatCompletion {
    /// The completion choices. The first choice carries the reply.
    pub choices: Vec<Choice>,
}

impl ChatCompletion {
    /// Extract the first choice's message content.
    ///
    /// An empty choices array counts as a malformed payload.
    pub fn into_text(self) -> Result<String> {
        self.choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content)
            .ok_or_else(|| {
                Error::serialization("completion response contained no choices", None)
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn extracts_first_choice_content() {
        let json = json!({
            "id": "gen-123",
            "choices": [
                {"message": {"role": "assistant", "content": "Reflection: breathe"}},
                {"message": {"role": "assistant", "content": "second"}}
            ]
        });

        let completion: ChatCompletion = serde_json::from_value(json).unwrap();
        assert_eq!(completion.into_text().unwrap(), "Reflection: breathe");
    }

    #[test]
    fn empty_choices_is_an_error() {
        let json = json!({"choices": []});
        let completion: ChatCompletion = serde_json::from_value(json).unwrap();
        assert!(completion.into_text().is_err());
    }

    #[test]
    fn missing_content_fails_deserialization() {
        let json = json!({
            "choices": [{"message": {"role": "assistant"}}]
        });
        let completion: std::result::Result<ChatCompletion, _> = serde_json::from_value(json);
        assert!(completion.is_err());
    }
}
