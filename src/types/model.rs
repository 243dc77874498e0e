use std::fmt;

use serde::{Deserialize, Serialize};

/// Represents an analysis model identifier.
///
/// This can be a predefined model version or a custom string value that
/// is passed through to the endpoint unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Model {
    /// Known model versions
    Known(KnownModel),

    /// Custom model identifier (passed through unchanged)
    Custom(String),
}

/// Known model versions offered by the journal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum KnownModel {
    /// PaLM 2 chat (the default analysis model)
    #[serde(rename = "google/palm-2-chat-bison")]
    Palm2ChatBison,
}

impl Model {
    /// Resolve a model identifier string to a `Model`.
    ///
    /// Known identifiers map to their `KnownModel` variant; anything else
    /// becomes `Model::Custom` and flows through unchanged.
    pub fn from_identifier(identifier: &str) -> Self {
        match identifier {
            "google/palm-2-chat-bison" => Model::Known(KnownModel::Palm2ChatBison),
            _ => Model::Custom(identifier.to_string()),
        }
    }
}

impl fmt::Display for Model {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Model::Known(known_model) => write!(f, "{}", known_model),
            Model::Custom(custom) => write!(f, "{}", custom),
        }
    }
}

impl fmt::Display for KnownModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KnownModel::Palm2ChatBison => write!(f, "google/palm-2-chat-bison"),
        }
    }
}

impl From<KnownModel> for Model {
    fn from(model: KnownModel) -> Self {
        Model::Known(model)
    }
}

impl From<String> for Model {
    fn from(model: String) -> Self {
        Model::Custom(model)
    }
}

impl Default for Model {
    fn default() -> Self {
        Model::Known(KnownModel::Palm2ChatBison)
    }
}
