use crate::types::{Model, Mood, ReflectionDepth};

/// Configuration for a journal turn.
///
/// Supplied by the shell per request; the core never persists it and
/// never reads the credential from the environment.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct JournalConfig {
    /// The caller-supplied OpenRouter credential. May be empty, in which
    /// case the turn controller refuses to contact the endpoint.
    pub api_key: String,

    /// The analysis model identifier.
    pub model: Model,

    /// Current mood label.
    pub mood: Mood,

    /// Reflection depth label.
    pub depth: ReflectionDepth,
}

impl JournalConfig {
    /// Creates a new configuration with the given credential and default
    /// model, mood, and depth.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            ..Self::default()
        }
    }

    /// Sets the model.
    pub fn with_model(mut self, model: Model) -> Self {
        self.model = model;
        self
    }

    /// Sets the mood label.
    pub fn with_mood(mut self, mood: Mood) -> Self {
        self.mood = mood;
        self
    }

    /// Sets the reflection depth label.
    pub fn with_depth(mut self, depth: ReflectionDepth) -> Self {
        self.depth = depth;
        self
    }

    /// Returns true if a credential has been supplied.
    pub fn has_credential(&self) -> bool {
        !self.api_key.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::KnownModel;

    #[test]
    fn default_config() {
        let config = JournalConfig::default();
        assert!(!config.has_credential());
        assert_eq!(config.model, Model::Known(KnownModel::Palm2ChatBison));
        assert_eq!(config.mood, Mood::Stressed);
        assert_eq!(config.depth, ReflectionDepth::BriefCheckIn);
    }

    #[test]
    fn config_builder_pattern() {
        let config = JournalConfig::new("sk-or-test")
            .with_model(Model::Custom("vendor/model".to_string()))
            .with_mood(Mood::Joyful)
            .with_depth(ReflectionDepth::DeepAnalysis);

        assert!(config.has_credential());
        assert_eq!(config.model, Model::Custom("vendor/model".to_string()));
        assert_eq!(config.mood, Mood::Joyful);
        assert_eq!(config.depth, ReflectionDepth::DeepAnalysis);
    }
}
