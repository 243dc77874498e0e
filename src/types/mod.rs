// Public modules
pub mod chat_completion;
pub mod completion_request;
pub mod journal_config;
pub mod message_param;
pub mod model;
pub mod mood;
pub mod reflection_depth;

// Re-exports
pub use chat_completion::{ChatCompletion, Choice, ChoiceMessage};
pub use completion_request::{CompletionRequest, ResponseFormat, TEMPERATURE};
pub use journal_config::JournalConfig;
pub use message_param::{MessageParam, MessageRole};
pub use model::{KnownModel, Model};
pub use mood::Mood;
pub use reflection_depth::ReflectionDepth;
