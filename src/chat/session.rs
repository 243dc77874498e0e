//! Journal session state and turn orchestration.
//!
//! This module provides the append-only [`Session`] store and the
//! [`JournalSession`] turn controller that gates on the credential,
//! invokes the completion client, and collapses every failure into the
//! fixed gentle-retry turn.

use crate::client::OpenRouter;
use crate::client_logger::SessionLogger;
use crate::observability;
use crate::render;
use crate::types::{JournalConfig, MessageParam, Model, Mood, ReflectionDepth};

/// Greeting that seeds a fresh conversation.
pub const GREETING: &str =
    "Welcome to your Mindful Journal 🌸 Let's cultivate mental wellness together.";

/// Greeting that seeds a conversation after an explicit reset.
pub const RESET_GREETING: &str = "New journal session started 🌱 Share your thoughts...";

/// Assistant turn appended when a request fails. The raw error is never
/// shown to the end user; it goes to the session logger instead.
pub const GENTLE_RETRY: &str =
    "🍃 Gentle Reminder: It's okay to take a breath and try again";

/// Assistant turn appended when no credential has been supplied.
pub const CREDENTIAL_GUIDANCE: &str = "🔑 API key required for emotional insights

Getting Started:
1. Visit https://openrouter.ai/keys
2. Create wellness account
3. Enter your key with /key";

/// An ordered, append-only conversation history.
///
/// The sequence is never empty: it is seeded with one assistant greeting
/// and only [`Session::reset`] replaces it, with a fresh single-seed
/// sequence. There is no size cap; the client applies its own trailing
/// window when it assembles a request.
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    messages: Vec<MessageParam>,
}

impl Session {
    /// Create a session seeded with the given message.
    pub fn new(seed: MessageParam) -> Self {
        Self {
            messages: vec![seed],
        }
    }

    /// Create a session seeded with the standard greeting.
    pub fn seeded() -> Self {
        Self::new(MessageParam::assistant(GREETING))
    }

    /// Append a message, preserving insertion order.
    pub fn append(&mut self, message: MessageParam) {
        self.messages.push(message);
    }

    /// Discard all messages and replace with a single seed message.
    pub fn reset(&mut self, seed: MessageParam) {
        self.messages.clear();
        self.messages.push(seed);
    }

    /// The trailing `n` messages, oldest first; all of them if fewer.
    pub fn last(&self, n: usize) -> &[MessageParam] {
        &self.messages[self.messages.len().saturating_sub(n)..]
    }

    /// All messages, in insertion order.
    pub fn all(&self) -> &[MessageParam] {
        &self.messages
    }

    /// The number of messages in the conversation.
    pub fn len(&self) -> usize {
        self.messages.len()
    }

    /// True if the conversation holds no messages. A seeded session is
    /// never empty.
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::seeded()
    }
}

/// The outcome of one journal turn.
#[derive(Debug, Clone, PartialEq)]
pub enum TurnOutcome {
    /// The endpoint replied. `raw` is the unprocessed completion text
    /// (feed it to [`crate::Reveal`] for incremental display); `rendered`
    /// is the final display text that was appended to the session.
    Reply { raw: String, rendered: String },

    /// No credential was supplied; the guidance turn was appended and no
    /// request was made.
    Guidance,

    /// The request failed; the gentle-retry turn was appended and the
    /// error was handed to the logger.
    Recovered,
}

/// A journal conversation: session store, configuration, and the turn
/// controller that ties them to the completion client.
///
/// `send` takes `&mut self`, so a second submission cannot overlap an
/// in-flight turn for the same conversation.
pub struct JournalSession {
    client: OpenRouter,
    config: JournalConfig,
    session: Session,
    use_color: bool,
    logger: Option<Box<dyn SessionLogger>>,
}

impl JournalSession {
    /// Creates a new journal session seeded with the standard greeting.
    pub fn new(client: OpenRouter, config: JournalConfig) -> Self {
        Self {
            client,
            config,
            session: Session::seeded(),
            use_color: true,
            logger: None,
        }
    }

    /// Disables inline styling of rendered assistant turns.
    pub fn without_color(mut self) -> Self {
        self.use_color = false;
        self
    }

    /// Attaches a logger for raw completions and error detail.
    pub fn with_logger(mut self, logger: Box<dyn SessionLogger>) -> Self {
        self.logger = Some(logger);
        self
    }

    /// Sends one user turn and returns its outcome.
    ///
    /// If no credential is configured, the user message and the fixed
    /// guidance message are appended and the endpoint is never contacted.
    /// Otherwise exactly one request is made; on success the rendered
    /// reply is appended, on failure the fixed gentle-retry message is
    /// appended and the error is logged. This method never returns an
    /// error: every failure path leaves the conversation ready for the
    /// next input.
    pub async fn send(&mut self, user_input: &str) -> TurnOutcome {
        observability::SESSION_TURNS.click();
        self.session.append(MessageParam::user(user_input));

        if !self.config.has_credential() {
            observability::SESSION_GUIDANCE_TURNS.click();
            self.session
                .append(MessageParam::assistant(CREDENTIAL_GUIDANCE));
            return TurnOutcome::Guidance;
        }

        match self.client.complete(&self.config, self.session.all()).await {
            Ok(raw) => {
                if let Some(logger) = &self.logger {
                    logger.log_completion(&raw);
                }
                let rendered = if self.use_color {
                    render::render(&raw)
                } else {
                    render::render_plain(&raw)
                };
                self.session
                    .append(MessageParam::assistant(rendered.clone()));
                TurnOutcome::Reply { raw, rendered }
            }
            Err(err) => {
                observability::SESSION_RECOVERED_TURNS.click();
                if let Some(logger) = &self.logger {
                    logger.log_error(&err);
                }
                self.session.append(MessageParam::assistant(GENTLE_RETRY));
                TurnOutcome::Recovered
            }
        }
    }

    /// Starts a new conversation, replacing the history with the reset
    /// greeting.
    pub fn reset(&mut self) {
        self.session.reset(MessageParam::assistant(RESET_GREETING));
    }

    /// All conversation messages, in insertion order.
    pub fn messages(&self) -> &[MessageParam] {
        self.session.all()
    }

    /// The number of messages in the conversation.
    pub fn message_count(&self) -> usize {
        self.session.len()
    }

    /// Sets the caller-supplied credential.
    pub fn set_api_key(&mut self, api_key: String) {
        self.config.api_key = api_key;
    }

    /// Returns true if a credential has been supplied.
    pub fn has_credential(&self) -> bool {
        self.config.has_credential()
    }

    /// Changes the analysis model.
    pub fn set_model(&mut self, model: Model) {
        self.config.model = model;
    }

    /// Returns the current model.
    pub fn model(&self) -> &Model {
        &self.config.model
    }

    /// Changes the current mood label.
    pub fn set_mood(&mut self, mood: Mood) {
        self.config.mood = mood;
    }

    /// Returns the current mood label.
    pub fn mood(&self) -> Mood {
        self.config.mood
    }

    /// Changes the reflection depth label.
    pub fn set_depth(&mut self, depth: ReflectionDepth) {
        self.config.depth = depth;
    }

    /// Returns the current reflection depth label.
    pub fn depth(&self) -> ReflectionDepth {
        self.config.depth
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::MessageRole;

    #[test]
    fn new_session_carries_one_seed() {
        let session = Session::seeded();
        assert_eq!(session.len(), 1);
        assert!(!session.is_empty());
        assert_eq!(session.all()[0].role, MessageRole::Assistant);
        assert_eq!(session.all()[0].content, GREETING);
    }

    #[test]
    fn append_preserves_insertion_order() {
        let mut session = Session::seeded();
        session.append(MessageParam::user("first"));
        session.append(MessageParam::assistant("second"));
        session.append(MessageParam::user("third"));

        let contents: Vec<&str> = session.all().iter().map(|m| m.content.as_str()).collect();
        assert_eq!(contents, vec![GREETING, "first", "second", "third"]);
    }

    #[test]
    fn reset_replaces_history_with_single_seed() {
        let mut session = Session::seeded();
        for i in 0..10 {
            session.append(MessageParam::user(format!("entry {i}")));
        }
        assert_eq!(session.len(), 11);

        session.reset(MessageParam::assistant(RESET_GREETING));
        assert_eq!(session.len(), 1);
        assert_eq!(session.all()[0].content, RESET_GREETING);
    }

    #[test]
    fn last_returns_trailing_window() {
        let mut session = Session::new(MessageParam::assistant("seed"));
        session.append(MessageParam::user("a"));
        session.append(MessageParam::assistant("b"));
        session.append(MessageParam::user("c"));

        assert_eq!(session.last(2).len(), 2);
        assert_eq!(session.last(2)[0].content, "b");
        assert_eq!(session.last(2)[1].content, "c");
        assert_eq!(session.last(10).len(), 4);
        assert!(session.last(0).is_empty());
    }

    #[tokio::test]
    async fn missing_credential_appends_guidance_without_a_request() {
        let client = OpenRouter::new().unwrap();
        let mut journal = JournalSession::new(client, JournalConfig::default());

        let outcome = journal.send("I feel anxious").await;

        assert_eq!(outcome, TurnOutcome::Guidance);
        let messages = journal.messages();
        assert_eq!(messages.len(), 3);
        assert_eq!(messages[1].role, MessageRole::User);
        assert_eq!(messages[1].content, "I feel anxious");
        assert_eq!(messages[2].role, MessageRole::Assistant);
        assert_eq!(messages[2].content, CREDENTIAL_GUIDANCE);
    }

    #[tokio::test]
    async fn missing_credential_holds_for_arbitrary_inputs() {
        let client = OpenRouter::new().unwrap();
        let mut journal = JournalSession::new(client, JournalConfig::default());

        let inputs = ["", "   ", "/looks like a command", "🌧️", "a\nb"];
        for (i, input) in inputs.iter().enumerate() {
            let outcome = journal.send(input).await;
            assert_eq!(outcome, TurnOutcome::Guidance);
            assert_eq!(journal.message_count(), 1 + 2 * (i + 1));
        }
    }

    #[test]
    fn journal_reset_uses_reset_greeting() {
        let client = OpenRouter::new().unwrap();
        let mut journal = JournalSession::new(client, JournalConfig::default());
        journal.reset();
        assert_eq!(journal.message_count(), 1);
        assert_eq!(journal.messages()[0].content, RESET_GREETING);
    }

    #[test]
    fn configuration_accessors() {
        let client = OpenRouter::new().unwrap();
        let mut journal = JournalSession::new(client, JournalConfig::default());

        assert!(!journal.has_credential());
        journal.set_api_key("sk-or-test".to_string());
        assert!(journal.has_credential());

        journal.set_mood(Mood::Joyful);
        assert_eq!(journal.mood(), Mood::Joyful);

        journal.set_depth(ReflectionDepth::DeepAnalysis);
        assert_eq!(journal.depth(), ReflectionDepth::DeepAnalysis);

        journal.set_model(Model::Custom("vendor/model".to_string()));
        assert_eq!(journal.model(), &Model::Custom("vendor/model".to_string()));
    }
}
