// Public modules
pub mod chat;
pub mod client;
pub mod client_logger;
pub mod error;
pub mod observability;
pub mod prompt;
pub mod render;
pub mod types;

// Re-exports
pub use chat::{JournalSession, Session, TurnOutcome};
pub use client::{HISTORY_WINDOW, OpenRouter, REQUEST_TIMEOUT};
pub use client_logger::{SessionLogger, StderrLogger};
pub use error::{Error, Result};
pub use render::{CURSOR, REVEAL_INITIAL_DELAY, REVEAL_WORD_DELAY, Reveal};
pub use types::*;
