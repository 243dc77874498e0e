//! Journal application module for interactive conversations.
//!
//! This module provides the conversation core behind the mindful-journal
//! REPL. It supports:
//!
//! - An append-only session store seeded with a greeting
//! - Turn orchestration with a credential gate and gentle error recovery
//! - Slash commands for session control
//! - Configurable model, mood, and reflection depth
//!
//! # Architecture
//!
//! The module is organized into several components:
//!
//! - [`config`]: CLI argument parsing and configuration
//! - [`session`]: Session store and turn orchestration
//! - [`commands`]: Slash command parsing and handling

mod commands;
mod config;
mod session;

pub use commands::{JournalCommand, depth_options, help_text, mood_options, parse_command};
pub use config::JournalArgs;
pub use session::{
    CREDENTIAL_GUIDANCE, GENTLE_RETRY, GREETING, JournalSession, RESET_GREETING, Session,
    TurnOutcome,
};
