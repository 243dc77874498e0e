//! Slash command parsing for the journal REPL.
//!
//! This module handles parsing of special commands that start with `/`,
//! mirroring the original sidebar controls. Commands adjust the session
//! and are never sent to the endpoint.

use crate::types::{Mood, ReflectionDepth};

/// A parsed journal command.
#[derive(Debug, Clone, PartialEq)]
pub enum JournalCommand {
    /// Start a new session (discard history, reseed).
    NewSession,

    /// Change the current mood label.
    Mood(String),

    /// Change the reflection depth label.
    Depth(String),

    /// Change the analysis model.
    Model(String),

    /// Set the OpenRouter credential.
    Key(String),

    /// Display session statistics.
    Stats,

    /// Display help information.
    Help,

    /// Exit the journal.
    Quit,

    /// Report a parsing error back to the caller.
    Invalid(String),
}

/// Parses user input for slash commands.
///
/// Returns `Some(JournalCommand)` if the input is a command, or `None`
/// if it should be treated as a journal entry.
///
/// # Examples
///
/// ```
/// # use mindful::chat::parse_command;
/// assert!(parse_command("/new").is_some());
/// assert!(parse_command("/mood joyful").is_some());
/// assert!(parse_command("I feel anxious").is_none());
/// ```
pub fn parse_command(input: &str) -> Option<JournalCommand> {
    let input = input.trim();

    if !input.starts_with('/') {
        return None;
    }

    let mut parts = input[1..].splitn(2, ' ');
    let command = parts.next()?.to_lowercase();
    let argument = parts.next().map(|s| s.trim()).filter(|s| !s.is_empty());

    let result = match command.as_str() {
        "new" => JournalCommand::NewSession,
        "mood" => match argument {
            Some(mood) => JournalCommand::Mood(mood.to_string()),
            None => JournalCommand::Invalid(format!(
                "/mood requires a label ({})",
                mood_options()
            )),
        },
        "depth" => match argument {
            Some(depth) => JournalCommand::Depth(depth.to_string()),
            None => JournalCommand::Invalid(format!(
                "/depth requires a label ({})",
                depth_options()
            )),
        },
        "model" => match argument {
            Some(model) => JournalCommand::Model(model.to_string()),
            None => JournalCommand::Invalid("/model requires a model name".to_string()),
        },
        "key" => match argument {
            Some(key) => JournalCommand::Key(key.to_string()),
            None => JournalCommand::Invalid("/key requires a credential".to_string()),
        },
        "stats" | "status" => JournalCommand::Stats,
        "help" | "?" => JournalCommand::Help,
        "quit" | "exit" | "q" => JournalCommand::Quit,
        _ => JournalCommand::Invalid(format!("Unknown command: /{}", command)),
    };

    Some(result)
}

/// The mood labels accepted by `/mood`, comma separated.
pub fn mood_options() -> String {
    Mood::ALL
        .iter()
        .map(|mood| mood.label())
        .collect::<Vec<_>>()
        .join(", ")
}

/// The depth labels accepted by `/depth`, comma separated.
pub fn depth_options() -> String {
    ReflectionDepth::ALL
        .iter()
        .map(|depth| depth.label())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Returns help text describing available commands.
pub fn help_text() -> &'static str {
    r#"Available commands:
  /new                   Start a new journal session
  /mood <label>          Set your current mood (e.g., /mood content)
  /depth <label>         Set the reflection depth (e.g., /depth deep)
  /model <name>          Change the analysis model
  /key <credential>      Set your OpenRouter API key
  /stats                 Show session statistics
  /help                  Show this help message
  /quit                  Exit the journal"#
}
