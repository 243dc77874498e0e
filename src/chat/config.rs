//! Configuration for the journal REPL.
//!
//! This module provides CLI argument parsing via `arrrg` for the
//! presentation flags and initial labels. The credential is never taken
//! from the command line or the environment; it is entered interactively
//! with `/key`.

use arrrg_derive::CommandLine;

use crate::types::{JournalConfig, Model, Mood, ReflectionDepth};

/// Command-line arguments for the mindful-journal tool.
#[derive(CommandLine, Debug, Default, PartialEq, Eq)]
pub struct JournalArgs {
    /// Analysis model to use.
    #[arrrg(optional, "Model to use (default: google/palm-2-chat-bison)", "MODEL")]
    pub model: Option<String>,

    /// Starting mood label.
    #[arrrg(optional, "Starting mood label (default: 😔 Stressed)", "MOOD")]
    pub mood: Option<String>,

    /// Starting reflection depth label.
    #[arrrg(optional, "Reflection depth (default: Brief Check-in)", "DEPTH")]
    pub depth: Option<String>,

    /// Disable ANSI colors and styles.
    #[arrrg(flag, "Disable ANSI colors/styles")]
    pub no_color: bool,
}

impl From<JournalArgs> for JournalConfig {
    fn from(args: JournalArgs) -> Self {
        JournalConfig {
            api_key: String::new(),
            model: args
                .model
                .map(|s| Model::from_identifier(&s))
                .unwrap_or_default(),
            mood: args
                .mood
                .and_then(|s| Mood::from_label(&s))
                .unwrap_or_default(),
            depth: args
                .depth
                .and_then(|s| ReflectionDepth::from_label(&s))
                .unwrap_or_default(),
        }
    }
}
