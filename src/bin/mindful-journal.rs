//! Interactive journaling REPL backed by the OpenRouter completions API.
//!
//! # Usage
//!
//! ```bash
//! # Basic usage with default settings
//! mindful-journal
//!
//! # Start with a mood and depth
//! mindful-journal --mood content --depth deep
//!
//! # Disable colors (useful for piping output)
//! mindful-journal --no-color
//! ```
//!
//! # Commands
//!
//! While journaling, you can use slash commands:
//! - `/help` - Show available commands
//! - `/new` - Start a new session
//! - `/key <credential>` - Set your OpenRouter API key
//! - `/mood <label>` - Set your current mood
//! - `/depth <label>` - Set the reflection depth
//! - `/model <name>` - Change the analysis model
//! - `/stats` - Show session statistics
//! - `/quit` - Exit the journal

use std::io::{self, Write};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use arrrg::CommandLine;
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;

use mindful::chat::{
    JournalArgs, JournalCommand, depth_options, help_text, mood_options, parse_command,
};
use mindful::render::highlight;
use mindful::{
    CURSOR, JournalConfig, JournalSession, Model, Mood, OpenRouter, REVEAL_INITIAL_DELAY,
    REVEAL_WORD_DELAY, ReflectionDepth, Reveal, StderrLogger, TurnOutcome,
};

/// Main entry point for the mindful-journal application.
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let (args, _) = JournalArgs::from_command_line_relaxed("mindful-journal [OPTIONS]");
    let use_color = !args.no_color;
    let config = JournalConfig::from(args);

    let client = OpenRouter::new()?;
    let mut journal = JournalSession::new(client, config).with_logger(Box::new(StderrLogger));
    if !use_color {
        journal = journal.without_color();
    }
    let mut rl = DefaultEditor::new()?;

    // Flag for skipping the reveal animation
    let interrupted = Arc::new(AtomicBool::new(false));

    let interrupted_clone = interrupted.clone();
    ctrlc::set_handler(move || {
        interrupted_clone.store(true, Ordering::Relaxed);
    })?;

    println!("📔 Mindful Journal (model: {})", journal.model());
    println!("Type /help for commands, /quit to exit\n");
    println!("Journal: {}\n", journal.messages()[0].content);

    loop {
        // Reset the skip flag before each input
        interrupted.store(false, Ordering::Relaxed);

        let readline = rl.readline("You: ");

        match readline {
            Ok(line) => {
                let line = line.trim();
                if line.is_empty() {
                    continue;
                }

                let _ = rl.add_history_entry(line);

                // Check for slash commands
                if let Some(cmd) = parse_command(line) {
                    match cmd {
                        JournalCommand::Quit => {
                            println!("Take care 🌱");
                            break;
                        }
                        JournalCommand::NewSession => {
                            journal.reset();
                            println!("Journal: {}\n", journal.messages()[0].content);
                        }
                        JournalCommand::Help => {
                            for line in help_text().lines() {
                                println!("    {}", line);
                            }
                        }
                        JournalCommand::Key(key) => {
                            journal.set_api_key(key);
                            println!("API key updated.");
                        }
                        JournalCommand::Mood(label) => match Mood::from_label(&label) {
                            Some(mood) => {
                                journal.set_mood(mood);
                                println!("Mood set to: {}", mood);
                            }
                            None => {
                                eprintln!("Unknown mood {:?} (options: {})", label, mood_options());
                            }
                        },
                        JournalCommand::Depth(label) => {
                            match ReflectionDepth::from_label(&label) {
                                Some(depth) => {
                                    journal.set_depth(depth);
                                    println!("Reflection depth set to: {}", depth);
                                }
                                None => {
                                    eprintln!(
                                        "Unknown depth {:?} (options: {})",
                                        label,
                                        depth_options()
                                    );
                                }
                            }
                        }
                        JournalCommand::Model(name) => {
                            journal.set_model(Model::from_identifier(&name));
                            println!("Model changed to: {}", name);
                        }
                        JournalCommand::Stats => {
                            print_stats(&journal);
                        }
                        JournalCommand::Invalid(message) => {
                            eprintln!("{}", message);
                        }
                    }
                    continue;
                }

                // Journal entry - send to the endpoint
                println!("🌱 Reflecting on your thoughts...");
                let outcome = journal.send(line).await;
                println!("Journal:");
                match outcome {
                    TurnOutcome::Reply { raw, rendered } => {
                        if use_color {
                            play_reveal(&raw, &interrupted).await;
                        } else {
                            print!("{}", rendered);
                        }
                        println!();
                    }
                    TurnOutcome::Guidance | TurnOutcome::Recovered => {
                        if let Some(last) = journal.messages().last() {
                            println!("{}\n", last.content);
                        }
                    }
                }
            }
            Err(ReadlineError::Interrupted) => {
                // Ctrl+C at prompt - soft interrupt
                println!();
                continue;
            }
            Err(ReadlineError::Eof) => {
                // Ctrl+D - exit
                println!("\nTake care 🌱");
                break;
            }
            Err(err) => {
                eprintln!("Input error: {}", err);
                break;
            }
        }
    }

    Ok(())
}

/// Plays the progressive reveal at the fixed pacing, repainting each line
/// with its label styling once it completes. Ctrl+C skips to the full
/// styled text.
async fn play_reveal(raw: &str, interrupted: &AtomicBool) {
    let mut reveal = Reveal::new(raw);
    tokio::time::sleep(REVEAL_INITIAL_DELAY).await;

    // Byte offset where the line currently being revealed starts.
    let mut line_start = 0;
    let mut skipped = false;

    while let Some(frame) = reveal.next() {
        if interrupted.load(Ordering::Relaxed) {
            skipped = true;
            break;
        }
        let prefix = frame.strip_suffix(CURSOR).unwrap_or(&frame);
        if prefix.ends_with('\n') {
            let line = &prefix[line_start..prefix.len() - 1];
            print!("\r\x1b[2K{}\n", highlight(line));
            line_start = prefix.len();
        } else {
            print!("\r\x1b[2K{}{}", &prefix[line_start..], CURSOR);
        }
        let _ = io::stdout().flush();
        tokio::time::sleep(REVEAL_WORD_DELAY).await;
    }

    if skipped {
        let rest = &reveal.full_text()[line_start..];
        print!("\r\x1b[2K{}", highlight(rest));
        let _ = io::stdout().flush();
    }
}

fn print_stats(journal: &JournalSession) {
    println!("    Session Statistics:");
    println!("      Model: {}", journal.model());
    println!("      Messages: {}", journal.message_count());
    println!("      Mood: {}", journal.mood());
    println!("      Reflection depth: {}", journal.depth());
    println!(
        "      API key: {}",
        if journal.has_credential() {
            "set"
        } else {
            "(not set)"
        }
    );
}
