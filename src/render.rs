//! Response rendering for journal replies.
//!
//! Raw completion text passes through three deterministic steps, in
//! order: literal marker stripping, a progressive-reveal projection for
//! incremental display, and label highlighting applied once to the
//! complete assembled text.
//!
//! The reveal is a pacing device only. [`Reveal`] never sleeps; the shell
//! applies [`REVEAL_INITIAL_DELAY`] and [`REVEAL_WORD_DELAY`] at its own
//! discretion, and tests bypass them entirely.

use std::time::Duration;

/// ANSI escape code for cyan text (used for the reflection label).
const ANSI_CYAN: &str = "\x1b[36m";

/// ANSI escape code for green text (used for the coping-strategy label).
const ANSI_GREEN: &str = "\x1b[32m";

/// ANSI escape code to reset all styling.
const ANSI_RESET: &str = "\x1b[0m";

/// Cursor glyph terminating every reveal frame.
pub const CURSOR: &str = "▌";

/// Delay the shell should apply before the first reveal frame.
pub const REVEAL_INITIAL_DELAY: Duration = Duration::from_millis(500);

/// Delay the shell should apply between reveal frames.
pub const REVEAL_WORD_DELAY: Duration = Duration::from_millis(30);

/// Two-character bold marker deleted wherever it appears.
const BOLD_MARKER: &str = "**";

/// Three-character code-fence marker deleted wherever it appears.
const CODE_FENCE_MARKER: &str = "```";

const REFLECTION_LABEL: &str = "Reflection:";
const COPING_LABEL: &str = "Coping Strategy:";

/// Delete every literal bold and code-fence marker.
///
/// Plain substring deletion, left to right, not Markdown-aware parsing;
/// nested or partial markers are deleted wherever they appear.
pub fn strip_markers(raw: &str) -> String {
    raw.replace(BOLD_MARKER, "").replace(CODE_FENCE_MARKER, "")
}

/// Wrap the known section labels in their inline styles.
///
/// Runs once on the complete assembled text, never on partial prefixes.
/// Matching is exact and case-sensitive.
pub fn highlight(text: &str) -> String {
    text.replace(
        REFLECTION_LABEL,
        &format!("{ANSI_CYAN}{REFLECTION_LABEL}{ANSI_RESET}"),
    )
    .replace(
        COPING_LABEL,
        &format!("{ANSI_GREEN}{COPING_LABEL}{ANSI_RESET}"),
    )
}

/// Rebuild the cleaned text word by word, recording a frame stop after
/// every word and after every line break.
///
/// Empty input assembles to an empty text with no stops, so no cursor
/// artifact ever reaches the final state.
fn assemble(cleaned: &str) -> (String, Vec<usize>) {
    let mut text = String::new();
    let mut stops = Vec::new();
    if cleaned.is_empty() {
        return (text, stops);
    }
    for line in cleaned.split('\n') {
        for word in line.split_whitespace() {
            text.push_str(word);
            text.push(' ');
            stops.push(text.len());
        }
        text.push('\n');
        stops.push(text.len());
    }
    (text, stops)
}

/// Render the final display text: strip markers, reassemble, highlight.
pub fn render(raw: &str) -> String {
    let (text, _) = assemble(&strip_markers(raw));
    highlight(&text)
}

/// Render the final display text without inline styles.
pub fn render_plain(raw: &str) -> String {
    let (text, _) = assemble(&strip_markers(raw));
    text
}

/// A finite, restartable sequence of progressively longer display
/// prefixes, each terminated with the cursor glyph.
///
/// Construct a fresh `Reveal` to restart the projection. The full
/// assembled text (cursor-free) is available via [`Reveal::full_text`]
/// at any point, which shells use to skip the animation.
pub struct Reveal {
    text: String,
    stops: Vec<usize>,
    next: usize,
}

impl Reveal {
    /// Create a reveal projection over the raw completion text.
    pub fn new(raw: &str) -> Self {
        let (text, stops) = assemble(&strip_markers(raw));
        Self {
            text,
            stops,
            next: 0,
        }
    }

    /// The fully assembled text, without cursor.
    pub fn full_text(&self) -> &str {
        &self.text
    }
}

impl Iterator for Reveal {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        let stop = *self.stops.get(self.next)?;
        self.next += 1;
        let mut frame = String::with_capacity(stop + CURSOR.len());
        frame.push_str(&self.text[..stop]);
        frame.push_str(CURSOR);
        Some(frame)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strip_removes_bold_and_code_markers() {
        assert_eq!(
            strip_markers("**bold** and ```code```"),
            "bold and code"
        );
        assert_eq!(strip_markers("no markers here"), "no markers here");
    }

    #[test]
    fn strip_removes_partial_and_nested_markers() {
        assert_eq!(strip_markers("****"), "");
        assert_eq!(strip_markers("*single* stays"), "*single* stays");
        assert_eq!(strip_markers("``` ```"), " ");
    }

    #[test]
    fn strip_is_idempotent() {
        let samples = [
            "**a** b",
            "****",
            "``` fenced ```",
            "*a*",
            "plain text",
            "a ** b ``` c",
            "**Reflection:** breathe",
        ];
        for sample in samples {
            let once = strip_markers(sample);
            assert_eq!(strip_markers(&once), once, "not idempotent for {sample:?}");
        }
    }

    #[test]
    fn reveal_frames_word_by_word_then_line_break() {
        let frames: Vec<String> = Reveal::new("take a\nbreath").collect();
        assert_eq!(
            frames,
            vec![
                "take ▌",
                "take a ▌",
                "take a \n▌",
                "take a \nbreath ▌",
                "take a \nbreath \n▌",
            ]
        );
    }

    #[test]
    fn reveal_collapses_extra_whitespace() {
        let frames: Vec<String> = Reveal::new("hello   world").collect();
        assert_eq!(frames, vec!["hello ▌", "hello world ▌", "hello world \n▌"]);
    }

    #[test]
    fn reveal_every_frame_carries_cursor_but_final_text_does_not() {
        let reveal = Reveal::new("one two three");
        let full = reveal.full_text().to_string();
        assert!(!full.contains(CURSOR));
        for frame in Reveal::new("one two three") {
            assert!(frame.ends_with(CURSOR));
        }
        assert_eq!(full, "one two three \n");
    }

    #[test]
    fn reveal_is_restartable() {
        let first: Vec<String> = Reveal::new("a b c").collect();
        let second: Vec<String> = Reveal::new("a b c").collect();
        assert_eq!(first, second);
    }

    #[test]
    fn reveal_of_empty_text_yields_nothing() {
        let mut reveal = Reveal::new("");
        assert!(reveal.next().is_none());
        assert_eq!(reveal.full_text(), "");

        // Markers that strip to nothing behave the same way.
        let mut reveal = Reveal::new("**");
        assert!(reveal.next().is_none());
        assert_eq!(reveal.full_text(), "");
    }

    #[test]
    fn highlight_wraps_each_label_once() {
        let text = "Reflection: you paused.\nCoping Strategy: breathe slowly.\n";
        let styled = highlight(text);
        assert_eq!(styled.matches(ANSI_CYAN).count(), 1);
        assert_eq!(styled.matches(ANSI_GREEN).count(), 1);
        assert!(styled.contains("\x1b[36mReflection:\x1b[0m"));
        assert!(styled.contains("\x1b[32mCoping Strategy:\x1b[0m"));
    }

    #[test]
    fn highlight_without_labels_is_identity() {
        let text = "just a gentle note \n";
        assert_eq!(highlight(text), text);
    }

    #[test]
    fn highlight_is_case_sensitive() {
        let text = "reflection: lowercase is not a section label \n";
        assert_eq!(highlight(text), text);
    }

    #[test]
    fn render_strips_then_highlights() {
        let out = render("**Reflection:** breathe");
        assert!(!out.contains("**"));
        assert!(out.contains("\x1b[36mReflection:\x1b[0m"));
        assert_eq!(render_plain("**Reflection:** breathe"), "Reflection: breathe \n");
    }

    #[test]
    fn render_of_empty_input_is_empty() {
        assert_eq!(render(""), "");
        assert_eq!(render_plain(""), "");
    }
}
