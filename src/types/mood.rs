use std::fmt;

/// Current mood label supplied by the shell.
///
/// The label text is interpolated into the system instruction
/// uninterpreted; the endpoint never sees the enum.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
pub enum Mood {
    /// "😔 Stressed"
    #[default]
    Stressed,

    /// "😐 Neutral"
    Neutral,

    /// "🙂 Content"
    Content,

    /// "😊 Positive"
    Positive,

    /// "😄 Joyful"
    Joyful,
}

impl Mood {
    /// All mood labels, in slider order.
    pub const ALL: [Mood; 5] = [
        Mood::Stressed,
        Mood::Neutral,
        Mood::Content,
        Mood::Positive,
        Mood::Joyful,
    ];

    /// The exact label text for this mood.
    pub fn label(&self) -> &'static str {
        match self {
            Mood::Stressed => "😔 Stressed",
            Mood::Neutral => "😐 Neutral",
            Mood::Content => "🙂 Content",
            Mood::Positive => "😊 Positive",
            Mood::Joyful => "😄 Joyful",
        }
    }

    /// Resolve a mood from user input.
    ///
    /// Accepts the full label or the bare word, case-insensitively.
    pub fn from_label(input: &str) -> Option<Mood> {
        let input = input.trim();
        Self::ALL.into_iter().find(|mood| {
            let label = mood.label();
            let word = label.split_whitespace().last().unwrap_or(label);
            input.eq_ignore_ascii_case(label) || input.eq_ignore_ascii_case(word)
        })
    }
}

impl fmt::Display for Mood {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}
