use std::fmt;

/// Reflection depth label supplied by the shell.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
pub enum ReflectionDepth {
    /// "Brief Check-in"
    #[default]
    BriefCheckIn,

    /// "Moderate Reflection"
    ModerateReflection,

    /// "Deep Analysis"
    DeepAnalysis,
}

impl ReflectionDepth {
    /// All depth labels, in selection order.
    pub const ALL: [ReflectionDepth; 3] = [
        ReflectionDepth::BriefCheckIn,
        ReflectionDepth::ModerateReflection,
        ReflectionDepth::DeepAnalysis,
    ];

    /// The exact label text for this depth.
    pub fn label(&self) -> &'static str {
        match self {
            ReflectionDepth::BriefCheckIn => "Brief Check-in",
            ReflectionDepth::ModerateReflection => "Moderate Reflection",
            ReflectionDepth::DeepAnalysis => "Deep Analysis",
        }
    }

    /// Resolve a depth from user input.
    ///
    /// Accepts the full label or its first word, case-insensitively.
    pub fn from_label(input: &str) -> Option<ReflectionDepth> {
        let input = input.trim();
        Self::ALL.into_iter().find(|depth| {
            let label = depth.label();
            let word = label.split_whitespace().next().unwrap_or(label);
            input.eq_ignore_ascii_case(label) || input.eq_ignore_ascii_case(word)
        })
    }
}

impl fmt::Display for ReflectionDepth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_are_exact() {
        assert_eq!(ReflectionDepth::BriefCheckIn.label(), "Brief Check-in");
        assert_eq!(
            ReflectionDepth::ModerateReflection.label(),
            "Moderate Reflection"
        );
        assert_eq!(ReflectionDepth::DeepAnalysis.label(), "Deep Analysis");
    }

    #[test]
    fn from_label_accepts_first_word() {
        assert_eq!(
            ReflectionDepth::from_label("deep"),
            Some(ReflectionDepth::DeepAnalysis)
        );
        assert_eq!(
            ReflectionDepth::from_label("Moderate Reflection"),
            Some(ReflectionDepth::ModerateReflection)
        );
        assert_eq!(ReflectionDepth::from_label("exhaustive"), None);
    }

    #[test]
    fn default_is_first_option() {
        assert_eq!(ReflectionDepth::default(), ReflectionDepth::BriefCheckIn);
    }
}
