//! System instruction assembly for journal turns.
//!
//! Every request carries the same therapeutic-guidelines instruction with
//! the current mood and reflection-depth labels interpolated. The labels
//! are passed through uninterpreted.

use crate::types::{Mood, ReflectionDepth};

/// Build the system instruction for one request.
pub fn system_instruction(mood: Mood, depth: ReflectionDepth) -> String {
    format!(
        "You are a compassionate mental health ally. GUIDELINES:
1. Respond with empathetic, non-judgmental support
2. Structure reflections:
   - Emotional Validation
   - Pattern Recognition
   - Gentle Probing Questions
   - Coping Strategies
3. Use nature-inspired emojis: 🌱🌸🌧️🌈
4. Current Mood: {mood}
5. Analysis Depth: {depth}
6. Never make diagnoses
7. Maintain therapeutic boundaries"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn instruction_interpolates_labels() {
        let instruction = system_instruction(Mood::Content, ReflectionDepth::DeepAnalysis);
        assert!(instruction.contains("Current Mood: 🙂 Content"));
        assert!(instruction.contains("Analysis Depth: Deep Analysis"));
    }

    #[test]
    fn instruction_keeps_fixed_guidelines() {
        let instruction = system_instruction(Mood::default(), ReflectionDepth::default());
        assert!(instruction.starts_with("You are a compassionate mental health ally."));
        assert!(instruction.contains("Never make diagnoses"));
        assert!(instruction.contains("Maintain therapeutic boundaries"));
    }

    #[test]
    fn labels_change_only_their_lines() {
        let brief = system_instruction(Mood::Stressed, ReflectionDepth::BriefCheckIn);
        let deep = system_instruction(Mood::Stressed, ReflectionDepth::DeepAnalysis);
        assert_ne!(brief, deep);
        assert!(brief.contains("Brief Check-in"));
        assert!(deep.contains("Deep Analysis"));
    }
}
