//! Teach-back exercise aggregate.

use serde::{Deserialize, Serialize};

use super::{ExplanationSet, TeachLevel, TeachPhase};
use crate::domain::foundation::{is_blank, ExerciseError, PhaseSequence};

/// Teach-back exercise - a topic explained at three levels in turn.
///
/// Each level must be non-blank before the next one opens.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeachExercise {
    phase: TeachPhase,
    topic: String,
    explanations: ExplanationSet,
}

impl TeachExercise {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> TeachPhase {
        self.phase
    }

    pub fn topic(&self) -> &str {
        self.topic.trim()
    }

    pub fn explanations(&self) -> &ExplanationSet {
        &self.explanations
    }

    /// Writing prompt for the current stage, `None` outside the three levels.
    pub fn current_prompt(&self) -> Option<String> {
        self.phase.level().map(|level| level.prompt(self.topic()))
    }

    /// Text typed so far for the current stage.
    pub fn current_text(&self) -> Option<&str> {
        self.phase.level().map(|level| self.explanations.get(level))
    }

    pub fn set_topic(&mut self, raw: &str) -> Result<(), ExerciseError> {
        if self.phase != TeachPhase::Topic {
            return Err(ExerciseError::wrong_phase(
                TeachPhase::Topic.label(),
                self.phase.label(),
            ));
        }
        self.topic = raw.to_string();
        Ok(())
    }

    /// Replaces the explanation for the level currently being written.
    pub fn write(&mut self, text: &str) -> Result<TeachLevel, ExerciseError> {
        let level = self.phase.level().ok_or_else(|| {
            ExerciseError::wrong_phase("SIMPLE, PRACTICAL or EXPERT", self.phase.label())
        })?;
        self.explanations.set(level, text);
        Ok(level)
    }

    /// The finished explanations, available once REFLECTION is reached.
    pub fn review(&self) -> Option<Vec<(TeachLevel, &str)>> {
        (self.phase == TeachPhase::Reflection).then(|| self.explanations.entries())
    }

    /// Checks the completion condition of the current stage.
    pub fn check_guard(&self) -> Result<(), ExerciseError> {
        let phase = self.phase.label();
        match self.phase {
            TeachPhase::Topic if is_blank(&self.topic) => {
                Err(ExerciseError::guard_not_met(phase, "enter a topic"))
            }
            TeachPhase::Reflection => Err(ExerciseError::guard_not_met(phase, "final phase")),
            _ => match self.phase.level() {
                Some(level) if is_blank(self.explanations.get(level)) => Err(
                    ExerciseError::guard_not_met(phase, "write an explanation first"),
                ),
                _ => Ok(()),
            },
        }
    }

    pub fn can_advance(&self) -> bool {
        self.check_guard().is_ok()
    }

    pub fn advance(&mut self) -> Result<TeachPhase, ExerciseError> {
        self.check_guard()?;
        if let Some(next) = self.phase.next() {
            self.phase = self.phase.transition_to(next)?;
        }
        Ok(self.phase)
    }

    /// Discards the topic and all explanations.
    pub fn reset(&mut self) {
        *self = Self::new();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::ErrorCode;

    #[test]
    fn topic_guard_needs_text() {
        let mut exercise = TeachExercise::new();
        assert!(!exercise.can_advance());
        exercise.set_topic("  ").unwrap();
        assert!(exercise.advance().is_err());

        exercise.set_topic("Compound interest").unwrap();
        assert_eq!(exercise.advance().unwrap(), TeachPhase::Simple);
    }

    #[test]
    fn each_level_must_be_written_before_moving_on() {
        let mut exercise = TeachExercise::new();
        exercise.set_topic("Tides").unwrap();
        exercise.advance().unwrap();

        let err = exercise.advance().unwrap_err();
        assert_eq!(err.code(), ErrorCode::GuardNotMet);
        assert_eq!(exercise.phase(), TeachPhase::Simple);

        assert_eq!(exercise.write("The moon pulls the sea.").unwrap(), TeachLevel::Simple);
        assert_eq!(exercise.advance().unwrap(), TeachPhase::Practical);
    }

    #[test]
    fn prompt_follows_stage_and_topic() {
        let mut exercise = TeachExercise::new();
        assert_eq!(exercise.current_prompt(), None);
        exercise.set_topic(" Tides ").unwrap();
        exercise.advance().unwrap();
        assert_eq!(
            exercise.current_prompt().unwrap(),
            "Explain \"Tides\" to a 5-year-old. Use simple words."
        );
    }

    #[test]
    fn cannot_write_on_topic_stage_or_change_topic_later() {
        let mut exercise = TeachExercise::new();
        assert_eq!(exercise.write("x").unwrap_err().code(), ErrorCode::WrongPhase);

        exercise.set_topic("Tides").unwrap();
        exercise.advance().unwrap();
        assert!(exercise.set_topic("Other").is_err());
    }

    #[test]
    fn full_walk_reaches_reflection_with_all_three_levels() {
        let mut exercise = TeachExercise::new();
        exercise.set_topic("Tides").unwrap();
        exercise.advance().unwrap();
        for text in ["simple words", "practical words", "expert words"] {
            exercise.write(text).unwrap();
            exercise.advance().unwrap();
        }

        assert_eq!(exercise.phase(), TeachPhase::Reflection);
        assert!(!exercise.can_advance());
        let review = exercise.review().unwrap();
        assert_eq!(
            review,
            vec![
                (TeachLevel::Simple, "simple words"),
                (TeachLevel::Practical, "practical words"),
                (TeachLevel::Expert, "expert words"),
            ]
        );
    }

    #[test]
    fn review_is_hidden_before_reflection() {
        let exercise = TeachExercise::new();
        assert!(exercise.review().is_none());
    }

    #[test]
    fn reset_clears_topic_and_text() {
        let mut exercise = TeachExercise::new();
        exercise.set_topic("Tides").unwrap();
        exercise.advance().unwrap();
        exercise.write("draft").unwrap();

        exercise.reset();

        assert_eq!(exercise, TeachExercise::new());
    }
}
