//! Stages of the teach-back exercise.

use serde::{Deserialize, Serialize};

use super::TeachLevel;
use crate::domain::foundation::PhaseSequence;

/// TOPIC → SIMPLE → PRACTICAL → EXPERT → REFLECTION.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TeachPhase {
    #[default]
    Topic,
    Simple,
    Practical,
    Expert,
    Reflection,
}

impl TeachPhase {
    /// The explanation level written during this stage, if any.
    pub fn level(&self) -> Option<TeachLevel> {
        match self {
            TeachPhase::Simple => Some(TeachLevel::Simple),
            TeachPhase::Practical => Some(TeachLevel::Practical),
            TeachPhase::Expert => Some(TeachLevel::Expert),
            TeachPhase::Topic | TeachPhase::Reflection => None,
        }
    }

    pub fn subtitle(&self) -> &'static str {
        match self {
            TeachPhase::Topic => "What do you want to clarify?",
            TeachPhase::Simple | TeachPhase::Practical | TeachPhase::Expert => {
                "If you can't explain it simply, you don't understand it well enough."
            }
            TeachPhase::Reflection => "Do you see gaps in your knowledge? If so, go back and research.",
        }
    }

    /// Label of the button that leaves this stage.
    pub fn advance_label(&self) -> &'static str {
        match self {
            TeachPhase::Topic => "Start Thinking",
            TeachPhase::Simple | TeachPhase::Practical => "Next Level",
            TeachPhase::Expert => "Finish & Reflect",
            TeachPhase::Reflection => "Finish",
        }
    }
}

impl PhaseSequence for TeachPhase {
    const SEQUENCE: &'static [Self] = &[
        TeachPhase::Topic,
        TeachPhase::Simple,
        TeachPhase::Practical,
        TeachPhase::Expert,
        TeachPhase::Reflection,
    ];

    fn label(&self) -> &'static str {
        match self {
            TeachPhase::Topic => "TOPIC",
            TeachPhase::Simple => "SIMPLE",
            TeachPhase::Practical => "PRACTICAL",
            TeachPhase::Expert => "EXPERT",
            TeachPhase::Reflection => "REFLECTION",
        }
    }

    fn title(&self) -> &'static str {
        match self {
            TeachPhase::Topic => "Teach It Back",
            TeachPhase::Simple => TeachLevel::Simple.heading(),
            TeachPhase::Practical => TeachLevel::Practical.heading(),
            TeachPhase::Expert => TeachLevel::Expert.heading(),
            TeachPhase::Reflection => "Review your explanations",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_stage_has_a_subtitle() {
        for phase in TeachPhase::SEQUENCE {
            assert!(!phase.subtitle().is_empty());
        }
    }

    #[test]
    fn only_middle_stages_have_levels() {
        assert_eq!(TeachPhase::Topic.level(), None);
        assert_eq!(TeachPhase::Simple.level(), Some(TeachLevel::Simple));
        assert_eq!(TeachPhase::Expert.level(), Some(TeachLevel::Expert));
        assert_eq!(TeachPhase::Reflection.level(), None);
    }

    #[test]
    fn progress_lights_one_segment_per_stage() {
        assert_eq!(TeachPhase::Topic.progress().value(), 20);
        assert_eq!(TeachPhase::Practical.progress().value(), 60);
        assert_eq!(TeachPhase::Reflection.progress().value(), 100);
    }

    #[test]
    fn stages_cannot_be_skipped() {
        assert!(!TeachPhase::Simple.can_transition_to(&TeachPhase::Expert));
        assert!(TeachPhase::Simple.can_transition_to(&TeachPhase::Practical));
    }
}
