//! Phases of the decision exercise.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::PhaseSequence;

/// SETUP → CRITERIA → RATE → RESULT.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DecisionPhase {
    /// Name the decision and list the options.
    #[default]
    Setup,
    /// List what matters and how much.
    Criteria,
    /// Score every option on every criterion.
    Rate,
    /// Ranked outcome.
    Result,
}

impl DecisionPhase {
    pub fn subtitle(&self) -> &'static str {
        match self {
            DecisionPhase::Setup => "List your options. We'll decompose them in the next step.",
            DecisionPhase::Criteria => "What factors are driving this choice?",
            DecisionPhase::Rate => "Honest inputs lead to clear outputs.",
            DecisionPhase::Result => "The highest score reflects your stated values.",
        }
    }
}

impl PhaseSequence for DecisionPhase {
    const SEQUENCE: &'static [Self] = &[
        DecisionPhase::Setup,
        DecisionPhase::Criteria,
        DecisionPhase::Rate,
        DecisionPhase::Result,
    ];

    fn label(&self) -> &'static str {
        match self {
            DecisionPhase::Setup => "SETUP",
            DecisionPhase::Criteria => "CRITERIA",
            DecisionPhase::Rate => "RATE",
            DecisionPhase::Result => "RESULT",
        }
    }

    fn title(&self) -> &'static str {
        match self {
            DecisionPhase::Setup => "Decompose the Decision",
            DecisionPhase::Criteria => "What matters?",
            DecisionPhase::Rate => "Evaluate Options",
            DecisionPhase::Result => "The Clear Choice",
        }
    }
}
