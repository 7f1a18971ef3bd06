//! Phases of the filter exercise.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::PhaseSequence;

/// INPUT → SELECT → RESULT.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FilterPhase {
    /// Brain-dump everything on the user's mind.
    #[default]
    Input,
    /// Pick the few items that matter.
    Select,
    /// Read back the chosen focus list.
    Result,
}

impl FilterPhase {
    pub fn subtitle(&self) -> &'static str {
        match self {
            FilterPhase::Input => "Get everything out of your head. Don't worry about order yet.",
            FilterPhase::Select => "Select the 3 items that will truly move the needle today.",
            FilterPhase::Result => "This is your contract with yourself. Ignore the rest.",
        }
    }
}

impl PhaseSequence for FilterPhase {
    const SEQUENCE: &'static [Self] = &[FilterPhase::Input, FilterPhase::Select, FilterPhase::Result];

    fn label(&self) -> &'static str {
        match self {
            FilterPhase::Input => "INPUT",
            FilterPhase::Select => "SELECT",
            FilterPhase::Result => "RESULT",
        }
    }

    fn title(&self) -> &'static str {
        match self {
            FilterPhase::Input => "Capture your thoughts",
            FilterPhase::Select => "What actually matters?",
            FilterPhase::Result => "Your Focus",
        }
    }
}
