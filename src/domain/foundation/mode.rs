//! Mode enum: which top-level screen is showing.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::ValidationError;

/// Top-level screen. The only state that survives a restart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Mode {
    #[default]
    Landing,
    Filter,
    Decision,
    Teach,
}

impl Mode {
    /// The three exercises, in landing-card order.
    pub const EXERCISES: [Mode; 3] = [Mode::Filter, Mode::Decision, Mode::Teach];

    /// Returns the persisted tag.
    pub fn tag(&self) -> &'static str {
        match self {
            Mode::Landing => "LANDING",
            Mode::Filter => "FILTER",
            Mode::Decision => "DECISION",
            Mode::Teach => "TEACH",
        }
    }

    /// Returns true for the three exercise screens.
    pub fn is_exercise(&self) -> bool {
        !matches!(self, Mode::Landing)
    }

    /// Card heading on the landing screen.
    pub fn title(&self) -> &'static str {
        match self {
            Mode::Landing => "Structure reduces mental noise.",
            Mode::Filter => "What Actually Matters?",
            Mode::Decision => "Decision Decomposer",
            Mode::Teach => "Teach It Back",
        }
    }

    /// Card body on the landing screen.
    pub fn tagline(&self) -> &'static str {
        match self {
            Mode::Landing => {
                "Three simple ways to clear your path and focus on what truly matters."
            }
            Mode::Filter => {
                "Overwhelmed by tasks or worries? Filter them down to the essential few."
            }
            Mode::Decision => "Break down complex choices into clear criteria and options.",
            Mode::Teach => {
                "The Feynman Technique. Understand anything deeply by explaining it simply."
            }
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for Mode {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "LANDING" => Ok(Mode::Landing),
            "FILTER" => Ok(Mode::Filter),
            "DECISION" => Ok(Mode::Decision),
            "TEACH" => Ok(Mode::Teach),
            other => Err(ValidationError::invalid_format(
                "mode",
                format!("unknown mode tag '{}'", other),
            )),
        }
    }
}
