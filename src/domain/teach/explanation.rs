//! Explanation levels and the three-tier explanation set.

use serde::{Deserialize, Serialize};

/// Audience an explanation is written for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TeachLevel {
    Simple,
    Practical,
    Expert,
}

impl TeachLevel {
    pub const ALL: [TeachLevel; 3] = [TeachLevel::Simple, TeachLevel::Practical, TeachLevel::Expert];

    pub fn heading(&self) -> &'static str {
        match self {
            TeachLevel::Simple => "Level 1: The Layman",
            TeachLevel::Practical => "Level 2: The Practitioner",
            TeachLevel::Expert => "Level 3: The Master",
        }
    }

    /// Writing prompt for `topic` at this level.
    pub fn prompt(&self, topic: &str) -> String {
        match self {
            TeachLevel::Simple => {
                format!("Explain \"{}\" to a 5-year-old. Use simple words.", topic)
            }
            TeachLevel::Practical => {
                format!("Explain how \"{}\" actually works in the real world.", topic)
            }
            TeachLevel::Expert => {
                format!("Explain the edge cases and nuance of \"{}\".", topic)
            }
        }
    }
}

/// Free-text explanations, one per level. All start empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExplanationSet {
    pub simple: String,
    pub practical: String,
    pub expert: String,
}

impl ExplanationSet {
    pub fn get(&self, level: TeachLevel) -> &str {
        match level {
            TeachLevel::Simple => &self.simple,
            TeachLevel::Practical => &self.practical,
            TeachLevel::Expert => &self.expert,
        }
    }

    pub fn set(&mut self, level: TeachLevel, text: impl Into<String>) {
        let slot = match level {
            TeachLevel::Simple => &mut self.simple,
            TeachLevel::Practical => &mut self.practical,
            TeachLevel::Expert => &mut self.expert,
        };
        *slot = text.into();
    }

    /// Levels paired with their text, in teaching order.
    pub fn entries(&self) -> Vec<(TeachLevel, &str)> {
        TeachLevel::ALL.iter().map(|&l| (l, self.get(l))).collect()
    }
}
