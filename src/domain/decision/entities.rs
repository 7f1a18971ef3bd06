//! Criteria and options of a decision.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::domain::foundation::{CriterionId, Label, OptionId, Score, Weight};

/// A weighted factor that options are scored against.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Criterion {
    pub id: CriterionId,
    pub name: Label,
    pub weight: Weight,
}

impl Criterion {
    /// Creates a criterion at the default weight.
    pub fn new(name: Label) -> Self {
        Self {
            id: CriterionId::new(),
            name,
            weight: Weight::DEFAULT,
        }
    }

    pub fn with_weight(mut self, weight: Weight) -> Self {
        self.weight = weight;
        self
    }
}

/// One of the choices being decided between.
///
/// Scores are keyed by criterion; a criterion with no entry reads as zero.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecisionOption {
    pub id: OptionId,
    pub name: Label,
    #[serde(default)]
    scores: HashMap<CriterionId, Score>,
}

impl DecisionOption {
    /// Creates an unrated option.
    pub fn new(name: Label) -> Self {
        Self {
            id: OptionId::new(),
            name,
            scores: HashMap::new(),
        }
    }

    /// Score on `criterion`, zero if never rated.
    pub fn score_for(&self, criterion: &CriterionId) -> Score {
        self.scores.get(criterion).copied().unwrap_or_default()
    }

    pub fn set_score(&mut self, criterion: CriterionId, score: Score) {
        self.scores.insert(criterion, score);
    }

    pub fn with_score(mut self, criterion: CriterionId, score: Score) -> Self {
        self.set_score(criterion, score);
        self
    }

    /// Returns true if `criterion` was explicitly rated.
    pub fn is_rated(&self, criterion: &CriterionId) -> bool {
        self.scores.contains_key(criterion)
    }
}
