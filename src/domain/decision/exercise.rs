//! Decision exercise aggregate.
//!
//! Walks the user through naming a decision, listing options, weighing
//! criteria and rating every option, then ranks the options by weighted sum.

use serde::{Deserialize, Serialize};

use super::{Criterion, DecisionOption, DecisionPhase, RankedOption, ScoringEngine};
use crate::domain::foundation::{
    is_blank, CriterionId, ExerciseError, Label, OptionId, PhaseSequence, Score, Weight,
};

/// Minimum number of options before criteria can be defined.
pub const MIN_OPTIONS: usize = 2;

/// Minimum number of criteria before rating can start.
pub const MIN_CRITERIA: usize = 1;

/// Decision exercise - options, weighted criteria and scores.
///
/// # Invariants
///
/// - option and criterion names are trimmed and non-blank
/// - every weight is within 1..=10, every score within 0..=10
/// - results are derived on each call, never stored
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecisionExercise {
    phase: DecisionPhase,
    name: String,
    options: Vec<DecisionOption>,
    criteria: Vec<Criterion>,
}

impl DecisionExercise {
    pub fn new() -> Self {
        Self::default()
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Accessors
    // ─────────────────────────────────────────────────────────────────────────

    pub fn phase(&self) -> DecisionPhase {
        self.phase
    }

    /// The decision name, trimmed. May be blank until SETUP is done.
    pub fn name(&self) -> &str {
        self.name.trim()
    }

    pub fn options(&self) -> &[DecisionOption] {
        &self.options
    }

    pub fn criteria(&self) -> &[Criterion] {
        &self.criteria
    }

    pub fn option(&self, id: &OptionId) -> Option<&DecisionOption> {
        self.options.iter().find(|o| &o.id == id)
    }

    pub fn criterion(&self, id: &CriterionId) -> Option<&Criterion> {
        self.criteria.iter().find(|c| &c.id == id)
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Derived views
    // ─────────────────────────────────────────────────────────────────────────

    /// Weighted score of one option, `None` if the option is unknown.
    pub fn score_of(&self, id: &OptionId) -> Option<u32> {
        self.option(id)
            .map(|o| ScoringEngine::score(o, &self.criteria))
    }

    pub fn max_score(&self) -> u32 {
        ScoringEngine::max_score(&self.criteria)
    }

    /// Options ranked highest score first.
    pub fn results(&self) -> Vec<RankedOption> {
        ScoringEngine::results(&self.options, &self.criteria)
    }

    /// The top-ranked option, if any options exist.
    pub fn winner(&self) -> Option<RankedOption> {
        self.results().into_iter().next()
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Mutations
    // ─────────────────────────────────────────────────────────────────────────

    /// Replaces the decision name. Blank text is stored; the SETUP guard
    /// refuses to advance until it is filled in.
    pub fn set_name(&mut self, raw: &str) -> Result<(), ExerciseError> {
        self.ensure_phase(DecisionPhase::Setup)?;
        self.name = raw.to_string();
        Ok(())
    }

    /// Adds an unrated option.
    ///
    /// # Errors
    ///
    /// - `WrongPhase` outside SETUP
    /// - `Validation` if the name is blank
    pub fn add_option(&mut self, raw: &str) -> Result<OptionId, ExerciseError> {
        self.ensure_phase(DecisionPhase::Setup)?;
        let option = DecisionOption::new(Label::parse("option", raw)?);
        let id = option.id;
        self.options.push(option);
        Ok(id)
    }

    /// Adds a criterion at the default weight.
    ///
    /// # Errors
    ///
    /// - `WrongPhase` outside CRITERIA
    /// - `Validation` if the name is blank
    pub fn add_criterion(&mut self, raw: &str) -> Result<CriterionId, ExerciseError> {
        self.ensure_phase(DecisionPhase::Criteria)?;
        let criterion = Criterion::new(Label::parse("criterion", raw)?);
        let id = criterion.id;
        self.criteria.push(criterion);
        Ok(id)
    }

    /// Sets how much a criterion matters.
    pub fn set_weight(&mut self, id: &CriterionId, weight: Weight) -> Result<(), ExerciseError> {
        self.ensure_phase(DecisionPhase::Criteria)?;
        let criterion = self
            .criteria
            .iter_mut()
            .find(|c| &c.id == id)
            .ok_or_else(|| ExerciseError::UnknownCriterion(id.to_string()))?;
        criterion.weight = weight;
        Ok(())
    }

    /// Rates one option on one criterion.
    pub fn set_score(
        &mut self,
        option_id: &OptionId,
        criterion_id: &CriterionId,
        score: Score,
    ) -> Result<(), ExerciseError> {
        self.ensure_phase(DecisionPhase::Rate)?;
        if self.criterion(criterion_id).is_none() {
            return Err(ExerciseError::UnknownCriterion(criterion_id.to_string()));
        }
        let option = self
            .options
            .iter_mut()
            .find(|o| &o.id == option_id)
            .ok_or_else(|| ExerciseError::UnknownOption(option_id.to_string()))?;
        option.set_score(*criterion_id, score);
        Ok(())
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Progression
    // ─────────────────────────────────────────────────────────────────────────

    /// Checks the completion condition of the current phase.
    pub fn check_guard(&self) -> Result<(), ExerciseError> {
        let phase = self.phase.label();
        match self.phase {
            DecisionPhase::Setup => {
                if is_blank(&self.name) {
                    return Err(ExerciseError::guard_not_met(phase, "name the decision"));
                }
                if self.options.len() < MIN_OPTIONS {
                    return Err(ExerciseError::guard_not_met(
                        phase,
                        format!("add at least {} options", MIN_OPTIONS),
                    ));
                }
                Ok(())
            }
            DecisionPhase::Criteria if self.criteria.len() < MIN_CRITERIA => {
                Err(ExerciseError::guard_not_met(phase, "add at least one criterion"))
            }
            DecisionPhase::Criteria | DecisionPhase::Rate => Ok(()),
            DecisionPhase::Result => Err(ExerciseError::guard_not_met(phase, "final phase")),
        }
    }

    pub fn can_advance(&self) -> bool {
        self.check_guard().is_ok()
    }

    /// Moves to the next phase if the current one is complete.
    pub fn advance(&mut self) -> Result<DecisionPhase, ExerciseError> {
        self.check_guard()?;
        if let Some(next) = self.phase.next() {
            self.phase = self.phase.transition_to(next)?;
        }
        Ok(self.phase)
    }

    /// Discards everything and returns to SETUP.
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    fn ensure_phase(&self, expected: DecisionPhase) -> Result<(), ExerciseError> {
        if self.phase == expected {
            Ok(())
        } else {
            Err(ExerciseError::wrong_phase(expected.label(), self.phase.label()))
        }
    }
}
