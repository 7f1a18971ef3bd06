//! Filter exercise aggregate.
//!
//! The user dumps every task or worry into a list, then picks at most
//! three that truly matter.

use serde::{Deserialize, Serialize};

use super::{FilterPhase, Selection, ToggleOutcome};
use crate::domain::foundation::{ExerciseError, Label, PhaseSequence};

/// Filter exercise - item list plus capped selection.
///
/// # Invariants
///
/// - items are trimmed and non-blank
/// - the selection only holds texts that appear in the item list
/// - the selection holds at most three texts
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterExercise {
    phase: FilterPhase,
    items: Vec<Label>,
    selection: Selection,
}

impl FilterExercise {
    pub fn new() -> Self {
        Self::default()
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Accessors
    // ─────────────────────────────────────────────────────────────────────────

    pub fn phase(&self) -> FilterPhase {
        self.phase
    }

    pub fn items(&self) -> &[Label] {
        &self.items
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    /// True when the text at `index` is picked. Items sharing a text
    /// are selected together.
    pub fn is_selected(&self, index: usize) -> bool {
        self.items
            .get(index)
            .is_some_and(|label| self.selection.contains(label))
    }

    /// The chosen items, in the order they were picked.
    pub fn focus(&self) -> Vec<&Label> {
        self.selection.labels().iter().collect()
    }

    /// Text for the SELECT phase's confirm button.
    pub fn confirm_label(&self) -> String {
        if self.selection.is_full() {
            "Lock Focus".to_string()
        } else {
            format!("Select {} more", self.selection.remaining())
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Mutations
    // ─────────────────────────────────────────────────────────────────────────

    /// Appends an item, returning its position.
    ///
    /// # Errors
    ///
    /// - `WrongPhase` outside INPUT
    /// - `Validation` if the text is blank
    pub fn add_item(&mut self, raw: &str) -> Result<usize, ExerciseError> {
        self.ensure_phase(FilterPhase::Input)?;
        let label = Label::parse("item", raw)?;
        self.items.push(label);
        Ok(self.items.len() - 1)
    }

    /// Deletes the item at `index`.
    ///
    /// # Errors
    ///
    /// - `WrongPhase` outside INPUT
    /// - `UnknownItem` if there is no such position
    pub fn remove_item(&mut self, index: usize) -> Result<Label, ExerciseError> {
        self.ensure_phase(FilterPhase::Input)?;
        if index >= self.items.len() {
            return Err(ExerciseError::UnknownItem(index));
        }
        Ok(self.items.remove(index))
    }

    /// Selects or deselects the text of the item at `index`.
    ///
    /// Selecting a fourth item is a silent no-op reported as
    /// [`ToggleOutcome::Rejected`].
    pub fn toggle(&mut self, index: usize) -> Result<ToggleOutcome, ExerciseError> {
        self.ensure_phase(FilterPhase::Select)?;
        let label = self
            .items
            .get(index)
            .ok_or(ExerciseError::UnknownItem(index))?;
        Ok(self.selection.toggle(label))
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Progression
    // ─────────────────────────────────────────────────────────────────────────

    /// Checks the completion condition of the current phase.
    pub fn check_guard(&self) -> Result<(), ExerciseError> {
        let phase = self.phase.label();
        match self.phase {
            FilterPhase::Input if self.items.is_empty() => {
                Err(ExerciseError::guard_not_met(phase, "add at least one item"))
            }
            FilterPhase::Select if self.selection.is_empty() => {
                Err(ExerciseError::guard_not_met(phase, "select at least one item"))
            }
            FilterPhase::Result => Err(ExerciseError::guard_not_met(phase, "final phase")),
            _ => Ok(()),
        }
    }

    pub fn can_advance(&self) -> bool {
        self.check_guard().is_ok()
    }

    /// Moves to the next phase if the current one is complete.
    pub fn advance(&mut self) -> Result<FilterPhase, ExerciseError> {
        self.check_guard()?;
        if let Some(next) = self.phase.next() {
            self.phase = self.phase.transition_to(next)?;
        }
        Ok(self.phase)
    }

    /// Discards everything and returns to INPUT.
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    fn ensure_phase(&self, expected: FilterPhase) -> Result<(), ExerciseError> {
        if self.phase == expected {
            Ok(())
        } else {
            Err(ExerciseError::wrong_phase(expected.label(), self.phase.label()))
        }
    }
}
