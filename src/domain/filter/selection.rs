//! Capped selection over the filter exercise's item list.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::Label;

/// Hard limit on how many items can be picked at once.
pub const SELECTION_CAP: usize = 3;

/// What a toggle did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleOutcome {
    Selected,
    Deselected,
    /// The cap was already reached; nothing changed.
    Rejected,
}

/// Item texts the user picked, in the order they were picked.
///
/// Membership is by text: two items with the same label share one entry.
///
/// # Invariants
///
/// - never holds more than [`SELECTION_CAP`] labels
/// - holds no duplicates
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Selection {
    picked: Vec<Label>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Removes `label` if present, otherwise adds it while under the cap.
    pub fn toggle(&mut self, label: &Label) -> ToggleOutcome {
        if let Some(pos) = self.picked.iter().position(|l| l == label) {
            self.picked.remove(pos);
            return ToggleOutcome::Deselected;
        }
        if self.is_full() {
            return ToggleOutcome::Rejected;
        }
        self.picked.push(label.clone());
        ToggleOutcome::Selected
    }

    pub fn contains(&self, label: &Label) -> bool {
        self.picked.contains(label)
    }

    pub fn len(&self) -> usize {
        self.picked.len()
    }

    pub fn is_empty(&self) -> bool {
        self.picked.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.picked.len() >= SELECTION_CAP
    }

    /// How many more items may still be picked.
    pub fn remaining(&self) -> usize {
        SELECTION_CAP.saturating_sub(self.picked.len())
    }

    /// Picked labels in pick order.
    pub fn labels(&self) -> &[Label] {
        &self.picked
    }

    pub fn clear(&mut self) {
        self.picked.clear();
    }
}
