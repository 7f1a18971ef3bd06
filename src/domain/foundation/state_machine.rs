//! Linear phase sequence trait shared by every exercise.
//!
//! Each exercise walks a fixed chain of phases. The chain is declared once as
//! `SEQUENCE`; successor lookup, transition validation and progress are
//! derived from it.

use super::{Percentage, ValidationError};

/// Trait for phase enums that form a forward-only chain.
///
/// # Example
///
/// ```ignore
/// impl PhaseSequence for FilterPhase {
///     const SEQUENCE: &'static [Self] = &[Input, Select, Result];
///
///     fn label(&self) -> &'static str { ... }
///     fn title(&self) -> &'static str { ... }
/// }
///
/// let next = FilterPhase::Input.transition_to(FilterPhase::Select)?;
/// ```
pub trait PhaseSequence: Sized + Copy + PartialEq + std::fmt::Debug + 'static {
    /// Every phase in walk order. Must not be empty.
    const SEQUENCE: &'static [Self];

    /// Stable upper-case tag, e.g. `"SETUP"`.
    fn label(&self) -> &'static str;

    /// Heading shown while the phase is active.
    fn title(&self) -> &'static str;

    /// The phase a fresh (or reset) exercise starts in.
    fn initial() -> Self {
        Self::SEQUENCE[0]
    }

    /// Zero-based position in the chain.
    fn ordinal(&self) -> usize {
        Self::SEQUENCE
            .iter()
            .position(|phase| phase == self)
            .unwrap_or(0)
    }

    /// The single phase reachable from this one, if any.
    fn next(&self) -> Option<Self> {
        Self::SEQUENCE.get(self.ordinal() + 1).copied()
    }

    /// Returns true if `target` is the immediate successor.
    fn can_transition_to(&self, target: &Self) -> bool {
        self.next().as_ref() == Some(target)
    }

    /// Returns all valid target states from current state.
    fn valid_transitions(&self) -> Vec<Self> {
        self.next().into_iter().collect()
    }

    /// Performs transition with validation, returning error if invalid.
    fn transition_to(&self, target: Self) -> Result<Self, ValidationError> {
        if self.can_transition_to(&target) {
            Ok(target)
        } else {
            Err(ValidationError::invalid_format(
                "phase_transition",
                format!("Cannot transition from {:?} to {:?}", self, target),
            ))
        }
    }

    /// Checks if current phase is terminal (no outgoing transition).
    fn is_terminal(&self) -> bool {
        self.next().is_none()
    }

    /// How far along the chain this phase is; the last phase is 100%.
    fn progress(&self) -> Percentage {
        Percentage::of((self.ordinal() + 1) as u32, Self::SEQUENCE.len() as u32)
    }
}
