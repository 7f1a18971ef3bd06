//! Foundation module - Shared domain primitives.
//!
//! Contains value objects, identifiers, enums, and error types
//! that form the vocabulary of the exercises.

mod errors;
mod events;
mod ids;
mod label;
mod mode;
mod percentage;
mod score;
mod state_machine;
mod weight;

pub use errors::{ErrorCode, ExerciseError, ValidationError};
pub use events::TransitionEvent;
pub use ids::{CriterionId, OptionId};
pub use label::{is_blank, Label};
pub use mode::Mode;
pub use percentage::Percentage;
pub use score::Score;
pub use state_machine::PhaseSequence;
pub use weight::Weight;
