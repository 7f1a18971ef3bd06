//! Errors surfaced by the application layer.

use thiserror::Error;

use crate::domain::foundation::{ExerciseError, Mode};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AppError {
    #[error("No exercise is open on the {0} screen")]
    NoExercise(Mode),

    #[error("Expected the {expected} exercise, but {actual} is open")]
    ModeMismatch { expected: Mode, actual: Mode },

    #[error(transparent)]
    Exercise(#[from] ExerciseError),
}
