//! Error types for the domain layer.

use std::fmt;
use thiserror::Error;

/// Errors that occur during value object construction.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Field '{field}' cannot be empty")]
    EmptyField { field: String },

    #[error("Field '{field}' must be between {min} and {max}, got {actual}")]
    OutOfRange {
        field: String,
        min: i32,
        max: i32,
        actual: i32,
    },

    #[error("Field '{field}' has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },
}

impl ValidationError {
    /// Creates an empty field validation error.
    pub fn empty_field(field: impl Into<String>) -> Self {
        ValidationError::EmptyField { field: field.into() }
    }

    /// Creates an out of range validation error.
    pub fn out_of_range(field: impl Into<String>, min: i32, max: i32, actual: i32) -> Self {
        ValidationError::OutOfRange {
            field: field.into(),
            min,
            max,
            actual,
        }
    }

    /// Creates an invalid format validation error.
    pub fn invalid_format(field: impl Into<String>, reason: impl Into<String>) -> Self {
        ValidationError::InvalidFormat {
            field: field.into(),
            reason: reason.into(),
        }
    }
}

/// Error codes organized by category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Validation errors
    EmptyField,
    OutOfRange,
    InvalidFormat,

    // Not found errors
    CriterionNotFound,
    OptionNotFound,
    ItemNotFound,

    // Progression errors
    WrongPhase,
    GuardNotMet,
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ErrorCode::EmptyField => "EMPTY_FIELD",
            ErrorCode::OutOfRange => "OUT_OF_RANGE",
            ErrorCode::InvalidFormat => "INVALID_FORMAT",
            ErrorCode::CriterionNotFound => "CRITERION_NOT_FOUND",
            ErrorCode::OptionNotFound => "OPTION_NOT_FOUND",
            ErrorCode::ItemNotFound => "ITEM_NOT_FOUND",
            ErrorCode::WrongPhase => "WRONG_PHASE",
            ErrorCode::GuardNotMet => "GUARD_NOT_MET",
        };
        write!(f, "{}", s)
    }
}

/// Errors raised by exercise actions.
///
/// A UI normally never sees these: it disables the action instead. They
/// exist so callers can tell why an action was refused.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExerciseError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Action requires the {expected} phase, exercise is in {actual}")]
    WrongPhase {
        expected: &'static str,
        actual: &'static str,
    },

    #[error("Cannot leave the {phase} phase: {reason}")]
    GuardNotMet { phase: &'static str, reason: String },

    #[error("Unknown criterion: {0}")]
    UnknownCriterion(String),

    #[error("Unknown option: {0}")]
    UnknownOption(String),

    #[error("No item at position {0}")]
    UnknownItem(usize),
}

impl ExerciseError {
    pub fn wrong_phase(expected: &'static str, actual: &'static str) -> Self {
        ExerciseError::WrongPhase { expected, actual }
    }

    pub fn guard_not_met(phase: &'static str, reason: impl Into<String>) -> Self {
        ExerciseError::GuardNotMet {
            phase,
            reason: reason.into(),
        }
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            ExerciseError::Validation(ValidationError::EmptyField { .. }) => ErrorCode::EmptyField,
            ExerciseError::Validation(ValidationError::OutOfRange { .. }) => ErrorCode::OutOfRange,
            ExerciseError::Validation(ValidationError::InvalidFormat { .. }) => {
                ErrorCode::InvalidFormat
            }
            ExerciseError::WrongPhase { .. } => ErrorCode::WrongPhase,
            ExerciseError::GuardNotMet { .. } => ErrorCode::GuardNotMet,
            ExerciseError::UnknownCriterion(_) => ErrorCode::CriterionNotFound,
            ExerciseError::UnknownOption(_) => ErrorCode::OptionNotFound,
            ExerciseError::UnknownItem(_) => ErrorCode::ItemNotFound,
        }
    }
}
