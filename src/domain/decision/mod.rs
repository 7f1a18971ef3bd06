//! Decision exercise - weighted criteria scoring.
//!
//! # Components
//!
//! - `DecisionPhase` - SETUP → CRITERIA → RATE → RESULT
//! - `Criterion`, `DecisionOption` - the matrix being filled in
//! - `ScoringEngine` - pure weighted-sum scoring and stable ranking
//! - `DecisionExercise` - aggregate enforcing phase guards

mod entities;
mod exercise;
mod phase;
mod scoring;

pub use entities::{Criterion, DecisionOption};
pub use exercise::{DecisionExercise, MIN_CRITERIA, MIN_OPTIONS};
pub use phase::DecisionPhase;
pub use scoring::{RankedOption, ScoringEngine};
