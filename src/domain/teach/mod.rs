//! Teach-back exercise - explain a topic simply, practically, then expertly.

mod exercise;
mod explanation;
mod phase;

pub use exercise::TeachExercise;
pub use explanation::{ExplanationSet, TeachLevel};
pub use phase::TeachPhase;
