//! Filter exercise - narrow a brain dump down to three priorities.

mod exercise;
mod phase;
mod selection;

pub use exercise::FilterExercise;
pub use phase::FilterPhase;
pub use selection::{Selection, ToggleOutcome, SELECTION_CAP};
