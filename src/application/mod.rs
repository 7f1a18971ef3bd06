//! Application layer - routing between screens and driving the open exercise.
//!
//! - `ModeRouter` - persists the top-level mode through a `KeyValueStore`
//! - `ActiveExercise` - the ephemeral exercise behind the current mode
//! - `ClarityApp` - ties both together and announces transitions

mod active_exercise;
mod app;
mod error;
mod mode_router;

pub use active_exercise::{ActiveExercise, PhaseStep};
pub use app::ClarityApp;
pub use error::AppError;
pub use mode_router::{ModeRouter, MODE_KEY};
