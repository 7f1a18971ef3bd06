//! Transition events published to the rendering side.

use serde::Serialize;
use std::fmt;

use super::Mode;

/// Something the screen needs to react to.
///
/// Phases are carried as their upper-case labels so one event type serves
/// all three exercises.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum TransitionEvent {
    /// The top-level screen changed.
    ModeChanged { from: Mode, to: Mode },

    /// An exercise moved one phase forward.
    PhaseAdvanced {
        mode: Mode,
        from: &'static str,
        to: &'static str,
    },

    /// An exercise was started over from its first phase.
    ExerciseReset { mode: Mode },
}

impl TransitionEvent {
    /// Returns the event type as a string.
    pub fn event_type(&self) -> &'static str {
        match self {
            TransitionEvent::ModeChanged { .. } => "mode.changed",
            TransitionEvent::PhaseAdvanced { .. } => "phase.advanced",
            TransitionEvent::ExerciseReset { .. } => "exercise.reset",
        }
    }

    /// The mode the screen shows after this event.
    pub fn mode(&self) -> Mode {
        match self {
            TransitionEvent::ModeChanged { to, .. } => *to,
            TransitionEvent::PhaseAdvanced { mode, .. } => *mode,
            TransitionEvent::ExerciseReset { mode } => *mode,
        }
    }
}

impl fmt::Display for TransitionEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransitionEvent::ModeChanged { from, to } => write!(f, "mode {} -> {}", from, to),
            TransitionEvent::PhaseAdvanced { mode, from, to } => {
                write!(f, "{} phase {} -> {}", mode, from, to)
            }
            TransitionEvent::ExerciseReset { mode } => write!(f, "{} reset", mode),
        }
    }
}
