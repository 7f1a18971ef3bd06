//! Transition listener that writes every event to the log.

use tracing::info;

use crate::domain::foundation::TransitionEvent;
use crate::ports::TransitionListener;

/// Logs transitions at `info` with structured fields.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingListener;

impl TransitionListener for TracingListener {
    fn on_transition(&self, event: &TransitionEvent) {
        match event {
            TransitionEvent::ModeChanged { from, to } => {
                info!(event = event.event_type(), %from, %to, "Mode changed");
            }
            TransitionEvent::PhaseAdvanced { mode, from, to } => {
                info!(event = event.event_type(), %mode, from, to, "Phase advanced");
            }
            TransitionEvent::ExerciseReset { mode } => {
                info!(event = event.event_type(), %mode, "Exercise reset");
            }
        }
    }
}
