//! Recording transition listener for testing.
//!
//! Captures every event in order so tests can assert on what the screen
//! would have been told.

use parking_lot::RwLock;
use std::sync::Arc;

use crate::domain::foundation::TransitionEvent;
use crate::ports::TransitionListener;

/// Transition listener that keeps every event it receives.
///
/// # Example
///
/// ```ignore
/// let recorder = RecordingListener::new();
/// app.subscribe(Arc::new(recorder.clone()));
///
/// app.select_mode(Mode::Decision);
/// assert!(recorder.has_event("mode.changed"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct RecordingListener {
    events: Arc<RwLock<Vec<TransitionEvent>>>,
}

impl RecordingListener {
    pub fn new() -> Self {
        Self::default()
    }

    // === Test Helpers ===

    /// Returns all received events.
    pub fn events(&self) -> Vec<TransitionEvent> {
        self.events.read().clone()
    }

    /// Returns events of a specific type.
    pub fn events_of_type(&self, event_type: &str) -> Vec<TransitionEvent> {
        self.events()
            .into_iter()
            .filter(|e| e.event_type() == event_type)
            .collect()
    }

    pub fn has_event(&self, event_type: &str) -> bool {
        self.events.read().iter().any(|e| e.event_type() == event_type)
    }

    pub fn event_count(&self) -> usize {
        self.events.read().len()
    }

    pub fn clear(&self) {
        self.events.write().clear();
    }
}

impl TransitionListener for RecordingListener {
    fn on_transition(&self, event: &TransitionEvent) {
        self.events.write().push(event.clone());
    }
}
