//! TransitionListener port - Interface for whoever renders the screen.
//!
//! The core never draws anything. It announces mode changes and phase
//! transitions, and the listener decides what to show.

use crate::domain::foundation::TransitionEvent;

/// Port for receiving transition events.
///
/// Called synchronously, after the state change has been applied.
///
/// # Example
///
/// ```ignore
/// struct Printer;
///
/// impl TransitionListener for Printer {
///     fn on_transition(&self, event: &TransitionEvent) {
///         println!("{}", event);
///     }
/// }
/// ```
pub trait TransitionListener: Send + Sync {
    fn on_transition(&self, event: &TransitionEvent);
}
