//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `KeyValueStore` - persists the current mode across restarts
//! - `TransitionListener` - receives mode and phase transitions for rendering

mod key_value_store;
mod transition_listener;

pub use key_value_store::{KeyValueStore, StoreError};
pub use transition_listener::TransitionListener;
