//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `storage` - Key-value stores for the persisted mode (file, in-memory)
//! - `events` - Transition listeners (tracing, recording)

pub mod events;
pub mod storage;

pub use events::{RecordingListener, TracingListener};
pub use storage::{FileKeyValueStore, InMemoryKeyValueStore};
