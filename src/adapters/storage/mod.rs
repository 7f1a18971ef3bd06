//! Storage Adapters
//!
//! Implementations of the KeyValueStore port.
//!
//! ## Available Adapters
//!
//! - **FileKeyValueStore** - Stores entries as a YAML mapping on disk
//! - **InMemoryKeyValueStore** - Stores entries in memory (testing/ephemeral runs)
//!
//! ## Usage
//!
//! ```ignore
//! use adapters::storage::{FileKeyValueStore, InMemoryKeyValueStore};
//!
//! // Survives restarts
//! let store = FileKeyValueStore::new("./data/clarity.yaml");
//!
//! // Forgets everything on exit
//! let store = InMemoryKeyValueStore::new();
//! ```

mod file_store;
mod in_memory_store;

pub use file_store::FileKeyValueStore;
pub use in_memory_store::InMemoryKeyValueStore;
