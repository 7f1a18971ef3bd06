//! Key-Value Store Port - Interface for the tiny amount of durable state.
//!
//! The application only ever persists which screen is showing. Any store
//! that can map a string key to a string value will do.

/// Errors that can occur during key-value operations
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("IO error: {0}")]
    Io(String),

    #[error("Failed to serialize store contents: {0}")]
    Serialization(String),

    #[error("Failed to deserialize store contents: {0}")]
    Deserialization(String),
}

/// Port for reading and writing string values by key.
///
/// Both calls are synchronous. A missing key is `Ok(None)`, never an error.
pub trait KeyValueStore: Send + Sync {
    /// Returns the value stored under `key`, if any.
    ///
    /// # Errors
    /// Returns `StoreError` if the backing medium cannot be read.
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Stores `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    /// Returns `StoreError` if the backing medium cannot be written.
    fn set(&self, key: &str, value: &str) -> Result<(), StoreError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[allow(dead_code)]
    fn assert_object_safe(_: &dyn KeyValueStore) {}

    #[test]
    fn store_error_io_displays() {
        let err = StoreError::Io("permission denied".to_string());
        assert_eq!(err.to_string(), "IO error: permission denied");
    }

    #[test]
    fn store_error_deserialization_displays() {
        let err = StoreError::Deserialization("bad yaml".to_string());
        assert!(err.to_string().contains("deserialize"));
    }
}
