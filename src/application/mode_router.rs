//! ModeRouter - remembers which screen is showing across restarts.

use std::sync::Arc;
use tracing::{debug, warn};

use crate::domain::foundation::Mode;
use crate::ports::KeyValueStore;

/// Storage key holding the JSON-encoded mode tag.
pub const MODE_KEY: &str = "clarity-mode";

/// Top-level screen selection backed by a key-value store.
///
/// Store failures never surface: an unreadable or malformed value means
/// Landing, and a failed write still changes the in-memory mode.
pub struct ModeRouter {
    store: Arc<dyn KeyValueStore>,
    current: Mode,
}

impl ModeRouter {
    /// Reads the persisted mode, defaulting to Landing.
    pub fn load(store: Arc<dyn KeyValueStore>) -> Self {
        let current = Self::read_mode(store.as_ref());
        debug!(mode = %current, "Mode restored");
        Self { store, current }
    }

    pub fn mode(&self) -> Mode {
        self.current
    }

    /// Switches to `mode` and persists it, returning the previous mode.
    ///
    /// No transition rules apply: any mode may follow any other.
    pub fn set_mode(&mut self, mode: Mode) -> Mode {
        let previous = std::mem::replace(&mut self.current, mode);
        self.persist(mode);
        previous
    }

    fn read_mode(store: &dyn KeyValueStore) -> Mode {
        let raw = match store.get(MODE_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => return Mode::default(),
            Err(e) => {
                warn!(error = %e, "Could not read stored mode, using default");
                return Mode::default();
            }
        };

        match serde_json::from_str::<Mode>(&raw) {
            Ok(mode) => mode,
            Err(e) => {
                warn!(value = %raw, error = %e, "Stored mode is malformed, using default");
                Mode::default()
            }
        }
    }

    fn persist(&self, mode: Mode) {
        let encoded = match serde_json::to_string(&mode) {
            Ok(encoded) => encoded,
            Err(e) => {
                warn!(%mode, error = %e, "Could not encode mode");
                return;
            }
        };

        if let Err(e) = self.store.set(MODE_KEY, &encoded) {
            warn!(%mode, error = %e, "Could not persist mode");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::storage::InMemoryKeyValueStore;
    use crate::ports::StoreError;

    struct BrokenStore;

    impl KeyValueStore for BrokenStore {
        fn get(&self, _key: &str) -> Result<Option<String>, StoreError> {
            Err(StoreError::Io("disk on fire".to_string()))
        }

        fn set(&self, _key: &str, _value: &str) -> Result<(), StoreError> {
            Err(StoreError::Io("disk on fire".to_string()))
        }
    }

    #[test]
    fn absent_key_defaults_to_landing() {
        let router = ModeRouter::load(Arc::new(InMemoryKeyValueStore::new()));
        assert_eq!(router.mode(), Mode::Landing);
    }

    #[test]
    fn restores_persisted_mode() {
        let store = InMemoryKeyValueStore::with_entry(MODE_KEY, "\"DECISION\"");
        let router = ModeRouter::load(Arc::new(store));
        assert_eq!(router.mode(), Mode::Decision);
    }

    #[test]
    fn malformed_value_falls_back_to_landing() {
        for raw in ["DECISION", "\"decision\"", "{", "42", ""] {
            let store = InMemoryKeyValueStore::with_entry(MODE_KEY, raw);
            let router = ModeRouter::load(Arc::new(store));
            assert_eq!(router.mode(), Mode::Landing, "value {:?}", raw);
        }
    }

    #[test]
    fn set_mode_writes_json_tag() {
        let store = InMemoryKeyValueStore::new();
        let mut router = ModeRouter::load(Arc::new(store.clone()));

        let previous = router.set_mode(Mode::Teach);

        assert_eq!(previous, Mode::Landing);
        assert_eq!(router.mode(), Mode::Teach);
        assert_eq!(store.get(MODE_KEY).unwrap().as_deref(), Some("\"TEACH\""));
    }

    #[test]
    fn set_mode_is_unconditional() {
        let store = InMemoryKeyValueStore::new();
        let mut router = ModeRouter::load(Arc::new(store.clone()));

        router.set_mode(Mode::Filter);
        router.set_mode(Mode::Teach);
        router.set_mode(Mode::Filter);
        router.set_mode(Mode::Filter);

        assert_eq!(store.get(MODE_KEY).unwrap().as_deref(), Some("\"FILTER\""));
    }

    #[test]
    fn broken_store_never_blocks_navigation() {
        let mut router = ModeRouter::load(Arc::new(BrokenStore));
        assert_eq!(router.mode(), Mode::Landing);

        router.set_mode(Mode::Decision);

        assert_eq!(router.mode(), Mode::Decision);
    }

    #[test]
    fn mode_survives_a_new_router_on_the_same_store() {
        let store = Arc::new(InMemoryKeyValueStore::new());
        ModeRouter::load(store.clone()).set_mode(Mode::Filter);

        let reloaded = ModeRouter::load(store);

        assert_eq!(reloaded.mode(), Mode::Filter);
    }
}
