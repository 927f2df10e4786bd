use crate::error::StoreError;
use ahash::AHashMap;
use std::fmt;

/// The entries the application persists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StoreKey {
    Users,
    Completed,
    Connections,
}

impl StoreKey {
    pub const ALL: [StoreKey; 3] = [StoreKey::Users, StoreKey::Completed, StoreKey::Connections];

    pub fn as_str(self) -> &'static str {
        match self {
            StoreKey::Users => "users",
            StoreKey::Completed => "completed",
            StoreKey::Connections => "connections",
        }
    }
}

impl fmt::Display for StoreKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A process-wide key/value store holding serialized application state.
///
/// Values are opaque strings; `AppState` decides the serialization.
pub trait StateStore {
    /// Returns `Ok(None)` when the entry has never been written.
    fn read(&self, key: StoreKey) -> Result<Option<String>, StoreError>;

    fn write(&mut self, key: StoreKey, value: &str) -> Result<(), StoreError>;
}

/// A volatile store, used by tests and one-shot runs.
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    entries: AHashMap<StoreKey, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds an entry with raw content, bypassing serialization.
    pub fn with_entry(mut self, key: StoreKey, value: &str) -> Self {
        self.entries.insert(key, value.to_string());
        self
    }
}

impl StateStore for MemoryStore {
    fn read(&self, key: StoreKey) -> Result<Option<String>, StoreError> {
        Ok(self.entries.get(&key).cloned())
    }

    fn write(&mut self, key: StoreKey, value: &str) -> Result<(), StoreError> {
        self.entries.insert(key, value.to_string());
        Ok(())
    }
}
