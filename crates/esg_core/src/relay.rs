//! crates/esg_core/src/relay.rs
//! Selection relay: the single key/value entry carrying the chosen topic from
//! the landing surface to the report surface.
//!
//! Controllers receive the relay by reference instead of reaching for a global.
//! Implementations decide where the entry lives (memory, a session file, ...).

use std::collections::BTreeMap;
use std::fmt;

use crate::ids::TopicId;

/// Fixed key under which the selected topic is stored.
pub const SELECTION_KEY: &str = "esg.selectedTopic";

/// Failure to persist the entry. Callers treat it as a silent no-op.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelayError(pub String);

impl fmt::Display for RelayError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "selection relay: {}", self.0)
    }
}

impl std::error::Error for RelayError {}

/// Session-scoped key/value storage.
pub trait SelectionRelay {
    fn write(&mut self, key: &str, value: &str) -> Result<(), RelayError>;
    fn read(&self, key: &str) -> Option<String>;

    /// Store the selected topic under [`SELECTION_KEY`].
    fn store_selection(&mut self, topic: &TopicId) -> Result<(), RelayError> {
        self.write(SELECTION_KEY, topic.as_str())
    }

    /// Raw selection value, if one was written. Not validated here.
    fn selection(&self) -> Option<String> {
        self.read(SELECTION_KEY)
    }
}

impl<R: SelectionRelay + ?Sized> SelectionRelay for &mut R {
    fn write(&mut self, key: &str, value: &str) -> Result<(), RelayError> {
        (**self).write(key, value)
    }
    fn read(&self, key: &str) -> Option<String> {
        (**self).read(key)
    }
}

/// In-memory relay, scoped to the value's lifetime.
#[derive(Debug, Default, Clone)]
pub struct MemoryRelay {
    entries: BTreeMap<String, String>,
}

impl MemoryRelay {
    pub fn new() -> Self {
        Self::default()
    }

    /// Relay pre-seeded with a raw selection value (which may be invalid).
    pub fn with_selection(raw: &str) -> Self {
        let mut r = Self::new();
        r.entries.insert(SELECTION_KEY.to_string(), raw.to_string());
        r
    }
}

impl SelectionRelay for MemoryRelay {
    fn write(&mut self, key: &str, value: &str) -> Result<(), RelayError> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn read(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }
}
