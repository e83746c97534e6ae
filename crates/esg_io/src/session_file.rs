//! crates/esg_io/src/session_file.rs
//! File-backed selection relay: lets one CLI invocation (landing) hand the
//! selected topic to the next (report). The file holds a flat JSON object of
//! string entries; this code never deletes it.

use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use esg_core::relay::{RelayError, SelectionRelay};
use tracing::debug;

use crate::canonical_json::{to_canonical_bytes, write_atomic};

/// Default session file name, relative to the working directory.
pub const DEFAULT_SESSION_FILE: &str = ".esg-session.json";

#[derive(Debug, Clone)]
pub struct FileRelay {
    path: PathBuf,
}

impl FileRelay {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Current entries; a missing or unreadable file reads as empty.
    fn entries(&self) -> BTreeMap<String, String> {
        let bytes = match fs::read(&self.path) {
            Ok(b) => b,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return BTreeMap::new(),
            Err(e) => {
                debug!(path = %self.path.display(), error = %e, "session file not readable");
                return BTreeMap::new();
            }
        };
        match serde_json::from_slice(&bytes) {
            Ok(m) => m,
            Err(e) => {
                debug!(path = %self.path.display(), error = %e, "ignoring unreadable session file");
                BTreeMap::new()
            }
        }
    }
}

impl SelectionRelay for FileRelay {
    fn write(&mut self, key: &str, value: &str) -> Result<(), RelayError> {
        let mut entries = self.entries();
        entries.insert(key.to_string(), value.to_string());
        let bytes = to_canonical_bytes(&entries).map_err(|e| RelayError(e.to_string()))?;
        write_atomic(&self.path, &bytes)
            .map_err(|e| RelayError(format!("{}: {e}", self.path.display())))
    }

    fn read(&self, key: &str) -> Option<String> {
        self.entries().get(key).cloned()
    }
}
