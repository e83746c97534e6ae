//! crates/esg_io/src/lib.rs
//! I/O crate for the ESG report engine.
//!
//! - Shared error type (`IoError`) with `From` conversions used across modules.
//! - Catalog loading (embedded asset or local file), schema validation, digest.
//! - Canonical JSON writes, site configuration, file-backed selection relay.

#![forbid(unsafe_code)]

use thiserror::Error;

/// Unified error for esg_io.
#[derive(Debug, Error)]
pub enum IoError {
    /// Filesystem / path errors (read, create_dir_all, rename, ...)
    #[error("io/path error: {0}")]
    Path(String),

    /// JSON serialization/deserialization errors with a JSON Pointer.
    #[error("json error at {pointer}: {msg}")]
    Json { pointer: String, msg: String },

    /// JSON Schema violation (first error reported).
    #[error("schema error at {pointer}: {msg}")]
    Schema { pointer: String, msg: String },

    /// Domain validation / invariants.
    #[error("invalid: {0}")]
    Invalid(String),
}

pub type IoResult<T> = Result<T, IoError>;

/* ---------------- From conversions (used by file modules) ---------------- */

impl From<std::io::Error> for IoError {
    fn from(e: std::io::Error) -> Self {
        IoError::Path(e.to_string())
    }
}

impl From<serde_json::Error> for IoError {
    fn from(e: serde_json::Error) -> Self {
        // serde_json doesn't keep a pointer; report root plus its line/column.
        IoError::Json {
            pointer: "/".to_string(),
            msg: e.to_string(),
        }
    }
}

impl From<esg_core::CoreError> for IoError {
    fn from(e: esg_core::CoreError) -> Self {
        IoError::Invalid(e.to_string())
    }
}

pub mod canonical_json;
pub mod config;
pub mod hasher;
pub mod loader;
pub mod session_file;

/* ---------------- Public prelude ---------------- */

pub mod prelude {
    pub use crate::{IoError, IoResult};

    pub use crate::canonical_json::{to_canonical_bytes, write_atomic};
    pub use crate::config::{load_config, SiteConfig};
    pub use crate::hasher::sha256_hex;
    pub use crate::loader::{load_builtin, load_catalog, LoadedCatalog};
    pub use crate::session_file::FileRelay;
}
