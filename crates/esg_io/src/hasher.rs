//! crates/esg_io/src/hasher.rs
//!
//! SHA-256 digests for the catalog asset and rendered artifacts.
//! Hex digests are **lowercase**.
//!
//! - `sha256_hex(..)` for raw bytes (the catalog file as loaded).
//! - `short_digest(..)` for log lines.

use sha2::{Digest, Sha256};

/// Lowercase 64-hex SHA-256 of `bytes`.
pub fn sha256_hex(bytes: &[u8]) -> String {
    let mut h = Sha256::new();
    h.update(bytes);
    hex::encode(h.finalize())
}

/// Short form for logs and `validate` output (first 12 hex digits).
pub fn short_digest(hex64: &str) -> &str {
    let end = hex64.len().min(12);
    &hex64[..end]
}
