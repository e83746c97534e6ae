//! Loader: read the catalog data asset (embedded or a local file), validate it
//! against the embedded Draft 2020-12 schema, check domain invariants, and
//! return a typed `LoadedCatalog` with its input digest. No network I/O.

use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

use esg_core::Catalog;
use serde_json::Value;
use tracing::debug;

use crate::hasher::sha256_hex;
use crate::{IoError, IoResult};

/// Catalog shipped with the engine.
pub const BUILTIN_CATALOG_JSON: &str = include_str!("../data/catalog.json");

#[cfg(feature = "schemaval")]
const CATALOG_SCHEMA_JSON: &str = include_str!("../schemas/catalog.schema.json");

/// Upper bound on catalog size; the asset is a handful of kilobytes.
const MAX_CATALOG_BYTES: u64 = 4 * 1024 * 1024;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogSource {
    Builtin,
    File(PathBuf),
}

/// Loaded, validated catalog plus provenance.
#[derive(Debug, Clone)]
pub struct LoadedCatalog {
    pub catalog: Catalog,
    /// SHA-256 of the catalog bytes as read.
    pub sha256: String,
    pub source: CatalogSource,
}

/// Load the embedded catalog.
pub fn load_builtin() -> IoResult<LoadedCatalog> {
    let bytes = BUILTIN_CATALOG_JSON.as_bytes();
    let catalog = parse_catalog(bytes)?;
    Ok(LoadedCatalog {
        catalog,
        sha256: sha256_hex(bytes),
        source: CatalogSource::Builtin,
    })
}

/// Load from `path` when given, else the embedded catalog.
pub fn load_catalog(path: Option<&Path>) -> IoResult<LoadedCatalog> {
    let Some(path) = path else {
        return load_builtin();
    };
    if looks_like_url(&path.to_string_lossy()) {
        return Err(IoError::Path(format!(
            "catalog must be a local file (no URLs): {}",
            path.display()
        )));
    }
    let bytes = read_capped(path)?;
    let catalog = parse_catalog(&bytes)?;
    debug!(path = %path.display(), topics = catalog.profiles.len(), "catalog loaded");
    Ok(LoadedCatalog {
        catalog,
        sha256: sha256_hex(&bytes),
        source: CatalogSource::File(path.to_path_buf()),
    })
}

/// Read at most one byte past the cap, so a file that grows between open and
/// read is still bounded.
fn read_capped(path: &Path) -> IoResult<Vec<u8>> {
    let io_err = |e: std::io::Error| IoError::Path(format!("{}: {e}", path.display()));
    let mut bytes = Vec::new();
    File::open(path)
        .map_err(io_err)?
        .take(MAX_CATALOG_BYTES + 1)
        .read_to_end(&mut bytes)
        .map_err(io_err)?;
    if bytes.len() as u64 > MAX_CATALOG_BYTES {
        return Err(IoError::Invalid(format!(
            "catalog {} exceeds {} bytes",
            path.display(),
            MAX_CATALOG_BYTES
        )));
    }
    Ok(bytes)
}

/// Parse → schema-validate → type → domain-check.
pub fn parse_catalog(bytes: &[u8]) -> IoResult<Catalog> {
    let raw: Value = serde_json::from_slice(bytes)?;
    validate_schema(&raw)?;
    let catalog: Catalog = serde_json::from_value(raw)?;
    catalog.check()?;
    Ok(catalog)
}

#[cfg(feature = "schemaval")]
fn validate_schema(raw: &Value) -> IoResult<()> {
    use jsonschema::{Draft, JSONSchema};

    let schema_v: Value = serde_json::from_str(CATALOG_SCHEMA_JSON)
        .map_err(|e| IoError::Invalid(format!("invalid embedded catalog.schema.json: {e}")))?;
    let compiled = JSONSchema::options()
        .with_draft(Draft::Draft202012)
        .compile(&schema_v)
        .map_err(|e| IoError::Invalid(format!("schema compile error: {e}")))?;

    if let Err(errors) = compiled.validate(raw) {
        // Report the first violation with its instance pointer.
        if let Some(err) = errors.into_iter().next() {
            let ptr = err.instance_path.to_string();
            return Err(IoError::Schema {
                pointer: if ptr.is_empty() { "/".to_string() } else { ptr },
                msg: err.to_string(),
            });
        }
    }
    Ok(())
}

#[cfg(not(feature = "schemaval"))]
fn validate_schema(_raw: &Value) -> IoResult<()> {
    Ok(())
}

/// True if `s` looks like a URL (any `<scheme>://`).
#[inline]
pub fn looks_like_url(s: &str) -> bool {
    s.trim().contains("://")
}
