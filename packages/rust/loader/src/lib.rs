//! YAML configuration document loading.
//!
//! A configuration export file is read in full, decoded from YAML into a
//! weakly-typed JSON tree, and handed out as a [`ConfigDocument`]: a
//! top-level mapping plus checked accessors that turn a missing key or a
//! value of the wrong type into [`InventoryError::Schema`].

use std::path::{Path, PathBuf};

use drupalarch_shared::{InventoryError, Result};
use serde_json::{Map, Value};
use tracing::{instrument, trace};

// ---------------------------------------------------------------------------
// ConfigDocument
// ---------------------------------------------------------------------------

/// A decoded configuration file. Immutable once loaded.
#[derive(Debug, Clone)]
pub struct ConfigDocument {
    path: PathBuf,
    entries: Map<String, Value>,
}

impl ConfigDocument {
    /// The file this document was read from.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Look up a top-level key without any type expectation.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.entries.get(key)
    }

    /// Look up a top-level key that must be present.
    pub fn require(&self, key: &str) -> Result<&Value> {
        self.entries.get(key).ok_or_else(|| {
            InventoryError::schema(&self.path, format!("missing required key '{key}'"))
        })
    }

    /// A required key holding a string.
    pub fn require_str(&self, key: &str) -> Result<&str> {
        match self.require(key)? {
            Value::String(s) => Ok(s),
            other => Err(self.mismatch(key, "a string", other)),
        }
    }

    /// A required key holding a boolean.
    pub fn require_bool(&self, key: &str) -> Result<bool> {
        match self.require(key)? {
            Value::Bool(b) => Ok(*b),
            other => Err(self.mismatch(key, "a boolean", other)),
        }
    }

    /// A required key holding an integer.
    pub fn require_i64(&self, key: &str) -> Result<i64> {
        let value = self.require(key)?;
        value
            .as_i64()
            .ok_or_else(|| self.mismatch(key, "an integer", value))
    }

    fn mismatch(&self, key: &str, expected: &str, found: &Value) -> InventoryError {
        InventoryError::schema(
            &self.path,
            format!("key '{key}' must be {expected}, found {}", value_kind(found)),
        )
    }
}

/// Human-readable name of a value's runtime type.
fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(n) if n.is_i64() || n.is_u64() => "an integer",
        Value::Number(_) => "a float",
        Value::String(_) => "a string",
        Value::Array(_) => "a sequence",
        Value::Object(_) => "a mapping",
    }
}

// ---------------------------------------------------------------------------
// Loading
// ---------------------------------------------------------------------------

/// Read and decode the YAML document at `path`.
///
/// Fails with [`InventoryError::Io`] when the file cannot be read and with
/// [`InventoryError::Decode`] when it is not YAML or its top level is not a
/// mapping.
#[instrument(skip_all, fields(path = %path.display()))]
pub fn load_document(path: &Path) -> Result<ConfigDocument> {
    let bytes = std::fs::read(path).map_err(|e| InventoryError::io(path, e))?;
    let document = decode_document(path, &bytes)?;
    trace!(keys = document.entries.len(), "document loaded");
    Ok(document)
}

/// Decode YAML bytes already read from `path`.
pub fn decode_document(path: &Path, bytes: &[u8]) -> Result<ConfigDocument> {
    let tree: Value = serde_yaml::from_slice(bytes)
        .map_err(|e| InventoryError::decode(path, e.to_string()))?;

    match tree {
        Value::Object(entries) => Ok(ConfigDocument {
            path: path.to_path_buf(),
            entries,
        }),
        other => Err(InventoryError::decode(
            path,
            format!("top-level document must be a mapping, found {}", value_kind(&other)),
        )),
    }
}
