//! Error types for drupalarch.
//!
//! Library crates use [`InventoryError`] via `thiserror`.
//! The CLI wraps this with `color-eyre` for rich diagnostics.

use std::path::PathBuf;

/// Top-level error type for all inventory operations.
///
/// Every variant is fatal: the run stops at the first one.
#[derive(Debug, thiserror::Error)]
pub enum InventoryError {
    /// Settings file loading or validation error.
    #[error("config error: {message}")]
    Config { message: String },

    /// Filesystem I/O error (read, walk, create, write).
    #[error("I/O error at {path:?}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The document is not valid YAML, or its top level is not a mapping.
    #[error("decode error in {path:?}: {message}")]
    Decode { path: PathBuf, message: String },

    /// A required key is missing or holds a value of the wrong type.
    #[error("schema mismatch in {path:?}: {message}")]
    Schema { path: PathBuf, message: String },

    /// A file name does not follow the dot-delimited naming convention.
    #[error("naming convention violated by '{file_name}': {message}")]
    Naming { file_name: String, message: String },

    /// Tabular encoding error while writing a report.
    #[error("report error at {path:?}: {message}")]
    Report { path: PathBuf, message: String },
}

/// Convenience alias used throughout the codebase.
pub type Result<T> = std::result::Result<T, InventoryError>;

impl InventoryError {
    /// Create a config error from any displayable message.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config {
            message: msg.into(),
        }
    }

    /// Wrap a `std::io::Error` with a path for context.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Create a decode error for the document at `path`.
    pub fn decode(path: impl Into<PathBuf>, msg: impl Into<String>) -> Self {
        Self::Decode {
            path: path.into(),
            message: msg.into(),
        }
    }

    /// Create a schema-mismatch error for the document at `path`.
    pub fn schema(path: impl Into<PathBuf>, msg: impl Into<String>) -> Self {
        Self::Schema {
            path: path.into(),
            message: msg.into(),
        }
    }

    /// Create a naming-convention error for a base file name.
    pub fn naming(file_name: impl Into<String>, msg: impl Into<String>) -> Self {
        Self::Naming {
            file_name: file_name.into(),
            message: msg.into(),
        }
    }

    /// Create a report-writing error for the report at `path`.
    pub fn report(path: impl Into<PathBuf>, msg: impl Into<String>) -> Self {
        Self::Report {
            path: path.into(),
            message: msg.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display_formatting() {
        let err = InventoryError::config("bad level");
        assert_eq!(err.to_string(), "config error: bad level");

        let err = InventoryError::schema("node.type.article.yml", "missing key 'description'");
        assert!(err.to_string().contains("missing key 'description'"));
        assert!(err.to_string().starts_with("schema mismatch"));
    }

    #[test]
    fn naming_error_names_the_file() {
        let err = InventoryError::naming("node.yml", "expected segment 3");
        assert_eq!(
            err.to_string(),
            "naming convention violated by 'node.yml': expected segment 3"
        );
    }
}
