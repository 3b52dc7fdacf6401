//! Shared types, error model, and settings for drupalarch.
//!
//! This crate is the foundation depended on by all other drupalarch crates.
//! It provides:
//! - [`InventoryError`] - the unified error type
//! - Record types ([`ContentTypeRecord`], [`FieldRecord`], [`TaxonomyRecord`], [`ViewRecord`])
//!   and the [`TabularRecord`] trait they render through
//! - Settings ([`AppConfig`], [`RunConfig`], settings loading)

pub mod config;
pub mod error;
pub mod types;

// Re-export public API at crate root for ergonomic imports.
pub use config::{
    AppConfig, DefaultsConfig, LogFormat, LoggingConfig, RunConfig, config_dir, config_file_path,
    load_config, load_config_from,
};
pub use error::{InventoryError, Result};
pub use types::{
    Cardinality, ContentTypeRecord, FieldRecord, TabularRecord, TaxonomyRecord,
    UNLIMITED_CARDINALITY, ViewRecord,
};
