//! Extraction and pipeline orchestration for drupalarch.
//!
//! This crate ties together classification, document loading, and report
//! writing into the end-to-end inventory run (`run_inventory`).

pub mod content_types;
pub mod pipeline;
pub mod taxonomies;
pub mod views;

#[cfg(test)]
mod fixtures;
