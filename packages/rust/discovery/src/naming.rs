//! Dot-delimited file name conventions.
//!
//! Machine names are read positionally from a configuration file's base
//! name: `node.type.<type>.yml`, `field.field.node.<type>.<field>.yml`.

use drupalarch_shared::{InventoryError, Result};

/// The zero-based `index`-th dot-delimited segment of `file_name`.
///
/// The segment must exist and be non-empty, and must not be the final
/// (extension) segment.
pub fn name_segment(file_name: &str, index: usize) -> Result<&str> {
    let segments: Vec<&str> = file_name.split('.').collect();

    if index + 1 >= segments.len() {
        return Err(InventoryError::naming(
            file_name,
            format!(
                "expected a segment at position {} followed by an extension, found {} segment(s)",
                index + 1,
                segments.len()
            ),
        ));
    }

    match segments[index] {
        "" => Err(InventoryError::naming(
            file_name,
            format!("segment at position {} is empty", index + 1),
        )),
        segment => Ok(segment),
    }
}

/// The final dot-delimited segment, e.g. `yml`.
pub fn file_extension(file_name: &str) -> Result<&str> {
    match file_name.rsplit_once('.') {
        Some((_, ext)) if !ext.is_empty() => Ok(ext),
        _ => Err(InventoryError::naming(file_name, "file name has no extension")),
    }
}
