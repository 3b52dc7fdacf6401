//! Configuration file discovery and classification.
//!
//! Walks a configuration export directory and partitions file base names
//! into categories by a literal name prefix. Prefixes always end on a
//! segment boundary (`node.type.`), so a dot in a pattern is never a
//! wildcard and `node.types.yml` never classifies as a content type.

mod naming;

use std::path::{Path, PathBuf};

use drupalarch_shared::{InventoryError, Result};
use tracing::{debug, instrument};
use walkdir::WalkDir;

pub use naming::{file_extension, name_segment};

// ---------------------------------------------------------------------------
// Category
// ---------------------------------------------------------------------------

/// The three top-level kinds of configuration file we report on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    ContentType,
    Taxonomy,
    View,
}

impl Category {
    /// All categories, in report order.
    pub const ALL: [Category; 3] = [Category::ContentType, Category::Taxonomy, Category::View];

    /// Leading segments shared by every file of this category.
    pub fn segments(self) -> &'static [&'static str] {
        match self {
            Self::ContentType => &["node", "type"],
            Self::Taxonomy => &["taxonomy", "vocabulary"],
            Self::View => &["views", "view"],
        }
    }

    /// Name pattern matching this category's files.
    pub fn pattern(self) -> NamePattern {
        NamePattern::from_segments(self.segments())
    }

    /// Short label for logs and progress output.
    pub fn label(self) -> &'static str {
        match self {
            Self::ContentType => "content types",
            Self::Taxonomy => "taxonomies",
            Self::View => "views",
        }
    }
}

// ---------------------------------------------------------------------------
// NamePattern
// ---------------------------------------------------------------------------

/// A literal, segment-aligned prefix tested against a file's base name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamePattern {
    prefix: String,
}

impl NamePattern {
    /// Pattern for names starting with the given dot-delimited segments.
    pub fn from_segments(segments: &[&str]) -> Self {
        let mut prefix = segments.join(".");
        prefix.push('.');
        Self { prefix }
    }

    /// Pattern for the field bindings of one content type:
    /// `field.field.node.<content_type>.`
    pub fn fields_of(content_type: &str) -> Self {
        Self::from_segments(&["field", "field", "node", content_type])
    }

    /// The literal prefix, including its trailing dot.
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Whether a base file name matches.
    pub fn matches(&self, file_name: &str) -> bool {
        file_name.starts_with(&self.prefix)
    }
}

// ---------------------------------------------------------------------------
// ConfigFile
// ---------------------------------------------------------------------------

/// A classified configuration file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigFile {
    /// Base file name; machine names are read from its segments.
    pub name: String,
    /// Full path the document is loaded from.
    pub path: PathBuf,
}

// ---------------------------------------------------------------------------
// Classification
// ---------------------------------------------------------------------------

/// Walk `root` recursively and collect every non-directory entry whose base
/// name matches `pattern`.
///
/// Entries are visited sorted by file name within each directory, so the
/// result order is stable for a given tree. Any walk error is fatal.
#[instrument(skip_all, fields(root = %root.display(), prefix = pattern.prefix()))]
pub fn classify(root: &Path, pattern: &NamePattern) -> Result<Vec<ConfigFile>> {
    let mut matches = Vec::new();

    for entry in WalkDir::new(root).sort_by_file_name() {
        let entry = entry.map_err(|e| walk_error(root, e))?;
        if entry.file_type().is_dir() {
            continue;
        }

        let Some(name) = entry.file_name().to_str() else {
            debug!(path = %entry.path().display(), "skipping non-UTF-8 file name");
            continue;
        };

        if pattern.matches(name) {
            debug!(file = name, "matched");
            matches.push(ConfigFile {
                name: name.to_string(),
                path: entry.path().to_path_buf(),
            });
        }
    }

    debug!(count = matches.len(), "classification complete");
    Ok(matches)
}

/// Classify `root` for one of the top-level categories.
pub fn classify_category(root: &Path, category: Category) -> Result<Vec<ConfigFile>> {
    classify(root, &category.pattern())
}

fn walk_error(root: &Path, err: walkdir::Error) -> InventoryError {
    let path = err.path().unwrap_or(root).to_path_buf();
    match err.into_io_error() {
        Some(source) => InventoryError::io(path, source),
        None => InventoryError::io(
            path,
            std::io::Error::other("filesystem loop detected during directory walk"),
        ),
    }
}
