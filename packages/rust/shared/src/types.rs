//! Record types produced by the extractors and consumed by the report writer.

use std::fmt;

// ---------------------------------------------------------------------------
// TabularRecord
// ---------------------------------------------------------------------------

/// A record that renders as one fixed-arity CSV row.
pub trait TabularRecord {
    /// Column names, written once as the header row.
    const HEADER: &'static [&'static str];

    /// The row's cells, in `HEADER` order.
    fn row(&self) -> Vec<String>;
}

// ---------------------------------------------------------------------------
// Cardinality
// ---------------------------------------------------------------------------

/// Storage sentinel for "no limit".
pub const UNLIMITED_CARDINALITY: i64 = -1;

/// Maximum number of values a field may hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cardinality {
    Unlimited,
    Limited(u64),
}

impl Cardinality {
    /// Interpret a raw storage value. `-1` is unlimited; other negatives are invalid.
    pub fn from_storage(value: i64) -> Option<Self> {
        match value {
            UNLIMITED_CARDINALITY => Some(Self::Unlimited),
            n if n >= 0 => Some(Self::Limited(n as u64)),
            _ => None,
        }
    }
}

impl fmt::Display for Cardinality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unlimited => f.write_str("Unlimited"),
            Self::Limited(n) => write!(f, "{n}"),
        }
    }
}

// ---------------------------------------------------------------------------
// Records
// ---------------------------------------------------------------------------

/// One field attached to a content type, joined from its binding and storage documents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldRecord {
    pub label: String,
    /// Taken from the binding file name, not the document.
    pub machine_name: String,
    /// Storage type, e.g. `text_with_summary`.
    pub storage_type: String,
    pub description: String,
    pub required: bool,
    pub cardinality: Cardinality,
    pub translatable: bool,
}

impl TabularRecord for FieldRecord {
    const HEADER: &'static [&'static str] = &[
        "Label",
        "Machine Name",
        "Type",
        "Description",
        "Required",
        "Cardinality",
        "Translatable",
    ];

    fn row(&self) -> Vec<String> {
        vec![
            self.label.clone(),
            self.machine_name.clone(),
            self.storage_type.clone(),
            self.description.clone(),
            self.required.to_string(),
            self.cardinality.to_string(),
            self.translatable.to_string(),
        ]
    }
}

/// One content type definition plus the fields bound to it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentTypeRecord {
    /// The document's `type` value.
    pub type_name: String,
    pub name: String,
    pub description: String,
    /// Third file name segment; names the per-type report.
    pub machine_name: String,
    /// Written to the per-type report, not the aggregate one.
    pub fields: Vec<FieldRecord>,
}

impl TabularRecord for ContentTypeRecord {
    const HEADER: &'static [&'static str] = &["Type", "Name", "Description"];

    fn row(&self) -> Vec<String> {
        vec![
            self.type_name.clone(),
            self.name.clone(),
            self.description.clone(),
        ]
    }
}

/// One taxonomy vocabulary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaxonomyRecord {
    pub vid: String,
    pub name: String,
    pub description: String,
}

impl TabularRecord for TaxonomyRecord {
    const HEADER: &'static [&'static str] = &["Type", "Name", "Description"];

    fn row(&self) -> Vec<String> {
        vec![self.vid.clone(), self.name.clone(), self.description.clone()]
    }
}

/// One view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewRecord {
    pub label: String,
    pub description: String,
}

impl TabularRecord for ViewRecord {
    const HEADER: &'static [&'static str] = &["Label", "Description"];

    fn row(&self) -> Vec<String> {
        vec![self.label.clone(), self.description.clone()]
    }
}
