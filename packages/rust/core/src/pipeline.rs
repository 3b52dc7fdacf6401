//! End-to-end inventory pipeline: classify → extract → write reports.

use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use drupalarch_artifacts::{
    CONTENT_TYPES_REPORT, TAXONOMIES_REPORT, VIEWS_REPORT, content_type_report_name,
    ensure_output_dir, write_report,
};
use drupalarch_discovery::{Category, ConfigFile, classify_category};
use drupalarch_shared::{ContentTypeRecord, Result, RunConfig, TaxonomyRecord, ViewRecord};
use tracing::{info, instrument, warn};

use crate::content_types::extract_content_type;
use crate::taxonomies::extract_taxonomy;
use crate::views::extract_view;

/// Everything extracted from one configuration directory.
#[derive(Debug, Clone, Default)]
pub struct Inventory {
    pub content_types: Vec<ContentTypeRecord>,
    pub taxonomies: Vec<TaxonomyRecord>,
    pub views: Vec<ViewRecord>,
}

impl Inventory {
    /// Total fields across all content types.
    pub fn field_count(&self) -> usize {
        self.content_types.iter().map(|t| t.fields.len()).sum()
    }
}

/// Result of a full inventory run.
#[derive(Debug)]
pub struct InventoryResult {
    pub content_types: usize,
    pub fields: usize,
    pub taxonomies: usize,
    pub views: usize,
    /// Reports written, in write order.
    pub reports: Vec<PathBuf>,
    pub elapsed: Duration,
}

/// Progress callback for reporting pipeline status.
pub trait ProgressReporter: Send + Sync {
    /// Called when entering a new phase.
    fn phase(&self, name: &str);
    /// Called after each configuration file is extracted.
    fn file_extracted(&self, name: &str, current: usize, total: usize);
    /// Called when the pipeline completes.
    fn done(&self, result: &InventoryResult);
}

/// No-op progress reporter for headless/test usage.
pub struct SilentProgress;

impl ProgressReporter for SilentProgress {
    fn phase(&self, _name: &str) {}
    fn file_extracted(&self, _name: &str, _current: usize, _total: usize) {}
    fn done(&self, _result: &InventoryResult) {}
}

/// Run the full inventory.
///
/// Every category is extracted before any report is written, so a fatal
/// extraction error leaves the output directory untouched.
#[instrument(skip_all, fields(read_dir = %config.read_dir.display(), write_dir = %config.write_dir.display()))]
pub fn run_inventory(config: &RunConfig, progress: &dyn ProgressReporter) -> Result<InventoryResult> {
    let start = Instant::now();
    info!("starting inventory");

    let inventory = collect_inventory(&config.read_dir, progress)?;

    progress.phase("Writing reports");
    let reports = write_inventory(&inventory, &config.write_dir)?;

    let result = InventoryResult {
        content_types: inventory.content_types.len(),
        fields: inventory.field_count(),
        taxonomies: inventory.taxonomies.len(),
        views: inventory.views.len(),
        reports,
        elapsed: start.elapsed(),
    };

    info!(
        content_types = result.content_types,
        fields = result.fields,
        taxonomies = result.taxonomies,
        views = result.views,
        reports = result.reports.len(),
        "inventory complete"
    );
    progress.done(&result);

    Ok(result)
}

/// Classify `read_dir` and extract every category into memory.
pub fn collect_inventory(read_dir: &Path, progress: &dyn ProgressReporter) -> Result<Inventory> {
    let content_types = extract_category(read_dir, Category::ContentType, progress, |file| {
        extract_content_type(read_dir, file)
    })?;
    let taxonomies = extract_category(read_dir, Category::Taxonomy, progress, extract_taxonomy)?;
    let views = extract_category(read_dir, Category::View, progress, extract_view)?;

    Ok(Inventory {
        content_types,
        taxonomies,
        views,
    })
}

/// Write the aggregate and per-type reports into `write_dir`.
///
/// Order: `content_types.csv`, one `content_type_<type>.csv` per content
/// type, `taxonomies.csv`, `views.csv`.
pub fn write_inventory(inventory: &Inventory, write_dir: &Path) -> Result<Vec<PathBuf>> {
    ensure_output_dir(write_dir)?;

    let mut reports = vec![write_report(
        write_dir,
        CONTENT_TYPES_REPORT,
        &inventory.content_types,
    )?];

    for content_type in &inventory.content_types {
        let name = content_type_report_name(&content_type.machine_name);
        reports.push(write_report(write_dir, &name, &content_type.fields)?);
    }

    reports.push(write_report(write_dir, TAXONOMIES_REPORT, &inventory.taxonomies)?);
    reports.push(write_report(write_dir, VIEWS_REPORT, &inventory.views)?);

    Ok(reports)
}

fn extract_category<T>(
    read_dir: &Path,
    category: Category,
    progress: &dyn ProgressReporter,
    mut extract: impl FnMut(&ConfigFile) -> Result<T>,
) -> Result<Vec<T>> {
    progress.phase(&format!("Extracting {}", category.label()));

    let files = classify_category(read_dir, category)?;
    if files.is_empty() {
        warn!(category = category.label(), "no matching files");
    }

    let total = files.len();
    let mut records = Vec::with_capacity(total);
    for (i, file) in files.iter().enumerate() {
        records.push(extract(file)?);
        progress.file_extracted(&file.name, i + 1, total);
    }

    info!(category = category.label(), count = total, "category extracted");
    Ok(records)
}
