//! CSV report writing.
//!
//! Each report is a header row followed by one row per record, encoded as
//! comma-delimited, `\n`-terminated CSV with quoting only where a cell
//! needs it. The destination is created or truncated.

use std::path::{Path, PathBuf};

use drupalarch_shared::{InventoryError, Result, TabularRecord};
use tracing::{debug, info, instrument};

/// Aggregate content types report.
pub const CONTENT_TYPES_REPORT: &str = "content_types.csv";

/// Aggregate taxonomy vocabularies report.
pub const TAXONOMIES_REPORT: &str = "taxonomies.csv";

/// Aggregate views report.
pub const VIEWS_REPORT: &str = "views.csv";

/// File name of the per-type field report, e.g. `content_type_article.csv`.
pub fn content_type_report_name(machine_name: &str) -> String {
    format!("content_type_{machine_name}.csv")
}

/// Write `records` under `header` to the CSV file at `path`.
///
/// Returns the number of data rows written.
#[instrument(skip_all, fields(path = %path.display()))]
pub fn write_table<I>(path: &Path, header: &[&str], rows: I) -> Result<usize>
where
    I: IntoIterator<Item = Vec<String>>,
{
    let mut writer = csv::Writer::from_path(path).map_err(|e| csv_error(path, e))?;

    writer
        .write_record(header)
        .map_err(|e| csv_error(path, e))?;

    let mut written = 0;
    for row in rows {
        writer.write_record(&row).map_err(|e| csv_error(path, e))?;
        written += 1;
    }

    writer.flush().map_err(|e| InventoryError::io(path, e))?;

    debug!(rows = written, "table written");
    Ok(written)
}

/// Write a typed report into `dir` as `file_name`. Returns the report path.
pub fn write_report<R: TabularRecord>(dir: &Path, file_name: &str, records: &[R]) -> Result<PathBuf> {
    let path = dir.join(file_name);
    let rows = write_table(&path, R::HEADER, records.iter().map(R::row))?;
    info!(report = file_name, rows, "report written");
    Ok(path)
}

/// Create the output directory if it does not exist yet.
pub fn ensure_output_dir(dir: &Path) -> Result<()> {
    std::fs::create_dir_all(dir).map_err(|e| InventoryError::io(dir, e))
}

fn csv_error(path: &Path, err: csv::Error) -> InventoryError {
    match err.into_kind() {
        csv::ErrorKind::Io(source) => InventoryError::io(path, source),
        other => InventoryError::report(path, format!("{other:?}")),
    }
}
