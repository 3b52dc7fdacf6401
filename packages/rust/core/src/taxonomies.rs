//! Taxonomy vocabulary extraction.

use drupalarch_discovery::ConfigFile;
use drupalarch_loader::load_document;
use drupalarch_shared::{Result, TaxonomyRecord};
use tracing::instrument;

/// Extract one `taxonomy.vocabulary.<vid>.yml` document.
#[instrument(skip_all, fields(file = %file.name))]
pub fn extract_taxonomy(file: &ConfigFile) -> Result<TaxonomyRecord> {
    let doc = load_document(&file.path)?;

    Ok(TaxonomyRecord {
        vid: doc.require_str("vid")?.to_string(),
        name: doc.require_str("name")?.to_string(),
        description: doc.require_str("description")?.to_string(),
    })
}
