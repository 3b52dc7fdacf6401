//! View extraction.

use drupalarch_discovery::ConfigFile;
use drupalarch_loader::load_document;
use drupalarch_shared::{Result, ViewRecord};
use tracing::instrument;

/// Extract one `views.view.<id>.yml` document.
#[instrument(skip_all, fields(file = %file.name))]
pub fn extract_view(file: &ConfigFile) -> Result<ViewRecord> {
    let doc = load_document(&file.path)?;

    Ok(ViewRecord {
        label: doc.require_str("label")?.to_string(),
        description: doc.require_str("description")?.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::{self, config_file};

    #[test]
    fn reads_view() {
        let dir = tempfile::tempdir().expect("tempdir");
        fixtures::view(dir.path(), "frontpage", "Frontpage", "All content promoted to the front page.");

        let record = extract_view(&config_file(dir.path(), "views.view.frontpage.yml")).unwrap();
        assert_eq!(record.label, "Frontpage");
        assert_eq!(record.description, "All content promoted to the front page.");
    }

    #[test]
    fn null_description_is_rejected() {
        let dir = tempfile::tempdir().expect("tempdir");
        std::fs::write(
            dir.path().join("views.view.files.yml"),
            "label: Files\ndescription: null\n",
        )
        .unwrap();

        let err = extract_view(&config_file(dir.path(), "views.view.files.yml")).unwrap_err();
        assert!(err.to_string().contains("must be a string, found null"));
    }
}
