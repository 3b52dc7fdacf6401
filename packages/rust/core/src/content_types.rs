//! Content type extraction.
//!
//! A content type's own document (`node.type.<type>.yml`) supplies its
//! name and description. Its fields live in separate binding documents
//! (`field.field.node.<type>.<field>.yml`), each joined with the field's
//! storage document (`field.storage.node.<field>.yml`) found beside it.

use std::path::{Path, PathBuf};

use drupalarch_discovery::{ConfigFile, NamePattern, classify, file_extension, name_segment};
use drupalarch_loader::load_document;
use drupalarch_shared::{Cardinality, ContentTypeRecord, FieldRecord, InventoryError, Result};
use tracing::{debug, instrument};

/// Segment of `node.type.<type>.yml` holding the content type machine name.
const TYPE_NAME_SEGMENT: usize = 2;

/// Segment of `field.field.node.<type>.<field>.yml` holding the field machine name.
const FIELD_NAME_SEGMENT: usize = 4;

/// Extract one content type and every field bound to it.
///
/// `root` is re-classified for this type's field bindings.
#[instrument(skip_all, fields(file = %file.name))]
pub fn extract_content_type(root: &Path, file: &ConfigFile) -> Result<ContentTypeRecord> {
    let doc = load_document(&file.path)?;
    let type_name = doc.require_str("type")?.to_string();
    let name = doc.require_str("name")?.to_string();
    let description = doc.require_str("description")?.to_string();

    let machine_name = name_segment(&file.name, TYPE_NAME_SEGMENT)?.to_string();

    let bindings = classify(root, &NamePattern::fields_of(&machine_name))?;
    let fields = bindings
        .iter()
        .map(extract_field)
        .collect::<Result<Vec<_>>>()?;

    debug!(%machine_name, fields = fields.len(), "content type extracted");

    Ok(ContentTypeRecord {
        type_name,
        name,
        description,
        machine_name,
        fields,
    })
}

/// Join a field binding document with its storage document.
#[instrument(skip_all, fields(file = %binding.name))]
pub fn extract_field(binding: &ConfigFile) -> Result<FieldRecord> {
    let machine_name = name_segment(&binding.name, FIELD_NAME_SEGMENT)?;
    let extension = file_extension(&binding.name)?;

    let field_doc = load_document(&binding.path)?;
    let storage_doc = load_document(&storage_path(binding, machine_name, extension))?;

    let raw = storage_doc.require_i64("cardinality")?;
    let cardinality = Cardinality::from_storage(raw).ok_or_else(|| {
        InventoryError::schema(
            storage_doc.path(),
            format!("cardinality must be -1 or a non-negative integer, found {raw}"),
        )
    })?;

    Ok(FieldRecord {
        label: field_doc.require_str("label")?.to_string(),
        machine_name: machine_name.to_string(),
        storage_type: storage_doc.require_str("type")?.to_string(),
        description: field_doc.require_str("description")?.to_string(),
        required: field_doc.require_bool("required")?,
        cardinality,
        translatable: field_doc.require_bool("translatable")?,
    })
}

/// `field.storage.node.<field>.<ext>` in the binding's directory.
fn storage_path(binding: &ConfigFile, field: &str, extension: &str) -> PathBuf {
    binding
        .path
        .with_file_name(format!("field.storage.node.{field}.{extension}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::{self, config_file};

    #[test]
    fn joins_binding_with_storage() {
        let dir = tempfile::tempdir().expect("tempdir");
        fixtures::content_type(dir.path(), "article", "Article", "A news article");
        fixtures::field(dir.path(), "article", "body", "Body", "Main text", true, false);
        fixtures::storage(dir.path(), "body", "text_with_summary", "1");

        let file = config_file(dir.path(), "node.type.article.yml");
        let record = extract_content_type(dir.path(), &file).unwrap();

        assert_eq!(record.type_name, "article");
        assert_eq!(record.machine_name, "article");
        assert_eq!(
            record.fields,
            vec![FieldRecord {
                label: "Body".into(),
                machine_name: "body".into(),
                storage_type: "text_with_summary".into(),
                description: "Main text".into(),
                required: true,
                cardinality: Cardinality::Limited(1),
                translatable: false,
            }]
        );
    }

    #[test]
    fn unlimited_cardinality() {
        let dir = tempfile::tempdir().expect("tempdir");
        fixtures::field(dir.path(), "article", "field_tags", "Tags", "", false, true);
        fixtures::storage(dir.path(), "field_tags", "entity_reference", "-1");

        let binding = config_file(dir.path(), "field.field.node.article.field_tags.yml");
        let field = extract_field(&binding).unwrap();
        assert_eq!(field.cardinality, Cardinality::Unlimited);
        assert_eq!(field.cardinality.to_string(), "Unlimited");
    }

    #[test]
    fn invalid_cardinality_is_schema_error() {
        let dir = tempfile::tempdir().expect("tempdir");
        fixtures::field(dir.path(), "page", "field_x", "X", "", false, false);
        fixtures::storage(dir.path(), "field_x", "string", "-5");

        let binding = config_file(dir.path(), "field.field.node.page.field_x.yml");
        let err = extract_field(&binding).unwrap_err();
        assert!(matches!(err, InventoryError::Schema { .. }));
        assert!(err.to_string().contains("found -5"));
    }

    #[test]
    fn missing_storage_sibling_is_io_error() {
        let dir = tempfile::tempdir().expect("tempdir");
        fixtures::field(dir.path(), "article", "field_image", "Image", "", false, false);

        let binding = config_file(dir.path(), "field.field.node.article.field_image.yml");
        let err = extract_field(&binding).unwrap_err();
        assert!(matches!(err, InventoryError::Io { .. }));
        assert!(err.to_string().contains("field.storage.node.field_image.yml"));
    }

    #[test]
    fn storage_follows_binding_extension() {
        let dir = tempfile::tempdir().expect("tempdir");
        let binding = config_file(dir.path(), "field.field.node.page.body.yaml");
        assert_eq!(
            storage_path(&binding, "body", "yaml"),
            dir.path().join("field.storage.node.body.yaml")
        );
    }

    #[test]
    fn content_type_without_fields() {
        let dir = tempfile::tempdir().expect("tempdir");
        fixtures::content_type(dir.path(), "page", "Basic page", "Static content");

        let file = config_file(dir.path(), "node.type.page.yml");
        let record = extract_content_type(dir.path(), &file).unwrap();
        assert!(record.fields.is_empty());
    }

    #[test]
    fn short_field_file_name_is_naming_error() {
        let dir = tempfile::tempdir().expect("tempdir");
        std::fs::write(dir.path().join("field.field.node.page.yml"), "label: X\n").unwrap();

        let binding = config_file(dir.path(), "field.field.node.page.yml");
        let err = extract_field(&binding).unwrap_err();
        assert!(matches!(err, InventoryError::Naming { .. }));
    }

    #[test]
    fn non_boolean_required_is_schema_error() {
        let dir = tempfile::tempdir().expect("tempdir");
        std::fs::write(
            dir.path().join("field.field.node.page.body.yml"),
            "label: Body\ndescription: ''\nrequired: 1\ntranslatable: true\n",
        )
        .unwrap();
        fixtures::storage(dir.path(), "body", "text_long", "1");

        let binding = config_file(dir.path(), "field.field.node.page.body.yml");
        let err = extract_field(&binding).unwrap_err();
        assert!(err.to_string().contains("'required' must be a boolean"));
    }
}
