//! Configuration export fixtures for tests.

use std::path::Path;

use drupalarch_discovery::ConfigFile;

fn quote(s: &str) -> String {
    format!("'{}'", s.replace('\'', "''"))
}

fn write(dir: &Path, name: &str, body: &str) {
    std::fs::write(dir.join(name), body).expect("write fixture");
}

pub(crate) fn config_file(dir: &Path, name: &str) -> ConfigFile {
    ConfigFile {
        name: name.to_string(),
        path: dir.join(name),
    }
}

pub(crate) fn content_type(dir: &Path, machine_name: &str, name: &str, description: &str) {
    let body = format!(
        "langcode: en\nstatus: true\nname: {}\ntype: {machine_name}\ndescription: {}\nnew_revision: true\n",
        quote(name),
        quote(description),
    );
    write(dir, &format!("node.type.{machine_name}.yml"), &body);
}

pub(crate) fn field(
    dir: &Path,
    content_type: &str,
    field: &str,
    label: &str,
    description: &str,
    required: bool,
    translatable: bool,
) {
    let body = format!(
        "langcode: en\nid: node.{content_type}.{field}\nfield_name: {field}\nentity_type: node\n\
         bundle: {content_type}\nlabel: {}\ndescription: {}\nrequired: {required}\n\
         translatable: {translatable}\n",
        quote(label),
        quote(description),
    );
    write(dir, &format!("field.field.node.{content_type}.{field}.yml"), &body);
}

pub(crate) fn storage(dir: &Path, field: &str, storage_type: &str, cardinality: &str) {
    let body = format!(
        "langcode: en\nid: node.{field}\nfield_name: {field}\nentity_type: node\n\
         type: {storage_type}\ncardinality: {cardinality}\ntranslatable: true\n"
    );
    write(dir, &format!("field.storage.node.{field}.yml"), &body);
}

pub(crate) fn vocabulary(dir: &Path, vid: &str, name: &str, description: &str) {
    let body = format!(
        "langcode: en\nstatus: true\nname: {}\nvid: {vid}\ndescription: {}\nweight: 0\n",
        quote(name),
        quote(description),
    );
    write(dir, &format!("taxonomy.vocabulary.{vid}.yml"), &body);
}

pub(crate) fn view(dir: &Path, id: &str, label: &str, description: &str) {
    let body = format!(
        "langcode: en\nstatus: true\nid: {id}\nlabel: {}\nmodule: views\ndescription: {}\n\
         tag: ''\nbase_table: node_field_data\n",
        quote(label),
        quote(description),
    );
    write(dir, &format!("views.view.{id}.yml"), &body);
}
