//! Generator configuration files.
//!
//! A configuration bundles [`GenerationOptions`] with widget mapping records
//! in the shape the builder stores them:
//!
//! ```json
//! {
//!   "options": { "indentSize": 4, "format": "compact" },
//!   "mappings": [
//!     {
//!       "ui_type": "badge",
//!       "flutter_widget": "Badge",
//!       "properties_mapping": { "label": "label: Text({{value}})" },
//!       "import_statements": "import 'package:badges/badges.dart';",
//!       "can_have_children": true
//!     }
//!   ]
//! }
//! ```

use crate::error::Result;
use crate::options::GenerationOptions;
use forge_core::{MappingEntry, MappingTable};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::debug;

/// One widget mapping as stored by the builder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MappingRecord {
    pub ui_type: String,
    pub flutter_widget: String,
    /// Property name to template with one `{{value}}` placeholder.
    #[serde(default)]
    pub properties_mapping: IndexMap<String, String>,
    /// Newline-separated import statements or URIs.
    #[serde(default)]
    pub import_statements: String,
    #[serde(default)]
    pub can_have_children: bool,
    #[serde(default = "default_true")]
    pub is_active: bool,
}

impl MappingRecord {
    fn to_entry(&self) -> MappingEntry {
        let mut entry = MappingEntry::new(&self.ui_type, &self.flutter_widget).with_children(self.can_have_children);
        for (property, template) in &self.properties_mapping {
            entry = entry.with_template(property, template);
        }
        for import in self.import_statements.lines().filter(|line| !line.trim().is_empty()) {
            entry = entry.with_import(import);
        }
        entry
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GeneratorConfig {
    pub options: GenerationOptions,
    pub mappings: Vec<MappingRecord>,
    /// Start from the stock mapping set before applying `mappings`.
    pub include_default_mappings: bool,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            options: GenerationOptions::default(),
            mappings: Vec::new(),
            include_default_mappings: true,
        }
    }
}

impl GeneratorConfig {
    /// Build the mapping registry. Records override stock entries of the
    /// same type; inactive records are skipped.
    pub fn registry(&self) -> Result<MappingTable> {
        let mut table = if self.include_default_mappings {
            MappingTable::with_defaults()
        } else {
            MappingTable::new()
        };

        for record in &self.mappings {
            if !record.is_active {
                debug!(ui_type = %record.ui_type, "skipping inactive mapping");
                continue;
            }
            table.insert(record.to_entry())?;
        }
        Ok(table)
    }
}

/// Parse a configuration and check its options.
pub fn load_from_str(json: &str) -> Result<GeneratorConfig> {
    let config: GeneratorConfig = serde_json::from_str(json)?;
    config.options.validate()?;
    Ok(config)
}

/// Read a configuration file.
pub fn load_from_path(path: impl AsRef<Path>) -> Result<GeneratorConfig> {
    let path = path.as_ref();
    debug!(path = %path.display(), "loading generator config");
    let json = fs::read_to_string(path)?;
    load_from_str(&json)
}

fn default_true() -> bool {
    true
}
