//! Widget mapping registry.
//!
//! The registry is the data-driven table that translates builder UI types
//! into Flutter widget names and property templates. The generator only sees
//! it through the read-only [`WidgetMapping`] trait; lookup misses are normal
//! and never an error.

use crate::errors::{CoreError, Result};
use crate::node::normalize_type;
use indexmap::IndexMap;

/// Placeholder every property template must contain exactly once.
pub const VALUE_PLACEHOLDER: &str = "{{value}}";

/// Import every generated file needs.
pub const MATERIAL_IMPORT: &str = "package:flutter/material.dart";

/// Read-only lookup from builder UI type to mapping entry.
pub trait WidgetMapping {
    /// Find the entry for a UI type. Implementations should match the type
    /// after [`normalize_type`], so `"IconButton"` finds `"iconbutton"`.
    fn lookup(&self, ui_type: &str) -> Option<&MappingEntry>;

    /// Check whether a UI type is mapped.
    fn contains(&self, ui_type: &str) -> bool {
        self.lookup(ui_type).is_some()
    }
}

/// How one builder UI type maps onto a Flutter widget.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MappingEntry {
    /// Builder UI type, e.g. `"button"`.
    pub ui_type: String,
    /// Flutter widget emitted for this type, e.g. `"ElevatedButton"`.
    pub target_widget: String,
    /// Per-property code fragments, each with one `{{value}}` placeholder.
    #[cfg_attr(feature = "serde", serde(default))]
    pub property_templates: IndexMap<String, String>,
    /// Import URIs required by the target widget.
    #[cfg_attr(feature = "serde", serde(default))]
    pub extra_imports: Vec<String>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub can_have_children: bool,
}

impl MappingEntry {
    /// Create an entry without templates or imports.
    pub fn new(ui_type: impl Into<String>, target_widget: impl Into<String>) -> Self {
        Self {
            ui_type: ui_type.into(),
            target_widget: target_widget.into(),
            property_templates: IndexMap::new(),
            extra_imports: Vec::new(),
            can_have_children: false,
        }
    }

    /// Add a property template.
    pub fn with_template(mut self, property: impl Into<String>, template: impl Into<String>) -> Self {
        self.property_templates.insert(property.into(), template.into());
        self
    }

    /// Add a required import. Full `import '...';` statements are reduced to
    /// their URI.
    pub fn with_import(mut self, import: impl AsRef<str>) -> Self {
        if let Some(uri) = normalize_import(import.as_ref()) {
            self.extra_imports.push(uri);
        }
        self
    }

    pub fn with_children(mut self, can_have_children: bool) -> Self {
        self.can_have_children = can_have_children;
        self
    }

    /// Template for a property, if the entry defines one.
    pub fn template(&self, property: &str) -> Option<&str> {
        self.property_templates.get(property).map(String::as_str)
    }

    /// Check the entry's invariants: a non-empty target name and exactly one
    /// placeholder per template.
    pub fn validate(&self) -> Result<()> {
        if self.target_widget.trim().is_empty() {
            return Err(CoreError::InvalidMapping {
                ui_type: self.ui_type.clone(),
                reason: "target widget name is empty".to_string(),
            });
        }

        for (property, template) in &self.property_templates {
            let count = template.matches(VALUE_PLACEHOLDER).count();
            if count != 1 {
                return Err(CoreError::InvalidMapping {
                    ui_type: self.ui_type.clone(),
                    reason: format!(
                        "template for '{}' must contain exactly one {} placeholder, found {}",
                        property, VALUE_PLACEHOLDER, count
                    ),
                });
            }
        }

        Ok(())
    }
}

/// Reduce an import line to its URI.
///
/// Accepts `package:foo/bar.dart`, `'package:foo/bar.dart'` and
/// `import 'package:foo/bar.dart';`. Blank input yields `None`.
pub fn normalize_import(import: &str) -> Option<String> {
    let trimmed = import.trim();
    let trimmed = trimmed.strip_prefix("import").map(str::trim).unwrap_or(trimmed);
    let trimmed = trimmed.trim_end_matches(';').trim();
    let trimmed = trimmed.trim_matches(|c: char| c == '\'' || c == '"').trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// In-memory registry keyed by normalized UI type.
#[derive(Debug, Clone, Default)]
pub struct MappingTable {
    entries: IndexMap<String, MappingEntry>,
}

impl MappingTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a table holding the stock builder mappings.
    pub fn with_defaults() -> Self {
        let mut table = Self::new();
        for entry in default_entries() {
            table.entries.insert(normalize_type(&entry.ui_type), entry);
        }
        table
    }

    /// Insert or replace an entry after validating it.
    pub fn insert(&mut self, entry: MappingEntry) -> Result<()> {
        entry.validate()?;
        self.entries.insert(normalize_type(&entry.ui_type), entry);
        Ok(())
    }

    pub fn remove(&mut self, ui_type: &str) -> Option<MappingEntry> {
        self.entries.shift_remove(&normalize_type(ui_type))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate entries in insertion order.
    pub fn entries(&self) -> impl Iterator<Item = &MappingEntry> {
        self.entries.values()
    }
}

impl WidgetMapping for MappingTable {
    fn lookup(&self, ui_type: &str) -> Option<&MappingEntry> {
        self.entries.get(&normalize_type(ui_type))
    }
}

/// Registry with no entries; every type takes the passthrough path.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoMappings;

impl WidgetMapping for NoMappings {
    fn lookup(&self, _ui_type: &str) -> Option<&MappingEntry> {
        None
    }
}

fn default_entries() -> Vec<MappingEntry> {
    vec![
        MappingEntry::new("text", "Text").with_template("text", "{{value}}"),
        MappingEntry::new("container", "Container").with_children(true),
        MappingEntry::new("column", "Column").with_children(true),
        MappingEntry::new("row", "Row").with_children(true),
        MappingEntry::new("button", "ElevatedButton"),
        MappingEntry::new("textfield", "TextField")
            .with_template("hintText", "decoration: InputDecoration(hintText: {{value}})")
            .with_template("labelText", "decoration: InputDecoration(labelText: {{value}})"),
        MappingEntry::new("image", "Image").with_template("source", "Image.network({{value}})"),
        MappingEntry::new("icon", "Icon")
            .with_template("icon", "Icons.{{value}}")
            .with_template("size", "size: {{value}}")
            .with_template("color", "color: {{value}}"),
        MappingEntry::new("stack", "Stack").with_children(true),
        MappingEntry::new("listview", "ListView")
            .with_template("scrollDirection", "scrollDirection: Axis.{{value}}")
            .with_children(true),
        MappingEntry::new("card", "Card")
            .with_template("elevation", "elevation: {{value}}")
            .with_children(true),
        MappingEntry::new("appbar", "AppBar")
            .with_template("title", "title: Text({{value}})")
            .with_template("backgroundColor", "backgroundColor: {{value}}"),
    ]
}
