//! Structural checks on builder JSON before generation.
//!
//! Generation itself accepts any JSON. Validation reports what generation
//! would silently repair or pass through, so a builder can surface it.

use crate::kind::{Cardinality, WidgetKind};
use forge_core::{normalize_type, WidgetMapping};
use serde::Serialize;
use serde_json::Value;
use std::fmt;

/// Widget types removed from Flutter, with their replacements.
const DEPRECATED_TYPES: &[(&str, &str)] = &[
    ("raisedbutton", "ElevatedButton"),
    ("flatbutton", "TextButton"),
    ("outlinebutton", "OutlinedButton"),
];

/// One finding, located by a path such as `root.children[1]`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationIssue {
    pub path: String,
    pub message: String,
}

impl fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.path, self.message)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ValidationReport {
    pub errors: Vec<ValidationIssue>,
    pub warnings: Vec<ValidationIssue>,
}

impl ValidationReport {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    fn error(&mut self, path: &str, message: impl Into<String>) {
        self.errors.push(ValidationIssue {
            path: path.to_string(),
            message: message.into(),
        });
    }

    fn warning(&mut self, path: &str, message: impl Into<String>) {
        self.warnings.push(ValidationIssue {
            path: path.to_string(),
            message: message.into(),
        });
    }
}

/// Check a widget tree. Never fails; problems are collected in the report.
pub fn validate(tree: &Value, registry: &dyn WidgetMapping) -> ValidationReport {
    let mut report = ValidationReport::default();
    visit(tree, "root", registry, &mut report);
    report
}

fn visit(value: &Value, path: &str, registry: &dyn WidgetMapping, report: &mut ValidationReport) {
    let Some(object) = value.as_object() else {
        report.error(path, "expected a widget object");
        return;
    };

    let widget_type = object
        .get("type")
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|t| !t.is_empty());

    let mut leaf = false;
    match widget_type {
        None => report.error(path, "missing widget type"),
        Some(widget_type) => {
            let normalized = normalize_type(widget_type);
            if let Some((_, replacement)) = DEPRECATED_TYPES.iter().find(|(old, _)| *old == normalized) {
                report.warning(
                    path,
                    format!("'{}' is deprecated, use {} instead", widget_type, replacement),
                );
            }

            let kind = WidgetKind::from_type(widget_type);
            let entry = registry.lookup(widget_type);
            if !kind.is_named() && entry.is_none() {
                report.warning(path, format!("no mapping for widget type '{}'", widget_type));
            }
            leaf = match kind {
                WidgetKind::Generic => entry.is_some_and(|entry| !entry.can_have_children),
                kind => kind.cardinality() == Cardinality::Leaf,
            };
        }
    }

    if let Some(properties) = object.get("properties") {
        if !properties.is_object() && !properties.is_null() {
            report.warning(path, "properties is not an object and will be ignored");
        }
    }

    match object.get("children") {
        None | Some(Value::Null) => {}
        Some(Value::Array(children)) => {
            if leaf && !children.is_empty() {
                report.warning(
                    path,
                    format!("widget cannot have children, {} will be omitted", children.len()),
                );
            }
            for (index, child) in children.iter().enumerate() {
                visit(child, &format!("{}.children[{}]", path, index), registry, report);
            }
        }
        Some(_) => report.error(path, "children must be a list"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use forge_core::{MappingTable, NoMappings};
    use serde_json::json;

    #[test]
    fn test_valid_tree() {
        let tree = json!({
            "type": "Column",
            "children": [
                {"type": "Text", "properties": {"text": "a"}},
                {"type": "Icon", "properties": {"icon": "home"}}
            ]
        });
        let report = validate(&tree, &NoMappings);
        assert!(report.is_valid());
        assert!(report.warnings.is_empty());
    }

    #[test]
    fn test_missing_type_path() {
        let tree = json!({
            "type": "Column",
            "children": [
                {"type": "Text"},
                {"properties": {"text": "orphan"}},
                42
            ]
        });
        let report = validate(&tree, &NoMappings);
        assert!(!report.is_valid());
        assert_eq!(
            report.errors.iter().map(ToString::to_string).collect::<Vec<_>>(),
            vec![
                "root.children[1]: missing widget type".to_string(),
                "root.children[2]: expected a widget object".to_string(),
            ]
        );
    }

    #[test]
    fn test_children_must_be_a_list() {
        let report = validate(&json!({"type": "Row", "children": {"type": "Text"}}), &NoMappings);
        assert_eq!(report.errors.len(), 1);
        assert_eq!(report.errors[0].message, "children must be a list");
    }

    #[test]
    fn test_warnings() {
        let tree = json!({
            "type": "Column",
            "children": [
                {"type": "RaisedButton"},
                {"type": "Text", "children": [{"type": "Icon"}]},
                {"type": "Sparkline"}
            ]
        });
        let report = validate(&tree, &MappingTable::with_defaults());
        assert!(report.is_valid());

        let messages: Vec<String> = report.warnings.iter().map(ToString::to_string).collect();
        assert!(messages.contains(&"root.children[0]: 'RaisedButton' is deprecated, use ElevatedButton instead".to_string()));
        assert!(messages.contains(&"root.children[1]: widget cannot have children, 1 will be omitted".to_string()));
        assert!(messages.contains(&"root.children[2]: no mapping for widget type 'Sparkline'".to_string()));
    }
}
