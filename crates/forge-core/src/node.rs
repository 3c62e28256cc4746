//! Widget tree model produced by the visual builder.
//!
//! A [`WidgetNode`] owns its children outright, so a tree is always acyclic and
//! read-only once built. Conversion from JSON is total: malformed nodes degrade
//! to an empty `Container` instead of failing.

use convert_case::{Case, Casing};
use indexmap::IndexMap;

/// Widget type used when a node carries no usable `type`.
pub const DEFAULT_WIDGET_TYPE: &str = "Container";

/// A property value, isomorphic to the JSON value space.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum PropertyValue {
    Null,
    Bool(bool),
    Number(f64),
    String(String),
    List(Vec<PropertyValue>),
    Map(IndexMap<String, PropertyValue>),
}

impl PropertyValue {
    /// Get as string if it's a string value.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            PropertyValue::String(s) => Some(s),
            _ => None,
        }
    }

    /// Get as number if it's a number value.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            PropertyValue::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Get as boolean if it's a boolean value.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            PropertyValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[PropertyValue]> {
        match self {
            PropertyValue::List(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_map(&self) -> Option<&IndexMap<String, PropertyValue>> {
        match self {
            PropertyValue::Map(map) => Some(map),
            _ => None,
        }
    }

    /// Look up a field when this value is a map.
    pub fn get(&self, key: &str) -> Option<&PropertyValue> {
        self.as_map().and_then(|map| map.get(key))
    }

    /// Whether the value is absent in the builder's sense: JSON `null` or the
    /// literal string `"null"` the builder writes for cleared fields.
    pub fn is_null(&self) -> bool {
        match self {
            PropertyValue::Null => true,
            PropertyValue::String(s) => s == "null",
            _ => false,
        }
    }

    /// Truthiness as the builder treats it: null, `false`, `0`, empty
    /// strings, lists and maps are all "not set".
    pub fn is_truthy(&self) -> bool {
        match self {
            PropertyValue::Null => false,
            PropertyValue::Bool(b) => *b,
            PropertyValue::Number(n) => *n != 0.0,
            PropertyValue::String(s) => !s.is_empty() && s != "null",
            PropertyValue::List(items) => !items.is_empty(),
            PropertyValue::Map(map) => !map.is_empty(),
        }
    }

    /// Interpret a map value carrying a `type` field as an embedded widget.
    pub fn as_widget(&self) -> Option<WidgetNode> {
        let map = self.as_map()?;
        match map.get("type") {
            Some(PropertyValue::String(_)) => Some(WidgetNode::from_property_map(map)),
            _ => None,
        }
    }
}

impl From<&str> for PropertyValue {
    fn from(value: &str) -> Self {
        PropertyValue::String(value.to_string())
    }
}

impl From<String> for PropertyValue {
    fn from(value: String) -> Self {
        PropertyValue::String(value)
    }
}

impl From<f64> for PropertyValue {
    fn from(value: f64) -> Self {
        PropertyValue::Number(value)
    }
}

impl From<i32> for PropertyValue {
    fn from(value: i32) -> Self {
        PropertyValue::Number(f64::from(value))
    }
}

impl From<bool> for PropertyValue {
    fn from(value: bool) -> Self {
        PropertyValue::Bool(value)
    }
}

/// One element of the widget tree.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct WidgetNode {
    /// Builder-assigned identifier, used for widget keys.
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub id: Option<String>,
    /// Widget type as authored (`"Container"`, `"text"`, `"sized_box"`, ...).
    #[cfg_attr(feature = "serde", serde(rename = "type"))]
    pub widget_type: String,
    pub properties: IndexMap<String, PropertyValue>,
    pub children: Vec<WidgetNode>,
}

impl Default for WidgetNode {
    fn default() -> Self {
        Self::new(DEFAULT_WIDGET_TYPE)
    }
}

impl WidgetNode {
    /// Create a new node of the given type.
    pub fn new(widget_type: impl Into<String>) -> Self {
        let widget_type = widget_type.into();
        Self {
            id: None,
            widget_type: if widget_type.trim().is_empty() {
                DEFAULT_WIDGET_TYPE.to_string()
            } else {
                widget_type
            },
            properties: IndexMap::new(),
            children: Vec::new(),
        }
    }

    /// Set the node id.
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Add a property.
    pub fn with_property(mut self, key: impl Into<String>, value: impl Into<PropertyValue>) -> Self {
        self.properties.insert(key.into(), value.into());
        self
    }

    /// Add a child node.
    pub fn with_child(mut self, child: WidgetNode) -> Self {
        self.children.push(child);
        self
    }

    /// Get a property value, treating explicit nulls as absent.
    pub fn property(&self, key: &str) -> Option<&PropertyValue> {
        self.properties.get(key).filter(|value| !value.is_null())
    }

    /// Check if the node has a non-null property.
    pub fn has_property(&self, key: &str) -> bool {
        self.property(key).is_some()
    }

    /// The type name flattened for matching: `SizedBox`, `sized_box` and
    /// `sized-box` all become `sizedbox`.
    pub fn normalized_type(&self) -> String {
        normalize_type(&self.widget_type)
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Number of nodes in this subtree, root included.
    pub fn node_count(&self) -> usize {
        1 + self.children.iter().map(WidgetNode::node_count).sum::<usize>()
    }

    /// Longest root-to-leaf path, counted in edges.
    pub fn depth(&self) -> usize {
        self.children
            .iter()
            .map(|child| child.depth() + 1)
            .max()
            .unwrap_or(0)
    }

    /// Build a node from a property map that describes an embedded widget.
    fn from_property_map(map: &IndexMap<String, PropertyValue>) -> Self {
        let mut node = WidgetNode::new(map.get("type").and_then(PropertyValue::as_str).unwrap_or(""));
        node.id = map.get("id").and_then(PropertyValue::as_str).map(str::to_string);
        if let Some(PropertyValue::Map(properties)) = map.get("properties") {
            node.properties = properties.clone();
        }
        if let Some(PropertyValue::List(children)) = map.get("children") {
            node.children = children
                .iter()
                .map(|child| match child {
                    PropertyValue::Map(child) => WidgetNode::from_property_map(child),
                    _ => WidgetNode::default(),
                })
                .collect();
        }
        node
    }
}

/// Flatten a widget type name for case- and separator-insensitive matching.
pub fn normalize_type(widget_type: &str) -> String {
    widget_type.trim().to_case(Case::Flat)
}

#[cfg(feature = "serde")]
mod json {
    use super::*;
    use serde_json::Value;

    impl From<&Value> for PropertyValue {
        fn from(value: &Value) -> Self {
            match value {
                Value::Null => PropertyValue::Null,
                Value::Bool(b) => PropertyValue::Bool(*b),
                Value::Number(n) => PropertyValue::Number(n.as_f64().unwrap_or(0.0)),
                Value::String(s) => PropertyValue::String(s.clone()),
                Value::Array(items) => PropertyValue::List(items.iter().map(PropertyValue::from).collect()),
                Value::Object(map) => PropertyValue::Map(
                    map.iter()
                        .map(|(k, v)| (k.clone(), PropertyValue::from(v)))
                        .collect(),
                ),
            }
        }
    }

    impl From<Value> for PropertyValue {
        fn from(value: Value) -> Self {
            PropertyValue::from(&value)
        }
    }

    impl WidgetNode {
        /// Convert builder JSON into a node. Never fails: anything that is not
        /// an object becomes an empty `Container`, a missing `type` becomes
        /// `Container`, and non-object `properties` are ignored.
        pub fn from_value(value: &Value) -> Self {
            let Some(object) = value.as_object() else {
                return WidgetNode::default();
            };

            let mut node = WidgetNode::new(object.get("type").and_then(Value::as_str).unwrap_or(""));
            node.id = match object.get("id") {
                Some(Value::String(id)) => Some(id.clone()),
                Some(Value::Number(id)) => Some(id.to_string()),
                _ => None,
            };
            if let Some(Value::Object(properties)) = object.get("properties") {
                node.properties = properties
                    .iter()
                    .map(|(k, v)| (k.clone(), PropertyValue::from(v)))
                    .collect();
            }
            if let Some(Value::Array(children)) = object.get("children") {
                node.children = children.iter().map(WidgetNode::from_value).collect();
            }
            node
        }

        /// Parse a JSON document into a node tree.
        pub fn from_json_str(json: &str) -> crate::Result<Self> {
            let value: Value = serde_json::from_str(json)?;
            Ok(Self::from_value(&value))
        }
    }

    impl<'de> serde::Deserialize<'de> for WidgetNode {
        fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
        where
            D: serde::Deserializer<'de>,
        {
            let value = Value::deserialize(deserializer)?;
            Ok(WidgetNode::from_value(&value))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_node_builder() {
        let node = WidgetNode::new("Container")
            .with_id("root")
            .with_property("width", 100.0)
            .with_child(WidgetNode::new("Text").with_property("text", "Hi"));

        assert_eq!(node.id.as_deref(), Some("root"));
        assert!(node.has_property("width"));
        assert_eq!(node.node_count(), 2);
        assert_eq!(node.depth(), 1);
    }

    #[test]
    fn test_empty_type_defaults_to_container() {
        assert_eq!(WidgetNode::new("  ").widget_type, "Container");
        assert_eq!(WidgetNode::default().widget_type, "Container");
    }

    #[test]
    fn test_normalized_type() {
        assert_eq!(normalize_type("SizedBox"), "sizedbox");
        assert_eq!(normalize_type("sized_box"), "sizedbox");
        assert_eq!(normalize_type("sized-box"), "sizedbox");
        assert_eq!(normalize_type("customwidget123"), "customwidget123");
    }

    #[test]
    fn test_null_properties_are_absent() {
        let node = WidgetNode::new("ElevatedButton")
            .with_property("onPressed", "null")
            .with_property("color", PropertyValue::Null);
        assert!(!node.has_property("onPressed"));
        assert!(!node.has_property("color"));
        assert_eq!(node.properties.len(), 2);
    }

    #[test]
    fn test_truthiness() {
        assert!(!PropertyValue::Number(0.0).is_truthy());
        assert!(!PropertyValue::String(String::new()).is_truthy());
        assert!(PropertyValue::from("x").is_truthy());
        assert!(PropertyValue::Bool(true).is_truthy());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_from_value_is_total() {
        let value = serde_json::json!({
            "id": 7,
            "properties": "not a map",
            "children": [null, {"type": "Text", "properties": {"text": "a"}}, 3]
        });
        let node = WidgetNode::from_value(&value);

        assert_eq!(node.widget_type, "Container");
        assert_eq!(node.id.as_deref(), Some("7"));
        assert!(node.properties.is_empty());
        assert_eq!(node.children.len(), 3);
        assert_eq!(node.children[0], WidgetNode::default());
        assert_eq!(node.children[1].widget_type, "Text");
        assert_eq!(node.children[2], WidgetNode::default());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_embedded_widget() {
        let value = PropertyValue::from(serde_json::json!({
            "type": "Icon",
            "properties": {"icon": "menu"}
        }));
        let widget = value.as_widget().unwrap();
        assert_eq!(widget.widget_type, "Icon");
        assert_eq!(widget.property("icon").and_then(PropertyValue::as_str), Some("menu"));

        assert!(PropertyValue::from(serde_json::json!({"all": 8})).as_widget().is_none());
    }
}
