//! Const eligibility analysis.
//!
//! A node may carry a `const` prefix when Flutter has a const constructor
//! for what it emits, none of its properties format to a runtime value, and
//! every child subtree is itself eligible. The fold is strict: one dynamic
//! descendant makes every ancestor ineligible.
//!
//! The registry is consulted for widgets without a hand-written strategy,
//! since their constructor name comes from it.

use crate::format::is_value_key;
use crate::kind::WidgetKind;
use forge_core::{PropertyValue, WidgetMapping, WidgetNode};

/// Properties whose formatted value is never a compile-time constant.
pub const DYNAMIC_PROPERTIES: &[&str] = &[
    "onPressed",
    "onChanged",
    "onTap",
    "onLongPress",
    "onDoubleTap",
    "onSubmitted",
    "onEditingComplete",
    "onSaved",
    "controller",
    "focusNode",
    "itemBuilder",
    "transform",
];

/// Button properties that are emitted through `styleFrom`, a non-const call.
pub(crate) const BUTTON_STYLE_PROPERTIES: &[&str] = &["backgroundColor", "foregroundColor", "padding"];

/// Whether a property name is dynamic. Besides [`DYNAMIC_PROPERTIES`], any
/// `onXxx` event handler counts.
pub fn is_dynamic_property(key: &str) -> bool {
    DYNAMIC_PROPERTIES.contains(&key)
        || key
            .strip_prefix("on")
            .and_then(|rest| rest.chars().next())
            .is_some_and(|c| c.is_ascii_uppercase())
}

/// Whether the node sets a dynamic property. Null values do not count.
pub fn has_dynamic_property(node: &WidgetNode) -> bool {
    node.properties
        .iter()
        .any(|(key, value)| !value.is_null() && is_dynamic_property(key))
}

/// Whether the whole subtree under `node` may be emitted as const.
pub fn is_const_eligible(node: &WidgetNode, use_const: bool, registry: &dyn WidgetMapping) -> bool {
    use_const
        && node_allows_const(node, registry)
        && node
            .children
            .iter()
            .all(|child| is_const_eligible(child, use_const, registry))
}

/// Constructor a widget without a hand-written strategy is emitted with:
/// the registry target, or the type name verbatim.
pub(crate) fn generic_constructor<'a>(node: &'a WidgetNode, registry: &'a dyn WidgetMapping) -> &'a str {
    registry
        .lookup(&node.widget_type)
        .map_or(node.widget_type.trim(), |entry| entry.target_widget.trim())
}

/// Widgets embedded in property values (a typed map, or a list of them).
/// Properties with a dedicated value formatter never hold widgets.
pub(crate) fn embedded_widgets(node: &WidgetNode) -> Vec<WidgetNode> {
    let mut widgets = Vec::new();
    for (key, value) in &node.properties {
        if is_value_key(key) {
            continue;
        }
        match value {
            PropertyValue::List(items) => widgets.extend(items.iter().filter_map(PropertyValue::as_widget)),
            other => widgets.extend(other.as_widget()),
        }
    }
    widgets
}

/// Eligibility of the node itself, ignoring its children but including any
/// embedded widgets.
pub(crate) fn node_allows_const(node: &WidgetNode, registry: &dyn WidgetMapping) -> bool {
    let kind = WidgetKind::of(node);
    kind.has_const_constructor()
        && !kind_blocks_const(kind, node, registry)
        && !has_dynamic_property(node)
        && embedded_widgets(node)
            .iter()
            .all(|widget| is_const_eligible(widget, true, registry))
}

fn kind_blocks_const(kind: WidgetKind, node: &WidgetNode, registry: &dyn WidgetMapping) -> bool {
    match kind {
        // A dotted target such as `Lottie.asset` is taken to be a factory.
        WidgetKind::Generic => generic_constructor(node, registry).contains('.'),
        WidgetKind::Text => node.property("useTranslation").is_some_and(PropertyValue::is_truthy),
        WidgetKind::Button | WidgetKind::ElevatedButton | WidgetKind::TextButton | WidgetKind::OutlinedButton => {
            BUTTON_STYLE_PROPERTIES.iter().any(|key| node.has_property(key))
        }
        // Slot widgets given as plain maps are built as AppBar and
        // FloatingActionButton calls.
        WidgetKind::Scaffold => ["appBar", "floatingActionButton"]
            .iter()
            .any(|key| node.property(key).is_some_and(|value| value.as_map().is_some())),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use forge_core::{MappingEntry, MappingTable, NoMappings};

    fn label(text: &str) -> WidgetNode {
        WidgetNode::new("Text").with_property("text", text)
    }

    #[test]
    fn test_event_handler_blocks_const() {
        let button = WidgetNode::new("ElevatedButton")
            .with_property("onPressed", "submit")
            .with_child(label("Go"));
        assert!(has_dynamic_property(&button));
        assert!(!is_const_eligible(&button, true, &NoMappings));
        assert!(!is_const_eligible(&button, false, &NoMappings));

        let mut plain = button.clone();
        plain.properties.shift_remove("onPressed");
        assert!(is_const_eligible(&plain, true, &NoMappings));
        assert!(!is_const_eligible(&plain, false, &NoMappings));
    }

    #[test]
    fn test_null_handler_is_ignored() {
        let node = WidgetNode::new("IconButton").with_property("onPressed", "null");
        assert!(!has_dynamic_property(&node));
        assert!(is_const_eligible(&node, true, &NoMappings));
    }

    #[test]
    fn test_dynamic_descendant_poisons_ancestors() {
        let tree = WidgetNode::new("Padding").with_child(
            WidgetNode::new("Column")
                .with_child(label("a"))
                .with_child(WidgetNode::new("TextButton").with_property("onLongPress", "hold")),
        );
        assert!(!is_const_eligible(&tree, true, &NoMappings));
        assert!(is_const_eligible(&tree.children[0].children[0], true, &NoMappings));
    }

    #[test]
    fn test_non_const_constructors() {
        assert!(!is_const_eligible(&WidgetNode::new("Container"), true, &NoMappings));
        assert!(!is_const_eligible(&WidgetNode::new("Image"), true, &NoMappings));
        assert!(!is_const_eligible(&WidgetNode::new("Switch"), true, &NoMappings));
        assert!(is_const_eligible(&WidgetNode::new("customwidget123"), true, &NoMappings));
        assert!(!is_const_eligible(
            &label("x").with_property("useTranslation", true),
            true,
            &NoMappings
        ));
    }

    #[test]
    fn test_is_dynamic_property() {
        assert!(is_dynamic_property("controller"));
        assert!(is_dynamic_property("onHover"));
        assert!(!is_dynamic_property("only"));
        assert!(!is_dynamic_property("color"));
    }

    #[test]
    fn test_typed_value_maps_are_not_widgets() {
        let ink = WidgetNode::new("Ink").with_property(
            "gradient",
            PropertyValue::from(serde_json::json!({"type": "radial", "colors": ["red", "blue"]})),
        );
        assert!(embedded_widgets(&ink).is_empty());
        assert!(is_const_eligible(&ink, true, &NoMappings));

        let drawer = WidgetNode::new("Scaffold").with_property(
            "drawer",
            PropertyValue::from(serde_json::json!({"type": "Switch"})),
        );
        assert_eq!(embedded_widgets(&drawer).len(), 1);
        assert!(!is_const_eligible(&drawer, true, &NoMappings));
    }

    #[test]
    fn test_dotted_targets_are_not_const() {
        let mut table = MappingTable::new();
        table
            .insert(MappingEntry::new("lottie", "Lottie.asset").with_template("asset", "{{value}}"))
            .unwrap();
        table.insert(MappingEntry::new("chip", "Chip")).unwrap();

        assert!(!is_const_eligible(&WidgetNode::new("lottie"), true, &table));
        assert!(is_const_eligible(&WidgetNode::new("chip"), true, &table));
        assert!(!is_const_eligible(&WidgetNode::new("Lottie.network"), true, &NoMappings));
        assert_eq!(generic_constructor(&WidgetNode::new(" badge "), &NoMappings), "badge");
    }
}
