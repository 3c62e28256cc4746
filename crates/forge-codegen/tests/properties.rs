//! Tree-wide properties of generation, checked over random trees.

use forge_codegen::{format, generate, CodeFormat, GenerationOptions, StatisticsCollector};
use forge_core::{MappingEntry, MappingTable, NoMappings, PropertyValue, WidgetNode};
use proptest::prelude::*;
use serde_json::json;

const TYPES: &[&str] = &[
    "Scaffold",
    "AppBar",
    "Container",
    "Padding",
    "Center",
    "Column",
    "Row",
    "Stack",
    "ListView",
    "Card",
    "Text",
    "Icon",
    "ElevatedButton",
    "TextField",
    "Switch",
    "ListTile",
    "GridView",
    "Positioned",
    "Slider",
    "Ink",
    "animated_opacity",
    "customwidget123",
    "chip",
    "lottie",
];

/// Map-valued properties: untyped slot maps, typed embedded widgets, and
/// value maps that carry a `type` field.
fn map_property() -> impl Strategy<Value = (&'static str, PropertyValue)> {
    prop_oneof![
        Just(("appBar", PropertyValue::from(json!({"title": "Home", "centerTitle": true})))),
        Just((
            "drawer",
            PropertyValue::from(json!({"type": "Column", "children": [{"type": "Text"}, {"type": "Switch"}]})),
        )),
        Just(("leading", PropertyValue::from(json!({"type": "Icon", "properties": {"icon": "menu"}})))),
        Just(("gradient", PropertyValue::from(json!({"type": "radial", "colors": ["red", "blue"]})))),
        Just(("borderRadius", PropertyValue::from(json!({"topLeft": 4, "bottomRight": 8})))),
        Just(("border", PropertyValue::from(json!({"color": "#333", "width": 2})))),
        Just((
            "floatingActionButton",
            PropertyValue::from(json!({"icon": "add", "onPressed": "create"})),
        )),
    ]
}

/// Stock mappings plus a leaf entry and a factory-style target.
fn registry() -> MappingTable {
    let mut table = MappingTable::with_defaults();
    table
        .insert(
            MappingEntry::new("chip", "Chip")
                .with_template("label", "label: Text({{value}})")
                .with_children(false),
        )
        .expect("chip mapping");
    table
        .insert(MappingEntry::new("lottie", "Lottie.asset").with_template("asset", "{{value}}"))
        .expect("lottie mapping");
    table
}

fn node() -> impl Strategy<Value = WidgetNode> {
    (
        prop::sample::select(TYPES),
        prop::option::of("[a-zA-Z ']{0,12}"),
        any::<bool>(),
        prop::option::of(0u8..48),
        prop::option::of(map_property()),
    )
        .prop_map(|(widget_type, text, handler, size, map)| {
            let mut node = WidgetNode::new(widget_type);
            if let Some(text) = text {
                node = node.with_property("text", text);
            }
            if handler {
                node = node.with_property("onPressed", "tap");
            }
            if let Some(size) = size {
                node = node.with_property("width", i32::from(size));
            }
            if let Some((key, value)) = map {
                node = node.with_property(key, value);
            }
            node
        })
}

fn tree() -> impl Strategy<Value = WidgetNode> {
    node().prop_recursive(5, 48, 4, |inner| {
        (node(), prop::collection::vec(inner, 0..4)).prop_map(|(mut node, children)| {
            node.children = children;
            node
        })
    })
}

fn options() -> impl Strategy<Value = GenerationOptions> {
    (any::<bool>(), any::<bool>(), any::<bool>(), 1usize..=8).prop_map(|(compact, use_const, wrap, indent)| {
        GenerationOptions {
            format: if compact { CodeFormat::Compact } else { CodeFormat::Expanded },
            use_const_constructors: use_const,
            wrap_in_class: wrap,
            indent_size: indent,
            ..Default::default()
        }
    })
}

proptest! {
    #[test]
    fn widget_count_and_depth_match_tree(tree in tree(), options in options()) {
        let output = generate(&tree, &options, &NoMappings).unwrap();
        prop_assert_eq!(output.widget_count, tree.node_count());
        prop_assert_eq!(output.max_depth, tree.depth());
        prop_assert_eq!(output.line_count, output.code.split('\n').count());
    }

    #[test]
    fn generation_is_idempotent(tree in tree(), options in options()) {
        let first = generate(&tree, &options, &NoMappings).unwrap();
        let second = generate(&tree, &options, &NoMappings).unwrap();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn in_pass_statistics_match_second_pass(tree in tree(), options in options()) {
        let output = generate(&tree, &options, &NoMappings).unwrap();
        prop_assert_eq!(output.statistics, Some(StatisticsCollector::collect(&tree, &options, &NoMappings)));
    }

    #[test]
    fn registry_statistics_match_second_pass(tree in tree(), options in options()) {
        let table = registry();
        let output = generate(&tree, &options, &table).unwrap();
        prop_assert_eq!(output.widget_count, tree.node_count());
        prop_assert_eq!(output.statistics, Some(StatisticsCollector::collect(&tree, &options, &table)));
    }

    #[test]
    fn dotted_targets_never_render_const(tree in tree()) {
        let options = GenerationOptions { include_comments: false, ..Default::default() };
        let output = generate(&tree, &options, &registry()).unwrap();
        prop_assert!(!output.code.contains("const Lottie.asset"));
        prop_assert!(!output.code.contains("BorderRadius.circular"));
        prop_assert!(!output.code.contains("Border.all"));
    }

    #[test]
    fn imports_are_sorted_and_seeded(tree in tree(), options in options()) {
        let output = generate(&tree, &options, &NoMappings).unwrap();
        prop_assert!(output.imports.windows(2).all(|pair| pair[0] < pair[1]));
        prop_assert!(output.imports.iter().any(|uri| uri == forge_codegen::BASE_IMPORT));
    }

    #[test]
    fn handlers_never_render_const(text in "[a-z]{1,8}") {
        let button = WidgetNode::new("TextButton")
            .with_property("text", text.as_str())
            .with_property("onPressed", "go");
        let options = GenerationOptions { wrap_in_class: false, include_imports: false, include_comments: false, ..Default::default() };
        let output = generate(&button, &options, &NoMappings).unwrap();
        prop_assert!(!output.code.starts_with("const"));
    }

    #[test]
    fn short_hex_matches_long_hex(hex in "[0-9a-fA-F]{3}") {
        let long: String = hex.chars().flat_map(|c| [c, c]).collect();
        prop_assert_eq!(
            format::format_color(&PropertyValue::from(format!("#{}", hex))),
            format::format_color(&PropertyValue::from(format!("#{}", long)))
        );
    }

    #[test]
    fn string_literals_stay_on_one_line(text in ".{0,24}") {
        let literal = format::format_string(&text);
        prop_assert!(literal.starts_with('\'') && literal.ends_with('\''));
        prop_assert!(!literal.contains('\n'));
    }
}
