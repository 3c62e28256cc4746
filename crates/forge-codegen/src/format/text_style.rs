use super::{
    format_color, format_double_value, format_font_style, format_font_weight, format_string, format_text_decoration,
};
use crate::layout::Layout;
use forge_core::PropertyValue;
use indexmap::IndexMap;

/// Build a `TextStyle` from a text node's properties.
///
/// Style fields are read from the node's top level first and then from a
/// nested `style` map, so a top-level `fontSize` overrides `style.fontSize`.
/// Unset, zero and empty values are skipped. Returns `None` when no field is
/// set.
pub fn format_text_style(
    properties: &IndexMap<String, PropertyValue>,
    layout: &Layout,
    level: usize,
) -> Option<String> {
    let nested = properties.get("style").and_then(PropertyValue::as_map);
    let field = |key: &str| {
        properties
            .get(key)
            .filter(|value| value.is_truthy())
            .or_else(|| nested.and_then(|style| style.get(key)).filter(|value| value.is_truthy()))
    };
    let token = |key: &str| field(key).and_then(PropertyValue::as_str);

    let mut args = Vec::new();

    if let Some(size) = field("fontSize").and_then(format_double_value) {
        args.push(format!("fontSize: {}", size));
    }
    if let Some(color) = field("textColor").or_else(|| field("color")).and_then(format_color) {
        args.push(format!("color: {}", color));
    }
    if let Some(weight) = field("fontWeight") {
        args.push(format!("fontWeight: {}", format_font_weight(weight)));
    }
    if let Some(style) = token("fontStyle") {
        args.push(format!("fontStyle: {}", format_font_style(style)));
    }
    for key in ["letterSpacing", "wordSpacing", "height"] {
        if let Some(spacing) = field(key).and_then(format_double_value) {
            args.push(format!("{}: {}", key, spacing));
        }
    }
    if let Some(decoration) = token("decoration") {
        args.push(format!("decoration: {}", format_text_decoration(decoration)));
    }
    if let Some(color) = field("decorationColor").and_then(format_color) {
        args.push(format!("decorationColor: {}", color));
    }
    if let Some(family) = token("fontFamily") {
        args.push(format!("fontFamily: {}", format_string(family)));
    }

    if args.is_empty() {
        None
    } else {
        Some(layout.call("TextStyle", &args, level))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::CodeFormat;
    use serde_json::json;

    fn properties(value: serde_json::Value) -> IndexMap<String, PropertyValue> {
        match PropertyValue::from(value) {
            PropertyValue::Map(map) => map,
            _ => IndexMap::new(),
        }
    }

    #[test]
    fn test_no_style_fields() {
        let layout = Layout::new(2, CodeFormat::Expanded);
        assert_eq!(format_text_style(&properties(json!({"text": "Hi"})), &layout, 0), None);
        assert_eq!(format_text_style(&properties(json!({"fontSize": 0})), &layout, 0), None);
    }

    #[test]
    fn test_top_level_overrides_nested_style() {
        let layout = Layout::new(2, CodeFormat::Compact);
        let props = properties(json!({
            "fontSize": 18,
            "style": {"fontSize": 12, "fontWeight": "bold"}
        }));
        assert_eq!(
            format_text_style(&props, &layout, 0).as_deref(),
            Some("TextStyle(fontSize: 18.0, fontWeight: FontWeight.bold)")
        );
    }

    #[test]
    fn test_text_color_wins_over_color() {
        let layout = Layout::new(2, CodeFormat::Compact);
        let props = properties(json!({"color": "red", "textColor": "blue"}));
        assert_eq!(
            format_text_style(&props, &layout, 0).as_deref(),
            Some("TextStyle(color: Colors.blue)")
        );
    }
}
