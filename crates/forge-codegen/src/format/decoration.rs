use super::{format_alignment, format_color, format_double, number_of};
use crate::layout::Layout;
use forge_core::PropertyValue;

const DEFAULT_GRADIENT_COLORS: [&str; 2] = ["#FFFFFF", "#000000"];

fn double_field(value: &PropertyValue, key: &str, default: f64) -> String {
    format_double(value.get(key).and_then(number_of).unwrap_or(default))
}

fn color_field(value: &PropertyValue, key: &str, default: &str) -> String {
    value
        .get(key)
        .and_then(format_color)
        .or_else(|| format_color(&PropertyValue::from(default)))
        .unwrap_or_else(|| super::color::FALLBACK_COLOR.to_string())
}

/// Format a border. Maps give a uniform `BorderSide` with a black,
/// 1.0-wide default; numbers set the width only. Default:
/// `Border.fromBorderSide(BorderSide())`.
pub fn format_border(value: &PropertyValue) -> String {
    let side = match value {
        PropertyValue::Map(_) => format!(
            "BorderSide(color: {}, width: {})",
            color_field(value, "color", "#000000"),
            double_field(value, "width", 1.0)
        ),
        PropertyValue::Number(width) => format!("BorderSide(width: {})", format_double(*width)),
        _ => "BorderSide()".to_string(),
    };
    format!("Border.fromBorderSide({})", side)
}

/// Format a border radius. Numbers and `{all}` give the same circular
/// radius on every corner, corner maps give `BorderRadius.only`. Default:
/// `BorderRadius.zero`.
pub fn format_border_radius(value: &PropertyValue) -> String {
    let uniform = |radius: f64| format!("BorderRadius.all(Radius.circular({}))", format_double(radius));
    if let Some(radius) = number_of(value) {
        return uniform(radius);
    }

    match value.get("all").and_then(number_of) {
        Some(radius) => uniform(radius),
        None if value.as_map().is_some() => {
            let corner = |key: &str| format!("{}: Radius.circular({})", key, double_field(value, key, 0.0));
            format!(
                "BorderRadius.only({}, {}, {}, {})",
                corner("topLeft"),
                corner("topRight"),
                corner("bottomLeft"),
                corner("bottomRight")
            )
        }
        None => "BorderRadius.zero".to_string(),
    }
}

/// Format a shadow list. A single map is read as a one-element list.
/// Default: `const <BoxShadow>[]`.
pub fn format_box_shadow(value: &PropertyValue, layout: &Layout, level: usize) -> String {
    let shadows: Vec<&PropertyValue> = match value {
        PropertyValue::List(items) => items.iter().filter(|item| item.as_map().is_some()).collect(),
        PropertyValue::Map(_) => vec![value],
        _ => Vec::new(),
    };

    if shadows.is_empty() {
        return "const <BoxShadow>[]".to_string();
    }

    let items: Vec<String> = shadows
        .into_iter()
        .map(|shadow| {
            format!(
                "BoxShadow(color: {}, offset: Offset({}, {}), blurRadius: {}, spreadRadius: {})",
                color_field(shadow, "color", "#000000"),
                double_field(shadow, "offsetX", 0.0),
                double_field(shadow, "offsetY", 0.0),
                double_field(shadow, "blurRadius", 0.0),
                double_field(shadow, "spreadRadius", 0.0)
            )
        })
        .collect();

    layout.list(None, &items, level)
}

/// Format a gradient. `type` selects linear (default) or radial; missing
/// or empty `colors` fall back to white-to-black.
pub fn format_gradient(value: &PropertyValue) -> String {
    let mut colors: Vec<String> = value
        .get("colors")
        .and_then(PropertyValue::as_list)
        .map(|items| items.iter().filter_map(format_color).collect())
        .unwrap_or_default();
    if colors.is_empty() {
        colors = DEFAULT_GRADIENT_COLORS
            .iter()
            .filter_map(|hex| format_color(&PropertyValue::from(*hex)))
            .collect();
    }
    let colors = colors.join(", ");

    let token = |key: &str, default: &'static str| {
        value.get(key).and_then(PropertyValue::as_str).unwrap_or(default).to_string()
    };

    match token("type", "linear").as_str() {
        "radial" => format!("RadialGradient(colors: [{}])", colors),
        "linear" => format!(
            "LinearGradient(begin: {}, end: {}, colors: [{}])",
            format_alignment(&token("begin", "topLeft")),
            format_alignment(&token("end", "bottomRight")),
            colors
        ),
        _ => format!("LinearGradient(colors: [{}])", colors),
    }
}

/// Format box constraints from `minWidth`, `maxWidth`, `minHeight` and
/// `maxHeight`. Default: `const BoxConstraints()`.
pub fn format_constraints(value: &PropertyValue) -> String {
    let bounds: Vec<String> = ["minWidth", "maxWidth", "minHeight", "maxHeight"]
        .iter()
        .filter_map(|key| {
            let bound = value.get(key)?;
            let literal = super::format_dimension(bound)?;
            Some(format!("{}: {}", key, literal))
        })
        .collect();

    if bounds.is_empty() {
        "const BoxConstraints()".to_string()
    } else {
        format!("BoxConstraints({})", bounds.join(", "))
    }
}

/// Format a transform: `rotate` (radians), `scale` or `translate {x, y}`,
/// checked in that order. Default: `Matrix4.identity()`.
pub fn format_transform(value: &PropertyValue) -> String {
    if let Some(angle) = value.get("rotate").and_then(number_of) {
        return format!("Matrix4.rotationZ({})", format_double(angle));
    }
    if let Some(scale) = value.get("scale").and_then(number_of) {
        let scale = format_double(scale);
        return format!("Matrix4.diagonal3Values({}, {}, 1.0)", scale, scale);
    }
    if let Some(offset) = value.get("translate").filter(|t| t.as_map().is_some()) {
        return format!(
            "Matrix4.translationValues({}, {}, 0.0)",
            double_field(offset, "x", 0.0),
            double_field(offset, "y", 0.0)
        );
    }
    "Matrix4.identity()".to_string()
}

/// Format a `BoxDecoration` from a map of `color`, `border`,
/// `borderRadius`, `boxShadow` and `gradient`, in that order. Unset fields
/// are skipped. Default: `const BoxDecoration()`.
pub fn format_decoration(value: &PropertyValue, layout: &Layout, level: usize) -> String {
    let set = |key: &str| value.get(key).filter(|v| v.is_truthy());
    let mut args = Vec::new();

    if let Some(color) = set("color").and_then(format_color) {
        args.push(format!("color: {}", color));
    }
    if let Some(border) = set("border") {
        args.push(format!("border: {}", format_border(border)));
    }
    if let Some(radius) = set("borderRadius") {
        args.push(format!("borderRadius: {}", format_border_radius(radius)));
    }
    if let Some(shadows) = set("boxShadow") {
        args.push(format!("boxShadow: {}", format_box_shadow(shadows, layout, level + 1)));
    }
    if let Some(gradient) = set("gradient") {
        args.push(format!("gradient: {}", format_gradient(gradient)));
    }

    if args.is_empty() {
        "const BoxDecoration()".to_string()
    } else {
        layout.call("BoxDecoration", &args, level)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::CodeFormat;
    use serde_json::json;

    fn value(json: serde_json::Value) -> PropertyValue {
        PropertyValue::from(json)
    }

    #[test]
    fn test_border_radius_forms() {
        assert_eq!(format_border_radius(&value(json!(8))), "BorderRadius.all(Radius.circular(8.0))");
        assert_eq!(
            format_border_radius(&value(json!({"all": 4}))),
            "BorderRadius.all(Radius.circular(4.0))"
        );
        assert_eq!(
            format_border_radius(&value(json!({"topLeft": 4, "bottomRight": 2.5}))),
            "BorderRadius.only(topLeft: Radius.circular(4.0), topRight: Radius.circular(0.0), \
             bottomLeft: Radius.circular(0.0), bottomRight: Radius.circular(2.5))"
        );
        assert_eq!(format_border_radius(&value(json!(true))), "BorderRadius.zero");
    }

    #[test]
    fn test_border_defaults() {
        assert_eq!(
            format_border(&value(json!({}))),
            "Border.fromBorderSide(BorderSide(color: const Color(0xFF000000), width: 1.0))"
        );
        assert_eq!(format_border(&value(json!(2))), "Border.fromBorderSide(BorderSide(width: 2.0))");
        assert_eq!(format_border(&value(json!("thick"))), "Border.fromBorderSide(BorderSide())");
    }

    #[test]
    fn test_transform_defaults_to_identity() {
        assert_eq!(format_transform(&value(json!({"rotate": 0.5}))), "Matrix4.rotationZ(0.5)");
        assert_eq!(
            format_transform(&value(json!({"scale": 2}))),
            "Matrix4.diagonal3Values(2.0, 2.0, 1.0)"
        );
        assert_eq!(
            format_transform(&value(json!({"translate": {"x": 10}}))),
            "Matrix4.translationValues(10.0, 0.0, 0.0)"
        );
        assert_eq!(format_transform(&value(json!({"skew": 1}))), "Matrix4.identity()");
        assert_eq!(format_transform(&value(json!(null))), "Matrix4.identity()");
    }

    #[test]
    fn test_gradient() {
        assert_eq!(
            format_gradient(&value(json!({"type": "radial", "colors": ["red", "#00F"]}))),
            "RadialGradient(colors: [Colors.red, const Color(0xFF0000FF)])"
        );
        assert_eq!(
            format_gradient(&value(json!({}))),
            "LinearGradient(begin: Alignment.topLeft, end: Alignment.bottomRight, \
             colors: [const Color(0xFFFFFFFF), const Color(0xFF000000)])"
        );
    }

    #[test]
    fn test_constraints() {
        assert_eq!(format_constraints(&value(json!({}))), "const BoxConstraints()");
        assert_eq!(
            format_constraints(&value(json!({"maxWidth": 320, "minHeight": "infinity"}))),
            "BoxConstraints(maxWidth: 320.0, minHeight: double.infinity)"
        );
    }

    #[test]
    fn test_decoration_layout() {
        let layout = Layout::new(2, CodeFormat::Expanded);
        let decoration = value(json!({"color": "#FFF", "borderRadius": 12}));
        assert_eq!(
            format_decoration(&decoration, &layout, 1),
            "BoxDecoration(\n    color: const Color(0xFFFFFFFF),\n    borderRadius: BorderRadius.all(Radius.circular(12.0)),\n  )"
        );
        assert_eq!(format_decoration(&value(json!({})), &layout, 0), "const BoxDecoration()");
    }

    #[test]
    fn test_box_shadow() {
        let layout = Layout::new(2, CodeFormat::Compact);
        assert_eq!(
            format_box_shadow(&value(json!({"blurRadius": 4, "offsetY": 2})), &layout, 0),
            "[BoxShadow(color: const Color(0xFF000000), offset: Offset(0.0, 2.0), blurRadius: 4.0, spreadRadius: 0.0)]"
        );
        assert_eq!(format_box_shadow(&value(json!([])), &layout, 0), "const <BoxShadow>[]");
    }
}
