//! Property value formatting.
//!
//! Every function here is total: malformed input degrades to a documented
//! default literal instead of failing, so one bad property never stops the
//! rest of a tree from generating.

mod color;
mod decoration;
mod enums;
mod primitives;
mod text_style;

pub use color::{format_color, format_color_str, FALLBACK_COLOR};
pub use decoration::{
    format_border, format_border_radius, format_box_shadow, format_constraints, format_decoration, format_gradient,
    format_transform,
};
pub use enums::{
    format_alignment, format_axis, format_box_fit, format_cross_axis_alignment, format_flex_fit, format_font_style,
    format_font_weight, format_icon, format_keyboard_type, format_main_axis_alignment, format_main_axis_size,
    format_scroll_physics, format_stack_fit, format_text_align, format_text_decoration, format_text_overflow,
    format_wrap_alignment, DEFAULT_ICON,
};
pub use primitives::{
    format_bool, format_dimension, format_double, format_double_value, format_edge_insets, format_int, format_number,
    format_string, format_string_value, number_of, ZERO_INSETS,
};
pub use text_style::format_text_style;

use crate::layout::Layout;
use forge_core::PropertyValue;

/// Whether a property name holds a color.
pub fn is_color_key(key: &str) -> bool {
    key == "color" || key.ends_with("Color")
}

/// Property names whose values have a dedicated formatter. A map under one
/// of these is a value even when it carries a `type` field (gradients do),
/// so it is never read as an embedded widget.
pub const VALUE_KEYS: &[&str] = &[
    "padding",
    "margin",
    "decoration",
    "border",
    "borderRadius",
    "boxShadow",
    "gradient",
    "constraints",
    "transform",
];

pub fn is_value_key(key: &str) -> bool {
    VALUE_KEYS.contains(&key)
}

/// Format a property by its name, for widgets without a hand-written
/// strategy.
///
/// Known property names get their semantic formatter. Otherwise booleans and
/// numbers are emitted as literals (numbers as doubles) and strings as
/// string literals. Returns `None` for null values and for lists or maps with
/// no known shape.
pub fn format_property_value(key: &str, value: &PropertyValue, layout: &Layout, level: usize) -> Option<String> {
    if value.is_null() {
        return None;
    }

    let formatted = match (key, value) {
        ("padding" | "margin", _) => format_edge_insets(value),
        ("decoration", PropertyValue::Map(_)) => format_decoration(value, layout, level),
        ("border", _) => format_border(value),
        ("borderRadius", _) => format_border_radius(value),
        ("boxShadow", _) => format_box_shadow(value, layout, level),
        ("gradient", PropertyValue::Map(_)) => format_gradient(value),
        ("constraints", PropertyValue::Map(_)) => format_constraints(value),
        ("transform", _) => format_transform(value),
        ("width" | "height", _) => format_dimension(value)?,
        (key, _) if is_color_key(key) => format_color(value)?,
        (_, PropertyValue::String(token)) => match key {
            "alignment" => format_alignment(token).to_string(),
            "mainAxisAlignment" => format_main_axis_alignment(token).to_string(),
            "crossAxisAlignment" => format_cross_axis_alignment(token).to_string(),
            "mainAxisSize" => format_main_axis_size(token).to_string(),
            "textAlign" => format_text_align(token).to_string(),
            "overflow" => format_text_overflow(token).to_string(),
            "fontWeight" => format_font_weight(value).to_string(),
            "fontStyle" => format_font_style(token).to_string(),
            "fit" => format_box_fit(token).to_string(),
            "scrollDirection" | "direction" => format_axis(token).to_string(),
            "keyboardType" => format_keyboard_type(token).to_string(),
            "physics" => format_scroll_physics(token).to_string(),
            "icon" => format_icon(token),
            _ => format_string(token),
        },
        (_, PropertyValue::Bool(b)) => b.to_string(),
        (_, PropertyValue::Number(n)) => format_double(*n),
        _ => return None,
    };

    Some(formatted)
}
