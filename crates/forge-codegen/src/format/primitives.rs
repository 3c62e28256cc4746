use forge_core::PropertyValue;

/// Shared zero inset constant.
pub const ZERO_INSETS: &str = "EdgeInsets.zero";

/// Format a number as a Dart double literal. Integral values keep a `.0`
/// suffix so `16` becomes `16.0`.
pub fn format_double(value: f64) -> String {
    if value.is_nan() {
        "double.nan".to_string()
    } else if value.is_infinite() {
        let literal = if value > 0.0 { "double.infinity" } else { "double.negativeInfinity" };
        literal.to_string()
    } else if value.fract() == 0.0 {
        format!("{:.1}", value)
    } else {
        value.to_string()
    }
}

/// Format a number as written: integral values without a fractional part.
pub fn format_number(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 && value.abs() < 9.0e15 {
        format!("{}", value as i64)
    } else {
        format_double(value)
    }
}

/// Read a number from a numeric value or a numeric string.
pub fn number_of(value: &PropertyValue) -> Option<f64> {
    match value {
        PropertyValue::Number(n) => Some(*n),
        PropertyValue::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

/// Format a value as a double, or `None` when it is not numeric.
pub fn format_double_value(value: &PropertyValue) -> Option<String> {
    number_of(value).map(format_double)
}

/// Format a value as a Dart int, rounding fractional input.
pub fn format_int(value: &PropertyValue) -> Option<String> {
    number_of(value)
        .filter(|n| n.is_finite())
        .map(|n| format!("{}", n.round() as i64))
}

/// Format a width or height. Accepts numbers, numeric strings and
/// `"infinity"`.
pub fn format_dimension(value: &PropertyValue) -> Option<String> {
    if let PropertyValue::String(s) = value {
        let token = s.trim();
        if token.eq_ignore_ascii_case("infinity") || token == "double.infinity" {
            return Some("double.infinity".to_string());
        }
    }
    format_double_value(value)
}

/// Format a boolean. Accepts `true`/`false` in either JSON or string form.
pub fn format_bool(value: &PropertyValue) -> Option<&'static str> {
    let flag = match value {
        PropertyValue::Bool(b) => *b,
        PropertyValue::String(s) if s.eq_ignore_ascii_case("true") => true,
        PropertyValue::String(s) if s.eq_ignore_ascii_case("false") => false,
        _ => return None,
    };
    Some(if flag { "true" } else { "false" })
}

/// Format text as a single-quoted Dart string literal.
///
/// Backslashes are escaped before quotes and `$` so no escape is doubled.
pub fn format_string(text: &str) -> String {
    let escaped = text
        .replace('\\', "\\\\")
        .replace('\'', "\\'")
        .replace('$', "\\$")
        .replace('\n', "\\n")
        .replace('\r', "\\r")
        .replace('\t', "\\t");
    format!("'{}'", escaped)
}

/// Format any scalar as a string literal. Null and compound values give `''`.
pub fn format_string_value(value: &PropertyValue) -> String {
    match value {
        PropertyValue::String(s) if s != "null" => format_string(s),
        PropertyValue::Number(n) => format_string(&format_number(*n)),
        PropertyValue::Bool(b) => format_string(if *b { "true" } else { "false" }),
        _ => format_string(""),
    }
}

/// Format padding or margin.
///
/// Accepts `{all}`, four-sided `{top, right, bottom, left}` maps with missing
/// sides read as zero, `{horizontal, vertical}` maps, and bare numbers.
/// Anything else is [`ZERO_INSETS`].
pub fn format_edge_insets(value: &PropertyValue) -> String {
    match value {
        PropertyValue::Number(_) | PropertyValue::String(_) => {
            number_of(value).map(uniform_insets).unwrap_or_else(|| ZERO_INSETS.to_string())
        }
        PropertyValue::Map(map) => {
            if let Some(all) = map.get("all") {
                return number_of(all).map(uniform_insets).unwrap_or_else(|| ZERO_INSETS.to_string());
            }

            let side = |key: &str| map.get(key).and_then(number_of).unwrap_or(0.0);
            let has_sides = ["top", "right", "bottom", "left"].iter().any(|k| map.contains_key(*k));
            if !has_sides && (map.contains_key("horizontal") || map.contains_key("vertical")) {
                let (horizontal, vertical) = (side("horizontal"), side("vertical"));
                return sided_insets(horizontal, vertical, horizontal, vertical);
            }

            sided_insets(side("left"), side("top"), side("right"), side("bottom"))
        }
        _ => ZERO_INSETS.to_string(),
    }
}

fn uniform_insets(all: f64) -> String {
    if all == 0.0 {
        ZERO_INSETS.to_string()
    } else {
        format!("const EdgeInsets.all({})", format_double(all))
    }
}

fn sided_insets(left: f64, top: f64, right: f64, bottom: f64) -> String {
    if left == top && top == right && right == bottom {
        return uniform_insets(left);
    }
    if left == right && top == bottom {
        return format!(
            "const EdgeInsets.symmetric(horizontal: {}, vertical: {})",
            format_double(left),
            format_double(top)
        );
    }
    format!(
        "const EdgeInsets.fromLTRB({}, {}, {}, {})",
        format_double(left),
        format_double(top),
        format_double(right),
        format_double(bottom)
    )
}
