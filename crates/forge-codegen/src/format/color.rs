use forge_core::PropertyValue;
use regex::Regex;
use std::sync::LazyLock;
use tracing::warn;

/// Literal used when a color token cannot be understood.
pub const FALLBACK_COLOR: &str = "const Color(0xFF000000)";

const NAMED_COLORS: &[(&str, &str)] = &[
    ("white", "Colors.white"),
    ("black", "Colors.black"),
    ("red", "Colors.red"),
    ("blue", "Colors.blue"),
    ("green", "Colors.green"),
    ("yellow", "Colors.yellow"),
    ("orange", "Colors.orange"),
    ("purple", "Colors.purple"),
    ("pink", "Colors.pink"),
    ("grey", "Colors.grey"),
    ("gray", "Colors.grey"),
    ("transparent", "Colors.transparent"),
];

/// Format a color property.
///
/// Returns `None` when the color is unset (null, empty, or `"null"`), in
/// which case the property is omitted. Strings are read as hex (`#RGB`,
/// `#RRGGBB`, `#AARRGGBB`), `rgb(r, g, b)` / `rgba(r, g, b, a)`, or a named
/// palette color. Numbers are read as a packed `0xAARRGGBB` value.
/// Anything else falls back to [`FALLBACK_COLOR`].
pub fn format_color(value: &PropertyValue) -> Option<String> {
    match value {
        PropertyValue::Null => None,
        PropertyValue::String(token) => format_color_str(token),
        PropertyValue::Number(n) if n.is_finite() && *n >= 0.0 && *n <= f64::from(u32::MAX) => {
            Some(format!("const Color(0x{:08X})", *n as u32))
        }
        other => {
            warn!(value = ?other, "unrecognized color value, using opaque black");
            Some(FALLBACK_COLOR.to_string())
        }
    }
}

/// Format a color token. See [`format_color`].
pub fn format_color_str(token: &str) -> Option<String> {
    let token = token.trim();
    if token.is_empty() || token.eq_ignore_ascii_case("null") {
        return None;
    }

    if let Some(hex) = token.strip_prefix('#') {
        return Some(match expand_hex(hex) {
            Some(argb) => format!("const Color(0x{})", argb),
            None => {
                warn!(color = token, "malformed hex color, using opaque black");
                FALLBACK_COLOR.to_string()
            }
        });
    }

    if let Some(rgba) = format_rgb_function(token) {
        return Some(rgba);
    }

    let named = NAMED_COLORS
        .iter()
        .find(|(name, _)| name.eq_ignore_ascii_case(token))
        .map(|(_, literal)| literal.to_string());

    Some(named.unwrap_or_else(|| {
        warn!(color = token, "unknown color name, using opaque black");
        FALLBACK_COLOR.to_string()
    }))
}

/// Expand a hex body to upper-case `AARRGGBB`.
fn expand_hex(hex: &str) -> Option<String> {
    if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    let hex = hex.to_ascii_uppercase();
    match hex.len() {
        3 => Some(format!("FF{}", hex.chars().flat_map(|c| [c, c]).collect::<String>())),
        6 => Some(format!("FF{}", hex)),
        8 => Some(hex),
        _ => None,
    }
}

static RGB_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?i)rgba?\(\s*(\d{1,3})\s*,\s*(\d{1,3})\s*,\s*(\d{1,3})\s*(?:,\s*([0-9]*\.?[0-9]+)\s*)?\)$")
        .expect("Invalid rgb() regex")
});

fn format_rgb_function(token: &str) -> Option<String> {
    let captures = RGB_RE.captures(token)?;
    let channel = |i: usize| -> Option<u8> { captures.get(i)?.as_str().parse().ok() };
    let (r, g, b) = (channel(1)?, channel(2)?, channel(3)?);
    let opacity = captures
        .get(4)
        .and_then(|m| m.as_str().parse::<f64>().ok())
        .unwrap_or(1.0)
        .clamp(0.0, 1.0);

    Some(format!(
        "const Color.fromRGBO({}, {}, {}, {})",
        r,
        g,
        b,
        super::format_double(opacity)
    ))
}
