//! Fixed token tables. Each formatter is total and has exactly one default
//! for unrecognized input. Tokens match case-insensitively.

use convert_case::{Case, Casing};
use forge_core::PropertyValue;

type Table = &'static [(&'static str, &'static str)];

fn lookup(table: Table, token: &str, default: &'static str) -> &'static str {
    let token = token.trim();
    table
        .iter()
        .find(|(key, _)| key.eq_ignore_ascii_case(token))
        .map(|(_, literal)| *literal)
        .unwrap_or(default)
}

const ALIGNMENTS: Table = &[
    ("topLeft", "Alignment.topLeft"),
    ("topCenter", "Alignment.topCenter"),
    ("topRight", "Alignment.topRight"),
    ("centerLeft", "Alignment.centerLeft"),
    ("center", "Alignment.center"),
    ("centerRight", "Alignment.centerRight"),
    ("bottomLeft", "Alignment.bottomLeft"),
    ("bottomCenter", "Alignment.bottomCenter"),
    ("bottomRight", "Alignment.bottomRight"),
    ("top", "Alignment.topCenter"),
    ("bottom", "Alignment.bottomCenter"),
    ("left", "Alignment.centerLeft"),
    ("right", "Alignment.centerRight"),
];

/// Default: `Alignment.center`.
pub fn format_alignment(token: &str) -> &'static str {
    lookup(ALIGNMENTS, token, "Alignment.center")
}

const MAIN_AXIS_ALIGNMENTS: Table = &[
    ("start", "MainAxisAlignment.start"),
    ("end", "MainAxisAlignment.end"),
    ("center", "MainAxisAlignment.center"),
    ("spaceBetween", "MainAxisAlignment.spaceBetween"),
    ("spaceAround", "MainAxisAlignment.spaceAround"),
    ("spaceEvenly", "MainAxisAlignment.spaceEvenly"),
];

/// Default: `MainAxisAlignment.start`.
pub fn format_main_axis_alignment(token: &str) -> &'static str {
    lookup(MAIN_AXIS_ALIGNMENTS, token, "MainAxisAlignment.start")
}

const CROSS_AXIS_ALIGNMENTS: Table = &[
    ("start", "CrossAxisAlignment.start"),
    ("end", "CrossAxisAlignment.end"),
    ("center", "CrossAxisAlignment.center"),
    ("stretch", "CrossAxisAlignment.stretch"),
    ("baseline", "CrossAxisAlignment.baseline"),
];

/// Default: `CrossAxisAlignment.center`.
pub fn format_cross_axis_alignment(token: &str) -> &'static str {
    lookup(CROSS_AXIS_ALIGNMENTS, token, "CrossAxisAlignment.center")
}

/// `min` gives `MainAxisSize.min`; anything else `MainAxisSize.max`.
pub fn format_main_axis_size(token: &str) -> &'static str {
    lookup(&[("min", "MainAxisSize.min")], token, "MainAxisSize.max")
}

const TEXT_ALIGNS: Table = &[
    ("left", "TextAlign.left"),
    ("right", "TextAlign.right"),
    ("center", "TextAlign.center"),
    ("justify", "TextAlign.justify"),
    ("start", "TextAlign.start"),
    ("end", "TextAlign.end"),
];

/// Default: `TextAlign.left`.
pub fn format_text_align(token: &str) -> &'static str {
    lookup(TEXT_ALIGNS, token, "TextAlign.left")
}

const TEXT_OVERFLOWS: Table = &[
    ("clip", "TextOverflow.clip"),
    ("fade", "TextOverflow.fade"),
    ("ellipsis", "TextOverflow.ellipsis"),
    ("visible", "TextOverflow.visible"),
];

/// Default: `TextOverflow.ellipsis`.
pub fn format_text_overflow(token: &str) -> &'static str {
    lookup(TEXT_OVERFLOWS, token, "TextOverflow.ellipsis")
}

const FONT_WEIGHTS: Table = &[
    ("normal", "FontWeight.normal"),
    ("bold", "FontWeight.bold"),
    ("w100", "FontWeight.w100"),
    ("w200", "FontWeight.w200"),
    ("w300", "FontWeight.w300"),
    ("w400", "FontWeight.w400"),
    ("w500", "FontWeight.w500"),
    ("w600", "FontWeight.w600"),
    ("w700", "FontWeight.w700"),
    ("w800", "FontWeight.w800"),
    ("w900", "FontWeight.w900"),
    ("100", "FontWeight.w100"),
    ("200", "FontWeight.w200"),
    ("300", "FontWeight.w300"),
    ("400", "FontWeight.w400"),
    ("500", "FontWeight.w500"),
    ("600", "FontWeight.w600"),
    ("700", "FontWeight.w700"),
    ("800", "FontWeight.w800"),
    ("900", "FontWeight.w900"),
];

/// Accepts `normal`, `bold`, `w100`..`w900` and the bare numeric weights in
/// string or number form. Default: `FontWeight.normal`.
pub fn format_font_weight(value: &PropertyValue) -> &'static str {
    match value {
        PropertyValue::String(s) => lookup(FONT_WEIGHTS, s, "FontWeight.normal"),
        PropertyValue::Number(n) => lookup(FONT_WEIGHTS, &format!("{}", n.round() as i64), "FontWeight.normal"),
        _ => "FontWeight.normal",
    }
}

/// `italic` gives `FontStyle.italic`; anything else `FontStyle.normal`.
pub fn format_font_style(token: &str) -> &'static str {
    lookup(&[("italic", "FontStyle.italic")], token, "FontStyle.normal")
}

const TEXT_DECORATIONS: Table = &[
    ("underline", "TextDecoration.underline"),
    ("overline", "TextDecoration.overline"),
    ("lineThrough", "TextDecoration.lineThrough"),
    ("line-through", "TextDecoration.lineThrough"),
];

/// Default: `TextDecoration.none`.
pub fn format_text_decoration(token: &str) -> &'static str {
    lookup(TEXT_DECORATIONS, token, "TextDecoration.none")
}

const BOX_FITS: Table = &[
    ("fill", "BoxFit.fill"),
    ("contain", "BoxFit.contain"),
    ("cover", "BoxFit.cover"),
    ("fitWidth", "BoxFit.fitWidth"),
    ("fitHeight", "BoxFit.fitHeight"),
    ("none", "BoxFit.none"),
    ("scaleDown", "BoxFit.scaleDown"),
];

/// Default: `BoxFit.contain`.
pub fn format_box_fit(token: &str) -> &'static str {
    lookup(BOX_FITS, token, "BoxFit.contain")
}

/// `horizontal` gives `Axis.horizontal`; anything else `Axis.vertical`.
pub fn format_axis(token: &str) -> &'static str {
    lookup(&[("horizontal", "Axis.horizontal")], token, "Axis.vertical")
}

/// Default: `StackFit.loose`.
pub fn format_stack_fit(token: &str) -> &'static str {
    lookup(
        &[
            ("loose", "StackFit.loose"),
            ("expand", "StackFit.expand"),
            ("passthrough", "StackFit.passthrough"),
        ],
        token,
        "StackFit.loose",
    )
}

/// Default: `FlexFit.loose`.
pub fn format_flex_fit(token: &str) -> &'static str {
    lookup(&[("tight", "FlexFit.tight")], token, "FlexFit.loose")
}

const WRAP_ALIGNMENTS: Table = &[
    ("start", "WrapAlignment.start"),
    ("end", "WrapAlignment.end"),
    ("center", "WrapAlignment.center"),
    ("spaceBetween", "WrapAlignment.spaceBetween"),
    ("spaceAround", "WrapAlignment.spaceAround"),
    ("spaceEvenly", "WrapAlignment.spaceEvenly"),
];

/// Default: `WrapAlignment.start`.
pub fn format_wrap_alignment(token: &str) -> &'static str {
    lookup(WRAP_ALIGNMENTS, token, "WrapAlignment.start")
}

const SCROLL_PHYSICS: Table = &[
    ("never", "NeverScrollableScrollPhysics()"),
    ("bouncing", "BouncingScrollPhysics()"),
    ("clamping", "ClampingScrollPhysics()"),
    ("always", "AlwaysScrollableScrollPhysics()"),
];

/// Default: `BouncingScrollPhysics()`.
pub fn format_scroll_physics(token: &str) -> &'static str {
    lookup(SCROLL_PHYSICS, token, "BouncingScrollPhysics()")
}

const KEYBOARD_TYPES: Table = &[
    ("text", "TextInputType.text"),
    ("number", "TextInputType.number"),
    ("email", "TextInputType.emailAddress"),
    ("emailAddress", "TextInputType.emailAddress"),
    ("phone", "TextInputType.phone"),
    ("url", "TextInputType.url"),
    ("multiline", "TextInputType.multiline"),
    ("datetime", "TextInputType.datetime"),
];

/// Default: `TextInputType.text`.
pub fn format_keyboard_type(token: &str) -> &'static str {
    lookup(KEYBOARD_TYPES, token, "TextInputType.text")
}

const ICON_ALIASES: Table = &[
    ("back", "Icons.arrow_back"),
    ("forward", "Icons.arrow_forward"),
    ("up", "Icons.arrow_upward"),
    ("down", "Icons.arrow_downward"),
    ("calendar", "Icons.calendar_today"),
    ("location", "Icons.location_on"),
    ("checkbox", "Icons.check_box"),
    ("radio", "Icons.radio_button_checked"),
    ("filter", "Icons.filter_list"),
    ("more", "Icons.more_vert"),
    ("account", "Icons.account_circle"),
    ("notification", "Icons.notifications"),
    ("camera", "Icons.camera_alt"),
    ("video", "Icons.videocam"),
    ("audio", "Icons.audiotrack"),
    ("play", "Icons.play_arrow"),
    ("time", "Icons.access_time"),
    ("attach", "Icons.attach_file"),
];

/// Default icon for names that leave nothing usable.
pub const DEFAULT_ICON: &str = "Icons.help_outline";

/// Map an icon name to an `Icons.*` constant.
///
/// Friendly aliases (`back`, `calendar`, ...) resolve through a fixed table.
/// Other names are used as Material identifiers, converted to snake case, so
/// `arrowBack` and `arrow_back` both give `Icons.arrow_back`. An
/// `Icons.` prefix is accepted.
pub fn format_icon(name: &str) -> String {
    let name = name.trim();
    let name = name.strip_prefix("Icons.").unwrap_or(name);
    let alias = lookup(ICON_ALIASES, name, "");
    if !alias.is_empty() {
        return alias.to_string();
    }

    let identifier: String = name
        .to_case(Case::Snake)
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || *c == '_')
        .collect();

    match identifier.chars().next() {
        Some(first) if !first.is_ascii_digit() => format!("Icons.{}", identifier),
        _ => DEFAULT_ICON.to_string(),
    }
}
