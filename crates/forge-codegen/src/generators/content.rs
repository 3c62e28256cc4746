//! Text, icons, images, dividers and list tiles.

use super::input::TAP_HANDLER;
use super::{dart_identifier, token, CodeGenerator, Frame, GenerationContext, WidgetCall};
use crate::format::{
    format_bool, format_box_fit, format_color, format_dimension, format_double_value, format_icon, format_int,
    format_string, format_string_value, format_text_align, format_text_overflow, format_text_style, DEFAULT_ICON,
};
use forge_core::{PropertyValue, WidgetNode};

/// Import for generated localizations, needed by translated text.
pub(crate) const L10N_IMPORT: &str = "package:flutter_gen/gen_l10n/app_localizations.dart";

const DEFAULT_TEXT: &str = "Text";

impl CodeGenerator<'_> {
    /// The text comes from `text`, then `content`, then a `'Text'`
    /// placeholder. With `useTranslation`, the text is looked up through
    /// `AppLocalizations` under `translationKey`.
    ///
    /// Order: style, textAlign, overflow, maxLines, softWrap.
    pub(super) fn text(&self, node: &WidgetNode, frame: Frame, ctx: &mut GenerationContext<'_>) -> WidgetCall {
        let mut call = WidgetCall::new("Text");
        let text = node.property("text").or_else(|| node.property("content"));

        match translation_key(node, text) {
            Some(key) => {
                ctx.add_import(L10N_IMPORT);
                call.positional(format!("AppLocalizations.of(context)!.{}", key));
            }
            None => call.positional(
                text.map(format_string_value)
                    .unwrap_or_else(|| format_string(DEFAULT_TEXT)),
            ),
        }

        call.opt_arg("style", format_text_style(&node.properties, &ctx.layout, frame.arg_level()));
        call.opt_arg("textAlign", token(node, "textAlign").map(format_text_align));
        call.opt_arg("overflow", token(node, "overflow").map(format_text_overflow));
        call.opt_arg(
            "maxLines",
            node.property("maxLines").filter(|v| v.is_truthy()).and_then(format_int),
        );
        call.opt_arg("softWrap", node.property("softWrap").and_then(format_bool));
        call
    }

    /// Order: icon, size, color, semanticLabel.
    pub(super) fn icon(&self, node: &WidgetNode, _frame: Frame, _ctx: &mut GenerationContext<'_>) -> WidgetCall {
        let mut call = WidgetCall::new("Icon");
        call.positional(icon_code(node, "icon"));
        call.opt_arg("size", node.property("size").and_then(format_double_value));
        call.opt_arg("color", node.property("color").and_then(format_color));
        call.opt_arg("semanticLabel", token(node, "semanticLabel").map(format_string));
        call
    }

    /// `http(s)` sources load from the network, `assets/` paths as given,
    /// and bare file names from `assets/images/`. Without a source a
    /// Placeholder is emitted.
    pub(super) fn image(&self, node: &WidgetNode, _frame: Frame, _ctx: &mut GenerationContext<'_>) -> WidgetCall {
        let source = ["source", "src", "url"]
            .iter()
            .find_map(|key| token(node, key))
            .map(str::trim)
            .filter(|source| !source.is_empty());

        let Some(source) = source else {
            return WidgetCall::new("Placeholder");
        };

        let mut call = if source.starts_with("http://") || source.starts_with("https://") {
            let mut call = WidgetCall::new("Image.network");
            call.positional(format_string(source));
            call
        } else {
            let mut call = WidgetCall::new("Image.asset");
            let path = if source.starts_with("assets/") {
                source.to_string()
            } else {
                format!("assets/images/{}", source)
            };
            call.positional(format_string(&path));
            call
        };

        for key in ["width", "height"] {
            call.opt_arg(key, node.property(key).and_then(format_dimension));
        }
        call.opt_arg("fit", token(node, "fit").map(format_box_fit));
        call
    }

    /// Order: height, thickness, indent, endIndent, color.
    pub(super) fn divider(&self, node: &WidgetNode, _frame: Frame, _ctx: &mut GenerationContext<'_>) -> WidgetCall {
        let mut call = WidgetCall::new("Divider");
        for key in ["height", "thickness", "indent", "endIndent"] {
            call.opt_arg(key, node.property(key).and_then(format_double_value));
        }
        call.opt_arg("color", node.property("color").and_then(format_color));
        call
    }

    /// String `leading` and `trailing` values name icons; string or number
    /// `title` and `subtitle` values become Text. Widget maps in any of
    /// the four slots are rendered in place.
    ///
    /// Order: leading, title, subtitle, trailing, dense, enabled, onTap,
    /// onLongPress.
    pub(super) fn list_tile(&self, node: &WidgetNode, frame: Frame, ctx: &mut GenerationContext<'_>) -> WidgetCall {
        let level = frame.arg_level();
        let mut call = WidgetCall::new("ListTile");

        for (key, is_text) in [("leading", false), ("title", true), ("subtitle", true), ("trailing", false)] {
            match node.property(key) {
                Some(value @ (PropertyValue::String(_) | PropertyValue::Number(_))) if is_text => {
                    call.arg(key, format!("Text({})", format_string_value(value)));
                }
                Some(PropertyValue::String(_)) => call.arg(key, format!("Icon({})", icon_code(node, key))),
                Some(value) => {
                    if let Some(rendered) = self.embedded_value(value, level, ctx) {
                        call.child(key, rendered);
                    }
                }
                None => {}
            }
        }

        for key in ["dense", "enabled"] {
            call.opt_arg(key, node.property(key).and_then(format_bool));
        }
        for key in ["onTap", "onLongPress"] {
            call.opt_arg(key, node.property(key).map(|_| TAP_HANDLER));
        }
        call
    }
}

/// `Icons.*` constant for an icon-name property, defaulting when unset.
pub(super) fn icon_code(node: &WidgetNode, key: &str) -> String {
    token(node, key)
        .map(format_icon)
        .unwrap_or_else(|| DEFAULT_ICON.to_string())
}

/// Localization getter name for translated text, or `None` when the node
/// does not use translation.
fn translation_key(node: &WidgetNode, text: Option<&PropertyValue>) -> Option<String> {
    if !node.property("useTranslation").is_some_and(PropertyValue::is_truthy) {
        return None;
    }
    let source = token(node, "translationKey")
        .or_else(|| text.and_then(PropertyValue::as_str))
        .unwrap_or(DEFAULT_TEXT);
    Some(dart_identifier(source, "text"))
}

#[cfg(test)]
mod tests {
    use crate::options::{CodeFormat, GenerationOptions};
    use crate::CodeGenerator;
    use forge_core::{MappingTable, NoMappings, PropertyValue, WidgetNode};
    use serde_json::json;

    fn render(node: &WidgetNode, format: CodeFormat) -> crate::GeneratedOutput {
        let options = GenerationOptions {
            wrap_in_class: false,
            include_comments: false,
            format,
            ..Default::default()
        };
        CodeGenerator::new(&NoMappings).generate(node, &options).unwrap()
    }

    #[test]
    fn test_text_fallbacks() {
        let content = WidgetNode::new("Text").with_property("content", "From content");
        assert!(render(&content, CodeFormat::Compact).code.ends_with("const Text('From content')"));

        let empty = WidgetNode::new("Text");
        assert!(render(&empty, CodeFormat::Compact).code.ends_with("const Text('Text')"));
    }

    #[test]
    fn test_text_with_style() {
        let node = WidgetNode::new("Text")
            .with_property("text", "Title")
            .with_property("fontSize", 24)
            .with_property("fontWeight", "bold")
            .with_property("textAlign", "center");
        let output = render(&node, CodeFormat::Expanded);
        assert!(output.code.ends_with(
            "const Text(\n  'Title',\n  style: TextStyle(\n    fontSize: 24.0,\n    fontWeight: FontWeight.bold,\n  ),\n  textAlign: TextAlign.center,\n)"
        ));
    }

    #[test]
    fn test_translated_text() {
        let node = WidgetNode::new("Text")
            .with_property("text", "Welcome back")
            .with_property("useTranslation", true)
            .with_property("translationKey", "welcome_back");
        let output = render(&node, CodeFormat::Compact);
        assert!(output.code.ends_with("Text(AppLocalizations.of(context)!.welcomeBack)"));
        assert!(!output.code.contains("const Text"));
        assert!(output.imports.iter().any(|uri| uri == super::L10N_IMPORT));
    }

    #[test]
    fn test_image_sources() {
        let network = WidgetNode::new("Image").with_property("source", "https://example.com/a.png");
        assert!(render(&network, CodeFormat::Compact)
            .code
            .ends_with("Image.network('https://example.com/a.png')"));

        let asset = WidgetNode::new("Image")
            .with_property("src", "logo.png")
            .with_property("fit", "cover");
        assert!(render(&asset, CodeFormat::Compact)
            .code
            .ends_with("Image.asset('assets/images/logo.png', fit: BoxFit.cover)"));

        let missing = WidgetNode::new("Image");
        assert!(render(&missing, CodeFormat::Compact).code.ends_with("Placeholder()"));
    }

    #[test]
    fn test_icon() {
        let node = WidgetNode::new("Icon")
            .with_property("icon", "back")
            .with_property("size", 20);
        assert!(render(&node, CodeFormat::Compact)
            .code
            .ends_with("const Icon(Icons.arrow_back, size: 20.0)"));
    }

    #[test]
    fn test_list_tile_slots() {
        let node = WidgetNode::new("ListTile")
            .with_property("title", "Inbox")
            .with_property("leading", "mail")
            .with_property("onTap", "open");
        let options = GenerationOptions {
            wrap_in_class: false,
            include_imports: false,
            include_comments: false,
            ..Default::default()
        };
        let output = CodeGenerator::new(&MappingTable::with_defaults())
            .generate(&node, &options)
            .unwrap();
        assert_eq!(
            output.code,
            "ListTile(\n  leading: Icon(Icons.mail),\n  title: Text('Inbox'),\n  onTap: () {},\n)"
        );
    }

    #[test]
    fn test_list_tile_embedded_widgets() {
        let node = WidgetNode::new("list_tile")
            .with_property("subtitle", 3)
            .with_property(
                "trailing",
                PropertyValue::from(json!({"type": "Icon", "properties": {"icon": "star"}})),
            );
        let output = render(&node, CodeFormat::Compact);
        assert!(output
            .code
            .ends_with("const ListTile(subtitle: Text('3'), trailing: const Icon(Icons.star))"));
        assert_eq!(output.widget_count, 1);
    }
}
