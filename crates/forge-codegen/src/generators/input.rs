//! Buttons and form inputs.
//!
//! Event handlers are emitted as empty stub closures for the developer to
//! fill in; an absent `onPressed` becomes `null`, which Flutter renders as a
//! disabled button.

use super::content::icon_code;
use super::{dart_identifier, token, CodeGenerator, Frame, GenerationContext, WidgetCall};
use crate::const_eval::BUTTON_STYLE_PROPERTIES;
use crate::format::{
    format_bool, format_color, format_double, format_double_value, format_edge_insets, format_icon, format_int,
    format_keyboard_type, format_number, format_string, format_string_value,
};
use forge_core::{PropertyValue, WidgetNode};

pub(super) const TAP_HANDLER: &str = "() {}";
const VALUE_HANDLER: &str = "(value) {}";
const DEFAULT_LABEL: &str = "Button";
const DEFAULT_BUTTON_ICON: &str = "Icons.add";
const DEFAULT_RADIO_VALUE: &str = "1";

impl CodeGenerator<'_> {
    /// Builder buttons pick their Material variant from `buttonType`.
    pub(super) fn button(&self, node: &WidgetNode, frame: Frame, ctx: &mut GenerationContext<'_>) -> WidgetCall {
        let constructor = match token(node, "buttonType").map(str::to_ascii_lowercase).as_deref() {
            Some("text") => "TextButton",
            Some("outlined" | "outline") => "OutlinedButton",
            _ => "ElevatedButton",
        };
        self.material_button(node, constructor, frame, ctx)
    }

    /// Order: onPressed, onLongPress, style, child.
    ///
    /// Children replace the label; without children the label comes from
    /// `text`, then `label`.
    pub(super) fn material_button(
        &self,
        node: &WidgetNode,
        constructor: &str,
        frame: Frame,
        ctx: &mut GenerationContext<'_>,
    ) -> WidgetCall {
        let mut call = WidgetCall::new(constructor);
        call.arg("onPressed", handler(node, "onPressed", TAP_HANDLER).unwrap_or("null"));
        call.opt_arg("onLongPress", handler(node, "onLongPress", TAP_HANDLER));

        let style: Vec<String> = BUTTON_STYLE_PROPERTIES
            .iter()
            .filter_map(|&key| {
                let value = node.property(key)?;
                let formatted = match key {
                    "padding" => Some(format_edge_insets(value)),
                    _ => format_color(value),
                };
                formatted.map(|formatted| format!("{}: {}", key, formatted))
            })
            .collect();
        if !style.is_empty() {
            let style_from = format!("{}.styleFrom", constructor);
            call.arg("style", ctx.layout.call(&style_from, &style, frame.arg_level()));
        }

        if node.children.is_empty() {
            let label = node
                .property("text")
                .or_else(|| node.property("label"))
                .map(format_string_value)
                .unwrap_or_else(|| format_string(DEFAULT_LABEL));
            call.arg("child", format!("Text({})", label));
        } else {
            self.single_child(node, frame, ctx, &mut call);
        }
        call
    }

    /// Order: icon, onPressed, iconSize, color, tooltip.
    pub(super) fn icon_button(&self, node: &WidgetNode, _frame: Frame, _ctx: &mut GenerationContext<'_>) -> WidgetCall {
        let mut call = WidgetCall::new("IconButton");
        let icon = token(node, "icon").map_or_else(|| DEFAULT_BUTTON_ICON.to_string(), format_icon);
        call.arg("icon", format!("Icon({})", icon));
        call.arg("onPressed", handler(node, "onPressed", TAP_HANDLER).unwrap_or("null"));
        call.opt_arg("iconSize", node.property("iconSize").and_then(format_double_value));
        call.opt_arg("color", node.property("color").and_then(format_color));
        call.opt_arg("tooltip", token(node, "tooltip").map(format_string));
        call
    }

    /// Order: controller, decoration, obscureText, maxLines, keyboardType,
    /// enabled, onChanged, onSubmitted.
    pub(super) fn text_field(&self, node: &WidgetNode, frame: Frame, ctx: &mut GenerationContext<'_>) -> WidgetCall {
        let mut call = WidgetCall::new("TextField");
        call.opt_arg(
            "controller",
            token(node, "controller").map(|name| dart_identifier(name, "controller")),
        );

        let mut decoration = Vec::new();
        for key in ["hintText", "labelText", "helperText"] {
            if let Some(text) = token(node, key) {
                decoration.push(format!("{}: {}", key, format_string(text)));
            }
        }
        for key in ["prefixIcon", "suffixIcon"] {
            if token(node, key).is_some() {
                decoration.push(format!("{}: Icon({})", key, icon_code(node, key)));
            }
        }
        if let Some(border) = token(node, "border").and_then(input_border) {
            decoration.push(format!("border: {}", border));
        }
        if !decoration.is_empty() {
            call.arg(
                "decoration",
                ctx.layout.call("InputDecoration", &decoration, frame.arg_level()),
            );
        }

        call.opt_arg("obscureText", node.property("obscureText").and_then(format_bool));
        call.opt_arg(
            "maxLines",
            node.property("maxLines").filter(|v| v.is_truthy()).and_then(format_int),
        );
        call.opt_arg("keyboardType", token(node, "keyboardType").map(format_keyboard_type));
        call.opt_arg("enabled", node.property("enabled").and_then(format_bool));
        call.opt_arg("onChanged", handler(node, "onChanged", VALUE_HANDLER));
        call.opt_arg("onSubmitted", handler(node, "onSubmitted", VALUE_HANDLER));
        call
    }

    /// Checkbox and Switch. `onChanged` is always present so the control is
    /// interactive.
    pub(super) fn toggle(
        &self,
        node: &WidgetNode,
        constructor: &str,
        _frame: Frame,
        _ctx: &mut GenerationContext<'_>,
    ) -> WidgetCall {
        let mut call = WidgetCall::new(constructor);
        call.arg("value", node.property("value").and_then(format_bool).unwrap_or("false"));
        call.arg("onChanged", VALUE_HANDLER);
        call.opt_arg("activeColor", node.property("activeColor").and_then(format_color));
        call
    }

    /// Order: value, groupValue, onChanged, activeColor.
    pub(super) fn radio(&self, node: &WidgetNode, _frame: Frame, _ctx: &mut GenerationContext<'_>) -> WidgetCall {
        let mut call = WidgetCall::new("Radio");
        call.arg("value", radio_value(node.property("value")));
        call.arg("groupValue", radio_value(node.property("groupValue")));
        call.arg("onChanged", VALUE_HANDLER);
        call.opt_arg("activeColor", node.property("activeColor").and_then(format_color));
        call
    }

    /// Defaults: value 0.5 over `0.0..=1.0`.
    ///
    /// Order: value, min, max, divisions, label, onChanged, activeColor,
    /// inactiveColor.
    pub(super) fn slider(&self, node: &WidgetNode, _frame: Frame, _ctx: &mut GenerationContext<'_>) -> WidgetCall {
        let mut call = WidgetCall::new("Slider");
        for (key, default) in [("value", 0.5), ("min", 0.0), ("max", 1.0)] {
            let value = node
                .property(key)
                .and_then(format_double_value)
                .unwrap_or_else(|| format_double(default));
            call.arg(key, value);
        }
        call.opt_arg("divisions", node.property("divisions").and_then(format_int));
        call.opt_arg("label", token(node, "label").map(format_string));
        call.arg("onChanged", VALUE_HANDLER);
        for key in ["activeColor", "inactiveColor"] {
            call.opt_arg(key, node.property(key).and_then(format_color));
        }
        call
    }
}

/// Radio values keep their JSON type so `value` and `groupValue` compare.
fn radio_value(value: Option<&PropertyValue>) -> String {
    match value {
        Some(PropertyValue::Number(n)) => format_number(*n),
        Some(PropertyValue::Bool(b)) => b.to_string(),
        Some(PropertyValue::String(s)) => format_string(s),
        _ => DEFAULT_RADIO_VALUE.to_string(),
    }
}

/// Stub closure for a handler property that is set.
fn handler(node: &WidgetNode, key: &str, stub: &'static str) -> Option<&'static str> {
    node.property(key).map(|_| stub)
}

fn input_border(token: &str) -> Option<&'static str> {
    match token.to_ascii_lowercase().as_str() {
        "outline" | "outlined" => Some("OutlineInputBorder()"),
        "underline" => Some("UnderlineInputBorder()"),
        "none" => Some("InputBorder.none"),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use crate::options::{CodeFormat, GenerationOptions};
    use crate::CodeGenerator;
    use forge_core::{NoMappings, WidgetNode};

    fn render(node: &WidgetNode, format: CodeFormat) -> String {
        let options = GenerationOptions {
            wrap_in_class: false,
            include_imports: false,
            include_comments: false,
            format,
            ..Default::default()
        };
        CodeGenerator::new(&NoMappings).generate(node, &options).unwrap().code
    }

    #[test]
    fn test_button_without_handler_is_disabled_and_const() {
        let node = WidgetNode::new("Button").with_property("text", "Save");
        assert_eq!(
            render(&node, CodeFormat::Compact),
            "const ElevatedButton(onPressed: null, child: Text('Save'))"
        );
    }

    #[test]
    fn test_button_type_and_handler() {
        let node = WidgetNode::new("Button")
            .with_property("buttonType", "outlined")
            .with_property("label", "Cancel")
            .with_property("onPressed", "cancel");
        assert_eq!(
            render(&node, CodeFormat::Expanded),
            "OutlinedButton(\n  onPressed: () {},\n  child: Text('Cancel'),\n)"
        );
    }

    #[test]
    fn test_button_style_from() {
        let node = WidgetNode::new("ElevatedButton")
            .with_property("backgroundColor", "blue")
            .with_child(WidgetNode::new("Icon").with_property("icon", "home"));
        assert_eq!(
            render(&node, CodeFormat::Expanded),
            "ElevatedButton(\n  onPressed: null,\n  style: ElevatedButton.styleFrom(\n    backgroundColor: Colors.blue,\n  ),\n  child: const Icon(Icons.home),\n)"
        );
    }

    #[test]
    fn test_text_field() {
        let node = WidgetNode::new("TextField")
            .with_property("controller", "email controller")
            .with_property("hintText", "Email")
            .with_property("border", "outline")
            .with_property("keyboardType", "email")
            .with_property("onChanged", "update");
        assert_eq!(
            render(&node, CodeFormat::Expanded),
            "TextField(\n  controller: emailController,\n  decoration: InputDecoration(\n    hintText: 'Email',\n    border: OutlineInputBorder(),\n  ),\n  keyboardType: TextInputType.emailAddress,\n  onChanged: (value) {},\n)"
        );
    }

    #[test]
    fn test_toggles_are_never_const() {
        let node = WidgetNode::new("Switch").with_property("value", true);
        assert_eq!(render(&node, CodeFormat::Compact), "Switch(value: true, onChanged: (value) {})");

        let node = WidgetNode::new("Checkbox");
        assert_eq!(render(&node, CodeFormat::Compact), "Checkbox(value: false, onChanged: (value) {})");
    }

    #[test]
    fn test_icon_button_defaults() {
        let node = WidgetNode::new("IconButton").with_property("tooltip", "Add");
        assert_eq!(
            render(&node, CodeFormat::Expanded),
            "const IconButton(\n  icon: Icon(Icons.add),\n  onPressed: null,\n  tooltip: 'Add',\n)"
        );
    }

    #[test]
    fn test_slider_defaults() {
        let node = WidgetNode::new("Slider").with_property("divisions", 4);
        assert_eq!(
            render(&node, CodeFormat::Expanded),
            "Slider(\n  value: 0.5,\n  min: 0.0,\n  max: 1.0,\n  divisions: 4,\n  onChanged: (value) {},\n)"
        );
    }

    #[test]
    fn test_radio_values_keep_type() {
        let node = WidgetNode::new("Radio")
            .with_property("value", "a")
            .with_property("groupValue", "b");
        assert_eq!(
            render(&node, CodeFormat::Expanded),
            "Radio(\n  value: 'a',\n  groupValue: 'b',\n  onChanged: (value) {},\n)"
        );
        assert_eq!(
            render(&WidgetNode::new("radio"), CodeFormat::Expanded),
            "Radio(\n  value: 1,\n  groupValue: 1,\n  onChanged: (value) {},\n)"
        );
    }
}
