//! Screen structure: Scaffold and AppBar.

use super::content::icon_code;
use super::{CodeGenerator, Frame, GenerationContext, WidgetCall};
use crate::format::{format_bool, format_color, format_double_value, format_icon, format_string, format_string_value};
use crate::kind::WidgetKind;
use forge_core::{PropertyValue, WidgetNode};

impl CodeGenerator<'_> {
    /// A Scaffold whose children include exactly one AppBar is split into
    /// the `appBar` and `body` slots; otherwise every child goes to `body`,
    /// wrapped in a Column when there are several.
    ///
    /// Order: backgroundColor, appBar, body, drawer, bottomNavigationBar,
    /// floatingActionButton.
    pub(super) fn scaffold(&self, node: &WidgetNode, frame: Frame, ctx: &mut GenerationContext<'_>) -> WidgetCall {
        let headers: Vec<usize> = node
            .children
            .iter()
            .enumerate()
            .filter(|(_, child)| WidgetKind::of(child) == WidgetKind::AppBar)
            .map(|(index, _)| index)
            .collect();
        let header = match headers.as_slice() {
            [only] => Some(*only),
            _ => None,
        };

        let mut call = WidgetCall::new("Scaffold");
        call.opt_arg("backgroundColor", node.property("backgroundColor").and_then(format_color));

        match header {
            Some(index) => {
                let rendered = self.render_node(&node.children[index], frame.child(), ctx);
                call.child("appBar", rendered);
            }
            None => {
                if let Some(app_bar) = node.property("appBar") {
                    self.app_bar_slot(app_bar, frame, ctx, &mut call);
                }
            }
        }

        let body: Vec<WidgetNode> = node
            .children
            .iter()
            .enumerate()
            .filter(|(index, _)| Some(*index) != header)
            .map(|(_, child)| child.clone())
            .collect();
        self.child_slot("body", &body, frame, ctx, &mut call);

        for key in ["drawer", "bottomNavigationBar"] {
            if let Some(rendered) = node
                .property(key)
                .and_then(|value| self.embedded_value(value, frame.arg_level(), ctx))
            {
                call.child(key, rendered);
            }
        }

        if let Some(fab) = node.property("floatingActionButton") {
            match fab.as_widget() {
                Some(widget) => {
                    let rendered = self.embedded(&widget, frame.arg_level(), ctx);
                    call.child("floatingActionButton", rendered);
                }
                None => {
                    if let Some(properties) = fab.as_map() {
                        let code = floating_action_button(properties, frame.arg_level(), ctx);
                        call.arg("floatingActionButton", code);
                    }
                }
            }
        }
        call
    }

    /// An `appBar` property holds either a typed widget or the AppBar's
    /// own properties.
    fn app_bar_slot(
        &self,
        value: &PropertyValue,
        frame: Frame,
        ctx: &mut GenerationContext<'_>,
        call: &mut WidgetCall,
    ) {
        let widget = match (value.as_widget(), value.as_map()) {
            (Some(widget), _) => widget,
            (None, Some(properties)) => WidgetNode {
                properties: properties.clone(),
                ..WidgetNode::new("AppBar")
            },
            (None, None) => return,
        };
        let rendered = self.embedded(&widget, frame.arg_level(), ctx);
        call.child("appBar", rendered);
    }

    /// Order: leading, automaticallyImplyLeading, title, actions,
    /// elevation, backgroundColor, foregroundColor, centerTitle,
    /// toolbarHeight.
    pub(super) fn app_bar(&self, node: &WidgetNode, frame: Frame, ctx: &mut GenerationContext<'_>) -> WidgetCall {
        let level = frame.arg_level();
        let mut call = WidgetCall::new("AppBar");

        match node.property("leading") {
            Some(PropertyValue::String(_)) => call.arg("leading", format!("Icon({})", icon_code(node, "leading"))),
            Some(value) => {
                if let Some(rendered) = self.embedded_value(value, level, ctx) {
                    call.child("leading", rendered);
                }
            }
            None => {}
        }
        call.opt_arg(
            "automaticallyImplyLeading",
            node.property("automaticallyImplyLeading").and_then(format_bool),
        );

        match node.property("title") {
            Some(value @ (PropertyValue::String(_) | PropertyValue::Number(_))) => {
                call.arg("title", format!("Text({})", format_string_value(value)));
            }
            Some(value) => {
                if let Some(rendered) = self.embedded_value(value, level, ctx) {
                    call.child("title", rendered);
                }
            }
            None => {}
        }

        if let Some(rendered) = node
            .property("actions")
            .and_then(|value| self.embedded_value(value, level, ctx))
        {
            call.child("actions", rendered);
        }

        call.opt_arg("elevation", node.property("elevation").and_then(format_double_value));
        for key in ["backgroundColor", "foregroundColor"] {
            call.opt_arg(key, node.property(key).and_then(format_color));
        }
        call.opt_arg("centerTitle", node.property("centerTitle").and_then(format_bool));
        call.opt_arg("toolbarHeight", node.property("toolbarHeight").and_then(format_double_value));
        call
    }
}

/// FloatingActionButton from an untyped property map.
fn floating_action_button(
    properties: &indexmap::IndexMap<String, PropertyValue>,
    level: usize,
    ctx: &GenerationContext<'_>,
) -> String {
    let value = |key: &str| properties.get(key).filter(|value| !value.is_null());

    let mut args = vec![format!(
        "onPressed: {}",
        if value("onPressed").is_some() { "() {}" } else { "null" }
    )];
    if let Some(tooltip) = value("tooltip").and_then(PropertyValue::as_str) {
        args.push(format!("tooltip: {}", format_string(tooltip)));
    }
    if let Some(color) = value("backgroundColor").and_then(format_color) {
        args.push(format!("backgroundColor: {}", color));
    }
    let icon = value("icon")
        .and_then(PropertyValue::as_str)
        .map_or_else(|| "Icons.add".to_string(), format_icon);
    args.push(format!("child: Icon({})", icon));

    ctx.layout.call("FloatingActionButton", &args, level)
}
