//! Single-child layout widgets.

use super::{token, CodeGenerator, Frame, GenerationContext, WidgetCall};
use crate::format::{
    format_alignment, format_color, format_constraints, format_decoration, format_dimension, format_double,
    format_double_value, format_edge_insets, format_flex_fit, format_int, format_transform, number_of,
};
use forge_core::{PropertyValue, WidgetNode};

/// Padding used when a Padding node sets none.
const DEFAULT_PADDING: &str = "const EdgeInsets.all(8.0)";

impl CodeGenerator<'_> {
    /// Order: width, height, color, padding, margin, alignment, decoration,
    /// constraints, transform, child.
    pub(super) fn container(&self, node: &WidgetNode, frame: Frame, ctx: &mut GenerationContext<'_>) -> WidgetCall {
        let mut call = WidgetCall::new("Container");
        dimensions(node, &mut call);

        let decoration = merged_decoration(node);
        if decoration.is_none() {
            call.opt_arg("color", node.property("color").and_then(format_color));
        }
        call.opt_arg("padding", node.property("padding").map(format_edge_insets));
        call.opt_arg("margin", node.property("margin").map(format_edge_insets));
        call.opt_arg("alignment", token(node, "alignment").map(format_alignment));
        if let Some(decoration) = decoration {
            call.arg("decoration", format_decoration(&decoration, &ctx.layout, frame.arg_level()));
        }
        call.opt_arg(
            "constraints",
            node.property("constraints")
                .filter(|value| value.as_map().is_some())
                .map(format_constraints),
        );
        call.opt_arg("transform", node.property("transform").map(format_transform));

        self.single_child(node, frame, ctx, &mut call);
        call
    }

    pub(super) fn padding(&self, node: &WidgetNode, frame: Frame, ctx: &mut GenerationContext<'_>) -> WidgetCall {
        let mut call = WidgetCall::new("Padding");
        let padding = node
            .property("padding")
            .map(format_edge_insets)
            .unwrap_or_else(|| DEFAULT_PADDING.to_string());
        call.arg("padding", padding);
        self.single_child(node, frame, ctx, &mut call);
        call
    }

    pub(super) fn center(&self, node: &WidgetNode, frame: Frame, ctx: &mut GenerationContext<'_>) -> WidgetCall {
        let mut call = WidgetCall::new("Center");
        factors(node, &mut call);
        self.single_child(node, frame, ctx, &mut call);
        call
    }

    pub(super) fn sized_box(&self, node: &WidgetNode, frame: Frame, ctx: &mut GenerationContext<'_>) -> WidgetCall {
        let mut call = WidgetCall::new("SizedBox");
        dimensions(node, &mut call);
        self.single_child(node, frame, ctx, &mut call);
        call
    }

    /// Alignment is always emitted, defaulting to center.
    pub(super) fn align(&self, node: &WidgetNode, frame: Frame, ctx: &mut GenerationContext<'_>) -> WidgetCall {
        let mut call = WidgetCall::new("Align");
        call.arg("alignment", format_alignment(token(node, "alignment").unwrap_or("center")));
        factors(node, &mut call);
        self.single_child(node, frame, ctx, &mut call);
        call
    }

    /// Expanded requires a child; an empty one gets a zero-size box.
    pub(super) fn expanded(&self, node: &WidgetNode, frame: Frame, ctx: &mut GenerationContext<'_>) -> WidgetCall {
        let mut call = WidgetCall::new("Expanded");
        call.opt_arg("flex", node.property("flex").and_then(format_int));
        self.required_child(node, frame, ctx, &mut call);
        call
    }

    pub(super) fn flexible(&self, node: &WidgetNode, frame: Frame, ctx: &mut GenerationContext<'_>) -> WidgetCall {
        let mut call = WidgetCall::new("Flexible");
        call.opt_arg("flex", node.property("flex").and_then(format_int));
        call.opt_arg("fit", token(node, "fit").map(format_flex_fit));
        self.required_child(node, frame, ctx, &mut call);
        call
    }

    /// Order: left, top, right, bottom, width, height, child.
    pub(super) fn positioned(&self, node: &WidgetNode, frame: Frame, ctx: &mut GenerationContext<'_>) -> WidgetCall {
        let mut call = WidgetCall::new("Positioned");
        for key in ["left", "top", "right", "bottom"] {
            call.opt_arg(key, node.property(key).and_then(format_double_value));
        }
        dimensions(node, &mut call);
        self.required_child(node, frame, ctx, &mut call);
        call
    }

    fn required_child(&self, node: &WidgetNode, frame: Frame, ctx: &mut GenerationContext<'_>, call: &mut WidgetCall) {
        if node.children.is_empty() {
            call.arg("child", "SizedBox.shrink()");
        } else {
            self.single_child(node, frame, ctx, call);
        }
    }

    /// Order: color, shadowColor, elevation, margin, shape, child.
    pub(super) fn card(&self, node: &WidgetNode, frame: Frame, ctx: &mut GenerationContext<'_>) -> WidgetCall {
        let mut call = WidgetCall::new("Card");
        call.opt_arg("color", node.property("color").and_then(format_color));
        call.opt_arg("shadowColor", node.property("shadowColor").and_then(format_color));
        call.opt_arg("elevation", node.property("elevation").and_then(format_double_value));
        call.opt_arg("margin", node.property("margin").map(format_edge_insets));
        if let Some(radius) = node.property("borderRadius").and_then(number_of) {
            call.arg(
                "shape",
                format!(
                    "RoundedRectangleBorder(borderRadius: BorderRadius.all(Radius.circular({})))",
                    format_double(radius)
                ),
            );
        }
        self.single_child(node, frame, ctx, &mut call);
        call
    }
}

fn dimensions(node: &WidgetNode, call: &mut WidgetCall) {
    for key in ["width", "height"] {
        call.opt_arg(key, node.property(key).and_then(format_dimension));
    }
}

fn factors(node: &WidgetNode, call: &mut WidgetCall) {
    for key in ["widthFactor", "heightFactor"] {
        call.opt_arg(key, node.property(key).and_then(format_double_value));
    }
}

/// A Container cannot take both `color` and `decoration`, so a top-level
/// color or border radius is folded into the decoration when one is needed.
fn merged_decoration(node: &WidgetNode) -> Option<PropertyValue> {
    let decoration = node.property("decoration").and_then(PropertyValue::as_map);
    let radius = node.property("borderRadius");
    if decoration.is_none() && radius.is_none() {
        return None;
    }

    let mut merged = decoration.cloned().unwrap_or_default();
    if let Some(color) = node.property("color") {
        merged.entry("color".to_string()).or_insert_with(|| color.clone());
    }
    if let Some(radius) = radius {
        merged.entry("borderRadius".to_string()).or_insert_with(|| radius.clone());
    }
    Some(PropertyValue::Map(merged))
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
    fn test_container_property_order() {
        let node = WidgetNode::new("Container")
            .with_property("alignment", "center")
            .with_property("color", "#FF0000")
            .with_property("height", 50)
            .with_property("width", 100);
        assert_eq!(
            render(&node, CodeFormat::Expanded),
            "Container(\n  width: 100.0,\n  height: 50.0,\n  color: const Color(0xFFFF0000),\n  alignment: Alignment.center,\n)"
        );
    }

    #[test]
    fn test_container_folds_color_into_decoration() {
        let node = WidgetNode::new("Container")
            .with_property("color", "white")
            .with_property("borderRadius", 8);
        assert_eq!(
            render(&node, CodeFormat::Expanded),
            "Container(\n  decoration: BoxDecoration(\n    color: Colors.white,\n    borderRadius: BorderRadius.all(Radius.circular(8.0)),\n  ),\n)"
        );
    }

    #[test]
    fn test_padding_default() {
        let node = WidgetNode::new("Padding");
        assert_eq!(
            render(&node, CodeFormat::Compact),
            "const Padding(padding: const EdgeInsets.all(8.0))"
        );
    }

    #[test]
    fn test_align_always_has_alignment() {
        let node = WidgetNode::new("Align").with_child(WidgetNode::new("Icon"));
        assert_eq!(
            render(&node, CodeFormat::Compact),
            "const Align(alignment: Alignment.center, child: const Icon(Icons.help_outline))"
        );
    }

    #[test]
    fn test_expanded_without_child() {
        let node = WidgetNode::new("Expanded").with_property("flex", 2);
        assert_eq!(
            render(&node, CodeFormat::Compact),
            "const Expanded(flex: 2, child: SizedBox.shrink())"
        );
    }

    #[test]
    fn test_flexible_fit() {
        let node = WidgetNode::new("Flexible")
            .with_property("fit", "tight")
            .with_child(WidgetNode::new("Text").with_property("text", "x"));
        assert_eq!(
            render(&node, CodeFormat::Expanded),
            "const Flexible(\n  fit: FlexFit.tight,\n  child: const Text('x'),\n)"
        );
        assert_eq!(
            render(&WidgetNode::new("flexible"), CodeFormat::Compact),
            "const Flexible(child: SizedBox.shrink())"
        );
    }

    #[test]
    fn test_positioned_offsets() {
        let node = WidgetNode::new("Positioned")
            .with_property("height", 40)
            .with_property("top", 8)
            .with_property("left", "12")
            .with_child(WidgetNode::new("Icon").with_property("icon", "star"));
        assert_eq!(
            render(&node, CodeFormat::Expanded),
            "const Positioned(\n  left: 12.0,\n  top: 8.0,\n  height: 40.0,\n  child: const Icon(Icons.star),\n)"
        );
    }

    #[test]
    fn test_card_shape() {
        let node = WidgetNode::new("Card").with_property("borderRadius", 12);
        assert_eq!(
            render(&node, CodeFormat::Compact),
            "const Card(shape: RoundedRectangleBorder(borderRadius: BorderRadius.all(Radius.circular(12.0))))"
        );
    }
}
