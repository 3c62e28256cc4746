//! Multi-child layout widgets.

use super::{token, CodeGenerator, Frame, GenerationContext, WidgetCall};
use crate::format::{
    format_alignment, format_axis, format_bool, format_cross_axis_alignment, format_double_value, format_edge_insets,
    format_int, format_main_axis_alignment, format_main_axis_size, format_scroll_physics, format_stack_fit,
    format_wrap_alignment,
};
use forge_core::WidgetNode;
use tracing::debug;

const DEFAULT_GRID_COLUMNS: u32 = 2;

impl CodeGenerator<'_> {
    /// Column and Row. Alignments are emitted only when set.
    pub(super) fn flex(
        &self,
        node: &WidgetNode,
        constructor: &str,
        frame: Frame,
        ctx: &mut GenerationContext<'_>,
    ) -> WidgetCall {
        let mut call = WidgetCall::new(constructor);
        call.opt_arg(
            "mainAxisAlignment",
            token(node, "mainAxisAlignment").map(format_main_axis_alignment),
        );
        call.opt_arg(
            "crossAxisAlignment",
            token(node, "crossAxisAlignment").map(format_cross_axis_alignment),
        );
        call.opt_arg("mainAxisSize", token(node, "mainAxisSize").map(format_main_axis_size));
        self.multi_children(node, frame, ctx, &mut call);
        call
    }

    pub(super) fn stack(&self, node: &WidgetNode, frame: Frame, ctx: &mut GenerationContext<'_>) -> WidgetCall {
        let mut call = WidgetCall::new("Stack");
        call.opt_arg("alignment", token(node, "alignment").map(format_alignment));
        call.opt_arg("fit", token(node, "fit").map(format_stack_fit));
        self.multi_children(node, frame, ctx, &mut call);
        call
    }

    /// A ListView with `itemCount` and no children becomes `ListView.builder`
    /// with a placeholder item builder. With children, `itemCount` is
    /// ignored.
    pub(super) fn list_view(&self, node: &WidgetNode, frame: Frame, ctx: &mut GenerationContext<'_>) -> WidgetCall {
        let item_count = node.property("itemCount").and_then(format_int);
        let builder = item_count.is_some() && node.children.is_empty();
        if item_count.is_some() && !builder {
            debug!(widget_type = %node.widget_type, "itemCount ignored for a ListView with children");
        }

        let mut call = WidgetCall::new(if builder { "ListView.builder" } else { "ListView" });
        call.opt_arg("scrollDirection", token(node, "scrollDirection").map(format_axis));
        call.opt_arg("padding", node.property("padding").map(format_edge_insets));
        call.opt_arg("shrinkWrap", node.property("shrinkWrap").and_then(format_bool));
        call.opt_arg("physics", token(node, "physics").map(format_scroll_physics));

        match item_count {
            Some(count) if builder => {
                call.arg("itemCount", count);
                call.arg("itemBuilder", "(context, index) => const SizedBox.shrink()");
            }
            _ => self.multi_children(node, frame, ctx, &mut call),
        }
        call
    }

    /// A fixed-column grid. `crossAxisCount` defaults to 2; spacing and
    /// aspect ratio go to the grid delegate.
    ///
    /// Order: gridDelegate, scrollDirection, padding, shrinkWrap, physics,
    /// children.
    pub(super) fn grid_view(&self, node: &WidgetNode, frame: Frame, ctx: &mut GenerationContext<'_>) -> WidgetCall {
        let level = frame.arg_level();
        let mut delegate = vec![format!(
            "crossAxisCount: {}",
            node.property("crossAxisCount")
                .and_then(format_int)
                .unwrap_or_else(|| DEFAULT_GRID_COLUMNS.to_string())
        )];
        for key in ["mainAxisSpacing", "crossAxisSpacing", "childAspectRatio"] {
            if let Some(value) = node.property(key).and_then(format_double_value) {
                delegate.push(format!("{}: {}", key, value));
            }
        }

        let mut call = WidgetCall::new("GridView");
        call.arg(
            "gridDelegate",
            ctx.layout
                .call("SliverGridDelegateWithFixedCrossAxisCount", &delegate, level),
        );
        call.opt_arg("scrollDirection", token(node, "scrollDirection").map(format_axis));
        call.opt_arg("padding", node.property("padding").map(format_edge_insets));
        call.opt_arg("shrinkWrap", node.property("shrinkWrap").and_then(format_bool));
        call.opt_arg("physics", token(node, "physics").map(format_scroll_physics));
        self.multi_children(node, frame, ctx, &mut call);
        call
    }

    /// Order: direction, alignment, spacing, runSpacing, children.
    pub(super) fn wrap(&self, node: &WidgetNode, frame: Frame, ctx: &mut GenerationContext<'_>) -> WidgetCall {
        let mut call = WidgetCall::new("Wrap");
        call.opt_arg("direction", token(node, "direction").map(format_axis));
        call.opt_arg("alignment", token(node, "alignment").map(format_wrap_alignment));
        for key in ["spacing", "runSpacing"] {
            call.opt_arg(key, node.property(key).and_then(format_double_value));
        }
        self.multi_children(node, frame, ctx, &mut call);
        call
    }
}
