//! Per-kind widget generation strategies.
//!
//! [`CodeGenerator`] dispatches each node on its [`WidgetKind`] to a
//! hand-written strategy, or to the registry-driven generic strategy. Every
//! strategy describes a constructor call as a [`WidgetCall`]; keys, the
//! `const` prefix, layout and statistics are applied in one place.

mod containers;
mod content;
mod context;
mod flex;
mod generic;
mod input;
mod scaffold;

pub(crate) use context::GenerationContext;

use crate::assembler::{CodeAssembler, CLASS_BODY_LEVEL};
use crate::const_eval::node_allows_const;
use crate::error::Result;
use crate::format::format_string;
use crate::kind::{Cardinality, WidgetKind};
use crate::options::GenerationOptions;
use crate::stats::Statistics;
use crate::templates::TemplateEngine;
use convert_case::{Case, Casing};
use forge_core::{PropertyValue, WidgetMapping, WidgetNode};
use serde::Serialize;
use tracing::{debug, trace, warn};

/// Result of one generation call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedOutput {
    pub code: String,
    /// Number of `\n`-separated lines in `code`.
    pub line_count: usize,
    pub widget_count: usize,
    pub max_depth: usize,
    /// Import URIs, sorted and deduplicated.
    pub imports: Vec<String>,
    /// Present when `includeStatistics` is set.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub statistics: Option<Statistics>,
}

/// Position of a node being rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Frame {
    /// Tree depth in edges, for statistics.
    pub depth: usize,
    /// Indentation level of the line the expression starts on.
    pub level: usize,
}

impl Frame {
    pub fn root(level: usize) -> Self {
        Self { depth: 0, level }
    }

    /// Frame for a child placed as a named argument.
    pub fn child(self) -> Self {
        Self {
            depth: self.depth + 1,
            level: self.level + 1,
        }
    }

    /// Frame for a child placed inside a list argument.
    pub fn list_item(self) -> Self {
        Self {
            depth: self.depth + 1,
            level: self.level + 2,
        }
    }

    /// Level of this node's own arguments.
    pub fn arg_level(self) -> usize {
        self.level + 1
    }
}

/// A rendered expression and its const eligibility.
#[derive(Debug, Clone)]
pub(crate) struct Rendered {
    pub code: String,
    pub const_eligible: bool,
}

/// A constructor call described by a strategy.
#[derive(Debug, Clone)]
pub(crate) struct WidgetCall {
    pub constructor: String,
    pub positional: Option<String>,
    pub args: Vec<String>,
    /// Whether every child subtree is const eligible.
    pub children_const: bool,
}

impl WidgetCall {
    pub fn new(constructor: impl Into<String>) -> Self {
        Self {
            constructor: constructor.into(),
            positional: None,
            args: Vec::new(),
            children_const: true,
        }
    }

    pub fn positional(&mut self, value: impl Into<String>) {
        self.positional = Some(value.into());
    }

    pub fn arg(&mut self, name: &str, value: impl AsRef<str>) {
        self.args.push(format!("{}: {}", name, value.as_ref()));
    }

    pub fn opt_arg<V: AsRef<str>>(&mut self, name: &str, value: Option<V>) {
        if let Some(value) = value {
            self.arg(name, value);
        }
    }

    /// Add a rendered child under `name`.
    pub fn child(&mut self, name: &str, rendered: Rendered) {
        self.children_const &= rendered.const_eligible;
        self.arg(name, rendered.code);
    }
}

/// String value of a non-null property.
pub(crate) fn token<'n>(node: &'n WidgetNode, key: &str) -> Option<&'n str> {
    node.property(key).and_then(PropertyValue::as_str)
}

/// Camel-cased Dart identifier from free text. Characters outside
/// `[A-Za-z0-9_]` are dropped and `prefix` is prepended when the result would
/// be empty or start with a digit.
pub(crate) fn dart_identifier(source: &str, prefix: &str) -> String {
    let ident: String = source
        .to_case(Case::Camel)
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || *c == '_')
        .collect();
    match ident.chars().next() {
        Some(first) if !first.is_ascii_digit() => ident,
        _ => format!("{}{}", prefix, ident),
    }
}

/// Widget code generator over a mapping registry.
///
/// The generator holds no per-call state; one instance can serve any number
/// of [`generate`](Self::generate) calls.
pub struct CodeGenerator<'r> {
    registry: &'r dyn WidgetMapping,
    templates: TemplateEngine<'static>,
}

impl<'r> CodeGenerator<'r> {
    pub fn new(registry: &'r dyn WidgetMapping) -> Self {
        Self {
            registry,
            templates: TemplateEngine::new(),
        }
    }

    /// Generate code for a widget tree.
    ///
    /// Fails only when `options` is unusable; tree data never causes an
    /// error.
    pub fn generate(&self, root: &WidgetNode, options: &GenerationOptions) -> Result<GeneratedOutput> {
        options.validate()?;

        let mut ctx = GenerationContext::new(options, self.registry);
        let level = if options.wrap_in_class { CLASS_BODY_LEVEL } else { 0 };
        let rendered = self.render_node(root, Frame::root(level), &mut ctx);
        let (imports, stats) = ctx.into_parts();

        let code = CodeAssembler::new(options).assemble(&rendered.code, &imports);
        let line_count = code.split('\n').count();

        debug!(
            root = %root.widget_type,
            widgets = stats.total_widgets,
            depth = stats.max_depth,
            lines = line_count,
            "generated widget code"
        );

        Ok(GeneratedOutput {
            code,
            line_count,
            widget_count: stats.total_widgets,
            max_depth: stats.max_depth,
            imports: imports.into_iter().collect(),
            statistics: options.include_statistics.then_some(stats),
        })
    }

    pub(crate) fn render_node(&self, node: &WidgetNode, frame: Frame, ctx: &mut GenerationContext<'_>) -> Rendered {
        let kind = WidgetKind::of(node);
        trace!(widget_type = %node.widget_type, ?kind, depth = frame.depth, "rendering node");

        if let Some(entry) = self.registry.lookup(&node.widget_type) {
            for uri in &entry.extra_imports {
                ctx.add_import(uri);
            }
        }

        let mut call = match kind {
            WidgetKind::Scaffold => self.scaffold(node, frame, ctx),
            WidgetKind::AppBar => self.app_bar(node, frame, ctx),
            WidgetKind::Container => self.container(node, frame, ctx),
            WidgetKind::Padding => self.padding(node, frame, ctx),
            WidgetKind::Center => self.center(node, frame, ctx),
            WidgetKind::SizedBox => self.sized_box(node, frame, ctx),
            WidgetKind::Align => self.align(node, frame, ctx),
            WidgetKind::Expanded => self.expanded(node, frame, ctx),
            WidgetKind::Flexible => self.flexible(node, frame, ctx),
            WidgetKind::Positioned => self.positioned(node, frame, ctx),
            WidgetKind::Card => self.card(node, frame, ctx),
            WidgetKind::Column => self.flex(node, "Column", frame, ctx),
            WidgetKind::Row => self.flex(node, "Row", frame, ctx),
            WidgetKind::Stack => self.stack(node, frame, ctx),
            WidgetKind::ListView => self.list_view(node, frame, ctx),
            WidgetKind::GridView => self.grid_view(node, frame, ctx),
            WidgetKind::Wrap => self.wrap(node, frame, ctx),
            WidgetKind::Text => self.text(node, frame, ctx),
            WidgetKind::Icon => self.icon(node, frame, ctx),
            WidgetKind::Image => self.image(node, frame, ctx),
            WidgetKind::Divider => self.divider(node, frame, ctx),
            WidgetKind::ListTile => self.list_tile(node, frame, ctx),
            WidgetKind::Button => self.button(node, frame, ctx),
            WidgetKind::ElevatedButton => self.material_button(node, "ElevatedButton", frame, ctx),
            WidgetKind::TextButton => self.material_button(node, "TextButton", frame, ctx),
            WidgetKind::OutlinedButton => self.material_button(node, "OutlinedButton", frame, ctx),
            WidgetKind::IconButton => self.icon_button(node, frame, ctx),
            WidgetKind::TextField => self.text_field(node, frame, ctx),
            WidgetKind::Checkbox => self.toggle(node, "Checkbox", frame, ctx),
            WidgetKind::Switch => self.toggle(node, "Switch", frame, ctx),
            WidgetKind::Radio => self.radio(node, frame, ctx),
            WidgetKind::Slider => self.slider(node, frame, ctx),
            WidgetKind::Generic => self.generic(node, frame, ctx),
        };

        if kind.cardinality() == Cardinality::Leaf && !node.children.is_empty() {
            call.children_const &= self.drop_children(node, frame, ctx);
        }

        self.finish(node, call, frame, ctx)
    }

    /// Apply the key, the const prefix and the layout, and record the node.
    fn finish(&self, node: &WidgetNode, call: WidgetCall, frame: Frame, ctx: &mut GenerationContext<'_>) -> Rendered {
        let eligible = ctx.use_const() && call.children_const && node_allows_const(node, self.registry);

        let mut args = Vec::with_capacity(call.args.len() + 1);
        if ctx.options.include_keys {
            if let Some(id) = node.id.as_deref().filter(|id| !id.is_empty()) {
                args.push(format!("key: const Key({})", format_string(id)));
            }
        }
        args.extend(call.args);

        let code = ctx
            .layout
            .call_with(&call.constructor, call.positional.as_deref(), &args, frame.level);
        ctx.record(node, frame.depth, eligible);

        Rendered {
            code: if eligible { format!("const {}", code) } else { code },
            const_eligible: eligible,
        }
    }

    /// Children of a widget that cannot hold them still count toward the
    /// tree's statistics, but produce no code.
    fn drop_children(&self, node: &WidgetNode, frame: Frame, ctx: &mut GenerationContext<'_>) -> bool {
        warn!(
            widget_type = %node.widget_type,
            dropped = node.children.len(),
            "widget cannot have children, omitting them from the output"
        );
        ctx.record_unrendered(&node.children, frame.depth + 1)
    }

    /// Fill the `child:` slot of a single-child widget. Several children
    /// are wrapped in a Column that is not itself a tree node.
    fn single_child(&self, node: &WidgetNode, frame: Frame, ctx: &mut GenerationContext<'_>, call: &mut WidgetCall) {
        self.child_slot("child", &node.children, frame, ctx, call);
    }

    fn child_slot(
        &self,
        name: &str,
        children: &[WidgetNode],
        frame: Frame,
        ctx: &mut GenerationContext<'_>,
        call: &mut WidgetCall,
    ) {
        match children {
            [] => {}
            [only] => {
                let rendered = self.render_node(only, frame.child(), ctx);
                call.child(name, rendered);
            }
            many => {
                let rendered = self.implicit_column(many, frame, ctx);
                call.child(name, rendered);
            }
        }
    }

    fn implicit_column(&self, children: &[WidgetNode], frame: Frame, ctx: &mut GenerationContext<'_>) -> Rendered {
        let column_level = frame.arg_level();
        let items = Frame {
            depth: frame.depth + 1,
            level: column_level + 2,
        };
        let (list, all_const) = self.render_list(children, items, column_level + 1, ctx);
        let eligible = ctx.use_const() && all_const;
        let code = ctx
            .layout
            .call("Column", &[format!("children: {}", list)], column_level);

        Rendered {
            code: if eligible { format!("const {}", code) } else { code },
            const_eligible: eligible,
        }
    }

    /// Fill the `children:` slot of a multi-child widget.
    fn multi_children(&self, node: &WidgetNode, frame: Frame, ctx: &mut GenerationContext<'_>, call: &mut WidgetCall) {
        if node.children.is_empty() {
            call.arg("children", "const <Widget>[]");
            return;
        }
        let (list, all_const) = self.render_list(&node.children, frame.list_item(), frame.arg_level(), ctx);
        call.children_const &= all_const;
        call.arg("children", list);
    }

    fn render_list(
        &self,
        children: &[WidgetNode],
        items: Frame,
        list_level: usize,
        ctx: &mut GenerationContext<'_>,
    ) -> (String, bool) {
        let mut all_const = true;
        let codes: Vec<String> = children
            .iter()
            .map(|child| {
                let rendered = self.render_node(child, items, ctx);
                all_const &= rendered.const_eligible;
                rendered.code
            })
            .collect();
        (ctx.layout.list(None, &codes, list_level), all_const)
    }

    /// Render a widget held in a property value rather than in `children`.
    fn embedded(&self, widget: &WidgetNode, level: usize, ctx: &mut GenerationContext<'_>) -> Rendered {
        ctx.detached(|ctx| self.render_node(widget, Frame::root(level), ctx))
    }

    /// Render a property holding a widget or a list of widgets.
    fn embedded_value(&self, value: &PropertyValue, level: usize, ctx: &mut GenerationContext<'_>) -> Option<Rendered> {
        match value {
            PropertyValue::List(items) => {
                let widgets: Vec<WidgetNode> = items.iter().filter_map(PropertyValue::as_widget).collect();
                if widgets.is_empty() {
                    return None;
                }
                let mut all_const = true;
                let codes: Vec<String> = widgets
                    .iter()
                    .map(|widget| {
                        let rendered = self.embedded(widget, level + 1, ctx);
                        all_const &= rendered.const_eligible;
                        rendered.code
                    })
                    .collect();
                Some(Rendered {
                    code: ctx.layout.list(None, &codes, level),
                    const_eligible: all_const,
                })
            }
            other => other.as_widget().map(|widget| self.embedded(&widget, level, ctx)),
        }
    }
}
