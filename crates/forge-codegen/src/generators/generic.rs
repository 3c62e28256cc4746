//! Registry-driven strategy for widget types without a hand-written one.

use super::{CodeGenerator, Frame, GenerationContext, WidgetCall};
use crate::const_eval::{generic_constructor, is_dynamic_property};
use crate::format::{format_property_value, format_string_value, is_value_key};
use crate::options::is_dart_identifier;
use forge_core::{MappingEntry, WidgetNode};
use regex::Regex;
use std::collections::HashSet;
use std::sync::LazyLock;
use tracing::{debug, warn};

/// A rendered template that starts with `name:` is a named argument.
static NAMED_ARG_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*([A-Za-z_$][A-Za-z0-9_$]*)\s*:").expect("Invalid named argument regex"));

impl CodeGenerator<'_> {
    /// The target name comes from the registry entry, or is the node type
    /// verbatim when there is none.
    ///
    /// Each non-null property is formatted by name. A property with a
    /// registry template is substituted into it and lands as a named
    /// argument when the result reads `name: ...`, otherwise as the
    /// positional argument. Properties without a template are emitted as
    /// `key: value`.
    pub(super) fn generic(&self, node: &WidgetNode, frame: Frame, ctx: &mut GenerationContext<'_>) -> WidgetCall {
        let entry = self.registry.lookup(&node.widget_type);
        if entry.is_none() {
            debug!(widget_type = %node.widget_type, "no mapping for widget type, passing it through");
        }

        let mut call = WidgetCall::new(generic_constructor(node, self.registry));
        let mut seen = HashSet::new();
        for (key, value) in &node.properties {
            if value.is_null() {
                continue;
            }
            let level = frame.arg_level();

            let embedded = if is_value_key(key) {
                None
            } else {
                self.embedded_value(value, level, ctx)
            };
            let argument = if let Some(rendered) = embedded {
                call.children_const &= rendered.const_eligible;
                Argument::named(key, &rendered.code)
            } else {
                let formatted = if is_dynamic_property(key) && key.starts_with("on") {
                    "() {}".to_string()
                } else {
                    format_property_value(key, value, &ctx.layout, level).unwrap_or_else(|| format_string_value(value))
                };
                match entry.and_then(|entry| entry.template(key)) {
                    Some(template) => self.templated(template, &formatted),
                    None if is_dart_identifier(key) => Argument::named(key, &formatted),
                    None => {
                        debug!(widget_type = %node.widget_type, property = %key, "skipping property that is not an identifier");
                        continue;
                    }
                }
            };

            match argument {
                Argument::Named { name, fragment } => {
                    if seen.insert(name.clone()) {
                        call.args.push(fragment);
                    } else {
                        warn!(widget_type = %node.widget_type, argument = %name, "duplicate argument dropped");
                    }
                }
                Argument::Positional(code) => {
                    if call.positional.is_some() {
                        warn!(widget_type = %node.widget_type, property = %key, "second positional argument dropped");
                    } else {
                        call.positional(code);
                    }
                }
            }
        }

        if children_allowed(entry) {
            match node.children.as_slice() {
                [] => {}
                [_] => self.single_child(node, frame, ctx, &mut call),
                _ => self.multi_children(node, frame, ctx, &mut call),
            }
        } else if !node.children.is_empty() {
            call.children_const &= self.drop_children(node, frame, ctx);
        }
        call
    }

    fn templated(&self, template: &str, formatted: &str) -> Argument {
        let rendered = self.templates.render_property(template, formatted);
        let name = NAMED_ARG_RE
            .captures(&rendered)
            .and_then(|captures| captures.get(1))
            .map(|name| name.as_str().to_string());
        match name {
            Some(name) => Argument::Named {
                name,
                fragment: rendered.trim().to_string(),
            },
            None => Argument::Positional(rendered),
        }
    }
}

enum Argument {
    /// A `name: value` fragment.
    Named { name: String, fragment: String },
    Positional(String),
}

impl Argument {
    fn named(name: &str, value: &str) -> Self {
        Argument::Named {
            name: name.to_string(),
            fragment: format!("{}: {}", name, value),
        }
    }
}

fn children_allowed(entry: Option<&MappingEntry>) -> bool {
    entry.map_or(true, |entry| entry.can_have_children)
}
