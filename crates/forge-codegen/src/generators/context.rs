use crate::assembler::BASE_IMPORT;
use crate::const_eval::is_const_eligible;
use crate::layout::Layout;
use crate::options::GenerationOptions;
use crate::stats::Statistics;
use forge_core::{WidgetMapping, WidgetNode};
use std::collections::BTreeSet;

/// Accumulators for one generation call.
///
/// Created fresh by every [`CodeGenerator::generate`](super::CodeGenerator::generate)
/// call, so generations never share state.
pub(crate) struct GenerationContext<'o> {
    pub options: &'o GenerationOptions,
    pub registry: &'o dyn WidgetMapping,
    pub layout: Layout,
    imports: BTreeSet<String>,
    stats: Statistics,
    /// Nesting count of property-embedded widget rendering.
    detached: usize,
}

impl<'o> GenerationContext<'o> {
    pub fn new(options: &'o GenerationOptions, registry: &'o dyn WidgetMapping) -> Self {
        let mut imports = BTreeSet::new();
        imports.insert(BASE_IMPORT.to_string());
        Self {
            options,
            registry,
            layout: Layout::from_options(options),
            imports,
            stats: Statistics::default(),
            detached: 0,
        }
    }

    pub fn use_const(&self) -> bool {
        self.options.use_const_constructors
    }

    pub fn add_import(&mut self, uri: &str) {
        if !self.imports.contains(uri) {
            self.imports.insert(uri.to_string());
        }
    }

    /// Record a rendered tree node. Embedded widgets are not tree nodes and
    /// are skipped.
    pub fn record(&mut self, node: &WidgetNode, depth: usize, const_eligible: bool) {
        if self.detached == 0 {
            self.stats.record(node, depth, const_eligible);
        }
    }

    /// Account for children that produce no code. Returns whether they are
    /// all const eligible.
    pub fn record_unrendered(&mut self, children: &[WidgetNode], depth: usize) -> bool {
        let use_const = self.use_const();
        let mut eligible = true;
        for child in children {
            eligible &= if self.detached == 0 {
                self.stats.record_subtree(child, depth, use_const, self.registry)
            } else {
                is_const_eligible(child, use_const, self.registry)
            };
        }
        eligible
    }

    /// Run `render` with statistics recording suspended.
    pub fn detached<R>(&mut self, render: impl FnOnce(&mut Self) -> R) -> R {
        self.detached += 1;
        let result = render(self);
        self.detached -= 1;
        result
    }

    pub fn into_parts(self) -> (BTreeSet<String>, Statistics) {
        (self.imports, self.stats)
    }
}
