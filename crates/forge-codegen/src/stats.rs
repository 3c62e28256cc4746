//! Tree statistics.

use crate::const_eval::node_allows_const;
use crate::options::GenerationOptions;
use forge_core::{WidgetMapping, WidgetNode};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Counts and feature flags gathered over one traversal.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Statistics {
    pub total_widgets: usize,
    /// Longest root-to-leaf path, in edges.
    pub max_depth: usize,
    /// Keyed by the type string as authored.
    pub widget_type_counts: BTreeMap<String, usize>,
    pub property_usage_counts: BTreeMap<String, usize>,
    pub const_eligible_count: usize,
    pub has_navigation: bool,
    pub has_forms: bool,
    pub has_animations: bool,
}

impl Statistics {
    /// Record one node found at `depth`.
    pub fn record(&mut self, node: &WidgetNode, depth: usize, const_eligible: bool) {
        self.total_widgets += 1;
        self.max_depth = self.max_depth.max(depth);
        *self.widget_type_counts.entry(node.widget_type.clone()).or_default() += 1;
        for key in node.properties.keys() {
            *self.property_usage_counts.entry(key.clone()).or_default() += 1;
        }
        if const_eligible {
            self.const_eligible_count += 1;
        }

        let kind = node.normalized_type();
        if kind.ends_with("button") || kind == "gesturedetector" || kind.starts_with("ink") {
            self.has_navigation = true;
        }
        if matches!(kind.as_str(), "textfield" | "textformfield" | "form") {
            self.has_forms = true;
        }
        if kind.starts_with("animated") {
            self.has_animations = true;
        }
    }

    /// Record a whole subtree rooted at `depth`. Returns the subtree's const
    /// eligibility.
    pub(crate) fn record_subtree(
        &mut self,
        node: &WidgetNode,
        depth: usize,
        use_const: bool,
        registry: &dyn WidgetMapping,
    ) -> bool {
        let mut children_eligible = true;
        for child in &node.children {
            children_eligible &= self.record_subtree(child, depth + 1, use_const, registry);
        }
        let eligible = use_const && node_allows_const(node, registry) && children_eligible;
        self.record(node, depth, eligible);
        eligible
    }
}

/// Statistics as an independent pass over a tree.
///
/// Produces the same record the generator collects while emitting code,
/// given the same options and registry.
pub struct StatisticsCollector<'r> {
    use_const: bool,
    registry: &'r dyn WidgetMapping,
    stats: Statistics,
}

impl<'r> StatisticsCollector<'r> {
    pub fn new(options: &GenerationOptions, registry: &'r dyn WidgetMapping) -> Self {
        Self {
            use_const: options.use_const_constructors,
            registry,
            stats: Statistics::default(),
        }
    }

    /// Collect statistics for a whole tree.
    pub fn collect(root: &WidgetNode, options: &GenerationOptions, registry: &dyn WidgetMapping) -> Statistics {
        let mut collector = StatisticsCollector::new(options, registry);
        collector.visit(root);
        collector.finish()
    }

    /// Add a tree rooted at depth zero.
    pub fn visit(&mut self, root: &WidgetNode) {
        self.stats.record_subtree(root, 0, self.use_const, self.registry);
    }

    pub fn finish(self) -> Statistics {
        self.stats
    }
}
