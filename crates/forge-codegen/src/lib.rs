//! Flutter source generation from visual-builder widget trees.
//!
//! A builder document is a tree of [`WidgetNode`]s. This crate turns it into
//! Dart source: each node kind has a generation strategy, property values are
//! formatted into Flutter literals, subtrees that are compile-time constants
//! get a `const` prefix, and the result is wrapped with imports and an
//! optional widget class.
//!
//! Widget types without a strategy are resolved through a [`WidgetMapping`]
//! registry, or passed through verbatim.
//!
//! # Example
//!
//! ```ignore
//! use forge_codegen::{generate, GenerationOptions};
//! use forge_core::{MappingTable, WidgetNode};
//!
//! let tree = WidgetNode::from_json_str(r#"{"type": "text", "properties": {"text": "Hi"}}"#)?;
//! let output = generate(&tree, &GenerationOptions::default(), &MappingTable::with_defaults())?;
//! println!("{}", output.code);
//! ```

pub mod assembler;
pub mod config;
pub mod const_eval;
pub mod error;
pub mod format;
pub mod generators;
pub mod kind;
pub mod layout;
pub mod options;
pub mod stats;
pub mod templates;
pub mod validate;

pub use assembler::{CodeAssembler, BASE_IMPORT};
pub use config::{load_from_path, load_from_str, GeneratorConfig, MappingRecord};
pub use error::{CodegenError, Result};
pub use generators::{CodeGenerator, GeneratedOutput};
pub use options::{CodeFormat, GenerationOptions};
pub use stats::{Statistics, StatisticsCollector};
pub use validate::{validate, ValidationIssue, ValidationReport};

use forge_core::{WidgetMapping, WidgetNode};

/// Generate Flutter code for a widget tree.
pub fn generate(tree: &WidgetNode, options: &GenerationOptions, registry: &dyn WidgetMapping) -> Result<GeneratedOutput> {
    CodeGenerator::new(registry).generate(tree, options)
}

/// Generate Flutter code straight from builder JSON.
///
/// The JSON is converted leniently: a missing type becomes `Container` and
/// non-object children become empty containers.
pub fn generate_json(
    tree: &serde_json::Value,
    options: &GenerationOptions,
    registry: &dyn WidgetMapping,
) -> Result<GeneratedOutput> {
    generate(&WidgetNode::from_value(tree), options, registry)
}
