//! Core types for the Forge widget code generator.
//!
//! This crate holds the pieces shared by every consumer of a builder
//! document:
//! - [`WidgetNode`] and [`PropertyValue`], the widget tree model
//! - the [`WidgetMapping`] registry boundary and the in-memory [`MappingTable`]
//! - error types
//!
//! Enable the `serde` feature to decode trees and registries from JSON.

pub mod errors;
pub mod node;
pub mod registry;

pub use errors::{CoreError, Result};
pub use node::{normalize_type, PropertyValue, WidgetNode, DEFAULT_WIDGET_TYPE};
pub use registry::{
    normalize_import, MappingEntry, MappingTable, NoMappings, WidgetMapping, MATERIAL_IMPORT,
    VALUE_PLACEHOLDER,
};
