//! Options controlling the shape of generated code.

use crate::error::{CodegenError, Result};
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

/// Largest accepted indentation width.
pub const MAX_INDENT_SIZE: usize = 8;

/// Layout of argument lists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CodeFormat {
    /// Short argument lists are joined on one line.
    Compact,
    /// One argument per line.
    #[default]
    Expanded,
}

/// Options for one generation call.
///
/// Field names serialize in camelCase to match the builder's request body.
/// Missing fields take their defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GenerationOptions {
    pub include_imports: bool,
    pub include_comments: bool,
    /// Spaces per indentation level.
    pub indent_size: usize,
    pub use_const_constructors: bool,
    /// Class name used when wrapping the tree in a widget class.
    pub widget_name: String,
    pub is_stateful: bool,
    /// Emit `key: const Key('<id>')` for nodes with an id.
    pub include_keys: bool,
    pub format: CodeFormat,
    pub wrap_in_class: bool,
    pub include_statistics: bool,
}

impl Default for GenerationOptions {
    fn default() -> Self {
        Self {
            include_imports: true,
            include_comments: true,
            indent_size: 2,
            use_const_constructors: true,
            widget_name: "MyWidget".to_string(),
            is_stateful: false,
            include_keys: false,
            format: CodeFormat::Expanded,
            wrap_in_class: true,
            include_statistics: true,
        }
    }
}

impl GenerationOptions {
    /// Parse options from the builder's JSON form.
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Reject option combinations that cannot produce valid code.
    pub fn validate(&self) -> Result<()> {
        if self.indent_size == 0 || self.indent_size > MAX_INDENT_SIZE {
            return Err(CodegenError::InvalidOption {
                option: "indentSize",
                reason: format!(
                    "must be between 1 and {}, got {}",
                    MAX_INDENT_SIZE, self.indent_size
                ),
            });
        }

        if self.wrap_in_class && !is_dart_identifier(&self.widget_name) {
            return Err(CodegenError::InvalidOption {
                option: "widgetName",
                reason: format!("'{}' is not a valid Dart class name", self.widget_name),
            });
        }

        Ok(())
    }
}

static DART_IDENTIFIER_RE: LazyLock<regex::Regex> =
    LazyLock::new(|| regex::Regex::new(r"^[A-Za-z_$][A-Za-z0-9_$]*$").expect("Invalid identifier regex"));

/// Check a string against Dart's identifier grammar.
pub fn is_dart_identifier(name: &str) -> bool {
    DART_IDENTIFIER_RE.is_match(name)
}
