//! Error types for code generation.

use forge_core::CoreError;
use thiserror::Error;

/// Result type alias for codegen operations.
pub type Result<T> = std::result::Result<T, CodegenError>;

/// Errors that can occur during code generation.
///
/// Widget tree data never produces one of these: malformed nodes degrade to
/// defaults. Only caller misuse (bad options) and configuration loading fail.
#[derive(Error, Debug)]
pub enum CodegenError {
    /// Generation option with an unusable value.
    #[error("Invalid option '{option}': {reason}")]
    InvalidOption {
        option: &'static str,
        reason: String,
    },

    /// Template rendering error.
    #[error("Template error: {0}")]
    Template(#[from] handlebars::RenderError),

    /// Registry or document error.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
