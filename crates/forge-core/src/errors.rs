//! Error types for the widget model and registry.

use thiserror::Error;

/// Result type alias for core operations.
pub type Result<T> = std::result::Result<T, CoreError>;

/// Errors raised while building registries or decoding builder documents.
///
/// Malformed widget trees are not errors; they degrade to defaults.
#[derive(Debug, Error)]
pub enum CoreError {
    /// A mapping entry violates the registry's invariants.
    #[error("Invalid mapping for '{ui_type}': {reason}")]
    InvalidMapping { ui_type: String, reason: String },

    /// The document is not valid JSON.
    #[cfg(feature = "serde")]
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
