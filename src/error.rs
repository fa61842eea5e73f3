//! Error types for icon resolution

use std::io;
use thiserror::Error;

/// Result type for icon resolution operations
pub type Result<T> = std::result::Result<T, IconResolveError>;

/// Errors raised while turning an identifier into a renderable icon.
///
/// None of these are fatal: the infallible entry points substitute the
/// fallback glyph, the `try_*` variants hand the reason back to the caller.
#[derive(Error, Debug)]
pub enum IconResolveError {
    /// Blank or whitespace-only identifier
    #[error("Empty icon identifier")]
    EmptyInput,

    /// Extracted prefix is not in the prefix table
    #[error("Unknown prefix '{prefix}' for icon '{identifier}'")]
    UnknownPrefix { prefix: String, identifier: String },

    /// The rendering backend could not produce a glyph
    #[error("Render failure: {0}")]
    Render(#[from] RenderError),

    /// An icon library bundle could not be loaded
    #[error("Failed to load icon bundle '{prefix}': {reason}")]
    BundleLoad { prefix: String, reason: String },

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// JSON (de)serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Configuration data failed validation
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Failures reported by an [`IconRenderer`](crate::render::IconRenderer).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RenderError {
    #[error("Identifier '{0}' is not in namespace:name form")]
    InvalidIdentifier(String),

    #[error("No icon set loaded for namespace '{0}'")]
    UnknownNamespace(String),

    #[error("Icon '{name}' not found in namespace '{namespace}'")]
    IconNotFound { namespace: String, name: String },
}
