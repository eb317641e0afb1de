//! Error types for tofukit operations.
//!
//! This module defines [`TofukitError`], the primary error type used throughout
//! the crate, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Validation, resolution and format errors abort the operation on the
//!   resource that raised them and are reported to the caller
//! - I/O failures while writing a project document are logged by the session
//!   and do not fail the project's own lifecycle operation
//! - Use `anyhow::Error` (via `TofukitError::Other`) for unexpected errors

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for tofukit operations.
#[derive(Debug, Error)]
pub enum TofukitError {
    /// A kit, requirement or project has the wrong shape.
    #[error("Invalid {resource}: {message}")]
    Validation { resource: String, message: String },

    /// A kit reference could not be resolved against the registry.
    #[error("Kit '{reference}' required by '{required_by}' is not declared")]
    NotFound {
        reference: String,
        required_by: String,
    },

    /// Closure traversal reached a kit that is still being visited.
    #[error("Circular kit dependency detected: {path}")]
    DependencyCycle { path: String },

    /// The requested output encoding is not implemented.
    #[error("Unsupported output format '{format}' (expected json, yaml or markdown)")]
    UnsupportedFormat { format: String },

    /// A document could not be encoded.
    #[error("Failed to render {format} document: {message}")]
    Serialization { format: String, message: String },

    /// Manifest file not found at expected location.
    #[error("Manifest not found: {path}")]
    ManifestNotFound { path: PathBuf },

    /// Failed to parse manifest file.
    #[error("Failed to parse manifest at {path}: {message}")]
    ManifestParse { path: PathBuf, message: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl TofukitError {
    /// Shorthand for a [`TofukitError::Validation`].
    pub fn validation(resource: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Validation {
            resource: resource.into(),
            message: message.into(),
        }
    }
}

/// Result type alias for tofukit operations.
pub type Result<T> = std::result::Result<T, TofukitError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_displays_resource_and_message() {
        let err = TofukitError::validation("kit 'language.python'", "unknown field `colour`");
        let msg = err.to_string();
        assert!(msg.contains("language.python"));
        assert!(msg.contains("unknown field"));
    }

    #[test]
    fn not_found_displays_reference_and_requirer() {
        let err = TofukitError::NotFound {
            reference: "tool.uv".into(),
            required_by: "language.python".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("tool.uv"));
        assert!(msg.contains("language.python"));
    }

    #[test]
    fn dependency_cycle_displays_path() {
        let err = TofukitError::DependencyCycle {
            path: "tool.a -> tool.b -> tool.a".into(),
        };
        assert!(err.to_string().contains("tool.a -> tool.b -> tool.a"));
    }

    #[test]
    fn unsupported_format_displays_format() {
        let err = TofukitError::UnsupportedFormat {
            format: "toml".into(),
        };
        assert!(err.to_string().contains("'toml'"));
    }

    #[test]
    fn manifest_parse_displays_path_and_message() {
        let err = TofukitError::ManifestParse {
            path: PathBuf::from("/tofukit.yml"),
            message: "invalid syntax".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("/tofukit.yml"));
        assert!(msg.contains("invalid syntax"));
    }

    #[test]
    fn io_error_converts_from_std() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file missing");
        let err: TofukitError = io_err.into();
        assert!(matches!(err, TofukitError::Io(_)));
    }
}
