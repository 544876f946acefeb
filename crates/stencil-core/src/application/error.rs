//! Application layer errors.
//!
//! These errors represent failures in orchestration and I/O, not template
//! rules. Rule violations are `DomainError` from `crate::domain`.

use std::path::PathBuf;
use thiserror::Error;

use crate::error::ErrorCategory;

/// Errors that occur during application orchestration.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ApplicationError {
    /// No template with the requested name exists under the templates root.
    #[error("Template not found: {name}")]
    TemplateNotFound {
        name: String,
        available: Vec<String>,
    },

    /// The templates root itself is missing.
    #[error("Templates directory not found: {path}")]
    TemplatesRootMissing { path: PathBuf },

    /// Filesystem operation failed.
    #[error("Filesystem error at {path}: {reason}")]
    FilesystemError { path: PathBuf, reason: String },

    /// In-memory adapter state was poisoned.
    #[error("Filesystem state lock poisoned")]
    StoreLockError,
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::TemplateNotFound { available, .. } => {
                let mut out = vec!["Available templates:".to_string()];
                out.extend(available.iter().map(|name| format!("  • {name}")));
                out.push("Try: stencil list".into());
                out
            }
            Self::TemplatesRootMissing { path } => vec![
                format!("No templates at {}", path.display()),
                "Set templates.path in your config or STENCIL_TEMPLATES__PATH".into(),
            ],
            Self::FilesystemError { path, .. } => vec![
                format!("Failed to access: {}", path.display()),
                "Check that you have write permissions".into(),
                "A failed run may leave a partially written destination".into(),
            ],
            Self::StoreLockError => vec!["Try again".into()],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::TemplateNotFound { .. } | Self::TemplatesRootMissing { .. } => {
                ErrorCategory::NotFound
            }
            Self::FilesystemError { .. } | Self::StoreLockError => ErrorCategory::Internal,
        }
    }
}
