//! Unified error handling for Stencil Core.
//!
//! This module provides a unified error type that wraps domain and application
//! errors, with user-actionable suggestions.

use thiserror::Error;

use crate::application::ApplicationError;
use crate::domain::DomainError;

/// Root error type for Stencil Core operations.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum StencilError {
    /// Template or destination rule violations.
    #[error("{0}")]
    Domain(#[from] DomainError),

    /// Orchestration and I/O failures.
    #[error("{0}")]
    Application(#[from] ApplicationError),
}

impl StencilError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Domain(e) => e.suggestions(),
            Self::Application(e) => e.suggestions(),
        }
    }

    /// Get error category for display/styling purposes.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Domain(e) => match e.category() {
                crate::domain::ErrorCategory::Validation => ErrorCategory::Validation,
                crate::domain::ErrorCategory::Conflict => ErrorCategory::Conflict,
                crate::domain::ErrorCategory::NotFound => ErrorCategory::NotFound,
            },
            Self::Application(e) => e.category(),
        }
    }
}

/// Error categories for UI display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Conflict,
    NotFound,
    Internal,
}

/// Convenient result type alias.
pub type StencilResult<T> = Result<T, StencilError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn domain_categories_are_mapped() {
        let err: StencilError = DomainError::DestinationNotEmpty {
            path: PathBuf::from("/out"),
        }
        .into();
        assert_eq!(err.category(), ErrorCategory::Conflict);
    }

    #[test]
    fn template_not_found_lists_available() {
        let err: StencilError = ApplicationError::TemplateNotFound {
            name: "django".into(),
            available: vec!["classic".into(), "rest-api".into()],
        }
        .into();
        assert_eq!(err.category(), ErrorCategory::NotFound);
        assert!(err.suggestions().iter().any(|s| s.contains("rest-api")));
    }

    #[test]
    fn filesystem_failures_are_internal() {
        let err: StencilError = ApplicationError::FilesystemError {
            path: PathBuf::from("/out/setup.py"),
            reason: "disk full".into(),
        }
        .into();
        assert_eq!(err.category(), ErrorCategory::Internal);
    }
}
