// ============================================================================
// domain/error.rs - TEMPLATE AND DESTINATION ERRORS
// ============================================================================

use std::path::PathBuf;
use thiserror::Error;

/// Root domain error type.
///
/// All errors are:
/// - Cloneable (callers may report and keep them)
/// - Categorizable (for CLI display)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    // ========================================================================
    // Validation Errors
    // ========================================================================
    /// The template directory shadows the reserved shared-assets directory.
    #[error("'{name}' is reserved for shared assets and cannot be used as a template")]
    ReservedTemplateName { name: String },

    #[error("unknown CI/CD type '{0}' (expected one of: none, azure, github)")]
    UnknownCicdType(String),

    #[error("invalid project name '{name}': {reason}")]
    InvalidProjectName { name: String, reason: String },

    /// The destination lies inside a directory that is copied recursively,
    /// so the copy would feed on its own output.
    #[error("destination {} is inside template source {}", destination.display(), directory.display())]
    DestinationInsideSource {
        destination: PathBuf,
        directory: PathBuf,
    },

    // ========================================================================
    // Not Found Errors
    // ========================================================================
    /// A required template or shared-assets path is missing or is not a directory.
    #[error("not a directory: {}", path.display())]
    NotADirectory { path: PathBuf },

    // ========================================================================
    // Conflict Errors
    // ========================================================================
    /// The destination already has at least one entry.
    #[error("destination already contains files: {}", path.display())]
    DestinationNotEmpty { path: PathBuf },
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::ReservedTemplateName { name } => vec![
                format!("'{}' only holds files merged into every template", name),
                "Pick one of the real templates: stencil list".into(),
            ],
            Self::UnknownCicdType(_) => vec![
                "Supported CI/CD types:".into(),
                "  • none    - no pipeline files".into(),
                "  • azure   - Azure Pipelines".into(),
                "  • github  - GitHub Actions".into(),
            ],
            Self::InvalidProjectName { .. } => vec![
                "Use letters, digits, hyphens and underscores".into(),
                "Examples: my-project, my_app, project123".into(),
            ],
            Self::DestinationInsideSource { directory, .. } => vec![
                format!("Generate outside {}", directory.display()),
                "Pass a different --output directory".into(),
            ],
            Self::NotADirectory { path } => vec![
                format!("Expected a directory at {}", path.display()),
                "Check the templates path in your configuration".into(),
            ],
            Self::DestinationNotEmpty { path } => vec![
                format!("Remove or empty {}", path.display()),
                "Or choose a different project name / --output directory".into(),
            ],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::ReservedTemplateName { .. }
            | Self::UnknownCicdType(_)
            | Self::InvalidProjectName { .. }
            | Self::DestinationInsideSource { .. } => ErrorCategory::Validation,
            Self::NotADirectory { .. } => ErrorCategory::NotFound,
            Self::DestinationNotEmpty { .. } => ErrorCategory::Conflict,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Conflict,
    NotFound,
}
