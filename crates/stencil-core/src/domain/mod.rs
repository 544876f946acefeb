//! Core domain layer for Stencil.
//!
//! This module contains pure logic with no I/O. Template descriptors, copy
//! ordering and placeholder rules live here; everything that touches the
//! filesystem goes through the ports in `crate::application::ports`.
//!
//! ## Hexagonal Architecture Compliance
//!
//! - **No async**: Domain logic is synchronous
//! - **No I/O**: No filesystem, network, or external calls
//! - **No external crates**: Only std library + thiserror + serde derives
//!
pub mod entities;
pub mod error;
pub mod placeholder;
pub mod value_objects;

pub use entities::{
    plan::{AssetLayer, CopyStep, GenerationPlan},
    template::{ProjectTemplate, SHARED_DIRECTORY_NAME},
};

pub use error::{DomainError, ErrorCategory};

pub use placeholder::PLACEHOLDER_TOKEN;

pub use value_objects::CicdType;

/// Check a project name supplied by a caller.
///
/// The name ends up as a directory name and inside source files, so it must be
/// a single non-hidden path component.
pub fn validate_project_name(name: &str) -> Result<(), DomainError> {
    let invalid = |reason: &str| DomainError::InvalidProjectName {
        name: name.into(),
        reason: reason.into(),
    };

    if name.trim().is_empty() {
        return Err(invalid("name cannot be empty"));
    }
    if name.starts_with('.') {
        return Err(invalid("name cannot start with '.'"));
    }
    if name.contains('/') || name.contains('\\') {
        return Err(invalid("name cannot contain path separators"));
    }
    Ok(())
}
