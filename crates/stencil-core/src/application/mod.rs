//! Application layer for Stencil.
//!
//! This layer contains:
//! - **Services**: Use case orchestration (ProjectGenerator, TemplateService)
//!   and the building blocks they share (copier, checker, rewriter)
//! - **Ports**: Interface definitions (traits) for external dependencies
//! - **Errors**: Application-specific error types
//!
//! Template rules (reserved names, placeholder substitution, layer priority)
//! live in `crate::domain`.

pub mod error;
pub mod ports;
pub mod services;

// Re-export main services
pub use services::{
    DirectoryCopier, GenerationReport, PlaceholderRewriter, ProjectGenerator, TemplateChecker,
    TemplateInfo, // DTO for template listings
    TemplateService,
};

// Re-export port traits (for adapter implementation)
pub use ports::{DirEntry, EntryKind, Filesystem, TemplateRepository};

pub use error::ApplicationError;
