//! Infrastructure adapters for Stencil.
//!
//! This crate implements the ports defined in `stencil-core::application::ports`.
//! It contains all external dependencies and I/O operations, plus the template
//! tree that ships with the tool.

pub mod builtin_templates;
pub mod filesystem;
pub mod template_repository;

// Re-export commonly used adapters
pub use filesystem::{LocalFilesystem, MemoryFilesystem};
pub use template_repository::DirectoryTemplateRepository;
