//! Application ports (traits) for external dependencies.
//!
//! In hexagonal architecture, ports define interfaces that the application
//! needs from the outside world. Adapters in `stencil-adapters` implement these.
//!
//! ## Port Types
//!
//! - **Driven (Output) Ports**: Called by application, implemented by infrastructure
//!   - `Filesystem`: File operations
//!   - `TemplateRepository`: Template discovery under a templates root

pub mod output;

#[cfg(test)]
pub use output::MockFilesystem;
pub use output::{DirEntry, EntryKind, Filesystem, TemplateRepository};
