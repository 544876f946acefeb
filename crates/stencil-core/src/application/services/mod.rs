//! Application services - orchestrate use cases.
//!
//! Services coordinate the domain layer and ports to accomplish
//! high-level use cases like "generate a project" or "resolve a template".

pub mod checker;
pub mod copier;
pub mod generator;
pub mod rewriter;
pub mod template_service;

pub use checker::TemplateChecker;
pub use copier::DirectoryCopier;
pub use generator::{GenerationReport, ProjectGenerator};
pub use rewriter::PlaceholderRewriter;
pub use template_service::{TemplateInfo, TemplateService};
