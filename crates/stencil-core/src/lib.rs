//! Stencil Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for the Stencil
//! project scaffolding tool, following hexagonal (ports and adapters) architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │           stencil-cli (CLI)             │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │ (ProjectGenerator, TemplateService,     │
//! │  Copier, Checker, Rewriter)             │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │   (Filesystem, TemplateRepository)      │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │     stencil-adapters (Infrastructure)   │
//! │ (LocalFilesystem, DirectoryTemplate...) │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,no_run
//! use stencil_core::{
//!     application::{ProjectGenerator, TemplateService},
//!     domain::CicdType,
//! };
//! # fn demo(
//! #     repository: Box<dyn stencil_core::application::TemplateRepository>,
//! #     filesystem: Box<dyn stencil_core::application::Filesystem>,
//! # ) -> stencil_core::error::StencilResult<()> {
//! // 1. Resolve the template
//! let templates = TemplateService::new(repository);
//! let template = templates.resolve("rest-api", CicdType::None)?;
//!
//! // 2. Generate
//! let generator = ProjectGenerator::new(template, "my-api", filesystem);
//! generator.generate_template_at_destination("./my-api")?;
//! # Ok(())
//! # }
//! ```

pub mod domain;

pub mod application;

pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        GenerationReport, ProjectGenerator, TemplateInfo, TemplateService,
        ports::{Filesystem, TemplateRepository},
    };
    pub use crate::domain::{CicdType, PLACEHOLDER_TOKEN, ProjectTemplate};
    pub use crate::error::{StencilError, StencilResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
