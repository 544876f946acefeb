//! Template Service - template discovery and resolution.
//!
//! Separated from `ProjectGenerator` for single responsibility: this service
//! answers "which templates exist" and "which directories make up template X".

use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::debug;

use crate::{
    application::ports::TemplateRepository,
    domain::{CicdType, ProjectTemplate},
    error::StencilResult,
};

/// Information about a template for display purposes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TemplateInfo {
    pub name: String,
    pub path: PathBuf,
}

/// Service for template operations.
pub struct TemplateService {
    repository: Box<dyn TemplateRepository>,
}

impl TemplateService {
    /// Create a new template service.
    pub fn new(repository: Box<dyn TemplateRepository>) -> Self {
        Self { repository }
    }

    /// Root directory templates are discovered in.
    pub fn root(&self) -> &Path {
        self.repository.root()
    }

    /// List all templates.
    pub fn list(&self) -> StencilResult<Vec<TemplateInfo>> {
        self.repository.list()
    }

    /// Template names only, sorted.
    pub fn names(&self) -> StencilResult<Vec<String>> {
        Ok(self.list()?.into_iter().map(|t| t.name).collect())
    }

    /// Resolve a template by name and attach the CI/CD variant.
    pub fn resolve(&self, name: &str, cicd_type: CicdType) -> StencilResult<ProjectTemplate> {
        let template = self.repository.resolve(name)?.with_cicd(cicd_type);
        debug!(
            template = %template.template_directory.display(),
            cicd = %cicd_type,
            "template resolved"
        );
        Ok(template)
    }
}
