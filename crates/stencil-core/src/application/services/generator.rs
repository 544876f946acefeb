//! Project Generator - main application orchestrator.
//!
//! This service coordinates the whole generation workflow:
//! 1. Validate template, shared assets and destination
//! 2. Copy asset layers in priority order (shared files, CI/CD, template)
//! 3. Rewrite the placeholder token in every generated file
//!
//! Nothing is rolled back on failure: a run that fails after step 1 may leave
//! a partially populated destination.

use std::path::{Path, PathBuf};

use tracing::{info, instrument, warn};

use crate::{
    application::{
        ports::Filesystem,
        services::{DirectoryCopier, PlaceholderRewriter, TemplateChecker},
    },
    domain::{AssetLayer, GenerationPlan, ProjectTemplate},
    error::StencilResult,
};

/// Outcome of a successful generation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationReport {
    pub destination: PathBuf,
    /// Every file present under the destination after copying.
    pub files: Vec<PathBuf>,
    /// Number of files whose placeholder was substituted.
    pub rewritten: usize,
}

impl GenerationReport {
    pub fn file_count(&self) -> usize {
        self.files.len()
    }
}

/// Generates a project from a [`ProjectTemplate`].
pub struct ProjectGenerator {
    template: ProjectTemplate,
    project_name: String,
    filesystem: Box<dyn Filesystem>,
}

impl ProjectGenerator {
    /// Create a generator for one template and project name.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use stencil_core::{application::ProjectGenerator, domain::ProjectTemplate};
    /// # fn demo(filesystem: Box<dyn stencil_core::application::ports::Filesystem>) {
    /// let template = ProjectTemplate::in_root("./templates", "rest-api");
    /// let generator = ProjectGenerator::new(template, "my-api", filesystem);
    /// generator.generate_template_at_destination("./my-api").unwrap();
    /// # }
    /// ```
    pub fn new(
        template: ProjectTemplate,
        project_name: impl Into<String>,
        filesystem: Box<dyn Filesystem>,
    ) -> Self {
        Self {
            template,
            project_name: project_name.into(),
            filesystem,
        }
    }

    pub fn template(&self) -> &ProjectTemplate {
        &self.template
    }

    pub fn project_name(&self) -> &str {
        &self.project_name
    }

    /// Checker bound to this generator's template and filesystem.
    pub fn checker(&self, destination: impl Into<PathBuf>) -> TemplateChecker<'_> {
        TemplateChecker::new(&self.template, destination, self.filesystem.as_ref())
    }

    /// Materialise the template at `destination`.
    ///
    /// # Errors
    ///
    /// The first failed precondition (reserved name, missing directory,
    /// populated destination) before anything is written, or the first I/O
    /// error afterwards.
    #[instrument(
        skip_all,
        fields(
            template = %self.template.template_directory.display(),
            project = %self.project_name,
            destination = %destination.as_ref().display()
        )
    )]
    pub fn generate_template_at_destination(
        &self,
        destination: impl AsRef<Path>,
    ) -> StencilResult<GenerationReport> {
        let destination = destination.as_ref();

        // 1. Validate before touching the filesystem
        self.checker(destination).check_all()?;

        // 2. Copy layers, lowest priority first
        let copier = DirectoryCopier::new(self.filesystem.as_ref());
        for step in GenerationPlan::for_template(&self.template).steps() {
            if step.layer == AssetLayer::Cicd && !self.filesystem.is_dir(&step.source) {
                warn!(
                    cicd = %self.template.cicd_type,
                    path = %step.source.display(),
                    "no CI/CD assets for this variant, skipping"
                );
                continue;
            }

            let copied = copier.copy(&step.source, destination, step.files_only)?;
            info!(layer = %step.layer, copied, "layer copied");
        }

        // 3. Substitute the project name
        let files = self.filesystem.walk_files(destination)?;
        let rewritten =
            PlaceholderRewriter::new(self.filesystem.as_ref()).rewrite(&files, &self.project_name)?;

        info!(files = files.len(), rewritten, "project generated");
        Ok(GenerationReport {
            destination: destination.to_path_buf(),
            files,
            rewritten,
        })
    }
}
