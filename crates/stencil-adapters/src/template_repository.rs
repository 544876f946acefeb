//! Directory-based template repository.
//!
//! Every immediate subdirectory of the templates root is a template, except the
//! reserved `shared` directory which holds assets copied into every project.
//!
//! # Directory layout expected
//!
//! ```text
//! templates/
//! ├── shared/                  ← reserved, never listed
//! │   ├── README.md
//! │   ├── LICENSE
//! │   └── cicd/
//! │       ├── azure/
//! │       └── github/
//! ├── classic/
//! └── rest-api/
//!     ├── app.py
//!     └── requirements.txt     ← overrides shared/requirements.txt
//! ```

use std::{
    fs,
    path::{Path, PathBuf},
};

use tracing::{debug, instrument, trace};

use stencil_core::{
    application::{ApplicationError, TemplateInfo, TemplateRepository},
    domain::{ProjectTemplate, SHARED_DIRECTORY_NAME},
    error::StencilResult,
};

/// Discovers templates under a root directory.
#[derive(Debug, Clone)]
pub struct DirectoryTemplateRepository {
    root: PathBuf,
}

impl DirectoryTemplateRepository {
    /// Create a repository rooted at `root`.
    ///
    /// The directory does not need to exist yet; [`list`](TemplateRepository::list)
    /// and [`resolve`](TemplateRepository::resolve) report a missing root when
    /// called.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Repository over the templates packaged with this crate.
    pub fn builtin() -> Self {
        Self::new(crate::builtin_templates::templates_root())
    }

    fn require_root(&self) -> StencilResult<()> {
        if self.root.is_dir() {
            Ok(())
        } else {
            Err(ApplicationError::TemplatesRootMissing {
                path: self.root.clone(),
            }
            .into())
        }
    }
}

impl TemplateRepository for DirectoryTemplateRepository {
    fn root(&self) -> &Path {
        &self.root
    }

    #[instrument(skip(self), fields(root = %self.root.display()))]
    fn list(&self) -> StencilResult<Vec<TemplateInfo>> {
        self.require_root()?;

        let read_dir = fs::read_dir(&self.root).map_err(|e| ApplicationError::FilesystemError {
            path: self.root.clone(),
            reason: format!("Failed to read templates directory: {e}"),
        })?;

        let mut templates = Vec::new();
        for entry in read_dir {
            let entry = entry.map_err(|e| ApplicationError::FilesystemError {
                path: self.root.clone(),
                reason: format!("Failed to read directory entry: {e}"),
            })?;

            let path = entry.path();
            if !path.is_dir() {
                continue;
            }

            let name = entry.file_name().to_string_lossy().into_owned();
            if name == SHARED_DIRECTORY_NAME || name.starts_with('.') {
                trace!(name = %name, "not a template");
                continue;
            }

            templates.push(TemplateInfo { name, path });
        }

        templates.sort_by(|a, b| a.name.cmp(&b.name));
        debug!(count = templates.len(), "templates discovered");
        Ok(templates)
    }

    #[instrument(skip(self), fields(root = %self.root.display()))]
    fn resolve(&self, name: &str) -> StencilResult<ProjectTemplate> {
        let templates = self.list()?;

        match templates.iter().find(|t| t.name == name) {
            Some(info) => Ok(ProjectTemplate::in_root(&self.root, &info.name)),
            None => Err(ApplicationError::TemplateNotFound {
                name: name.to_string(),
                available: templates.into_iter().map(|t| t.name).collect(),
            }
            .into()),
        }
    }
}
