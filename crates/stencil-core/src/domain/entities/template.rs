use std::path::{Path, PathBuf};

use crate::domain::value_objects::CicdType;

/// Name of the directory holding assets merged into every template.
pub const SHARED_DIRECTORY_NAME: &str = "shared";

/// A template as a pair of directories plus an optional CI/CD variant.
///
/// Plain configuration: constructing one performs no I/O. Structural checks
/// (both paths are directories, the template does not shadow `shared`) are
/// done by [`crate::application::TemplateChecker`] before anything is copied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectTemplate {
    pub template_directory: PathBuf,
    pub shared_files_directory: PathBuf,
    pub cicd_type: CicdType,
}

impl ProjectTemplate {
    pub fn new(
        template_directory: impl Into<PathBuf>,
        shared_files_directory: impl Into<PathBuf>,
    ) -> Self {
        Self {
            template_directory: template_directory.into(),
            shared_files_directory: shared_files_directory.into(),
            cicd_type: CicdType::None,
        }
    }

    /// Descriptor for `name` inside a templates root laid out as
    /// `<root>/<name>` + `<root>/shared`.
    pub fn in_root(root: impl AsRef<Path>, name: &str) -> Self {
        let root = root.as_ref();
        Self::new(root.join(name), root.join(SHARED_DIRECTORY_NAME))
    }

    pub fn with_cicd(mut self, cicd_type: CicdType) -> Self {
        self.cicd_type = cicd_type;
        self
    }

    /// Final path component of the template directory.
    pub fn name(&self) -> Option<&str> {
        self.template_directory.file_name().and_then(|n| n.to_str())
    }

    /// Root of the CI/CD variant assets, when a variant is selected.
    pub fn cicd_directory(&self) -> Option<PathBuf> {
        self.cicd_type
            .asset_dir()
            .map(|dir| self.shared_files_directory.join("cicd").join(dir))
    }

    /// Whether the template directory collides with the shared-assets name.
    pub fn shadows_shared(&self) -> bool {
        let template_name = self.template_directory.file_name();
        template_name.is_some_and(|name| {
            name == SHARED_DIRECTORY_NAME || Some(name) == self.shared_files_directory.file_name()
        })
    }
}
