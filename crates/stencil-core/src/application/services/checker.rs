//! Template/destination preconditions, checked before anything is written.

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::{
    application::ports::Filesystem,
    domain::{DomainError, ProjectTemplate, SHARED_DIRECTORY_NAME},
    error::StencilResult,
};

/// Validates a [`ProjectTemplate`] and a destination path.
///
/// Each check is callable on its own and fails on the first violated
/// precondition. [`check_all`](Self::check_all) runs them in the order the
/// generator relies on.
pub struct TemplateChecker<'a> {
    template: &'a ProjectTemplate,
    destination: PathBuf,
    filesystem: &'a dyn Filesystem,
}

impl<'a> TemplateChecker<'a> {
    pub fn new(
        template: &'a ProjectTemplate,
        destination: impl Into<PathBuf>,
        filesystem: &'a dyn Filesystem,
    ) -> Self {
        Self {
            template,
            destination: destination.into(),
            filesystem,
        }
    }

    /// The template must not shadow `shared` and must be an existing directory.
    pub fn check_valid_template(&self) -> StencilResult<()> {
        if self.template.shadows_shared() {
            let name = self
                .template
                .name()
                .unwrap_or(SHARED_DIRECTORY_NAME)
                .to_string();
            return Err(DomainError::ReservedTemplateName { name }.into());
        }

        self.require_directory(&self.template.template_directory)
    }

    /// The shared-assets directory must exist and be a directory.
    pub fn check_valid_shared_directory(&self) -> StencilResult<()> {
        self.require_directory(&self.template.shared_files_directory)
    }

    /// The destination must be absent or an empty directory.
    pub fn check_destination_empty(&self) -> StencilResult<()> {
        let destination = &self.destination;
        if !self.filesystem.exists(destination) {
            return Ok(());
        }
        if !self.filesystem.is_dir(destination) {
            return Err(DomainError::NotADirectory {
                path: destination.clone(),
            }
            .into());
        }
        if !self.filesystem.read_dir(destination)?.is_empty() {
            return Err(DomainError::DestinationNotEmpty {
                path: destination.clone(),
            }
            .into());
        }
        Ok(())
    }

    /// The destination must not lie inside a directory that is copied
    /// recursively: the template itself or the selected CI/CD variant.
    pub fn check_destination_outside_sources(&self) -> StencilResult<()> {
        let destination = self.filesystem.canonicalize(&self.destination);
        let sources = std::iter::once(self.template.template_directory.clone())
            .chain(self.template.cicd_directory());

        for directory in sources {
            if destination.starts_with(self.filesystem.canonicalize(&directory)) {
                return Err(DomainError::DestinationInsideSource {
                    destination: self.destination.clone(),
                    directory,
                }
                .into());
            }
        }
        Ok(())
    }

    /// Run every check: template, shared directory, destination.
    pub fn check_all(&self) -> StencilResult<()> {
        self.check_valid_template()?;
        self.check_valid_shared_directory()?;
        self.check_destination_empty()?;
        self.check_destination_outside_sources()?;
        debug!(destination = %self.destination.display(), "template and destination valid");
        Ok(())
    }

    fn require_directory(&self, path: &Path) -> StencilResult<()> {
        if self.filesystem.is_dir(path) {
            Ok(())
        } else {
            Err(DomainError::NotADirectory {
                path: path.to_path_buf(),
            }
            .into())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        application::ports::{DirEntry, MockFilesystem},
        domain::CicdType,
        error::StencilError,
    };

    fn all_directories() -> MockFilesystem {
        let mut fs = MockFilesystem::new();
        fs.expect_is_dir().returning(|_| true);
        fs
    }

    fn lexical_paths(fs: &mut MockFilesystem) {
        fs.expect_canonicalize().returning(|p| p.to_path_buf());
    }

    fn domain(err: StencilError) -> DomainError {
        match err {
            StencilError::Domain(e) => e,
            other => panic!("expected domain error, got {other:?}"),
        }
    }

    #[test]
    fn valid_template_happy() {
        let fs = all_directories();
        let template = ProjectTemplate::in_root("/templates", "classic");
        let checker = TemplateChecker::new(&template, "/out", &fs);

        assert!(checker.check_valid_template().is_ok());
        assert!(checker.check_valid_shared_directory().is_ok());
    }

    #[test]
    fn template_called_shared_errors() {
        let fs = all_directories();
        let template = ProjectTemplate::in_root("/templates", "shared");
        let checker = TemplateChecker::new(&template, "/out", &fs);

        assert_eq!(
            domain(checker.check_valid_template().unwrap_err()),
            DomainError::ReservedTemplateName {
                name: "shared".into()
            }
        );
    }

    #[test]
    fn template_not_a_directory_errors() {
        let mut fs = MockFilesystem::new();
        fs.expect_is_dir()
            .returning(|p| !p.ends_with("test.txt"));
        let template = ProjectTemplate::in_root("/templates", "test.txt");
        let checker = TemplateChecker::new(&template, "/out", &fs);

        assert!(matches!(
            domain(checker.check_valid_template().unwrap_err()),
            DomainError::NotADirectory { .. }
        ));
    }

    #[test]
    fn shared_directory_missing_errors() {
        let mut fs = MockFilesystem::new();
        fs.expect_is_dir().returning(|p| !p.ends_with("shared"));
        let template = ProjectTemplate::in_root("/templates", "classic");
        let checker = TemplateChecker::new(&template, "/out", &fs);

        assert_eq!(
            domain(checker.check_valid_shared_directory().unwrap_err()),
            DomainError::NotADirectory {
                path: PathBuf::from("/templates/shared")
            }
        );
    }

    #[test]
    fn absent_destination_passes() {
        let mut fs = MockFilesystem::new();
        fs.expect_exists().returning(|_| false);
        let template = ProjectTemplate::in_root("/templates", "classic");

        assert!(
            TemplateChecker::new(&template, "/out", &fs)
                .check_destination_empty()
                .is_ok()
        );
    }

    #[test]
    fn empty_destination_passes() {
        let mut fs = all_directories();
        fs.expect_exists().returning(|_| true);
        fs.expect_read_dir().returning(|_| Ok(vec![]));
        let template = ProjectTemplate::in_root("/templates", "classic");

        assert!(
            TemplateChecker::new(&template, "/out", &fs)
                .check_destination_empty()
                .is_ok()
        );
    }

    #[test]
    fn populated_destination_errors() {
        let mut fs = all_directories();
        fs.expect_exists().returning(|_| true);
        fs.expect_read_dir()
            .returning(|_| Ok(vec![DirEntry::file("/out/README.md")]));
        let template = ProjectTemplate::in_root("/templates", "classic");

        assert!(matches!(
            domain(
                TemplateChecker::new(&template, "/out", &fs)
                    .check_destination_empty()
                    .unwrap_err()
            ),
            DomainError::DestinationNotEmpty { .. }
        ));
    }

    #[test]
    fn destination_that_is_a_file_errors() {
        let mut fs = MockFilesystem::new();
        fs.expect_exists().returning(|_| true);
        fs.expect_is_dir().returning(|_| false);
        let template = ProjectTemplate::in_root("/templates", "classic");

        assert!(matches!(
            domain(
                TemplateChecker::new(&template, "/out/file.txt", &fs)
                    .check_destination_empty()
                    .unwrap_err()
            ),
            DomainError::NotADirectory { .. }
        ));
    }

    #[test]
    fn destination_inside_template_errors() {
        let mut fs = MockFilesystem::new();
        lexical_paths(&mut fs);
        let template = ProjectTemplate::in_root("/templates", "classic");

        assert_eq!(
            domain(
                TemplateChecker::new(&template, "/templates/classic/out", &fs)
                    .check_destination_outside_sources()
                    .unwrap_err()
            ),
            DomainError::DestinationInsideSource {
                destination: PathBuf::from("/templates/classic/out"),
                directory: PathBuf::from("/templates/classic"),
            }
        );
    }

    #[test]
    fn destination_inside_selected_cicd_errors() {
        let mut fs = MockFilesystem::new();
        lexical_paths(&mut fs);
        let template = ProjectTemplate::in_root("/templates", "classic").with_cicd(CicdType::GitHub);
        let checker = TemplateChecker::new(&template, "/templates/shared/cicd/github/app", &fs);

        assert!(matches!(
            domain(checker.check_destination_outside_sources().unwrap_err()),
            DomainError::DestinationInsideSource { .. }
        ));
    }

    #[test]
    fn destination_beside_template_passes() {
        let mut fs = MockFilesystem::new();
        lexical_paths(&mut fs);
        // Shared is copied files-only, and a sibling with a common prefix is not nested.
        let template = ProjectTemplate::in_root("/templates", "classic");
        for destination in ["/templates/shared/app", "/templates/classic-app", "/out"] {
            assert!(
                TemplateChecker::new(&template, destination, &fs)
                    .check_destination_outside_sources()
                    .is_ok(),
                "{destination}"
            );
        }
    }

    #[test]
    fn check_all_stops_at_first_failure() {
        let mut fs = MockFilesystem::new();
        fs.expect_is_dir().times(0);
        fs.expect_exists().times(0);
        let template = ProjectTemplate::in_root("/templates", "shared");

        assert!(
            TemplateChecker::new(&template, "/out", &fs)
                .check_all()
                .is_err()
        );
    }
}
