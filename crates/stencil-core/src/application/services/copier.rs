//! Directory Copier - recursive tree copy through the `Filesystem` port.

use std::path::Path;

use tracing::{debug, trace};

use crate::{
    application::ports::Filesystem,
    domain::DomainError,
    error::StencilResult,
};

/// Copies a source directory tree into a target directory.
///
/// Existing files at the same relative path are replaced; nothing is ever
/// deleted.
pub struct DirectoryCopier<'a> {
    filesystem: &'a dyn Filesystem,
}

impl<'a> DirectoryCopier<'a> {
    pub fn new(filesystem: &'a dyn Filesystem) -> Self {
        Self { filesystem }
    }

    /// Copy `source` into `target`, creating `target` if needed.
    ///
    /// With `files_only`, only the direct child files of `source` are copied
    /// and subdirectories are skipped entirely.
    ///
    /// # Errors
    ///
    /// [`DomainError::NotADirectory`] if `source` is missing or not a
    /// directory; any I/O failure from the port.
    pub fn copy(&self, source: &Path, target: &Path, files_only: bool) -> StencilResult<usize> {
        if !self.filesystem.is_dir(source) {
            return Err(DomainError::NotADirectory {
                path: source.to_path_buf(),
            }
            .into());
        }

        debug!(
            source = %source.display(),
            target = %target.display(),
            files_only,
            "copying directory"
        );
        self.copy_tree(source, target, files_only)
    }

    fn copy_tree(&self, source: &Path, target: &Path, files_only: bool) -> StencilResult<usize> {
        if !self.filesystem.exists(target) {
            self.filesystem.create_dir_all(target)?;
        }

        let mut copied = 0;
        for entry in self.filesystem.read_dir(source)? {
            let Some(name) = entry.path.file_name() else {
                continue;
            };
            let destination = target.join(name);

            if entry.is_dir() {
                if !files_only {
                    copied += self.copy_tree(&entry.path, &destination, false)?;
                }
                continue;
            }

            trace!(from = %entry.path.display(), to = %destination.display(), "copy file");
            self.filesystem.copy_file(&entry.path, &destination)?;
            copied += 1;
        }

        Ok(copied)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        application::ports::{DirEntry, MockFilesystem},
        error::StencilError,
    };
    use mockall::predicate::function;

    #[test]
    fn missing_source_is_not_a_directory() {
        let mut fs = MockFilesystem::new();
        fs.expect_is_dir().returning(|_| false);

        let err = DirectoryCopier::new(&fs)
            .copy(Path::new("/nope"), Path::new("/out"), false)
            .unwrap_err();

        assert!(matches!(
            err,
            StencilError::Domain(DomainError::NotADirectory { .. })
        ));
    }

    #[test]
    fn files_only_skips_subdirectories() {
        let mut fs = MockFilesystem::new();
        fs.expect_is_dir().returning(|_| true);
        fs.expect_exists().returning(|_| true);
        fs.expect_read_dir()
            .with(function(|p: &Path| p == Path::new("/src")))
            .times(1)
            .returning(|_| {
                Ok(vec![
                    DirEntry::file("/src/README.txt"),
                    DirEntry::directory("/src/docs"),
                    DirEntry::file("/src/LICENSE.txt"),
                ])
            });
        fs.expect_copy_file().times(2).returning(|_, _| Ok(()));

        let copied = DirectoryCopier::new(&fs)
            .copy(Path::new("/src"), Path::new("/out"), true)
            .unwrap();

        assert_eq!(copied, 2);
    }

    #[test]
    fn missing_target_is_created_first() {
        let mut fs = MockFilesystem::new();
        fs.expect_is_dir().returning(|_| true);
        fs.expect_exists().returning(|_| false);
        fs.expect_create_dir_all()
            .with(function(|p: &Path| p == Path::new("/out/deeper")))
            .times(1)
            .returning(|_| Ok(()));
        fs.expect_read_dir().returning(|_| Ok(vec![]));

        let copied = DirectoryCopier::new(&fs)
            .copy(Path::new("/src"), Path::new("/out/deeper"), false)
            .unwrap();

        assert_eq!(copied, 0);
    }
}
