//! Local filesystem adapter using std::fs and walkdir.

use std::io;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use stencil_core::{
    application::ports::{DirEntry, Filesystem},
    error::StencilResult,
};

/// Production filesystem implementation using `std::fs`.
#[derive(Debug, Clone, Copy)]
pub struct LocalFilesystem;

impl LocalFilesystem {
    /// Create a new local filesystem adapter.
    pub fn new() -> Self {
        Self
    }
}

impl Default for LocalFilesystem {
    fn default() -> Self {
        Self::new()
    }
}

impl Filesystem for LocalFilesystem {
    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn is_dir(&self, path: &Path) -> bool {
        path.is_dir()
    }

    fn read_dir(&self, path: &Path) -> StencilResult<Vec<DirEntry>> {
        let read_dir = std::fs::read_dir(path).map_err(|e| map_io_error(path, e, "read directory"))?;

        let mut entries = Vec::new();
        for entry in read_dir {
            let entry = entry.map_err(|e| map_io_error(path, e, "read directory entry"))?;
            let entry_path = entry.path();
            // Follows symlinks, so a linked directory is copied as a directory.
            if entry_path.is_dir() {
                entries.push(DirEntry::directory(entry_path));
            } else {
                entries.push(DirEntry::file(entry_path));
            }
        }

        entries.sort_by(|a, b| a.path.cmp(&b.path));
        Ok(entries)
    }

    fn create_dir_all(&self, path: &Path) -> StencilResult<()> {
        std::fs::create_dir_all(path).map_err(|e| map_io_error(path, e, "create directory"))
    }

    fn copy_file(&self, from: &Path, to: &Path) -> StencilResult<()> {
        std::fs::copy(from, to)
            .map(|_| ())
            .map_err(|e| map_io_error(to, e, "copy file"))
    }

    fn read_text(&self, path: &Path) -> StencilResult<Option<String>> {
        let bytes = std::fs::read(path).map_err(|e| map_io_error(path, e, "read file"))?;
        Ok(String::from_utf8(bytes).ok())
    }

    fn write_file(&self, path: &Path, content: &str) -> StencilResult<()> {
        std::fs::write(path, content).map_err(|e| map_io_error(path, e, "write file"))
    }

    fn walk_files(&self, root: &Path) -> StencilResult<Vec<PathBuf>> {
        let mut files = Vec::new();
        for entry in WalkDir::new(root).follow_links(true).sort_by_file_name() {
            let entry = entry.map_err(|e| {
                let path = e.path().unwrap_or(root).to_path_buf();
                map_io_error(&path, io::Error::from(e), "walk directory")
            })?;
            if entry.file_type().is_file() {
                files.push(entry.into_path());
            }
        }
        Ok(files)
    }

    fn canonicalize(&self, path: &Path) -> PathBuf {
        let absolute = std::path::absolute(path).unwrap_or_else(|_| path.to_path_buf());

        // Resolve the deepest existing ancestor, then re-append the rest.
        let mut pending = Vec::new();
        let mut current = absolute.as_path();
        loop {
            if let Ok(resolved) = current.canonicalize() {
                return pending
                    .iter()
                    .rev()
                    .fold(resolved, |acc, name| acc.join(name));
            }
            match (current.parent(), current.file_name()) {
                (Some(parent), Some(name)) => {
                    pending.push(name);
                    current = parent;
                }
                _ => return absolute.clone(),
            }
        }
    }
}

fn map_io_error(path: &Path, e: io::Error, operation: &str) -> stencil_core::error::StencilError {
    use stencil_core::application::ApplicationError;

    ApplicationError::FilesystemError {
        path: path.to_path_buf(),
        reason: format!("Failed to {}: {}", operation, e),
    }
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn read_dir_is_sorted_and_typed() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("b.txt"), "b").unwrap();
        fs::create_dir(temp.path().join("a_dir")).unwrap();

        let entries = LocalFilesystem::new().read_dir(temp.path()).unwrap();

        assert_eq!(entries.len(), 2);
        assert!(entries[0].is_dir());
        assert!(!entries[1].is_dir());
    }

    #[test]
    fn read_text_returns_none_for_binary() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("logo.png");
        fs::write(&path, [0x89, 0x50, 0xff, 0xfe]).unwrap();

        assert_eq!(LocalFilesystem::new().read_text(&path).unwrap(), None);
    }

    #[test]
    fn walk_files_skips_directories() {
        let temp = TempDir::new().unwrap();
        fs::create_dir_all(temp.path().join("src/pkg")).unwrap();
        fs::write(temp.path().join("src/pkg/__init__.py"), "").unwrap();
        fs::write(temp.path().join("README.md"), "").unwrap();

        let files = LocalFilesystem::new().walk_files(temp.path()).unwrap();

        assert_eq!(files.len(), 2);
        assert!(files.iter().all(|f| f.is_file()));
    }

    #[test]
    fn canonicalize_keeps_components_that_do_not_exist_yet() {
        let temp = TempDir::new().unwrap();
        fs::create_dir(temp.path().join("mine")).unwrap();
        let root = temp.path().canonicalize().unwrap();

        let resolved = LocalFilesystem::new().canonicalize(&temp.path().join("mine/../mine/out/deeper"));

        assert_eq!(resolved, root.join("mine/out/deeper"));
    }

    #[test]
    fn missing_directory_maps_to_filesystem_error() {
        let err = LocalFilesystem::new()
            .read_dir(Path::new("/absolutely/does/not/exist"))
            .unwrap_err();
        assert!(err.to_string().contains("read directory"));
    }
}
