//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! The `stencil-adapters` crate provides implementations.

use crate::application::services::TemplateInfo;
use crate::domain::ProjectTemplate;
use crate::error::StencilResult;
use std::path::{Path, PathBuf};

/// Kind of a directory entry as reported by [`Filesystem::read_dir`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    File,
    Directory,
}

/// One direct child of a directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirEntry {
    pub path: PathBuf,
    pub kind: EntryKind,
}

impl DirEntry {
    pub fn file(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            kind: EntryKind::File,
        }
    }

    pub fn directory(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            kind: EntryKind::Directory,
        }
    }

    pub fn is_dir(&self) -> bool {
        self.kind == EntryKind::Directory
    }
}

/// Port for filesystem operations.
///
/// Implemented by:
/// - `stencil_adapters::filesystem::LocalFilesystem` (production)
/// - `stencil_adapters::filesystem::MemoryFilesystem` (testing)
#[cfg_attr(test, mockall::automock)]
pub trait Filesystem: Send + Sync {
    /// Check if path exists.
    fn exists(&self, path: &Path) -> bool;

    /// Check if path exists and is a directory.
    fn is_dir(&self, path: &Path) -> bool;

    /// Direct children of a directory, sorted by path.
    fn read_dir(&self, path: &Path) -> StencilResult<Vec<DirEntry>>;

    /// Create a directory and all parent directories.
    fn create_dir_all(&self, path: &Path) -> StencilResult<()>;

    /// Copy one file, replacing `to` if it exists.
    fn copy_file(&self, from: &Path, to: &Path) -> StencilResult<()>;

    /// Read a file as UTF-8 text; `None` if the bytes are not valid UTF-8.
    fn read_text(&self, path: &Path) -> StencilResult<Option<String>>;

    /// Write content to a file, replacing it.
    fn write_file(&self, path: &Path, content: &str) -> StencilResult<()>;

    /// Every regular file below `root`, recursively, sorted by path.
    fn walk_files(&self, root: &Path) -> StencilResult<Vec<PathBuf>>;

    /// Absolute form of `path` with links resolved as far as it exists.
    /// Components that do not exist yet are appended unchanged.
    fn canonicalize(&self, path: &Path) -> PathBuf;
}

/// Port for template discovery.
///
/// Implemented by:
/// - `stencil_adapters::DirectoryTemplateRepository` (a templates root on disk)
pub trait TemplateRepository: Send + Sync {
    /// Root directory holding one subdirectory per template plus `shared`.
    fn root(&self) -> &Path;

    /// All templates, excluding `shared`, sorted by name.
    fn list(&self) -> StencilResult<Vec<TemplateInfo>>;

    /// Descriptor for the template called `name` (exact match).
    fn resolve(&self, name: &str) -> StencilResult<ProjectTemplate>;
}
