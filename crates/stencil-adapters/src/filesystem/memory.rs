//! In-memory filesystem adapter for testing.

use std::{
    collections::{BTreeMap, BTreeSet},
    path::{Component, Path, PathBuf},
    sync::{Arc, RwLock},
};

use stencil_core::{
    application::{
        ApplicationError,
        ports::{DirEntry, Filesystem},
    },
    error::StencilResult,
};

/// In-memory filesystem for testing.
///
/// Clones share the same state, so a test can hand one clone to a generator
/// and inspect the result through another.
#[derive(Debug, Clone, Default)]
pub struct MemoryFilesystem {
    inner: Arc<RwLock<MemoryFilesystemInner>>,
}

#[derive(Debug, Default)]
struct MemoryFilesystemInner {
    files: BTreeMap<PathBuf, Vec<u8>>,
    directories: BTreeSet<PathBuf>,
}

impl MemoryFilesystemInner {
    fn insert_dir_all(&mut self, path: &Path) {
        let mut current = PathBuf::new();
        for component in path.components() {
            current.push(component);
            self.directories.insert(current.clone());
        }
    }

    fn require_parent(&self, path: &Path) -> StencilResult<()> {
        match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() && !self.directories.contains(parent) => {
                Err(ApplicationError::FilesystemError {
                    path: path.to_path_buf(),
                    reason: "Parent directory does not exist".into(),
                }
                .into())
            }
            _ => Ok(()),
        }
    }
}

impl MemoryFilesystem {
    /// Create a new empty memory filesystem.
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a file, creating its parent directories (testing helper).
    pub fn add_file(&self, path: impl AsRef<Path>, content: impl AsRef<[u8]>) {
        let path = path.as_ref();
        let Ok(mut inner) = self.inner.write() else {
            return;
        };
        if let Some(parent) = path.parent() {
            inner.insert_dir_all(parent);
        }
        inner
            .files
            .insert(path.to_path_buf(), content.as_ref().to_vec());
    }

    /// Seed an empty directory (testing helper).
    pub fn add_dir(&self, path: impl AsRef<Path>) {
        if let Ok(mut inner) = self.inner.write() {
            inner.insert_dir_all(path.as_ref());
        }
    }

    /// Read a file's content as text (testing helper).
    pub fn read_file(&self, path: impl AsRef<Path>) -> Option<String> {
        let inner = self.inner.read().ok()?;
        inner
            .files
            .get(path.as_ref())
            .and_then(|bytes| String::from_utf8(bytes.clone()).ok())
    }

    /// List all files, sorted.
    pub fn list_files(&self) -> Vec<PathBuf> {
        self.inner
            .read()
            .map(|inner| inner.files.keys().cloned().collect())
            .unwrap_or_default()
    }
}

impl Filesystem for MemoryFilesystem {
    fn exists(&self, path: &Path) -> bool {
        self.inner
            .read()
            .is_ok_and(|inner| inner.files.contains_key(path) || inner.directories.contains(path))
    }

    fn is_dir(&self, path: &Path) -> bool {
        self.inner
            .read()
            .is_ok_and(|inner| inner.directories.contains(path))
    }

    fn read_dir(&self, path: &Path) -> StencilResult<Vec<DirEntry>> {
        let inner = self
            .inner
            .read()
            .map_err(|_| ApplicationError::StoreLockError)?;

        if !inner.directories.contains(path) {
            return Err(ApplicationError::FilesystemError {
                path: path.to_path_buf(),
                reason: "Not a directory".into(),
            }
            .into());
        }

        let is_child = |p: &Path| p.parent() == Some(path);
        let mut entries: Vec<DirEntry> = inner
            .directories
            .iter()
            .filter(|d| is_child(d))
            .map(|d| DirEntry::directory(d.clone()))
            .chain(
                inner
                    .files
                    .keys()
                    .filter(|f| is_child(f))
                    .map(|f| DirEntry::file(f.clone())),
            )
            .collect();

        entries.sort_by(|a, b| a.path.cmp(&b.path));
        Ok(entries)
    }

    fn create_dir_all(&self, path: &Path) -> StencilResult<()> {
        let mut inner = self
            .inner
            .write()
            .map_err(|_| ApplicationError::StoreLockError)?;
        inner.insert_dir_all(path);
        Ok(())
    }

    fn copy_file(&self, from: &Path, to: &Path) -> StencilResult<()> {
        let mut inner = self
            .inner
            .write()
            .map_err(|_| ApplicationError::StoreLockError)?;

        let content = inner.files.get(from).cloned().ok_or_else(|| {
            ApplicationError::FilesystemError {
                path: from.to_path_buf(),
                reason: "No such file".into(),
            }
        })?;
        inner.require_parent(to)?;
        inner.files.insert(to.to_path_buf(), content);
        Ok(())
    }

    fn read_text(&self, path: &Path) -> StencilResult<Option<String>> {
        let inner = self
            .inner
            .read()
            .map_err(|_| ApplicationError::StoreLockError)?;

        let bytes = inner
            .files
            .get(path)
            .ok_or_else(|| ApplicationError::FilesystemError {
                path: path.to_path_buf(),
                reason: "No such file".into(),
            })?;
        Ok(String::from_utf8(bytes.clone()).ok())
    }

    fn write_file(&self, path: &Path, content: &str) -> StencilResult<()> {
        let mut inner = self
            .inner
            .write()
            .map_err(|_| ApplicationError::StoreLockError)?;

        inner.require_parent(path)?;
        inner
            .files
            .insert(path.to_path_buf(), content.as_bytes().to_vec());
        Ok(())
    }

    fn walk_files(&self, root: &Path) -> StencilResult<Vec<PathBuf>> {
        let inner = self
            .inner
            .read()
            .map_err(|_| ApplicationError::StoreLockError)?;

        Ok(inner
            .files
            .keys()
            .filter(|f| f.starts_with(root))
            .cloned()
            .collect())
    }

    /// Lexical only: the store has no links and no working directory.
    fn canonicalize(&self, path: &Path) -> PathBuf {
        let mut normalized = PathBuf::new();
        for component in path.components() {
            match component {
                Component::CurDir => {}
                Component::ParentDir => {
                    normalized.pop();
                }
                other => normalized.push(other),
            }
        }
        normalized
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn read_dir_lists_direct_children_only() {
        let fs = MemoryFilesystem::new();
        fs.add_file("/t/README.txt", "readme");
        fs.add_file("/t/src/main.py", "print()");
        fs.add_dir("/t/doc");

        let entries = fs.read_dir(Path::new("/t")).unwrap();
        let names: Vec<_> = entries
            .iter()
            .map(|e| e.path.file_name().unwrap().to_string_lossy().into_owned())
            .collect();

        assert_eq!(names, vec!["README.txt", "doc", "src"]);
    }

    #[test]
    fn write_requires_parent() {
        let fs = MemoryFilesystem::new();
        assert!(fs.write_file(Path::new("/missing/a.txt"), "x").is_err());
    }

    #[test]
    fn generates_project_in_memory() {
        use stencil_core::{application::ProjectGenerator, domain::ProjectTemplate};

        let fs = MemoryFilesystem::new();
        fs.add_file("/templates/shared/README.md", "# $project_name");
        fs.add_file("/templates/shared/requirements.txt", "pytest");
        fs.add_file("/templates/shared/cicd/azure/azure-pipelines.yml", "x");
        fs.add_file("/templates/package/setup.py", "name='$project_name'");
        fs.add_file("/templates/package/requirements.txt", "setuptools");
        fs.add_file("/templates/package/src/__init__.py", "");

        let report = ProjectGenerator::new(
            ProjectTemplate::in_root("/templates", "package"),
            "new-2",
            Box::new(fs.clone()),
        )
        .generate_template_at_destination("/out")
        .unwrap();

        assert_eq!(report.file_count(), 4);
        assert_eq!(report.rewritten, 2);
        assert_eq!(fs.read_file("/out/README.md").as_deref(), Some("# new-2"));
        assert_eq!(fs.read_file("/out/setup.py").as_deref(), Some("name='new_2'"));
        assert_eq!(fs.read_file("/out/requirements.txt").as_deref(), Some("setuptools"));
        assert!(!fs.exists(Path::new("/out/azure-pipelines.yml")));
    }

    #[test]
    fn canonicalize_is_lexical() {
        let fs = MemoryFilesystem::new();
        assert_eq!(
            fs.canonicalize(Path::new("/templates/./classic/../classic/out")),
            PathBuf::from("/templates/classic/out")
        );
    }

    #[test]
    fn clones_share_state() {
        let fs = MemoryFilesystem::new();
        let other = fs.clone();
        fs.add_file("/a.txt", "hello");
        assert_eq!(other.read_file("/a.txt").as_deref(), Some("hello"));
    }
}
