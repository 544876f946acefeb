//! Placeholder Rewriter - in-place token substitution across generated files.

use std::path::PathBuf;

use tracing::{debug, instrument};

use crate::{application::ports::Filesystem, domain::placeholder, error::StencilResult};

/// Rewrites the placeholder token in a set of files.
pub struct PlaceholderRewriter<'a> {
    filesystem: &'a dyn Filesystem,
}

impl<'a> PlaceholderRewriter<'a> {
    pub fn new(filesystem: &'a dyn Filesystem) -> Self {
        Self { filesystem }
    }

    /// Substitute the project name into each file, returning how many files
    /// changed.
    ///
    /// Files without the token are left untouched. Files that are not valid
    /// UTF-8 are skipped.
    #[instrument(skip_all, fields(files = files.len(), project = %project_name))]
    pub fn rewrite(&self, files: &[PathBuf], project_name: &str) -> StencilResult<usize> {
        let mut rewritten = 0;

        for file in files {
            let Some(content) = self.filesystem.read_text(file)? else {
                debug!(path = %file.display(), "skipping non-text file");
                continue;
            };

            if let Some(updated) = placeholder::substitute(&content, file, project_name) {
                self.filesystem.write_file(file, &updated)?;
                rewritten += 1;
            }
        }

        debug!(rewritten, "placeholders rewritten");
        Ok(rewritten)
    }
}
