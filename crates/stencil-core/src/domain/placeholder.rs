//! Placeholder substitution rules.
//!
//! Template files carry a single literal token, [`PLACEHOLDER_TOKEN`], that is
//! replaced with the project name. The build manifest (`setup.py`) needs an
//! identifier-safe package name, so hyphens become underscores there.
//!
//! Everything here is pure string/path logic; reading and writing the files is
//! the job of [`crate::application::PlaceholderRewriter`].

use std::borrow::Cow;
use std::path::Path;

/// Literal marker replaced with the project name.
pub const PLACEHOLDER_TOKEN: &str = "$project_name";

const BUILD_MANIFEST_STEM: &str = "setup";
const BUILD_MANIFEST_EXTENSION: &str = "py";

/// Whether `path` names a build manifest that needs an identifier-safe name.
pub fn is_build_manifest(path: &Path) -> bool {
    let stem_matches = path
        .file_stem()
        .is_some_and(|stem| stem == BUILD_MANIFEST_STEM);
    let extension_matches = path
        .extension()
        .is_some_and(|ext| ext == BUILD_MANIFEST_EXTENSION);

    stem_matches && extension_matches
}

/// `my-project` → `my_project`.
pub fn identifier_safe(project_name: &str) -> String {
    project_name.replace('-', "_")
}

/// The value substituted for the token in the file at `path`.
pub fn replacement_for<'a>(path: &Path, project_name: &'a str) -> Cow<'a, str> {
    if is_build_manifest(path) {
        Cow::Owned(identifier_safe(project_name))
    } else {
        Cow::Borrowed(project_name)
    }
}

/// Substitute every occurrence of the token in `content`.
///
/// Returns `None` when the token does not occur, so callers can skip the
/// write-back.
pub fn substitute(content: &str, path: &Path, project_name: &str) -> Option<String> {
    if !content.contains(PLACEHOLDER_TOKEN) {
        return None;
    }
    Some(content.replace(PLACEHOLDER_TOKEN, &replacement_for(path, project_name)))
}
