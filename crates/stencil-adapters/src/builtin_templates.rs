//! Location of the templates that ship with Stencil.
//!
//! The template tree lives in `crates/stencil-adapters/templates/` and is not
//! embedded in the binary. [`templates_root`] probes, in order:
//!
//! 1. **`<executable-dir>/templates`**: an installed binary with its templates
//!    copied alongside.
//! 2. **`<executable-dir>/../share/stencil/templates`**: the usual prefix layout
//!    (`/usr/local/bin/stencil` + `/usr/local/share/stencil/templates`).
//! 3. **The packaged tree** in this crate's source directory, which is what
//!    `cargo run` and the test suites use.
//!
//! A candidate is accepted only if it contains a `shared/` directory. Users
//! point at their own collection with `templates.path` in the CLI config
//! instead of going through this module.

use std::path::{Path, PathBuf};

use tracing::{debug, instrument};

use stencil_core::domain::SHARED_DIRECTORY_NAME;

/// Names of the templates packaged with this crate.
pub const BUILTIN_TEMPLATE_NAMES: [&str; 4] = ["classic", "gRPC-api", "package", "rest-api"];

/// Root of the packaged template tree in the source checkout.
pub fn packaged_root() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("templates")
}

/// Resolve the built-in templates root using the order in the module docs.
///
/// Always returns a path; when no candidate qualifies the packaged root is
/// returned and any problem surfaces later as `TemplatesRootMissing`.
#[instrument]
pub fn templates_root() -> PathBuf {
    for candidate in candidate_paths() {
        if candidate.join(SHARED_DIRECTORY_NAME).is_dir() {
            debug!(path = %candidate.display(), "using templates root");
            return candidate;
        }
        debug!(path = %candidate.display(), "no shared/ directory, skipping");
    }

    packaged_root()
}

fn candidate_paths() -> Vec<PathBuf> {
    let mut paths = Vec::with_capacity(3);

    if let Some(exe_dir) = std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(Path::to_path_buf))
    {
        paths.push(exe_dir.join("templates"));
        paths.push(exe_dir.join("../share/stencil/templates"));
    }

    paths.push(packaged_root());
    paths
}
