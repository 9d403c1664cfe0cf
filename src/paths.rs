//! Mount-path derivation.

use std::path::Path;

/// Derive the repository path used inside the container.
///
/// Strips the literal `<gopath>/src/` prefix from the working directory.
/// A working directory outside the source root is returned unchanged;
/// the substitution is a silent no-op in that case.
pub fn repo_path(gopath: &Path, pwd: &Path) -> String {
    let pwd = pwd.to_string_lossy();
    let prefix = format!("{}/src/", gopath.to_string_lossy());
    match pwd.strip_prefix(prefix.as_str()) {
        Some(stripped) => stripped.to_string(),
        None => pwd.into_owned(),
    }
}
