//! Path helpers used when rewriting content paths between projects.
//!
//! Everything here is lexical: no function touches the filesystem, so glob
//! characters (`*`, `**`, `{a,b}`) survive as ordinary path components.

use std::path::{Component, Path, PathBuf};

use crate::errors::{ContentPathsError, Result};

/// Join `relative` onto `base` and resolve `.` and `..` components.
///
/// Backslashes in `relative` are treated as separators so manifests written
/// on Windows resolve the same way on every host.
pub fn combine(base: &Path, relative: &str) -> PathBuf {
    let relative = relative.replace('\\', "/");
    normalize_lexically(&base.join(relative))
}

/// Collapse `.` and `..` components without consulting the filesystem.
///
/// `..` directly under a root is dropped; leading `..` in a relative path is kept.
/// A `..` after a glob component such as `**` is kept as well, since the glob may
/// match any number of directories.
pub fn normalize_lexically(path: &Path) -> PathBuf {
    let mut components: Vec<Component<'_>> = Vec::new();

    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match components.last() {
                Some(Component::Normal(name)) if !is_glob_pattern(&name.to_string_lossy()) => {
                    components.pop();
                }
                Some(Component::RootDir) | Some(Component::Prefix(_)) => {}
                _ => components.push(component),
            },
            other => components.push(other),
        }
    }

    components.iter().map(|c| c.as_os_str()).collect()
}

/// Path of `path` as seen from the directory `base`.
pub fn relative_path(base: &Path, path: &Path) -> Result<PathBuf> {
    let computation_error = |message: &str| ContentPathsError::PathComputation {
        path: path.display().to_string(),
        base: base.display().to_string(),
        message: message.to_string(),
    };

    if path.is_absolute() != base.is_absolute() {
        return Err(computation_error(
            "paths must both be absolute or both be relative",
        ));
    }

    if prefix_of(path) != prefix_of(base) {
        return Err(computation_error("paths are on different roots"));
    }

    let base = normalize_lexically(base);
    let path = normalize_lexically(path);

    pathdiff::diff_paths(&path, &base)
        .ok_or_else(|| computation_error("no relative path exists between them"))
}

/// Rewrite every separator to `/`, whatever the host platform uses.
pub fn normalize_to_forward_slashes(path: &str) -> String {
    path.replace('\\', "/")
}

/// Whether `path` ends with a `/` or `\` separator.
pub fn has_trailing_separator(path: &str) -> bool {
    path.ends_with('/') || path.ends_with('\\')
}

fn is_glob_pattern(component: &str) -> bool {
    component.contains(['*', '?', '[', '{'])
}

fn prefix_of(path: &Path) -> Option<Component<'_>> {
    match path.components().next() {
        Some(prefix @ Component::Prefix(_)) => Some(prefix),
        _ => None,
    }
}
