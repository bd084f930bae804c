//! Lexical path arithmetic for anchoring and matching
//!
//! Every helper here is purely lexical: none of them touch the filesystem.
//! A missing build tree must surface later as a missing-database error, not
//! as an I/O failure while resolving paths, so symlinks are not chased and
//! nonexistent components are fine.

use anyhow::{Context, Result};
use std::path::{Component, Path, PathBuf};

/// Directory containing the running executable. Relative CLI paths are
/// anchored here, not at the process working directory, so the tool behaves
/// the same no matter where the build system invokes it from.
pub fn tool_dir() -> Result<PathBuf> {
    let exe = std::env::current_exe().context("Failed to locate the cribar executable")?;
    let dir = exe
        .parent()
        .context("Executable path has no parent directory")?;
    Ok(dir.to_path_buf())
}

/// Join `path` onto `base` unless it is already absolute, then normalize.
pub fn resolve(base: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        normalize(path)
    } else {
        normalize(&base.join(path))
    }
}

/// Fold `.` and `..` components out of a path without consulting the
/// filesystem. `..` at the start of a relative path is kept; `..` directly
/// under the root is dropped, like `realpath` would.
pub fn normalize(path: &Path) -> PathBuf {
    let mut parts: Vec<Component> = Vec::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match parts.last() {
                Some(Component::Normal(_)) => {
                    parts.pop();
                }
                Some(Component::RootDir) | Some(Component::Prefix(_)) => {}
                _ => parts.push(component),
            },
            other => parts.push(other),
        }
    }
    if parts.is_empty() {
        return PathBuf::from(".");
    }
    parts.iter().map(|c| c.as_os_str()).collect()
}

/// Lexical relative path from `root` to `path`, the way `os.path.relpath`
/// computes it: strip the common component prefix, then climb with `..` for
/// whatever remains of `root`. Both arguments are normalized first; equal
/// paths yield `.`.
pub fn relative_to(path: &Path, root: &Path) -> PathBuf {
    let path = normalize(path);
    let root = normalize(root);

    let mut path_iter = path.components();
    let mut root_iter = root.components();
    let mut parts: Vec<Component> = Vec::new();

    loop {
        match (path_iter.next(), root_iter.next()) {
            (None, None) => break,
            (Some(a), None) => {
                parts.push(a);
                parts.extend(path_iter);
                break;
            }
            (None, Some(_)) => parts.push(Component::ParentDir),
            (Some(a), Some(b)) if parts.is_empty() && a == b => {}
            (Some(a), Some(_)) => {
                parts.push(Component::ParentDir);
                for _ in root_iter.by_ref() {
                    parts.push(Component::ParentDir);
                }
                parts.push(a);
                parts.extend(path_iter);
                break;
            }
        }
    }

    if parts.is_empty() {
        return PathBuf::from(".");
    }
    parts.iter().map(|c| c.as_os_str()).collect()
}
