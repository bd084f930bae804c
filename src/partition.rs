//! Include/exclude partitioning of compilation database entries
//!
//! Splits the database into the entries clang-tidy should process and the
//! entries it should skip, by matching each source file's directory against
//! the exclusion list.

use crate::config::ExcludeList;
use crate::database::CompileEntry;
use crate::paths;
use anyhow::Result;
use std::path::{Path, PathBuf, MAIN_SEPARATOR};

/// The two ordered halves of a partitioned compilation database.
///
/// Every input entry lands in exactly one half, and relative order within
/// each half matches the input database.
#[derive(Debug, Default)]
pub struct Partition {
    /// Entries the analysis should process.
    pub included: Vec<CompileEntry>,
    /// Entries under an excluded directory.
    pub excluded: Vec<CompileEntry>,
}

/// Partition `entries` against `excludes`, relative to `root`.
///
/// The probe for each entry is the separator-prefixed root-relative
/// directory of its `file`. Matching is an occurrence test over that
/// string: `foo` never matches `foobar`, but the match is not anchored to
/// the root, so `/foo` does match `/sub/foo/bar`. That looseness is
/// deliberate and kept as documented behavior.
pub fn partition(
    entries: Vec<CompileEntry>,
    excludes: &ExcludeList,
    root: &Path,
) -> Result<Partition> {
    let mut partition = Partition::default();

    for entry in entries {
        let probe = directory_probe(&entry, root)?;
        if excludes.matches(&probe) {
            tracing::debug!("-- excluded: {}", probe);
            partition.excluded.push(entry);
        } else {
            tracing::debug!("++ included: {}", probe);
            partition.included.push(entry);
        }
    }

    Ok(partition)
}

/// Separator-prefixed, root-relative directory of the entry's source file.
///
/// A relative `file` is first resolved against the entry's `directory`
/// field when present, else against `root`.
fn directory_probe(entry: &CompileEntry, root: &Path) -> Result<String> {
    let file = PathBuf::from(entry.file()?);
    let file = if file.is_absolute() {
        file
    } else {
        let base = entry
            .directory()
            .map(PathBuf::from)
            .unwrap_or_else(|| root.to_path_buf());
        base.join(file)
    };

    let dir = file.parent().unwrap_or_else(|| Path::new(""));
    let rel = paths::relative_to(dir, root);
    Ok(format!("{}{}", MAIN_SEPARATOR, rel.display()))
}
