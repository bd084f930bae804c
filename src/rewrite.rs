//! Demote includes of excluded directories to system includes
//!
//! clang-tidy configured with `HeaderFilterRegex: '.*'` scans headers
//! deeply, and CMake offers no pragmatic way to carve directories out of
//! that. System headers are ignored during analysis unless stated
//! otherwise, so rewriting `-I<dir>` to `-isystem <dir>` keeps the build
//! compiling while headers under excluded directories drop out of the
//! diagnostics.

use crate::config::ExcludeList;
use crate::database::CompileEntry;
use anyhow::Result;
use std::path::{Path, MAIN_SEPARATOR};

/// Rewrite plain includes of excluded directories to `-isystem` form, in
/// place, across `entries`. Returns the number of entries that changed.
///
/// For each exclude, the leading separator is stripped and the remainder
/// joined onto `root` to form the absolute include path. All occurrences of
/// `-I<path>` in an entry's `command` are replaced with `-isystem <path>`.
/// The replacement is idempotent: the plain form no longer occurs after the
/// first pass.
pub fn rewrite_includes(
    entries: &mut [CompileEntry],
    excludes: &ExcludeList,
    root: &Path,
) -> Result<usize> {
    let mut rewritten = 0;

    for entry in entries.iter_mut() {
        let mut command = entry.command()?.to_string();
        let mut changed = false;

        for exclude in excludes.iter() {
            let exclude_path = root.join(exclude.trim_start_matches(MAIN_SEPARATOR));
            let header_include = format!("-I{}", exclude_path.display());
            if command.contains(&header_include) {
                let header_isystem = format!("-isystem {}", exclude_path.display());
                tracing::debug!("-- {}", command);
                command = command.replace(&header_include, &header_isystem);
                tracing::debug!("++ {}", command);
                changed = true;
            }
        }

        if changed {
            entry.set_command(command);
            rewritten += 1;
        }
    }

    Ok(rewritten)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn entry(command: &str) -> CompileEntry {
        serde_json::from_value(json!({
            "file": "/root/src/x.cpp",
            "command": command
        }))
        .unwrap()
    }

    fn excludes(dirs: &[&str]) -> ExcludeList {
        let raw: Vec<Vec<String>> = dirs
            .iter()
            .map(|dir| dir.split('/').map(str::to_string).collect())
            .collect();
        ExcludeList::from_segments(&raw)
    }

    #[test]
    fn test_plain_include_becomes_isystem() {
        let mut entries = vec![entry("cc -I/root/vendor/lib -c x.cpp")];
        let excludes = excludes(&["vendor/lib"]);

        let rewritten =
            rewrite_includes(&mut entries, &excludes, Path::new("/root")).unwrap();
        assert_eq!(rewritten, 1);
        assert_eq!(
            entries[0].command().unwrap(),
            "cc -isystem /root/vendor/lib -c x.cpp"
        );
    }

    #[test]
    fn test_all_occurrences_are_replaced() {
        let mut entries = vec![entry(
            "cc -I/root/vendor/lib -DX -I/root/vendor/lib -c x.cpp",
        )];
        let excludes = excludes(&["vendor/lib"]);

        rewrite_includes(&mut entries, &excludes, Path::new("/root")).unwrap();
        assert_eq!(
            entries[0].command().unwrap(),
            "cc -isystem /root/vendor/lib -DX -isystem /root/vendor/lib -c x.cpp"
        );
    }

    #[test]
    fn test_rewrite_is_idempotent() {
        let mut entries = vec![entry("cc -I/root/vendor/lib -c x.cpp")];
        let excludes = excludes(&["vendor/lib"]);

        rewrite_includes(&mut entries, &excludes, Path::new("/root")).unwrap();
        let once = entries[0].command().unwrap().to_string();

        let rewritten =
            rewrite_includes(&mut entries, &excludes, Path::new("/root")).unwrap();
        assert_eq!(rewritten, 0);
        assert_eq!(entries[0].command().unwrap(), once);
    }

    #[test]
    fn test_unrelated_includes_are_untouched() {
        let original = "cc -I/root/src/api -c x.cpp";
        let mut entries = vec![entry(original)];
        let excludes = excludes(&["vendor/lib"]);

        let rewritten =
            rewrite_includes(&mut entries, &excludes, Path::new("/root")).unwrap();
        assert_eq!(rewritten, 0);
        assert_eq!(entries[0].command().unwrap(), original);
    }

    #[test]
    fn test_multiple_excludes_rewrite_in_one_pass() {
        let mut entries = vec![entry(
            "cc -I/root/vendor/lib -I/root/generated -c x.cpp",
        )];
        let excludes = excludes(&["vendor/lib", "generated"]);

        let rewritten =
            rewrite_includes(&mut entries, &excludes, Path::new("/root")).unwrap();
        assert_eq!(rewritten, 1);
        assert_eq!(
            entries[0].command().unwrap(),
            "cc -isystem /root/vendor/lib -isystem /root/generated -c x.cpp"
        );
    }

    #[test]
    fn test_missing_command_field_is_an_error() {
        let mut entries: Vec<CompileEntry> =
            vec![serde_json::from_value(json!({ "file": "/root/src/x.cpp" })).unwrap()];
        let excludes = excludes(&["vendor"]);

        assert!(rewrite_includes(&mut entries, &excludes, Path::new("/root")).is_err());
    }
}
