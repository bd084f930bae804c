//! Exclusion configuration: which directory subtrees leave the analysis set
//!
//! The config file is a JSON array of arrays of strings. Each inner array
//! holds the path segments of one excluded directory, relative to the root
//! directory, so a platform-correct string can be built from it directly.

use crate::error::FilterError;
use anyhow::{Context, Result};
use std::path::{Path, MAIN_SEPARATOR};

/// Ordered list of excluded directory strings.
///
/// Every entry starts artificially with the path separator so that an
/// exclude of `foo` cannot match a directory named `foobar`.
#[derive(Debug, Clone)]
pub struct ExcludeList {
    entries: Vec<String>,
}

impl ExcludeList {
    /// Load the exclusion config from `path`.
    ///
    /// A missing file is a [`FilterError::MissingConfig`]; malformed JSON
    /// propagates as a parse error.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(FilterError::MissingConfig(path.to_path_buf()).into());
        }

        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read exclusion config {}", path.display()))?;
        let raw: Vec<Vec<String>> =
            serde_json::from_str(&contents).context("Invalid exclusion config JSON")?;

        let list = Self::from_segments(&raw);
        tracing::debug!("excluded directories: {:?}", list.entries);
        Ok(list)
    }

    /// Build the list from already-parsed segment arrays.
    pub fn from_segments(raw: &[Vec<String>]) -> Self {
        let sep = MAIN_SEPARATOR.to_string();
        let entries = raw
            .iter()
            .map(|segments| format!("{}{}", sep, segments.join(&sep)))
            .collect();
        Self { entries }
    }

    /// Excluded directory strings, in config order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(String::as_str)
    }

    /// True when any excluded directory occurs in the separator-prefixed
    /// probe string. First hit wins; order is irrelevant to the outcome.
    ///
    /// An occurrence only counts when it ends at a separator or at the end
    /// of the probe, so `/foo` matches `/foo/bar` but not `/foobar`. The
    /// match is not anchored to the start of the probe, so `/foo` does
    /// match `/sub/foo/bar`.
    pub fn matches(&self, probe: &str) -> bool {
        self.entries
            .iter()
            .any(|entry| occurs_on_boundary(probe, entry))
    }

    /// Number of excluded directories.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when no directories are excluded.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Occurrence scan with a right-edge check: the matched excluded path must
/// be followed by a separator or the end of the probe. The left edge is
/// already guaranteed by the artificial leading separator on `entry`.
fn occurs_on_boundary(probe: &str, entry: &str) -> bool {
    let mut start = 0;
    while let Some(pos) = probe[start..].find(entry) {
        let end = start + pos + entry.len();
        if probe[end..]
            .chars()
            .next()
            .map_or(true, |c| c == MAIN_SEPARATOR)
        {
            return true;
        }
        // Entries always begin with the one-byte separator, so stepping
        // one byte past the occurrence stays on a char boundary.
        start += pos + 1;
    }
    false
}
