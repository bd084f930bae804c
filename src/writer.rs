//! Partitioned database emission
//!
//! Writes the two halves next to the input database. Line counts of the
//! output files must match the original database, minus the extra `[` and
//! `]` lines, so downstream diffs stay readable.

use crate::database::CompileEntry;
use crate::partition::Partition;
use anyhow::{Context, Result};
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use std::path::Path;

/// File name for the included entries, alongside the input database.
pub const INCLUDED_FILE: &str = "compile_commands_inc.json";
/// File name for the excluded entries, alongside the input database.
pub const EXCLUDED_FILE: &str = "compile_commands_exc.json";

/// Serialize both halves into the build directory, overwriting previous
/// runs. 4-space indentation, keys in input order, non-ASCII characters
/// emitted literally.
pub fn write_partition(partition: &Partition, build_dir: &Path) -> Result<()> {
    write_entries(&partition.included, &build_dir.join(INCLUDED_FILE))?;
    write_entries(&partition.excluded, &build_dir.join(EXCLUDED_FILE))?;
    Ok(())
}

fn write_entries(entries: &[CompileEntry], path: &Path) -> Result<()> {
    let mut buf = Vec::new();
    let formatter = PrettyFormatter::with_indent(b"    ");
    let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
    entries
        .serialize(&mut serializer)
        .context("Failed to serialize compilation database entries")?;

    std::fs::write(path, buf).with_context(|| format!("Failed to write {}", path.display()))?;
    tracing::debug!("wrote {} entries to {}", entries.len(), path.display());
    Ok(())
}
