//! The sift pipeline: load config, load database, partition, rewrite, write
//!
//! Strictly sequential; each stage completes before the next starts. All
//! state lives in the [`PipelineConfig`] passed in and the values handed
//! between stages, never in globals.

use crate::config::ExcludeList;
use crate::database;
use crate::partition;
use crate::rewrite;
use crate::writer;
use anyhow::Result;
use std::path::PathBuf;

/// How a missing required input terminates the process.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureMode {
    /// Abort with a non-zero exit status (default).
    Fatal,
    /// Print the diagnostic but exit with success, so a wrapping build
    /// script can keep going.
    Graceful,
}

/// Resolved inputs for one run.
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    /// Build directory holding `compile_commands.json`; outputs land here.
    pub build_dir: PathBuf,
    /// Path of the exclusion config.
    pub config_path: PathBuf,
    /// Parent of the build directory. Exclude segments and rewritten
    /// include paths are relative to it.
    pub root_dir: PathBuf,
    /// Rewrite `-I` includes of excluded directories to `-isystem`.
    pub isystem: bool,
    /// Missing-input handling, applied by the caller.
    pub failure_mode: FailureMode,
}

/// Entry counts from a completed run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PipelineSummary {
    /// Entries written to `compile_commands_inc.json`.
    pub included: usize,
    /// Entries written to `compile_commands_exc.json`.
    pub excluded: usize,
    /// Included entries whose `command` was rewritten.
    pub rewritten: usize,
}

/// Run every stage in order and write the partitioned database.
pub fn run(config: &PipelineConfig) -> Result<PipelineSummary> {
    let excludes = ExcludeList::load(&config.config_path)?;
    let entries = database::load_database(&config.build_dir)?;

    let mut parts = partition::partition(entries, &excludes, &config.root_dir)?;

    let rewritten = if config.isystem {
        rewrite::rewrite_includes(&mut parts.included, &excludes, &config.root_dir)?
    } else {
        0
    };

    writer::write_partition(&parts, &config.build_dir)?;

    let summary = PipelineSummary {
        included: parts.included.len(),
        excluded: parts.excluded.len(),
        rewritten,
    };
    tracing::debug!(
        "partitioned {} included / {} excluded, {} commands rewritten",
        summary.included,
        summary.excluded,
        summary.rewritten
    );
    Ok(summary)
}
