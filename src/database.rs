//! Compilation database loading
//!
//! Reads the `compile_commands.json` file CMake generates since v2.8.5:
//! one object per translation unit with at least `file` (absolute, or
//! relative to `directory`) and `command` (a single shell-like invocation
//! string).
//! <https://clang.llvm.org/docs/JSONCompilationDatabase.html>

use crate::error::FilterError;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::path::{Path, PathBuf};

/// File name of the compilation database inside the build directory.
pub const DATABASE_FILE: &str = "compile_commands.json";

/// One compilation database object.
///
/// Keys stay in input order and unknown keys round-trip untouched; `file`
/// and `command` are the only fields the pipeline ever reads. There is no
/// schema validation pass: an entry without a string `file` or `command`
/// errors when first accessed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CompileEntry {
    fields: Map<String, Value>,
}

impl CompileEntry {
    /// Source path of the translation unit.
    pub fn file(&self) -> Result<&str> {
        self.str_field("file")
    }

    /// Full compiler invocation string.
    pub fn command(&self) -> Result<&str> {
        self.str_field("command")
    }

    /// Working directory the `file` field may be relative to. Passed
    /// through to the output unmodified.
    pub fn directory(&self) -> Option<&str> {
        self.fields.get("directory").and_then(Value::as_str)
    }

    /// Replace the invocation string, keeping the key's position.
    pub fn set_command(&mut self, command: String) {
        self.fields
            .insert("command".to_string(), Value::String(command));
    }

    fn str_field(&self, key: &str) -> Result<&str> {
        self.fields
            .get(key)
            .and_then(Value::as_str)
            .with_context(|| format!("Compilation database entry has no string '{}' field", key))
    }
}

/// Expected path of the compilation database for a build directory.
pub fn database_path(build_dir: &Path) -> PathBuf {
    build_dir.join(DATABASE_FILE)
}

/// Load the compilation database from `<build_dir>/compile_commands.json`.
///
/// A missing file is a [`FilterError::MissingDatabase`]; malformed JSON
/// propagates as a parse error.
pub fn load_database(build_dir: &Path) -> Result<Vec<CompileEntry>> {
    let path = database_path(build_dir);
    if !path.exists() {
        return Err(FilterError::MissingDatabase(path).into());
    }

    let contents = std::fs::read_to_string(&path)
        .with_context(|| format!("Failed to read compilation database {}", path.display()))?;
    let entries: Vec<CompileEntry> =
        serde_json::from_str(&contents).context("Invalid compilation database JSON")?;

    tracing::debug!("loaded {} compilation database entries", entries.len());
    Ok(entries)
}
