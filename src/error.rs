//! Typed failures for missing required inputs
//!
//! Only two conditions are recoverable enough to deserve a type: a missing
//! exclusion config and a missing compilation database. Everything else
//! (unreadable files, malformed JSON, entries without `file`/`command`)
//! propagates as a context-wrapped `anyhow::Error` and is always fatal.

use std::path::PathBuf;
use thiserror::Error;

/// A required input file is absent at its expected path.
#[derive(Debug, Error)]
pub enum FilterError {
    /// The directory exclusion configuration was not found.
    #[error("directory exclusion configuration is missing:\n{}", .0.display())]
    MissingConfig(PathBuf),

    /// The CMake-generated compilation database was not found.
    #[error("CMake-generated compilation database is missing:\n{}", .0.display())]
    MissingDatabase(PathBuf),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_config_names_the_path() {
        let err = FilterError::MissingConfig(PathBuf::from("/etc/excludes.json"));
        let msg = err.to_string();
        assert!(msg.contains("exclusion configuration is missing"));
        assert!(msg.contains("/etc/excludes.json"));
    }

    #[test]
    fn test_missing_database_names_the_path() {
        let err = FilterError::MissingDatabase(PathBuf::from("/b/compile_commands.json"));
        let msg = err.to_string();
        assert!(msg.contains("compilation database is missing"));
        assert!(msg.contains("/b/compile_commands.json"));
    }
}
