//! Cribar - compilation database sifter for clang-tidy
//!
//! This library partitions a CMake-generated `compile_commands.json` into
//! included and excluded subsets based on a JSON exclusion config, and can
//! demote `-I` includes of excluded directories to `-isystem` so their
//! headers drop out of static analysis as well.

pub mod cli;
pub mod config;
pub mod database;
pub mod error;
pub mod partition;
pub mod paths;
pub mod pipeline;
pub mod rewrite;
pub mod writer;
