//! CLI argument parsing for cribar

use clap::Parser;
use std::path::PathBuf;

/// Default build directory, two levels above the installed tool.
pub const DEFAULT_BUILD: &str = "../../_build";
/// Default exclusion config, alongside the tool.
pub const DEFAULT_CONFIG: &str = "excludes_clang_tidy.json";

#[derive(Parser, Debug)]
#[command(name = "cribar")]
#[command(version)]
#[command(about = "Sift a compilation database for clang-tidy", long_about = None)]
pub struct Cli {
    /// rel/abs path of the build directory (relative paths resolve against
    /// the tool's own directory, not the working directory)
    #[arg(long = "build", value_name = "PATH", default_value = DEFAULT_BUILD)]
    pub build: PathBuf,

    /// rel/abs path of the config JSON file
    #[arg(long = "config", value_name = "PATH", default_value = DEFAULT_CONFIG)]
    pub config: PathBuf,

    /// Convert includes of excluded directories from -I to -isystem
    #[arg(long = "isystem")]
    pub isystem: bool,

    /// Exit with success when a required input file is missing
    #[arg(long = "graceful")]
    pub graceful: bool,

    /// Enable verbose diagnostics on stderr
    #[arg(long = "debug")]
    pub debug: bool,
}
