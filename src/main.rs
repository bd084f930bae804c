use anyhow::Result;
use clap::Parser;
use cribar::cli::Cli;
use cribar::error::FilterError;
use cribar::paths;
use cribar::pipeline::{self, FailureMode, PipelineConfig, PipelineSummary};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

/// Initialize tracing subscriber for debug output
fn init_tracing(debug: bool) {
    if debug {
        tracing_subscriber::fmt()
            .with_env_filter(
                EnvFilter::from_default_env().add_directive(tracing::Level::TRACE.into()),
            )
            .with_writer(std::io::stderr)
            .init();
    }
}

/// Resolve CLI paths against the tool's own directory and run the pipeline.
fn run(args: &Cli, failure_mode: FailureMode) -> Result<PipelineSummary> {
    let tool_dir = paths::tool_dir()?;
    let build_dir = paths::resolve(&tool_dir, &args.build);
    let config_path = paths::resolve(&tool_dir, &args.config);
    // CMake convention: the build directory sits in the project root.
    let root_dir = paths::normalize(&build_dir.join(".."));

    tracing::debug!("build  = {}", build_dir.display());
    tracing::debug!("config = {}", config_path.display());
    tracing::debug!("root   = {}", root_dir.display());

    let config = PipelineConfig {
        build_dir,
        config_path,
        root_dir,
        isystem: args.isystem,
        failure_mode,
    };
    pipeline::run(&config)
}

fn main() -> ExitCode {
    let args = Cli::parse();
    init_tracing(args.debug);

    let failure_mode = if args.graceful {
        FailureMode::Graceful
    } else {
        FailureMode::Fatal
    };

    match run(&args, failure_mode) {
        Ok(_) => ExitCode::SUCCESS,
        Err(err) => {
            // Missing inputs are the only downgradable failures; everything
            // else exits non-zero in both modes.
            let missing_input = err.downcast_ref::<FilterError>().is_some();
            if failure_mode == FailureMode::Graceful && missing_input {
                eprintln!("** ERROR - {err}");
                ExitCode::SUCCESS
            } else {
                eprintln!("** FATAL - {err:#}");
                ExitCode::FAILURE
            }
        }
    }
}
