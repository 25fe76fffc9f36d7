//! run_tests - Script and Notebook Test Runner
//!
//! Runs Python scripts and Jupyter notebooks as tests. A test passes when its
//! process exits with status 0, i.e. no uncaught exception was raised.
//!
//! ## Features
//!
//! - `.py` files run with `python`, `.ipynb` files with `runipy`
//! - Each test runs from its own directory
//! - Per-test stdout/stderr captured under `testResults/`
//! - Run log in `testResults/testing.log`
//! - Non-zero exit status if any test fails
//!
//! ## Usage
//!
//! ```bash
//! # Run a few tests
//! run_tests docs/examples/*.ipynb utils/test_*.py
//!
//! # Put results somewhere else and use a specific interpreter
//! run_tests --results-dir /tmp/results --python python3 test_mesh.py
//! ```

use anyhow::Result;
use clap::Parser;
use std::io::IsTerminal;
use std::process::ExitCode;
use tracing::debug;

mod cli;
mod config;
mod executor;
mod models;
mod output;
mod results;
mod utils;

use cli::Args;
use config::{ConfigFile, EnvConfig, RunnerConfig};
use executor::{Capabilities, TestRunner};
use output::ReportFormatter;
use utils::{init_logger, LogLevel};

fn main() -> Result<ExitCode> {
    let args = Args::parse();
    let env = EnvConfig::load();

    init_logger(LogLevel::resolve(args.verbose, env.log_level.as_deref()));

    run(&args, &env)
}

/// Run the given test files; with none, print usage and touch nothing
fn run(args: &Args, env: &EnvConfig) -> Result<ExitCode> {
    if args.files.is_empty() {
        println!("{}", Args::usage());
        return Ok(ExitCode::SUCCESS);
    }

    let config = build_config(args, env)?;
    debug!("Using {:?}", config);

    let mut formatter = ReportFormatter::new();
    if !std::io::stdout().is_terminal() {
        formatter = formatter.no_color();
    }

    let capabilities = Capabilities::probe(&config);
    if !capabilities.notebooks {
        println!("{}", formatter.notebooks_unavailable(&config.notebook_tool));
    }

    let results_dir = config.resolve_results_dir()?;

    let runner = TestRunner::new(config, capabilities).with_formatter(formatter);
    let summary = runner.run_all(&args.files, &results_dir)?;

    Ok(summary.exit_code())
}

/// Layer configuration: defaults, config file, environment, then flags
fn build_config(args: &Args, env: &EnvConfig) -> Result<RunnerConfig> {
    let config_path = args
        .config
        .clone()
        .or_else(|| env.config_file.as_ref().map(Into::into));

    let mut config = match config_path {
        Some(path) => RunnerConfig::load(path)?,
        None => ConfigFile::load_default()?.runner,
    };
    config = config.with_env(env);

    if let Some(dir) = &args.results_dir {
        config = config.with_results_dir(dir);
    }
    if let Some(python) = &args.python {
        config = config.with_python(python);
    }
    if let Some(tool) = &args.notebook_tool {
        config = config.with_notebook_tool(tool);
    }

    Ok(config)
}
