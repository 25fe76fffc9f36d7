//! CLI argument parsing
//!
//! Defines command-line interface using clap.

use clap::{CommandFactory, Parser};
use std::path::PathBuf;

use crate::config::env_help;

/// Run Python scripts and Jupyter notebooks as tests
#[derive(Parser, Debug)]
#[command(name = "run_tests")]
#[command(version)]
#[command(about = "Run Python scripts and Jupyter notebooks as tests")]
#[command(
    long_about = "Runs each given Python script or Jupyter notebook in its own directory. \
A test passes when it exits with status 0, which means no uncaught exception \
was raised. Captured output goes to the results directory as \
test_<N>__<name>.out and .err, and a run log is written to testing.log.\n\n\
The process exits with a non-zero status if any test fails."
)]
#[command(override_usage = "run_tests [OPTIONS] foo.py [bar.ipynb [...]]")]
pub struct Args {
    /// Test files (.py or .ipynb); anything else is ignored
    pub files: Vec<PathBuf>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Config file (YAML or JSON)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Directory for the run log and captured output
    #[arg(long)]
    pub results_dir: Option<PathBuf>,

    /// Interpreter for .py tests
    #[arg(long)]
    pub python: Option<String>,

    /// Executor for .ipynb tests
    #[arg(long)]
    pub notebook_tool: Option<String>,
}

impl Args {
    /// Long help text, shown when no test files are given
    pub fn usage() -> String {
        Self::command()
            .after_long_help(env_help())
            .render_long_help()
            .to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_files() {
        let args = Args::parse_from(["run_tests"]);
        assert!(args.files.is_empty());
        assert!(!args.verbose);
    }

    #[test]
    fn test_files_keep_order() {
        let args = Args::parse_from(["run_tests", "b.py", "notes.txt", "a.ipynb"]);
        assert_eq!(
            args.files,
            vec![
                PathBuf::from("b.py"),
                PathBuf::from("notes.txt"),
                PathBuf::from("a.ipynb")
            ]
        );
    }

    #[test]
    fn test_options() {
        let args = Args::parse_from([
            "run_tests",
            "--results-dir",
            "/tmp/results",
            "--python",
            "python3",
            "--notebook-tool",
            "jupyter-run",
            "-v",
            "a.py",
        ]);
        assert_eq!(args.results_dir, Some(PathBuf::from("/tmp/results")));
        assert_eq!(args.python.as_deref(), Some("python3"));
        assert_eq!(args.notebook_tool.as_deref(), Some("jupyter-run"));
        assert!(args.verbose);
        assert_eq!(args.files, vec![PathBuf::from("a.py")]);
    }

    #[test]
    fn test_usage_text() {
        let usage = Args::usage();
        assert!(usage.contains("foo.py"));
        assert!(usage.contains("testing.log"));
        assert!(usage.contains("RUN_TESTS_PYTHON"));
    }
}
