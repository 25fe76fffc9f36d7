//! Test execution runner
//!
//! Dispatches each test file to its interpreter and collects the outcomes.

use anyhow::Result;
use std::fs::{self, File};
use std::io;
use std::path::{Path, PathBuf};
use std::process::Command;
use thiserror::Error;
use tracing::{debug, error, info};

use super::Capabilities;
use crate::config::RunnerConfig;
use crate::models::{RunSummary, TestInvocation, TestKind, TestResult, TestStatus};
use crate::output::ReportFormatter;
use crate::results::{self, TestLog};
use crate::utils::Timer;

/// Set to "1" for every child so tested scripts do not report usage metrics
pub const USAGE_METRICS_ENV: &str = "UW_NO_USAGE_METRICS";

/// Errors raised while running a single test file
#[derive(Error, Debug)]
pub enum RunnerError {
    #[error("Filename must have extension 'py' or 'ipynb': {0}")]
    UnsupportedExtension(PathBuf),

    #[error("Failed to create output directory {path}: {source}")]
    OutputDir { path: PathBuf, source: io::Error },

    #[error("Failed to create output file {path}: {source}")]
    OutputFile { path: PathBuf, source: io::Error },

    #[error("Failed to start `{program}`: {source}")]
    Spawn { program: String, source: io::Error },

    #[error("Failed waiting for `{program}`: {source}")]
    Wait { program: String, source: io::Error },
}

impl RunnerError {
    /// Fatal errors abort the run; the rest count as a failed test
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            RunnerError::UnsupportedExtension(_) | RunnerError::OutputDir { .. }
        )
    }
}

/// Sequential runner for script and notebook tests
pub struct TestRunner {
    config: RunnerConfig,
    capabilities: Capabilities,
    formatter: ReportFormatter,
}

impl TestRunner {
    /// Create a new test runner
    pub fn new(config: RunnerConfig, capabilities: Capabilities) -> Self {
        Self {
            config,
            capabilities,
            formatter: ReportFormatter::new(),
        }
    }

    /// Set the console formatter
    pub fn with_formatter(mut self, formatter: ReportFormatter) -> Self {
        self.formatter = formatter;
        self
    }

    /// Program that runs tests of the given kind
    fn program(&self, kind: TestKind) -> &str {
        match kind {
            TestKind::Script => &self.config.python,
            TestKind::Notebook => &self.config.notebook_tool,
        }
    }

    /// Run one test file, capturing its output under `output_dir`.
    ///
    /// Returns `Ok(true)` when the child exits with status 0.
    pub fn run_file(
        &self,
        invocation: &TestInvocation,
        output_dir: &Path,
    ) -> Result<bool, RunnerError> {
        let kind = invocation
            .kind()
            .ok_or_else(|| RunnerError::UnsupportedExtension(invocation.path.clone()))?;

        fs::create_dir_all(output_dir).map_err(|source| RunnerError::OutputDir {
            path: output_dir.to_path_buf(),
            source,
        })?;

        let program = self.program(kind);
        let mut command = Command::new(program);
        command.arg(invocation.file_name());
        if kind.is_notebook() {
            command.arg(invocation.notebook_output_path(output_dir));
        }

        let stdout = create_output(invocation.stdout_path(output_dir))?;
        let stderr = create_output(invocation.stderr_path(output_dir))?;

        debug!(
            "Spawning {:?} in {}",
            command,
            invocation.working_dir().display()
        );

        let mut child = command
            .current_dir(invocation.working_dir())
            .env(USAGE_METRICS_ENV, "1")
            .stdout(stdout)
            .stderr(stderr)
            .spawn()
            .map_err(|source| RunnerError::Spawn {
                program: program.to_string(),
                source,
            })?;

        let status = child.wait().map_err(|source| RunnerError::Wait {
            program: program.to_string(),
            source,
        })?;

        debug!("{} exited with {}", invocation, status);
        Ok(status.success())
    }

    /// Run every recognized file in order, writing the run log into `results_dir`
    pub fn run_all(&self, files: &[PathBuf], results_dir: &Path) -> Result<RunSummary> {
        results::ensure_dir(results_dir)?;
        let mut log = TestLog::create(results_dir.join(&self.config.log_file))?;

        let mut summary = RunSummary::new();
        let mut index = 0;

        for path in files {
            let Some(kind) = TestKind::from_path(path) else {
                debug!("Skipping {}: not a test file", path.display());
                summary.skip();
                continue;
            };
            if kind.is_notebook() && !self.capabilities.notebooks {
                debug!("Skipping {}: notebooks disabled", path.display());
                summary.skip();
                continue;
            }

            index += 1;
            let invocation = TestInvocation::new(path.clone(), index);

            println!("{}", self.formatter.progress(&invocation));
            log.write(&self.formatter.log_running(&invocation))?;

            let timer = Timer::start(invocation.to_string());
            let passed = match self.run_file(&invocation, results_dir) {
                Ok(passed) => passed,
                Err(e) if e.is_fatal() => return Err(e.into()),
                Err(e) => {
                    error!("{}: {}", invocation, e);
                    false
                }
            };
            let status = TestStatus::from_success(passed);
            let result = TestResult::new(&invocation, status, timer.stop());
            debug!("{}", result);

            if passed {
                println!("{}", self.formatter.pass());
                log.write(&self.formatter.log_pass())?;
            } else {
                println!("{}", self.formatter.error(&invocation, results_dir));
                log.write(&self.formatter.log_error(&invocation, results_dir))?;
            }
            summary.record(result);
        }

        log.write(&self.formatter.log_summary(&summary))?;
        log.finish()?;

        println!("{}", self.formatter.summary(&summary));

        info!(
            "{} run, {} passed, {} failed, {} skipped in {}ms",
            summary.attempted(),
            summary.passed(),
            summary.fail_count(),
            summary.skipped,
            summary.total_duration_ms()
        );

        Ok(summary)
    }
}

fn create_output(path: PathBuf) -> Result<File, RunnerError> {
    File::create(&path).map_err(|source| RunnerError::OutputFile { path, source })
}
