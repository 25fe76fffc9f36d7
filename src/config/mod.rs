//! Configuration module
//!
//! Handles loading and layering runner configuration.

mod env;
mod file;

pub use env::{env_help, EnvConfig};
pub use file::ConfigFile;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Name of the results directory created next to the executable
pub const RESULTS_DIR_NAME: &str = "testResults";

/// Runner configuration
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RunnerConfig {
    /// Results directory; defaults to `testResults` beside the executable
    pub results_dir: Option<PathBuf>,

    /// Name of the run log inside the results directory
    pub log_file: String,

    /// Interpreter used for `.py` tests
    pub python: String,

    /// Tool used to execute `.ipynb` tests
    pub notebook_tool: String,
}

impl Default for RunnerConfig {
    fn default() -> Self {
        Self {
            results_dir: None,
            log_file: "testing.log".to_string(),
            python: "python".to_string(),
            notebook_tool: "runipy".to_string(),
        }
    }
}

impl RunnerConfig {
    /// Load configuration from file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        ConfigFile::load(path).map(|file| file.runner)
    }

    /// Overlay values set in the environment
    pub fn with_env(mut self, env: &EnvConfig) -> Self {
        if let Some(dir) = &env.results_dir {
            self.results_dir = Some(PathBuf::from(dir));
        }
        if let Some(log_file) = &env.log_file {
            self.log_file = log_file.clone();
        }
        if let Some(python) = &env.python {
            self.python = python.clone();
        }
        if let Some(tool) = &env.notebook_tool {
            self.notebook_tool = tool.clone();
        }
        self
    }

    pub fn with_results_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.results_dir = Some(dir.into());
        self
    }

    pub fn with_python(mut self, python: impl Into<String>) -> Self {
        self.python = python.into();
        self
    }

    pub fn with_notebook_tool(mut self, tool: impl Into<String>) -> Self {
        self.notebook_tool = tool.into();
        self
    }

    /// Absolute results directory.
    ///
    /// Tests run from their own directory, so output paths handed to child
    /// processes must not be relative.
    pub fn resolve_results_dir(&self) -> Result<PathBuf> {
        match &self.results_dir {
            Some(dir) => std::path::absolute(dir)
                .with_context(|| format!("Invalid results directory: {}", dir.display())),
            None => default_results_dir(),
        }
    }
}

/// `testResults` beside the running executable
fn default_results_dir() -> Result<PathBuf> {
    let exe = std::env::current_exe().context("Failed to locate the running executable")?;
    let dir = exe
        .parent()
        .context("Executable path has no parent directory")?;
    Ok(dir.join(RESULTS_DIR_NAME))
}
