//! Notebook capability probe
//!
//! Checks once per run whether the notebook tool can be executed at all.

use std::process::{Command, Stdio};
use tracing::debug;

use super::runner::USAGE_METRICS_ENV;
use crate::config::RunnerConfig;

/// Flag passed to the notebook tool when probing it
const PROBE_FLAG: &str = "-h";

/// What this run is able to execute
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Capabilities {
    /// Whether `.ipynb` tests can be run
    pub notebooks: bool,
}

impl Capabilities {
    /// Probe the configured notebook tool
    pub fn probe(config: &RunnerConfig) -> Self {
        Self {
            notebooks: tool_available(&config.notebook_tool),
        }
    }
}

fn tool_available(tool: &str) -> bool {
    let status = Command::new(tool)
        .arg(PROBE_FLAG)
        .env(USAGE_METRICS_ENV, "1")
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status();

    match status {
        Ok(status) if status.success() => true,
        Ok(status) => {
            debug!("`{tool} {PROBE_FLAG}` exited with {status}");
            false
        }
        Err(e) => {
            debug!("`{tool} {PROBE_FLAG}` could not be started: {e}");
            false
        }
    }
}
