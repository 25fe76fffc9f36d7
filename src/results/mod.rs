//! Results directory and run log
//!
//! Owns the on-disk layout written by a run.

mod log;

pub use log::TestLog;

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;
use tracing::debug;

/// Create the results directory if it does not exist yet
pub fn ensure_dir(dir: &Path) -> Result<()> {
    if !dir.is_dir() {
        debug!("Creating results directory {}", dir.display());
    }
    fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create results directory: {}", dir.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_ensure_dir_is_idempotent() {
        let root = TempDir::new().unwrap();
        let dir = root.path().join("testResults");

        ensure_dir(&dir).unwrap();
        ensure_dir(&dir).unwrap();
        assert!(dir.is_dir());
    }
}
