//! Run log
//!
//! `testing.log` receives one entry per test plus a trailing summary. Every
//! entry is flushed as it is written so an interrupted run still leaves a
//! readable log.

use anyhow::{Context, Result};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;

/// Append-only writer for the run log
pub struct TestLog {
    writer: BufWriter<File>,
    path: PathBuf,
}

impl TestLog {
    /// Create the log, truncating any previous run's content
    pub fn create(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let file = File::create(&path)
            .with_context(|| format!("Failed to create log file: {}", path.display()))?;

        Ok(Self {
            writer: BufWriter::new(file),
            path,
        })
    }

    /// Append raw text and flush
    pub fn write(&mut self, text: &str) -> Result<()> {
        self.writer
            .write_all(text.as_bytes())
            .and_then(|()| self.writer.flush())
            .with_context(|| format!("Failed to write log file: {}", self.path.display()))
    }

    /// Flush and close the log
    pub fn finish(mut self) -> Result<()> {
        self.writer
            .flush()
            .with_context(|| format!("Failed to flush log file: {}", self.path.display()))
    }
}
