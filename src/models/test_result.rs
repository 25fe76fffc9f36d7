//! Test result models
//!
//! Defines per-test status and the run summary.

use std::fmt;
use std::path::PathBuf;
use std::process::ExitCode;

use super::TestInvocation;

/// Outcome of one attempted test
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TestStatus {
    Pass,
    Fail,
}

impl TestStatus {
    pub fn from_success(success: bool) -> Self {
        if success {
            TestStatus::Pass
        } else {
            TestStatus::Fail
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, TestStatus::Pass)
    }
}

impl fmt::Display for TestStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TestStatus::Pass => write!(f, "PASS"),
            TestStatus::Fail => write!(f, "ERROR"),
        }
    }
}

/// Result of a single test execution
#[derive(Clone, Debug)]
pub struct TestResult {
    pub path: PathBuf,
    pub index: u32,
    pub status: TestStatus,
    pub duration_ms: u64,
}

impl TestResult {
    pub fn new(invocation: &TestInvocation, status: TestStatus, duration_ms: u64) -> Self {
        Self {
            path: invocation.path.clone(),
            index: invocation.index,
            status,
            duration_ms,
        }
    }
}

impl fmt::Display for TestResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} Test {}: {} [{}ms]",
            self.status,
            self.index,
            self.path.display(),
            self.duration_ms
        )
    }
}

/// Summary of a whole run
#[derive(Clone, Debug, Default)]
pub struct RunSummary {
    /// Inputs skipped (unrecognized extension, or notebooks without a notebook tool)
    pub skipped: usize,
    /// Original path strings of every failed test, in run order
    pub failures: Vec<String>,
    pub results: Vec<TestResult>,
}

impl RunSummary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a finished test
    pub fn record(&mut self, result: TestResult) {
        if !result.status.is_success() {
            self.failures.push(result.path.display().to_string());
        }
        self.results.push(result);
    }

    pub fn skip(&mut self) {
        self.skipped += 1;
    }

    pub fn attempted(&self) -> usize {
        self.results.len()
    }

    pub fn passed(&self) -> usize {
        self.results.iter().filter(|r| r.status.is_success()).count()
    }

    /// Time spent in all attempted tests
    pub fn total_duration_ms(&self) -> u64 {
        self.results.iter().map(|r| r.duration_ms).sum()
    }

    pub fn fail_count(&self) -> usize {
        self.failures.len()
    }

    pub fn is_all_passed(&self) -> bool {
        self.failures.is_empty()
    }

    /// Failure list rendered like a Python list literal, e.g. `['b.py']`
    pub fn failure_list(&self) -> String {
        let items: Vec<String> = self.failures.iter().map(|f| quote_str(f)).collect();
        format!("[{}]", items.join(", "))
    }

    /// Process status: 0 when every attempted test passed, 1 otherwise
    pub fn exit_status(&self) -> u8 {
        if self.is_all_passed() {
            0
        } else {
            1
        }
    }

    pub fn exit_code(&self) -> ExitCode {
        ExitCode::from(self.exit_status())
    }
}

/// Quote a string the way Python's `repr` does for plain text
fn quote_str(s: &str) -> String {
    let quote = if s.contains('\'') && !s.contains('"') {
        '"'
    } else {
        '\''
    };

    let mut out = String::with_capacity(s.len() + 2);
    out.push(quote);
    for c in s.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\t' => out.push_str("\\t"),
            c if c == quote => {
                out.push('\\');
                out.push(c);
            }
            c => out.push(c),
        }
    }
    out.push(quote);
    out
}
