//! Report line formatting
//!
//! Console and `testing.log` carry the same report with slightly different
//! framing.

use std::path::Path;

use crate::models::{RunSummary, TestInvocation};

const PASS: &str = "PASS";
const ERROR: &str = "ERROR";

/// Formatter for progress, result and summary lines
#[derive(Clone, Copy, Debug)]
pub struct ReportFormatter {
    colorize: bool,
}

impl ReportFormatter {
    pub fn new() -> Self {
        Self { colorize: true }
    }

    pub fn no_color(mut self) -> Self {
        self.colorize = false;
        self
    }

    /// Console line announcing a test
    pub fn progress(&self, invocation: &TestInvocation) -> String {
        format!(
            "\nRunning test {}: {}",
            invocation.index,
            invocation.path.display()
        )
    }

    /// Log entry announcing a test
    pub fn log_running(&self, invocation: &TestInvocation) -> String {
        format!("\nRunning {}", invocation.path.display())
    }

    /// Console warning printed once when notebooks will be skipped
    pub fn notebooks_unavailable(&self, tool: &str) -> String {
        format!(
            "'{tool}' does not appear to be available. All jupyter notebooks will be skipped."
        )
    }

    /// Console line for a passing test
    pub fn pass(&self) -> String {
        format!(" .... {}", self.paint(PASS, "32"))
    }

    /// Log entry for a passing test
    pub fn log_pass(&self) -> String {
        format!(" .... {PASS}")
    }

    /// Console line for a failing test
    pub fn error(&self, invocation: &TestInvocation, results_dir: &Path) -> String {
        format!(
            " .... {} (see {} for details)",
            self.paint(ERROR, "31"),
            output_pattern(invocation, results_dir)
        )
    }

    /// Log entry for a failing test
    pub fn log_error(&self, invocation: &TestInvocation, results_dir: &Path) -> String {
        format!(
            " .... {ERROR} (see {} for details)\n",
            output_pattern(invocation, results_dir)
        )
    }

    /// Trailing log summary
    pub fn log_summary(&self, summary: &RunSummary) -> String {
        format!(
            "\nNumber of fails {}:\n{}",
            summary.fail_count(),
            summary.failure_list()
        )
    }

    /// Console summary
    pub fn summary(&self, summary: &RunSummary) -> String {
        format!(
            "\n\nTotal: Number of fails {}\n{}",
            summary.fail_count(),
            summary.failure_list()
        )
    }

    fn paint(&self, text: &str, color: &str) -> String {
        if self.colorize {
            format!("\x1b[{color}m{text}\x1b[0m")
        } else {
            text.to_string()
        }
    }
}

impl Default for ReportFormatter {
    fn default() -> Self {
        Self::new()
    }
}

/// Glob covering every file a test left in the results directory
fn output_pattern(invocation: &TestInvocation, results_dir: &Path) -> String {
    format!(
        "{}*",
        results_dir.join(invocation.output_basename()).display()
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{TestResult, TestStatus};

    fn formatter() -> ReportFormatter {
        ReportFormatter::new().no_color()
    }

    #[test]
    fn test_progress_lines() {
        let invocation = TestInvocation::new("docs/a.py", 1);
        assert_eq!(formatter().progress(&invocation), "\nRunning test 1: docs/a.py");
        assert_eq!(formatter().log_running(&invocation), "\nRunning docs/a.py");
        assert_eq!(formatter().pass(), " .... PASS");
        assert_eq!(formatter().log_pass(), " .... PASS");
    }

    #[test]
    fn test_error_lines() {
        let invocation = TestInvocation::new("docs/b.py", 2);
        let dir = Path::new("/opt/testResults");
        assert_eq!(
            formatter().error(&invocation, dir),
            " .... ERROR (see /opt/testResults/test_2__b.py* for details)"
        );
        assert_eq!(
            formatter().log_error(&invocation, dir),
            " .... ERROR (see /opt/testResults/test_2__b.py* for details)\n"
        );
    }

    #[test]
    fn test_notebooks_unavailable() {
        assert_eq!(
            formatter().notebooks_unavailable("runipy"),
            "'runipy' does not appear to be available. All jupyter notebooks will be skipped."
        );
    }

    #[test]
    fn test_colorized_pass() {
        assert_eq!(ReportFormatter::new().pass(), " .... \x1b[32mPASS\x1b[0m");
    }

    #[test]
    fn test_summaries() {
        let mut summary = RunSummary::new();
        let b = TestInvocation::new("b.py", 2);
        summary.record(TestResult::new(&b, TestStatus::Fail, 1));

        assert_eq!(
            formatter().log_summary(&summary),
            "\nNumber of fails 1:\n['b.py']"
        );
        assert_eq!(
            formatter().summary(&summary),
            "\n\nTotal: Number of fails 1\n['b.py']"
        );
    }
}
