//! Data models for test execution
//!
//! This module contains the test file, result and summary types.

mod test_file;
mod test_result;

pub use test_file::{TestInvocation, TestKind};
pub use test_result::{RunSummary, TestResult, TestStatus};
