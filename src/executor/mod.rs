//! Test execution engine
//!
//! Runs test files one at a time as child processes.

mod probe;
mod runner;

pub use probe::Capabilities;
pub use runner::TestRunner;
