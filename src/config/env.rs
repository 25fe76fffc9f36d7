//! Environment variable configuration
//!
//! Provides environment variable overrides for configuration.

use std::env;

/// Environment variable prefix
const ENV_PREFIX: &str = "RUN_TESTS";

/// Environment configuration from environment variables
#[derive(Clone, Debug, Default)]
pub struct EnvConfig {
    /// Results directory from RUN_TESTS_RESULTS_DIR
    pub results_dir: Option<String>,
    /// Log file name from RUN_TESTS_LOG_FILE
    pub log_file: Option<String>,
    /// Script interpreter from RUN_TESTS_PYTHON
    pub python: Option<String>,
    /// Notebook tool from RUN_TESTS_NOTEBOOK_TOOL
    pub notebook_tool: Option<String>,
    /// Diagnostic log level from RUN_TESTS_LOG_LEVEL
    pub log_level: Option<String>,
    /// Config file from RUN_TESTS_CONFIG
    pub config_file: Option<String>,
}

impl EnvConfig {
    /// Load configuration from environment variables
    pub fn load() -> Self {
        Self {
            results_dir: get_env("RESULTS_DIR"),
            log_file: get_env("LOG_FILE"),
            python: get_env("PYTHON"),
            notebook_tool: get_env("NOTEBOOK_TOOL"),
            log_level: get_env("LOG_LEVEL"),
            config_file: get_env("CONFIG"),
        }
    }
}

/// Get environment variable with prefix, ignoring empty values
fn get_env(name: &str) -> Option<String> {
    env::var(format!("{ENV_PREFIX}_{name}"))
        .ok()
        .filter(|v| !v.is_empty())
}

/// Help text listing the recognized environment variables
pub fn env_help() -> String {
    format!(
        "Environment Variables:\n  \
         {ENV_PREFIX}_RESULTS_DIR    Directory for logs and captured output\n  \
         {ENV_PREFIX}_LOG_FILE       Run log name inside the results directory\n  \
         {ENV_PREFIX}_PYTHON         Interpreter for .py tests\n  \
         {ENV_PREFIX}_NOTEBOOK_TOOL  Executor for .ipynb tests\n  \
         {ENV_PREFIX}_LOG_LEVEL      Diagnostic level (trace, debug, info, warn, error)\n  \
         {ENV_PREFIX}_CONFIG         Path to a YAML or JSON config file"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Sets variables for the lifetime of the guard, restoring previous values on drop
    struct EnvGuard {
        previous: Vec<(String, Option<String>)>,
    }

    impl EnvGuard {
        fn set(vars: &[(&str, &str)]) -> Self {
            let previous = vars
                .iter()
                .map(|(k, v)| {
                    let key = format!("{ENV_PREFIX}_{k}");
                    let old = env::var(&key).ok();
                    env::set_var(&key, v);
                    (key, old)
                })
                .collect();
            Self { previous }
        }
    }

    impl Drop for EnvGuard {
        fn drop(&mut self) {
            for (key, value) in &self.previous {
                match value {
                    Some(v) => env::set_var(key, v),
                    None => env::remove_var(key),
                }
            }
        }
    }

    #[test]
    fn test_env_config_default() {
        let config = EnvConfig::default();
        assert!(config.python.is_none());
        assert!(config.config_file.is_none());
    }

    #[test]
    fn test_env_load() {
        let _guard = EnvGuard::set(&[("PYTHON", "python3.11"), ("NOTEBOOK_TOOL", "")]);

        let config = EnvConfig::load();
        assert_eq!(config.python, Some("python3.11".to_string()));
        assert!(config.notebook_tool.is_none());
    }

    #[test]
    fn test_env_help_lists_prefix() {
        let help = env_help();
        assert!(help.contains("RUN_TESTS_PYTHON"));
        assert!(help.contains("RUN_TESTS_CONFIG"));
    }
}
