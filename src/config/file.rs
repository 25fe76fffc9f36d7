//! Configuration file management
//!
//! Handles finding and loading configuration files.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

use super::RunnerConfig;

/// Configuration file locations (in order of precedence)
const CONFIG_LOCATIONS: &[&str] = &[
    "./run-tests.yaml",
    "./run-tests.yml",
    "./.run-tests.yaml",
];

/// Full configuration file structure
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct ConfigFile {
    /// Runner settings
    #[serde(default)]
    pub runner: RunnerConfig,
}

impl ConfigFile {
    /// Find configuration file in standard locations
    pub fn find() -> Option<PathBuf> {
        CONFIG_LOCATIONS
            .iter()
            .map(PathBuf::from)
            .chain(user_config_path())
            .find(|path| path.exists())
    }

    /// Load configuration from the first standard location that exists
    pub fn load_default() -> Result<Self> {
        match Self::find() {
            Some(path) => Self::load(&path),
            None => Ok(Self::default()),
        }
    }

    /// Load configuration from file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        debug!("Loading config from {}", path.display());

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: Self = if is_yaml_file(path) {
            serde_yaml::from_str(&content)
                .with_context(|| format!("Failed to parse YAML config: {}", path.display()))?
        } else {
            serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse JSON config: {}", path.display()))?
        };

        config.validate()?;
        Ok(config)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.runner.python.trim().is_empty() {
            anyhow::bail!("`python` must not be empty");
        }
        if self.runner.notebook_tool.trim().is_empty() {
            anyhow::bail!("`notebook_tool` must not be empty");
        }
        if self.runner.log_file.trim().is_empty() {
            anyhow::bail!("`log_file` must not be empty");
        }
        Ok(())
    }
}

/// `<user config dir>/run-tests/config.yaml`
fn user_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("run-tests").join("config.yaml"))
}

/// Check if file is YAML based on extension
fn is_yaml_file(path: &Path) -> bool {
    path.extension()
        .map(|e| e == "yaml" || e == "yml")
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_load_yaml() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("run-tests.yaml");
        std::fs::write(
            &path,
            "runner:\n  python: python3\n  results_dir: /var/tmp/results\n",
        )
        .unwrap();

        let config = ConfigFile::load(&path).unwrap();
        assert_eq!(config.runner.python, "python3");
        assert_eq!(
            config.runner.results_dir,
            Some(PathBuf::from("/var/tmp/results"))
        );
        assert_eq!(config.runner.notebook_tool, "runipy");
    }

    #[test]
    fn test_load_json() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, r#"{"runner": {"notebook_tool": "jupyter-run"}}"#).unwrap();

        let config = ConfigFile::load(&path).unwrap();
        assert_eq!(config.runner.notebook_tool, "jupyter-run");
        assert_eq!(config.runner.python, "python");
    }

    #[test]
    fn test_validate_rejects_empty_interpreter() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("bad.yml");
        std::fs::write(&path, "runner:\n  python: \"\"\n").unwrap();

        assert!(ConfigFile::load(&path).is_err());
    }

    #[test]
    fn test_missing_file() {
        assert!(ConfigFile::load("/nonexistent/run-tests.yaml").is_err());
    }

    #[test]
    fn test_is_yaml_file() {
        assert!(is_yaml_file(Path::new("a.yaml")));
        assert!(is_yaml_file(Path::new("a.yml")));
        assert!(!is_yaml_file(Path::new("a.json")));
    }
}
