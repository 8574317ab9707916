/*
[INPUT]:  YAML configuration file (optional)
[OUTPUT]: Parsed and validated TasklistConfig
[POS]:    Configuration layer - logging and UI settings
[UPDATE]: When adding new configuration options
*/

use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};

/// Top-level configuration for the task list TUI
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct TasklistConfig {
    /// Logging setup
    #[serde(default)]
    pub log: LogConfig,
    /// Terminal UI setup
    #[serde(default)]
    pub ui: UiConfig,
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LogConfig {
    /// Filter directive, e.g. "info" or "tasklist_store=debug"
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Optional file that receives a copy of every log line
    #[serde(default)]
    pub file: Option<PathBuf>,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            file: None,
        }
    }
}

/// Terminal UI configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct UiConfig {
    /// Redraw interval in milliseconds
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,
    /// Show the log panel beside the task list
    #[serde(default = "default_log_panel")]
    pub log_panel: bool,
    /// Lines kept in the in-memory log buffer
    #[serde(default = "default_log_capacity")]
    pub log_capacity: usize,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: default_tick_rate_ms(),
            log_panel: default_log_panel(),
            log_capacity: default_log_capacity(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_tick_rate_ms() -> u64 {
    250
}

fn default_log_panel() -> bool {
    true
}

fn default_log_capacity() -> usize {
    2000
}

impl TasklistConfig {
    /// Load configuration from YAML file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("read config file {}", path.display()))?;
        let config: Self = serde_yaml::from_str(&content)
            .with_context(|| format!("parse config file {}", path.display()))?;
        config.validate()?;
        Ok(config)
    }

    /// Explicit path if given, else the per-user config file when present, else defaults.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        if let Some(path) = path {
            return Self::from_file(path);
        }
        match default_config_path() {
            Some(path) if path.is_file() => Self::from_file(&path),
            _ => Ok(Self::default()),
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.ui.tick_rate_ms == 0 {
            bail!("ui.tick_rate_ms must be greater than zero");
        }
        if self.log.level.trim().is_empty() {
            bail!("log.level cannot be empty");
        }
        Ok(())
    }
}

/// `<config dir>/tasklist/config.yaml`
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("tasklist").join("config.yaml"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_config(yaml: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        file.write_all(yaml.as_bytes()).expect("write config");
        file
    }

    #[test]
    fn test_defaults_fill_missing_sections() {
        let file = write_config("log:\n  level: debug\n");
        let config = TasklistConfig::from_file(file.path()).expect("config loads");
        assert_eq!(config.log.level, "debug");
        assert!(config.log.file.is_none());
        assert_eq!(config.ui.tick_rate_ms, 250);
        assert!(config.ui.log_panel);
        assert_eq!(config.ui.log_capacity, 2000);
    }

    #[test]
    fn test_zero_tick_rate_rejected() {
        let file = write_config("ui:\n  tick_rate_ms: 0\n");
        let err = TasklistConfig::from_file(file.path()).expect_err("invalid tick rate");
        assert!(err.to_string().contains("tick_rate_ms"));
    }

    #[test]
    fn test_missing_file_reports_path() {
        let err = TasklistConfig::from_file(Path::new("/nonexistent/tasklist.yaml"))
            .expect_err("missing file");
        assert!(format!("{err:#}").contains("/nonexistent/tasklist.yaml"));
    }
}
