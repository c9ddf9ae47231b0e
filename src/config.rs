//! Configuration management for the wanted-persons browser.
//!
//! Handles loading and saving configuration from JSONC files.
//! Manages the record source, file locations and external action commands.

use anyhow::{Context, Result};
use dirs::config_dir;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const APP_DIR: &str = "wanted-tui";

/// Application configuration structure.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    /// JSON records file (relative to config dir or absolute); the built-in
    /// sample catalog is used when unset
    pub records_path: Option<String>,
    /// Report log file (relative to config dir or absolute)
    pub reports_path: String,
    /// Log file (relative to config dir or absolute)
    pub log_path: String,
    /// Default log level directive (overridden by `RUST_LOG`)
    pub log_level: String,
    /// Command run after a report is filed; the case id is appended
    pub report_command: Option<Vec<String>>,
    /// Command run for the emergency call action
    pub emergency_command: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            records_path: None,
            reports_path: "reports.json".to_string(),
            log_path: "wanted-tui.log".to_string(),
            log_level: "info".to_string(),
            report_command: None,
            emergency_command: vec!["xdg-open".to_string(), "tel:102".to_string()],
        }
    }
}

impl Config {
    /// Load configuration from file.
    ///
    /// # Arguments
    /// * `path` - Optional path to config file. If None, uses default location.
    ///
    /// # Returns
    /// * `Result<Config>` - Loaded configuration or error
    ///
    /// # Details
    /// Searches for config file in:
    /// 1. Provided path (if given)
    /// 2. `$XDG_CONFIG_HOME/wanted-tui/config.jsonc`
    /// 3. `~/.config/wanted-tui/config.jsonc`
    ///
    /// If no config file exists, returns default configuration.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let config_path = match path {
            Some(p) => p.to_path_buf(),
            None => Self::default_config_path()?,
        };

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path)
            .with_context(|| format!("Failed to read config file: {}", config_path.display()))?;

        serde_json::from_str(&strip_line_comments(&content))
            .with_context(|| format!("Failed to deserialize config: {}", config_path.display()))
    }

    /// Save configuration to file.
    ///
    /// # Details
    /// Creates config directory if it doesn't exist.
    pub fn save(&self, path: Option<&Path>) -> Result<()> {
        let config_path = match path {
            Some(p) => p.to_path_buf(),
            None => Self::default_config_path()?,
        };

        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        let json = serde_json::to_string_pretty(self).context("Failed to serialize config")?;

        fs::write(&config_path, json)
            .with_context(|| format!("Failed to write config file: {}", config_path.display()))?;

        Ok(())
    }

    /// Get default configuration file path.
    ///
    /// # Returns
    /// * `Result<PathBuf>` - `$XDG_CONFIG_HOME/wanted-tui/config.jsonc` or error
    pub fn default_config_path() -> Result<PathBuf> {
        Ok(app_config_dir()?.join("config.jsonc"))
    }

    /// Resolved records file path, if one is configured.
    pub fn records_file_path(&self) -> Result<Option<PathBuf>> {
        self.records_path.as_deref().map(resolve).transpose()
    }

    /// Resolved report log path.
    pub fn reports_file_path(&self) -> Result<PathBuf> {
        resolve(&self.reports_path)
    }

    /// Resolved log file path.
    pub fn log_file_path(&self) -> Result<PathBuf> {
        resolve(&self.log_path)
    }
}

fn app_config_dir() -> Result<PathBuf> {
    let config_dir =
        config_dir().ok_or_else(|| anyhow::anyhow!("Failed to determine config directory"))?;
    Ok(config_dir.join(APP_DIR))
}

/// Absolute paths are kept; relative ones are joined to the config dir.
fn resolve(path: &str) -> Result<PathBuf> {
    let path = Path::new(path);
    if path.is_absolute() {
        Ok(path.to_path_buf())
    } else {
        Ok(app_config_dir()?.join(path))
    }
}

/// Strip `//` comments that are not inside a string literal.
fn strip_line_comments(content: &str) -> String {
    content
        .lines()
        .map(|line| {
            let mut in_string = false;
            let mut escaped = false;
            let mut prev_slash = false;
            for (i, ch) in line.char_indices() {
                if in_string {
                    match ch {
                        _ if escaped => escaped = false,
                        '\\' => escaped = true,
                        '"' => in_string = false,
                        _ => {}
                    }
                    continue;
                }
                match ch {
                    '"' => {
                        in_string = true;
                        prev_slash = false;
                    }
                    '/' if prev_slash => return line[..i - 1].trim_end(),
                    '/' => prev_slash = true,
                    _ => prev_slash = false,
                }
            }
            line
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert!(config.records_path.is_none());
        assert_eq!(config.reports_path, "reports.json");
        assert_eq!(config.emergency_command, ["xdg-open", "tel:102"]);
    }

    #[test]
    fn test_config_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("config.jsonc");

        let config = Config {
            records_path: Some("/data/records.json".to_string()),
            report_command: Some(vec!["notify-send".to_string(), "Reported".to_string()]),
            ..Config::default()
        };

        config.save(Some(&config_path)).unwrap();
        assert!(config_path.exists());

        let loaded = Config::load(Some(&config_path)).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_config_jsonc_with_comments() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("config.jsonc");

        let jsonc_content = r#"{
            // Where the case records live
            "records_path": "https://mirror.example/records.json", // trailing
            "log_level": "debug"
        }"#;

        fs::write(&config_path, jsonc_content).unwrap();

        let loaded = Config::load(Some(&config_path)).unwrap();
        assert_eq!(
            loaded.records_path.as_deref(),
            Some("https://mirror.example/records.json")
        );
        assert_eq!(loaded.log_level, "debug");
        assert_eq!(loaded.reports_path, "reports.json");
    }

    #[test]
    fn test_config_missing_file_uses_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let loaded = Config::load(Some(&temp_dir.path().join("absent.jsonc"))).unwrap();
        assert_eq!(loaded, Config::default());
    }

    #[test]
    fn test_absolute_paths_kept() {
        let config = Config {
            reports_path: "/tmp/wanted/reports.json".to_string(),
            ..Config::default()
        };
        assert_eq!(
            config.reports_file_path().unwrap(),
            PathBuf::from("/tmp/wanted/reports.json")
        );
    }

    #[test]
    fn test_records_path_resolved_like_other_paths() {
        let config = Config {
            records_path: Some("cases/records.json".to_string()),
            ..Config::default()
        };
        assert_eq!(
            config.records_file_path().unwrap(),
            Some(app_config_dir().unwrap().join("cases/records.json"))
        );

        let absolute = Config {
            records_path: Some("/data/records.json".to_string()),
            ..Config::default()
        };
        assert_eq!(
            absolute.records_file_path().unwrap(),
            Some(PathBuf::from("/data/records.json"))
        );
        assert_eq!(Config::default().records_file_path().unwrap(), None);
    }

    #[test]
    fn test_strip_escaped_quote() {
        let stripped = strip_line_comments(r#"{"a": "x\"//y"} // c"#);
        assert_eq!(stripped, r#"{"a": "x\"//y"}"#);
    }
}
