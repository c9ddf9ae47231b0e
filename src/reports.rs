//! Log of filed sighting reports.
//!
//! Persists reported case IDs with timestamps to a JSON file.

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::Path;

/// Reports filed from this machine, keyed by case id.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ReportLog {
    /// Case id → time of the latest report
    #[serde(default)]
    reports: HashMap<String, DateTime<Utc>>,
}

impl ReportLog {
    /// Load the report log from file.
    ///
    /// # Arguments
    /// * `path` - Path to the report log JSON file
    ///
    /// # Returns
    /// * `Result<ReportLog>` - Loaded log or error
    ///
    /// # Details
    /// If the file doesn't exist, returns an empty log.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read report log: {}", path.display()))?;

        serde_json::from_str(&content).with_context(|| "Failed to parse report log")
    }

    /// Save the report log to file.
    ///
    /// # Details
    /// Creates the parent directory if it doesn't exist.
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create report log directory: {}", parent.display())
            })?;
        }

        let json = serde_json::to_string_pretty(self).context("Failed to serialize report log")?;

        fs::write(path, json)
            .with_context(|| format!("Failed to write report log: {}", path.display()))?;

        Ok(())
    }

    /// Record a report for a case, replacing any earlier timestamp.
    pub fn mark_reported(&mut self, case_id: &str) {
        self.reports.insert(case_id.to_string(), Utc::now());
    }

    /// Every case id with a filed report, in no particular order.
    pub fn case_ids(&self) -> impl Iterator<Item = &str> {
        self.reports.keys().map(String::as_str)
    }

    pub fn reported_count(&self) -> usize {
        self.reports.len()
    }

    /// Reported cases, newest first.
    pub fn recent(&self) -> Vec<(&str, DateTime<Utc>)> {
        let mut entries: Vec<(&str, DateTime<Utc>)> = self
            .reports
            .iter()
            .map(|(id, at)| (id.as_str(), *at))
            .collect();
        entries.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
        entries
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use tempfile::TempDir;

    #[test]
    fn test_report_log_mark() {
        let mut log = ReportLog::default();
        assert_eq!(log.case_ids().count(), 0);
        log.mark_reported("001");
        log.mark_reported("001");
        assert_eq!(log.case_ids().collect::<Vec<_>>(), ["001"]);
        assert_eq!(log.reported_count(), 1);
    }

    #[test]
    fn test_report_log_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nested").join("reports.json");

        let mut log = ReportLog::default();
        log.mark_reported("001");
        log.mark_reported("003");
        log.save(&path).unwrap();
        assert!(path.exists());

        let loaded = ReportLog::load(&path).unwrap();
        assert_eq!(loaded.reported_count(), 2);
        assert!(loaded.case_ids().any(|id| id == "003"));
    }

    #[test]
    fn test_report_log_missing_file() {
        let temp_dir = TempDir::new().unwrap();
        let log = ReportLog::load(&temp_dir.path().join("none.json")).unwrap();
        assert_eq!(log.reported_count(), 0);
    }

    #[test]
    fn test_report_log_recent_order() {
        let mut log = ReportLog::default();
        log.reports
            .insert("old".to_string(), Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap());
        log.reports
            .insert("new".to_string(), Utc.with_ymd_and_hms(2025, 6, 1, 0, 0, 0).unwrap());
        let ids: Vec<&str> = log.recent().into_iter().map(|(id, _)| id).collect();
        assert_eq!(ids, ["new", "old"]);
    }
}
