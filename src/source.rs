//! Record providers.
//!
//! The listing view never loads data itself; a `RecordSource` hands it the
//! full record sequence.

use crate::model::{Priority, Record};
use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while loading records.
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("records file not found: {0}")]
    NotFound(PathBuf),
    #[error("failed to read records file {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to parse records file {path}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Provider of the record sequence.
pub trait RecordSource {
    /// Load all records in display order.
    fn load(&self) -> Result<Vec<Record>, SourceError>;

    /// Short human-readable description (for logs and the status line).
    fn describe(&self) -> String;
}

/// Built-in sample catalog.
#[derive(Debug, Clone, Copy, Default)]
pub struct SampleCatalog;

impl RecordSource for SampleCatalog {
    fn load(&self) -> Result<Vec<Record>, SourceError> {
        Ok(sample_records())
    }

    fn describe(&self) -> String {
        "built-in sample catalog".to_string()
    }
}

fn sample_records() -> Vec<Record> {
    vec![
        Record {
            id: "001".to_string(),
            name: "Ivanov Alexey Petrovich".to_string(),
            age: 34,
            last_seen_location: "Moscow, Khamovniki district".to_string(),
            description: "Height 175 cm, medium build, dark hair, brown eyes".to_string(),
            charges: vec!["Fraud".to_string(), "Tax evasion".to_string()],
            priority: Priority::High,
            photo_url: "https://images.unsplash.com/photo-1507003211169-0a1dd7228f2d?w=300&h=400&fit=crop&crop=face".to_string(),
            reward: Some(50000),
        },
        Record {
            id: "002".to_string(),
            name: "Petrova Maria Sergeevna".to_string(),
            age: 28,
            last_seen_location: "Saint Petersburg, Nevsky district".to_string(),
            description: "Height 165 cm, slim build, fair hair, blue eyes".to_string(),
            charges: vec![
                "Theft".to_string(),
                "Illegal possession of narcotics".to_string(),
            ],
            priority: Priority::Medium,
            photo_url: "https://images.unsplash.com/photo-1494790108755-2616b612b47c?w=300&h=400&fit=crop&crop=face".to_string(),
            reward: None,
        },
        Record {
            id: "003".to_string(),
            name: "Sidorov Vladimir Nikolaevich".to_string(),
            age: 42,
            last_seen_location: "Yekaterinburg, Zheleznodorozhny district".to_string(),
            description: "Height 180 cm, heavy build, bald, grey eyes".to_string(),
            charges: vec![
                "Robbery".to_string(),
                "Causing grievous bodily harm".to_string(),
            ],
            priority: Priority::High,
            photo_url: "https://images.unsplash.com/photo-1472099645785-5658abf4ff4e?w=300&h=400&fit=crop&crop=face".to_string(),
            reward: Some(100000),
        },
    ]
}

/// Records read from a JSON array on disk.
#[derive(Debug, Clone)]
pub struct JsonFileSource {
    path: PathBuf,
}

impl JsonFileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl RecordSource for JsonFileSource {
    fn load(&self) -> Result<Vec<Record>, SourceError> {
        let content = fs::read_to_string(&self.path).map_err(|source| {
            if source.kind() == io::ErrorKind::NotFound {
                SourceError::NotFound(self.path.clone())
            } else {
                SourceError::Read {
                    path: self.path.clone(),
                    source,
                }
            }
        })?;

        serde_json::from_str(&content).map_err(|source| SourceError::Parse {
            path: self.path.clone(),
            source,
        })
    }

    fn describe(&self) -> String {
        format!("records file {}", self.path.display())
    }
}

/// Data-quality finding. Never fatal: the view renders every record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DataWarning {
    /// Case id used by more than one record
    DuplicateId { id: String, occurrences: usize },
    /// Priority outside high/medium/low
    UnrecognizedPriority { id: String, value: String },
    /// Empty or whitespace-only name
    BlankName { id: String },
}

impl std::fmt::Display for DataWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DataWarning::DuplicateId { id, occurrences } => {
                write!(f, "case id {} is used by {} records", id, occurrences)
            }
            DataWarning::UnrecognizedPriority { id, value } => {
                write!(f, "case {} has unrecognized priority {:?}", id, value)
            }
            DataWarning::BlankName { id } => write!(f, "case {} has a blank name", id),
        }
    }
}

/// Check a record sequence for data-quality problems.
///
/// # Arguments
/// * `records` - Records as loaded
///
/// # Returns
/// * `Vec<DataWarning>` - Findings, duplicates first (in first-seen order),
///   then per-record findings in input order
pub fn audit(records: &[Record]) -> Vec<DataWarning> {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    let mut first_seen = Vec::new();
    for record in records {
        let count = counts.entry(record.id.as_str()).or_insert(0);
        if *count == 0 {
            first_seen.push(record.id.as_str());
        }
        *count += 1;
    }

    let mut warnings: Vec<DataWarning> = first_seen
        .into_iter()
        .filter(|id| counts[id] > 1)
        .map(|id| DataWarning::DuplicateId {
            id: id.to_string(),
            occurrences: counts[id],
        })
        .collect();

    for record in records {
        if !record.priority.is_recognized() {
            warnings.push(DataWarning::UnrecognizedPriority {
                id: record.id.clone(),
                value: record.priority.as_str().to_string(),
            });
        }
        if record.name.trim().is_empty() {
            warnings.push(DataWarning::BlankName {
                id: record.id.clone(),
            });
        }
    }

    warnings
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_sample_catalog() {
        let records = SampleCatalog.load().unwrap();
        assert_eq!(records.len(), 3);
        let ids: Vec<&str> = records.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, ["001", "002", "003"]);
        assert_eq!(records[0].reward, Some(50000));
        assert_eq!(records[1].reward, None);
        assert_eq!(records[2].reward, Some(100000));
        assert_eq!(records[0].charges, ["Fraud", "Tax evasion"]);
        assert!(audit(&records).is_empty());
    }

    #[test]
    fn test_json_file_source() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("records.json");
        fs::write(
            &path,
            r#"[{
                "id": "100",
                "name": "Json Person",
                "age": 51,
                "lastSeenLocation": "Kazan",
                "description": "Beard",
                "charges": ["Forgery"],
                "priority": "low",
                "photoUrl": "https://example.com/100.jpg",
                "reward": 25000
            }]"#,
        )
        .unwrap();

        let records = JsonFileSource::new(&path).load().unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].priority, Priority::Low);
        assert_eq!(records[0].reward, Some(25000));
    }

    #[test]
    fn test_json_file_source_missing() {
        let temp_dir = TempDir::new().unwrap();
        let source = JsonFileSource::new(temp_dir.path().join("absent.json"));
        assert!(matches!(source.load(), Err(SourceError::NotFound(_))));
    }

    #[test]
    fn test_json_file_source_malformed() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("records.json");
        fs::write(&path, "{ not json").unwrap();
        assert!(matches!(
            JsonFileSource::new(&path).load(),
            Err(SourceError::Parse { .. })
        ));
    }

    #[test]
    fn test_audit_findings() {
        let mut records = sample_records();
        records[1].id = "001".to_string();
        records[2].priority = Priority::parse("urgent");
        records[2].name = "  ".to_string();

        let warnings = audit(&records);
        assert_eq!(
            warnings,
            vec![
                DataWarning::DuplicateId {
                    id: "001".to_string(),
                    occurrences: 2
                },
                DataWarning::UnrecognizedPriority {
                    id: "003".to_string(),
                    value: "urgent".to_string()
                },
                DataWarning::BlankName {
                    id: "003".to_string()
                },
            ]
        );
    }
}
