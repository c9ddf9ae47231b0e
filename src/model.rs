//! Wanted-person record model.
//!
//! Contains the record structure handed to the listing view and its priority
//! classification.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Priority classification of a case.
///
/// Deserialization never fails: values outside the three known levels are
/// kept as `Unrecognized` so they can be reported and presented with the
/// default badge.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Priority {
    /// Highest visual emphasis
    High,
    /// Regular emphasis
    Medium,
    /// Subdued emphasis
    Low,
    /// Value outside the known levels (kept verbatim)
    Unrecognized(String),
}

impl Priority {
    /// Parse a raw priority string.
    ///
    /// # Arguments
    /// * `raw` - Priority as it appears in the data ("high", "medium", "low")
    ///
    /// # Returns
    /// * `Priority` - Parsed priority; unknown values become `Unrecognized`
    pub fn parse(raw: &str) -> Self {
        match raw {
            "high" => Priority::High,
            "medium" => Priority::Medium,
            "low" => Priority::Low,
            other => Priority::Unrecognized(other.to_string()),
        }
    }

    /// Raw string form of the priority.
    pub fn as_str(&self) -> &str {
        match self {
            Priority::High => "high",
            Priority::Medium => "medium",
            Priority::Low => "low",
            Priority::Unrecognized(raw) => raw,
        }
    }

    /// Whether the value is one of the three known levels.
    pub fn is_recognized(&self) -> bool {
        !matches!(self, Priority::Unrecognized(_))
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for Priority {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Priority {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(Priority::parse(&raw))
    }
}

/// A wanted-person entry.
///
/// Records are supplied wholesale to the listing view; the view never
/// mutates them.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Record {
    /// Case identifier, used as the card key
    pub id: String,
    /// Full name
    pub name: String,
    /// Age in years
    pub age: u32,
    /// Free-text place where the person was last seen
    #[serde(alias = "lastSeen")]
    pub last_seen_location: String,
    /// Physical description
    pub description: String,
    /// Charges in display order
    #[serde(default)]
    pub charges: Vec<String>,
    /// Priority classification
    pub priority: Priority,
    /// Reference to an external photo
    #[serde(alias = "photo")]
    pub photo_url: String,
    /// Reward amount in rubles; `None` means no reward is offered
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reward: Option<u64>,
}
