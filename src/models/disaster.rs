use crate::constants::ResponsePriority;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Severity levels an operator can assign to a report
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Low,
    Medium,
    High,
}

impl Severity {
    /// Advisory priority classification for display; never gates processing
    pub fn response_priority(&self) -> ResponsePriority {
        match self {
            Severity::High => ResponsePriority::Immediate,
            Severity::Medium => ResponsePriority::Moderate,
            Severity::Low => ResponsePriority::Low,
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Low => write!(f, "Low"),
            Severity::Medium => write!(f, "Medium"),
            Severity::High => write!(f, "High"),
        }
    }
}

impl std::str::FromStr for Severity {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "low" => Ok(Severity::Low),
            "medium" => Ok(Severity::Medium),
            "high" => Ok(Severity::High),
            _ => Err(format!("Invalid severity: {s}")),
        }
    }
}

/// A reported disaster event.
///
/// Immutable after creation: the record store appends it in arrival order and
/// never mutates it. The type is free-form so unrecognized categories still
/// report cleanly (they route to the default department).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Disaster {
    pub disaster_type: String,
    pub location: String,
    pub severity: Severity,
    pub description: String,
}

impl Disaster {
    pub fn new(
        disaster_type: impl Into<String>,
        location: impl Into<String>,
        severity: Severity,
        description: impl Into<String>,
    ) -> Self {
        Self {
            disaster_type: disaster_type.into(),
            location: location.into(),
            severity,
            description: description.into(),
        }
    }

    /// One-line summary used by department histories and the disaster log
    pub fn summary(&self) -> String {
        format!(
            "Disaster [Type={}, Location={}, Severity={}, Description={}]",
            self.disaster_type, self.location, self.severity, self.description
        )
    }
}

impl fmt::Display for Disaster {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.summary())
    }
}
