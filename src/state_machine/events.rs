use serde::{Deserialize, Serialize};

/// Events that can advance a report through its lifecycle
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
#[serde(rename_all = "snake_case")]
pub enum ReportEvent {
    /// A raw report was submitted for processing
    Submit,
    /// All validation rules passed
    ValidationPassed,
    /// One or more validation rules failed; carries the rule messages
    ValidationFailed(Vec<String>),
    /// The allocation pass finished (with or without shortfall warnings)
    ResourcesAllocated,
    /// Department fan-out finished
    DepartmentsNotified,
    /// Full-system reset requested. Machines are created per report, so this
    /// usually models the operator-level reset arriving outside any in-flight
    /// report; it is accepted mid-flight as well and abandons the report.
    Reset,
}

impl ReportEvent {
    /// Get a string representation of the event type for logging
    pub fn event_type(&self) -> &'static str {
        match self {
            Self::Submit => "submit",
            Self::ValidationPassed => "validation_passed",
            Self::ValidationFailed(_) => "validation_failed",
            Self::ResourcesAllocated => "resources_allocated",
            Self::DepartmentsNotified => "departments_notified",
            Self::Reset => "reset",
        }
    }

    /// Extract the rule messages if this is a validation failure
    pub fn validation_errors(&self) -> Option<&[String]> {
        match self {
            Self::ValidationFailed(errors) => Some(errors),
            _ => None,
        }
    }
}
