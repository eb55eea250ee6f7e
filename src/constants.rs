//! # System Constants
//!
//! Core constants and enums that define the operational boundaries of the
//! disaster response coordination system.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Core system events published during the report lifecycle
pub mod events {
    // Report lifecycle events
    pub const REPORT_SUBMITTED: &str = "report.submitted";
    pub const REPORT_VALIDATION_FAILED: &str = "report.validation_failed";
    pub const REPORT_LOGGED: &str = "report.logged";

    // Allocation events
    pub const RESOURCE_ALLOCATED: &str = "resource.allocated";
    pub const RESOURCE_SHORTFALL: &str = "resource.shortfall";

    // Coordination events
    pub const DEPARTMENT_NOTIFIED: &str = "department.notified";

    // System events
    pub const SYSTEM_RESET: &str = "system.reset";
    pub const OPERATOR_LOGIN: &str = "operator.login";
    pub const OPERATOR_LOGOUT: &str = "operator.logout";
}

/// System-wide fixed values
pub mod system {
    /// Placeholder shown by selection widgets before the operator picks a value.
    /// Submitting it is a validation error, never a category of its own.
    pub const UNSET_SELECTION: &str = "Select";
}

/// Advisory response priority derived from a report's severity.
///
/// Informational only: it never gates allocation or notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResponsePriority {
    Immediate,
    Moderate,
    Low,
    Unknown,
}

impl ResponsePriority {
    pub fn as_str(&self) -> &'static str {
        match self {
            ResponsePriority::Immediate => "Immediate Response Required",
            ResponsePriority::Moderate => "Moderate Response Required",
            ResponsePriority::Low => "Low Response Priority",
            ResponsePriority::Unknown => "Unknown Severity",
        }
    }
}

impl fmt::Display for ResponsePriority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
