use serde::{Deserialize, Serialize};
use std::fmt;

/// States a single report moves through from submission to the log
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReportState {
    /// No report in flight
    Idle,
    /// Input rules are being checked; no state has been mutated yet
    Validating,
    /// Requested quantities are being committed against the inventory
    Allocating,
    /// Departments are being notified
    Notifying,
    /// Report recorded; terminal for this report
    Logged,
}

impl ReportState {
    /// Check if this is a terminal state (the report is fully processed)
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Logged)
    }

    /// Check if a report is actively being processed
    pub fn is_active(&self) -> bool {
        matches!(self, Self::Validating | Self::Allocating | Self::Notifying)
    }

    /// Check if side effects may have occurred in or before this state.
    /// Validation failures revert from `Validating`, which mutates nothing.
    pub fn has_side_effects(&self) -> bool {
        matches!(self, Self::Allocating | Self::Notifying | Self::Logged)
    }
}

impl fmt::Display for ReportState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Idle => write!(f, "idle"),
            Self::Validating => write!(f, "validating"),
            Self::Allocating => write!(f, "allocating"),
            Self::Notifying => write!(f, "notifying"),
            Self::Logged => write!(f, "logged"),
        }
    }
}

impl std::str::FromStr for ReportState {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "idle" => Ok(Self::Idle),
            "validating" => Ok(Self::Validating),
            "allocating" => Ok(Self::Allocating),
            "notifying" => Ok(Self::Notifying),
            "logged" => Ok(Self::Logged),
            _ => Err(format!("Invalid report state: {s}")),
        }
    }
}

impl Default for ReportState {
    fn default() -> Self {
        Self::Idle
    }
}
