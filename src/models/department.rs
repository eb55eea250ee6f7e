use serde::{Deserialize, Serialize};
use std::fmt;

/// The fixed set of departments that can be notified about a disaster.
///
/// Every variant always has an entry in the department directory, so routing
/// never has to create one on the fly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Department {
    FireDepartment,
    EmergencyResponse,
    Hospital,
    Transportation,
    UtilityServices,
    LawEnforcement,
}

impl Department {
    /// All departments, in directory display order
    pub const ALL: [Department; 6] = [
        Department::FireDepartment,
        Department::EmergencyResponse,
        Department::Hospital,
        Department::Transportation,
        Department::UtilityServices,
        Department::LawEnforcement,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Department::FireDepartment => "Fire Department",
            Department::EmergencyResponse => "Emergency Response",
            Department::Hospital => "Hospital",
            Department::Transportation => "Transportation",
            Department::UtilityServices => "Utility Services",
            Department::LawEnforcement => "Law Enforcement",
        }
    }
}

impl fmt::Display for Department {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Department {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Department::ALL
            .iter()
            .find(|d| d.as_str().eq_ignore_ascii_case(s))
            .copied()
            .ok_or_else(|| format!("Unknown department: {s}"))
    }
}
