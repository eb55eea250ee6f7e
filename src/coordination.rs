//! # Coordination Engine
//!
//! Routes a disaster to the departments that must respond and records the
//! notification in each department's history. Routing is a data-driven
//! ordered table keyed on the lowercased disaster type with an explicit
//! default entry, so every type (known or unknown) resolves to at least one
//! department. This operation has no failure mode.

use crate::models::department::Department;
use crate::models::disaster::Disaster;
use std::collections::HashMap;
use tracing::info;

use Department::*;

/// Ordered routing table: disaster type to the departments notified, in
/// notification order.
const ROUTING_TABLE: &[(&str, &[Department])] = &[
    ("earthquake", &[EmergencyResponse, Hospital, FireDepartment]),
    ("flood", &[EmergencyResponse, UtilityServices, LawEnforcement]),
    ("hurricane", &[EmergencyResponse, Transportation, UtilityServices]),
    ("fire", &[FireDepartment, EmergencyResponse]),
    ("tornado", &[EmergencyResponse, LawEnforcement, Transportation]),
];

/// Fallback for disaster types the table does not name
const DEFAULT_ROUTE: &[Department] = &[EmergencyResponse];

/// Departments to notify for a disaster type, case-insensitive exact match
pub fn route(disaster_type: &str) -> &'static [Department] {
    let key = disaster_type.to_lowercase();
    ROUTING_TABLE
        .iter()
        .find(|(entry, _)| *entry == key)
        .map(|(_, departments)| *departments)
        .unwrap_or(DEFAULT_ROUTE)
}

/// Owns the fixed department set and, per department, the ordered history of
/// disasters it was notified about. Every department always has an entry,
/// possibly empty.
#[derive(Debug)]
pub struct DepartmentDirectory {
    histories: HashMap<Department, Vec<String>>,
}

impl Default for DepartmentDirectory {
    fn default() -> Self {
        Self::new()
    }
}

impl DepartmentDirectory {
    pub fn new() -> Self {
        let histories = Department::ALL
            .iter()
            .map(|d| (*d, Vec::new()))
            .collect();
        Self { histories }
    }

    /// Notify every department routed for this disaster, appending a summary
    /// to each history in routing-table order. Returns the notified
    /// departments for confirmation display.
    pub fn notify(&mut self, disaster: &Disaster) -> Vec<Department> {
        let departments = route(&disaster.disaster_type);
        let summary = disaster.summary();

        for department in departments {
            self.histories
                .entry(*department)
                .or_default()
                .push(summary.clone());
        }

        info!(
            disaster_type = %disaster.disaster_type,
            departments = ?departments.iter().map(|d| d.as_str()).collect::<Vec<_>>(),
            "Departments notified"
        );

        departments.to_vec()
    }

    /// Notification history for one department, oldest first
    pub fn history(&self, department: Department) -> &[String] {
        self.histories
            .get(&department)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Department name to notified-count, in directory display order
    pub fn summaries(&self) -> Vec<(String, usize)> {
        Department::ALL
            .iter()
            .map(|d| (d.as_str().to_string(), self.history(*d).len()))
            .collect()
    }

    /// Empty every history while keeping all departments present
    pub fn reset(&mut self) {
        for history in self.histories.values_mut() {
            history.clear();
        }
    }
}
