use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Raw operator input for a disaster report, before validation.
///
/// `severity` is carried as the raw selection string so the validator can
/// distinguish a real choice from the unset placeholder; `requested` maps a
/// resource category name to the quantity asked for.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReportRequest {
    pub disaster_type: String,
    pub location: String,
    pub severity: String,
    pub description: String,
    pub requested: HashMap<String, u32>,
}

impl ReportRequest {
    pub fn new(
        disaster_type: impl Into<String>,
        location: impl Into<String>,
        severity: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            disaster_type: disaster_type.into(),
            location: location.into(),
            severity: severity.into(),
            description: description.into(),
            requested: HashMap::new(),
        }
    }

    /// Add a requested category quantity, builder-style
    pub fn with_request(mut self, category: impl Into<String>, quantity: u32) -> Self {
        self.requested.insert(category.into(), quantity);
        self
    }
}
