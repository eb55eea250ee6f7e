use crate::error::{DrsError, Result};
use crate::models::resource::ResourceKind;

/// One entry in the resource catalog: the starting inventory for a category
/// and the largest quantity a single report may request from it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryConfig {
    pub name: String,
    pub kind: ResourceKind,
    pub starting_quantity: u32,
    pub request_cap: u32,
}

impl CategoryConfig {
    pub fn new(name: &str, kind: ResourceKind, starting_quantity: u32, request_cap: u32) -> Self {
        Self {
            name: name.to_string(),
            kind,
            starting_quantity,
            request_cap,
        }
    }
}

#[derive(Debug, Clone)]
pub struct DrsConfig {
    /// Resource catalog in evaluation order. Allocation passes walk this
    /// order, so it doubles as the deterministic tie-break for warnings.
    pub catalog: Vec<CategoryConfig>,
}

impl Default for DrsConfig {
    fn default() -> Self {
        Self {
            catalog: vec![
                CategoryConfig::new("Fire Truck", ResourceKind::Vehicle, 10, 10),
                CategoryConfig::new("Ambulance", ResourceKind::Vehicle, 8, 8),
                CategoryConfig::new("Rescue Team", ResourceKind::Personnel, 15, 15),
            ],
        }
    }
}

impl DrsConfig {
    /// Build the default catalog, then apply any `DRS_START_*` / `DRS_CAP_*`
    /// environment overrides (category name uppercased, spaces to underscores,
    /// e.g. `DRS_START_FIRE_TRUCK=12`).
    pub fn from_env() -> Result<Self> {
        let mut config = Self::default();

        for category in &mut config.catalog {
            let suffix = env_suffix(&category.name);

            if let Ok(start) = std::env::var(format!("DRS_START_{suffix}")) {
                category.starting_quantity = start.parse().map_err(|e| {
                    DrsError::ConfigurationError(format!(
                        "Invalid starting quantity for {}: {e}",
                        category.name
                    ))
                })?;
            }

            if let Ok(cap) = std::env::var(format!("DRS_CAP_{suffix}")) {
                category.request_cap = cap.parse().map_err(|e| {
                    DrsError::ConfigurationError(format!(
                        "Invalid request cap for {}: {e}",
                        category.name
                    ))
                })?;
            }
        }

        Ok(config)
    }

    /// Request cap for a category, matched case-insensitively.
    pub fn cap_for(&self, name: &str) -> Option<u32> {
        self.catalog
            .iter()
            .find(|c| c.name.eq_ignore_ascii_case(name))
            .map(|c| c.request_cap)
    }

    /// Catalog category names in evaluation order.
    pub fn category_order(&self) -> impl Iterator<Item = &str> {
        self.catalog.iter().map(|c| c.name.as_str())
    }

    /// Order a request map for processing: catalog order first, then any
    /// names absent from the catalog sorted alphabetically, so validation
    /// errors and allocation warnings come out deterministically. Request
    /// keys that differ only by case all match the same catalog entry and
    /// are all kept, sorted within it; none is dropped.
    pub fn ordered_requests(
        &self,
        requested: &std::collections::HashMap<String, u32>,
    ) -> Vec<(String, u32)> {
        let mut ordered = Vec::with_capacity(requested.len());
        for name in self.category_order() {
            let mut matches: Vec<(String, u32)> = requested
                .iter()
                .filter(|(key, _)| key.eq_ignore_ascii_case(name))
                .map(|(key, quantity)| (key.clone(), *quantity))
                .collect();
            matches.sort();
            ordered.extend(matches);
        }
        let mut unknown: Vec<_> = requested
            .iter()
            .filter(|(key, _)| self.cap_for(key).is_none())
            .map(|(key, quantity)| (key.clone(), *quantity))
            .collect();
        unknown.sort();
        ordered.extend(unknown);
        ordered
    }
}

fn env_suffix(name: &str) -> String {
    name.to_uppercase().replace(' ', "_")
}
