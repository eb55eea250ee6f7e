//! # Allocation Engine
//!
//! Commits requested quantities against the resource inventory, one category
//! at a time in catalog order. The pass is not atomic: a shortfall on one
//! category becomes a warning and the pass moves on, keeping every commit
//! already made. All that can be allocated, is allocated.
//!
//! Per-category request caps are validation's concern and are enforced
//! before this engine runs.

use crate::config::DrsConfig;
use crate::inventory::ResourceInventory;
use crate::models::disaster::Disaster;
use crate::models::resource::Resource;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::{info, warn};

/// Outcome of one allocation pass: the snapshots committed to the disaster
/// plus one warning per category that could not be satisfied. Transient, not
/// persisted anywhere.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AllocationOutcome {
    pub committed: Vec<Resource>,
    pub warnings: Vec<String>,
}

impl AllocationOutcome {
    pub fn is_fully_satisfied(&self) -> bool {
        self.warnings.is_empty()
    }
}

/// Run one allocation pass for a disaster.
///
/// Categories with a requested quantity of zero do not participate. A lookup
/// miss and a quantity shortfall produce the same warning; the report as a
/// whole still proceeds either way.
pub fn allocate(
    disaster: &Disaster,
    requested: &HashMap<String, u32>,
    inventory: &mut ResourceInventory,
    config: &DrsConfig,
) -> AllocationOutcome {
    let mut outcome = AllocationOutcome::default();

    for (name, quantity) in config.ordered_requests(requested) {
        if quantity == 0 {
            continue;
        }

        let shortfall_name = match inventory.find_available_by_name(&name) {
            Some(resource) if resource.available_quantity >= quantity => None,
            Some(resource) => Some(resource.name.clone()),
            None => Some(name.clone()),
        };

        if let Some(shortfall_name) = shortfall_name {
            warn!(
                resource = %shortfall_name,
                requested = quantity,
                disaster_type = %disaster.disaster_type,
                "Allocation shortfall"
            );
            outcome
                .warnings
                .push(format!("Not enough {shortfall_name} available."));
            continue;
        }

        // Availability was just checked, so the commit cannot refuse; the
        // guard inside `commit` stays authoritative regardless.
        if let Some(committed) = inventory.commit(&name, quantity, &disaster.disaster_type) {
            info!(
                resource = %committed.name,
                quantity,
                remaining = committed.available_quantity,
                disaster_type = %disaster.disaster_type,
                "Resource allocated"
            );
            outcome.committed.push(committed);
        }
    }

    outcome
}
