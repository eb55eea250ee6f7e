//! # Resource Inventory
//!
//! Owns the pool of allocatable resource categories and their quantities.
//! Lookup is a linear scan in insertion order, so the first-inserted available
//! match wins when names collide. Quantities never go negative: `commit`
//! refuses any request it cannot fully satisfy.

use crate::config::DrsConfig;
use crate::models::resource::{Resource, ResourceStatus};
use tracing::{debug, warn};
use uuid::Uuid;

#[derive(Debug, Default)]
pub struct ResourceInventory {
    resources: Vec<Resource>,
}

impl ResourceInventory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build an inventory holding one available category per catalog entry
    pub fn from_config(config: &DrsConfig) -> Self {
        let resources = config
            .catalog
            .iter()
            .map(|c| Resource::new(c.name.clone(), c.kind, c.starting_quantity))
            .collect();
        Self { resources }
    }

    /// Insert a new category. Name collisions are not rejected; lookup order
    /// disambiguates them.
    pub fn add_resource(&mut self, resource: Resource) {
        debug!(name = %resource.name, quantity = resource.available_quantity, "Resource added to inventory");
        self.resources.push(resource);
    }

    /// First category whose name matches case-insensitively and whose status
    /// is available. Categories already committed to a disaster do not match.
    pub fn find_available_by_name(&self, name: &str) -> Option<&Resource> {
        self.resources
            .iter()
            .find(|r| r.name.eq_ignore_ascii_case(name) && r.is_available())
    }

    /// Commit `quantity` units of the named category to a disaster.
    ///
    /// Preconditions: an available category with this name exists and holds at
    /// least `quantity` units. When either fails the inventory is untouched
    /// and `None` is returned; callers are expected to have checked
    /// availability first. On success the committed snapshot is returned.
    ///
    /// `allocated_quantity` records this commit only, overwriting whatever a
    /// previous commit recorded.
    pub fn commit(&mut self, name: &str, quantity: u32, disaster_type: &str) -> Option<Resource> {
        let resource = self
            .resources
            .iter_mut()
            .find(|r| r.name.eq_ignore_ascii_case(name) && r.is_available())?;

        if quantity > resource.available_quantity {
            warn!(
                name = %resource.name,
                requested = quantity,
                available = resource.available_quantity,
                "Commit refused: requested quantity exceeds availability"
            );
            return None;
        }

        resource.available_quantity -= quantity;
        resource.allocated_quantity = quantity;
        resource.status = ResourceStatus::Allocated {
            disaster_type: disaster_type.to_string(),
        };
        debug!(
            name = %resource.name,
            quantity,
            disaster_type = %disaster_type,
            remaining = resource.available_quantity,
            "Resource committed"
        );
        Some(resource.clone())
    }

    /// Overwrite the status of the category with the given id. Mirrors manual
    /// operator corrections, e.g. returning a committed category to service.
    pub fn update_status(&mut self, id: Uuid, status: ResourceStatus) -> bool {
        match self.resources.iter_mut().find(|r| r.id == id) {
            Some(resource) => {
                resource.status = status;
                true
            }
            None => false,
        }
    }

    /// Snapshot of every category. Mutating the snapshot does not touch
    /// inventory state.
    pub fn list_all(&self) -> Vec<Resource> {
        self.resources.clone()
    }

    /// Discard all categories and rebuild from the catalog's starting state
    pub fn reset_from_config(&mut self, config: &DrsConfig) {
        self.resources = Self::from_config(config).resources;
    }

    pub fn len(&self) -> usize {
        self.resources.len()
    }

    pub fn is_empty(&self) -> bool {
        self.resources.is_empty()
    }
}
