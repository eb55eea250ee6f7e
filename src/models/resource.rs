use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Broad class of allocatable asset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResourceKind {
    Vehicle,
    Personnel,
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResourceKind::Vehicle => write!(f, "Vehicle"),
            ResourceKind::Personnel => write!(f, "Personnel"),
        }
    }
}

/// Allocation status of a resource category.
///
/// Tagged variant rather than a free-form string, so "allocated to X" can
/// never be confused with an availability marker by a case-insensitive
/// comparison.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
#[serde(rename_all = "snake_case")]
pub enum ResourceStatus {
    Available,
    Allocated { disaster_type: String },
}

impl ResourceStatus {
    pub fn is_available(&self) -> bool {
        matches!(self, ResourceStatus::Available)
    }
}

impl fmt::Display for ResourceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResourceStatus::Available => write!(f, "available"),
            ResourceStatus::Allocated { disaster_type } => {
                write!(f, "allocated to {disaster_type}")
            }
        }
    }
}

/// One class of allocatable response asset with a finite quantity pool.
///
/// `allocated_quantity` records only the most recent commit against this
/// category; a later commit overwrites it rather than accumulating.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resource {
    pub id: Uuid,
    pub name: String,
    pub kind: ResourceKind,
    pub status: ResourceStatus,
    pub available_quantity: u32,
    pub allocated_quantity: u32,
}

impl Resource {
    pub fn new(name: impl Into<String>, kind: ResourceKind, available_quantity: u32) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            kind,
            status: ResourceStatus::Available,
            available_quantity,
            allocated_quantity: 0,
        }
    }

    pub fn is_available(&self) -> bool {
        self.status.is_available()
    }
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({}) - Allocated: {} - Available: {}",
            self.name, self.kind, self.allocated_quantity, self.available_quantity
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_resource_starts_available_with_nothing_allocated() {
        let resource = Resource::new("Fire Truck", ResourceKind::Vehicle, 10);
        assert!(resource.is_available());
        assert_eq!(resource.available_quantity, 10);
        assert_eq!(resource.allocated_quantity, 0);
    }

    #[test]
    fn status_renders_allocation_target() {
        let status = ResourceStatus::Allocated {
            disaster_type: "Fire".to_string(),
        };
        assert_eq!(status.to_string(), "allocated to Fire");
        assert!(!status.is_available());
    }

    #[test]
    fn display_matches_listing_format() {
        let mut resource = Resource::new("Ambulance", ResourceKind::Vehicle, 8);
        resource.available_quantity = 6;
        resource.allocated_quantity = 2;
        assert_eq!(
            resource.to_string(),
            "Ambulance (Vehicle) - Allocated: 2 - Available: 6"
        );
    }
}
