//! Shared helpers for integration tests.

use drs_core::config::{CategoryConfig, DrsConfig};
use drs_core::models::{ReportRequest, ResourceKind};
use drs_core::orchestration::ReportCoordinator;

pub fn coordinator() -> ReportCoordinator {
    ReportCoordinator::new()
}

/// Coordinator whose request caps sit above the starting stock, so a request
/// can clear validation and still hit an allocation shortfall.
pub fn coordinator_with_loose_caps() -> ReportCoordinator {
    let config = DrsConfig {
        catalog: vec![
            CategoryConfig::new("Fire Truck", ResourceKind::Vehicle, 10, 20),
            CategoryConfig::new("Ambulance", ResourceKind::Vehicle, 8, 20),
            CategoryConfig::new("Rescue Team", ResourceKind::Personnel, 15, 20),
        ],
    };
    ReportCoordinator::with_config(config)
}

pub fn fire_report() -> ReportRequest {
    ReportRequest::new("Fire", "Downtown", "High", "Large building on fire")
        .with_request("Fire Truck", 2)
}

pub fn flood_report(rescue_teams: u32) -> ReportRequest {
    ReportRequest::new("Flood", "Riverside", "Low", "Minor flooding in low-lying areas")
        .with_request("Rescue Team", rescue_teams)
}
