//! End-to-end report flows through the coordinator: validation, allocation,
//! coordination, and reset behavior.

mod common;

use anyhow::Result;
use drs_core::constants::ResponsePriority;
use drs_core::error::DrsError;
use drs_core::models::{ReportRequest, Severity};

#[test]
fn fire_report_allocates_trucks_and_notifies_fire_chain() -> Result<()> {
    let mut coordinator = common::coordinator();
    let result = coordinator.report_disaster(common::fire_report())?;

    assert_eq!(result.disaster.disaster_type, "Fire");
    assert_eq!(result.disaster.location, "Downtown");
    assert_eq!(result.disaster.severity, Severity::High);
    assert_eq!(result.disaster.description, "Large building on fire");
    assert_eq!(result.response_priority, ResponsePriority::Immediate);

    let truck = &result.committed_resources[0];
    assert_eq!(truck.available_quantity, 8);
    assert_eq!(truck.allocated_quantity, 2);
    assert!(result.warnings.is_empty());
    assert_eq!(
        result.notified_departments,
        vec!["Fire Department", "Emergency Response"]
    );

    assert_eq!(coordinator.disaster_log().len(), 1);
    assert!(coordinator.disaster_log_text().starts_with("1. Disaster [Type=Fire"));
    Ok(())
}

#[test]
fn oversized_flood_request_warns_but_still_logs_and_notifies() -> Result<()> {
    let mut coordinator = common::coordinator_with_loose_caps();
    let result = coordinator.report_disaster(common::flood_report(20))?;

    assert!(result.committed_resources.is_empty());
    assert_eq!(result.warnings, vec!["Not enough Rescue Team available."]);
    assert_eq!(
        result.notified_departments,
        vec!["Emergency Response", "Utility Services", "Law Enforcement"]
    );

    // Inventory untouched by the shortfall.
    let rescue = coordinator
        .list_resources()
        .into_iter()
        .find(|r| r.name == "Rescue Team")
        .expect("rescue team in catalog");
    assert_eq!(rescue.available_quantity, 15);
    assert_eq!(rescue.allocated_quantity, 0);

    assert_eq!(coordinator.disaster_log().len(), 1);
    Ok(())
}

#[test]
fn all_invalid_fields_reject_with_one_error_per_rule() {
    let mut coordinator = common::coordinator();
    let request = ReportRequest::new("Select", "A", "Select", "");

    let err = coordinator.report_disaster(request).unwrap_err();
    let errors = match err {
        DrsError::ValidationFailed(errors) => errors,
        other => panic!("expected ValidationFailed, got {other}"),
    };

    assert_eq!(errors.len(), 5);
    assert!(errors.contains(&"Please select a valid disaster type.".to_string()));
    assert!(errors.contains(&"Please enter a valid location (at least 3 characters).".to_string()));
    assert!(errors.contains(&"Please select the severity of the disaster.".to_string()));
    assert!(errors.contains(
        &"Please provide a more detailed description (at least 10 characters).".to_string()
    ));
    assert!(errors.contains(&"Please select at least one resource to allocate.".to_string()));

    assert!(coordinator.disaster_log().is_empty());
    assert!(coordinator
        .department_summaries()
        .iter()
        .all(|(_, count)| *count == 0));
}

#[test]
fn unknown_disaster_type_logs_verbatim_and_routes_to_default() -> Result<()> {
    let mut coordinator = common::coordinator();
    let request = ReportRequest::new(
        "Alien Invasion",
        "City Wide",
        "High",
        "Unidentified flying objects attacking",
    )
    .with_request("Rescue Team", 5);

    let result = coordinator.report_disaster(request)?;

    assert_eq!(result.disaster.disaster_type, "Alien Invasion");
    assert_eq!(result.notified_departments, vec!["Emergency Response"]);
    assert_eq!(coordinator.disaster_log()[0].disaster_type, "Alien Invasion");
    Ok(())
}

#[test]
fn each_successful_report_grows_the_log_by_exactly_one() -> Result<()> {
    let mut coordinator = common::coordinator();
    let reports = [
        ReportRequest::new("Fire", "Downtown", "High", "Large building on fire")
            .with_request("Fire Truck", 2),
        ReportRequest::new(
            "Earthquake",
            "City Center",
            "High",
            "Major earthquake, buildings collapsed",
        )
        .with_request("Rescue Team", 5),
        ReportRequest::new(
            "Flood",
            "Riverside",
            "Low",
            "Minor flooding in low-lying areas",
        )
        .with_request("Ambulance", 1),
    ];

    for (i, report) in reports.into_iter().enumerate() {
        coordinator.report_disaster(report)?;
        assert_eq!(coordinator.disaster_log().len(), i + 1);
    }

    let text = coordinator.disaster_log_text();
    assert!(text.contains("1. Disaster [Type=Fire"));
    assert!(text.contains("2. Disaster [Type=Earthquake"));
    assert!(text.contains("3. Disaster [Type=Flood"));
    Ok(())
}

#[test]
fn department_histories_grow_by_one_per_notification() -> Result<()> {
    let mut coordinator = common::coordinator();
    coordinator.report_disaster(
        ReportRequest::new(
            "Earthquake",
            "City Center",
            "High",
            "Major earthquake, buildings collapsed",
        )
        .with_request("Rescue Team", 5),
    )?;

    let summaries = coordinator.department_summaries();
    let count_for = |name: &str| {
        summaries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, c)| *c)
            .unwrap()
    };

    assert_eq!(count_for("Emergency Response"), 1);
    assert_eq!(count_for("Hospital"), 1);
    assert_eq!(count_for("Fire Department"), 1);
    assert_eq!(count_for("Transportation"), 0);
    assert_eq!(count_for("Utility Services"), 0);
    assert_eq!(count_for("Law Enforcement"), 0);
    Ok(())
}

#[test]
fn reset_restores_inventory_histories_and_log() -> Result<()> {
    let mut coordinator = common::coordinator();
    coordinator.report_disaster(common::fire_report())?;
    coordinator.reset();

    assert!(coordinator.disaster_log().is_empty());
    assert_eq!(coordinator.disaster_log_text(), "");

    let resources = coordinator.list_resources();
    assert_eq!(resources.len(), 3);
    for resource in &resources {
        assert!(resource.is_available());
        assert_eq!(resource.allocated_quantity, 0);
    }
    assert_eq!(
        resources.iter().map(|r| r.available_quantity).collect::<Vec<_>>(),
        vec![10, 8, 15]
    );

    assert!(coordinator
        .department_summaries()
        .iter()
        .all(|(_, count)| *count == 0));

    // The reset system accepts new reports immediately.
    coordinator.report_disaster(common::fire_report())?;
    assert_eq!(coordinator.disaster_log().len(), 1);
    Ok(())
}

#[test]
fn partial_allocation_keeps_satisfied_categories_committed() -> Result<()> {
    let mut coordinator = common::coordinator_with_loose_caps();
    let request = ReportRequest::new("Fire", "Downtown", "High", "Large building on fire")
        .with_request("Fire Truck", 3)
        .with_request("Rescue Team", 20);

    let result = coordinator.report_disaster(request)?;

    assert_eq!(result.committed_resources.len(), 1);
    assert_eq!(result.committed_resources[0].name, "Fire Truck");
    assert_eq!(result.warnings, vec!["Not enough Rescue Team available."]);
    Ok(())
}
