use crate::allocation;
use crate::config::DrsConfig;
use crate::constants::{events, ResponsePriority};
use crate::coordination::DepartmentDirectory;
use crate::disaster_log::DisasterLog;
use crate::error::{DrsError, Result};
use crate::events::{EventPublisher, PublishedEvent};
use crate::inventory::ResourceInventory;
use crate::models::disaster::{Disaster, Severity};
use crate::models::report_request::ReportRequest;
use crate::models::resource::Resource;
use crate::state_machine::{ReportEvent, ReportStateMachine};
use crate::validation;
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::sync::mpsc;
use tracing::{info, warn};

/// Aggregated result of a successfully processed report
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportResult {
    /// The stored disaster record, field-for-field what the operator entered
    pub disaster: Disaster,
    /// Snapshots of every category committed to this disaster
    pub committed_resources: Vec<Resource>,
    /// One warning per requested category that could not be satisfied
    pub warnings: Vec<String>,
    /// Names of the departments notified, in routing order
    pub notified_departments: Vec<String>,
    /// Advisory priority classification derived from severity
    pub response_priority: ResponsePriority,
    /// Operator who filed the report, for display and audit only
    pub reported_by: Option<String>,
}

/// Owns all engine state and processes one report at a time to completion.
///
/// The inventory and department directory are mutated only through the
/// coordinator's engines; tests can run any number of coordinators side by
/// side since nothing here is process-global.
#[derive(Debug)]
pub struct ReportCoordinator {
    config: DrsConfig,
    inventory: ResourceInventory,
    directory: DepartmentDirectory,
    log: DisasterLog,
    publisher: EventPublisher,
    operator: Option<String>,
}

impl Default for ReportCoordinator {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportCoordinator {
    pub fn new() -> Self {
        Self::with_config(DrsConfig::default())
    }

    pub fn with_config(config: DrsConfig) -> Self {
        let inventory = ResourceInventory::from_config(&config);
        Self {
            config,
            inventory,
            directory: DepartmentDirectory::new(),
            log: DisasterLog::new(),
            publisher: EventPublisher::new(),
            operator: None,
        }
    }

    /// Record the operator filing subsequent reports (audit display only)
    pub fn set_operator(&mut self, operator: Option<String>) {
        self.operator = operator;
    }

    /// Subscribe to lifecycle events published by this coordinator
    pub fn subscribe_events(&mut self) -> mpsc::Receiver<PublishedEvent> {
        self.publisher.subscribe()
    }

    /// Process one disaster report to completion.
    ///
    /// Validation runs first; any failure returns
    /// [`DrsError::ValidationFailed`] with zero side effects. On success the
    /// disaster is appended to the log, the allocation pass commits what it
    /// can, and the routed departments are notified.
    pub fn report_disaster(&mut self, request: ReportRequest) -> Result<ReportResult> {
        let mut machine = ReportStateMachine::new();
        machine.transition(&ReportEvent::Submit)?;
        self.publish(
            events::REPORT_SUBMITTED,
            json!({ "disaster_type": request.disaster_type }),
        );

        let errors = validation::validate_report(&request, &self.config);
        if !errors.is_empty() {
            warn!(error_count = errors.len(), "Report rejected by validation");
            self.publish(
                events::REPORT_VALIDATION_FAILED,
                json!({ "errors": errors }),
            );
            machine.transition(&ReportEvent::ValidationFailed(errors.clone()))?;
            return Err(DrsError::ValidationFailed(errors));
        }
        machine.transition(&ReportEvent::ValidationPassed)?;

        // Severity membership was validated above, so this parse can only
        // fail if validation and parsing drift apart.
        let severity: Severity = request
            .severity
            .parse()
            .map_err(DrsError::OrchestrationError)?;
        let response_priority = severity.response_priority();

        let disaster = Disaster::new(
            request.disaster_type.clone(),
            request.location.clone(),
            severity,
            request.description.clone(),
        );
        self.log.append(disaster.clone());

        let outcome = allocation::allocate(
            &disaster,
            &request.requested,
            &mut self.inventory,
            &self.config,
        );
        for committed in &outcome.committed {
            self.publish(
                events::RESOURCE_ALLOCATED,
                json!({
                    "resource": committed.name,
                    "quantity": committed.allocated_quantity,
                    "disaster_type": disaster.disaster_type,
                }),
            );
        }
        for warning in &outcome.warnings {
            self.publish(events::RESOURCE_SHORTFALL, json!({ "warning": warning }));
        }
        machine.transition(&ReportEvent::ResourcesAllocated)?;

        let notified_departments: Vec<String> = self
            .directory
            .notify(&disaster)
            .iter()
            .map(|d| d.as_str().to_string())
            .collect();
        self.publish(
            events::DEPARTMENT_NOTIFIED,
            json!({
                "disaster_type": disaster.disaster_type,
                "departments": notified_departments,
            }),
        );
        machine.transition(&ReportEvent::DepartmentsNotified)?;

        info!(
            disaster_type = %disaster.disaster_type,
            location = %disaster.location,
            severity = %disaster.severity,
            priority = %response_priority,
            committed = outcome.committed.len(),
            warnings = outcome.warnings.len(),
            operator = self.operator.as_deref(),
            "Disaster report logged"
        );
        self.publish(
            events::REPORT_LOGGED,
            json!({
                "disaster_type": disaster.disaster_type,
                "log_length": self.log.len(),
            }),
        );

        Ok(ReportResult {
            disaster,
            committed_resources: outcome.committed,
            warnings: outcome.warnings,
            notified_departments,
            response_priority,
            reported_by: self.operator.clone(),
        })
    }

    /// Restore the whole system to its configured starting state: inventory
    /// back to starting quantities, all department histories emptied, the
    /// disaster log cleared.
    pub fn reset(&mut self) {
        self.inventory.reset_from_config(&self.config);
        self.directory.reset();
        self.log.clear();
        self.publish(events::SYSTEM_RESET, json!({}));
        info!("System reset to default state");
    }

    /// Snapshot of the full inventory
    pub fn list_resources(&self) -> Vec<Resource> {
        self.inventory.list_all()
    }

    /// Department name to notified-count, in directory display order
    pub fn department_summaries(&self) -> Vec<(String, usize)> {
        self.directory.summaries()
    }

    /// Numbered rendering of the disaster log in arrival order
    pub fn disaster_log_text(&self) -> String {
        self.log.render_text()
    }

    /// Stored disaster records in arrival order
    pub fn disaster_log(&self) -> &[Disaster] {
        self.log.entries()
    }

    pub fn config(&self) -> &DrsConfig {
        &self.config
    }

    fn publish(&self, name: &str, context: serde_json::Value) {
        // Event delivery is best-effort; a failed publish never fails the
        // report.
        if let Err(e) = self.publisher.publish(name, context) {
            warn!(event = name, error = %e, "Failed to publish lifecycle event");
        }
    }
}
