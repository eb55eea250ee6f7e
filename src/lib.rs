#![allow(clippy::missing_errors_doc)] // Allow public functions without # Errors sections
#![allow(clippy::must_use_candidate)] // Allow methods without must_use when context is clear

//! # DRS Core
//!
//! In-memory core of a disaster response coordination system: an operator
//! records disaster events, commits a bounded pool of response resources
//! against them, and fans out notifications to coordinating departments.
//!
//! ## Architecture
//!
//! The crate is the allocation-and-coordination engine only. Screens,
//! sessions, and rendering are thin collaborators around the
//! [`orchestration::ReportCoordinator`], which processes one report at a
//! time to completion:
//!
//! ```text
//! ReportRequest -> validation -> DisasterLog.append -> AllocationEngine -> CoordinationEngine -> ReportResult
//! ```
//!
//! ## Module Organization
//!
//! - [`models`] - Disaster records, resource categories, the department set
//! - [`inventory`] - Resource pool with quantity-capped commits
//! - [`allocation`] - Quantity-capped allocation pass with shortfall warnings
//! - [`coordination`] - Type-to-department routing and notification history
//! - [`disaster_log`] - Append-only record store
//! - [`state_machine`] - Per-report lifecycle state tracking
//! - [`orchestration`] - The report coordinator entry point
//! - [`validation`] - Pure accumulating input validation
//! - [`auth`] - Opaque operator registry collaborator
//! - [`events`] - Lifecycle event publishing
//! - [`config`] - Resource catalog configuration
//! - [`error`] - Structured error handling
//!
//! ## Quick Start
//!
//! ```rust
//! use drs_core::models::ReportRequest;
//! use drs_core::orchestration::ReportCoordinator;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let mut coordinator = ReportCoordinator::new();
//!
//! let request = ReportRequest::new("Fire", "Downtown", "High", "Large building on fire")
//!     .with_request("Fire Truck", 2);
//! let result = coordinator.report_disaster(request)?;
//!
//! assert_eq!(result.notified_departments, vec!["Fire Department", "Emergency Response"]);
//! # Ok(())
//! # }
//! ```
//!
//! ## Guarantees
//!
//! - Validation failures reject a report before any state mutation.
//! - Available quantities never go negative; a shortfall yields a warning
//!   and an untouched category, never a partial deduction.
//! - Department routing is total: every disaster type, known or unknown,
//!   notifies at least the default department.

pub mod allocation;
pub mod auth;
pub mod config;
pub mod constants;
pub mod coordination;
pub mod disaster_log;
pub mod error;
pub mod events;
pub mod inventory;
pub mod logging;
pub mod models;
pub mod orchestration;
pub mod state_machine;
pub mod validation;

pub use allocation::AllocationOutcome;
pub use config::{CategoryConfig, DrsConfig};
pub use constants::ResponsePriority;
pub use coordination::DepartmentDirectory;
pub use disaster_log::DisasterLog;
pub use error::{DrsError, Result};
pub use inventory::ResourceInventory;
pub use models::{Department, Disaster, ReportRequest, Resource, ResourceKind, ResourceStatus, Severity};
pub use orchestration::{ReportCoordinator, ReportResult};
pub use state_machine::{ReportEvent, ReportState, ReportStateMachine};
