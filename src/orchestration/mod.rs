//! # Report Orchestration
//!
//! The entry point of the system. The [`ReportCoordinator`] owns the
//! disaster log, the resource inventory, and the department directory, and
//! drives each report through validation, allocation, and coordination in a
//! single synchronous pass.
//!
//! ## Control flow
//!
//! ```text
//! ReportRequest -> validate -> DisasterLog.append -> allocate -> notify -> ReportResult
//! ```
//!
//! Validation failures abort with zero side effects; allocation shortfalls
//! are partial failures that surface as warnings on an otherwise successful
//! result.

pub mod report_coordinator;

pub use report_coordinator::{ReportCoordinator, ReportResult};
