//! # Data Model Layer
//!
//! Core records of the disaster response system: the disaster report itself,
//! allocatable resource categories, and the fixed department set.

pub mod department;
pub mod disaster;
pub mod report_request;
pub mod resource;

pub use department::Department;
pub use disaster::{Disaster, Severity};
pub use report_request::ReportRequest;
pub use resource::{Resource, ResourceKind, ResourceStatus};
