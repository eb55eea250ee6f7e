//! # Event System
//!
//! Lifecycle event publishing for the report pipeline. Event names live in
//! [`crate::constants::events`]; payloads are JSON contexts assembled by the
//! orchestrator.

pub mod publisher;

pub use publisher::{EventPublisher, PublishError, PublishedEvent};
