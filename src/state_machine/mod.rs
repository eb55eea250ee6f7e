//! # Report State Machine
//!
//! Tracks a single report's lifecycle: `Idle → Validating → Allocating →
//! Notifying → Logged`, with a validation failure reverting straight to
//! `Idle` before any side effects occur. Transitions outside this table are
//! rejected, which keeps the orchestrator's call sequence honest.

pub mod events;
pub mod states;

pub use events::ReportEvent;
pub use states::ReportState;

use crate::error::{DrsError, Result};
use tracing::debug;

/// Guarded state machine over one report's lifecycle
#[derive(Debug, Default)]
pub struct ReportStateMachine {
    state: ReportState,
}

impl ReportStateMachine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current_state(&self) -> ReportState {
        self.state
    }

    /// Apply an event, returning the new state or rejecting the transition
    pub fn transition(&mut self, event: &ReportEvent) -> Result<ReportState> {
        let next = match (self.state, event) {
            (ReportState::Idle, ReportEvent::Submit) => ReportState::Validating,
            (ReportState::Validating, ReportEvent::ValidationPassed) => ReportState::Allocating,
            (ReportState::Validating, ReportEvent::ValidationFailed(_)) => ReportState::Idle,
            (ReportState::Allocating, ReportEvent::ResourcesAllocated) => ReportState::Notifying,
            (ReportState::Notifying, ReportEvent::DepartmentsNotified) => ReportState::Logged,
            // Reset returns to Idle from anywhere, including mid-flight.
            (_, ReportEvent::Reset) => ReportState::Idle,
            (state, event) => {
                return Err(DrsError::StateTransitionError(format!(
                    "Cannot apply event '{}' in state '{state}'",
                    event.event_type()
                )));
            }
        };

        debug!(
            from = %self.state,
            to = %next,
            event = event.event_type(),
            "Report state transition"
        );
        self.state = next;
        Ok(next)
    }
}
