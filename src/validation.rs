//! # Report Input Validation
//!
//! Pure validation over raw report fields. Every rule is checked
//! independently and errors accumulate, so the operator sees the full list in
//! one pass. An empty result means the report may proceed; validation itself
//! never mutates any state.

use crate::config::DrsConfig;
use crate::constants::{system, ResponsePriority};
use crate::models::disaster::Severity;
use crate::models::report_request::ReportRequest;

/// Validate a raw report, returning one human-readable message per violated
/// rule. An empty list means the report is valid.
pub fn validate_report(request: &ReportRequest, config: &DrsConfig) -> Vec<String> {
    let mut errors = Vec::new();

    if is_unset(&request.disaster_type) {
        errors.push("Please select a valid disaster type.".to_string());
    }

    if request.location.is_empty() || request.location.trim().len() < 3 {
        errors.push("Please enter a valid location (at least 3 characters).".to_string());
    }

    // Letters-and-spaces check is separate from the length check; an empty
    // location fails both.
    if !is_letters_and_spaces(&request.location) {
        errors.push("Location must contain only letters and spaces.".to_string());
    }

    if is_unset(&request.severity) || request.severity.parse::<Severity>().is_err() {
        errors.push("Please select the severity of the disaster.".to_string());
    }

    if request.description.is_empty() || request.description.trim().len() < 10 {
        errors.push(
            "Please provide a more detailed description (at least 10 characters).".to_string(),
        );
    }

    if request.requested.is_empty() {
        errors.push("Please select at least one resource to allocate.".to_string());
    } else {
        for (name, quantity) in config.ordered_requests(&request.requested) {
            if quantity == 0 {
                errors.push(format!(
                    "Please select a valid quantity for {name} (greater than 0)."
                ));
            } else if let Some(cap) = config.cap_for(&name) {
                if quantity > cap {
                    errors.push(format!("The quantity of {name} cannot exceed {cap}."));
                }
            }
        }
    }

    errors
}

/// Advisory priority classification of a raw severity selection.
/// Informational only; it never gates allocation or notification.
pub fn classify_severity(severity: &str) -> ResponsePriority {
    severity
        .parse::<Severity>()
        .map(|s| s.response_priority())
        .unwrap_or(ResponsePriority::Unknown)
}

fn is_unset(value: &str) -> bool {
    value.is_empty() || value == system::UNSET_SELECTION
}

fn is_letters_and_spaces(value: &str) -> bool {
    !value.is_empty()
        && value
            .chars()
            .all(|c| c.is_ascii_alphabetic() || c.is_whitespace())
}
