//! # Authentication Collaborator
//!
//! User registry and operator session. Opaque to the core engine: the
//! current operator name is consumed for display and audit only and never
//! gates allocation or notification decisions.

use crate::constants::events;
use crate::error::{DrsError, Result};
use crate::events::EventPublisher;
use serde_json::json;
use std::collections::HashMap;
use tracing::{info, warn};

/// In-memory user registry plus the current operator session
#[derive(Debug, Default)]
pub struct UserRegistry {
    users: HashMap<String, String>,
    current_user: Option<String>,
    publisher: Option<EventPublisher>,
}

impl UserRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry that publishes operator lifecycle events.
    /// Subscribe on the publisher before handing it over.
    pub fn with_event_publisher(publisher: EventPublisher) -> Self {
        Self {
            publisher: Some(publisher),
            ..Self::default()
        }
    }

    /// Register a new account. Every rule is checked and violations
    /// accumulate, mirroring report validation.
    pub fn register(&mut self, username: &str, password: &str, confirm_password: &str) -> Result<()> {
        let username = username.trim();
        let password = password.trim();
        let confirm_password = confirm_password.trim();

        let mut errors = Vec::new();

        if username.is_empty() {
            errors.push("Username cannot be empty.".to_string());
        } else if username.len() < 3 {
            errors.push("Username must be at least 3 characters long.".to_string());
        }

        if password.is_empty() {
            errors.push("Password cannot be empty.".to_string());
        } else {
            if password.len() < 6 {
                errors.push("Password must be at least 6 characters long.".to_string());
            }
            if !password.chars().any(|c| c.is_ascii_uppercase()) {
                errors.push("Password must contain at least one uppercase letter.".to_string());
            }
            if !password.chars().any(|c| c.is_ascii_digit()) {
                errors.push("Password must contain at least one digit.".to_string());
            }
        }

        if confirm_password.is_empty() {
            errors.push("Confirm Password cannot be empty.".to_string());
        } else if password != confirm_password {
            errors.push("Passwords do not match.".to_string());
        }

        if !errors.is_empty() {
            return Err(DrsError::RegistrationFailed(errors));
        }

        self.users
            .insert(username.to_string(), password.to_string());
        info!(username = %username, "User registered");
        Ok(())
    }

    /// Check credentials and open an operator session
    pub fn login(&mut self, username: &str, password: &str) -> Result<()> {
        let username = username.trim();
        let password = password.trim();

        if username.is_empty() {
            return Err(DrsError::AuthenticationError(
                "Username cannot be empty.".to_string(),
            ));
        }
        if password.is_empty() {
            return Err(DrsError::AuthenticationError(
                "Password cannot be empty.".to_string(),
            ));
        }

        match self.users.get(username) {
            Some(stored) if stored == password => {
                self.current_user = Some(username.to_string());
                info!(username = %username, "Operator logged in");
                self.publish(events::OPERATOR_LOGIN, json!({ "username": username }));
                Ok(())
            }
            _ => Err(DrsError::AuthenticationError(
                "Invalid username or password.".to_string(),
            )),
        }
    }

    /// Close the current operator session, if any
    pub fn logout(&mut self) {
        if let Some(username) = self.current_user.take() {
            info!(username = %username, "Operator logged out");
            self.publish(events::OPERATOR_LOGOUT, json!({ "username": username }));
        }
    }

    /// Currently logged-in operator, for display and audit
    pub fn current_user(&self) -> Option<&str> {
        self.current_user.as_deref()
    }

    pub fn is_registered(&self, username: &str) -> bool {
        self.users.contains_key(username)
    }

    fn publish(&self, name: &str, context: serde_json::Value) {
        // Best-effort, like report lifecycle events; a failed publish never
        // fails the session operation.
        if let Some(publisher) = &self.publisher {
            if let Err(e) = publisher.publish(name, context) {
                warn!(event = name, error = %e, "Failed to publish operator event");
            }
        }
    }
}
