use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum DrsError {
    /// Report rejected before any state mutation; one message per violated rule.
    ValidationFailed(Vec<String>),
    /// Account registration rejected; one message per violated rule.
    RegistrationFailed(Vec<String>),
    AuthenticationError(String),
    StateTransitionError(String),
    OrchestrationError(String),
    ConfigurationError(String),
}

impl fmt::Display for DrsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DrsError::ValidationFailed(errors) => {
                write!(f, "Input validation failed: {}", errors.join(" "))
            }
            DrsError::RegistrationFailed(errors) => {
                write!(f, "Registration failed: {}", errors.join(" "))
            }
            DrsError::AuthenticationError(msg) => write!(f, "Authentication error: {msg}"),
            DrsError::StateTransitionError(msg) => write!(f, "State transition error: {msg}"),
            DrsError::OrchestrationError(msg) => write!(f, "Orchestration error: {msg}"),
            DrsError::ConfigurationError(msg) => write!(f, "Configuration error: {msg}"),
        }
    }
}

impl std::error::Error for DrsError {}

pub type Result<T> = std::result::Result<T, DrsError>;
