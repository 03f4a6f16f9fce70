//! Error types for generation and output

use std::fmt;

/// Main error type for all generation operations
#[derive(Debug)]
pub enum DungeonError {
    /// Requested dimensions or parameters cannot produce a dungeon
    InvalidConfiguration {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// A collaborator broke its contract
    ///
    /// Raised when a random source returns a value outside `[0, bound)` at a
    /// point where the engine indexes with it.
    ContractViolation {
        /// Collaborator that misbehaved
        collaborator: &'static str,
        /// What the collaborator returned and what was expected
        reason: String,
    },

    /// Writing generated output failed
    Output {
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },
}

impl fmt::Display for DungeonError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidConfiguration {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid configuration '{parameter}' = '{value}': {reason}")
            }
            Self::ContractViolation {
                collaborator,
                reason,
            } => {
                write!(f, "Contract violation by {collaborator}: {reason}")
            }
            Self::Output { operation, source } => {
                write!(f, "Output error during {operation}: {source}")
            }
        }
    }
}

impl std::error::Error for DungeonError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Output { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl From<std::io::Error> for DungeonError {
    fn from(err: std::io::Error) -> Self {
        Self::Output {
            operation: "write",
            source: err,
        }
    }
}

/// Convenience type alias for generation results
pub type Result<T> = std::result::Result<T, DungeonError>;

/// Create an invalid configuration error
pub fn invalid_configuration(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> DungeonError {
    DungeonError::InvalidConfiguration {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create a contract violation error
pub fn contract_violation(collaborator: &'static str, reason: &impl ToString) -> DungeonError {
    DungeonError::ContractViolation {
        collaborator,
        reason: reason.to_string(),
    }
}

/// Attach an operation name to a failed write
pub fn output_error(operation: &'static str, source: std::io::Error) -> DungeonError {
    DungeonError::Output { operation, source }
}
