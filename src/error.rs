//! Error types for series generation

use thiserror::Error;

/// Errors returned by the cycle series generator
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GenerateError {
    /// A generator input is outside its supported domain
    #[error("Invalid parameter '{name}' = {value}: {reason}")]
    InvalidParameter {
        /// Name of the offending input
        name: &'static str,
        /// The rejected value, formatted for display
        value: String,
        /// What the accepted domain is
        reason: String,
    },
}

impl GenerateError {
    /// Build an `InvalidParameter` error for the named input.
    pub fn invalid(name: &'static str, value: impl ToString, reason: impl Into<String>) -> Self {
        Self::InvalidParameter {
            name,
            value: value.to_string(),
            reason: reason.into(),
        }
    }

    /// Name of the parameter that was rejected
    #[must_use]
    pub const fn parameter(&self) -> &'static str {
        match self {
            Self::InvalidParameter { name, .. } => name,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_parameter_message() {
        let err = GenerateError::invalid("cycle_count", 8, "must be between 0 and 7");
        assert_eq!(
            err.to_string(),
            "Invalid parameter 'cycle_count' = 8: must be between 0 and 7"
        );
        assert_eq!(err.parameter(), "cycle_count");
    }
}
