//! Error types for the Tenor library.
//!
//! Every failure is a distinct [`TenorError`] variant so that callers can tell a
//! configuration bug (an unsupported period type, a missing argument) apart from
//! an environment problem (reference data that lacks a calendar).

use thiserror::Error;

/// A specialized Result type for Tenor operations.
pub type TenorResult<T> = Result<T, TenorError>;

/// The main error type for Tenor operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TenorError {
    /// A mandatory argument was not supplied.
    #[error("Missing argument: {name}")]
    MissingArgument {
        /// Name of the missing argument.
        name: String,
    },

    /// A reference could not be resolved against the supplied reference data.
    #[error("Unknown {kind} reference: {id}")]
    UnknownReference {
        /// The kind of reference, e.g. "holiday calendar".
        kind: String,
        /// The identifier that failed to resolve.
        id: String,
    },

    /// The dispatch router has no pricer registered for a payment period type.
    #[error("Unsupported payment period type for {operation}: {period_type}")]
    UnsupportedPeriodType {
        /// The pricing operation that was requested.
        operation: String,
        /// Name of the payment period type that was rejected.
        period_type: String,
    },

    /// Error in date calculations or invalid date.
    #[error("Invalid date: {message}")]
    InvalidDate {
        /// Description of the date error.
        message: String,
    },

    /// Calendar or business day error.
    #[error("Calendar error: {reason}")]
    Calendar {
        /// Description of the error.
        reason: String,
    },

    /// Configuration could not be read or parsed.
    #[error("Configuration error: {reason}")]
    Config {
        /// Description of the configuration error.
        reason: String,
    },
}

impl TenorError {
    /// Creates a missing argument error.
    #[must_use]
    pub fn missing_argument(name: impl Into<String>) -> Self {
        Self::MissingArgument { name: name.into() }
    }

    /// Creates an unknown reference error.
    #[must_use]
    pub fn unknown_reference(kind: impl Into<String>, id: impl Into<String>) -> Self {
        Self::UnknownReference {
            kind: kind.into(),
            id: id.into(),
        }
    }

    /// Creates an unsupported period type error.
    #[must_use]
    pub fn unsupported_period_type(
        operation: impl Into<String>,
        period_type: impl Into<String>,
    ) -> Self {
        Self::UnsupportedPeriodType {
            operation: operation.into(),
            period_type: period_type.into(),
        }
    }

    /// Creates an invalid date error.
    #[must_use]
    pub fn invalid_date(message: impl Into<String>) -> Self {
        Self::InvalidDate {
            message: message.into(),
        }
    }

    /// Creates a calendar error.
    #[must_use]
    pub fn calendar(reason: impl Into<String>) -> Self {
        Self::Calendar {
            reason: reason.into(),
        }
    }

    /// Creates a configuration error.
    #[must_use]
    pub fn config(reason: impl Into<String>) -> Self {
        Self::Config {
            reason: reason.into(),
        }
    }

    /// Returns true for errors caused by an invalid argument rather than by the
    /// environment: missing arguments and unsupported period types.
    #[must_use]
    pub fn is_illegal_argument(&self) -> bool {
        matches!(
            self,
            Self::MissingArgument { .. } | Self::UnsupportedPeriodType { .. }
        )
    }
}

impl From<serde_json::Error> for TenorError {
    fn from(e: serde_json::Error) -> Self {
        Self::config(e.to_string())
    }
}

impl From<toml::de::Error> for TenorError {
    fn from(e: toml::de::Error) -> Self {
        Self::config(e.to_string())
    }
}

impl From<std::io::Error> for TenorError {
    fn from(e: std::io::Error) -> Self {
        Self::config(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = TenorError::unknown_reference("holiday calendar", "GBLO");
        assert_eq!(err.to_string(), "Unknown holiday calendar reference: GBLO");

        let err = TenorError::unsupported_period_type("present_value", "InflationPeriod");
        assert!(err.to_string().contains("present_value"));
        assert!(err.to_string().contains("InflationPeriod"));
    }

    #[test]
    fn test_illegal_argument_class() {
        assert!(TenorError::missing_argument("convention").is_illegal_argument());
        assert!(TenorError::unsupported_period_type("pvbp", "X").is_illegal_argument());
        assert!(!TenorError::unknown_reference("holiday calendar", "X").is_illegal_argument());
        assert!(!TenorError::config("bad").is_illegal_argument());
    }
}
