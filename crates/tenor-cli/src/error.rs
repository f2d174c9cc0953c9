//! CLI error types.

use thiserror::Error;

use tenor_core::TenorError;

/// CLI error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// Invalid date format.
    #[error("Invalid date format: {0}. Use YYYY-MM-DD.")]
    InvalidDate(String),

    /// Unrecognized business day convention.
    #[error("Invalid convention: {0}. Use one of NoAdjust, Following, ModifiedFollowing, Preceding, ModifiedPreceding, Nearest.")]
    InvalidConvention(String),

    /// Error from the library.
    #[error(transparent)]
    Tenor(#[from] TenorError),
}

/// CLI result type.
pub type CliResult<T> = Result<T, CliError>;
