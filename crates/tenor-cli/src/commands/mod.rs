//! CLI command implementations.

pub mod adjust;
pub mod calendars;
pub mod check;

pub use adjust::AdjustArgs;
pub use calendars::CalendarsArgs;
pub use check::CheckArgs;

use std::path::Path;

use tenor_core::calendars::BusinessDayConvention;
use tenor_core::reference_data::ImmutableReferenceData;
use tenor_core::types::Date;

use crate::error::{CliError, CliResult};

/// Parses a date string in YYYY-MM-DD format.
pub fn parse_date(s: &str) -> CliResult<Date> {
    Date::parse(s).map_err(|_| CliError::InvalidDate(s.to_string()))
}

/// Parses a business day convention by name or code.
pub fn parse_convention(s: &str) -> CliResult<BusinessDayConvention> {
    s.parse()
        .map_err(|_| CliError::InvalidConvention(s.to_string()))
}

/// Loads reference data from the calendars file, or the standard calendars if none is given.
pub fn load_reference_data(path: Option<&Path>) -> CliResult<ImmutableReferenceData> {
    match path {
        Some(path) => {
            let ref_data = ImmutableReferenceData::from_path(path)?;
            tracing::info!(path = %path.display(), calendars = ref_data.len(), "loaded calendars");
            Ok(ref_data)
        }
        None => Ok(ImmutableReferenceData::standard()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_date() {
        assert_eq!(parse_date("2015-08-22").unwrap(), Date::from_ymd(2015, 8, 22).unwrap());
        assert!(matches!(parse_date("22/08/2015"), Err(CliError::InvalidDate(_))));
    }

    #[test]
    fn test_parse_convention() {
        assert_eq!(parse_convention("MF").unwrap(), BusinessDayConvention::ModifiedFollowing);
        assert!(matches!(parse_convention("sideways"), Err(CliError::InvalidConvention(_))));
    }
}
