//! Check command implementation.

use anyhow::Result;
use clap::Args;
use serde::Serialize;
use std::path::Path;
use tabled::Tabled;

use tenor_core::calendars::{HolidayCalendar, HolidayCalendarId};
use tenor_core::reference_data::ReferenceData;

use crate::cli::OutputFormat;
use crate::commands::{load_reference_data, parse_date};
use crate::output::{print_output, yes_no};

/// Arguments for the check command.
#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Date to check (YYYY-MM-DD)
    pub date: String,

    /// Holiday calendar id
    #[arg(short = 'k', long, default_value = "SatSun")]
    pub calendar: String,
}

/// Result of a business day check.
#[derive(Debug, Clone, Serialize, Tabled)]
pub struct BusinessDayCheck {
    #[tabled(rename = "Date")]
    pub date: String,
    #[tabled(rename = "Calendar")]
    pub calendar: String,
    #[tabled(rename = "Business Day", display_with = "yes_no")]
    pub business_day: bool,
    #[tabled(rename = "Previous")]
    pub previous: String,
    #[tabled(rename = "Next")]
    pub next: String,
}

/// Executes the check command.
pub fn execute(args: CheckArgs, calendars: Option<&Path>, format: OutputFormat) -> Result<()> {
    let date = parse_date(&args.date)?;
    let ref_data = load_reference_data(calendars)?;
    let calendar = ref_data.holiday_calendar(&HolidayCalendarId::of(args.calendar))?;

    let row = BusinessDayCheck {
        date: date.to_string(),
        calendar: calendar.name().to_string(),
        business_day: calendar.is_business_day(date),
        previous: calendar.previous(date).to_string(),
        next: calendar.next(date).to_string(),
    };

    print_output("Business day check", &[row], format)
}
