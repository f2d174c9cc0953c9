//! Calendars command implementation.
//!
//! Lists the holiday calendars known to the reference data.

use anyhow::Result;
use clap::Args;
use serde::Serialize;
use std::path::Path;
use tabled::Tabled;

use tenor_core::calendars::{HolidayCalendarId, WeekendCalendar};
use tenor_core::reference_data::ReferenceData;

use crate::cli::OutputFormat;
use crate::commands::load_reference_data;
use crate::output::print_output;

/// Arguments for the calendars command.
#[derive(Args, Debug)]
pub struct CalendarsArgs {
    /// Only list calendars loaded from the calendars file
    #[arg(long)]
    pub configured: bool,
}

/// A calendar listing entry.
#[derive(Debug, Clone, Serialize, Tabled)]
pub struct CalendarEntry {
    #[tabled(rename = "Calendar")]
    pub id: String,
    #[tabled(rename = "Source")]
    pub source: &'static str,
}

/// Executes the calendars command.
pub fn execute(args: CalendarsArgs, calendars: Option<&Path>, format: OutputFormat) -> Result<()> {
    let ref_data = load_reference_data(calendars)?;

    let mut rows: Vec<CalendarEntry> = Vec::new();
    if !args.configured {
        for id in [
            HolidayCalendarId::NO_HOLIDAYS,
            HolidayCalendarId::SAT_SUN,
            HolidayCalendarId::FRI_SAT,
            HolidayCalendarId::THU_FRI,
        ] {
            rows.push(CalendarEntry {
                id: id.to_string(),
                source: "standard",
            });
        }
    }
    rows.extend(
        ref_data
            .calendar_ids()
            .into_iter()
            .filter(|id| WeekendCalendar::standard(id).is_none())
            .map(|id| CalendarEntry {
                id: id.to_string(),
                source: "configured",
            }),
    );

    print_output("Holiday calendars", &rows, format)
}
