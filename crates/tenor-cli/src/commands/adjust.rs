//! Adjust command implementation.
//!
//! Adjusts dates to business days using a convention and a holiday calendar.

use anyhow::Result;
use clap::Args;
use serde::Serialize;
use std::path::Path;
use tabled::Tabled;

use tenor_core::calendars::{BusinessDayAdjustment, HolidayCalendarId};

use crate::cli::OutputFormat;
use crate::commands::{load_reference_data, parse_convention, parse_date};
use crate::output::{print_output, yes_no};

/// Arguments for the adjust command.
#[derive(Args, Debug)]
pub struct AdjustArgs {
    /// Dates to adjust (YYYY-MM-DD)
    #[arg(required = true)]
    pub dates: Vec<String>,

    /// Business day convention (name or code, e.g. Following, MF)
    #[arg(short = 'c', long, default_value = "Following")]
    pub convention: String,

    /// Holiday calendar id; combine with '+', e.g. GBLO+USNY
    #[arg(short = 'k', long, default_value = "SatSun")]
    pub calendar: String,
}

/// A single adjusted date.
#[derive(Debug, Clone, Serialize, Tabled)]
pub struct AdjustedDate {
    #[tabled(rename = "Date")]
    pub date: String,
    #[tabled(rename = "Adjusted")]
    pub adjusted: String,
    #[tabled(rename = "Moved", display_with = "yes_no")]
    pub moved: bool,
}

/// Executes the adjust command.
pub fn execute(args: AdjustArgs, calendars: Option<&Path>, format: OutputFormat) -> Result<()> {
    let adjustment = BusinessDayAdjustment::builder()
        .convention(parse_convention(&args.convention)?)
        .calendar(HolidayCalendarId::of(args.calendar))
        .build()?;
    let ref_data = load_reference_data(calendars)?;
    let adjuster = adjustment.resolve(&ref_data)?;
    tracing::debug!(%adjustment, dates = args.dates.len(), "adjusting dates");

    let rows = args
        .dates
        .iter()
        .map(|text| {
            let date = parse_date(text)?;
            let adjusted = adjuster.adjust(date);
            Ok(AdjustedDate {
                date: date.to_string(),
                adjusted: adjusted.to_string(),
                moved: adjusted != date,
            })
        })
        .collect::<Result<Vec<_>>>()?;

    print_output(&format!("Adjusted dates: {adjustment}"), &rows, format)
}
