//! Tenor CLI - Command-line interface for business day adjustment.
//!
//! # Usage
//!
//! ```bash
//! # Adjust dates with a convention and calendar
//! tenor adjust 2015-08-22 2015-08-29 --convention MF --calendar GBLO --calendars calendars.toml
//!
//! # List known calendars
//! tenor calendars --calendars calendars.json
//!
//! # Check whether a date is a business day
//! tenor check 2015-08-31 --calendar GBLO --calendars calendars.toml
//! ```

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod cli;
mod commands;
mod error;
mod output;

use cli::{Cli, Commands};

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_filter = match cli.verbose {
        0 => "tenor_cli=warn,tenor_core=warn",
        1 => "tenor_cli=info,tenor_core=info",
        2 => "tenor_cli=debug,tenor_core=debug",
        _ => "tenor_cli=trace,tenor_core=trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    // Logs go to stderr so JSON output stays parseable
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let format = cli.format;
    let calendars = cli.calendars.as_deref();

    match cli.command {
        Commands::Adjust(args) => commands::adjust::execute(args, calendars, format)?,
        Commands::Calendars(args) => commands::calendars::execute(args, calendars, format)?,
        Commands::Check(args) => commands::check::execute(args, calendars, format)?,
    }

    Ok(())
}
