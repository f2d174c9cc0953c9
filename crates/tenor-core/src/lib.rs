//! # Tenor Core
//!
//! Dates, holiday calendars and business day adjustment for the Tenor library.
//!
//! This crate provides the building blocks used by the swap pricers:
//!
//! - **Types**: `Date`, `Currency`, `CurrencyAmount`, `Payment`
//! - **Calendars**: Holiday calendars identified by `HolidayCalendarId`
//! - **Conventions**: Business day conventions and `BusinessDayAdjustment`
//! - **Reference Data**: The lookup that turns calendar ids into calendars
//!
//! ## Example
//!
//! ```rust
//! use tenor_core::prelude::*;
//!
//! let adjustment = BusinessDayAdjustment::of(BusinessDayConvention::Following, HolidayCalendarId::SAT_SUN);
//! let adjuster = adjustment.resolve(&ImmutableReferenceData::standard()).unwrap();
//!
//! let saturday = Date::from_ymd(2015, 8, 22).unwrap();
//! assert_eq!(adjuster.adjust(saturday), Date::from_ymd(2015, 8, 24).unwrap());
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::return_self_not_must_use)]
#![allow(clippy::doc_markdown)]

pub mod calendars;
pub mod error;
pub mod reference_data;
pub mod types;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::calendars::{
        BusinessDayAdjuster, BusinessDayAdjustment, BusinessDayConvention, HolidayCalendar,
        HolidayCalendarId, StaticHolidayCalendar, WeekendCalendar, WeekendType,
    };
    pub use crate::error::{TenorError, TenorResult};
    pub use crate::reference_data::{ImmutableReferenceData, ReferenceData};
    pub use crate::types::{Currency, CurrencyAmount, Date, Payment};
}

// Re-export commonly used types at crate root
pub use error::{TenorError, TenorResult};
pub use types::{Currency, CurrencyAmount, Date, Payment};
