//! Holiday-list and combined calendars.
//!
//! Calendars can be constructed programmatically or loaded from a
//! [`CalendarDefinition`], the serialized form used by reference data
//! configuration files.
//!
//! # Example
//!
//! ```
//! use tenor_core::calendars::{HolidayCalendar, StaticHolidayCalendar, WeekendType};
//! use tenor_core::types::Date;
//!
//! let holidays = vec![
//!     Date::from_ymd(2015, 8, 31).unwrap(),
//!     Date::from_ymd(2015, 12, 25).unwrap(),
//! ];
//! let cal = StaticHolidayCalendar::from_dates("GBLO", WeekendType::SaturdaySunday, holidays);
//!
//! assert!(!cal.is_business_day(Date::from_ymd(2015, 8, 31).unwrap()));
//! assert!(cal.is_business_day(Date::from_ymd(2015, 9, 1).unwrap()));
//! ```

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::sync::Arc;

use super::{HolidayCalendar, HolidayCalendarId, WeekendType, COMBINED_SEPARATOR};
use crate::error::{TenorError, TenorResult};
use crate::types::Date;

/// Serialized description of a holiday calendar.
///
/// # JSON Format
///
/// ```json
/// {
///   "name": "GBLO",
///   "weekend": "SaturdaySunday",
///   "holidays": ["2015-08-31", "2015-12-25"]
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarDefinition {
    /// Name of the calendar, used as its id.
    pub name: String,
    /// Weekend rule.
    #[serde(default)]
    pub weekend: WeekendType,
    /// Holiday dates in addition to weekends.
    #[serde(default)]
    pub holidays: Vec<Date>,
}

/// A named calendar defined by a weekend rule and a fixed set of holidays.
///
/// The calendar is immutable once built. Its holiday set is finite and the
/// weekend rule never covers the whole week, so rolling always terminates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StaticHolidayCalendar {
    id: HolidayCalendarId,
    weekend: WeekendType,
    holidays: BTreeSet<Date>,
}

impl StaticHolidayCalendar {
    /// Creates a calendar from a list of holiday dates.
    ///
    /// # Arguments
    ///
    /// * `id` - Id of the calendar
    /// * `weekend` - Weekend type
    /// * `holidays` - Holiday dates; duplicates and weekend dates are allowed
    pub fn from_dates(
        id: impl Into<HolidayCalendarId>,
        weekend: WeekendType,
        holidays: impl IntoIterator<Item = Date>,
    ) -> Self {
        Self {
            id: id.into(),
            weekend,
            holidays: holidays.into_iter().collect(),
        }
    }

    /// Creates a calendar from its serialized definition.
    ///
    /// # Errors
    ///
    /// Returns `TenorError::MissingArgument` if the name is blank and
    /// `TenorError::Calendar` if the name contains the combined-id separator.
    pub fn from_definition(definition: CalendarDefinition) -> TenorResult<Self> {
        let name = definition.name.trim();
        if name.is_empty() {
            return Err(TenorError::missing_argument("calendar name"));
        }
        if name.contains(COMBINED_SEPARATOR) {
            return Err(TenorError::calendar(format!(
                "calendar name '{name}' must not contain '{COMBINED_SEPARATOR}'"
            )));
        }
        Ok(Self::from_dates(
            HolidayCalendarId::of(name),
            definition.weekend,
            definition.holidays,
        ))
    }

    /// Returns the serialized definition of this calendar.
    #[must_use]
    pub fn to_definition(&self) -> CalendarDefinition {
        CalendarDefinition {
            name: self.id.name().to_string(),
            weekend: self.weekend,
            holidays: self.holidays.iter().copied().collect(),
        }
    }

    /// Returns the weekend rule of the calendar.
    #[must_use]
    pub fn weekend(&self) -> WeekendType {
        self.weekend
    }

    /// Returns the holidays in ascending order.
    pub fn holidays(&self) -> impl Iterator<Item = Date> + '_ {
        self.holidays.iter().copied()
    }
}

impl HolidayCalendar for StaticHolidayCalendar {
    fn id(&self) -> &HolidayCalendarId {
        &self.id
    }

    fn is_business_day(&self, date: Date) -> bool {
        !self.weekend.is_weekend(date.weekday()) && !self.holidays.contains(&date)
    }
}

/// Calendar that combines multiple calendars (joint holidays).
///
/// A date is a business day only if every component calendar considers it one.
#[derive(Debug, Clone)]
pub struct CombinedHolidayCalendar {
    id: HolidayCalendarId,
    calendars: Vec<Arc<dyn HolidayCalendar>>,
}

impl CombinedHolidayCalendar {
    /// Creates a combined calendar from its components.
    ///
    /// # Errors
    ///
    /// Returns `TenorError::MissingArgument` if no calendars are given.
    pub fn new(calendars: Vec<Arc<dyn HolidayCalendar>>) -> TenorResult<Self> {
        let mut iter = calendars.iter();
        let first = iter
            .next()
            .ok_or_else(|| TenorError::missing_argument("calendars"))?;
        let id = iter.fold(first.id().clone(), |id, cal| id.combined_with(cal.id()));
        Ok(Self { id, calendars })
    }

    /// Returns the component calendars.
    #[must_use]
    pub fn calendars(&self) -> &[Arc<dyn HolidayCalendar>] {
        &self.calendars
    }
}

impl HolidayCalendar for CombinedHolidayCalendar {
    fn id(&self) -> &HolidayCalendarId {
        &self.id
    }

    fn is_business_day(&self, date: Date) -> bool {
        self.calendars.iter().all(|cal| cal.is_business_day(date))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendars::WeekendCalendar;

    fn date(y: i32, m: u32, d: u32) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    fn gblo() -> StaticHolidayCalendar {
        // Summer bank holiday and Christmas 2015
        StaticHolidayCalendar::from_dates(
            "GBLO",
            WeekendType::SaturdaySunday,
            [date(2015, 8, 31), date(2015, 12, 25), date(2015, 12, 28)],
        )
    }

    #[test]
    fn test_static_calendar() {
        let cal = gblo();
        assert!(!cal.is_business_day(date(2015, 8, 31)));
        assert!(!cal.is_business_day(date(2015, 8, 29)));
        assert!(cal.is_business_day(date(2015, 9, 1)));
        assert_eq!(cal.next_or_same(date(2015, 12, 25)), date(2015, 12, 29));
    }

    #[test]
    fn test_definition_round_trip() {
        let json = r#"{"name":"GBLO","weekend":"SaturdaySunday","holidays":["2015-08-31"]}"#;
        let definition: CalendarDefinition = serde_json::from_str(json).unwrap();
        let cal = StaticHolidayCalendar::from_definition(definition.clone()).unwrap();

        assert_eq!(cal.name(), "GBLO");
        assert!(cal.is_holiday(date(2015, 8, 31)));
        assert_eq!(cal.to_definition(), definition);
    }

    #[test]
    fn test_definition_defaults_weekend() {
        let definition: CalendarDefinition = serde_json::from_str(r#"{"name":"XX"}"#).unwrap();
        assert_eq!(definition.weekend, WeekendType::SaturdaySunday);
        assert!(definition.holidays.is_empty());
    }

    #[test]
    fn test_invalid_definition() {
        let blank = CalendarDefinition {
            name: "  ".into(),
            weekend: WeekendType::SaturdaySunday,
            holidays: vec![],
        };
        assert!(matches!(
            StaticHolidayCalendar::from_definition(blank),
            Err(TenorError::MissingArgument { .. })
        ));

        let combined = CalendarDefinition {
            name: "GBLO+USNY".into(),
            weekend: WeekendType::SaturdaySunday,
            holidays: vec![],
        };
        assert!(matches!(
            StaticHolidayCalendar::from_definition(combined),
            Err(TenorError::Calendar { .. })
        ));
    }

    #[test]
    fn test_combined_calendar() {
        let usny = StaticHolidayCalendar::from_dates(
            "USNY",
            WeekendType::SaturdaySunday,
            [date(2015, 9, 7)],
        );
        let cal = CombinedHolidayCalendar::new(vec![Arc::new(gblo()), Arc::new(usny)]).unwrap();

        assert_eq!(cal.name(), "GBLO+USNY");
        assert!(!cal.is_business_day(date(2015, 8, 31)));
        assert!(!cal.is_business_day(date(2015, 9, 7)));
        assert!(cal.is_business_day(date(2015, 9, 8)));
    }

    #[test]
    fn test_combined_calendar_requires_components() {
        assert!(CombinedHolidayCalendar::new(vec![]).is_err());

        let single = CombinedHolidayCalendar::new(vec![Arc::new(WeekendCalendar::SAT_SUN)]).unwrap();
        assert_eq!(single.id(), &HolidayCalendarId::SAT_SUN);
    }
}
