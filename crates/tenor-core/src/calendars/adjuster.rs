//! Resolved business day adjustment.

use std::fmt;
use std::sync::Arc;

use super::{BusinessDayConvention, HolidayCalendar};
use crate::types::Date;

/// A business day adjustment bound to a concrete holiday calendar.
///
/// Obtained from [`BusinessDayAdjustment::resolve`](super::BusinessDayAdjustment::resolve).
/// Adjusting a date needs no further reference data lookup and cannot fail,
/// which makes this the form to hold on to when generating schedules.
///
/// Cloning is cheap: the calendar is shared.
#[derive(Clone)]
pub struct BusinessDayAdjuster {
    convention: BusinessDayConvention,
    calendar: Arc<dyn HolidayCalendar>,
}

impl BusinessDayAdjuster {
    pub(crate) fn new(convention: BusinessDayConvention, calendar: Arc<dyn HolidayCalendar>) -> Self {
        Self {
            convention,
            calendar,
        }
    }

    /// Adjusts the date as necessary if it is not a business day.
    #[must_use]
    pub fn adjust(&self, date: Date) -> Date {
        self.convention.adjust(date, self.calendar.as_ref())
    }

    /// Adjusts each of the dates.
    #[must_use]
    pub fn adjust_all(&self, dates: &[Date]) -> Vec<Date> {
        dates.iter().map(|&date| self.adjust(date)).collect()
    }

    /// Returns the convention.
    #[must_use]
    pub fn convention(&self) -> BusinessDayConvention {
        self.convention
    }

    /// Returns the bound calendar.
    #[must_use]
    pub fn calendar(&self) -> &dyn HolidayCalendar {
        self.calendar.as_ref()
    }
}

impl PartialEq for BusinessDayAdjuster {
    fn eq(&self, other: &Self) -> bool {
        self.convention == other.convention && self.calendar.id() == other.calendar.id()
    }
}

impl fmt::Debug for BusinessDayAdjuster {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BusinessDayAdjuster")
            .field("convention", &self.convention)
            .field("calendar", &self.calendar.id())
            .finish()
    }
}

impl fmt::Display for BusinessDayAdjuster {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} using calendar {}", self.convention, self.calendar.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendars::WeekendCalendar;

    fn date(y: i32, m: u32, d: u32) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    #[test]
    fn test_adjust_all() {
        let adjuster =
            BusinessDayAdjuster::new(BusinessDayConvention::Following, Arc::new(WeekendCalendar::SAT_SUN));
        let dates = [date(2015, 8, 21), date(2015, 8, 22), date(2015, 8, 23)];

        assert_eq!(
            adjuster.adjust_all(&dates),
            vec![date(2015, 8, 21), date(2015, 8, 24), date(2015, 8, 24)]
        );
    }

    #[test]
    fn test_equality_by_calendar_id() {
        let a = BusinessDayAdjuster::new(BusinessDayConvention::Following, Arc::new(WeekendCalendar::SAT_SUN));
        let b = BusinessDayAdjuster::new(BusinessDayConvention::Following, Arc::new(WeekendCalendar::SAT_SUN));
        let c = BusinessDayAdjuster::new(BusinessDayConvention::Following, Arc::new(WeekendCalendar::FRI_SAT));

        assert_eq!(a, b);
        assert_ne!(a, c);
        assert_eq!(a.to_string(), "Following using calendar SatSun");
        assert!(format!("{a:?}").contains("SatSun"));
    }
}
