//! Business day calendars and conventions.
//!
//! This module provides:
//! - The [`HolidayCalendar`] trait and the [`HolidayCalendarId`] used to refer to one
//! - Weekend-only, holiday-list and combined calendars
//! - Business day conventions and the [`BusinessDayAdjustment`] that pairs one with a calendar
//! - The resolved [`BusinessDayAdjuster`], bound to a concrete calendar

use chrono::Weekday;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::fmt;

mod adjuster;
mod adjustment;
mod conventions;
mod holiday;

pub use adjuster::BusinessDayAdjuster;
pub use adjustment::{BusinessDayAdjustment, BusinessDayAdjustmentBuilder};
pub use conventions::BusinessDayConvention;
pub use holiday::{CalendarDefinition, CombinedHolidayCalendar, StaticHolidayCalendar};

use crate::types::Date;

/// Separator between the component names of a combined calendar id.
pub const COMBINED_SEPARATOR: char = '+';

/// Identifier of a holiday calendar.
///
/// An id is only a reference: the concrete [`HolidayCalendar`] is looked up
/// from [`ReferenceData`](crate::reference_data::ReferenceData) when an
/// adjustment is resolved. Ids of the form `A+B` refer to the combination of
/// the calendars `A` and `B`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HolidayCalendarId(Cow<'static, str>);

impl HolidayCalendarId {
    /// Every day is a business day.
    pub const NO_HOLIDAYS: Self = Self::from_static("NoHolidays");
    /// Saturday and Sunday are weekend days, no other holidays.
    pub const SAT_SUN: Self = Self::from_static("SatSun");
    /// Friday and Saturday are weekend days, no other holidays.
    pub const FRI_SAT: Self = Self::from_static("FriSat");
    /// Thursday and Friday are weekend days, no other holidays.
    pub const THU_FRI: Self = Self::from_static("ThuFri");

    /// Creates an id from a static name, usable in constants.
    #[must_use]
    pub const fn from_static(name: &'static str) -> Self {
        Self(Cow::Borrowed(name))
    }

    /// Creates an id from a name.
    #[must_use]
    pub fn of(name: impl Into<String>) -> Self {
        Self(Cow::Owned(name.into()))
    }

    /// Returns the name of the calendar.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.0
    }

    /// Returns the id of the calendar combining this one and `other`.
    ///
    /// Combining with [`NO_HOLIDAYS`](Self::NO_HOLIDAYS) or with itself returns
    /// this id unchanged.
    #[must_use]
    pub fn combined_with(&self, other: &HolidayCalendarId) -> Self {
        if other == self || *other == Self::NO_HOLIDAYS {
            return self.clone();
        }
        if *self == Self::NO_HOLIDAYS {
            return other.clone();
        }
        Self::of(format!("{}{COMBINED_SEPARATOR}{}", self.name(), other.name()))
    }

    /// Returns true if this id names a combination of calendars.
    #[must_use]
    pub fn is_combined(&self) -> bool {
        self.0.contains(COMBINED_SEPARATOR)
    }

    /// Returns the ids of the calendars this id combines.
    ///
    /// A simple id returns itself as the only component.
    #[must_use]
    pub fn components(&self) -> Vec<HolidayCalendarId> {
        self.0
            .split(COMBINED_SEPARATOR)
            .map(|part| Self::of(part.trim()))
            .collect()
    }
}

impl fmt::Display for HolidayCalendarId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for HolidayCalendarId {
    fn from(name: &str) -> Self {
        Self::of(name)
    }
}

/// Trait for holiday calendars.
///
/// A calendar decides, for any date, whether it is a business day. The answer
/// is a pure function of the date: a calendar never classifies the same date
/// differently across calls.
///
/// Implementations must not mark every date as a holiday. The rolling methods
/// search day by day for a business day and rely on one existing nearby. A
/// search that reaches [`Date::MIN`] or [`Date::MAX`] stops there and returns
/// that date.
pub trait HolidayCalendar: Send + Sync + fmt::Debug {
    /// Returns the identifier of the calendar.
    fn id(&self) -> &HolidayCalendarId;

    /// Returns true if the date is a business day.
    fn is_business_day(&self, date: Date) -> bool;

    /// Returns the name of the calendar.
    fn name(&self) -> &str {
        self.id().name()
    }

    /// Returns true if the date is a holiday or weekend day.
    fn is_holiday(&self, date: Date) -> bool {
        !self.is_business_day(date)
    }

    /// Returns the date if it is a business day, otherwise the next business day.
    fn next_or_same(&self, date: Date) -> Date {
        let mut result = date;
        while !self.is_business_day(result) {
            match result.checked_add_days(1) {
                Some(next) => result = next,
                None => break,
            }
        }
        result
    }

    /// Returns the date if it is a business day, otherwise the previous business day.
    fn previous_or_same(&self, date: Date) -> Date {
        let mut result = date;
        while !self.is_business_day(result) {
            match result.checked_add_days(-1) {
                Some(previous) => result = previous,
                None => break,
            }
        }
        result
    }

    /// Returns the first business day strictly after the date.
    fn next(&self, date: Date) -> Date {
        self.next_or_same(date.add_days(1))
    }

    /// Returns the last business day strictly before the date.
    fn previous(&self, date: Date) -> Date {
        self.previous_or_same(date.add_days(-1))
    }

    /// Moves the date by a number of business days.
    ///
    /// A positive amount moves forward and a negative amount backward. An
    /// amount of zero returns the date unchanged, even if it is a holiday.
    fn shift(&self, date: Date, amount: i32) -> Date {
        let mut result = date;
        if amount > 0 {
            for _ in 0..amount {
                result = self.next(result);
            }
        } else {
            for _ in 0..amount.unsigned_abs() {
                result = self.previous(result);
            }
        }
        result
    }

    /// Counts business days in the half-open range `[start, end)`.
    fn business_days_between(&self, start: Date, end: Date) -> i64 {
        let mut count = 0;
        let mut current = start;
        while current < end {
            if self.is_business_day(current) {
                count += 1;
            }
            current = current.add_days(1);
        }
        count
    }
}

/// Weekend types for different markets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum WeekendType {
    /// Saturday and Sunday (most markets)
    #[default]
    SaturdaySunday,
    /// Friday and Saturday (Middle East markets)
    FridaySaturday,
    /// Thursday and Friday
    ThursdayFriday,
    /// Sunday only
    SundayOnly,
    /// No weekends
    None,
}

impl WeekendType {
    /// Check if a weekday is a weekend day for this type.
    #[inline]
    pub fn is_weekend(&self, weekday: Weekday) -> bool {
        match self {
            WeekendType::SaturdaySunday => matches!(weekday, Weekday::Sat | Weekday::Sun),
            WeekendType::FridaySaturday => matches!(weekday, Weekday::Fri | Weekday::Sat),
            WeekendType::ThursdayFriday => matches!(weekday, Weekday::Thu | Weekday::Fri),
            WeekendType::SundayOnly => matches!(weekday, Weekday::Sun),
            WeekendType::None => false,
        }
    }
}

/// A calendar whose only non-business days are its weekend days.
///
/// The four standard calendars are available as constants and are known to
/// every [`ReferenceData`](crate::reference_data::ReferenceData).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeekendCalendar {
    id: HolidayCalendarId,
    weekend: WeekendType,
}

impl WeekendCalendar {
    /// Every date is a business day.
    pub const NO_HOLIDAYS: Self = Self {
        id: HolidayCalendarId::NO_HOLIDAYS,
        weekend: WeekendType::None,
    };
    /// Saturday and Sunday are not business days.
    pub const SAT_SUN: Self = Self {
        id: HolidayCalendarId::SAT_SUN,
        weekend: WeekendType::SaturdaySunday,
    };
    /// Friday and Saturday are not business days.
    pub const FRI_SAT: Self = Self {
        id: HolidayCalendarId::FRI_SAT,
        weekend: WeekendType::FridaySaturday,
    };
    /// Thursday and Friday are not business days.
    pub const THU_FRI: Self = Self {
        id: HolidayCalendarId::THU_FRI,
        weekend: WeekendType::ThursdayFriday,
    };

    /// Creates a weekend calendar with a custom id.
    pub fn new(id: impl Into<HolidayCalendarId>, weekend: WeekendType) -> Self {
        Self {
            id: id.into(),
            weekend,
        }
    }

    /// Returns the standard weekend calendar with the given id, if there is one.
    #[must_use]
    pub fn standard(id: &HolidayCalendarId) -> Option<Self> {
        [Self::NO_HOLIDAYS, Self::SAT_SUN, Self::FRI_SAT, Self::THU_FRI]
            .into_iter()
            .find(|cal| cal.id == *id)
    }

    /// Returns the weekend rule of the calendar.
    #[must_use]
    pub fn weekend(&self) -> WeekendType {
        self.weekend
    }
}

impl HolidayCalendar for WeekendCalendar {
    fn id(&self) -> &HolidayCalendarId {
        &self.id
    }

    fn is_business_day(&self, date: Date) -> bool {
        !self.weekend.is_weekend(date.weekday())
    }
}
