//! Business day adjustment conventions.

use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

use super::HolidayCalendar;
use crate::error::TenorError;
use crate::types::Date;

/// Business day adjustment conventions.
///
/// These conventions specify how to adjust a date that falls on a
/// non-business day. Every convention returns a business day unchanged.
///
/// # Example
///
/// ```
/// use tenor_core::calendars::{BusinessDayConvention, WeekendCalendar};
/// use tenor_core::types::Date;
///
/// let saturday = Date::from_ymd(2015, 8, 22).unwrap();
/// let cal = WeekendCalendar::SAT_SUN;
///
/// assert_eq!(
///     BusinessDayConvention::Following.adjust(saturday, &cal),
///     Date::from_ymd(2015, 8, 24).unwrap()
/// );
/// assert_eq!(
///     BusinessDayConvention::Preceding.adjust(saturday, &cal),
///     Date::from_ymd(2015, 8, 21).unwrap()
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum BusinessDayConvention {
    /// No adjustment - use the date as-is even if not a business day.
    #[default]
    NoAdjust,

    /// Move to the following business day.
    Following,

    /// Move to the following business day, unless it crosses a month boundary,
    /// in which case move to the preceding business day.
    ModifiedFollowing,

    /// Move to the preceding business day.
    Preceding,

    /// Move to the preceding business day, unless it crosses a month boundary,
    /// in which case move to the following business day.
    ModifiedPreceding,

    /// Move to the nearest business day. When the following and preceding
    /// business days are equally far away, the following one is chosen.
    Nearest,
}

impl BusinessDayConvention {
    /// All conventions, in declaration order.
    pub const ALL: [BusinessDayConvention; 6] = [
        BusinessDayConvention::NoAdjust,
        BusinessDayConvention::Following,
        BusinessDayConvention::ModifiedFollowing,
        BusinessDayConvention::Preceding,
        BusinessDayConvention::ModifiedPreceding,
        BusinessDayConvention::Nearest,
    ];

    /// Returns the name of the convention.
    #[inline]
    pub fn name(&self) -> &'static str {
        match self {
            BusinessDayConvention::NoAdjust => "NoAdjust",
            BusinessDayConvention::Following => "Following",
            BusinessDayConvention::ModifiedFollowing => "ModifiedFollowing",
            BusinessDayConvention::Preceding => "Preceding",
            BusinessDayConvention::ModifiedPreceding => "ModifiedPreceding",
            BusinessDayConvention::Nearest => "Nearest",
        }
    }

    /// Returns the short market code of the convention.
    #[inline]
    pub fn code(&self) -> &'static str {
        match self {
            BusinessDayConvention::NoAdjust => "NONE",
            BusinessDayConvention::Following => "F",
            BusinessDayConvention::ModifiedFollowing => "MF",
            BusinessDayConvention::Preceding => "P",
            BusinessDayConvention::ModifiedPreceding => "MP",
            BusinessDayConvention::Nearest => "NEAR",
        }
    }

    /// Adjusts a date according to this convention.
    ///
    /// If the date is a business day in the calendar it is returned unaltered.
    pub fn adjust(&self, date: Date, calendar: &dyn HolidayCalendar) -> Date {
        match self {
            BusinessDayConvention::NoAdjust => date,

            BusinessDayConvention::Following => calendar.next_or_same(date),

            BusinessDayConvention::ModifiedFollowing => {
                let adjusted = calendar.next_or_same(date);
                if adjusted.same_month(&date) {
                    adjusted
                } else {
                    // Crossed month boundary, go preceding instead
                    calendar.previous_or_same(date)
                }
            }

            BusinessDayConvention::Preceding => calendar.previous_or_same(date),

            BusinessDayConvention::ModifiedPreceding => {
                let adjusted = calendar.previous_or_same(date);
                if adjusted.same_month(&date) {
                    adjusted
                } else {
                    // Crossed month boundary, go following instead
                    calendar.next_or_same(date)
                }
            }

            BusinessDayConvention::Nearest => {
                if calendar.is_business_day(date) {
                    return date;
                }
                let fwd = calendar.next_or_same(date);
                let back = calendar.previous_or_same(date);

                if date.days_between(&fwd) <= back.days_between(&date) {
                    fwd
                } else {
                    back
                }
            }
        }
    }
}

impl fmt::Display for BusinessDayConvention {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for BusinessDayConvention {
    type Err = TenorError;

    /// Parses a convention from its name or code (case-insensitive).
    ///
    /// Spaces, underscores and hyphens are ignored, so "Modified Following",
    /// "modified_following" and "MF" all parse to `ModifiedFollowing`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().replace([' ', '_', '-'], "").as_str() {
            "noadjust" | "none" | "unadjusted" | "u" => Ok(BusinessDayConvention::NoAdjust),
            "following" | "f" => Ok(BusinessDayConvention::Following),
            "modifiedfollowing" | "mf" => Ok(BusinessDayConvention::ModifiedFollowing),
            "preceding" | "p" => Ok(BusinessDayConvention::Preceding),
            "modifiedpreceding" | "mp" => Ok(BusinessDayConvention::ModifiedPreceding),
            "nearest" | "near" => Ok(BusinessDayConvention::Nearest),
            _ => Err(TenorError::unknown_reference("business day convention", s)),
        }
    }
}

impl Serialize for BusinessDayConvention {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.name())
    }
}

impl<'de> Deserialize<'de> for BusinessDayConvention {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        BusinessDayConvention::from_str(&s).map_err(de::Error::custom)
    }
}
