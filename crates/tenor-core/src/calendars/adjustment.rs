//! Business day adjustment: a convention paired with a calendar reference.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::{BusinessDayAdjuster, BusinessDayConvention, HolidayCalendarId};
use crate::error::{TenorError, TenorResult};
use crate::reference_data::ReferenceData;
use crate::types::Date;

/// An adjustment that alters a date if it falls on a day other than a business day.
///
/// Combines a [`BusinessDayConvention`] with a [`HolidayCalendarId`]. The id
/// is only a reference; the calendar is looked up from [`ReferenceData`]
/// when the adjustment is applied or resolved.
///
/// Equality and hashing are structural, by convention and calendar id.
/// Deserialization applies the same checks as the builder.
///
/// # Example
///
/// ```rust
/// use tenor_core::calendars::{BusinessDayAdjustment, BusinessDayConvention, HolidayCalendarId};
/// use tenor_core::reference_data::ImmutableReferenceData;
/// use tenor_core::types::Date;
///
/// let adjustment = BusinessDayAdjustment::of(
///     BusinessDayConvention::ModifiedFollowing,
///     HolidayCalendarId::SAT_SUN,
/// );
/// let ref_data = ImmutableReferenceData::standard();
///
/// let adjuster = adjustment.resolve(&ref_data).unwrap();
/// let saturday = Date::from_ymd(2015, 8, 22).unwrap();
/// assert_eq!(adjuster.adjust(saturday), Date::from_ymd(2015, 8, 24).unwrap());
/// assert_eq!(adjustment.to_string(), "ModifiedFollowing using calendar SatSun");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "AdjustmentFields")]
pub struct BusinessDayAdjustment {
    /// The convention used to adjust the date if it does not fall on a business day.
    convention: BusinessDayConvention,
    /// The calendar that defines holidays and business days.
    calendar: HolidayCalendarId,
}

impl BusinessDayAdjustment {
    /// An instance that performs no adjustment.
    pub const NONE: Self = Self {
        convention: BusinessDayConvention::NoAdjust,
        calendar: HolidayCalendarId::NO_HOLIDAYS,
    };

    /// Creates an adjustment from a convention and a calendar reference.
    pub fn of(convention: BusinessDayConvention, calendar: impl Into<HolidayCalendarId>) -> Self {
        Self {
            convention,
            calendar: calendar.into(),
        }
    }

    /// Returns a builder for an adjustment.
    #[must_use]
    pub fn builder() -> BusinessDayAdjustmentBuilder {
        BusinessDayAdjustmentBuilder::default()
    }

    /// Returns the convention.
    #[must_use]
    pub fn convention(&self) -> BusinessDayConvention {
        self.convention
    }

    /// Returns the calendar reference.
    #[must_use]
    pub fn calendar(&self) -> &HolidayCalendarId {
        &self.calendar
    }

    /// Returns true if this is the no-adjustment instance.
    #[must_use]
    pub fn is_none(&self) -> bool {
        *self == Self::NONE
    }

    /// Adjusts the date as necessary if it is not a business day.
    ///
    /// The calendar is looked up on every call. When adjusting many dates,
    /// [`resolve`](Self::resolve) once and use the returned adjuster instead.
    ///
    /// # Errors
    ///
    /// Returns `TenorError::UnknownReference` if the reference data does not
    /// contain the calendar.
    pub fn adjust(&self, date: Date, ref_data: &dyn ReferenceData) -> TenorResult<Date> {
        let calendar = ref_data.holiday_calendar(&self.calendar)?;
        Ok(self.convention.adjust(date, calendar.as_ref()))
    }

    /// Resolves this adjustment using the reference data, returning an adjuster
    /// bound to the concrete calendar.
    ///
    /// # Errors
    ///
    /// Returns `TenorError::UnknownReference` if the reference data does not
    /// contain the calendar.
    pub fn resolve(&self, ref_data: &dyn ReferenceData) -> TenorResult<BusinessDayAdjuster> {
        let calendar = ref_data.holiday_calendar(&self.calendar)?;
        tracing::trace!(adjustment = %self, "resolved business day adjustment");
        Ok(BusinessDayAdjuster::new(self.convention, calendar))
    }

    /// Resolves this adjustment into a plain date function.
    ///
    /// # Errors
    ///
    /// Returns `TenorError::UnknownReference` if the reference data does not
    /// contain the calendar.
    pub fn to_date_adjuster(
        &self,
        ref_data: &dyn ReferenceData,
    ) -> TenorResult<impl Fn(Date) -> Date + Send + Sync + Clone> {
        let adjuster = self.resolve(ref_data)?;
        Ok(move |date| adjuster.adjust(date))
    }
}

impl Default for BusinessDayAdjustment {
    fn default() -> Self {
        Self::NONE
    }
}

impl fmt::Display for BusinessDayAdjustment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_none() {
            return write!(f, "{}", self.convention);
        }
        write!(f, "{} using calendar {}", self.convention, self.calendar)
    }
}

/// Builder for [`BusinessDayAdjustment`].
///
/// Both the convention and the calendar must be supplied.
#[derive(Debug, Clone, Default)]
pub struct BusinessDayAdjustmentBuilder {
    convention: Option<BusinessDayConvention>,
    calendar: Option<HolidayCalendarId>,
}

impl BusinessDayAdjustmentBuilder {
    /// Sets the convention.
    #[must_use]
    pub fn convention(mut self, convention: BusinessDayConvention) -> Self {
        self.convention = Some(convention);
        self
    }

    /// Sets the calendar reference.
    #[must_use]
    pub fn calendar(mut self, calendar: impl Into<HolidayCalendarId>) -> Self {
        self.calendar = Some(calendar.into());
        self
    }

    /// Builds the adjustment.
    ///
    /// # Errors
    ///
    /// Returns `TenorError::MissingArgument` if the convention or calendar is
    /// absent, or if the calendar name is blank.
    pub fn build(self) -> TenorResult<BusinessDayAdjustment> {
        let convention = self
            .convention
            .ok_or_else(|| TenorError::missing_argument("convention"))?;
        let calendar = self
            .calendar
            .filter(|id| !id.name().trim().is_empty())
            .ok_or_else(|| TenorError::missing_argument("calendar"))?;
        Ok(BusinessDayAdjustment {
            convention,
            calendar,
        })
    }
}

/// Serialized form of [`BusinessDayAdjustment`], validated by the builder.
#[derive(Deserialize)]
struct AdjustmentFields {
    convention: Option<BusinessDayConvention>,
    calendar: Option<HolidayCalendarId>,
}

impl TryFrom<AdjustmentFields> for BusinessDayAdjustment {
    type Error = TenorError;

    fn try_from(fields: AdjustmentFields) -> TenorResult<Self> {
        BusinessDayAdjustmentBuilder {
            convention: fields.convention,
            calendar: fields.calendar,
        }
        .build()
    }
}
