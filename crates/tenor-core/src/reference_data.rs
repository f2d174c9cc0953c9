//! Reference data: the source of holiday calendars.
//!
//! A [`BusinessDayAdjustment`](crate::calendars::BusinessDayAdjustment) only
//! holds a [`HolidayCalendarId`]. The concrete calendar comes from a
//! [`ReferenceData`] implementation when the adjustment is applied or resolved.
//!
//! Every reference data source answers the standard weekend ids
//! (`NoHolidays`, `SatSun`, `FriSat`, `ThuFri`) and combined ids of the form
//! `A+B` whose components it can resolve.
//!
//! # Configuration
//!
//! [`ImmutableReferenceData`] can be loaded from JSON or TOML:
//!
//! ```json
//! {
//!   "calendars": [
//!     { "name": "GBLO", "weekend": "SaturdaySunday", "holidays": ["2015-08-31"] }
//!   ]
//! }
//! ```
//!
//! ```toml
//! [[calendars]]
//! name = "GBLO"
//! weekend = "SaturdaySunday"
//! holidays = ["2015-08-31"]
//! ```

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

use crate::calendars::{
    CalendarDefinition, CombinedHolidayCalendar, HolidayCalendar, HolidayCalendarId,
    StaticHolidayCalendar, WeekendCalendar,
};
use crate::error::{TenorError, TenorResult};

/// A source of reference data.
///
/// Lookups are synchronous and in-memory. Implementations must be safe to
/// share between threads.
pub trait ReferenceData: Send + Sync {
    /// Finds a calendar registered under the given id.
    ///
    /// This is the implementation hook; callers use
    /// [`holiday_calendar`](Self::holiday_calendar).
    fn find_calendar(&self, id: &HolidayCalendarId) -> Option<Arc<dyn HolidayCalendar>>;

    /// Returns the ids of the calendars registered with this source.
    fn calendar_ids(&self) -> Vec<HolidayCalendarId>;

    /// Resolves a calendar id to a calendar.
    ///
    /// # Errors
    ///
    /// Returns `TenorError::UnknownReference` if the id, or any component of a
    /// combined id, is not known.
    fn holiday_calendar(&self, id: &HolidayCalendarId) -> TenorResult<Arc<dyn HolidayCalendar>> {
        if let Some(calendar) = WeekendCalendar::standard(id) {
            return Ok(Arc::new(calendar));
        }
        if let Some(calendar) = self.find_calendar(id) {
            tracing::trace!(calendar = %id, "found holiday calendar");
            return Ok(calendar);
        }
        if id.is_combined() {
            let calendars = id
                .components()
                .iter()
                .map(|component| self.holiday_calendar(component))
                .collect::<TenorResult<Vec<_>>>()?;
            return Ok(Arc::new(CombinedHolidayCalendar::new(calendars)?));
        }
        tracing::debug!(calendar = %id, "holiday calendar not found in reference data");
        Err(TenorError::unknown_reference("holiday calendar", id.name()))
    }
}

/// Serialized form of [`ImmutableReferenceData`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReferenceDataConfig {
    /// Holiday calendar definitions.
    #[serde(default)]
    pub calendars: Vec<CalendarDefinition>,
}

/// Reference data held in memory, immutable once built.
#[derive(Debug, Clone, Default)]
pub struct ImmutableReferenceData {
    calendars: HashMap<HolidayCalendarId, Arc<dyn HolidayCalendar>>,
}

impl ImmutableReferenceData {
    /// Reference data with no registered calendars.
    ///
    /// The standard weekend calendars still resolve.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Reference data listing the standard weekend calendars.
    #[must_use]
    pub fn standard() -> Self {
        Self::builder()
            .calendar(WeekendCalendar::NO_HOLIDAYS)
            .calendar(WeekendCalendar::SAT_SUN)
            .calendar(WeekendCalendar::FRI_SAT)
            .calendar(WeekendCalendar::THU_FRI)
            .build()
    }

    /// Returns a builder.
    #[must_use]
    pub fn builder() -> ImmutableReferenceDataBuilder {
        ImmutableReferenceDataBuilder::default()
    }

    /// Builds reference data from its serialized form.
    ///
    /// # Errors
    ///
    /// Returns `TenorError::Config` if two calendars share a name or a
    /// calendar reuses a standard weekend id, and the errors of [`StaticHolidayCalendar::from_definition`] for invalid
    /// definitions.
    pub fn from_config(config: ReferenceDataConfig) -> TenorResult<Self> {
        let mut builder = Self::builder();
        for definition in config.calendars {
            let calendar = StaticHolidayCalendar::from_definition(definition)?;
            if WeekendCalendar::standard(calendar.id()).is_some() {
                return Err(TenorError::config(format!(
                    "calendar id is reserved for a standard calendar: {}",
                    calendar.id()
                )));
            }
            if builder.calendars.contains_key(calendar.id()) {
                return Err(TenorError::config(format!(
                    "duplicate calendar definition: {}",
                    calendar.id()
                )));
            }
            builder = builder.calendar(calendar);
        }
        let ref_data = builder.build();
        tracing::debug!(calendars = ref_data.calendars.len(), "loaded reference data");
        Ok(ref_data)
    }

    /// Loads reference data from a JSON document.
    ///
    /// # Errors
    ///
    /// Returns `TenorError::Config` if the document cannot be parsed.
    pub fn from_json(json: &str) -> TenorResult<Self> {
        Self::from_config(serde_json::from_str(json)?)
    }

    /// Loads reference data from a TOML document.
    ///
    /// # Errors
    ///
    /// Returns `TenorError::Config` if the document cannot be parsed.
    pub fn from_toml(text: &str) -> TenorResult<Self> {
        Self::from_config(toml::from_str(text)?)
    }

    /// Loads reference data from a `.json` or `.toml` file.
    ///
    /// # Errors
    ///
    /// Returns `TenorError::Config` if the file cannot be read or parsed, or
    /// has another extension.
    pub fn from_path(path: impl AsRef<Path>) -> TenorResult<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)?;
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => Self::from_json(&text),
            Some("toml") => Self::from_toml(&text),
            _ => Err(TenorError::config(format!(
                "unsupported reference data file: {}",
                path.display()
            ))),
        }
    }

    /// Returns the number of registered calendars.
    #[must_use]
    pub fn len(&self) -> usize {
        self.calendars.len()
    }

    /// Returns true if no calendars are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.calendars.is_empty()
    }
}

impl ReferenceData for ImmutableReferenceData {
    fn find_calendar(&self, id: &HolidayCalendarId) -> Option<Arc<dyn HolidayCalendar>> {
        self.calendars.get(id).cloned()
    }

    fn calendar_ids(&self) -> Vec<HolidayCalendarId> {
        let mut ids: Vec<_> = self.calendars.keys().cloned().collect();
        ids.sort();
        ids
    }
}

/// Builder for [`ImmutableReferenceData`].
#[derive(Debug, Default)]
pub struct ImmutableReferenceDataBuilder {
    calendars: HashMap<HolidayCalendarId, Arc<dyn HolidayCalendar>>,
}

impl ImmutableReferenceDataBuilder {
    /// Registers a calendar under its own id, replacing any previous one.
    ///
    /// Lookups of the standard weekend ids always answer the weekend calendar,
    /// so registering another calendar under one of them only lists the id.
    #[must_use]
    pub fn calendar(self, calendar: impl HolidayCalendar + 'static) -> Self {
        self.shared_calendar(Arc::new(calendar))
    }

    /// Registers a shared calendar under its own id, replacing any previous one.
    #[must_use]
    pub fn shared_calendar(mut self, calendar: Arc<dyn HolidayCalendar>) -> Self {
        self.calendars.insert(calendar.id().clone(), calendar);
        self
    }

    /// Builds the reference data.
    #[must_use]
    pub fn build(self) -> ImmutableReferenceData {
        ImmutableReferenceData {
            calendars: self.calendars,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendars::WeekendType;
    use crate::types::Date;

    fn date(y: i32, m: u32, d: u32) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    const CONFIG_JSON: &str = r#"{
        "calendars": [
            { "name": "GBLO", "weekend": "SaturdaySunday", "holidays": ["2015-08-31", "2015-12-25"] },
            { "name": "USNY", "holidays": ["2015-09-07"] }
        ]
    }"#;

    #[test]
    fn test_standard_ids_always_resolve() {
        let ref_data = ImmutableReferenceData::empty();
        for id in [
            HolidayCalendarId::NO_HOLIDAYS,
            HolidayCalendarId::SAT_SUN,
            HolidayCalendarId::FRI_SAT,
            HolidayCalendarId::THU_FRI,
        ] {
            assert_eq!(ref_data.holiday_calendar(&id).unwrap().id(), &id);
        }
        assert!(ref_data.calendar_ids().is_empty());
        assert_eq!(ImmutableReferenceData::standard().calendar_ids().len(), 4);
    }

    #[test]
    fn test_unknown_calendar() {
        let err = ImmutableReferenceData::empty()
            .holiday_calendar(&HolidayCalendarId::of("GBLO"))
            .unwrap_err();
        assert_eq!(err, TenorError::unknown_reference("holiday calendar", "GBLO"));
    }

    #[test]
    fn test_from_json() {
        let ref_data = ImmutableReferenceData::from_json(CONFIG_JSON).unwrap();
        assert_eq!(ref_data.len(), 2);

        let gblo = ref_data.holiday_calendar(&HolidayCalendarId::of("GBLO")).unwrap();
        assert!(gblo.is_holiday(date(2015, 8, 31)));
        assert_eq!(
            ref_data.calendar_ids(),
            vec![HolidayCalendarId::of("GBLO"), HolidayCalendarId::of("USNY")]
        );
    }

    #[test]
    fn test_from_toml() {
        let text = r#"
            [[calendars]]
            name = "GBLO"
            weekend = "SaturdaySunday"
            holidays = ["2015-08-31"]
        "#;
        let ref_data = ImmutableReferenceData::from_toml(text).unwrap();
        let gblo = ref_data.holiday_calendar(&HolidayCalendarId::of("GBLO")).unwrap();
        assert!(gblo.is_holiday(date(2015, 8, 31)));
    }

    #[test]
    fn test_combined_lookup() {
        let ref_data = ImmutableReferenceData::from_json(CONFIG_JSON).unwrap();
        let id = HolidayCalendarId::of("GBLO+USNY");
        let cal = ref_data.holiday_calendar(&id).unwrap();

        assert_eq!(cal.id(), &id);
        assert!(cal.is_holiday(date(2015, 8, 31)));
        assert!(cal.is_holiday(date(2015, 9, 7)));
        assert!(cal.is_business_day(date(2015, 9, 8)));

        let missing = HolidayCalendarId::of("GBLO+EUTA");
        assert!(matches!(
            ref_data.holiday_calendar(&missing),
            Err(TenorError::UnknownReference { .. })
        ));
    }

    #[test]
    fn test_config_errors() {
        let duplicate = r#"{"calendars":[{"name":"GBLO"},{"name":"GBLO"}]}"#;
        assert!(matches!(
            ImmutableReferenceData::from_json(duplicate),
            Err(TenorError::Config { .. })
        ));
        assert!(matches!(
            ImmutableReferenceData::from_json("not json"),
            Err(TenorError::Config { .. })
        ));
        assert!(matches!(
            ImmutableReferenceData::from_path("/nonexistent/calendars.json"),
            Err(TenorError::Config { .. })
        ));
    }

    #[test]
    fn test_config_rejects_standard_ids() {
        for name in ["SatSun", "NoHolidays"] {
            let json = format!(r#"{{"calendars":[{{"name":"{name}","holidays":["2015-08-31"]}}]}}"#);
            let err = ImmutableReferenceData::from_json(&json).unwrap_err();
            assert!(matches!(err, TenorError::Config { .. }));
            assert!(err.to_string().contains(name));
        }

        let text = r#"
            [[calendars]]
            name = "FriSat"
        "#;
        assert!(matches!(
            ImmutableReferenceData::from_toml(text),
            Err(TenorError::Config { .. })
        ));
    }

    #[test]
    fn test_builder_replaces() {
        let ref_data = ImmutableReferenceData::builder()
            .calendar(StaticHolidayCalendar::from_dates("XX", WeekendType::None, []))
            .calendar(StaticHolidayCalendar::from_dates("XX", WeekendType::SaturdaySunday, []))
            .build();
        let cal = ref_data.holiday_calendar(&HolidayCalendarId::of("XX")).unwrap();
        assert!(cal.is_holiday(date(2015, 8, 22)));
    }
}
