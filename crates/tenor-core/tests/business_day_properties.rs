//! Property tests for business day conventions and adjustments.

use proptest::prelude::*;

use tenor_core::calendars::{
    BusinessDayAdjustment, BusinessDayConvention, HolidayCalendar, HolidayCalendarId,
    StaticHolidayCalendar, WeekendType,
};
use tenor_core::reference_data::{ImmutableReferenceData, ReferenceData};
use tenor_core::types::Date;

fn date(y: i32, m: u32, d: u32) -> Date {
    Date::from_ymd(y, m, d).unwrap()
}

/// A calendar with UK-style 2015/2016 holidays on top of a weekend.
fn gblo() -> StaticHolidayCalendar {
    StaticHolidayCalendar::from_dates(
        "GBLO",
        WeekendType::SaturdaySunday,
        [
            date(2015, 1, 1),
            date(2015, 4, 3),
            date(2015, 4, 6),
            date(2015, 5, 4),
            date(2015, 5, 25),
            date(2015, 8, 31),
            date(2015, 12, 25),
            date(2015, 12, 28),
            date(2016, 1, 1),
            date(2016, 3, 25),
            date(2016, 3, 28),
            date(2016, 5, 2),
            date(2016, 5, 30),
            date(2016, 8, 29),
            date(2016, 12, 26),
            date(2016, 12, 27),
        ],
    )
}

fn ref_data() -> ImmutableReferenceData {
    ImmutableReferenceData::builder().calendar(gblo()).build()
}

fn date_strategy() -> impl Strategy<Value = Date> {
    (0i64..731).prop_map(|offset| date(2015, 1, 1).add_days(offset))
}

fn convention_strategy() -> impl Strategy<Value = BusinessDayConvention> {
    prop::sample::select(BusinessDayConvention::ALL.to_vec())
}

fn calendar_strategy() -> impl Strategy<Value = HolidayCalendarId> {
    prop::sample::select(vec![
        HolidayCalendarId::NO_HOLIDAYS,
        HolidayCalendarId::SAT_SUN,
        HolidayCalendarId::FRI_SAT,
        HolidayCalendarId::of("GBLO"),
    ])
}

#[test]
fn test_concrete_weekend_scenario() {
    let cal = StaticHolidayCalendar::from_dates(
        "C",
        WeekendType::None,
        [date(2015, 8, 22), date(2015, 8, 23)],
    );
    assert_eq!(BusinessDayConvention::Following.adjust(date(2015, 8, 22), &cal), date(2015, 8, 24));
    assert_eq!(BusinessDayConvention::Preceding.adjust(date(2015, 8, 22), &cal), date(2015, 8, 21));
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    #[test]
    fn test_business_days_are_unchanged(d in date_strategy(), convention in convention_strategy()) {
        let cal = gblo();
        if cal.is_business_day(d) {
            prop_assert_eq!(convention.adjust(d, &cal), d);
        }
    }

    #[test]
    fn test_following_is_smallest_business_day_on_or_after(d in date_strategy()) {
        let cal = gblo();
        let adjusted = BusinessDayConvention::Following.adjust(d, &cal);

        prop_assert!(adjusted >= d);
        prop_assert!(cal.is_business_day(adjusted));
        let mut probe = d;
        while probe < adjusted {
            prop_assert!(cal.is_holiday(probe));
            probe = probe.add_days(1);
        }
    }

    #[test]
    fn test_preceding_is_largest_business_day_on_or_before(d in date_strategy()) {
        let cal = gblo();
        let adjusted = BusinessDayConvention::Preceding.adjust(d, &cal);

        prop_assert!(adjusted <= d);
        prop_assert!(cal.is_business_day(adjusted));
        let mut probe = d;
        while probe > adjusted {
            prop_assert!(cal.is_holiday(probe));
            probe = probe.add_days(-1);
        }
    }

    #[test]
    fn test_modified_following_stays_in_month(d in date_strategy()) {
        let cal = gblo();
        let following = BusinessDayConvention::Following.adjust(d, &cal);
        let preceding = BusinessDayConvention::Preceding.adjust(d, &cal);
        let adjusted = BusinessDayConvention::ModifiedFollowing.adjust(d, &cal);

        if following.same_month(&d) {
            prop_assert_eq!(adjusted, following);
        } else {
            prop_assert_eq!(adjusted, preceding);
            prop_assert!(adjusted.same_month(&d));
        }
    }

    #[test]
    fn test_modified_preceding_stays_in_month(d in date_strategy()) {
        let cal = gblo();
        let adjusted = BusinessDayConvention::ModifiedPreceding.adjust(d, &cal);

        prop_assert!(cal.is_business_day(adjusted));
        prop_assert!(adjusted.same_month(&d));
    }

    #[test]
    fn test_nearest_is_closest(d in date_strategy()) {
        let cal = gblo();
        let adjusted = BusinessDayConvention::Nearest.adjust(d, &cal);
        let following = BusinessDayConvention::Following.adjust(d, &cal);
        let preceding = BusinessDayConvention::Preceding.adjust(d, &cal);

        let distance = d.days_between(&adjusted).abs();
        prop_assert!(distance <= d.days_between(&following).abs());
        prop_assert!(distance <= d.days_between(&preceding).abs());
    }

    #[test]
    fn test_resolution_equivalence(
        d in date_strategy(),
        convention in convention_strategy(),
        calendar in calendar_strategy(),
    ) {
        let ref_data = ref_data();
        let adjustment = BusinessDayAdjustment::of(convention, calendar);

        let direct = adjustment.adjust(d, &ref_data).unwrap();
        let resolved = adjustment.resolve(&ref_data).unwrap().adjust(d);
        prop_assert_eq!(direct, resolved);
    }

    #[test]
    fn test_none_is_neutral(d in date_strategy()) {
        let empty = ImmutableReferenceData::empty();
        let standard = ImmutableReferenceData::standard();
        let configured = ref_data();
        let sources: [&dyn ReferenceData; 3] = [&empty, &standard, &configured];
        for source in sources {
            prop_assert_eq!(BusinessDayAdjustment::NONE.adjust(d, source).unwrap(), d);
        }
    }
}
