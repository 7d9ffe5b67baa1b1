//! Day-precision comparison.
//!
//! Business rules here care about "the same day", not the same instant, so
//! every comparison except [`DateStamp::is_same_instant`] first projects both
//! operands onto their calendar date.

use crate::DateStamp;
use chrono::{DateTime, Local, NaiveDate, NaiveDateTime, TimeZone};
use std::cmp::Ordering;
use std::time::SystemTime;

/// Anything that can be projected onto a local calendar date.
///
/// `None` means "no date", which [`same_calendar_day`] treats as a value in
/// its own right.
pub trait CalendarDay {
    fn calendar_day(&self) -> Option<NaiveDate>;
}

impl CalendarDay for DateStamp {
    fn calendar_day(&self) -> Option<NaiveDate> {
        Some(self.date())
    }
}

impl CalendarDay for NaiveDate {
    fn calendar_day(&self) -> Option<NaiveDate> {
        Some(*self)
    }
}

impl CalendarDay for NaiveDateTime {
    fn calendar_day(&self) -> Option<NaiveDate> {
        Some(self.date())
    }
}

impl<Tz: TimeZone> CalendarDay for DateTime<Tz> {
    fn calendar_day(&self) -> Option<NaiveDate> {
        Some(self.with_timezone(&Local).date_naive())
    }
}

impl CalendarDay for SystemTime {
    fn calendar_day(&self) -> Option<NaiveDate> {
        Some(DateTime::<Local>::from(*self).date_naive())
    }
}

impl<T: CalendarDay + ?Sized> CalendarDay for &T {
    fn calendar_day(&self) -> Option<NaiveDate> {
        (**self).calendar_day()
    }
}

impl<T: CalendarDay> CalendarDay for Option<T> {
    fn calendar_day(&self) -> Option<NaiveDate> {
        self.as_ref().and_then(T::calendar_day)
    }
}

/// Whether `a` and `b` fall on the same calendar day.
///
/// Two absent dates are equal; an absent date never equals a present one.
/// The operands may be of different shapes, e.g. a [`DateStamp`] and a
/// [`SystemTime`].
pub fn same_calendar_day<A: CalendarDay, B: CalendarDay>(a: A, b: B) -> bool {
    a.calendar_day() == b.calendar_day()
}

impl DateStamp {
    /// Strictly later calendar day than `other`.
    pub fn is_after_by_day(&self, other: &Self) -> bool {
        self.date() > other.date()
    }

    /// Strictly earlier calendar day than `other`.
    pub fn is_before_by_day(&self, other: &Self) -> bool {
        self.date() < other.date()
    }

    /// Orders by calendar day only; `Ordering as i8` yields -1, 0 or 1.
    pub fn compare_by_day(&self, other: &Self) -> Ordering {
        self.date().cmp(&other.date())
    }

    /// Exact equality, down to the millisecond.
    pub fn is_same_instant(&self, other: &Self) -> bool {
        self == other
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{DATE_ARG, DateError, require};
    use proptest::prelude::*;

    fn stamp(text: &str) -> DateStamp {
        text.parse().unwrap()
    }

    #[test]
    fn test_day_ordering_ignores_time() {
        let morning = stamp("2024-03-05 08:00:00.000");
        let evening = stamp("2024-03-05 23:59:59.999");
        let next_day = stamp("2024-03-06 00:00:00.000");

        assert!(!evening.is_after_by_day(&morning));
        assert!(!morning.is_before_by_day(&evening));
        assert_eq!(morning.compare_by_day(&evening), Ordering::Equal);

        assert!(next_day.is_after_by_day(&evening));
        assert!(evening.is_before_by_day(&next_day));
        assert_eq!(evening.compare_by_day(&next_day) as i8, -1);
        assert_eq!(next_day.compare_by_day(&morning) as i8, 1);
    }

    #[test]
    fn test_same_calendar_day_absent_values() {
        let value = stamp("2024-03-05 08:00:00.000");
        assert!(same_calendar_day(None::<DateStamp>, None::<DateStamp>));
        assert!(!same_calendar_day(None::<DateStamp>, Some(value)));
        assert!(!same_calendar_day(Some(&value), None::<&DateStamp>));
        assert!(same_calendar_day(Some(value), &value));
    }

    #[test]
    fn test_same_calendar_day_mixed_shapes() {
        let value = stamp("2024-03-05 08:00:00.000");
        let date = NaiveDate::from_ymd_opt(2024, 3, 5).unwrap();
        assert!(same_calendar_day(value, date));
        assert!(same_calendar_day(date.and_hms_opt(22, 0, 0).unwrap(), value));
        assert!(!same_calendar_day(value, date.succ_opt().unwrap()));

        let local = Local
            .from_local_datetime(&value.naive())
            .earliest()
            .unwrap();
        assert!(same_calendar_day(value, local));
        assert!(same_calendar_day(value, SystemTime::from(local)));
    }

    #[test]
    fn test_same_instant_is_exact() {
        let a = stamp("2024-03-05 08:00:00.000");
        let b = stamp("2024-03-05 08:00:00.001");
        assert!(a.is_same_instant(&a));
        assert!(!a.is_same_instant(&b));
        assert!(same_calendar_day(a, b));
    }

    #[test]
    fn test_same_instant_with_missing_operand() {
        let a = stamp("2024-03-05 08:00:00.000");
        let missing: Option<DateStamp> = None;
        let result = require(missing, DATE_ARG).map(|b| a.is_same_instant(&b));
        assert!(matches!(
            result,
            Err(DateError::InvalidArgument { param: "date", .. })
        ));
    }

    proptest! {
        #[test]
        fn prop_compare_agrees_with_same_day(
            a in 0u64..100_000,
            b in 0u64..100_000,
            ha in 0u32..24,
            hb in 0u32..24,
        ) {
            let epoch = NaiveDate::from_ymd_opt(1900, 1, 1).unwrap();
            let day = |offset: u64, hour: u32| {
                DateStamp::from_naive(
                    (epoch + chrono::Days::new(offset))
                        .and_hms_opt(hour, 0, 0)
                        .unwrap(),
                )
                .unwrap()
            };
            let (x, y) = (day(a, ha), day(b, hb));
            prop_assert_eq!(
                x.compare_by_day(&y) == Ordering::Equal,
                same_calendar_day(x, y)
            );
            prop_assert_eq!(x.is_after_by_day(&y), y.is_before_by_day(&x));
        }
    }
}
