//! Calendar arithmetic between two [`DateStamp`]s.
//!
//! All results are signed: positive when the second argument is later.

use crate::consts::{MILLIS_PER_MINUTE, MONTHS_PER_YEAR};
use crate::DateStamp;
use chrono::{Datelike, Months, NaiveDate};

/// Whole calendar days from `start` to `end`, ignoring time of day.
pub fn day_count(start: &DateStamp, end: &DateStamp) -> i64 {
    (end.date() - start.date()).num_days()
}

/// `date` moved by `years` whole years. February 29 lands on February 28
/// in a common year.
fn shift_years(date: NaiveDate, years: i32) -> Option<NaiveDate> {
    let months = Months::new(years.unsigned_abs().checked_mul(MONTHS_PER_YEAR)?);
    if years >= 0 {
        date.checked_add_months(months)
    } else {
        date.checked_sub_months(months)
    }
}

/// Full years from `earlier` to `later`, with `earlier <= later`.
fn full_years(earlier: NaiveDate, later: NaiveDate) -> i32 {
    let mut years = later.year() - earlier.year();
    while years > 0 && shift_years(earlier, years).is_none_or(|shifted| shifted > later) {
        years -= 1;
    }
    years
}

/// Full years elapsed from `a` to `b`, ignoring time of day.
///
/// Negative when `b` is earlier. December 31 to the following January 1 is
/// zero years; a date to the same date a year later is one.
pub fn year_count(a: &DateStamp, b: &DateStamp) -> i32 {
    let (from, to) = (a.date(), b.date());
    if from <= to {
        full_years(from, to)
    } else {
        -full_years(to, from)
    }
}

/// Whether `date2` falls strictly after `date1` moved forward by `years` years.
///
/// Compares calendar days only. A shift outside the representable range is
/// never satisfied.
pub fn delay_satisfied(date1: &DateStamp, date2: &DateStamp, years: i32) -> bool {
    shift_years(date1.date(), years).is_some_and(|deadline| date2.date() > deadline)
}

/// Whether more than `threshold` whole minutes elapse from `start` to `end`.
///
/// Elapsed time is `end - start` between the instants both wall times denote
/// in the local zone, truncated toward zero, so an `end` before `start` never
/// exceeds a non-negative threshold.
pub fn minutes_elapsed_exceeds(start: &DateStamp, end: &DateStamp, threshold: i64) -> bool {
    let elapsed = end.timestamp_millis() - start.timestamp_millis();
    elapsed / MILLIS_PER_MINUTE > threshold
}
