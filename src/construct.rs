use crate::consts::{DAY_ARG, DAYS_IN_MONTH, DECEMBER, JANUARY, MIN_DAY, MONTH_ARG, YEAR_ARG};
use crate::types::{Day, Month, Year};
use crate::{DateError, DateStamp};
use chrono::{DateTime, Local, NaiveDate, NaiveTime};
use std::time::SystemTime;

/// Checks that `text` is a plain run of ASCII digits and converts it.
fn numeric<T: std::str::FromStr>(field: &'static str, text: &str) -> Result<T, DateError> {
    if text.is_empty() || !text.bytes().all(|b| b.is_ascii_digit()) {
        return Err(DateError::validation(field, text, "must be numeric"));
    }
    text.parse()
        .map_err(|_| DateError::validation(field, text, "is too large"))
}

/// Reads an optional month or day: absent, blank or zero mean `default`.
fn component(field: &'static str, text: Option<&str>, default: u8) -> Result<u8, DateError> {
    match text {
        None => Ok(default),
        Some(t) if t.trim().is_empty() => Ok(default),
        Some(t) => numeric::<u8>(field, t).map(|v| if v == 0 { default } else { v }),
    }
}

/// Builds the start of day for a date given as text components.
///
/// `year` is required. `month` and `day` fall back to 1 when absent, blank
/// or zero.
///
/// # Errors
/// Returns `DateError::InvalidArgument` if `year` is blank and
/// `DateError::Validation` if a component is not numeric or the date does not
/// exist.
pub fn parse_year_month_day(
    year: &str,
    month: Option<&str>,
    day: Option<&str>,
) -> Result<DateStamp, DateError> {
    if year.trim().is_empty() {
        return Err(DateError::invalid_argument(YEAR_ARG, "year is required"));
    }
    let year = Year::new(numeric(YEAR_ARG, year)?)?;
    let month = Month::new(component(MONTH_ARG, month, JANUARY)?)?;
    let day = Day::new(component(DAY_ARG, day, MIN_DAY)?, year, month)?;

    NaiveDate::from_ymd_opt(
        i32::from(year.get()),
        u32::from(month.get()),
        u32::from(day.get()),
    )
    .ok_or_else(|| DateError::validation(DAY_ARG, day, "not a calendar date"))
    .and_then(DateStamp::from_date)
}

fn start_of(year: i32, month: u8, day: u8) -> Result<DateStamp, DateError> {
    NaiveDate::from_ymd_opt(year, u32::from(month), u32::from(day))
        .ok_or_else(|| DateError::validation(YEAR_ARG, year, "outside the supported range"))
        .and_then(DateStamp::from_date)
}

/// January 1 of `year`, at start of day.
///
/// # Errors
/// Returns `DateError::Validation` if `year` is outside `MIN_YEAR..=MAX_YEAR`.
pub fn first_day_of_year(year: i32) -> Result<DateStamp, DateError> {
    start_of(year, JANUARY, MIN_DAY)
}

/// December 31 of `year`, at start of day.
///
/// # Errors
/// Returns `DateError::Validation` if `year` is outside `MIN_YEAR..=MAX_YEAR`.
pub fn last_day_of_year(year: i32) -> Result<DateStamp, DateError> {
    start_of(year, DECEMBER, DAYS_IN_MONTH[DECEMBER as usize])
}

impl DateStamp {
    /// The current local time.
    pub fn now() -> Self {
        Self::resolve(Local::now().naive_local())
    }

    /// Same calendar date at 00:00:00.000, or the first existing time after
    /// it when the local zone skips midnight.
    #[must_use]
    pub fn truncate_to_day(self) -> Self {
        Self::resolve(self.date().and_time(NaiveTime::MIN))
    }

    /// The local wall time at `time`.
    ///
    /// # Errors
    /// Returns `DateError::Validation` if that wall time falls outside
    /// `MIN_YEAR..=MAX_YEAR`.
    pub fn from_system_time(time: SystemTime) -> Result<Self, DateError> {
        Self::from_naive(DateTime::<Local>::from(time).naive_local())
    }

    /// The instant this wall time denotes in the local zone.
    pub fn to_system_time(&self) -> SystemTime {
        SystemTime::from(crate::pattern::to_local(&self.naive()))
    }
}
