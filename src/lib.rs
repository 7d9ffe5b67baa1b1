//! Named-format date parsing and rendering, day-precision comparison and
//! calendar arithmetic on local wall-clock date-times.
//!
//! The central type is [`DateStamp`], an immutable date and time of day in
//! the process-local time zone at millisecond precision. Textual forms come
//! from the closed [`DateFormat`] catalog:
//!
//! ```
//! use datestamp::{DateFormat, DateStamp};
//!
//! let stamp = DateStamp::parse("15-08-1991", DateFormat::DisplayDate)?;
//! assert_eq!(stamp.format(DateFormat::IsoDate), "1991-08-15");
//! assert_eq!(stamp.format(DateFormat::YearMonth), "9108");
//! # Ok::<(), datestamp::DateError>(())
//! ```

mod arith;
mod compare;
mod consts;
mod construct;
mod correlation;
mod error;
mod fault;
mod format;
pub mod ldap;
mod messages;
mod pattern;
mod prelude;
mod types;

pub use arith::{day_count, delay_satisfied, minutes_elapsed_exceeds, year_count};
pub use compare::{CalendarDay, same_calendar_day};
pub use consts::*;
pub use construct::{first_day_of_year, last_day_of_year, parse_year_month_day};
pub use correlation::CorrelationId;
pub use error::{DateError, require};
pub use fault::{FORBIDDEN_STATUS, Fault, INTERNAL_ERROR_STATUS, Severity};
pub use format::DateFormat;
pub use messages::MessageCatalog;
pub use types::{Day, Month, Year, days_in_month, is_leap_year};

use chrono::{Datelike, NaiveDate, NaiveDateTime, NaiveTime, Timelike};
use std::fmt;
use std::str::FromStr;

/// A date and time of day in the local time zone, to the millisecond.
///
/// Values are `Copy` and never change after construction; every operation
/// hands back a new value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DateStamp(NaiveDateTime);

impl DateStamp {
    /// Builds a value from its seven components.
    ///
    /// A wall time skipped by a local daylight-saving transition moves
    /// forward by the length of the gap.
    ///
    /// # Errors
    /// Returns `DateError::Validation` naming the first component that is out
    /// of range for the calendar or the clock, including a year outside
    /// `MIN_YEAR..=MAX_YEAR`.
    pub fn new(
        year: i32,
        month: u32,
        day: u32,
        hour: u32,
        minute: u32,
        second: u32,
        millisecond: u32,
    ) -> Result<Self, DateError> {
        check_year(year)?;
        let date = NaiveDate::from_ymd_opt(year, month, day).ok_or_else(|| {
            DateError::validation(
                DATE_ARG,
                format!("{year:04}-{month:02}-{day:02}"),
                "not a calendar date",
            )
        })?;
        let clock = [
            (HOUR_FIELD, hour, 24),
            (MINUTE_FIELD, minute, 60),
            (SECOND_FIELD, second, 60),
            (MILLISECOND_FIELD, millisecond, 1_000),
        ];
        if let Some((field, value, limit)) = clock.into_iter().find(|(_, v, limit)| v >= limit) {
            return Err(DateError::validation(
                field,
                value,
                format!("must be below {limit}"),
            ));
        }
        NaiveTime::from_hms_milli_opt(hour, minute, second, millisecond)
            .map(|time| Self::resolve(NaiveDateTime::new(date, time)))
            .ok_or_else(|| {
                DateError::validation(
                    DATE_ARG,
                    format!("{hour:02}:{minute:02}:{second:02}.{millisecond:03}"),
                    "not a time of day",
                )
            })
    }

    /// Start of day on `date`.
    ///
    /// # Errors
    /// Returns `DateError::Validation` if the year is outside `MIN_YEAR..=MAX_YEAR`.
    pub fn from_date(date: NaiveDate) -> Result<Self, DateError> {
        Self::from_naive(date.and_time(NaiveTime::MIN))
    }

    /// Wraps a wall-clock value, dropping anything finer than a millisecond.
    ///
    /// # Errors
    /// Returns `DateError::Validation` if the year is outside `MIN_YEAR..=MAX_YEAR`.
    pub fn from_naive(value: NaiveDateTime) -> Result<Self, DateError> {
        check_year(value.year())?;
        Ok(Self::resolve(value))
    }

    /// Truncates to the millisecond and pins the wall time to one that exists
    /// in the local zone. The year must already be in range.
    pub(crate) fn resolve(value: NaiveDateTime) -> Self {
        let millis = value.nanosecond() / consts::NANOS_PER_MILLI;
        let truncated = value
            .with_nanosecond(millis * consts::NANOS_PER_MILLI)
            .unwrap_or(value);
        Self(pattern::to_local(&truncated).naive_local())
    }

    /// The wrapped wall-clock value.
    pub const fn naive(&self) -> NaiveDateTime {
        self.0
    }

    /// Calendar-date projection, discarding the time of day.
    pub const fn date(&self) -> NaiveDate {
        self.0.date()
    }

    /// Year, in `MIN_YEAR..=MAX_YEAR`.
    pub fn year(&self) -> i32 {
        self.0.year()
    }

    /// Month of the year (1-12).
    pub fn month(&self) -> u32 {
        self.0.month()
    }

    /// Day of the month (1-31).
    pub fn day(&self) -> u32 {
        self.0.day()
    }

    /// Hour of the day (0-23).
    pub fn hour(&self) -> u32 {
        self.0.hour()
    }

    pub fn minute(&self) -> u32 {
        self.0.minute()
    }

    pub fn second(&self) -> u32 {
        self.0.second()
    }

    /// Millisecond within the second (0-999).
    pub fn millisecond(&self) -> u32 {
        self.0.nanosecond() / consts::NANOS_PER_MILLI
    }

    /// Milliseconds since the Unix epoch, resolving the wall time in the local zone.
    pub fn timestamp_millis(&self) -> i64 {
        pattern::to_local(&self.0).timestamp_millis()
    }

    // --- rendering ---

    /// Renders this value with a catalog format.
    pub fn format(&self, format: DateFormat) -> String {
        pattern::render(&self.0, format.tokens())
    }

    /// Renders this value with a caller-supplied pattern.
    ///
    /// Prefer [`format`](Self::format) with a [`DateFormat`]; this exists for
    /// patterns the catalog does not carry.
    ///
    /// # Errors
    /// Returns `DateError::InvalidArgument` if `layout` is empty or malformed.
    pub fn format_with(&self, layout: &str) -> Result<String, DateError> {
        Ok(pattern::render(&self.0, &pattern::tokenize(layout)?))
    }

    /// Renders `value` when present; an absent value stays absent.
    pub fn format_opt(value: Option<&Self>, format: DateFormat) -> Option<String> {
        value.map(|stamp| stamp.format(format))
    }

    /// `yyyy-MM-dd` when present.
    pub fn to_iso_date_opt(value: Option<&Self>) -> Option<String> {
        Self::format_opt(value, DateFormat::IsoDate)
    }

    /// `yyyy-MM-dd'T'HH:mm:ss,SZ` when present.
    pub fn to_iso_date_time_opt(value: Option<&Self>) -> Option<String> {
        Self::format_opt(value, DateFormat::IsoDateTime)
    }

    /// `yyyy-MM-dd`, e.g. `2024-03-05`.
    pub fn to_iso_date(&self) -> String {
        self.format(DateFormat::IsoDate)
    }

    /// `dd-MM-yyyy`, the form shown to users.
    pub fn to_display_date(&self) -> String {
        self.format(DateFormat::DisplayDate)
    }

    /// `yyMM`, e.g. `2403`.
    pub fn to_year_month(&self) -> String {
        self.format(DateFormat::YearMonth)
    }

    pub fn to_year(&self) -> String {
        self.format(DateFormat::Year)
    }

    /// `yyyyMMddHHmmss`, the column format of legacy tables.
    pub fn to_database_date_time(&self) -> String {
        self.format(DateFormat::DatabaseDateTime)
    }

    /// `yyyyMMdd`.
    pub fn to_compact_date(&self) -> String {
        self.format(DateFormat::CompactDate)
    }

    /// `yyyy-MM-dd HH:mm:ss.SSS`, same as `Display`.
    pub fn to_timestamp(&self) -> String {
        self.format(DateFormat::DatabaseTimestamp)
    }

    /// `yyyy-MM-dd HH:mm:ss`.
    pub fn to_plain_date_time(&self) -> String {
        self.format(DateFormat::PlainDateTime)
    }

    // --- parsing ---

    /// Parses `text` laid out as `format`.
    ///
    /// # Errors
    /// Returns `DateError::Parse` if `text` does not follow the pattern or
    /// names an impossible date or time.
    pub fn parse(text: &str, format: DateFormat) -> Result<Self, DateError> {
        pattern::read(text, format.pattern(), format.tokens()).map(Self::resolve)
    }

    /// Parses `text` laid out as a caller-supplied pattern.
    ///
    /// # Errors
    /// Returns `DateError::InvalidArgument` for a malformed pattern and
    /// `DateError::Parse` when `text` does not follow it.
    pub fn parse_with(text: &str, layout: &str) -> Result<Self, DateError> {
        let tokens = pattern::tokenize(layout)?;
        pattern::read(text, layout, &tokens).map(Self::resolve)
    }

    /// Parses an ISO date (`yyyy-MM-dd`) when one is present.
    ///
    /// # Errors
    /// Returns `DateError::Parse` only if `text` is present and malformed.
    pub fn parse_iso_date_opt(text: Option<&str>) -> Result<Option<Self>, DateError> {
        text.map(|t| Self::parse(t, DateFormat::IsoDate)).transpose()
    }

    /// # Errors
    /// Returns `DateError::Parse` if `text` is not `dd-MM-yyyy`.
    pub fn parse_display_date(text: &str) -> Result<Self, DateError> {
        Self::parse(text, DateFormat::DisplayDate)
    }

    /// # Errors
    /// Returns `DateError::Parse` if `text` is not `yyyyMMddHHmmss`.
    pub fn parse_database_date_time(text: &str) -> Result<Self, DateError> {
        Self::parse(text, DateFormat::DatabaseDateTime)
    }

    /// # Errors
    /// Returns `DateError::Parse` if `text` is not `yyyyMMdd`.
    pub fn parse_compact_date(text: &str) -> Result<Self, DateError> {
        Self::parse(text, DateFormat::CompactDate)
    }

    /// # Errors
    /// Returns `DateError::Parse` if `text` is not `ddMMyyyy`.
    pub fn parse_compact_day_first(text: &str) -> Result<Self, DateError> {
        Self::parse(text, DateFormat::CompactDayFirst)
    }
}

impl TryFrom<NaiveDate> for DateStamp {
    type Error = DateError;

    fn try_from(date: NaiveDate) -> Result<Self, Self::Error> {
        Self::from_date(date)
    }
}

impl TryFrom<NaiveDateTime> for DateStamp {
    type Error = DateError;

    fn try_from(value: NaiveDateTime) -> Result<Self, Self::Error> {
        Self::from_naive(value)
    }
}

/// # Errors
/// Returns `DateError::Validation` on field `year` outside `MIN_YEAR..=MAX_YEAR`.
fn check_year(year: i32) -> Result<(), DateError> {
    if (i32::from(MIN_YEAR)..=i32::from(MAX_YEAR)).contains(&year) {
        Ok(())
    } else {
        Err(DateError::validation(
            YEAR_ARG,
            year,
            format!("must be {MIN_YEAR}-{MAX_YEAR}"),
        ))
    }
}

impl fmt::Display for DateStamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format(DateFormat::DatabaseTimestamp))
    }
}

impl FromStr for DateStamp {
    type Err = DateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s.trim(), DateFormat::DatabaseTimestamp)
    }
}

impl serde::Serialize for DateStamp {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> serde::Deserialize<'de> for DateStamp {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
