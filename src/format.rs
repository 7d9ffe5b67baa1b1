//! The closed catalog of named date formats.

use crate::consts::{
    FORMAT_ARG, PATTERN_COMPACT_DATE, PATTERN_COMPACT_DAY_FIRST, PATTERN_DATABASE_DATE_TIME,
    PATTERN_DATABASE_TIMESTAMP, PATTERN_DISPLAY_DATE, PATTERN_FOOTER_DATE_TIME,
    PATTERN_ISO_DATE, PATTERN_ISO_DATE_TIME, PATTERN_PLAIN_DATE_TIME, PATTERN_YEAR,
    PATTERN_YEAR_MONTH,
};
use crate::pattern::{Field, Token};
use crate::DateError;
use std::fmt;
use std::str::FromStr;

use Field::{Day, Fraction, Hour, Minute, Month, Offset, Second, Year};
use Token::{Field as F, Literal as L};

const ISO_DATE: &[Token<'static>] = &[F(Year, 4), L("-"), F(Month, 2), L("-"), F(Day, 2)];
const DISPLAY_DATE: &[Token<'static>] = &[F(Day, 2), L("-"), F(Month, 2), L("-"), F(Year, 4)];
const FOOTER_DATE_TIME: &[Token<'static>] = &[
    F(Day, 2),
    L("/"),
    F(Month, 2),
    L("/"),
    F(Year, 4),
    L(" "),
    F(Hour, 2),
    L(":"),
    F(Minute, 2),
    L(":"),
    F(Second, 2),
];
const DATABASE_DATE_TIME: &[Token<'static>] = &[
    F(Year, 4),
    F(Month, 2),
    F(Day, 2),
    F(Hour, 2),
    F(Minute, 2),
    F(Second, 2),
];
const DATABASE_TIMESTAMP: &[Token<'static>] = &[
    F(Year, 4),
    L("-"),
    F(Month, 2),
    L("-"),
    F(Day, 2),
    L(" "),
    F(Hour, 2),
    L(":"),
    F(Minute, 2),
    L(":"),
    F(Second, 2),
    L("."),
    F(Fraction, 3),
];
const PLAIN_DATE_TIME: &[Token<'static>] = &[
    F(Year, 4),
    L("-"),
    F(Month, 2),
    L("-"),
    F(Day, 2),
    L(" "),
    F(Hour, 2),
    L(":"),
    F(Minute, 2),
    L(":"),
    F(Second, 2),
];
const ISO_DATE_TIME: &[Token<'static>] = &[
    F(Year, 4),
    L("-"),
    F(Month, 2),
    L("-"),
    F(Day, 2),
    L("T"),
    F(Hour, 2),
    L(":"),
    F(Minute, 2),
    L(":"),
    F(Second, 2),
    L(","),
    F(Fraction, 1),
    F(Offset, 1),
];
const YEAR_MONTH: &[Token<'static>] = &[F(Year, 2), F(Month, 2)];
const YEAR_ONLY: &[Token<'static>] = &[F(Year, 4)];
const COMPACT_DATE: &[Token<'static>] = &[F(Year, 4), F(Month, 2), F(Day, 2)];
const COMPACT_DAY_FIRST: &[Token<'static>] = &[F(Day, 2), F(Month, 2), F(Year, 4)];

/// A named textual date format.
///
/// Each variant is bound to exactly one pattern string (Joda-style letters:
/// `yyyy-MM-dd`, `HH:mm:ss.SSS`, ...). Code that renders or parses dates
/// should pass one of these rather than a hand-written pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum DateFormat {
    /// `yyyy-MM-dd`
    IsoDate,
    /// `dd-MM-yyyy`, for display only
    DisplayDate,
    /// `dd/MM/yyyy HH:mm:ss`, used in page footers
    FooterDateTime,
    /// `yyyyMMddHHmmss`
    DatabaseDateTime,
    /// `yyyy-MM-dd HH:mm:ss.SSS`
    DatabaseTimestamp,
    /// `yyyy-MM-dd HH:mm:ss`
    PlainDateTime,
    /// `yyyy-MM-dd'T'HH:mm:ss,SZ`
    IsoDateTime,
    /// `yyMM`
    YearMonth,
    /// `yyyy`
    Year,
    /// `yyyyMMdd`
    CompactDate,
    /// `ddMMyyyy`
    CompactDayFirst,
}

impl DateFormat {
    pub const ALL: [Self; 11] = [
        Self::IsoDate,
        Self::DisplayDate,
        Self::FooterDateTime,
        Self::DatabaseDateTime,
        Self::DatabaseTimestamp,
        Self::PlainDateTime,
        Self::IsoDateTime,
        Self::YearMonth,
        Self::Year,
        Self::CompactDate,
        Self::CompactDayFirst,
    ];

    pub const fn pattern(self) -> &'static str {
        match self {
            Self::IsoDate => PATTERN_ISO_DATE,
            Self::DisplayDate => PATTERN_DISPLAY_DATE,
            Self::FooterDateTime => PATTERN_FOOTER_DATE_TIME,
            Self::DatabaseDateTime => PATTERN_DATABASE_DATE_TIME,
            Self::DatabaseTimestamp => PATTERN_DATABASE_TIMESTAMP,
            Self::PlainDateTime => PATTERN_PLAIN_DATE_TIME,
            Self::IsoDateTime => PATTERN_ISO_DATE_TIME,
            Self::YearMonth => PATTERN_YEAR_MONTH,
            Self::Year => PATTERN_YEAR,
            Self::CompactDate => PATTERN_COMPACT_DATE,
            Self::CompactDayFirst => PATTERN_COMPACT_DAY_FIRST,
        }
    }

    /// Stable lookup name, e.g. `iso-date`.
    pub const fn name(self) -> &'static str {
        match self {
            Self::IsoDate => "iso-date",
            Self::DisplayDate => "display-date",
            Self::FooterDateTime => "footer-date-time",
            Self::DatabaseDateTime => "database-date-time",
            Self::DatabaseTimestamp => "database-timestamp",
            Self::PlainDateTime => "plain-date-time",
            Self::IsoDateTime => "iso-date-time",
            Self::YearMonth => "year-month",
            Self::Year => "year",
            Self::CompactDate => "compact-date",
            Self::CompactDayFirst => "compact-day-first",
        }
    }

    /// Looks a format up by its [`name`](Self::name).
    ///
    /// # Errors
    /// Returns `DateError::InvalidArgument` on parameter `format` for unknown names.
    pub fn from_name(name: &str) -> Result<Self, DateError> {
        Self::ALL
            .into_iter()
            .find(|format| format.name() == name)
            .ok_or_else(|| DateError::invalid_argument(FORMAT_ARG, format!("unknown format '{name}'")))
    }

    /// Whether the pattern carries a time-of-day component.
    pub fn has_time(self) -> bool {
        self.tokens()
            .iter()
            .any(|token| matches!(token, Token::Field(Hour, _)))
    }

    pub(crate) const fn tokens(self) -> &'static [Token<'static>] {
        match self {
            Self::IsoDate => ISO_DATE,
            Self::DisplayDate => DISPLAY_DATE,
            Self::FooterDateTime => FOOTER_DATE_TIME,
            Self::DatabaseDateTime => DATABASE_DATE_TIME,
            Self::DatabaseTimestamp => DATABASE_TIMESTAMP,
            Self::PlainDateTime => PLAIN_DATE_TIME,
            Self::IsoDateTime => ISO_DATE_TIME,
            Self::YearMonth => YEAR_MONTH,
            Self::Year => YEAR_ONLY,
            Self::CompactDate => COMPACT_DATE,
            Self::CompactDayFirst => COMPACT_DAY_FIRST,
        }
    }
}

impl fmt::Display for DateFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for DateFormat {
    type Err = DateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s.trim())
    }
}
