/// Smallest year accepted by [`crate::Year`]
pub const MIN_YEAR: u16 = 1;

/// Maximum valid year (inclusive) for component-wise construction
pub const MAX_YEAR: u16 = 9999;

/// Maximum valid month (December)
pub const MAX_MONTH: u8 = 12;

/// First day of month, also the default for an omitted day
pub const MIN_DAY: u8 = 1;

/// Month number for January, also the default for an omitted month
pub const JANUARY: u8 = 1;
/// Month number for February
pub const FEBRUARY: u8 = 2;
/// Month number for December
pub const DECEMBER: u8 = 12;

/// Days in February for leap years
pub const FEBRUARY_DAYS_LEAP: u8 = 29;

/// Maximum days in each month (index 0 is unused, months are 1-indexed)
pub const DAYS_IN_MONTH: [u8; 13] = [0, 31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];

pub(crate) const LEAP_YEAR_CYCLE: u16 = 4;
pub(crate) const CENTURY_CYCLE: u16 = 100;
pub(crate) const GREGORIAN_CYCLE: u16 = 400;

/// Year a parsed value falls back to when its pattern has no year field
pub const DEFAULT_YEAR: i32 = 1970;

/// Half-width of the window two-digit years are resolved into, around the current year
pub const TWO_DIGIT_YEAR_WINDOW: i32 = 50;

pub(crate) const MILLIS_PER_SECOND: u32 = 1_000;
pub(crate) const NANOS_PER_MILLI: u32 = 1_000_000;
pub(crate) const MILLIS_PER_MINUTE: i64 = 60_000;
pub(crate) const MONTHS_PER_YEAR: u32 = 12;

/// Most fraction-of-second digits a pattern can consume
pub const MAX_FRACTION_DIGITS: usize = 9;

pub const PATTERN_ISO_DATE: &str = "yyyy-MM-dd";
pub const PATTERN_DISPLAY_DATE: &str = "dd-MM-yyyy";
pub const PATTERN_FOOTER_DATE_TIME: &str = "dd/MM/yyyy HH:mm:ss";
pub const PATTERN_DATABASE_DATE_TIME: &str = "yyyyMMddHHmmss";
pub const PATTERN_DATABASE_TIMESTAMP: &str = "yyyy-MM-dd HH:mm:ss.SSS";
pub const PATTERN_PLAIN_DATE_TIME: &str = "yyyy-MM-dd HH:mm:ss";
pub const PATTERN_ISO_DATE_TIME: &str = "yyyy-MM-dd'T'HH:mm:ss,SZ";
pub const PATTERN_YEAR_MONTH: &str = "yyMM";
pub const PATTERN_YEAR: &str = "yyyy";
pub const PATTERN_COMPACT_DATE: &str = "yyyyMMdd";
pub const PATTERN_COMPACT_DAY_FIRST: &str = "ddMMyyyy";

/// Quote character delimiting literal text inside a pattern
pub const PATTERN_QUOTE: char = '\'';

// Parameter names carried by `DateError::InvalidArgument`
pub const FORMAT_ARG: &str = "format";
pub const PATTERN_ARG: &str = "pattern";
pub const DATE_ARG: &str = "date";
pub const YEAR_ARG: &str = "year";
pub const MONTH_ARG: &str = "month";
pub const DAY_ARG: &str = "day";
pub const BYTES_ARG: &str = "bytes";

// Component names carried by `DateError::Validation`
pub const HOUR_FIELD: &str = "hour";
pub const MINUTE_FIELD: &str = "minute";
pub const SECOND_FIELD: &str = "second";
pub const MILLISECOND_FIELD: &str = "millisecond";
