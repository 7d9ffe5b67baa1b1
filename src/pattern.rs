//! Pattern tokenizer plus the renderer and strict parser driven by it.
//!
//! Patterns use Joda-style letters. Repeating a letter sets the field width:
//!
//! | Letter | Field | Notes |
//! |--------|-------|-------|
//! | `y` | year | `yy` is a two-digit year |
//! | `M` | month | |
//! | `d` | day of month | |
//! | `H` | hour of day (0-23) | |
//! | `m` | minute | |
//! | `s` | second | |
//! | `S` | fraction of second | millisecond precision |
//! | `Z` | zone offset | `Z` is `+HHMM`, `ZZ` is `+HH:MM`, seconds appended when non-zero |
//!
//! Text between single quotes is literal and `''` is a quote. Every other
//! non-letter character is literal.

use crate::consts::{
    DEFAULT_YEAR, JANUARY, MAX_FRACTION_DIGITS, MAX_MONTH, MAX_YEAR, MIN_DAY, MIN_YEAR,
    MILLIS_PER_SECOND, NANOS_PER_MILLI, PATTERN_ARG, PATTERN_QUOTE, TWO_DIGIT_YEAR_WINDOW,
};
use crate::DateError;
use chrono::format::{Item, Numeric, Pad};
use chrono::{
    DateTime, Datelike, Days, FixedOffset, Local, LocalResult, NaiveDate, NaiveDateTime,
    NaiveTime, Offset, TimeZone, Timelike, Utc,
};
use std::fmt::Write;

const SECONDS_PER_HOUR: u32 = 3_600;
const SECONDS_PER_MINUTE: u32 = 60;
const MINUTES_PER_HOUR: u32 = 60;
const MILLI_DIGITS: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Field {
    Year,
    Month,
    Day,
    Hour,
    Minute,
    Second,
    Fraction,
    Offset,
}

impl Field {
    const fn from_letter(letter: char) -> Option<Self> {
        match letter {
            'y' => Some(Self::Year),
            'M' => Some(Self::Month),
            'd' => Some(Self::Day),
            'H' => Some(Self::Hour),
            'm' => Some(Self::Minute),
            's' => Some(Self::Second),
            'S' => Some(Self::Fraction),
            'Z' => Some(Self::Offset),
            _ => None,
        }
    }

    const fn label(self) -> &'static str {
        match self {
            Self::Year => "year",
            Self::Month => "month",
            Self::Day => "day",
            Self::Hour => "hour",
            Self::Minute => "minute",
            Self::Second => "second",
            Self::Fraction => "fraction of second",
            Self::Offset => "zone offset",
        }
    }

    /// Digit counts accepted when parsing a field of `width`.
    const fn digit_bounds(self, width: usize) -> (usize, usize) {
        match (self, width) {
            (Self::Year, 1) => (1, 4),
            (Self::Fraction, w) if w < MILLI_DIGITS => (w, MAX_FRACTION_DIGITS),
            (_, 1) => (1, 2),
            (_, w) => (w, w),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Token<'a> {
    Literal(&'a str),
    Field(Field, usize),
}

/// Splits `pattern` into literal and field tokens.
pub(crate) fn tokenize(pattern: &str) -> Result<Vec<Token<'_>>, DateError> {
    if pattern.is_empty() {
        return Err(DateError::invalid_argument(PATTERN_ARG, "pattern is empty"));
    }

    let mut tokens = Vec::new();
    let mut rest = pattern;
    while let Some(c) = rest.chars().next() {
        if c == PATTERN_QUOTE {
            rest = quoted(&rest[1..], pattern, &mut tokens)?;
        } else if c.is_ascii_alphabetic() {
            let field = Field::from_letter(c).ok_or_else(|| {
                DateError::invalid_argument(
                    PATTERN_ARG,
                    format!("unknown letter '{c}' in '{pattern}'"),
                )
            })?;
            let width = rest.bytes().take_while(|&b| char::from(b) == c).count();
            if width > MAX_FRACTION_DIGITS {
                return Err(DateError::invalid_argument(
                    PATTERN_ARG,
                    format!("field '{c}' is wider than {MAX_FRACTION_DIGITS} in '{pattern}'"),
                ));
            }
            tokens.push(Token::Field(field, width));
            rest = &rest[width..];
        } else {
            let len = rest
                .find(|x: char| x == PATTERN_QUOTE || x.is_ascii_alphabetic())
                .unwrap_or(rest.len());
            tokens.push(Token::Literal(&rest[..len]));
            rest = &rest[len..];
        }
    }
    Ok(tokens)
}

/// Consumes quoted text following an opening quote; returns the remainder.
fn quoted<'a>(
    mut rest: &'a str,
    pattern: &str,
    tokens: &mut Vec<Token<'a>>,
) -> Result<&'a str, DateError> {
    // `''` outside quotes
    if rest.starts_with(PATTERN_QUOTE) {
        tokens.push(Token::Literal(&rest[..1]));
        return Ok(&rest[1..]);
    }
    loop {
        let end = rest.find(PATTERN_QUOTE).ok_or_else(|| {
            DateError::invalid_argument(PATTERN_ARG, format!("unterminated quote in '{pattern}'"))
        })?;
        if end > 0 {
            tokens.push(Token::Literal(&rest[..end]));
        }
        let after = &rest[end + 1..];
        if after.starts_with(PATTERN_QUOTE) {
            tokens.push(Token::Literal(&after[..1]));
            rest = &after[1..];
        } else {
            return Ok(after);
        }
    }
}

/// Pins wall time `wall` to an instant in `zone`.
///
/// An ambiguous wall time takes its first occurrence. A wall time skipped by
/// a forward transition is read with the offset in force before the gap, so
/// it lands after the gap by the gap's length (02:30 in a 02:00 to 03:00 gap
/// becomes 03:30).
pub(crate) fn resolve_in<Tz: TimeZone>(zone: &Tz, wall: &NaiveDateTime) -> DateTime<Tz> {
    match zone.from_local_datetime(wall) {
        LocalResult::Single(instant) | LocalResult::Ambiguous(instant, _) => instant,
        LocalResult::None => {
            let day_before = wall.checked_sub_days(Days::new(1)).unwrap_or(*wall);
            let before = zone.offset_from_utc_datetime(&day_before).fix();
            zone.from_utc_datetime(&(*wall - before))
        }
    }
}

/// [`resolve_in`] for the process-local zone.
pub(crate) fn to_local(wall: &NaiveDateTime) -> DateTime<Local> {
    resolve_in(&Local, wall)
}

/// Offset of the local zone in effect at wall time `value`.
pub(crate) fn local_offset(value: &NaiveDateTime) -> FixedOffset {
    to_local(value).offset().fix()
}

pub(crate) fn render(value: &NaiveDateTime, tokens: &[Token<'_>]) -> String {
    let items: Vec<Item<'_>> = tokens.iter().map(|token| item(value, *token)).collect();
    let mut out = String::with_capacity(32);
    // Every item reads a field a NaiveDateTime carries, and writing into a
    // String cannot fail.
    let _ = write!(out, "{}", value.format_with_items(items.iter()));
    out
}

/// The chrono item printing `token`, or its pre-rendered text where chrono's
/// padding or offset layout differs from the pattern's.
fn item<'a>(value: &NaiveDateTime, token: Token<'a>) -> Item<'a> {
    let (field, width) = match token {
        Token::Literal(text) => return Item::Literal(text),
        Token::Field(field, width) => (field, width),
    };
    let (numeric, natural) = match field {
        Field::Year if width == 2 => (Numeric::YearMod100, 2),
        Field::Year => (Numeric::Year, 4),
        Field::Month => (Numeric::Month, 2),
        Field::Day => (Numeric::Day, 2),
        Field::Hour => (Numeric::Hour, 2),
        Field::Minute => (Numeric::Minute, 2),
        Field::Second => (Numeric::Second, 2),
        Field::Fraction => return owned(fraction_text(value, width)),
        Field::Offset => return owned(offset_text(local_offset(value), width)),
    };
    match width {
        1 => Item::Numeric(numeric, Pad::None),
        w if w == natural => Item::Numeric(numeric, Pad::Zero),
        _ => owned(padded(value, field, width)),
    }
}

fn owned(text: String) -> Item<'static> {
    Item::OwnedLiteral(text.into_boxed_str())
}

fn padded(value: &NaiveDateTime, field: Field, width: usize) -> String {
    let number = match field {
        Field::Year => i64::from(value.year()),
        Field::Month => i64::from(value.month()),
        Field::Day => i64::from(value.day()),
        Field::Hour => i64::from(value.hour()),
        Field::Minute => i64::from(value.minute()),
        Field::Second | Field::Fraction | Field::Offset => i64::from(value.second()),
    };
    format!("{number:0width$}")
}

/// Milliseconds padded to `width`, or trimmed of trailing zeros down to it.
fn fraction_text(value: &NaiveDateTime, width: usize) -> String {
    let millis = format!("{:03}", value.nanosecond() / NANOS_PER_MILLI);
    if width >= MILLI_DIGITS {
        format!("{millis:0<width$}")
    } else {
        let keep = millis.trim_end_matches('0').len().max(width);
        millis[..keep].to_owned()
    }
}

/// `+HHMM` (`Z`) or `+HH:MM` (`ZZ`), with seconds appended for sub-minute
/// offsets such as local mean time.
fn offset_text(offset: FixedOffset, width: usize) -> String {
    let seconds = offset.local_minus_utc();
    let sign = if seconds < 0 { '-' } else { '+' };
    let seconds = seconds.unsigned_abs();
    let (hours, minutes, rest) = (
        seconds / SECONDS_PER_HOUR,
        seconds % SECONDS_PER_HOUR / SECONDS_PER_MINUTE,
        seconds % SECONDS_PER_MINUTE,
    );
    let separator = if width == 1 { "" } else { ":" };
    let mut text = format!("{sign}{hours:02}{separator}{minutes:02}");
    if rest != 0 {
        let _ = write!(text, "{separator}{rest:02}");
    }
    text
}

/// Field values collected while reading text; omitted fields keep their defaults.
struct Parsed {
    year: i32,
    month: u32,
    day: u32,
    hour: u32,
    minute: u32,
    second: u32,
    millis: u32,
    offset: Option<FixedOffset>,
}

impl Default for Parsed {
    fn default() -> Self {
        Self {
            year: DEFAULT_YEAR,
            month: u32::from(JANUARY),
            day: u32::from(MIN_DAY),
            hour: 0,
            minute: 0,
            second: 0,
            millis: 0,
            offset: None,
        }
    }
}

struct Reader<'t> {
    text: &'t str,
    pattern: &'t str,
    pos: usize,
}

impl<'t> Reader<'t> {
    fn fail(&self, reason: impl Into<String>) -> DateError {
        DateError::parse(self.text, self.pattern, reason)
    }

    fn rest(&self) -> &'t str {
        &self.text[self.pos..]
    }

    fn literal(&mut self, expected: &str) -> Result<(), DateError> {
        if self.rest().starts_with(expected) {
            self.pos += expected.len();
            Ok(())
        } else {
            Err(self.fail(format!("expected '{expected}' at position {}", self.pos)))
        }
    }

    fn digits(&mut self, field: Field, min: usize, max: usize) -> Result<&'t str, DateError> {
        let rest = self.rest();
        let count = rest.bytes().take(max).take_while(u8::is_ascii_digit).count();
        if count < min {
            let expected = if min == max {
                format!("{min}")
            } else {
                format!("{min}-{max}")
            };
            return Err(self.fail(format!(
                "expected {expected} digits for {} at position {}",
                field.label(),
                self.pos
            )));
        }
        self.pos += count;
        Ok(&rest[..count])
    }

    fn number(&mut self, field: Field, width: usize) -> Result<u32, DateError> {
        let (min, max) = field.digit_bounds(width);
        let digits = self.digits(field, min, max)?;
        digits
            .parse()
            .map_err(|_| self.fail(format!("{} '{digits}' is not a number", field.label())))
    }

    fn fraction(&mut self, width: usize) -> Result<u32, DateError> {
        let (min, max) = Field::Fraction.digit_bounds(width);
        let digits = self.digits(Field::Fraction, min, max)?;
        let millis = format!("{:0<MILLI_DIGITS$}", &digits[..digits.len().min(MILLI_DIGITS)]);
        millis
            .parse()
            .map_err(|_| self.fail(format!("fraction '{digits}' is not a number")))
    }

    fn offset(&mut self, width: usize) -> Result<FixedOffset, DateError> {
        if self.rest().starts_with('Z') {
            self.pos += 1;
            return Ok(Utc.fix());
        }
        let sign = match self.rest().chars().next() {
            Some('+') => 1,
            Some('-') => -1,
            _ => return Err(self.fail(format!("expected zone offset at position {}", self.pos))),
        };
        self.pos += 1;
        let hours = self.number(Field::Offset, 2)?;
        if width > 1 {
            self.literal(":")?;
        }
        let minutes = self.number(Field::Offset, 2)?;
        let separator = if width > 1 { ":" } else { "" };
        let seconds = if self.offset_seconds_follow(separator) {
            self.pos += separator.len();
            self.number(Field::Offset, 2)?
        } else {
            0
        };
        if minutes >= MINUTES_PER_HOUR || seconds >= SECONDS_PER_MINUTE {
            return Err(self.fail(format!("offset {minutes:02}:{seconds:02} out of range")));
        }
        let total = i32::try_from(hours * SECONDS_PER_HOUR + minutes * SECONDS_PER_MINUTE + seconds)
            .map_err(|_| self.fail("zone offset out of range"))?;
        FixedOffset::east_opt(sign * total).ok_or_else(|| self.fail("zone offset out of range"))
    }

    fn offset_seconds_follow(&self, separator: &str) -> bool {
        self.rest()
            .strip_prefix(separator)
            .is_some_and(|after| after.bytes().take(2).filter(u8::is_ascii_digit).count() == 2)
    }
}

/// Resolves a two-digit year into the century window centred on `pivot`.
pub(crate) const fn resolve_two_digit_year(two_digits: i32, pivot: i32) -> i32 {
    let low = pivot - TWO_DIGIT_YEAR_WINDOW;
    let candidate = low - low.rem_euclid(100) + two_digits;
    if candidate < low { candidate + 100 } else { candidate }
}

/// Reads `text` strictly according to `tokens`.
pub(crate) fn read(text: &str, pattern: &str, tokens: &[Token<'_>]) -> Result<NaiveDateTime, DateError> {
    let mut reader = Reader { text, pattern, pos: 0 };
    let mut parsed = Parsed::default();

    for token in tokens {
        match *token {
            Token::Literal(expected) => reader.literal(expected)?,
            Token::Field(Field::Fraction, width) => parsed.millis = reader.fraction(width)?,
            Token::Field(Field::Offset, width) => parsed.offset = Some(reader.offset(width)?),
            Token::Field(field, width) => {
                let value = reader.number(field, width)?;
                match field {
                    Field::Year => {
                        let value = i32::try_from(value)
                            .map_err(|_| reader.fail(format!("year {value} out of range")))?;
                        parsed.year = if width == 2 {
                            resolve_two_digit_year(value, Local::now().year())
                        } else {
                            value
                        };
                    }
                    Field::Month => parsed.month = value,
                    Field::Day => parsed.day = value,
                    Field::Hour => parsed.hour = value,
                    Field::Minute => parsed.minute = value,
                    Field::Second => parsed.second = value,
                    Field::Fraction | Field::Offset => {}
                }
            }
        }
    }
    if reader.pos < text.len() {
        return Err(reader.fail(format!("unexpected trailing text at position {}", reader.pos)));
    }

    let wall = assemble(&parsed).map_err(|reason| reader.fail(reason))?;
    if !(i32::from(MIN_YEAR)..=i32::from(MAX_YEAR)).contains(&wall.year()) {
        return Err(reader.fail(format!(
            "year {} outside {MIN_YEAR}-{MAX_YEAR}",
            wall.year()
        )));
    }
    Ok(wall)
}

fn assemble(parsed: &Parsed) -> Result<NaiveDateTime, String> {
    if parsed.month == 0 || parsed.month > u32::from(MAX_MONTH) {
        return Err(format!("month {} out of range", parsed.month));
    }
    let date = NaiveDate::from_ymd_opt(parsed.year, parsed.month, parsed.day).ok_or_else(|| {
        format!(
            "day {} does not exist in {:04}-{:02}",
            parsed.day, parsed.year, parsed.month
        )
    })?;
    if parsed.hour > 23 {
        return Err(format!("hour {} out of range", parsed.hour));
    }
    if parsed.minute > 59 {
        return Err(format!("minute {} out of range", parsed.minute));
    }
    if parsed.second > 59 {
        return Err(format!("second {} out of range", parsed.second));
    }
    let time = NaiveTime::from_hms_milli_opt(parsed.hour, parsed.minute, parsed.second, parsed.millis)
        .filter(|_| parsed.millis < MILLIS_PER_SECOND)
        .ok_or_else(|| "time of day out of range".to_owned())?;
    let wall = NaiveDateTime::new(date, time);

    match parsed.offset {
        None => Ok(wall),
        Some(offset) => offset
            .from_local_datetime(&wall)
            .single()
            .map(|instant| instant.with_timezone(&Local).naive_local())
            .ok_or_else(|| "instant out of range".to_owned()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(y: i32, mo: u32, d: u32, h: u32, mi: u32, s: u32, ms: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, mo, d)
            .unwrap()
            .and_hms_milli_opt(h, mi, s, ms)
            .unwrap()
    }

    fn parse(text: &str, pattern: &str) -> Result<NaiveDateTime, DateError> {
        read(text, pattern, &tokenize(pattern).unwrap())
    }

    fn show(value: &NaiveDateTime, pattern: &str) -> String {
        render(value, &tokenize(pattern).unwrap())
    }

    #[test]
    fn test_tokenize_quotes() {
        let tokens = tokenize("HH'h'mm").unwrap();
        assert_eq!(
            tokens,
            [
                Token::Field(Field::Hour, 2),
                Token::Literal("h"),
                Token::Field(Field::Minute, 2)
            ]
        );

        let tokens = tokenize("'o''clock' HH''").unwrap();
        assert_eq!(
            tokens,
            [
                Token::Literal("o"),
                Token::Literal("'"),
                Token::Literal("clock"),
                Token::Literal(" "),
                Token::Field(Field::Hour, 2),
                Token::Literal("'"),
            ]
        );
    }

    #[test]
    fn test_tokenize_rejects_bad_patterns() {
        for pattern in ["", "yyyy-MM-dd'T", "EEE dd", "yyyyyyyyyy"] {
            assert!(
                matches!(
                    tokenize(pattern),
                    Err(DateError::InvalidArgument { param: "pattern", .. })
                ),
                "{pattern:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_render_fields() {
        let value = at(2024, 3, 5, 7, 8, 9, 40);
        assert_eq!(show(&value, "dd/MM/yyyy HH:mm:ss"), "05/03/2024 07:08:09");
        assert_eq!(show(&value, "yyMM"), "2403");
        assert_eq!(show(&value, "ss.SSS"), "09.040");
        assert_eq!(show(&value, "ss,S"), "09,04");
        assert_eq!(show(&value, "SSSSSS"), "040000");
        assert_eq!(show(&at(812, 1, 1, 0, 0, 0, 0), "yyyy"), "0812");
    }

    #[test]
    fn test_render_fraction_trims_to_width() {
        assert_eq!(show(&at(2024, 1, 1, 0, 0, 0, 0), "S"), "0");
        assert_eq!(show(&at(2024, 1, 1, 0, 0, 0, 500), "S"), "5");
        assert_eq!(show(&at(2024, 1, 1, 0, 0, 0, 500), "SS"), "50");
        assert_eq!(show(&at(2024, 1, 1, 0, 0, 0, 123), "S"), "123");
    }

    #[test]
    fn test_read_defaults_missing_fields() {
        assert_eq!(parse("2024", "yyyy").unwrap(), at(2024, 1, 1, 0, 0, 0, 0));
        assert_eq!(parse("1430", "HHmm").unwrap(), at(1970, 1, 1, 14, 30, 0, 0));
    }

    #[test]
    fn test_read_fraction_is_decimal() {
        assert_eq!(parse("5", "S").unwrap().nanosecond(), 500 * NANOS_PER_MILLI);
        assert_eq!(parse("123456789", "S").unwrap().nanosecond(), 123 * NANOS_PER_MILLI);
        assert!(parse("12", "SSS").is_err());
        assert!(parse("1234", "SSS").is_err());
    }

    #[test]
    fn test_read_strict_widths() {
        assert!(parse("2024-3-05", "yyyy-MM-dd").is_err());
        assert!(parse("24-03-05", "yyyy-MM-dd").is_err());
        assert!(parse("2024-03-051", "yyyy-MM-dd").is_err());
        assert!(parse("2024/03/05", "yyyy-MM-dd").is_err());
        assert!(parse("2024-0a-05", "yyyy-MM-dd").is_err());
        assert_eq!(parse("5-3-2024", "d-M-yyyy").unwrap(), at(2024, 3, 5, 0, 0, 0, 0));
    }

    #[test]
    fn test_read_out_of_range_components() {
        let err = parse("2024-13-01", "yyyy-MM-dd").unwrap_err();
        assert!(err.to_string().contains("month 13 out of range"), "{err}");
        assert!(parse("2023-02-29", "yyyy-MM-dd").is_err());
        assert!(parse("2024-02-29", "yyyy-MM-dd").is_ok());
        assert!(parse("24:00", "HH:mm").is_err());
        assert!(parse("23:60", "HH:mm").is_err());
        assert!(parse("00", "MM").is_err());
    }

    #[test]
    fn test_read_offset_converts_to_local() {
        let expected = chrono::DateTime::parse_from_rfc3339("2024-03-05T10:15:30.120+01:00")
            .unwrap()
            .with_timezone(&Local)
            .naive_local();
        assert_eq!(
            parse("2024-03-05T10:15:30,12+0100", "yyyy-MM-dd'T'HH:mm:ss,SZ").unwrap(),
            expected
        );
        assert_eq!(
            parse("2024-03-05T10:15:30,12+01:00", "yyyy-MM-dd'T'HH:mm:ss,SZZ").unwrap(),
            expected
        );
        let utc = parse("2024-03-05T09:15:30,12Z", "yyyy-MM-dd'T'HH:mm:ss,SZ").unwrap();
        assert_eq!(utc, expected);
        assert!(parse("2024-03-05T10:15:30,12 0100", "yyyy-MM-dd'T'HH:mm:ss,SZ").is_err());
        assert!(parse("2024-03-05T10:15:30,12+0175", "yyyy-MM-dd'T'HH:mm:ss,SZ").is_err());
    }

    #[test]
    fn test_render_offset_matches_local_zone() {
        let value = at(2024, 7, 1, 12, 0, 0, 0);
        let rendered = show(&value, "ZZ");
        let expected = Local
            .from_local_datetime(&value)
            .earliest()
            .unwrap()
            .format("%:z")
            .to_string();
        assert_eq!(rendered, expected);
    }

    #[test]
    fn test_two_digit_year_window() {
        assert_eq!(resolve_two_digit_year(24, 2026), 2024);
        assert_eq!(resolve_two_digit_year(75, 2026), 2075);
        assert_eq!(resolve_two_digit_year(76, 2026), 1976);
        assert_eq!(resolve_two_digit_year(0, 2026), 2000);
        assert_eq!(resolve_two_digit_year(99, 2000), 1999);
    }

    #[test]
    fn test_trailing_text_rejected() {
        let err = parse("2024x", "yyyy").unwrap_err();
        assert!(matches!(err, DateError::Parse { .. }));
        assert!(err.to_string().contains("trailing"));
    }

    /// Central European rules for 2024: +01:00, and +02:00 from
    /// 2024-03-31 01:00 UTC until 2024-10-27 01:00 UTC.
    #[derive(Debug, Clone, Copy)]
    struct Paris2024;

    impl Paris2024 {
        fn winter() -> FixedOffset {
            FixedOffset::east_opt(3_600).unwrap()
        }

        fn summer() -> FixedOffset {
            FixedOffset::east_opt(7_200).unwrap()
        }
    }

    impl TimeZone for Paris2024 {
        type Offset = FixedOffset;

        fn from_offset(_: &FixedOffset) -> Self {
            Self
        }

        fn offset_from_local_date(&self, _: &NaiveDate) -> LocalResult<FixedOffset> {
            LocalResult::Single(Self::winter())
        }

        fn offset_from_local_datetime(&self, local: &NaiveDateTime) -> LocalResult<FixedOffset> {
            if (at(2024, 3, 31, 2, 0, 0, 0)..at(2024, 3, 31, 3, 0, 0, 0)).contains(local) {
                LocalResult::None
            } else if (at(2024, 10, 27, 2, 0, 0, 0)..at(2024, 10, 27, 3, 0, 0, 0)).contains(local) {
                LocalResult::Ambiguous(Self::summer(), Self::winter())
            } else if (at(2024, 3, 31, 3, 0, 0, 0)..at(2024, 10, 27, 2, 0, 0, 0)).contains(local) {
                LocalResult::Single(Self::summer())
            } else {
                LocalResult::Single(Self::winter())
            }
        }

        fn offset_from_utc_date(&self, _: &NaiveDate) -> FixedOffset {
            Self::winter()
        }

        fn offset_from_utc_datetime(&self, utc: &NaiveDateTime) -> FixedOffset {
            if (at(2024, 3, 31, 1, 0, 0, 0)..at(2024, 10, 27, 1, 0, 0, 0)).contains(utc) {
                Self::summer()
            } else {
                Self::winter()
            }
        }
    }

    #[test]
    fn test_wall_time_in_gap_moves_forward() {
        let resolved = resolve_in(&Paris2024, &at(2024, 3, 31, 2, 30, 0, 0));
        assert_eq!(resolved.naive_local(), at(2024, 3, 31, 3, 30, 0, 0));
        assert_eq!(resolved.offset().fix(), Paris2024::summer());
        assert_eq!(resolved.naive_utc(), at(2024, 3, 31, 1, 30, 0, 0));
    }

    #[test]
    fn test_existing_wall_times_are_kept() {
        let before = resolve_in(&Paris2024, &at(2024, 3, 31, 1, 59, 59, 999));
        assert_eq!(before.naive_local(), at(2024, 3, 31, 1, 59, 59, 999));
        let after = resolve_in(&Paris2024, &at(2024, 3, 31, 3, 0, 0, 0));
        assert_eq!(after.naive_local(), at(2024, 3, 31, 3, 0, 0, 0));
    }

    #[test]
    fn test_ambiguous_wall_time_takes_first_occurrence() {
        let resolved = resolve_in(&Paris2024, &at(2024, 10, 27, 2, 30, 0, 0));
        assert_eq!(resolved.naive_local(), at(2024, 10, 27, 2, 30, 0, 0));
        assert_eq!(resolved.offset().fix(), Paris2024::summer());
    }

    #[test]
    fn test_offset_text_keeps_seconds() {
        let lmt = FixedOffset::east_opt(9 * 60 + 21).unwrap();
        assert_eq!(offset_text(lmt, 1), "+000921");
        assert_eq!(offset_text(lmt, 2), "+00:09:21");
        let west = FixedOffset::west_opt(5 * 3_600 + 30 * 60).unwrap();
        assert_eq!(offset_text(west, 1), "-0530");
        assert_eq!(offset_text(west, 2), "-05:30");
    }

    #[test]
    fn test_read_offset_with_seconds() {
        let expected = Local
            .from_utc_datetime(&at(1900, 1, 1, 11, 50, 39, 0))
            .naive_local();
        assert_eq!(
            parse("1900-01-01T12:00:00+00:09:21", "yyyy-MM-dd'T'HH:mm:ssZZ").unwrap(),
            expected
        );
        assert_eq!(
            parse("1900-01-01T12:00:00+000921", "yyyy-MM-dd'T'HH:mm:ssZ").unwrap(),
            expected
        );
        assert!(parse("1900-01-01T12:00:00+00:09:75", "yyyy-MM-dd'T'HH:mm:ssZZ").is_err());
    }

    #[test]
    fn test_read_rejects_year_zero() {
        let err = parse("0000-01-01", "yyyy-MM-dd").unwrap_err();
        assert!(matches!(err, DateError::Parse { .. }));
        assert!(err.to_string().contains("outside 1-9999"), "{err}");
        assert!(parse("0001-01-01", "yyyy-MM-dd").is_ok());
    }

    #[test]
    fn test_render_unusual_widths() {
        let value = at(2024, 3, 5, 7, 8, 9, 0);
        assert_eq!(show(&value, "d/M/y H:m:s"), "5/3/2024 7:8:9");
        assert_eq!(show(&value, "ddd"), "005");
        assert_eq!(show(&at(812, 1, 1, 0, 0, 0, 0), "yyy"), "812");
        assert_eq!(show(&at(2024, 1, 1, 0, 0, 0, 0), "yyyyyy"), "002024");
    }
}
