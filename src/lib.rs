mod age;
mod anniversary;
mod consts;
mod diff;
mod parse;
mod prelude;
mod span;
mod types;
mod zodiac;

pub use age::{AgeBreakdown, compute_age};
pub use anniversary::{AnniversaryCountdown, next_anniversary_countdown};
pub use consts::*;
pub use diff::{MonthSpan, months_and_remainder};
pub use parse::{DEFAULT_FORMATS, DateFormat, parse_date, parse_date_with};
pub use span::{AgeError, AgeReport, Lifespan};
pub use types::{Day, Month, Weekday, Year, days_in_month, is_leap_year};
pub use zodiac::{Element, ZodiacClassification, ZodiacSign, classify_zodiac};

use crate::consts::{DAYS_PER_ERA, GREGORIAN_CYCLE};
use crate::prelude::*;
use std::str::FromStr;

/// Days from 0000-03-01 (proleptic Gregorian) to 1970-01-01
const DAYS_FROM_0000_03_01_TO_1970_01_01: i64 = 719_468;

/// A local calendar date with no time-of-day component.
///
/// Every value is a real date: the day is valid for its month, leap years
/// included. Field order makes the derived ordering chronological.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
#[display(fmt = "{year}-{month}-{day}")]
pub struct CalendarDate {
    year: Year,
    month: Month,
    day: Day,
}

#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum ParseError {
    #[display(fmt = "Invalid date format: {_0}")]
    InvalidFormat(String),
    #[display(fmt = "Invalid year: {} (must be {}-{})", "_0", MIN_YEAR, MAX_YEAR)]
    InvalidYear(u16),
    #[display(fmt = "Invalid month: {} (must be 1-{})", "_0", MAX_MONTH)]
    InvalidMonth(u8),
    #[display(fmt = "Invalid day {day} for month {year}-{month:02}")]
    InvalidDay { month: u8, day: u8, year: u16 },
    #[display(fmt = "Empty date string")]
    EmptyInput,
    #[display(fmt = "Unrecognized date: {_0:?} (try YYYY-MM-DD)")]
    Unrecognized(String),
}

impl std::error::Error for ParseError {}

impl ParseError {
    /// True when the input had a recognisable date shape but named a
    /// date that does not exist (as opposed to being malformed).
    pub const fn is_out_of_range(&self) -> bool {
        matches!(
            self,
            Self::InvalidYear(_) | Self::InvalidMonth(_) | Self::InvalidDay { .. }
        )
    }
}

impl CalendarDate {
    /// Creates a validated date from raw components.
    ///
    /// # Errors
    /// Returns the `ParseError` for the first component that is out of range.
    pub fn new(year: u16, month: u8, day: u8) -> Result<Self, ParseError> {
        let year = Year::new(year)?;
        let month = Month::new(month)?;
        let day = Day::new(day, year, month)?;
        Ok(Self { year, month, day })
    }

    /// Creates a date, clamping `day` to the last valid day of the month.
    ///
    /// `clamped(2023, 2, 31)` is 2023-02-28. Year and month are still validated.
    ///
    /// # Errors
    /// Returns `ParseError::InvalidYear` or `ParseError::InvalidMonth`.
    pub fn clamped(year: u16, month: u8, day: u8) -> Result<Self, ParseError> {
        let year = Year::new(year)?;
        let month = Month::new(month)?;
        Ok(Self::clamp_parts(year, month, day))
    }

    fn clamp_parts(year: Year, month: Month, day: u8) -> Self {
        Self {
            year,
            month,
            day: Day::clamped(day, year, month),
        }
    }

    /// Returns the year component
    pub const fn year(&self) -> u16 {
        self.year.get()
    }

    /// Returns the month component (1-12)
    pub const fn month(&self) -> u8 {
        self.month.get()
    }

    /// Returns the day-of-month component
    pub const fn day(&self) -> u8 {
        self.day.get()
    }

    /// Whether this is the final day of its month (Feb 29 in leap years).
    pub fn is_last_day_of_month(&self) -> bool {
        self.day == Day::last_of(self.year, self.month)
    }

    /// Whether both dates fall in the same month of the same year.
    pub fn same_month_as(&self, other: &Self) -> bool {
        self.year == other.year && self.month == other.month
    }

    /// Running month count: `year * 12 + (month - 1)`.
    pub(crate) fn month_ordinal(&self) -> u32 {
        u32::from(self.year.get()) * MONTHS_PER_YEAR + u32::from(self.month.get() - 1)
    }

    /// Advances by `months` calendar months, keeping the day-of-month and
    /// clamping it to the end of shorter months (Jan 31 + 1 month is Feb 28,
    /// or Feb 29 in a leap year).
    ///
    /// Returns `None` if the result would pass `MAX_YEAR`.
    pub fn checked_add_months(&self, months: u32) -> Option<Self> {
        let ordinal = self.month_ordinal().checked_add(months)?;
        let year = u16::try_from(ordinal / MONTHS_PER_YEAR).ok()?;
        let month = u8::try_from(ordinal % MONTHS_PER_YEAR + 1).ok()?;
        let year = Year::new(year).ok()?;
        let month = Month::new(month).ok()?;
        Some(Self::clamp_parts(year, month, self.day.get()))
    }

    /// Same month and day in another year, clamping Feb 29 to Feb 28 when
    /// `year` is not a leap year.
    ///
    /// # Errors
    /// Returns `ParseError::InvalidYear` if `year` is out of range.
    pub fn with_year(&self, year: u16) -> Result<Self, ParseError> {
        let year = Year::new(year)?;
        Ok(Self::clamp_parts(year, self.month, self.day.get()))
    }

    /// Days since 1970-01-01 (negative before it).
    ///
    /// Constant-time civil-to-days conversion over 400-year eras
    /// (<http://howardhinnant.github.io/date_algorithms.html>).
    pub fn day_number(&self) -> i64 {
        let month = i64::from(self.month.get());
        let day = i64::from(self.day.get());
        let year = i64::from(self.year.get()) - i64::from(month <= 2);

        let era = year.div_euclid(i64::from(GREGORIAN_CYCLE));
        let year_of_era = year - era * i64::from(GREGORIAN_CYCLE);
        let shifted_month = if month > 2 { month - 3 } else { month + 9 };
        let day_of_year = (153 * shifted_month + 2) / 5 + day - 1;
        let day_of_era = year_of_era * 365 + year_of_era / 4 - year_of_era / 100 + day_of_year;

        era * DAYS_PER_ERA + day_of_era - DAYS_FROM_0000_03_01_TO_1970_01_01
    }

    /// Signed number of days from `self` to `other`.
    pub fn days_until(&self, other: &Self) -> i64 {
        other.day_number() - self.day_number()
    }

    /// Day of the week this date falls on
    pub fn weekday(&self) -> Weekday {
        Weekday::from_day_number(self.day_number())
    }
}

// --- helpers for token parsing ---
impl CalendarDate {
    /// Helper to parse u16 with better error messages
    fn parse_u16(s: &str) -> Result<u16, ParseError> {
        if !s.bytes().all(|b| b.is_ascii_digit()) {
            return Err(ParseError::InvalidFormat(s.to_owned()));
        }
        s.parse::<u16>()
            .map_err(|_| ParseError::InvalidFormat(s.to_owned()))
    }

    /// Helper to parse u8 with better error messages
    fn parse_u8(s: &str) -> Result<u8, ParseError> {
        if !s.bytes().all(|b| b.is_ascii_digit()) {
            return Err(ParseError::InvalidFormat(s.to_owned()));
        }
        s.parse::<u8>()
            .map_err(|_| ParseError::InvalidFormat(s.to_owned()))
    }

    /// Builds a date from numeric text tokens, already split out by a
    /// format strategy.
    pub(crate) fn from_tokens(year: &str, month: &str, day: &str) -> Result<Self, ParseError> {
        let year = Self::parse_u16(year)?;
        let month = Self::parse_u8(month)?;
        let day = Self::parse_u8(day)?;
        Self::new(year, month, day)
    }
}

/// Strict ISO 8601 `YYYY-MM-DD`. For free-text input use [`parse_date`].
impl FromStr for CalendarDate {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(ParseError::EmptyInput);
        }

        let parts: Vec<&str> = trimmed.split(DATE_SEPARATOR).collect();
        match parts.as_slice() {
            [year, month, day] => Self::from_tokens(year, month, day),
            _ => Err(ParseError::InvalidFormat(format!(
                "expected YYYY{DATE_SEPARATOR}MM{DATE_SEPARATOR}DD, got {trimmed}"
            ))),
        }
    }
}

impl TryFrom<(u16, u8, u8)> for CalendarDate {
    type Error = ParseError;

    fn try_from(value: (u16, u8, u8)) -> Result<Self, Self::Error> {
        Self::new(value.0, value.1, value.2)
    }
}

impl From<CalendarDate> for (u16, u8, u8) {
    fn from(date: CalendarDate) -> Self {
        (date.year(), date.month(), date.day())
    }
}

impl serde::Serialize for CalendarDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> serde::Deserialize<'de> for CalendarDate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: u16, m: u8, d: u8) -> CalendarDate {
        CalendarDate::new(y, m, d).unwrap()
    }

    #[test]
    fn test_new_validates_components() {
        assert!(CalendarDate::new(2024, 2, 29).is_ok());
        assert!(matches!(
            CalendarDate::new(2023, 2, 29),
            Err(ParseError::InvalidDay {
                year: 2023,
                month: 2,
                day: 29
            })
        ));
        assert!(matches!(
            CalendarDate::new(2023, 13, 1),
            Err(ParseError::InvalidMonth(13))
        ));
        assert!(matches!(
            CalendarDate::new(0, 1, 1),
            Err(ParseError::InvalidYear(0))
        ));
    }

    #[test]
    fn test_clamped_constructor() {
        assert_eq!(CalendarDate::clamped(2023, 2, 31).unwrap(), date(2023, 2, 28));
        assert_eq!(CalendarDate::clamped(2024, 2, 31).unwrap(), date(2024, 2, 29));
        assert_eq!(CalendarDate::clamped(2024, 4, 31).unwrap(), date(2024, 4, 30));
        assert!(CalendarDate::clamped(2024, 0, 1).is_err());
    }

    #[test]
    fn test_display() {
        assert_eq!(date(1991, 8, 15).to_string(), "1991-08-15");
        assert_eq!(date(5, 1, 2).to_string(), "0005-01-02");
    }

    #[test]
    fn test_from_str_iso() {
        let parsed = "1991-08-15".parse::<CalendarDate>().unwrap();
        assert_eq!(parsed, date(1991, 8, 15));
        assert_eq!(" 2000-02-29 ".parse::<CalendarDate>().unwrap(), date(2000, 2, 29));
    }

    #[test]
    fn test_from_str_rejects_other_shapes() {
        assert!(matches!(
            "".parse::<CalendarDate>(),
            Err(ParseError::EmptyInput)
        ));
        assert!(matches!(
            "1991-08".parse::<CalendarDate>(),
            Err(ParseError::InvalidFormat(_))
        ));
        assert!(matches!(
            "08/15/1991".parse::<CalendarDate>(),
            Err(ParseError::InvalidFormat(_))
        ));
        assert!(matches!(
            "1991-08-XX".parse::<CalendarDate>(),
            Err(ParseError::InvalidFormat(_))
        ));
        assert!(matches!(
            "1991-+8-15".parse::<CalendarDate>(),
            Err(ParseError::InvalidFormat(_))
        ));
        assert!(matches!(
            "2021-02-29".parse::<CalendarDate>(),
            Err(ParseError::InvalidDay { .. })
        ));
    }

    #[test]
    fn test_ordering_is_chronological() {
        assert!(date(1990, 12, 31) < date(1991, 1, 1));
        assert!(date(1991, 1, 31) < date(1991, 2, 1));
        assert!(date(1991, 2, 1) < date(1991, 2, 2));
        assert_eq!(date(1991, 2, 1), date(1991, 2, 1));
    }

    #[test]
    fn test_last_day_of_month() {
        assert!(date(2023, 1, 31).is_last_day_of_month());
        assert!(date(2023, 2, 28).is_last_day_of_month());
        assert!(!date(2024, 2, 28).is_last_day_of_month());
        assert!(date(2024, 2, 29).is_last_day_of_month());
        assert!(date(2024, 4, 30).is_last_day_of_month());
        assert!(!date(2024, 4, 29).is_last_day_of_month());
    }

    #[test]
    fn test_add_months_clamps_to_month_end() {
        let jan31 = date(2023, 1, 31);
        assert_eq!(jan31.checked_add_months(1), Some(date(2023, 2, 28)));
        let jan31_leap = date(2024, 1, 31);
        assert_eq!(jan31_leap.checked_add_months(1), Some(date(2024, 2, 29)));
        assert_eq!(jan31.checked_add_months(2), Some(date(2023, 3, 31)));
        assert_eq!(jan31.checked_add_months(3), Some(date(2023, 4, 30)));
    }

    #[test]
    fn test_add_months_crosses_years() {
        let d = date(1995, 12, 31);
        assert_eq!(d.checked_add_months(0), Some(d));
        assert_eq!(d.checked_add_months(1), Some(date(1996, 1, 31)));
        assert_eq!(d.checked_add_months(2), Some(date(1996, 2, 29)));
        assert_eq!(d.checked_add_months(337), Some(date(2024, 1, 31)));
    }

    #[test]
    fn test_add_months_at_year_limit() {
        let d = date(9999, 12, 1);
        assert_eq!(d.checked_add_months(1), None);
        assert_eq!(d.checked_add_months(u32::MAX), None);
        assert_eq!(date(9999, 1, 31).checked_add_months(11), Some(date(9999, 12, 31)));
    }

    #[test]
    fn test_with_year_clamps_leap_day() {
        let leap_day = date(2000, 2, 29);
        assert_eq!(leap_day.with_year(2023).unwrap(), date(2023, 2, 28));
        assert_eq!(leap_day.with_year(2024).unwrap(), date(2024, 2, 29));
        assert_eq!(date(1990, 6, 15).with_year(2024).unwrap(), date(2024, 6, 15));
        assert!(leap_day.with_year(10000).is_err());
    }

    #[test]
    fn test_day_number_known_values() {
        assert_eq!(date(1970, 1, 1).day_number(), 0);
        assert_eq!(date(1970, 1, 2).day_number(), 1);
        assert_eq!(date(1969, 12, 31).day_number(), -1);
        assert_eq!(date(2000, 3, 1).day_number(), 11_017);
        assert_eq!(date(1, 1, 1).day_number(), -719_162);
    }

    #[test]
    fn test_day_number_is_contiguous_across_month_ends() {
        let mut previous = date(1899, 12, 31).day_number();
        for year in 1900..=2001 {
            for month in 1..=12 {
                for day in 1..=days_in_month(year, month) {
                    let current = date(year, month, day).day_number();
                    assert_eq!(current, previous + 1, "{year}-{month}-{day}");
                    previous = current;
                }
            }
        }
    }

    #[test]
    fn test_days_until() {
        assert_eq!(date(2023, 1, 1).days_until(&date(2024, 1, 1)), 365);
        assert_eq!(date(2024, 1, 1).days_until(&date(2025, 1, 1)), 366);
        assert_eq!(date(2024, 1, 1).days_until(&date(2023, 1, 1)), -365);
    }

    #[test]
    fn test_weekday() {
        assert_eq!(date(1970, 1, 1).weekday(), Weekday::Thursday);
        assert_eq!(date(2000, 1, 1).weekday(), Weekday::Saturday);
        assert_eq!(date(1990, 6, 15).weekday(), Weekday::Friday);
        assert_eq!(date(1969, 12, 28).weekday(), Weekday::Sunday);
    }

    #[test]
    fn test_tuple_conversions() {
        let d: CalendarDate = (1991, 8, 15).try_into().unwrap();
        assert_eq!(d, date(1991, 8, 15));
        let parts: (u16, u8, u8) = d.into();
        assert_eq!(parts, (1991, 8, 15));
        let bad: Result<CalendarDate, _> = (1991, 2, 30).try_into();
        assert!(bad.is_err());
    }

    #[test]
    fn test_serde_string_format() {
        let d = date(1991, 8, 15);
        let json = serde_json::to_string(&d).unwrap();
        assert_eq!(json, r#""1991-08-15""#);
        let parsed: CalendarDate = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, d);

        let rejected: Result<CalendarDate, _> = serde_json::from_str(r#""2024-02-30""#);
        assert!(rejected.is_err());
    }

    #[test]
    fn test_error_display() {
        let err = CalendarDate::new(2023, 2, 29).unwrap_err();
        assert_eq!(err.to_string(), "Invalid day 29 for month 2023-02");
        assert!(err.is_out_of_range());
        assert!(!ParseError::EmptyInput.is_out_of_range());
    }
}
