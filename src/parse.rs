//! Free-text date resolution.
//!
//! Input is tried against an ordered list of [`DateFormat`] strategies and the
//! first one that yields a real calendar date wins. The unambiguous ISO form
//! always goes first in the default order so that `MM/DD` versus `DD/MM`
//! guessing never overrides it.

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::prelude::*;
use crate::types::Month;
use crate::{CalendarDate, DATE_SEPARATOR, ParseError, SLASH_SEPARATOR, TIME_DESIGNATOR};

/// One way of reading a date out of text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DateFormat {
    /// `YYYY-MM-DD` or `YYYYMMDD`, optionally followed by a clock time that is
    /// discarded (`1990-06-15T08:30`, `1990-06-15 08:30:00+02:00`).
    #[display(fmt = "iso")]
    Iso,
    /// `MM/DD/YYYY`
    #[display(fmt = "month-first")]
    MonthFirst,
    /// `DD/MM/YYYY`
    #[display(fmt = "day-first")]
    DayFirst,
    /// Permissive fallback: `June 15, 1990`, `15 Jun 1990`, `1990/06/15`,
    /// `1990.06.15`.
    #[display(fmt = "natural")]
    Natural,
}

/// Order used by [`parse_date`].
pub const DEFAULT_FORMATS: [DateFormat; 4] = [
    DateFormat::Iso,
    DateFormat::MonthFirst,
    DateFormat::DayFirst,
    DateFormat::Natural,
];

impl DateFormat {
    /// Reads `input` with this strategy alone.
    ///
    /// # Errors
    /// `ParseError::InvalidFormat` when the text does not have this shape, or
    /// the range error for a well-shaped but nonexistent date.
    pub fn parse(self, input: &str) -> Result<CalendarDate, ParseError> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(ParseError::EmptyInput);
        }
        match self {
            Self::Iso => parse_iso(trimmed),
            Self::MonthFirst => {
                let [month, day, year] = slash_parts(trimmed)?;
                CalendarDate::from_tokens(year, month, day)
            }
            Self::DayFirst => {
                let [day, month, year] = slash_parts(trimmed)?;
                CalendarDate::from_tokens(year, month, day)
            }
            Self::Natural => parse_natural(trimmed),
        }
    }
}

impl FromStr for DateFormat {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        DEFAULT_FORMATS
            .into_iter()
            .find(|format| format.to_string() == wanted)
            .ok_or_else(|| {
                ParseError::InvalidFormat(format!(
                    "unknown date format {s:?} (expected iso, month-first, day-first or natural)"
                ))
            })
    }
}

/// Resolves free text to a date using [`DEFAULT_FORMATS`].
///
/// # Errors
/// See [`parse_date_with`].
pub fn parse_date(input: &str) -> Result<CalendarDate, ParseError> {
    parse_date_with(input, &DEFAULT_FORMATS)
}

/// Resolves free text by trying `formats` in order; the first success wins.
///
/// # Errors
/// `ParseError::EmptyInput` for blank input. Otherwise, if some strategy
/// recognised the shape but the date does not exist (`2023-02-30`), that
/// first range error; failing that, `ParseError::Unrecognized`.
pub fn parse_date_with(input: &str, formats: &[DateFormat]) -> Result<CalendarDate, ParseError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(ParseError::EmptyInput);
    }

    let mut rejection = None;
    for &format in formats {
        match format.parse(trimmed) {
            Ok(date) => {
                debug!(input = trimmed, %format, %date, "resolved date");
                return Ok(date);
            }
            Err(err) => {
                trace!(input = trimmed, %format, error = %err, "format rejected input");
                if rejection.is_none() && err.is_out_of_range() {
                    rejection = Some(err);
                }
            }
        }
    }

    Err(rejection.unwrap_or_else(|| ParseError::Unrecognized(trimmed.to_owned())))
}

fn is_digits(s: &str, min_len: usize, max_len: usize) -> bool {
    (min_len..=max_len).contains(&s.len()) && s.bytes().all(|b| b.is_ascii_digit())
}

fn shape_error(input: &str) -> ParseError {
    ParseError::InvalidFormat(input.to_owned())
}

fn parse_iso(input: &str) -> Result<CalendarDate, ParseError> {
    let (date_part, time_part) = match input.split_once([TIME_DESIGNATOR, ' ']) {
        Some((date, time)) => (date, Some(time.trim_start())),
        None => (input, None),
    };
    if time_part.is_some_and(|time| !is_clock_time(time)) {
        return Err(shape_error(input));
    }

    let parts: Vec<&str> = date_part.split(DATE_SEPARATOR).collect();
    match parts.as_slice() {
        [year, month, day]
            if is_digits(year, 4, 4) && is_digits(month, 1, 2) && is_digits(day, 1, 2) =>
        {
            CalendarDate::from_tokens(year, month, day)
        }
        [basic] if is_digits(basic, 8, 8) => {
            CalendarDate::from_tokens(&basic[..4], &basic[4..6], &basic[6..])
        }
        _ => Err(shape_error(input)),
    }
}

/// Two-digit fields of `HH:MM[:SS]` or the basic `HHMM[SS]`.
fn two_digit_fields(text: &str) -> Option<Vec<u8>> {
    let fields: Vec<&str> = if text.contains(':') {
        text.split(':').collect()
    } else if text.is_ascii() && text.len() % 2 == 0 {
        (0..text.len()).step_by(2).map(|i| &text[i..i + 2]).collect()
    } else {
        return None;
    };
    fields
        .into_iter()
        .map(|field| {
            if is_digits(field, 2, 2) {
                field.parse().ok()
            } else {
                None
            }
        })
        .collect()
}

/// `HH:MM[:SS[.fff]]` (or `HHMM[SS]`) followed by nothing, `Z`, or a
/// `±HH[:MM]` offset.
fn is_clock_time(text: &str) -> bool {
    let (clock, offset) = match text.find(['+', '-']) {
        Some(idx) => (&text[..idx], Some(&text[idx + 1..])),
        None => (text.strip_suffix(['Z', 'z']).unwrap_or(text), None),
    };
    let (clock, fraction) = match clock.split_once('.') {
        Some((clock, fraction)) => (clock, Some(fraction)),
        None => (clock, None),
    };

    let clock_ok = match two_digit_fields(clock).as_deref() {
        Some(&[hour, minute]) => hour < 24 && minute < 60 && fraction.is_none(),
        Some(&[hour, minute, second]) => {
            hour < 24
                && minute < 60
                && second <= 60
                && fraction.is_none_or(|digits| is_digits(digits, 1, 9))
        }
        _ => false,
    };
    let offset_ok = offset.is_none_or(|offset| match two_digit_fields(offset).as_deref() {
        Some(&[hours]) => hours < 24,
        Some(&[hours, minutes]) => hours < 24 && minutes < 60,
        _ => false,
    });

    clock_ok && offset_ok
}

/// Splits `a/b/YYYY` into its three tokens.
fn slash_parts(input: &str) -> Result<[&str; 3], ParseError> {
    let parts: Vec<&str> = input.split(SLASH_SEPARATOR).map(str::trim).collect();
    match parts.as_slice() {
        &[first, second, year]
            if is_digits(first, 1, 2) && is_digits(second, 1, 2) && is_digits(year, 4, 4) =>
        {
            Ok([first, second, year])
        }
        _ => Err(shape_error(input)),
    }
}

const WEEKDAY_PREFIXES: [&str; 7] = ["mon", "tue", "wed", "thu", "fri", "sat", "sun"];

/// Strips an ordinal suffix: `15th` -> `15`.
fn strip_ordinal(token: &str) -> &str {
    ["st", "nd", "rd", "th"]
        .iter()
        .find_map(|suffix| {
            token
                .strip_suffix(*suffix)
                .filter(|rest| is_digits(rest, 1, 2))
        })
        .unwrap_or(token)
}

fn parse_natural(input: &str) -> Result<CalendarDate, ParseError> {
    let lowered = input.to_ascii_lowercase();
    let tokens: Vec<&str> = lowered
        .split(|c: char| c.is_whitespace() || matches!(c, ',' | '/' | '.' | '-'))
        .filter(|t| !t.is_empty())
        .map(strip_ordinal)
        .filter(|t| !WEEKDAY_PREFIXES.iter().any(|w| t.starts_with(*w)))
        .collect();

    let (names, numbers): (Vec<&str>, Vec<&str>) = tokens
        .into_iter()
        .partition(|t| t.bytes().all(|b| b.is_ascii_alphabetic()));

    match (names.as_slice(), numbers.as_slice()) {
        // June 15 1990, 15 June 1990, 1990 June 15
        (&[name], &[first, second]) => {
            let month = Month::from_name(name).ok_or_else(|| shape_error(input))?;
            let (day, year) = if is_digits(first, 3, 4) {
                (second, first)
            } else {
                (first, second)
            };
            if !is_digits(day, 1, 2) || !is_digits(year, 3, 4) {
                return Err(shape_error(input));
            }
            CalendarDate::from_tokens(year, &month.get().to_string(), day)
        }
        // 1990/06/15, 1990.06.15
        ([], &[year, month, day])
            if is_digits(year, 4, 4) && is_digits(month, 1, 2) && is_digits(day, 1, 2) =>
        {
            CalendarDate::from_tokens(year, month, day)
        }
        _ => Err(shape_error(input)),
    }
}
