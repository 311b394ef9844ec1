use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::{
    AgeBreakdown, AnniversaryCountdown, CalendarDate, INTERVAL_SEPARATOR, ParseError, Weekday,
    ZodiacClassification, classify_zodiac, compute_age, next_anniversary_countdown, prelude::*,
};

/// A birth date paired with the date it is measured against.
/// The birth date is never after the target date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
#[display(fmt = "{birth}/{target}")]
pub struct Lifespan {
    birth:  CalendarDate,
    target: CalendarDate,
}

/// Error type for age calculations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AgeError {
    /// Birth date is after the date it is measured against.
    #[error("Birth date ({birth}) cannot be after the comparison date ({target})")]
    BirthAfterTarget {
        birth:  CalendarDate,
        target: CalendarDate,
    },

    /// A derived date would fall outside the supported year range.
    #[error("Date out of supported range: {0}")]
    OutOfRange(String),

    /// Error parsing a date.
    #[error(transparent)]
    ParseError(#[from] ParseError),

    /// Invalid `birth/target` text.
    #[error("Invalid lifespan format: {0}")]
    InvalidFormat(String),
}

impl Lifespan {
    /// Pairs a birth date with a target date.
    ///
    /// # Errors
    /// Returns `AgeError::BirthAfterTarget` if `birth` is after `target`.
    pub fn new(birth: CalendarDate, target: CalendarDate) -> Result<Self, AgeError> {
        if birth > target {
            return Err(AgeError::BirthAfterTarget { birth, target });
        }
        Ok(Self { birth, target })
    }

    pub const fn birth(&self) -> CalendarDate {
        self.birth
    }

    pub const fn target(&self) -> CalendarDate {
        self.target
    }

    /// Returns both dates as a tuple
    pub const fn dates(&self) -> (CalendarDate, CalendarDate) {
        (self.birth, self.target)
    }

    /// Age at the target date
    pub fn age(&self) -> AgeBreakdown {
        // Ordering was checked in `new`
        compute_age(self.birth, self.target).unwrap_or_default()
    }

    /// Countdown from the target date to the next birthday.
    ///
    /// # Errors
    /// Returns `AgeError::OutOfRange` past year 9999.
    pub fn countdown(&self) -> Result<AnniversaryCountdown, AgeError> {
        next_anniversary_countdown(self.birth, self.target)
    }

    pub fn zodiac(&self) -> ZodiacClassification {
        classify_zodiac(self.birth)
    }

    /// Everything known about this lifespan in one value.
    ///
    /// # Errors
    /// Returns `AgeError::OutOfRange` if the next birthday is past year 9999.
    pub fn report(&self) -> Result<AgeReport, AgeError> {
        Ok(AgeReport {
            birth: self.birth,
            target: self.target,
            born_on: self.birth.weekday(),
            age: self.age(),
            countdown: self.countdown()?,
            zodiac: self.zodiac(),
        })
    }
}

/// Age, next-birthday countdown and zodiac sign for one birth/target pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AgeReport {
    pub birth:     CalendarDate,
    pub target:    CalendarDate,
    pub born_on:   Weekday,
    pub age:       AgeBreakdown,
    pub countdown: AnniversaryCountdown,
    pub zodiac:    ZodiacClassification,
}

impl AgeReport {
    /// Builds a report, checking that `birth` is not after `target`.
    ///
    /// # Errors
    /// Returns `AgeError::BirthAfterTarget` or `AgeError::OutOfRange`.
    pub fn new(birth: CalendarDate, target: CalendarDate) -> Result<Self, AgeError> {
        Lifespan::new(birth, target)
            .inspect_err(|err| tracing::warn!(error = %err, "rejected lifespan"))?
            .report()
    }
}

/// ISO 8601 interval of two dates: `1990-06-15/2024-01-01`.
impl FromStr for Lifespan {
    type Err = AgeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();

        let separator_count = trimmed.matches(INTERVAL_SEPARATOR).count();

        match separator_count {
            0 => Err(AgeError::InvalidFormat(format!(
                "No interval separator found (expected '{INTERVAL_SEPARATOR}'): {s}"
            ))),
            1 => {
                let (birth_str, target_str) =
                    trimmed.split_once(INTERVAL_SEPARATOR).ok_or_else(|| {
                        AgeError::InvalidFormat(format!(
                            "Separator '{INTERVAL_SEPARATOR}' not found despite count == 1"
                        ))
                    })?;

                let birth = birth_str.trim().parse::<CalendarDate>()?;
                let target = target_str.trim().parse::<CalendarDate>()?;

                Self::new(birth, target)
            },
            _ => Err(AgeError::InvalidFormat(format!(
                "Too many '{INTERVAL_SEPARATOR}' separators: expected 1, found {separator_count}"
            ))),
        }
    }
}

impl Serialize for Lifespan {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Lifespan {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
