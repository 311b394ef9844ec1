use serde::{Deserialize, Serialize};

use crate::{AgeError, CalendarDate, months_and_remainder};

/// Time left until the next yearly anniversary of a birth date.
///
/// When `is_today` is set the anniversary falls on the target date itself and
/// `months`, `days` and `total_days` are all zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AnniversaryCountdown {
    pub months:     u32,
    pub days:       u32,
    pub is_today:   bool,
    /// The anniversary being counted down to
    pub date:       CalendarDate,
    pub total_days: u32,
    /// Whole years of age reached on `date`
    pub turning:    u16,
}

/// Counts down from `target` to the first anniversary of `birth` on or after it.
///
/// The anniversary keeps the birth month and day; a Feb 29 birth date falls on
/// Feb 28 in non-leap years. A target that is itself the anniversary reports
/// `is_today` rather than a countdown to the following year.
///
/// # Errors
/// Returns `AgeError::OutOfRange` if the next anniversary would fall after
/// year `MAX_YEAR`.
pub fn next_anniversary_countdown(
    birth: CalendarDate,
    target: CalendarDate,
) -> Result<AnniversaryCountdown, AgeError> {
    let mut anniversary = birth.with_year(target.year())?;
    if anniversary < target {
        let next_year = target.year() + 1;
        anniversary = birth
            .with_year(next_year)
            .map_err(|_| AgeError::OutOfRange(format!("anniversary of {birth} in year {next_year}")))?;
    }

    let turning = anniversary.year().saturating_sub(birth.year());

    if anniversary == target {
        return Ok(AnniversaryCountdown {
            months: 0,
            days: 0,
            is_today: true,
            date: anniversary,
            total_days: 0,
            turning,
        });
    }

    let span = months_and_remainder(target, anniversary);
    Ok(AnniversaryCountdown {
        months: span.months,
        days: span.days,
        is_today: false,
        date: anniversary,
        total_days: u32::try_from(target.days_until(&anniversary)).unwrap_or_default(),
        turning,
    })
}
