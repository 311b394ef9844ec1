use serde::{Deserialize, Serialize};

use crate::{
    AgeError, CalendarDate, DAYS_PER_WEEK, HOURS_PER_DAY, MINUTES_PER_HOUR, MONTHS_PER_YEAR,
    SECONDS_PER_MINUTE, months_and_remainder,
};

/// Exact calendar age between a birth date and a target date.
///
/// `years`, `months` and `days` are the calendar decomposition, with
/// `years * 12 + months == total_months`. The `total_*` fields other than
/// `total_months` count real elapsed time between the two dates and are
/// independent of that decomposition.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AgeBreakdown {
    pub years:         u32,
    pub months:        u32,
    pub days:          u32,
    pub total_months:  u32,
    pub total_weeks:   u64,
    pub total_days:    u64,
    pub total_hours:   u64,
    pub total_minutes: u64,
    pub total_seconds: u64,
}

/// Computes the age at `target` of someone born on `birth`.
///
/// Equal dates give an all-zero result.
///
/// # Errors
/// Returns `AgeError::BirthAfterTarget` if `birth` is after `target`.
pub fn compute_age(birth: CalendarDate, target: CalendarDate) -> Result<AgeBreakdown, AgeError> {
    if birth > target {
        tracing::warn!(%birth, %target, "age requested for a birth date after the target date");
        return Err(AgeError::BirthAfterTarget { birth, target });
    }

    let span = months_and_remainder(birth, target);
    let total_days = u64::try_from(birth.days_until(&target)).unwrap_or_default();
    let total_hours = total_days * HOURS_PER_DAY;
    let total_minutes = total_hours * MINUTES_PER_HOUR;

    Ok(AgeBreakdown {
        years: span.months / MONTHS_PER_YEAR,
        months: span.months % MONTHS_PER_YEAR,
        days: span.days,
        total_months: span.months,
        total_weeks: total_days / DAYS_PER_WEEK,
        total_days,
        total_hours,
        total_minutes,
        total_seconds: total_minutes * SECONDS_PER_MINUTE,
    })
}
