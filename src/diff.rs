//! Whole-month differences between calendar dates.
//!
//! A "whole month" is measured by matching day-of-month: Mar 15 to Apr 15 is
//! one month, and a day that does not exist in the later month is clamped to
//! that month's end (Jan 31 + 1 month is Feb 28). Two month-end dates are
//! always a whole number of months apart, so Feb 28 to Mar 31 is exactly one
//! month rather than one month and three days.

use serde::{Deserialize, Serialize};

use crate::CalendarDate;

/// Whole months plus leftover days between two dates.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MonthSpan {
    pub months: u32,
    pub days:   u32,
}

impl MonthSpan {
    pub const ZERO: Self = Self { months: 0, days: 0 };

    pub const fn is_zero(&self) -> bool {
        self.months == 0 && self.days == 0
    }
}

/// Whole calendar months from `from` to `to`, plus the remaining days.
///
/// `months` is the largest N with `from + N months <= to` (clamping as in
/// [`CalendarDate::checked_add_months`]) and `days` is the exact day count
/// from that anchor to `to`. When both dates are the last day of their
/// (different) months, `days` is forced to 0.
///
/// Expects `from <= to`; a reversed pair yields [`MonthSpan::ZERO`].
pub fn months_and_remainder(from: CalendarDate, to: CalendarDate) -> MonthSpan {
    if to <= from {
        return MonthSpan::ZERO;
    }

    // Lands in `to`'s month; may overshoot `to` by a few days, never by a month.
    let mut months = to.month_ordinal() - from.month_ordinal();
    let mut anchor = advance(from, months);
    if anchor > to {
        months -= 1;
        anchor = advance(from, months);
    }

    let both_month_ends =
        from.is_last_day_of_month() && to.is_last_day_of_month() && !from.same_month_as(&to);
    let days = if both_month_ends {
        0
    } else {
        // `anchor <= to` and both lie within one month of each other
        u32::try_from(anchor.days_until(&to)).unwrap_or_default()
    };

    MonthSpan { months, days }
}

/// `from + months`, where the result is known to be no later than a valid
/// date and so cannot run past `MAX_YEAR`.
fn advance(from: CalendarDate, months: u32) -> CalendarDate {
    from.checked_add_months(months).unwrap_or(from)
}
