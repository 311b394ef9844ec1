/// Minimum valid year (inclusive)
pub const MIN_YEAR: u16 = 1;
/// Maximum valid year (inclusive)
pub const MAX_YEAR: u16 = 9999;

/// Maximum valid month (December)
pub const MAX_MONTH: u8 = 12;
/// Months in a calendar year
pub const MONTHS_PER_YEAR: u32 = 12;

/// Month number for February
pub const FEBRUARY: u8 = 2;

/// Days in February for leap years
pub const FEBRUARY_DAYS_LEAP: u8 = 29;

/// Maximum days in each month (index 0 is unused, months are 1-indexed)
/// February shows 28 days (non-leap year default)
pub const DAYS_IN_MONTH: [u8; 13] = [
    0,  // index 0 unused (months are 1-indexed)
    31, // January
    28, // February (non-leap, adjusted by is_leap_year check)
    31, // March
    30, // April
    31, // May
    30, // June
    31, // July
    31, // August
    30, // September
    31, // October
    30, // November
    31, // December
];

/// English month names, index 0 is January
pub const MONTH_NAMES: [&str; 12] = [
    "january",
    "february",
    "march",
    "april",
    "may",
    "june",
    "july",
    "august",
    "september",
    "october",
    "november",
    "december",
];

/// Shortest accepted month-name abbreviation ("jan", "sept" also matches)
pub const MONTH_ABBREV_LEN: usize = 3;

/// Leap year occurs every 4 years
pub(crate) const LEAP_YEAR_CYCLE: u16 = 4;
/// Century years are not leap years unless...
pub(crate) const CENTURY_CYCLE: u16 = 100;
/// ...they are divisible by 400 (Gregorian calendar correction)
pub(crate) const GREGORIAN_CYCLE: u16 = 400;

/// Days in one 400-year Gregorian cycle
pub(crate) const DAYS_PER_ERA: i64 = 146_097;
/// Days per week
pub const DAYS_PER_WEEK: u64 = 7;
/// Hours per calendar day (local dates, no DST adjustment)
pub const HOURS_PER_DAY: u64 = 24;
/// Minutes per hour
pub const MINUTES_PER_HOUR: u64 = 60;
/// Seconds per minute
pub const SECONDS_PER_MINUTE: u64 = 60;

/// Date component separator (ISO 8601 format)
pub const DATE_SEPARATOR: char = '-';
/// Interval separator (ISO 8601 `start/end`)
pub const INTERVAL_SEPARATOR: char = '/';
/// Separator for the slash formats (`MM/DD/YYYY`, `DD/MM/YYYY`)
pub const SLASH_SEPARATOR: char = '/';
/// Separates the date from a time part in ISO date-times
pub const TIME_DESIGNATOR: char = 'T';
