//! Civil calendar dates and the arithmetic the widget is built on.
//!
//! Dates are plain `(year, month, day)` triples with no time-of-day and no
//! timezone; conversions to and from a linear day count use the proleptic
//! Gregorian algorithms, so ordering and day spans are exact over the whole
//! supported range.

use std::time::{SystemTime, UNIX_EPOCH};

/// Unix-day count of -9999-01-01, the earliest supported day.
///
/// Day counts handed to the civil conversion are kept inside
/// [`MIN_UNIX_DAYS`]`..=`[`MAX_UNIX_DAYS`] so its intermediate arithmetic
/// cannot overflow and the resulting year always fits the date's fields.
const MIN_UNIX_DAYS: i64 = -4_371_587;

/// Unix-day count of 9999-12-31, the latest supported day.
const MAX_UNIX_DAYS: i64 = 2_932_896;

/// Days of the week in Sunday-first order.
///
/// The index-0-Sunday convention matches the configurable week start day,
/// where `0` is Sunday and `6` is Saturday.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Weekday {
    /// Sunday.
    Sunday,
    /// Monday.
    Monday,
    /// Tuesday.
    Tuesday,
    /// Wednesday.
    Wednesday,
    /// Thursday.
    Thursday,
    /// Friday.
    Friday,
    /// Saturday.
    Saturday,
}

impl Weekday {
    /// Returns the Sunday-based index (Sunday = 0, Saturday = 6).
    pub fn index_from_sunday(self) -> i32 {
        match self {
            Weekday::Sunday => 0,
            Weekday::Monday => 1,
            Weekday::Tuesday => 2,
            Weekday::Wednesday => 3,
            Weekday::Thursday => 4,
            Weekday::Friday => 5,
            Weekday::Saturday => 6,
        }
    }

    /// Returns the weekday for a Sunday-based index, wrapping modulo 7.
    pub fn from_sunday_index(index: i32) -> Self {
        match index.rem_euclid(7) {
            0 => Weekday::Sunday,
            1 => Weekday::Monday,
            2 => Weekday::Tuesday,
            3 => Weekday::Wednesday,
            4 => Weekday::Thursday,
            5 => Weekday::Friday,
            _ => Weekday::Saturday,
        }
    }

    /// Three-letter label ("Sun" through "Sat").
    pub fn short_label(self) -> &'static str {
        match self {
            Weekday::Sunday => "Sun",
            Weekday::Monday => "Mon",
            Weekday::Tuesday => "Tue",
            Weekday::Wednesday => "Wed",
            Weekday::Thursday => "Thu",
            Weekday::Friday => "Fri",
            Weekday::Saturday => "Sat",
        }
    }

    /// Full label ("Sunday" through "Saturday").
    pub fn full_label(self) -> &'static str {
        match self {
            Weekday::Sunday => "Sunday",
            Weekday::Monday => "Monday",
            Weekday::Tuesday => "Tuesday",
            Weekday::Wednesday => "Wednesday",
            Weekday::Thursday => "Thursday",
            Weekday::Friday => "Friday",
            Weekday::Saturday => "Saturday",
        }
    }

    /// Single-letter label ("S", "M", ...).
    pub fn narrow_label(self) -> &'static str {
        match self {
            Weekday::Sunday | Weekday::Saturday => "S",
            Weekday::Monday => "M",
            Weekday::Tuesday | Weekday::Thursday => "T",
            Weekday::Wednesday => "W",
            Weekday::Friday => "F",
        }
    }
}

/// A calendar date expressed as year, month, and day.
///
/// Always a valid civil day; the constructors reject out-of-range
/// components, so a held value never needs re-validation. Ordering is
/// chronological.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CalendarDate {
    year: i32,
    month: u8,
    day: u8,
}

impl CalendarDate {
    /// Creates a calendar date if the values are valid.
    pub fn new(year: i32, month: u8, day: u8) -> Option<Self> {
        if !(1..=12).contains(&month) {
            return None;
        }
        let max_day = days_in_month(year, month);
        if day == 0 || day > max_day {
            return None;
        }
        Some(Self { year, month, day })
    }

    fn new_unchecked(year: i32, month: u8, day: u8) -> Self {
        Self { year, month, day }
    }

    /// Returns the year.
    pub fn year(&self) -> i32 {
        self.year
    }

    /// Returns the month (1-12).
    pub fn month(&self) -> u8 {
        self.month
    }

    /// Returns the day of the month (1-31).
    pub fn day(&self) -> u8 {
        self.day
    }

    /// Returns `date` when present, otherwise the clock's current day.
    ///
    /// This is the sanitization step for boundary input: a caller that
    /// failed to produce a valid date gets today instead. Idempotent, and
    /// the result carries no time-of-day by construction.
    pub fn sanitize(date: Option<CalendarDate>, clock: &dyn Clock) -> Self {
        date.unwrap_or_else(|| clock.today())
    }

    /// Converts a millisecond Unix timestamp to the civil day it falls on.
    ///
    /// Returns `None` for non-finite input (how NaN timestamps from a host
    /// environment are rejected) and for timestamps outside the supported
    /// year span.
    pub fn from_timestamp_millis(millis: f64) -> Option<Self> {
        if !millis.is_finite() {
            return None;
        }
        let days = (millis / 86_400_000.0).floor();
        if days < MIN_UNIX_DAYS as f64 || days > MAX_UNIX_DAYS as f64 {
            return None;
        }
        Some(Self::from_unix_days(days as i64))
    }

    /// Returns the civil date for a count of days since 1970-01-01,
    /// clamped to the supported span of years -9999 through 9999.
    pub fn from_unix_days(days: i64) -> Self {
        let (year, month, day) = civil_from_days(days.clamp(MIN_UNIX_DAYS, MAX_UNIX_DAYS));
        Self::new_unchecked(year, month, day)
    }

    /// Returns the count of days since 1970-01-01.
    pub fn to_unix_days(&self) -> i64 {
        days_from_civil(self.year, self.month, self.day)
    }

    /// Returns the date shifted by a number of days, saturating at the
    /// supported span.
    pub fn add_days(&self, delta: i64) -> Self {
        Self::from_unix_days(self.to_unix_days().saturating_add(delta))
    }

    /// Returns the whole-day span between two dates (non-negative).
    pub fn days_between(&self, other: &CalendarDate) -> i64 {
        (self.to_unix_days() - other.to_unix_days()).abs()
    }

    /// Returns the weekday this date falls on.
    pub fn weekday(&self) -> Weekday {
        // 1970-01-01 was a Thursday, index 4 from Sunday.
        Weekday::from_sunday_index(((self.to_unix_days() + 4).rem_euclid(7)) as i32)
    }

    /// Returns the year/month pair this date belongs to.
    pub fn year_month(&self) -> YearMonth {
        YearMonth {
            year: self.year,
            month: self.month,
        }
    }

    /// Returns the date shifted by whole months, clamping the day to the
    /// target month's length (March 31 minus one month is February 28/29).
    pub fn add_months_clamped(&self, delta: i32) -> Self {
        let ym = self.year_month().add_months(delta);
        let day = self.day.min(days_in_month(ym.year, ym.month));
        Self::new_unchecked(ym.year, ym.month, day)
    }

    /// Returns the date shifted by whole years, clamping February 29.
    pub fn add_years_clamped(&self, delta: i32) -> Self {
        let year = self.year.saturating_add(delta);
        let day = self.day.min(days_in_month(year, self.month));
        Self::new_unchecked(year, self.month, day)
    }
}

impl std::fmt::Display for CalendarDate {
    /// ISO `yyyy-mm-dd`, used for diagnostics regardless of the configured
    /// display format.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

/// A year and month pair used for month navigation and grid anchoring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct YearMonth {
    year: i32,
    month: u8,
}

impl YearMonth {
    /// Creates a year/month pair if the values are valid.
    pub fn new(year: i32, month: u8) -> Option<Self> {
        if !(1..=12).contains(&month) {
            return None;
        }
        Some(Self { year, month })
    }

    /// Returns the year.
    pub fn year(&self) -> i32 {
        self.year
    }

    /// Returns the month (1-12).
    pub fn month(&self) -> u8 {
        self.month
    }

    /// Returns the date for this month at the provided day.
    pub fn to_date(&self, day: u8) -> Option<CalendarDate> {
        CalendarDate::new(self.year, self.month, day)
    }

    /// Returns the first day of the month.
    pub fn first_day(&self) -> CalendarDate {
        CalendarDate::new_unchecked(self.year, self.month, 1)
    }

    /// Returns the last day of the month.
    pub fn last_day(&self) -> CalendarDate {
        CalendarDate::new_unchecked(self.year, self.month, self.day_count())
    }

    /// Returns the number of days in the month.
    pub fn day_count(&self) -> u8 {
        days_in_month(self.year, self.month)
    }

    /// Adds or subtracts months, adjusting the year as needed.
    pub fn add_months(&self, delta: i32) -> Self {
        let total = self.year * 12 + (self.month as i32 - 1) + delta;
        let year = total.div_euclid(12);
        let month = (total.rem_euclid(12) + 1) as u8;
        Self { year, month }
    }
}

/// Provider of the current day.
///
/// Injected wherever "today" matters (sanitization, the disabled-date
/// policy, today-highlighting) so tests can pin the day.
pub trait Clock: Send + Sync {
    /// Returns the current calendar day.
    fn today(&self) -> CalendarDate;
}

/// System clock reading the current day from `SystemTime` in UTC.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> CalendarDate {
        let duration = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default();
        CalendarDate::from_unix_days((duration.as_secs() / 86_400) as i64)
    }
}

/// Clock pinned to a fixed day, for tests.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub CalendarDate);

impl Clock for FixedClock {
    fn today(&self) -> CalendarDate {
        self.0
    }
}

/// The literal date patterns the widget can format with.
///
/// Anything else fails to parse; the configuration layer falls back to
/// [`DateFormat::MmDdYyyySlash`] with a warning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DateFormat {
    /// `mm/dd/yyyy`
    #[default]
    MmDdYyyySlash,
    /// `dd/mm/yyyy`
    DdMmYyyySlash,
    /// `yyyy-mm-dd`
    YyyyMmDd,
    /// `mm-dd-yyyy`
    MmDdYyyyDash,
    /// `dd-mm-yyyy`
    DdMmYyyyDash,
}

impl DateFormat {
    /// Parses one of the five literal patterns.
    pub fn parse(pattern: &str) -> Option<Self> {
        match pattern {
            "mm/dd/yyyy" => Some(DateFormat::MmDdYyyySlash),
            "dd/mm/yyyy" => Some(DateFormat::DdMmYyyySlash),
            "yyyy-mm-dd" => Some(DateFormat::YyyyMmDd),
            "mm-dd-yyyy" => Some(DateFormat::MmDdYyyyDash),
            "dd-mm-yyyy" => Some(DateFormat::DdMmYyyyDash),
            _ => None,
        }
    }

    /// Returns the pattern literal.
    pub fn pattern(self) -> &'static str {
        match self {
            DateFormat::MmDdYyyySlash => "mm/dd/yyyy",
            DateFormat::DdMmYyyySlash => "dd/mm/yyyy",
            DateFormat::YyyyMmDd => "yyyy-mm-dd",
            DateFormat::MmDdYyyyDash => "mm-dd-yyyy",
            DateFormat::DdMmYyyyDash => "dd-mm-yyyy",
        }
    }

    /// Formats a date. Day and month are zero-padded, the year is not.
    pub fn format(self, date: CalendarDate) -> String {
        let (y, m, d) = (date.year(), date.month(), date.day());
        match self {
            DateFormat::MmDdYyyySlash => format!("{m:02}/{d:02}/{y}"),
            DateFormat::DdMmYyyySlash => format!("{d:02}/{m:02}/{y}"),
            DateFormat::YyyyMmDd => format!("{y}-{m:02}-{d:02}"),
            DateFormat::MmDdYyyyDash => format!("{m:02}-{d:02}-{y}"),
            DateFormat::DdMmYyyyDash => format!("{d:02}-{m:02}-{y}"),
        }
    }
}

/// ISO-8601 week number of the date.
///
/// The date is shifted to the Thursday of its ISO week, then weeks are
/// counted from January 1 of the Thursday's year with ceiling division.
/// December 29-31 can therefore land in week 1 of the following year.
pub fn iso_week_number(date: CalendarDate) -> u32 {
    // Monday = 1 .. Sunday = 7.
    let iso_day = match date.weekday().index_from_sunday() {
        0 => 7,
        n => n,
    };
    let thursday = date.add_days(4 - iso_day as i64);
    let year_start = CalendarDate::new_unchecked(thursday.year(), 1, 1);
    let diff = thursday.to_unix_days() - year_start.to_unix_days();
    ((diff + 7) / 7) as u32
}

/// Long-form label such as "Wednesday, March 5, 2025".
pub fn format_long_date(date: CalendarDate) -> String {
    format!(
        "{}, {} {}, {}",
        date.weekday().full_label(),
        month_name(date.month()),
        date.day(),
        date.year()
    )
}

/// Full month name ("January" .. "December").
pub fn month_name(month: u8) -> &'static str {
    match month {
        1 => "January",
        2 => "February",
        3 => "March",
        4 => "April",
        5 => "May",
        6 => "June",
        7 => "July",
        8 => "August",
        9 => "September",
        10 => "October",
        11 => "November",
        _ => "December",
    }
}

/// Abbreviated month name ("Jan" .. "Dec").
pub fn month_short_name(month: u8) -> &'static str {
    match month {
        1 => "Jan",
        2 => "Feb",
        3 => "Mar",
        4 => "Apr",
        5 => "May",
        6 => "Jun",
        7 => "Jul",
        8 => "Aug",
        9 => "Sep",
        10 => "Oct",
        11 => "Nov",
        _ => "Dec",
    }
}

/// Returns the number of days in the given month.
pub fn days_in_month(year: i32, month: u8) -> u8 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 if is_leap_year(year) => 29,
        2 => 28,
        _ => 30,
    }
}

/// Gregorian leap-year rule.
pub fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || (year % 400 == 0)
}

fn days_from_civil(year: i32, month: u8, day: u8) -> i64 {
    let mut y = year;
    let m = month as i32;
    let d = day as i32;
    y -= if m <= 2 { 1 } else { 0 };
    let era = if y >= 0 { y } else { y - 399 } / 400;
    let yoe = y - era * 400;
    let mp = m + if m > 2 { -3 } else { 9 };
    let doy = (153 * mp + 2) / 5 + d - 1;
    let doe = yoe * 365 + yoe / 4 - yoe / 100 + doy;
    (era * 146_097 + doe - 719_468) as i64
}

fn civil_from_days(days: i64) -> (i32, u8, u8) {
    let z = days + 719_468;
    let era = if z >= 0 { z } else { z - 146_096 } / 146_097;
    let doe = z - era * 146_097;
    let yoe = (doe - doe / 1_460 + doe / 36_524 - doe / 146_096) / 365;
    let y = yoe + era * 400;
    let doy = doe - (365 * yoe + yoe / 4 - yoe / 100);
    let mp = (5 * doy + 2) / 153;
    let day = doy - (153 * mp + 2) / 5 + 1;
    let month = mp + if mp < 10 { 3 } else { -9 };
    let year = y + if month <= 2 { 1 } else { 0 };
    (year as i32, month as u8, day as u8)
}
