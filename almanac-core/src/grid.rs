//! Grid generation for the month, year, and decade views.
//!
//! These are pure projections from an anchor period onto an ordered cell
//! sequence; nothing here reads a clock or holds state.

use crate::date::{CalendarDate, Weekday, YearMonth};

/// Which month a day cell belongs to, relative to the grid's anchor month.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MonthPeriod {
    /// Trailing day of the previous month.
    Previous,
    /// Day of the anchor month.
    Current,
    /// Leading day of the next month.
    Next,
}

/// One slot in a month grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayCell {
    /// A real calendar day.
    Day {
        /// The day this cell shows.
        date: CalendarDate,
        /// Whether the day belongs to the anchor month or a neighbor.
        period: MonthPeriod,
    },
    /// An empty filler slot used when neighboring months are hidden.
    Placeholder,
}

impl DayCell {
    /// Returns the cell's date, if it has one.
    pub fn date(&self) -> Option<CalendarDate> {
        match self {
            DayCell::Day { date, .. } => Some(*date),
            DayCell::Placeholder => None,
        }
    }

    /// True when the cell is a day of the anchor month.
    pub fn is_current_month(&self) -> bool {
        matches!(
            self,
            DayCell::Day {
                period: MonthPeriod::Current,
                ..
            }
        )
    }
}

/// Builds the cell sequence for a month view.
///
/// The leading offset is the anchor month's first weekday relative to
/// `week_start_day`. With `include_neighboring` the offset is filled with
/// the previous month's trailing days and the tail with the next month's
/// leading days; without it the grid starts at day 1 and the tail is
/// padded with placeholders. The total is always a multiple of 7, and
/// exactly 42 when `fixed_six_weeks` is set.
pub fn build_month_grid(
    month: YearMonth,
    week_start_day: Weekday,
    fixed_six_weeks: bool,
    include_neighboring: bool,
) -> Vec<DayCell> {
    let first_weekday = month.first_day().weekday();
    let leading = (first_weekday.index_from_sunday() - week_start_day.index_from_sunday())
        .rem_euclid(7) as u8;

    let mut cells = Vec::with_capacity(42);

    if include_neighboring && leading > 0 {
        let prev = month.add_months(-1);
        let prev_last = prev.day_count();
        for i in (1..=leading).rev() {
            let day = prev_last - i + 1;
            if let Some(date) = prev.to_date(day) {
                cells.push(DayCell::Day {
                    date,
                    period: MonthPeriod::Previous,
                });
            }
        }
    }

    for day in 1..=month.day_count() {
        if let Some(date) = month.to_date(day) {
            cells.push(DayCell::Day {
                date,
                period: MonthPeriod::Current,
            });
        }
    }

    let total = if fixed_six_weeks {
        42
    } else {
        cells.len().div_ceil(7) * 7
    };

    if include_neighboring {
        let next = month.add_months(1);
        let mut day = 1u8;
        while cells.len() < total {
            if let Some(date) = next.to_date(day) {
                cells.push(DayCell::Day {
                    date,
                    period: MonthPeriod::Next,
                });
            }
            day += 1;
        }
    } else {
        // Placeholders keep the row shape without leaking out-of-period
        // dates into the grid.
        cells.resize(total, DayCell::Placeholder);
    }

    cells
}

/// Returns the twelve months of a year, for the year view.
pub fn year_months(year: i32) -> Vec<YearMonth> {
    (1..=12)
        .filter_map(|month| YearMonth::new(year, month))
        .collect()
}

/// One slot in a decade grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct YearCell {
    /// The year this cell shows.
    pub year: i32,
    /// Whether the year belongs to the anchor decade (as opposed to a
    /// neighboring cell shown for grid completeness).
    pub in_decade: bool,
}

/// Returns the first year of the decade containing `year`.
pub fn decade_start(year: i32) -> i32 {
    year - year.rem_euclid(10)
}

/// Builds the year cells for a decade view.
///
/// With `include_neighboring`, one year before the decade and two after it
/// are appended and flagged as out-of-decade.
pub fn decade_years(anchor_year: i32, include_neighboring: bool) -> Vec<YearCell> {
    let start = decade_start(anchor_year);
    let (first, last) = if include_neighboring {
        (start - 1, start + 11)
    } else {
        (start, start + 9)
    };
    (first..=last)
        .map(|year| YearCell {
            year,
            in_decade: (start..start + 10).contains(&year),
        })
        .collect()
}
