//! Disabled-date policy.
//!
//! Decides which day, month, and year cells reject interaction. A custom
//! predicate, when supplied, fully replaces the built-in rules for its
//! level rather than combining with them, so a host can force dates
//! enabled or disabled regardless of the min/max window.

use std::sync::Arc;

use almanac_core::date::CalendarDate;

/// Custom per-date disabled rule.
pub type DatePredicate = Arc<dyn Fn(CalendarDate) -> bool + Send + Sync>;

/// Custom per-year disabled rule.
pub type YearPredicate = Arc<dyn Fn(i32) -> bool + Send + Sync>;

/// Disabled rules for every drill level.
#[derive(Clone, Default)]
pub struct DisabledPolicy {
    /// Dates before this are disabled.
    pub min_date: Option<CalendarDate>,
    /// Dates after this are disabled.
    pub max_date: Option<CalendarDate>,
    /// Disable dates, months, and years lying entirely before today.
    pub disable_before_today: bool,
    /// Explicitly disabled dates.
    pub disabled_dates: Vec<CalendarDate>,
    /// Explicitly disabled `(year, month)` pairs.
    pub disabled_months: Vec<(i32, u8)>,
    /// Explicitly disabled years.
    pub disabled_years: Vec<i32>,
    /// Replaces the built-in date rules entirely when set.
    pub disable_date: Option<DatePredicate>,
    /// Replaces the built-in year rules entirely when set; also consulted
    /// for month cells, mirroring the year gate on month selection.
    pub disable_year: Option<YearPredicate>,
}

impl DisabledPolicy {
    /// True when a day cell must reject interaction.
    pub fn is_date_disabled(&self, date: CalendarDate, today: CalendarDate) -> bool {
        if let Some(predicate) = &self.disable_date {
            return predicate(date);
        }
        if let Some(min) = self.min_date
            && date < min
        {
            return true;
        }
        if let Some(max) = self.max_date
            && date > max
        {
            return true;
        }
        (self.disable_before_today && date < today) || self.disabled_dates.contains(&date)
    }

    /// True when a month cell in the year view must reject interaction.
    pub fn is_month_disabled(&self, year: i32, month: u8, today: CalendarDate) -> bool {
        if let Some(predicate) = &self.disable_year {
            return predicate(year);
        }
        let before_current_month = self.disable_before_today
            && (year < today.year() || (year == today.year() && month < today.month()));
        before_current_month || self.disabled_months.contains(&(year, month))
    }

    /// True when a year cell in the decade view must reject interaction.
    pub fn is_year_disabled(&self, year: i32, today: CalendarDate) -> bool {
        if let Some(predicate) = &self.disable_year {
            return predicate(year);
        }
        (self.disable_before_today && year < today.year()) || self.disabled_years.contains(&year)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u8, d: u8) -> CalendarDate {
        CalendarDate::new(y, m, d).unwrap()
    }

    #[test]
    fn test_min_max_window() {
        let policy = DisabledPolicy {
            min_date: Some(date(2025, 3, 10)),
            max_date: Some(date(2025, 3, 20)),
            ..DisabledPolicy::default()
        };
        let today = date(2025, 3, 1);
        assert!(policy.is_date_disabled(date(2025, 3, 9), today));
        assert!(!policy.is_date_disabled(date(2025, 3, 10), today));
        assert!(!policy.is_date_disabled(date(2025, 3, 20), today));
        assert!(policy.is_date_disabled(date(2025, 3, 21), today));
    }

    #[test]
    fn test_before_today_and_explicit_list() {
        let policy = DisabledPolicy {
            disable_before_today: true,
            disabled_dates: vec![date(2025, 3, 14)],
            ..DisabledPolicy::default()
        };
        let today = date(2025, 3, 10);
        assert!(policy.is_date_disabled(date(2025, 3, 9), today));
        assert!(!policy.is_date_disabled(today, today));
        assert!(policy.is_date_disabled(date(2025, 3, 14), today));
    }

    #[test]
    fn test_predicate_replaces_builtin_rules() {
        let policy = DisabledPolicy {
            min_date: Some(date(2025, 3, 10)),
            max_date: Some(date(2025, 3, 20)),
            disable_before_today: true,
            disable_date: Some(Arc::new(|d: CalendarDate| d.day() == 15)),
            ..DisabledPolicy::default()
        };
        let today = date(2025, 3, 12);
        // Inside the window but disabled by the predicate.
        assert!(policy.is_date_disabled(date(2025, 3, 15), today));
        // Outside the window and before today, yet enabled by the predicate.
        assert!(!policy.is_date_disabled(date(2025, 3, 1), today));
        assert!(!policy.is_date_disabled(date(2025, 4, 1), today));
    }

    #[test]
    fn test_month_rules() {
        let policy = DisabledPolicy {
            disable_before_today: true,
            disabled_months: vec![(2025, 8)],
            ..DisabledPolicy::default()
        };
        let today = date(2025, 6, 15);
        assert!(policy.is_month_disabled(2025, 5, today));
        assert!(!policy.is_month_disabled(2025, 6, today));
        assert!(policy.is_month_disabled(2025, 8, today));
        assert!(policy.is_month_disabled(2024, 12, today));
    }

    #[test]
    fn test_year_rules_and_predicate() {
        let policy = DisabledPolicy {
            disable_before_today: true,
            disabled_years: vec![2030],
            ..DisabledPolicy::default()
        };
        let today = date(2025, 6, 15);
        assert!(policy.is_year_disabled(2024, today));
        assert!(!policy.is_year_disabled(2025, today));
        assert!(policy.is_year_disabled(2030, today));

        let overridden = DisabledPolicy {
            disabled_years: vec![2030],
            disable_year: Some(Arc::new(|y| y == 2026)),
            ..DisabledPolicy::default()
        };
        assert!(!overridden.is_year_disabled(2030, today));
        assert!(overridden.is_year_disabled(2026, today));
        assert!(overridden.is_month_disabled(2026, 3, today));
    }
}
