//! Widget configuration.
//!
//! A [`CalendarConfig`] is an explicit struct of named, defaulted fields,
//! validated once at construction. The unsupported-calendar check is the
//! only fatal one; every other invalid value is corrected to its
//! documented default with a warning on the diagnostic channel.

use derive_setters::Setters;
use tracing::warn;

use almanac_core::date::{CalendarDate, DateFormat, Weekday};
use almanac_core::selection::SelectionMode;
use almanac_core::view::{DrillBounds, ViewGranularity};

use crate::error::ConfigError;
use crate::policy::{DatePredicate, YearPredicate};

/// Configuration for a [`crate::calendar::Calendar`].
///
/// Build with [`CalendarConfig::default`] and the generated setters:
///
/// ```
/// use almanac_core::selection::SelectionMode;
/// use almanac_widget::config::CalendarConfig;
///
/// let config = CalendarConfig::default()
///     .selection_mode(SelectionMode::Range)
///     .range_limit(7)
///     .show_week_numbers(true);
/// assert_eq!(config.range_limit, Some(7));
/// ```
#[derive(Clone, Setters)]
pub struct CalendarConfig {
    /// Granularity shown at mount.
    pub initial_view: ViewGranularity,
    /// Anchor date at mount; `None` means today.
    #[setters(strip_option)]
    pub initial_anchor: Option<CalendarDate>,
    /// Finest granularity the widget may display.
    pub max_detail: ViewGranularity,
    /// Coarsest granularity the widget may display.
    pub min_detail: ViewGranularity,
    /// Granularities that can never be displayed.
    pub disabled_views: Vec<ViewGranularity>,
    /// Single or range selection.
    pub selection_mode: SelectionMode,
    /// Maximum committed range span in whole days.
    #[setters(strip_option)]
    pub range_limit: Option<u32>,
    /// First day of the week, 0 (Sunday) through 6 (Saturday).
    /// Out-of-range values fall back to 0 with a warning.
    pub week_start_day: u8,
    /// One of the five literal date patterns; anything else falls back to
    /// `mm/dd/yyyy` with a warning.
    #[setters(into)]
    pub date_format: String,
    /// Locale tag passed through to the rendering layer untouched.
    #[setters(into)]
    pub locale: String,
    /// Calendar system. Only `gregorian` is supported; anything else is a
    /// fatal configuration error.
    #[setters(into)]
    pub calendar_type: String,
    /// Show an ISO week-number column in the month view.
    pub show_week_numbers: bool,
    /// Show leading/trailing days of neighboring months.
    pub show_neighboring_month: bool,
    /// Show neighboring years around the decade view.
    pub show_neighboring_decade: bool,
    /// Always render six week rows in the month view.
    pub show_fixed_number_of_weeks: bool,
    /// Render a second grid for the following month.
    pub show_double_view: bool,
    /// Clicking a day that carries events also forwards each event to the
    /// event-click callback.
    pub select_on_event_click: bool,
    /// Dates before this are disabled.
    #[setters(strip_option)]
    pub min_date: Option<CalendarDate>,
    /// Dates after this are disabled.
    #[setters(strip_option)]
    pub max_date: Option<CalendarDate>,
    /// Disable every date before today.
    pub disable_before_today: bool,
    /// Explicitly disabled dates.
    pub disabled_dates: Vec<CalendarDate>,
    /// Explicitly disabled `(year, month)` pairs for the year view.
    pub disabled_months: Vec<(i32, u8)>,
    /// Explicitly disabled years for the decade view.
    pub disabled_years: Vec<i32>,
    /// Custom disabled-date rule. When set it fully replaces the built-in
    /// min/max/before-today/list rules.
    #[setters(strip_option)]
    pub disable_date: Option<DatePredicate>,
    /// Custom disabled-year rule, replacing the built-in year rules.
    #[setters(strip_option)]
    pub disable_year: Option<YearPredicate>,
}

impl Default for CalendarConfig {
    fn default() -> Self {
        Self {
            initial_view: ViewGranularity::Month,
            initial_anchor: None,
            max_detail: ViewGranularity::Month,
            min_detail: ViewGranularity::Year,
            disabled_views: Vec::new(),
            selection_mode: SelectionMode::Single,
            range_limit: None,
            week_start_day: 0,
            date_format: "mm/dd/yyyy".to_string(),
            locale: "en-US".to_string(),
            calendar_type: "gregorian".to_string(),
            show_week_numbers: false,
            show_neighboring_month: true,
            show_neighboring_decade: true,
            show_fixed_number_of_weeks: false,
            show_double_view: false,
            select_on_event_click: true,
            min_date: None,
            max_date: None,
            disable_before_today: false,
            disabled_dates: Vec::new(),
            disabled_months: Vec::new(),
            disabled_years: Vec::new(),
            disable_date: None,
            disable_year: None,
        }
    }
}

/// Configuration after one-shot validation; fields here are never
/// re-validated on read.
#[derive(Clone)]
pub(crate) struct ResolvedConfig {
    pub config: CalendarConfig,
    pub week_start: Weekday,
    pub date_format: DateFormat,
    pub bounds: DrillBounds,
    pub initial_view: ViewGranularity,
}

// Manual impl: `CalendarConfig` holds `Arc<dyn Fn>` predicates, so `Debug`
// cannot be derived through it.
impl std::fmt::Debug for ResolvedConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ResolvedConfig")
            .field("week_start", &self.week_start)
            .field("date_format", &self.date_format)
            .field("bounds", &self.bounds)
            .field("initial_view", &self.initial_view)
            .finish_non_exhaustive()
    }
}

impl CalendarConfig {
    /// Validates the configuration.
    ///
    /// An unsupported calendar type is fatal. An invalid week start day,
    /// date format, or an initial view outside the detail bounds is each
    /// corrected to its default with a warning.
    pub(crate) fn resolve(self) -> Result<ResolvedConfig, ConfigError> {
        if self.calendar_type != "gregorian" {
            return Err(ConfigError::UnsupportedCalendarType(
                self.calendar_type.clone(),
            ));
        }

        let week_start = if self.week_start_day > 6 {
            warn!(
                week_start_day = self.week_start_day,
                "invalid week start day, defaulting to 0 (Sunday)"
            );
            Weekday::Sunday
        } else {
            Weekday::from_sunday_index(self.week_start_day as i32)
        };

        let date_format = match DateFormat::parse(&self.date_format) {
            Some(format) => format,
            None => {
                warn!(
                    date_format = %self.date_format,
                    "invalid date format, defaulting to mm/dd/yyyy"
                );
                DateFormat::default()
            }
        };

        let (max_detail, min_detail) = if self.max_detail > self.min_detail {
            warn!(
                max_detail = self.max_detail.name(),
                min_detail = self.min_detail.name(),
                "detail bounds are inverted, swapping"
            );
            (self.min_detail, self.max_detail)
        } else {
            (self.max_detail, self.min_detail)
        };

        let bounds = DrillBounds {
            max_detail,
            min_detail,
            disabled_views: self.disabled_views.clone(),
        };

        let initial_view = if bounds.allows(self.initial_view) {
            self.initial_view
        } else {
            warn!(
                view = self.initial_view.name(),
                "initial view outside the configured bounds, defaulting to month"
            );
            ViewGranularity::Month
        };

        Ok(ResolvedConfig {
            config: self,
            week_start,
            date_format,
            bounds,
            initial_view,
        })
    }
}
